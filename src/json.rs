//! Dynamic boundary over [`serde_json::Value`] inputs.
//!
//! Accepts the loosely typed call shapes of a scripting caller (two arrays, a
//! zipped array, an array of records with accessors, an options record) and
//! normalises them before reaching the estimator. Record accessors are keys:
//! an object field name or an array index.

use log::debug;
use serde_json::{Map, Value};

use crate::{
    Model, PredictOptions, RegressionErr, Result,
    fit::fit,
    input::{FitOptions, Observations},
};

/// A key selecting one value out of a JSON record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Field(String),
    Index(usize),
}

impl Key {
    fn parse(what: &'static str, value: &Value) -> Result<Self> {
        match value {
            Value::String(name) => Ok(Key::Field(name.clone())),
            Value::Number(n) => n
                .as_u64()
                .and_then(|i| usize::try_from(i).ok())
                .map(Key::Index)
                .ok_or_else(|| RegressionErr::invalid(what, format!("invalid index: {n}"))),
            other => Err(RegressionErr::invalid(
                what,
                format!("must be a field name or an index, got {other}"),
            )),
        }
    }

    fn get<'v>(&self, record: &'v Value) -> Option<&'v Value> {
        match self {
            Key::Field(name) => record.get(name),
            Key::Index(i) => record.get(*i),
        }
    }
}

/// Fits a model from dynamic arguments.
///
/// # Arguments
/// * `data` - The explanatory array, or a zipped/record array when `second`
///   is absent or is the options record.
/// * `second` - The response array, or the options record.
/// * `options` - The options record, requires `second` to be the response array.
///
/// # Errors
/// * `InvalidArgument` if an argument or option has the wrong type, or an
///   element doesn't resolve to a finite number.
/// * `LengthMismatch` if the explanatory and response arrays differ in length.
/// * `DegenerateInput` as in [`crate::estimate`].
pub fn lr_value(data: &Value, second: Option<&Value>, options: Option<&Value>) -> Result<Model> {
    let data = as_array("x", data)?;

    let (y, options) = match (second, options) {
        (None, None) => (None, None),
        (Some(Value::Array(y)), options) => (Some(y), options),
        (Some(opts @ Value::Object(_)), None) => (None, Some(opts)),
        (Some(other), None) => {
            return Err(RegressionErr::invalid(
                "y",
                format!("must be a response array or an options record, got {other}"),
            ));
        }
        (Some(other), Some(_)) => {
            return Err(RegressionErr::invalid(
                "y",
                format!("must be an array, got {other}"),
            ));
        }
        (None, Some(options)) => (None, Some(options)),
    };

    let options = options.map(as_object).transpose()?;
    let (fit_options, accessors) = parse_fit_options(options)?;

    match y {
        Some(y) if y.len() != data.len() => {
            return Err(RegressionErr::LengthMismatch {
                x: data.len(),
                y: y.len(),
            });
        }
        _ => {}
    }

    // Without a response array the records carry both values, `[x, y]` by default.
    let (x_key, y_key) = match y {
        Some(_) => accessors,
        None => (
            accessors.0.or(Some(Key::Index(0))),
            accessors.1.or(Some(Key::Index(1))),
        ),
    };

    let x = extract("x", data, x_key.as_ref())?;
    let y = extract("y", y.unwrap_or(data), y_key.as_ref())?;
    debug!(n = x.len(); "normalised dynamic regression input");

    fit(Observations::new(x, y)?, fit_options)
}

fn as_array<'v>(what: &'static str, value: &'v Value) -> Result<&'v Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| RegressionErr::invalid(what, format!("must be an array, got {value}")))
}

fn as_object(value: &Value) -> Result<&Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        RegressionErr::invalid("options", format!("must be a record, got {value}"))
    })
}

fn as_bool(what: &'static str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| RegressionErr::invalid(what, format!("must be a boolean, got {value}")))
}

fn as_number(what: &'static str, value: &Value) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| RegressionErr::invalid(what, format!("must be numeric, got {value}")))
}

type KeyPair = (Option<Key>, Option<Key>);

fn parse_fit_options(options: Option<&Map<String, Value>>) -> Result<(FitOptions, KeyPair)> {
    let mut fit_options = FitOptions::new();
    let mut keys = (None, None);

    let Some(options) = options else {
        return Ok((fit_options, keys));
    };

    if let Some(accessors) = options.get("accessors") {
        let accessors = accessors.as_object().ok_or_else(|| {
            RegressionErr::invalid("accessors", format!("must be a record, got {accessors}"))
        })?;

        keys.0 = accessors
            .get("x")
            .map(|k| Key::parse("x accessor", k))
            .transpose()?;
        keys.1 = accessors
            .get("y")
            .map(|k| Key::parse("y accessor", k))
            .transpose()?;
    }

    if let Some(slope) = options.get("slope") {
        fit_options.slope = Some(as_number("slope", slope)?);
    }
    if let Some(intercept) = options.get("intercept") {
        fit_options.intercept = Some(as_number("intercept", intercept)?);
    }

    Ok((fit_options, keys))
}

fn extract(what: &'static str, values: &[Value], key: Option<&Key>) -> Result<Vec<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let value = match key {
                Some(key) => key.get(value).ok_or_else(|| {
                    RegressionErr::invalid(what, format!("element {i} has no value at {key:?}"))
                })?,
                None => value,
            };

            value.as_f64().ok_or_else(|| {
                RegressionErr::invalid(what, format!("element {i} is not numeric: {value}"))
            })
        })
        .collect()
}

/// Parses the options record of [`predict_value`].
///
/// # Errors
/// `InvalidArgument` if `options` isn't a record, `accessor` isn't a key, or
/// `ci`/`copy` aren't booleans.
pub fn parse_predict_options(options: &Value) -> Result<(PredictOptions, Option<Key>)> {
    let options = as_object(options)?;
    let mut parsed = PredictOptions::default();

    let accessor = options
        .get("accessor")
        .map(|k| Key::parse("accessor", k))
        .transpose()?;

    if let Some(ci) = options.get("ci") {
        parsed.ci = as_bool("ci", ci)?;
    }
    if let Some(copy) = options.get("copy") {
        parsed.copy = as_bool("copy", copy)?;
    }

    Ok((parsed, accessor))
}

/// Computes predicted responses from a dynamic input.
///
/// A number yields a number, or `[prediction, lower, upper]` when `ci` is set.
/// An array yields an array of those. With `copy` unset the input array's
/// storage is reused and returned instead of allocating a new one.
///
/// # Errors
/// `InvalidArgument` if `input` is neither a number nor an array, an element
/// doesn't resolve to a number, or the options are malformed.
pub fn predict_value(model: &Model, input: Value, options: Option<&Value>) -> Result<Value> {
    let (options, accessor) = match options {
        Some(options) => parse_predict_options(options)?,
        None => (PredictOptions::default(), None),
    };

    let render = |x: f64| -> Value {
        if options.ci {
            let p = model.predict_interval(x);
            Value::from(vec![Value::from(p.fit), Value::from(p.lower), Value::from(p.upper)])
        } else {
            Value::from(model.predict(x))
        }
    };

    let resolve = |i: usize, value: &Value| -> Result<f64> {
        let value = match &accessor {
            Some(key) => key.get(value).ok_or_else(|| {
                RegressionErr::invalid("input", format!("element {i} has no value at {key:?}"))
            })?,
            None => value,
        };
        as_number("input", value)
    };

    match input {
        Value::Number(n) => n
            .as_f64()
            .map(render)
            .ok_or_else(|| RegressionErr::invalid("input", format!("not representable: {n}"))),
        Value::Array(mut values) if !options.copy => {
            for (i, value) in values.iter_mut().enumerate() {
                *value = render(resolve(i, value)?);
            }
            Ok(Value::Array(values))
        }
        Value::Array(values) => values
            .iter()
            .enumerate()
            .map(|(i, value)| resolve(i, value).map(&render))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        other => Err(RegressionErr::invalid(
            "input",
            format!("must be a number or an array of numbers, got {other}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::{assert_all_close, assert_close};

    #[test]
    fn test_two_arrays() {
        let m = lr_value(&json!([1, 2, 3, 4, 5]), Some(&json!([2, 4, 6, 8, 10])), None).unwrap();
        assert_close(m.slope(), 2.);
        assert_close(m.intercept(), 0.);
    }

    #[test]
    fn test_zipped_array() {
        let m = lr_value(&json!([[1, 5], [2, 4], [3, 3], [4, 2], [5, 1]]), None, None).unwrap();
        assert_close(m.slope(), -1.);
        assert_close(m.intercept(), 6.);
    }

    #[test]
    fn test_records_with_accessors_and_options() {
        let data = json!([
            {"t": 1, "v": 11},
            {"t": 2, "v": 21},
            {"t": 3, "v": 31},
        ]);
        let options = json!({"accessors": {"x": "t", "y": "v"}, "slope": 10});

        let m = lr_value(&data, Some(&options), None).unwrap();
        assert_eq!(m.slope(), 10.);
        assert_close(m.intercept(), 1.);
    }

    #[test]
    fn test_separate_arrays_with_index_accessors() {
        let x = json!([[0, 1], [0, 2], [0, 3]]);
        let y = json!([[2], [4], [6]]);
        let options = json!({"accessors": {"x": 1, "y": 0}, "intercept": 0});

        let m = lr_value(&x, Some(&y), Some(&options)).unwrap();
        assert_eq!(m.intercept(), 0.);
        assert_close(m.slope(), 2.);
    }

    #[test]
    fn test_rejects_non_array_data() {
        for data in [json!("1,2,3"), json!(null), json!(true), json!({"x": [1, 2]})] {
            let err = lr_value(&data, Some(&json!([1, 2])), None).unwrap_err();
            assert!(matches!(err, RegressionErr::InvalidArgument { what: "x", .. }));
        }
    }

    #[test]
    fn test_rejects_non_numeric_elements() {
        let err = lr_value(&json!([1, "2", 3]), Some(&json!([1, 2, 3])), None).unwrap_err();
        assert!(matches!(err, RegressionErr::InvalidArgument { what: "x", .. }));

        let err = lr_value(&json!([1, 2, 3]), Some(&json!([1, null, 3])), None).unwrap_err();
        assert!(matches!(err, RegressionErr::InvalidArgument { what: "y", .. }));
    }

    #[test]
    fn test_rejects_mismatched_lengths() {
        let err = lr_value(&json!([1, 2, 3]), Some(&json!([1, 2])), None).unwrap_err();
        assert_eq!(err, RegressionErr::LengthMismatch { x: 3, y: 2 });
    }

    #[test]
    fn test_key_indices_must_be_non_negative_integers() {
        assert_eq!(Key::parse("x accessor", &json!(3)).unwrap(), Key::Index(3));
        assert_eq!(
            Key::parse("x accessor", &json!("t")).unwrap(),
            Key::Field("t".to_string())
        );

        for key in [json!(-1), json!(1.5)] {
            let err = Key::parse("x accessor", &key).unwrap_err();
            assert!(matches!(err, RegressionErr::InvalidArgument { what: "x accessor", .. }));
        }
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_rejects_index_beyond_usize() {
        let err = Key::parse("accessor", &json!(u64::MAX)).unwrap_err();
        assert!(matches!(err, RegressionErr::InvalidArgument { what: "accessor", .. }));
    }

    #[test]
    fn test_rejects_malformed_options() {
        let x = json!([1, 2, 3]);
        let y = json!([1, 2, 3]);

        let err = lr_value(&x, Some(&y), Some(&json!({"slope": "5"}))).unwrap_err();
        assert!(matches!(err, RegressionErr::InvalidArgument { what: "slope", .. }));

        let err = lr_value(&x, Some(&y), Some(&json!([1]))).unwrap_err();
        assert!(matches!(err, RegressionErr::InvalidArgument { what: "options", .. }));

        let err = lr_value(&x, Some(&y), Some(&json!({"accessors": {"x": true}}))).unwrap_err();
        assert!(matches!(err, RegressionErr::InvalidArgument { what: "x accessor", .. }));
    }

    fn model() -> Model {
        lr_value(&json!([0, 4, 5]), Some(&json!([5, 25, 30])), None).unwrap()
    }

    #[test]
    fn test_predict_number() {
        let m = model();
        let v = predict_value(&m, json!(4), None).unwrap();
        assert_close(v.as_f64().unwrap(), 25.);

        let v = predict_value(&m, json!(4), Some(&json!({"ci": true}))).unwrap();
        let v = v.as_array().unwrap();
        assert_eq!(v.len(), 3);
        assert_close(v[0].as_f64().unwrap(), 25.);
        assert!(v[1].is_null() && v[2].is_null());
    }

    #[test]
    fn test_predict_array_with_accessor() {
        let m = model();
        let input = json!([{"t": 0}, {"t": 4}, {"t": 5}]);
        let v = predict_value(&m, input, Some(&json!({"accessor": "t"}))).unwrap();

        let fitted: Vec<f64> = v
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect();
        assert_all_close(&fitted, &[5., 25., 30.]);
    }

    #[test]
    fn test_predict_without_copy_reuses_storage() {
        let m = model();
        let values = vec![json!(0), json!(4), json!(5)];
        let storage = values.as_ptr();

        let v = predict_value(&m, Value::Array(values), Some(&json!({"copy": false}))).unwrap();
        let Value::Array(out) = v else {
            panic!("expected an array, got {v}");
        };
        assert_eq!(out.as_ptr(), storage);
        assert_close(out[1].as_f64().unwrap(), 25.);
    }

    #[test]
    fn test_predict_rejects_invalid_input() {
        let m = model();

        let err = predict_value(&m, json!("4"), None).unwrap_err();
        assert!(matches!(err, RegressionErr::InvalidArgument { what: "input", .. }));

        let err = predict_value(&m, json!([1, "2"]), None).unwrap_err();
        assert!(matches!(err, RegressionErr::InvalidArgument { what: "input", .. }));

        let err = predict_value(&m, json!(1), Some(&json!(true))).unwrap_err();
        assert!(matches!(err, RegressionErr::InvalidArgument { what: "options", .. }));

        let err = predict_value(&m, json!(1), Some(&json!({"ci": 1}))).unwrap_err();
        assert!(matches!(err, RegressionErr::InvalidArgument { what: "ci", .. }));

        let err = predict_value(&m, json!([1]), Some(&json!({"accessor": [0]}))).unwrap_err();
        assert!(matches!(err, RegressionErr::InvalidArgument { what: "accessor", .. }));
    }
}
