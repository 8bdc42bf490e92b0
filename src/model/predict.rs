use serde::{Deserialize, Serialize};

use super::Model;

/// Options of the dynamic prediction entry points.
///
/// The typed API exposes each combination as its own method: `ci` maps to the
/// `*_interval*` methods and `copy = false` to the `*_in_place*` methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictOptions {
    /// Whether to pair every prediction with its confidence bounds.
    pub ci: bool,
    /// Whether to allocate a new output instead of overwriting the input.
    pub copy: bool,
}

impl Default for PredictOptions {
    fn default() -> Self {
        Self {
            ci: false,
            copy: true,
        }
    }
}

/// A predicted response together with its confidence bounds.
///
/// Interval estimation isn't implemented, the bounds are always `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionInterval {
    pub fit: f64,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl Model {
    /// Computes the predicted response `slope * x + intercept`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Computes the predicted response of `x` with its confidence bounds.
    pub fn predict_interval(&self, x: f64) -> PredictionInterval {
        PredictionInterval {
            fit: self.predict(x),
            lower: None,
            upper: None,
        }
    }

    /// Computes a predicted response for each value of `xs` into a new vector.
    pub fn predict_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }

    /// Computes a predicted response for each item, reading the explanatory
    /// value through `accessor`. `items` is left untouched.
    pub fn predict_all_by<T, F>(&self, items: &[T], accessor: F) -> Vec<f64>
    where
        F: Fn(&T) -> f64,
    {
        items.iter().map(|item| self.predict(accessor(item))).collect()
    }

    /// Computes a predicted response with confidence bounds for each value of `xs`.
    pub fn predict_intervals(&self, xs: &[f64]) -> Vec<PredictionInterval> {
        xs.iter().map(|&x| self.predict_interval(x)).collect()
    }

    /// Overwrites every value of `xs` with its predicted response.
    ///
    /// # Returns
    /// The same slice that was passed in; no new buffer is allocated.
    pub fn predict_in_place<'a>(&self, xs: &'a mut [f64]) -> &'a mut [f64] {
        xs.iter_mut().for_each(|x| *x = self.predict(*x));
        xs
    }

    /// Like [`Model::predict_in_place`], first passing each value through `accessor`.
    pub fn predict_in_place_by<'a, F>(&self, xs: &'a mut [f64], accessor: F) -> &'a mut [f64]
    where
        F: Fn(f64) -> f64,
    {
        xs.iter_mut().for_each(|x| *x = self.predict(accessor(*x)));
        xs
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;
    use crate::estimator::Estimate;

    fn model() -> Model {
        let params = Estimate {
            slope: 5.,
            intercept: 5.,
        };
        Model::new(vec![0., 4., 5.], vec![5., 25., 30.], 20., params).unwrap()
    }

    #[test]
    fn test_predict_single_values() {
        let m = model();
        assert_eq!(m.predict(0.), 5.);
        assert_eq!(m.predict(4.), 25.);
        assert_eq!(m.predict(5.), 30.);
    }

    #[test]
    fn test_predict_all_returns_new_vector() {
        let m = model();
        let xs = vec![0., 4., 5.];
        let ys = m.predict_all(&xs);

        assert_eq!(ys, vec![5., 25., 30.]);
        assert_eq!(xs, vec![0., 4., 5.]);
        assert!(!ptr::eq(xs.as_ptr(), ys.as_ptr()));
    }

    #[test]
    fn test_predict_in_place_aliases_input() {
        let m = model();
        let mut xs = vec![0., 4., 5.];
        let input = xs.as_ptr();

        let ys = m.predict_in_place(&mut xs);
        assert!(ptr::eq(input, ys.as_ptr()));
        assert_eq!(ys, &[5., 25., 30.]);
        assert_eq!(xs, vec![5., 25., 30.]);
    }

    #[test]
    fn test_predict_with_accessors() {
        let m = model();
        let items = [(0., "a"), (4., "b"), (5., "c")];
        assert_eq!(m.predict_all_by(&items, |d| d.0), vec![5., 25., 30.]);

        let mut xs = vec![0., 8., 10.];
        m.predict_in_place_by(&mut xs, |x| x / 2.);
        assert_eq!(xs, vec![5., 25., 30.]);
    }

    #[test]
    fn test_predict_intervals_have_no_bounds() {
        let m = model();
        let expected = PredictionInterval {
            fit: 25.,
            lower: None,
            upper: None,
        };
        assert_eq!(m.predict_interval(4.), expected);
        assert_eq!(m.predict_intervals(&[4.]), vec![expected]);
    }

    #[test]
    fn test_default_options_copy_without_ci() {
        let opts = PredictOptions::default();
        assert!(opts.copy);
        assert!(!opts.ci);

        let opts: PredictOptions = serde_json::from_str(r#"{"ci": true}"#).unwrap();
        assert_eq!(opts, PredictOptions { ci: true, copy: true });
    }
}
