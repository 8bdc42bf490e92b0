//! Normalisation of the accepted call shapes into canonical observations.

use serde::{Deserialize, Serialize};

use crate::{RegressionErr, Result, estimator::check_observations};

/// Options of a regression fit.
///
/// A parameter given here is taken as known and is not estimated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FitOptions {
    pub slope: Option<f64>,
    pub intercept: Option<f64>,
}

impl FitOptions {
    /// Creates options that estimate both parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the slope.
    pub fn with_slope(mut self, slope: f64) -> Self {
        self.slope = Some(slope);
        self
    }

    /// Fixes the intercept.
    pub fn with_intercept(mut self, intercept: f64) -> Self {
        self.intercept = Some(intercept);
        self
    }

    /// Checks that every provided parameter is a finite number.
    ///
    /// # Errors
    /// `InvalidArgument` naming the first offending option.
    pub fn validate(&self) -> Result<()> {
        for (what, value) in [("slope", self.slope), ("intercept", self.intercept)] {
            if let Some(v) = value.filter(|v| !v.is_finite()) {
                return Err(RegressionErr::invalid(
                    what,
                    format!("must be numeric, got {v}"),
                ));
            }
        }

        Ok(())
    }
}

/// Functions extracting the explanatory and response values from a record.
#[derive(Debug, Clone, Copy)]
pub struct Accessors<FX, FY> {
    pub x: FX,
    pub y: FY,
}

impl<FX, FY> Accessors<FX, FY> {
    pub fn new(x: FX, y: FY) -> Self {
        Self { x, y }
    }
}

/// Two equal-length, non-empty sequences of finite numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Observations {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Observations {
    /// Creates observations from the explanatory and response values.
    ///
    /// # Errors
    /// * `LengthMismatch` if `x` and `y` differ in length.
    /// * `DegenerateInput` if they are empty.
    /// * `InvalidArgument` if any value isn't finite.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        check_observations(&x, &y)?;
        Ok(Self { x, y })
    }

    /// Creates observations from zipped `(x, y)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        let (x, y) = pairs.iter().copied().unzip();
        Self::new(x, y)
    }

    /// Creates observations by reading both values of each record through `accessors`.
    pub fn from_records<T, FX, FY>(records: &[T], accessors: &Accessors<FX, FY>) -> Result<Self>
    where
        FX: Fn(&T) -> f64,
        FY: Fn(&T) -> f64,
    {
        let x = records.iter().map(&accessors.x).collect();
        let y = records.iter().map(&accessors.y).collect();
        Self::new(x, y)
    }

    /// Creates observations from separate explanatory and response records, each
    /// read through its accessor.
    pub fn from_record_pairs<T, U, FX, FY>(
        xs: &[T],
        ys: &[U],
        accessors: &Accessors<FX, FY>,
    ) -> Result<Self>
    where
        FX: Fn(&T) -> f64,
        FY: Fn(&U) -> f64,
    {
        if xs.len() != ys.len() {
            return Err(RegressionErr::LengthMismatch {
                x: xs.len(),
                y: ys.len(),
            });
        }

        let x = xs.iter().map(&accessors.x).collect();
        let y = ys.iter().map(&accessors.y).collect();
        Self::new(x, y)
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Observations are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Splits the observations into `(x, y)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }
}
