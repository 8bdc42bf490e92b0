//! The fitted model and its lazily derived statistics.

mod display;
mod lazy;
mod predict;
mod summary;

use std::sync::Arc;

use log::trace;
use ndarray::Array1;

use crate::{RegressionErr, Result, estimator::Estimate};
use lazy::Lazy;

pub use predict::{PredictOptions, PredictionInterval};
pub use summary::{NUM_PARAMS, Summary};

/// Confidence bounds of one model parameter.
///
/// Interval estimation isn't implemented, both bounds are always `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParamInterval {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

/// A fitted single-predictor linear regression model.
///
/// The model owns private copies of the observations and never mutates them.
/// Derived attributes (`fit`, `residuals`, `ci`, `summary`) are computed on
/// first access, cached for the lifetime of the model and handed out as fresh
/// copies, so callers can't alias the internal state.
#[derive(Debug)]
pub struct Model {
    x: Array1<f64>,
    y: Array1<f64>,
    y_mean: f64,
    slope: f64,
    intercept: f64,
    fit: Lazy<Array1<f64>>,
    residuals: Lazy<Array1<f64>>,
    ci: Lazy<[ParamInterval; NUM_PARAMS]>,
    summary: Lazy<Summary>,
}

impl Model {
    /// Creates a new `Model`.
    ///
    /// # Arguments
    /// * `x` - The explanatory variable.
    /// * `y` - The response variable.
    /// * `y_mean` - The mean of `y`, used as the centre of the sums of squares.
    /// * `params` - The resolved slope and intercept.
    ///
    /// # Returns
    /// A new `Model` instance or an error if the observations or parameters are invalid.
    ///
    /// # Errors
    /// * `LengthMismatch` if `x` and `y` differ in length.
    /// * `DegenerateInput` if there are no observations.
    /// * `InvalidArgument` if any value isn't finite.
    pub fn new(x: Vec<f64>, y: Vec<f64>, y_mean: f64, params: Estimate) -> Result<Self> {
        crate::estimator::check_observations(&x, &y)?;

        for (what, value) in [
            ("y_mean", y_mean),
            ("slope", params.slope),
            ("intercept", params.intercept),
        ] {
            if !value.is_finite() {
                return Err(RegressionErr::invalid(
                    what,
                    format!("must be finite, got {value}"),
                ));
            }
        }

        Ok(Self {
            x: Array1::from(x),
            y: Array1::from(y),
            y_mean,
            slope: params.slope,
            intercept: params.intercept,
            fit: Lazy::new(),
            residuals: Lazy::new(),
            ci: Lazy::new(),
            summary: Lazy::new(),
        })
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// A model always holds at least one observation.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the model parameters as `[intercept, slope]`.
    pub fn params(&self) -> [f64; NUM_PARAMS] {
        [self.intercept, self.slope]
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Returns a copy of the fitted values `slope * x + intercept`.
    pub fn fit(&self) -> Vec<f64> {
        self.cached_fit().to_vec()
    }

    /// Returns a copy of the residuals `y - fit`.
    pub fn residuals(&self) -> Vec<f64> {
        self.cached_residuals().to_vec()
    }

    /// Returns the confidence intervals of `[intercept, slope]`.
    pub fn ci(&self) -> [ParamInterval; NUM_PARAMS] {
        *self.ci.get(|| {
            trace!("materialising parameter confidence intervals");
            [ParamInterval::default(); NUM_PARAMS]
        })
    }

    /// Returns a copy of the model's statistical summary.
    ///
    /// # Errors
    /// `DegenerateInput` if the model has fewer than three observations, as the
    /// residual degrees of freedom `N - 2` must be positive.
    pub fn summary(&self) -> Result<Summary> {
        let n = self.len();
        if n <= NUM_PARAMS {
            return Err(RegressionErr::too_few("summary observations", n, NUM_PARAMS + 1));
        }

        let summary = self.summary.get(|| {
            trace!("materialising summary");
            let fit = self.cached_fit();
            let residuals = self.cached_residuals();
            Summary::compute(fit.view(), residuals.view(), self.y.view(), self.y_mean)
        });
        Ok(Summary::clone(&summary))
    }

    fn cached_fit(&self) -> Arc<Array1<f64>> {
        self.fit.get(|| {
            trace!("materialising fit");
            self.x.mapv(|v| self.slope * v + self.intercept)
        })
    }

    fn cached_residuals(&self) -> Arc<Array1<f64>> {
        self.residuals.get(|| {
            trace!("materialising residuals");
            &self.y - &*self.cached_fit()
        })
    }

    #[cfg(test)]
    fn computed(&self) -> [bool; 4] {
        [
            self.fit.is_computed(),
            self.residuals.is_computed(),
            self.ci.is_computed(),
            self.summary.is_computed(),
        ]
    }
}
