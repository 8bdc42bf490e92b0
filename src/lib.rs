//! Simple linear regression with a single explanatory variable.
//!
//! [`lr`] and its siblings fit a [`Model`] from each accepted input shape,
//! estimating whichever of the slope and intercept isn't given as known. The
//! model keeps its own copy of the data and computes fitted values, residuals
//! and summary statistics lazily on first access.
//!
//! ```
//! use linear_regression::{FitOptions, lr};
//!
//! let model = lr(&[1., 2., 3., 4., 5.], &[2., 4., 6., 8., 10.], FitOptions::new())?;
//! assert!((model.slope() - 2.).abs() < 1e-12);
//! assert!((model.predict(6.) - 12.).abs() < 1e-12);
//! # Ok::<(), linear_regression::RegressionErr>(())
//! ```

mod error;
pub mod estimator;
mod fit;
pub mod input;
pub mod json;
mod model;
pub mod stats;
#[cfg(test)]
mod testing;

pub use error::{RegressionErr, Result};
pub use estimator::{CoMoments, Estimate, RunningMean, estimate, mean};
pub use fit::{fit, lr, lr_by, lr_pairs_by, lr_zipped};
pub use input::{Accessors, FitOptions, Observations};
pub use model::{
    Model, NUM_PARAMS, ParamInterval, PredictOptions, PredictionInterval, Summary,
};
