//! Entry points fitting a [`Model`] from each accepted call shape.

use log::debug;

use crate::{
    Model, Result,
    estimator::{estimate, mean},
    input::{Accessors, FitOptions, Observations},
};

/// Computes the least squares estimator of a linear model with a single
/// explanatory variable.
///
/// # Arguments
/// * `x` - The explanatory variable (regressor).
/// * `y` - The response variable.
/// * `options` - Parameters to take as known instead of estimating.
///
/// # Returns
/// The fitted model, which holds its own copy of the data.
///
/// # Errors
/// * `LengthMismatch` if `x` and `y` differ in length.
/// * `InvalidArgument` if a value or option isn't a finite number.
/// * `DegenerateInput` if the data can't determine the unknown parameters.
pub fn lr(x: &[f64], y: &[f64], options: FitOptions) -> Result<Model> {
    fit(Observations::new(x.to_vec(), y.to_vec())?, options)
}

/// Like [`lr`], reading the observations from zipped `(x, y)` pairs.
pub fn lr_zipped(pairs: &[(f64, f64)], options: FitOptions) -> Result<Model> {
    fit(Observations::from_pairs(pairs)?, options)
}

/// Like [`lr`], reading both values of each record through `accessors`.
pub fn lr_by<T, FX, FY>(
    records: &[T],
    accessors: &Accessors<FX, FY>,
    options: FitOptions,
) -> Result<Model>
where
    FX: Fn(&T) -> f64,
    FY: Fn(&T) -> f64,
{
    fit(Observations::from_records(records, accessors)?, options)
}

/// Like [`lr`], reading explanatory and response records through their accessors.
pub fn lr_pairs_by<T, U, FX, FY>(
    xs: &[T],
    ys: &[U],
    accessors: &Accessors<FX, FY>,
    options: FitOptions,
) -> Result<Model>
where
    FX: Fn(&T) -> f64,
    FY: Fn(&U) -> f64,
{
    fit(Observations::from_record_pairs(xs, ys, accessors)?, options)
}

/// Fits a model to already normalised observations.
pub fn fit(observations: Observations, options: FitOptions) -> Result<Model> {
    options.validate()?;

    debug!(
        n = observations.len();
        "fitting linear regression, known slope={:?} intercept={:?}",
        options.slope,
        options.intercept
    );

    let params = estimate(
        observations.x(),
        observations.y(),
        options.slope,
        options.intercept,
    )?;
    debug!("resolved slope={} intercept={}", params.slope, params.intercept);

    let y_mean = mean(observations.y());
    let (x, y) = observations.into_parts();
    Model::new(x, y, y_mean, params)
}
