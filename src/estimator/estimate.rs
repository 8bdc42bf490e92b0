use super::{CoMoments, mean};
use crate::{RegressionErr, Result};

/// The resolved parameters of a fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub slope: f64,
    pub intercept: f64,
}

/// Checks the structural preconditions shared by every estimation branch.
///
/// # Errors
/// * `LengthMismatch` if `x` and `y` differ in length.
/// * `DegenerateInput` if there are no observations.
/// * `InvalidArgument` if any element isn't a finite number.
pub(crate) fn check_observations(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(RegressionErr::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }

    if x.is_empty() {
        return Err(RegressionErr::too_few("observations", 0, 1));
    }

    check_finite("x", x)?;
    check_finite("y", y)
}

fn check_finite(what: &'static str, values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(RegressionErr::invalid(
            what,
            format!("element {i} is not a finite number: {}", values[i]),
        )),
        None => Ok(()),
    }
}

/// Resolves the slope and intercept of the least squares line through `(x, y)`.
///
/// Parameters passed as `Some` are taken as known and only the remaining ones
/// are estimated:
///
/// | slope | intercept | result |
/// |---|---|---|
/// | known | known | both used as-is |
/// | `0` | unknown | `intercept = mean(y)` |
/// | known | unknown | `intercept = mean(y) - slope * mean(x)` |
/// | unknown | known | `slope = (mean(y) - intercept) / mean(x)` |
/// | unknown | unknown | `slope = Cov(x, y) / Var(x)`, `intercept = mean(y) - slope * mean(x)` |
///
/// # Arguments
/// * `x` - The explanatory variable.
/// * `y` - The response variable.
/// * `slope` - A known slope, if any.
/// * `intercept` - A known intercept, if any.
///
/// # Returns
/// The resolved `Estimate` or an error if the input can't support it.
///
/// # Errors
/// * `LengthMismatch`, `InvalidArgument` as in the observation checks.
/// * `InvalidArgument` if a known parameter isn't finite.
/// * `DegenerateInput` if both parameters are unknown and x has no spread
///   (fewer than two observations or all equal), or if only the intercept is
///   known and `mean(x)` is zero.
pub fn estimate(
    x: &[f64],
    y: &[f64],
    slope: Option<f64>,
    intercept: Option<f64>,
) -> Result<Estimate> {
    check_observations(x, y)?;

    if let Some(s) = slope.filter(|s| !s.is_finite()) {
        return Err(RegressionErr::invalid("slope", format!("must be finite, got {s}")));
    }
    if let Some(b) = intercept.filter(|b| !b.is_finite()) {
        return Err(RegressionErr::invalid(
            "intercept",
            format!("must be finite, got {b}"),
        ));
    }

    let estimate = match (slope, intercept) {
        (Some(slope), Some(intercept)) => Estimate { slope, intercept },
        (Some(slope), None) if slope == 0. => Estimate {
            slope,
            intercept: mean(y),
        },
        (Some(slope), None) => Estimate {
            slope,
            intercept: mean(y) - slope * mean(x),
        },
        (None, Some(intercept)) => {
            let x_mean = mean(x);
            if x_mean == 0. {
                return Err(RegressionErr::degenerate(
                    "x",
                    "the slope through a fixed intercept is undefined when mean(x) is 0",
                ));
            }

            Estimate {
                slope: (mean(y) - intercept) / x_mean,
                intercept,
            }
        }
        (None, None) => ordinary_least_squares(x, y)?,
    };

    Ok(estimate)
}

fn ordinary_least_squares(x: &[f64], y: &[f64]) -> Result<Estimate> {
    if x.len() < 2 {
        return Err(RegressionErr::too_few("observations", x.len(), 2));
    }

    let mut acc = CoMoments::new();
    acc.extend(x.iter().copied().zip(y.iter().copied()));

    let slope = acc.slope().ok_or_else(|| {
        RegressionErr::degenerate("x", "all explanatory values are equal, the slope is undefined")
    })?;

    Ok(Estimate {
        slope,
        intercept: mean(y) - slope * mean(x),
    })
}
