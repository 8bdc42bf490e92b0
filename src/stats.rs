//! Sum-of-squares and goodness-of-fit statistics.

use std::f64::consts::PI;

use ndarray::ArrayView1;

/// Residual sum of squares, also known as the sum of squared errors.
pub fn rss(residuals: ArrayView1<f64>) -> f64 {
    residuals.iter().map(|r| r * r).sum()
}

/// Model (explained) sum of squares of the `fit` around the response mean `y_mean`.
pub fn mss(fit: ArrayView1<f64>, y_mean: f64) -> f64 {
    squared_deviations(fit, y_mean)
}

/// Total sum of squares of the response `y` around its mean `y_mean`.
pub fn tss(y: ArrayView1<f64>, y_mean: f64) -> f64 {
    squared_deviations(y, y_mean)
}

fn squared_deviations(values: ArrayView1<f64>, center: f64) -> f64 {
    values
        .iter()
        .map(|v| {
            let delta = v - center;
            delta * delta
        })
        .sum()
}

/// Coefficient of determination.
pub fn rsq(mss: f64, tss: f64) -> f64 {
    mss / tss
}

/// Adjusted coefficient of determination, penalised by the model and residual
/// degrees of freedom.
pub fn arsq(mss: f64, tss: f64, mdf: f64, rdf: f64) -> f64 {
    let r2 = rsq(mss, tss);
    r2 - (1. - r2) * (mdf / rdf)
}

/// Gaussian log likelihood of a fit with `n` observations and residual sum of squares `rss`.
pub fn loglikelihood(n: f64, rss: f64) -> f64 {
    -n / 2. * ((rss / n * 2. * PI).ln() + 1.)
}

/// Akaike information criterion for log likelihood `ll` and `k` parameters.
pub fn aic(ll: f64, k: f64) -> f64 {
    2. * (k - ll)
}

/// Akaike information criterion corrected for a finite sample of `n` observations.
pub fn aicc(ll: f64, n: f64, k: f64) -> f64 {
    aic(ll, k) + (2. * k * (k + 1.)) / (n - k - 1.)
}

/// Bayesian information criterion.
pub fn bic(ll: f64, n: f64, k: f64) -> f64 {
    -2. * ll + k * n.ln()
}
