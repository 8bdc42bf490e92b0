use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::stats;

/// Number of estimated parameters of a single-predictor line.
pub const NUM_PARAMS: usize = 2;

/// Statistical summary of a fitted model.
///
/// Degrees of freedom follow the usual single-predictor convention: the model
/// has one explanatory variable, so `mdf = 1` and `rdf = N - 2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of observations.
    #[serde(rename = "N")]
    pub n: usize,
    /// Residual sum of squares.
    pub rss: f64,
    /// Model (explained) sum of squares.
    pub mss: f64,
    /// Total sum of squares.
    pub tss: f64,
    /// Coefficient of determination.
    pub rsq: f64,
    /// Total degrees of freedom.
    pub df: usize,
    /// Model degrees of freedom.
    pub mdf: usize,
    /// Residual degrees of freedom.
    pub rdf: usize,
    /// Adjusted coefficient of determination.
    pub arsq: f64,
    /// Sample variance of the response.
    pub variance: f64,
    /// Sample standard deviation of the response.
    pub stdev: f64,
    /// Model sample variance.
    pub mvariance: f64,
    /// Model sample standard deviation.
    pub mstdev: f64,
    /// Mean squared error.
    pub rvariance: f64,
    /// Root mean squared error.
    pub rstdev: f64,
    /// F statistic.
    pub fstat: f64,
}

impl Summary {
    /// Computes the summary of a fit.
    ///
    /// # Arguments
    /// * `fit` - The fitted values.
    /// * `residuals` - The residuals `y - fit`.
    /// * `y` - The observed response.
    /// * `y_mean` - The mean of the observed response.
    ///
    /// # Returns
    /// The summary; callers must ensure at least three observations so that every
    /// degree of freedom is positive.
    pub(crate) fn compute(
        fit: ArrayView1<f64>,
        residuals: ArrayView1<f64>,
        y: ArrayView1<f64>,
        y_mean: f64,
    ) -> Self {
        let n = y.len();
        let rss = stats::rss(residuals);
        let mss = stats::mss(fit, y_mean);
        let tss = stats::tss(y, y_mean);

        let df = n - 1;
        let mdf = NUM_PARAMS - 1;
        let rdf = n - NUM_PARAMS;

        let variance = tss / df as f64;
        let mvariance = mss / mdf as f64;
        let rvariance = rss / rdf as f64;

        Self {
            n,
            rss,
            mss,
            tss,
            rsq: stats::rsq(mss, tss),
            df,
            mdf,
            rdf,
            arsq: stats::arsq(mss, tss, mdf as f64, rdf as f64),
            variance,
            stdev: variance.sqrt(),
            mvariance,
            mstdev: mvariance.sqrt(),
            rvariance,
            rstdev: rvariance.sqrt(),
            fstat: mvariance / rvariance,
        }
    }

    /// Gaussian log likelihood of the fit.
    pub fn loglikelihood(&self) -> f64 {
        stats::loglikelihood(self.n as f64, self.rss)
    }

    /// Akaike information criterion.
    pub fn aic(&self) -> f64 {
        stats::aic(self.loglikelihood(), NUM_PARAMS as f64)
    }

    /// Small-sample corrected Akaike information criterion.
    ///
    /// # Returns
    /// `None` when `N <= 3`, where the correction term is undefined.
    pub fn aicc(&self) -> Option<f64> {
        (self.n > NUM_PARAMS + 1)
            .then(|| stats::aicc(self.loglikelihood(), self.n as f64, NUM_PARAMS as f64))
    }

    /// Bayesian information criterion.
    pub fn bic(&self) -> f64 {
        stats::bic(self.loglikelihood(), self.n as f64, NUM_PARAMS as f64)
    }
}
