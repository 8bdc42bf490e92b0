/// Single-pass accumulator of the x variance and x/y covariance co-moments.
///
/// Observations are pushed one at a time; no deviation array is ever
/// materialised, so the accumulator works equally well on streams. The first
/// observation only seeds the means (its weight `(count - 1) / count` is `0`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoMoments {
    count: usize,
    x_mean: f64,
    y_mean: f64,
    /// Running sum of weighted squared x deviations.
    sxx: f64,
    /// Running sum of weighted x/y cross deviations.
    sxy: f64,
}

impl CoMoments {
    /// Creates an empty `CoMoments` accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates the observation `(x, y)`.
    pub fn push(&mut self, x: f64, y: f64) {
        self.count += 1;
        let n = self.count as f64;
        let r = (n - 1.) / n;

        let x_delta = x - self.x_mean;
        let y_delta = y - self.y_mean;

        self.sxx += r * x_delta * x_delta;
        self.sxy += r * x_delta * y_delta;

        self.x_mean += x_delta / n;
        self.y_mean += y_delta / n;
    }

    /// Returns the number of observations pushed so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the running mean of the explanatory variable.
    pub fn x_mean(&self) -> f64 {
        self.x_mean
    }

    /// Returns the running mean of the response variable.
    pub fn y_mean(&self) -> f64 {
        self.y_mean
    }

    /// Returns the population variance of x, `None` if nothing was pushed.
    pub fn x_variance(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sxx / self.count as f64)
    }

    /// Returns the population covariance of x and y, `None` if nothing was pushed.
    pub fn covariance(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sxy / self.count as f64)
    }

    /// Returns the least squares slope `Cov(x, y) / Var(x)`.
    ///
    /// # Returns
    /// `None` when x has no spread yet (fewer than two observations or all x equal).
    pub fn slope(&self) -> Option<f64> {
        (self.sxx != 0.).then(|| self.sxy / self.sxx)
    }
}

impl Extend<(f64, f64)> for CoMoments {
    fn extend<I: IntoIterator<Item = (f64, f64)>>(&mut self, iter: I) {
        iter.into_iter().for_each(|(x, y)| self.push(x, y));
    }
}
