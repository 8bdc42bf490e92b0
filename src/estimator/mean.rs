/// Arithmetic mean accumulated one value at a time.
///
/// Each update moves the current mean by `(v - mean) / count`, which avoids
/// summing large-magnitude values before dividing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningMean {
    mean: f64,
    count: usize,
}

impl RunningMean {
    /// Creates an empty `RunningMean`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates `value` into the mean.
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.mean += (value - self.mean) / self.count as f64;
    }

    /// Returns the mean of the values pushed so far, `0` if none were.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the number of values pushed so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Extend<f64> for RunningMean {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        iter.into_iter().for_each(|v| self.push(v));
    }
}

/// Computes the arithmetic mean of `values` in their original order.
///
/// # Returns
/// The mean, or `0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    let mut acc = RunningMean::new();
    acc.extend(values.iter().copied());
    acc.mean()
}
