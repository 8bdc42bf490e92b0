//! Least squares estimation of a single-predictor line.

mod comoment;
mod estimate;
mod mean;

pub use comoment::CoMoments;
pub use estimate::{Estimate, estimate};
pub use mean::{RunningMean, mean};

pub(crate) use estimate::check_observations;
