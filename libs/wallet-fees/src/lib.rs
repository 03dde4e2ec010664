//! Transaction mass accounting and mempool-driven fee-rate estimation.
//!
//! [`mass`] is the minimum-fee side: a pure affine function of input/output
//! counts and payload length. [`estimator`] is the adaptive side: a
//! TTL-cached percentile estimator over recent mempool samples.

pub mod estimator;
pub mod mass;

pub use estimator::{FeeEstimator, FeeRecommendations, MempoolEntry, Priority};
pub use mass::{calculate_mass, min_fee};
