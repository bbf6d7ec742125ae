//! This crate provides the data shape shared by the generator and the regression engine

#![deny(unused_imports, unused_crate_dependencies)]
#![warn(missing_docs)]

use nalgebra::Vector4;

mod observation;

pub use observation::{Observation, ObservationSet};

/// Number of fitted coefficients: the intercept followed by the three features
pub const NUM_COEFFICIENTS: usize = 4;

/// Human readable names of the coefficients, in coefficient order
pub const COEFFICIENT_NAMES: [&str; NUM_COEFFICIENTS] = ["Intercept", "X1", "X2", "X3"];

/// Fitted coefficients `[intercept, b1, b2, b3]`
pub type Coefficients = Vector4<f64>;
