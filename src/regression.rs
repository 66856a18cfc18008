pub use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Strategy used to estimate the coefficients of a linear model.
///
/// # Variants
///
/// - `GradientDescent` - Batch gradient descent on the mean squared error. Features are
///   standardized internally so a single learning rate works for inputs of any scale
///   (square footage and prices in the millions, for instance); the learned coefficients
///   are mapped back to the original feature scale.
/// - `NormalEquation` - Closed-form least squares solved through an SVD of the design matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum RegressionSolver {
    #[default]
    GradientDescent,
    NormalEquation,
}

/// This module provides helper functions for regression models
mod helper_function;
/// Linear regression module implementing gradient descent and least squares fits
pub mod linear_regression;

use helper_function::*;
pub use linear_regression::*;
