use super::*;
use ndarray::{ArrayBase, Data, Ix1, Ix2};

/// Performs validation checks on the input data matrices.
///
/// This function validates that:
/// - The input data matrix is not empty
/// - The input data does not contain NaN or infinite values
/// - When a target vector is provided:
///   - The target vector length matches the number of rows in the input data
///   - The target vector does not contain NaN or infinite values
///
/// # Parameters
///
/// - `x` - A 2D array of feature values where rows represent samples and columns represent features
/// - `y` - An optional 1D array representing the target value of each sample
///
/// # Returns
///
/// - `Ok(())` - If all validation checks pass
/// - `Err(ModelError::InputValidationError)` - If any validation check fails, with an informative error message
pub fn preliminary_check<S1, S2>(
    x: &ArrayBase<S1, Ix2>,
    y: Option<&ArrayBase<S2, Ix1>>,
) -> Result<(), ModelError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(ModelError::InputValidationError(
            "Input data is empty".to_string(),
        ));
    }

    if let Some(((i, j), val)) = x.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(ModelError::InputValidationError(format!(
            "Input data contains NaN or infinite value {} at position [{}][{}]",
            val, i, j
        )));
    }

    if let Some(y) = y {
        if y.len() != x.nrows() {
            return Err(ModelError::InputValidationError(format!(
                "Input data and target vector have different lengths, x rows: {}, y length: {}",
                x.nrows(),
                y.len()
            )));
        }

        if y.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::InputValidationError(
                "Target vector contains NaN or infinite values".to_string(),
            ));
        }
    }
    Ok(())
}

/// Validates that the learning rate parameter is positive and finite.
///
/// # Returns
///
/// - `Ok(())` - If the learning rate is valid (positive and finite)
/// - `Err(ModelError::InputValidationError)` - If the learning rate is invalid (non-positive, NaN, or infinite)
pub fn validate_learning_rate(learning_rate: f64) -> Result<(), ModelError> {
    if learning_rate <= 0.0 || !learning_rate.is_finite() {
        return Err(ModelError::InputValidationError(format!(
            "learning_rate must be positive and finite, got {}",
            learning_rate
        )));
    }

    Ok(())
}

/// Validates that the maximum iterations parameter is greater than zero.
pub fn validate_max_iterations(max_iterations: usize) -> Result<(), ModelError> {
    if max_iterations == 0 {
        return Err(ModelError::InputValidationError(
            "max_iterations must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validates that the tolerance parameter is positive and finite.
///
/// Training stops when the relative change in cost between iterations falls below this threshold.
pub fn validate_tolerance(tolerance: f64) -> Result<(), ModelError> {
    if tolerance <= 0.0 || !tolerance.is_finite() {
        return Err(ModelError::InputValidationError(format!(
            "tolerance must be positive and finite, got {}",
            tolerance
        )));
    }

    Ok(())
}
