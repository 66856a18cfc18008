use super::*;

/// Sample count at which elementwise image operations switch to rayon.
pub const ELEMENTWISE_PARALLEL_THRESHOLD: usize = 64 * 64;

/// Verifies that no axis of `image` has length zero.
///
/// # Returns
///
/// - `Ok(())` - If every dimension is non-zero
/// - `Err(ImageError::EmptyImage)` - Otherwise
pub fn validate_image<S, D>(image: &ArrayBase<S, D>) -> Result<(), ImageError>
where
    S: Data<Elem = u8>,
    D: Dimension,
{
    if image.shape().iter().any(|&len| len == 0) {
        return Err(ImageError::EmptyImage);
    }
    Ok(())
}

/// Verifies that both operands of a binary operation are non-empty and share a shape.
///
/// Shapes are never broadcast.
///
/// # Returns
///
/// - `Ok(())` - If the shapes are identical and non-empty
/// - `Err(ImageError::EmptyImage)` - If either operand is empty
/// - `Err(ImageError::DimensionMismatch)` - If the shapes differ
pub fn validate_same_shape<S1, S2, D>(
    a: &ArrayBase<S1, D>,
    b: &ArrayBase<S2, D>,
) -> Result<(), ImageError>
where
    S1: Data<Elem = u8>,
    S2: Data<Elem = u8>,
    D: Dimension,
{
    validate_image(a)?;
    validate_image(b)?;
    if a.shape() != b.shape() {
        return Err(ImageError::DimensionMismatch(format!(
            "input images must have the same shape, got {:?} and {:?}",
            a.shape(),
            b.shape()
        )));
    }
    Ok(())
}

/// Rejects NaN and infinite scalar arguments.
pub fn validate_finite(name: &str, value: f64) -> Result<(), ImageError> {
    if !value.is_finite() {
        return Err(ImageError::InputValidationError(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Decides whether a workload of `len` samples is worth dispatching to rayon.
#[inline]
pub fn use_parallel(len: usize, threshold: usize) -> bool {
    len >= threshold
}
