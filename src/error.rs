/// Error types that can occur during image operations
///
/// # Variants
///
/// - `InvalidKernel` - Indicates that a kernel has an even or zero dimension, or carries unusable weights
/// - `EmptyImage` - Indicates that an input image has zero height, width or channel count
/// - `DimensionMismatch` - Indicates that two inputs of a binary operation do not share a shape
/// - `InputValidationError` - Indicates that some other argument does not meet the expected range or format
#[derive(Debug, Clone, PartialEq)]
pub enum ImageError {
    InvalidKernel(String),
    EmptyImage,
    DimensionMismatch(String),
    InputValidationError(String),
}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageError::InvalidKernel(msg) => write!(f, "Invalid kernel: {}", msg),
            ImageError::EmptyImage => {
                write!(f, "Image is empty. Height, width and channel count must all be non-zero.")
            }
            ImageError::DimensionMismatch(msg) => write!(f, "Dimension mismatch: {}", msg),
            ImageError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
        }
    }
}

/// Implements the standard error trait for ImageError
impl std::error::Error for ImageError {}

/// Error types that can occur during model operations
///
/// # Variants
///
/// - `NotFitted` - Indicates that the model has not been fitted yet
/// - `InputValidationError` - Indicates the input data provided does not meet the expected format, type, or validation rules
/// - `ProcessingError` - Indicates that something went wrong while fitting or predicting
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    NotFitted,
    InputValidationError(String),
    ProcessingError(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::NotFitted => {
                write!(
                    f,
                    "Model has not been fitted. Certain methods require the model to be fitted before use."
                )
            }
            ModelError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
            ModelError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

/// Implements the standard error trait for ModelError
impl std::error::Error for ModelError {}
