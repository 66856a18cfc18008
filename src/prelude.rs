/// Prelude module for image processing.
#[cfg(feature = "imgproc")]
pub mod imgproc_prelude;
/// Prelude module for regression models.
#[cfg(feature = "regression")]
pub mod regression_prelude;
/// Prelude module for built-in datasets.
#[cfg(feature = "dataset")]
pub mod dataset_prelude;

pub use crate::error::{ImageError, ModelError};
#[cfg(feature = "dataset")]
pub use dataset_prelude::*;
#[cfg(feature = "imgproc")]
pub use imgproc_prelude::*;
#[cfg(feature = "regression")]
pub use regression_prelude::*;
