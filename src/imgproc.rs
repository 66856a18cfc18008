pub use crate::error::ImageError;
use log::{debug, warn};
use ndarray::{
    Array, Array1, Array2, Array3, ArrayBase, ArrayView1, ArrayView2, ArrayView3, ArrayViewMut2,
    Axis, Data, Dimension, Zip, array, s,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// An 8-bit image with shape `(height, width, channels)`
pub type Image = Array3<u8>;

/// A single-channel 8-bit image with shape `(height, width)`
pub type GrayImage = Array2<u8>;

/// Saturating arithmetic between images and alpha blending
pub mod arithmetic;
/// Driver that slides a kernel over every pixel of an image
pub mod convolution;
/// Input checks shared by the image operations
mod helper_function;
/// Histogram statistics, equalization and histogram matching
pub mod histogram;
/// Lookup-table based intensity remapping such as gamma correction
pub mod intensity;
/// Validated convolution kernels and stock filters
pub mod kernel;
/// Border extension and neighborhood window extraction
pub mod padding;
/// Rounding and clamping of real values into sample ranges
pub mod saturate;

pub use arithmetic::*;
pub use convolution::*;
pub use histogram::*;
pub use intensity::*;
pub use kernel::*;
pub use padding::*;
pub use saturate::*;

use helper_function::*;
