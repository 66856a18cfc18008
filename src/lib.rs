/// A macro that generates a getter method for any `Copy` field.
///
/// # Parameters
///
/// - `$method_name` - The name of the getter method (e.g., get_solver)
/// - `$field_name` - The name of the field to access (e.g., solver)
/// - `$return_type` - The return type of the getter method
#[cfg(feature = "regression")]
macro_rules! get_field {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name
        }
    };
}

/// Error types returned by the image operations and the regression model
pub mod error;

pub use error::{ImageError, ModelError};

/// Module `imgproc` contains neighborhood and point operations on 8-bit images.
///
/// Images are `ndarray` arrays with shape `(height, width, channels)` ([`imgproc::Image`])
/// or `(height, width)` for single-channel data ([`imgproc::GrayImage`]).
///
/// # Convolution
/// - `Kernel` - Validated odd-sized weight matrices plus stock filters (box, Gaussian, Sobel, Laplacian, sharpen)
/// - `pad` / `BorderMode` - Border extension by constant fill, edge replication or reflection
/// - `apply_kernel` - Weighted sum of one neighborhood window
/// - `Convolver` / `convolve` - Same-size 2D convolution of every channel, saturated back to `u8`
///
/// # Point Operations
/// - `saturate` / `saturate_u8` - Rounding and clamping of real values into a sample range
/// - Saturating image arithmetic, weighted addition and alpha blending
/// - Lookup-table intensity transforms such as gamma correction
///
/// # Histograms
/// - Histogram computation, equalization and histogram matching
/// - Mean / standard deviation based contrast measurement
///
/// # Example
/// ```rust
/// use rustyimg::imgproc::*;
/// use ndarray::Array3;
///
/// let image = Array3::<u8>::from_elem((5, 5, 1), 100);
/// let kernel = Kernel::box_filter(3, 3).unwrap();
///
/// let smoothed = convolve(image.view(), &kernel).unwrap();
/// assert_eq!(smoothed[[2, 2, 0]], 100);
/// assert_eq!(smoothed[[0, 0, 0]], 44);
/// ```
#[cfg(feature = "imgproc")]
pub mod imgproc;

/// Linear regression by gradient descent or least squares.
///
/// # Example
/// ```rust
/// use rustyimg::regression::*;
/// use ndarray::array;
///
/// let mut model = LinearRegression::default();
/// let x = array![[1.0], [2.0], [3.0]];
/// let y = array![2.0, 4.0, 6.0];
/// model.fit(x.view(), y.view()).unwrap();
/// ```
#[cfg(feature = "regression")]
pub mod regression;

/// Traits shared by the models of this crate
#[cfg(feature = "regression")]
pub mod traits;

/// Built-in datasets.
///
/// # Available Datasets
///
/// - `housing` - Ten houses described by square footage and sale price, the
///   classic single-feature regression example
///
/// # Example
/// ```rust
/// use rustyimg::dataset::housing::load_housing;
///
/// let (headers, features, prices) = load_housing();
/// assert_eq!(headers.len(), 2);
/// assert_eq!(features.nrows(), prices.len());
/// ```
#[cfg(feature = "dataset")]
pub mod dataset;

/// A convenience module that re-exports the most commonly used types and functions.
///
/// # Examples
/// ```rust
/// use rustyimg::prelude::*;
///
/// let lut = gamma_lut(2.0).unwrap();
/// assert_eq!(lut[128], 64);
/// ```
pub mod prelude;
