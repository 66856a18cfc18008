use super::*;

/// A small matrix of real-valued weights defining a local linear filter
///
/// Both dimensions are odd and at least 1, so every kernel has a unique
/// center element. A `Kernel` can only be built through the validating
/// constructors below.
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rustyimg::imgproc::kernel::Kernel;
///
/// let kernel = Kernel::new(array![[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]]).unwrap();
/// assert_eq!(kernel.anchor(), (1, 1));
/// assert_eq!(kernel.padding(), (1, 1));
///
/// // even dimensions have no center
/// assert!(Kernel::new(array![[1.0, 1.0], [1.0, 1.0]]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Array2<f64>,
}

impl Kernel {
    /// Creates a kernel from a weight matrix
    ///
    /// # Returns
    ///
    /// - `Ok(Kernel)` - The validated kernel
    /// - `Err(ImageError::InvalidKernel)` - If a dimension is zero or even, or a weight is NaN or infinite
    pub fn new(weights: Array2<f64>) -> Result<Self, ImageError> {
        let (height, width) = weights.dim();
        validate_kernel_dimension("height", height)?;
        validate_kernel_dimension("width", width)?;

        if let Some(((i, j), w)) = weights.indexed_iter().find(|(_, w)| !w.is_finite()) {
            return Err(ImageError::InvalidKernel(format!(
                "weight at [{}][{}] is not finite: {}",
                i, j, w
            )));
        }

        Ok(Kernel { weights })
    }

    /// Creates a kernel from row-major values
    pub fn from_vec(height: usize, width: usize, values: Vec<f64>) -> Result<Self, ImageError> {
        let weights = Array2::from_shape_vec((height, width), values).map_err(|e| {
            ImageError::InvalidKernel(format!(
                "cannot shape values into a {}x{} kernel: {}",
                height, width, e
            ))
        })?;
        Self::new(weights)
    }

    /// Creates a kernel with all weight on the center element
    ///
    /// Convolving with it reproduces the input exactly.
    pub fn identity(height: usize, width: usize) -> Result<Self, ImageError> {
        validate_kernel_dimension("height", height)?;
        validate_kernel_dimension("width", width)?;
        let mut weights = Array2::zeros((height, width));
        weights[[height / 2, width / 2]] = 1.0;
        Ok(Kernel { weights })
    }

    /// Creates a uniform averaging kernel where every weight is `1 / (height * width)`
    pub fn box_filter(height: usize, width: usize) -> Result<Self, ImageError> {
        validate_kernel_dimension("height", height)?;
        validate_kernel_dimension("width", width)?;
        let weight = 1.0 / (height * width) as f64;
        Ok(Kernel {
            weights: Array2::from_elem((height, width), weight),
        })
    }

    /// Creates a square, normalized Gaussian kernel
    ///
    /// The kernel is the outer product of a 1D Gaussian of length `size`
    /// with itself, scaled so the weights sum to 1.
    ///
    /// # Parameters
    ///
    /// - `size` - Side length, must be odd
    /// - `sigma` - Standard deviation in pixels, must be positive and finite
    pub fn gaussian(size: usize, sigma: f64) -> Result<Self, ImageError> {
        validate_kernel_dimension("size", size)?;
        if sigma <= 0.0 || !sigma.is_finite() {
            return Err(ImageError::InvalidKernel(format!(
                "sigma must be positive and finite, got {}",
                sigma
            )));
        }

        let half = (size / 2) as f64;
        let two_sigma_sq = 2.0 * sigma * sigma;
        let taps = Array1::from_shape_fn(size, |i| {
            let d = i as f64 - half;
            (-d * d / two_sigma_sq).exp()
        });
        let taps = &taps / taps.sum();

        let column = taps.view().insert_axis(Axis(1));
        let row = taps.view().insert_axis(Axis(0));
        Ok(Kernel {
            weights: column.dot(&row),
        })
    }

    /// The 3x3 binomial blur `[[1, 2, 1], [2, 4, 2], [1, 2, 1]] / 16`
    pub fn gaussian_3x3() -> Self {
        Kernel {
            weights: array![[1.0, 2.0, 1.0], [2.0, 4.0, 2.0], [1.0, 2.0, 1.0]] / 16.0,
        }
    }

    /// Horizontal Sobel derivative; responds to vertical edges
    pub fn sobel_x() -> Self {
        Kernel {
            weights: array![[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]],
        }
    }

    /// Vertical Sobel derivative; responds to horizontal edges
    pub fn sobel_y() -> Self {
        Kernel {
            weights: array![[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]],
        }
    }

    /// 4-neighbour Laplacian
    pub fn laplacian() -> Self {
        Kernel {
            weights: array![[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]],
        }
    }

    /// 3x3 sharpening kernel (identity plus negated Laplacian)
    pub fn sharpen() -> Self {
        Kernel {
            weights: array![[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]],
        }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.weights.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.weights.ncols()
    }

    /// Position of the center element as `(row, column)`
    pub fn anchor(&self) -> (usize, usize) {
        (self.height() / 2, self.width() / 2)
    }

    /// Padding each side of an image needs so every output pixel has a full window
    ///
    /// Equal to `(height / 2, width / 2)`.
    pub fn padding(&self) -> (usize, usize) {
        self.anchor()
    }

    /// Borrowed view of the weights
    pub fn weights(&self) -> ArrayView2<'_, f64> {
        self.weights.view()
    }

    /// Sum of all weights
    pub fn sum(&self) -> f64 {
        self.weights.sum()
    }

    /// Returns a copy scaled so its weights sum to 1
    ///
    /// # Returns
    ///
    /// - `Ok(Kernel)` - The normalized kernel
    /// - `Err(ImageError::InvalidKernel)` - If the weights sum to zero (derivative kernels, for instance)
    pub fn normalized(&self) -> Result<Self, ImageError> {
        let sum = self.sum();
        if sum.abs() < f64::EPSILON {
            return Err(ImageError::InvalidKernel(
                "cannot normalize a kernel whose weights sum to zero".to_string(),
            ));
        }
        Ok(Kernel {
            weights: &self.weights / sum,
        })
    }
}

fn validate_kernel_dimension(name: &str, value: usize) -> Result<(), ImageError> {
    if value == 0 || value % 2 == 0 {
        return Err(ImageError::InvalidKernel(format!(
            "kernel {} must be odd and at least 1, got {}",
            name, value
        )));
    }
    Ok(())
}
