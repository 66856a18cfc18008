use super::*;

/// Threshold for deciding when to spread a convolution over rayon workers.
/// If height * width * channels < threshold, rows are processed sequentially.
const CONVOLUTION_PARALLEL_THRESHOLD: usize = 10000;

/// Settings shared by every pass of a [`Convolver`]
///
/// # Fields
///
/// - `border` - How the image is extended before windows are taken, `Constant(0)` by default
/// - `rounding` - Rounding rule used when a response is committed to an 8-bit sample
/// - `parallel_threshold` - Number of output samples at which rows are computed in parallel
///
/// # Examples
/// ```rust
/// use rustyimg::imgproc::{BorderMode, ConvolutionConfig, Rounding};
///
/// let config = ConvolutionConfig {
///     border: BorderMode::Replicate,
///     ..ConvolutionConfig::default()
/// };
/// assert_eq!(config.rounding, Rounding::HalfAwayFromZero);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvolutionConfig {
    pub border: BorderMode,
    pub rounding: Rounding,
    pub parallel_threshold: usize,
}

impl Default for ConvolutionConfig {
    fn default() -> Self {
        Self {
            border: BorderMode::default(),
            rounding: Rounding::default(),
            parallel_threshold: CONVOLUTION_PARALLEL_THRESHOLD,
        }
    }
}

/// Applies a kernel to every pixel of an image
///
/// For each output coordinate `(y, x)` and channel, the convolver takes the
/// kernel-sized window of the padded image whose top-left corner is `(y, x)`,
/// multiplies it elementwise with the kernel and sums the products. The
/// kernel is applied as stored (correlation order), which is the same as a
/// true convolution for the symmetric kernels used in practice.
///
/// Every output pixel depends only on the read-only padded image and
/// kernel, so rows are split across rayon workers once the image is large
/// enough. The output is identical whichever path runs.
///
/// # Examples
/// ```rust
/// use ndarray::Array3;
/// use rustyimg::imgproc::{Convolver, Kernel};
///
/// let image = Array3::<u8>::from_elem((5, 5, 1), 100);
/// let blurred = Convolver::default()
///     .convolve(image.view(), &Kernel::box_filter(3, 3).unwrap())
///     .unwrap();
/// assert_eq!(blurred.dim(), (5, 5, 1));
/// assert_eq!(blurred[[2, 2, 0]], 100);
/// // the zero border pulls the corner down to 4/9 of the interior value
/// assert_eq!(blurred[[0, 0, 0]], 44);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Convolver {
    config: ConvolutionConfig,
}

impl Convolver {
    /// Creates a convolver with the given settings
    pub fn new(config: ConvolutionConfig) -> Self {
        Convolver { config }
    }

    /// Returns the settings this convolver runs with
    pub fn config(&self) -> &ConvolutionConfig {
        &self.config
    }

    /// Convolves an image and saturates every response into `u8`
    ///
    /// # Parameters
    ///
    /// - `image` - Input image with shape `(height, width, channels)`
    /// - `kernel` - The filter to apply, each channel independently
    ///
    /// # Returns
    ///
    /// - `Ok(Array3<u8>)` - Output with the same shape as `image`
    /// - `Err(ImageError::EmptyImage)` - If the image has a zero dimension
    pub fn convolve(&self, image: ArrayView3<u8>, kernel: &Kernel) -> Result<Array3<u8>, ImageError> {
        let rounding = self.config.rounding;
        self.drive(image, kernel, |response| saturate_cast::<u8>(response, rounding))
    }

    /// Convolves an image and returns the raw responses
    ///
    /// Nothing is rounded or clamped, which keeps the sign of derivative
    /// kernels such as [`Kernel::sobel_x`] and [`Kernel::laplacian`].
    ///
    /// # Returns
    ///
    /// - `Ok(Array3<f64>)` - Responses with the same shape as `image`
    /// - `Err(ImageError::EmptyImage)` - If the image has a zero dimension
    pub fn convolve_raw(
        &self,
        image: ArrayView3<u8>,
        kernel: &Kernel,
    ) -> Result<Array3<f64>, ImageError> {
        self.drive(image, kernel, |response| response)
    }

    /// Convolves a single-channel image given as a 2D array
    pub fn convolve_gray(
        &self,
        image: ArrayView2<u8>,
        kernel: &Kernel,
    ) -> Result<Array2<u8>, ImageError> {
        let output = self.convolve(image.insert_axis(Axis(2)), kernel)?;
        Ok(output.index_axis_move(Axis(2), 0))
    }

    /// Computes the Sobel gradient magnitude `sqrt(gx^2 + gy^2)` of every sample
    ///
    /// The horizontal and vertical Sobel responses are kept unsaturated until
    /// they are combined; only the magnitude is rounded and clamped.
    pub fn gradient_magnitude(&self, image: ArrayView3<u8>) -> Result<Array3<u8>, ImageError> {
        let gx = self.convolve_raw(image, &Kernel::sobel_x())?;
        let gy = self.convolve_raw(image, &Kernel::sobel_y())?;
        let rounding = self.config.rounding;
        Ok(Zip::from(&gx)
            .and(&gy)
            .map_collect(|&dx, &dy| saturate_cast::<u8>(dx.hypot(dy), rounding)))
    }

    /// Pads once, then fills the output row by row, committing each response through `commit`.
    fn drive<T, F>(
        &self,
        image: ArrayView3<u8>,
        kernel: &Kernel,
        commit: F,
    ) -> Result<Array3<T>, ImageError>
    where
        T: Copy + Default + Send + Sync,
        F: Fn(f64) -> T + Sync,
    {
        validate_image(&image)?;

        let (height, width, channels) = image.dim();
        let (pad_height, pad_width) = kernel.padding();
        let padded = pad(image, pad_height, pad_width, self.config.border)?;

        let kernel_height = kernel.height();
        let kernel_width = kernel.width();
        let weights = kernel.weights();

        let fill_row = |y: usize, mut row: ArrayViewMut2<T>| {
            for x in 0..width {
                for c in 0..channels {
                    let window = padded.window_unchecked(y, x, kernel_height, kernel_width, c);
                    row[[x, c]] = commit(weighted_sum(window, weights));
                }
            }
        };

        let mut output = Array3::<T>::default((height, width, channels));
        let parallel = use_parallel(height * width * channels, self.config.parallel_threshold);

        if parallel {
            output
                .axis_iter_mut(Axis(0))
                .into_par_iter()
                .enumerate()
                .for_each(|(y, row)| fill_row(y, row));
        } else {
            output
                .axis_iter_mut(Axis(0))
                .enumerate()
                .for_each(|(y, row)| fill_row(y, row));
        }

        debug!(
            "convolved {}x{}x{} image with {}x{} kernel ({:?} border, {} path)",
            height,
            width,
            channels,
            kernel_height,
            kernel_width,
            self.config.border,
            if parallel { "parallel" } else { "sequential" }
        );

        Ok(output)
    }
}

/// Reduces a window and a kernel to the sum of their elementwise product
///
/// # Parameters
///
/// - `window` - Image samples aligned with the kernel
/// - `kernel` - The weights
///
/// # Returns
///
/// - `Ok(f64)` - The weighted sum
/// - `Err(ImageError::DimensionMismatch)` - If the window and kernel shapes differ
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rustyimg::imgproc::{apply_kernel, Kernel};
///
/// let window = array![[1u8, 2, 3], [4, 5, 6], [7, 8, 9]];
/// let sum = apply_kernel(window.view(), &Kernel::box_filter(3, 3).unwrap()).unwrap();
/// assert!((sum - 5.0).abs() < 1e-12);
/// ```
pub fn apply_kernel(window: ArrayView2<u8>, kernel: &Kernel) -> Result<f64, ImageError> {
    if window.dim() != kernel.weights().dim() {
        return Err(ImageError::DimensionMismatch(format!(
            "window of shape {:?} does not match kernel of shape {:?}",
            window.dim(),
            kernel.weights().dim()
        )));
    }
    Ok(weighted_sum(window, kernel.weights()))
}

#[inline]
fn weighted_sum(window: ArrayView2<u8>, weights: ArrayView2<f64>) -> f64 {
    window
        .iter()
        .zip(weights.iter())
        .map(|(&sample, &weight)| f64::from(sample) * weight)
        .sum()
}

/// Convolves `image` with `kernel` using [`ConvolutionConfig::default`]
///
/// The border is zero-filled and responses are rounded half away from zero
/// before being clamped to `0..=255`.
pub fn convolve(image: ArrayView3<u8>, kernel: &Kernel) -> Result<Array3<u8>, ImageError> {
    Convolver::default().convolve(image, kernel)
}

/// Convolves `image` with `kernel` using [`ConvolutionConfig::default`] and keeps the raw responses.
pub fn convolve_raw(image: ArrayView3<u8>, kernel: &Kernel) -> Result<Array3<f64>, ImageError> {
    Convolver::default().convolve_raw(image, kernel)
}

/// Convolves a grayscale `image` with `kernel` using [`ConvolutionConfig::default`].
pub fn convolve_gray(image: ArrayView2<u8>, kernel: &Kernel) -> Result<Array2<u8>, ImageError> {
    Convolver::default().convolve_gray(image, kernel)
}
