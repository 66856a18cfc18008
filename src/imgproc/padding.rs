use super::*;

/// Defines how the cells outside the image are filled when it is padded.
///
/// # Variants
///
/// - `Constant(value)` - Every border cell holds `value`
/// - `Replicate` - Border cells copy the nearest edge pixel (`aaa|abcd|ddd`)
/// - `Reflect101` - Border cells mirror the image about the edge pixel without repeating it (`dcb|abcd|cba`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderMode {
    Constant(u8),
    Replicate,
    Reflect101,
}

impl Default for BorderMode {
    fn default() -> Self {
        BorderMode::Constant(0)
    }
}

impl BorderMode {
    /// Maps a signed source index onto `[0, len)`.
    ///
    /// Only meaningful for the modes that read from the image; `len` must be non-zero.
    fn source_index(self, index: isize, len: usize) -> usize {
        let last = len as isize - 1;
        match self {
            BorderMode::Constant(_) | BorderMode::Replicate => index.clamp(0, last) as usize,
            BorderMode::Reflect101 => {
                if len == 1 {
                    return 0;
                }
                let period = 2 * last;
                let folded = index.rem_euclid(period);
                if folded > last {
                    (period - folded) as usize
                } else {
                    folded as usize
                }
            }
        }
    }
}

/// An image extended on every side so that each output coordinate owns a
/// complete neighborhood window.
///
/// The samples live in a single contiguous allocation of shape
/// `(height + 2 * pad_height, width + 2 * pad_width, channels)`; the source
/// image sits at offset `(pad_height, pad_width)`.
#[derive(Debug, Clone)]
pub struct PaddedImage {
    data: Array3<u8>,
    pad_height: usize,
    pad_width: usize,
}

impl PaddedImage {
    /// Rows added above (and below) the source image
    pub fn pad_height(&self) -> usize {
        self.pad_height
    }

    /// Columns added left (and right) of the source image
    pub fn pad_width(&self) -> usize {
        self.pad_width
    }

    /// Shape of the padded buffer as `(height, width, channels)`
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// The whole padded buffer, border included
    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// Extracts the window of one channel aligned with output coordinate `(y, x)`
    ///
    /// The window spans padded rows `[y, y + window_height)` and columns
    /// `[x, x + window_width)`, so output coordinate `(0, 0)` maps directly
    /// onto the top-left corner of the padded buffer.
    ///
    /// # Parameters
    ///
    /// - `y` - Output row
    /// - `x` - Output column
    /// - `window_height` - Number of rows in the window (the kernel height)
    /// - `window_width` - Number of columns in the window (the kernel width)
    /// - `channel` - Channel to sample
    ///
    /// # Returns
    ///
    /// - `Ok(ArrayView2<u8>)` - A borrowed view of the window
    /// - `Err(ImageError::InputValidationError)` - If the window or channel falls outside the padded buffer
    pub fn window(
        &self,
        y: usize,
        x: usize,
        window_height: usize,
        window_width: usize,
        channel: usize,
    ) -> Result<ArrayView2<'_, u8>, ImageError> {
        let (height, width, channels) = self.data.dim();
        if window_height == 0 || window_width == 0 {
            return Err(ImageError::InputValidationError(
                "window dimensions must be non-zero".to_string(),
            ));
        }
        let rows_fit = y
            .checked_add(window_height)
            .is_some_and(|end| end <= height);
        let cols_fit = x.checked_add(window_width).is_some_and(|end| end <= width);
        if !rows_fit || !cols_fit || channel >= channels {
            return Err(ImageError::InputValidationError(format!(
                "window at ({}, {}) of size {}x{} on channel {} exceeds padded image of shape {}x{}x{}",
                y, x, window_height, window_width, channel, height, width, channels
            )));
        }
        Ok(self.window_unchecked(y, x, window_height, window_width, channel))
    }

    /// Window extraction for callers that guarantee the bounds by construction.
    #[inline]
    pub(crate) fn window_unchecked(
        &self,
        y: usize,
        x: usize,
        window_height: usize,
        window_width: usize,
        channel: usize,
    ) -> ArrayView2<'_, u8> {
        self.data
            .slice(s![y..y + window_height, x..x + window_width, channel])
    }
}

/// Pads an image on every side according to `border`
///
/// # Parameters
///
/// - `image` - Source image with shape `(height, width, channels)`
/// - `pad_height` - Rows added above and below
/// - `pad_width` - Columns added left and right
/// - `border` - How the new cells are filled
///
/// # Returns
///
/// - `Ok(PaddedImage)` - Image of shape `(height + 2 * pad_height, width + 2 * pad_width, channels)`
/// - `Err(ImageError::EmptyImage)` - If the image has a zero dimension
/// - `Err(ImageError::InputValidationError)` - If the padded shape does not fit in `usize`
///
/// # Examples
/// ```rust
/// use ndarray::Array3;
/// use rustyimg::imgproc::padding::{pad, BorderMode};
///
/// let image = Array3::<u8>::from_elem((2, 3, 1), 7);
/// let padded = pad(image.view(), 1, 2, BorderMode::Constant(0)).unwrap();
/// assert_eq!(padded.dim(), (4, 7, 1));
/// assert_eq!(padded.view()[[0, 0, 0]], 0);
/// assert_eq!(padded.view()[[1, 2, 0]], 7);
/// ```
pub fn pad(
    image: ArrayView3<u8>,
    pad_height: usize,
    pad_width: usize,
    border: BorderMode,
) -> Result<PaddedImage, ImageError> {
    validate_image(&image)?;

    let (height, width, channels) = image.dim();
    let padded_height = padded_extent(height, pad_height).ok_or_else(|| {
        ImageError::InputValidationError(format!(
            "padding height {} overflows for image height {}",
            pad_height, height
        ))
    })?;
    let padded_width = padded_extent(width, pad_width).ok_or_else(|| {
        ImageError::InputValidationError(format!(
            "padding width {} overflows for image width {}",
            pad_width, width
        ))
    })?;
    let padded_shape = (padded_height, padded_width, channels);

    let data = match border {
        BorderMode::Constant(value) => {
            let mut data = Array3::from_elem(padded_shape, value);
            data.slice_mut(s![
                pad_height..pad_height + height,
                pad_width..pad_width + width,
                ..
            ])
            .assign(&image);
            data
        }
        BorderMode::Replicate | BorderMode::Reflect101 => {
            Array3::from_shape_fn(padded_shape, |(py, px, c)| {
                let sy = border.source_index(py as isize - pad_height as isize, height);
                let sx = border.source_index(px as isize - pad_width as isize, width);
                image[[sy, sx, c]]
            })
        }
    };

    Ok(PaddedImage {
        data,
        pad_height,
        pad_width,
    })
}

/// `len + 2 * pad`, or `None` on overflow
fn padded_extent(len: usize, pad: usize) -> Option<usize> {
    pad.checked_mul(2)?.checked_add(len)
}
