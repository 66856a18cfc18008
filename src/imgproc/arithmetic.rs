use super::*;

/// Combines two same-shaped images sample by sample, switching to rayon for large inputs.
fn combine<S1, S2, D, F>(
    a: &ArrayBase<S1, D>,
    b: &ArrayBase<S2, D>,
    op: F,
) -> Result<Array<u8, D>, ImageError>
where
    S1: Data<Elem = u8>,
    S2: Data<Elem = u8>,
    D: Dimension,
    F: Fn(u8, u8) -> u8 + Sync + Send,
{
    validate_same_shape(a, b)?;
    let zip = Zip::from(a).and(b);
    if use_parallel(a.len(), ELEMENTWISE_PARALLEL_THRESHOLD) {
        Ok(zip.par_map_collect(|&x, &y| op(x, y)))
    } else {
        Ok(zip.map_collect(|&x, &y| op(x, y)))
    }
}

/// Adds two images, clamping each sum at 255 instead of wrapping
///
/// # Parameters
///
/// - `a` - First operand
/// - `b` - Second operand, same shape as `a`
///
/// # Returns
///
/// - `Ok(Array<u8, D>)` - Per-sample `min(a + b, 255)`
/// - `Err(ImageError::EmptyImage)` - If either operand is empty
/// - `Err(ImageError::DimensionMismatch)` - If the shapes differ
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rustyimg::imgproc::saturating_add;
///
/// let a = array![[200u8, 10], [255, 0]];
/// let b = array![[100u8, 20], [1, 0]];
/// assert_eq!(saturating_add(&a, &b).unwrap(), array![[255u8, 30], [255, 0]]);
/// ```
pub fn saturating_add<S1, S2, D>(
    a: &ArrayBase<S1, D>,
    b: &ArrayBase<S2, D>,
) -> Result<Array<u8, D>, ImageError>
where
    S1: Data<Elem = u8>,
    S2: Data<Elem = u8>,
    D: Dimension,
{
    combine(a, b, |x, y| x.saturating_add(y))
}

/// Subtracts `b` from `a`, clamping each difference at 0 instead of wrapping
pub fn saturating_subtract<S1, S2, D>(
    a: &ArrayBase<S1, D>,
    b: &ArrayBase<S2, D>,
) -> Result<Array<u8, D>, ImageError>
where
    S1: Data<Elem = u8>,
    S2: Data<Elem = u8>,
    D: Dimension,
{
    combine(a, b, |x, y| x.saturating_sub(y))
}

/// Multiplies two images, clamping each product at 255
pub fn saturating_multiply<S1, S2, D>(
    a: &ArrayBase<S1, D>,
    b: &ArrayBase<S2, D>,
) -> Result<Array<u8, D>, ImageError>
where
    S1: Data<Elem = u8>,
    S2: Data<Elem = u8>,
    D: Dimension,
{
    combine(a, b, |x, y| x.saturating_mul(y))
}

/// Divides `a` by `b`, rounding each quotient half away from zero
///
/// A zero divisor yields 0, so the result is always a valid sample.
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rustyimg::imgproc::saturating_divide;
///
/// let a = array![[100u8, 7, 9]];
/// let b = array![[20u8, 2, 0]];
/// assert_eq!(saturating_divide(&a, &b).unwrap(), array![[5u8, 4, 0]]);
/// ```
pub fn saturating_divide<S1, S2, D>(
    a: &ArrayBase<S1, D>,
    b: &ArrayBase<S2, D>,
) -> Result<Array<u8, D>, ImageError>
where
    S1: Data<Elem = u8>,
    S2: Data<Elem = u8>,
    D: Dimension,
{
    combine(a, b, |x, y| {
        if y == 0 {
            0
        } else {
            saturate_u8(f64::from(x) / f64::from(y))
        }
    })
}

/// Adds a real offset to every sample and saturates the result
///
/// A positive `offset` brightens, a negative one darkens.
///
/// # Returns
///
/// - `Ok(Array<u8, D>)` - Per-sample `saturate(v + offset)`
/// - `Err(ImageError::EmptyImage)` - If the image is empty
/// - `Err(ImageError::InputValidationError)` - If `offset` is NaN or infinite
pub fn add_scalar<S, D>(image: &ArrayBase<S, D>, offset: f64) -> Result<Array<u8, D>, ImageError>
where
    S: Data<Elem = u8>,
    D: Dimension,
{
    validate_image(image)?;
    validate_finite("offset", offset)?;
    Ok(image.mapv(|v| saturate_u8(f64::from(v) + offset)))
}

/// Computes `src1 * alpha + src2 * beta + gamma` with scalar weights and saturates each sample
///
/// # Parameters
///
/// - `src1` - First image
/// - `alpha` - Weight of the first image
/// - `src2` - Second image, same shape as `src1`
/// - `beta` - Weight of the second image
/// - `gamma` - Offset added to every weighted sum
///
/// # Returns
///
/// - `Ok(Array<u8, D>)` - The blended image
/// - `Err(ImageError::EmptyImage)` - If either image is empty
/// - `Err(ImageError::DimensionMismatch)` - If the shapes differ
/// - `Err(ImageError::InputValidationError)` - If a weight is NaN or infinite
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rustyimg::imgproc::add_weighted;
///
/// let a = array![[100u8, 200]];
/// let b = array![[50u8, 250]];
/// let blended = add_weighted(&a, 0.5, &b, 0.5, 0.0).unwrap();
/// assert_eq!(blended, array![[75u8, 225]]);
/// ```
pub fn add_weighted<S1, S2, D>(
    src1: &ArrayBase<S1, D>,
    alpha: f64,
    src2: &ArrayBase<S2, D>,
    beta: f64,
    gamma: f64,
) -> Result<Array<u8, D>, ImageError>
where
    S1: Data<Elem = u8>,
    S2: Data<Elem = u8>,
    D: Dimension,
{
    validate_finite("alpha", alpha)?;
    validate_finite("beta", beta)?;
    validate_finite("gamma", gamma)?;
    combine(src1, src2, |x, y| {
        saturate_u8(f64::from(x) * alpha + f64::from(y) * beta + gamma)
    })
}

/// Blends two images with a weight per pixel: `src1 * alpha[y, x] + src2 * beta[y, x] + gamma`
///
/// The weight maps are 2D and apply to every channel of the pixel they
/// cover. Their shape must equal the images' `(height, width)`; nothing is
/// broadcast.
///
/// # Parameters
///
/// - `src1` - First image with shape `(height, width, channels)`
/// - `alpha` - Per-pixel weights for `src1`, shape `(height, width)`
/// - `src2` - Second image, same shape as `src1`
/// - `beta` - Per-pixel weights for `src2`, shape `(height, width)`
/// - `gamma` - Offset added to every weighted sum
///
/// # Returns
///
/// - `Ok(Array3<u8>)` - The blended image
/// - `Err(ImageError::EmptyImage)` - If either image is empty
/// - `Err(ImageError::DimensionMismatch)` - If the images or weight maps disagree in shape
/// - `Err(ImageError::InputValidationError)` - If a weight or `gamma` is NaN or infinite
pub fn add_weighted_per_pixel(
    src1: ArrayView3<u8>,
    alpha: ArrayView2<f64>,
    src2: ArrayView3<u8>,
    beta: ArrayView2<f64>,
    gamma: f64,
) -> Result<Array3<u8>, ImageError> {
    validate_same_shape(&src1, &src2)?;
    validate_finite("gamma", gamma)?;

    let (height, width, channels) = src1.dim();
    for (name, map) in [("alpha", alpha.view()), ("beta", beta.view())] {
        if map.dim() != (height, width) {
            return Err(ImageError::DimensionMismatch(format!(
                "{} map of shape {:?} does not match image of shape {:?}",
                name,
                map.dim(),
                (height, width)
            )));
        }
        if map.iter().any(|w| !w.is_finite()) {
            return Err(ImageError::InputValidationError(format!(
                "{} map contains NaN or infinite values",
                name
            )));
        }
    }

    let mut output = Array3::<u8>::zeros((height, width, channels));
    let blend_row = |y: usize, mut row: ArrayViewMut2<u8>| {
        for x in 0..width {
            let a = alpha[[y, x]];
            let b = beta[[y, x]];
            for c in 0..channels {
                let value = f64::from(src1[[y, x, c]]) * a + f64::from(src2[[y, x, c]]) * b + gamma;
                row[[x, c]] = saturate_u8(value);
            }
        }
    };

    if use_parallel(output.len(), ELEMENTWISE_PARALLEL_THRESHOLD) {
        output
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(y, row)| blend_row(y, row));
    } else {
        output
            .axis_iter_mut(Axis(0))
            .enumerate()
            .for_each(|(y, row)| blend_row(y, row));
    }

    Ok(output)
}

/// Composites `foreground` over `background` through an alpha mask
///
/// Each pixel becomes `foreground * mask + background * (1 - mask)`.
///
/// # Parameters
///
/// - `foreground` - Image shown where the mask is 1
/// - `background` - Image shown where the mask is 0, same shape as `foreground`
/// - `mask` - Opacity of the foreground per pixel, in `[0, 1]`, shape `(height, width)`
///
/// # Returns
///
/// - `Ok(Array3<u8>)` - The composite
/// - `Err(ImageError::InputValidationError)` - If a mask value is outside `[0, 1]`
/// - Any error of [`add_weighted_per_pixel`]
pub fn alpha_blend(
    foreground: ArrayView3<u8>,
    background: ArrayView3<u8>,
    mask: ArrayView2<f64>,
) -> Result<Array3<u8>, ImageError> {
    if let Some(m) = mask.iter().find(|m| !(0.0..=1.0).contains(*m)) {
        return Err(ImageError::InputValidationError(format!(
            "alpha mask values must lie in [0, 1], found {}",
            m
        )));
    }
    let inverse = mask.mapv(|m| 1.0 - m);
    add_weighted_per_pixel(foreground, mask, background, inverse.view(), 0.0)
}

/// Converts an 8-bit mask (0 = transparent, 255 = opaque) into alpha weights in `[0, 1]`.
pub fn mask_to_alpha(mask: ArrayView2<u8>) -> Array2<f64> {
    mask.mapv(|m| f64::from(m) / 255.0)
}
