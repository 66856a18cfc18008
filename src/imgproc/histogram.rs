use super::*;
use statrs::statistics::Statistics;

/// Number of intensity levels of an 8-bit image
pub const LEVELS: usize = 256;

/// Contrast (standard deviation over mean) below which an image counts as low contrast
pub const LOW_CONTRAST_THRESHOLD: f64 = 0.5;

/// Counts how often each of the 256 levels occurs in `image`
///
/// All channels are pooled; use [`channel_histograms`] for one histogram per channel.
///
/// # Returns
///
/// - `Ok(Array1<u64>)` - 256 bin counts summing to the number of samples
/// - `Err(ImageError::EmptyImage)` - If the image is empty
pub fn histogram<S, D>(image: &ArrayBase<S, D>) -> Result<Array1<u64>, ImageError>
where
    S: Data<Elem = u8>,
    D: Dimension,
{
    validate_image(image)?;
    let mut bins = Array1::<u64>::zeros(LEVELS);
    for &v in image.iter() {
        bins[v as usize] += 1;
    }
    Ok(bins)
}

/// Computes a 256-bin histogram per channel
///
/// # Returns
///
/// - `Ok(Array2<u64>)` - Shape `(channels, 256)`; row `c` is the histogram of channel `c`
/// - `Err(ImageError::EmptyImage)` - If the image is empty
pub fn channel_histograms(image: ArrayView3<u8>) -> Result<Array2<u64>, ImageError> {
    validate_image(&image)?;
    let channels = image.dim().2;
    let rows: Vec<Array1<u64>> = (0..channels)
        .into_par_iter()
        .map(|c| histogram(&image.index_axis(Axis(2), c)))
        .collect::<Result<_, _>>()?;

    let mut out = Array2::<u64>::zeros((channels, LEVELS));
    for (c, row) in rows.into_iter().enumerate() {
        out.row_mut(c).assign(&row);
    }
    Ok(out)
}

/// Cumulative distribution of a histogram, normalized by its total
///
/// # Returns
///
/// - `Ok(Array1<f64>)` - Non-decreasing values ending in 1.0
/// - `Err(ImageError::InputValidationError)` - If the histogram is empty or all bins are zero
pub fn cumulative_distribution(hist: ArrayView1<u64>) -> Result<Array1<f64>, ImageError> {
    let mut running = 0u64;
    let cdf: Vec<u64> = hist
        .iter()
        .map(|&count| {
            running += count;
            running
        })
        .collect();

    if running == 0 {
        return Err(ImageError::InputValidationError(
            "cannot build a distribution from an empty histogram".to_string(),
        ));
    }
    let total = running as f64;
    Ok(cdf.into_iter().map(|c| c as f64 / total).collect())
}

/// Global histogram equalization of a grayscale image
///
/// Levels are remapped through `round(255 * (cdf[v] - cdf_min) / (n - cdf_min))`
/// where `cdf_min` is the count of the darkest occupied level. An image with
/// a single level maps entirely to 0.
///
/// # Returns
///
/// - `Ok(Array2<u8>)` - The equalized image
/// - `Err(ImageError::EmptyImage)` - If the image is empty
pub fn equalize_histogram(image: ArrayView2<u8>) -> Result<Array2<u8>, ImageError> {
    let hist = histogram(&image)?;
    let total = image.len() as f64;

    let mut running = 0u64;
    let cdf: Vec<u64> = hist
        .iter()
        .map(|&count| {
            running += count;
            running
        })
        .collect();
    let cdf_min = cdf.iter().copied().find(|&c| c > 0).unwrap_or(0) as f64;

    let denom = total - cdf_min;
    let lut: LookUpTable = if denom <= 0.0 {
        [0u8; 256]
    } else {
        build_lut(|level| (cdf[level as usize] as f64 - cdf_min) / denom * 255.0)
    };

    apply_lut(&image, &lut)
}

/// Reshapes the intensity distribution of `input` to follow that of `reference`
///
/// For every level `v`, the normalized CDF value of `v` in the input is
/// located on the reference CDF and the corresponding (linearly
/// interpolated) reference level becomes the output for `v`.
///
/// # Parameters
///
/// - `input` - Image whose levels are remapped
/// - `reference` - Image providing the target distribution; may have a different size
///
/// # Returns
///
/// - `Ok(Array2<u8>)` - Image with the shape of `input`
/// - `Err(ImageError::EmptyImage)` - If either image is empty
pub fn match_histogram(
    input: ArrayView2<u8>,
    reference: ArrayView2<u8>,
) -> Result<Array2<u8>, ImageError> {
    let lut = matching_lut(histogram(&input)?.view(), histogram(&reference)?.view())?;

    debug!(
        "histogram matching: {} input samples against {} reference samples",
        input.len(),
        reference.len()
    );
    apply_lut(&input, &lut)
}

/// Matches every channel of `input` to the same channel of `reference`
///
/// Each channel gets its own lookup table built exactly as in
/// [`match_histogram`]; channels never influence each other.
///
/// # Parameters
///
/// - `input` - Image with shape `(height, width, channels)` whose levels are remapped
/// - `reference` - Image with the same channel count; height and width may differ
///
/// # Returns
///
/// - `Ok(Array3<u8>)` - Image with the shape of `input`
/// - `Err(ImageError::EmptyImage)` - If either image is empty
/// - `Err(ImageError::DimensionMismatch)` - If the channel counts differ
///
/// # Examples
/// ```rust
/// use ndarray::Array3;
/// use rustyimg::imgproc::match_histogram_channels;
///
/// let image = Array3::from_shape_fn((4, 4, 3), |(y, x, c)| (y * 40 + x * 10 + c) as u8);
/// let matched = match_histogram_channels(image.view(), image.view()).unwrap();
/// assert_eq!(matched, image);
/// ```
pub fn match_histogram_channels(
    input: ArrayView3<u8>,
    reference: ArrayView3<u8>,
) -> Result<Array3<u8>, ImageError> {
    let input_hists = channel_histograms(input)?;
    let reference_hists = channel_histograms(reference)?;
    if input_hists.nrows() != reference_hists.nrows() {
        return Err(ImageError::DimensionMismatch(format!(
            "input has {} channels but reference has {}",
            input_hists.nrows(),
            reference_hists.nrows()
        )));
    }

    let luts: Vec<LookUpTable> = input_hists
        .outer_iter()
        .zip(reference_hists.outer_iter())
        .map(|(own, target)| matching_lut(own, target))
        .collect::<Result<_, _>>()?;

    let mut output = input.to_owned();
    output
        .axis_iter_mut(Axis(2))
        .into_par_iter()
        .zip(luts.par_iter())
        .for_each(|(mut channel, lut)| channel.mapv_inplace(|v| lut[v as usize]));

    debug!(
        "per-channel histogram matching over {} channels",
        luts.len()
    );
    Ok(output)
}

/// Lookup table sending each level of the `input` distribution to the
/// level where the `reference` distribution reaches the same cumulative value.
fn matching_lut(
    input: ArrayView1<u64>,
    reference: ArrayView1<u64>,
) -> Result<LookUpTable, ImageError> {
    let input_cdf = cumulative_distribution(input)?;
    let reference_cdf = cumulative_distribution(reference)?;
    Ok(build_lut(|level| {
        interpolate_level(input_cdf[level as usize], reference_cdf.view())
    }))
}

/// Finds the level at which the non-decreasing `cdf` reaches `target`,
/// interpolating linearly between neighboring levels.
fn interpolate_level(target: f64, cdf: ArrayView1<f64>) -> f64 {
    let Some(slice) = cdf.as_slice() else {
        return 0.0;
    };
    let upper = slice.partition_point(|&c| c < target);
    if upper >= slice.len() {
        return (slice.len() - 1) as f64;
    }
    if upper == 0 || slice[upper] == target {
        return upper as f64;
    }
    let lower = upper - 1;
    let t = (target - slice[lower]) / (slice[upper] - slice[lower]);
    lower as f64 + t
}

/// Population mean and standard deviation of all samples
///
/// # Returns
///
/// - `Ok((f64, f64))` - `(mean, standard deviation)`
/// - `Err(ImageError::EmptyImage)` - If the image is empty
pub fn mean_std_dev<S, D>(image: &ArrayBase<S, D>) -> Result<(f64, f64), ImageError>
where
    S: Data<Elem = u8>,
    D: Dimension,
{
    validate_image(image)?;
    let samples = image.iter().map(|&v| f64::from(v));
    let mean = samples.clone().mean();
    let std_dev = samples.population_std_dev();
    Ok((mean, std_dev))
}

/// Contrast as standard deviation over mean
///
/// An all-black image has no defined ratio and reports 0.0.
pub fn contrast_ratio<S, D>(image: &ArrayBase<S, D>) -> Result<f64, ImageError>
where
    S: Data<Elem = u8>,
    D: Dimension,
{
    let (mean, std_dev) = mean_std_dev(image)?;
    if mean == 0.0 {
        return Ok(0.0);
    }
    Ok(std_dev / mean)
}

/// Returns `true` when the contrast ratio falls below `threshold`
///
/// [`LOW_CONTRAST_THRESHOLD`] is the customary choice.
pub fn is_low_contrast<S, D>(image: &ArrayBase<S, D>, threshold: f64) -> Result<bool, ImageError>
where
    S: Data<Elem = u8>,
    D: Dimension,
{
    let contrast = contrast_ratio(image)?;
    if contrast < threshold {
        warn!("low contrast image detected (contrast = {:.3})", contrast);
        return Ok(true);
    }
    Ok(false)
}
