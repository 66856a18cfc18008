use super::*;

/// A table mapping every 8-bit input level to an output level
pub type LookUpTable = [u8; 256];

/// Builds a table from a real-valued transfer function
///
/// Each entry is `saturate(transfer(level))` with the default rounding rule.
pub fn build_lut<F>(transfer: F) -> LookUpTable
where
    F: Fn(f64) -> f64,
{
    let mut lut = [0u8; 256];
    for (level, entry) in lut.iter_mut().enumerate() {
        *entry = saturate_u8(transfer(level as f64));
    }
    lut
}

/// The table that maps every level to itself
pub fn identity_lut() -> LookUpTable {
    build_lut(|level| level)
}

/// Gamma transfer table: `255 * (level / 255) ^ gamma`
///
/// A `gamma` above 1 darkens mid-tones, below 1 brightens them; 0 and 255
/// are fixed points for every positive gamma.
///
/// # Returns
///
/// - `Ok(LookUpTable)` - The table
/// - `Err(ImageError::InputValidationError)` - If `gamma` is not positive and finite
///
/// # Examples
/// ```rust
/// use rustyimg::imgproc::gamma_lut;
///
/// let lut = gamma_lut(2.0).unwrap();
/// assert_eq!(lut[0], 0);
/// assert_eq!(lut[128], 64);
/// assert_eq!(lut[255], 255);
/// ```
pub fn gamma_lut(gamma: f64) -> Result<LookUpTable, ImageError> {
    if gamma <= 0.0 || !gamma.is_finite() {
        return Err(ImageError::InputValidationError(format!(
            "gamma must be positive and finite, got {}",
            gamma
        )));
    }
    Ok(build_lut(|level| (level / 255.0).powf(gamma) * 255.0))
}

/// Linear contrast/brightness table: `alpha * level + beta`
///
/// # Returns
///
/// - `Ok(LookUpTable)` - The table
/// - `Err(ImageError::InputValidationError)` - If `alpha` or `beta` is NaN or infinite
pub fn linear_lut(alpha: f64, beta: f64) -> Result<LookUpTable, ImageError> {
    validate_finite("alpha", alpha)?;
    validate_finite("beta", beta)?;
    Ok(build_lut(|level| alpha * level + beta))
}

/// Table that inverts every level: `255 - level`
pub fn invert_lut() -> LookUpTable {
    build_lut(|level| 255.0 - level)
}

/// Remaps every sample of `image` through `lut`
///
/// Works on images of any dimensionality; each channel is remapped with the same table.
///
/// # Returns
///
/// - `Ok(Array<u8, D>)` - The remapped image
/// - `Err(ImageError::EmptyImage)` - If the image is empty
pub fn apply_lut<S, D>(image: &ArrayBase<S, D>, lut: &LookUpTable) -> Result<Array<u8, D>, ImageError>
where
    S: Data<Elem = u8>,
    D: Dimension,
{
    validate_image(image)?;
    if use_parallel(image.len(), ELEMENTWISE_PARALLEL_THRESHOLD) {
        Ok(Zip::from(image).par_map_collect(|&v| lut[v as usize]))
    } else {
        Ok(image.mapv(|v| lut[v as usize]))
    }
}

/// Applies gamma correction through a lookup table
///
/// Equivalent to `apply_lut(image, &gamma_lut(gamma)?)`.
pub fn gamma_correct<S, D>(image: &ArrayBase<S, D>, gamma: f64) -> Result<Array<u8, D>, ImageError>
where
    S: Data<Elem = u8>,
    D: Dimension,
{
    let lut = gamma_lut(gamma)?;
    debug!("gamma correction with gamma = {}", gamma);
    apply_lut(image, &lut)
}
