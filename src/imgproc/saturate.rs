use super::*;

/// Rounding rule applied to a real value before it is clamped into a sample range
///
/// Every operation in this crate commits values through one of these rules.
/// The default, `HalfAwayFromZero`, is used for convolution, blending,
/// arithmetic, lookup tables and histogram remaps alike.
///
/// # Variants
///
/// - `HalfAwayFromZero` - Round to the nearest integer, ties away from zero (`127.5 -> 128`, `127.6 -> 128`)
/// - `Truncate` - Drop the fractional part, rounding toward zero (`127.6 -> 127`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rounding {
    #[default]
    HalfAwayFromZero,
    Truncate,
}

impl Rounding {
    /// Applies the rounding rule to `value` without clamping.
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::HalfAwayFromZero => value.round(),
            Rounding::Truncate => value.trunc(),
        }
    }
}

/// Fixed-width unsigned sample types an output image can hold.
pub trait Sample: Copy + Default + Send + Sync + 'static {
    /// Smallest representable sample value
    const LOW: f64;
    /// Largest representable sample value
    const HIGH: f64;

    /// Converts an already rounded and clamped value into the sample type.
    fn from_saturated(value: f64) -> Self;
}

impl Sample for u8 {
    const LOW: f64 = 0.0;
    const HIGH: f64 = 255.0;

    #[inline]
    fn from_saturated(value: f64) -> Self {
        value as u8
    }
}

/// Rounds `value` and clamps it into `[low, high]`
///
/// The rounding rule is applied first, then the clamp, so the result is
/// always inside the range and applying the function twice gives the same
/// value as applying it once. NaN saturates to `low`, infinities to the
/// nearest bound.
///
/// # Parameters
///
/// - `value` - The real value to commit
/// - `low` - Lower bound of the valid range
/// - `high` - Upper bound of the valid range, must not be below `low`
/// - `rounding` - Rounding rule applied before clamping
///
/// # Returns
///
/// * `f64` - The saturated value
///
/// # Examples
/// ```rust
/// use rustyimg::imgproc::saturate::{saturate, Rounding};
///
/// assert_eq!(saturate(300.0, 0.0, 255.0, Rounding::HalfAwayFromZero), 255.0);
/// assert_eq!(saturate(-10.0, 0.0, 255.0, Rounding::HalfAwayFromZero), 0.0);
/// assert_eq!(saturate(127.6, 0.0, 255.0, Rounding::HalfAwayFromZero), 128.0);
/// assert_eq!(saturate(127.6, 0.0, 255.0, Rounding::Truncate), 127.0);
/// ```
#[inline]
pub fn saturate(value: f64, low: f64, high: f64, rounding: Rounding) -> f64 {
    debug_assert!(low <= high, "saturate called with low ({low}) > high ({high})");
    if value.is_nan() {
        return low;
    }
    rounding.apply(value).clamp(low, high)
}

/// Rounds and clamps `value` into the full range of the sample type `T`
///
/// # Examples
/// ```rust
/// use rustyimg::imgproc::saturate::{saturate_cast, Rounding};
///
/// let v: u8 = saturate_cast(256.4, Rounding::HalfAwayFromZero);
/// assert_eq!(v, 255);
/// let w: u8 = saturate_cast(-3.0, Rounding::Truncate);
/// assert_eq!(w, 0);
/// ```
#[inline]
pub fn saturate_cast<T: Sample>(value: f64, rounding: Rounding) -> T {
    T::from_saturated(saturate(value, T::LOW, T::HIGH, rounding))
}

/// Saturates `value` into `u8` with the default rounding rule.
#[inline]
pub fn saturate_u8(value: f64) -> u8 {
    saturate_cast(value, Rounding::default())
}
