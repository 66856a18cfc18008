pub use crate::imgproc::{GrayImage, Image};
pub use crate::imgproc::{BorderMode, PaddedImage, pad};
pub use crate::imgproc::{Rounding, saturate, saturate_cast, saturate_u8};
pub use crate::imgproc::Kernel;
pub use crate::imgproc::{ConvolutionConfig, Convolver, apply_kernel, convolve, convolve_gray, convolve_raw};
pub use crate::imgproc::{
    add_scalar,
    add_weighted,
    add_weighted_per_pixel,
    alpha_blend,
    mask_to_alpha,
    saturating_add,
    saturating_divide,
    saturating_multiply,
    saturating_subtract
};
pub use crate::imgproc::{LookUpTable, apply_lut, build_lut, gamma_correct, gamma_lut, identity_lut, invert_lut, linear_lut};
pub use crate::imgproc::{
    LEVELS,
    LOW_CONTRAST_THRESHOLD,
    channel_histograms,
    contrast_ratio,
    cumulative_distribution,
    equalize_histogram,
    histogram,
    is_low_contrast,
    match_histogram,
    match_histogram_channels,
    mean_std_dev
};
