use super::*;

#[test]
fn test_histogram_counts() {
    let image = array![[0u8, 0, 5], [255, 5, 5]];
    let hist = histogram(&image).unwrap();
    assert_eq!(hist.len(), LEVELS);
    assert_eq!(hist[0], 2);
    assert_eq!(hist[5], 3);
    assert_eq!(hist[255], 1);
    assert_eq!(hist.sum(), image.len() as u64);
}

#[test]
fn test_histogram_sum_equals_sample_count() {
    let image = random_image((17, 23, 3), 4);
    assert_eq!(histogram(&image).unwrap().sum(), (17 * 23 * 3) as u64);
}

#[test]
fn test_channel_histograms() {
    let mut image = Array3::<u8>::zeros((4, 4, 3));
    image.index_axis_mut(Axis(2), 1).fill(10);
    image.index_axis_mut(Axis(2), 2).fill(20);

    let hists = channel_histograms(image.view()).unwrap();
    assert_eq!(hists.dim(), (3, LEVELS));
    assert_eq!(hists[[0, 0]], 16);
    assert_eq!(hists[[1, 10]], 16);
    assert_eq!(hists[[2, 20]], 16);
    assert_eq!(hists.row(1).sum(), 16);
}

#[test]
fn test_cumulative_distribution() {
    let mut hist = Array1::<u64>::zeros(LEVELS);
    hist[1] = 1;
    hist[3] = 3;
    let cdf = cumulative_distribution(hist.view()).unwrap();

    assert_abs_diff_eq!(cdf[0], 0.0);
    assert_abs_diff_eq!(cdf[1], 0.25);
    assert_abs_diff_eq!(cdf[2], 0.25);
    assert_abs_diff_eq!(cdf[3], 1.0);
    assert_abs_diff_eq!(cdf[255], 1.0);
    assert!(cdf.windows(2).into_iter().all(|w| w[0] <= w[1]));

    let zeros = Array1::<u64>::zeros(LEVELS);
    assert!(matches!(
        cumulative_distribution(zeros.view()),
        Err(ImageError::InputValidationError(_))
    ));
}

// Equalizing an image with two levels spreads them to the extremes
#[test]
fn test_equalize_two_levels() {
    let image = Array2::from_shape_fn((6, 6), |(y, _)| if y < 2 { 50u8 } else { 200 });
    let equalized = equalize_histogram(image.view()).unwrap();
    for ((y, _), &v) in equalized.indexed_iter() {
        assert_eq!(v, if y < 2 { 0 } else { 255 });
    }
}

#[test]
fn test_equalize_single_level() {
    let image = Array2::<u8>::from_elem((3, 3), 99);
    let equalized = equalize_histogram(image.view()).unwrap();
    assert!(equalized.iter().all(|&v| v == 0));
}

#[test]
fn test_equalize_is_monotonic() {
    let image = random_image((20, 20, 1), 6).index_axis_move(Axis(2), 0);
    let equalized = equalize_histogram(image.view()).unwrap();
    let max = image.iter().copied().max().unwrap();
    for (&a, &ea) in image.iter().zip(equalized.iter()) {
        for (&b, &eb) in image.iter().zip(equalized.iter()) {
            if a < b {
                assert!(ea <= eb);
            }
        }
        if a == max {
            assert_eq!(ea, 255);
        }
    }
}

#[test]
fn test_match_histogram_self_is_identity() {
    let image = random_image((16, 16, 1), 13).index_axis_move(Axis(2), 0);
    let matched = match_histogram(image.view(), image.view()).unwrap();
    assert_eq!(matched, image);
}

// A narrow input matched to a uniform reference is stretched across the full range
#[test]
fn test_match_histogram_stretches_to_reference() {
    // levels 0..=127 twice each
    let input = Array2::from_shape_fn((16, 16), |(y, x)| ((y * 16 + x) / 2) as u8);
    // levels 0..=255 once each, in a different size
    let reference = Array2::from_shape_fn((8, 32), |(y, x)| (y * 32 + x) as u8);

    let matched = match_histogram(input.view(), reference.view()).unwrap();
    assert_eq!(matched.dim(), input.dim());
    for (&v, &m) in input.iter().zip(matched.iter()) {
        assert_eq!(m as usize, 2 * v as usize + 1);
    }
}

#[test]
fn test_match_histogram_empty() {
    let image = Array2::<u8>::zeros((2, 2));
    let empty = Array2::<u8>::zeros((0, 2));
    assert_eq!(
        match_histogram(image.view(), empty.view()).unwrap_err(),
        ImageError::EmptyImage
    );
}

#[test]
fn test_contrast_measures() {
    let black = Array2::<u8>::zeros((4, 4));
    assert_eq!(contrast_ratio(&black).unwrap(), 0.0);
    assert!(is_low_contrast(&black, LOW_CONTRAST_THRESHOLD).unwrap());

    let split = Array2::from_shape_fn((4, 4), |(_, x)| if x < 2 { 0u8 } else { 200 });
    let (mean, std_dev) = mean_std_dev(&split).unwrap();
    assert_relative_eq!(mean, 100.0, epsilon = 1e-9);
    assert_relative_eq!(std_dev, 100.0, epsilon = 1e-9);
    assert_relative_eq!(contrast_ratio(&split).unwrap(), 1.0, epsilon = 1e-9);
    assert!(!is_low_contrast(&split, LOW_CONTRAST_THRESHOLD).unwrap());

    let flat = Array3::<u8>::from_elem((3, 3, 3), 128);
    assert!(is_low_contrast(&flat, LOW_CONTRAST_THRESHOLD).unwrap());

    let empty = Array2::<u8>::zeros((0, 0));
    assert_eq!(mean_std_dev(&empty).unwrap_err(), ImageError::EmptyImage);
}

#[test]
fn test_match_histogram_channels_self_is_identity() {
    let image = random_image((12, 10, 3), 17);
    let matched = match_histogram_channels(image.view(), image.view()).unwrap();
    assert_eq!(matched, image);
}

// Each channel follows its own reference channel
#[test]
fn test_match_histogram_channels_are_independent() {
    let input = Array3::from_shape_fn((16, 16, 2), |(y, x, _)| ((y * 16 + x) / 2) as u8);
    let reference = Array3::from_shape_fn((8, 32, 2), |(y, x, c)| {
        if c == 0 { (y * 32 + x) as u8 } else { 90 }
    });

    let matched = match_histogram_channels(input.view(), reference.view()).unwrap();
    assert_eq!(matched.dim(), input.dim());
    for ((y, x, c), &m) in matched.indexed_iter() {
        if c == 0 {
            assert_eq!(m as usize, 2 * input[[y, x, 0]] as usize + 1);
        }
    }
    // the top input level reaches the full reference mass at level 90
    let top = matched
        .index_axis(Axis(2), 1)
        .iter()
        .zip(input.index_axis(Axis(2), 1).iter())
        .find(|&(_, &v)| v == 127)
        .map(|(&m, _)| m);
    assert_eq!(top, Some(90));

    let expected = match_histogram(
        input.index_axis(Axis(2), 0),
        reference.index_axis(Axis(2), 0),
    )
    .unwrap();
    assert_eq!(matched.index_axis(Axis(2), 0), expected);
}

#[test]
fn test_match_histogram_channels_rejects_channel_mismatch() {
    let input = random_image((4, 4, 3), 18);
    let reference = random_image((4, 4, 1), 19);
    assert!(matches!(
        match_histogram_channels(input.view(), reference.view()),
        Err(ImageError::DimensionMismatch(_))
    ));

    let empty = Array3::<u8>::zeros((0, 4, 3));
    assert_eq!(
        match_histogram_channels(empty.view(), input.view()).unwrap_err(),
        ImageError::EmptyImage
    );
}
