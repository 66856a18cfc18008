use super::*;

fn ramp_row() -> Array3<u8> {
    // a single row 1 2 3 4
    Array3::from_shape_vec((1, 4, 1), vec![1, 2, 3, 4]).unwrap()
}

#[test]
fn test_pad_constant_shape_and_fill() {
    let image = Array3::<u8>::from_elem((3, 4, 2), 9);
    let padded = pad(image.view(), 2, 1, BorderMode::Constant(17)).unwrap();

    assert_eq!(padded.dim(), (7, 6, 2));
    assert_eq!(padded.pad_height(), 2);
    assert_eq!(padded.pad_width(), 1);
    assert_eq!(padded.view()[[0, 0, 0]], 17);
    assert_eq!(padded.view()[[6, 5, 1]], 17);
    assert_eq!(padded.view().slice(s![2..5, 1..5, ..]), image.view());
}

#[test]
fn test_pad_default_border_is_zero() {
    assert_eq!(BorderMode::default(), BorderMode::Constant(0));
    let image = Array3::<u8>::from_elem((1, 1, 1), 200);
    let padded = pad(image.view(), 1, 1, BorderMode::default()).unwrap();
    assert_eq!(padded.view().sum(), 200);
}

#[test]
fn test_pad_replicate() {
    let padded = pad(ramp_row().view(), 1, 3, BorderMode::Replicate).unwrap();
    let row: Vec<u8> = padded.view().slice(s![1, .., 0]).to_vec();
    assert_eq!(row, vec![1, 1, 1, 1, 2, 3, 4, 4, 4, 4]);
    // rows above and below copy the single source row
    assert_eq!(padded.view().slice(s![0, .., 0]).to_vec(), row);
}

#[test]
fn test_pad_reflect101() {
    let padded = pad(ramp_row().view(), 0, 3, BorderMode::Reflect101).unwrap();
    let row: Vec<u8> = padded.view().slice(s![0, .., 0]).to_vec();
    assert_eq!(row, vec![4, 3, 2, 1, 2, 3, 4, 3, 2, 1]);
}

// Reflection wider than the image keeps folding back and forth
#[test]
fn test_pad_reflect101_wider_than_image() {
    let image = Array3::from_shape_vec((1, 2, 1), vec![5u8, 6]).unwrap();
    let padded = pad(image.view(), 0, 3, BorderMode::Reflect101).unwrap();
    let row: Vec<u8> = padded.view().slice(s![0, .., 0]).to_vec();
    assert_eq!(row, vec![6, 5, 6, 5, 6, 5, 6, 5]);

    let single = Array3::from_elem((1, 1, 1), 42u8);
    let padded = pad(single.view(), 2, 2, BorderMode::Reflect101).unwrap();
    assert!(padded.view().iter().all(|&v| v == 42));
}

#[test]
fn test_pad_zero_padding_is_copy() {
    let image = random_image((4, 5, 3), 1);
    let padded = pad(image.view(), 0, 0, BorderMode::Replicate).unwrap();
    assert_eq!(padded.view(), image.view());
}

#[test]
fn test_pad_empty_image() {
    let image = Array3::<u8>::zeros((0, 3, 1));
    assert_eq!(
        pad(image.view(), 1, 1, BorderMode::default()).unwrap_err(),
        ImageError::EmptyImage
    );
}

#[test]
fn test_window_alignment_and_bounds() {
    let image = Array3::from_shape_vec((3, 3, 1), (1..=9u8).collect()).unwrap();
    let padded = pad(image.view(), 1, 1, BorderMode::Constant(0)).unwrap();

    // output (0, 0) owns the top-left 3x3 window of the padded buffer
    let window = padded.window(0, 0, 3, 3, 0).unwrap();
    assert_eq!(window, array![[0u8, 0, 0], [0, 1, 2], [0, 4, 5]]);

    let center = padded.window(1, 1, 3, 3, 0).unwrap();
    assert_eq!(center, array![[1u8, 2, 3], [4, 5, 6], [7, 8, 9]]);

    assert!(matches!(
        padded.window(3, 0, 3, 3, 0),
        Err(ImageError::InputValidationError(_))
    ));
    assert!(matches!(
        padded.window(0, 0, 3, 3, 1),
        Err(ImageError::InputValidationError(_))
    ));
    assert!(matches!(
        padded.window(0, 0, 0, 3, 0),
        Err(ImageError::InputValidationError(_))
    ));
}

#[test]
fn test_border_mode_serde_roundtrip() {
    for mode in [BorderMode::Constant(3), BorderMode::Replicate, BorderMode::Reflect101] {
        let json = serde_json::to_string(&mode).unwrap();
        let back: BorderMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mode);
    }
}

// Window requests whose end coordinate overflows are rejected, not panicking
#[test]
fn test_window_overflowing_coordinates() {
    let image = Array3::<u8>::from_elem((3, 3, 1), 1);
    let padded = pad(image.view(), 1, 1, BorderMode::Constant(0)).unwrap();

    assert!(matches!(
        padded.window(usize::MAX, 0, 3, 3, 0),
        Err(ImageError::InputValidationError(_))
    ));
    assert!(matches!(
        padded.window(0, usize::MAX, 3, 3, 0),
        Err(ImageError::InputValidationError(_))
    ));
    assert!(matches!(
        padded.window(1, 1, usize::MAX, 1, 0),
        Err(ImageError::InputValidationError(_))
    ));
}

#[test]
fn test_pad_overflowing_padding() {
    let image = Array3::<u8>::from_elem((2, 2, 1), 1);
    assert!(matches!(
        pad(image.view(), usize::MAX / 2, 0, BorderMode::Constant(0)),
        Err(ImageError::InputValidationError(_))
    ));
    assert!(matches!(
        pad(image.view(), 0, usize::MAX, BorderMode::Replicate),
        Err(ImageError::InputValidationError(_))
    ));
}
