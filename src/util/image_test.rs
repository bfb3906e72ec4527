use super::*;

fn facts(content_type: &str, size_bytes: f64, width: u32, height: u32) -> ImageFacts {
    ImageFacts { content_type: content_type.to_owned(), size_bytes, width, height }
}

#[test]
fn accepts_conforming_jpeg_and_png() {
    assert!(validate(&facts("image/jpeg", 1_000_000.0, 1024, 1024)).is_ok());
    assert!(validate(&facts("image/png", 2_097_152.0, 1024, 1024)).is_ok());
}

#[test]
fn rejects_unsupported_content_type() {
    let error = validate(&facts("image/webp", 1_000.0, 1024, 1024)).unwrap_err();
    assert_eq!(error, "Choose a JPEG or PNG image.");
}

#[test]
fn rejects_oversized_file() {
    let error = validate(&facts("image/jpeg", 2_097_153.0, 1024, 1024)).unwrap_err();
    assert!(error.contains("2 MB"));
}

#[test]
fn rejects_wrong_dimensions() {
    let error = validate(&facts("image/png", 1_000.0, 800, 600)).unwrap_err();
    assert_eq!(error, "Image must be exactly 1024x1024 pixels (got 800x600).");
}

#[test]
fn type_check_runs_before_size_and_dimension_checks() {
    let error = validate(&facts("text/plain", 9_999_999.0, 1, 1)).unwrap_err();
    assert_eq!(error, "Choose a JPEG or PNG image.");
}
