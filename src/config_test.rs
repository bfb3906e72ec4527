use super::*;

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
    assert!(api_base_url().starts_with("https://"));
}

#[test]
fn menu_api_base_url_has_no_trailing_slash() {
    assert!(!menu_api_base_url().ends_with('/'));
    assert!(menu_api_base_url().starts_with("https://"));
}

#[test]
fn legacy_keys_do_not_include_primary_key() {
    assert!(!LEGACY_AUTH_TOKEN_KEYS.contains(&AUTH_TOKEN_STORAGE_KEY));
}

#[test]
fn upload_limits_match_labeling_guidelines() {
    assert_eq!(MAX_UPLOAD_BYTES, 2_097_152.0);
    assert_eq!(REQUIRED_IMAGE_DIMENSION, 1024);
    assert!(ALLOWED_CONTENT_TYPES.contains(&"image/jpeg"));
    assert!(ALLOWED_CONTENT_TYPES.contains(&"image/png"));
}
