//! Build-time configuration: API endpoints, storage keys, upload limits.
//!
//! DESIGN
//! ======
//! Base URLs are compiled in with `option_env!` overrides so deployments
//! can point at a different stage without a runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_API_BASE_URL: &str = "https://3vw53n9900.execute-api.us-east-1.amazonaws.com/dev";
const DEFAULT_MENU_API_BASE_URL: &str = "https://husky-eats.onrender.com";

/// Base URL for the MenuMatch metadata API (dataset, presigns, metadata).
pub fn api_base_url() -> &'static str {
    option_env!("MENUMATCH_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Base URL for the external Husky Eats menu API.
pub fn menu_api_base_url() -> &'static str {
    option_env!("MENUMATCH_MENU_API_BASE_URL").unwrap_or(DEFAULT_MENU_API_BASE_URL)
}

/// localStorage key holding the team API token.
pub const AUTH_TOKEN_STORAGE_KEY: &str = "menumatch-auth-token";

/// Older localStorage keys migrated into [`AUTH_TOKEN_STORAGE_KEY`] on
/// first read and removed on every write or clear.
pub const LEGACY_AUTH_TOKEN_KEYS: &[&str] = &["menumatch-upload-token"];

/// Largest accepted upload, in bytes (2 MiB).
pub const MAX_UPLOAD_BYTES: f64 = 2.0 * 1024.0 * 1024.0;

/// Required width and height of an uploaded plate photo, in pixels.
pub const REQUIRED_IMAGE_DIMENSION: u32 = 1024;

/// Content types accepted by the upload form.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png"];
