//! Upload image validation: type, size, and exact pixel dimensions.
//!
//! DESIGN
//! ======
//! Validation runs entirely before any network call. The browser-only
//! part decodes the selected file through an object URL to learn its
//! dimensions; the checks themselves are pure functions over
//! [`ImageFacts`] so the rules stay unit-testable.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use crate::config::{ALLOWED_CONTENT_TYPES, MAX_UPLOAD_BYTES, REQUIRED_IMAGE_DIMENSION};

/// Everything validation needs to know about a selected file.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageFacts {
    pub content_type: String,
    pub size_bytes: f64,
    pub width: u32,
    pub height: u32,
}

/// Check a selected image against the labeling guidelines.
///
/// # Errors
///
/// Returns the first violated rule as a user-visible message.
pub fn validate(facts: &ImageFacts) -> Result<(), String> {
    if !ALLOWED_CONTENT_TYPES.contains(&facts.content_type.as_str()) {
        return Err("Choose a JPEG or PNG image.".to_owned());
    }
    if facts.size_bytes > MAX_UPLOAD_BYTES {
        return Err("Image is larger than 2 MB. Re-export it below the limit.".to_owned());
    }
    if facts.width != REQUIRED_IMAGE_DIMENSION || facts.height != REQUIRED_IMAGE_DIMENSION {
        return Err(format!(
            "Image must be exactly {REQUIRED_IMAGE_DIMENSION}x{REQUIRED_IMAGE_DIMENSION} pixels (got {}x{}).",
            facts.width, facts.height
        ));
    }
    Ok(())
}

/// Decode a selected file in the browser and gather its [`ImageFacts`].
///
/// # Errors
///
/// Returns a displayable message when the file cannot be decoded as an
/// image.
#[cfg(feature = "hydrate")]
pub async fn read_image_facts(file: &web_sys::File) -> Result<ImageFacts, String> {
    let url = web_sys::Url::create_object_url_with_blob(file)
        .map_err(|_| "Could not read the selected file.".to_owned())?;

    let image = web_sys::HtmlImageElement::new()
        .map_err(|_| "Could not read the selected file.".to_owned())?;
    image.set_src(&url);
    let decoded = wasm_bindgen_futures::JsFuture::from(image.decode()).await;
    let _ = web_sys::Url::revoke_object_url(&url);
    decoded.map_err(|_| "Could not decode the selected file as an image.".to_owned())?;

    Ok(ImageFacts {
        content_type: file.type_(),
        size_bytes: file.size(),
        width: image.natural_width(),
        height: image.natural_height(),
    })
}
