//! REST helpers for the MenuMatch metadata API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<T, String>` with a user-displayable
//! message. Non-success responses prefer the payload's `message` field
//! over the generic status line. There are no automatic retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    DatasetResponse, PresignedDownload, PresignedUpload, SampleRecord, SampleResponse,
    UploadMetadata,
};
use crate::config;

#[cfg(any(test, feature = "hydrate"))]
fn dataset_endpoint() -> String {
    format!("{}/dataset", config::api_base_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn dataset_failed_message(status: u16) -> String {
    format!("Dataset request failed with status {status}.")
}

#[cfg(any(test, feature = "hydrate"))]
fn presign_upload_failed_message(status: u16) -> String {
    format!("Upload URL request failed with status {status}.")
}

#[cfg(any(test, feature = "hydrate"))]
fn presign_download_failed_message(status: u16) -> String {
    format!("Download URL request failed with status {status}.")
}

#[cfg(any(test, feature = "hydrate"))]
fn metadata_failed_message(status: u16) -> String {
    format!("Metadata request failed with status {status}.")
}

#[cfg(any(test, feature = "hydrate"))]
fn object_upload_failed_message(status: u16) -> String {
    format!("Image upload failed with status {status}.")
}

/// Extract the payload `message` from a failed response, falling back to
/// the supplied status line when the body is not parsable JSON.
#[cfg(feature = "hydrate")]
async fn response_error(resp: gloo_net::http::Response, fallback: String) -> String {
    match resp.json::<serde_json::Value>().await {
        Ok(payload) => payload
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map_or(fallback, str::to_owned),
        Err(_) => fallback,
    }
}

#[cfg(feature = "hydrate")]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Fetch every recorded sample via `GET /dataset`.
///
/// # Errors
///
/// Returns a displayable message when the request fails or the payload
/// does not parse.
pub async fn fetch_dataset(token: &str) -> Result<Vec<SampleRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&dataset_endpoint())
            .header("Accept", "application/json")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = dataset_failed_message(resp.status());
            return Err(response_error(resp, fallback).await);
        }
        let body: DatasetResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch one sample record via `GET /dataset/{objectKey}`.
///
/// # Errors
///
/// Returns a displayable message when the request fails, the payload does
/// not parse, or the record does not exist.
pub async fn fetch_sample(token: &str, object_key: &str) -> Result<SampleRecord, String> {
    #[cfg(feature = "hydrate")]
    {
        let encoded = js_sys::encode_uri_component(object_key);
        let url = format!("{}/{encoded}", dataset_endpoint());
        let resp = gloo_net::http::Request::get(&url)
            .header("Accept", "application/json")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = dataset_failed_message(resp.status());
            return Err(response_error(resp, fallback).await);
        }
        let body: SampleResponse = resp.json().await.map_err(|e| e.to_string())?;
        body.item.ok_or_else(|| "Sample not found in dataset.".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, object_key);
        Err("not available on server".to_owned())
    }
}

/// Request a presigned write target via `POST /uploads/presign`.
///
/// # Errors
///
/// Returns a displayable message when the request fails.
pub async fn presign_upload(
    token: &str,
    filename: &str,
    content_type: &str,
) -> Result<PresignedUpload, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "filename": filename, "contentType": content_type });
        let url = format!("{}/uploads/presign", config::api_base_url());
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(token))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = presign_upload_failed_message(resp.status());
            return Err(response_error(resp, fallback).await);
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, filename, content_type);
        Err("not available on server".to_owned())
    }
}

/// Transfer raw file bytes directly to the presigned upload target using
/// the method and headers the descriptor supplied.
///
/// # Errors
///
/// Returns a displayable message when the transfer fails.
#[cfg(feature = "hydrate")]
pub async fn upload_object(presign: &PresignedUpload, file: &web_sys::File) -> Result<(), String> {
    let method = presign.method.to_ascii_uppercase();
    let mut request = match method.as_str() {
        "POST" => gloo_net::http::Request::post(&presign.upload_url),
        // Presigns default to PUT when the descriptor omits the method.
        _ => gloo_net::http::Request::put(&presign.upload_url),
    };
    for (name, value) in &presign.headers {
        request = request.header(name, value);
    }
    let resp = request
        .body(wasm_bindgen::JsValue::from(file.clone()))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(object_upload_failed_message(resp.status()));
    }
    Ok(())
}

/// Record plate metadata via `POST /uploads/metadata`.
///
/// # Errors
///
/// Returns a displayable message when the request fails.
pub async fn submit_metadata(token: &str, metadata: &UploadMetadata) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/uploads/metadata", config::api_base_url());
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(token))
            .json(metadata)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = metadata_failed_message(resp.status());
            return Err(response_error(resp, fallback).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, metadata);
        Err("not available on server".to_owned())
    }
}

/// Request a presigned read URL via `POST /downloads/presign`.
///
/// # Errors
///
/// Returns a displayable message when the request fails.
pub async fn presign_download(
    token: &str,
    object_key: &str,
    bucket: &str,
) -> Result<PresignedDownload, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "objectKey": object_key, "bucket": bucket });
        let url = format!("{}/downloads/presign", config::api_base_url());
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(token))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = presign_download_failed_message(resp.status());
            return Err(response_error(resp, fallback).await);
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, object_key, bucket);
        Err("not available on server".to_owned())
    }
}
