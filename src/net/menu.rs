//! REST helpers for the external Husky Eats menu API.
//!
//! The menu API is unauthenticated and read-only from this client:
//! `GET /api/menuitem` lists the full catalog and `GET /api/menu` reports
//! what a dining hall served for one meal on one date.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use super::types::{CatalogItem, MenuEntry, Mealtime};
use crate::config;

#[cfg(any(test, feature = "hydrate"))]
fn catalog_endpoint() -> String {
    format!("{}/api/menuitem", config::menu_api_base_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn menu_endpoint(hall_id: &str, meal: Mealtime, date: &str) -> String {
    format!(
        "{}/api/menu?hallid={hall_id}&meal={}&date={date}",
        config::menu_api_base_url(),
        meal.label()
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn menu_failed_message(status: u16) -> String {
    format!("Menu request failed with status {status}.")
}

/// Fetch the full menu-item catalog.
///
/// # Errors
///
/// Returns a displayable message when the request fails or the payload is
/// not the expected array shape.
pub async fn fetch_catalog() -> Result<Vec<CatalogItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&catalog_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(menu_failed_message(resp.status()));
        }
        let payload: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        if !payload.is_array() {
            return Err("Unexpected menu response format.".to_owned());
        }
        serde_json::from_value(payload).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the reported menu for one (hall, meal, date) context.
///
/// # Errors
///
/// Returns a displayable message when the request fails or the payload is
/// not the expected array shape.
pub async fn fetch_menu(hall_id: &str, meal: Mealtime, date: &str) -> Result<Vec<MenuEntry>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&menu_endpoint(hall_id, meal, date))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(menu_failed_message(resp.status()));
        }
        let payload: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        if !payload.is_array() {
            return Err("Unexpected menu response format.".to_owned());
        }
        serde_json::from_value(payload).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (hall_id, meal, date);
        Err("not available on server".to_owned())
    }
}
