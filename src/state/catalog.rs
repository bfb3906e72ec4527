//! Menu-catalog fetch state, shared by the item search dropdown and the
//! coverage page. Fetched once at startup with a manual retry on error.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::status::FetchStatus;
use crate::net::types::CatalogItem;

/// Shared catalog state for the external menu-item list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub status: FetchStatus,
    pub error: String,
    pub items: Vec<CatalogItem>,
    pub seq: u64,
}

impl CatalogState {
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.status = FetchStatus::Loading;
        self.error.clear();
        self.seq
    }

    pub fn apply(&mut self, seq: u64, outcome: Result<Vec<CatalogItem>, String>) {
        if seq != self.seq {
            return;
        }
        match outcome {
            Ok(items) => {
                self.items = items;
                self.status = FetchStatus::Success;
                self.error.clear();
            }
            Err(message) => {
                self.status = FetchStatus::Error;
                self.error = message;
            }
        }
    }

    /// Display name for a catalog id, when known.
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.name.as_str())
    }
}
