//! Browser localStorage persistence for the team API token.
//!
//! Reads migrate legacy key names into the current key; writes and
//! clears always remove the legacy keys. The migration logic is pure
//! over a [`KeyStore`] seam; only the `web_sys::Storage` binding needs a
//! browser, and the SSR paths safely no-op to keep server rendering
//! deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::config::{AUTH_TOKEN_STORAGE_KEY, LEGACY_AUTH_TOKEN_KEYS};

/// Minimal string key-value surface over which the token persistence
/// logic runs.
pub trait KeyStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[cfg(feature = "hydrate")]
impl KeyStore for web_sys::Storage {
    fn get(&self, key: &str) -> Option<String> {
        self.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let _ = self.set_item(key, value);
    }

    fn remove(&mut self, key: &str) {
        let _ = self.remove_item(key);
    }
}

/// Read the persisted token, promoting a legacy-keyed value to the
/// current key on first sight and removing every legacy key once a
/// value is promoted. Returns an empty string when nothing is stored.
pub fn read_token_from(store: &mut impl KeyStore) -> String {
    if let Some(existing) = store.get(AUTH_TOKEN_STORAGE_KEY) {
        if !existing.is_empty() {
            return existing;
        }
    }

    for legacy_key in LEGACY_AUTH_TOKEN_KEYS {
        if let Some(value) = store.get(legacy_key) {
            if value.is_empty() {
                continue;
            }
            store.set(AUTH_TOKEN_STORAGE_KEY, &value);
            for other_key in LEGACY_AUTH_TOKEN_KEYS {
                store.remove(other_key);
            }
            return value;
        }
    }

    String::new()
}

/// Persist the token under the current key and drop legacy keys. An
/// empty token clears instead.
pub fn write_token_to(store: &mut impl KeyStore, token: &str) {
    if token.is_empty() {
        clear_token_in(store);
        return;
    }
    store.set(AUTH_TOKEN_STORAGE_KEY, token);
    for legacy_key in LEGACY_AUTH_TOKEN_KEYS {
        store.remove(legacy_key);
    }
}

/// Remove the token under both the current and the legacy keys.
pub fn clear_token_in(store: &mut impl KeyStore) {
    store.remove(AUTH_TOKEN_STORAGE_KEY);
    for legacy_key in LEGACY_AUTH_TOKEN_KEYS {
        store.remove(legacy_key);
    }
}

/// Read the persisted token from localStorage. Returns an empty string
/// off-browser.
pub fn read_auth_token() -> String {
    #[cfg(feature = "hydrate")]
    {
        match local_storage() {
            Some(mut storage) => read_token_from(&mut storage),
            None => String::new(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Persist the token to localStorage. No-op off-browser.
pub fn write_auth_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(mut storage) = local_storage() {
            write_token_to(&mut storage, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token from localStorage. No-op off-browser.
pub fn clear_auth_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(mut storage) = local_storage() {
            clear_token_in(&mut storage);
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Current time as an ISO-8601 string, for save/clear audit fields.
/// Returns `None` off-browser.
pub fn now_iso() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        Some(js_sys::Date::new_0().to_iso_string().into())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
