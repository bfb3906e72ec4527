//! Team API token state: the blocking precondition for every metadata
//! API call.
//!
//! DESIGN
//! ======
//! The token lives in an explicit `TokenState` model provided through
//! Leptos context as `RwSignal<TokenState>`, so readers subscribe to
//! changes instead of re-reading ambient storage. Persistence goes
//! through [`crate::util::storage`], which also migrates legacy keys.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use crate::util::storage;

/// Shared API-token state and the modal that edits it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenState {
    /// The active token; empty when not configured.
    pub token: String,
    /// Whether the entry modal is showing.
    pub modal_open: bool,
    /// Draft value inside the modal input.
    pub input: String,
    /// Validation feedback shown inside the modal.
    pub feedback: String,
    /// ISO timestamp of the last successful save, for the status card.
    pub last_saved_at: Option<String>,
    /// ISO timestamp of the last clear.
    pub last_cleared_at: Option<String>,
}

impl TokenState {
    /// Initial state from a previously stored token. The modal opens
    /// immediately when no token is configured.
    pub fn from_stored(token: String) -> Self {
        Self {
            modal_open: token.is_empty(),
            input: token.clone(),
            token,
            ..Self::default()
        }
    }

    /// Load the persisted token (migrating legacy keys) and build the
    /// initial state.
    pub fn load() -> Self {
        Self::from_stored(storage::read_auth_token())
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Token masked for display: all dots when short, otherwise dots
    /// plus the last four characters.
    pub fn masked(&self) -> String {
        if self.token.is_empty() {
            return String::new();
        }
        if self.token.chars().count() <= 4 {
            return "••••".to_owned();
        }
        let tail: String = {
            let chars: Vec<char> = self.token.chars().collect();
            chars[chars.len() - 4..].iter().collect()
        };
        format!("••••{tail}")
    }

    /// Open the modal with the current token as the draft.
    pub fn open_modal(&mut self) {
        self.input = self.token.clone();
        self.feedback.clear();
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.feedback.clear();
    }

    /// Persist a new token. Blank input is rejected with feedback and
    /// the modal stays open.
    pub fn save(&mut self, value: &str, saved_at: Option<String>) -> bool {
        let normalized = value.trim();
        if normalized.is_empty() {
            self.feedback = "Enter your team API token to continue.".to_owned();
            return false;
        }
        storage::write_auth_token(normalized);
        self.token = normalized.to_owned();
        self.input = normalized.to_owned();
        self.feedback.clear();
        self.modal_open = false;
        self.last_saved_at = saved_at;
        true
    }

    /// Wipe the persisted token and re-open the entry modal.
    pub fn clear(&mut self, cleared_at: Option<String>) {
        storage::clear_auth_token();
        self.token.clear();
        self.input.clear();
        self.feedback.clear();
        self.modal_open = true;
        self.last_cleared_at = cleared_at;
    }
}
