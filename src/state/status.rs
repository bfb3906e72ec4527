//! Fetch lifecycle tracking shared by every network-backed state model.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Lifecycle of one fetch flow. Cancellation is not represented here: a
/// superseded request is silently discarded and the status reflects the
/// request that replaced it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing requested yet, or the precondition (token) is missing.
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl FetchStatus {
    pub fn is_loading(self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn is_success(self) -> bool {
        matches!(self, FetchStatus::Success)
    }

    pub fn is_error(self) -> bool {
        matches!(self, FetchStatus::Error)
    }
}
