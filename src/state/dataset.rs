//! Dataset fetch state: the full set of recorded samples.
//!
//! A token change supersedes any in-flight fetch; the sequence number
//! pattern in `begin`/`apply` drops stale results instead of treating
//! them as errors.

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;

use super::status::FetchStatus;
use crate::net::types::SampleRecord;

/// Shared dataset state consumed by the dataset and coverage pages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DatasetState {
    pub status: FetchStatus,
    pub error: String,
    pub records: Vec<SampleRecord>,
    /// Sequence of the most recently issued fetch; responses carrying an
    /// older sequence are discarded.
    pub seq: u64,
}

impl DatasetState {
    /// Start a new fetch, superseding any in-flight one. Returns the
    /// sequence the eventual `apply` must present.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.status = FetchStatus::Loading;
        self.error.clear();
        self.seq
    }

    /// Apply a fetch outcome. Outcomes from superseded fetches are
    /// ignored entirely.
    pub fn apply(&mut self, seq: u64, outcome: Result<Vec<SampleRecord>, String>) {
        if seq != self.seq {
            return;
        }
        match outcome {
            Ok(records) => {
                self.records = records;
                self.status = FetchStatus::Success;
                self.error.clear();
            }
            Err(message) => {
                self.status = FetchStatus::Error;
                self.error = message;
            }
        }
    }

    /// Drop everything, e.g. when the token is cleared. Also bumps the
    /// sequence so an in-flight fetch cannot resurrect stale records.
    pub fn reset(&mut self) {
        self.seq += 1;
        self.status = FetchStatus::Idle;
        self.error.clear();
        self.records.clear();
    }
}
