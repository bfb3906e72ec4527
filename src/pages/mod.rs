//! Top-level routed pages.

pub mod coverage;
pub mod dataset;
pub mod sample_detail;
pub mod upload;
