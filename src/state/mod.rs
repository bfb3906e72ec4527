//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`token`, `dataset`, `catalog`,
//! `menu_context`) so individual components can depend on small focused
//! models. Each model is provided through context as an `RwSignal` and
//! guards against superseded fetches with a request sequence number.

pub mod catalog;
pub mod dataset;
pub mod menu_context;
pub mod status;
pub mod token;
