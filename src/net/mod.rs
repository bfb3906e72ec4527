//! Networking modules for the metadata API and the menu API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the authenticated MenuMatch metadata API (dataset,
//! presigns, metadata writes), `menu` talks to the public Husky Eats menu
//! API, and `types` defines the shared wire schema.

pub mod api;
pub mod menu;
pub mod types;
