//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (token modal/status, catalog search,
//! hall reference) while reading/writing state from Leptos context
//! providers.

pub mod dining_hall_reference;
pub mod menu_item_search;
pub mod token_modal;
pub mod token_status_card;
