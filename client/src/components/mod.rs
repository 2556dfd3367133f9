//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (header, toasts) and the route guard
//! wrapper, reading session and toast state from Leptos context.

pub mod dialog;
pub mod header;
pub mod product_card;
pub mod require_auth;
pub mod toast_host;
