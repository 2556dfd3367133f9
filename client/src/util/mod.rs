//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (session storage, HTML rendering)
//! from page and component logic.

pub mod browser_storage;
pub mod markdown;
pub mod upload;
