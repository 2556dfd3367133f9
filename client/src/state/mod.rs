//! Client-side state shared by pages and components.
//!
//! DESIGN
//! ======
//! `session` and `toast` are reactive contexts provided at the app root. The
//! other modules hold plain screen state with pure update methods; pages keep
//! them in signals and call the methods from event handlers.

pub mod cart;
pub mod catalog;
pub mod chat;
pub mod design;
pub mod forms;
pub mod marketing;
pub mod orders;
pub mod session;
pub mod toast;
