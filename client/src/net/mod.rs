//! Networking modules for the storefront backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoints` describes each backend call, `api` executes them over HTTP,
//! and `types` defines the JSON shapes exchanged with the backend.

pub mod api;
pub mod endpoints;
pub mod types;
