//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public pages render directly. Protected pages wrap their content in
//! `RequireAuth` and load data from the allowed token it provides.

pub mod account;
pub mod cart;
pub mod chatbot;
pub mod dashboard;
pub mod design;
pub mod explore;
pub mod home;
pub mod login;
pub mod marketing;
pub mod not_found;
pub mod profile;
pub mod shop;
pub mod signup;
