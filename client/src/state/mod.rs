//! Client application state slices.
//!
//! ARCHITECTURE
//! ============
//! Each slice is a plain struct held in an `RwSignal` and provided through
//! Leptos context by `app::App`. Transitions are methods on the structs so
//! they test without a reactive runtime; `unit_actions` is the async layer
//! that pairs them with REST calls.

pub mod auth;
pub mod store;
pub mod unit_actions;
pub mod units;
pub mod unsaved_warning;
