//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the units table and its chrome while reading/writing
//! shared state from Leptos context providers.

pub mod nav_bar;
pub mod unit_view;
pub mod units_header;
pub mod unsaved_warning;
