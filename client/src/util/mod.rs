//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-facing helpers: locale catalogs and preference storage, and the
//! log-out flow. Storage and redirects fall back to defaults outside the
//! `hydrate` build.

pub mod auth;
pub mod i18n;
