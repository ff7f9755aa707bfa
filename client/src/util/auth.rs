//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation bar and the unsaved-changes modal both end a session, and
//! must do it identically.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// End the session on the server, forget the user, and return to `/login`.
pub fn log_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        auth.set(AuthState { user: None, loading: false });
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    auth.set(AuthState { user: None, loading: false });
}
