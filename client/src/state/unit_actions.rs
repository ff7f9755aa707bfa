//! Unit actions: the only code that moves data between the REST API and
//! the unit / unsaved-changes state slices.
//!
//! ERROR HANDLING
//! ==============
//! Network failures are recorded on `UnitsState::error` and also returned,
//! so callers that attach continuations (the unsaved-changes bridge) can
//! branch on them. Nothing here retries.

#[cfg(test)]
#[path = "unit_actions_test.rs"]
mod unit_actions_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::store::Store;
use super::units::UnitsState;
use super::unsaved_warning::{Continuation, RemoveFunction, SubmitFunction, UnsavedWarningState};
use crate::net::api;
use crate::net::types::UnitData;

pub fn edit_unit_details(store: Store, unit: UnitData) {
    store.units.update(|s| s.edit_unit_details(unit));
}

/// Take the row the server stored as canonical for `id`.
pub fn confirm_unit_edits(store: Store, id: i32, stored: UnitData) {
    store.units.update(|s| s.confirm_unit_edits(id, stored));
}

/// Throw away every pending edit.
pub fn discard_edited_units(store: Store) {
    store.units.update(UnitsState::discard_edits);
}

/// Reload every unit from the server.
///
/// # Errors
///
/// Returns the request error, which is also stored on the units state.
pub async fn fetch_units_details(store: Store) -> Result<(), String> {
    store.units.update(UnitsState::request_units_details);
    match api::fetch_units().await {
        Ok(units) => {
            store.units.update(|s| s.receive_units_details(units));
            Ok(())
        }
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("units fetch failed: {e}");
            store.units.update(|s| s.fetch_failed(e.clone()));
            Err(e)
        }
    }
}

/// Fetch only when no fetch is running and none has succeeded yet.
///
/// # Errors
///
/// Returns the request error when a fetch was attempted and failed.
pub async fn fetch_units_details_if_needed(store: Store) -> Result<(), String> {
    if store.units.with_untracked(UnitsState::should_fetch) {
        fetch_units_details(store).await
    } else {
        Ok(())
    }
}

/// Persist every edited unit that is not already being saved, one at a time.
///
/// # Errors
///
/// Returns the joined error messages when any unit failed to save; the
/// units that did save are confirmed regardless.
pub async fn submit_edited_units(store: Store) -> Result<(), String> {
    let pending = store.units.with_untracked(UnitsState::pending_submissions);
    let mut failures = Vec::new();

    for unit in pending {
        let id = unit.id;
        store.units.update(|s| s.submit_edited_unit(id));
        match api::edit_unit(&unit).await {
            Ok(stored) => confirm_unit_edits(store, id, stored),
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::warn!("unit {id} edit failed: {e}");
                store.units.update(|s| s.submit_failed(id, e.clone()));
                failures.push(e);
            }
        }
    }

    if !store.units.with_untracked(UnitsState::has_edits) {
        store.unsaved.update(UnsavedWarningState::remove_unsaved_changes);
    }

    if failures.is_empty() { Ok(()) } else { Err(failures.join("; ")) }
}

/// Revert: discard edits, re-fetch canonical data, then continue.
///
/// A failed re-fetch is already on `UnitsState::error`; navigation goes
/// ahead with the last canonical rows.
fn remove_unsaved_changes_function(store: Store) -> RemoveFunction {
    Arc::new(move |done: Continuation| {
        leptos::task::spawn_local(async move {
            discard_edited_units(store);
            if let Err(e) = fetch_units_details(store).await {
                #[cfg(feature = "hydrate")]
                log::warn!("revert re-fetch failed: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
            }
            done();
        });
    })
}

/// Save: submit edits, then run whichever continuation matches the outcome.
fn submit_unsaved_changes_function(store: Store) -> SubmitFunction {
    Arc::new(move |on_success: Continuation, on_failure: Continuation| {
        leptos::task::spawn_local(async move {
            match submit_edited_units(store).await {
                Ok(()) => on_success(),
                Err(_) => on_failure(),
            }
        });
    })
}

/// Tell the unsaved-changes notifier that unit edits exist.
pub fn update_unsaved_changes(store: Store) {
    let remove = remove_unsaved_changes_function(store);
    let submit = submit_unsaved_changes_function(store);
    store.unsaved.update(|s| s.update_unsaved_changes(remove, submit));
}
