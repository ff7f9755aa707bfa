//! Unit inventory state: canonical rows, pending edits, in-flight saves.
//!
//! DESIGN
//! ======
//! Canonical units (as last fetched) and edited copies live side by side so
//! a revert is just dropping the edited copy and re-fetching. Edits are
//! keyed by unit id and always hold a full record, never a field diff.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use std::collections::{BTreeMap, BTreeSet};

use crate::net::types::UnitData;

/// Shared unit state backed by the `/api/units` endpoints.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnitsState {
    /// Canonical units keyed by id.
    pub units: BTreeMap<i32, UnitData>,
    /// Locally edited, not yet persisted copies keyed by id.
    pub edited_units: BTreeMap<i32, UnitData>,
    /// Ids whose edit is currently being persisted.
    pub submitting: BTreeSet<i32>,
    pub is_fetching: bool,
    pub fetched_once: bool,
    pub error: Option<String>,
}

impl UnitsState {
    pub fn request_units_details(&mut self) {
        self.is_fetching = true;
    }

    /// Replace the canonical set with a fresh server listing.
    pub fn receive_units_details(&mut self, units: Vec<UnitData>) {
        self.units = units.into_iter().map(|u| (u.id, u)).collect();
        self.is_fetching = false;
        self.fetched_once = true;
        self.error = None;
    }

    pub fn fetch_failed(&mut self, message: String) {
        self.is_fetching = false;
        self.error = Some(message);
    }

    /// Record a full edited copy of a unit, replacing any earlier edit.
    pub fn edit_unit_details(&mut self, unit: UnitData) {
        self.edited_units.insert(unit.id, unit);
    }

    pub fn submit_edited_unit(&mut self, id: i32) {
        self.submitting.insert(id);
    }

    /// Replace the canonical row with what the server stored and drop the edit.
    pub fn confirm_unit_edits(&mut self, id: i32, stored: UnitData) {
        self.edited_units.remove(&id);
        self.submitting.remove(&id);
        self.units.insert(id, stored);
    }

    /// A save for `id` was rejected; the edit stays so the user can retry.
    pub fn submit_failed(&mut self, id: i32, message: String) {
        self.submitting.remove(&id);
        self.error = Some(message);
    }

    /// Drop every edited copy; canonical rows are left as they were.
    pub fn discard_edits(&mut self) {
        self.edited_units.clear();
        self.submitting.clear();
    }

    #[must_use]
    pub fn is_edited(&self, id: i32) -> bool {
        self.edited_units.contains_key(&id)
    }

    #[must_use]
    pub fn is_submitting(&self, id: i32) -> bool {
        self.submitting.contains(&id)
    }

    #[must_use]
    pub fn has_edits(&self) -> bool {
        !self.edited_units.is_empty()
    }

    /// The edited copy of a unit when one exists, else the canonical row.
    #[must_use]
    pub fn display_unit(&self, id: i32) -> Option<UnitData> {
        self.edited_units.get(&id).or_else(|| self.units.get(&id)).cloned()
    }

    /// Edited units that are not already being saved.
    #[must_use]
    pub fn pending_submissions(&self) -> Vec<UnitData> {
        self.edited_units
            .values()
            .filter(|u| !self.submitting.contains(&u.id))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn should_fetch(&self) -> bool {
        !self.is_fetching && !self.fetched_once
    }

    /// Canonical unit ids ordered by case-insensitive name, then id.
    #[must_use]
    pub fn sorted_ids(&self) -> Vec<i32> {
        let mut units: Vec<&UnitData> = self.units.values().collect();
        units.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        units.into_iter().map(|u| u.id).collect()
    }
}
