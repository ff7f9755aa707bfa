use super::*;

fn unit(id: i32, name: &str) -> UnitData {
    UnitData {
        id,
        name: name.to_owned(),
        identifier: name.to_owned(),
        sec_in_rate: 3600,
        ..UnitData::default()
    }
}

fn loaded() -> UnitsState {
    let mut state = UnitsState::default();
    state.receive_units_details(vec![unit(1, "kWh"), unit(2, "BTU"), unit(3, "liter")]);
    state
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn default_state_should_fetch() {
    let state = UnitsState::default();
    assert!(state.should_fetch());
    assert!(state.units.is_empty());
    assert!(!state.has_edits());
}

#[test]
fn request_marks_fetching_and_blocks_refetch() {
    let mut state = UnitsState::default();
    state.request_units_details();
    assert!(state.is_fetching);
    assert!(!state.should_fetch());
}

#[test]
fn receive_replaces_units_and_clears_error() {
    let mut state = UnitsState::default();
    state.fetch_failed("boom".to_owned());
    state.request_units_details();
    state.receive_units_details(vec![unit(7, "therm")]);
    assert_eq!(state.units.len(), 1);
    assert!(!state.is_fetching);
    assert!(state.fetched_once);
    assert_eq!(state.error, None);
    assert!(!state.should_fetch());
}

#[test]
fn fetch_failure_allows_retry() {
    let mut state = UnitsState::default();
    state.request_units_details();
    state.fetch_failed("units fetch failed: 500".to_owned());
    assert!(!state.is_fetching);
    assert_eq!(state.error.as_deref(), Some("units fetch failed: 500"));
    assert!(state.should_fetch());
}

// =============================================================
// Edits
// =============================================================

#[test]
fn edit_keeps_canonical_untouched() {
    let mut state = loaded();
    let mut edited = unit(1, "kWh");
    edited.identifier = "kilowatt hour".to_owned();
    state.edit_unit_details(edited.clone());

    assert!(state.is_edited(1));
    assert!(!state.is_edited(2));
    assert_eq!(state.units[&1].identifier, "kWh");
    assert_eq!(state.display_unit(1), Some(edited));
    assert_eq!(state.display_unit(2).map(|u| u.identifier), Some("BTU".to_owned()));
}

#[test]
fn later_edit_replaces_earlier_edit() {
    let mut state = loaded();
    let mut first = unit(1, "kWh");
    first.identifier = "a".to_owned();
    let mut second = unit(1, "kWh");
    second.identifier = "b".to_owned();
    state.edit_unit_details(first);
    state.edit_unit_details(second);
    assert_eq!(state.edited_units.len(), 1);
    assert_eq!(state.edited_units[&1].identifier, "b");
}

#[test]
fn display_unit_missing_is_none() {
    assert_eq!(loaded().display_unit(99), None);
}

// =============================================================
// Submit / confirm
// =============================================================

#[test]
fn confirm_stores_server_row_and_clears_submitting() {
    let mut state = loaded();
    let mut edited = unit(2, "BTU");
    edited.identifier = "British thermal unit".to_owned();
    state.edit_unit_details(edited.clone());
    state.submit_edited_unit(2);
    assert!(state.is_submitting(2));

    state.confirm_unit_edits(2, edited);
    assert!(!state.is_submitting(2));
    assert!(!state.is_edited(2));
    assert_eq!(state.units[&2].identifier, "British thermal unit");
}

#[test]
fn confirm_prefers_stored_row_over_edited_copy() {
    let mut state = loaded();
    let mut edited = unit(1, "kWh");
    edited.identifier = "  ".to_owned();
    state.edit_unit_details(edited);
    state.submit_edited_unit(1);

    let mut stored = unit(1, "kWh");
    stored.identifier = "kWh".to_owned();
    stored.name = "kWh".to_owned();
    state.confirm_unit_edits(1, stored.clone());
    assert_eq!(state.units[&1], stored);
    assert_eq!(state.display_unit(1), Some(stored));
}

#[test]
fn submit_failure_keeps_edit() {
    let mut state = loaded();
    state.edit_unit_details(unit(3, "liter"));
    state.submit_edited_unit(3);
    state.submit_failed(3, "unit edit failed: 409".to_owned());
    assert!(!state.is_submitting(3));
    assert!(state.is_edited(3));
    assert_eq!(state.error.as_deref(), Some("unit edit failed: 409"));
}

#[test]
fn pending_submissions_skip_in_flight_units() {
    let mut state = loaded();
    state.edit_unit_details(unit(1, "kWh"));
    state.edit_unit_details(unit(3, "liter"));
    state.submit_edited_unit(1);
    let pending: Vec<i32> = state.pending_submissions().iter().map(|u| u.id).collect();
    assert_eq!(pending, vec![3]);
}

#[test]
fn discard_edits_keeps_canonical_rows() {
    let mut state = loaded();
    let mut draft = unit(1, "kWh");
    draft.identifier = "unsaved draft".to_owned();
    state.edit_unit_details(draft);
    state.edit_unit_details(unit(2, "BTU"));
    state.submit_edited_unit(2);

    state.discard_edits();
    assert!(!state.has_edits());
    assert!(!state.is_edited(1));
    assert!(!state.is_submitting(2));
    assert_eq!(state.units[&1].identifier, "kWh");
    assert_eq!(state.display_unit(1).map(|u| u.identifier), Some("kWh".to_owned()));
}

#[test]
fn discard_without_edits_is_noop_on_units() {
    let mut state = loaded();
    let before = state.units.clone();
    state.discard_edits();
    assert_eq!(state.units, before);
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn sorted_ids_orders_by_name_case_insensitively() {
    let state = loaded();
    assert_eq!(state.sorted_ids(), vec![2, 1, 3]);
}

#[test]
fn sorted_ids_breaks_name_ties_by_id() {
    let mut state = UnitsState::default();
    state.receive_units_details(vec![unit(9, "Gallon"), unit(4, "gallon")]);
    assert_eq!(state.sorted_ids(), vec![4, 9]);
}
