//! Table row for one unit, with an inline identifier editor for admins.
//!
//! SYSTEM CONTEXT
//! ==============
//! `UnitsPage` renders one `UnitView` per unit and hands it the display copy
//! (edited if an edit exists), the edited/submitting flags, and the admin
//! flag. The row never mutates the unit it receives: a committed identifier
//! edit goes back up through `edit_unit_details` as a full modified copy.
//!
//! DESIGN
//! ======
//! Column gating, status text, the editor state machine, and the
//! edited-flag edge detection are plain functions and structs so they can
//! be tested without a reactive runtime. The component only wires them to
//! signals.

#[cfg(test)]
#[path = "unit_view_test.rs"]
mod unit_view_test;

use leptos::prelude::*;

use crate::net::types::UnitData;
use crate::state::store::Store;
use crate::state::unit_actions;
use crate::util::i18n::{Locale, format_message};

/// Columns of the units table, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitColumn {
    Id,
    Name,
    Identifier,
    UnitRepresent,
    SecInRate,
    TypeOfUnit,
    Suffix,
    Displayable,
    PreferredDisplay,
    Note,
}

impl UnitColumn {
    pub const ALL: [Self; 10] = [
        Self::Id,
        Self::Name,
        Self::Identifier,
        Self::UnitRepresent,
        Self::SecInRate,
        Self::TypeOfUnit,
        Self::Suffix,
        Self::Displayable,
        Self::PreferredDisplay,
        Self::Note,
    ];

    /// Message id of the column header.
    #[must_use]
    pub fn title_id(self) -> &'static str {
        match self {
            Self::Id => "unit.id",
            Self::Name => "name",
            Self::Identifier => "identifier",
            Self::UnitRepresent => "unit.represent",
            Self::SecInRate => "sec.in.rate",
            Self::TypeOfUnit => "type.of.unit",
            Self::Suffix => "unit.suffix",
            Self::Displayable => "displayable",
            Self::PreferredDisplay => "unit.preferred.display",
            Self::Note => "note",
        }
    }
}

/// Columns a viewer sees. Non-admins only ever get the identifier.
#[must_use]
pub fn visible_columns(is_admin: bool) -> Vec<UnitColumn> {
    if is_admin {
        UnitColumn::ALL.to_vec()
    } else {
        vec![UnitColumn::Identifier]
    }
}

/// Display text of one cell. Enum values and flags are localized.
#[must_use]
pub fn column_text(locale: Locale, unit: &UnitData, column: UnitColumn) -> String {
    match column {
        UnitColumn::Id => unit.id.to_string(),
        UnitColumn::Name => unit.name.clone(),
        UnitColumn::Identifier => unit.identifier.clone(),
        UnitColumn::UnitRepresent => format_message(locale, unit.unit_represent.as_str()),
        UnitColumn::SecInRate => unit.sec_in_rate.to_string(),
        UnitColumn::TypeOfUnit => format_message(locale, unit.type_of_unit.as_str()),
        UnitColumn::Suffix => unit.suffix.clone(),
        UnitColumn::Displayable => format_message(locale, unit.displayable.as_str()),
        UnitColumn::PreferredDisplay => format_message(locale, if unit.preferred_display { "yes" } else { "no" }),
        UnitColumn::Note => unit.note.clone(),
    }
}

/// Status annotation appended to admin cells. Submitting wins over edited.
#[must_use]
pub fn format_status(locale: Locale, is_submitting: bool, is_edited: bool) -> String {
    if is_submitting {
        return format!("({})", format_message(locale, "submitting"));
    }
    if is_edited {
        return format_message(locale, "edited");
    }
    String::new()
}

/// True only on a false -> true change of the edited flag. The first
/// observation (`previous == None`) is the mount, not a change.
#[must_use]
pub fn should_register_unsaved_changes(previous: Option<bool>, current: bool) -> bool {
    current && previous == Some(false)
}

/// Local state of the identifier cell: viewing or editing, plus input text.
///
/// Outside of editing, `input` always equals the committed identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierEditor {
    focus: bool,
    input: String,
}

impl IdentifierEditor {
    #[must_use]
    pub fn new(unit: &UnitData) -> Self {
        Self { focus: false, input: unit.identifier.clone() }
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.focus
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the draft text. Ignored while viewing.
    pub fn set_input(&mut self, text: String) {
        if self.focus {
            self.input = text;
        }
    }

    /// Flip between viewing and editing. Leaving edit mode returns a copy of
    /// `unit` carrying the drafted identifier.
    pub fn toggle(&mut self, unit: &UnitData) -> Option<UnitData> {
        let committed = self.focus.then(|| UnitData { identifier: self.input.clone(), ..unit.clone() });
        self.focus = !self.focus;
        committed
    }

    /// Adopt the identifier of a freshly fetched or confirmed unit.
    pub fn sync_committed(&mut self, unit: &UnitData) {
        if !self.focus && self.input != unit.identifier {
            self.input.clone_from(&unit.identifier);
        }
    }

    #[must_use]
    pub fn button_message_id(&self) -> &'static str {
        if self.focus { "update" } else { "edit" }
    }
}

/// One `<tr>` of the units table.
#[component]
pub fn UnitView(
    #[prop(into)] unit: Signal<UnitData>,
    #[prop(into)] is_edited: Signal<bool>,
    #[prop(into)] is_submitting: Signal<bool>,
    #[prop(into)] logged_in_as_admin: Signal<bool>,
    edit_unit_details: Callback<UnitData>,
) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let store = Store::expect();
    let editor = RwSignal::new(IdentifierEditor::new(&unit.get_untracked()));

    Effect::new(move || {
        let current = unit.get();
        editor.update(|e| e.sync_committed(&current));
    });

    Effect::new(move |previous: Option<bool>| {
        let current = is_edited.get();
        if should_register_unsaved_changes(previous, current) {
            unit_actions::update_unsaved_changes(store);
        }
        current
    });

    let status = move || format_status(locale.get(), is_submitting.get(), is_edited.get());
    let editing = Memo::new(move |_| editor.with(IdentifierEditor::is_editing));
    let input_text = move || editor.with(|e| e.input().to_owned());

    let on_toggle = move |_| {
        let current = unit.get_untracked();
        if let Some(edited) = editor.try_update(|e| e.toggle(&current)).flatten() {
            edit_unit_details.run(edited);
        }
    };

    let identifier_cell = move || {
        if !logged_in_as_admin.get() {
            return view! { <div>{input_text}</div> }.into_any();
        }
        view! {
            <div class="unit-row__identifier">
                <Show when=move || editing.get() fallback=move || view! { <div>{input_text}</div> }>
                    <textarea
                        id="identifier"
                        autofocus=true
                        prop:value=input_text
                        on:input=move |ev| editor.update(|e| e.set_input(event_target_value(&ev)))
                    ></textarea>
                </Show>
                <button class="btn btn--primary unit-row__toggle" style="float: right" on:click=on_toggle>
                    {move || format_message(locale.get(), editor.with(IdentifierEditor::button_message_id))}
                </button>
            </div>
        }
        .into_any()
    };

    let cells = move || {
        let current = unit.get();
        let loc = locale.get();
        visible_columns(logged_in_as_admin.get())
            .into_iter()
            .map(|column| {
                if column == UnitColumn::Identifier {
                    view! { <td>{identifier_cell}</td> }.into_any()
                } else {
                    view! { <td>{column_text(loc, &current, column)} " " {status}</td> }.into_any()
                }
            })
            .collect_view()
    };

    view! { <tr class="unit-row">{cells}</tr> }
}
