//! Units page: the table of every unit, editable inline by admins.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route. Fetches units once per session, derives each row's flags
//! from `UnitsState`, and routes row edits back into the store through
//! `unit_actions`.

use leptos::prelude::*;

use crate::components::unit_view::UnitView;
use crate::components::units_header::UnitsHeader;
use crate::net::types::UnitData;
use crate::state::auth::AuthState;
use crate::state::store::Store;
use crate::state::unit_actions;
use crate::util::i18n::{Locale, format_message};

#[component]
pub fn UnitsPage() -> impl IntoView {
    let store = Store::expect();
    let auth = expect_context::<RwSignal<AuthState>>();
    let locale = expect_context::<RwSignal<Locale>>();
    let is_admin = Signal::derive(move || auth.with(AuthState::is_admin));
    let saving = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let _ = unit_actions::fetch_units_details_if_needed(store).await;
    });

    let edit_unit_details = Callback::new(move |unit: UnitData| unit_actions::edit_unit_details(store, unit));

    let on_save_all = move |_| {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let _ = unit_actions::submit_edited_units(store).await;
            saving.set(false);
        });
    };

    let msg = move |id: &'static str| move || format_message(locale.get(), id);
    let has_edits = move || store.units.with(|s| s.has_edits());
    let loading = move || store.units.with(|s| s.is_fetching && s.units.is_empty());
    let fetch_error = move || store.units.with(|s| s.error.clone());
    let empty = move || store.units.with(|s| s.fetched_once && s.units.is_empty());

    view! {
        <div class="units-page">
            <div class="units-page__header">
                <h2>{msg("units")}</h2>
                <Show when=move || is_admin.get()>
                    <button
                        class="btn btn--primary"
                        disabled=move || !has_edits() || saving.get()
                        on:click=on_save_all
                    >
                        {msg("save.all")}
                    </button>
                </Show>
            </div>
            <Show when=move || fetch_error().is_some()>
                <p class="units-page__error">{msg("units.failed.to.fetch")}</p>
            </Show>
            <Show when=loading>
                <p class="units-page__status">{msg("loading")}</p>
            </Show>
            <Show when=empty>
                <p class="units-page__status">{msg("no.units")}</p>
            </Show>
            <table class="units-table">
                <UnitsHeader logged_in_as_admin=is_admin/>
                <tbody>
                    <For
                        each=move || store.units.with(|s| s.sorted_ids())
                        key=|id| *id
                        children=move |id| {
                            let unit = Signal::derive(move || {
                                store.units.with(|s| s.display_unit(id)).unwrap_or_default()
                            });
                            let is_edited = Signal::derive(move || store.units.with(|s| s.is_edited(id)));
                            let is_submitting = Signal::derive(move || {
                                store.units.with(|s| s.is_submitting(id))
                            });
                            view! {
                                <UnitView
                                    unit=unit
                                    is_edited=is_edited
                                    is_submitting=is_submitting
                                    logged_in_as_admin=is_admin
                                    edit_unit_details=edit_unit_details
                                />
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
