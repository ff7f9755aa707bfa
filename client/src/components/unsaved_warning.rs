//! Modal asking what to do with unsaved edits before leaving.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shown whenever `UnsavedWarningState::pending` holds a blocked navigation
//! or log-out. *Leave* runs the registered revert callback, *Save* runs the
//! registered save callback, and both continue to the blocked target once
//! their callback settles. A failed save keeps the modal open.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::store::Store;
use crate::state::unsaved_warning::{PendingNavigation, UnsavedWarningState};
use crate::util::auth::log_out;
use crate::util::i18n::{Locale, format_message};

#[component]
pub fn UnsavedWarning() -> impl IntoView {
    let store = Store::expect();
    let auth = expect_context::<RwSignal<AuthState>>();
    let locale = expect_context::<RwSignal<Locale>>();
    let navigate = StoredValue::new_local(use_navigate());
    let busy = RwSignal::new(false);
    let failed = RwSignal::new(false);

    let finish = move |target: Option<PendingNavigation>| {
        busy.set(false);
        failed.set(false);
        store.unsaved.update(UnsavedWarningState::remove_unsaved_changes);
        match target {
            Some(PendingNavigation::Route(path)) => {
                navigate.with_value(|nav| nav(&path, NavigateOptions::default()));
            }
            Some(PendingNavigation::LogOut) => log_out(auth),
            None => {}
        }
    };

    let on_leave = move |_| {
        let (remove, target) = store
            .unsaved
            .with_untracked(|s| (s.remove_function.clone(), s.pending.clone()));
        let Some(remove) = remove else {
            finish(target);
            return;
        };
        busy.set(true);
        remove(Box::new(move || finish(target)));
    };

    let on_save = move |_| {
        let (submit, target) = store
            .unsaved
            .with_untracked(|s| (s.submit_function.clone(), s.pending.clone()));
        let Some(submit) = submit else {
            finish(target);
            return;
        };
        busy.set(true);
        failed.set(false);
        submit(
            Box::new(move || finish(target)),
            Box::new(move || {
                busy.set(false);
                failed.set(true);
            }),
        );
    };

    let on_cancel = move |_| {
        if busy.get_untracked() {
            return;
        }
        failed.set(false);
        store.unsaved.update(UnsavedWarningState::cancel_navigation);
    };

    let msg = move |id: &'static str| move || format_message(locale.get(), id);

    view! {
        <Show when=move || store.unsaved.with(|s| s.pending.is_some())>
            <div class="dialog-backdrop" on:click=on_cancel>
                <div class="dialog dialog--unsaved" on:click=move |ev| ev.stop_propagation()>
                    <p class="dialog__message">{msg("unsaved.warning")}</p>
                    <Show when=move || failed.get()>
                        <p class="dialog__error">{msg("unsaved.failure")}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" disabled=move || busy.get() on:click=on_cancel>
                            {msg("cancel")}
                        </button>
                        <button class="btn btn--danger" disabled=move || busy.get() on:click=on_leave>
                            {msg("leave")}
                        </button>
                        <button class="btn btn--primary" disabled=move || busy.get() on:click=on_save>
                            {msg("save.all")}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
