//! Top navigation: page links, language selector, and session control.
//!
//! Every navigation goes through `UnsavedWarningState::request_navigation`
//! so unsaved unit edits are never dropped silently.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::store::Store;
use crate::state::unsaved_warning::PendingNavigation;
use crate::util::auth::log_out;
use crate::util::i18n::{self, Locale, format_message};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = Store::expect();
    let auth = expect_context::<RwSignal<AuthState>>();
    let locale = expect_context::<RwSignal<Locale>>();
    let navigate = StoredValue::new_local(use_navigate());

    let go = move |path: &'static str| {
        let allowed = store
            .unsaved
            .try_update(|s| s.request_navigation(PendingNavigation::Route(path.to_owned())))
            .unwrap_or(true);
        if allowed {
            navigate.with_value(|nav| nav(path, NavigateOptions::default()));
        }
    };

    let on_log_out = move |_| {
        let allowed = store
            .unsaved
            .try_update(|s| s.request_navigation(PendingNavigation::LogOut))
            .unwrap_or(true);
        if allowed {
            log_out(auth);
        }
    };

    let on_locale = move |ev| {
        if let Some(next) = Locale::from_tag(&event_target_value(&ev)) {
            locale.set(next);
            i18n::persist(next);
        }
    };

    let msg = move |id: &'static str| move || format_message(locale.get(), id);

    let session_control = move || {
        if auth.with(|a| a.user.is_some()) {
            view! {
                <span class="nav-bar__user">{move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()))}</span>
                <button class="btn nav-bar__session" on:click=on_log_out>{msg("log.out")}</button>
            }
            .into_any()
        } else {
            view! {
                <a
                    href="/login"
                    class="btn nav-bar__session"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go("/login");
                    }
                >
                    {msg("log.in")}
                </a>
            }
            .into_any()
        }
    };

    view! {
        <nav class="nav-bar">
            <a
                href="/"
                class="nav-bar__link"
                on:click=move |ev| {
                    ev.prevent_default();
                    go("/");
                }
            >
                {msg("units")}
            </a>
            <div class="nav-bar__spacer"></div>
            <label class="nav-bar__locale">
                {msg("language")}
                <select on:change=on_locale>
                    {Locale::ALL
                        .into_iter()
                        .map(|l| {
                            view! {
                                <option value=l.code() selected=move || locale.get() == l>
                                    {l.native_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            {session_control}
        </nav>
    }
}
