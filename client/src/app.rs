//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{nav_bar::NavBar, unsaved_warning::UnsavedWarning};
use crate::pages::{login::LoginPage, units::UnitsPage};
use crate::state::auth::AuthState;
use crate::state::store::Store;
use crate::util::i18n::{self, Locale};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let locale = RwSignal::new(Locale::default());
    provide_context(auth);
    provide_context(locale);
    Store::new().provide();

    // Browser-only preferences; SSR renders the default locale.
    Effect::new(move || locale.set(i18n::read_preference()));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.set(AuthState { user, loading: false });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/unit-console.css"/>
        <Title text=move || i18n::format_message(locale.get(), "units")/>

        <Router>
            <NavBar/>
            <UnsavedWarning/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=UnitsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                </Routes>
            </main>
        </Router>
    }
}
