//! Header row of the units table.

use leptos::prelude::*;

use crate::components::unit_view::visible_columns;
use crate::util::i18n::{Locale, format_message};

/// `<thead>` whose columns match what `UnitView` renders for the same viewer.
#[component]
pub fn UnitsHeader(#[prop(into)] logged_in_as_admin: Signal<bool>) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    let titles = move || {
        let loc = locale.get();
        visible_columns(logged_in_as_admin.get())
            .into_iter()
            .map(|column| view! { <th>{format_message(loc, column.title_id())}</th> })
            .collect_view()
    };

    view! {
        <thead>
            <tr>{titles}</tr>
        </thead>
    }
}
