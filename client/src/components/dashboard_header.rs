//! Page header with the bot picker and the chunk search form.

use leptos::prelude::*;

use crate::components::bot_search::BotSearch;
use crate::components::bot_selector::BotSelector;

#[cfg(test)]
#[path = "dashboard_header_test.rs"]
mod dashboard_header_test;

/// `?picker=search` swaps the dropdown for the free-text picker.
pub fn autocomplete_requested(picker: Option<&str>) -> bool {
    picker.is_some_and(|p| p.trim().eq_ignore_ascii_case("search"))
}

/// Header bar. Uses the dropdown selector unless `autocomplete` is set, in
/// which case the free-text picker is shown instead.
#[component]
pub fn DashboardHeader(
    #[prop(into)] selected_bot: Signal<String>,
    on_select_bot: Callback<String>,
    on_search: Callback<String>,
    #[prop(optional)] autocomplete: bool,
) -> impl IntoView {
    let query = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_search.run(query.get_untracked());
    };

    let picker = if autocomplete {
        view! { <BotSearch selected_bot=selected_bot on_select_bot=on_select_bot/> }.into_any()
    } else {
        view! { <BotSelector selected_bot=selected_bot on_select_bot=on_select_bot/> }.into_any()
    };

    view! {
        <header class="dashboard-header">
            <div class="dashboard-header__brand">
                <h1>"RAG Chunk Visualizer"</h1>
                <p>"Analyze and improve your RAG document quality metrics"</p>
            </div>
            <div class="dashboard-header__controls">
                {picker}
                <form class="dashboard-header__search" on:submit=on_submit>
                    <input
                        class="dashboard-header__search-input"
                        type="search"
                        placeholder="Search chunks..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">
                        "Search"
                    </button>
                </form>
            </div>
        </header>
    }
}
