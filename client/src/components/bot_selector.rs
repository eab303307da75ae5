//! Dropdown bot selector.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::state::fetch::{FetchSlot, FetchState};

#[cfg(test)]
#[path = "bot_selector_test.rs"]
mod bot_selector_test;

/// Candidate bot ids, fetched once when the calling component mounts.
pub(crate) fn bot_candidates() -> RwSignal<FetchSlot<Vec<String>>> {
    let candidates = RwSignal::new(FetchSlot::<Vec<String>>::default());
    let alive = Arc::new(AtomicBool::new(true));
    let ticket = candidates.try_update(FetchSlot::begin).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_bots().await;
            if alive.load(Ordering::Relaxed) {
                candidates.try_update(|s| s.resolve(ticket, result));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ticket;
    }

    on_cleanup(move || {
        alive.store(false, Ordering::Relaxed);
        candidates.try_update(FetchSlot::invalidate);
    });
    candidates
}

/// Only an in-flight fetch locks the dropdown; a failed fetch leaves it usable.
fn selector_disabled(state: &FetchState<Vec<String>>) -> bool {
    state.is_loading()
}

fn selector_error(state: &FetchState<Vec<String>>) -> Option<String> {
    state.error().map(|message| format!("Could not load bots: {message}"))
}

#[component]
pub fn BotSelector(#[prop(into)] selected_bot: Signal<String>, on_select_bot: Callback<String>) -> impl IntoView {
    let candidates = bot_candidates();
    let disabled = move || candidates.with(|c| selector_disabled(&c.state));
    let error = move || candidates.with(|c| selector_error(&c.state));

    view! {
        <label class="bot-selector">
            <span class="bot-selector__label">"Bot ID:"</span>
            <select
                class="bot-selector__select"
                disabled=disabled
                prop:value=move || selected_bot.get()
                on:change=move |ev| on_select_bot.run(event_target_value(&ev))
            >
                <option value="" disabled=true>"Select a bot"</option>
                {move || {
                    candidates.with(|c| {
                        c.state
                            .data()
                            .cloned()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|bot| {
                                let selected = bot == selected_bot.get_untracked();
                                let label = bot.clone();
                                view! { <option value=bot selected=selected>{label}</option> }
                            })
                            .collect_view()
                    })
                }}
            </select>
            {move || error().map(|message| view! { <span class="bot-selector__error">{message}</span> })}
        </label>
    }
}
