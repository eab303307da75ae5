//! Free-text bot picker with an autocomplete dropdown.

use leptos::prelude::*;

use chunks::suggest::{filter_suggestions, resolve_candidate};

use crate::components::bot_selector::bot_candidates;
use crate::state::fetch::FetchState;

#[cfg(test)]
#[path = "bot_search_test.rs"]
mod bot_search_test;

/// Dropdown entries for the typed text. Nothing is offered until the bot
/// list has loaded.
fn visible_suggestions(state: &FetchState<Vec<String>>, text: &str) -> Vec<String> {
    let all = state.data().map_or(&[][..], Vec::as_slice);
    filter_suggestions(all, text).into_iter().map(str::to_owned).collect()
}

#[component]
pub fn BotSearch(#[prop(into)] selected_bot: Signal<String>, on_select_bot: Callback<String>) -> impl IntoView {
    let candidates = bot_candidates();
    let input = RwSignal::new(selected_bot.get_untracked());
    let open = RwSignal::new(false);

    // Follow selections made elsewhere, e.g. the initial auto-selection.
    Effect::new(move || {
        let bot = selected_bot.get();
        if !open.get_untracked() {
            input.set(bot);
        }
    });

    let choose = Callback::new(move |bot: String| {
        input.set(bot.clone());
        open.set(false);
        on_select_bot.run(bot);
    });

    let suggestions = move || {
        let text = input.get();
        candidates.with(|c| visible_suggestions(&c.state, &text))
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            let text = input.get_untracked();
            let matched = candidates.with_untracked(|c| {
                c.state.data().and_then(|all| resolve_candidate(all, &text)).map(str::to_owned)
            });
            if let Some(bot) = matched {
                choose.run(bot);
            }
        }
        "Escape" => open.set(false),
        _ => {}
    };

    view! {
        <div class="bot-search">
            <label class="bot-search__label">
                "Bot ID:"
                <input
                    class="bot-search__input"
                    type="text"
                    placeholder="Search bots..."
                    autocomplete="off"
                    prop:value=move || input.get()
                    on:input=move |ev| {
                        input.set(event_target_value(&ev));
                        open.set(true);
                    }
                    on:focus=move |_| open.set(true)
                    on:blur=move |_| open.set(false)
                    on:keydown=on_keydown
                />
            </label>
            <Show when=move || open.get()>
                <ul class="bot-search__suggestions" role="listbox">
                    {move || {
                        suggestions()
                            .into_iter()
                            .map(|bot| {
                                let label = bot.clone();
                                view! {
                                    <li
                                        class="bot-search__suggestion"
                                        role="option"
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            choose.run(bot.clone());
                                        }
                                    >
                                        {label}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
