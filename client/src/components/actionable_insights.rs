//! Recommendations panel for the selected bot.
//!
//! Fetches its own insights whenever the bot changes. Loading, failure and
//! an empty list each render their own message.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use chunks::InsightItem;
use chunks::insights::insight_style;

use crate::state::fetch::{FetchSlot, FetchState};

#[component]
pub fn ActionableInsights(#[prop(into)] bot_id: Signal<String>) -> impl IntoView {
    let insights = RwSignal::new(FetchSlot::<Vec<InsightItem>>::default());
    let alive = Arc::new(AtomicBool::new(true));

    let alive_fetch = alive.clone();
    Effect::new(move || {
        let bot = bot_id.get();
        if bot.is_empty() {
            insights.update(FetchSlot::reset);
            return;
        }
        let Some(ticket) = insights.try_update(FetchSlot::begin) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let alive = alive_fetch.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_insights(&bot).await;
                if alive.load(Ordering::Relaxed) {
                    insights.try_update(|s| s.resolve(ticket, result));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, bot, &alive_fetch);
        }
    });

    on_cleanup(move || {
        alive.store(false, Ordering::Relaxed);
        insights.try_update(FetchSlot::invalidate);
    });

    let content = move || {
        insights.with(|slot| match &slot.state {
            FetchState::Idle | FetchState::Loading => {
                view! { <p class="insights__status">"Loading insights..."</p> }.into_any()
            }
            FetchState::Failed(message) => view! {
                <p class="insights__status insights__status--error">{format!("Could not load insights: {message}")}</p>
            }
            .into_any(),
            FetchState::Loaded(items) if items.is_empty() => {
                view! { <p class="insights__status">"No insights available for this bot."</p> }.into_any()
            }
            FetchState::Loaded(items) => items
                .iter()
                .map(|item| view! { <InsightCard item=item.clone()/> })
                .collect_view()
                .into_any(),
        })
    };

    view! {
        <div class="card insights">
            <header class="card__header">
                <h2 class="card__title">"Actionable Insights"</h2>
                <p class="card__description">"Recommendations to improve your RAG chunks"</p>
            </header>
            <div class="insights__list">{content}</div>
        </div>
    }
}

#[component]
fn InsightCard(item: InsightItem) -> impl IntoView {
    let style = insight_style(item.kind);
    view! {
        <div class=format!("insight {}", style.css_modifier)>
            <span class=format!("insight__icon insight__icon--{}", style.tone)>{style.icon}</span>
            <div class="insight__body">
                <div class="insight__heading">
                    <span class="insight__metric">{item.metric}</span>
                    <span class="insight__affected">{format!("{} chunks", item.affected_chunks)}</span>
                </div>
                <p class="insight__message">{item.message}</p>
                <p class="insight__recommendation">{item.recommendation}</p>
            </div>
        </div>
    }
}
