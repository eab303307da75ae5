//! Dashboard landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page-level selection (bot, search query, selected chunk) through
//! the `DashboardState` context. On mount it fetches the bot list and picks
//! the first bot; every bot change refetches that bot's metrics, while the
//! chunk table and insights panel fetch their own data from the same inputs.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use chunks::histogram::SizeBucket;
use chunks::{ChunkDocument, Dimension};

use crate::components::actionable_insights::ActionableInsights;
use crate::components::chunk_size_histogram::ChunkSizeHistogram;
use crate::components::chunk_table::ChunkTable;
use crate::components::dashboard_header::{DashboardHeader, autocomplete_requested};
use crate::components::metric_histogram::MetricHistogram;
use crate::components::metrics_overview::MetricsOverview;
use crate::components::quality_metric_card::QualityMetricCard;
use crate::state::dashboard::{DashboardState, DashboardTab};

#[component]
pub fn IndexPage() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let autocomplete = use_query_map().with_untracked(|q| autocomplete_requested(q.get("picker").as_deref()));
    let sizes = RwSignal::new(Vec::<SizeBucket>::new());
    let alive = Arc::new(AtomicBool::new(true));

    let bot_id = Memo::new(move |_| dashboard.with(|d| d.bot_id().to_owned()));
    let search_query = Memo::new(move |_| dashboard.with(|d| d.search_query.clone()));

    // Bot list on mount; the first bot becomes the selection.
    let ticket = dashboard.try_update(DashboardState::begin_bots).unwrap_or_default();
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_bots().await;
            if alive.load(Ordering::Relaxed) {
                dashboard.try_update(|d| d.adopt_bots(ticket, result));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ticket;
    }

    let alive_metrics = alive.clone();
    Effect::new(move || {
        if bot_id.get().is_empty() {
            return;
        }
        let Some((ticket, bot)) = dashboard.try_update(DashboardState::begin_metrics).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let alive = alive_metrics.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_bot_metrics(&bot).await;
                if alive.load(Ordering::Relaxed) {
                    dashboard.try_update(|d| d.apply_metrics(ticket, result));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, bot, &alive_metrics);
        }
    });

    on_cleanup(move || {
        alive.store(false, Ordering::Relaxed);
        dashboard.try_update(|d| {
            d.bots.invalidate();
            d.metrics.invalidate();
        });
    });

    let on_select_bot = Callback::new(move |bot: String| {
        dashboard.update(|d| {
            d.select_bot(&bot);
        });
    });
    let on_search = Callback::new(move |query: String| {
        dashboard.update(|d| {
            d.submit_search(&query);
        });
    });
    let on_select_chunk = Callback::new(move |chunk: ChunkDocument| dashboard.update(|d| d.select_chunk(chunk)));
    let on_sizes = Callback::new(move |buckets: Vec<SizeBucket>| sizes.set(buckets));

    let metrics_state = Signal::derive(move || dashboard.with(|d| d.metrics.state.clone()));
    let active_tab = move || dashboard.with(|d| d.tab);

    view! {
        <div class="dashboard">
            <DashboardHeader
                selected_bot=bot_id
                on_select_bot=on_select_bot
                on_search=on_search
                autocomplete=autocomplete
            />

            <main class="dashboard__main">
                <Show when=move || !bot_id.get().is_empty() fallback=WelcomePanel>
                    <MetricsOverview metrics=metrics_state/>

                    <div class="dashboard__grid">
                        <div class="dashboard__primary">
                            <nav class="tabs" role="tablist">
                                {DashboardTab::ALL
                                    .iter()
                                    .map(|tab| {
                                        let tab = *tab;
                                        view! {
                                            <button
                                                class="tabs__trigger"
                                                class=("tabs__trigger--active", move || active_tab() == tab)
                                                role="tab"
                                                on:click=move |_| dashboard.update(|d| d.tab = tab)
                                            >
                                                {tab.label()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </nav>

                            // The table stays mounted so its page and the size histogram survive tab switches.
                            <div class="tabs__panel" class=("tabs__panel--hidden", move || active_tab() != DashboardTab::ChunkAnalysis)>
                                <ChunkTable
                                    bot_id=bot_id
                                    search_query=search_query
                                    on_select_chunk=on_select_chunk
                                    on_sizes=on_sizes
                                />
                            </div>
                            <Show when=move || active_tab() == DashboardTab::ScoreDistribution>
                                <div class="tabs__panel card">
                                    {move || {
                                        dashboard
                                            .with(|d| d.metrics.state.data().map(|m| m.scores_distribution.clone()))
                                            .map_or_else(
                                                || view! { <p class="histogram__empty">"Loading metrics data..."</p> }.into_any(),
                                                |distribution| view! { <MetricHistogram distribution=distribution/> }.into_any(),
                                            )
                                    }}
                                </div>
                            </Show>
                            <Show when=move || active_tab() == DashboardTab::SizeDistribution>
                                <div class="tabs__panel card">
                                    <ChunkSizeHistogram buckets=sizes/>
                                </div>
                            </Show>
                        </div>

                        <aside class="dashboard__sidebar">
                            <SelectedChunkPanel/>
                            <ActionableInsights bot_id=bot_id/>
                        </aside>
                    </div>
                </Show>
            </main>

            <footer class="dashboard__footer">
                "RAG Chunk Quality Visualizer • Analyzing document chunks for optimal retrieval performance"
            </footer>
        </div>
    }
}

#[component]
fn WelcomePanel() -> impl IntoView {
    view! {
        <div class="dashboard__welcome">
            <h2>"Welcome to RAG Chunk Visualizer"</h2>
            <p>"Please enter a bot ID to begin analysis"</p>
        </div>
    }
}

/// Score cards for the chunk most recently selected in the table.
#[component]
fn SelectedChunkPanel() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    move || {
        dashboard.with(|d| {
            d.selected_chunk.as_ref().map(|chunk| {
                let metrics = &chunk.source.eval_metrics;
                view! {
                    <div class="card selected-chunk">
                        <header class="card__header">
                            <h2 class="card__title">"Selected Chunk"</h2>
                            <p class="card__description">{chunk.source.doc_name.clone()}</p>
                        </header>
                        {Dimension::ALL
                            .iter()
                            .map(|dimension| {
                                view! {
                                    <QualityMetricCard
                                        title=dimension.label()
                                        value=f64::from(metrics.score(*dimension))
                                        description=metrics.reason(*dimension).to_owned()
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                }
            })
        })
    }
}
