//! Sortable, paginated chunk list with a detail modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Receives the current bot and search query from the page, fetches its own
//! page of chunks whenever those inputs, the sort, or the page change, and
//! reports the selected chunk and the page-local size histogram back up.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use chunks::histogram::{SizeBucket, chunk_size_label};
use chunks::overview::day_month_year;
use chunks::rating::QualityBadge;
use chunks::{ChunkDocument, SortDirection, SortKey};

use crate::components::chunk_detail::ChunkDetail;
use crate::state::chunk_table::ChunkTableState;

#[cfg(test)]
#[path = "chunk_table_test.rs"]
mod chunk_table_test;

#[component]
pub fn ChunkTable(
    #[prop(into)] bot_id: Signal<String>,
    #[prop(into)] search_query: Signal<String>,
    on_select_chunk: Callback<ChunkDocument>,
    on_sizes: Callback<Vec<SizeBucket>>,
) -> impl IntoView {
    let table = RwSignal::new(ChunkTableState::default());
    let alive = Arc::new(AtomicBool::new(true));

    Effect::new(move || {
        let bot = bot_id.get();
        let query = search_query.get();
        table.update(|t| {
            t.set_inputs(&bot, &query);
        });
    });

    // Only these fields trigger a refetch; applying a response does not.
    let request_key = Memo::new(move |_| table.with(|t| (t.bot_id.clone(), t.search_query.clone(), t.sort, t.page)));

    let alive_fetch = alive.clone();
    Effect::new(move || {
        request_key.track();
        let Some((ticket, filters)) = table.try_update(ChunkTableState::begin_fetch).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let alive = alive_fetch.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_chunks(&filters).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                if let Some(first) = table.try_update(|t| t.apply(ticket, result)).flatten() {
                    on_select_chunk.run(first);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, filters, &alive_fetch);
        }
    });

    Effect::new(move || {
        on_sizes.run(table.with(ChunkTableState::size_histogram));
    });

    on_cleanup(move || {
        alive.store(false, Ordering::Relaxed);
        table.try_update(|t| t.chunks.invalidate());
    });

    let on_sort = move |key: SortKey| table.update(|t| t.toggle_sort(key));
    let on_prev = move |_| {
        table.update(|t| {
            t.prev_page();
        });
    };
    let on_next = move |_| table.update(ChunkTableState::next_page);
    let on_activate = Callback::new(move |id: String| {
        if let Some(chunk) = table.try_update(|t| t.activate(&id)).flatten() {
            on_select_chunk.run(chunk);
        }
    });
    let on_close = Callback::new(move |()| table.update(ChunkTableState::close_detail));

    let sort_header = move |key: SortKey, label: &'static str| {
        view! {
            <th class="chunk-table__sortable">
                <button class="chunk-table__sort" on:click=move |_| on_sort(key)>
                    <span>{label}</span>
                    <span class="chunk-table__sort-icon">
                        {move || sort_glyph(table.with(|t| t.sort.indicator(key)))}
                    </span>
                </button>
            </th>
        }
    };

    let body = move || {
        table.with(|t| {
            if t.chunks.state.is_loading() {
                return status_row("Loading chunks...".to_owned(), false);
            }
            if let Some(message) = t.chunks.state.error() {
                return status_row(format!("Could not load chunks: {message}"), true);
            }
            if t.rows().is_empty() {
                return status_row("No chunks match the current filters.".to_owned(), false);
            }
            t.rows()
                .iter()
                .enumerate()
                .map(|(i, chunk)| {
                    let selected = t.selected_id.as_deref() == Some(chunk.id.as_str());
                    view! { <ChunkRow chunk=chunk.clone() number=t.row_number(i) selected=selected on_activate=on_activate/> }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="card chunk-table">
            <header class="card__header">
                <h2 class="card__title">"Chunk List"</h2>
                <p class="card__description">
                    {move || format!("Viewing {} chunks - click on a row to open details", table.with(|t| t.rows().len()))}
                </p>
            </header>
            <table class="chunk-table__grid">
                <thead>
                    <tr>
                        <th class="chunk-table__number">"#"</th>
                        {sort_header(SortKey::DocName, "Document")}
                        {sort_header(SortKey::Substantive, "Substantive")}
                        {sort_header(SortKey::Cohesive, "Cohesive")}
                        <th>"Size"</th>
                        {sort_header(SortKey::LastEvalTime, "Evaluated")}
                        <th class="chunk-table__quality">"Quality"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            <footer class="chunk-table__pager">
                <span class="chunk-table__count">
                    {move || format!("Showing {} of many results", table.with(|t| t.rows().len()))}
                </span>
                <button class="btn btn--small" title="Previous" disabled=move || !table.with(ChunkTableState::can_go_prev) on:click=on_prev>
                    "‹"
                </button>
                <span class="chunk-table__page">{move || format!("Page {}", table.with(|t| t.page))}</span>
                <button class="btn btn--small" title="Next" on:click=on_next>
                    "›"
                </button>
            </footer>
            {move || {
                table
                    .with(|t| t.detail_chunk().cloned())
                    .map(|chunk| view! { <ChunkDetail chunk=chunk on_close=on_close/> })
            }}
        </div>
    }
}

#[component]
fn ChunkRow(chunk: ChunkDocument, number: u64, selected: bool, on_activate: Callback<String>) -> impl IntoView {
    let badge = QualityBadge::from_score(f64::from(chunk.source.eval_metrics.substantiveness_score));
    let class = if selected { "chunk-table__row chunk-table__row--selected" } else { "chunk-table__row" };
    let evaluated = day_month_year(&chunk.source.last_eval_time).unwrap_or_default();
    let id = chunk.id.clone();

    view! {
        <tr class=class on:click=move |_| on_activate.run(id.clone())>
            <td class="chunk-table__number">{number}</td>
            <td class="chunk-table__doc" title=chunk.source.doc_name.clone()>{chunk.source.doc_name.clone()}</td>
            <td>{format!("{:.2}", chunk.source.substantive)}</td>
            <td>{format!("{:.2}", chunk.source.cohesive)}</td>
            <td>{chunk_size_label(chunk.source.char_len())}</td>
            <td>{evaluated}</td>
            <td class="chunk-table__quality">
                <span class=format!("badge {}", badge.css_modifier())>{badge.label()}</span>
            </td>
        </tr>
    }
}

fn status_row(message: String, is_error: bool) -> AnyView {
    let class = if is_error { "chunk-table__status chunk-table__status--error" } else { "chunk-table__status" };
    view! {
        <tr>
            <td class=class colspan="7">{message}</td>
        </tr>
    }
    .into_any()
}

/// Header arrow for the active sort column.
fn sort_glyph(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => "▲",
        Some(SortDirection::Desc) => "▼",
        None => "",
    }
}
