//! Modal with a chunk's full text, quality rationale and radar chart.

use leptos::prelude::*;

use chunks::histogram::chunk_size_label;
use chunks::{ChunkDocument, Dimension};

use crate::components::chunk_quality_chart::ChunkQualityChart;

/// Detail modal for an already-loaded chunk. Closes on backdrop click,
/// the close button, or Escape.
#[component]
pub fn ChunkDetail(chunk: ChunkDocument, on_close: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let source = chunk.source;
    let rationale = source
        .eval_metrics
        .dimensions()
        .map(|(dimension, score, reason)| (dimension, score, reason.to_owned()));
    let size = chunk_size_label(source.char_len());
    let evaluated = if source.last_eval_time.is_empty() { "—".to_owned() } else { source.last_eval_time.clone() };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--chunk"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <header class="dialog__header">
                    <h2>{source.doc_name.clone()}</h2>
                    <button class="btn dialog__close" title="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </header>

                <dl class="chunk-detail__meta">
                    <MetaRow label="Chunk ID" value=chunk.id/>
                    <MetaRow label="Size" value=size/>
                    <MetaRow label="Last Evaluated" value=evaluated/>
                </dl>

                <div class="chunk-detail__body">
                    <section class="chunk-detail__text">
                        <h3>"Chunk Text"</h3>
                        <p>{source.text.clone()}</p>
                    </section>
                    <section class="chunk-detail__chart">
                        <h3>"Quality Profile"</h3>
                        <ChunkQualityChart metrics=source.eval_metrics.clone()/>
                    </section>
                </div>

                <section class="chunk-detail__rationale">
                    <h3>"Evaluation Rationale"</h3>
                    {rationale
                        .into_iter()
                        .map(|(dimension, score, reason)| view! { <RationaleRow dimension=dimension score=score reason=reason/> })
                        .collect_view()}
                </section>
            </div>
        </div>
    }
}

#[component]
fn MetaRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="chunk-detail__meta-row">
            <dt>{label}</dt>
            <dd>{value}</dd>
        </div>
    }
}

#[component]
fn RationaleRow(dimension: Dimension, score: u8, reason: String) -> impl IntoView {
    let reason = if reason.trim().is_empty() { "No rationale recorded.".to_owned() } else { reason };
    view! {
        <div class="chunk-detail__reason">
            <span class="chunk-detail__reason-label">{format!("{} ({score}/10)", dimension.reason_label())}</span>
            <p>{reason}</p>
        </div>
    }
}
