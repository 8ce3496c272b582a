//! Culling Page Component
//!
//! Keep/Sell triage: three buckets, one capacity-limited, plus the pool.

use leptos::prelude::*;

use crate::components::{BucketRow, Pool};
use crate::drag::{KEEP_MAX_MAX, KEEP_MAX_MIN};
use crate::export;
use crate::models::{game_by_id, Bucket, Game};
use crate::store::{store_rename_bucket, use_app_store, AppStateStoreFields, Mode};
use leptos_dragdrop::DndSignals;

#[component]
pub fn CullingPage(games: Vec<Game>, dnd: DndSignals, keep_max: RwSignal<usize>) -> impl IntoView {
    let store = use_app_store();
    let total = games.len();

    let buckets = Memo::new(move |_| store.culling().read().buckets().to_vec());
    let pool_games = {
        let games = games.clone();
        Memo::new(move |_| {
            store
                .culling()
                .read()
                .pool()
                .iter()
                .filter_map(|id| game_by_id(&games, id))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let on_rename = Callback::new(move |(bucket_id, label): (String, String)| {
        store_rename_bucket(&store, Mode::Culling, &bucket_id, &label);
    });

    let on_export = move |_| {
        let snap = export::snapshot(&store.culling().read());
        match serde_json::to_string_pretty(&snap) {
            Ok(json) => web_sys::console::log_1(&format!("Culling state: {json}").into()),
            Err(err) => web_sys::console::error_1(&format!("Export failed: {err}").into()),
        }
    };

    let never_delete = Signal::derive(|| false);
    let bucket_children = {
        let games = games.clone();
        move |bucket: Bucket| {
            let games = games.clone();
            view! {
                <BucketRow
                    bucket=bucket
                    games=games
                    dnd=dnd
                    on_rename=on_rename
                    can_delete=never_delete
                />
            }
        }
    };

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Culling — Keep / Sell"</h1>
                <div class="page-controls">
                    <label class="keep-max-label" for="keep-max">"Keep bucket max:"</label>
                    <input
                        id="keep-max"
                        class="keep-max-input"
                        type="number"
                        min="1"
                        max="200"
                        prop:value=move || keep_max.get().to_string()
                        on:input=move |ev| {
                            let parsed = event_target_value(&ev)
                                .trim()
                                .parse::<usize>()
                                .unwrap_or(KEEP_MAX_MIN);
                            keep_max.set(parsed.clamp(KEEP_MAX_MIN, KEEP_MAX_MAX));
                        }
                    />
                    <button class="export-btn" on:click=on_export>"Export"</button>
                </div>
            </header>

            <section class="bucket-section">
                <h2>"Buckets"</h2>
                <For
                    each=move || buckets.get()
                    key=|bucket| bucket.clone()
                    children=bucket_children
                />
            </section>

            <section class="pool-section">
                <h2>"Pool"</h2>
                <Pool games=pool_games dnd=dnd empty_label="Every game is sorted"/>
            </section>

            <p class="member-count">
                {move || format!("{} of {total} games unsorted", pool_games.get().len())}
            </p>
        </div>
    }
}
