//! Tier List Page Component
//!
//! Open-ended S..F ranking with runtime bucket deletion.

use leptos::prelude::*;

use crate::components::{BucketRow, Pool};
use crate::export;
use crate::models::{game_by_id, Bucket, Game};
use crate::store::{
    store_delete_bucket, store_rename_bucket, use_app_store, AppStateStoreFields, Mode,
};
use leptos_dragdrop::DndSignals;

#[component]
pub fn TierListPage(games: Vec<Game>, dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();
    let total = games.len();

    let buckets = Memo::new(move |_| store.ranking().read().buckets().to_vec());
    let pool_games = {
        let games = games.clone();
        Memo::new(move |_| {
            store
                .ranking()
                .read()
                .pool()
                .iter()
                .filter_map(|id| game_by_id(&games, id))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let on_rename = Callback::new(move |(bucket_id, label): (String, String)| {
        store_rename_bucket(&store, Mode::Ranking, &bucket_id, &label);
    });

    let on_delete = Callback::new(move |bucket_id: String| {
        store_delete_bucket(&store, Mode::Ranking, &bucket_id);
    });

    // The last remaining bucket cannot be deleted
    let can_delete = Signal::derive(move || buckets.get().len() > 1);

    let on_export = move |_| {
        let snap = export::snapshot(&store.ranking().read());
        match serde_json::to_string_pretty(&snap) {
            Ok(json) => web_sys::console::log_1(&format!("Tier list state: {json}").into()),
            Err(err) => web_sys::console::error_1(&format!("Export failed: {err}").into()),
        }
    };

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
                    on_delete=on_delete
                    can_delete=can_delete
                />
            }
        }
    };

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Tier list — S / A / B / C / D / E / F"</h1>
                <div class="page-controls">
                    <button class="export-btn" on:click=on_export>"Export"</button>
                </div>
            </header>

            <section class="bucket-section">
                <h2>"Tiers"</h2>
                <For
                    each=move || buckets.get()
                    key=|bucket| bucket.clone()
                    children=bucket_children
                />
            </section>

            <section class="pool-section">
                <h2>"Unranked"</h2>
                <Pool games=pool_games dnd=dnd empty_label="Every game is ranked"/>
            </section>

            <p class="member-count">
                {move || format!("{} of {total} games unranked", pool_games.get().len())}
            </p>
        </div>
    }
}
