//! Pool Component
//!
//! Drop region for unassigned games.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_region_mouseenter, make_on_region_mouseleave, DndSignals};

use crate::board::POOL_ID;
use crate::components::GameChip;
use crate::models::Game;

#[component]
pub fn Pool(
    games: Memo<Vec<Game>>,
    dnd: DndSignals,
    #[prop(into)] empty_label: String,
) -> impl IntoView {
    let on_mouseenter = make_on_region_mouseenter(dnd, POOL_ID.to_string());
    let on_mouseleave = make_on_region_mouseleave(dnd);
    let is_over = move || {
        dnd.dragging_id_read.get().is_some()
            && dnd.drop_target_read.get().as_deref() == Some(POOL_ID)
    };

    view! {
        <div
            class="pool"
            class:over=is_over
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <For
                each=move || games.get()
                key=|game| game.id.clone()
                children=move |game| view! { <GameChip game=game dnd=dnd/> }
            />
            <Show when=move || games.get().is_empty()>
                <div class="pool-empty">{empty_label.clone()}</div>
            </Show>
        </div>
    }
}
