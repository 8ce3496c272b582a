//! Drag Overlay Component
//!
//! A floating copy of the held game that follows the cursor while dragging.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DragOverlay(dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || {
            dnd.dragging_id_read
                .get()
                .and_then(|id| store.games().read().iter().find(|g| g.id == id).cloned())
                .map(|game| {
                    view! {
                        <div
                            class="drag-overlay"
                            style=move || {
                                format!(
                                    "left: {}px; top: {}px;",
                                    dnd.cursor_x_read.get() + 14,
                                    dnd.cursor_y_read.get() + 14,
                                )
                            }
                        >
                            <img
                                class="game-chip-image"
                                src=game.image.clone()
                                alt=game.name.clone()
                                draggable="false"
                            />
                            <span class="game-chip-name">{game.name.clone()}</span>
                        </div>
                    }
                })
        }}
    }
}
