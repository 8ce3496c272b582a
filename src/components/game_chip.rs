//! Game Chip Component
//!
//! A draggable thumbnail-plus-name chip for one catalog game.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::models::Game;

#[component]
pub fn GameChip(game: Game, dnd: DndSignals) -> impl IntoView {
    let chip_id = game.id.clone();
    let on_mousedown = make_on_mousedown(dnd, game.id.clone());
    // Dim the chip that is currently held
    let is_dragged = move || dnd.dragging_id_read.get().as_deref() == Some(chip_id.as_str());

    view! {
        <div
            class="game-chip"
            class:dragged=is_dragged
            title=game.name.clone()
            on:mousedown=on_mousedown
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
}
