//! Shelf-Sort App
//!
//! Top-level component: mode tabs, the two workflow pages, the notice toast
//! and the drag overlay. Both pages stay mounted and tabs only toggle
//! visibility, so board state survives switching.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};
use reactive_stores::Store;

use crate::catalog;
use crate::components::{CullingPage, DragOverlay, ModeTabBar, NoticeToast, TierListPage};
use crate::context::AppContext;
use crate::drag::{DragController, DropOutcome, DEFAULT_KEEP_MAX};
use crate::store::{AppState, AppStateStoreFields, Mode};

#[component]
pub fn App() -> impl IntoView {
    let games = catalog::load_catalog();
    web_sys::console::log_1(&format!("[APP] Loaded {} games from catalog", games.len()).into());

    let store = Store::new(AppState::new(games.clone()));
    provide_context(store);

    let (mode, set_mode) = signal(Mode::default());
    let keep_max = RwSignal::new(DEFAULT_KEEP_MAX);

    let (notice, set_notice) = signal(None::<String>);
    let ctx = AppContext::new((notice, set_notice));
    provide_context(ctx);

    let dnd = create_dnd_signals();
    let controller = StoredValue::new(DragController::new());

    // Enter Dragging once the threshold binding reports a held chip
    Effect::new(move |_| {
        if let Some(game_id) = dnd.dragging_id_read.get() {
            controller.update_value(|c| c.pick_up(game_id));
        }
    });

    // One drop handler serves both boards; the active tab picks the board
    bind_global_mouseup(dnd, move |_game_id, target| {
        let max = keep_max.get_untracked();
        let outcome = controller
            .try_update_value(|c| match mode.get_untracked() {
                Mode::Culling => c.drop_on(&mut store.culling().write(), target.as_deref(), max),
                Mode::Ranking => c.drop_on(&mut store.ranking().write(), target.as_deref(), max),
            })
            .unwrap_or(DropOutcome::Cancelled);

        if let DropOutcome::Rejected { label, max } = outcome {
            ctx.notify(format!(
                "The \"{label}\" bucket has a maximum of {max} games. You cannot add more."
            ));
        }
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1 class="app-title">"Shelf Sort"</h1>
                <ModeTabBar mode=mode set_mode=set_mode/>
            </header>

            <main class="main-content">
                <div
                    class="page-slot"
                    style:display=move || if mode.get() == Mode::Culling { "block" } else { "none" }
                >
                    <CullingPage games=games.clone() dnd=dnd keep_max=keep_max/>
                </div>
                <div
                    class="page-slot"
                    style:display=move || if mode.get() == Mode::Ranking { "block" } else { "none" }
                >
                    <TierListPage games=games dnd=dnd/>
                </div>
            </main>

            <NoticeToast/>
            <DragOverlay dnd=dnd/>
        </div>
    }
}
