//! Mode Tab Bar Component
//!
//! Tab bar for switching between the two workflow variants.

use leptos::prelude::*;

use crate::store::Mode;

#[component]
pub fn ModeTabBar(mode: ReadSignal<Mode>, set_mode: WriteSignal<Mode>) -> impl IntoView {
    let tab = move |target: Mode, title: &'static str| {
        let tab_class = move || {
            if mode.get() == target {
                "mode-tab active"
            } else {
                "mode-tab"
            }
        };
        view! {
            <button class=tab_class on:click=move |_| set_mode.set(target)>
                {title}
            </button>
        }
    };

    view! {
        <nav class="mode-tab-bar">
            {tab(Mode::Culling, "Culling")}
            {tab(Mode::Ranking, "Tier list")}
        </nav>
    }
}
