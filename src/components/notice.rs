//! Notice Toast Component
//!
//! Renders the current app notice (rejected drops) and auto-dismisses it
//! after a few seconds unless a newer notice replaced it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;

const DISMISS_AFTER_MS: u32 = 4_000;

#[component]
pub fn NoticeToast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    Effect::new(move |_| {
        if let Some(message) = ctx.notice.get() {
            spawn_local(async move {
                TimeoutFuture::new(DISMISS_AFTER_MS).await;
                ctx.dismiss_if(&message);
            });
        }
    });

    view! {
        {move || {
            ctx.notice.get().map(|message| {
                view! {
                    <div class="notice-toast" role="alert">
                        <span class="notice-text">{message}</span>
                        <button class="notice-dismiss-btn" on:click=move |_| ctx.dismiss()>
                            "×"
                        </button>
                    </div>
                }
            })
        }}
    }
}
