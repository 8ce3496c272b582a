//! Bucket Row Component
//!
//! One bucket: colored label block (click to edit, optional delete) next to
//! its drop region. Rows are re-created by the parent whenever the bucket
//! changes, so member chips render statically.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_region_mouseenter, make_on_region_mouseleave, DndSignals};

use crate::components::{DeleteConfirmButton, GameChip};
use crate::models::{game_by_id, Bucket, Game};

#[component]
pub fn BucketRow(
    bucket: Bucket,
    games: Vec<Game>,
    dnd: DndSignals,
    /// (bucket id, raw label input); blank input is ignored downstream
    #[prop(into)] on_rename: Callback<(String, String)>,
    /// Present only where the workflow exposes deletion
    #[prop(optional)] on_delete: Option<Callback<String>>,
    #[prop(into)] can_delete: Signal<bool>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (edit_value, set_edit_value) = signal(bucket.label.clone());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus the label input when editing starts
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let commit = {
        let bucket_id = bucket.id.clone();
        move || {
            on_rename.run((bucket_id.clone(), edit_value.get()));
            set_editing.set(false);
        }
    };

    let on_keydown = {
        let commit = commit.clone();
        let label = bucket.label.clone();
        move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
            "Enter" => commit(),
            "Escape" => {
                set_edit_value.set(label.clone());
                set_editing.set(false);
            }
            _ => {}
        }
    };

    let label_text = bucket.label.clone();
    let label_view = move || {
        if editing.get() {
            let on_blur = commit.clone();
            let on_keydown = on_keydown.clone();
            view! {
                <input
                    node_ref=input_ref
                    type="text"
                    class="bucket-label-input"
                    placeholder="Bucket name"
                    prop:value=move || edit_value.get()
                    on:input=move |ev| set_edit_value.set(event_target_value(&ev))
                    on:blur=move |_| on_blur()
                    on:keydown=on_keydown
                />
            }
            .into_any()
        } else {
            let label = label_text.clone();
            view! {
                <button
                    class="bucket-label-btn"
                    title="Click to edit"
                    on:click=move |_| set_editing.set(true)
                >
                    {label}
                </button>
            }
            .into_any()
        }
    };

    let delete_id = bucket.id.clone();
    let delete_view = move || match on_delete {
        Some(on_delete) if can_delete.get() => {
            let bucket_id = delete_id.clone();
            view! {
                <DeleteConfirmButton
                    button_class="bucket-delete-btn"
                    on_confirm=Callback::new(move |_| on_delete.run(bucket_id.clone()))
                />
            }
            .into_any()
        }
        _ => view! { <span></span> }.into_any(),
    };

    let on_mouseenter = make_on_region_mouseenter(dnd, bucket.id.clone());
    let on_mouseleave = make_on_region_mouseleave(dnd);
    let over_id = bucket.id.clone();
    let is_over = move || {
        dnd.dragging_id_read.get().is_some()
            && dnd.drop_target_read.get().as_deref() == Some(over_id.as_str())
    };

    let chips = bucket
        .game_ids
        .iter()
        .filter_map(|id| game_by_id(&games, id))
        .cloned()
        .map(|game| view! { <GameChip game=game dnd=dnd/> })
        .collect_view();

    view! {
        <div class="bucket-row">
            <div class="bucket-label" style:background-color=bucket.color.clone()>
                {label_view}
                {delete_view}
            </div>
            <div
                class="bucket-dropzone"
                class:over=is_over
                on:mouseenter=on_mouseenter
                on:mouseleave=on_mouseleave
            >
                {chips}
            </div>
        </div>
    }
}
