//! Drop Zone Component
//!
//! A horizontal gap between working-list rows for drag reordering.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_slot_mouseenter, DndSignals, DropTarget};

/// Drop zone shown between rows while a drag is in progress
#[component]
pub fn DropZone(
    dnd: DndSignals,
    /// Index of the row this gap sits before
    gap: usize,
) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, gap);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || dnd.drop_target_read.get() == Some(DropTarget::Slot(gap));
    let is_dragging = move || dnd.dragging_read.get().is_some();

    view! {
        <div
            class=move || {
                let mut c = String::from("drop-zone");
                if !is_dragging() { c.push_str(" hidden"); }
                if is_active() { c.push_str(" active"); }
                c
            }
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
