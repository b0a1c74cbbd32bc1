//! Leptos DragDrop Utilities
//!
//! Mouse-driven drag reordering for flat Leptos lists.
//! Uses a movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropTarget {
    /// Drop on a row: take that row's position
    Row(usize),
    /// Drop on the gap before the row at this index (`len` = after the last row)
    Slot(usize),
}

impl DropTarget {
    /// Final index of a row dragged from `from` and dropped here
    pub fn destination(self, from: usize) -> usize {
        match self {
            DropTarget::Row(index) => index,
            // Removing the dragged row first shifts later slots up by one
            DropTarget::Slot(slot) if slot > from => slot - 1,
            DropTarget::Slot(slot) => slot,
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    /// Row pressed but not yet moved past the threshold
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
    }
}

/// Whether the pointer moved far enough from `start` to count as a drag
pub fn past_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    (current.0 - start.0).abs() > DRAG_THRESHOLD_PX || (current.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Buttons and inputs inside the row keep their own click behaviour
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_write.set(Some(index));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for rows
pub fn make_on_row_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != index {
                dnd.drop_target_write.set(Some(DropTarget::Row(index)));
            }
        }
    }
}

/// Create mouseenter handler for slots
pub fn make_on_slot_mouseenter(dnd: DndSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Slot(slot)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind document mousemove: promotes a pending press to a drag
fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();
        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let start = dnd.start_read.get_untracked();
            if past_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind document mouseup for drop detection.
/// `on_drop(from, to)` receives the dragged index and its final index.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(usize, usize) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();
        end_drag(&dnd);

        // A press without movement is a click; it fires on the element itself
        if let (Some(from), Some(target)) = (dragging, drop_target) {
            let to = target.destination(from);
            if to != from {
                on_drop(from, to);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_for_rows() {
        assert_eq!(DropTarget::Row(3).destination(0), 3);
        assert_eq!(DropTarget::Row(0).destination(3), 0);
    }

    #[test]
    fn test_destination_for_slots() {
        // Slot after the dragged row shifts up once it is removed
        assert_eq!(DropTarget::Slot(3).destination(0), 2);
        assert_eq!(DropTarget::Slot(0).destination(2), 0);
        // Slots directly around the dragged row leave it in place
        assert_eq!(DropTarget::Slot(2).destination(2), 2);
        assert_eq!(DropTarget::Slot(3).destination(2), 2);
    }

    #[test]
    fn test_past_threshold() {
        assert!(!past_threshold((10, 10), (14, 6)));
        assert!(past_threshold((10, 10), (16, 10)));
        assert!(past_threshold((10, 10), (10, 3)));
    }
}
