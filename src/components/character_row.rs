//! Character Row Component
//!
//! One template for both panels: search rows get "Add", working-list rows get
//! "Remove" plus rank label and reorder buttons in ranking mode.

use leptos::prelude::*;

use crate::context::{use_editor, EditorAction};
use crate::editor::{RowAction, RowModel};

/// A single character row
#[component]
pub fn CharacterRow(row: RowModel) -> impl IntoView {
    let ctx = use_editor();

    let RowModel { index, character, action, rank, .. } = row;
    let id = character.id.clone();
    let name = character.name.clone();
    let alt = name.clone();

    let primary = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| {
            let id = id.clone();
            ctx.dispatch(match action {
                RowAction::Add => EditorAction::Add { index, id },
                RowAction::Remove => EditorAction::Remove { index, id },
            });
        }
    };
    let (primary_class, primary_label) = match action {
        RowAction::Add => ("add-btn", "Add"),
        RowAction::Remove => ("remove-btn", "Remove"),
    };

    view! {
        <div class="character-row" data-character-id=id.to_string()>
            // Rank label (ranking mode only)
            {rank.map(|r| view! { <span class="rank-label">{format!("{}.", r.rank)}</span> })}

            {character.image_url.map(|src| view! {
                <img class="character-image" src=src alt=alt />
            })}

            <span class="character-name">{name}</span>

            <button type="button" class=primary_class on:click=primary>
                {primary_label}
            </button>

            // Reorder buttons (ranking mode only)
            {rank.map(|r| {
                let up_id = id.clone();
                let down_id = id.clone();
                view! {
                    <span class="rank-controls">
                        <button
                            type="button"
                            class="move-up-btn"
                            disabled={!r.can_move_up}
                            on:click=move |_| ctx.dispatch(EditorAction::MoveUp { index, id: up_id.clone() })
                        >
                            "▲"
                        </button>
                        <button
                            type="button"
                            class="move-down-btn"
                            disabled={!r.can_move_down}
                            on:click=move |_| ctx.dispatch(EditorAction::MoveDown { index, id: down_id.clone() })
                        >
                            "▼"
                        </button>
                    </span>
                }
            })}
        </div>
    }
}
