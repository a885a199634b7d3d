//! Todo Row Component
//!
//! One todo: checkbox, label or edit input, delete button.

use leptos::html;
use leptos::prelude::*;

use crate::actions::{resolve_once, EditKey, RowIntent, TodoActions};
use crate::models::Todo;

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo, actions: TodoActions) -> impl IntoView {
    let id = todo.id;
    let completed = todo.is_complete;
    let title = todo.title;
    let label_class = if completed { "todo-item-label line-through" } else { "todo-item-label" };

    view! {
        <li class="todo-item-container">
            <div class="todo-item">
                <input
                    type="checkbox"
                    prop:checked=completed
                    on:change=move |_| actions.dispatch(RowIntent::Toggle(id))
                />

                {if todo.is_editing {
                    view! { <TodoEditInput id=id title=title actions=actions /> }.into_any()
                } else {
                    view! {
                        <span
                            class=label_class
                            on:dblclick=move |_| actions.dispatch(RowIntent::BeginEdit(id))
                        >
                            {title}
                        </span>
                    }.into_any()
                }}
            </div>

            <button class="x-button" on:click=move |_| actions.dispatch(RowIntent::Delete(id))>
                <svg
                    class="x-button-icon"
                    fill="none"
                    viewBox="0 0 24 24"
                    stroke="currentColor"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M6 18L18 6M6 6l12 12"
                    />
                </svg>
            </button>
        </li>
    }
}

/// Text input shown while a todo is in edit mode
#[component]
fn TodoEditInput(id: u32, title: String, actions: TodoActions) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();
    let resolve = resolve_once(actions);
    let resolve_on_key = resolve.clone();

    // Rows are inserted after page load, so focus by hand
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
        <input
            type="text"
            class="todo-item-input"
            node_ref=input_ref
            value=title
            on:blur=move |ev| resolve(RowIntent::Commit(id, event_target_value(&ev)))
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if let Some(key) = EditKey::from_key(&ev.key()) {
                    ev.prevent_default();
                    resolve_on_key(key.into_intent(id, event_target_value(&ev)));
                }
            }
        />
    }
}
