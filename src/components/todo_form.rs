//! Todo Form Component
//!
//! Input for adding new todos to the store.

use leptos::prelude::*;

use crate::store::{store_add_todo, use_todo_store};

/// Form for creating a todo
#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_todo_store();

    let (new_title, set_new_title) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_add_todo(&store, &new_title.get()).is_some() {
            set_new_title.set(String::new());
        }
    };

    view! {
        <form action="#" on:submit=add_todo>
            <input
                type="text"
                class="todo-input"
                placeholder="What do you need to do?"
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
        </form>
    }
}
