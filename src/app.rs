//! Todo App
//!
//! Host component: owns the todo store and mounts the list view.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoForm, TodoListView};
use crate::config::AppConfig;
use crate::store::{todo_actions, TodoState, TodoStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let AppConfig { title, todos: seed, .. } = config;

    // State
    let store = Store::new(TodoState::new(seed));
    provide_context(store);

    let actions = todo_actions(store);
    let todos = Signal::derive(move || store.todos().get());
    let has_todos = move || store.todos().with(|list| !list.is_empty());

    view! {
        <div class="todo-app-container">
            <div class="todo-app">
                <h2>{title}</h2>

                <TodoForm />

                <Show when=has_todos fallback=|| view! { <NoTodos /> }>
                    <TodoListView todos=todos actions=actions />
                </Show>
            </div>
        </div>
    }
}

/// Shown instead of the list while there are no todos
#[component]
fn NoTodos() -> impl IntoView {
    view! {
        <div class="no-todos-container">
            <p>"No todos yet. Add one above."</p>
        </div>
    }
}
