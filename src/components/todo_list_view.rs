//! Todo List View Component
//!
//! Filterable, editable todo list. Holds only the selected filter; every
//! change to the todos goes through `TodoActions`.

use leptos::prelude::*;

use crate::actions::TodoActions;
use crate::components::{
    TodoClearCompleted, TodoCompleteAllTodos, TodoFilters, TodoItemsRemaining, TodoRow,
};
use crate::models::{Filter, Todo};

/// Rows to render: `todos_filtered` for the selected filter.
///
/// Re-derived on filter change and on any write to the todos.
pub fn filtered_rows(
    todos: Signal<Vec<Todo>>,
    actions: TodoActions,
    filter: ReadSignal<Filter>,
) -> Memo<Vec<Todo>> {
    Memo::new(move |_| {
        todos.track();
        actions.todos_filtered.run(filter.get())
    })
}

/// Todo list with its control bar
#[component]
pub fn TodoListView(
    #[prop(into)] todos: Signal<Vec<Todo>>,
    actions: TodoActions,
) -> impl IntoView {
    let (filter, set_filter) = signal(Filter::default());

    let rows = filtered_rows(todos, actions, filter);

    view! {
        <ul class="todo-list">
            <For
                each=move || rows.get()
                key=|todo| {
                    // Id plus the mutable fields, so an edited row is rebuilt
                    (todo.id, todo.title.clone(), todo.is_complete, todo.is_editing)
                }
                children=move |todo| view! { <TodoRow todo=todo actions=actions /> }
            />
        </ul>

        <div class="check-all-container">
            <TodoCompleteAllTodos complete_all_todos=actions.complete_all_todos />
            <TodoItemsRemaining remaining=actions.remaining />
        </div>

        <div class="other-buttons-container">
            <TodoFilters filter=filter set_filter=set_filter />
            <div>
                <TodoClearCompleted clear_completed=actions.clear_completed />
            </div>
        </div>
    }
}
