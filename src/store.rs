//! Todo State Store
//!
//! Owns the todo collection. Uses Leptos reactive_stores so views that read
//! the list re-render when a helper writes to it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions::TodoActions;
use crate::models::{Filter, Todo};
use crate::todos;

/// Todo collection with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct TodoState {
    /// All todos, in insertion order
    pub todos: Vec<Todo>,
    /// Id handed to the next added todo; None once ids run out
    pub next_id: Option<u32>,
}

impl TodoState {
    pub fn new(seed: Vec<Todo>) -> Self {
        let next_id = todos::next_id(&seed);
        Self { todos: seed, next_id }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

fn log_missing(op: &str, found: bool, id: u32) {
    if !found {
        tracing::debug!(op, id, "no todo with this id");
    }
}

/// Append a todo; blank titles are ignored
pub fn store_add_todo(store: &TodoStore, title: &str) -> Option<u32> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let Some(id) = store.next_id().get_untracked() else {
        tracing::warn!(title, "todo ids exhausted");
        return None;
    };
    store.todos().write().push(Todo::new(id, title));
    *store.next_id().write() = id.checked_add(1);
    tracing::debug!(id, title, "added todo");
    Some(id)
}

pub fn store_complete_todo(store: &TodoStore, id: u32) {
    let found = todos::toggle_complete(&mut store.todos().write(), id);
    log_missing("complete_todo", found, id);
}

pub fn store_mark_as_editing(store: &TodoStore, id: u32) {
    let found = todos::mark_as_editing(&mut store.todos().write(), id);
    log_missing("mark_as_editing", found, id);
}

pub fn store_update_todo(store: &TodoStore, id: u32, value: &str) {
    let found = todos::update_title(&mut store.todos().write(), id, value);
    log_missing("update_todo", found, id);
}

pub fn store_cancel_edit(store: &TodoStore, id: u32) {
    let found = todos::cancel_edit(&mut store.todos().write(), id);
    log_missing("cancel_edit", found, id);
}

pub fn store_delete_todo(store: &TodoStore, id: u32) {
    let found = todos::delete(&mut store.todos().write(), id);
    log_missing("delete_todo", found, id);
}

pub fn store_clear_completed(store: &TodoStore) {
    let removed = todos::clear_completed(&mut store.todos().write());
    tracing::debug!(removed, "cleared completed todos");
}

pub fn store_complete_all(store: &TodoStore) {
    todos::complete_all(&mut store.todos().write());
}

/// Build the callbacks a `TodoListView` needs from the store.
///
/// Reads are tracked, so a view calling `todos_filtered` or `remaining`
/// inside a reactive closure re-runs when the list changes.
pub fn todo_actions(store: TodoStore) -> TodoActions {
    TodoActions {
        todos_filtered: Callback::new(move |filter: Filter| {
            store.todos().with(|list| todos::filtered(list, filter))
        }),
        complete_todo: Callback::new(move |id: u32| store_complete_todo(&store, id)),
        mark_as_editing: Callback::new(move |id: u32| store_mark_as_editing(&store, id)),
        update_todo: Callback::new(move |(id, value): (u32, String)| {
            store_update_todo(&store, id, &value)
        }),
        cancel_edit: Callback::new(move |id: u32| store_cancel_edit(&store, id)),
        delete_todo: Callback::new(move |id: u32| store_delete_todo(&store, id)),
        remaining: Callback::new(move |_: ()| store.todos().with(|list| todos::remaining(list))),
        clear_completed: Callback::new(move |_: ()| store_clear_completed(&store)),
        complete_all_todos: Callback::new(move |_: ()| store_complete_all(&store)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::RowIntent;

    fn seeded() -> TodoStore {
        Store::new(TodoState::new(vec![
            Todo::new(1, "A"),
            Todo { is_complete: true, ..Todo::new(2, "B") },
        ]))
    }

    fn ids(list: &[Todo]) -> Vec<u32> {
        list.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_add_todo_assigns_next_id() {
        let owner = Owner::new();
        owner.with(|| {
            let store = seeded();
            assert_eq!(store_add_todo(&store, "  C "), Some(3));
            assert_eq!(store_add_todo(&store, "   "), None);
            assert_eq!(store_add_todo(&store, "D"), Some(4));

            let list = store.todos().get_untracked();
            assert_eq!(ids(&list), vec![1, 2, 3, 4]);
            assert_eq!(list[2].title, "C");
        });
    }

    #[test]
    fn test_add_todo_stops_when_ids_exhausted() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(TodoState::new(vec![Todo::new(u32::MAX - 1, "A")]));
            assert_eq!(store_add_todo(&store, "B"), Some(u32::MAX));
            assert_eq!(store_add_todo(&store, "C"), None);
            assert_eq!(ids(&store.todos().get_untracked()), vec![u32::MAX - 1, u32::MAX]);

            let full = Store::new(TodoState::new(vec![Todo::new(u32::MAX, "A")]));
            assert_eq!(store_add_todo(&full, "B"), None);
            assert_eq!(full.todos().get_untracked().len(), 1);
        });
    }

    #[test]
    fn test_filtered_rows_follow_selection() {
        let owner = Owner::new();
        owner.with(|| {
            let store = seeded();
            let actions = todo_actions(store);
            for filter in Filter::ALL {
                let expected = todos::filtered(&store.todos().get_untracked(), filter);
                assert_eq!(actions.todos_filtered.run(filter), expected);
            }
            assert_eq!(ids(&actions.todos_filtered.run(Filter::Completed)), vec![2]);
        });
    }

    #[test]
    fn test_edit_cycle_through_actions() {
        let owner = Owner::new();
        owner.with(|| {
            let store = seeded();
            let actions = todo_actions(store);

            actions.dispatch(RowIntent::BeginEdit(1));
            let list = store.todos().get_untracked();
            assert!(list[0].is_editing);
            assert!(!list[1].is_editing);

            actions.dispatch(RowIntent::Commit(1, "A2".to_string()));
            let list = store.todos().get_untracked();
            assert_eq!(list[0].title, "A2");
            assert!(!list[0].is_editing);

            actions.dispatch(RowIntent::BeginEdit(1));
            actions.dispatch(RowIntent::Cancel(1));
            let list = store.todos().get_untracked();
            assert_eq!(list[0].title, "A2");
            assert!(!list[0].is_editing);
        });
    }

    #[test]
    fn test_bulk_operations() {
        let owner = Owner::new();
        owner.with(|| {
            let store = seeded();
            let actions = todo_actions(store);
            assert_eq!(actions.remaining.run(()), 1);

            actions.complete_all_todos.run(());
            assert_eq!(actions.remaining.run(()), 0);

            actions.dispatch(RowIntent::Toggle(1));
            actions.clear_completed.run(());
            assert_eq!(ids(&store.todos().get_untracked()), vec![1]);

            actions.dispatch(RowIntent::Delete(1));
            actions.dispatch(RowIntent::Delete(42));
            assert!(store.todos().get_untracked().is_empty());
        });
    }
}
