//! Todo Actions
//!
//! The operations a todo list view may invoke. The owner of the collection
//! supplies every one of them; the view only calls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;

use crate::models::{Filter, Todo};

/// Callbacks supplied by whoever owns the todos
#[derive(Clone, Copy)]
pub struct TodoActions {
    /// Todos to show for a filter, in display order
    pub todos_filtered: Callback<Filter, Vec<Todo>>,
    pub complete_todo: Callback<u32>,
    pub mark_as_editing: Callback<u32>,
    /// (id, current input value)
    pub update_todo: Callback<(u32, String)>,
    pub cancel_edit: Callback<u32>,
    pub delete_todo: Callback<u32>,
    /// Count of todos not yet complete
    pub remaining: Callback<(), usize>,
    pub clear_completed: Callback<()>,
    pub complete_all_todos: Callback<()>,
}

/// One user interaction on a todo row
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowIntent {
    Toggle(u32),
    BeginEdit(u32),
    Commit(u32, String),
    Cancel(u32),
    Delete(u32),
}

impl TodoActions {
    /// Route a row interaction to its single callback
    pub fn dispatch(&self, intent: RowIntent) {
        tracing::trace!(?intent, "row intent");
        match intent {
            RowIntent::Toggle(id) => self.complete_todo.run(id),
            RowIntent::BeginEdit(id) => self.mark_as_editing.run(id),
            RowIntent::Commit(id, value) => self.update_todo.run((id, value)),
            RowIntent::Cancel(id) => self.cancel_edit.run(id),
            RowIntent::Delete(id) => self.delete_todo.run(id),
        }
    }
}

/// Keys that end an edit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKey {
    Commit,
    Cancel,
}

impl EditKey {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(EditKey::Commit),
            "Escape" => Some(EditKey::Cancel),
            _ => None,
        }
    }

    pub fn into_intent(self, id: u32, value: String) -> RowIntent {
        match self {
            EditKey::Commit => RowIntent::Commit(id, value),
            EditKey::Cancel => RowIntent::Cancel(id),
        }
    }
}

/// Wrap `dispatch` so only the first intent of an edit session goes through.
///
/// Enter or Escape removes the input, and the browser may then deliver a
/// blur for it; that blur must not commit a second time. The flag lives in
/// the closure, not in the row's reactive owner, which is gone by then.
pub fn resolve_once(actions: TodoActions) -> impl Fn(RowIntent) + Clone + 'static {
    let resolved = Arc::new(AtomicBool::new(false));
    move |intent| {
        if resolved.swap(true, Ordering::Relaxed) {
            return;
        }
        actions.dispatch(intent);
    }
}
