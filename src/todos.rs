//! Todo Collection Utilities
//!
//! Plain operations over the todo list. The store wraps these; they know
//! nothing about signals.

use crate::models::{Filter, Todo};

/// Todos selected by `filter`, in list order
pub fn filtered(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    todos.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Number of todos not yet complete
pub fn remaining(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| !t.is_complete).count()
}

/// Next free id for a list seeded with `todos`. None once ids are exhausted.
pub fn next_id(todos: &[Todo]) -> Option<u32> {
    match todos.iter().map(|t| t.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Apply `f` to the todo with `id`. Returns false when no such todo exists.
pub fn with_todo(todos: &mut [Todo], id: u32, f: impl FnOnce(&mut Todo)) -> bool {
    match todos.iter_mut().find(|t| t.id == id) {
        Some(todo) => {
            f(todo);
            true
        }
        None => false,
    }
}

pub fn toggle_complete(todos: &mut [Todo], id: u32) -> bool {
    with_todo(todos, id, |t| t.is_complete = !t.is_complete)
}

pub fn mark_as_editing(todos: &mut [Todo], id: u32) -> bool {
    with_todo(todos, id, |t| t.is_editing = true)
}

pub fn cancel_edit(todos: &mut [Todo], id: u32) -> bool {
    with_todo(todos, id, |t| t.is_editing = false)
}

/// Commit an edit. A blank value keeps the old title.
pub fn update_title(todos: &mut [Todo], id: u32, value: &str) -> bool {
    let value = value.trim();
    with_todo(todos, id, |t| {
        if !value.is_empty() {
            t.title = value.to_string();
        }
        t.is_editing = false;
    })
}

pub fn delete(todos: &mut Vec<Todo>, id: u32) -> bool {
    let before = todos.len();
    todos.retain(|t| t.id != id);
    todos.len() != before
}

/// Drop completed todos, returning how many were removed
pub fn clear_completed(todos: &mut Vec<Todo>) -> usize {
    let before = todos.len();
    todos.retain(|t| !t.is_complete);
    before - todos.len()
}

pub fn complete_all(todos: &mut [Todo]) {
    for todo in todos.iter_mut() {
        todo.is_complete = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Todo> {
        vec![
            Todo::new(1, "A"),
            Todo { is_complete: true, ..Todo::new(2, "B") },
            Todo::new(3, "C"),
        ]
    }

    fn ids(todos: &[Todo]) -> Vec<u32> {
        todos.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_filtered_keeps_order() {
        let todos = sample();
        assert_eq!(ids(&filtered(&todos, Filter::All)), vec![1, 2, 3]);
        assert_eq!(ids(&filtered(&todos, Filter::Active)), vec![1, 3]);
        assert_eq!(ids(&filtered(&todos, Filter::Completed)), vec![2]);
    }

    #[test]
    fn test_remaining_and_next_id() {
        let todos = sample();
        assert_eq!(remaining(&todos), 2);
        assert_eq!(next_id(&todos), Some(4));
        assert_eq!(next_id(&[]), Some(1));
    }

    #[test]
    fn test_next_id_exhausted() {
        assert_eq!(next_id(&[Todo::new(u32::MAX - 1, "A")]), Some(u32::MAX));
        assert_eq!(next_id(&[Todo::new(u32::MAX, "A")]), None);
    }

    #[test]
    fn test_toggle_complete_flips() {
        let mut todos = sample();
        assert!(toggle_complete(&mut todos, 2));
        assert!(!todos[1].is_complete);
        assert!(toggle_complete(&mut todos, 2));
        assert!(todos[1].is_complete);
        assert!(!toggle_complete(&mut todos, 99));
    }

    #[test]
    fn test_mark_as_editing_touches_one_row() {
        let mut todos = sample();
        mark_as_editing(&mut todos, 3);
        let editing: Vec<bool> = todos.iter().map(|t| t.is_editing).collect();
        assert_eq!(editing, vec![false, false, true]);
    }

    #[test]
    fn test_update_title() {
        let mut todos = sample();
        mark_as_editing(&mut todos, 1);
        assert!(update_title(&mut todos, 1, "  Renamed  "));
        assert_eq!(todos[0].title, "Renamed");
        assert!(!todos[0].is_editing);

        mark_as_editing(&mut todos, 1);
        update_title(&mut todos, 1, "   ");
        assert_eq!(todos[0].title, "Renamed");
        assert!(!todos[0].is_editing);
    }

    #[test]
    fn test_cancel_edit_keeps_title() {
        let mut todos = sample();
        mark_as_editing(&mut todos, 1);
        assert!(cancel_edit(&mut todos, 1));
        assert_eq!(todos[0].title, "A");
        assert!(!todos[0].is_editing);
    }

    #[test]
    fn test_delete_and_clear() {
        let mut todos = sample();
        assert!(delete(&mut todos, 1));
        assert!(!delete(&mut todos, 1));
        assert_eq!(ids(&todos), vec![2, 3]);

        assert_eq!(clear_completed(&mut todos), 1);
        assert_eq!(ids(&todos), vec![3]);
    }

    #[test]
    fn test_complete_all() {
        let mut todos = sample();
        complete_all(&mut todos);
        assert_eq!(remaining(&todos), 0);
    }
}
