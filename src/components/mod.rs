//! UI Components
//!
//! The todo list view, its leaf controls, and the add form.

mod todo_list_view;
mod todo_row;
mod todo_filters;
mod todo_items_remaining;
mod todo_clear_completed;
mod todo_complete_all_todos;
mod todo_form;

pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
pub use todo_filters::TodoFilters;
pub use todo_items_remaining::TodoItemsRemaining;
pub use todo_clear_completed::TodoClearCompleted;
pub use todo_complete_all_todos::TodoCompleteAllTodos;
pub use todo_form::TodoForm;
