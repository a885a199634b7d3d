//! Complete All Component

use leptos::prelude::*;

/// Marks every todo complete
#[component]
pub fn TodoCompleteAllTodos(complete_all_todos: Callback<()>) -> impl IntoView {
    view! {
        <div>
            <div class="button" on:click=move |_| complete_all_todos.run(())>
                "Check All"
            </div>
        </div>
    }
}
