//! Clear Completed Component

use leptos::prelude::*;

#[component]
pub fn TodoClearCompleted(clear_completed: Callback<()>) -> impl IntoView {
    view! {
        <button class="button" on:click=move |_| clear_completed.run(())>
            "Clear completed"
        </button>
    }
}
