//! Items Remaining Component

use leptos::prelude::*;

/// "1 item remaining" / "3 items remaining"
pub fn remaining_label(count: usize) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!("{} {} remaining", count, noun)
}

#[component]
pub fn TodoItemsRemaining(remaining: Callback<(), usize>) -> impl IntoView {
    view! {
        <span>{move || remaining_label(remaining.run(()))}</span>
    }
}
