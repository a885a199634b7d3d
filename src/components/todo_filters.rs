//! Todo Filters Component
//!
//! Filter selector buttons.

use leptos::prelude::*;

use crate::models::Filter;

/// One button per filter; the selected one is highlighted
#[component]
pub fn TodoFilters(
    filter: ReadSignal<Filter>,
    set_filter: WriteSignal<Filter>,
) -> impl IntoView {
    view! {
        <div>
            {Filter::ALL.iter().map(|&option| {
                let is_selected = move || filter.get() == option;
                view! {
                    <button
                        class=move || {
                            if is_selected() { "button filter-button filter-button-active" } else { "button filter-button" }
                        }
                        on:click=move |_| {
                            tracing::debug!(filter = %option, "filter changed");
                            set_filter.set(option);
                        }
                    >
                        {option.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
