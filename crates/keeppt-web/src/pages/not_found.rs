//! Fallback page for unknown routes

use leptos::prelude::*;

use crate::components::EmptyState;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <EmptyState title="Not found" description="There is nothing at this address." />
        </div>
    }
}
