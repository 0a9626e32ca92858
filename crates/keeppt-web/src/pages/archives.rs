//! Archives page

use leptos::prelude::*;

use crate::components::EmptyState;

#[component]
pub fn Archives() -> impl IntoView {
    view! {
        <div class="page archives-page">
            <EmptyState title="Archives" description="Archived items will be listed here." />
        </div>
    }
}
