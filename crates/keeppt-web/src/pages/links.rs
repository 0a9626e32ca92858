//! Links page

use leptos::prelude::*;

use crate::components::EmptyState;

#[component]
pub fn Links() -> impl IntoView {
    view! {
        <div class="page links-page">
            <EmptyState title="Links" description="Saved links will be listed here." />
        </div>
    }
}
