//! Keep page - saved items inbox

use leptos::prelude::*;

use crate::components::EmptyState;

/// Keep page - landing route
#[component]
pub fn Keep() -> impl IntoView {
    view! {
        <div class="page keep-page">
            <EmptyState
                title="Keep"
                description="Everything you keep shows up here, newest first."
                hint="Use the sidebar to switch between links and archives"
            />
        </div>
    }
}
