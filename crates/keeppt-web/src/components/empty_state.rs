//! Empty state component for placeholder pages

use leptos::prelude::*;
use leptos_router::components::A;

/// Placeholder body for a page whose content lives elsewhere
#[component]
pub fn EmptyState(
    /// Page title (e.g., "Links", "Archives")
    title: &'static str,
    /// What the page will show
    description: &'static str,
    /// Optional hint shown below the description
    #[prop(optional)]
    hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="48"
                    height="48"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    // Inbox icon (tabler-inbox)
                    <rect x="4" y="4" width="16" height="16" rx="2"/>
                    <path d="M4 13h3l3 3h4l3 -3h3"/>
                </svg>
            </div>
            <h2 class="empty-state-title">{title}</h2>
            <p class="empty-state-description">{description}</p>

            {hint.map(|h| {
                view! {
                    <div class="empty-state-hint">
                        <strong>"Tip:"</strong>
                        " "
                        {h}
                    </div>
                }
            })}

            <div class="empty-state-actions">
                <A href="/" attr:class="btn btn-primary">
                    "Back to Keep"
                </A>
            </div>
        </div>
    }
}
