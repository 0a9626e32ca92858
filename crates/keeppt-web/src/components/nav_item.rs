//! Single sidebar navigation link

use keeppt_core::NavigationEntry;
use leptos::prelude::*;

use super::icons::NavGlyph;
use crate::theme::nav_color_class;

/// Navigation link. Owns no state: active styling is derived from the
/// current path on every render and a click always reports the entry path.
#[component]
pub fn NavItem(
    entry: NavigationEntry,
    /// Current resolved route path
    #[prop(into)]
    current_path: Signal<String>,
    /// Invoked with `entry.path` once per activation
    on_navigate: Callback<String>,
) -> impl IntoView {
    let is_active = move || current_path.with(|path| entry.is_active(path));

    view! {
        <li class="nav-item">
            <button
                type="button"
                data-path=entry.path
                aria-current=move || is_active().then_some("page")
                class=move || {
                    if is_active() { "nav-link nav-link-active" } else { "nav-link" }
                }
                on:click=move |_| on_navigate.run(entry.path.to_string())
            >
                <span class=format!("nav-link-icon theme-icon {}", nav_color_class(entry.color))>
                    <NavGlyph icon=entry.icon />
                </span>
                <span class="nav-link-label">{entry.label}</span>
            </button>
        </li>
    }
}
