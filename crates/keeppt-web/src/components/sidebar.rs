//! Sidebar navigation list

use keeppt_core::{NavigationEntry, ShellAction};
use leptos::prelude::*;

use super::nav_item::NavItem;

/// Sidebar with one link per navigation entry, in order.
///
/// Visibility is decided by the shell; following a link does not close the
/// drawer.
#[component]
pub fn Sidebar(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] current_path: Signal<String>,
    entries: &'static [NavigationEntry],
    dispatch: Callback<ShellAction>,
) -> impl IntoView {
    let on_navigate = Callback::new(move |path: String| dispatch.run(ShellAction::Navigate(path)));

    view! {
        <aside
            class=move || if visible.get() { "sidebar" } else { "sidebar sidebar-hidden" }
            aria-hidden=move || (!visible.get()).to_string()
        >
            <nav class="nav">
                <ul class="nav-list">
                    {entries
                        .iter()
                        .copied()
                        .map(|entry| {
                            view! { <NavItem entry current_path on_navigate /> }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </aside>
    }
}
