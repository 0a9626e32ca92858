//! Header component

use keeppt_core::{ShellAction, ShellState, ViewportClass};
use leptos::prelude::*;

use super::user_menu::UserMenu;

/// Header with mobile menu toggle, brand and user menu
#[component]
pub fn Header(
    #[prop(into)] viewport: Signal<ViewportClass>,
    #[prop(into)] state: Signal<ShellState>,
    brand: String,
    badge: Option<String>,
    avatar: String,
    dispatch: Callback<ShellAction>,
) -> impl IntoView {
    let sidebar_open = move || state.get().sidebar.is_open();

    view! {
        <header class="header">
            <div class="header-main">
                <div class="header-start">
                    // Below the sm breakpoint only
                    <Show when=move || viewport.get().shows_toggle()>
                        <button
                            type="button"
                            class="burger"
                            class:burger-open=sidebar_open
                            on:click=move |_| dispatch.run(ShellAction::ToggleSidebar)
                            aria-label="Toggle navigation"
                            aria-expanded=move || sidebar_open().to_string()
                        >
                            <span class="burger-icon">"☰"</span>
                        </button>
                    </Show>

                    <div class="brand">
                        <button
                            type="button"
                            class="brand-label"
                            on:click=move |_| dispatch.run(ShellAction::BrandActivated)
                        >
                            {brand}
                        </button>
                        {badge.map(|badge| view! { <span class="brand-badge">{badge}</span> })}
                    </div>
                </div>

                <UserMenu
                    state=Signal::derive(move || state.get().user_menu)
                    avatar
                    dispatch
                />
            </div>
        </header>
    }
}
