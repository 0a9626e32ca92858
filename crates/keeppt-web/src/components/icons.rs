//! Inline Tabler-style SVG icons

use keeppt_core::{NavIcon, UserMenuItem};
use leptos::prelude::*;

/// Sidebar glyph for a navigation entry
#[component]
pub fn NavGlyph(icon: NavIcon) -> impl IntoView {
    match icon {
        NavIcon::Mailbox => view! {
            <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M10 21v-6.5a3.5 3.5 0 0 0 -7 0v6.5h18v-6a4 4 0 0 0 -4 -4h-10.5"/>
                <path d="M12 11v-8h4l2 2l-2 2h-4"/>
                <path d="M6 15h1"/>
            </svg>
        }
        .into_any(),
        NavIcon::Link => view! {
            <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M10 14a3.5 3.5 0 0 0 5 0l4 -4a3.5 3.5 0 0 0 -5 -5l-.5 .5"/>
                <path d="M14 10a3.5 3.5 0 0 0 -5 0l-4 4a3.5 3.5 0 0 0 5 5l.5 -.5"/>
            </svg>
        }
        .into_any(),
        NavIcon::Archive => view! {
            <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <rect x="3" y="4" width="18" height="4" rx="2"/>
                <path d="M5 8v10a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-10"/>
                <path d="M10 12l4 0"/>
            </svg>
        }
        .into_any(),
        NavIcon::Settings => view! { <SettingsIcon size=16 /> }.into_any(),
    }
}

/// Gear icon, shared by the sidebar and the account menu item
#[component]
pub fn SettingsIcon(size: u32) -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width=size.to_string() height=size.to_string() viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M10.325 4.317c.426 -1.756 2.924 -1.756 3.35 0a1.724 1.724 0 0 0 2.573 1.066c1.543 -.94 3.31 .826 2.37 2.37a1.724 1.724 0 0 0 1.065 2.572c1.756 .426 1.756 2.924 0 3.35a1.724 1.724 0 0 0 -1.066 2.573c.94 1.543 -.826 3.31 -2.37 2.37a1.724 1.724 0 0 0 -2.572 1.065c-.426 1.756 -2.924 1.756 -3.35 0a1.724 1.724 0 0 0 -2.573 -1.066c-1.543 .94 -3.31 -.826 -2.37 -2.37a1.724 1.724 0 0 0 -1.065 -2.572c-1.756 -.426 -1.756 -2.924 0 -3.35a1.724 1.724 0 0 0 1.066 -2.573c-.94 -1.543 .826 -3.31 2.37 -2.37c1 .608 2.296 .07 2.572 -1.065z"/>
            <circle cx="12" cy="12" r="3"/>
        </svg>
    }
}

/// Icon next to a user menu item
#[component]
pub fn MenuItemIcon(item: UserMenuItem) -> impl IntoView {
    match item {
        UserMenuItem::AccountSettings => view! { <SettingsIcon size=14 /> }.into_any(),
        UserMenuItem::Logout => view! {
            <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M14 8v-2a2 2 0 0 0 -2 -2h-7a2 2 0 0 0 -2 2v12a2 2 0 0 0 2 2h7a2 2 0 0 0 2 -2v-2"/>
                <path d="M9 12h12l-3 -3"/>
                <path d="M18 15l3 -3"/>
            </svg>
        }
        .into_any(),
    }
}

#[component]
pub fn ChevronDownIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="12" height="12" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M6 9l6 6l6 -6"/>
        </svg>
    }
}
