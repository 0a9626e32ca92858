//! Avatar trigger and account dropdown

use keeppt_core::{MenuEvent, MenuState, ShellAction, UserMenuItem};
use leptos::prelude::*;

use super::icons::{ChevronDownIcon, MenuItemIcon};

/// User menu. Reports open/close events to the shell; the dropdown is shown
/// only while the shell says the menu is open.
#[component]
pub fn UserMenu(
    #[prop(into)] state: Signal<MenuState>,
    /// Avatar image URL
    avatar: String,
    dispatch: Callback<ShellAction>,
) -> impl IntoView {
    let is_open = move || state.get().is_open();
    let close = move || dispatch.run(ShellAction::UserMenu(MenuEvent::Close));
    let on_trigger =
        move |_| dispatch.run(ShellAction::UserMenu(state.get_untracked().trigger_event()));

    view! {
        <div
            class="user-menu"
            on:keydown=move |ev| {
                if ev.key() == "Escape" {
                    close();
                }
            }
        >
            <button
                type="button"
                class=move || if is_open() { "user user-active" } else { "user" }
                aria-haspopup="menu"
                aria-expanded=move || is_open().to_string()
                aria-label="Account menu"
                on:click=on_trigger
            >
                <img class="avatar" src=avatar alt="" width="30" height="30" />
                <ChevronDownIcon />
            </button>

            <Show when=is_open>
                // Outside click closes
                <div class="user-menu-backdrop" on:click=move |_| close()></div>
                <div class="user-menu-dropdown" role="menu">
                    {UserMenuItem::ALL
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let class = if item.is_danger() {
                                "menu-item menu-item-danger"
                            } else {
                                "menu-item"
                            };
                            view! {
                                {(index > 0)
                                    .then(|| view! { <div class="menu-divider" role="separator"></div> })}
                                <div class="menu-label">{item.section()}</div>
                                <button
                                    type="button"
                                    role="menuitem"
                                    class=class
                                    on:click=move |_| dispatch.run(ShellAction::SelectMenuItem(item))
                                >
                                    <span class="menu-item-icon">
                                        <MenuItemIcon item />
                                    </span>
                                    <span class="menu-item-label">{item.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
