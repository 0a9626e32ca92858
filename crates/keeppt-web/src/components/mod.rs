//! Leptos UI components

mod empty_state;
mod header;
mod icons;
mod nav_item;
mod shell;
mod sidebar;
mod user_menu;

pub use empty_state::EmptyState;
pub use header::Header;
pub use icons::{ChevronDownIcon, MenuItemIcon, NavGlyph, SettingsIcon};
pub use nav_item::NavItem;
pub use shell::{use_current_user, DashboardShell};
pub use sidebar::Sidebar;
pub use user_menu::UserMenu;
