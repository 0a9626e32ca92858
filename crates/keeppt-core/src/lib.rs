//! keeppt-core - navigation model and shell state machine for the keeppt dashboard
//!
//! This crate is UI-framework agnostic: it decides which sidebar link is
//! active, when the sidebar and user menu are open, and where each control
//! navigates. `keeppt-web` renders it with Leptos.

pub mod avatar;
pub mod config;
pub mod error;
pub mod navigation;
pub mod session;
pub mod shell;
pub mod viewport;

pub use avatar::avatar_url;
pub use config::{ColorScheme, ShellConfig};
pub use error::ShellError;
pub use navigation::{NavColor, NavIcon, NavigationEntry, Navigator, NAVIGATION};
pub use session::{read_user_id, CurrentUser, KeyValueStore, UserId, USER_ID_KEY};
pub use shell::{
    MenuEvent, MenuState, ShellAction, ShellEffect, ShellState, SidebarState, UserMenuItem,
};
pub use viewport::{Breakpoints, ViewportClass};
