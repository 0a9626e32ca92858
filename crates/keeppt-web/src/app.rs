//! Main Leptos App component with SPA router

use keeppt_core::{read_user_id, CurrentUser, ShellConfig, UserId};
use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
    path,
};

use crate::browser::{
    is_server_route, load_page, preferred_color_scheme, use_viewport, BrowserStorage,
};
use crate::components::DashboardShell;
use crate::pages::{Archives, Keep, Links, NotFound, Settings};

/// Shell config baked in at build time through `KEEPPT_SHELL_CONFIG` (TOML)
pub fn build_config() -> ShellConfig {
    match option_env!("KEEPPT_SHELL_CONFIG") {
        Some(toml) => ShellConfig::from_toml_str(toml).unwrap_or_else(|e| {
            warn!("Ignoring KEEPPT_SHELL_CONFIG: {e}");
            ShellConfig::default()
        }),
        None => ShellConfig::default(),
    }
}

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    let config = build_config();
    // Read once per mount; the shell never writes it
    let user_id = read_user_id(&BrowserStorage);

    view! {
        <Router>
            <RoutedShell config user_id />
        </Router>
    }
}

/// Wires the router and browser collaborators into the shell
#[component]
fn RoutedShell(config: ShellConfig, user_id: Option<UserId>) -> impl IntoView {
    let location = use_location();
    let navigate = StoredValue::new_local(use_navigate());

    let on_navigate = Callback::new(move |path: String| {
        if is_server_route(&path) {
            load_page(&path);
        } else {
            navigate.with_value(|navigate| navigate(&path, Default::default()));
        }
    });

    let (viewport, compact) = use_viewport(config.breakpoints);
    let color_scheme = config.color_scheme.unwrap_or_else(preferred_color_scheme);
    let current_path = Signal::derive(move || location.pathname.get());

    // No session collaborator is wired in yet
    let user = CurrentUser::anonymous();

    view! {
        <DashboardShell
            config
            current_path
            viewport
            compact
            color_scheme=Signal::derive(move || color_scheme)
            user
            user_id
            on_navigate
        >
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Keep />
                <Route path=path!("/links") view=Links />
                <Route path=path!("/archives") view=Archives />
                <Route path=path!("/settings") view=Settings />
            </Routes>
        </DashboardShell>
    }
}
