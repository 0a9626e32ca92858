//! Browser collaborators: local storage, viewport width, color preference,
//! full page loads.
//!
//! Only the app root calls into these; the shell components receive plain
//! values and stay renderable on the server.

use keeppt_core::{Breakpoints, ColorScheme, KeyValueStore, ViewportClass};
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::logging::warn;
use leptos::prelude::*;

/// `window.localStorage`, read-only
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => storage,
            _ => {
                warn!("localStorage unavailable, {key} not read");
                return None;
            }
        };
        storage.get_item(key).ok().flatten()
    }
}

fn current_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
}

/// Viewport class and whether the user menu is hidden, re-measured on resize.
///
/// An unknown width counts as wide with the menu shown.
pub fn use_viewport(breakpoints: Breakpoints) -> (Signal<ViewportClass>, Signal<bool>) {
    let measure = move || {
        current_width()
            .map(|width| (breakpoints.classify(width), breakpoints.hides_user_menu(width)))
            .unwrap_or_default()
    };
    let (initial_class, initial_compact) = measure();
    let (viewport, set_viewport) = signal(initial_class);
    let (compact, set_compact) = signal(initial_compact);

    window_event_listener(leptos::ev::resize, move |_| {
        let (class, hides_menu) = measure();
        if viewport.get_untracked() != class {
            set_viewport.set(class);
        }
        if compact.get_untracked() != hides_menu {
            set_compact.set(hides_menu);
        }
    });

    (viewport.into(), compact.into())
}

/// `prefers-color-scheme` media query, light when unknown
pub fn preferred_color_scheme() -> ColorScheme {
    let dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);

    if dark {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    }
}

/// Paths handled by the backend rather than the client router
pub fn is_server_route(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Leave the SPA and let the server answer `path`
pub fn load_page(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(path) {
        warn!("Failed to load {path}: {e:?}");
    }
}
