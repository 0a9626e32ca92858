//! End-to-end scenarios for the shell state machine

use keeppt_core::{
    avatar_url, read_user_id, MenuEvent, Navigator, ShellAction, ShellConfig, ShellState,
    UserMenuItem, ViewportClass, NAVIGATION,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;

/// Navigator that records every requested path
#[derive(Default)]
struct RecordingNavigator {
    calls: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.calls.borrow_mut().push(path.to_string());
    }
}

impl RecordingNavigator {
    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[test]
fn test_only_links_active_on_links_page() {
    let active: Vec<_> = NAVIGATION
        .iter()
        .filter(|entry| entry.is_active("/links"))
        .map(|entry| entry.label)
        .collect();
    assert_eq!(active, vec!["Links"]);
}

#[test]
fn test_account_settings_navigates_once() {
    let config = ShellConfig::default();
    let navigator = RecordingNavigator::default();
    let mut state = ShellState::new();

    state.dispatch(ShellAction::UserMenu(MenuEvent::Open), &config, &navigator);
    assert!(state.user_menu.is_open());
    assert!(navigator.calls().is_empty());

    state.dispatch(
        ShellAction::SelectMenuItem(UserMenuItem::AccountSettings),
        &config,
        &navigator,
    );
    assert_eq!(navigator.calls(), vec!["/settings"]);
    assert!(!state.user_menu.is_open());
}

#[test]
fn test_logout_navigates_once() {
    let config = ShellConfig::default();
    let navigator = RecordingNavigator::default();
    let mut state = ShellState::new();

    state.dispatch(ShellAction::UserMenu(MenuEvent::Open), &config, &navigator);
    state.dispatch(ShellAction::SelectMenuItem(UserMenuItem::Logout), &config, &navigator);
    assert_eq!(navigator.calls(), vec!["/api/logout"]);
    assert!(!state.user_menu.is_open());
}

#[test]
fn test_nav_item_always_navigates() {
    let config = ShellConfig::default();
    let navigator = RecordingNavigator::default();
    let mut state = ShellState::new();

    // No guard when already on the page
    for _ in 0..2 {
        state.dispatch(ShellAction::Navigate("/links".into()), &config, &navigator);
    }
    assert_eq!(navigator.calls(), vec!["/links", "/links"]);
}

#[test]
fn test_mobile_session() {
    let config = ShellConfig::default();
    let navigator = RecordingNavigator::default();
    let mut state = ShellState::new();
    let viewport = ViewportClass::Narrow;

    assert!(!state.sidebar_visible(viewport));
    state.dispatch(ShellAction::ToggleSidebar, &config, &navigator);
    assert!(state.sidebar_visible(viewport));

    state.dispatch(ShellAction::Navigate("/archives".into()), &config, &navigator);
    assert!(state.sidebar_visible(viewport), "navigation leaves the drawer open");

    state.dispatch(ShellAction::ToggleSidebar, &config, &navigator);
    assert!(!state.sidebar_visible(viewport));
    assert!(state.sidebar_visible(ViewportClass::Wide));

    state.dispatch(ShellAction::BrandActivated, &config, &navigator);
    assert_eq!(navigator.calls(), vec!["/archives", "/"]);
}

#[test]
fn test_stored_user_id_to_avatar() {
    let config = ShellConfig::default();
    let store = HashMap::from([("userId".to_string(), "u123".to_string())]);
    let url = avatar_url(&config.avatar_url_template, read_user_id(&store).as_ref());
    assert_eq!(url.matches("u123").count(), 1);

    let empty: HashMap<String, String> = HashMap::new();
    let url = avatar_url(&config.avatar_url_template, read_user_id(&empty).as_ref());
    assert!(url.contains("/avatar/?"));
}

#[test]
fn test_config_file_routes_flow_into_reducer() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "settings_route = \"/account\"\nlogout_route = \"/auth/logout\"").unwrap();

    let config = ShellConfig::load(file.path()).unwrap();
    let navigator = RecordingNavigator::default();
    let mut state = ShellState::new();
    state.dispatch(
        ShellAction::SelectMenuItem(UserMenuItem::AccountSettings),
        &config,
        &navigator,
    );
    state.dispatch(ShellAction::SelectMenuItem(UserMenuItem::Logout), &config, &navigator);
    assert_eq!(navigator.calls(), vec!["/account", "/auth/logout"]);
}
