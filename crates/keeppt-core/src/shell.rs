//! Shell state machine
//!
//! All UI mutations of the dashboard shell go through [`ShellState::reduce`].
//! The reducer never navigates itself: it returns a [`ShellEffect`] that the
//! rendering layer hands to the routing collaborator.

use tracing::debug;

use crate::config::ShellConfig;
use crate::navigation::Navigator;
use crate::viewport::ViewportClass;

/// Mobile sidebar drawer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    Open,
    #[default]
    Closed,
}

impl SidebarState {
    pub fn toggled(self) -> Self {
        match self {
            SidebarState::Open => SidebarState::Closed,
            SidebarState::Closed => SidebarState::Open,
        }
    }

    pub fn is_open(self) -> bool {
        self == SidebarState::Open
    }
}

/// User menu dropdown state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

/// Signal reported by the menu control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Trigger activated while closed
    Open,
    /// Outside click, Escape, item selection, or trigger activated while open
    Close,
}

impl MenuState {
    pub fn apply(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::Open => MenuState::Open,
            MenuEvent::Close => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Event a click on the trigger reports in this state
    pub fn trigger_event(self) -> MenuEvent {
        match self {
            MenuState::Open => MenuEvent::Close,
            MenuState::Closed => MenuEvent::Open,
        }
    }
}

/// Items in the user dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuItem {
    AccountSettings,
    Logout,
}

impl UserMenuItem {
    pub const ALL: [UserMenuItem; 2] = [UserMenuItem::AccountSettings, UserMenuItem::Logout];

    pub fn label(self) -> &'static str {
        match self {
            UserMenuItem::AccountSettings => "Account settings",
            UserMenuItem::Logout => "Logout",
        }
    }

    /// Group heading the item is listed under
    pub fn section(self) -> &'static str {
        match self {
            UserMenuItem::AccountSettings => "Settings",
            UserMenuItem::Logout => "Danger zone",
        }
    }

    pub fn is_danger(self) -> bool {
        matches!(self, UserMenuItem::Logout)
    }

    pub fn target(self, config: &ShellConfig) -> &str {
        match self {
            UserMenuItem::AccountSettings => &config.settings_route,
            UserMenuItem::Logout => &config.logout_route,
        }
    }
}

/// User interactions the shell reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    /// Mobile menu toggle activated
    ToggleSidebar,
    /// Menu control reported open/close
    UserMenu(MenuEvent),
    /// Dropdown item chosen
    SelectMenuItem(UserMenuItem),
    /// Sidebar link activated
    Navigate(String),
    /// Brand label activated
    BrandActivated,
}

/// Side effect requested by a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEffect {
    Navigate(String),
}

impl ShellEffect {
    pub fn run<N: Navigator + ?Sized>(self, navigator: &N) {
        match self {
            ShellEffect::Navigate(path) => navigator.navigate(&path),
        }
    }
}

/// UI state owned by one dashboard shell instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    pub sidebar: SidebarState,
    pub user_menu: MenuState,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action. Navigation never touches the sidebar flag.
    pub fn reduce(&mut self, action: ShellAction, config: &ShellConfig) -> Option<ShellEffect> {
        debug!(?action, "shell action");
        let effect = match action {
            ShellAction::ToggleSidebar => {
                self.sidebar = self.sidebar.toggled();
                None
            }
            ShellAction::UserMenu(event) => {
                self.user_menu = self.user_menu.apply(event);
                None
            }
            ShellAction::SelectMenuItem(item) => {
                self.user_menu = self.user_menu.apply(MenuEvent::Close);
                Some(ShellEffect::Navigate(item.target(config).to_string()))
            }
            ShellAction::Navigate(path) => Some(ShellEffect::Navigate(path)),
            ShellAction::BrandActivated => {
                Some(ShellEffect::Navigate(config.root_route.clone()))
            }
        };
        if let Some(effect) = &effect {
            debug!(?effect, "shell effect");
        }
        effect
    }

    /// Reduce and hand any effect straight to the navigator
    pub fn dispatch<N: Navigator + ?Sized>(
        &mut self,
        action: ShellAction,
        config: &ShellConfig,
        navigator: &N,
    ) {
        if let Some(effect) = self.reduce(action, config) {
            effect.run(navigator);
        }
    }

    /// Wide viewports always show the sidebar; narrow ones follow the flag.
    pub fn sidebar_visible(&self, viewport: ViewportClass) -> bool {
        match viewport {
            ViewportClass::Wide => true,
            ViewportClass::Narrow => self.sidebar.is_open(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ShellConfig {
        ShellConfig::default()
    }

    #[test]
    fn test_initial_state_closed() {
        let state = ShellState::new();
        assert_eq!(state.sidebar, SidebarState::Closed);
        assert_eq!(state.user_menu, MenuState::Closed);
        assert!(!state.user_menu.is_open());
    }

    #[test]
    fn test_toggle_parity() {
        let cfg = config();
        for n in 0..9 {
            let mut state = ShellState::new();
            for _ in 0..n {
                assert_eq!(state.reduce(ShellAction::ToggleSidebar, &cfg), None);
            }
            assert_eq!(state.sidebar.is_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn test_sidebar_visibility_by_viewport() {
        let mut state = ShellState::new();
        assert!(state.sidebar_visible(ViewportClass::Wide));
        assert!(!state.sidebar_visible(ViewportClass::Narrow));

        state.reduce(ShellAction::ToggleSidebar, &config());
        assert!(state.sidebar_visible(ViewportClass::Wide));
        assert!(state.sidebar_visible(ViewportClass::Narrow));
    }

    #[test]
    fn test_navigation_keeps_sidebar_open() {
        let cfg = config();
        let mut state = ShellState::new();
        state.reduce(ShellAction::ToggleSidebar, &cfg);

        let effect = state.reduce(ShellAction::Navigate("/links".into()), &cfg);
        assert_eq!(effect, Some(ShellEffect::Navigate("/links".into())));
        assert!(state.sidebar.is_open());

        state.reduce(ShellAction::BrandActivated, &cfg);
        assert!(state.sidebar.is_open());
    }

    #[test]
    fn test_menu_open_close() {
        let cfg = config();
        let mut state = ShellState::new();
        state.reduce(ShellAction::UserMenu(MenuEvent::Open), &cfg);
        assert!(state.user_menu.is_open());

        // Repeated open stays open
        state.reduce(ShellAction::UserMenu(MenuEvent::Open), &cfg);
        assert!(state.user_menu.is_open());

        state.reduce(ShellAction::UserMenu(MenuEvent::Close), &cfg);
        assert!(!state.user_menu.is_open());
    }

    #[test]
    fn test_trigger_event_alternates() {
        assert_eq!(MenuState::Closed.trigger_event(), MenuEvent::Open);
        assert_eq!(MenuState::Open.trigger_event(), MenuEvent::Close);
    }

    #[test]
    fn test_menu_item_selection_closes_menu() {
        let cfg = config();
        for item in UserMenuItem::ALL {
            let mut state = ShellState::new();
            state.reduce(ShellAction::UserMenu(MenuEvent::Open), &cfg);
            state.reduce(ShellAction::SelectMenuItem(item), &cfg);
            assert_eq!(state.user_menu, MenuState::Closed, "{item:?}");
        }
    }

    #[test]
    fn test_menu_item_targets() {
        let cfg = config();
        let mut state = ShellState::new();
        assert_eq!(
            state.reduce(ShellAction::SelectMenuItem(UserMenuItem::AccountSettings), &cfg),
            Some(ShellEffect::Navigate("/settings".into()))
        );
        assert_eq!(
            state.reduce(ShellAction::SelectMenuItem(UserMenuItem::Logout), &cfg),
            Some(ShellEffect::Navigate("/api/logout".into()))
        );
    }

    #[test]
    fn test_menu_sections() {
        assert_eq!(UserMenuItem::AccountSettings.section(), "Settings");
        assert_eq!(UserMenuItem::Logout.section(), "Danger zone");
        assert!(UserMenuItem::Logout.is_danger());
        assert!(!UserMenuItem::AccountSettings.is_danger());
    }

    #[test]
    fn test_brand_navigates_to_root() {
        let mut state = ShellState::new();
        assert_eq!(
            state.reduce(ShellAction::BrandActivated, &config()),
            Some(ShellEffect::Navigate("/".into()))
        );
    }
}
