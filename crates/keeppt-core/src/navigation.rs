//! Navigation entries and active-route matching

use serde::Serialize;

/// Glyph shown next to a navigation label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavIcon {
    Mailbox,
    Link,
    Archive,
    Settings,
}

impl NavIcon {
    pub fn name(self) -> &'static str {
        match self {
            NavIcon::Mailbox => "mailbox",
            NavIcon::Link => "link",
            NavIcon::Archive => "archive",
            NavIcon::Settings => "settings",
        }
    }
}

/// Semantic color token for the icon badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavColor {
    Blue,
    Teal,
    Red,
    Orange,
}

impl NavColor {
    pub fn name(self) -> &'static str {
        match self {
            NavColor::Blue => "blue",
            NavColor::Teal => "teal",
            NavColor::Red => "red",
            NavColor::Orange => "orange",
        }
    }
}

/// One sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub icon: NavIcon,
    pub color: NavColor,
    pub label: &'static str,
    pub path: &'static str,
}

impl NavigationEntry {
    /// Exact match only: `/archives/1` does not activate `/archives`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

/// Sidebar entries in display order
pub const NAVIGATION: &[NavigationEntry] = &[
    NavigationEntry {
        icon: NavIcon::Mailbox,
        color: NavColor::Blue,
        label: "Keep",
        path: "/",
    },
    NavigationEntry {
        icon: NavIcon::Link,
        color: NavColor::Teal,
        label: "Links",
        path: "/links",
    },
    NavigationEntry {
        icon: NavIcon::Archive,
        color: NavColor::Red,
        label: "Archives",
        path: "/archives",
    },
    NavigationEntry {
        icon: NavIcon::Settings,
        color: NavColor::Orange,
        label: "Settings",
        path: "/settings",
    },
];

/// Routing collaborator: performs a navigation, fire-and-forget
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path)
    }
}
