//! Viewport classification against the theme breakpoints

use serde::{Deserialize, Serialize};

/// Named breakpoints in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub xs: u32,
    pub sm: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self { xs: 576, sm: 768 }
    }
}

impl Breakpoints {
    /// Classify a viewport width. `Wide` starts at `sm` inclusive.
    pub fn classify(&self, width: f64) -> ViewportClass {
        if width >= f64::from(self.sm) {
            ViewportClass::Wide
        } else {
            ViewportClass::Narrow
        }
    }

    /// Below `xs` there is no room for the user menu
    pub fn hides_user_menu(&self, width: f64) -> bool {
        width < f64::from(self.xs)
    }
}

/// Layout class the shell renders for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportClass {
    /// Below `sm`: sidebar is a drawer driven by the toggle
    Narrow,
    /// `sm` and up: sidebar always visible, no toggle
    #[default]
    Wide,
}

impl ViewportClass {
    pub fn is_narrow(self) -> bool {
        self == ViewportClass::Narrow
    }

    /// The mobile toggle only exists below the breakpoint
    pub fn shows_toggle(self) -> bool {
        self.is_narrow()
    }
}
