//! CSS class mapping for theme tokens
//!
//! Colors and spacing live in `static/shell.css`; components only pick classes.

use keeppt_core::{ColorScheme, NavColor, ViewportClass};

/// Root class selecting the light or dark palette
pub fn scheme_class(scheme: ColorScheme) -> &'static str {
    match scheme {
        ColorScheme::Light => "scheme-light",
        ColorScheme::Dark => "scheme-dark",
    }
}

/// Root class selecting the drawer or the fixed sidebar layout
pub fn layout_class(viewport: ViewportClass) -> &'static str {
    match viewport {
        ViewportClass::Narrow => "shell-narrow",
        ViewportClass::Wide => "shell-wide",
    }
}

/// Tinted icon badge class for a navigation color token
pub fn nav_color_class(color: NavColor) -> &'static str {
    match color {
        NavColor::Blue => "theme-icon-blue",
        NavColor::Teal => "theme-icon-teal",
        NavColor::Red => "theme-icon-red",
        NavColor::Orange => "theme-icon-orange",
    }
}
