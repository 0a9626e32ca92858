//! Shell configuration
//!
//! Everything has a default, so an empty TOML document is a valid config.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::avatar::{DEFAULT_AVATAR_TEMPLATE, USER_ID_PLACEHOLDER};
use crate::error::{Result, ShellError};
use crate::viewport::Breakpoints;

/// Color scheme (light / dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Labels, routes and theme inputs of the dashboard shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Brand label in the header
    pub brand: String,
    /// Small indicator next to the brand
    pub badge: Option<String>,
    pub root_route: String,
    pub settings_route: String,
    /// Server endpoint that terminates the session
    pub logout_route: String,
    /// Must contain `{user_id}` exactly once
    pub avatar_url_template: String,
    pub breakpoints: Breakpoints,
    /// Forces a scheme; `None` follows the browser preference
    pub color_scheme: Option<ColorScheme>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand: "keeppt".to_string(),
            badge: Some("pre-alpha".to_string()),
            root_route: "/".to_string(),
            settings_route: "/settings".to_string(),
            logout_route: "/api/logout".to_string(),
            avatar_url_template: DEFAULT_AVATAR_TEMPLATE.to_string(),
            breakpoints: Breakpoints::default(),
            color_scheme: None,
        }
    }
}

impl ShellConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ShellConfig = toml::from_str(content).map_err(|e| ShellError::ConfigParse {
            message: e.message().to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ShellError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, route) in [
            ("root_route", &self.root_route),
            ("settings_route", &self.settings_route),
            ("logout_route", &self.logout_route),
        ] {
            if !route.starts_with('/') {
                return Err(ShellError::invalid(format!(
                    "{name} must be an absolute path, got {route:?}"
                )));
            }
        }

        let placeholders = self.avatar_url_template.matches(USER_ID_PLACEHOLDER).count();
        if placeholders != 1 {
            return Err(ShellError::invalid(format!(
                "avatar_url_template must contain {USER_ID_PLACEHOLDER} exactly once, found {placeholders}"
            )));
        }

        if self.breakpoints.xs >= self.breakpoints.sm {
            return Err(ShellError::invalid(format!(
                "breakpoints must increase: xs={} sm={}",
                self.breakpoints.xs, self.breakpoints.sm
            )));
        }

        Ok(())
    }
}
