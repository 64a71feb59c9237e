//! Dashboard Configuration
//!
//! API endpoint, listing page size and route style, persisted as TOML in the
//! platform config directory. Every section and field is optional in the
//! file; missing values fall back to the built-in defaults.

use crate::constants::{
    BASE_URL_ENV, CONFIG_FILE_NAME, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS,
    FIT_PADDING, ROUTE_COLOR, ROUTE_OPACITY, ROUTE_WEIGHT,
};
use crate::domain::geo::Padding;
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Remote trip API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; `/` and `/sorted` are appended to it
    pub base_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Listing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub page_size: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// How a route line is drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteStyle {
    pub color: String,
    pub weight: f32,
    pub opacity: f32,
    /// Let the routing engine recompute while a waypoint is dragged
    pub route_while_dragging: bool,
    /// Viewport padding around the fitted route
    pub padding: Padding,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            color: ROUTE_COLOR.to_string(),
            weight: ROUTE_WEIGHT,
            opacity: ROUTE_OPACITY,
            route_while_dragging: true,
            padding: FIT_PADDING.into(),
        }
    }
}

/// Whole dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub listing: ListingConfig,
    pub route: RouteStyle,
}

impl DashboardConfig {
    /// Parse a TOML document; an empty document yields the defaults
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the components cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.listing.page_size == 0 {
            return Err(Error::Invalid {
                message: "listing.page_size must be at least 1".to_string(),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(Error::Invalid {
                message: "api.timeout_secs must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.route.opacity) {
            return Err(Error::Invalid {
                message: format!("route.opacity {} is outside 0..=1", self.route.opacity),
            });
        }
        Ok(())
    }

    /// Apply a base URL override (from the environment), ignoring blanks
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
        self
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Path of the config file inside the config directory
fn get_config_path() -> Result<PathBuf> {
    let path = get_or_create_config_dir()?.join(CONFIG_FILE_NAME);

    #[cfg(debug_assertions)]
    info!("Dashboard config file: {}", path.display());

    Ok(path)
}

/// Load the configuration from a specific file; a missing file yields defaults
pub fn load_config_from(path: &Path) -> Result<DashboardConfig> {
    if !path.exists() {
        return Ok(DashboardConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    DashboardConfig::parse(&content)
}

/// Load the configuration from the platform config dir plus environment override
pub fn load_config() -> Result<DashboardConfig> {
    let config = load_config_from(&get_config_path()?)?;
    Ok(config.with_base_url_override(std::env::var(BASE_URL_ENV).ok()))
}

/// Write the defaults to the config dir if no config file exists yet
pub fn write_default_config() -> Result<PathBuf> {
    let path = get_config_path()?;
    if !path.exists() {
        std::fs::write(&path, DashboardConfig::default().to_toml()?)?;
        info!("Wrote default dashboard config to {}", path.display());
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = DashboardConfig::parse("  \n").expect("parse");
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.listing.page_size, 10);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.route.padding, Padding { x: 50, y: 50 });
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = DashboardConfig::parse(
            r##"
            [listing]
            page_size = 25

            [route]
            color = "#00ff00"
            "##,
        )
        .expect("parse");

        assert_eq!(config.listing.page_size, 25);
        assert_eq!(config.route.color, "#00ff00");
        assert_eq!(config.route.weight, ROUTE_WEIGHT);
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = DashboardConfig::parse("[listing]\npage_size = 0\n").expect_err("invalid");
        assert!(matches!(err, Error::Invalid { .. }));
    }

    #[test]
    fn serialized_defaults_parse_back() {
        let text = DashboardConfig::default().to_toml().expect("toml");
        assert_eq!(DashboardConfig::parse(&text).expect("parse"), DashboardConfig::default());
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = DashboardConfig::default().with_base_url_override(Some(" ".to_string()));
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);

        let config = config.with_base_url_override(Some("http://localhost:8080/api".to_string()));
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("taxi-dash-missing-config-test.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(load_config_from(&path).expect("load"), DashboardConfig::default());
    }
}
