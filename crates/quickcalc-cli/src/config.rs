//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! The calculator keeps no persisted state, so there is no config file:
//! `load` returns the built-in defaults, optionally adjusted by CLI flags
//! at the call-site.

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Decimal places in printed areas.
    pub area_decimals: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                no_color: false,
                area_decimals: 2,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_area_decimals_is_two() {
        assert_eq!(AppConfig::default().output.area_decimals, 2);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_returns_defaults() {
        let cfg = AppConfig::load().unwrap();
        assert_eq!(cfg.output.area_decimals, 2);
    }
}
