//! Page configuration: timings, counter thresholds and colors.

use std::path::{Path, PathBuf};
use std::time::Duration;

use pagedom::Color;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Tunables for the page widgets.
///
/// Every field has a default matching the stock page, so a config file only
/// needs the keys it changes:
///
/// ```json
/// { "form_reset_ms": 5000, "counter_alert_color": "#c53030" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// How long the click button stays pressed.
    pub press_revert_ms: u64,

    /// Delay before a submitted form is shown and cleared again.
    pub form_reset_ms: u64,

    /// Default lifetime of a flashed message.
    pub flash_ms: u64,

    /// Length of a one-shot element animation.
    pub animation_ms: u64,

    /// Counter value at which the button turns the warn color.
    pub counter_warn_at: u32,

    /// Counter value at which the button turns the alert color.
    pub counter_alert_at: u32,

    #[serde(deserialize_with = "color_from_hex")]
    pub counter_base_color: Color,

    #[serde(deserialize_with = "color_from_hex")]
    pub counter_warn_color: Color,

    #[serde(deserialize_with = "color_from_hex")]
    pub counter_alert_color: Color,

    /// Text color of field error messages.
    #[serde(deserialize_with = "color_from_hex")]
    pub error_color: Color,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            press_revert_ms: 150,
            form_reset_ms: 3000,
            flash_ms: 3000,
            animation_ms: 500,
            counter_warn_at: 5,
            counter_alert_at: 10,
            counter_base_color: Color::rgb(0x66, 0x7e, 0xea),
            counter_warn_color: Color::rgb(0xdd, 0x6b, 0x20),
            counter_alert_color: Color::rgb(0xe5, 0x3e, 0x3e),
            error_color: Color::rgb(0xe5, 0x3e, 0x3e),
        }
    }
}

impl PageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config and check it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reject combinations the widgets cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.counter_warn_at > self.counter_alert_at {
            return Err(ConfigError::InvalidThresholds {
                warn: self.counter_warn_at,
                alert: self.counter_alert_at,
            });
        }
        Ok(())
    }

    /// Set the click-button press duration.
    pub fn press_revert(mut self, delay: Duration) -> Self {
        self.press_revert_ms = millis(delay);
        self
    }

    /// Set the delay before a submitted form resets.
    pub fn form_reset(mut self, delay: Duration) -> Self {
        self.form_reset_ms = millis(delay);
        self
    }

    /// Set the counter color thresholds.
    pub fn counter_thresholds(mut self, warn_at: u32, alert_at: u32) -> Self {
        self.counter_warn_at = warn_at;
        self.counter_alert_at = alert_at;
        self
    }

    pub fn press_revert_delay(&self) -> Duration {
        Duration::from_millis(self.press_revert_ms)
    }

    pub fn form_reset_delay(&self) -> Duration {
        Duration::from_millis(self.form_reset_ms)
    }

    pub fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.flash_ms)
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn color_from_hex<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let hex = String::deserialize(deserializer)?;
    Color::hex(&hex).map_err(serde::de::Error::custom)
}

/// Errors that can occur while loading a [`PageConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("counter warn threshold ({warn}) is above the alert threshold ({alert})")]
    InvalidThresholds { warn: u32, alert: u32 },
}
