use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::ripple::{self, RippleField, RippleStyle};

// --- Ripple Style Selection ---
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleConfig {
    Stroke,
    Fill,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig::Stroke
    }
}

// --- Application-wide Configuration ---
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ripple: RippleConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load the configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse '{}'", path.display()))
    }

    /// Builds the ripple widget from the TOML-facing settings.
    pub fn ripple_field(&self) -> RippleField {
        let r = &self.ripple;
        let mut field = RippleField::new(
            r.count,
            r.delay_ms as f64 / 1000.0,
            r.duration_ms as f64 / 1000.0,
        );
        match parse_argb(&r.color) {
            Some(color) => field.set_ripple_color(color),
            None => warn!(color = %r.color, "invalid ripple color, keeping default"),
        }
        field.set_min_stroke_width(r.min_stroke_width);
        field.set_max_stroke_width(r.max_stroke_width);
        field.set_min_radius(r.min_radius);
        field.set_max_radius(r.max_radius);
        field.set_style(match r.style {
            StyleConfig::Stroke => RippleStyle::Stroke,
            StyleConfig::Fill => RippleStyle::Fill,
        });
        field
    }
}

// --- Ripple-related Parameters (for config.toml) ---
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RippleConfig {
    /// Number of concurrently animating rings.
    pub count: usize,
    /// Delay between one ring's start and the next, in milliseconds.
    pub delay_ms: u64,
    /// Loop period of every ring, in milliseconds.
    pub duration_ms: u64,
    /// Ripple color as packed AARRGGBB hex, e.g. "33000000".
    pub color: String,
    pub min_stroke_width: f32,
    pub max_stroke_width: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub style: StyleConfig,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            count: ripple::DEFAULT_RIPPLE_COUNT,
            delay_ms: ripple::DEFAULT_DELAY_MS,
            duration_ms: ripple::DEFAULT_DURATION_MS,
            color: format!("{:08X}", ripple::DEFAULT_RIPPLE_COLOR),
            min_stroke_width: ripple::DEFAULT_STROKE_WIDTH_MIN,
            max_stroke_width: ripple::DEFAULT_STROKE_WIDTH_MAX,
            min_radius: ripple::DEFAULT_RADIUS_MIN,
            max_radius: ripple::DEFAULT_RADIUS_MAX,
            style: StyleConfig::default(),
        }
    }
}

// --- UI-related Parameters ---
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct UiConfig {
    pub show_console: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { show_console: true }
    }
}

/// Parse a packed AARRGGBB hex color, with or without a `#`/`0x` prefix.
pub fn parse_argb(hex: &str) -> Option<u32> {
    let hex = hex.trim().trim_start_matches('#').trim_start_matches("0x");
    if hex.len() != 8 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_widget_constants() {
        let config = Config::default();
        assert_eq!(config.ripple.count, 8);
        assert_eq!(config.ripple.delay_ms, 1000);
        assert_eq!(config.ripple.duration_ms, 8000);
        assert_eq!(config.ripple.color, "33000000");
        assert_eq!(config.ripple.min_stroke_width, 20.0);
        assert_eq!(config.ripple.max_stroke_width, 80.0);
        assert_eq!(config.ripple.style, StyleConfig::Stroke);
        assert!(config.ui.show_console);
    }

    #[test]
    fn test_partial_table_falls_back_to_defaults() {
        let config: Config = toml::from_str("[ripple]\ncount = 3\nstyle = \"fill\"\n").unwrap();
        assert_eq!(config.ripple.count, 3);
        assert_eq!(config.ripple.style, StyleConfig::Fill);
        assert_eq!(config.ripple.duration_ms, 8000);
        assert!(config.ui.show_console);
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ripple.count, 8);
    }

    #[test]
    fn test_ripple_field_conversion() {
        let config: Config = toml::from_str("[ripple]\nstyle = \"fill\"\n").unwrap();
        let field = config.ripple_field();
        assert_eq!(field.style(), RippleStyle::Fill);
        assert!(!field.is_running());
    }

    #[test]
    fn test_parse_argb() {
        assert_eq!(parse_argb("33000000"), Some(0x3300_0000));
        assert_eq!(parse_argb("#8000C8FF"), Some(0x8000_C8FF));
        assert_eq!(parse_argb("0x33000000"), Some(0x3300_0000));
        assert_eq!(parse_argb("fff"), None);
        assert_eq!(parse_argb("zzzzzzzz"), None);
        assert_eq!(parse_argb(""), None);
    }
}
