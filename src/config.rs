//! User configuration — gesture tuning and demo settings, with persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/paint-select/config.toml` (default
//! `~/.config/paint-select/config.toml`).

use std::path::PathBuf;
use std::time::Duration;

use crate::core::{ActivationBand, AutoScrollConfig, SelectorConfig};

/// Width of the `[x] ` column at the left of every row.
pub const CHECKBOX_COLUMN_WIDTH: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Rows generated for the demo list.
    pub row_count: usize,
    /// Edge zone as a fraction of the list height.
    pub edge_margin_fraction: f64,
    /// Minimum edge zone, in rows.
    pub min_edge_margin: f64,
    pub tick_interval_ms: u64,
    /// Rows scrolled per auto-scroll tick.
    pub scroll_step: f64,
    /// Rows scrolled per mouse wheel notch.
    pub wheel_lines: usize,
    pub skip_unchanged_rows: bool,
    /// Only start strokes on the checkbox column, leaving the rest of the
    /// row to wheel scrolling.
    pub checkbox_column_only: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            row_count: 200,
            edge_margin_fraction: 0.1,
            min_edge_margin: 1.0,
            tick_interval_ms: 50,
            scroll_step: 1.0,
            wheel_lines: 3,
            skip_unchanged_rows: false,
            checkbox_column_only: false,
        }
    }
}

impl AppConfig {
    /// Tuning handed to the gesture state machine.
    pub fn selector_config(&self) -> SelectorConfig {
        SelectorConfig {
            auto_scroll: AutoScrollConfig {
                edge_margin_fraction: self.edge_margin_fraction,
                min_edge_margin: self.min_edge_margin,
                tick_interval: Duration::from_millis(self.tick_interval_ms),
                scroll_step: self.scroll_step,
            },
            skip_unchanged_rows: self.skip_unchanged_rows,
            activation_band: self.checkbox_column_only.then_some(ActivationBand {
                min_x: 0.0,
                max_x: CHECKBOX_COLUMN_WIDTH,
            }),
        }
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "using default config");
                Self::default()
            }
        }
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    /// Parse the key-value format.  Unknown keys and malformed values are
    /// ignored; numbers are clamped into a usable range.
    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().trim_matches('"');

            match key.trim() {
                "row_count" => {
                    if let Ok(v) = value.parse::<usize>() {
                        config.row_count = v.clamp(1, 100_000);
                    }
                }
                "edge_margin_fraction" => {
                    if let Ok(v) = value.parse::<f64>() {
                        config.edge_margin_fraction = v.clamp(0.0, 0.5);
                    }
                }
                "min_edge_margin" => {
                    if let Ok(v) = value.parse::<f64>() {
                        config.min_edge_margin = v.clamp(0.0, 20.0);
                    }
                }
                "tick_interval_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        // Keep this bounded for predictable UX.
                        config.tick_interval_ms = v.clamp(10, 1000);
                    }
                }
                "scroll_step" => {
                    if let Ok(v) = value.parse::<f64>() {
                        config.scroll_step = v.clamp(0.1, 50.0);
                    }
                }
                "wheel_lines" => {
                    if let Ok(v) = value.parse::<usize>() {
                        config.wheel_lines = v.clamp(1, 20);
                    }
                }
                "skip_unchanged_rows" => config.skip_unchanged_rows = value == "true",
                "checkbox_column_only" => config.checkbox_column_only = value == "true",
                other => tracing::debug!(key = other, "unknown config key"),
            }
        }

        config
    }

    fn serialise(&self) -> String {
        [
            "# paint-select configuration".to_string(),
            String::new(),
            "# Demo list".to_string(),
            format!("row_count = {}", self.row_count),
            format!("wheel_lines = {}", self.wheel_lines),
            String::new(),
            "# Gesture".to_string(),
            format!("skip_unchanged_rows = {}", self.skip_unchanged_rows),
            format!("checkbox_column_only = {}", self.checkbox_column_only),
            String::new(),
            "# Edge auto-scroll".to_string(),
            format!("edge_margin_fraction = {}", self.edge_margin_fraction),
            format!("min_edge_margin = {}", self.min_edge_margin),
            format!("tick_interval_ms = {}", self.tick_interval_ms),
            format!("scroll_step = {}", self.scroll_step),
            String::new(),
        ]
        .join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/paint-select/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("paint-select").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_clamps_and_ignores_unknown_keys() {
        let config = AppConfig::parse(
            "# comment\n[section]\nrow_count = 0\ntick_interval_ms = 5\nscroll_step = \"2.5\"\nbogus = 1\nskip_unchanged_rows = true\nnot a pair\n",
        );
        assert_eq!(config.row_count, 1);
        assert_eq!(config.tick_interval_ms, 10);
        assert_eq!(config.scroll_step, 2.5);
        assert!(config.skip_unchanged_rows);
        assert!(!config.checkbox_column_only);
    }

    #[test]
    fn serialised_config_parses_back() {
        let config = AppConfig {
            row_count: 42,
            edge_margin_fraction: 0.2,
            min_edge_margin: 2.0,
            tick_interval_ms: 80,
            scroll_step: 3.0,
            wheel_lines: 5,
            skip_unchanged_rows: true,
            checkbox_column_only: true,
        };
        assert_eq!(AppConfig::parse(&config.serialise()), config);
    }

    #[test]
    fn checkbox_column_sets_activation_band() {
        let mut config = AppConfig::default();
        assert_eq!(config.selector_config().activation_band, None);
        config.checkbox_column_only = true;
        let band = config.selector_config().activation_band.unwrap();
        assert_eq!(band.max_x, CHECKBOX_COLUMN_WIDTH);
        assert_eq!(
            config.selector_config().auto_scroll.tick_interval,
            Duration::from_millis(50)
        );
    }
}
