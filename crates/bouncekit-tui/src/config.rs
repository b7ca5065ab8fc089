use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use bouncekit_core::OptionsPatch;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub page: PageConfig,
    /// Overrides handed to the bouncer, merged over its own defaults.
    #[serde(default)]
    pub bounce: OptionsPatch,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            page: PageConfig::default(),
            bounce: OptionsPatch::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Pixels scrolled per key press or wheel step
    #[serde(default = "default_scroll_step")]
    pub scroll_step: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            scroll_step: default_scroll_step(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Simulated viewport height in document pixels
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,
    /// Sections stacked top to bottom
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionConfig>,
    /// Selectors the bouncer toggles, e.g. `"#header"`
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            viewport_height: default_viewport_height(),
            sections: default_sections(),
            targets: default_targets(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    pub name: String,
    pub height: f64,
}

fn default_tick_rate() -> u64 {
    100
}

fn default_scroll_step() -> f64 {
    60.0
}

fn default_viewport_height() -> f64 {
    800.0
}

fn default_sections() -> Vec<SectionConfig> {
    [
        ("header", 160.0),
        ("hero", 900.0),
        ("features", 700.0),
        ("gallery", 1100.0),
        ("pricing", 600.0),
        ("footer", 440.0),
    ]
    .into_iter()
    .map(|(name, height)| SectionConfig {
        name: name.to_string(),
        height,
    })
    .collect()
}

fn default_targets() -> Vec<String> {
    vec!["#header".to_string()]
}

impl DemoConfig {
    /// Load from `path`, or the default location, or fall back to defaults
    /// when no file exists.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// `~/.config/bouncekit/config.toml` on all platforms.
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("bouncekit")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.page.viewport_height, 800.0);
        assert_eq!(config.page.targets, vec!["#header".to_string()]);
        assert!(config.bounce.bounce_class.is_none());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: DemoConfig = toml::from_str(
            r#"
            [ui]
            scroll_step = 90.0

            [bounce]
            bounce_class = "sticky"

            [bounce.limits]
            top = 700.0
            bottom = 0.0
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.scroll_step, 90.0);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.bounce.bounce_class.as_deref(), Some("sticky"));

        let limits = config.bounce.limits.unwrap();
        assert_eq!(limits.top, Some(700.0));
        assert_eq!(limits.top_reverse, None);
        assert_eq!(limits.bottom, Some(0.0));
    }
}
