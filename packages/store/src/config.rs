//! # Application configuration — `notes.toml`
//!
//! Tunables for timers, layout and sharing. Every section and field has a
//! default, so a missing or empty file is equivalent to
//! [`AppConfig::default`].
//!
//! ```toml
//! [editor]
//! autosave_delay_ms = 2000   # debounce after the last edit
//!
//! [layout]
//! narrow_breakpoint_px = 1024
//! help_panel_ms = 3000       # how long Ctrl/Cmd+K keeps the help panel up
//!
//! [share]
//! origin = "https://notes.example"   # optional; defaults to the page origin
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selection::NARROW_BREAKPOINT_PX;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_autosave_delay")]
    pub autosave_delay_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_breakpoint")]
    pub narrow_breakpoint_px: u32,
    #[serde(default = "default_help_panel")]
    pub help_panel_ms: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Origin used in share links. `None` means the page's own origin.
    #[serde(default)]
    pub origin: Option<String>,
}

fn default_autosave_delay() -> u64 {
    2000
}

fn default_breakpoint() -> u32 {
    NARROW_BREAKPOINT_PX
}

fn default_help_panel() -> u64 {
    3000
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave_delay_ms: default_autosave_delay(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: default_breakpoint(),
            help_panel_ms: default_help_panel(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "notes.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read a config file; a missing file yields the defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(s) => Self::from_toml(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.editor.autosave_delay_ms)
    }

    pub fn help_panel_duration(&self) -> Duration {
        Duration::from_millis(self.layout.help_panel_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.autosave_delay(), Duration::from_millis(2000));
        assert_eq!(config.layout.narrow_breakpoint_px, 1024);
        assert_eq!(config.help_panel_duration(), Duration::from_secs(3));
        assert_eq!(config.share.origin, None);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [editor]
            autosave_delay_ms = 500

            [share]
            origin = "https://notes.example"
            "#,
        )
        .unwrap();
        assert_eq!(config.editor.autosave_delay_ms, 500);
        assert_eq!(config.layout.help_panel_ms, 3000);
        assert_eq!(config.share.origin.as_deref(), Some("https://notes.example"));
    }

    #[test]
    fn roundtrip() {
        let mut config = AppConfig::default();
        config.layout.narrow_breakpoint_px = 768;
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(matches!(
            AppConfig::from_toml("[editor]\nautosave_delay_ms = \"soon\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_default() {
        let path = std::path::Path::new("/definitely/not/here/notes.toml");
        assert_eq!(AppConfig::load(path).unwrap(), AppConfig::default());
    }
}
