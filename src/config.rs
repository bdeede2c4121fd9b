//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treenote/treenote.toml`
//! 3. Local config: `<dir>/.treenote.toml`
//! 4. Environment variables: `TREENOTE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::GlyphStyle;

/// Local config file name, looked up in the working (or `-C`) directory.
pub const LOCAL_CONFIG_FILE: &str = ".treenote.toml";

/// Unified configuration for treenote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Connector glyphs for diagrams (default: box)
    pub glyphs: GlyphStyle,
    /// Lines starting with this prefix are skipped in file/stdin input (default: "#")
    pub comment_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            glyphs: GlyphStyle::default(),
            comment_prefix: "#".into(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub glyphs: Option<GlyphStyle>,
    pub comment_prefix: Option<String>,
}

/// Get the XDG config directory for treenote.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treenote").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treenote.toml"))
}

/// Get the path to the local config file in `dir`.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(LOCAL_CONFIG_FILE)
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            glyphs: overlay.glyphs.unwrap_or(self.glyphs),
            comment_prefix: overlay
                .comment_prefix
                .clone()
                .unwrap_or_else(|| self.comment_prefix.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.treenote.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply TREENOTE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("TREENOTE"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("glyphs") {
            settings.glyphs = <GlyphStyle as clap::ValueEnum>::from_str(&val, false)
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_string("comment_prefix") {
            settings.comment_prefix = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r##"# treenote configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/treenote/treenote.toml
#   Local:  ./.treenote.toml (or <dir>/.treenote.toml with -C <dir>)
#   Env:    TREENOTE_* environment variables

# Connector glyphs: "box", "ascii" or "rounded"
# glyphs = "box"

# Lines starting with this prefix are ignored in file and stdin input
# comment_prefix = "#"
"##
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_settings_when_created_then_uses_box_glyphs() {
        let settings = Settings::default();
        assert_eq!(settings.glyphs, GlyphStyle::Box);
        assert_eq!(settings.comment_prefix, "#");
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let base = Settings::default();
        let overlay = RawSettings {
            glyphs: Some(GlyphStyle::Ascii),
            comment_prefix: None,
        };

        let result = base.merge_with(&overlay);

        assert_eq!(result.glyphs, GlyphStyle::Ascii);
        assert_eq!(result.comment_prefix, "#");
    }

    #[test]
    fn given_settings_when_serialized_then_toml_round_trips() {
        let settings = Settings {
            glyphs: GlyphStyle::Rounded,
            comment_prefix: "//".to_string(),
        };
        let text = settings.to_toml().unwrap();
        assert!(text.contains("glyphs = \"rounded\""));
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn given_template_when_parsed_then_yields_defaults() {
        let template = Settings::template();
        assert!(template.ends_with("# comment_prefix = \"#\"\n"));

        let raw: RawSettings = toml::from_str(&template).unwrap();
        assert_eq!(Settings::default().merge_with(&raw), Settings::default());
    }
}
