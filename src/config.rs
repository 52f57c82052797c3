//! TOML configuration file
//!
//! ```toml
//! [style]
//! tone = "linear"
//!
//! [resolver]
//! on_unknown_archetype = "fallback"
//!
//! [render]
//! standalone = false
//! title = "Ops"
//!
//! [limits]
//! max_rows = 100
//! ```
//!
//! Every table and key is optional. Axes set under `[style]` replace the
//! document's own choice for that axis.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::coerce::CoercionLimits;
use crate::renderer::HtmlConfig;
use crate::tokens::{RawStyleSpec, UnknownArchetypePolicy};
use crate::RenderConfig;

/// Errors that can occur when loading or parsing a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverSection {
    pub on_unknown_archetype: UnknownArchetypePolicy,
}

/// Parsed contents of a config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub style: RawStyleSpec,
    pub resolver: ResolverSection,
    pub render: HtmlConfig,
    pub limits: CoercionLimits,
}

impl ConfigFile {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load config from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply this file on top of `config`; the debug flag is left alone
    pub fn apply_to(&self, config: RenderConfig) -> RenderConfig {
        let overrides = config.style_overrides.merged_with(&self.style);
        config
            .with_html(self.render.clone())
            .with_policy(self.resolver.on_unknown_archetype)
            .with_style_overrides(overrides)
            .with_limits(self.limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Axis;
    use std::io::Write;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(ConfigFile::from_str("").unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_parse_all_tables() {
        let config = ConfigFile::from_str(
            r#"
            [style]
            tone = "linear"
            color = "teal"

            [resolver]
            on_unknown_archetype = "fallback"

            [render]
            standalone = false
            title = "Ops"

            [limits]
            max_rows = 100
            "#,
        )
        .unwrap();

        assert_eq!(config.style.get(Axis::Tone), Some("linear"));
        assert_eq!(config.style.get(Axis::Layout), None);
        assert_eq!(config.resolver.on_unknown_archetype, UnknownArchetypePolicy::Fallback);
        assert!(!config.render.standalone);
        assert!(config.render.pretty_print);
        assert_eq!(config.render.title, "Ops");
        assert_eq!(config.limits.max_rows, 100);
        assert_eq!(config.limits.max_cells, 64);
    }

    #[test]
    fn test_unknown_policy_is_a_parse_error() {
        let err = ConfigFile::from_str("[resolver]\non_unknown_archetype = \"guess\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_apply_to_keeps_debug_and_merges_style() {
        let file = ConfigFile::from_str("[style]\ncolor = \"rose\"\n").unwrap();
        let base = RenderConfig::new()
            .with_debug(true)
            .with_style_overrides(RawStyleSpec::default().with(Axis::Tone, "bold"));
        let config = file.apply_to(base);

        assert!(config.debug);
        assert_eq!(config.style_overrides.get(Axis::Tone), Some("bold"));
        assert_eq!(config.style_overrides.get(Axis::Color), Some("rose"));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("agent-dashboard-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[render]\ntailwind_cdn = false").unwrap();
        drop(file);

        let config = ConfigFile::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(!config.render.tailwind_cdn);

        assert!(matches!(
            ConfigFile::from_file(&path),
            Err(ConfigError::IoError(_))
        ));
    }
}
