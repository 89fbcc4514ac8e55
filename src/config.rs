use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::eeat::{AuthorSignal, EeatSignals, PublisherSignal};
use crate::error::{LdgenError, Result};

/// Global ldgen configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site origin, joined with relative page paths to build `@id`s
    #[serde(default)]
    pub base_url: Option<String>,

    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Publisher used when EEAT signals don't name one
    #[serde(default)]
    pub publisher: Option<PublisherSignal>,

    /// Author name used when EEAT signals don't name one
    #[serde(default)]
    pub default_author: Option<String>,
}

fn default_pretty() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            pretty: default_pretty(),
            publisher: None,
            default_author: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a file; a missing file gives the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Get the config file path
    ///
    /// Supports LDGEN_CONFIG environment variable override
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("LDGEN_CONFIG") {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", "ldgen")
            .ok_or_else(|| LdgenError::ConfigError("Could not determine config directory".into()))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve a page location to an absolute URL.
    ///
    /// Absolute URLs pass through; relative paths are joined onto `base_url`.
    pub fn page_url(&self, location: &str) -> Result<String> {
        match Url::parse(location) {
            Ok(url) => Ok(url.to_string()),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = self.base_url.as_deref().ok_or_else(|| {
                    LdgenError::ConfigError(format!(
                        "'{}' is a relative path but no base_url is configured",
                        location
                    ))
                })?;
                Ok(Url::parse(base)?.join(location)?.to_string())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Fill publisher and author gaps in `signals` from the configuration
    pub fn apply_defaults(&self, mut signals: EeatSignals) -> EeatSignals {
        if signals.publisher.is_none() {
            signals.publisher = self.publisher.clone();
        }
        if signals.author.is_none() {
            signals.author = self.default_author.as_deref().map(AuthorSignal::named);
        }
        signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.pretty);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
base_url = "https://example.com"
default_author = "Jane Smith"

[publisher]
name = "Example Media"
logo = "https://example.com/logo.png"
"#,
        )
        .unwrap();

        assert!(config.pretty);
        assert_eq!(config.base_url.as_deref(), Some("https://example.com"));
        let publisher = config.publisher.unwrap();
        assert_eq!(publisher.name, "Example Media");
        assert!(publisher.url.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("ldgen-test-no-such-config.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_page_url() {
        let config = Config {
            base_url: Some("https://example.com/".into()),
            ..Default::default()
        };
        assert_eq!(config.page_url("/blog/post").unwrap(), "https://example.com/blog/post");
        assert_eq!(config.page_url("https://other.test/x").unwrap(), "https://other.test/x");
        assert!(Config::default().page_url("/blog/post").is_err());
    }

    #[test]
    fn test_apply_defaults_keeps_explicit_signals() {
        let config = Config {
            default_author: Some("House Author".into()),
            publisher: Some(PublisherSignal { name: "Pub".into(), ..Default::default() }),
            ..Default::default()
        };

        let filled = config.apply_defaults(EeatSignals::default());
        assert_eq!(filled.author.unwrap().name, "House Author");
        assert_eq!(filled.publisher.unwrap().name, "Pub");

        let explicit = EeatSignals {
            author: Some(AuthorSignal::named("Guest")),
            ..Default::default()
        };
        assert_eq!(config.apply_defaults(explicit).author.unwrap().name, "Guest");
    }
}
