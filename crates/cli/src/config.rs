//! Filter configuration from a JSON file and command-line flags.
//!
//! The file holds two optional pattern lists:
//!
//! ```json
//! { "include": ["web-*", "db-*"], "exclude": ["*-canary"] }
//! ```

use anyhow::{Context, Result, anyhow};
use contracts::Serializable;
use filters::FilterChain;
use filters::filters::{GlobExclude, GlobInclude};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Keep only lines matching one of these patterns
    #[serde(default)]
    pub include: Vec<String>,

    /// Drop lines matching any of these patterns
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Serializable for FilterConfig {}

impl FilterConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("Config file {} is not valid JSON", path.display()))?;

        let serde_json::Value::Object(data) = value else {
            return Err(anyhow!(
                "Config file {} must contain a JSON object",
                path.display()
            ));
        };

        let config = Self::from_dict(data).context("Invalid filter configuration")?;
        tracing::debug!(
            "Loaded {} include and {} exclude patterns from {}",
            config.include.len(),
            config.exclude.len(),
            path.display()
        );
        Ok(config)
    }

    /// Append patterns given on the command line after the file's patterns.
    pub fn extend(&mut self, include: Vec<String>, exclude: Vec<String>) {
        self.include.extend(include);
        self.exclude.extend(exclude);
    }

    /// Build the chain: one include stage and one exclude stage, each only
    /// if it has patterns.
    pub fn build_chain(&self) -> filters::Result<FilterChain<String>> {
        let mut chain = FilterChain::new();
        if !self.include.is_empty() {
            chain = chain.include(GlobInclude::new(&self.include)?);
        }
        if !self.exclude.is_empty() {
            chain = chain.exclude(GlobExclude::new(&self.exclude)?);
        }
        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config() {
        let file = config_file(r#"{ "include": ["web-*"], "exclude": ["*-canary"] }"#);
        let config = FilterConfig::load(file.path()).unwrap();

        assert_eq!(config.include, lines(&["web-*"]));
        assert_eq!(config.exclude, lines(&["*-canary"]));
    }

    #[test]
    fn test_load_partial_config() {
        let file = config_file(r#"{ "exclude": ["*.tmp"] }"#);
        let config = FilterConfig::load(file.path()).unwrap();

        assert!(config.include.is_empty());
        assert_eq!(config.exclude, lines(&["*.tmp"]));
    }

    #[test]
    fn test_load_rejects_non_object() {
        let file = config_file(r#"["web-*"]"#);
        let err = FilterConfig::load(file.path()).unwrap_err();

        assert!(err.to_string().contains("must contain a JSON object"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = FilterConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_flags_extend_config() {
        let mut config = FilterConfig {
            include: lines(&["web-*"]),
            exclude: Vec::new(),
        };
        config.extend(lines(&["db-*"]), lines(&["*-canary"]));

        let chain = config.build_chain().unwrap();
        assert_eq!(chain.stage_names(), vec!["GlobInclude", "GlobExclude"]);

        let kept = chain.apply(lines(&["web-01", "db-01", "web-canary", "cache-01"]));
        assert_eq!(kept, lines(&["web-01", "db-01"]));
    }

    #[test]
    fn test_empty_config_keeps_everything() {
        let chain = FilterConfig::default().build_chain().unwrap();

        assert!(chain.is_empty());
        assert_eq!(chain.apply(lines(&["a", "b"])), lines(&["a", "b"]));
    }

    #[test]
    fn test_invalid_pattern() {
        let config = FilterConfig {
            include: Vec::new(),
            exclude: lines(&["[oops"]),
        };
        assert!(config.build_chain().is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let config = FilterConfig {
            include: lines(&["a*"]),
            exclude: lines(&["*z"]),
        };
        let data = config.as_dict().unwrap();
        assert_eq!(FilterConfig::from_dict(data).unwrap(), config);
    }
}
