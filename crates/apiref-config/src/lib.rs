//! Configuration management for apiref.
//!
//! Parses `apiref.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [presentation]
//! compact_operation_header = true
//! hide_operation_summary = false
//!
//! [page]
//! title = "Pet Store API"
//! css_path = "assets/api.css"
//!
//! [input]
//! content = "build/content.json"
//! menu = "build/menu.json"
//!
//! [output]
//! path = "site/index.html"
//! ```

use std::path::{Path, PathBuf};

use apiref_renderer::PresentationConfig;
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content tree path.
    pub content_path: Option<PathBuf>,
    /// Override menu tree path.
    pub menu_path: Option<PathBuf>,
    /// Override output file path.
    pub output_path: Option<PathBuf>,
    /// Override compact operation header flag.
    pub compact_operation_header: Option<bool>,
    /// Override hide operation summary flag.
    pub hide_operation_summary: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "apiref.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Presentation settings shared by the whole render pass.
    pub presentation: PresentationConfig,
    /// Page template configuration.
    pub page: PageConfig,
    /// Input paths (relative strings from TOML).
    input: InputConfigRaw,
    /// Output path (relative string from TOML).
    output: OutputConfigRaw,

    /// Resolved input paths (set after loading).
    #[serde(skip)]
    pub input_resolved: InputConfig,
    /// Resolved output path (set after loading).
    #[serde(skip)]
    pub output_path: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Page template configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Document title, also shown above the navigation.
    pub title: String,
    /// Stylesheet to link from the page.
    pub css_path: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "API Reference".to_owned(),
            css_path: None,
        }
    }
}

/// Raw input configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct InputConfigRaw {
    content: Option<String>,
    menu: Option<String>,
}

/// Resolved input paths.
#[derive(Debug, Default)]
pub struct InputConfig {
    /// JSON content tree.
    pub content: PathBuf,
    /// JSON menu tree.
    pub menu: PathBuf,
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    path: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `apiref.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(content) = &settings.content_path {
            self.input_resolved.content.clone_from(content);
        }
        if let Some(menu) = &settings.menu_path {
            self.input_resolved.menu.clone_from(menu);
        }
        if let Some(output) = &settings.output_path {
            self.output_path.clone_from(output);
        }
        if let Some(compact) = settings.compact_operation_header {
            self.presentation.compact_operation_header = compact;
        }
        if let Some(hide) = settings.hide_operation_summary {
            self.presentation.hide_operation_summary = hide;
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.page.title, "page.title")?;
        if let Some(css_path) = &self.page.css_path {
            require_non_empty(css_path, "page.css_path")?;
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output.path cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            presentation: PresentationConfig::default(),
            page: PageConfig::default(),
            input: InputConfigRaw::default(),
            output: OutputConfigRaw::default(),
            input_resolved: InputConfig {
                content: base.join("content.json"),
                menu: base.join("menu.json"),
            },
            output_path: base.join("build/index.html"),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.input_resolved = InputConfig {
            content: resolve(self.input.content.as_deref(), "content.json"),
            menu: resolve(self.input.menu.as_deref(), "menu.json"),
        };
        self.output_path = resolve(self.output.path.as_deref(), "build/index.html");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.presentation, PresentationConfig::default());
        assert_eq!(config.page.title, "API Reference");
        assert!(config.page.css_path.is_none());
        assert_eq!(
            config.input_resolved.content,
            PathBuf::from("/test/content.json")
        );
        assert_eq!(config.input_resolved.menu, PathBuf::from("/test/menu.json"));
        assert_eq!(config.output_path, PathBuf::from("/test/build/index.html"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.presentation.compact_operation_header);
        assert_eq!(config.page.title, "API Reference");
    }

    #[test]
    fn test_parse_presentation_config() {
        let toml = r"
[presentation]
compact_operation_header = true
";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.presentation,
            PresentationConfig {
                compact_operation_header: true,
                hide_operation_summary: false,
            }
        );
    }

    #[test]
    fn test_parse_page_config() {
        let toml = r#"
[page]
title = "Pet Store"
css_path = "assets/api.css"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.page.title, "Pet Store");
        assert_eq!(config.page.css_path.as_deref(), Some("assets/api.css"));
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[input]
content = "model/content.json"

[output]
path = "site/api.html"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.input_resolved.content,
            PathBuf::from("/project/model/content.json")
        );
        assert_eq!(
            config.input_resolved.menu,
            PathBuf::from("/project/menu.json")
        );
        assert_eq!(config.output_path, PathBuf::from("/project/site/api.html"));
    }

    #[test]
    fn test_validate_empty_title() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.page.title = "  ".to_owned();

        let err = config.validate().unwrap_err();

        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        assert!(err.to_string().contains("page.title"));
    }

    #[test]
    fn test_validate_empty_output_path() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.output_path = PathBuf::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_cli_settings_presentation() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            compact_operation_header: Some(true),
            hide_operation_summary: Some(true),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert!(config.presentation.compact_operation_header);
        assert!(config.presentation.hide_operation_summary);
    }

    #[test]
    fn test_apply_cli_settings_paths() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            content_path: Some(PathBuf::from("/data/content.json")),
            output_path: Some(PathBuf::from("/out/index.html")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.input_resolved.content,
            PathBuf::from("/data/content.json")
        );
        assert_eq!(config.input_resolved.menu, PathBuf::from("/test/menu.json")); // Unchanged
        assert_eq!(config.output_path, PathBuf::from("/out/index.html"));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.presentation, PresentationConfig::default());
        assert_eq!(config.output_path, PathBuf::from("/test/build/index.html"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[presentation]\nhide_operation_summary = true\n\n[output]\npath = \"out.html\"\n",
        )
        .unwrap();

        let overrides = CliSettings {
            compact_operation_header: Some(true),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&overrides)).unwrap();

        assert!(config.presentation.compact_operation_header);
        assert!(config.presentation.hide_operation_summary);
        assert_eq!(config.output_path, dir.path().join("out.html"));
        assert_eq!(config.input_resolved.content, dir.path().join("content.json"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[presentation\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
