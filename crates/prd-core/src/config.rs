use crate::document::Owner;
use crate::error::Result;
use crate::templates::Template;
use crate::types::ExportFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".prd/config.yaml";

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Values used to pre-fill `create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_format")]
    pub format: String,
}

fn default_export_format() -> String {
    ExportFormat::Markdown.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: default_export_format(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

fn default_wrap_width() -> usize {
    60
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            wrap_width: default_wrap_width(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            defaults: DefaultsConfig::default(),
            export: ExportConfig::default(),
            view: ViewConfig::default(),
        }
    }
}

impl Config {
    /// Read `.prd/config.yaml` under `root`. A missing file yields defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let path = config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Write `.prd/config.yaml`, creating `.prd/` if needed.
    pub fn save(&self, root: &Path) -> Result<()> {
        let path = config_path(root);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    /// Configured default template, if it names a known one.
    pub fn default_template(&self) -> Option<Template> {
        self.defaults.template.as_deref()?.parse().ok()
    }

    /// Configured export format. An unknown name is `UnsupportedFormat`.
    pub fn export_format(&self) -> Result<ExportFormat> {
        self.export.format.parse()
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.version != 1 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("unsupported config version {}", self.version),
            });
        }

        if let Some(name) = &self.defaults.template {
            if name.parse::<Template>().is_err() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("unknown template '{name}' in defaults.template"),
                });
            }
        }

        if let Some(owner) = &self.defaults.owner {
            if !owner.email.is_empty() && !owner.email.contains('@') {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "defaults.owner.email '{}' does not look like an address",
                        owner.email
                    ),
                });
            }
        }

        if self.export.format.parse::<ExportFormat>().is_err() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!("unknown export format '{}'", self.export.format),
            });
        }

        match self.view.wrap_width {
            0 => warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "view.wrap_width must be greater than zero".to_string(),
            }),
            w if w < 20 => warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("view.wrap_width={w} (<20 is hard to read)"),
            }),
            _ => {}
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrdError;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.view.wrap_width, 60);
        assert_eq!(cfg.export_format().unwrap(), ExportFormat::Markdown);
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::default();
        cfg.defaults.owner = Some(Owner::new("Jane Doe", "jane@example.com"));
        cfg.defaults.template = Some("feature".to_string());
        cfg.save(dir.path()).unwrap();

        assert!(config_path(dir.path()).exists());
        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded, cfg);
        assert_eq!(loaded.default_template(), Some(Template::Feature));
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let yaml = "export:\n  format: html\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.export_format().unwrap(), ExportFormat::Html);
        assert_eq!(cfg.view.wrap_width, 60);
        assert!(cfg.defaults.owner.is_none());
    }

    #[test]
    fn unknown_export_format_is_an_error() {
        let mut cfg = Config::default();
        cfg.export.format = "pdf".to_string();
        let err = cfg.export_format().unwrap_err();
        assert!(matches!(err, PrdError::UnsupportedFormat(ref f) if f == "pdf"));
    }

    #[test]
    fn unset_defaults_not_serialized() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(!yaml.contains("owner"));
        assert!(!yaml.contains("template"));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".prd")).unwrap();
        std::fs::write(config_path(dir.path()), "view: [unclosed").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn validate_default_config_no_warnings() {
        assert!(Config::default().validate().is_empty());
    }

    #[test]
    fn validate_flags_unknown_names() {
        let mut cfg = Config::default();
        cfg.defaults.template = Some("roadmap".to_string());
        cfg.export.format = "pdf".to_string();
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.level == WarnLevel::Error));
        assert!(warnings.iter().any(|w| w.message.contains("'roadmap'")));
        assert!(warnings.iter().any(|w| w.message.contains("'pdf'")));
    }

    #[test]
    fn validate_wrap_width() {
        let mut cfg = Config::default();
        cfg.view.wrap_width = 0;
        assert_eq!(cfg.validate()[0].level, WarnLevel::Error);
        cfg.view.wrap_width = 10;
        assert_eq!(cfg.validate()[0].level, WarnLevel::Warning);
    }

    #[test]
    fn validate_owner_email_shape() {
        let mut cfg = Config::default();
        cfg.defaults.owner = Some(Owner::new("Jane", "jane.example.com"));
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("defaults.owner.email"));
    }
}
