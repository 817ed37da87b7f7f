//! Configuration module for tfconverter-options.
//!
//! Converter toggles can be kept in a file instead of being hard-coded at
//! the call site. Both YAML and HCL are accepted, and `${VAR}` / `$VAR`
//! references are expanded from the environment before parsing.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # tfconverter.yaml
//! converter:
//!   debug: true
//!   stop_on_hcl_error: ${TF_STOP_ON_HCL_ERROR}
//! ```
//!
//! ```hcl
//! # tfconverter.hcl
//! converter {
//!   debug             = true
//!   stop_on_hcl_error = false
//! }
//! ```

use crate::error::{Result, ResultExt};
use crate::options::{with_debug, with_stop_on_hcl_error, TerraformConverterOption};
use crate::settings::ConverterSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"\$\{([^}]+)\}|\$([A-Za-z_][A-Za-z0-9_]*)")
        .expect("env var pattern is valid")
});

/// Converter toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConverterSection {
    /// Keep debug output from the converter.
    pub debug: bool,

    /// Stop on the first HCL parse error.
    pub stop_on_hcl_error: bool,
}

/// Main configuration structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Converter options
    pub converter: ConverterSection,
}

/// File formats `Config::from_file` understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Hcl,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "hcl" => Some(Self::Hcl),
            _ => None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(content: &str) -> Result<Self> {
        tracing::debug!("Parsing configuration from YAML");
        let expanded = expand_env_vars(content);

        // An empty or comment-only document means "all defaults".
        let config: Option<Self> = serde_yaml::from_str(&expanded)
            .to_config_parse_error("invalid YAML configuration".to_string())?;
        let config = config.unwrap_or_default();

        tracing::debug!(
            debug = config.converter.debug,
            stop_on_hcl_error = config.converter.stop_on_hcl_error,
            "Configuration loaded successfully"
        );
        Ok(config)
    }

    /// Load configuration from an HCL string.
    ///
    /// # Errors
    ///
    /// Returns an error if the HCL is invalid.
    pub fn from_hcl(content: &str) -> Result<Self> {
        tracing::debug!("Parsing configuration from HCL");
        let expanded = expand_env_vars(content);

        let config: Self = hcl::from_str(&expanded)
            .to_config_parse_error("invalid HCL configuration".to_string())?;

        tracing::debug!(
            debug = config.converter.debug,
            stop_on_hcl_error = config.converter.stop_on_hcl_error,
            "Configuration loaded successfully"
        );
        Ok(config)
    }

    /// Load configuration from a `.yaml`, `.yml` or `.hcl` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not recognised, the file does
    /// not exist or cannot be read, or its contents are invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading configuration file");

        let Some(format) = ConfigFormat::from_path(path) else {
            return Err(crate::err!(UnsupportedConfigFormat {
                path: path.to_path_buf(),
            }));
        };

        if !path.exists() {
            return Err(crate::err!(FileNotFound {
                path: path.to_path_buf(),
            }));
        }

        let content = std::fs::read_to_string(path).with_path(path)?;
        match format {
            ConfigFormat::Yaml => Self::from_yaml(&content),
            ConfigFormat::Hcl => Self::from_hcl(&content),
        }
    }

    /// The options this configuration asks for, debug first.
    #[must_use]
    pub fn options(&self) -> Vec<TerraformConverterOption> {
        let mut options = Vec::with_capacity(2);
        if self.converter.debug {
            options.push(with_debug());
        }
        if self.converter.stop_on_hcl_error {
            options.push(with_stop_on_hcl_error());
        }
        options
    }

    /// Settings with this configuration's options applied.
    #[must_use]
    pub fn settings(&self) -> ConverterSettings {
        ConverterSettings::new(self.options())
    }

    /// Generate an example YAML configuration.
    #[must_use]
    pub fn example_yaml() -> String {
        r"# tfconverter configuration

converter:
  # Keep debug output from the converter (discarded when false)
  debug: false

  # Stop on the first malformed HCL file instead of skipping it
  stop_on_hcl_error: false
"
        .to_string()
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax. Unset variables are left as-is.
fn expand_env_vars(content: &str) -> String {
    ENV_VAR
        .replace_all(content, |caps: &regex::Captures<'_>| {
            let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            std::env::var(name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}
