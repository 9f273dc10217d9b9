//! Join specs declared in configuration files.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::spec::JoinSpec;
use crate::config::{self, ConfigError, ConfigFormat};
use crate::text::Text;

/// A serializable description of a [`JoinSpec`] using plain strings.
///
/// Every field is optional; missing fields stay unset on the built spec.
/// Operators cannot be expressed in configuration and are always identity.
///
/// # Example
///
/// ```rust
/// use weft::JoinConfig;
///
/// let config = JoinConfig::from_yaml(
///     "separator: \", \"\nlast_separator: \", and \"\nlast_separator_if_serial: \" and \"\n",
/// )
/// .unwrap();
///
/// let spec = config.to_spec();
/// assert_eq!(spec.join(["A", "B", "C"]).plain_text(), "A, B, and C");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JoinConfig {
    pub separator: Option<String>,
    pub last_separator: Option<String>,
    pub last_separator_if_serial: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl JoinConfig {
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Yaml.parse(source)
    }

    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Json.parse(source)
    }

    /// Builds the described spec with unstyled separators and framing.
    pub fn to_spec(&self) -> JoinSpec {
        let plain = |value: &Option<String>| value.as_deref().map(Text::plain);
        JoinSpec {
            separator: plain(&self.separator),
            last_separator: plain(&self.last_separator),
            last_separator_if_serial: plain(&self.last_separator_if_serial),
            prefix: plain(&self.prefix),
            suffix: plain(&self.suffix),
            ..JoinSpec::empty()
        }
    }
}

impl From<&JoinConfig> for JoinSpec {
    fn from(config: &JoinConfig) -> Self {
        config.to_spec()
    }
}

/// A named collection of join styles, as found in an application config file.
///
/// ```yaml
/// inline:
///   separator: ", "
///   last_separator: " and "
/// array:
///   separator: ", "
///   prefix: "["
///   suffix: "]"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JoinConfigs {
    styles: BTreeMap<String, JoinConfig>,
}

impl JoinConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a named style, returning the collection for chaining.
    pub fn add(mut self, name: impl Into<String>, config: JoinConfig) -> Self {
        self.styles.insert(name.into(), config);
        self
    }

    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Yaml.parse(source)
    }

    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Json.parse(source)
    }

    /// Loads a YAML or JSON file, choosing the format by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        config::load(path)
    }

    /// Returns the raw configuration for `name`.
    pub fn get(&self, name: &str) -> Option<&JoinConfig> {
        self.styles.get(name)
    }

    /// Builds the spec for `name`.
    pub fn spec(&self, name: &str) -> Option<JoinSpec> {
        self.get(name).map(JoinConfig::to_spec)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
