//! Placeholder tables declared in configuration files.
//!
//! Applications often keep their user-facing placeholders in a YAML or JSON
//! file next to other settings:
//!
//! ```yaml
//! server: "lobby-1"                      # literal text
//! player: { text: "<Steve>" }            # literal text, explicit form
//! motd: { markup: "<green>Hi!</green>" } # parsed in place of the tag
//! ```
//!
//! [`PlaceholderTable`] deserializes such files and turns them into a
//! [`MapTagResolver`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use weft::config::{self, ConfigError, ConfigFormat};
use weft::Text;

use crate::resolver::{MapTagResolver, TagMap, TagResolver};
use crate::tag::Tag;

/// The value bound to one placeholder name in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaceholderValue {
    /// Shorthand for [`PlaceholderValue::Text`].
    Plain(String),
    /// Inserted literally.
    Text { text: String },
    /// Parsed in place of the tag.
    Markup { markup: String },
}

impl PlaceholderValue {
    /// Converts the configured value into the tag it stands for.
    pub fn to_tag(&self) -> Tag {
        match self {
            PlaceholderValue::Plain(text) | PlaceholderValue::Text { text } => {
                Tag::Insert(Text::plain(text.as_str()))
            }
            PlaceholderValue::Markup { markup } => Tag::pre_process(markup.as_str()),
        }
    }
}

/// A named set of placeholders loaded from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceholderTable {
    entries: BTreeMap<String, PlaceholderValue>,
}

impl PlaceholderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entry, returning the table for chaining.
    pub fn add(mut self, name: impl Into<String>, value: PlaceholderValue) -> Self {
        self.entries.insert(name.into(), value);
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
        let table: Self = config::load(path)?;
        debug!(entries = table.len(), "loaded placeholder table");
        Ok(table)
    }

    pub fn get(&self, name: &str) -> Option<&PlaceholderValue> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts every entry into its tag.
    pub fn to_tag_map(&self) -> TagMap {
        self.entries
            .iter()
            .map(|(name, value)| (name.clone(), value.to_tag()))
            .collect()
    }

    pub fn to_resolver(&self) -> TagResolver {
        TagResolver::Map(MapTagResolver::new(self.to_tag_map()))
    }
}
