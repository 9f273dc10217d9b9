//! File-based configuration loading.
//!
//! Join styles and placeholder tables can be declared in YAML or JSON files.
//! This module picks the format from a file extension and deserializes any
//! serde type from it.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

/// Error from loading or parsing a configuration source.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML content did not match the expected shape. `path` is set when the
    /// content came from a file.
    #[error("invalid YAML config{}: {source}", in_file(.path))]
    Yaml {
        path: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON content did not match the expected shape. `path` is set when the
    /// content came from a file.
    #[error("invalid JSON config{}: {source}", in_file(.path))]
    Json {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// The file extension is not one of [`CONFIG_EXTENSIONS`].
    #[error("unsupported config format for \"{}\"", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

fn in_file(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|path| format!(" in \"{}\"", path.display()))
        .unwrap_or_default()
}

/// Serialization format of a configuration source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

/// Recognized configuration file extensions and the format each selects.
pub const CONFIG_EXTENSIONS: &[(&str, ConfigFormat)] = &[
    ("yaml", ConfigFormat::Yaml),
    ("yml", ConfigFormat::Yaml),
    ("json", ConfigFormat::Json),
];

impl ConfigFormat {
    /// Determines the format from a path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        CONFIG_EXTENSIONS
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|&(_, format)| format)
    }

    /// Deserializes `source` in this format.
    pub fn parse<T: DeserializeOwned>(self, source: &str) -> Result<T, ConfigError> {
        self.parse_from(source, None)
    }

    fn parse_from<T: DeserializeOwned>(
        self,
        source: &str,
        file: Option<&Path>,
    ) -> Result<T, ConfigError> {
        let path = || file.map(Path::to_path_buf);
        match self {
            ConfigFormat::Yaml => serde_yaml::from_str(source).map_err(|source| ConfigError::Yaml {
                path: path(),
                source,
            }),
            ConfigFormat::Json => serde_json::from_str(source).map_err(|source| ConfigError::Json {
                path: path(),
                source,
            }),
        }
    }
}

/// Reads and deserializes a configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedFormat`] for unknown extensions,
/// [`ConfigError::Io`] when the file cannot be read, and a parse error
/// naming the file when its content does not match `T`.
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?format, "loading config");
    format.parse_from(&source, Some(path))
}
