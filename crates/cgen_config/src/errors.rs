//! Error types for configuration loading.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur when loading or resolving a configuration file.
#[derive(Debug)]
pub enum ConfigError {
  /// I/O error while reading a file.
  Io { path: PathBuf, source: std::io::Error },

  /// Failed to parse the TOML document.
  TomlParse { path: PathBuf, message: String },

  /// Indentation must be a non-empty run of spaces and tabs.
  InvalidIndentation { value: String },

  /// Verbosity is out of the valid range.
  InvalidVerbosity { value: u8, max: u8 },
}

impl fmt::Display for ConfigError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      ConfigError::Io { path, source } => {
        write!(f, "failed to read '{}': {}", path.display(), source)
      },

      ConfigError::TomlParse { path, message } => {
        write!(f, "failed to parse '{}': {}", path.display(), message)
      },

      ConfigError::InvalidIndentation { value } => {
        write!(f, "invalid indentation {:?}: expected spaces or tabs", value)
      },

      ConfigError::InvalidVerbosity { value, max } => {
        write!(f, "invalid verbosity {}: must be between 0 and {}", value, max)
      },
    }
  }
}

impl std::error::Error for ConfigError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ConfigError::Io { source, .. } => Some(source),
      _ => None,
    }
  }
}
