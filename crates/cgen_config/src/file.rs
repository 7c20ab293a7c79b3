//! Raw configuration types for cgen.toml parsing.
//!
//! These types mirror the TOML structure directly and use `Option` for
//! optional fields. `resolve` turns them into a validated `CgenConfig`.

use std::path::Path;

use serde::Deserialize;

use crate::{CHeader, CgenConfig, ConfigError, DebugTrace, SourceConfig};

/// Root structure of cgen.toml.
#[derive(Debug, Default, Deserialize)]
pub struct CgenToml {
  #[serde(default)]
  pub source: SourceToml,

  #[serde(default)]
  pub log: LogToml,

  /// Headers prepended to every generated C source.
  #[serde(default)]
  pub include: Vec<IncludeToml>,
}

/// The `[source]` section.
#[derive(Debug, Default, Deserialize)]
pub struct SourceToml {
  /// Indentation unit. Default: a single tab.
  pub indentation: Option<String>,

  /// Blank line between top-level elements. Default: true.
  pub separate_elements: Option<bool>,
}

/// The `[log]` section.
#[derive(Debug, Default, Deserialize)]
pub struct LogToml {
  #[serde(default)]
  pub verbose: u8,

  #[serde(default)]
  pub quiet: bool,

  #[serde(default)]
  pub debug: bool,

  #[serde(default)]
  pub debug_trace: Vec<DebugTrace>,
}

/// One `[[include]]` entry.
#[derive(Debug, Deserialize)]
pub struct IncludeToml {
  pub path: String,

  /// Use `#include "..."` instead of `#include <...>`. Default: false.
  #[serde(default)]
  pub quoted: bool,
}

/// Read and resolve a configuration file.
pub fn load_config(path: &Path) -> Result<CgenConfig, ConfigError> {
  let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
    path: path.to_path_buf(),
    source,
  })?;

  parse_config(&text, path)
}

/// Parse and resolve configuration text. `origin` is only used in errors.
pub fn parse_config(
  text: &str,
  origin: &Path,
) -> Result<CgenConfig, ConfigError> {
  let raw: CgenToml = toml::from_str(text).map_err(|e| ConfigError::TomlParse {
    path: origin.to_path_buf(),
    message: e.message().to_string(),
  })?;

  resolve(raw)
}

fn resolve(raw: CgenToml) -> Result<CgenConfig, ConfigError> {
  let mut source = SourceConfig::C;

  if let Some(indentation) = raw.source.indentation {
    if indentation.is_empty() || !indentation.chars().all(|c| c == ' ' || c == '\t') {
      return Err(ConfigError::InvalidIndentation { value: indentation });
    }
    source.indentation = indentation.into();
  }

  if let Some(separate) = raw.source.separate_elements {
    source.separate_elements = separate;
  }

  if raw.log.verbose > CgenConfig::MAX_VERBOSE {
    return Err(ConfigError::InvalidVerbosity {
      value: raw.log.verbose,
      max: CgenConfig::MAX_VERBOSE,
    });
  }

  let mut config = CgenConfig::new(source);
  config.verbose = raw.log.verbose;
  config.quiet = raw.log.quiet;
  config.debug = raw.log.debug;

  for trace in raw.log.debug_trace {
    config = config.with_trace(trace);
  }

  config.headers = raw
    .include
    .into_iter()
    .map(|inc| CHeader {
      path: inc.path,
      quoted: inc.quoted,
    })
    .collect();

  Ok(config)
}
