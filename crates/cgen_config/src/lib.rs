//! Configuration shared by every render pass.
//!
//! A `CgenConfig` is always passed in explicitly. The only preset is the named
//! constant [`SourceConfig::C`], which callers opt into.

mod errors;
mod file;

use std::borrow::Cow;

use serde::Deserialize;

pub use errors::ConfigError;
pub use file::{load_config, parse_config, CgenToml, IncludeToml, LogToml, SourceToml};

/// How a source stream lays out text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
  /// Text repeated once per indentation level.
  pub indentation: Cow<'static, str>,
  /// Insert a blank line between successive top-level elements.
  pub separate_elements: bool,
}

impl SourceConfig {
  /// Tab indentation, top-level elements separated by a blank line.
  pub const C: SourceConfig = SourceConfig {
    indentation: Cow::Borrowed("\t"),
    separate_elements: true,
  };

  pub fn new(
    indentation: impl Into<Cow<'static, str>>,
    separate_elements: bool,
  ) -> Self {
    Self {
      indentation: indentation.into(),
      separate_elements,
    }
  }
}

/// Header to include in generated C code with style info
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CHeader {
  /// The path/name of the header
  pub path: String,
  /// true = #include "...", false = #include <...>
  pub quoted: bool,
}

impl CHeader {
  pub fn system(path: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      quoted: false,
    }
  }

  pub fn local(path: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      quoted: true,
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugTrace {
  Source,
  Block,
  Decl,
}

/// Resolved configuration for one output destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CgenConfig {
  pub source: SourceConfig,
  pub verbose: u8,
  pub quiet: bool,
  pub debug: bool,
  pub debug_trace: Vec<DebugTrace>,
  pub headers: Vec<CHeader>,
}

impl CgenConfig {
  /// Highest accepted verbosity level.
  pub const MAX_VERBOSE: u8 = 3;

  /// Silent configuration around the given layout.
  pub fn new(source: SourceConfig) -> Self {
    Self {
      source,
      verbose: 0,
      quiet: false,
      debug: false,
      debug_trace: Vec::new(),
      headers: Vec::new(),
    }
  }

  pub fn with_header(
    mut self,
    header: CHeader,
  ) -> Self {
    self.headers.push(header);
    self
  }

  pub fn with_trace(
    mut self,
    trace: DebugTrace,
  ) -> Self {
    if !self.debug_trace.contains(&trace) {
      self.debug_trace.push(trace);
    }
    self
  }
}

impl From<SourceConfig> for CgenConfig {
  fn from(source: SourceConfig) -> Self {
    Self::new(source)
  }
}
