//! Preprocessor directives.

use cgen_config::CHeader;
use cgen_core::{Code, Stream};

use crate::expr::Expr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IncludeFile {
  /// `"file"`
  Local(String),
  /// `<file>`
  System(String),
}

impl IncludeFile {
  pub fn local(name: impl Into<String>) -> Self {
    IncludeFile::Local(name.into())
  }

  pub fn system(name: impl Into<String>) -> Self {
    IncludeFile::System(name.into())
  }
}

impl Code for IncludeFile {
  fn act(
    &self,
    stream: &mut Stream<'_>,
  ) {
    match self {
      IncludeFile::Local(name) => stream.write(&format!("\"{}\"", name)),
      IncludeFile::System(name) => stream.write(&format!("<{}>", name)),
    }
  }
}

/// `#include <file>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Include {
  pub file: IncludeFile,
}

impl Include {
  pub fn new(file: IncludeFile) -> Self {
    Self { file }
  }
}

impl From<&CHeader> for Include {
  fn from(header: &CHeader) -> Self {
    let file = if header.quoted {
      IncludeFile::local(header.path.clone())
    } else {
      IncludeFile::system(header.path.clone())
    };
    Self::new(file)
  }
}

impl Code for Include {
  fn act(
    &self,
    stream: &mut Stream<'_>,
  ) {
    stream.write("#include ");
    self.file.act(stream);
    stream.line_feed();
  }
}

/// Consecutive `#include` lines rendered as one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Includes(pub Vec<Include>);

impl Includes {
  pub fn from_headers(headers: &[CHeader]) -> Self {
    Self(headers.iter().map(Include::from).collect())
  }
}

impl Code for Includes {
  fn act(
    &self,
    stream: &mut Stream<'_>,
  ) {
    for include in &self.0 {
      include.act(stream);
    }
  }
}

/// `#define NAME[ value]`
#[derive(Debug, Clone, PartialEq)]
pub struct Define {
  pub name: String,
  pub value: Option<Expr>,
}

impl Define {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      value: None,
    }
  }

  pub fn with_value(
    name: impl Into<String>,
    value: Expr,
  ) -> Self {
    Self {
      name: name.into(),
      value: Some(value),
    }
  }
}

impl Code for Define {
  fn act(
    &self,
    stream: &mut Stream<'_>,
  ) {
    stream.write("#define ");
    stream.write(&self.name);
    if let Some(value) = &self.value {
      stream.write(" ");
      // macro bodies are substituted textually
      value.act_with_parentheses(stream, false);
    }
    stream.line_feed();
  }
}
