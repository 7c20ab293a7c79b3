use std::fmt;

/// Contract violations reported while a tree is being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
  /// An `if` block already owns an `else` branch.
  MultipleElse,
}

impl fmt::Display for CodeError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      CodeError::MultipleElse => write!(f, "cannot attach multiple else blocks to a single if block"),
    }
  }
}

impl std::error::Error for CodeError {}
