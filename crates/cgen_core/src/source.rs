use std::io;

use cgen_config::{CgenConfig, DebugTrace};
use cgen_log::{log_dbg, log_trc, trace_dbg};

use crate::{Code, Stream};

/// An ordered list of top-level elements rendered onto one destination.
pub struct Source {
  config: CgenConfig,
  elements: Vec<Box<dyn Code>>,
}

impl Source {
  pub fn new(config: CgenConfig) -> Self {
    Self {
      config,
      elements: Vec::new(),
    }
  }

  pub fn config(&self) -> &CgenConfig {
    &self.config
  }

  pub fn add_element(
    &mut self,
    element: impl Code + 'static,
  ) {
    self.elements.push(Box::new(element));
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// Render every element onto `out` with a fresh stream.
  pub fn make(
    &self,
    out: &mut String,
  ) {
    log_dbg!(&self.config, "rendering {} top-level elements", self.elements.len());

    let mut stream = Stream::new(&self.config, out);
    for (idx, element) in self.elements.iter().enumerate() {
      if idx > 0 && self.config.source.separate_elements {
        stream.line_feed();
      }
      trace_dbg!(&self.config, DebugTrace::Source, "element {}", idx);
      element.act(&mut stream);
    }

    log_trc!(&self.config, "rendered {} bytes", out.len());
  }

  pub fn render(&self) -> String {
    let mut out = String::new();
    self.make(&mut out);
    out
  }

  /// Render into a byte sink. The destination is not retained.
  pub fn write_to(
    &self,
    mut writer: impl io::Write,
  ) -> io::Result<()> {
    writer.write_all(self.render().as_bytes())?;
    writer.flush()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::EMPTY_LINE;
  use cgen_config::SourceConfig;

  struct Line(&'static str);

  impl Code for Line {
    fn act(
      &self,
      stream: &mut Stream<'_>,
    ) {
      stream.write_line(self.0);
    }
  }

  struct Indented;

  impl Code for Indented {
    fn act(
      &self,
      stream: &mut Stream<'_>,
    ) {
      stream.indent();
      stream.write("");
    }
  }

  fn source(separate_elements: bool) -> Source {
    Source::new(CgenConfig::new(SourceConfig::new("indent", separate_elements)))
  }

  #[test]
  fn test_empty_line() {
    let mut source = source(true);
    source.add_element(EMPTY_LINE);

    assert_eq!(source.render(), "\n");
  }

  #[test]
  fn test_config_indent() {
    let mut source = source(true);
    source.add_element(Indented);

    assert_eq!(source.render(), "indent");
  }

  #[test]
  fn test_separate_elements_true() {
    let mut source = source(true);
    source.add_element(Line("dummy"));
    source.add_element(Line("dummy"));

    assert_eq!(source.len(), 2);
    assert_eq!(source.render(), "dummy\n\ndummy\n");
  }

  #[test]
  fn test_separate_elements_false() {
    let mut source = source(false);
    source.add_element(Line("dummy"));
    source.add_element(Line("dummy"));

    assert_eq!(source.render(), "dummy\ndummy\n");
  }

  #[test]
  fn test_each_make_uses_fresh_stream() {
    let mut source = source(true);
    source.add_element(Indented);

    let mut out = String::new();
    source.make(&mut out);
    source.make(&mut out);

    assert_eq!(out, "indentindent");
  }

  #[test]
  fn test_write_to() {
    let mut source = source(false);
    source.add_element(Line("int x;"));

    let mut buf = Vec::new();
    source.write_to(&mut buf).unwrap();

    assert_eq!(buf, b"int x;\n");
  }
}
