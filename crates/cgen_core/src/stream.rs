use cgen_config::CgenConfig;

/// Indentation-aware text sink for one render pass.
///
/// Indentation is written lazily: at most once per line, right before the
/// first write on that line. A line feed resets it.
pub struct Stream<'a> {
  config: &'a CgenConfig,
  out: &'a mut String,
  indent_level: usize,
  indented: bool,
}

impl<'a> Stream<'a> {
  pub fn new(
    config: &'a CgenConfig,
    out: &'a mut String,
  ) -> Self {
    Self {
      config,
      out,
      indent_level: 0,
      indented: false,
    }
  }

  pub fn config(&self) -> &'a CgenConfig {
    self.config
  }

  pub fn indent(&mut self) {
    self.indent_level += 1;
  }

  /// Dedenting below zero is a caller error.
  pub fn dedent(&mut self) {
    debug_assert!(self.indent_level > 0, "dedent below indentation level 0");
    self.indent_level = self.indent_level.saturating_sub(1);
  }

  pub fn indent_level(&self) -> usize {
    self.indent_level
  }

  /// Whether the current line already received its indentation.
  pub fn is_indented(&self) -> bool {
    self.indented
  }

  pub fn write(
    &mut self,
    text: &str,
  ) {
    if !self.indented {
      for _ in 0..self.indent_level {
        self.out.push_str(&self.config.source.indentation);
      }
      self.indented = true;
    }
    self.out.push_str(text);
  }

  pub fn line_feed(&mut self) {
    self.out.push('\n');
    self.indented = false;
  }

  pub fn write_line(
    &mut self,
    text: &str,
  ) {
    self.write(text);
    self.line_feed();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use cgen_config::SourceConfig;

  fn config(indentation: &'static str) -> CgenConfig {
    CgenConfig::new(SourceConfig::new(indentation, true))
  }

  #[test]
  fn test_indentation_written_once_per_line() {
    let config = config("indent");
    let mut out = String::new();
    let mut stream = Stream::new(&config, &mut out);

    stream.indent();
    stream.write("a");
    stream.write("b");
    stream.line_feed();
    stream.write("c");

    assert_eq!(out, "indentab\nindentc");
  }

  #[test]
  fn test_empty_write_still_indents() {
    let config = config("indent");
    let mut out = String::new();
    let mut stream = Stream::new(&config, &mut out);

    stream.indent();
    stream.write("");

    assert!(stream.is_indented());
    assert_eq!(out, "indent");
  }

  #[test]
  fn test_line_feed_does_not_indent() {
    let config = config("\t");
    let mut out = String::new();
    let mut stream = Stream::new(&config, &mut out);

    stream.indent();
    stream.line_feed();
    stream.write_line("x");
    stream.dedent();
    stream.write_line("y");

    assert_eq!(out, "\n\tx\ny\n");
  }

  #[test]
  fn test_nested_levels() {
    let config = config("  ");
    let mut out = String::new();
    let mut stream = Stream::new(&config, &mut out);

    stream.indent();
    stream.indent();
    assert_eq!(stream.indent_level(), 2);
    stream.write_line("deep");
    stream.dedent();
    stream.write_line("shallow");

    assert_eq!(out, "    deep\n  shallow\n");
  }
}
