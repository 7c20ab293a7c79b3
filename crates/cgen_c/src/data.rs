//! Literal expressions.

use cgen_core::{Code, Stream};

use crate::expr::Expr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum IntBase {
  #[default]
  Dec,
  Hex,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IntLiteral {
  pub value: i64,
  pub base: IntBase,
}

impl IntLiteral {
  pub fn new(value: i64) -> Self {
    Self {
      value,
      base: IntBase::Dec,
    }
  }

  pub fn hex(value: i64) -> Self {
    Self {
      value,
      base: IntBase::Hex,
    }
  }

  pub fn text(&self) -> String {
    match self.base {
      IntBase::Dec => self.value.to_string(),
      IntBase::Hex if self.value < 0 => format!("-0x{:x}", self.value.unsigned_abs()),
      IntBase::Hex => format!("0x{:x}", self.value),
    }
  }
}

/// A C string literal. The escaped, quoted text is computed once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringLiteral {
  text: String,
}

impl StringLiteral {
  pub fn new(value: &str) -> Self {
    Self::from_bytes(value.as_bytes())
  }

  pub fn from_bytes(bytes: &[u8]) -> Self {
    let mut text = String::with_capacity(bytes.len() + 2);
    text.push('"');
    let mut prev = None;
    for &b in bytes {
      escape_byte(b, b'"', prev, &mut text);
      prev = Some(b);
    }
    text.push('"');
    Self { text }
  }

  /// The literal as written to the output, quotes included.
  pub fn text(&self) -> &str {
    &self.text
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CharLiteral {
  pub value: u8,
}

impl CharLiteral {
  pub fn new(value: u8) -> Self {
    Self { value }
  }

  pub fn text(&self) -> String {
    let mut text = String::from("'");
    escape_byte(self.value, b'\'', None, &mut text);
    text.push('\'');
    text
  }
}

/// Escape one byte for a literal delimited by `quote`.
///
/// Non-printable bytes use three-digit octal escapes, which unlike `\x`
/// cannot swallow a following hex digit. A `?` after `?` is escaped so no
/// trigraph can form.
fn escape_byte(
  b: u8,
  quote: u8,
  prev: Option<u8>,
  out: &mut String,
) {
  match b {
    b'\\' => out.push_str("\\\\"),
    b'\n' => out.push_str("\\n"),
    b'\t' => out.push_str("\\t"),
    b'\r' => out.push_str("\\r"),
    0x07 => out.push_str("\\a"),
    0x08 => out.push_str("\\b"),
    0x0b => out.push_str("\\v"),
    0x0c => out.push_str("\\f"),
    b'?' if prev == Some(b'?') => out.push_str("\\?"),
    _ if b == quote => {
      out.push('\\');
      out.push(b as char);
    },
    0x20..=0x7e => out.push(b as char),
    _ => out.push_str(&format!("\\{:03o}", b)),
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
  Int(IntLiteral),
  Str(StringLiteral),
  Char(CharLiteral),
  /// `{ a, b, c }`
  Compound(Vec<Expr>),
}

impl Literal {
  pub fn needs_parentheses(&self) -> bool {
    matches!(self, Literal::Int(int) if int.value < 0)
  }
}

impl Code for Literal {
  fn act(
    &self,
    stream: &mut Stream<'_>,
  ) {
    match self {
      Literal::Int(int) => stream.write(&int.text()),
      Literal::Str(s) => stream.write(s.text()),
      Literal::Char(c) => stream.write(&c.text()),
      Literal::Compound(values) => {
        stream.write("{ ");
        for (idx, value) in values.iter().enumerate() {
          if idx > 0 {
            stream.write(", ");
          }
          value.act(stream);
        }
        if !values.is_empty() {
          stream.write(" ");
        }
        stream.write("}");
      },
    }
  }
}

impl From<IntLiteral> for Expr {
  fn from(lit: IntLiteral) -> Self {
    Expr::Literal(Literal::Int(lit))
  }
}

impl From<StringLiteral> for Expr {
  fn from(lit: StringLiteral) -> Self {
    Expr::Literal(Literal::Str(lit))
  }
}

impl From<CharLiteral> for Expr {
  fn from(lit: CharLiteral) -> Self {
    Expr::Literal(Literal::Char(lit))
  }
}

impl Expr {
  pub fn int(value: i64) -> Self {
    IntLiteral::new(value).into()
  }

  pub fn string(value: &str) -> Self {
    StringLiteral::new(value).into()
  }

  pub fn compound(values: Vec<Expr>) -> Self {
    Expr::Literal(Literal::Compound(values))
  }
}
