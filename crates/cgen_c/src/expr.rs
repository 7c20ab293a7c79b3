//! Expressions and operators.
//!
//! Every expression kind decides whether it needs parentheses when nested
//! inside another expression. Unary and postfix-shaped kinds additionally
//! parenthesize an operand of the opposite fixity so token runs such as
//! `++i++` never appear.

use cgen_core::{Code, Stream};

use crate::block::Block;
use crate::data::Literal;
use crate::decl::{CDecl, CType};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Fixity {
  Prefix,
  Postfix,
}

impl Fixity {
  fn opposite(self) -> Fixity {
    match self {
      Fixity::Prefix => Fixity::Postfix,
      Fixity::Postfix => Fixity::Prefix,
    }
  }
}

/// Parenthesization behaviour of an expression kind when used as an operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Parentheses {
  Always,
  Never,
  /// Decided from the literal text: anything but identifier characters.
  Textual,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
  // Arithmetic
  Add,
  Sub,
  Mul,
  Div,
  Mod,

  // Assignment
  Assign,
  AddAssign,
  SubAssign,
  MulAssign,
  DivAssign,
  ModAssign,
  BitAndAssign,
  BitOrAssign,
  BitXorAssign,
  ShiftLeftAssign,
  ShiftRightAssign,

  // Comparison
  Equal,
  NotEqual,
  LessThan,
  LessEqual,
  GreaterThan,
  GreaterEqual,

  // Bitwise
  ShiftLeft,
  ShiftRight,
  BitAnd,
  BitOr,
  BitXor,

  // Logical
  And,
  Or,
}

impl BinaryOp {
  pub const ALL: [BinaryOp; 29] = [
    BinaryOp::Add,
    BinaryOp::Sub,
    BinaryOp::Mul,
    BinaryOp::Div,
    BinaryOp::Mod,
    BinaryOp::Assign,
    BinaryOp::AddAssign,
    BinaryOp::SubAssign,
    BinaryOp::MulAssign,
    BinaryOp::DivAssign,
    BinaryOp::ModAssign,
    BinaryOp::BitAndAssign,
    BinaryOp::BitOrAssign,
    BinaryOp::BitXorAssign,
    BinaryOp::ShiftLeftAssign,
    BinaryOp::ShiftRightAssign,
    BinaryOp::Equal,
    BinaryOp::NotEqual,
    BinaryOp::LessThan,
    BinaryOp::LessEqual,
    BinaryOp::GreaterThan,
    BinaryOp::GreaterEqual,
    BinaryOp::ShiftLeft,
    BinaryOp::ShiftRight,
    BinaryOp::BitAnd,
    BinaryOp::BitOr,
    BinaryOp::BitXor,
    BinaryOp::And,
    BinaryOp::Or,
  ];

  pub fn token(&self) -> &'static str {
    match self {
      BinaryOp::Add => "+",
      BinaryOp::Sub => "-",
      BinaryOp::Mul => "*",
      BinaryOp::Div => "/",
      BinaryOp::Mod => "%",
      BinaryOp::Assign => "=",
      BinaryOp::AddAssign => "+=",
      BinaryOp::SubAssign => "-=",
      BinaryOp::MulAssign => "*=",
      BinaryOp::DivAssign => "/=",
      BinaryOp::ModAssign => "%=",
      BinaryOp::BitAndAssign => "&=",
      BinaryOp::BitOrAssign => "|=",
      BinaryOp::BitXorAssign => "^=",
      BinaryOp::ShiftLeftAssign => "<<=",
      BinaryOp::ShiftRightAssign => ">>=",
      BinaryOp::Equal => "==",
      BinaryOp::NotEqual => "!=",
      BinaryOp::LessThan => "<",
      BinaryOp::LessEqual => "<=",
      BinaryOp::GreaterThan => ">",
      BinaryOp::GreaterEqual => ">=",
      BinaryOp::ShiftLeft => "<<",
      BinaryOp::ShiftRight => ">>",
      BinaryOp::BitAnd => "&",
      BinaryOp::BitOr => "|",
      BinaryOp::BitXor => "^",
      BinaryOp::And => "&&",
      BinaryOp::Or => "||",
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOp {
  BitNot,
  Not,
  Neg,
  AddressOf,
  Deref,
  PreIncrement,
  PreDecrement,
  PostIncrement,
  PostDecrement,
  /// `return <operand>`, usable as an expression statement.
  Return,
}

impl UnaryOp {
  pub const ALL: [UnaryOp; 10] = [
    UnaryOp::BitNot,
    UnaryOp::Not,
    UnaryOp::Neg,
    UnaryOp::AddressOf,
    UnaryOp::Deref,
    UnaryOp::PreIncrement,
    UnaryOp::PreDecrement,
    UnaryOp::PostIncrement,
    UnaryOp::PostDecrement,
    UnaryOp::Return,
  ];

  pub fn token(&self) -> &'static str {
    match self {
      UnaryOp::BitNot => "~",
      UnaryOp::Not => "!",
      UnaryOp::Neg => "-",
      UnaryOp::AddressOf => "&",
      UnaryOp::Deref => "*",
      UnaryOp::PreIncrement | UnaryOp::PostIncrement => "++",
      UnaryOp::PreDecrement | UnaryOp::PostDecrement => "--",
      UnaryOp::Return => "return ",
    }
  }

  pub fn fixity(&self) -> Fixity {
    match self {
      UnaryOp::PostIncrement | UnaryOp::PostDecrement => Fixity::Postfix,
      _ => Fixity::Prefix,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
  /// Caller-supplied expression text.
  Raw(String),
  /// Reference to a named variable or function.
  Variable(String),
  Literal(Literal),
  Binary {
    op: BinaryOp,
    left: Box<Expr>,
    right: Box<Expr>,
  },
  Unary {
    op: UnaryOp,
    operand: Box<Expr>,
  },
  Call {
    callee: Box<Expr>,
    args: Vec<Expr>,
  },
  Subscript {
    array: Box<Expr>,
    index: Box<Expr>,
  },
  Member {
    base: Box<Expr>,
    field: String,
    arrow: bool,
  },
  Cast {
    ty: CType,
    operand: Box<Expr>,
  },
  SizeOf(CType),
  /// GNU `({ ... })`.
  Statement(Box<Block>),
}

impl Expr {
  pub fn raw(text: impl Into<String>) -> Self {
    Expr::Raw(text.into())
  }

  pub fn var(name: impl Into<String>) -> Self {
    Expr::Variable(name.into())
  }

  pub fn binary(
    op: BinaryOp,
    left: Expr,
    right: Expr,
  ) -> Self {
    Expr::Binary {
      op,
      left: Box::new(left),
      right: Box::new(right),
    }
  }

  pub fn unary(
    op: UnaryOp,
    operand: Expr,
  ) -> Self {
    Expr::Unary {
      op,
      operand: Box::new(operand),
    }
  }

  pub fn call(
    callee: Expr,
    args: Vec<Expr>,
  ) -> Self {
    Expr::Call {
      callee: Box::new(callee),
      args,
    }
  }

  pub fn subscript(
    array: Expr,
    index: Expr,
  ) -> Self {
    Expr::Subscript {
      array: Box::new(array),
      index: Box::new(index),
    }
  }

  /// `base.field`
  pub fn member(
    base: Expr,
    field: impl Into<String>,
  ) -> Self {
    Expr::Member {
      base: Box::new(base),
      field: field.into(),
      arrow: false,
    }
  }

  /// `base->field`
  pub fn arrow(
    base: Expr,
    field: impl Into<String>,
  ) -> Self {
    Expr::Member {
      base: Box::new(base),
      field: field.into(),
      arrow: true,
    }
  }

  pub fn cast(
    ty: CType,
    operand: Expr,
  ) -> Self {
    Expr::Cast {
      ty,
      operand: Box::new(operand),
    }
  }

  pub fn size_of(ty: CType) -> Self {
    Expr::SizeOf(ty)
  }

  pub fn statement(block: Block) -> Self {
    Expr::Statement(Box::new(block))
  }

  /// Split `a; b; c` into raw expressions, dropping empty parts.
  pub fn exprs_from_text(text: &str) -> Vec<Expr> {
    text
      .split(';')
      .map(str::trim)
      .filter(|part| !part.is_empty())
      .map(Expr::raw)
      .collect()
  }

  pub fn parentheses(&self) -> Parentheses {
    match self {
      Expr::Raw(_) => Parentheses::Textual,
      Expr::Variable(_) => Parentheses::Never,
      Expr::Literal(lit) => {
        if lit.needs_parentheses() {
          Parentheses::Always
        } else {
          Parentheses::Never
        }
      },
      Expr::Binary { .. } | Expr::Cast { .. } => Parentheses::Always,
      Expr::Unary { .. }
      | Expr::Call { .. }
      | Expr::Subscript { .. }
      | Expr::Member { .. }
      | Expr::SizeOf(_)
      | Expr::Statement(_) => Parentheses::Never,
    }
  }

  /// Whether this expression needs parentheses when used as an operand.
  pub fn needs_parentheses(&self) -> bool {
    match self.parentheses() {
      Parentheses::Always => true,
      Parentheses::Never => false,
      Parentheses::Textual => match self {
        Expr::Raw(text) => !text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false,
      },
    }
  }

  /// Prefix- or postfix-shaped kinds. Calls, subscripts and member access
  /// are postfix; casts and `sizeof` are prefix.
  pub fn fixity(&self) -> Option<Fixity> {
    match self {
      Expr::Unary { op, .. } => Some(op.fixity()),
      Expr::Cast { .. } | Expr::SizeOf(_) => Some(Fixity::Prefix),
      Expr::Call { .. } | Expr::Subscript { .. } | Expr::Member { .. } => Some(Fixity::Postfix),
      _ => None,
    }
  }

  /// Render as an operand: parenthesized when `force` is set or the kind
  /// requires it.
  pub fn act_with_parentheses(
    &self,
    stream: &mut Stream<'_>,
    force: bool,
  ) {
    let parens = force || self.needs_parentheses();
    if parens {
      stream.write("(");
    }
    self.act(stream);
    if parens {
      stream.write(")");
    }
  }

  fn act_operand_of(
    &self,
    stream: &mut Stream<'_>,
    parent: Fixity,
  ) {
    let force = self.fixity() == Some(parent.opposite());
    self.act_with_parentheses(stream, force);
  }

  /// First token this expression writes, when it starts with an operator.
  fn leading_token(&self) -> Option<&'static str> {
    match self {
      Expr::Unary { op, .. } if op.fixity() == Fixity::Prefix => Some(op.token()),
      _ => None,
    }
  }

  fn act_prefix(
    &self,
    stream: &mut Stream<'_>,
    op: UnaryOp,
    operand: &Expr,
  ) {
    let token = op.token();
    stream.write(token);

    if op == UnaryOp::Return {
      operand.act(stream);
      return;
    }

    // `-` `-x` would lex as `--x`, `&` `&x` as `&&x`
    let glued =
      matches!(token, "-" | "&") && operand.leading_token().is_some_and(|inner| inner.starts_with(token));

    if glued {
      operand.act_with_parentheses(stream, true);
    } else {
      operand.act_operand_of(stream, Fixity::Prefix);
    }
  }

  fn act_args(
    stream: &mut Stream<'_>,
    args: &[Expr],
  ) {
    for (idx, arg) in args.iter().enumerate() {
      if idx > 0 {
        stream.write(", ");
      }
      arg.act(stream);
    }
  }
}

impl Code for Expr {
  fn act(
    &self,
    stream: &mut Stream<'_>,
  ) {
    match self {
      Expr::Raw(text) | Expr::Variable(text) => stream.write(text),
      Expr::Literal(lit) => lit.act(stream),
      Expr::Binary { op, left, right } => {
        left.act_with_parentheses(stream, false);
        stream.write(&format!(" {} ", op.token()));
        right.act_with_parentheses(stream, false);
      },
      Expr::Unary { op, operand } => match op.fixity() {
        Fixity::Prefix => self.act_prefix(stream, *op, operand),
        Fixity::Postfix => {
          operand.act_operand_of(stream, Fixity::Postfix);
          stream.write(op.token());
        },
      },
      Expr::Call { callee, args } => {
        callee.act_operand_of(stream, Fixity::Postfix);
        stream.write("(");
        Self::act_args(stream, args);
        stream.write(")");
      },
      Expr::Subscript { array, index } => {
        array.act_operand_of(stream, Fixity::Postfix);
        stream.write("[");
        index.act(stream);
        stream.write("]");
      },
      Expr::Member { base, field, arrow } => {
        base.act_operand_of(stream, Fixity::Postfix);
        stream.write(if *arrow { "->" } else { "." });
        stream.write(field);
      },
      Expr::Cast { ty, operand } => {
        stream.write(&format!("({})", ty.abstract_decl()));
        operand.act_operand_of(stream, Fixity::Prefix);
      },
      Expr::SizeOf(ty) => stream.write(&format!("sizeof({})", ty.abstract_decl())),
      Expr::Statement(block) => block.act_statement_expr(stream),
    }
  }
}

/// A declared local or global together with its optional initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
  pub decl: CDecl,
  pub value: Option<Expr>,
}

impl Variable {
  pub fn new(decl: CDecl) -> Self {
    Self { decl, value: None }
  }

  pub fn with_value(
    decl: CDecl,
    value: Expr,
  ) -> Self {
    Self {
      decl,
      value: Some(value),
    }
  }

  pub fn name(&self) -> &str {
    &self.decl.name
  }

  /// Reference to this variable, as used inside expressions.
  pub fn to_expr(&self) -> Expr {
    Expr::var(self.decl.name.clone())
  }

  /// The declarations of `variables`, e.g. to build an argument list.
  pub fn to_args(variables: &[Variable]) -> Vec<CDecl> {
    variables.iter().map(|var| var.decl.clone()).collect()
  }

  /// `<decl>[ = <value>]`, without the trailing semicolon.
  pub fn act_definition(
    &self,
    stream: &mut Stream<'_>,
  ) {
    stream.write(&self.decl.to_string());
    if let Some(value) = &self.value {
      stream.write(" = ");
      value.act(stream);
    }
  }
}
