//! Statements, blocks and the constructs that own them.
//!
//! A block is wrapped in braces unless it holds exactly one statement and no
//! variables. Function bodies and `if` blocks with an attached `else` always
//! take braces.

use cgen_config::DebugTrace;
use cgen_core::{Code, CodeError, Stream};
use cgen_log::trace_dbg;

use crate::decl::CDecl;
use crate::expr::{Expr, Variable};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
  Expr(Expr),
  /// A nested compound statement, always braced.
  Block(Block),
  If(IfBlock),
  While(WhileLoop),
  For(ForLoop),
  EmptyLine,
}

impl Statement {
  fn needs_semicolon(&self) -> bool {
    matches!(self, Statement::Expr(_))
  }
}

impl Code for Statement {
  fn act(
    &self,
    stream: &mut Stream<'_>,
  ) {
    match self {
      Statement::Expr(expr) => expr.act(stream),
      Statement::Block(block) => block.act_styled(stream, BlockStyle::BRACED),
      Statement::If(ifb) => ifb.act(stream),
      Statement::While(whileb) => whileb.act(stream),
      Statement::For(forb) => forb.act(stream),
      Statement::EmptyLine => stream.line_feed(),
    }
  }
}

impl From<Expr> for Statement {
  fn from(expr: Expr) -> Self {
    Statement::Expr(expr)
  }
}

impl From<Block> for Statement {
  fn from(block: Block) -> Self {
    Statement::Block(block)
  }
}

impl From<IfBlock> for Statement {
  fn from(ifb: IfBlock) -> Self {
    Statement::If(ifb)
  }
}

impl From<WhileLoop> for Statement {
  fn from(whileb: WhileLoop) -> Self {
    Statement::While(whileb)
  }
}

impl From<ForLoop> for Statement {
  fn from(forb: ForLoop) -> Self {
    Statement::For(forb)
  }
}

#[derive(Debug, Copy, Clone)]
struct BlockStyle {
  force_braces: bool,
  /// Only applies when braces are written.
  end_with_line_feed: bool,
  /// Only applies when braces are omitted and the line is already started.
  must_start_on_new_line: bool,
}

impl BlockStyle {
  const AUTO: BlockStyle = BlockStyle {
    force_braces: false,
    end_with_line_feed: true,
    must_start_on_new_line: true,
  };

  const BRACED: BlockStyle = BlockStyle {
    force_braces: true,
    ..BlockStyle::AUTO
  };
}

/// Local variable declarations followed by statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
  vars: Vec<Variable>,
  code: Vec<Statement>,
}

impl Block {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with(
    vars: Vec<Variable>,
    code: Vec<Statement>,
  ) -> Self {
    Self { vars, code }
  }

  pub fn add_code(
    &mut self,
    code: impl Into<Statement>,
  ) {
    self.code.push(code.into());
  }

  pub fn add_var(
    &mut self,
    var: Variable,
  ) {
    self.vars.push(var);
  }

  pub fn vars(&self) -> &[Variable] {
    &self.vars
  }

  pub fn code(&self) -> &[Statement] {
    &self.code
  }

  pub fn needs_braces(&self) -> bool {
    !self.vars.is_empty() || self.code.len() != 1
  }

  /// The nested block when it is this block's only content.
  fn lone_block(&self) -> Option<&Block> {
    match (self.vars.as_slice(), self.code.as_slice()) {
      ([], [Statement::Block(inner)]) => Some(inner),
      _ => None,
    }
  }

  /// An `else` body holding a lone `if` renders as `else if`.
  fn is_else_if(&self) -> bool {
    self.vars.is_empty() && matches!(self.code.as_slice(), [Statement::If(_)])
  }

  fn act_parts(
    &self,
    stream: &mut Stream<'_>,
  ) {
    for var in &self.vars {
      var.act_definition(stream);
      stream.write_line(";");
    }
    if !self.vars.is_empty() {
      stream.line_feed();
    }

    for stmt in &self.code {
      stmt.act(stream);
      if stmt.needs_semicolon() {
        stream.write_line(";");
      }
    }
  }

  fn act_styled(
    &self,
    stream: &mut Stream<'_>,
    style: BlockStyle,
  ) {
    if let Some(inner) = self.lone_block() {
      let style = BlockStyle {
        force_braces: true,
        ..style
      };
      return inner.act_styled(stream, style);
    }

    let braces = style.force_braces || self.needs_braces();
    trace_dbg!(
      stream.config(),
      DebugTrace::Block,
      "{} vars, {} statements, braces: {}",
      self.vars.len(),
      self.code.len(),
      braces
    );

    let mut do_indent = true;
    if braces {
      if stream.is_indented() {
        stream.write(" ");
      }
      stream.write_line("{");
    } else if stream.is_indented() {
      if style.must_start_on_new_line {
        stream.line_feed();
      } else {
        stream.write(" ");
        do_indent = false;
      }
    }

    if do_indent {
      stream.indent();
    }
    self.act_parts(stream);
    if do_indent {
      stream.dedent();
    }

    if braces {
      stream.write("}");
      if style.end_with_line_feed {
        stream.line_feed();
      }
    }
  }

  /// `({ ... })`, closing on the current indentation level.
  pub(crate) fn act_statement_expr(
    &self,
    stream: &mut Stream<'_>,
  ) {
    stream.write_line("({");
    stream.indent();
    self.act_parts(stream);
    stream.dedent();
    stream.write("})");
  }
}

impl Code for Block {
  fn act(
    &self,
    stream: &mut Stream<'_>,
  ) {
    self.act_styled(stream, BlockStyle::AUTO);
  }
}

fn act_condition(
  stream: &mut Stream<'_>,
  keyword: &str,
  cond: &Expr,
) {
  stream.write(keyword);
  stream.write(" (");
  cond.act(stream);
  stream.write(")");
}

/// `if (cond) body [else ...]`.
///
/// The `else` branch can be attached once. An `else` body made of a single
/// `if` renders as an `else if` chain.
#[derive(Debug, Clone, PartialEq)]
pub struct IfBlock {
  pub cond: Expr,
  pub body: Block,
  else_block: Option<Block>,
}

impl IfBlock {
  pub fn new(cond: Expr) -> Self {
    Self::with_body(cond, Block::new())
  }

  pub fn with_body(
    cond: Expr,
    body: Block,
  ) -> Self {
    Self {
      cond,
      body,
      else_block: None,
    }
  }

  pub fn add_code(
    &mut self,
    code: impl Into<Statement>,
  ) {
    self.body.add_code(code);
  }

  pub fn add_var(
    &mut self,
    var: Variable,
  ) {
    self.body.add_var(var);
  }

  pub fn add_else(
    &mut self,
    else_block: Block,
  ) -> Result<(), CodeError> {
    if self.else_block.is_some() {
      return Err(CodeError::MultipleElse);
    }
    self.else_block = Some(else_block);
    Ok(())
  }

  /// Builder form of [`IfBlock::add_else`].
  pub fn with_else(
    mut self,
    else_block: Block,
  ) -> Result<Self, CodeError> {
    self.add_else(else_block)?;
    Ok(self)
  }

  pub fn else_block(&self) -> Option<&Block> {
    self.else_block.as_ref()
  }

  fn act_else(
    else_block: &Block,
    stream: &mut Stream<'_>,
  ) {
    stream.write(" else");
    let style = BlockStyle {
      force_braces: !else_block.is_else_if(),
      end_with_line_feed: true,
      must_start_on_new_line: false,
    };
    else_block.act_styled(stream, style);
  }
}

impl Code for IfBlock {
  fn act(
    &self,
    stream: &mut Stream<'_>,
  ) {
    // Already mid-line means this is the `if` of an `else if`.
    let in_else_chain = stream.is_indented();

    act_condition(stream, "if", &self.cond);
    let style = BlockStyle {
      force_braces: in_else_chain || self.else_block.is_some(),
      end_with_line_feed: self.else_block.is_none(),
      must_start_on_new_line: true,
    };
    self.body.act_styled(stream, style);

    if let Some(else_block) = &self.else_block {
      Self::act_else(else_block, stream);
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
  pub cond: Expr,
  pub body: Block,
}

impl WhileLoop {
  pub fn new(cond: Expr) -> Self {
    Self::with_body(cond, Block::new())
  }

  pub fn with_body(
    cond: Expr,
    body: Block,
  ) -> Self {
    Self { cond, body }
  }

  pub fn add_code(
    &mut self,
    code: impl Into<Statement>,
  ) {
    self.body.add_code(code);
  }

  pub fn add_var(
    &mut self,
    var: Variable,
  ) {
    self.body.add_var(var);
  }
}

impl Code for WhileLoop {
  fn act(
    &self,
    stream: &mut Stream<'_>,
  ) {
    act_condition(stream, "while", &self.cond);
    self.body.act_styled(stream, BlockStyle::AUTO);
  }
}

/// `for (init; cond; step) body`
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
  pub init: Expr,
  pub cond: Expr,
  pub step: Expr,
  pub body: Block,
}

impl ForLoop {
  pub fn new(
    init: Expr,
    cond: Expr,
    step: Expr,
  ) -> Self {
    Self {
      init,
      cond,
      step,
      body: Block::new(),
    }
  }

  pub fn add_code(
    &mut self,
    code: impl Into<Statement>,
  ) {
    self.body.add_code(code);
  }

  pub fn add_var(
    &mut self,
    var: Variable,
  ) {
    self.body.add_var(var);
  }
}

impl Code for ForLoop {
  fn act(
    &self,
    stream: &mut Stream<'_>,
  ) {
    stream.write("for (");
    self.init.act(stream);
    stream.write("; ");
    self.cond.act(stream);
    stream.write("; ");
    self.step.act(stream);
    stream.write(")");
    self.body.act_styled(stream, BlockStyle::AUTO);
  }
}

/// Storage class written in front of a top-level declaration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Linkage {
  #[default]
  Default,
  Static,
  Extern,
}

impl Linkage {
  pub fn prefix(&self) -> &'static str {
    match self {
      Linkage::Default => "",
      Linkage::Static => "static ",
      Linkage::Extern => "extern ",
    }
  }
}

/// A function definition. The body always has braces.
#[derive(Debug, Clone, PartialEq)]
pub struct Func {
  pub decl: CDecl,
  pub body: Block,
  pub linkage: Linkage,
}

impl Func {
  pub fn new(decl: CDecl) -> Self {
    Self::with_body(decl, Block::new())
  }

  pub fn with_body(
    decl: CDecl,
    body: Block,
  ) -> Self {
    Self {
      decl,
      body,
      linkage: Linkage::Default,
    }
  }

  pub fn with_linkage(
    mut self,
    linkage: Linkage,
  ) -> Self {
    self.linkage = linkage;
    self
  }

  pub fn add_code(
    &mut self,
    code: impl Into<Statement>,
  ) {
    self.body.add_code(code);
  }

  pub fn add_var(
    &mut self,
    var: Variable,
  ) {
    self.body.add_var(var);
  }

  /// Reference to this function, e.g. as a call target.
  pub fn to_expr(&self) -> Expr {
    Expr::var(self.decl.name.clone())
  }

  /// Forward declaration with the same linkage.
  pub fn prototype(&self) -> Global {
    Global::new(self.decl.clone()).with_linkage(self.linkage)
  }
}

impl Code for Func {
  fn act(
    &self,
    stream: &mut Stream<'_>,
  ) {
    let decl = self.decl.to_string();
    trace_dbg!(stream.config(), DebugTrace::Decl, "function {}", decl);

    stream.write(self.linkage.prefix());
    stream.write_line(&decl);
    self.body.act_styled(stream, BlockStyle::BRACED);
  }
}

/// A top-level variable definition or prototype.
#[derive(Debug, Clone, PartialEq)]
pub struct Global {
  pub var: Variable,
  pub linkage: Linkage,
}

impl Global {
  pub fn new(decl: CDecl) -> Self {
    Self::from_variable(Variable::new(decl))
  }

  pub fn from_variable(var: Variable) -> Self {
    Self {
      var,
      linkage: Linkage::Default,
    }
  }

  pub fn with_linkage(
    mut self,
    linkage: Linkage,
  ) -> Self {
    self.linkage = linkage;
    self
  }

  pub fn to_variable(&self) -> Expr {
    self.var.to_expr()
  }
}

impl Code for Global {
  fn act(
    &self,
    stream: &mut Stream<'_>,
  ) {
    trace_dbg!(stream.config(), DebugTrace::Decl, "global {}", self.var.decl);

    stream.write(self.linkage.prefix());
    self.var.act_definition(stream);
    stream.write_line(";");
  }
}
