#![allow(dead_code)]

use cgen_c::{
  c_source, void_args, BinaryOp, Block, CType, Define, Expr, ForLoop, Func, Global, IfBlock, Linkage, Statement,
  UnaryOp, Variable, WhileLoop,
};
use cgen_config::{CHeader, CgenConfig, SourceConfig};
use cgen_core::{Source, EMPTY_LINE};

/// Four-space layout so snapshots stay readable.
pub fn config() -> CgenConfig {
  CgenConfig::new(SourceConfig::new("    ", true))
}

pub fn int() -> CType {
  CType::primitive("int")
}

pub fn source() -> Source {
  c_source(config())
}

pub fn source_with_headers(headers: &[CHeader]) -> Source {
  let mut config = config();
  config.headers = headers.to_vec();
  c_source(config)
}

/// `int main(void)` with the given statements.
pub fn main_with(code: Vec<Statement>) -> Func {
  let mut main = Func::new(CType::function(int(), void_args()).decl("main"));
  for stmt in code {
    main.add_code(stmt);
  }
  main
}

pub fn ret(value: Expr) -> Statement {
  Expr::unary(UnaryOp::Return, value).into()
}

// =============================================================================
// Programs shared by the golden and compiler tests
// =============================================================================

pub fn hello_world() -> Source {
  let mut source = source_with_headers(&[CHeader::system("stdio.h")]);

  let printf = Expr::call(Expr::var("printf"), vec![Expr::string("Hello, World!\n")]);
  source.add_element(main_with(vec![printf.into(), ret(Expr::int(0))]));
  source
}

pub fn linked_list_sum() -> Source {
  let node = CType::structure(
    Some("node"),
    vec![int().decl("value"), CType::pointer(CType::struct_ref("node")).decl("next")],
  );
  let list = CType::pointer(CType::struct_ref("node")).decl("list");

  let mut walk = WhileLoop::new(Expr::var("list"));
  walk.add_code(Expr::binary(
    BinaryOp::AddAssign,
    Expr::var("total"),
    Expr::arrow(Expr::var("list"), "value"),
  ));
  walk.add_code(Expr::binary(
    BinaryOp::Assign,
    Expr::var("list"),
    Expr::arrow(Expr::var("list"), "next"),
  ));

  let mut sum = Func::new(CType::function(int(), vec![list]).decl("sum"));
  sum.add_var(Variable::with_value(int().decl("total"), Expr::int(0)));
  sum.add_code(walk);
  sum.add_code(Expr::unary(UnaryOp::Return, Expr::var("total")));

  let mut source = source();
  source.add_element(Global::new(node.abstract_decl()));
  source.add_element(sum);
  source
}

pub fn else_if_chain() -> Source {
  let x = || Expr::var("x");

  let mut negative = IfBlock::new(Expr::binary(BinaryOp::LessThan, x(), Expr::int(0)));
  negative.add_code(ret(Expr::int(-1)));

  let mut zero = IfBlock::new(Expr::binary(BinaryOp::Equal, x(), Expr::int(0)));
  zero.add_code(ret(Expr::int(0)));
  zero.add_else(Block::with(vec![], vec![ret(Expr::int(1))])).unwrap();

  negative.add_else(Block::with(vec![], vec![zero.into()])).unwrap();

  let mut classify = Func::new(CType::function(int(), vec![int().decl("x")]).decl("classify"));
  classify.add_code(negative);
  let classify = classify.with_linkage(Linkage::Static);

  let mut source = source();
  source.add_element(classify.prototype());
  source.add_element(classify);
  source
}

pub fn function_pointer_loop() -> Source {
  let size_t = CType::primitive("size_t");
  let fn_arg = CType::pointer(CType::function(int(), vec![int().abstract_decl()])).decl("fn");
  let values = CType::pointer(int()).decl("values");
  let count = size_t.decl("count");

  let i = || Expr::var("i");
  let mut each = ForLoop::new(
    Expr::binary(BinaryOp::Assign, i(), Expr::int(0)),
    Expr::binary(BinaryOp::LessThan, i(), Expr::var("count")),
    Expr::unary(UnaryOp::PostIncrement, i()),
  );
  let slot = || Expr::subscript(Expr::var("values"), i());
  each.add_code(Expr::binary(
    BinaryOp::Assign,
    slot(),
    Expr::call(Expr::var("fn"), vec![slot()]),
  ));

  let mut apply = Func::new(CType::function(CType::primitive("void"), vec![fn_arg, values, count]).decl("apply"));
  apply.add_var(Variable::new(size_t.decl("i")));
  apply.add_code(each);

  let mut source = source_with_headers(&[CHeader::system("stddef.h")]);
  source.add_element(apply);
  source
}

pub fn globals(headers: &[CHeader]) -> Source {
  let mut config = config();
  config.source.separate_elements = false;
  config.headers = headers.to_vec();

  let name = Variable::with_value(CType::pointer(CType::primitive("const char")).decl("name"), Expr::string("cgen"));
  let table = Variable::with_value(
    CType::array(int(), 3).decl("table"),
    Expr::compound(vec![Expr::int(1), Expr::int(2), Expr::int(3)]),
  );

  let mut source = c_source(config);
  source.add_element(Define::with_value("TABLE_LEN", Expr::int(3)));
  source.add_element(EMPTY_LINE);
  source.add_element(Global::new(int().decl("counter")).with_linkage(Linkage::Extern));
  source.add_element(Global::from_variable(name).with_linkage(Linkage::Static));
  source.add_element(Global::from_variable(table));
  source
}

pub fn statement_expression() -> Source {
  let mut max = Block::new();
  max.add_var(Variable::with_value(int().decl("_a"), Expr::var("a")));
  max.add_var(Variable::with_value(int().decl("_b"), Expr::var("b")));
  max.add_code(Expr::raw("_a > _b ? _a : _b"));

  let mut main = main_with(vec![ret(Expr::statement(max))]);
  main.add_var(Variable::with_value(int().decl("a"), Expr::int(1)));
  main.add_var(Variable::with_value(int().decl("b"), Expr::int(2)));

  let mut source = source();
  source.add_element(main);
  source
}
