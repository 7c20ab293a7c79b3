//! C type shapes and declarator composition.
//!
//! A [`CType`] carries no name. Applying it to one yields a [`CDecl`] whose
//! text is composed on demand, innermost layer first: every layer wraps the
//! declarator built so far, and the base type is prefixed last.

use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AggregateKind {
  Struct,
  Union,
}

impl AggregateKind {
  pub fn keyword(&self) -> &'static str {
    match self {
      AggregateKind::Struct => "struct",
      AggregateKind::Union => "union",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CType {
  Primitive(String),
  Pointer(Box<CType>),
  Array {
    element: Box<CType>,
    size: Option<String>,
  },
  Function {
    ret: Box<CType>,
    args: Vec<CDecl>,
    variadic: bool,
  },
  /// `fields: None` is a reference to an already defined tag.
  Aggregate {
    kind: AggregateKind,
    tag: Option<String>,
    fields: Option<Vec<CDecl>>,
  },
}

impl CType {
  pub fn primitive(name: impl Into<String>) -> Self {
    CType::Primitive(name.into())
  }

  pub fn pointer(inner: CType) -> Self {
    CType::Pointer(Box::new(inner))
  }

  pub fn array(
    element: CType,
    size: impl ToString,
  ) -> Self {
    CType::Array {
      element: Box::new(element),
      size: Some(size.to_string()),
    }
  }

  /// `T name[]`
  pub fn unsized_array(element: CType) -> Self {
    CType::Array {
      element: Box::new(element),
      size: None,
    }
  }

  /// Pass [`void_args`] for a function taking no arguments.
  pub fn function(
    ret: CType,
    args: Vec<CDecl>,
  ) -> Self {
    CType::Function {
      ret: Box::new(ret),
      args,
      variadic: false,
    }
  }

  pub fn variadic_function(
    ret: CType,
    args: Vec<CDecl>,
  ) -> Self {
    CType::Function {
      ret: Box::new(ret),
      args,
      variadic: true,
    }
  }

  pub fn structure(
    tag: Option<&str>,
    fields: Vec<CDecl>,
  ) -> Self {
    Self::aggregate(AggregateKind::Struct, tag, Some(fields))
  }

  pub fn union(
    tag: Option<&str>,
    fields: Vec<CDecl>,
  ) -> Self {
    Self::aggregate(AggregateKind::Union, tag, Some(fields))
  }

  /// `struct tag`, without a field list.
  pub fn struct_ref(tag: &str) -> Self {
    Self::aggregate(AggregateKind::Struct, Some(tag), None)
  }

  /// `union tag`, without a field list.
  pub fn union_ref(tag: &str) -> Self {
    Self::aggregate(AggregateKind::Union, Some(tag), None)
  }

  fn aggregate(
    kind: AggregateKind,
    tag: Option<&str>,
    fields: Option<Vec<CDecl>>,
  ) -> Self {
    CType::Aggregate {
      kind,
      tag: tag.map(str::to_string),
      fields,
    }
  }

  /// Declare `name` as this type.
  pub fn decl(
    &self,
    name: impl Into<String>,
  ) -> CDecl {
    CDecl::new(self.clone(), name)
  }

  /// This type applied to an empty name, as used in casts and prototypes.
  pub fn abstract_decl(&self) -> CDecl {
    CDecl::nameless(self.clone())
  }

  /// Array and function declarators bind tighter than a pointer's `*`.
  pub fn is_suffix(&self) -> bool {
    matches!(self, CType::Array { .. } | CType::Function { .. })
  }

  /// Wrap `decl` in this layer and hand the result to the next one out.
  pub fn make(
    &self,
    decl: String,
  ) -> String {
    match self {
      CType::Primitive(name) => join_nonempty(name, &decl),
      CType::Pointer(inner) => {
        let mut wrapped = format!("*{}", decl);
        if inner.is_suffix() {
          wrapped = format!("({})", wrapped);
        }
        inner.make(wrapped)
      },
      CType::Array { element, size } => element.make(format!("{}[{}]", decl, size.as_deref().unwrap_or(""))),
      CType::Function { ret, args, variadic } => {
        let mut params: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        if *variadic {
          params.push("...".to_string());
        }
        ret.make(format!("{}({})", decl, params.join(", ")))
      },
      CType::Aggregate { kind, tag, fields } => {
        let mut head = kind.keyword().to_string();
        if let Some(tag) = tag {
          head.push(' ');
          head.push_str(tag);
        }

        if let Some(fields) = fields {
          head.push_str(" {");
          for field in fields {
            head.push(' ');
            head.push_str(&field.to_string());
            head.push(';');
          }
          head.push_str(" }");
        }

        join_nonempty(&head, &decl)
      },
    }
  }
}

fn join_nonempty(
  base: &str,
  decl: &str,
) -> String {
  match (base.is_empty(), decl.is_empty()) {
    (_, true) => base.to_string(),
    (true, false) => decl.to_string(),
    (false, false) => format!("{} {}", base, decl),
  }
}

/// A type paired with the name it declares. The name may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CDecl {
  pub ctype: CType,
  pub name: String,
}

impl CDecl {
  pub fn new(
    ctype: CType,
    name: impl Into<String>,
  ) -> Self {
    Self {
      ctype,
      name: name.into(),
    }
  }

  pub fn nameless(ctype: CType) -> Self {
    Self::new(ctype, "")
  }

  pub fn is_abstract(&self) -> bool {
    self.name.is_empty()
  }
}

impl fmt::Display for CDecl {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.write_str(&self.ctype.make(self.name.clone()))
  }
}

/// The `(void)` argument list of a function taking no arguments.
pub fn void_args() -> Vec<CDecl> {
  vec![CDecl::nameless(CType::primitive("void"))]
}
