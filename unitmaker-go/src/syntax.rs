//! Declaration model extracted from a Go source file.
//!
//! These types are read-only snapshots of the top-level declarations of one
//! file. They carry just enough structure to generate test stubs; anything the
//! generator does not need is either dropped or kept as raw source text.

use serde::Serialize;

/// A parsed Go source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// Name from the `package` clause.
    pub package: String,
    /// Top-level declarations in source order.
    pub declarations: Vec<Declaration>,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decl", rename_all = "snake_case")]
pub enum Declaration {
    /// `func Name(...) ...` or a method `func (r T) Name(...) ...`.
    Function(FunctionDecl),
    /// One `type Name ...` spec.
    Type(TypeDecl),
    /// Imports, constants and variables.
    Other(OtherDecl),
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDecl {
    pub name: String,
    /// Set for methods only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<Receiver>,
    /// Parameters, one entry per declared name.
    pub params: Vec<Param>,
    /// Result types, one entry per returned value.
    pub results: Vec<TypeExpr>,
}

impl FunctionDecl {
    /// Create a plain function declaration with no parameters or results.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: None,
            params: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Add a parameter.
    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a result type.
    pub fn result(mut self, ty: TypeExpr) -> Self {
        self.results.push(ty);
        self
    }

    /// Set the method receiver.
    pub fn receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn is_method(&self) -> bool {
        self.receiver.is_some()
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}

/// A single function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    /// `None` for unnamed parameters such as `func(int)`.
    pub name: Option<String>,
    pub ty: TypeExpr,
    /// `...T` parameter; `ty` holds the element type `T`.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub variadic: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: Some(name.into()),
            ty,
            variadic: false,
        }
    }

    pub fn unnamed(ty: TypeExpr) -> Self {
        Self {
            name: None,
            ty,
            variadic: false,
        }
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }
}

/// The receiver of a method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receiver {
    pub name: Option<String>,
    pub ty: TypeExpr,
}

/// A named type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDecl {
    pub name: String,
    /// `type A = B` rather than `type A B`.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub alias: bool,
    pub ty: TypeExpr,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            alias: false,
            ty,
        }
    }
}

/// A declaration that produces no test output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OtherDecl {
    pub kind: OtherKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OtherKind {
    Import,
    Const,
    Var,
}

impl OtherKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Const => "const",
            Self::Var => "var",
        }
    }
}

/// A type expression as written in source.
///
/// Only the shapes the generator renders structurally are modeled; every
/// other shape keeps its source text in [`TypeExpr::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TypeExpr {
    /// `int`, `Foo`
    Ident(String),
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T`
    Slice(Box<TypeExpr>),
    /// `pkg.Type`
    Selector { base: Box<TypeExpr>, member: String },
    /// Maps, channels, function types, generics, arrays, literals, ...
    Other(String),
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn slice(inner: TypeExpr) -> Self {
        Self::Slice(Box::new(inner))
    }

    pub fn selector(base: TypeExpr, member: impl Into<String>) -> Self {
        Self::Selector {
            base: Box::new(base),
            member: member.into(),
        }
    }

    pub fn other(raw: impl Into<String>) -> Self {
        Self::Other(raw.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_builder() {
        let f = FunctionDecl::new("Add")
            .param(Param::new("a", TypeExpr::ident("int")))
            .param(Param::unnamed(TypeExpr::ident("string")).variadic())
            .result(TypeExpr::ident("int"));

        assert_eq!(f.params.len(), 2);
        assert!(f.params[1].variadic);
        assert_eq!(f.params[1].name, None);
        assert!(f.has_results());
        assert!(!f.is_method());
    }

    #[test]
    fn test_serialize_declaration() {
        let decl = Declaration::Function(
            FunctionDecl::new("Get").param(Param::new("p", TypeExpr::pointer(TypeExpr::ident("T")))),
        );
        let json = serde_json::to_value(&decl).unwrap();
        assert_eq!(json["decl"], "function");
        assert_eq!(json["name"], "Get");
        assert_eq!(json["params"][0]["ty"]["kind"], "pointer");
        assert_eq!(json["params"][0]["ty"]["value"]["value"], "T");
        assert!(json.get("receiver").is_none());
    }
}
