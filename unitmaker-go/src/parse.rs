//! Go source parsing.
//!
//! Builds a [`SourceFile`] from Go source text with tree-sitter. Only the
//! top-level nodes of the syntax tree are visited; function bodies are never
//! inspected.

use std::str::FromStr;

use tree_sitter::{Language, Node, Parser};

use crate::{
    Error, Result,
    error::SourceContext,
    syntax::{
        Declaration, FunctionDecl, OtherDecl, OtherKind, Param, Receiver, SourceFile, TypeDecl,
        TypeExpr,
    },
};

impl FromStr for SourceFile {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_str_with_filename(s, "main.go")
    }
}

/// Parse Go source text, using `filename` for error reporting.
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<SourceFile> {
    let ctx = SourceContext::new(content, filename);

    let language: Language = tree_sitter_go::LANGUAGE.into();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|source| Box::new(Error::Language { source }))?;

    let tree = parser
        .parse(content, None)
        .ok_or_else(|| ctx.syntax_error("no syntax tree was produced"))?;
    let root = tree.root_node();

    if root.has_error() {
        let node = first_error(root).unwrap_or(root);
        let message = if node.is_missing() {
            format!("missing `{}`", node.kind())
        } else {
            let context = node.parent().unwrap_or(node);
            format!("unexpected syntax in {}", describe(context.kind()))
        };
        return Err(ctx.syntax_error_at(message, node.byte_range()));
    }

    Extractor { src: content, ctx: &ctx }.source_file(root)
}

/// Depth-first search for the first `ERROR` or `MISSING` node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    None
}

struct Extractor<'a> {
    src: &'a str,
    ctx: &'a SourceContext,
}

impl Extractor<'_> {
    fn text(&self, node: Node<'_>) -> &str {
        &self.src[node.byte_range()]
    }

    fn required_field<'t>(&self, node: Node<'t>, field: &str) -> Result<Node<'t>> {
        node.child_by_field_name(field).ok_or_else(|| {
            self.ctx.syntax_error_at(
                format!("{} without a {}", describe(node.kind()), field),
                node.byte_range(),
            )
        })
    }

    fn source_file(&self, root: Node<'_>) -> Result<SourceFile> {
        let mut package = None;
        let mut declarations = Vec::new();

        let mut cursor = root.walk();
        for node in root.named_children(&mut cursor) {
            let kind = node.kind();
            if kind == "comment" {
                continue;
            }
            if kind == "package_clause" {
                package = Some(self.package_name(node)?);
                continue;
            }
            if package.is_none() {
                return Err(self.ctx.missing_package_error());
            }

            match kind {
                "function_declaration" | "method_declaration" => {
                    declarations.push(Declaration::Function(self.function(node)?));
                }
                "type_declaration" => {
                    for decl in self.type_specs(node)? {
                        declarations.push(Declaration::Type(decl));
                    }
                }
                "import_declaration" => declarations.push(other(OtherKind::Import)),
                "const_declaration" => declarations.push(other(OtherKind::Const)),
                "var_declaration" => declarations.push(other(OtherKind::Var)),
                _ => {
                    return Err(self.ctx.syntax_error_at(
                        format!("unexpected {} outside of a function body", describe(kind)),
                        node.byte_range(),
                    ));
                }
            }
        }

        let package = package.ok_or_else(|| self.ctx.missing_package_error())?;
        Ok(SourceFile {
            package,
            declarations,
        })
    }

    fn package_name(&self, clause: Node<'_>) -> Result<String> {
        let mut cursor = clause.walk();
        let ident = clause
            .named_children(&mut cursor)
            .find(|n| n.kind() == "package_identifier");
        match ident {
            Some(ident) => Ok(self.text(ident).to_string()),
            None => Err(self.ctx.missing_package_error()),
        }
    }

    fn function(&self, node: Node<'_>) -> Result<FunctionDecl> {
        let name = self.text(self.required_field(node, "name")?).to_string();

        let receiver = match node.child_by_field_name("receiver") {
            Some(list) => self.receiver(list),
            None => None,
        };
        let params = match node.child_by_field_name("parameters") {
            Some(list) => self.params(list),
            None => Vec::new(),
        };
        let results = match node.child_by_field_name("result") {
            Some(result) => self.results(result),
            None => Vec::new(),
        };

        Ok(FunctionDecl {
            name,
            receiver,
            params,
            results,
        })
    }

    fn receiver(&self, list: Node<'_>) -> Option<Receiver> {
        let mut cursor = list.walk();
        let decl = list
            .named_children(&mut cursor)
            .find(|n| n.kind() == "parameter_declaration")?;
        let ty = self.type_expr(decl.child_by_field_name("type")?);
        let name = decl
            .child_by_field_name("name")
            .map(|n| self.text(n).to_string());
        Some(Receiver { name, ty })
    }

    fn params(&self, list: Node<'_>) -> Vec<Param> {
        let mut params = Vec::new();
        let mut cursor = list.walk();
        for decl in list.named_children(&mut cursor) {
            let Some(ty_node) = decl.child_by_field_name("type") else {
                continue;
            };
            let ty = self.type_expr(ty_node);

            match decl.kind() {
                "parameter_declaration" => {
                    let names = self.names(decl);
                    if names.is_empty() {
                        params.push(Param::unnamed(ty));
                    } else {
                        params.extend(names.into_iter().map(|name| Param::new(name, ty.clone())));
                    }
                }
                "variadic_parameter_declaration" => {
                    let name = decl
                        .child_by_field_name("name")
                        .map(|n| self.text(n).to_string());
                    params.push(Param {
                        name,
                        ty,
                        variadic: true,
                    });
                }
                _ => {}
            }
        }
        params
    }

    fn results(&self, result: Node<'_>) -> Vec<TypeExpr> {
        if result.kind() != "parameter_list" {
            return vec![self.type_expr(result)];
        }

        let mut results = Vec::new();
        let mut cursor = result.walk();
        for decl in result.named_children(&mut cursor) {
            if decl.kind() != "parameter_declaration" {
                continue;
            }
            let Some(ty_node) = decl.child_by_field_name("type") else {
                continue;
            };
            let ty = self.type_expr(ty_node);
            let count = self.names(decl).len().max(1);
            results.extend(std::iter::repeat_n(ty, count));
        }
        results
    }

    fn names(&self, decl: Node<'_>) -> Vec<String> {
        let mut cursor = decl.walk();
        decl.children_by_field_name("name", &mut cursor)
            .map(|n| self.text(n).to_string())
            .collect()
    }

    fn type_specs(&self, node: Node<'_>) -> Result<Vec<TypeDecl>> {
        let mut decls = Vec::new();
        let mut cursor = node.walk();
        for spec in node.named_children(&mut cursor) {
            let alias = match spec.kind() {
                "type_spec" => false,
                "type_alias" => true,
                _ => continue,
            };
            let name = self.text(self.required_field(spec, "name")?).to_string();
            let ty = self.type_expr(self.required_field(spec, "type")?);
            decls.push(TypeDecl { name, alias, ty });
        }
        Ok(decls)
    }

    fn type_expr(&self, node: Node<'_>) -> TypeExpr {
        let modeled = match node.kind() {
            "type_identifier" => Some(TypeExpr::ident(self.text(node))),
            "pointer_type" => node
                .named_child(0)
                .map(|inner| TypeExpr::pointer(self.type_expr(inner))),
            "slice_type" => node
                .child_by_field_name("element")
                .map(|inner| TypeExpr::slice(self.type_expr(inner))),
            "qualified_type" => {
                match (
                    node.child_by_field_name("package"),
                    node.child_by_field_name("name"),
                ) {
                    (Some(pkg), Some(name)) => Some(TypeExpr::selector(
                        TypeExpr::ident(self.text(pkg)),
                        self.text(name),
                    )),
                    _ => None,
                }
            }
            _ => None,
        };
        modeled.unwrap_or_else(|| TypeExpr::other(self.text(node)))
    }
}

fn other(kind: OtherKind) -> Declaration {
    Declaration::Other(OtherDecl { kind })
}

/// Human readable form of a tree-sitter node kind.
fn describe(kind: &str) -> String {
    kind.replace('_', " ")
}
