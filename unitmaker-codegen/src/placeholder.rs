//! Placeholders for type declarations.

use unitmaker_go::TypeDecl;

/// Comment line left in place of tests for a type's methods.
///
/// Methods are not resolved to their receiver type, so the placeholder only
/// names the type.
pub fn generate_placeholder(decl: &TypeDecl) -> String {
    format!("// TODO: Generate tests for methods of type {}", decl.name)
}
