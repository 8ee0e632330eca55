//! Rendering of type expressions back to Go source text.

use unitmaker_go::TypeExpr;

/// Render a type expression as it would be written in Go.
///
/// Shapes that are not modeled structurally render as their original source
/// text, so this never fails.
pub fn render_type(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Ident(name) => name.clone(),
        TypeExpr::Pointer(inner) => format!("*{}", render_type(inner)),
        TypeExpr::Slice(inner) => format!("[]{}", render_type(inner)),
        TypeExpr::Selector { base, member } => format!("{}.{}", render_type(base), member),
        TypeExpr::Other(raw) => raw.clone(),
    }
}
