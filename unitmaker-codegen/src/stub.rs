//! Test stub generation for function declarations.

use unitmaker_go::{FunctionDecl, TypeExpr};

use crate::{
    go::TestFunc,
    naming::{MockNames, result_holders, test_name},
    type_render::render_type,
};

/// Trailing comment on every mock parameter declaration.
pub const MOCK_TODO: &str = "TODO: Add appropriate mock value";

/// Build the test stub for one function declaration.
///
/// The stub declares one zero-valued variable per parameter, calls the
/// function with them and, when the function returns values, captures them
/// and leaves a placeholder where the assertions belong.
pub fn generate_stub(function: &FunctionDecl) -> TestFunc {
    let name = test_name(&function.name);
    let holders = result_holders(function.results.len());

    let mut stub = TestFunc::new(&name).doc(format!(
        "{} tests the {} function.",
        name, function.name
    ));

    let mut names = MockNames::new(
        &function.name,
        &holders,
        function.params.iter().filter_map(|p| p.name.as_deref()),
    );
    let mut args = Vec::with_capacity(function.params.len());
    for (position, param) in function.params.iter().enumerate() {
        let var = names.assign(param.name.as_deref(), position);
        let ty = if param.variadic {
            render_type(&TypeExpr::slice(param.ty.clone()))
        } else {
            render_type(&param.ty)
        };
        stub = stub.line(format!("var {var} {ty} // {MOCK_TODO}"));
        args.push(if param.variadic {
            format!("{var}...")
        } else {
            var
        });
    }

    let call = format!("{}({})", function.name, args.join(", "));
    if !function.has_results() {
        return stub.line(call);
    }

    let stub = stub
        .line(format!("{} := {}", holders.join(", "), call))
        .comment(format!("TODO: assert on the result of {}", function.name));
    // Go rejects unused locals, so keep the generated file compiling.
    holders
        .iter()
        .fold(stub, |stub, holder| stub.line(format!("_ = {holder}")))
}
