//! AST integration tests.
//!
//! Builds small trees with `AstBuilder` and checks what `finish_file`
//! computes: parents, positions, context flags and module detection.

use tscheck_ast::utilities::*;
use tscheck_ast::*;
use tscheck_diagnostics::{messages, Diagnostic};

/// Helper: `function name(a) { statements }` with optional modifiers.
fn function_with(b: &mut AstBuilder, modifiers: &[SyntaxKind], name: &str, statements: Vec<NodeId>) -> NodeId {
    let mods = b.modifiers(modifiers);
    let param = b.parameter("a", None);
    b.function_declaration(mods, name, vec![param], Some(statements))
}

fn span_text(ast: &Ast, id: NodeId) -> String {
    let span = ast.error_span(id);
    let text = &ast.file_of(id).text;
    text[span.start as usize..span.end() as usize].to_string()
}

// ============================================================================
// Positions
// ============================================================================

#[test]
fn test_error_span_of_function_is_its_name() {
    let mut b = AstBuilder::new();
    let func = function_with(&mut b, &[], "f", vec![]);
    b.finish_file("a.ts", vec![func]);
    let ast = b.build();
    assert_eq!(span_text(&ast, func), "f");
}

#[test]
fn test_return_statement_span_is_keyword() {
    let mut b = AstBuilder::new();
    let one = b.numeric_literal("1");
    let ret = b.return_statement(Some(one));
    let func = function_with(&mut b, &[], "f", vec![ret]);
    b.finish_file("a.ts", vec![func]);
    let ast = b.build();
    assert_eq!(span_text(&ast, ret), "return");
    assert_eq!(ast.source_text(ret), "return 1");
}

#[test]
fn test_parameter_list_range_covers_parameters() {
    let mut b = AstBuilder::new();
    let func = function_with(&mut b, &[], "f", vec![]);
    b.finish_file("a.ts", vec![func]);
    let ast = b.build();
    let params = ast.parameters(func).expect("function has parameters");
    let param = params.first().expect("one parameter");
    assert!(params.pos <= ast.range(param).pos, "list starts before {:?}", ast.range(param));
    assert_eq!(params.end, ast.range(param).end);
}

#[test]
fn test_children_nest_inside_parent_ranges() {
    let mut b = AstBuilder::new();
    let x = b.identifier("x");
    let y = b.identifier("y");
    let sum = b.binary(x, SyntaxKind::PlusToken, y);
    let stmt = b.expression_statement(sum);
    let file = b.finish_file("a.ts", vec![stmt]);
    let ast = b.build();
    for child in ast.children(sum) {
        assert!(
            ast.range(sum).contains_range(ast.range(child)),
            "child {:?} outside {:?}",
            ast.range(child),
            ast.range(sum)
        );
    }
    assert_eq!(ast.range(file).end as usize, ast.source_file(file).text.len());
}

#[test]
fn test_line_break_before_moves_statement_to_next_line() {
    let mut b = AstBuilder::new();
    let first = b.simple_variable(NodeFlags::LET, "a", None);
    let second = b.simple_variable(NodeFlags::LET, "b", None);
    b.line_break_before(second);
    b.finish_file("a.ts", vec![first, second]);
    let ast = b.build();
    assert_eq!(ast.line_of(first, ast.token_pos(first)), 0);
    assert_eq!(ast.line_of(second, ast.token_pos(second)), 1);
}

#[test]
fn test_trailing_comma_is_kept() {
    let mut b = AstBuilder::new();
    let one = b.numeric_literal("1");
    let array = b.list_with_trailing_comma(SyntaxKind::ArrayLiteralExpression, vec![one]);
    let stmt = b.expression_statement(array);
    b.finish_file("a.ts", vec![stmt]);
    let ast = b.build();
    let elements = ast.elements(array).expect("array has elements");
    assert!(elements.has_trailing_comma);
    assert!(elements.end > ast.range(one).end);
}

// ============================================================================
// Context Flags
// ============================================================================

#[test]
fn test_async_function_body_has_await_context() {
    let mut b = AstBuilder::new();
    let x = b.identifier("x");
    let await_expr = b.wrap(SyntaxKind::AwaitExpression, x);
    let stmt = b.expression_statement(await_expr);
    let func = function_with(&mut b, &[SyntaxKind::AsyncKeyword], "f", vec![stmt]);
    b.finish_file("a.ts", vec![func]);
    let ast = b.build();
    assert!(ast.flags(await_expr).contains(NodeFlags::AWAIT_CONTEXT));
    assert!(!ast.flags(func).contains(NodeFlags::AWAIT_CONTEXT));
    let name = ast.name(func).expect("named function");
    assert!(!ast.flags(name).contains(NodeFlags::AWAIT_CONTEXT));
    let param = ast.parameters(func).and_then(|p| p.first()).expect("parameter");
    assert!(ast.flags(param).contains(NodeFlags::AWAIT_CONTEXT));
}

#[test]
fn test_generator_body_has_yield_context() {
    let mut b = AstBuilder::new();
    let yield_expr = b.yield_expression(false, None);
    let stmt = b.expression_statement(yield_expr);
    let body = b.block(vec![stmt]);
    let name = b.identifier("g");
    let asterisk = b.token(SyntaxKind::AsteriskToken);
    let func = b.function_like(
        SyntaxKind::FunctionDeclaration,
        FunctionLikeData {
            asterisk_token: Some(asterisk),
            name: Some(name),
            body: Some(body),
            ..Default::default()
        },
    );
    b.finish_file("a.ts", vec![func]);
    let ast = b.build();
    assert!(ast.flags(yield_expr).contains(NodeFlags::YIELD_CONTEXT));
    assert!(!ast.flags(yield_expr).contains(NodeFlags::AWAIT_CONTEXT));
}

#[test]
fn test_top_level_statements_are_not_in_await_context() {
    let mut b = AstBuilder::new();
    let x = b.identifier("x");
    let await_expr = b.wrap(SyntaxKind::AwaitExpression, x);
    let stmt = b.expression_statement(await_expr);
    let import = b.import_declaration(None, None, "./m");
    b.finish_file("a.ts", vec![import, stmt]);
    let ast = b.build();
    assert!(!ast.flags(await_expr).contains(NodeFlags::AWAIT_CONTEXT));
}

#[test]
fn test_static_block_has_await_context() {
    let mut b = AstBuilder::new();
    let x = b.identifier("x");
    let stmt = b.expression_statement(x);
    let block = b.class_static_block(vec![stmt]);
    let class = b.class_declaration(None, "C", vec![block]);
    b.finish_file("a.ts", vec![class]);
    let ast = b.build();
    assert!(ast.flags(x).contains(NodeFlags::AWAIT_CONTEXT));
    assert!(!ast.flags(x).contains(NodeFlags::YIELD_CONTEXT));
}

#[test]
fn test_declare_makes_subtree_ambient() {
    let mut b = AstBuilder::new();
    let inner = b.simple_variable(NodeFlags::CONST, "x", None);
    let ns_name = b.identifier("N");
    let body = b.module_block(vec![inner]);
    let mods = b.modifiers(&[SyntaxKind::DeclareKeyword]);
    let ns = b.module_declaration(mods, ns_name, Some(body), NodeFlags::NAMESPACE);
    let outside = b.simple_variable(NodeFlags::LET, "y", None);
    b.finish_file("a.ts", vec![ns, outside]);
    let ast = b.build();
    assert!(ast.flags(ns).contains(NodeFlags::AMBIENT));
    assert!(is_in_ambient_context(&ast, inner));
    assert!(!is_in_ambient_context(&ast, outside));
    assert!(ast.modifier_flags(ns).contains(ModifierFlags::AMBIENT));
}

#[test]
fn test_declaration_file_is_ambient() {
    let mut b = AstBuilder::new();
    let stmt = b.simple_variable(NodeFlags::CONST, "x", None);
    let file = b.finish_file("lib.d.ts", vec![stmt]);
    let ast = b.build();
    assert!(ast.source_file(file).is_declaration_file);
    assert!(is_in_ambient_context(&ast, stmt));
}

// ============================================================================
// Modules
// ============================================================================

#[test]
fn test_export_modifier_makes_external_module() {
    let mut b = AstBuilder::new();
    let mods = b.modifiers(&[SyntaxKind::ExportKeyword]);
    let func = b.function_declaration(mods, "f", vec![], Some(vec![]));
    let file = b.finish_file("a.ts", vec![func]);
    let ast = b.build();
    assert_eq!(ast.source_file(file).external_module_indicator, Some(func));
    assert!(is_external_module(&ast, file));
}

#[test]
fn test_script_has_no_module_indicator() {
    let mut b = AstBuilder::new();
    let stmt = b.simple_variable(NodeFlags::NONE, "x", None);
    let file = b.finish_file("a.ts", vec![stmt]);
    let ast = b.build();
    assert!(is_global_source_file(&ast, file));
}

#[test]
fn test_files_are_indexed_in_order() {
    let mut b = AstBuilder::new();
    let first = b.finish_file("a.ts", vec![]);
    let second = b.finish_file("b.ts", vec![]);
    let ast = b.build();
    assert_eq!(ast.files(), &[first, second]);
    assert_eq!(ast.source_file(second).file_index, 1);
}

#[test]
fn test_parse_diagnostics_attach_to_next_file() {
    let mut b = AstBuilder::new();
    b.add_parse_diagnostic(Diagnostic::new(&messages::_0_EXPECTED, &[";"]));
    let file = b.finish_file("a.ts", vec![]);
    let clean = b.finish_file("b.ts", vec![]);
    let ast = b.build();
    assert!(ast.source_file(file).has_parse_diagnostics());
    assert!(!ast.source_file(clean).has_parse_diagnostics());
}

// ============================================================================
// Utilities
// ============================================================================

#[test]
fn test_top_level_context_of_function_name() {
    let mut b = AstBuilder::new();
    let x = b.identifier("x");
    let stmt = b.expression_statement(x);
    let func = function_with(&mut b, &[], "f", vec![stmt]);
    b.finish_file("a.ts", vec![func]);
    let ast = b.build();
    let name = ast.name(func).expect("named function");
    assert!(is_in_top_level_context(&ast, name));
    assert!(!is_in_top_level_context(&ast, x));
}

#[test]
fn test_iife_is_found_through_parentheses() {
    let mut b = AstBuilder::new();
    let func = b.function_expression(None, None, vec![], vec![]);
    let parens = b.wrap(SyntaxKind::ParenthesizedExpression, func);
    let call = b.call(parens, vec![]);
    let stmt = b.expression_statement(call);
    b.finish_file("a.ts", vec![stmt]);
    let ast = b.build();
    assert_eq!(get_immediately_invoked_function_expression(&ast, func), Some(call));
}

#[test]
fn test_type_reference_name_is_part_of_type() {
    let mut b = AstBuilder::new();
    let type_ref = b.type_reference("T", vec![]);
    let x = b.identifier("x");
    let decl = b.variable_declaration(x, Some(type_ref), None);
    let stmt = b.variable_statement(None, NodeFlags::LET, vec![decl]);
    b.finish_file("a.ts", vec![stmt]);
    let ast = b.build();
    let name = ast.children(type_ref)[0];
    assert!(is_part_of_type_node(&ast, name));
    assert!(!is_part_of_type_node(&ast, x));
}
