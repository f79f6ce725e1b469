//! Checker driver tests.
//!
//! These go through `Checker::check_program` and the public type
//! queries: name resolution failures, types of type nodes and the order
//! diagnostics come back in.

use tscheck_ast::*;
use tscheck_checker::types::TypeFlags;
use tscheck_checker::{Checker, Program};
use tscheck_diagnostics::{messages, Diagnostic};
use tscheck_options::CompilerOptions;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Helper: bind one file with default options.
fn program(mut b: AstBuilder, statements: Vec<NodeId>) -> Program {
    init_tracing();
    b.finish_file("a.ts", statements);
    Program::new(b.build(), CompilerOptions::default())
}

fn checked_codes(program: &Program) -> Vec<u32> {
    let mut checker = Checker::new(program);
    checker.check_program();
    checker.diagnostics().diagnostics().iter().map(|d| d.code).collect()
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn test_unknown_name_is_reported() {
    let mut b = AstBuilder::new();
    let x = b.identifier("x");
    let statement = b.expression_statement(x);
    let program = program(b, vec![statement]);
    let mut checker = Checker::new(&program);
    checker.check_program();
    let diagnostics = checker.diagnostics().diagnostics();
    assert_eq!(diagnostics.len(), 1, "got {:?}", diagnostics);
    assert_eq!(diagnostics[0].code, messages::CANNOT_FIND_NAME_0.code);
    assert_eq!(diagnostics[0].message_text, "Cannot find name 'x'.");
    assert_eq!(diagnostics[0].file.as_deref(), Some("a.ts"));
}

#[test]
fn test_declared_name_resolves_to_its_declaration() {
    let mut b = AstBuilder::new();
    let one = b.numeric_literal("1");
    let name = b.identifier("x");
    let declaration = b.variable_declaration(name, None, Some(one));
    let statement = b.variable_statement(None, NodeFlags::LET, vec![declaration]);
    let x = b.identifier("x");
    let use_site = b.expression_statement(x);
    let program = program(b, vec![statement, use_site]);
    let mut checker = Checker::new(&program);
    checker.check_program();
    assert!(checker.diagnostics().is_empty(), "got {:?}", checker.diagnostics().diagnostics());
    assert_eq!(checker.get_resolved_symbol(x), program.ast.symbol(declaration));
}

#[test]
fn test_static_property_cannot_use_class_type_parameter() {
    let mut b = AstBuilder::new();
    let t = b.type_parameter("T", None, None);
    let static_type = b.type_reference("T", vec![]);
    let static_mods = b.modifiers(&[SyntaxKind::StaticKeyword]);
    let s_name = b.identifier("s");
    let s = b.property_declaration(static_mods, s_name, Some(static_type), None);
    let instance_type = b.type_reference("T", vec![]);
    let i_name = b.identifier("i");
    let i = b.property_declaration(None, i_name, Some(instance_type), None);
    let name = b.identifier("C");
    let class = b.class_like(
        SyntaxKind::ClassDeclaration,
        ClassLikeData {
            name: Some(name),
            type_parameters: AstBuilder::opt_list(vec![t]),
            members: NodeList::new(vec![s, i]),
            ..Default::default()
        },
    );
    let program = program(b, vec![class]);
    let codes = checked_codes(&program);
    let count = codes
        .iter()
        .filter(|&&c| c == messages::STATIC_MEMBERS_CANNOT_REFERENCE_CLASS_TYPE_PARAMETERS.code)
        .count();
    assert_eq!(count, 1, "only the static property is rejected, got {:?}", codes);
}

/// `enum E { A }` in a.ts and `enum E { B = A }` in b.ts.
fn cross_file_enum(options: CompilerOptions) -> Program {
    let mut b = AstBuilder::new();
    let a_name = b.identifier("A");
    let a = b.enum_member(a_name, None);
    let first = b.enum_declaration(None, "E", vec![a]);
    b.finish_file("a.ts", vec![first]);
    let reference = b.identifier("A");
    let b_name = b.identifier("B");
    let b_member = b.enum_member(b_name, Some(reference));
    let second = b.enum_declaration(None, "E", vec![b_member]);
    b.finish_file("b.ts", vec![second]);
    Program::new(b.build(), options)
}

#[test]
fn test_cross_file_enum_member_needs_qualification_under_isolated_modules() {
    let code = messages::CANNOT_ACCESS_0_FROM_ANOTHER_FILE_WITHOUT_QUALIFICATION_WHEN_1_IS_ENABLED_USE_2_INSTEAD.code;
    let isolated = cross_file_enum(CompilerOptions {
        isolated_modules: Some(true),
        ..Default::default()
    });
    let codes = checked_codes(&isolated);
    assert!(codes.contains(&code), "got {:?}", codes);
    assert!(!codes.contains(&messages::CANNOT_FIND_NAME_0.code), "the member still resolves");

    let plain = cross_file_enum(CompilerOptions::default());
    assert!(!checked_codes(&plain).contains(&code));
}

// ============================================================================
// Types of type nodes
// ============================================================================

#[test]
fn test_union_type_nodes_are_canonical() {
    let mut b = AstBuilder::new();
    let s1 = b.token(SyntaxKind::StringKeyword);
    let n1 = b.token(SyntaxKind::NumberKeyword);
    let first = b.list(SyntaxKind::UnionType, vec![s1, n1]);
    let a = b.type_alias(None, "A", vec![], first);
    let n2 = b.token(SyntaxKind::NumberKeyword);
    let s2 = b.token(SyntaxKind::StringKeyword);
    let second = b.list(SyntaxKind::UnionType, vec![n2, s2]);
    let alias_b = b.type_alias(None, "B", vec![], second);
    let program = program(b, vec![a, alias_b]);

    let mut checker = Checker::new(&program);
    let t1 = checker.get_type_from_type_node(first);
    let t2 = checker.get_type_from_type_node(second);
    assert_eq!(t1, t2, "string | number and number | string are one type");
    let types = checker.types();
    assert!(types.get(t1).flags.contains(TypeFlags::UNION));
    assert_eq!(types.types(t1), &[types.string_type, types.number_type]);
}

#[test]
fn test_literal_type_nodes() {
    let mut b = AstBuilder::new();
    let minus = b.numeric_literal("1");
    let negative = b.prefix_unary(SyntaxKind::MinusToken, minus);
    let negative_type = b.literal_type(negative);
    let text = b.string_literal("a");
    let string_type = b.literal_type(text);
    let union = b.list(SyntaxKind::UnionType, vec![negative_type, string_type]);
    let alias = b.type_alias(None, "L", vec![], union);
    let program = program(b, vec![alias]);

    let mut checker = Checker::new(&program);
    let t = checker.get_type_from_type_node(negative_type);
    let s = checker.get_type_from_type_node(string_type);
    let types = checker.types();
    assert!(types.get(t).flags.contains(TypeFlags::NUMBER_LITERAL));
    assert!(types.get(s).flags.contains(TypeFlags::STRING_LITERAL));
    assert!(types.is_literal(t));
}

#[test]
fn test_type_reference_to_interface() {
    let mut b = AstBuilder::new();
    let interface = b.interface_declaration(None, "I", vec![]);
    let reference = b.type_reference("I", vec![]);
    let alias = b.type_alias(None, "A", vec![], reference);
    let program = program(b, vec![interface, alias]);

    let mut checker = Checker::new(&program);
    let symbol = program.ast.symbol(interface).expect("bound interface");
    let declared = checker.get_declared_type_of_symbol(symbol);
    assert_eq!(checker.get_type_from_type_node(reference), declared);
    assert!(checker.types().get(declared).is_object());
}

#[test]
fn test_type_reference_to_type_parameter() {
    let mut b = AstBuilder::new();
    let tp = b.type_parameter("T", None, None);
    let reference = b.type_reference("T", vec![]);
    let parameter = b.parameter("x", Some(reference));
    let name = b.identifier("f");
    let body = b.block(vec![]);
    let function = b.function_like(
        SyntaxKind::FunctionDeclaration,
        FunctionLikeData {
            name: Some(name),
            type_parameters: AstBuilder::opt_list(vec![tp]),
            parameters: NodeList::new(vec![parameter]),
            body: Some(body),
            ..Default::default()
        },
    );
    let program = program(b, vec![function]);

    let mut checker = Checker::new(&program);
    let t = checker.get_type_from_type_node(reference);
    let ty = checker.types().get(t);
    assert!(ty.is_type_parameter());
    assert_eq!(ty.symbol, program.ast.symbol(tp));
}

#[test]
fn test_unresolved_type_reference_is_error_type() {
    let mut b = AstBuilder::new();
    let reference = b.type_reference("Missing", vec![]);
    let alias = b.type_alias(None, "A", vec![], reference);
    let program = program(b, vec![alias]);
    let mut checker = Checker::new(&program);
    let t = checker.get_type_from_type_node(reference);
    assert_eq!(t, checker.types().error_type);
    assert!(checker.diagnostics().with_code(messages::CANNOT_FIND_NAME_0.code).count() >= 1);
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_get_diagnostics_sorts_by_file_then_position() {
    let mut b = AstBuilder::new();
    let jump = b.jump(SyntaxKind::BreakStatement, None);
    let function = b.function_declaration(None, "f", vec![], Some(vec![jump]));
    let top_level = b.jump(SyntaxKind::ContinueStatement, None);
    b.finish_file("a.ts", vec![function, top_level]);
    let y = b.identifier("y");
    let statement = b.expression_statement(y);
    b.finish_file("b.ts", vec![statement]);
    let program = Program::new(b.build(), CompilerOptions::default());

    let mut checker = Checker::new(&program);
    let diagnostics = checker.get_diagnostics();
    assert_eq!(diagnostics.len(), 3, "got {:?}", diagnostics);
    let key = |d: &Diagnostic| (d.file_index, d.span.map(|s| s.start));
    assert!(
        diagnostics.windows(2).all(|w| key(&w[0]) <= key(&w[1])),
        "not sorted: {:?}",
        diagnostics.iter().map(key).collect::<Vec<_>>()
    );
    assert_eq!(diagnostics[2].file.as_deref(), Some("b.ts"));
}

#[test]
fn test_binder_diagnostics_are_included() {
    let mut b = AstBuilder::new();
    let first = b.simple_variable(NodeFlags::LET, "x", None);
    let second = b.simple_variable(NodeFlags::LET, "x", None);
    let program = program(b, vec![first, second]);
    let mut checker = Checker::new(&program);
    let codes: Vec<u32> = checker.get_diagnostics().iter().map(|d| d.code).collect();
    assert!(codes.contains(&messages::CANNOT_REDECLARE_BLOCK_SCOPED_VARIABLE_0.code), "got {:?}", codes);
}

#[test]
fn test_each_checker_owns_its_types() {
    let b = AstBuilder::new();
    let program = program(b, vec![]);
    let first = Checker::new(&program);
    let second = Checker::new(&program);
    assert_ne!(first.types().checker_id(), second.types().checker_id());
}

#[test]
#[should_panic(expected = "Cannot compare types from different checkers")]
fn test_types_do_not_cross_checkers() {
    let b = AstBuilder::new();
    let program = program(b, vec![]);
    let first = Checker::new(&program);
    let second = Checker::new(&program);
    first.types().get(second.types().string_type);
}
