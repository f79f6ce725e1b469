//! Grammar check tests.
//!
//! Every test builds a file, checks the whole program and looks at the
//! codes (and sometimes the text) of what was reported. The parse
//! diagnostic gate and the once-per-block ambient rule are covered in
//! both directions.

use tscheck_ast::*;
use tscheck_checker::{Checker, Program};
use tscheck_diagnostics::{messages, Diagnostic, DiagnosticMessage};
use tscheck_options::CompilerOptions;

/// Helper: check `statements` as `a.ts` and return the errors.
fn check_file(mut b: AstBuilder, statements: Vec<NodeId>) -> Vec<Diagnostic> {
    b.finish_file("a.ts", statements);
    let program = Program::new(b.build(), CompilerOptions::default());
    let mut checker = Checker::new(&program);
    checker.check_program();
    checker.diagnostics().diagnostics().to_vec()
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<u32> {
    diagnostics.iter().map(|d| d.code).collect()
}

fn count(diagnostics: &[Diagnostic], message: &DiagnosticMessage) -> usize {
    diagnostics.iter().filter(|d| d.code == message.code).count()
}

/// `let x = 1;`
fn declare_x(b: &mut AstBuilder) -> NodeId {
    let one = b.numeric_literal("1");
    b.simple_variable(NodeFlags::LET, "x", Some(one))
}

// ============================================================================
// Modifiers
// ============================================================================

#[test]
fn test_abstract_static_method_is_rejected() {
    let mut b = AstBuilder::new();
    let mods = b.modifiers(&[SyntaxKind::AbstractKeyword, SyntaxKind::StaticKeyword]);
    let name = b.identifier("m");
    let method = b.method_declaration(mods, name, vec![], None);
    let class_mods = b.modifiers(&[SyntaxKind::AbstractKeyword]);
    let class = b.class_declaration(class_mods, "C", vec![method]);
    let diagnostics = check_file(b, vec![class]);
    let found = diagnostics
        .iter()
        .find(|d| d.code == messages::_0_MODIFIER_CANNOT_BE_USED_WITH_1_MODIFIER.code);
    assert!(found.is_some(), "expected a modifier conflict, got {:?}", codes(&diagnostics));
    assert_eq!(
        found.map(|d| d.message_text.as_str()),
        Some("'static' modifier cannot be used with 'abstract' modifier.")
    );
}

#[test]
fn test_duplicate_export_modifier() {
    let mut b = AstBuilder::new();
    let mods = b.modifiers(&[SyntaxKind::ExportKeyword, SyntaxKind::ExportKeyword]);
    let class = b.class_declaration(mods, "C", vec![]);
    let diagnostics = check_file(b, vec![class]);
    let found = diagnostics.iter().find(|d| d.code == messages::_0_MODIFIER_ALREADY_SEEN.code);
    assert_eq!(
        found.map(|d| d.message_text.as_str()),
        Some("'export' modifier already seen."),
        "got {:?}",
        codes(&diagnostics)
    );
}

#[test]
fn test_decorator_after_export_default_points_at_first_decorator() {
    let mut b = AstBuilder::new();
    let dec = b.identifier("dec");
    let leading = b.decorator(dec);
    let export = b.token(SyntaxKind::ExportKeyword);
    let default = b.token(SyntaxKind::DefaultKeyword);
    let dec = b.identifier("dec");
    let trailing = b.decorator(dec);
    let mods = AstBuilder::modifier_list(vec![leading, export, default, trailing]);
    let class = b.class_declaration(mods, "C", vec![]);
    let diagnostics = check_file(b, vec![class]);
    let found = diagnostics.iter().find(|d| {
        d.code == messages::DECORATORS_MAY_NOT_APPEAR_AFTER_EXPORT_OR_EXPORT_DEFAULT_IF_THEY_ALSO_APPEAR_BEFORE_EXPORT.code
    });
    let Some(found) = found else {
        panic!("expected the decorator placement error, got {:?}", codes(&diagnostics));
    };
    assert_eq!(found.related_information.len(), 1);
    assert_eq!(found.related_information[0].code, messages::DECORATOR_USED_BEFORE_EXPORT_HERE.code);
}

#[test]
fn test_decorators_only_before_export_are_fine() {
    let mut b = AstBuilder::new();
    let dec = b.identifier("dec");
    let leading = b.decorator(dec);
    let export = b.token(SyntaxKind::ExportKeyword);
    let mods = AstBuilder::modifier_list(vec![leading, export]);
    let class = b.class_declaration(mods, "C", vec![]);
    let diagnostics = check_file(b, vec![class]);
    assert_eq!(
        count(
            &diagnostics,
            &messages::DECORATORS_MAY_NOT_APPEAR_AFTER_EXPORT_OR_EXPORT_DEFAULT_IF_THEY_ALSO_APPEAR_BEFORE_EXPORT
        ),
        0
    );
    assert_eq!(count(&diagnostics, &messages::DECORATORS_ARE_NOT_VALID_HERE), 0);
}

#[test]
fn test_decorated_overload_is_reported_on_its_first_token() {
    let mut b = AstBuilder::new();
    let public = b.token(SyntaxKind::PublicKeyword);
    let dec = b.identifier("dec");
    let decorator = b.decorator(dec);
    let overload_name = b.identifier("m");
    let overload = b.method_declaration(AstBuilder::modifier_list(vec![public, decorator]), overload_name, vec![], None);
    let implementation_name = b.identifier("m");
    let implementation = b.method_declaration(None, implementation_name, vec![], Some(vec![]));
    let class = b.class_declaration(None, "C", vec![overload, implementation]);
    let diagnostics = check_file(b, vec![class]);
    let found = diagnostics
        .iter()
        .find(|d| d.code == messages::A_DECORATOR_CAN_ONLY_DECORATE_A_METHOD_IMPLEMENTATION_NOT_AN_OVERLOAD.code);
    let Some(found) = found else {
        panic!("expected the overload decorator error, got {:?}", codes(&diagnostics));
    };
    let span = found.span.expect("reported at a position");
    assert_eq!(span.length, "public".len() as u32, "span should cover `public`, not `@`");
}

// ============================================================================
// Parameters
// ============================================================================

fn rest_parameter(b: &mut AstBuilder, name: &str) -> NodeId {
    let name = b.identifier(name);
    let dots = b.token(SyntaxKind::DotDotDotToken);
    b.variable_like(
        SyntaxKind::Parameter,
        VariableLikeData {
            dot_dot_dot_token: Some(dots),
            ..VariableLikeData::named(name)
        },
    )
}

fn optional_parameter(b: &mut AstBuilder, name: &str) -> NodeId {
    let name = b.identifier(name);
    let question = b.token(SyntaxKind::QuestionToken);
    b.variable_like(
        SyntaxKind::Parameter,
        VariableLikeData {
            postfix_token: Some(question),
            ..VariableLikeData::named(name)
        },
    )
}

#[test]
fn test_rest_parameter_must_be_last() {
    let mut b = AstBuilder::new();
    let rest = rest_parameter(&mut b, "a");
    let last = b.parameter("b", None);
    let function = b.function_declaration(None, "f", vec![rest, last], Some(vec![]));
    let diagnostics = check_file(b, vec![function]);
    assert_eq!(count(&diagnostics, &messages::A_REST_PARAMETER_MUST_BE_LAST_IN_A_PARAMETER_LIST), 1);
}

#[test]
fn test_required_parameter_after_optional() {
    let mut b = AstBuilder::new();
    let optional = optional_parameter(&mut b, "a");
    let required = b.parameter("b", None);
    let function = b.function_declaration(None, "f", vec![optional, required], Some(vec![]));
    let diagnostics = check_file(b, vec![function]);
    assert_eq!(count(&diagnostics, &messages::A_REQUIRED_PARAMETER_CANNOT_FOLLOW_AN_OPTIONAL_PARAMETER), 1);
}

// ============================================================================
// Break and continue
// ============================================================================

#[test]
fn test_continue_to_labeled_block_is_rejected() {
    let mut b = AstBuilder::new();
    let jump = b.jump(SyntaxKind::ContinueStatement, Some("l"));
    let x = b.identifier("x");
    let body = b.block(vec![jump]);
    let inner = b.loop_statement(SyntaxKind::WhileStatement, x, body);
    let block = b.block(vec![inner]);
    let labeled = b.labeled_statement("l", block);
    let x_decl = declare_x(&mut b);
    let diagnostics = check_file(b, vec![x_decl, labeled]);
    assert_eq!(
        count(
            &diagnostics,
            &messages::A_CONTINUE_STATEMENT_CAN_ONLY_JUMP_TO_A_LABEL_OF_AN_ENCLOSING_ITERATION_STATEMENT
        ),
        1,
        "got {:?}",
        codes(&diagnostics)
    );
}

#[test]
fn test_unlabeled_break_in_switch_is_accepted() {
    let mut b = AstBuilder::new();
    let x_decl = declare_x(&mut b);
    let jump = b.jump(SyntaxKind::BreakStatement, None);
    let one = b.numeric_literal("1");
    let clause = b.case_clause(Some(one), vec![jump]);
    let x = b.identifier("x");
    let switch = b.switch_statement(x, vec![clause]);
    let diagnostics = check_file(b, vec![x_decl, switch]);
    assert!(diagnostics.is_empty(), "unexpected {:?}", codes(&diagnostics));
}

#[test]
fn test_unlabeled_continue_in_switch_is_rejected() {
    let mut b = AstBuilder::new();
    let x_decl = declare_x(&mut b);
    let jump = b.jump(SyntaxKind::ContinueStatement, None);
    let clause = b.case_clause(None, vec![jump]);
    let x = b.identifier("x");
    let switch = b.switch_statement(x, vec![clause]);
    let diagnostics = check_file(b, vec![x_decl, switch]);
    assert_eq!(
        count(&diagnostics, &messages::A_CONTINUE_STATEMENT_CAN_ONLY_BE_USED_WITHIN_AN_ENCLOSING_ITERATION_STATEMENT),
        1
    );
}

#[test]
fn test_break_inside_nested_function_is_rejected() {
    let mut b = AstBuilder::new();
    let x_decl = declare_x(&mut b);
    let jump = b.jump(SyntaxKind::BreakStatement, None);
    let function = b.function_declaration(None, "f", vec![], Some(vec![jump]));
    let x = b.identifier("x");
    let body = b.block(vec![function]);
    let loop_statement = b.loop_statement(SyntaxKind::WhileStatement, x, body);
    let diagnostics = check_file(b, vec![x_decl, loop_statement]);
    assert_eq!(
        count(
            &diagnostics,
            &messages::A_BREAK_STATEMENT_CAN_ONLY_BE_USED_WITHIN_AN_ENCLOSING_ITERATION_OR_SWITCH_STATEMENT
        ),
        1,
        "got {:?}",
        codes(&diagnostics)
    );
}

// ============================================================================
// Numeric literals
// ============================================================================

/// Suggestions reported for `let n = <text>;`.
fn numeric_literal_suggestions(text: &str) -> Vec<u32> {
    let mut b = AstBuilder::new();
    let literal = b.numeric_literal(text);
    let statement = b.simple_variable(NodeFlags::LET, "n", Some(literal));
    b.finish_file("a.ts", vec![statement]);
    let program = Program::new(b.build(), CompilerOptions::default());
    let mut checker = Checker::new(&program);
    checker.check_program();
    assert!(checker.diagnostics().is_empty(), "precision loss is never an error");
    checker.suggestion_diagnostics().diagnostics().iter().map(|d| d.code).collect()
}

#[test]
fn test_unsafe_integer_literal_suggests() {
    let code = messages::NUMERIC_LITERALS_WITH_ABSOLUTE_VALUES_EQUAL_TO_2_53_OR_GREATER_ARE_TOO_LARGE_TO_BE_REPRESENTED_ACCURATELY_AS_INTEGERS.code;
    assert_eq!(numeric_literal_suggestions("9007199254740993"), vec![code]);
    assert!(numeric_literal_suggestions("9007199254740991").is_empty());
}

#[test]
fn test_scientific_and_fractional_literals_are_exempt() {
    assert!(numeric_literal_suggestions("9e99").is_empty());
    assert!(numeric_literal_suggestions("1.5e3").is_empty());
    assert!(numeric_literal_suggestions("100000000000000000000.").is_empty());
    assert!(numeric_literal_suggestions("0x20000000000000e").is_empty(), "a hex 'e' digit exempts too");
}

#[test]
fn test_uppercase_exponent_is_not_exempt() {
    let code = messages::NUMERIC_LITERALS_WITH_ABSOLUTE_VALUES_EQUAL_TO_2_53_OR_GREATER_ARE_TOO_LARGE_TO_BE_REPRESENTED_ACCURATELY_AS_INTEGERS.code;
    assert_eq!(numeric_literal_suggestions("1E21"), vec![code]);
}

// ============================================================================
// Ambient contexts and parse errors
// ============================================================================

/// `declare namespace N { 1; 2; }`
fn ambient_namespace_with_statements(b: &mut AstBuilder) -> NodeId {
    let one = b.numeric_literal("1");
    let first = b.expression_statement(one);
    let two = b.numeric_literal("2");
    let second = b.expression_statement(two);
    let body = b.module_block(vec![first, second]);
    let name = b.identifier("N");
    let mods = b.modifiers(&[SyntaxKind::DeclareKeyword]);
    b.module_declaration(mods, name, Some(body), NodeFlags::NAMESPACE)
}

#[test]
fn test_statements_in_ambient_block_reported_once() {
    let mut b = AstBuilder::new();
    let namespace = ambient_namespace_with_statements(&mut b);
    let diagnostics = check_file(b, vec![namespace]);
    assert_eq!(
        count(&diagnostics, &messages::STATEMENTS_ARE_NOT_ALLOWED_IN_AMBIENT_CONTEXTS),
        1,
        "the second statement in the block is suppressed, got {:?}",
        codes(&diagnostics)
    );
}

#[test]
fn test_parse_errors_suppress_grammar_checks() {
    let mut b = AstBuilder::new();
    let namespace = ambient_namespace_with_statements(&mut b);
    let jump = b.jump(SyntaxKind::BreakStatement, None);
    b.add_parse_diagnostic(Diagnostic::new(&messages::_0_EXPECTED, &[";"]));
    let diagnostics = check_file(b, vec![namespace, jump]);
    assert_eq!(count(&diagnostics, &messages::STATEMENTS_ARE_NOT_ALLOWED_IN_AMBIENT_CONTEXTS), 0);
    assert_eq!(
        count(
            &diagnostics,
            &messages::A_BREAK_STATEMENT_CAN_ONLY_BE_USED_WITHIN_AN_ENCLOSING_ITERATION_OR_SWITCH_STATEMENT
        ),
        0
    );
}

// ============================================================================
// Object literals
// ============================================================================

fn object_literal_statement(b: &mut AstBuilder, properties: Vec<NodeId>) -> NodeId {
    let object = b.list(SyntaxKind::ObjectLiteralExpression, properties);
    let paren = b.wrap(SyntaxKind::ParenthesizedExpression, object);
    b.expression_statement(paren)
}

fn accessor(b: &mut AstBuilder, kind: SyntaxKind, name: &str) -> NodeId {
    let name = b.identifier(name);
    let parameters = if kind == SyntaxKind::SetAccessor {
        vec![b.parameter("v", None)]
    } else {
        vec![]
    };
    b.accessor(kind, None, name, parameters, Some(vec![]))
}

#[test]
fn test_get_set_pair_merges() {
    let mut b = AstBuilder::new();
    let get = accessor(&mut b, SyntaxKind::GetAccessor, "a");
    let set = accessor(&mut b, SyntaxKind::SetAccessor, "a");
    let statement = object_literal_statement(&mut b, vec![get, set]);
    let diagnostics = check_file(b, vec![statement]);
    assert_eq!(
        count(&diagnostics, &messages::AN_OBJECT_LITERAL_CANNOT_HAVE_MULTIPLE_GET_SET_ACCESSORS_WITH_THE_SAME_NAME),
        0
    );
}

#[test]
fn test_second_getter_is_rejected() {
    let mut b = AstBuilder::new();
    let get = accessor(&mut b, SyntaxKind::GetAccessor, "a");
    let again = accessor(&mut b, SyntaxKind::GetAccessor, "a");
    let statement = object_literal_statement(&mut b, vec![get, again]);
    let diagnostics = check_file(b, vec![statement]);
    assert_eq!(
        count(&diagnostics, &messages::AN_OBJECT_LITERAL_CANNOT_HAVE_MULTIPLE_GET_SET_ACCESSORS_WITH_THE_SAME_NAME),
        1
    );
}

#[test]
fn test_property_and_accessor_conflict() {
    let mut b = AstBuilder::new();
    let name = b.identifier("a");
    let one = b.numeric_literal("1");
    let property = b.property_assignment(name, one);
    let get = accessor(&mut b, SyntaxKind::GetAccessor, "a");
    let statement = object_literal_statement(&mut b, vec![property, get]);
    let diagnostics = check_file(b, vec![statement]);
    assert_eq!(
        count(&diagnostics, &messages::AN_OBJECT_LITERAL_CANNOT_HAVE_PROPERTY_AND_ACCESSOR_WITH_THE_SAME_NAME),
        1
    );
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_two_checkers_report_the_same_diagnostics() {
    let mut b = AstBuilder::new();
    let jump = b.jump(SyntaxKind::ContinueStatement, None);
    let mods = b.modifiers(&[SyntaxKind::ExportKeyword, SyntaxKind::ExportKeyword]);
    let class = b.class_declaration(mods, "C", vec![]);
    b.finish_file("a.ts", vec![jump, class]);
    let program = Program::new(b.build(), CompilerOptions::default());

    let mut first = Checker::new(&program);
    first.check_program();
    let mut second = Checker::new(&program);
    second.check_program();
    assert!(!first.diagnostics().is_empty());
    assert_eq!(first.diagnostics().diagnostics(), second.diagnostics().diagnostics());
}

#[test]
fn test_checked_files_are_not_checked_again() {
    let mut b = AstBuilder::new();
    let jump = b.jump(SyntaxKind::BreakStatement, None);
    b.finish_file("a.ts", vec![jump]);
    let program = Program::new(b.build(), CompilerOptions::default());
    let mut checker = Checker::new(&program);
    let once = checker.get_diagnostics();
    let twice = checker.get_diagnostics();
    assert_eq!(once, twice);
    assert_eq!(once.len(), 1);
}
