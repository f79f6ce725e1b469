//! Name resolution tests.
//!
//! Each test binds a small program, then resolves an identifier from a
//! specific position and checks which declaration it reaches and what
//! the host was told.

use tscheck_ast::*;
use tscheck_binder::*;
use tscheck_diagnostics::{messages, DiagnosticMessage};
use tscheck_options::CompilerOptions;

/// Records every callback the resolver makes.
#[derive(Default)]
struct RecordingHost {
    errors: Vec<(u32, String)>,
    referenced: Vec<SymbolId>,
    failed: Vec<String>,
}

impl NameResolverHost for RecordingHost {
    fn error(&mut self, _location: NodeId, message: &DiagnosticMessage, args: &[&str]) {
        self.errors.push((message.code, args.join(",")));
    }

    fn symbol_referenced(&mut self, symbol: SymbolId, _meaning: SymbolFlags) {
        self.referenced.push(symbol);
    }

    fn on_failed_to_resolve_symbol(
        &mut self,
        _location: NodeId,
        name: &str,
        _meaning: SymbolFlags,
        _message: &DiagnosticMessage,
    ) {
        self.failed.push(name.to_string());
    }
}

/// Helper: resolve `name` from `location`, reporting through `host`.
fn resolve(
    ast: &Ast,
    binding: &Binding,
    options: &CompilerOptions,
    host: &mut RecordingHost,
    location: NodeId,
    name: &str,
    meaning: SymbolFlags,
) -> Option<SymbolId> {
    NameResolver::new(ast, binding, options).resolve(
        host,
        location,
        name,
        meaning,
        Some(&messages::CANNOT_FIND_NAME_0),
        true,
        false,
    )
}

/// The identifier inside a type reference.
fn type_name(ast: &Ast, type_ref: NodeId) -> NodeId {
    ast.children(type_ref)[0]
}

// ============================================================================
// Function Scopes
// ============================================================================

/// `function f<T>(x: T): L { type L = string; let y: L; }`
struct FunctionScope {
    ast: Ast,
    binding: Binding,
    func: NodeId,
    param_type: NodeId,
    return_type: NodeId,
    body_type: NodeId,
}

fn function_scope() -> FunctionScope {
    let mut b = AstBuilder::new();
    let t = b.type_parameter("T", None, None);
    let param_type = b.type_reference("T", vec![]);
    let x = b.parameter("x", Some(param_type));
    let return_type = b.type_reference("L", vec![]);
    let string = b.type_reference("string", vec![]);
    let alias = b.type_alias(None, "L", vec![], string);
    let body_type = b.type_reference("L", vec![]);
    let y = b.identifier("y");
    let y_decl = b.variable_declaration(y, Some(body_type), None);
    let y_stmt = b.variable_statement(None, NodeFlags::LET, vec![y_decl]);
    let body = b.block(vec![alias, y_stmt]);
    let name = b.identifier("f");
    let func = b.function_like(
        SyntaxKind::FunctionDeclaration,
        FunctionLikeData {
            name: Some(name),
            type_parameters: AstBuilder::opt_list(vec![t]),
            parameters: NodeList::new(vec![x]),
            type_node: Some(return_type),
            body: Some(body),
            ..Default::default()
        },
    );
    b.finish_file("a.ts", vec![func]);
    let mut ast = b.build();
    let binding = bind_program(&mut ast, &CompilerOptions::default());
    FunctionScope {
        ast,
        binding,
        func,
        param_type,
        return_type,
        body_type,
    }
}

#[test]
fn test_type_parameter_visible_in_parameter_list() {
    let scope = function_scope();
    let options = CompilerOptions::default();
    let mut host = RecordingHost::default();
    let location = type_name(&scope.ast, scope.param_type);
    let result = resolve(&scope.ast, &scope.binding, &options, &mut host, location, "T", SymbolFlags::TYPE);
    let symbol = result.expect("T resolves");
    assert!(scope.binding.symbol(symbol).has_flags(SymbolFlags::TYPE_PARAMETER));
    assert_eq!(host.referenced, vec![symbol]);
}

#[test]
fn test_type_parameter_visible_in_return_type() {
    let scope = function_scope();
    let options = CompilerOptions::default();
    let mut host = RecordingHost::default();
    let location = type_name(&scope.ast, scope.return_type);
    let result = resolve(&scope.ast, &scope.binding, &options, &mut host, location, "T", SymbolFlags::TYPE);
    let symbol = result.expect("T resolves in the return type");
    assert!(scope.binding.symbol(symbol).has_flags(SymbolFlags::TYPE_PARAMETER));
    assert!(host.failed.is_empty(), "unexpected failures {:?}", host.failed);
}

#[test]
fn test_type_parameter_visible_in_body() {
    let scope = function_scope();
    let options = CompilerOptions::default();
    let mut host = RecordingHost::default();
    let from_parameters = {
        let location = type_name(&scope.ast, scope.param_type);
        resolve(&scope.ast, &scope.binding, &options, &mut host, location, "T", SymbolFlags::TYPE)
    };
    let location = type_name(&scope.ast, scope.body_type);
    let result = resolve(&scope.ast, &scope.binding, &options, &mut host, location, "T", SymbolFlags::TYPE);
    let symbol = result.expect("T resolves in the body");
    assert!(scope.binding.symbol(symbol).has_flags(SymbolFlags::TYPE_PARAMETER));
    assert_eq!(Some(symbol), from_parameters, "one T for the whole function");
    assert!(host.failed.is_empty(), "unexpected failures {:?}", host.failed);
}

#[test]
fn test_local_type_not_visible_in_parameter_list() {
    let scope = function_scope();
    let options = CompilerOptions::default();
    let mut host = RecordingHost::default();
    let location = type_name(&scope.ast, scope.param_type);
    let result = resolve(&scope.ast, &scope.binding, &options, &mut host, location, "L", SymbolFlags::TYPE);
    assert!(result.is_none(), "got {:?}", result);
    assert_eq!(host.failed, vec!["L".to_string()]);
}

#[test]
fn test_local_type_not_visible_in_return_type() {
    let scope = function_scope();
    let options = CompilerOptions::default();
    let mut host = RecordingHost::default();
    let location = type_name(&scope.ast, scope.return_type);
    let result = resolve(&scope.ast, &scope.binding, &options, &mut host, location, "L", SymbolFlags::TYPE);
    assert!(result.is_none(), "got {:?}", result);
    assert_eq!(host.failed, vec!["L".to_string()]);
}

#[test]
fn test_local_type_visible_in_body() {
    let scope = function_scope();
    let options = CompilerOptions::default();
    let mut host = RecordingHost::default();
    let location = type_name(&scope.ast, scope.body_type);
    let result = resolve(&scope.ast, &scope.binding, &options, &mut host, location, "L", SymbolFlags::TYPE);
    let symbol = result.expect("L resolves in the body");
    assert!(scope.binding.symbol(symbol).has_flags(SymbolFlags::TYPE_ALIAS));
    assert!(host.failed.is_empty());
}

#[test]
fn test_parameter_visible_in_return_type() {
    let scope = function_scope();
    let options = CompilerOptions::default();
    let mut host = RecordingHost::default();
    let location = type_name(&scope.ast, scope.return_type);
    let result = resolve(&scope.ast, &scope.binding, &options, &mut host, location, "x", SymbolFlags::VALUE);
    let symbol = result.expect("x resolves in the return type");
    let decl = scope.binding.symbol(symbol).value_declaration.expect("x has a declaration");
    assert_eq!(scope.ast.kind(decl), SyntaxKind::Parameter);
}

#[test]
fn test_function_name_resolves_outside_its_body() {
    let scope = function_scope();
    let options = CompilerOptions::default();
    let mut host = RecordingHost::default();
    let location = type_name(&scope.ast, scope.body_type);
    let result = resolve(&scope.ast, &scope.binding, &options, &mut host, location, "f", SymbolFlags::VALUE);
    assert_eq!(result, scope.ast.symbol(scope.func));
    assert!(host.referenced.is_empty(), "self reference counted as use");
}

#[test]
fn test_arguments_in_function() {
    let mut b = AstBuilder::new();
    let arguments = b.identifier("arguments");
    let stmt = b.expression_statement(arguments);
    let func = b.function_declaration(None, "f", vec![], Some(vec![stmt]));
    b.finish_file("a.ts", vec![func]);
    let mut ast = b.build();
    let options = CompilerOptions::default();
    let binding = bind_program(&mut ast, &options);
    let mut host = RecordingHost::default();

    let result = resolve(&ast, &binding, &options, &mut host, arguments, "arguments", SymbolFlags::VALUE);
    assert_eq!(result, Some(binding.arguments_symbol));
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_static_member_cannot_reference_class_type_parameter() {
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
    b.finish_file("a.ts", vec![class]);
    let mut ast = b.build();
    let options = CompilerOptions::default();
    let binding = bind_program(&mut ast, &options);

    let mut host = RecordingHost::default();
    let location = type_name(&ast, instance_type);
    let result = resolve(&ast, &binding, &options, &mut host, location, "T", SymbolFlags::TYPE);
    assert_eq!(result, ast.symbol(t));
    assert!(host.errors.is_empty(), "errors {:?}", host.errors);

    let mut host = RecordingHost::default();
    let location = type_name(&ast, static_type);
    let result = resolve(&ast, &binding, &options, &mut host, location, "T", SymbolFlags::TYPE);
    assert!(result.is_none());
    assert_eq!(host.errors, vec![(2302, String::new())]);
}

#[test]
fn test_class_expression_name_is_in_scope() {
    let mut b = AstBuilder::new();
    let inner = b.identifier("K");
    let stmt = b.expression_statement(inner);
    let method_name = b.identifier("m");
    let method = b.method_declaration(None, method_name, vec![], Some(vec![stmt]));
    let class_name = b.identifier("K");
    let class = b.class_like(
        SyntaxKind::ClassExpression,
        ClassLikeData {
            name: Some(class_name),
            members: NodeList::new(vec![method]),
            ..Default::default()
        },
    );
    let init = b.simple_variable(NodeFlags::CONST, "k", Some(class));
    b.finish_file("a.ts", vec![init]);
    let mut ast = b.build();
    let options = CompilerOptions::default();
    let binding = bind_program(&mut ast, &options);
    let mut host = RecordingHost::default();

    let result = resolve(&ast, &binding, &options, &mut host, inner, "K", SymbolFlags::VALUE);
    assert_eq!(result, ast.symbol(class));
}

// ============================================================================
// Enums and Modules
// ============================================================================

/// Two script files that both declare `enum E`; the second refers to a
/// member of the first without qualification.
fn cross_file_enum(options: &CompilerOptions) -> (Ast, Binding, NodeId) {
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
    let mut ast = b.build();
    let binding = bind_program(&mut ast, options);
    (ast, binding, reference)
}

#[test]
fn test_cross_file_enum_member_with_isolated_modules() {
    let options = CompilerOptions {
        isolated_modules: Some(true),
        ..Default::default()
    };
    let (ast, binding, reference) = cross_file_enum(&options);
    let mut host = RecordingHost::default();
    let result = resolve(&ast, &binding, &options, &mut host, reference, "A", SymbolFlags::VALUE);
    assert!(result.is_some());
    assert_eq!(host.errors, vec![(18055, "A,isolatedModules,E.A".to_string())]);
}

#[test]
fn test_cross_file_enum_member_without_isolated_modules() {
    let options = CompilerOptions::default();
    let (ast, binding, reference) = cross_file_enum(&options);
    let mut host = RecordingHost::default();
    let result = resolve(&ast, &binding, &options, &mut host, reference, "A", SymbolFlags::VALUE);
    assert!(result.is_some());
    assert!(host.errors.is_empty(), "errors {:?}", host.errors);
}

#[test]
fn test_exported_namespace_member_resolves_through_exports() {
    let mut b = AstBuilder::new();
    let export_mods = b.modifiers(&[SyntaxKind::ExportKeyword]);
    let x_name = b.identifier("x");
    let x_decl = b.variable_declaration(x_name, None, None);
    let x_stmt = b.variable_statement(export_mods, NodeFlags::LET, vec![x_decl]);
    let reference = b.identifier("x");
    let use_stmt = b.expression_statement(reference);
    let body = b.module_block(vec![x_stmt, use_stmt]);
    let ns_name = b.identifier("N");
    let ns = b.module_declaration(None, ns_name, Some(body), NodeFlags::NAMESPACE);
    b.finish_file("a.ts", vec![ns]);
    let mut ast = b.build();
    let options = CompilerOptions::default();
    let binding = bind_program(&mut ast, &options);
    let mut host = RecordingHost::default();

    let result = resolve(&ast, &binding, &options, &mut host, reference, "x", SymbolFlags::VALUE);
    let symbol = result.expect("x resolves");
    // The `ExportValue` local has no value meaning of its own.
    assert_eq!(ast.symbol(x_decl), Some(symbol));
    assert!(binding.symbol(symbol).has_flags(SymbolFlags::BLOCK_SCOPED_VARIABLE));
    assert_ne!(ast.local_symbol(x_decl), Some(symbol));
}

#[test]
fn test_globals_are_searched_last() {
    let mut b = AstBuilder::new();
    let global = b.simple_variable(NodeFlags::LET, "g", None);
    b.finish_file("lib.ts", vec![global]);
    let reference = b.identifier("g");
    let stmt = b.expression_statement(reference);
    b.finish_file("a.ts", vec![stmt]);
    let mut ast = b.build();
    let options = CompilerOptions::default();
    let binding = bind_program(&mut ast, &options);

    let resolver = NameResolver::new(&ast, &binding, &options);
    let found = resolver.resolve(&mut DefaultHost, reference, "g", SymbolFlags::VALUE, None, false, false);
    assert!(found.is_some());
    let excluded = resolver.resolve(&mut DefaultHost, reference, "g", SymbolFlags::VALUE, None, false, true);
    assert!(excluded.is_none());
}

// ============================================================================
// Conditional Types
// ============================================================================

#[test]
fn test_infer_type_parameter_visible_only_in_true_branch() {
    let mut b = AstBuilder::new();
    let check = b.type_reference("T", vec![]);
    let infer = b.infer_type("U");
    let extends = b.type_reference("Array", vec![infer]);
    let when_true = b.type_reference("U", vec![]);
    let when_false = b.type_reference("U", vec![]);
    let conditional = b.conditional_type(check, extends, when_true, when_false);
    let t = b.type_parameter("T", None, None);
    let alias = b.type_alias(None, "X", vec![t], conditional);
    b.finish_file("a.ts", vec![alias]);
    let mut ast = b.build();
    let options = CompilerOptions::default();
    let binding = bind_program(&mut ast, &options);

    let mut host = RecordingHost::default();
    let location = type_name(&ast, when_true);
    let result = resolve(&ast, &binding, &options, &mut host, location, "U", SymbolFlags::TYPE);
    assert!(result.is_some(), "U in the true branch");

    let mut host = RecordingHost::default();
    let location = type_name(&ast, when_false);
    let result = resolve(&ast, &binding, &options, &mut host, location, "U", SymbolFlags::TYPE);
    assert!(result.is_none(), "U leaked into the false branch");
    assert_eq!(host.failed, vec!["U".to_string()]);
}
