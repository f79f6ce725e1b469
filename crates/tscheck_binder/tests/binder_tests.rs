//! Binder integration tests.
//!
//! Builds programs with `AstBuilder`, binds them and inspects the
//! resulting symbol tables and binder diagnostics.

use tscheck_ast::*;
use tscheck_binder::*;
use tscheck_options::CompilerOptions;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Helper: bind with default options.
fn bind(ast: &mut Ast) -> Binding {
    init_tracing();
    bind_program(ast, &CompilerOptions::default())
}

fn lookup(ast: &Ast, table: Option<&SymbolTable>, name: &str) -> Option<SymbolId> {
    table.and_then(|t| t.get(ast.interner().intern(name)))
}

fn codes(binding: &Binding) -> Vec<u32> {
    binding.diagnostics.diagnostics().iter().map(|d| d.code).collect()
}

// ============================================================================
// Symbol Creation
// ============================================================================

#[test]
fn test_bind_script_declarations_into_file_locals() {
    let mut b = AstBuilder::new();
    let a = b.simple_variable(NodeFlags::CONST, "a", None);
    let c = b.simple_variable(NodeFlags::NONE, "c", None);
    let func = b.function_declaration(None, "foo", vec![], Some(vec![]));
    let class = b.class_declaration(None, "Bar", vec![]);
    let file = b.finish_file("a.ts", vec![a, c, func, class]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    let locals = binding.locals(file);
    for name in ["a", "c", "foo", "Bar"] {
        assert!(lookup(&ast, locals, name).is_some(), "missing local {:?}", name);
    }
    let a_symbol = lookup(&ast, locals, "a").expect("a is bound");
    assert!(binding.symbol(a_symbol).has_flags(SymbolFlags::BLOCK_SCOPED_VARIABLE));
    let c_symbol = lookup(&ast, locals, "c").expect("c is bound");
    assert!(binding.symbol(c_symbol).has_flags(SymbolFlags::FUNCTION_SCOPED_VARIABLE));
    assert!(binding.diagnostics.is_empty(), "diagnostics {:?}", binding.diagnostics);
}

#[test]
fn test_bind_enum_members_into_exports() {
    let mut b = AstBuilder::new();
    let names = ["Red", "Green", "Blue"];
    let members: Vec<NodeId> = names
        .iter()
        .map(|n| {
            let name = b.identifier(n);
            b.enum_member(name, None)
        })
        .collect();
    let decl = b.enum_declaration(None, "Color", members);
    b.finish_file("a.ts", vec![decl]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    let color = ast.symbol(decl).expect("enum has a symbol");
    assert!(binding.symbol(color).has_flags(SymbolFlags::REGULAR_ENUM));
    let exports = binding.exports(color).expect("enum has exports");
    assert_eq!(exports.len(), 3);
    let red = lookup(&ast, Some(exports), "Red").expect("Red is bound");
    assert_eq!(binding.symbol(red).parent, Some(color));
}

#[test]
fn test_class_members_split_by_static() {
    let mut b = AstBuilder::new();
    let static_mods = b.modifiers(&[SyntaxKind::StaticKeyword]);
    let s_name = b.identifier("s");
    let s = b.property_declaration(static_mods, s_name, None, None);
    let i_name = b.identifier("i");
    let i = b.property_declaration(None, i_name, None, None);
    let class = b.class_declaration(None, "C", vec![s, i]);
    b.finish_file("a.ts", vec![class]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    let c = ast.symbol(class).expect("class has a symbol");
    assert!(lookup(&ast, binding.exports(c), "s").is_some());
    assert!(lookup(&ast, binding.exports(c), "prototype").is_some());
    assert!(lookup(&ast, binding.members(c), "i").is_some());
    assert!(lookup(&ast, binding.members(c), "s").is_none());
}

#[test]
fn test_parameter_property_is_class_member() {
    let mut b = AstBuilder::new();
    let mods = b.modifiers(&[SyntaxKind::PrivateKeyword]);
    let name = b.identifier("x");
    let param = b.variable_like(
        SyntaxKind::Parameter,
        VariableLikeData {
            modifiers: mods,
            ..VariableLikeData::named(name)
        },
    );
    let ctor = b.constructor(None, vec![param], Some(vec![]));
    let class = b.class_declaration(None, "C", vec![ctor]);
    b.finish_file("a.ts", vec![class]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    let c = ast.symbol(class).expect("class has a symbol");
    let member = lookup(&ast, binding.members(c), "x").expect("parameter property");
    assert!(binding.symbol(member).has_flags(SymbolFlags::PROPERTY));
    assert!(lookup(&ast, binding.locals(ctor), "x").is_some());
    assert!(lookup(&ast, binding.members(c), "__constructor").is_some());
}

#[test]
fn test_block_scoped_declarations_live_in_block() {
    let mut b = AstBuilder::new();
    let inner = b.simple_variable(NodeFlags::LET, "x", None);
    let block = b.block(vec![inner]);
    let file = b.finish_file("a.ts", vec![block]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    assert!(lookup(&ast, binding.locals(block), "x").is_some());
    assert!(lookup(&ast, binding.locals(file), "x").is_none());
}

#[test]
fn test_var_hoists_to_function() {
    let mut b = AstBuilder::new();
    let inner = b.simple_variable(NodeFlags::NONE, "v", None);
    let block = b.block(vec![inner]);
    let func = b.function_declaration(None, "f", vec![], Some(vec![block]));
    b.finish_file("a.ts", vec![func]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    assert!(lookup(&ast, binding.locals(func), "v").is_some());
    assert!(lookup(&ast, binding.locals(block), "v").is_none());
}

#[test]
fn test_function_type_gets_type_literal_symbol() {
    let mut b = AstBuilder::new();
    let ret = b.type_reference("string", vec![]);
    let fn_type = b.function_type(SyntaxKind::FunctionType, vec![], vec![], ret);
    let alias = b.type_alias(None, "F", vec![], fn_type);
    b.finish_file("a.ts", vec![alias]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    let literal = ast.symbol(fn_type).expect("function type has a symbol");
    assert!(binding.symbol(literal).has_flags(SymbolFlags::TYPE_LITERAL));
    let call = lookup(&ast, binding.members(literal), "__call").expect("call signature member");
    assert!(binding.symbol(call).has_flags(SymbolFlags::SIGNATURE));
}

// ============================================================================
// Modules
// ============================================================================

#[test]
fn test_exported_variable_has_export_value_local() {
    let mut b = AstBuilder::new();
    let mods = b.modifiers(&[SyntaxKind::ExportKeyword]);
    let name = b.identifier("x");
    let one = b.numeric_literal("1");
    let decl = b.variable_declaration(name, None, Some(one));
    let stmt = b.variable_statement(mods, NodeFlags::CONST, vec![decl]);
    let file = b.finish_file("m.ts", vec![stmt]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    let module = ast.symbol(file).expect("module file has a symbol");
    assert_eq!(
        ast.interner().resolve(binding.symbol(module).name),
        "\"m\"",
        "module symbol is named after the file"
    );
    let local = lookup(&ast, binding.locals(file), "x").expect("local half");
    let export = lookup(&ast, binding.exports(module), "x").expect("exported half");
    assert_eq!(binding.symbol(local).flags, SymbolFlags::EXPORT_VALUE);
    assert_eq!(binding.symbol(local).export_symbol, Some(export));
    assert!(binding.symbol(export).has_flags(SymbolFlags::BLOCK_SCOPED_VARIABLE));
    assert_eq!(ast.local_symbol(decl), Some(local));
    assert_eq!(ast.symbol(decl), Some(export));
}

#[test]
fn test_module_locals_do_not_become_globals() {
    let mut b = AstBuilder::new();
    let mods = b.modifiers(&[SyntaxKind::ExportKeyword]);
    let func = b.function_declaration(mods, "f", vec![], Some(vec![]));
    let hidden = b.simple_variable(NodeFlags::LET, "hidden", None);
    b.finish_file("m.ts", vec![func, hidden]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    assert!(lookup(&ast, Some(&binding.globals), "hidden").is_none());
    assert!(lookup(&ast, Some(&binding.globals), "f").is_none());
}

#[test]
fn test_namespace_of_types_is_namespace_module() {
    let mut b = AstBuilder::new();
    let target = b.type_reference("string", vec![]);
    let alias = b.type_alias(None, "T", vec![], target);
    let body = b.module_block(vec![alias]);
    let name = b.identifier("N");
    let ns = b.module_declaration(None, name, Some(body), NodeFlags::NAMESPACE);
    let value_body_stmt = b.simple_variable(NodeFlags::LET, "v", None);
    let value_body = b.module_block(vec![value_body_stmt]);
    let value_name = b.identifier("V");
    let value_ns = b.module_declaration(None, value_name, Some(value_body), NodeFlags::NAMESPACE);
    b.finish_file("a.ts", vec![ns, value_ns]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    let n = ast.symbol(ns).expect("namespace symbol");
    assert_eq!(binding.symbol(n).flags, SymbolFlags::NAMESPACE_MODULE);
    let v = ast.symbol(value_ns).expect("namespace symbol");
    assert!(binding.symbol(v).has_flags(SymbolFlags::VALUE_MODULE));
    assert_eq!(
        binder::get_module_instance_state(&ast, value_ns),
        ModuleInstanceState::Instantiated
    );
}

#[test]
fn test_export_modifier_on_ambient_module_is_reported() {
    let mut b = AstBuilder::new();
    let mods = b.modifiers(&[SyntaxKind::ExportKeyword, SyntaxKind::DeclareKeyword]);
    let name = b.string_literal("lib");
    let body = b.module_block(vec![]);
    let module = b.module_declaration(mods, name, Some(body), NodeFlags::NONE);
    b.finish_file("a.ts", vec![module]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    assert_eq!(codes(&binding), vec![2668]);
}

#[test]
fn test_global_module_export_outside_declaration_file() {
    let mut b = AstBuilder::new();
    let decl = b.namespace_export_declaration("Lib");
    let mods = b.modifiers(&[SyntaxKind::ExportKeyword]);
    let func = b.function_declaration(mods, "f", vec![], Some(vec![]));
    b.finish_file("a.ts", vec![decl, func]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    assert_eq!(codes(&binding), vec![1315]);
}

// ============================================================================
// Duplicate Declarations
// ============================================================================

#[test]
fn test_redeclared_let_reports_each_declaration() {
    let mut b = AstBuilder::new();
    let first = b.simple_variable(NodeFlags::LET, "x", None);
    let second = b.simple_variable(NodeFlags::LET, "x", None);
    b.finish_file("a.ts", vec![first, second]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    assert_eq!(codes(&binding), vec![2451, 2451]);
    assert!(
        binding.diagnostics.diagnostics()[0].message_text.contains("'x'"),
        "message {:?}",
        binding.diagnostics.diagnostics()[0].message_text
    );
}

#[test]
fn test_var_redeclaration_merges() {
    let mut b = AstBuilder::new();
    let first = b.simple_variable(NodeFlags::NONE, "x", None);
    let second = b.simple_variable(NodeFlags::NONE, "x", None);
    let file = b.finish_file("a.ts", vec![first, second]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    assert!(binding.diagnostics.is_empty(), "diagnostics {:?}", binding.diagnostics);
    let x = lookup(&ast, binding.locals(file), "x").expect("x is bound");
    assert_eq!(binding.symbol(x).declarations.len(), 2);
}

#[test]
fn test_class_and_var_conflict() {
    let mut b = AstBuilder::new();
    let var = b.simple_variable(NodeFlags::NONE, "C", None);
    let class = b.class_declaration(None, "C", vec![]);
    b.finish_file("a.ts", vec![var, class]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    assert_eq!(codes(&binding), vec![2300, 2300]);
}

#[test]
fn test_enum_conflict_uses_enum_message() {
    let mut b = AstBuilder::new();
    let var = b.simple_variable(NodeFlags::LET, "E", None);
    let decl = b.enum_declaration(None, "E", vec![]);
    b.finish_file("a.ts", vec![var, decl]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    assert_eq!(codes(&binding), vec![2567, 2567]);
}

#[test]
fn test_multiple_default_exports() {
    let mut b = AstBuilder::new();
    let first_mods = b.modifiers(&[SyntaxKind::ExportKeyword, SyntaxKind::DefaultKeyword]);
    let first = b.class_declaration(first_mods, "A", vec![]);
    let second_mods = b.modifiers(&[SyntaxKind::ExportKeyword, SyntaxKind::DefaultKeyword]);
    let second = b.class_declaration(second_mods, "B", vec![]);
    b.finish_file("m.ts", vec![first, second]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    assert_eq!(codes(&binding), vec![2528, 2528]);
    let previous = &binding.diagnostics.diagnostics()[0];
    let related: Vec<u32> = previous.related_information.iter().map(|d| d.code).collect();
    assert_eq!(related, vec![2753]);
    let current = &binding.diagnostics.diagnostics()[1];
    let related: Vec<u32> = current.related_information.iter().map(|d| d.code).collect();
    assert_eq!(related, vec![2752]);
}

#[test]
fn test_interface_declarations_merge() {
    let mut b = AstBuilder::new();
    let a_name = b.identifier("a");
    let a = b.property_signature(a_name, None);
    let first = b.interface_declaration(None, "I", vec![a]);
    let b_name = b.identifier("b");
    let b_prop = b.property_signature(b_name, None);
    let second = b.interface_declaration(None, "I", vec![b_prop]);
    b.finish_file("a.ts", vec![first, second]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    assert!(binding.diagnostics.is_empty(), "diagnostics {:?}", binding.diagnostics);
    let i = ast.symbol(first).expect("interface symbol");
    assert_eq!(ast.symbol(second), Some(i));
    assert_eq!(binding.members(i).map(|m| m.len()), Some(2));
}

// ============================================================================
// Globals
// ============================================================================

#[test]
fn test_script_files_merge_into_globals() {
    let mut b = AstBuilder::new();
    let a_name = b.identifier("a");
    let a = b.property_signature(a_name, None);
    let first = b.interface_declaration(None, "I", vec![a]);
    b.finish_file("a.ts", vec![first]);
    let b_name = b.identifier("b");
    let b_prop = b.property_signature(b_name, None);
    let second = b.interface_declaration(None, "I", vec![b_prop]);
    b.finish_file("b.ts", vec![second]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    let global = lookup(&ast, Some(&binding.globals), "I").expect("global interface");
    assert_eq!(binding.symbol(global).declarations, vec![first, second]);
    assert_eq!(ast.symbol(second), Some(global));
    let members = binding.members(global).expect("merged members");
    assert!(lookup(&ast, Some(members), "a").is_some());
    assert!(lookup(&ast, Some(members), "b").is_some());
}

#[test]
fn test_conflicting_globals_report_every_declaration() {
    let mut b = AstBuilder::new();
    let first = b.simple_variable(NodeFlags::LET, "x", None);
    b.finish_file("a.ts", vec![first]);
    let second = b.simple_variable(NodeFlags::LET, "x", None);
    b.finish_file("b.ts", vec![second]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    assert_eq!(codes(&binding), vec![2451, 2451]);
    let files: Vec<_> = binding
        .diagnostics
        .diagnostics()
        .iter()
        .map(|d| d.file.clone().unwrap_or_default())
        .collect();
    assert!(files.contains(&"a.ts".to_string()) && files.contains(&"b.ts".to_string()), "files {:?}", files);
}

#[test]
fn test_global_augmentation_merges_into_globals() {
    let mut b = AstBuilder::new();
    let inner = b.interface_declaration(None, "Window", vec![]);
    let body = b.module_block(vec![inner]);
    let global_name = b.identifier("global");
    let mods = b.modifiers(&[SyntaxKind::DeclareKeyword]);
    let global = b.module_declaration(mods, global_name, Some(body), NodeFlags::GLOBAL_AUGMENTATION);
    let export_mods = b.modifiers(&[SyntaxKind::ExportKeyword]);
    let func = b.function_declaration(export_mods, "f", vec![], Some(vec![]));
    b.finish_file("m.ts", vec![global, func]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    assert!(lookup(&ast, Some(&binding.globals), "Window").is_some());
    assert!(lookup(&ast, Some(&binding.globals), "f").is_none());
}

// ============================================================================
// Type Parameters
// ============================================================================

#[test]
fn test_infer_type_parameter_belongs_to_conditional() {
    let mut b = AstBuilder::new();
    let check = b.type_reference("T", vec![]);
    let infer = b.infer_type("U");
    let extends = b.type_reference("Array", vec![infer]);
    let when_true = b.type_reference("U", vec![]);
    let when_false = b.type_reference("never", vec![]);
    let conditional = b.conditional_type(check, extends, when_true, when_false);
    let t = b.type_parameter("T", None, None);
    let alias = b.type_alias(None, "X", vec![t], conditional);
    b.finish_file("a.ts", vec![alias]);
    let mut ast = b.build();
    let binding = bind(&mut ast);

    assert!(lookup(&ast, binding.locals(conditional), "U").is_some());
    assert!(lookup(&ast, binding.locals(alias), "T").is_some());
    assert!(lookup(&ast, binding.locals(alias), "U").is_none());
}
