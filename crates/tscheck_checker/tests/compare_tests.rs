//! Ordering engine tests.
//!
//! The comparer has to be a total order over every type of one table:
//! reflexive, antisymmetric and transitive, with sorting idempotent.
//! Symbols and nodes order by program position.

use std::cmp::Ordering;
use tscheck_ast::*;
use tscheck_checker::types::{IndexFlags, PseudoBigInt, TypeAlias, TypeTable};
use tscheck_checker::{compare_nodes, Program, TypeComparer, TypeId};
use tscheck_options::CompilerOptions;

/// Helper: a bound program with one empty file.
fn empty_program() -> Program {
    let mut b = AstBuilder::new();
    b.finish_file("a.ts", vec![]);
    Program::new(b.build(), CompilerOptions::default())
}

/// A mix of every kind of type the table can make without declarations.
fn type_pool(table: &mut TypeTable, program: &Program) -> Vec<TypeId> {
    let mut pool = vec![
        table.any_type,
        table.unknown_type,
        table.string_type,
        table.number_type,
        table.bigint_type,
        table.boolean_type,
        table.true_type,
        table.false_type,
        table.void_type,
        table.undefined_type,
        table.null_type,
        table.never_type,
        table.es_symbol_type,
        table.non_primitive_type,
    ];
    for text in ["b", "a", "", "zz"] {
        pool.push(table.get_string_literal_type(text));
    }
    for value in [3.0, -1.0, 0.5, 1e21] {
        pool.push(table.get_number_literal_type(value));
    }
    for text in ["10n", "9n"] {
        pool.push(table.get_bigint_literal_type(PseudoBigInt::parse(text)));
    }
    pool.push(table.get_bigint_literal_type(PseudoBigInt::new(true, "4")));
    let p = table.create_type_parameter(None);
    let q = table.create_type_parameter(None);
    pool.extend([p, q]);

    let (lit_b, lit_a, three) = (pool[14], pool[15], pool[18]);
    pool.push(table.get_union_type(&program.ast, &program.binding, &[lit_b, lit_a]));
    pool.push(table.get_union_type(&program.ast, &program.binding, &[lit_b, three]));
    pool.push(table.get_intersection_type(&program.ast, &program.binding, &[p, q]));
    pool.push(table.get_index_type(p, IndexFlags::NONE));
    pool.push(table.get_index_type(q, IndexFlags::NONE));
    let string = table.string_type;
    pool.push(table.get_template_literal_type(vec!["x".into(), "".into()], vec![string]));
    pool.push(table.get_template_literal_type(vec!["y".into(), "".into()], vec![string]));
    pool
}

fn sign(ordering: Ordering) -> i8 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

// ============================================================================
// Total order
// ============================================================================

#[test]
fn test_compare_types_is_reflexive_and_antisymmetric() {
    let program = empty_program();
    let mut table = TypeTable::new();
    let pool = type_pool(&mut table, &program);
    let comparer = TypeComparer::new(&table, &program.ast, &program.binding);
    for &a in &pool {
        assert_eq!(comparer.compare_types(a, a), Ordering::Equal, "{:?} should equal itself", a);
        for &b in &pool {
            let ab = sign(comparer.compare_types(a, b));
            let ba = sign(comparer.compare_types(b, a));
            assert_eq!(ab, -ba, "cmp({:?}, {:?}) is not antisymmetric", a, b);
            if a != b {
                assert_ne!(ab, 0, "distinct types {:?} and {:?} compare equal", a, b);
            }
        }
    }
}

#[test]
fn test_compare_types_is_transitive() {
    let program = empty_program();
    let mut table = TypeTable::new();
    let pool = type_pool(&mut table, &program);
    let comparer = TypeComparer::new(&table, &program.ast, &program.binding);
    for &a in &pool {
        for &b in &pool {
            if comparer.compare_types(a, b) != Ordering::Less {
                continue;
            }
            for &c in &pool {
                if comparer.compare_types(b, c) == Ordering::Less {
                    assert_eq!(
                        comparer.compare_types(a, c),
                        Ordering::Less,
                        "{:?} < {:?} < {:?} but not {:?} < {:?}",
                        a,
                        b,
                        c,
                        a,
                        c
                    );
                }
            }
        }
    }
}

#[test]
fn test_sorting_is_idempotent() {
    let program = empty_program();
    let mut table = TypeTable::new();
    let mut pool = type_pool(&mut table, &program);
    pool.reverse();
    let comparer = TypeComparer::new(&table, &program.ast, &program.binding);
    pool.sort_by(|&a, &b| comparer.compare_types(a, b));
    let once = pool.clone();
    pool.sort_by(|&a, &b| comparer.compare_types(a, b));
    assert_eq!(once, pool);
}

#[test]
fn test_intrinsics_keep_creation_order() {
    let program = empty_program();
    let table = TypeTable::new();
    let comparer = TypeComparer::new(&table, &program.ast, &program.binding);
    assert_eq!(comparer.compare_types(table.any_type, table.error_type), Ordering::Less);
    assert_eq!(comparer.compare_types(table.string_type, table.number_type), Ordering::Less);
}

#[test]
fn test_literal_values_order_within_kind() {
    let program = empty_program();
    let mut table = TypeTable::new();
    let minus_one = table.get_number_literal_type(-1.0);
    let two = table.get_number_literal_type(2.0);
    let negative = table.get_bigint_literal_type(PseudoBigInt::new(true, "100"));
    let small = table.get_bigint_literal_type(PseudoBigInt::parse("9n"));
    let large = table.get_bigint_literal_type(PseudoBigInt::parse("10n"));
    let comparer = TypeComparer::new(&table, &program.ast, &program.binding);
    assert_eq!(comparer.compare_types(minus_one, two), Ordering::Less);
    assert_eq!(comparer.compare_types(negative, small), Ordering::Less);
    assert_eq!(comparer.compare_types(small, large), Ordering::Less, "9n sorts before 10n");
    assert_eq!(comparer.compare_types(table.false_type, table.true_type), Ordering::Less);
}

#[test]
fn test_missing_types_sort_last() {
    let program = empty_program();
    let table = TypeTable::new();
    let comparer = TypeComparer::new(&table, &program.ast, &program.binding);
    assert_eq!(comparer.compare_optional_types(Some(table.never_type), None), Ordering::Less);
    assert_eq!(comparer.compare_optional_types(None, None), Ordering::Equal);
}

#[test]
#[should_panic(expected = "Cannot compare types from different checkers")]
fn test_types_of_different_checkers_cannot_be_compared() {
    let program = empty_program();
    let table = TypeTable::new();
    let other = TypeTable::new();
    let comparer = TypeComparer::new(&table, &program.ast, &program.binding);
    comparer.compare_types(table.string_type, other.string_type);
}

// ============================================================================
// Symbols, nodes and mappers
// ============================================================================

/// `function <name><T>() {}`
fn generic_function(b: &mut AstBuilder, name: &str, type_parameter: &str) -> (NodeId, NodeId) {
    let tp = b.type_parameter(type_parameter, None, None);
    let name = b.identifier(name);
    let body = b.block(vec![]);
    let function = b.function_like(
        SyntaxKind::FunctionDeclaration,
        FunctionLikeData {
            name: Some(name),
            type_parameters: Some(NodeList::new(vec![tp])),
            body: Some(body),
            ..FunctionLikeData::default()
        },
    );
    (function, tp)
}

#[test]
fn test_same_named_type_parameters_order_by_declaration() {
    let mut b = AstBuilder::new();
    let (f, first) = generic_function(&mut b, "f", "T");
    let (g, second) = generic_function(&mut b, "g", "T");
    b.finish_file("a.ts", vec![f, g]);
    let program = Program::new(b.build(), CompilerOptions::default());
    let s1 = program.ast.symbol(first).expect("bound type parameter");
    let s2 = program.ast.symbol(second).expect("bound type parameter");

    let mut table = TypeTable::new();
    // Created in reverse so creation order disagrees with declaration order
    let t2 = table.create_type_parameter(Some(s2));
    let t1 = table.create_type_parameter(Some(s1));
    let comparer = TypeComparer::new(&table, &program.ast, &program.binding);
    assert_eq!(comparer.compare_symbols(Some(s1), Some(s2)), Ordering::Less);
    assert_eq!(comparer.compare_types(t1, t2), Ordering::Less);
}

#[test]
fn test_type_parameters_order_by_name_first() {
    let mut b = AstBuilder::new();
    let (f, z) = generic_function(&mut b, "f", "Z");
    let (g, a) = generic_function(&mut b, "g", "A");
    b.finish_file("a.ts", vec![f, g]);
    let program = Program::new(b.build(), CompilerOptions::default());
    let mut table = TypeTable::new();
    let tz = table.create_type_parameter(program.ast.symbol(z));
    let ta = table.create_type_parameter(program.ast.symbol(a));
    let comparer = TypeComparer::new(&table, &program.ast, &program.binding);
    assert_eq!(comparer.compare_types(ta, tz), Ordering::Less);
}

#[test]
fn test_aliased_type_sorts_before_unaliased_with_same_symbol() {
    let mut b = AstBuilder::new();
    let (f, tp) = generic_function(&mut b, "f", "T");
    b.finish_file("a.ts", vec![f]);
    let program = Program::new(b.build(), CompilerOptions::default());
    let symbol = program.ast.symbol(tp).expect("bound type parameter");

    let mut table = TypeTable::new();
    let plain = table.create_type_parameter(Some(symbol));
    let aliased = table.create_type_parameter(Some(symbol));
    let string = table.string_type;
    table.set_alias(
        aliased,
        TypeAlias {
            symbol,
            type_arguments: vec![string],
        },
    );
    let comparer = TypeComparer::new(&table, &program.ast, &program.binding);
    assert_eq!(comparer.compare_types(aliased, plain), Ordering::Less);
    assert_eq!(comparer.compare_types(plain, aliased), Ordering::Greater);
}

#[test]
fn test_symbols_outside_the_binding_order_by_id() {
    let mut b = AstBuilder::new();
    let (f, tp) = generic_function(&mut b, "f", "T");
    b.finish_file("a.ts", vec![f]);
    let program = Program::new(b.build(), CompilerOptions::default());
    let bound = program.ast.symbol(tp).expect("bound type parameter");
    let first_created = SymbolId(program.binding.symbols.len() as u32);
    let second_created = SymbolId(first_created.0 + 1);

    let mut table = TypeTable::new();
    let later = table.create_type_parameter(Some(second_created));
    let earlier = table.create_type_parameter(Some(first_created));
    let named = table.create_type_parameter(Some(bound));
    let comparer = TypeComparer::new(&table, &program.ast, &program.binding);
    assert_eq!(comparer.compare_types(earlier, later), Ordering::Less);
    assert_eq!(comparer.compare_types(named, earlier), Ordering::Less);
    assert_eq!(comparer.compare_types(later, named), Ordering::Greater);
}

#[test]
fn test_compare_nodes_uses_file_order_then_position() {
    let mut b = AstBuilder::new();
    let one = b.numeric_literal("1");
    let first_a = b.simple_variable(NodeFlags::LET, "a", None);
    let first_b = b.simple_variable(NodeFlags::LET, "b", Some(one));
    b.finish_file("a.ts", vec![first_a, first_b]);
    let second = b.simple_variable(NodeFlags::LET, "c", None);
    b.finish_file("b.ts", vec![second]);
    let ast = b.build();

    assert_eq!(compare_nodes(&ast, Some(first_a), Some(first_b)), Ordering::Less);
    assert_eq!(compare_nodes(&ast, Some(first_b), Some(second)), Ordering::Less);
    assert_eq!(compare_nodes(&ast, Some(second), Some(first_a)), Ordering::Greater);
    assert_eq!(compare_nodes(&ast, Some(first_a), None), Ordering::Less, "missing nodes sort last");
}

#[test]
fn test_mappers_order_by_shape_then_payload() {
    let program = empty_program();
    let mut table = TypeTable::new();
    let p = table.create_type_parameter(None);
    let q = table.create_type_parameter(None);
    let (string, number) = (table.string_type, table.number_type);
    let simple_string = table.new_simple_type_mapper(p, string);
    let simple_number = table.new_simple_type_mapper(p, number);
    let array = table.new_type_mapper(vec![p, q], Some(vec![string, number]));
    let merged = table.merge_type_mappers(Some(simple_string), array);

    let comparer = TypeComparer::new(&table, &program.ast, &program.binding);
    assert_eq!(
        comparer.compare_type_mappers(Some(simple_string), Some(simple_number)),
        Ordering::Less
    );
    assert_eq!(comparer.compare_type_mappers(Some(simple_number), Some(array)), Ordering::Less);
    assert_eq!(comparer.compare_type_mappers(Some(array), Some(merged)), Ordering::Less);
    assert_eq!(comparer.compare_type_mappers(Some(merged), None), Ordering::Less);
}
