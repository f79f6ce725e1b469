//! Type table tests.
//!
//! Unions and intersections are built against an empty program so that
//! the canonical order only depends on the types themselves.

use tscheck_ast::AstBuilder;
use tscheck_checker::types::{IndexFlags, TypeFlags, TypeTable};
use tscheck_checker::{Program, TypeId};
use tscheck_options::CompilerOptions;

/// Helper: a bound program with one empty file.
fn empty_program() -> Program {
    let mut b = AstBuilder::new();
    b.finish_file("a.ts", vec![]);
    Program::new(b.build(), CompilerOptions::default())
}

fn union(table: &mut TypeTable, program: &Program, types: &[TypeId]) -> TypeId {
    table.get_union_type(&program.ast, &program.binding, types)
}

fn intersection(table: &mut TypeTable, program: &Program, types: &[TypeId]) -> TypeId {
    table.get_intersection_type(&program.ast, &program.binding, types)
}

// ============================================================================
// Unions
// ============================================================================

#[test]
fn test_union_is_order_independent() {
    let program = empty_program();
    let mut table = TypeTable::new();
    let a = table.get_string_literal_type("a");
    let n = table.number_type;
    let ab = union(&mut table, &program, &[a, n]);
    let ba = union(&mut table, &program, &[n, a]);
    assert_eq!(ab, ba, "A | B and B | A should be the same type");
    assert_eq!(table.types(ab), table.types(ba));
}

#[test]
fn test_union_constituents_are_sorted() {
    let program = empty_program();
    let mut table = TypeTable::new();
    let c = table.get_string_literal_type("c");
    let a = table.get_string_literal_type("a");
    let b = table.get_string_literal_type("b");
    let u = union(&mut table, &program, &[c, a, b]);
    assert_eq!(table.types(u), &[a, b, c], "string literals sort by value");
}

#[test]
fn test_union_flattens_and_dedupes() {
    let program = empty_program();
    let mut table = TypeTable::new();
    let one = table.get_number_literal_type(1.0);
    let two = table.get_number_literal_type(2.0);
    let three = table.get_number_literal_type(3.0);
    let inner = union(&mut table, &program, &[one, two]);
    let outer = union(&mut table, &program, &[inner, three, one]);
    assert_eq!(table.types(outer), &[one, two, three], "got {:?}", table.types(outer));
    assert!(table.distributed(outer).iter().all(|&t| !table.is_union(t)));
}

#[test]
fn test_union_drops_never() {
    let program = empty_program();
    let mut table = TypeTable::new();
    let never = table.never_type;
    let string = table.string_type;
    assert_eq!(union(&mut table, &program, &[never, string]), string);
    assert_eq!(union(&mut table, &program, &[never]), never);
    assert_eq!(union(&mut table, &program, &[]), never);
}

#[test]
fn test_union_of_one_type_is_that_type() {
    let program = empty_program();
    let mut table = TypeTable::new();
    let string = table.string_type;
    assert_eq!(union(&mut table, &program, &[string, string]), string);
}

#[test]
fn test_union_of_boolean_literals_is_boolean() {
    let program = empty_program();
    let mut table = TypeTable::new();
    let (t, f) = (table.true_type, table.false_type);
    let boolean = union(&mut table, &program, &[t, f]);
    assert_eq!(boolean, table.boolean_type);
}

#[test]
fn test_any_and_unknown_absorb_unions() {
    let program = empty_program();
    let mut table = TypeTable::new();
    let (any, unknown, string, error) = (table.any_type, table.unknown_type, table.string_type, table.error_type);
    assert_eq!(union(&mut table, &program, &[string, any]), any);
    assert_eq!(union(&mut table, &program, &[unknown, string]), unknown);
    assert_eq!(union(&mut table, &program, &[error, string]), error);
}

// ============================================================================
// Intersections
// ============================================================================

#[test]
fn test_intersection_is_order_independent() {
    let program = empty_program();
    let mut table = TypeTable::new();
    let p = table.create_type_parameter(None);
    let q = table.create_type_parameter(None);
    let pq = intersection(&mut table, &program, &[p, q]);
    let qp = intersection(&mut table, &program, &[q, p]);
    assert_eq!(pq, qp);
    assert!(table.get(pq).flags.contains(TypeFlags::INTERSECTION));
}

#[test]
fn test_intersection_identities() {
    let program = empty_program();
    let mut table = TypeTable::new();
    let (never, unknown, string) = (table.never_type, table.unknown_type, table.string_type);
    assert_eq!(intersection(&mut table, &program, &[string, never]), never);
    assert_eq!(intersection(&mut table, &program, &[string, unknown]), string);
    assert_eq!(intersection(&mut table, &program, &[unknown]), unknown);
}

// ============================================================================
// Instantiable types
// ============================================================================

#[test]
fn test_index_types_are_cached_per_flags() {
    let mut table = TypeTable::new();
    let p = table.create_type_parameter(None);
    let keys = table.get_index_type(p, IndexFlags::NONE);
    assert_eq!(keys, table.get_index_type(p, IndexFlags::NONE));
    assert_ne!(keys, table.get_index_type(p, IndexFlags::STRINGS_ONLY));
}

#[test]
fn test_template_literal_types_are_cached() {
    let mut table = TypeTable::new();
    let string = table.string_type;
    let a = table.get_template_literal_type(vec!["a".into(), "".into()], vec![string]);
    let b = table.get_template_literal_type(vec!["a".into(), "".into()], vec![string]);
    assert_eq!(a, b);
    assert_eq!(table.types(a), &[string]);
}

#[test]
#[should_panic(expected = "Template literal types need one more text than types")]
fn test_template_literal_shape_is_checked() {
    let mut table = TypeTable::new();
    let string = table.string_type;
    table.get_template_literal_type(vec!["a".into()], vec![string]);
}

#[test]
#[should_panic(expected = "Cannot compare types from different checkers")]
fn test_union_rejects_foreign_types() {
    let program = empty_program();
    let mut table = TypeTable::new();
    let other = TypeTable::new();
    let string = table.string_type;
    union(&mut table, &program, &[string, other.number_type]);
}
