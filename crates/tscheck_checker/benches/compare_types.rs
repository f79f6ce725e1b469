use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tscheck_ast::AstBuilder;
use tscheck_checker::types::TypeTable;
use tscheck_checker::{Program, TypeComparer, TypeId};
use tscheck_options::CompilerOptions;

const LITERALS: usize = 2_000;

fn empty_program() -> Program {
    let mut b = AstBuilder::new();
    b.finish_file("bench.ts", vec![]);
    Program::new(b.build(), CompilerOptions::default())
}

/// String and number literals plus small unions of them, in a scrambled
/// creation order.
fn build_types(table: &mut TypeTable, program: &Program) -> Vec<TypeId> {
    let mut types = Vec::with_capacity(LITERALS * 2);
    for i in 0..LITERALS {
        let scrambled = (i * 7919) % LITERALS;
        types.push(table.get_string_literal_type(&format!("key{scrambled}")));
        types.push(table.get_number_literal_type(scrambled as f64));
    }
    let unions: Vec<TypeId> = types
        .chunks(4)
        .map(|chunk| table.get_union_type(&program.ast, &program.binding, chunk))
        .collect();
    types.extend(unions);
    types
}

fn bench_sort_types(c: &mut Criterion) {
    let program = empty_program();
    let mut table = TypeTable::new();
    let types = build_types(&mut table, &program);
    let comparer = TypeComparer::new(&table, &program.ast, &program.binding);

    c.bench_function("sort_literal_and_union_types", |b| {
        b.iter(|| {
            let mut sorted = types.clone();
            sorted.sort_by(|&x, &y| comparer.compare_types(x, y));
            black_box(sorted);
        });
    });
}

fn bench_build_unions(c: &mut Criterion) {
    let program = empty_program();
    c.bench_function("build_unions_from_literals", |b| {
        b.iter(|| {
            let mut table = TypeTable::new();
            black_box(build_types(&mut table, &program));
        });
    });
}

criterion_group!(benches, bench_sort_types, bench_build_unions);
criterion_main!(benches);
