//! Canonical ordering of types, symbols, nodes and mappers.
//!
//! `TypeComparer` defines a total, deterministic order over every type
//! of one `TypeTable`. Union and intersection constituents are sorted
//! with it so that `A | B` and `B | A` produce the same cached type.
//! Comparison only reads the table; it never creates types.

use crate::mapper::{MapperId, TypeMapper};
use crate::types::{ObjectFlags, TupleData, Type, TypeFlags, TypeId, TypeKind, TypeTable};
use std::cmp::Ordering;
use tscheck_ast::types::{NodeId, SymbolId};
use tscheck_ast::Ast;
use tscheck_binder::Binding;

/// Order nodes by file (program order), then by position. A missing
/// node sorts last.
pub fn compare_nodes(ast: &Ast, n1: Option<NodeId>, n2: Option<NodeId>) -> Ordering {
    match (n1, n2) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(n1), Some(n2)) if n1 == n2 => Ordering::Equal,
        (Some(n1), Some(n2)) => {
            let f1 = ast.file_of(n1).file_index;
            let f2 = ast.file_of(n2).file_index;
            f1.cmp(&f2).then_with(|| ast.node(n1).pos().cmp(&ast.node(n2).pos()))
        }
    }
}

const INTRINSIC_KINDS: TypeFlags = TypeFlags::ANY
    .union(TypeFlags::UNKNOWN)
    .union(TypeFlags::STRING)
    .union(TypeFlags::NUMBER)
    .union(TypeFlags::BOOLEAN)
    .union(TypeFlags::BIG_INT)
    .union(TypeFlags::ES_SYMBOL)
    .union(TypeFlags::VOID)
    .union(TypeFlags::UNDEFINED)
    .union(TypeFlags::NULL)
    .union(TypeFlags::NEVER)
    .union(TypeFlags::NON_PRIMITIVE);

/// Read-only view used to order types of one checker.
#[derive(Clone, Copy)]
pub struct TypeComparer<'a> {
    types: &'a TypeTable,
    ast: &'a Ast,
    binding: &'a Binding,
}

impl<'a> TypeComparer<'a> {
    pub fn new(types: &'a TypeTable, ast: &'a Ast, binding: &'a Binding) -> Self {
        Self { types, ast, binding }
    }

    /// Compare two possibly missing types; a missing type sorts last.
    pub fn compare_optional_types(&self, t1: Option<TypeId>, t2: Option<TypeId>) -> Ordering {
        match (t1, t2) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(t1), Some(t2)) => self.compare_types(t1, t2),
        }
    }

    pub fn compare_types(&self, id1: TypeId, id2: TypeId) -> Ordering {
        if id1 == id2 {
            return Ordering::Equal;
        }
        if id1.checker() != id2.checker() {
            panic!("Cannot compare types from different checkers");
        }
        let t1 = self.types.get(id1);
        let t2 = self.types.get(id2);

        // Increasing type flags first
        sort_order_flags(t1)
            .cmp(&sort_order_flags(t2))
            // Named types by name, aliased types also by alias arguments
            .then_with(|| self.compare_type_names(t1, t2))
            .then_with(|| self.compare_same_kind(t1, t2))
            // Creation order, which is program order for the intrinsics
            .then_with(|| id1.index().cmp(&id2.index()))
    }

    fn compare_same_kind(&self, t1: &Type, t2: &Type) -> Ordering {
        let flags = t1.flags;
        if flags.intersects(INTRINSIC_KINDS) {
            // Only distinguished by id
            return Ordering::Equal;
        }
        if flags.contains(TypeFlags::OBJECT) {
            return self.compare_object_types(t1, t2);
        }
        match (&t1.kind, &t2.kind) {
            (TypeKind::Union(u1), TypeKind::Union(u2)) => match (u1.origin, u2.origin) {
                (None, None) => self.compare_type_lists(&u1.types, &u2.types),
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(o1), Some(o2)) => self.compare_types(o1, o2),
            },
            (TypeKind::Intersection { types: a }, TypeKind::Intersection { types: b }) => {
                self.compare_type_lists(a, b)
            }
            _ if flags.intersects(TypeFlags::ENUM | TypeFlags::ENUM_LITERAL | TypeFlags::UNIQUE_ES_SYMBOL) => {
                // Enum members follow declaration order
                self.compare_symbols(t1.symbol, t2.symbol)
            }
            (TypeKind::Literal(v1), TypeKind::Literal(v2)) => compare_literal_values(v1, v2),
            (TypeKind::TypeParameter(_), TypeKind::TypeParameter(_)) => self.compare_symbols(t1.symbol, t2.symbol),
            (
                TypeKind::Index { target: a, index_flags: fa },
                TypeKind::Index { target: b, index_flags: fb },
            ) => self.compare_types(*a, *b).then_with(|| fa.bits().cmp(&fb.bits())),
            (
                TypeKind::IndexedAccess { object_type: oa, index_type: ia, .. },
                TypeKind::IndexedAccess { object_type: ob, index_type: ib, .. },
            ) => self.compare_types(*oa, *ob).then_with(|| self.compare_types(*ia, *ib)),
            (TypeKind::Conditional(c1), TypeKind::Conditional(c2)) => {
                compare_nodes(self.ast, Some(c1.root.node), Some(c2.root.node))
                    .then_with(|| self.compare_type_mappers(c1.mapper, c2.mapper))
            }
            (
                TypeKind::Substitution { base_type: ba, constraint: ca },
                TypeKind::Substitution { base_type: bb, constraint: cb },
            ) => self.compare_types(*ba, *bb).then_with(|| self.compare_types(*ca, *cb)),
            (
                TypeKind::TemplateLiteral { texts: xa, types: ta },
                TypeKind::TemplateLiteral { texts: xb, types: tb },
            ) => xa.cmp(xb).then_with(|| self.compare_type_lists(ta, tb)),
            (TypeKind::StringMapping { target: a }, TypeKind::StringMapping { target: b }) => {
                self.compare_types(*a, *b)
            }
            _ => Ordering::Equal,
        }
    }

    fn compare_object_types(&self, t1: &Type, t2: &Type) -> Ordering {
        // Unnamed or identically named object types go by symbol
        let by_symbol = self.compare_symbols(t1.symbol, t2.symbol);
        if by_symbol != Ordering::Equal {
            return by_symbol;
        }
        let r1 = t1.object_flags.contains(ObjectFlags::REFERENCE);
        let r2 = t2.object_flags.contains(ObjectFlags::REFERENCE);
        match (r1, r2) {
            (true, true) => {
                let (target1, node1, args1) = t1.as_type_reference();
                let (target2, node2, args2) = t2.as_type_reference();
                let target1 = self.types.get(target1);
                let target2 = self.types.get(target2);
                if target1.object_flags.contains(ObjectFlags::TUPLE) && target2.object_flags.contains(ObjectFlags::TUPLE)
                {
                    let by_shape = self.compare_tuple_types(target1.as_tuple(), target2.as_tuple());
                    if by_shape != Ordering::Equal {
                        return by_shape;
                    }
                }
                if node1.is_none() && node2.is_none() {
                    self.compare_type_lists(args1, args2)
                } else {
                    // Deferred references go by source location, then by mapper
                    compare_nodes(self.ast, node1, node2)
                        .then_with(|| self.compare_type_mappers(t1.as_object().mapper, t2.as_object().mapper))
                }
            }
            // References before other object kinds
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => {
                let k1 = (t1.object_flags & ObjectFlags::OBJECT_TYPE_KIND_MASK).bits();
                let k2 = (t2.object_flags & ObjectFlags::OBJECT_TYPE_KIND_MASK).bits();
                k1.cmp(&k2)
                    .then_with(|| self.compare_type_mappers(t1.as_object().mapper, t2.as_object().mapper))
            }
        }
    }

    fn compare_type_names(&self, t1: &Type, t2: &Type) -> Ordering {
        let s1 = type_name_symbol(t1);
        let s2 = type_name_symbol(t2);
        if s1 == s2 {
            // Aliased before unaliased, then by alias arguments
            return match (&t1.alias, &t2.alias) {
                (Some(a1), Some(a2)) => self.compare_type_lists(&a1.type_arguments, &a2.type_arguments),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
        }
        match (s1, s2) {
            (None, _) => Ordering::Greater,
            (_, None) => Ordering::Less,
            (Some(s1), Some(s2)) => {
                // Checker-created symbols are not in the binding and sort after it
                let (Some(sym1), Some(sym2)) =
                    (self.binding.symbols.get(s1.index()), self.binding.symbols.get(s2.index()))
                else {
                    return s1.0.cmp(&s2.0);
                };
                let interner = self.ast.interner();
                interner.resolve(sym1.name).cmp(interner.resolve(sym2.name))
            }
        }
    }

    /// Order symbols by first declaration, then by name, then by id.
    /// A missing symbol sorts last.
    pub fn compare_symbols(&self, s1: Option<SymbolId>, s2: Option<SymbolId>) -> Ordering {
        let (s1, s2) = match (s1, s2) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Greater,
            (Some(_), None) => return Ordering::Less,
            (Some(s1), Some(s2)) if s1 == s2 => return Ordering::Equal,
            (Some(s1), Some(s2)) => (s1, s2),
        };
        // Checker-created symbols are not in the binding and sort after it
        let (Some(sym1), Some(sym2)) = (self.binding.symbols.get(s1.index()), self.binding.symbols.get(s2.index()))
        else {
            return s1.0.cmp(&s2.0);
        };
        let by_declaration = match (sym1.first_declaration(), sym2.first_declaration()) {
            (Some(d1), Some(d2)) => compare_nodes(self.ast, Some(d1), Some(d2)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        let interner = self.ast.interner();
        by_declaration
            .then_with(|| interner.resolve(sym1.name).cmp(interner.resolve(sym2.name)))
            .then_with(|| s1.0.cmp(&s2.0))
    }

    /// Shorter lists first, then element by element.
    pub fn compare_type_lists(&self, s1: &[TypeId], s2: &[TypeId]) -> Ordering {
        s1.len().cmp(&s2.len()).then_with(|| {
            s1.iter()
                .zip(s2)
                .map(|(&a, &b)| self.compare_types(a, b))
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        })
    }

    pub fn compare_tuple_types(&self, t1: &TupleData, t2: &TupleData) -> Ordering {
        if t1.readonly != t2.readonly {
            return if t1.readonly { Ordering::Greater } else { Ordering::Less };
        }
        t1.element_infos
            .len()
            .cmp(&t2.element_infos.len())
            .then_with(|| {
                t1.element_infos
                    .iter()
                    .zip(&t2.element_infos)
                    .map(|(a, b)| a.flags.bits().cmp(&b.flags.bits()))
                    .find(|ordering| *ordering != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| {
                t1.element_infos
                    .iter()
                    .zip(&t2.element_infos)
                    .map(|(a, b)| self.compare_element_labels(a.labeled_declaration, b.labeled_declaration))
                    .find(|ordering| *ordering != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            })
    }

    fn compare_element_labels(&self, n1: Option<NodeId>, n2: Option<NodeId>) -> Ordering {
        match (n1, n2) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(n1), Some(n2)) => {
                let label = |n: NodeId| self.ast.name(n).map(|name| self.ast.text(name)).unwrap_or("");
                label(n1).cmp(label(n2))
            }
        }
    }

    /// Order mappers by shape, then by payload. A missing mapper sorts last.
    pub fn compare_type_mappers(&self, m1: Option<MapperId>, m2: Option<MapperId>) -> Ordering {
        let (m1, m2) = match (m1, m2) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Greater,
            (Some(_), None) => return Ordering::Less,
            (Some(m1), Some(m2)) if m1 == m2 => return Ordering::Equal,
            (Some(m1), Some(m2)) => (m1, m2),
        };
        let d1 = self.types.mapper_data(m1);
        let d2 = self.types.mapper_data(m2);
        d1.kind().cmp(&d2.kind()).then_with(|| match (d1, d2) {
            (TypeMapper::Simple { source: s1, target: t1 }, TypeMapper::Simple { source: s2, target: t2 }) => {
                self.compare_types(*s1, *s2).then_with(|| self.compare_types(*t1, *t2))
            }
            (
                TypeMapper::Array { sources: s1, targets: t1 },
                TypeMapper::Array { sources: s2, targets: t2 },
            ) => self.compare_type_lists(s1, s2).then_with(|| {
                self.compare_type_lists(t1.as_deref().unwrap_or(&[]), t2.as_deref().unwrap_or(&[]))
            }),
            (
                TypeMapper::ArrayToSingle { sources: s1, target: t1 },
                TypeMapper::ArrayToSingle { sources: s2, target: t2 },
            ) => self.compare_type_lists(s1, s2).then_with(|| self.compare_types(*t1, *t2)),
            (
                TypeMapper::Merged { mapper1: a1, mapper2: b1 },
                TypeMapper::Merged { mapper1: a2, mapper2: b2 },
            ) => self
                .compare_type_mappers(Some(*a1), Some(*a2))
                .then_with(|| self.compare_type_mappers(Some(*b1), Some(*b2))),
            _ => Ordering::Equal,
        })
    }
}

/// Enum-like unit types share one bucket so they sort by symbol.
fn sort_order_flags(t: &Type) -> u32 {
    if t.flags.intersects(TypeFlags::ENUM_LITERAL | TypeFlags::ENUM) && !t.is_union() {
        return TypeFlags::ENUM.bits();
    }
    t.flags.bits()
}

fn type_name_symbol(t: &Type) -> Option<SymbolId> {
    if let Some(alias) = &t.alias {
        return Some(alias.symbol);
    }
    if t.flags.intersects(TypeFlags::TYPE_PARAMETER | TypeFlags::STRING_MAPPING)
        || t.object_flags
            .intersects(ObjectFlags::CLASS_OR_INTERFACE | ObjectFlags::REFERENCE)
    {
        return t.symbol;
    }
    None
}

fn compare_literal_values(v1: &crate::types::LiteralValue, v2: &crate::types::LiteralValue) -> Ordering {
    use crate::types::LiteralValue;
    match (v1, v2) {
        (LiteralValue::String(a), LiteralValue::String(b)) => a.cmp(b),
        (LiteralValue::Number(a), LiteralValue::Number(b)) => a.total_cmp(b),
        // false before true
        (LiteralValue::Boolean(a), LiteralValue::Boolean(b)) => a.cmp(b),
        (LiteralValue::BigInt(a), LiteralValue::BigInt(b)) => {
            // Negative values first, then by magnitude
            let magnitude = a
                .base10_value
                .len()
                .cmp(&b.base10_value.len())
                .then_with(|| a.base10_value.cmp(&b.base10_value));
            match (a.negative, b.negative) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (true, true) => magnitude.reverse(),
                (false, false) => magnitude,
            }
        }
        _ => Ordering::Equal,
    }
}
