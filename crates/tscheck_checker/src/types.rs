//! Type representation.
//!
//! Types are stored in a `TypeTable` (type arena) and referenced by
//! `TypeId`. Every id remembers the table that created it so types from
//! two checkers can never be mixed silently. The kind-specific payload is
//! a `TypeKind` variant; the `as_*` accessors panic when the payload does
//! not match, which is always an engine bug.

use crate::compare::TypeComparer;
use crate::mapper::{MapperId, TypeMapper};
use crate::signature::{IndexInfo, Signature, SignatureId};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};
use tracing::trace;
use tscheck_ast::types::{NodeId, SymbolId};
use tscheck_ast::Ast;
use tscheck_binder::Binding;
use tscheck_core::InternedString;

// ============================================================================
// Flags
// ============================================================================

bitflags::bitflags! {
    /// Primary kind of a type. Exactly one kind bit is set on any type;
    /// the composite constants group kinds for tests like "string-like".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u32 {
        const NONE              = 0;
        const ANY               = 1 << 0;
        const UNKNOWN           = 1 << 1;
        const UNDEFINED         = 1 << 2;
        const NULL              = 1 << 3;
        const VOID              = 1 << 4;
        const STRING            = 1 << 5;
        const NUMBER            = 1 << 6;
        const BIG_INT           = 1 << 7;
        const BOOLEAN           = 1 << 8;
        const ES_SYMBOL         = 1 << 9;
        const STRING_LITERAL    = 1 << 10;
        const NUMBER_LITERAL    = 1 << 11;
        const BIG_INT_LITERAL   = 1 << 12;
        const BOOLEAN_LITERAL   = 1 << 13;
        const UNIQUE_ES_SYMBOL  = 1 << 14;
        const ENUM_LITERAL      = 1 << 15;
        const ENUM              = 1 << 16;
        const NEVER             = 1 << 17;
        const TYPE_PARAMETER    = 1 << 18;
        const OBJECT            = 1 << 19;
        const UNION             = 1 << 20;
        const INTERSECTION      = 1 << 21;
        const INDEX             = 1 << 22;
        const INDEXED_ACCESS    = 1 << 23;
        const CONDITIONAL       = 1 << 24;
        const SUBSTITUTION      = 1 << 25;
        const NON_PRIMITIVE     = 1 << 26;
        const TEMPLATE_LITERAL  = 1 << 27;
        const STRING_MAPPING    = 1 << 28;

        const ANY_OR_UNKNOWN = Self::ANY.bits() | Self::UNKNOWN.bits();
        const NULLABLE = Self::UNDEFINED.bits() | Self::NULL.bits();
        const LITERAL = Self::STRING_LITERAL.bits()
            | Self::NUMBER_LITERAL.bits()
            | Self::BIG_INT_LITERAL.bits()
            | Self::BOOLEAN_LITERAL.bits();
        const UNIT = Self::ENUM.bits() | Self::LITERAL.bits() | Self::UNIQUE_ES_SYMBOL.bits() | Self::NULLABLE.bits();
        const FRESHABLE = Self::ENUM.bits() | Self::LITERAL.bits();
        const STRING_OR_NUMBER_LITERAL = Self::STRING_LITERAL.bits() | Self::NUMBER_LITERAL.bits();
        const STRING_OR_NUMBER_LITERAL_OR_UNIQUE = Self::STRING_OR_NUMBER_LITERAL.bits() | Self::UNIQUE_ES_SYMBOL.bits();
        const INTRINSIC = Self::ANY.bits()
            | Self::UNKNOWN.bits()
            | Self::STRING.bits()
            | Self::NUMBER.bits()
            | Self::BIG_INT.bits()
            | Self::BOOLEAN.bits()
            | Self::BOOLEAN_LITERAL.bits()
            | Self::ES_SYMBOL.bits()
            | Self::VOID.bits()
            | Self::UNDEFINED.bits()
            | Self::NULL.bits()
            | Self::NEVER.bits()
            | Self::NON_PRIMITIVE.bits();
        const STRING_LIKE = Self::STRING.bits()
            | Self::STRING_LITERAL.bits()
            | Self::TEMPLATE_LITERAL.bits()
            | Self::STRING_MAPPING.bits();
        const NUMBER_LIKE = Self::NUMBER.bits() | Self::NUMBER_LITERAL.bits() | Self::ENUM.bits();
        const BIG_INT_LIKE = Self::BIG_INT.bits() | Self::BIG_INT_LITERAL.bits();
        const BOOLEAN_LIKE = Self::BOOLEAN.bits() | Self::BOOLEAN_LITERAL.bits();
        const ENUM_LIKE = Self::ENUM.bits() | Self::ENUM_LITERAL.bits();
        const ES_SYMBOL_LIKE = Self::ES_SYMBOL.bits() | Self::UNIQUE_ES_SYMBOL.bits();
        const VOID_LIKE = Self::VOID.bits() | Self::UNDEFINED.bits();
        const PRIMITIVE = Self::STRING_LIKE.bits()
            | Self::NUMBER_LIKE.bits()
            | Self::BIG_INT_LIKE.bits()
            | Self::BOOLEAN_LIKE.bits()
            | Self::ENUM_LIKE.bits()
            | Self::ES_SYMBOL_LIKE.bits()
            | Self::VOID_LIKE.bits()
            | Self::NULL.bits();
        const UNION_OR_INTERSECTION = Self::UNION.bits() | Self::INTERSECTION.bits();
        const STRUCTURED_TYPE = Self::OBJECT.bits() | Self::UNION_OR_INTERSECTION.bits();
        const TYPE_VARIABLE = Self::TYPE_PARAMETER.bits() | Self::INDEXED_ACCESS.bits();
        const INSTANTIABLE_NON_PRIMITIVE = Self::TYPE_VARIABLE.bits()
            | Self::CONDITIONAL.bits()
            | Self::SUBSTITUTION.bits();
        const INSTANTIABLE_PRIMITIVE = Self::INDEX.bits()
            | Self::TEMPLATE_LITERAL.bits()
            | Self::STRING_MAPPING.bits();
        const INSTANTIABLE = Self::INSTANTIABLE_NON_PRIMITIVE.bits() | Self::INSTANTIABLE_PRIMITIVE.bits();
        const STRUCTURED_OR_INSTANTIABLE = Self::STRUCTURED_TYPE.bits() | Self::INSTANTIABLE.bits();
    }
}

bitflags::bitflags! {
    /// Sub-kind of object types.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ObjectFlags: u32 {
        const NONE                          = 0;
        const CLASS                         = 1 << 0;
        const INTERFACE                     = 1 << 1;
        const REFERENCE                     = 1 << 2;
        const TUPLE                         = 1 << 3;
        const ANONYMOUS                     = 1 << 4;
        const MAPPED                        = 1 << 5;
        const INSTANTIATED                  = 1 << 6;
        const OBJECT_LITERAL                = 1 << 7;
        const EVOLVING_ARRAY                = 1 << 8;
        const REVERSE_MAPPED                = 1 << 10;
        const FRESH_LITERAL                 = 1 << 13;
        const ARRAY_LITERAL                 = 1 << 14;
        /// Set on unions whose constituents are all primitive.
        const PRIMITIVE_UNION               = 1 << 15;
        const INSTANTIATION_EXPRESSION_TYPE = 1 << 24;
        const SINGLE_SIGNATURE_TYPE         = 1 << 25;

        const CLASS_OR_INTERFACE = Self::CLASS.bits() | Self::INTERFACE.bits();
        const OBJECT_TYPE_KIND_MASK = Self::CLASS_OR_INTERFACE.bits()
            | Self::REFERENCE.bits()
            | Self::TUPLE.bits()
            | Self::ANONYMOUS.bits()
            | Self::MAPPED.bits()
            | Self::REVERSE_MAPPED.bits()
            | Self::EVOLVING_ARRAY.bits()
            | Self::INSTANTIATION_EXPRESSION_TYPE.bits()
            | Self::SINGLE_SIGNATURE_TYPE.bits();
    }
}

bitflags::bitflags! {
    /// Shape of one tuple element.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u32 {
        const NONE      = 0;
        const REQUIRED  = 1 << 0;
        const OPTIONAL  = 1 << 1;
        const REST      = 1 << 2;
        const VARIADIC  = 1 << 3;

        const FIXED = Self::REQUIRED.bits() | Self::OPTIONAL.bits();
        const VARIABLE = Self::REST.bits() | Self::VARIADIC.bits();
        const NON_REQUIRED = Self::OPTIONAL.bits() | Self::REST.bits() | Self::VARIADIC.bits();
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IndexFlags: u32 {
        const NONE                  = 0;
        const STRINGS_ONLY          = 1 << 0;
        const NO_INDEX_SIGNATURES   = 1 << 1;
        const NO_REDUCIBLE_CHECK    = 1 << 2;
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AccessFlags: u32 {
        const NONE                  = 0;
        const INCLUDE_UNDEFINED     = 1 << 0;
        const NO_INDEX_SIGNATURES   = 1 << 1;
        const WRITING               = 1 << 2;
        const CACHE_SYMBOL          = 1 << 3;
        const ALLOW_MISSING         = 1 << 4;
        const EXPRESSION_POSITION   = 1 << 5;

        const PERSISTENT = Self::INCLUDE_UNDEFINED.bits();
    }
}

// ============================================================================
// Handles
// ============================================================================

static NEXT_CHECKER_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of the `TypeTable` (and so the checker) that owns a type.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CheckerId(u32);

impl CheckerId {
    fn next() -> Self {
        CheckerId(NEXT_CHECKER_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// Handle to a type in a `TypeTable`.
///
/// Deliberately not `Ord`: types are ordered with `TypeComparer`, never
/// by creation index alone.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TypeId {
    index: u32,
    checker: CheckerId,
}

impl TypeId {
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }

    #[inline]
    pub fn checker(self) -> CheckerId {
        self.checker
    }
}

// ============================================================================
// Types
// ============================================================================

/// A type produced through a type alias reference.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAlias {
    pub symbol: SymbolId,
    pub type_arguments: Vec<TypeId>,
}

/// A type in the type system.
#[derive(Debug, Clone)]
pub struct Type {
    pub id: TypeId,
    pub flags: TypeFlags,
    /// Meaningful for object types and a few union markers.
    pub object_flags: ObjectFlags,
    pub symbol: Option<SymbolId>,
    pub alias: Option<TypeAlias>,
    pub kind: TypeKind,
}

/// Value of a literal type.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    BigInt(PseudoBigInt),
    Boolean(bool),
}

/// A bigint literal value kept as decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PseudoBigInt {
    pub negative: bool,
    pub base10_value: String,
}

impl PseudoBigInt {
    pub fn new(negative: bool, base10_value: impl Into<String>) -> Self {
        let base10_value = base10_value.into();
        // -0n is 0n
        let negative = negative && base10_value != "0";
        Self { negative, base10_value }
    }

    /// Parse bigint literal source text such as `123n`.
    pub fn parse(text: &str) -> Self {
        let digits = text.strip_suffix('n').unwrap_or(text).replace('_', "");
        let trimmed = digits.trim_start_matches('0');
        Self::new(false, if trimmed.is_empty() { "0" } else { trimmed })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TypeParameterData {
    pub constraint: Option<TypeId>,
    pub default: Option<TypeId>,
    /// The type parameter this one was instantiated from.
    pub target: Option<TypeId>,
    pub mapper: Option<MapperId>,
    pub is_this_type: bool,
}

/// Members, signatures and index infos of a structured type.
#[derive(Debug, Clone, Default)]
pub struct ResolvedMembers {
    pub properties: IndexMap<InternedString, SymbolId>,
    pub call_signatures: Vec<SignatureId>,
    pub construct_signatures: Vec<SignatureId>,
    pub index_infos: Vec<IndexInfo>,
}

#[derive(Debug, Clone)]
pub struct ObjectData {
    /// Filled lazily once members are resolved.
    pub members: Option<ResolvedMembers>,
    /// Generic origin of an instantiated object type.
    pub target: Option<TypeId>,
    pub mapper: Option<MapperId>,
    pub shape: ObjectShape,
}

/// Payload of each object type category.
#[derive(Debug, Clone)]
pub enum ObjectShape {
    Anonymous { declaration: Option<NodeId> },
    /// Classes and interfaces. Generic ones are also references to themselves.
    Interface(InterfaceData),
    Reference(ReferenceData),
    /// Tuple targets (generic, referenced by tuple instantiations).
    Tuple(TupleData),
    Mapped(MappedData),
    ReverseMapped(ReverseMappedData),
    EvolvingArray { element_type: TypeId, final_array_type: Option<TypeId> },
    SingleSignature { outer_type_parameters: Vec<TypeId> },
    InstantiationExpression { node: NodeId },
}

#[derive(Debug, Clone, Default)]
pub struct InterfaceData {
    /// Outer type parameters followed by local ones.
    pub type_parameters: Vec<TypeId>,
    pub outer_type_parameters: Vec<TypeId>,
    pub local_type_parameters: Vec<TypeId>,
    pub this_type: Option<TypeId>,
    pub base_types: Vec<TypeId>,
}

#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub target: TypeId,
    /// Set for deferred references, whose arguments resolve on demand.
    pub node: Option<NodeId>,
    pub resolved_type_arguments: Vec<TypeId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TupleElementInfo {
    pub flags: ElementFlags,
    pub labeled_declaration: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct TupleData {
    pub type_parameters: Vec<TypeId>,
    pub element_infos: Vec<TupleElementInfo>,
    pub min_length: usize,
    pub fixed_length: usize,
    pub combined_flags: ElementFlags,
    pub readonly: bool,
}

#[derive(Debug, Clone)]
pub struct MappedData {
    pub declaration: NodeId,
    pub type_parameter: Option<TypeId>,
    pub constraint_type: Option<TypeId>,
    pub name_type: Option<TypeId>,
    pub template_type: Option<TypeId>,
    pub modifiers_type: Option<TypeId>,
}

#[derive(Debug, Clone)]
pub struct ReverseMappedData {
    pub source: TypeId,
    pub mapped_type: TypeId,
    pub constraint_type: TypeId,
}

#[derive(Debug, Clone)]
pub struct UnionData {
    /// Sorted, deduplicated, no nested unions and no `never`.
    pub types: Vec<TypeId>,
    /// Denormalized form the union was written as, if different.
    pub origin: Option<TypeId>,
}

/// The parts of a conditional type shared by all its instantiations.
#[derive(Debug, Clone)]
pub struct ConditionalRoot {
    pub node: NodeId,
    pub check_type: TypeId,
    pub extends_type: TypeId,
    pub is_distributive: bool,
    pub infer_type_parameters: Vec<TypeId>,
    pub outer_type_parameters: Vec<TypeId>,
}

#[derive(Debug, Clone)]
pub struct ConditionalData {
    pub root: ConditionalRoot,
    pub check_type: TypeId,
    pub extends_type: TypeId,
    pub mapper: Option<MapperId>,
    pub resolved_true_type: Option<TypeId>,
    pub resolved_false_type: Option<TypeId>,
}

/// Kind-specific data of a type.
#[derive(Debug, Clone)]
pub enum TypeKind {
    /// any, unknown, string, number, void, never, ...
    Intrinsic { name: &'static str },
    /// String, number, bigint and boolean literals, and enum members.
    Literal(LiteralValue),
    UniqueESSymbol { escaped_name: String },
    /// A non-literal enum.
    Enum,
    TypeParameter(TypeParameterData),
    Object(ObjectData),
    Union(UnionData),
    Intersection { types: Vec<TypeId> },
    /// `keyof T`
    Index { target: TypeId, index_flags: IndexFlags },
    /// `T[K]`
    IndexedAccess {
        object_type: TypeId,
        index_type: TypeId,
        access_flags: AccessFlags,
    },
    Conditional(ConditionalData),
    Substitution { base_type: TypeId, constraint: TypeId },
    /// `texts[0] ${types[0]} texts[1] ...`
    TemplateLiteral { texts: Vec<String>, types: Vec<TypeId> },
    /// `Uppercase<T>` and friends; the mapping is the type's symbol.
    StringMapping { target: TypeId },
}

impl Type {
    #[cold]
    fn kind_mismatch(&self, expected: &str) -> ! {
        panic!(
            "Type {} with flags {:?} is not {}",
            self.id.index, self.flags, expected
        )
    }

    #[inline]
    pub fn is_union(&self) -> bool {
        self.flags.contains(TypeFlags::UNION)
    }

    #[inline]
    pub fn is_intersection(&self) -> bool {
        self.flags.contains(TypeFlags::INTERSECTION)
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        self.flags.intersects(TypeFlags::LITERAL)
    }

    #[inline]
    pub fn is_type_parameter(&self) -> bool {
        self.flags.contains(TypeFlags::TYPE_PARAMETER)
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        self.flags.contains(TypeFlags::OBJECT)
    }

    /// Branches an operation distributes over: a union's constituents,
    /// nothing for `never`, the type itself otherwise.
    pub fn distributed(&self) -> &[TypeId] {
        match &self.kind {
            TypeKind::Union(data) => &data.types,
            _ if self.flags.contains(TypeFlags::NEVER) => &[],
            _ => std::slice::from_ref(&self.id),
        }
    }

    /// Component types of unions, intersections and template literals.
    pub fn types(&self) -> &[TypeId] {
        match &self.kind {
            TypeKind::Union(data) => &data.types,
            TypeKind::Intersection { types } | TypeKind::TemplateLiteral { types, .. } => types,
            _ => &[],
        }
    }

    /// The generic type this one was instantiated from.
    pub fn target(&self) -> Option<TypeId> {
        match &self.kind {
            TypeKind::TypeParameter(data) => data.target,
            TypeKind::Object(data) => match &data.shape {
                ObjectShape::Reference(reference) => Some(reference.target),
                _ => data.target,
            },
            _ => None,
        }
    }

    /// The mapper that produced this instantiation.
    pub fn mapper(&self) -> Option<MapperId> {
        match &self.kind {
            TypeKind::TypeParameter(data) => data.mapper,
            TypeKind::Object(data) => data.mapper,
            TypeKind::Conditional(data) => data.mapper,
            _ => None,
        }
    }

    #[inline]
    pub fn alias(&self) -> Option<&TypeAlias> {
        self.alias.as_ref()
    }

    pub fn as_literal(&self) -> &LiteralValue {
        match &self.kind {
            TypeKind::Literal(value) => value,
            _ => self.kind_mismatch("a literal type"),
        }
    }

    pub fn as_type_parameter(&self) -> &TypeParameterData {
        match &self.kind {
            TypeKind::TypeParameter(data) => data,
            _ => self.kind_mismatch("a type parameter"),
        }
    }

    pub fn as_object(&self) -> &ObjectData {
        match &self.kind {
            TypeKind::Object(data) => data,
            _ => self.kind_mismatch("an object type"),
        }
    }

    pub fn as_union(&self) -> &UnionData {
        match &self.kind {
            TypeKind::Union(data) => data,
            _ => self.kind_mismatch("a union type"),
        }
    }

    pub fn as_conditional(&self) -> &ConditionalData {
        match &self.kind {
            TypeKind::Conditional(data) => data,
            _ => self.kind_mismatch("a conditional type"),
        }
    }

    pub fn as_tuple(&self) -> &TupleData {
        match &self.as_object().shape {
            ObjectShape::Tuple(data) => data,
            _ => self.kind_mismatch("a tuple target"),
        }
    }

    pub fn as_interface(&self) -> &InterfaceData {
        match &self.as_object().shape {
            ObjectShape::Interface(data) => data,
            _ => self.kind_mismatch("a class or interface type"),
        }
    }

    pub fn as_mapped(&self) -> &MappedData {
        match &self.as_object().shape {
            ObjectShape::Mapped(data) => data,
            _ => self.kind_mismatch("a mapped type"),
        }
    }

    /// `(target, node, type arguments)` of a type with the `REFERENCE`
    /// object flag. Generic classes, interfaces and tuple targets are
    /// references to themselves with their type parameters as arguments.
    pub fn as_type_reference(&self) -> (TypeId, Option<NodeId>, &[TypeId]) {
        if !self.object_flags.contains(ObjectFlags::REFERENCE) {
            self.kind_mismatch("a type reference");
        }
        match &self.as_object().shape {
            ObjectShape::Reference(data) => (data.target, data.node, &data.resolved_type_arguments),
            ObjectShape::Interface(data) => (self.id, None, &data.type_parameters),
            ObjectShape::Tuple(data) => (self.id, None, &data.type_parameters),
            _ => self.kind_mismatch("a type reference"),
        }
    }
}

// ============================================================================
// Type Table
// ============================================================================

/// The type table stores all types of one checker and provides access by
/// `TypeId`. It also owns the mappers and signatures that types refer to.
#[derive(Debug)]
pub struct TypeTable {
    checker_id: CheckerId,
    types: Vec<Type>,
    pub(crate) mappers: Vec<TypeMapper>,
    pub(crate) signatures: Vec<Signature>,

    union_types: FxHashMap<Vec<TypeId>, TypeId>,
    intersection_types: FxHashMap<Vec<TypeId>, TypeId>,
    string_literal_types: FxHashMap<String, TypeId>,
    number_literal_types: FxHashMap<u64, TypeId>,
    bigint_literal_types: FxHashMap<PseudoBigInt, TypeId>,
    type_references: FxHashMap<(TypeId, Vec<TypeId>), TypeId>,
    tuple_targets: FxHashMap<(Vec<TupleElementInfo>, bool), TypeId>,
    index_types: FxHashMap<(TypeId, IndexFlags), TypeId>,
    indexed_access_types: FxHashMap<(TypeId, TypeId, AccessFlags), TypeId>,
    substitution_types: FxHashMap<(TypeId, TypeId), TypeId>,
    template_literal_types: FxHashMap<(Vec<String>, Vec<TypeId>), TypeId>,
    string_mapping_types: FxHashMap<(SymbolId, TypeId), TypeId>,

    // Well-known types, in creation order
    pub any_type: TypeId,
    pub error_type: TypeId,
    pub unknown_type: TypeId,
    pub undefined_type: TypeId,
    pub null_type: TypeId,
    pub string_type: TypeId,
    pub number_type: TypeId,
    pub bigint_type: TypeId,
    pub false_type: TypeId,
    pub true_type: TypeId,
    pub boolean_type: TypeId,
    pub es_symbol_type: TypeId,
    pub void_type: TypeId,
    pub never_type: TypeId,
    pub non_primitive_type: TypeId,
}

impl TypeTable {
    pub fn new() -> Self {
        let checker_id = CheckerId::next();
        let placeholder = TypeId {
            index: u32::MAX,
            checker: checker_id,
        };
        let mut table = Self {
            checker_id,
            types: Vec::with_capacity(1024),
            mappers: Vec::new(),
            signatures: Vec::new(),
            union_types: FxHashMap::default(),
            intersection_types: FxHashMap::default(),
            string_literal_types: FxHashMap::default(),
            number_literal_types: FxHashMap::default(),
            bigint_literal_types: FxHashMap::default(),
            type_references: FxHashMap::default(),
            tuple_targets: FxHashMap::default(),
            index_types: FxHashMap::default(),
            indexed_access_types: FxHashMap::default(),
            substitution_types: FxHashMap::default(),
            template_literal_types: FxHashMap::default(),
            string_mapping_types: FxHashMap::default(),
            any_type: placeholder,
            error_type: placeholder,
            unknown_type: placeholder,
            undefined_type: placeholder,
            null_type: placeholder,
            string_type: placeholder,
            number_type: placeholder,
            bigint_type: placeholder,
            false_type: placeholder,
            true_type: placeholder,
            boolean_type: placeholder,
            es_symbol_type: placeholder,
            void_type: placeholder,
            never_type: placeholder,
            non_primitive_type: placeholder,
        };

        table.any_type = table.create_intrinsic(TypeFlags::ANY, "any");
        table.error_type = table.create_intrinsic(TypeFlags::ANY, "error");
        table.unknown_type = table.create_intrinsic(TypeFlags::UNKNOWN, "unknown");
        table.undefined_type = table.create_intrinsic(TypeFlags::UNDEFINED, "undefined");
        table.null_type = table.create_intrinsic(TypeFlags::NULL, "null");
        table.string_type = table.create_intrinsic(TypeFlags::STRING, "string");
        table.number_type = table.create_intrinsic(TypeFlags::NUMBER, "number");
        table.bigint_type = table.create_intrinsic(TypeFlags::BIG_INT, "bigint");
        table.false_type = table.add_type(TypeFlags::BOOLEAN_LITERAL, TypeKind::Literal(LiteralValue::Boolean(false)));
        table.true_type = table.add_type(TypeFlags::BOOLEAN_LITERAL, TypeKind::Literal(LiteralValue::Boolean(true)));
        // false < true under the canonical order, so this list is already sorted
        let boolean_members = vec![table.false_type, table.true_type];
        table.boolean_type = table.add_type_with(
            TypeFlags::UNION,
            ObjectFlags::PRIMITIVE_UNION,
            None,
            TypeKind::Union(UnionData {
                types: boolean_members.clone(),
                origin: None,
            }),
        );
        table.union_types.insert(boolean_members, table.boolean_type);
        table.es_symbol_type = table.create_intrinsic(TypeFlags::ES_SYMBOL, "symbol");
        table.void_type = table.create_intrinsic(TypeFlags::VOID, "void");
        table.never_type = table.create_intrinsic(TypeFlags::NEVER, "never");
        table.non_primitive_type = table.create_intrinsic(TypeFlags::NON_PRIMITIVE, "object");

        table
    }

    #[inline]
    pub fn checker_id(&self) -> CheckerId {
        self.checker_id
    }

    /// Panic unless `id` was created by this table.
    #[inline]
    pub fn assert_owned(&self, id: TypeId) {
        if id.checker != self.checker_id {
            panic!("Cannot compare types from different checkers");
        }
    }

    fn create_intrinsic(&mut self, flags: TypeFlags, name: &'static str) -> TypeId {
        self.add_type(flags, TypeKind::Intrinsic { name })
    }

    /// Add a new type to the table and return its ID.
    pub fn add_type(&mut self, flags: TypeFlags, kind: TypeKind) -> TypeId {
        self.add_type_with(flags, ObjectFlags::NONE, None, kind)
    }

    pub fn add_type_with(
        &mut self,
        flags: TypeFlags,
        object_flags: ObjectFlags,
        symbol: Option<SymbolId>,
        kind: TypeKind,
    ) -> TypeId {
        let id = TypeId {
            index: self.types.len() as u32,
            checker: self.checker_id,
        };
        self.types.push(Type {
            id,
            flags,
            object_flags,
            symbol,
            alias: None,
            kind,
        });
        id
    }

    /// Get a type by its ID.
    pub fn get(&self, id: TypeId) -> &Type {
        self.assert_owned(id);
        &self.types[id.index()]
    }

    /// Get a mutable reference to a type by its ID.
    pub fn get_mut(&mut self, id: TypeId) -> &mut Type {
        self.assert_owned(id);
        &mut self.types[id.index()]
    }

    /// Get the total number of types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn set_alias(&mut self, id: TypeId, alias: TypeAlias) {
        self.get_mut(id).alias = Some(alias);
    }

    // ========================================================================
    // Literals
    // ========================================================================

    pub fn get_string_literal_type(&mut self, value: &str) -> TypeId {
        if let Some(&id) = self.string_literal_types.get(value) {
            return id;
        }
        let id = self.add_type(
            TypeFlags::STRING_LITERAL,
            TypeKind::Literal(LiteralValue::String(value.to_string())),
        );
        self.string_literal_types.insert(value.to_string(), id);
        id
    }

    pub fn get_number_literal_type(&mut self, value: f64) -> TypeId {
        // 0 and -0 are one literal type
        let key = if value == 0.0 { 0.0f64.to_bits() } else { value.to_bits() };
        if let Some(&id) = self.number_literal_types.get(&key) {
            return id;
        }
        let value = if value == 0.0 { 0.0 } else { value };
        let id = self.add_type(TypeFlags::NUMBER_LITERAL, TypeKind::Literal(LiteralValue::Number(value)));
        self.number_literal_types.insert(key, id);
        id
    }

    pub fn get_bigint_literal_type(&mut self, value: PseudoBigInt) -> TypeId {
        if let Some(&id) = self.bigint_literal_types.get(&value) {
            return id;
        }
        let id = self.add_type(
            TypeFlags::BIG_INT_LITERAL,
            TypeKind::Literal(LiteralValue::BigInt(value.clone())),
        );
        self.bigint_literal_types.insert(value, id);
        id
    }

    #[inline]
    pub fn get_boolean_literal_type(&self, value: bool) -> TypeId {
        if value {
            self.true_type
        } else {
            self.false_type
        }
    }

    /// A member of a literal enum. `member` is the enum member symbol.
    pub fn create_enum_literal_type(&mut self, member: SymbolId, value: LiteralValue) -> TypeId {
        let literal_flag = match value {
            LiteralValue::String(_) => TypeFlags::STRING_LITERAL,
            LiteralValue::Number(_) => TypeFlags::NUMBER_LITERAL,
            _ => panic!("Enum literal values are strings or numbers: {:?}", value),
        };
        self.add_type_with(
            TypeFlags::ENUM_LITERAL | literal_flag,
            ObjectFlags::NONE,
            Some(member),
            TypeKind::Literal(value),
        )
    }

    /// The declared type of an enum whose members are not all literals.
    pub fn create_enum_type(&mut self, symbol: SymbolId) -> TypeId {
        self.add_type_with(TypeFlags::ENUM, ObjectFlags::NONE, Some(symbol), TypeKind::Enum)
    }

    pub fn create_unique_es_symbol_type(&mut self, symbol: SymbolId, escaped_name: impl Into<String>) -> TypeId {
        self.add_type_with(
            TypeFlags::UNIQUE_ES_SYMBOL,
            ObjectFlags::NONE,
            Some(symbol),
            TypeKind::UniqueESSymbol {
                escaped_name: escaped_name.into(),
            },
        )
    }

    // ========================================================================
    // Type parameters
    // ========================================================================

    pub fn create_type_parameter(&mut self, symbol: Option<SymbolId>) -> TypeId {
        self.add_type_with(
            TypeFlags::TYPE_PARAMETER,
            ObjectFlags::NONE,
            symbol,
            TypeKind::TypeParameter(TypeParameterData::default()),
        )
    }

    pub fn set_type_parameter_constraint(&mut self, id: TypeId, constraint: TypeId) {
        match &mut self.get_mut(id).kind {
            TypeKind::TypeParameter(data) => data.constraint = Some(constraint),
            _ => panic!("Type {} is not a type parameter", id.index),
        }
    }

    // ========================================================================
    // Object types
    // ========================================================================

    pub fn create_object_type(
        &mut self,
        object_flags: ObjectFlags,
        symbol: Option<SymbolId>,
        shape: ObjectShape,
    ) -> TypeId {
        self.add_type_with(
            TypeFlags::OBJECT,
            object_flags,
            symbol,
            TypeKind::Object(ObjectData {
                members: None,
                target: None,
                mapper: None,
                shape,
            }),
        )
    }

    pub fn create_anonymous_type(&mut self, symbol: Option<SymbolId>, declaration: Option<NodeId>) -> TypeId {
        self.create_object_type(ObjectFlags::ANONYMOUS, symbol, ObjectShape::Anonymous { declaration })
    }

    /// A class or interface type. With type parameters the type is also
    /// a reference to itself.
    pub fn create_interface_type(
        &mut self,
        kind: ObjectFlags,
        symbol: SymbolId,
        outer_type_parameters: Vec<TypeId>,
        local_type_parameters: Vec<TypeId>,
    ) -> TypeId {
        debug_assert!(ObjectFlags::CLASS_OR_INTERFACE.contains(kind));
        let mut object_flags = kind;
        if !outer_type_parameters.is_empty() || !local_type_parameters.is_empty() {
            object_flags |= ObjectFlags::REFERENCE;
        }
        let mut type_parameters = outer_type_parameters.clone();
        type_parameters.extend_from_slice(&local_type_parameters);
        self.create_object_type(
            object_flags,
            Some(symbol),
            ObjectShape::Interface(InterfaceData {
                type_parameters,
                outer_type_parameters,
                local_type_parameters,
                this_type: None,
                base_types: Vec::new(),
            }),
        )
    }

    /// `target<type_arguments>`, one type per distinct argument list.
    pub fn create_type_reference(&mut self, target: TypeId, type_arguments: Vec<TypeId>) -> TypeId {
        let key = (target, type_arguments);
        if let Some(&id) = self.type_references.get(&key) {
            return id;
        }
        let symbol = self.get(target).symbol;
        let id = self.create_object_type(
            ObjectFlags::REFERENCE,
            symbol,
            ObjectShape::Reference(ReferenceData {
                target,
                node: None,
                resolved_type_arguments: key.1.clone(),
            }),
        );
        self.type_references.insert(key, id);
        id
    }

    /// A reference whose arguments are resolved later from `node`.
    pub fn create_deferred_type_reference(
        &mut self,
        target: TypeId,
        node: NodeId,
        mapper: Option<MapperId>,
    ) -> TypeId {
        let symbol = self.get(target).symbol;
        let id = self.create_object_type(
            ObjectFlags::REFERENCE,
            symbol,
            ObjectShape::Reference(ReferenceData {
                target,
                node: Some(node),
                resolved_type_arguments: Vec::new(),
            }),
        );
        if let TypeKind::Object(data) = &mut self.get_mut(id).kind {
            data.mapper = mapper;
        }
        id
    }

    /// The generic tuple target for one element shape.
    pub fn get_tuple_target_type(&mut self, element_infos: Vec<TupleElementInfo>, readonly: bool) -> TypeId {
        let key = (element_infos, readonly);
        if let Some(&id) = self.tuple_targets.get(&key) {
            return id;
        }
        let element_infos = key.0.clone();
        let type_parameters: Vec<TypeId> = element_infos.iter().map(|_| self.create_type_parameter(None)).collect();
        let min_length = element_infos
            .iter()
            .filter(|info| info.flags.contains(ElementFlags::REQUIRED))
            .count();
        let fixed_length = element_infos
            .iter()
            .take_while(|info| info.flags.intersects(ElementFlags::FIXED))
            .count();
        let combined_flags = element_infos
            .iter()
            .fold(ElementFlags::NONE, |flags, info| flags | info.flags);
        let id = self.create_object_type(
            ObjectFlags::TUPLE | ObjectFlags::REFERENCE,
            None,
            ObjectShape::Tuple(TupleData {
                type_parameters,
                element_infos,
                min_length,
                fixed_length,
                combined_flags,
                readonly,
            }),
        );
        self.tuple_targets.insert(key, id);
        id
    }

    pub fn create_tuple_type(
        &mut self,
        element_types: Vec<TypeId>,
        element_infos: Vec<TupleElementInfo>,
        readonly: bool,
    ) -> TypeId {
        assert_eq!(
            element_types.len(),
            element_infos.len(),
            "Tuple element types and infos differ in length"
        );
        let target = self.get_tuple_target_type(element_infos, readonly);
        self.create_type_reference(target, element_types)
    }

    pub fn create_mapped_type(&mut self, symbol: Option<SymbolId>, data: MappedData) -> TypeId {
        self.create_object_type(ObjectFlags::MAPPED, symbol, ObjectShape::Mapped(data))
    }

    pub fn create_reverse_mapped_type(&mut self, data: ReverseMappedData) -> TypeId {
        self.create_object_type(ObjectFlags::REVERSE_MAPPED, None, ObjectShape::ReverseMapped(data))
    }

    pub fn create_evolving_array_type(&mut self, element_type: TypeId) -> TypeId {
        self.create_object_type(
            ObjectFlags::EVOLVING_ARRAY,
            None,
            ObjectShape::EvolvingArray {
                element_type,
                final_array_type: None,
            },
        )
    }

    /// An anonymous type whose only member is one call or construct signature.
    pub fn create_single_signature_type(
        &mut self,
        symbol: Option<SymbolId>,
        signature: SignatureId,
        outer_type_parameters: Vec<TypeId>,
    ) -> TypeId {
        let is_construct = self.signature(signature).is_construct();
        let id = self.create_object_type(
            ObjectFlags::ANONYMOUS | ObjectFlags::SINGLE_SIGNATURE_TYPE,
            symbol,
            ObjectShape::SingleSignature { outer_type_parameters },
        );
        let mut members = ResolvedMembers::default();
        if is_construct {
            members.construct_signatures.push(signature);
        } else {
            members.call_signatures.push(signature);
        }
        self.set_structured_members(id, members);
        id
    }

    /// `f<T>` used as an expression.
    pub fn create_instantiation_expression_type(
        &mut self,
        target: TypeId,
        node: NodeId,
        mapper: Option<MapperId>,
    ) -> TypeId {
        let symbol = self.get(target).symbol;
        let id = self.create_object_type(
            ObjectFlags::ANONYMOUS | ObjectFlags::INSTANTIATION_EXPRESSION_TYPE,
            symbol,
            ObjectShape::InstantiationExpression { node },
        );
        if let TypeKind::Object(data) = &mut self.get_mut(id).kind {
            data.target = Some(target);
            data.mapper = mapper;
        }
        id
    }

    pub fn set_structured_members(&mut self, id: TypeId, members: ResolvedMembers) {
        match &mut self.get_mut(id).kind {
            TypeKind::Object(data) => data.members = Some(members),
            _ => panic!("Type {} is not an object type", id.index),
        }
    }

    // ========================================================================
    // Unions and intersections
    // ========================================================================

    /// `types[0] | types[1] | ...` in canonical form: nested unions are
    /// flattened, duplicates and `never` dropped, constituents sorted with
    /// `TypeComparer`. One union type exists per constituent list.
    pub fn get_union_type(&mut self, ast: &Ast, binding: &Binding, types: &[TypeId]) -> TypeId {
        let mut seen = FxHashSet::default();
        let mut set = Vec::with_capacity(types.len());
        let mut includes = TypeFlags::NONE;
        let mut includes_error = false;
        for &t in types {
            self.add_type_to_union(&mut set, &mut seen, &mut includes, &mut includes_error, t);
        }
        if includes.contains(TypeFlags::ANY) {
            return if includes_error { self.error_type } else { self.any_type };
        }
        if includes.contains(TypeFlags::UNKNOWN) {
            return self.unknown_type;
        }
        match set.len() {
            0 => return self.never_type,
            1 => return set[0],
            _ => {}
        }
        {
            let comparer = TypeComparer::new(self, ast, binding);
            set.sort_by(|&a, &b| comparer.compare_types(a, b));
        }
        if let Some(&id) = self.union_types.get(&set) {
            trace!(union = id.index, "reused union type");
            return id;
        }
        let object_flags = if set.iter().all(|&t| self.get(t).flags.intersects(TypeFlags::PRIMITIVE)) {
            ObjectFlags::PRIMITIVE_UNION
        } else {
            ObjectFlags::NONE
        };
        let id = self.add_type_with(
            TypeFlags::UNION,
            object_flags,
            None,
            TypeKind::Union(UnionData {
                types: set.clone(),
                origin: None,
            }),
        );
        trace!(union = id.index, constituents = set.len(), "created union type");
        self.union_types.insert(set, id);
        id
    }

    fn add_type_to_union(
        &self,
        set: &mut Vec<TypeId>,
        seen: &mut FxHashSet<TypeId>,
        includes: &mut TypeFlags,
        includes_error: &mut bool,
        t: TypeId,
    ) {
        let ty = self.get(t);
        if let TypeKind::Union(data) = &ty.kind {
            for &member in &data.types {
                self.add_type_to_union(set, seen, includes, includes_error, member);
            }
            return;
        }
        *includes |= ty.flags;
        if t == self.error_type {
            *includes_error = true;
        }
        if ty.flags.contains(TypeFlags::NEVER) {
            return;
        }
        if seen.insert(t) {
            set.push(t);
        }
    }

    /// `types[0] & types[1] & ...`, flattened, deduplicated and sorted.
    pub fn get_intersection_type(&mut self, ast: &Ast, binding: &Binding, types: &[TypeId]) -> TypeId {
        let mut seen = FxHashSet::default();
        let mut set = Vec::with_capacity(types.len());
        let mut includes = TypeFlags::NONE;
        self.add_types_to_intersection(&mut set, &mut seen, &mut includes, types);
        if includes.contains(TypeFlags::NEVER) {
            return self.never_type;
        }
        if includes.contains(TypeFlags::ANY) {
            return self.any_type;
        }
        // unknown is the identity of &
        set.retain(|&t| !self.get(t).flags.contains(TypeFlags::UNKNOWN));
        match set.len() {
            0 => return self.unknown_type,
            1 => return set[0],
            _ => {}
        }
        {
            let comparer = TypeComparer::new(self, ast, binding);
            set.sort_by(|&a, &b| comparer.compare_types(a, b));
        }
        if let Some(&id) = self.intersection_types.get(&set) {
            return id;
        }
        let id = self.add_type(TypeFlags::INTERSECTION, TypeKind::Intersection { types: set.clone() });
        trace!(intersection = id.index, constituents = set.len(), "created intersection type");
        self.intersection_types.insert(set, id);
        id
    }

    fn add_types_to_intersection(
        &self,
        set: &mut Vec<TypeId>,
        seen: &mut FxHashSet<TypeId>,
        includes: &mut TypeFlags,
        types: &[TypeId],
    ) {
        for &t in types {
            let ty = self.get(t);
            if let TypeKind::Intersection { types: members } = &ty.kind {
                self.add_types_to_intersection(set, seen, includes, members);
                continue;
            }
            *includes |= ty.flags;
            if seen.insert(t) {
                set.push(t);
            }
        }
    }

    // ========================================================================
    // Instantiable types
    // ========================================================================

    /// `keyof target`
    pub fn get_index_type(&mut self, target: TypeId, index_flags: IndexFlags) -> TypeId {
        if let Some(&id) = self.index_types.get(&(target, index_flags)) {
            return id;
        }
        let id = self.add_type(TypeFlags::INDEX, TypeKind::Index { target, index_flags });
        self.index_types.insert((target, index_flags), id);
        id
    }

    /// `object_type[index_type]`
    pub fn get_indexed_access_type(
        &mut self,
        object_type: TypeId,
        index_type: TypeId,
        access_flags: AccessFlags,
    ) -> TypeId {
        let access_flags = access_flags & AccessFlags::PERSISTENT;
        let key = (object_type, index_type, access_flags);
        if let Some(&id) = self.indexed_access_types.get(&key) {
            return id;
        }
        let id = self.add_type(
            TypeFlags::INDEXED_ACCESS,
            TypeKind::IndexedAccess {
                object_type,
                index_type,
                access_flags,
            },
        );
        self.indexed_access_types.insert(key, id);
        id
    }

    pub fn create_conditional_type(&mut self, root: ConditionalRoot, mapper: Option<MapperId>) -> TypeId {
        let check_type = root.check_type;
        let extends_type = root.extends_type;
        self.add_type(
            TypeFlags::CONDITIONAL,
            TypeKind::Conditional(ConditionalData {
                root,
                check_type,
                extends_type,
                mapper,
                resolved_true_type: None,
                resolved_false_type: None,
            }),
        )
    }

    pub fn get_substitution_type(&mut self, base_type: TypeId, constraint: TypeId) -> TypeId {
        if let Some(&id) = self.substitution_types.get(&(base_type, constraint)) {
            return id;
        }
        let id = self.add_type(TypeFlags::SUBSTITUTION, TypeKind::Substitution { base_type, constraint });
        self.substitution_types.insert((base_type, constraint), id);
        id
    }

    /// A template literal type. `texts` has one more entry than `types`.
    pub fn get_template_literal_type(&mut self, texts: Vec<String>, types: Vec<TypeId>) -> TypeId {
        assert_eq!(
            texts.len(),
            types.len() + 1,
            "Template literal types need one more text than types"
        );
        let key = (texts, types);
        if let Some(&id) = self.template_literal_types.get(&key) {
            return id;
        }
        let id = self.add_type(
            TypeFlags::TEMPLATE_LITERAL,
            TypeKind::TemplateLiteral {
                texts: key.0.clone(),
                types: key.1.clone(),
            },
        );
        self.template_literal_types.insert(key, id);
        id
    }

    /// `Uppercase<target>` and friends; `symbol` names the mapping.
    pub fn get_string_mapping_type(&mut self, symbol: SymbolId, target: TypeId) -> TypeId {
        if let Some(&id) = self.string_mapping_types.get(&(symbol, target)) {
            return id;
        }
        let id = self.add_type_with(
            TypeFlags::STRING_MAPPING,
            ObjectFlags::NONE,
            Some(symbol),
            TypeKind::StringMapping { target },
        );
        self.string_mapping_types.insert((symbol, target), id);
        id
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    pub fn is_union(&self, id: TypeId) -> bool {
        self.get(id).is_union()
    }

    pub fn is_literal(&self, id: TypeId) -> bool {
        self.get(id).is_literal()
    }

    pub fn is_type_parameter(&self, id: TypeId) -> bool {
        self.get(id).is_type_parameter()
    }

    pub fn distributed(&self, id: TypeId) -> &[TypeId] {
        self.get(id).distributed()
    }

    pub fn types(&self, id: TypeId) -> &[TypeId] {
        self.get(id).types()
    }

    pub fn target(&self, id: TypeId) -> Option<TypeId> {
        self.get(id).target()
    }

    pub fn mapper(&self, id: TypeId) -> Option<MapperId> {
        self.get(id).mapper()
    }

    pub fn alias(&self, id: TypeId) -> Option<&TypeAlias> {
        self.get(id).alias()
    }

    /// Contains a type variable or a generic instantiable type.
    pub fn is_generic_type(&self, id: TypeId) -> bool {
        let ty = self.get(id);
        if ty.flags.intersects(TypeFlags::UNION_OR_INTERSECTION) {
            return ty.types().iter().any(|&t| self.is_generic_type(t));
        }
        ty.flags.intersects(TypeFlags::INSTANTIABLE)
    }

    pub fn some_type(&self, id: TypeId, mut f: impl FnMut(&Type) -> bool) -> bool {
        let ty = self.get(id);
        if ty.is_union() {
            ty.types().iter().any(|&t| f(self.get(t)))
        } else {
            f(ty)
        }
    }

    pub fn every_type(&self, id: TypeId, mut f: impl FnMut(&Type) -> bool) -> bool {
        let ty = self.get(id);
        if ty.is_union() {
            ty.types().iter().all(|&t| f(self.get(t)))
        } else {
            f(ty)
        }
    }

    /// Valid as an index signature key: string, number, symbol, a
    /// template literal pattern, or an intersection containing one.
    pub fn is_valid_index_key_type(&self, id: TypeId) -> bool {
        let ty = self.get(id);
        ty.flags
            .intersects(TypeFlags::STRING | TypeFlags::NUMBER | TypeFlags::ES_SYMBOL | TypeFlags::TEMPLATE_LITERAL)
            || (ty.is_intersection()
                && !self.is_generic_type(id)
                && ty.types().iter().any(|&t| self.is_valid_index_key_type(t)))
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intrinsics_in_creation_order() {
        let table = TypeTable::new();
        let order = [
            table.any_type,
            table.error_type,
            table.unknown_type,
            table.undefined_type,
            table.null_type,
            table.string_type,
            table.number_type,
            table.bigint_type,
            table.false_type,
            table.true_type,
            table.boolean_type,
            table.es_symbol_type,
            table.void_type,
            table.never_type,
            table.non_primitive_type,
        ];
        for (i, id) in order.iter().enumerate() {
            assert_eq!(id.index(), i, "intrinsic {} created out of order", i);
        }
        assert!(table.get(table.boolean_type).is_union());
        assert_eq!(table.types(table.boolean_type), &[table.false_type, table.true_type]);
    }

    #[test]
    fn test_checker_ids_are_unique() {
        let a = TypeTable::new();
        let b = TypeTable::new();
        assert_ne!(a.checker_id(), b.checker_id());
    }

    #[test]
    #[should_panic(expected = "Cannot compare types from different checkers")]
    fn test_foreign_type_id_panics() {
        let a = TypeTable::new();
        let b = TypeTable::new();
        a.get(b.string_type);
    }

    #[test]
    fn test_literal_types_are_interned() {
        let mut table = TypeTable::new();
        let a = table.get_string_literal_type("a");
        assert_eq!(a, table.get_string_literal_type("a"));
        assert_eq!(table.get_number_literal_type(0.0), table.get_number_literal_type(-0.0));
        assert_ne!(table.get_number_literal_type(1.0), table.get_number_literal_type(2.0));
        let big = table.get_bigint_literal_type(PseudoBigInt::parse("0010n"));
        assert_eq!(big, table.get_bigint_literal_type(PseudoBigInt::new(false, "10")));
    }

    #[test]
    #[should_panic(expected = "is not a union type")]
    fn test_kind_mismatch_panics() {
        let table = TypeTable::new();
        table.get(table.string_type).as_union();
    }

    #[test]
    fn test_distributed() {
        let table = TypeTable::new();
        assert!(table.distributed(table.never_type).is_empty());
        assert_eq!(table.distributed(table.string_type), &[table.string_type]);
        assert_eq!(table.distributed(table.boolean_type).len(), 2);
    }

    #[test]
    fn test_tuple_targets_are_shared() {
        let mut table = TypeTable::new();
        let infos = vec![
            TupleElementInfo { flags: ElementFlags::REQUIRED, labeled_declaration: None },
            TupleElementInfo { flags: ElementFlags::OPTIONAL, labeled_declaration: None },
        ];
        let a = table.create_tuple_type(vec![table.string_type, table.number_type], infos.clone(), false);
        let b = table.create_tuple_type(vec![table.number_type, table.string_type], infos, false);
        let (target_a, _, args_a) = table.get(a).as_type_reference();
        let args_a = args_a.to_vec();
        let (target_b, _, _) = table.get(b).as_type_reference();
        assert_eq!(target_a, target_b);
        assert_eq!(args_a, vec![table.string_type, table.number_type]);
        let tuple = table.get(target_a).as_tuple();
        assert_eq!(tuple.min_length, 1);
        assert_eq!(tuple.fixed_length, 2);
    }
}
