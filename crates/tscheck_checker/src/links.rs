//! Side tables ("links") that attach checker state to nodes, symbols
//! and signatures without mutating the AST or binder output.
//!
//! Every store is owned by one `Checker`. Entries are created with
//! `Default` on first access and live as long as the checker.

use crate::mapper::MapperId;
use crate::signature::SignatureId;
use crate::types::TypeId;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use tscheck_ast::types::{NodeId, SymbolId};
use tscheck_binder::SymbolTable;
use tscheck_core::Tristate;

/// Lazily populated map from a key to link data.
///
/// Values live in a pool so repeated lookups hand out stable slots and
/// growth reallocates one vector instead of many small boxes.
#[derive(Debug)]
pub struct LinkStore<K, V> {
    index: FxHashMap<K, usize>,
    pool: Vec<V>,
}

impl<K: Copy + Eq + Hash, V: Default> LinkStore<K, V> {
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
            pool: Vec::new(),
        }
    }

    /// The links for `key`, created on first access.
    pub fn get_or_insert(&mut self, key: K) -> &mut V {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.pool.len();
                self.pool.push(V::default());
                self.index.insert(key, slot);
                slot
            }
        };
        &mut self.pool[slot]
    }

    pub fn try_get(&self, key: K) -> Option<&V> {
        self.index.get(&key).map(|&slot| &self.pool[slot])
    }

    pub fn has(&self, key: K) -> bool {
        self.index.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

impl<K: Copy + Eq + Hash, V: Default> Default for LinkStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeCheckFlags: u32 {
        const NONE                                          = 0;
        /// Node has been type checked
        const TYPE_CHECKED                                  = 1 << 0;
        const LEXICAL_THIS                                  = 1 << 1;
        const CAPTURE_THIS                                  = 1 << 2;
        const CAPTURE_NEW_TARGET                            = 1 << 3;
        const SUPER_INSTANCE                                = 1 << 4;
        const SUPER_STATIC                                  = 1 << 5;
        const CONTEXT_CHECKED                               = 1 << 6;
        const METHOD_WITH_SUPER_PROPERTY_ACCESS_IN_ASYNC    = 1 << 7;
        const METHOD_WITH_SUPER_PROPERTY_ASSIGNMENT_IN_ASYNC = 1 << 8;
        const CAPTURE_ARGUMENTS                             = 1 << 9;
        /// Enum member values have been computed
        const ENUM_VALUES_COMPUTED                          = 1 << 10;
        const LOOP_WITH_CAPTURED_BLOCK_SCOPED_BINDING       = 1 << 12;
        const CONTAINS_CAPTURED_BLOCK_SCOPE_BINDING         = 1 << 13;
        const CAPTURED_BLOCK_SCOPED_BINDING                 = 1 << 14;
        const BLOCK_SCOPED_BINDING_IN_LOOP                  = 1 << 15;
        const NEEDS_LOOP_OUT_PARAMETER                      = 1 << 16;
        const ASSIGNMENTS_MARKED                            = 1 << 17;
        const CONTAINS_CONSTRUCTOR_REFERENCE                = 1 << 18;
        const CONSTRUCTOR_REFERENCE                         = 1 << 29;
        const CONTAINS_CLASS_WITH_PRIVATE_IDENTIFIERS       = 1 << 20;
        const CONTAINS_SUPER_PROPERTY_IN_STATIC_INITIALIZER = 1 << 21;
        const IN_CHECK_IDENTIFIER                           = 1 << 22;
        const PARTIALLY_TYPE_CHECKED                        = 1 << 23;
        const INITIALIZER_IS_UNDEFINED                      = 1 << 24;
        const INITIALIZER_IS_UNDEFINED_COMPUTED             = 1 << 25;
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct VarianceFlags: u32 {
        const INVARIANT     = 0;
        const COVARIANT     = 1 << 0;
        const CONTRAVARIANT = 1 << 1;
        const BIVARIANT     = Self::COVARIANT.bits() | Self::CONTRAVARIANT.bits();
        /// Unwitnessed type parameter
        const INDEPENDENT   = 1 << 2;
        const VARIANCE_MASK = Self::COVARIANT.bits() | Self::CONTRAVARIANT.bits() | Self::INDEPENDENT.bits();
        const UNMEASURABLE  = 1 << 3;
        const UNRELIABLE    = 1 << 4;
    }
}

// ============================================================================
// Node links
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct NodeLinks {
    pub flags: NodeCheckFlags,
    /// Cached answer of the resolver's parameter scope check.
    pub declaration_requires_scope_change: Tristate,
    /// The ambient statement error was already reported in this block.
    pub has_reported_statement_in_ambient_context: bool,
}

#[derive(Debug, Default, Clone)]
pub struct SymbolNodeLinks {
    pub resolved_symbol: Option<SymbolId>,
}

#[derive(Debug, Default, Clone)]
pub struct TypeNodeLinks {
    pub resolved_type: Option<TypeId>,
    /// Type parameters in scope at a declaration, outermost first.
    pub outer_type_parameters: Option<Vec<TypeId>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnumValue {
    Number(f64),
    String(String),
}

#[derive(Debug, Default, Clone)]
pub struct EnumMemberLinks {
    /// `None` when the member has a computed (non-constant) value.
    pub value: Option<EnumValue>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustiveState {
    #[default]
    Unknown,
    Computing,
    False,
    True,
}

#[derive(Debug, Default, Clone)]
pub struct SwitchStatementLinks {
    pub exhaustive_state: ExhaustiveState,
    /// Clause types in source order, `never` for `default`.
    pub switch_types: Option<Vec<TypeId>>,
}

#[derive(Debug, Default, Clone)]
pub struct SourceFileLinks {
    pub type_checked: bool,
    /// Function bodies queued until the enclosing file walk finishes.
    pub deferred_nodes: Vec<NodeId>,
}

#[derive(Debug, Default, Clone)]
pub struct SignatureLinks {
    pub resolved_signature: Option<SignatureId>,
}

// ============================================================================
// Symbol links
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct ValueSymbolLinks {
    pub resolved_type: Option<TypeId>,
    pub write_type: Option<TypeId>,
    /// For instantiated symbols, the symbol they were instantiated from.
    pub target: Option<SymbolId>,
    pub mapper: Option<MapperId>,
}

#[derive(Debug, Default, Clone)]
pub struct AliasSymbolLinks {
    pub immediate_target: Option<SymbolId>,
    pub alias_target: Option<SymbolId>,
    /// `alias_target` is final; `None` then means unresolved.
    pub alias_target_resolved: bool,
    pub resolving: bool,
    /// Referenced as a value that can be emitted.
    pub referenced: bool,
    pub type_only_declaration_resolved: bool,
    pub type_only_declaration: Option<NodeId>,
}

#[derive(Debug, Default, Clone)]
pub struct ModuleSymbolLinks {
    pub resolved_exports: Option<SymbolTable>,
    pub exports_checked: bool,
}

#[derive(Debug, Default, Clone)]
pub struct MappedSymbolLinks {
    pub key_type: Option<TypeId>,
    pub mapped_type: Option<TypeId>,
}

#[derive(Debug, Default, Clone)]
pub struct DeferredSymbolLinks {
    /// The union or intersection the property was read from.
    pub parent: Option<TypeId>,
    pub constituents: Vec<TypeId>,
}

#[derive(Debug, Default, Clone)]
pub struct TypeAliasLinks {
    pub declared_type: Option<TypeId>,
    pub type_parameters: Vec<TypeId>,
    pub instantiations: FxHashMap<Vec<TypeId>, TypeId>,
}

/// Declared types of type parameters, classes, interfaces and enums.
#[derive(Debug, Default, Clone)]
pub struct DeclaredTypeLinks {
    pub declared_type: Option<TypeId>,
    /// Base types of a class or interface were resolved.
    pub base_types_resolved: bool,
}

#[derive(Debug, Default, Clone)]
pub struct VarianceLinks {
    pub variances: Vec<VarianceFlags>,
}

#[derive(Debug, Default, Clone)]
pub struct MarkedAssignmentSymbolLinks {
    /// End of the last assignment, `u32::MAX` when assigned in a nested function.
    pub last_assignment_pos: Option<u32>,
    pub has_definite_assignment: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_store_creates_on_first_access() {
        let mut store: LinkStore<NodeId, NodeLinks> = LinkStore::new();
        let node = NodeId(3);
        assert!(!store.has(node));
        assert!(store.try_get(node).is_none());

        store.get_or_insert(node).flags |= NodeCheckFlags::TYPE_CHECKED;
        assert!(store.has(node));
        assert_eq!(store.len(), 1);

        // Second access returns the same entry
        let links = store.get_or_insert(node);
        assert!(links.flags.contains(NodeCheckFlags::TYPE_CHECKED));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_node_check_flag_bits() {
        assert_eq!(NodeCheckFlags::TYPE_CHECKED.bits(), 1);
        assert_eq!(NodeCheckFlags::ENUM_VALUES_COMPUTED.bits(), 1 << 10);
        assert_eq!(NodeCheckFlags::CONSTRUCTOR_REFERENCE.bits(), 1 << 29);
    }
}
