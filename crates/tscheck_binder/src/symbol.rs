//! Symbol and symbol table definitions.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tscheck_ast::types::{NodeId, SymbolFlags, SymbolId};
use tscheck_core::intern::InternedString;

/// Names the binder gives to declarations that have no identifier of
/// their own.
pub mod internal_names {
    pub const EXPORT_EQUALS: &str = "export=";
    pub const DEFAULT: &str = "default";
    pub const CONSTRUCTOR: &str = "__constructor";
    pub const CALL: &str = "__call";
    pub const NEW: &str = "__new";
    pub const INDEX: &str = "__index";
    pub const EXPORT_STAR: &str = "__export";
    pub const COMPUTED: &str = "__computed";
    pub const TYPE: &str = "__type";
    pub const OBJECT: &str = "__object";
    pub const FUNCTION: &str = "__function";
    pub const CLASS: &str = "__class";
    pub const GLOBAL: &str = "__global";
    pub const MISSING: &str = "__missing";
    pub const ARGUMENTS: &str = "arguments";
    pub const PROTOTYPE: &str = "prototype";
}

bitflags::bitflags! {
    /// Markers on symbols the checker synthesizes or merges.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CheckFlags: u32 {
        const NONE                  = 0;
        const INSTANTIATED          = 1 << 0;
        const SYNTHETIC_PROPERTY    = 1 << 1;
        const SYNTHETIC_METHOD      = 1 << 2;
        const READONLY              = 1 << 3;
        const PARTIAL               = 1 << 4;
        const HAS_NON_UNIFORM_TYPE  = 1 << 5;
        const CONTAINS_PUBLIC       = 1 << 6;
        const CONTAINS_PROTECTED    = 1 << 7;
        const CONTAINS_PRIVATE      = 1 << 8;
        const CONTAINS_STATIC       = 1 << 9;
        const LATE                  = 1 << 10;
        const MAPPED                = 1 << 11;

        const SYNTHETIC = Self::SYNTHETIC_PROPERTY.bits() | Self::SYNTHETIC_METHOD.bits();
    }
}

/// A named entity: variable, function, class, interface, alias, ...
#[derive(Debug, Clone)]
pub struct Symbol {
    pub id: SymbolId,
    pub name: InternedString,
    pub flags: SymbolFlags,
    pub check_flags: CheckFlags,
    /// Declarations merged into this symbol, in binding order.
    pub declarations: Vec<NodeId>,
    pub value_declaration: Option<NodeId>,
    /// Instance members of classes, interfaces and type literals.
    pub members: Option<SymbolTable>,
    /// Module exports, enum members and static class members.
    pub exports: Option<SymbolTable>,
    /// `export as namespace` declarations of a module file.
    pub global_exports: Option<SymbolTable>,
    pub parent: Option<SymbolId>,
    /// Exported half of an `ExportValue` local.
    pub export_symbol: Option<SymbolId>,
}

impl Symbol {
    pub fn new(id: SymbolId, name: InternedString, flags: SymbolFlags) -> Self {
        Self {
            id,
            name,
            flags,
            check_flags: CheckFlags::NONE,
            declarations: Vec::new(),
            value_declaration: None,
            members: None,
            exports: None,
            global_exports: None,
            parent: None,
            export_symbol: None,
        }
    }

    #[inline]
    pub fn has_flags(&self, flags: SymbolFlags) -> bool {
        self.flags.intersects(flags)
    }

    pub fn first_declaration(&self) -> Option<NodeId> {
        self.declarations.first().copied()
    }
}

/// A symbol table maps names to symbols. Iteration follows insertion
/// order so that diagnostics over a table are deterministic.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    table: IndexMap<InternedString, SymbolId, FxBuildHasher>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: InternedString) -> Option<SymbolId> {
        self.table.get(&name).copied()
    }

    #[inline]
    pub fn set(&mut self, name: InternedString, symbol: SymbolId) {
        self.table.insert(name, symbol);
    }

    #[inline]
    pub fn has(&self, name: InternedString) -> bool {
        self.table.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (InternedString, SymbolId)> + '_ {
        self.table.iter().map(|(name, id)| (*name, *id))
    }
}

/// Flags a symbol with the given flags cannot merge with.
pub fn get_excluded_symbol_flags(flags: SymbolFlags) -> SymbolFlags {
    let mut result = SymbolFlags::NONE;
    let pairs = [
        (SymbolFlags::BLOCK_SCOPED_VARIABLE, SymbolFlags::BLOCK_SCOPED_VARIABLE_EXCLUDES),
        (SymbolFlags::FUNCTION_SCOPED_VARIABLE, SymbolFlags::FUNCTION_SCOPED_VARIABLE_EXCLUDES),
        (SymbolFlags::PROPERTY, SymbolFlags::PROPERTY_EXCLUDES),
        (SymbolFlags::ENUM_MEMBER, SymbolFlags::ENUM_MEMBER_EXCLUDES),
        (SymbolFlags::FUNCTION, SymbolFlags::FUNCTION_EXCLUDES),
        (SymbolFlags::CLASS, SymbolFlags::CLASS_EXCLUDES),
        (SymbolFlags::INTERFACE, SymbolFlags::INTERFACE_EXCLUDES),
        (SymbolFlags::REGULAR_ENUM, SymbolFlags::REGULAR_ENUM_EXCLUDES),
        (SymbolFlags::CONST_ENUM, SymbolFlags::CONST_ENUM_EXCLUDES),
        (SymbolFlags::VALUE_MODULE, SymbolFlags::VALUE_MODULE_EXCLUDES),
        (SymbolFlags::METHOD, SymbolFlags::METHOD_EXCLUDES),
        (SymbolFlags::GET_ACCESSOR, SymbolFlags::GET_ACCESSOR_EXCLUDES),
        (SymbolFlags::SET_ACCESSOR, SymbolFlags::SET_ACCESSOR_EXCLUDES),
        (SymbolFlags::TYPE_PARAMETER, SymbolFlags::TYPE_PARAMETER_EXCLUDES),
        (SymbolFlags::TYPE_ALIAS, SymbolFlags::TYPE_ALIAS_EXCLUDES),
        (SymbolFlags::ALIAS, SymbolFlags::ALIAS_EXCLUDES),
    ];
    for (flag, excludes) in pairs {
        if flags.intersects(flag) {
            result |= excludes;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tscheck_core::intern::StringInterner;

    #[test]
    fn test_table_keeps_insertion_order() {
        let interner = StringInterner::new();
        let mut table = SymbolTable::new();
        let names = ["z", "a", "m"];
        for (i, n) in names.iter().enumerate() {
            table.set(interner.intern(n), SymbolId(i as u32));
        }
        let order: Vec<_> = table.iter().map(|(n, _)| interner.resolve(n).to_string()).collect();
        assert_eq!(order, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_interface_and_class_merge() {
        let excluded = get_excluded_symbol_flags(SymbolFlags::INTERFACE);
        assert!(!excluded.intersects(SymbolFlags::CLASS));
        let excluded = get_excluded_symbol_flags(SymbolFlags::BLOCK_SCOPED_VARIABLE);
        assert!(excluded.intersects(SymbolFlags::FUNCTION));
    }
}
