//! Flag sets and handle types shared by the AST, binder and checker.

use std::fmt;

bitflags::bitflags! {
    /// Flags carried by every node. Context flags are threaded down by
    /// `AstBuilder::finish_file` the way a parser would set them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u32 {
        const NONE                          = 0;
        const LET                           = 1 << 0;
        const CONST                         = 1 << 1;
        const USING                         = 1 << 2;
        const NESTED_NAMESPACE              = 1 << 3;
        const SYNTHESIZED                   = 1 << 4;
        const NAMESPACE                     = 1 << 5;
        const OPTIONAL_CHAIN                = 1 << 6;
        const EXPORT_CONTEXT                = 1 << 7;
        const CONTAINS_THIS                 = 1 << 8;
        const GLOBAL_AUGMENTATION           = 1 << 9;
        const HAS_ASYNC_FUNCTIONS           = 1 << 10;
        const DISALLOW_IN_CONTEXT           = 1 << 11;
        const YIELD_CONTEXT                 = 1 << 12;
        const DECORATOR_CONTEXT             = 1 << 13;
        const AWAIT_CONTEXT                 = 1 << 14;
        const THIS_NODE_HAS_ERROR           = 1 << 15;
        const AMBIENT                       = 1 << 16;

        /// `await using` is spelled as both bits.
        const AWAIT_USING = Self::CONST.bits() | Self::USING.bits();
        const BLOCK_SCOPED = Self::LET.bits() | Self::CONST.bits() | Self::USING.bits();

        const CONTEXT_FLAGS = Self::DISALLOW_IN_CONTEXT.bits()
            | Self::YIELD_CONTEXT.bits()
            | Self::DECORATOR_CONTEXT.bits()
            | Self::AWAIT_CONTEXT.bits()
            | Self::AMBIENT.bits();
    }
}

impl NodeFlags {
    /// The `let`/`const`/`using`/`await using` part of the flags.
    #[inline]
    pub fn block_scope_kind(self) -> NodeFlags {
        self & NodeFlags::BLOCK_SCOPED
    }
}

bitflags::bitflags! {
    /// Modifiers written on a declaration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u32 {
        const NONE              = 0;
        const EXPORT            = 1 << 0;
        const AMBIENT           = 1 << 1;
        const PUBLIC            = 1 << 2;
        const PRIVATE           = 1 << 3;
        const PROTECTED         = 1 << 4;
        const STATIC            = 1 << 5;
        const READONLY          = 1 << 6;
        const ACCESSOR          = 1 << 7;
        const ABSTRACT          = 1 << 8;
        const ASYNC             = 1 << 9;
        const DEFAULT           = 1 << 10;
        const CONST             = 1 << 11;
        const OVERRIDE          = 1 << 12;
        const IN                = 1 << 13;
        const OUT               = 1 << 14;
        const DECORATOR         = 1 << 15;

        const ACCESSIBILITY_MODIFIER = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
        const PARAMETER_PROPERTY_MODIFIER = Self::ACCESSIBILITY_MODIFIER.bits() | Self::READONLY.bits() | Self::OVERRIDE.bits();
        const NON_PUBLIC_ACCESSIBILITY_MODIFIER = Self::PRIVATE.bits() | Self::PROTECTED.bits();
        const EXPORT_DEFAULT = Self::EXPORT.bits() | Self::DEFAULT.bits();

        /// Every keyword modifier; decorators excluded.
        const MODIFIER = Self::EXPORT.bits()
            | Self::AMBIENT.bits()
            | Self::PUBLIC.bits()
            | Self::PRIVATE.bits()
            | Self::PROTECTED.bits()
            | Self::STATIC.bits()
            | Self::READONLY.bits()
            | Self::ACCESSOR.bits()
            | Self::ABSTRACT.bits()
            | Self::ASYNC.bits()
            | Self::DEFAULT.bits()
            | Self::CONST.bits()
            | Self::OVERRIDE.bits()
            | Self::IN.bits()
            | Self::OUT.bits();
    }
}

impl ModifierFlags {
    /// Flag for a modifier keyword, `NONE` for anything else.
    pub fn from_modifier_kind(kind: crate::SyntaxKind) -> ModifierFlags {
        use crate::SyntaxKind;
        match kind {
            SyntaxKind::StaticKeyword => ModifierFlags::STATIC,
            SyntaxKind::PublicKeyword => ModifierFlags::PUBLIC,
            SyntaxKind::ProtectedKeyword => ModifierFlags::PROTECTED,
            SyntaxKind::PrivateKeyword => ModifierFlags::PRIVATE,
            SyntaxKind::AbstractKeyword => ModifierFlags::ABSTRACT,
            SyntaxKind::AccessorKeyword => ModifierFlags::ACCESSOR,
            SyntaxKind::ExportKeyword => ModifierFlags::EXPORT,
            SyntaxKind::DeclareKeyword => ModifierFlags::AMBIENT,
            SyntaxKind::ConstKeyword => ModifierFlags::CONST,
            SyntaxKind::DefaultKeyword => ModifierFlags::DEFAULT,
            SyntaxKind::AsyncKeyword => ModifierFlags::ASYNC,
            SyntaxKind::ReadonlyKeyword => ModifierFlags::READONLY,
            SyntaxKind::OverrideKeyword => ModifierFlags::OVERRIDE,
            SyntaxKind::InKeyword => ModifierFlags::IN,
            SyntaxKind::OutKeyword => ModifierFlags::OUT,
            SyntaxKind::Decorator => ModifierFlags::DECORATOR,
            _ => ModifierFlags::NONE,
        }
    }
}

bitflags::bitflags! {
    /// Meanings a symbol can bind.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SymbolFlags: u32 {
        const NONE                          = 0;
        const FUNCTION_SCOPED_VARIABLE      = 1 << 0;
        const BLOCK_SCOPED_VARIABLE         = 1 << 1;
        const PROPERTY                      = 1 << 2;
        const ENUM_MEMBER                   = 1 << 3;
        const FUNCTION                      = 1 << 4;
        const CLASS                         = 1 << 5;
        const INTERFACE                     = 1 << 6;
        const CONST_ENUM                    = 1 << 7;
        const REGULAR_ENUM                  = 1 << 8;
        const VALUE_MODULE                  = 1 << 9;
        const NAMESPACE_MODULE              = 1 << 10;
        const TYPE_LITERAL                  = 1 << 11;
        const OBJECT_LITERAL                = 1 << 12;
        const METHOD                        = 1 << 13;
        const CONSTRUCTOR                   = 1 << 14;
        const GET_ACCESSOR                  = 1 << 15;
        const SET_ACCESSOR                  = 1 << 16;
        const SIGNATURE                     = 1 << 17;
        const TYPE_PARAMETER                = 1 << 18;
        const TYPE_ALIAS                    = 1 << 19;
        const EXPORT_VALUE                  = 1 << 20;
        const ALIAS                         = 1 << 21;
        const PROTOTYPE                     = 1 << 22;
        const EXPORT_STAR                   = 1 << 23;
        const OPTIONAL                      = 1 << 24;
        const TRANSIENT                     = 1 << 25;
        const ASSIGNMENT                    = 1 << 26;
        const MODULE_EXPORTS                = 1 << 27;
        /// Marks a lookup in the global table.
        const GLOBAL_LOOKUP                 = 1 << 28;

        const ENUM = Self::REGULAR_ENUM.bits() | Self::CONST_ENUM.bits();
        const VARIABLE = Self::FUNCTION_SCOPED_VARIABLE.bits() | Self::BLOCK_SCOPED_VARIABLE.bits();
        const VALUE = Self::VARIABLE.bits()
            | Self::PROPERTY.bits()
            | Self::ENUM_MEMBER.bits()
            | Self::OBJECT_LITERAL.bits()
            | Self::FUNCTION.bits()
            | Self::CLASS.bits()
            | Self::ENUM.bits()
            | Self::VALUE_MODULE.bits()
            | Self::METHOD.bits()
            | Self::GET_ACCESSOR.bits()
            | Self::SET_ACCESSOR.bits();
        const TYPE = Self::CLASS.bits()
            | Self::INTERFACE.bits()
            | Self::ENUM.bits()
            | Self::ENUM_MEMBER.bits()
            | Self::TYPE_LITERAL.bits()
            | Self::TYPE_PARAMETER.bits()
            | Self::TYPE_ALIAS.bits();
        const NAMESPACE = Self::VALUE_MODULE.bits()
            | Self::NAMESPACE_MODULE.bits()
            | Self::ENUM.bits();
        const MODULE = Self::VALUE_MODULE.bits() | Self::NAMESPACE_MODULE.bits();
        const ACCESSOR = Self::GET_ACCESSOR.bits() | Self::SET_ACCESSOR.bits();

        // Flags a new declaration may not merge with.
        const FUNCTION_SCOPED_VARIABLE_EXCLUDES = Self::VALUE.bits() & !Self::FUNCTION_SCOPED_VARIABLE.bits();
        const BLOCK_SCOPED_VARIABLE_EXCLUDES = Self::VALUE.bits();
        const PARAMETER_EXCLUDES = Self::VALUE.bits();
        const PROPERTY_EXCLUDES = Self::NONE.bits();
        const ENUM_MEMBER_EXCLUDES = Self::VALUE.bits() | Self::TYPE.bits();
        const FUNCTION_EXCLUDES = Self::VALUE.bits()
            & !(Self::FUNCTION.bits() | Self::VALUE_MODULE.bits() | Self::CLASS.bits());
        const CLASS_EXCLUDES = (Self::VALUE.bits() | Self::TYPE.bits())
            & !(Self::VALUE_MODULE.bits() | Self::INTERFACE.bits() | Self::FUNCTION.bits());
        const INTERFACE_EXCLUDES = Self::TYPE.bits() & !(Self::INTERFACE.bits() | Self::CLASS.bits());
        const REGULAR_ENUM_EXCLUDES = (Self::VALUE.bits() | Self::TYPE.bits())
            & !(Self::REGULAR_ENUM.bits() | Self::VALUE_MODULE.bits());
        const CONST_ENUM_EXCLUDES = (Self::VALUE.bits() | Self::TYPE.bits()) & !Self::CONST_ENUM.bits();
        const VALUE_MODULE_EXCLUDES = Self::VALUE.bits()
            & !(Self::FUNCTION.bits() | Self::CLASS.bits() | Self::REGULAR_ENUM.bits() | Self::VALUE_MODULE.bits());
        const NAMESPACE_MODULE_EXCLUDES = Self::NONE.bits();
        const METHOD_EXCLUDES = Self::VALUE.bits() & !Self::METHOD.bits();
        const GET_ACCESSOR_EXCLUDES = Self::VALUE.bits() & !Self::SET_ACCESSOR.bits();
        const SET_ACCESSOR_EXCLUDES = Self::VALUE.bits() & !Self::GET_ACCESSOR.bits();
        const TYPE_PARAMETER_EXCLUDES = Self::TYPE.bits() & !Self::TYPE_PARAMETER.bits();
        const TYPE_ALIAS_EXCLUDES = Self::TYPE.bits();
        const ALIAS_EXCLUDES = Self::ALIAS.bits();

        const MODULE_MEMBER = Self::VARIABLE.bits()
            | Self::FUNCTION.bits()
            | Self::CLASS.bits()
            | Self::INTERFACE.bits()
            | Self::ENUM.bits()
            | Self::MODULE.bits()
            | Self::TYPE_ALIAS.bits()
            | Self::ALIAS.bits();
        const EXPORT_HAS_LOCAL = Self::FUNCTION.bits()
            | Self::CLASS.bits()
            | Self::ENUM.bits()
            | Self::VALUE_MODULE.bits();
        const BLOCK_SCOPED = Self::BLOCK_SCOPED_VARIABLE.bits() | Self::CLASS.bits() | Self::ENUM.bits();
        const PROPERTY_OR_ACCESSOR = Self::PROPERTY.bits() | Self::ACCESSOR.bits();
        const CLASS_MEMBER = Self::METHOD.bits() | Self::ACCESSOR.bits() | Self::PROPERTY.bits();
    }
}

/// Handle to a node in an `Ast` arena.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Handle to a symbol in a binder's symbol arena.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SymbolId(pub u32);

impl SymbolId {
    pub const INVALID: SymbolId = SymbolId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_await_using_contains_using() {
        assert!(NodeFlags::AWAIT_USING.contains(NodeFlags::USING));
        assert_eq!(NodeFlags::AWAIT_USING.block_scope_kind(), NodeFlags::AWAIT_USING);
        assert_eq!((NodeFlags::LET | NodeFlags::AMBIENT).block_scope_kind(), NodeFlags::LET);
    }

    #[test]
    fn test_excludes() {
        assert!(SymbolFlags::CLASS_EXCLUDES.contains(SymbolFlags::BLOCK_SCOPED_VARIABLE));
        assert!(!SymbolFlags::CLASS_EXCLUDES.intersects(SymbolFlags::INTERFACE));
        assert!(!SymbolFlags::FUNCTION_SCOPED_VARIABLE_EXCLUDES.intersects(SymbolFlags::FUNCTION_SCOPED_VARIABLE));
    }

    #[test]
    fn test_modifier_mask_excludes_decorator() {
        assert!(!ModifierFlags::MODIFIER.contains(ModifierFlags::DECORATOR));
        assert_eq!(
            ModifierFlags::from_modifier_kind(crate::SyntaxKind::DeclareKeyword),
            ModifierFlags::AMBIENT
        );
    }
}
