//! Identifier interning.
//!
//! Symbol names, identifier texts and labels are interned once so that
//! scope lookups compare `u32` keys instead of strings.

use lasso::{Key, Spur, ThreadedRodeo};
use std::fmt;
use std::sync::Arc;

/// Handle to an interned string. Equality is key equality; ordering is
/// interning order, not text order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct InternedString(Spur);

impl fmt::Debug for InternedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0.into_usize())
    }
}

/// Shared string interner.
///
/// Clones share one backing `ThreadedRodeo`, so the AST, the binder and
/// the checker all hand out compatible keys.
#[derive(Clone, Default)]
pub struct StringInterner {
    rodeo: Arc<ThreadedRodeo>,
}

impl StringInterner {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn intern(&self, text: &str) -> InternedString {
        InternedString(self.rodeo.get_or_intern(text))
    }

    /// Look up a string without interning it. A name that was never
    /// interned cannot be bound anywhere, so lookups can bail early.
    #[inline]
    pub fn get(&self, text: &str) -> Option<InternedString> {
        self.rodeo.get(text).map(InternedString)
    }

    #[inline]
    pub fn resolve(&self, name: InternedString) -> &str {
        self.rodeo.resolve(&name.0)
    }

    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringInterner({} names)", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_resolve() {
        let interner = StringInterner::new();
        let t = interner.intern("T");
        let u = interner.intern("U");

        assert_eq!(t, interner.intern("T"));
        assert_ne!(t, u);
        assert_eq!(interner.resolve(t), "T");
        assert_eq!(interner.resolve(u), "U");
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_get_does_not_intern() {
        let interner = StringInterner::new();
        assert!(interner.get("arguments").is_none());
        assert!(interner.is_empty());
        let arguments = interner.intern("arguments");
        assert_eq!(interner.get("arguments"), Some(arguments));
    }

    #[test]
    fn test_clones_share_keys() {
        let interner = StringInterner::new();
        let other = interner.clone();
        let default = interner.intern("default");
        assert_eq!(other.get("default"), Some(default));
        assert_eq!(format!("{:?}", other), "StringInterner(1 names)");
    }
}
