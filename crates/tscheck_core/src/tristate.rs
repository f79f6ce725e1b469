//! Three-valued boolean for lazily computed answers.

/// `Unknown` means "not computed yet"; once a cache slot is written it
/// holds `True` or `False` for the rest of the checker's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tristate {
    #[default]
    Unknown,
    False,
    True,
}

impl Tristate {
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value {
            Tristate::True
        } else {
            Tristate::False
        }
    }

    #[inline]
    pub fn is_true(self) -> bool {
        self == Tristate::True
    }

    #[inline]
    pub fn is_known(self) -> bool {
        self != Tristate::Unknown
    }
}

impl From<bool> for Tristate {
    fn from(value: bool) -> Self {
        Tristate::from_bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        let t = Tristate::default();
        assert!(!t.is_known());
        assert!(!t.is_true());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Tristate::from(true), Tristate::True);
        assert_eq!(Tristate::from(false), Tristate::False);
        assert!(Tristate::False.is_known());
    }
}
