use serde::Serialize;

/// Returns true for the four canonical nucleotide symbols, in either case
#[inline]
#[must_use]
pub fn is_canonical(base: u8) -> bool {
    matches!(base.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T')
}

/// Normalize a base for comparison and reporting.
///
/// Canonical nucleotides are uppercased; every other symbol (gaps, `N`,
/// IUPAC ambiguity codes, ...) is returned untouched so that it is compared
/// literally.
#[inline]
#[must_use]
pub fn normalize_base(base: u8) -> u8 {
    if is_canonical(base) {
        base.to_ascii_uppercase()
    } else {
        base
    }
}

/// How non-ACGT symbols take part in variant detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityMode {
    /// Every symbol is compared as a literal character. A gap against a
    /// nucleotide is a variant, and so is `N` against `A`.
    #[default]
    Literal,
    /// Non-ACGT symbols are unknown: they never differ from anything.
    Unknown,
}

impl AmbiguityMode {
    /// Does `base` differ from `reference` under this mode?
    #[inline]
    #[must_use]
    pub fn differs(self, reference: u8, base: u8) -> bool {
        match self {
            Self::Literal => normalize_base(reference) != normalize_base(base),
            Self::Unknown => {
                is_canonical(reference)
                    && is_canonical(base)
                    && !reference.eq_ignore_ascii_case(&base)
            }
        }
    }

    /// Is `base` an observation that can be called at all under this mode?
    #[inline]
    #[must_use]
    pub fn is_callable(self, base: u8) -> bool {
        match self {
            Self::Literal => true,
            Self::Unknown => is_canonical(base),
        }
    }
}

impl std::fmt::Display for AmbiguityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal => write!(f, "literal"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Sample name layout for PHYLIP output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhylipNameStyle {
    /// Classic PHYLIP: names truncated or space-padded to exactly 10 columns
    #[default]
    Strict,
    /// Full name, separated from the sequence by a single space
    Relaxed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_canonical() {
        for b in b"ACGTacgt" {
            assert!(is_canonical(*b));
        }
        for b in b"-NnRY*.?" {
            assert!(!is_canonical(*b));
        }
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(b'a'), b'A');
        assert_eq!(normalize_base(b'T'), b'T');
        // Non-canonical symbols are kept as-is, including their case
        assert_eq!(normalize_base(b'n'), b'n');
        assert_eq!(normalize_base(b'-'), b'-');
    }

    #[test]
    fn test_literal_mode() {
        let mode = AmbiguityMode::Literal;
        assert!(!mode.differs(b'A', b'a'));
        assert!(mode.differs(b'A', b'C'));
        assert!(mode.differs(b'A', b'-'));
        assert!(mode.differs(b'-', b'A'));
        assert!(mode.differs(b'A', b'N'));
        assert!(!mode.differs(b'-', b'-'));
        assert!(!mode.differs(b'N', b'N'));
        // Only ACGT is case-insensitive
        assert!(mode.differs(b'N', b'n'));
    }

    #[test]
    fn test_unknown_mode() {
        let mode = AmbiguityMode::Unknown;
        assert!(mode.differs(b'A', b'c'));
        assert!(!mode.differs(b'A', b'a'));
        assert!(!mode.differs(b'A', b'N'));
        assert!(!mode.differs(b'-', b'A'));
        assert!(!mode.is_callable(b'-'));
        assert!(mode.is_callable(b'g'));
    }
}
