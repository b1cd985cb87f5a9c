//! Plural-form selection rules.
//!
//! A catalog's `Plural-Forms:` header declares how many forms the
//! language has and a C-like expression selecting among them. Rather
//! than interpreting the expression at runtime, the known formulas are
//! enumerated here and recognized by shape; an unrecognized expression
//! falls back on the declared form count.

/// A plural selection formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralRule {
    /// One form for every count (ja, ko, vi, zh, tr, ...).
    Single,
    /// Two forms, singular only at exactly one (en, de, nl, it, ...).
    Germanic,
    /// Two forms, singular at zero and one (fr, pt_BR, ...).
    Romanic,
    /// Three forms with the tens-aware 2-4 band (ru, uk, sr, hr, pl, ...).
    Slavic,
    /// Three forms with a plain 2-4 band (cs, sk).
    Czech,
}

impl Default for PluralRule {
    fn default() -> Self {
        Self::Germanic
    }
}

impl PluralRule {
    /// Number of forms this rule selects between.
    #[must_use]
    pub const fn nplurals(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Germanic | Self::Romanic => 2,
            Self::Slavic | Self::Czech => 3,
        }
    }

    /// Index of the form to use for `count`. Always less than
    /// [`nplurals`](Self::nplurals).
    #[must_use]
    pub fn index(self, count: i64) -> usize {
        let n = count.unsigned_abs();
        match self {
            Self::Single => 0,
            Self::Germanic => usize::from(n != 1),
            Self::Romanic => usize::from(n > 1),
            Self::Slavic => {
                if n % 10 == 1 && n % 100 != 11 {
                    0
                } else if (2..=4).contains(&(n % 10)) && !(10..20).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }
            Self::Czech => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n) {
                    1
                } else {
                    2
                }
            }
        }
    }

    /// Recognize a rule from the `Plural-Forms:` header fields.
    #[must_use]
    pub fn from_header(nplurals: u32, expression: &str) -> Self {
        let expr: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
        if expr.contains("n%10==1&&n%100!=11") {
            return Self::Slavic;
        }
        if expr.contains("n>=2&&n<=4") {
            return Self::Czech;
        }
        if expr.contains("n>1") {
            return Self::Romanic;
        }
        match nplurals {
            1 => Self::Single,
            3 => Self::Slavic,
            _ => Self::Germanic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn germanic_singular_only_at_one() {
        assert_eq!(PluralRule::Germanic.index(1), 0);
        assert_eq!(PluralRule::Germanic.index(0), 1);
        assert_eq!(PluralRule::Germanic.index(2), 1);
        assert_eq!(PluralRule::Germanic.index(-1), 0);
    }

    #[test]
    fn romanic_singular_below_two() {
        assert_eq!(PluralRule::Romanic.index(0), 0);
        assert_eq!(PluralRule::Romanic.index(1), 0);
        assert_eq!(PluralRule::Romanic.index(2), 1);
    }

    #[test]
    fn slavic_three_way() {
        assert_eq!(PluralRule::Slavic.index(1), 0);
        assert_eq!(PluralRule::Slavic.index(21), 0);
        assert_eq!(PluralRule::Slavic.index(3), 1);
        assert_eq!(PluralRule::Slavic.index(24), 1);
        assert_eq!(PluralRule::Slavic.index(5), 2);
        assert_eq!(PluralRule::Slavic.index(11), 2);
        assert_eq!(PluralRule::Slavic.index(12), 2);
        assert_eq!(PluralRule::Slavic.index(100), 2);
    }

    #[test]
    fn czech_plain_band() {
        assert_eq!(PluralRule::Czech.index(1), 0);
        assert_eq!(PluralRule::Czech.index(2), 1);
        assert_eq!(PluralRule::Czech.index(4), 1);
        assert_eq!(PluralRule::Czech.index(5), 2);
        assert_eq!(PluralRule::Czech.index(22), 2);
    }

    #[test]
    fn index_stays_below_nplurals() {
        for rule in [
            PluralRule::Single,
            PluralRule::Germanic,
            PluralRule::Romanic,
            PluralRule::Slavic,
            PluralRule::Czech,
        ] {
            for n in -5..200 {
                assert!(rule.index(n) < rule.nplurals(), "{rule:?} at {n}");
            }
        }
    }

    #[test]
    fn header_recognition() {
        let russian = "n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2";
        assert_eq!(PluralRule::from_header(3, russian), PluralRule::Slavic);
        assert_eq!(
            PluralRule::from_header(3, "(n==1) ? 0 : (n>=2 && n<=4) ? 1 : 2"),
            PluralRule::Czech
        );
        assert_eq!(PluralRule::from_header(2, "(n > 1)"), PluralRule::Romanic);
        assert_eq!(PluralRule::from_header(2, "(n != 1)"), PluralRule::Germanic);
        assert_eq!(PluralRule::from_header(1, "0"), PluralRule::Single);
    }

    #[test]
    fn header_fallback_by_count() {
        assert_eq!(PluralRule::from_header(1, "???"), PluralRule::Single);
        assert_eq!(PluralRule::from_header(3, "???"), PluralRule::Slavic);
        assert_eq!(PluralRule::from_header(2, "???"), PluralRule::Germanic);
    }
}
