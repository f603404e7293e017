//! `MatcherKind` and the process-wide name lookup.
//!
//! The kind set is closed. Codes are contiguous from 1, and [`KIND_LIMIT`] is an
//! exclusive bound that is never itself a kind. Lookup failures are reported through
//! [`KindError`], so no numeric value ever doubles as a "not found" marker.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::KindError;

/// Exclusive upper bound of the valid code range.
pub const KIND_LIMIT: u8 = 7;

/// How a matcher inspects content.
///
/// The discriminant is the kind's numeric code. Persisted config never carries it;
/// only [`as_str`](Self::as_str) crosses a serialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum MatcherKind {
    /// Literal words in the content.
    Word = 1,
    /// Regular expressions over the content.
    Regex = 2,
    /// Raw byte patterns.
    Binary = 3,
    /// Numeric status codes.
    Status = 4,
    /// Content size.
    Size = 5,
    /// Expression language (`dsl`).
    Expression = 6,
}

impl MatcherKind {
    /// Every kind, ascending by code.
    pub const ALL: [Self; 6] = [
        Self::Word,
        Self::Regex,
        Self::Binary,
        Self::Status,
        Self::Size,
        Self::Expression,
    ];

    /// The numeric code, in `1..KIND_LIMIT`.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Regex => "regex",
            Self::Binary => "binary",
            Self::Status => "status",
            Self::Size => "size",
            Self::Expression => "dsl",
        }
    }

    /// Resolve a numeric code.
    ///
    /// # Errors
    ///
    /// Returns [`KindError::InvalidKind`] for `0`, the sentinel, and anything above it.
    pub const fn from_code(code: u8) -> Result<Self, KindError> {
        match code {
            1 => Ok(Self::Word),
            2 => Ok(Self::Regex),
            3 => Ok(Self::Binary),
            4 => Ok(Self::Status),
            5 => Ok(Self::Size),
            6 => Ok(Self::Expression),
            _ => Err(KindError::InvalidKind { code }),
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for MatcherKind {
    type Error = KindError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl FromStr for MatcherKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(s)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Lookup
// ═══════════════════════════════════════════════════════════════════════════════

/// Reverse index, canonical name -> kind. Built on first use, never written again.
static BY_NAME: LazyLock<HashMap<&'static str, MatcherKind>> = LazyLock::new(|| {
    MatcherKind::ALL
        .iter()
        .map(|kind| (kind.as_str(), *kind))
        .collect()
});

/// All valid kinds, ascending by code. The sentinel is not included.
#[must_use]
pub fn supported_kinds() -> &'static [MatcherKind] {
    &MatcherKind::ALL
}

/// Parse a kind from a config literal.
///
/// Surrounding whitespace is trimmed and the rest lowercased, then matched exactly
/// against the canonical names. There is no prefix or partial matching.
///
/// # Errors
///
/// Returns [`KindError::InvalidKindLiteral`] carrying `literal` as given.
pub fn parse_kind(literal: &str) -> Result<MatcherKind, KindError> {
    let normalized = literal.trim().to_lowercase();
    BY_NAME.get(normalized.as_str()).copied().ok_or_else(|| {
        tracing::debug!(literal, "rejected matcher type literal");
        KindError::InvalidKindLiteral {
            literal: literal.to_owned(),
        }
    })
}

/// Canonical name for a raw code.
///
/// Out-of-range codes fail loudly; there is no empty-string fallback.
///
/// # Errors
///
/// Returns [`KindError::InvalidKind`] when `code` is not in `1..KIND_LIMIT`.
pub fn kind_name_for_code(code: u8) -> Result<&'static str, KindError> {
    MatcherKind::from_code(code).map(MatcherKind::as_str)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Serde
// ═══════════════════════════════════════════════════════════════════════════════

impl Serialize for MatcherKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MatcherKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(KindVisitor)
    }
}

struct KindVisitor;

impl Visitor<'_> for KindVisitor {
    type Value = MatcherKind;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a matcher type name (word, regex, binary, status, size, dsl)")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_kind(v).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn round_trip_every_kind() {
        for kind in supported_kinds() {
            assert_eq!(parse_kind(kind.as_str()).unwrap(), *kind);
        }
    }

    #[test]
    fn names_are_distinct_and_non_empty() {
        let names: HashSet<&str> = supported_kinds().iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), 6);
        assert!(names.iter().all(|n| !n.is_empty()));
        assert!(names.iter().all(|n| n.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn supported_kinds_are_complete_and_ascending() {
        let kinds = supported_kinds();
        assert_eq!(kinds.len(), 6);

        let codes: Vec<u8> = kinds.iter().map(|k| k.code()).collect();
        assert_eq!(codes, (1..KIND_LIMIT).collect::<Vec<_>>());

        let names: HashSet<&str> = kinds.iter().map(|k| k.as_str()).collect();
        let expected: HashSet<&str> = ["status", "size", "word", "regex", "binary", "dsl"]
            .into_iter()
            .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn supported_kinds_is_restartable() {
        assert_eq!(supported_kinds(), supported_kinds());
    }

    #[test]
    fn parse_ignores_case_and_surrounding_whitespace() {
        for literal in [" Word ", "word", "WORD", "\tWoRd\n"] {
            assert_eq!(parse_kind(literal).unwrap(), MatcherKind::Word, "{literal:?}");
        }
        assert_eq!(parse_kind("DSL").unwrap(), MatcherKind::Expression);
    }

    #[test]
    fn parse_rejects_unknown_literal_verbatim() {
        assert_eq!(
            parse_kind("bogus"),
            Err(KindError::InvalidKindLiteral {
                literal: "bogus".into()
            })
        );
        assert_eq!(
            parse_kind("  Bogus "),
            Err(KindError::InvalidKindLiteral {
                literal: "  Bogus ".into()
            })
        );
        // the lookup is untouched by a failed parse
        assert_eq!(parse_kind("regex").unwrap(), MatcherKind::Regex);
    }

    #[test]
    fn parse_has_no_partial_matching() {
        for literal in ["", "   ", "wor", "words", "reg", "status code", "w ord", "expression"] {
            assert!(parse_kind(literal).is_err(), "{literal:?}");
        }
    }

    #[test]
    fn codes_round_trip() {
        for kind in supported_kinds() {
            assert_eq!(MatcherKind::from_code(kind.code()).unwrap(), *kind);
            assert_eq!(MatcherKind::try_from(kind.code()).unwrap(), *kind);
        }
    }

    #[test]
    fn out_of_range_codes_fail_loudly() {
        for code in [0, KIND_LIMIT, 8, u8::MAX] {
            assert_eq!(
                kind_name_for_code(code),
                Err(KindError::InvalidKind { code })
            );
        }
    }

    #[test]
    fn kind_name_for_code_matches_as_str() {
        assert_eq!(kind_name_for_code(1).unwrap(), "word");
        assert_eq!(kind_name_for_code(4).unwrap(), "status");
        assert_eq!(kind_name_for_code(6).unwrap(), "dsl");
    }

    #[test]
    fn from_str_and_display() {
        let kind: MatcherKind = " Binary".parse().unwrap();
        assert_eq!(kind, MatcherKind::Binary);
        assert_eq!(kind.to_string(), "binary");
    }

    #[test]
    fn serde_uses_names() {
        assert_eq!(
            serde_json::to_string(&MatcherKind::Size).unwrap(),
            "\"size\""
        );
        let kind: MatcherKind = serde_json::from_str("\"STATUS\"").unwrap();
        assert_eq!(kind, MatcherKind::Status);
        assert!(serde_json::from_str::<MatcherKind>("4").is_err());
    }
}
