//! `MatcherKindHolder` - a matcher kind as it appears inside a config record.
//!
//! # States
//!
//! | State | How it is reached | Usable |
//! |-------|-------------------|--------|
//! | Unset | [`Default`], [`MatcherKindHolder::unset`], or a failed decode from Unset | no |
//! | Resolved | [`MatcherKindHolder::new`], or a successful [`decode`](MatcherKindHolder::decode) | yes |
//!
//! There is no way back to Unset, and a Resolved holder is never decoded again.
//! Every accessor that needs a kind returns [`KindError::Unresolved`] while Unset,
//! so a record that skipped or failed decoding cannot leak a made-up kind.

use std::fmt;

use serde::de::{self, Visitor};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{parse_kind, KindError, MatcherKind, SchemaDescriptor};

/// Holds the kind of one matcher inside a configuration record.
///
/// Serializes as the canonical name, never the numeric code:
///
/// ```
/// use matcher_kinds::{MatcherKind, MatcherKindHolder};
///
/// let holder = MatcherKindHolder::new(MatcherKind::Regex);
/// assert_eq!(serde_json::to_string(&holder).unwrap(), "\"regex\"");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MatcherKindHolder {
    kind: Option<MatcherKind>,
}

impl MatcherKindHolder {
    /// A Resolved holder for a known kind.
    #[must_use]
    pub const fn new(kind: MatcherKind) -> Self {
        Self { kind: Some(kind) }
    }

    /// An Unset holder, waiting for [`decode`](Self::decode).
    #[must_use]
    pub const fn unset() -> Self {
        Self { kind: None }
    }

    /// Whether a kind has been set.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.kind.is_some()
    }

    /// The held kind.
    ///
    /// # Errors
    ///
    /// Returns [`KindError::Unresolved`] while Unset.
    pub const fn kind(&self) -> Result<MatcherKind, KindError> {
        match self.kind {
            Some(kind) => Ok(kind),
            None => Err(KindError::Unresolved),
        }
    }

    /// Canonical name of the held kind.
    ///
    /// # Errors
    ///
    /// Returns [`KindError::Unresolved`] while Unset.
    pub fn as_str(&self) -> Result<&'static str, KindError> {
        self.kind().map(MatcherKind::as_str)
    }

    /// Resolve this holder from a scalar config literal.
    ///
    /// On failure the parser's error comes back as is and the holder keeps
    /// whatever state it had.
    ///
    /// # Errors
    ///
    /// - [`KindError::AlreadyResolved`] if the holder already carries a kind
    /// - [`KindError::InvalidKindLiteral`] if `raw` names no kind
    pub fn decode(&mut self, raw: &str) -> Result<MatcherKind, KindError> {
        if let Some(kind) = self.kind {
            return Err(KindError::AlreadyResolved { kind });
        }
        let kind = parse_kind(raw)?;
        tracing::trace!(%kind, "matcher type resolved");
        self.kind = Some(kind);
        Ok(kind)
    }

    /// Schema metadata for this field type. See [`SchemaDescriptor`].
    #[must_use]
    pub fn schema_descriptor() -> SchemaDescriptor {
        SchemaDescriptor::matcher_kind()
    }
}

impl From<MatcherKind> for MatcherKindHolder {
    fn from(kind: MatcherKind) -> Self {
        Self::new(kind)
    }
}

impl TryFrom<MatcherKindHolder> for MatcherKind {
    type Error = KindError;

    fn try_from(holder: MatcherKindHolder) -> Result<Self, Self::Error> {
        holder.kind()
    }
}

impl fmt::Display for MatcherKindHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Some(kind) => f.write_str(kind.as_str()),
            None => f.write_str("<unset>"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Serde
// ═══════════════════════════════════════════════════════════════════════════════

impl Serialize for MatcherKindHolder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let name = self.as_str().map_err(S::Error::custom)?;
        serializer.serialize_str(name)
    }
}

impl<'de> Deserialize<'de> for MatcherKindHolder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HolderVisitor)
    }
}

struct HolderVisitor;

impl Visitor<'_> for HolderVisitor {
    type Value = MatcherKindHolder;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a matcher type name as a string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let mut holder = MatcherKindHolder::unset();
        holder.decode(v).map_err(E::custom)?;
        Ok(holder)
    }
}
