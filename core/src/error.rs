//! Error types for kind lookup and the format adapters.

use crate::MatcherKind;

/// Errors from kind lookup and holder state transitions.
///
/// Every variant is a hard failure. Nothing here is ever recovered by
/// substituting a default kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KindError {
    /// The literal matched no canonical name after trimming and lowercasing.
    #[error(
        "invalid matcher type \"{literal}\", expected one of: word, regex, binary, status, size, dsl"
    )]
    InvalidKindLiteral {
        /// The literal exactly as the caller supplied it (not normalized).
        literal: String,
    },

    /// A numeric code outside `1..KIND_LIMIT`.
    #[error("invalid matcher kind code {code}, valid codes are 1 through 6")]
    InvalidKind {
        /// The rejected code.
        code: u8,
    },

    /// The holder was never resolved, so it has no kind to report or encode.
    #[error("matcher type is unset; decode it from config before use")]
    Unresolved,

    /// The holder already carries a kind and is never mutated twice.
    #[error("matcher type is already resolved to \"{kind}\"")]
    AlreadyResolved {
        /// The kind the holder keeps.
        kind: MatcherKind,
    },
}

/// Errors from the JSON and YAML adapters in [`codec`](crate::codec).
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The holder or the lookup rejected the value. Carried unchanged.
    #[error(transparent)]
    Kind(#[from] KindError),

    /// The JSON text was malformed or was not a single string.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML text was malformed or was not a single string scalar.
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CodecError {
    /// The kind error behind this failure, if the document shape was fine.
    #[must_use]
    pub fn as_kind_error(&self) -> Option<&KindError> {
        match self {
            Self::Kind(e) => Some(e),
            Self::Json(_) | Self::Yaml(_) => None,
        }
    }
}
