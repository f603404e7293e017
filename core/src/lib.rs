//! matcher-kinds - the closed set of matcher kinds and their config surface
//!
//! A rule engine classifies every matcher by *how* it inspects content: literal
//! words, a regular expression, a raw byte pattern, a status code, a size, or an
//! expression. This crate owns that classification and nothing else. It does not
//! evaluate anything.
//!
//! # Layers
//!
//! - [`MatcherKind`] - The closed enumeration, numeric codes `1..=6`
//! - [`parse_kind`] / [`supported_kinds`] - Process-wide immutable lookup with
//!   trim + lowercase normalization
//! - [`MatcherKindHolder`] - Embeddable config field with an explicit Unset state
//! - [`SchemaDescriptor`] - What external schema tooling sees (names only, never codes)
//! - [`codec`] - JSON and YAML entry points built on the holder
//!
//! # Wire form
//!
//! Only canonical names cross a serialization boundary:
//! `word`, `regex`, `binary`, `status`, `size`, `dsl`.
//!
//! # Example
//!
//! ```
//! use matcher_kinds::{codec, MatcherKind, MatcherKindHolder};
//!
//! let mut holder = MatcherKindHolder::default();
//! assert!(!holder.is_resolved());
//!
//! codec::decode_yaml(&mut holder, " Regex ").unwrap();
//! assert_eq!(holder.kind().unwrap(), MatcherKind::Regex);
//! assert_eq!(codec::encode_json(&holder).unwrap(), "\"regex\"");
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

pub mod codec;
mod error;
mod holder;
mod kind;
mod schema;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use error::{CodecError, KindError};
pub use holder::MatcherKindHolder;
pub use kind::{kind_name_for_code, parse_kind, supported_kinds, MatcherKind, KIND_LIMIT};
pub use schema::{SchemaDescriptor, SCHEMA_DESCRIPTION, SCHEMA_TITLE};

/// Prelude module for convenient imports.
///
/// ```
/// use matcher_kinds::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        parse_kind, supported_kinds, CodecError, KindError, MatcherKind, MatcherKindHolder,
        SchemaDescriptor,
    };
}
