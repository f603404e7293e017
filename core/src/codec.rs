//! JSON and YAML entry points for [`MatcherKindHolder`].
//!
//! Decoding reads the document as one string scalar first, so any shape problem is a
//! format error ([`CodecError::Json`] / [`CodecError::Yaml`]). The literal then goes
//! through [`MatcherKindHolder::decode`], whose error is returned unchanged as
//! [`CodecError::Kind`].
//!
//! Encoding emits the canonical name in both formats.
//!
//! | Holder | JSON | YAML |
//! |--------|------|------|
//! | `Regex` | `"regex"` | `regex` |
//! | Unset | `Err(Kind(Unresolved))` | `Err(Kind(Unresolved))` |

use crate::{CodecError, MatcherKindHolder};

/// Decode a JSON string document into `holder`.
///
/// # Errors
///
/// [`CodecError::Json`] if `text` is not a single JSON string, otherwise
/// [`CodecError::Kind`] from [`MatcherKindHolder::decode`].
pub fn decode_json(holder: &mut MatcherKindHolder, text: &str) -> Result<(), CodecError> {
    let raw: String = serde_json::from_str(text)?;
    holder.decode(&raw)?;
    Ok(())
}

/// Decode a YAML scalar document into `holder`.
///
/// # Errors
///
/// [`CodecError::Yaml`] if `text` is not a single YAML scalar, otherwise
/// [`CodecError::Kind`] from [`MatcherKindHolder::decode`].
pub fn decode_yaml(holder: &mut MatcherKindHolder, text: &str) -> Result<(), CodecError> {
    let raw: String = serde_yaml::from_str(text)?;
    holder.decode(&raw)?;
    Ok(())
}

/// A fresh holder decoded from a JSON string document.
///
/// # Errors
///
/// See [`decode_json`].
pub fn from_json_str(text: &str) -> Result<MatcherKindHolder, CodecError> {
    let mut holder = MatcherKindHolder::unset();
    decode_json(&mut holder, text)?;
    Ok(holder)
}

/// A fresh holder decoded from a YAML scalar document.
///
/// # Errors
///
/// See [`decode_yaml`].
pub fn from_yaml_str(text: &str) -> Result<MatcherKindHolder, CodecError> {
    let mut holder = MatcherKindHolder::unset();
    decode_yaml(&mut holder, text)?;
    Ok(holder)
}

/// Encode as a JSON string literal, e.g. `"regex"`.
///
/// # Errors
///
/// [`CodecError::Kind`] with `Unresolved` if the holder is Unset.
pub fn encode_json(holder: &MatcherKindHolder) -> Result<String, CodecError> {
    let name = holder.as_str()?;
    Ok(serde_json::to_string(name)?)
}

/// Encode as a YAML document, e.g. `regex\n`.
///
/// # Errors
///
/// [`CodecError::Kind`] with `Unresolved` if the holder is Unset.
pub fn encode_yaml(holder: &MatcherKindHolder) -> Result<String, CodecError> {
    let name = holder.as_str()?;
    Ok(serde_yaml::to_string(name)?)
}
