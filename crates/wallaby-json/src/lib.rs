//! JSON encode/decode helpers.
//!
//! Thin wrappers over [`serde_json`] used at the toolkit's boundary:
//! [`encode`] turns any `Serialize` value into its canonical JSON text, and
//! [`decode`] parses JSON text back into a value of a caller-chosen shape.
//!
//! The target shape declares its own deserialization routine (a
//! [`serde::Deserialize`] impl); computed accessors are ordinary methods on
//! the target type and operate on the decoded fields, so no runtime
//! reflection is involved.
//!
//! Key order in encoded output follows the standard encoder (struct field
//! order, map iteration order) and is not part of the contract.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure to encode a value as JSON.
///
/// Raised for values the format cannot represent (e.g. maps with
/// non-string keys); wraps the underlying [`serde_json::Error`].
#[derive(Debug, Error)]
#[error("failed to encode value as JSON: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

/// Failure to decode JSON text.
///
/// Raised for malformed input or input that does not fit the target shape;
/// wraps the underlying [`serde_json::Error`] and propagates unchanged to
/// the caller.
#[derive(Debug, Error)]
#[error("malformed JSON input: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Encode a structured value to compact JSON text.
///
/// # Errors
///
/// Returns [`EncodeError`] if the value cannot be represented as JSON.
pub fn encode<T>(value: &T) -> Result<String, EncodeError>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(value)?)
}

/// Encode a structured value to indented, human-readable JSON text.
///
/// # Errors
///
/// Returns [`EncodeError`] if the value cannot be represented as JSON.
pub fn encode_pretty<T>(value: &T) -> Result<String, EncodeError>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string_pretty(value)?)
}

/// Decode JSON text into a value of the target shape.
///
/// ```
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// let point: Point = wallaby_json::decode(r#"{"x": 1.0, "y": 2.0}"#).unwrap();
/// assert_eq!((point.x, point.y), (1.0, 2.0));
/// ```
///
/// # Errors
///
/// Returns [`DecodeError`] if the text is not valid JSON or does not match
/// the target shape.
pub fn decode<T>(text: &str) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_str(text)?)
}
