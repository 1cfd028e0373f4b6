//! String and byte conversion entry points for typed records.
//!
//! This layer is marshalling plus error classification only: default
//! substitution happens inside [`Resilient`](crate::Resilient) fields during
//! the structural decode, never here.

use crate::error::ConvertError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Encoder configuration options
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Spaces per indentation level (default: 2)
    pub indent: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Encode a record as pretty-printed JSON bytes.
pub fn to_json_vec<T>(object: &T) -> Result<Vec<u8>, ConvertError>
where
    T: Serialize + ?Sized,
{
    to_json_vec_with(object, &EncodeOptions::default())
}

/// Encode a record as pretty-printed JSON bytes with explicit options.
pub fn to_json_vec_with<T>(object: &T, options: &EncodeOptions) -> Result<Vec<u8>, ConvertError>
where
    T: Serialize + ?Sized,
{
    let indent = vec![b' '; options.indent];
    let mut bytes = Vec::with_capacity(128);
    let formatter = PrettyFormatter::with_indent(&indent);
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    object.serialize(&mut serializer)?;
    Ok(bytes)
}

/// Encode an ordered sequence of records as pretty-printed JSON array bytes.
pub fn list_to_json_vec<T>(array: &[T]) -> Result<Vec<u8>, ConvertError>
where
    T: Serialize,
{
    to_json_vec(array)
}

/// Encode a record to a pretty-printed JSON string.
///
/// Fails with [`ConvertError::TextEncoding`] (code 1) if the encoded bytes
/// are not valid UTF-8. Unreachable for a correct backing encoder, but
/// handled rather than assumed.
pub fn to_json_string<T>(object: &T) -> Result<String, ConvertError>
where
    T: Serialize + ?Sized,
{
    to_json_string_with(object, &EncodeOptions::default())
}

/// Encode a record to a pretty-printed JSON string with explicit options.
pub fn to_json_string_with<T>(object: &T, options: &EncodeOptions) -> Result<String, ConvertError>
where
    T: Serialize + ?Sized,
{
    let bytes = to_json_vec_with(object, options)?;
    String::from_utf8(bytes).map_err(ConvertError::TextEncoding)
}

/// Encode an ordered sequence of records to a pretty-printed JSON array
/// string. Same failure code as [`to_json_string`].
pub fn list_to_json_string<T>(array: &[T]) -> Result<String, ConvertError>
where
    T: Serialize,
{
    to_json_string(array)
}

/// Encode an ordered sequence of records to a pretty-printed JSON array
/// string with explicit options.
pub fn list_to_json_string_with<T>(
    array: &[T],
    options: &EncodeOptions,
) -> Result<String, ConvertError>
where
    T: Serialize,
{
    to_json_string_with(array, options)
}

/// Parse a JSON document string into a typed record.
///
/// Structural failures (invalid syntax, or plain non-resilient fields that
/// are missing or of the wrong shape) surface as [`ConvertError::Json`]
/// (code 3). [`Resilient`](crate::Resilient) fields recover on their own and
/// never abort the parse.
pub fn parse_object<T>(text: &str) -> Result<T, ConvertError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(text).map_err(ConvertError::Json)
}

/// Parse a JSON array string into a vector of typed records.
pub fn parse_array<T>(text: &str) -> Result<Vec<T>, ConvertError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(text).map_err(ConvertError::Json)
}

/// Parse a JSON document from raw bytes into a typed record.
///
/// Fails with [`ConvertError::TextDecoding`] (code 2) when the bytes are not
/// valid UTF-8 text, before any structural decoding is attempted.
pub fn parse_object_slice<T>(bytes: &[u8]) -> Result<T, ConvertError>
where
    T: DeserializeOwned,
{
    let text = std::str::from_utf8(bytes).map_err(ConvertError::TextDecoding)?;
    parse_object(text)
}

/// Parse a JSON array from raw bytes into a vector of typed records.
pub fn parse_array_slice<T>(bytes: &[u8]) -> Result<Vec<T>, ConvertError>
where
    T: DeserializeOwned,
{
    let text = std::str::from_utf8(bytes).map_err(ConvertError::TextDecoding)?;
    parse_array(text)
}
