//! # json_resilient_rs
//!
//! Fault-tolerant JSON decoding for typed records.
//!
//! A field wrapped in [`Resilient`] never fails to decode: when its key is
//! absent, null, or holds a value of the wrong shape, the field takes a fixed
//! fallback value from the [`DefaultKind`] registry instead of aborting the
//! whole record. Plain fields keep their usual strict semantics, so a
//! partially malformed payload still yields every well-typed field while
//! genuine structural problems are still reported.
//!
//! The conversion layer wraps this in pretty-printed string and byte entry
//! points that surface a single typed error, [`ConvertError`], with a stable
//! numeric code per failure class.
//!
//! ## Example
//!
//! ```rust
//! use json_resilient_rs::{parse_object, to_json_string, IntZero, Resilient, StringEmpty};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct User {
//!     name: String,
//!     #[serde(default)]
//!     age: Resilient<IntZero>,
//!     #[serde(default)]
//!     nickname: Resilient<StringEmpty>,
//! }
//!
//! // "age" has the wrong shape and "nickname" is missing; both fall back.
//! let user: User = parse_object(r#"{"name": "Alice", "age": "oops"}"#).unwrap();
//! assert_eq!(user.name, "Alice");
//! assert_eq!(*user.age, 0);
//! assert_eq!(*user.nickname, "");
//!
//! let text = to_json_string(&user).unwrap();
//! assert!(text.contains("\"age\": 0"));
//! ```

mod convert;
mod error;
mod field;
mod kind;

// Re-export public API
pub use convert::{
    list_to_json_string, list_to_json_string_with, list_to_json_vec, parse_array,
    parse_array_slice, parse_object, parse_object_slice, to_json_string, to_json_string_with,
    to_json_vec, to_json_vec_with, EncodeOptions,
};
pub use error::ConvertError;
pub use field::{FallbackPolicy, OnAbsentOrNull, OnAnyError, Resilient};
pub use kind::{BoolFalse, BoolTrue, DefaultKind, DoubleZero, FloatZero, IntZero, StringEmpty};
