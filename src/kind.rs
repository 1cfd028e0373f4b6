//! Default kinds: the registry of per-type fallback values.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A tag naming one fixed fallback value for one value type.
///
/// The registry is a closed, compile-time table: each implementation pairs a
/// marker kind with exactly one value type and one fallback value.
/// [`fallback`](DefaultKind::fallback) is total, with no failure mode, which
/// is what lets [`Resilient`](crate::Resilient) promise that decoding a field
/// never fails.
///
/// Downstream crates extend the table by implementing the trait for their own
/// marker types, including kinds whose `Value` is a composite record.
pub trait DefaultKind {
    /// The concrete type this kind's fallback value takes.
    type Value: Serialize + DeserializeOwned;

    /// The fixed fallback value for this kind.
    fn fallback() -> Self::Value;
}

/// `i64` defaulting to `0`.
pub enum IntZero {}

impl DefaultKind for IntZero {
    type Value = i64;

    fn fallback() -> i64 {
        0
    }
}

/// `f32` defaulting to `0.0`.
pub enum FloatZero {}

impl DefaultKind for FloatZero {
    type Value = f32;

    fn fallback() -> f32 {
        0.0
    }
}

/// `f64` defaulting to `0.0`.
pub enum DoubleZero {}

impl DefaultKind for DoubleZero {
    type Value = f64;

    fn fallback() -> f64 {
        0.0
    }
}

/// `String` defaulting to `""`.
pub enum StringEmpty {}

impl DefaultKind for StringEmpty {
    type Value = String;

    fn fallback() -> String {
        String::new()
    }
}

/// `bool` defaulting to `false`.
pub enum BoolFalse {}

impl DefaultKind for BoolFalse {
    type Value = bool;

    fn fallback() -> bool {
        false
    }
}

/// `bool` defaulting to `true`.
pub enum BoolTrue {}

impl DefaultKind for BoolTrue {
    type Value = bool;

    fn fallback() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_values() {
        assert_eq!(IntZero::fallback(), 0);
        assert_eq!(FloatZero::fallback(), 0.0);
        assert_eq!(DoubleZero::fallback(), 0.0);
        assert_eq!(StringEmpty::fallback(), "");
        assert!(!BoolFalse::fallback());
        assert!(BoolTrue::fallback());
    }
}
