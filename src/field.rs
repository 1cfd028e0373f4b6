//! The resilient field wrapper: decode-or-default at field granularity.

use crate::kind::DefaultKind;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

/// Decides whether a failed typed decode may be replaced by the kind's
/// fallback value.
///
/// Policies are marker types, chosen per field through the second type
/// parameter of [`Resilient`]. The default, [`OnAnyError`], downgrades every
/// decode failure to a fallback; [`OnAbsentOrNull`] keeps shape mismatches
/// as hard errors.
pub trait FallbackPolicy {
    /// Inspect the raw value and the decode error it produced. `Ok(())`
    /// substitutes the fallback; returning an error propagates it.
    fn recover<E: serde::de::Error>(raw: &Value, err: serde_json::Error) -> Result<(), E>;
}

/// Fall back on every decode failure: absent key, null, or wrong shape.
pub enum OnAnyError {}

impl FallbackPolicy for OnAnyError {
    fn recover<E: serde::de::Error>(_raw: &Value, _err: serde_json::Error) -> Result<(), E> {
        Ok(())
    }
}

/// Fall back only when the key is absent or its value is null; a present
/// value of the wrong shape propagates the decode error.
pub enum OnAbsentOrNull {}

impl FallbackPolicy for OnAbsentOrNull {
    fn recover<E: serde::de::Error>(raw: &Value, err: serde_json::Error) -> Result<(), E> {
        if raw.is_null() {
            Ok(())
        } else {
            Err(E::custom(err))
        }
    }
}

/// A record field that never fails to decode.
///
/// Decoding first captures the raw JSON at the field's key, then attempts the
/// typed decode of `K::Value`. On failure the policy `P` decides between
/// substituting [`K::fallback`](DefaultKind::fallback) and propagating the
/// error; with the default policy the substitution is unconditional, so
/// `null` and wrong-shape values read back as the fallback instead of
/// aborting the enclosing record. No partial coercion is attempted: a
/// string holding digits is still a shape mismatch for an integer field.
///
/// An absent key never reaches `Deserialize` at all; declare the field with
/// `#[serde(default)]` so serde resolves it through this type's `Default`
/// impl, which yields the same fallback.
///
/// Encoding always writes the held value at the field's key.
///
/// ```rust
/// use json_resilient_rs::{parse_object, BoolTrue, Resilient};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Body {
///     #[serde(default)]
///     name: Resilient<BoolTrue>,
/// }
///
/// // The key is misspelled, so the field falls back to true.
/// let body: Body = parse_object(r#"{"ndame": "Andy"}"#).unwrap();
/// assert!(*body.name);
/// ```
pub struct Resilient<K: DefaultKind, P: FallbackPolicy = OnAnyError> {
    value: K::Value,
    kind: PhantomData<fn() -> (K, P)>,
}

impl<K: DefaultKind, P: FallbackPolicy> Resilient<K, P> {
    /// Wrap a literal value, bypassing the registry.
    pub fn new(value: K::Value) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }

    /// Consume the wrapper and return the held value.
    pub fn into_inner(self) -> K::Value {
        self.value
    }
}

impl<K: DefaultKind, P: FallbackPolicy> Default for Resilient<K, P> {
    fn default() -> Self {
        Self::new(K::fallback())
    }
}

impl<K: DefaultKind, P: FallbackPolicy> Deref for Resilient<K, P> {
    type Target = K::Value;

    fn deref(&self) -> &K::Value {
        &self.value
    }
}

impl<K: DefaultKind, P: FallbackPolicy> DerefMut for Resilient<K, P> {
    fn deref_mut(&mut self) -> &mut K::Value {
        &mut self.value
    }
}

impl<K: DefaultKind, P: FallbackPolicy> fmt::Debug for Resilient<K, P>
where
    K::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<K: DefaultKind, P: FallbackPolicy> Clone for Resilient<K, P>
where
    K::Value: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<K: DefaultKind, P: FallbackPolicy> Copy for Resilient<K, P> where K::Value: Copy {}

impl<K: DefaultKind, P: FallbackPolicy> PartialEq for Resilient<K, P>
where
    K::Value: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: DefaultKind, P: FallbackPolicy> PartialEq<K::Value> for Resilient<K, P>
where
    K::Value: PartialEq,
{
    fn eq(&self, other: &K::Value) -> bool {
        self.value == *other
    }
}

impl<K: DefaultKind, P: FallbackPolicy> Serialize for Resilient<K, P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, K: DefaultKind, P: FallbackPolicy> Deserialize<'de> for Resilient<K, P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Capture the raw value first so a failed typed decode can be
        // downgraded instead of poisoning the deserializer.
        let raw = Value::deserialize(deserializer)?;
        match K::Value::deserialize(&raw) {
            Ok(value) => Ok(Self::new(value)),
            Err(err) => {
                P::recover::<D::Error>(&raw, err)?;
                Ok(Self::default())
            }
        }
    }
}
