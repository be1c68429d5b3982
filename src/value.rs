//! The logical value domain the codec encodes and decodes.
//!
//! `Value` is a closed tagged union over everything MessagePack (plus the
//! built-in native extension types) can carry, with one open door —
//! [`Value::Custom`] — for caller-registered types. Matching the "dynamic
//! dispatch on value kind" design: the encoder and decoder are
//! exhaustive matches over this enum, so adding a variant here is a
//! compiler-enforced TODO list for both.

use crate::custom::CustomBox;
use crate::error::{CodecResult, Error, InvalidReason};
use crate::ext::error_kind::ErrorKind;

/// A signed big integer, stored as sign + big-endian magnitude so it can
/// outgrow `i64`/`u64` without pulling in a bignum crate (arbitrary
/// precision, not arbitrary *arithmetic*, is the only requirement here).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BigIntValue {
    /// `true` for negative values; zero is conventionally non-negative.
    pub negative: bool,
    /// Big-endian magnitude, without a sign bit and without leading zero
    /// bytes (beyond a single `0x00` for the value zero).
    pub magnitude: Vec<u8>,
}

/// Source pattern and flags of a regular expression.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegexValue {
    /// The pattern source, exactly as the caller supplied it.
    pub source: String,
    /// Flag characters (e.g. `"gi"`), in caller-supplied order.
    pub flags: String,
}

/// Payload of the built-in `Error` extension type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorValue {
    /// The mapped error kind.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Optional stack trace text; `None` encodes as a zero-length string.
    pub stack: Option<String>,
}

/// The value domain handled by [`crate::Codec`].
///
/// `PartialEq` is structural for composites and value-equal for primitives;
/// for [`Value::Custom`] it downcasts both sides and compares the concrete
/// type (see [`crate::custom::CustomValue::dyn_eq`]), so two custom values
/// of different concrete types never compare equal.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `0xc0`.
    Nil,
    /// `0xc2` / `0xc3`.
    Bool(bool),
    /// Signed integers representable in `i64` — the common case, covering
    /// every fixint/int8..64 form and any uint8..64 that fits.
    Int(i64),
    /// Unsigned integers that overflow `i64::MAX`; only ever produced when
    /// decoding a wire `uint64` that large, never constructed by the
    /// encoder's own minimal-width selection since no `i64` input needs it.
    UInt(u64),
    /// Always encoded as wire `float64`; decode widens `float32`
    /// up to this variant too, so equality never has to compare across
    /// widths.
    Float(f64),
    /// Raw string bytes. Opaque on purpose — see [`Value::as_str`].
    Str(Vec<u8>),
    /// Opaque binary blob.
    Bin(Vec<u8>),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Plain MessagePack map: ordered key/value pairs, duplicate keys kept
    /// as supplied.
    Map(Vec<(Value, Value)>),
    /// Built-in extension: a single timestamp, milliseconds since the Unix
    /// epoch.
    Date(i64),
    /// Built-in extension: an arbitrary-precision integer.
    BigInt(BigIntValue),
    /// Built-in extension: a regular expression's source and flags.
    Regex(RegexValue),
    /// Built-in extension: a set, distinct on the wire from a plain array
    /// so that a decoder can reconstruct it as a set rather than a list.
    Set(Vec<Value>),
    /// Built-in extension: an identity-preserving map (distinct from
    /// [`Value::Map`] the way an ES6 `Map` instance is distinct from a
    /// plain object — both serialize key/value pairs, but only this one
    /// round-trips as "a Map", not "an object").
    NativeMap(Vec<(Value, Value)>),
    /// Built-in extension: an error kind, message, and optional stack.
    Error(ErrorValue),
    /// Registered user-defined extension record, carried as its raw
    /// `(tag, payload)` pair. A registered decoder is free to return any
    /// other `Value` variant instead if it has a nicer shape to offer; this
    /// variant exists for the common case of "just hand back my bytes".
    Ext {
        /// Extension type tag, `0..=127` (user-defined range).
        tag: i8,
        /// Opaque payload bytes.
        payload: Vec<u8>,
    },
    /// An arbitrary caller-registered Rust value with no native MessagePack
    /// or built-in shape. Only encodable if a matching predicate/encoder is
    /// registered with [`crate::Codec::register`]; otherwise `Unsupported`.
    Custom(CustomBox),
}

impl Value {
    /// Construct a `Str` value from a UTF-8 string (always valid by
    /// construction, so this never fails).
    pub fn str(s: impl Into<String>) -> Value {
        Value::Str(s.into().into_bytes())
    }

    /// View this value's string bytes as `&str`, validating lazily
    /// (the opaque-bytes-on-decode
    /// choice pushes this check to the point of use).
    pub fn as_str(&self) -> CodecResult<&str> {
        match self {
            Value::Str(bytes) => {
                std::str::from_utf8(bytes).map_err(|_| Error::Invalid(InvalidReason::NonUtf8InString))
            }
            other => Err(Error::Unsupported(other.kind_name())),
        }
    }

    /// A short name for the value's kind, used in `Unsupported` error text
    /// and test assertions.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Bin(_) => "bin",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Date(_) => "date",
            Value::BigInt(_) => "bigint",
            Value::Regex(_) => "regex",
            Value::Set(_) => "set",
            Value::NativeMap(_) => "native_map",
            Value::Error(_) => "error",
            Value::Ext { .. } => "ext",
            Value::Custom(_) => "custom",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::str(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_round_trips_through_as_str() {
        let v = Value::str("hello");
        assert_eq!(v.as_str().unwrap(), "hello");
    }

    #[test]
    fn non_utf8_str_rejects_lazily() {
        let v = Value::Str(vec![0xff, 0xfe]);
        assert_eq!(
            v.as_str(),
            Err(Error::Invalid(InvalidReason::NonUtf8InString))
        );
    }

    #[test]
    fn map_keeps_duplicate_keys() {
        let v = Value::Map(vec![
            (Value::str("k"), Value::Int(1)),
            (Value::str("k"), Value::Int(2)),
        ]);
        match v {
            Value::Map(pairs) => assert_eq!(pairs.len(), 2),
            _ => panic!("expected map"),
        }
    }
}
