//! Built-in native extension types: a fixed set of negative
//! extension tags the codec understands without any registration, each with
//! its own payload codec in a sibling module.
//!
//! Negative tags are reserved for these built-ins; the user-registrable
//! range in [`crate::registry`] is `0..=127`, so the two can never collide.

pub mod bigint;
pub mod date;
pub mod error_kind;
pub mod error_value;
pub mod native_map;
pub mod regex;
pub mod set;

use crate::buffer::Buffer;
use crate::error::{CodecResult, Error, InvalidReason};
use crate::registry::Registry;
use crate::value::Value;

/// Extension tag for [`Value::Date`].
pub const TAG_DATE: i8 = -1;
/// Extension tag for [`Value::BigInt`].
pub const TAG_BIGINT: i8 = -2;
/// Extension tag for [`Value::Regex`].
pub const TAG_REGEX: i8 = -3;
/// Extension tag for [`Value::Set`].
pub const TAG_SET: i8 = -4;
/// Extension tag for [`Value::NativeMap`].
pub const TAG_MAP: i8 = -5;
/// Extension tag for [`Value::Error`].
pub const TAG_ERROR: i8 = -6;

/// `Some(payload)` if `value` is one of the built-in native types, encoded
/// into a fresh payload buffer; `None` if `value` isn't a built-in (the
/// caller should fall through to the registry, then to the primitive match).
///
/// `registry` is only consulted by the two built-ins (`Set`, `Map`) whose
/// payload can itself nest a custom-registered value.
pub fn encode_builtin(value: &Value, registry: &Registry) -> Option<CodecResult<(i8, Vec<u8>)>> {
    let result = match value {
        Value::Date(millis) => encode_into(TAG_DATE, |buf| date::encode_payload(*millis, buf)),
        Value::BigInt(v) => encode_into(TAG_BIGINT, |buf| bigint::encode_payload(v, buf)),
        Value::Regex(v) => encode_into(TAG_REGEX, |buf| regex::encode_payload(v, buf)),
        Value::Set(elements) => encode_into(TAG_SET, |buf| set::encode_payload(elements, registry, buf)),
        Value::NativeMap(pairs) => {
            encode_into(TAG_MAP, |buf| native_map::encode_payload(pairs, registry, buf))
        }
        Value::Error(v) => encode_into(TAG_ERROR, |buf| error_value::encode_payload(v, buf)),
        _ => return None,
    };
    Some(result)
}

fn encode_into(tag: i8, write: impl FnOnce(&mut Buffer) -> CodecResult<()>) -> CodecResult<(i8, Vec<u8>)> {
    let mut buf = Buffer::new();
    write(&mut buf)?;
    Ok((tag, buf.into_vec()))
}

/// Decode a built-in extension's payload given its tag. `Err(InvalidTag)`-
/// shaped as [`Error::Invalid`] with [`InvalidReason::UnknownExtensionTag`]
/// if `tag` isn't one of the reserved built-in tags — the caller is expected
/// to have already ruled out the user registry before reaching here.
pub fn decode_builtin(tag: i8, payload: &[u8], registry: &Registry) -> CodecResult<Value> {
    match tag {
        TAG_DATE => date::decode_payload(payload),
        TAG_BIGINT => bigint::decode_payload(payload),
        TAG_REGEX => regex::decode_payload(payload),
        TAG_SET => set::decode_payload(payload, registry),
        TAG_MAP => native_map::decode_payload(payload, registry),
        TAG_ERROR => error_value::decode_payload(payload),
        other => Err(Error::Invalid(InvalidReason::UnknownExtensionTag(other))),
    }
}

/// `true` if `tag` names one of the built-ins above.
pub fn is_builtin_tag(tag: i8) -> bool {
    matches!(tag, TAG_DATE | TAG_BIGINT | TAG_REGEX | TAG_SET | TAG_MAP | TAG_ERROR)
}
