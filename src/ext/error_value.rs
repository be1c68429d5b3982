//! Payload codec for the built-in `Error` extension type: a 1-byte
//! error-kind tag, a length-prefixed message, and a length-prefixed stack
//! string (possibly empty when no stack was captured).
//!
//! The wire layout has no way to distinguish "no stack" from "a stack that
//! happens to be the empty string" — both are a zero-length string. This
//! implementation deliberately collapses `Some(String::new())` to `None` on
//! decode (see the "error stack representation" entry in `DESIGN.md`); a
//! caller that needs to tell the two apart should use a non-empty sentinel.

use crate::buffer::Buffer;
use crate::error::{CodecResult, Error, InvalidReason};
use crate::ext::error_kind::ErrorKind;
use crate::value::{ErrorValue, Value};

fn write_len_prefixed(s: &str, buf: &mut Buffer) -> CodecResult<()> {
    buf.write_u32_be(s.len() as u32)?;
    buf.write_bytes(s.as_bytes())
}

fn read_len_prefixed(buf: &mut Buffer) -> CodecResult<String> {
    let len = buf.read_u32_be()? as usize;
    let bytes = buf.read_bytes(len)?;
    String::from_utf8(bytes.to_vec()).map_err(|_| Error::Invalid(InvalidReason::NonUtf8InString))
}

/// Append the kind+message+stack payload for `value` to `buf`.
pub fn encode_payload(value: &ErrorValue, buf: &mut Buffer) -> CodecResult<()> {
    buf.write_u8(value.kind.to_tag())?;
    write_len_prefixed(&value.message, buf)?;
    write_len_prefixed(value.stack.as_deref().unwrap_or(""), buf)
}

/// Reconstruct a [`Value::Error`] from its payload bytes.
pub fn decode_payload(payload: &[u8]) -> CodecResult<Value> {
    let mut buf = Buffer::from_vec(payload.to_vec());
    let kind = ErrorKind::from_tag(buf.read_u8()?);
    let message = read_len_prefixed(&mut buf)?;
    let stack_text = read_len_prefixed(&mut buf)?;
    let stack = if stack_text.is_empty() { None } else { Some(stack_text) };
    Ok(Value::Error(ErrorValue { kind, message, stack }))
}
