//! Payload codec for the built-in `RegExp` extension type: a length-prefixed
//! source string followed by a length-prefixed flags string.

use crate::buffer::Buffer;
use crate::error::{CodecResult, Error, InvalidReason};
use crate::value::{RegexValue, Value};

fn write_len_prefixed_str(s: &str, buf: &mut Buffer) -> CodecResult<()> {
    buf.write_u32_be(s.len() as u32)?;
    buf.write_bytes(s.as_bytes())
}

fn read_len_prefixed_str(buf: &mut Buffer) -> CodecResult<String> {
    let len = buf.read_u32_be()? as usize;
    let bytes = buf.read_bytes(len)?;
    String::from_utf8(bytes.to_vec()).map_err(|_| Error::Invalid(InvalidReason::NonUtf8InString))
}

/// Append the source+flags payload for `value` to `buf`.
pub fn encode_payload(value: &RegexValue, buf: &mut Buffer) -> CodecResult<()> {
    write_len_prefixed_str(&value.source, buf)?;
    write_len_prefixed_str(&value.flags, buf)
}

/// Reconstruct a [`Value::Regex`] from its payload bytes.
pub fn decode_payload(payload: &[u8]) -> CodecResult<Value> {
    let mut buf = Buffer::from_vec(payload.to_vec());
    let source = read_len_prefixed_str(&mut buf)?;
    let flags = read_len_prefixed_str(&mut buf)?;
    Ok(Value::Regex(RegexValue { source, flags }))
}
