//! Decoder (component C4): turn MessagePack bytes back into a [`Value`].
//!
//! Two entry points share one implementation: [`decode_value`] is the
//! strict form (`NeedMore`/`Invalid` are just another [`Error`]), and
//! [`try_decode_value`] wraps it into the tri-state outcome a streaming
//! caller wants — `Complete`, `NeedMore`, or `Invalid` — with the read
//! cursor guaranteed unchanged unless the outcome is `Complete`.

use crate::buffer::Buffer;
use crate::error::{CodecResult, Error, InvalidReason};
use crate::ext;
use crate::format::{self, Format};
use crate::registry::Registry;
use crate::value::Value;

/// Outcome of a streaming decode attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    /// A full value was decoded; the read cursor now sits just past it.
    Complete(Value),
    /// Not enough bytes are buffered yet. The read cursor is unchanged —
    /// append more bytes and retry from the same position.
    NeedMore,
    /// The bytes at the current read position cannot be MessagePack. The
    /// read cursor is unchanged; this is not recoverable by appending bytes.
    Invalid(InvalidReason),
}

/// Decode one value starting at the current read cursor.
///
/// On any error the read cursor is restored to where it stood on entry, so
/// a caller that gets `Err(Error::NeedMore)` can simply append bytes and
/// call again.
pub fn decode_value(buf: &mut Buffer, registry: &Registry) -> CodecResult<Value> {
    let start = buf.read_pos();
    let result = decode_value_inner(buf, registry);
    if result.is_err() {
        buf.seek_read(start);
    }
    result
}

/// Streaming variant of [`decode_value`] that reports its outcome instead of
/// propagating `NeedMore`/`Invalid` as an error a caller must match on.
pub fn try_decode_value(buf: &mut Buffer, registry: &Registry) -> DecodeOutcome {
    match decode_value(buf, registry) {
        Ok(value) => DecodeOutcome::Complete(value),
        Err(Error::NeedMore) => DecodeOutcome::NeedMore,
        Err(Error::Invalid(reason)) => DecodeOutcome::Invalid(reason),
        Err(other) => unreachable!("decoding never produces {other:?}"),
    }
}

fn decode_value_inner(buf: &mut Buffer, registry: &Registry) -> CodecResult<Value> {
    let byte = buf.read_u8()?;
    match format::classify(byte) {
        Format::PositiveFixInt(v) => Ok(Value::Int(v as i64)),
        Format::NegativeFixInt(v) => Ok(Value::Int(v as i64)),
        Format::FixMap(n) => decode_map(n as usize, buf, registry),
        Format::FixArray(n) => decode_array(n as usize, buf, registry),
        Format::FixStr(n) => decode_str(n as usize, buf),
        Format::Nil => Ok(Value::Nil),
        Format::False => Ok(Value::Bool(false)),
        Format::True => Ok(Value::Bool(true)),
        Format::Bin8 => {
            let n = buf.read_u8()? as usize;
            decode_bin(n, buf)
        }
        Format::Bin16 => {
            let n = buf.read_u16_be()? as usize;
            decode_bin(n, buf)
        }
        Format::Bin32 => {
            let n = buf.read_u32_be()? as usize;
            decode_bin(n, buf)
        }
        Format::Ext8 => {
            let n = buf.read_u8()? as usize;
            decode_ext(n, buf, registry)
        }
        Format::Ext16 => {
            let n = buf.read_u16_be()? as usize;
            decode_ext(n, buf, registry)
        }
        Format::Ext32 => {
            let n = buf.read_u32_be()? as usize;
            decode_ext(n, buf, registry)
        }
        Format::Float32 => Ok(Value::Float(buf.read_f32_be()? as f64)),
        Format::Float64 => Ok(Value::Float(buf.read_f64_be()?)),
        Format::Uint8 => Ok(Value::Int(buf.read_u8()? as i64)),
        Format::Uint16 => Ok(Value::Int(buf.read_u16_be()? as i64)),
        Format::Uint32 => Ok(Value::Int(buf.read_u32_be()? as i64)),
        Format::Uint64 => {
            let v = buf.read_u64_be()?;
            if v <= i64::MAX as u64 {
                Ok(Value::Int(v as i64))
            } else {
                Ok(Value::UInt(v))
            }
        }
        Format::Int8 => Ok(Value::Int(buf.read_i8()? as i64)),
        Format::Int16 => Ok(Value::Int(buf.read_i16_be()? as i64)),
        Format::Int32 => Ok(Value::Int(buf.read_i32_be()? as i64)),
        Format::Int64 => Ok(Value::Int(buf.read_i64_be()?)),
        Format::FixExt1 => decode_ext(1, buf, registry),
        Format::FixExt2 => decode_ext(2, buf, registry),
        Format::FixExt4 => decode_ext(4, buf, registry),
        Format::FixExt8 => decode_ext(8, buf, registry),
        Format::FixExt16 => decode_ext(16, buf, registry),
        Format::Str8 => {
            let n = buf.read_u8()? as usize;
            decode_str(n, buf)
        }
        Format::Str16 => {
            let n = buf.read_u16_be()? as usize;
            decode_str(n, buf)
        }
        Format::Str32 => {
            let n = buf.read_u32_be()? as usize;
            decode_str(n, buf)
        }
        Format::Array16 => {
            let n = buf.read_u16_be()? as usize;
            decode_array(n, buf, registry)
        }
        Format::Array32 => {
            let n = buf.read_u32_be()? as usize;
            decode_array(n, buf, registry)
        }
        Format::Map16 => {
            let n = buf.read_u16_be()? as usize;
            decode_map(n, buf, registry)
        }
        Format::Map32 => {
            let n = buf.read_u32_be()? as usize;
            decode_map(n, buf, registry)
        }
        Format::Unknown(b) => Err(Error::Invalid(InvalidReason::UnknownFormat(b))),
    }
}

fn decode_str(len: usize, buf: &mut Buffer) -> CodecResult<Value> {
    Ok(Value::Str(buf.read_bytes(len)?.to_vec()))
}

fn decode_bin(len: usize, buf: &mut Buffer) -> CodecResult<Value> {
    Ok(Value::Bin(buf.read_bytes(len)?.to_vec()))
}

fn decode_array(len: usize, buf: &mut Buffer, registry: &Registry) -> CodecResult<Value> {
    let mut items = Vec::with_capacity(len.min(1024));
    for _ in 0..len {
        items.push(decode_value(buf, registry)?);
    }
    Ok(Value::Array(items))
}

fn decode_map(len: usize, buf: &mut Buffer, registry: &Registry) -> CodecResult<Value> {
    let mut pairs = Vec::with_capacity(len.min(1024));
    for _ in 0..len {
        let key = decode_value(buf, registry)?;
        let value = decode_value(buf, registry)?;
        pairs.push((key, value));
    }
    Ok(Value::Map(pairs))
}

/// Decode an extension record's tag + payload, then dispatch to the
/// built-in table, then the user registry, falling back to a raw
/// `Value::Ext` when neither claims the tag (an unregistered tag is not an
/// error — it's the "hand back my bytes" case documented on `Value::Ext`).
fn decode_ext(len: usize, buf: &mut Buffer, registry: &Registry) -> CodecResult<Value> {
    let tag = buf.read_i8()?;
    let payload = buf.read_bytes(len)?.to_vec();
    if ext::is_builtin_tag(tag) {
        return ext::decode_builtin(tag, &payload, registry);
    }
    if let Some(result) = registry.decode(tag, &payload) {
        return result;
    }
    Ok(Value::Ext { tag, payload })
}
