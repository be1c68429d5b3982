//! Encoder (component C3, half): turn a [`Value`] into MessagePack bytes.
//!
//! Dispatch order for every value is registry match, then built-in native
//! type, then the plain MessagePack primitive encoding — mirroring the
//! decode side's symmetric order in [`crate::decode`]. Each call snapshots
//! [`Buffer::write_pos`] before writing anything and rolls back to it on any
//! error, so a failure partway through a composite (array, map, extension
//! payload) never leaves a truncated, half-written record in the buffer.

use crate::buffer::Buffer;
use crate::error::{CodecResult, Error, InvalidReason};
use crate::ext;
use crate::format;
use crate::registry::Registry;
use crate::value::Value;

const MAX_LEN: usize = u32::MAX as usize;

/// Encode `value` into `buf`, consulting `registry` for any `Value::Custom`.
pub fn encode_value(value: &Value, registry: &Registry, buf: &mut Buffer) -> CodecResult<()> {
    let start = buf.write_pos();
    let result = encode_value_inner(value, registry, buf);
    if result.is_err() {
        buf.truncate_write(start);
    }
    result
}

fn encode_value_inner(value: &Value, registry: &Registry, buf: &mut Buffer) -> CodecResult<()> {
    if let Value::Custom(custom) = value {
        return match registry.find_match(custom) {
            Some(tag) => {
                let payload = registry.encode(tag, custom)?;
                encode_ext_record(tag, &payload, buf)
            }
            None => Err(Error::Unsupported(value.kind_name())),
        };
    }

    if let Some(result) = ext::encode_builtin(value, registry) {
        let (tag, payload) = result?;
        return encode_ext_record(tag, &payload, buf);
    }

    match value {
        Value::Nil => buf.write_u8(format::NIL),
        Value::Bool(false) => buf.write_u8(format::FALSE),
        Value::Bool(true) => buf.write_u8(format::TRUE),
        Value::Int(v) => encode_int(*v, buf),
        Value::UInt(v) => encode_uint(*v, buf),
        Value::Float(v) => {
            buf.write_u8(format::FLOAT64)?;
            buf.write_f64_be(*v)
        }
        Value::Str(bytes) => encode_str(bytes, buf),
        Value::Bin(bytes) => encode_bin(bytes, buf),
        Value::Array(items) => encode_array(items, registry, buf),
        Value::Map(pairs) => encode_map(pairs, registry, buf),
        Value::Ext { tag, payload } => encode_ext_record(*tag, payload, buf),
        // Built-ins and Custom are handled above; this arm is unreachable.
        _ => unreachable!("built-in and custom values are dispatched before this match"),
    }
}

fn check_len(len: usize) -> CodecResult<u32> {
    if len > MAX_LEN {
        return Err(Error::Invalid(InvalidReason::LengthOverflow));
    }
    Ok(len as u32)
}

fn encode_int(v: i64, buf: &mut Buffer) -> CodecResult<()> {
    if v >= 0 {
        return encode_uint(v as u64, buf);
    }
    if (-32..0).contains(&v) {
        return buf.write_i8(v as i8);
    }
    if v >= i8::MIN as i64 {
        buf.write_u8(format::INT8)?;
        buf.write_i8(v as i8)
    } else if v >= i16::MIN as i64 {
        buf.write_u8(format::INT16)?;
        buf.write_i16_be(v as i16)
    } else if v >= i32::MIN as i64 {
        buf.write_u8(format::INT32)?;
        buf.write_i32_be(v as i32)
    } else {
        buf.write_u8(format::INT64)?;
        buf.write_i64_be(v)
    }
}

fn encode_uint(v: u64, buf: &mut Buffer) -> CodecResult<()> {
    if v <= 0x7f {
        buf.write_u8(v as u8)
    } else if v <= u8::MAX as u64 {
        buf.write_u8(format::UINT8)?;
        buf.write_u8(v as u8)
    } else if v <= u16::MAX as u64 {
        buf.write_u8(format::UINT16)?;
        buf.write_u16_be(v as u16)
    } else if v <= u32::MAX as u64 {
        buf.write_u8(format::UINT32)?;
        buf.write_u32_be(v as u32)
    } else {
        buf.write_u8(format::UINT64)?;
        buf.write_u64_be(v)
    }
}

fn encode_str(bytes: &[u8], buf: &mut Buffer) -> CodecResult<()> {
    let len = check_len(bytes.len())?;
    if len <= 31 {
        buf.write_u8(0xa0 | len as u8)?;
    } else if len <= u8::MAX as u32 {
        buf.write_u8(format::STR8)?;
        buf.write_u8(len as u8)?;
    } else if len <= u16::MAX as u32 {
        buf.write_u8(format::STR16)?;
        buf.write_u16_be(len as u16)?;
    } else {
        buf.write_u8(format::STR32)?;
        buf.write_u32_be(len)?;
    }
    buf.write_bytes(bytes)
}

fn encode_bin(bytes: &[u8], buf: &mut Buffer) -> CodecResult<()> {
    let len = check_len(bytes.len())?;
    if len <= u8::MAX as u32 {
        buf.write_u8(format::BIN8)?;
        buf.write_u8(len as u8)?;
    } else if len <= u16::MAX as u32 {
        buf.write_u8(format::BIN16)?;
        buf.write_u16_be(len as u16)?;
    } else {
        buf.write_u8(format::BIN32)?;
        buf.write_u32_be(len)?;
    }
    buf.write_bytes(bytes)
}

fn encode_array(items: &[Value], registry: &Registry, buf: &mut Buffer) -> CodecResult<()> {
    let len = check_len(items.len())?;
    if len <= 15 {
        buf.write_u8(0x90 | len as u8)?;
    } else if len <= u16::MAX as u32 {
        buf.write_u8(format::ARRAY16)?;
        buf.write_u16_be(len as u16)?;
    } else {
        buf.write_u8(format::ARRAY32)?;
        buf.write_u32_be(len)?;
    }
    for item in items {
        encode_value(item, registry, buf)?;
    }
    Ok(())
}

fn encode_map(pairs: &[(Value, Value)], registry: &Registry, buf: &mut Buffer) -> CodecResult<()> {
    let len = check_len(pairs.len())?;
    if len <= 15 {
        buf.write_u8(0x80 | len as u8)?;
    } else if len <= u16::MAX as u32 {
        buf.write_u8(format::MAP16)?;
        buf.write_u16_be(len as u16)?;
    } else {
        buf.write_u8(format::MAP32)?;
        buf.write_u32_be(len)?;
    }
    for (key, value) in pairs {
        encode_value(key, registry, buf)?;
        encode_value(value, registry, buf)?;
    }
    Ok(())
}

/// Pick the tightest extension framing (fixext1/2/4/8/16, or ext8/16/32) for
/// a `(tag, payload)` pair, matching the "fixext when the length is exactly
/// a power of two up to 16, else the general ext form" rule every
/// MessagePack extension encoder follows.
fn encode_ext_record(tag: i8, payload: &[u8], buf: &mut Buffer) -> CodecResult<()> {
    let len = check_len(payload.len())?;
    match len {
        1 => buf.write_u8(format::FIXEXT1)?,
        2 => buf.write_u8(format::FIXEXT2)?,
        4 => buf.write_u8(format::FIXEXT4)?,
        8 => buf.write_u8(format::FIXEXT8)?,
        16 => buf.write_u8(format::FIXEXT16)?,
        _ if len <= u8::MAX as u32 => {
            buf.write_u8(format::EXT8)?;
            buf.write_u8(len as u8)?;
        }
        _ if len <= u16::MAX as u32 => {
            buf.write_u8(format::EXT16)?;
            buf.write_u16_be(len as u16)?;
        }
        _ => {
            buf.write_u8(format::EXT32)?;
            buf.write_u32_be(len)?;
        }
    }
    buf.write_i8(tag)?;
    buf.write_bytes(payload)
}
