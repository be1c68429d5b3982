//! Payload codec for the built-in `Map` extension type: a `u32` pair count
//! followed by each key then value, recursively encoded as full MessagePack
//! values (distinct on the wire from [`Value::Map`] — see its doc comment).

use crate::buffer::Buffer;
use crate::decode::decode_value;
use crate::encode::encode_value;
use crate::error::CodecResult;
use crate::registry::Registry;
use crate::value::Value;

/// Append the count+pairs payload for `pairs` to `buf`.
pub fn encode_payload(pairs: &[(Value, Value)], registry: &Registry, buf: &mut Buffer) -> CodecResult<()> {
    buf.write_u32_be(pairs.len() as u32)?;
    for (key, value) in pairs {
        encode_value(key, registry, buf)?;
        encode_value(value, registry, buf)?;
    }
    Ok(())
}

/// Reconstruct a [`Value::NativeMap`] from its payload bytes.
pub fn decode_payload(payload: &[u8], registry: &Registry) -> CodecResult<Value> {
    let mut buf = Buffer::from_vec(payload.to_vec());
    let count = buf.read_u32_be()? as usize;
    let mut pairs = Vec::with_capacity(count);
    for _ in 0..count {
        let key = decode_value(&mut buf, registry)?;
        let value = decode_value(&mut buf, registry)?;
        pairs.push((key, value));
    }
    Ok(Value::NativeMap(pairs))
}
