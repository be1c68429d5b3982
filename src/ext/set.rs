//! Payload codec for the built-in `Set` extension type: a `u32` element
//! count followed by each element, recursively encoded as a full MessagePack
//! value in its own right.

use crate::buffer::Buffer;
use crate::decode::decode_value;
use crate::encode::encode_value;
use crate::error::CodecResult;
use crate::registry::Registry;
use crate::value::Value;

/// Append the count+elements payload for `elements` to `buf`. Elements are
/// full recursive values, so custom-registered types nested inside a set
/// still need `registry` to encode.
pub fn encode_payload(elements: &[Value], registry: &Registry, buf: &mut Buffer) -> CodecResult<()> {
    buf.write_u32_be(elements.len() as u32)?;
    for element in elements {
        encode_value(element, registry, buf)?;
    }
    Ok(())
}

/// Reconstruct a [`Value::Set`] from its payload bytes.
pub fn decode_payload(payload: &[u8], registry: &Registry) -> CodecResult<Value> {
    let mut buf = Buffer::from_vec(payload.to_vec());
    let count = buf.read_u32_be()? as usize;
    let mut elements = Vec::with_capacity(count);
    for _ in 0..count {
        elements.push(decode_value(&mut buf, registry)?);
    }
    Ok(Value::Set(elements))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_mixed_elements() {
        let registry = Registry::new();
        let elements = vec![Value::Int(1), Value::str("two"), Value::Bool(true)];
        let mut buf = Buffer::new();
        encode_payload(&elements, &registry, &mut buf).unwrap();
        assert_eq!(
            decode_payload(buf.slice_unread(), &registry).unwrap(),
            Value::Set(elements)
        );
    }

    #[test]
    fn empty_set_round_trips() {
        let registry = Registry::new();
        let mut buf = Buffer::new();
        encode_payload(&[], &registry, &mut buf).unwrap();
        assert_eq!(
            decode_payload(buf.slice_unread(), &registry).unwrap(),
            Value::Set(vec![])
        );
    }
}
