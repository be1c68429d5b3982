//! Payload codec for the built-in `Date` extension type: a single
//! big-endian `i64` of milliseconds since the Unix epoch.

use crate::buffer::Buffer;
use crate::error::CodecResult;
use crate::value::Value;

/// Append the 8-byte payload for `millis` to `buf`.
pub fn encode_payload(millis: i64, buf: &mut Buffer) -> CodecResult<()> {
    buf.write_i64_be(millis)
}

/// Reconstruct a [`Value::Date`] from its payload bytes.
pub fn decode_payload(payload: &[u8]) -> CodecResult<Value> {
    let mut buf = Buffer::from_vec(payload.to_vec());
    let millis = buf.read_i64_be()?;
    Ok(Value::Date(millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_timestamp() {
        let mut buf = Buffer::new();
        encode_payload(1_700_000_000_000, &mut buf).unwrap();
        let value = decode_payload(buf.slice_unread()).unwrap();
        assert_eq!(value, Value::Date(1_700_000_000_000));
    }
}
