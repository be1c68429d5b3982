//! Payload codec for the built-in `BigInt` extension type: a sign byte
//! followed by a big-endian magnitude, with no bound on length (the
//! "arbitrary-precision" requirement — this crate never does arithmetic on
//! the magnitude, only carries it).

use crate::buffer::Buffer;
use crate::error::CodecResult;
use crate::value::{BigIntValue, Value};

/// Append the sign byte + magnitude payload for `value` to `buf`.
pub fn encode_payload(value: &BigIntValue, buf: &mut Buffer) -> CodecResult<()> {
    buf.write_u8(value.negative as u8)?;
    buf.write_bytes(&value.magnitude)
}

/// Reconstruct a [`Value::BigInt`] from its payload bytes.
pub fn decode_payload(payload: &[u8]) -> CodecResult<Value> {
    let mut buf = Buffer::from_vec(payload.to_vec());
    let negative = buf.read_u8()? != 0;
    let magnitude = buf.slice_unread().to_vec();
    Ok(Value::BigInt(BigIntValue { negative, magnitude }))
}
