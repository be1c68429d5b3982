//! Facade (component C5): the one type most callers need, wrapping a
//! [`Registry`] plus the free encode/decode functions behind a small,
//! stateful API.

use crate::buffer::Buffer;
use crate::decode::{decode_value, try_decode_value, DecodeOutcome};
use crate::encode::encode_value;
use crate::error::CodecResult;
use crate::registry::Registry;
use crate::value::Value;

/// Owns a [`Registry`] of user-defined extension types and exposes
/// encode/decode over it. Cheap to construct; typically created once and
/// shared (behind an `Arc` if needed across threads — `Codec` itself isn't
/// `Clone` since registrations are meant to be set up once, not forked).
#[derive(Debug, Default)]
pub struct Codec {
    registry: Registry,
}

impl Codec {
    /// A codec with no extension types registered beyond the built-ins.
    pub fn new() -> Self {
        Codec { registry: Registry::new() }
    }

    /// Register a custom type `T` under `tag` (`0..=127`). See
    /// [`Registry::register`] for the exact contract.
    pub fn register<T, E, D>(&mut self, tag: i8, encode: E, decode: D) -> CodecResult<()>
    where
        T: std::fmt::Debug + PartialEq + Clone + Send + Sync + 'static,
        E: Fn(&T) -> CodecResult<Vec<u8>> + Send + Sync + 'static,
        D: Fn(&[u8]) -> CodecResult<T> + Send + Sync + 'static,
    {
        self.registry.register(tag, encode, decode)
    }

    /// Encode `value` into a freshly allocated byte vector.
    pub fn encode(&self, value: &Value) -> CodecResult<Vec<u8>> {
        let mut buf = Buffer::new();
        self.encode_into(value, &mut buf)?;
        Ok(buf.into_vec())
    }

    /// Encode `value`, appending to the write cursor of an existing `buf`.
    /// Useful for batching several values into one buffer before flushing.
    pub fn encode_into(&self, value: &Value, buf: &mut Buffer) -> CodecResult<()> {
        encode_value(value, &self.registry, buf)
    }

    /// Decode one value from `bytes`, requiring the full slice to be a
    /// single complete value (a thin wrapper over [`Codec::try_decode`] for
    /// the common non-streaming case).
    pub fn decode(&self, bytes: &[u8]) -> CodecResult<Value> {
        let mut buf = Buffer::from_vec(bytes.to_vec());
        decode_value(&mut buf, &self.registry)
    }

    /// Attempt to decode one value from `buf`'s current read position,
    /// reporting `NeedMore` rather than erroring when the buffer is a
    /// truncated prefix of a larger value — the entry point for streaming
    /// callers that append bytes as they arrive.
    pub fn try_decode(&self, buf: &mut Buffer) -> DecodeOutcome {
        try_decode_value(buf, &self.registry)
    }
}
