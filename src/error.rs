//! Error taxonomy for the codec.
//!
//! Mirrors the hand-rolled `Display`/`Error` pattern used for `Lz4FError` in
//! the LZ4 frame format (a plain data-carrying enum, manual `fmt::Display`,
//! no `thiserror`): this crate has no CLI surface, so pulling in an error
//! derive macro buys little over writing the match arm by hand.

use core::fmt;

/// Result alias used throughout the codec.
pub type CodecResult<T> = Result<T, Error>;

/// The closed set of errors the codec can produce.
///
/// `NeedMore` is the only recoverable variant — see
/// [`crate::decode::try_decode_value`] for the contract that guarantees the
/// read cursor is unchanged when it is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The buffer does not hold enough bytes to complete the current
    /// top-level decode. Recoverable: append more bytes and retry.
    NeedMore,
    /// The input cannot be interpreted as MessagePack at the current decode
    /// scope. Not recoverable by appending bytes.
    Invalid(InvalidReason),
    /// The value has no wire representation and no registered extension
    /// handler claimed it.
    Unsupported(&'static str),
    /// A tag passed to [`crate::Codec::register`] was outside `0..=127` or
    /// collided with a built-in native-type tag.
    InvalidTag,
    /// Buffer growth could not be satisfied by the host allocator.
    AllocationFailure,
}

/// Why a decode was rejected as `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// The leading byte does not match any known MessagePack format prefix.
    UnknownFormat(u8),
    /// An extension record's tag is neither registered nor a built-in.
    UnknownExtensionTag(i8),
    /// A length prefix announced more bytes than the format can carry
    /// (e.g. a `usize` overflow while widening a 32-bit length).
    LengthOverflow,
    /// A `Value::Str` accessor was asked to view its bytes as UTF-8 and
    /// they are not well-formed. Decoding itself never raises this: string
    /// payloads are carried as opaque bytes and validated lazily on access
    /// (validated lazily by the consumer instead).
    NonUtf8InString,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NeedMore => f.write_str("buffer does not contain a complete value yet"),
            Error::Invalid(reason) => write!(f, "malformed MessagePack input: {reason}"),
            Error::Unsupported(kind) => write!(f, "value of kind `{kind}` has no wire representation"),
            Error::InvalidTag => f.write_str("extension tag must be in 0..=127 and not collide with a built-in"),
            Error::AllocationFailure => f.write_str("buffer growth failed"),
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::UnknownFormat(byte) => write!(f, "unknown format byte 0x{byte:02x}"),
            InvalidReason::UnknownExtensionTag(tag) => write!(f, "unknown extension tag {tag}"),
            InvalidReason::LengthOverflow => f.write_str("length prefix overflowed"),
            InvalidReason::NonUtf8InString => f.write_str("string payload is not valid UTF-8"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_the_bad_byte() {
        let err = Error::Invalid(InvalidReason::UnknownFormat(0xc1));
        assert_eq!(
            err.to_string(),
            "malformed MessagePack input: unknown format byte 0xc1"
        );
    }

    #[test]
    fn need_more_is_distinguishable_from_invalid() {
        assert_ne!(Error::NeedMore, Error::Invalid(InvalidReason::LengthOverflow));
    }
}
