//! A MessagePack codec built around a growable dual-cursor buffer and an
//! extension-type registry.
//!
//! [`Value`] is the in-memory value domain; [`Codec`] is the stateful
//! facade most callers reach for — it owns a [`Registry`] of user-defined
//! extension types and exposes `encode`/`decode`/`try_decode`. The free
//! functions in [`encode`] and [`decode`] are available directly for
//! callers who want to manage a [`Registry`] themselves (e.g. sharing one
//! across several [`Buffer`]s without going through `Codec`).
//!
//! Six native types — timestamps, arbitrary-precision integers, regular
//! expressions, sets, identity-preserving maps, and errors — are built in
//! under fixed negative extension tags (see [`ext`]) and need no
//! registration; `0..=127` remains free for caller-defined types.

pub mod buffer;
pub mod codec;
pub mod config;
pub mod custom;
pub mod decode;
pub mod encode;
pub mod error;
pub mod ext;
pub mod format;
pub mod registry;
pub mod value;

pub use buffer::Buffer;
pub use codec::Codec;
pub use custom::{CustomBox, CustomValue};
pub use decode::{decode_value, try_decode_value, DecodeOutcome};
pub use encode::encode_value;
pub use error::{CodecResult, Error, InvalidReason};
pub use ext::error_kind::ErrorKind;
pub use registry::Registry;
pub use value::{BigIntValue, ErrorValue, RegexValue, Value};
