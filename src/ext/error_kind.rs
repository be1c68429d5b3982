//! Error-kind mapping (component C2): a bidirectional mapping between a
//! small closed set of standard error kinds and a compact numeric tag, so
//! that error values round-trip across the wire.
//!
//! Tag assignment is fixed and must not be reordered — see the
//! "error identity" design note. Adding a new kind means adding a new
//! tag value, never renumbering the existing ones.

/// The closed set of standard error kinds this codec can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorKind {
    /// Tag 1. Also the fallback for any kind this mapping doesn't know.
    #[default]
    Error,
    /// Tag 2.
    SyntaxError,
    /// Tag 3.
    TypeError,
    /// Tag 4.
    ReferenceError,
    /// Tag 5.
    RangeError,
    /// Tag 6.
    EvalError,
    /// Tag 7.
    UriError,
}

impl ErrorKind {
    /// Map to the pinned wire tag.
    pub fn to_tag(self) -> u8 {
        match self {
            ErrorKind::Error => 1,
            ErrorKind::SyntaxError => 2,
            ErrorKind::TypeError => 3,
            ErrorKind::ReferenceError => 4,
            ErrorKind::RangeError => 5,
            ErrorKind::EvalError => 6,
            ErrorKind::UriError => 7,
        }
    }

    /// Map from a wire tag. Unknown tags collapse to `ErrorKind::Error`,
    /// matching "any unknown kind collapses to Error" — this keeps
    /// the mapping total rather than fallible.
    pub fn from_tag(tag: u8) -> ErrorKind {
        match tag {
            1 => ErrorKind::Error,
            2 => ErrorKind::SyntaxError,
            3 => ErrorKind::TypeError,
            4 => ErrorKind::ReferenceError,
            5 => ErrorKind::RangeError,
            6 => ErrorKind::EvalError,
            7 => ErrorKind::UriError,
            _ => ErrorKind::Error,
        }
    }
}
