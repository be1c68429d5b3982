//! Compile-time configuration constants for the buffer's growth policy.
//!
//! This codec has no environment variables and no CLI surface,
//! so, unlike the tunables `lz4conf.h` exposed for runtime override, these
//! are plain `pub const` items fixed at compile time.

/// Capacity a fresh [`crate::Buffer`] is given when no size hint is supplied.
/// Chosen to cover a small fixmap/fixarray-sized value without a reallocation.
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;

/// All buffer growth is rounded up to a multiple of this many bytes, per the
/// "small alignment (e.g., 64 bytes)" growth policy.
pub const GROWTH_ALIGNMENT: usize = 64;
