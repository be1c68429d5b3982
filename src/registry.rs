//! User-defined extension-type registry (component C3's predicate/codec
//! table: up to 128 `(predicate, encoder, decoder)` triples keyed by
//! tag `0..=127`.
//!
//! This range is disjoint from the built-in native tags (`-1..=-6` in
//! [`crate::ext`]) by construction — an `i8` tag is either non-negative
//! (user range) or negative (built-in range), never both.

use std::fmt;

use crate::custom::CustomBox;
use crate::error::{CodecResult, Error};
use crate::value::Value;

const SLOT_COUNT: usize = 128;

/// One registered extension: matches a concrete `Custom` payload, encodes it
/// to bytes, and decodes those bytes back into a [`Value`].
struct ExtensionEntry {
    matches: Box<dyn Fn(&CustomBox) -> bool + Send + Sync>,
    encode: Box<dyn Fn(&CustomBox) -> CodecResult<Vec<u8>> + Send + Sync>,
    decode: Box<dyn Fn(&[u8]) -> CodecResult<Value> + Send + Sync>,
}

impl fmt::Debug for ExtensionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExtensionEntry")
    }
}

/// The 128-slot table of user-registered extension types.
///
/// Slots are tried in tag order (0 first) when matching a `Value::Custom`
/// against the registry, so earlier registrations win ties between
/// predicates that both happen to match the same concrete type.
#[derive(Debug)]
pub struct Registry {
    slots: Vec<Option<ExtensionEntry>>,
}

impl Default for Registry {
    /// Equivalent to [`Registry::new`] — a derived field-wise `Default`
    /// would give an empty `Vec` instead of 128 free slots, so this is
    /// written out by hand.
    fn default() -> Self {
        Registry::new()
    }
}

impl Registry {
    /// An empty registry with all 128 slots free.
    pub fn new() -> Self {
        let mut slots = Vec::with_capacity(SLOT_COUNT);
        slots.resize_with(SLOT_COUNT, || None);
        Registry { slots }
    }

    /// Register a concrete type `T` under `tag`.
    ///
    /// `encode`/`decode` only ever see a value already known to be `T` (the
    /// predicate is derived from the downcast itself, so callers don't
    /// supply one separately). Errors with [`Error::InvalidTag`] if `tag`
    /// falls outside `0..=127`.
    pub fn register<T, E, D>(&mut self, tag: i8, encode: E, decode: D) -> CodecResult<()>
    where
        T: fmt::Debug + PartialEq + Clone + Send + Sync + 'static,
        E: Fn(&T) -> CodecResult<Vec<u8>> + Send + Sync + 'static,
        D: Fn(&[u8]) -> CodecResult<T> + Send + Sync + 'static,
    {
        if !(0..=127i8).contains(&tag) {
            return Err(Error::InvalidTag);
        }
        let entry = ExtensionEntry {
            matches: Box::new(|custom: &CustomBox| custom.downcast_ref::<T>().is_some()),
            encode: Box::new(move |custom: &CustomBox| {
                let value = custom
                    .downcast_ref::<T>()
                    .expect("encode called after a matching predicate failed");
                encode(value)
            }),
            decode: Box::new(move |payload: &[u8]| {
                let value = decode(payload)?;
                Ok(Value::Custom(CustomBox::new(value)))
            }),
        };
        self.slots[tag as usize] = Some(entry);
        Ok(())
    }

    /// Find the first registered tag whose predicate matches `custom`.
    pub fn find_match(&self, custom: &CustomBox) -> Option<i8> {
        self.slots.iter().enumerate().find_map(|(tag, slot)| {
            let entry = slot.as_ref()?;
            (entry.matches)(custom).then_some(tag as i8)
        })
    }

    /// Encode `custom` using the entry registered at `tag`.
    ///
    /// Panics if `tag` has no registration; callers are expected to call
    /// this only with a tag just returned by [`Registry::find_match`].
    pub fn encode(&self, tag: i8, custom: &CustomBox) -> CodecResult<Vec<u8>> {
        let entry = self.slots[tag as usize]
            .as_ref()
            .expect("encode called with an unregistered tag");
        (entry.encode)(custom)
    }

    /// Decode a payload using the entry registered at `tag`, if any.
    pub fn decode(&self, tag: i8, payload: &[u8]) -> Option<CodecResult<Value>> {
        let entry = self.slots.get(tag as usize)?.as_ref()?;
        Some((entry.decode)(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    fn point_registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register::<Point, _, _>(
                5,
                |p| Ok(vec![p.x as u8, p.y as u8]),
                |bytes| {
                    Ok(Point {
                        x: bytes[0] as i32,
                        y: bytes[1] as i32,
                    })
                },
            )
            .unwrap();
        registry
    }

    #[test]
    fn find_match_locates_the_registered_tag() {
        let registry = point_registry();
        let custom = CustomBox::new(Point { x: 1, y: 2 });
        assert_eq!(registry.find_match(&custom), Some(5));
    }

    #[test]
    fn unregistered_type_has_no_match() {
        let registry = point_registry();
        let custom = CustomBox::new("a plain string".to_string());
        assert_eq!(registry.find_match(&custom), None);
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let registry = point_registry();
        let custom = CustomBox::new(Point { x: 3, y: 4 });
        let payload = registry.encode(5, &custom).unwrap();
        let decoded = registry.decode(5, &payload).unwrap().unwrap();
        assert_eq!(decoded, Value::Custom(custom));
    }

    #[test]
    fn negative_tag_is_rejected() {
        let mut registry = Registry::new();
        let result = registry.register::<Point, _, _>(-1, |_| Ok(vec![]), |_| {
            Ok(Point { x: 0, y: 0 })
        });
        assert_eq!(result, Err(Error::InvalidTag));
    }
}
