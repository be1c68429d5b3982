//! Black-box integration tests against the public `Codec` facade: the
//! literal wire scenarios and the quantified round-trip/streaming
//! properties.

use msgpack_codec::{Codec, CustomBox, DecodeOutcome, Value};

#[test]
fn nil_bool_and_int_literal_encodings() {
    let codec = Codec::new();
    assert_eq!(codec.encode(&Value::Nil).unwrap(), vec![0xc0]);
    assert_eq!(codec.decode(&[0xc0]).unwrap(), Value::Nil);

    assert_eq!(codec.encode(&Value::Bool(true)).unwrap(), vec![0xc3]);
    assert_eq!(codec.encode(&Value::Bool(false)).unwrap(), vec![0xc2]);

    assert_eq!(codec.encode(&Value::Int(127)).unwrap(), vec![0x7f]);
    assert_eq!(codec.encode(&Value::Int(128)).unwrap(), vec![0xcc, 0x80]);
    assert_eq!(codec.encode(&Value::Int(-1)).unwrap(), vec![0xff]);
    assert_eq!(codec.encode(&Value::Int(-33)).unwrap(), vec![0xd0, 0xdf]);
}

#[test]
fn string_and_array_literal_encodings() {
    let codec = Codec::new();
    assert_eq!(
        codec.encode(&Value::str("abc")).unwrap(),
        vec![0xa3, b'a', b'b', b'c']
    );
    let array = Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    assert_eq!(codec.encode(&array).unwrap(), vec![0x93, 0x01, 0x02, 0x03]);
}

#[test]
fn custom_extension_tag_100_fixext1_scenario() {
    #[derive(Debug, Clone, PartialEq)]
    struct X;

    let mut codec = Codec::new();
    codec
        .register::<X, _, _>(100, |_| Ok(vec![0x2a]), |payload| {
            if payload == [0x2a] {
                Ok(X)
            } else {
                Err(msgpack_codec::Error::Unsupported("X"))
            }
        })
        .unwrap();

    let value = Value::Custom(CustomBox::new(X));
    let bytes = codec.encode(&value).unwrap();
    assert_eq!(bytes, vec![0xd4, 0x64, 0x2a]);
    assert_eq!(codec.decode(&bytes).unwrap(), value);
}

#[test]
fn round_trip_identity_over_a_varied_value_set() {
    let codec = Codec::new();
    let values = vec![
        Value::Nil,
        Value::Bool(true),
        Value::Int(-12345),
        Value::UInt(u64::MAX),
        Value::Float(3.25),
        Value::str("hello, world"),
        Value::Bin(vec![0xde, 0xad, 0xbe, 0xef]),
        Value::Array(vec![Value::Int(1), Value::str("two"), Value::Nil]),
        Value::Map(vec![(Value::str("a"), Value::Int(1))]),
        Value::Date(1_700_000_000_000),
        Value::Set(vec![Value::Int(1), Value::Int(2)]),
        Value::Ext { tag: 5, payload: vec![1, 2, 3, 4] },
    ];
    for value in values {
        let bytes = codec.encode(&value).unwrap();
        assert_eq!(codec.decode(&bytes).unwrap(), value, "round-trip failed for {value:?}");
    }
}

#[test]
fn cursor_discipline_on_every_truncated_prefix() {
    let codec = Codec::new();
    let value = Value::Map(vec![
        (Value::str("k1"), Value::Int(1)),
        (Value::str("k2"), Value::Array(vec![Value::Int(1), Value::Int(2)])),
    ]);
    let full = codec.encode(&value).unwrap();
    for k in 0..full.len() {
        let mut buf = msgpack_codec::Buffer::from_vec(full[..k].to_vec());
        let outcome = codec.try_decode(&mut buf);
        assert_eq!(outcome, DecodeOutcome::NeedMore, "prefix of length {k} should need more");
        assert_eq!(buf.read_pos(), 0, "prefix of length {k} must not move the cursor");
    }
}

#[test]
fn streaming_concatenation_yields_the_exact_sequence() {
    let codec = Codec::new();
    let values = vec![Value::Int(1), Value::str("two"), Value::Bool(true), Value::Nil];

    let mut buf = msgpack_codec::Buffer::new();
    for value in &values {
        codec.encode_into(value, &mut buf).unwrap();
    }

    let mut decoded = Vec::new();
    loop {
        match codec.try_decode(&mut buf) {
            DecodeOutcome::Complete(value) => decoded.push(value),
            DecodeOutcome::NeedMore => break,
            DecodeOutcome::Invalid(reason) => panic!("unexpected invalid: {reason}"),
        }
    }
    assert_eq!(decoded, values);
}

#[test]
fn registry_isolation_matches_a_monolithic_encode() {
    #[derive(Debug, Clone, PartialEq)]
    struct Wrapper(i64);

    let mut codec = Codec::new();
    codec
        .register::<Wrapper, _, _>(
            1,
            |w| {
                let inner = Codec::new();
                inner.encode(&Value::Int(w.0))
            },
            |payload| {
                let inner = Codec::new();
                match inner.decode(payload)? {
                    Value::Int(v) => Ok(Wrapper(v)),
                    other => Err(msgpack_codec::Error::Unsupported(other.kind_name())),
                }
            },
        )
        .unwrap();

    let wrapped = Value::Custom(CustomBox::new(Wrapper(42)));
    let via_registry = codec.encode(&wrapped).unwrap();

    let monolithic_inner = Codec::new().encode(&Value::Int(42)).unwrap();
    let expected = {
        let mut buf = Vec::new();
        buf.push(0xd4); // fixext1: payload is one byte (the fixint 42)
        buf.push(1);
        buf.extend(monolithic_inner);
        buf
    };
    assert_eq!(via_registry, expected);
}

#[test]
fn extension_round_trip_preserves_the_predicate() {
    #[derive(Debug, Clone, PartialEq)]
    struct Celsius(f64);

    let mut codec = Codec::new();
    codec
        .register::<Celsius, _, _>(
            2,
            |c| Ok(c.0.to_be_bytes().to_vec()),
            |payload| Ok(Celsius(f64::from_be_bytes(payload.try_into().unwrap()))),
        )
        .unwrap();

    let value = Value::Custom(CustomBox::new(Celsius(36.6)));
    let bytes = codec.encode(&value).unwrap();
    let decoded = codec.decode(&bytes).unwrap();
    match decoded {
        Value::Custom(ref boxed) => assert_eq!(boxed.downcast_ref::<Celsius>(), Some(&Celsius(36.6))),
        _ => panic!("expected a custom value back"),
    }
    assert_eq!(decoded, value);
}

#[test]
fn arrays_over_65535_elements_use_the_32_bit_length_form() {
    let codec = Codec::new();
    let count = 70_000;
    let value = Value::Array((0..count).map(|_| Value::Int(1)).collect());
    let bytes = codec.encode(&value).unwrap();
    assert_eq!(bytes[0], 0xdd, "array32 prefix expected for >65535 elements");
    let len = u32::from_be_bytes(bytes[1..5].try_into().unwrap());
    assert_eq!(len, count as u32);
    assert_eq!(codec.decode(&bytes).unwrap(), value);
}

#[test]
fn a_composite_with_a_custom_value_and_25_keys_round_trips_byte_identical() {
    #[derive(Debug, Clone, PartialEq)]
    struct Id(u32);

    let mut codec = Codec::new();
    codec
        .register::<Id, _, _>(7, |id| Ok(id.0.to_be_bytes().to_vec()), |payload| {
            Ok(Id(u32::from_be_bytes(payload.try_into().unwrap())))
        })
        .unwrap();

    let pairs: Vec<(Value, Value)> = (0..25)
        .map(|i| (Value::str(format!("key{i}")), Value::Int(i)))
        .chain(std::iter::once((
            Value::str("owner"),
            Value::Custom(CustomBox::new(Id(9000))),
        )))
        .collect();
    let value = Value::Map(pairs);

    let first = codec.encode(&value).unwrap();
    let second = codec.encode(&value).unwrap();
    assert_eq!(first, second);
    assert_eq!(codec.decode(&first).unwrap(), value);
}

#[test]
fn invalid_tag_registration_is_rejected() {
    #[derive(Debug, Clone, PartialEq)]
    struct Anything;

    let mut codec = Codec::new();
    let result = codec.register::<Anything, _, _>(-1, |_| Ok(vec![]), |_| Ok(Anything));
    assert_eq!(result, Err(msgpack_codec::Error::InvalidTag));
}
