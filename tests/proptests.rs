// Property-based tests for the deterministic profile.
//
// Sizes and recursion depths are kept small so CI stays fast.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;

use det_cbor::{decode, encode, Map, Value};

fn arb_text() -> impl Strategy<Value = String> {
    let ascii = proptest::collection::vec(proptest::char::range('a', 'z'), 0..=32)
        .prop_map(|chars| chars.into_iter().collect::<String>());
    let ascii_24 = proptest::collection::vec(proptest::char::range('a', 'z'), 24)
        .prop_map(|chars| chars.into_iter().collect::<String>());
    let unicode = proptest::collection::vec(proptest::char::range('\u{a1}', '\u{2fff}'), 0..=16)
        .prop_map(|chars| chars.into_iter().collect::<String>());

    prop_oneof![
        6 => ascii,
        1 => ascii_24,
        2 => unicode,
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        6 => any::<u64>().prop_map(Value::from),
        6 => any::<i64>().prop_map(Value::from),
        2 => any::<i128>().prop_map(Value::from),
        2 => any::<u128>().prop_map(Value::from),
        4 => proptest::collection::vec(any::<u8>(), 0..=48).prop_map(Value::from),
        4 => arb_text().prop_map(Value::from),
        2 => any::<bool>().prop_map(Value::from),
        1 => Just(Value::null()),
        4 => any::<f64>().prop_map(Value::from),
        1 => Just(Value::from(f64::NAN)),
        1 => Just(Value::from(f64::INFINITY)),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(3, 48, 8, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..8).prop_map(Value::from),
            proptest::collection::vec((arb_leaf(), inner.clone()), 0..8)
                .prop_map(|pairs| Value::from(pairs.into_iter().collect::<Map>())),
            (4u64..=1000, inner).prop_map(|(tag, v)| Value::tagged(tag, v)),
        ]
    })
}

proptest! {
    #[test]
    fn canonical_round_trip(v in arb_value()) {
        let bytes = encode(&v);
        let back = decode(&bytes).unwrap();
        prop_assert_eq!(&back, &v);

        // Re-encoding the decoded value is byte-identical.
        prop_assert_eq!(encode(&back), bytes);
    }

    #[test]
    fn encoding_is_deterministic(v in arb_value()) {
        prop_assert_eq!(encode(&v), encode(&v));
    }

    #[test]
    fn encoding_is_injective(a in arb_value(), b in arb_value()) {
        if a != b {
            prop_assert_ne!(encode(&a), encode(&b));
        } else {
            prop_assert_eq!(encode(&a), encode(&b));
        }
    }

    #[test]
    fn decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..1024)) {
        let _ = decode(&bytes);
    }

    #[test]
    fn decode_accepts_only_its_own_output(v in arb_value()) {
        let bytes = encode(&v);
        // Appending a byte always fails with UnusedData.
        let mut extended = bytes.clone();
        extended.push(0x00);
        prop_assert_eq!(decode(&extended).unwrap_err(), det_cbor::Error::UnusedData(1));

        // Truncating never yields a successful parse of the whole buffer.
        if bytes.len() > 1 {
            let truncated = &bytes[..bytes.len() - 1];
            prop_assert!(decode(truncated).is_err());
        }
    }
}
