use det_cbor::{decode, encode, Error, FromCbor, Value, TAG_NEGATIVE_BIGNUM, TAG_POSITIVE_BIGNUM};
use num_bigint::{BigInt, BigUint};

#[test]
fn integer_projections_check_range() {
    let small = Value::from(42u64);
    assert_eq!(u8::from_cbor(&small).unwrap(), 42);
    assert_eq!(i8::from_cbor(&small).unwrap(), 42);

    let big = Value::from(300u64);
    assert_eq!(u8::from_cbor(&big).unwrap_err(), Error::OutOfRange);
    assert_eq!(u16::from_cbor(&big).unwrap(), 300);

    let negative = Value::from(-5i64);
    assert_eq!(u64::from_cbor(&negative).unwrap_err(), Error::OutOfRange);
    assert_eq!(i64::from_cbor(&negative).unwrap(), -5);

    assert_eq!(u64::from_cbor(&Value::from("x")).unwrap_err(), Error::WrongType);
}

#[test]
fn unsigned_beyond_i64_still_projects_to_u64() {
    let v = Value::from(u64::MAX);
    assert_eq!(u64::from_cbor(&v).unwrap(), u64::MAX);
    assert_eq!(i64::from_cbor(&v).unwrap_err(), Error::OutOfRange);
}

#[test]
fn negative_beyond_i64_needs_the_bigint_path() {
    // -1 - 2^63: representable on the wire, not as an i64.
    let v = decode(&[0x3b, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]).unwrap();
    assert_eq!(v, Value::Negative(1 << 63));
    assert_eq!(i64::from_cbor(&v).unwrap_err(), Error::OutOfRange);
    assert_eq!(
        BigInt::from_cbor(&v).unwrap(),
        -BigInt::from(1u128 << 63) - 1
    );
    assert_eq!(i128::from_cbor(&v).unwrap(), -1 - (1i128 << 63));
}

#[test]
fn host_big_integers_choose_plain_or_tagged_form() {
    // Inside the i64 range: plain integers, whatever the host type.
    assert_eq!(Value::from(7u128), Value::from(7u64));
    assert_eq!(Value::from(BigInt::from(-7)), Value::from(-7i64));

    // Outside: tags 2/3 over the minimal magnitude.
    let big = Value::from(u128::from(u64::MAX));
    let (tag, inner) = big.as_tagged().unwrap();
    assert_eq!(tag, TAG_POSITIVE_BIGNUM);
    assert_eq!(inner.as_bytes().unwrap(), u64::MAX.to_be_bytes());

    let neg = Value::from(-1i128 - (1i128 << 64));
    let (tag, inner) = neg.as_tagged().unwrap();
    assert_eq!(tag, TAG_NEGATIVE_BIGNUM);
    // Tag 3 payload carries -1 - value = 2^64.
    assert_eq!(
        inner.as_bytes().unwrap(),
        [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
}

#[test]
fn bignum_encoding_round_trips() {
    let two_pow_64 = BigUint::from(1u8) << 64usize;
    let v = Value::from(two_pow_64.clone());
    let bytes = encode(&v);
    assert_eq!(
        bytes,
        [0xc2, 0x49, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
    let back = decode(&bytes).unwrap();
    assert_eq!(back, v);
    assert_eq!(BigUint::from_cbor(&back).unwrap(), two_pow_64);
    assert_eq!(u128::from_cbor(&back).unwrap(), 1u128 << 64);
}

#[test]
fn bigint_projection_accepts_plain_integers() {
    assert_eq!(
        BigInt::from_cbor(&Value::from(u64::MAX)).unwrap(),
        BigInt::from(u64::MAX)
    );
    assert_eq!(BigInt::from_cbor(&Value::from(-1i64)).unwrap(), BigInt::from(-1));
    assert_eq!(
        BigUint::from_cbor(&Value::from(-1i64)).unwrap_err(),
        Error::OutOfRange
    );
}

#[test]
fn float_projection_reads_reduced_integers_back() {
    assert_eq!(f64::from_cbor(&Value::from(42.0f64)).unwrap(), 42.0);
    assert_eq!(f64::from_cbor(&Value::from(-3.0f64)).unwrap(), -3.0);
    // u64::MAX is not exactly representable as f64.
    assert_eq!(
        f64::from_cbor(&Value::from(u64::MAX)).unwrap_err(),
        Error::OutOfRange
    );
    assert_eq!(f64::from_cbor(&Value::from(1.5f64)).unwrap(), 1.5);
    assert_eq!(f32::from_cbor(&Value::from(1.5f64)).unwrap(), 1.5f32);
    assert_eq!(
        f32::from_cbor(&Value::from(1.1f64)).unwrap_err(),
        Error::OutOfRange
    );
}

#[test]
fn tagged_projection_checks_the_tag() {
    let v = Value::tagged(32u64, "https://example.com");
    assert_eq!(v.expect_tagged(32u64).unwrap(), &Value::from("https://example.com"));
    assert_eq!(
        v.expect_tagged(1u64).unwrap_err(),
        Error::WrongTag {
            expected: 1u64.into(),
            encountered: 32u64.into(),
        }
    );
    assert_eq!(
        Value::from(1u64).expect_tagged(1u64).unwrap_err(),
        Error::WrongType
    );
}
