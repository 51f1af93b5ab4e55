use det_cbor::{decode, encode, Value};

fn check(value: f64, expected_hex: &str) {
    let v = Value::from(value);
    let bytes = encode(&v);
    assert_eq!(hex::encode(&bytes), expected_hex, "encoding {value}");
    assert_eq!(decode(&bytes).unwrap(), v);
}

#[test]
fn integral_floats_reduce_to_integers() {
    check(0.0, "00");
    check(-0.0, "00");
    check(1.0, "01");
    check(42.0, "182a");
    check(100_000.0, "1a000186a0");
    check(-1.0, "20");
    check(-100_000.0, "3a0001869f");
    // 2^64 - 2048, the largest f64 below 2^64.
    check(18_446_744_073_709_549_568.0, "1bfffffffffffff800");
    // -(2^64) is the far end of the negative argument space.
    check(-18_446_744_073_709_551_616.0, "3bffffffffffffffff");
}

#[test]
fn huge_integral_floats_stay_floats() {
    let v = Value::from(1.0e300);
    let bytes = encode(&v);
    assert_eq!(bytes[0], 0xfb);
    assert_eq!(bytes[1..], 1.0e300f64.to_bits().to_be_bytes());
    assert_eq!(decode(&bytes).unwrap(), v);

    // Just past the u64 range, still integral.
    let v = Value::from(18_446_744_073_709_551_616.0);
    assert_eq!(encode(&v)[0], 0xfb);
}

#[test]
fn floats_use_the_narrowest_lossless_width() {
    check(1.5, "f93e00");
    check(-4.5, "f9c480");
    check(0.5, "f93800");
    // Smallest positive half-precision subnormal, 2^-24.
    check(5.960_464_477_539_062_5e-8, "f90001");
    // Needs single precision.
    check(f64::from(0.7f32), "fa3f333333");
    check(f64::from(3.402_823_5e38f32), "fa7f7fffff");
    // Needs the full double.
    check(1.1, "fb3ff199999999999a");
    check(core::f64::consts::PI, "fb400921fb54442d18");
}

#[test]
fn non_finite_values() {
    check(f64::INFINITY, "f97c00");
    check(f64::NEG_INFINITY, "f9fc00");

    let nan = Value::from(f64::NAN);
    let bytes = encode(&nan);
    assert_eq!(hex::encode(&bytes), "f97e00");
    // The canonical NaN round-trips and equals itself.
    assert_eq!(decode(&bytes).unwrap(), nan);
}

#[test]
fn float_equality_is_bitwise() {
    assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
    assert_eq!(Value::from(-f64::NAN), Value::from(f64::NAN));
    assert_ne!(Value::from(1.5), Value::from(2.5));
}
