use det_cbor::{decode, encode, Error, Map, Value};

#[test]
fn constructors_normalize_to_nfc() {
    // "e" + U+0301 combining acute composes to U+00E9.
    let decomposed = "e\u{301}";
    let v = Value::from(decomposed);
    assert_eq!(v.as_text(), Some("\u{e9}"));
    assert_eq!(v, Value::from("\u{e9}"));
}

#[test]
fn encoded_text_is_the_nfc_utf8() {
    let bytes = encode(&Value::from("e\u{301}"));
    assert_eq!(hex::encode(&bytes), "62c3a9");
    assert_eq!(decode(&bytes).unwrap(), Value::from("\u{e9}"));
}

#[test]
fn decoder_rejects_decomposed_text() {
    // The same string in NFD wire form.
    let err = decode(&[0x63, 0x65, 0xcc, 0x81]).unwrap_err();
    assert_eq!(err, Error::NonCanonicalString);
}

#[test]
fn already_composed_text_passes_through() {
    let v = Value::from("caf\u{e9}");
    let bytes = encode(&v);
    assert_eq!(hex::encode(&bytes), "6463616663c3a9");
    assert_eq!(decode(&bytes).unwrap(), v);
}

#[test]
fn map_keys_collide_after_normalization() {
    let mut map = Map::new();
    map.insert("e\u{301}", 1);
    map.insert("\u{e9}", 2);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("\u{e9}"), Some(&Value::from(2)));
}

#[test]
fn hangul_composition() {
    // U+1100 U+1161 compose to the syllable U+AC00.
    let v = Value::from("\u{1100}\u{1161}");
    assert_eq!(v.as_text(), Some("\u{ac00}"));

    let bytes = encode(&v);
    assert_eq!(decode(&bytes).unwrap().as_text(), Some("\u{ac00}"));
}
