use cem_json::{eval, Array, Object, Value};
use chrono::{TimeZone, Utc};

/// Assert that `value` survives strict and loose serialization unchanged.
fn assert_roundtrip(value: &Value) {
    for strict in [true, false] {
        let text = value.to_json(strict);
        let parsed = eval(&text).unwrap_or_else(|e| {
            panic!("re-parse failed (strict={strict}):\n  text: {text}\n  error: {e}")
        });
        assert_eq!(
            &parsed, value,
            "Roundtrip failed (strict={strict}):\n  text:   {text}\n  parsed: {}",
            parsed.to_json(strict)
        );
    }
}

/// Assert that parsing and re-serializing `source` is stable after the first pass.
fn assert_idempotent(source: &str) {
    let once = eval(source).unwrap().to_json(true);
    let twice = eval(&once).unwrap().to_json(true);
    let thrice = eval(&twice).unwrap().to_json(true);
    assert_eq!(once, twice, "second pass changed the text for {source:?}");
    assert_eq!(twice, thrice, "third pass changed the text for {source:?}");
}

// ============================================================================
// Constructed trees
// ============================================================================

#[test]
fn roundtrip_keywords() {
    for value in [Value::NULL, Value::UNDEFINED, Value::TRUE, Value::FALSE] {
        assert_roundtrip(&value);
    }
}

#[test]
fn roundtrip_numbers() {
    for value in [
        Value::from(0),
        Value::from(-17),
        Value::from(i64::MAX),
        Value::from(0.125),
        Value::from(-1e-7),
        Value::numeric_from_str("003.50"),
    ] {
        assert_roundtrip(&value);
    }
}

#[test]
fn roundtrip_non_finite_numbers() {
    assert_roundtrip(&Value::from(f64::NAN));
    assert_roundtrip(&Value::from(f64::NEG_INFINITY));
}

#[test]
fn roundtrip_strings() {
    for s in [
        "",
        "plain",
        "with \"quotes\" and 'apostrophes'",
        "line\nbreak\r\n",
        "\u{0}\u{1f}\u{7f}\u{85}",
        "</script>",
        "\u{2028}\u{2029}",
        "emoji \u{1f600}",
        "back\\slash",
    ] {
        assert_roundtrip(&Value::from(s));
        assert_roundtrip(&Value::from(s.to_string()));
    }
}

#[test]
fn roundtrip_chars() {
    for c in ['a', '\'', '"', '\n', '\u{e9}'] {
        assert_roundtrip(&Value::from(c));
    }
}

#[test]
fn roundtrip_dates() {
    let date = Utc.with_ymd_and_hms(2001, 9, 9, 1, 46, 40).unwrap();
    assert_roundtrip(&Value::from(date));
    assert_roundtrip(&Value::date_from_str("2001-09-09 01:46:40"));
    assert_roundtrip(&Value::now());
}

#[test]
fn roundtrip_nested_tree() {
    let mut inner = Array::new();
    inner.add(1).add_null().add("x").add_undefined();

    let mut object = Object::new();
    object
        .set("list", inner)
        .set("empty", Object::new())
        .set("when", Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap())
        .set("with space", 2.5)
        .set("class", true)
        .set("", "empty key")
        .set("caf\u{e9}", 'c');

    let mut root = Array::new();
    root.add(object).add(Array::new());
    assert_roundtrip(&Value::from(root));
}

#[test]
fn roundtrip_keys_needing_quotes() {
    let object: Object = [
        ("a'b", 1),
        ("a\"b", 2),
        ("tab\tkey", 3),
        ("0x10", 4),
        ("null", 5),
        ("$ok", 6),
        ("-dash", 7),
    ]
    .into_iter()
    .collect();
    assert_roundtrip(&Value::from(object));
}

// ============================================================================
// Parsed documents
// ============================================================================

#[test]
fn roundtrip_parsed_lenient_document() {
    let value = eval(
        r#"{
            id: 0x2A,
            name: 'Widget \x41',
            "tags": ['a', "b", c],
            price: 12.50,
            stock: undefined,
            sparse: [1,,3,],
            nested: { deeper: { deepest: [ {}, [] ] } }
        }"#,
    )
    .unwrap();
    assert_roundtrip(&value);
}

#[test]
fn parsed_text_is_idempotent() {
    for source in [
        "{b:2,a:1}",
        "[1,,3]",
        "['single', \"double\", bare]",
        "{'key with space': {x: [true, false, null, undefined]}}",
        "0x7F",
        "[\"\\u00e9\\n\"]",
    ] {
        assert_idempotent(source);
    }
}

#[test]
fn strict_output_of_standard_json_is_standard_json() {
    let source = r#"{"a":[1,2.5,"x",true,null],"b":{"c":"d"}}"#;
    let text = eval(source).unwrap().to_json(true);
    assert_eq!(text, source);
    let reparsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, eval(source).unwrap().to_serde());
}
