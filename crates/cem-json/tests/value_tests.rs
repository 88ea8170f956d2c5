use cem_json::coerce::{eval_string, is_number};
use cem_json::{classify, eval, Array, Kind, Object, Value};
use chrono::{TimeZone, Utc};

fn kind_of(source: &str) -> Kind {
    eval(source)
        .unwrap_or_else(|e| panic!("eval failed for {source:?}: {e}"))
        .kind()
}

// ============================================================================
// Type derivation
// ============================================================================

#[test]
fn kind_always_matches_classified_text() {
    let samples = [
        Value::NULL,
        Value::UNDEFINED,
        Value::TRUE,
        Value::from(12),
        Value::from(1.25),
        Value::from("text"),
        Value::from("true"),
        Value::from('c'),
        Value::numeric_from_str("not a number"),
        Value::from("null"),
        Value::date_from_str("2024-01-31T08:15:00Z"),
        Value::now(),
    ];
    for value in &samples {
        let text = value.as_text().unwrap();
        assert_eq!(value.kind(), classify(text), "kind mismatch for {text:?}");
    }
}

#[test]
fn parsed_scalar_kinds() {
    assert_eq!(kind_of("null"), Kind::Null);
    assert_eq!(kind_of("undefined"), Kind::Undefined);
    assert_eq!(kind_of("false"), Kind::Boolean);
    assert_eq!(kind_of("-12.5"), Kind::Numeric);
    assert_eq!(kind_of("'2024-01-31 08:15:00'"), Kind::Date);
    assert_eq!(kind_of("'hello'"), Kind::String);
    assert_eq!(kind_of("[]"), Kind::Array);
    assert_eq!(kind_of("{}"), Kind::Object);
}

#[test]
fn quoted_keywords_are_strings() {
    assert_eq!(kind_of("'true'"), Kind::String);
    assert_eq!(kind_of("\"null\""), Kind::String);
    assert_eq!(kind_of("'42'"), Kind::String);
}

#[test]
fn exponent_notation_is_not_numeric() {
    assert_eq!(kind_of("1e5"), Kind::String);
    assert_eq!(eval("1e5").unwrap().as_f64(), Some(100_000.0));
}

#[test]
fn is_string_covers_readable_scalars() {
    assert!(Value::from(1).is_string());
    assert!(Value::TRUE.is_string());
    assert!(Value::now().is_string());
    assert!(!Value::NULL.is_string());
    assert!(!Value::UNDEFINED.is_string());
    assert!(!Value::from(Array::new()).is_string());
}

#[test]
fn is_value_is_true_for_scalars_only() {
    assert!(Value::NULL.is_value());
    assert!(Value::from("x").is_value());
    assert!(!Value::from(Object::new()).is_value());
}

// ============================================================================
// Coercions
// ============================================================================

#[test]
fn integral_doubles_drop_the_fraction() {
    assert_eq!(Value::from(3.0).to_json(true), "3");
    assert_eq!(Value::from(3.0f32).to_json(true), "3");
    assert_eq!(Value::from(-40.0).to_json(true), "-40");
}

#[test]
fn non_finite_doubles() {
    assert_eq!(Value::from(f64::NAN).as_text(), Some("NaN"));
    assert_eq!(Value::from(f64::INFINITY).as_text(), Some("Infinity"));
    assert_eq!(Value::from(f64::INFINITY).kind(), Kind::String);
}

#[test]
fn numbers_read_from_strings() {
    let value = Value::from("  42 ");
    assert_eq!(value.as_i32(), Some(42));
    assert_eq!(value.as_i64(), Some(42));
    assert_eq!(value.as_f64(), Some(42.0));
    assert_eq!(Value::from("x").as_i32(), None);
}

#[test]
fn hex_words_coerce_through_string_form() {
    let value = eval("[0x10]").unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.get_string(0).as_deref(), Some("16"));
    assert_eq!(array.get_i32(0), Some(16));
}

#[test]
fn fractional_values_truncate_to_integers() {
    assert_eq!(Value::from(7.9).as_i32(), Some(7));
    assert_eq!(Value::from(-7.9).as_i64(), Some(-7));
    assert_eq!(Value::from(1.5).as_f32(), Some(1.5));
}

#[test]
fn booleans_from_text() {
    assert_eq!(Value::from("true").as_bool(), Some(true));
    assert_eq!(eval("false").unwrap().as_bool(), Some(false));
    assert_eq!(Value::from("yes").as_bool(), None);
    assert_eq!(Value::from(1).as_bool(), None);
}

#[test]
fn chars_need_exactly_one_character() {
    assert_eq!(Value::from("x").as_char(), Some('x'));
    assert_eq!(Value::from(7).as_char(), Some('7'));
    assert_eq!(Value::from("xy").as_char(), None);
    assert_eq!(Value::from("").as_char(), None);
}

#[test]
fn null_and_undefined_have_no_string_form() {
    assert_eq!(Value::NULL.as_string(), None);
    assert_eq!(Value::UNDEFINED.as_string(), None);
    assert_eq!(Value::NULL.as_i32(), None);
    assert_eq!(Value::from(Array::new()).as_string(), None);
}

#[test]
fn empty_string_is_not_null() {
    let value = Value::from("");
    assert_eq!(value.as_string().as_deref(), Some(""));
    assert_eq!(value.kind(), Kind::String);
}

// ============================================================================
// Dates
// ============================================================================

#[test]
fn date_from_accepted_layouts() {
    let expected = Utc.with_ymd_and_hms(2023, 7, 4, 9, 30, 0).unwrap();
    for text in [
        "2023-07-04T09:30:00.000+0000",
        "2023-07-04T09:30:00",
        "2023-07-04 09:30:00",
    ] {
        let value = Value::date_from_str(text);
        assert!(value.is_date(), "{text} should be a date");
        assert_eq!(value.as_date(), Some(expected), "{text} read back wrong");
    }
}

#[test]
fn unparseable_date_falls_back_to_now() {
    let before = Utc::now();
    let value = Value::date_from_str("next tuesday");
    let after = Utc::now();

    let date = value.as_date().unwrap();
    // FULL_FORMAT keeps milliseconds only.
    assert!(date >= before - chrono::Duration::milliseconds(1));
    assert!(date <= after);
}

#[test]
fn strings_that_look_like_dates_read_as_dates() {
    let value = Value::from("2020-02-29 23:59:59");
    assert!(value.is_date());
    assert_eq!(
        value.as_date(),
        Some(Utc.with_ymd_and_hms(2020, 2, 29, 23, 59, 59).unwrap())
    );
}

#[test]
fn non_dates_have_no_date_value() {
    assert_eq!(Value::from("2020-02-30 00:00:00").as_date(), None);
    assert_eq!(Value::from(20200229).as_date(), None);
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn scalars_compare_by_canonical_text() {
    assert_eq!(eval("12").unwrap(), Value::from(12));
    assert_eq!(eval("true").unwrap(), Value::TRUE);
    assert_ne!(eval("'a'").unwrap(), Value::from("a"));
    assert_eq!(eval("\"a\"").unwrap(), Value::from("a"));
}

#[test]
fn containers_compare_structurally() {
    let a = eval("{x:[1,2],y:'z'}").unwrap();
    let b = eval("{ y : 'z', x : [ 1, 2 ] }").unwrap();
    assert_eq!(a, b);
    assert_ne!(a, eval("{x:[2,1],y:'z'}").unwrap());
}

#[test]
fn values_work_as_set_members() {
    use std::collections::HashSet;
    let set: HashSet<Value> = ["1", "2", "1", "[1]", "[1]"]
        .iter()
        .map(|s| eval(s).unwrap())
        .collect();
    assert_eq!(set.len(), 3);
}

// ============================================================================
// Mutation through the tree
// ============================================================================

#[test]
fn nested_containers_are_mutable_in_place() {
    let mut value = eval("{list:[1], meta:{}}").unwrap();
    let object = value.as_object_mut().unwrap();
    object
        .get_mut("list")
        .and_then(Value::as_array_mut)
        .unwrap()
        .add(2);
    object
        .get_mut("meta")
        .and_then(Value::as_object_mut)
        .unwrap()
        .set("ok", true);
    assert_eq!(value.to_json(true), r#"{"list":[1,2],"meta":{"ok":true}}"#);
}

#[test]
fn default_value_is_null() {
    assert_eq!(Value::default(), Value::NULL);
}

// ============================================================================
// Text scanning
// ============================================================================

#[test]
fn number_scanner() {
    assert!(is_number("0"));
    assert!(is_number("-12"));
    assert!(is_number("3.25"));
    assert!(is_number(".5"));
    assert!(is_number("-"));
    assert!(!is_number(""));
    assert!(!is_number("1.2.3"));
    assert!(!is_number("1-2"));
    assert!(!is_number("1e5"));
    assert!(!is_number("0x10"));
}

#[test]
fn classify_follows_precedence() {
    assert_eq!(classify("null"), Kind::Null);
    assert_eq!(classify("undefined"), Kind::Undefined);
    assert_eq!(classify("true"), Kind::Boolean);
    assert_eq!(classify("false"), Kind::Boolean);
    assert_eq!(classify("-4.5"), Kind::Numeric);
    assert_eq!(classify("\"2024-03-01T12:00:00\""), Kind::Date);
    assert_eq!(classify("'2024-03-01 12:00:00'"), Kind::Date);
    assert_eq!(classify("\"null\""), Kind::String);
    assert_eq!(classify("\"42\""), Kind::String);
    assert_eq!(classify("hello"), Kind::String);
}

#[test]
fn eval_string_unquotes_and_converts() {
    assert_eq!(eval_string("'a\\tb'").as_deref(), Some("a\tb"));
    assert_eq!(eval_string("word").as_deref(), Some("word"));
    assert_eq!(eval_string("0x1F").as_deref(), Some("31"));
    assert_eq!(eval_string("null"), None);
    assert_eq!(eval_string("undefined"), None);
    assert_eq!(eval_string("\"open"), None);
    assert_eq!(eval_string("0xzz"), None);
}

// ============================================================================
// Canonical text
// ============================================================================

#[test]
fn scalar_constructors_produce_canonical_text() {
    assert_eq!(Value::from(42).as_text(), Some("42"));
    assert_eq!(Value::from(-7i64).as_text(), Some("-7"));
    assert_eq!(Value::from(3.0f64).as_text(), Some("3"));
    assert_eq!(Value::from(-0.0f64).as_text(), Some("0"));
    assert_eq!(Value::from(0.1f64).as_text(), Some("0.1"));
    assert_eq!(Value::from(2.5f64).as_text(), Some("2.5"));
    assert_eq!(Value::from(7.0f32).as_text(), Some("7"));
    assert_eq!(Value::from(1.5f32).as_text(), Some("1.5"));
    assert_eq!(Value::from("hi").as_text(), Some("\"hi\""));
    assert_eq!(Value::from('x').as_text(), Some("'x'"));
    assert_eq!(Value::from('\'').as_text(), Some(r"'\''"));
    assert_eq!(Value::numeric_from_str("12.5").as_text(), Some("12.5"));
    assert_eq!(Value::numeric_from_str("12e5").as_text(), Some("0"));
}

#[test]
fn kind_is_derived_from_text() {
    assert_eq!(eval("null").unwrap().kind(), Kind::Null);
    assert_eq!(eval("true").unwrap().kind(), Kind::Boolean);
    assert_eq!(Value::from("2024-01-01 10:00:00").kind(), Kind::Date);
    assert_eq!(eval("plain").unwrap().kind(), Kind::String);
    assert_eq!(Value::from("42").kind(), Kind::String);
    assert_eq!(Value::from(42).kind(), Kind::Numeric);
}

#[test]
fn scalar_equality_ignores_variant() {
    assert_eq!(Value::from(1), eval("1").unwrap());
    assert_eq!(Value::from(1), Value::numeric_from_str("1"));
    assert_eq!(
        Value::date_from_str("2024-01-01 10:00:00"),
        Value::from("2024-01-01 10:00:00")
    );
    assert_ne!(Value::from(1), Value::from("1"));
    assert_ne!(Value::Array(Array::new()), Value::Object(Object::new()));
}

#[test]
fn kind_names() {
    assert_eq!(Kind::Numeric.to_string(), "numeric");
    assert_eq!(Value::UNDEFINED.kind().to_string(), "undefined");
}

#[test]
fn date_values_render_full_layout() {
    let date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let value = Value::from(date);
    assert_eq!(value.as_text(), Some("\"2024-03-01T12:00:00.000+0000\""));
    assert_eq!(value.as_date(), Some(date));
    assert!(value.is_date());
}

#[test]
fn as_i64_keeps_precision_for_integral_text() {
    let value = Value::from(9_007_199_254_740_993i64);
    assert_eq!(value.as_i64(), Some(9_007_199_254_740_993));
    assert_eq!(Value::from(2.9).as_i64(), Some(2));
    assert_eq!(Value::from(-2.9).as_i32(), Some(-2));
}

#[test]
fn constructed_scalars_hold_canonical_text() {
    let value = Value::from("hello world");
    match &value {
        Value::String(text) => assert_eq!(text.as_str(), "\"hello world\""),
        other => panic!("expected a string, got {other:?}"),
    }
    assert_eq!(value.to_json(true), "\"hello world\"");
    assert_eq!(eval(&value.to_json(true)).unwrap(), value);
    assert_eq!(Value::numeric_from_str("hello world").to_json(true), "0");
}

#[test]
fn common_timestamp_suffixes_classify_as_dates() {
    assert_eq!(classify("\"2024-01-31T08:15:00Z\""), Kind::Date);
    assert_eq!(classify("\"2024-01-31T08:15:00.123\""), Kind::Date);
    assert_eq!(classify("'2024-01-31 08:15:00.5'"), Kind::Date);
}

#[test]
fn date_from_str_keeps_suffixed_timestamps() {
    let value = Value::date_from_str("2024-01-31T08:15:00Z");
    assert_eq!(value.to_json(true), "\"2024-01-31T08:15:00Z\"");
    assert_eq!(
        value.as_date(),
        Some(Utc.with_ymd_and_hms(2024, 1, 31, 8, 15, 0).unwrap())
    );
}
