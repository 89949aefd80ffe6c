//! Differential checks of the strict decoder against the `serde_json` baseline.
//!
//! Where both parsers accept a payload the trees must agree; where the
//! decoder is deliberately stricter or looser the difference is asserted
//! explicitly.

use json_text::{from_slice, JsonError, JsonValue};
use serde_json::Value;

fn parse_strict(input: &[u8]) -> Result<Value, JsonError> {
    from_slice(input).map(Value::from)
}

fn parse_serde(input: &[u8]) -> Result<Value, String> {
    serde_json::from_slice::<Value>(input).map_err(|err| err.to_string())
}

fn assert_parity(input: &[u8]) {
    match (parse_strict(input), parse_serde(input)) {
        (Ok(a), Ok(b)) => assert_eq!(a, b, "value mismatch for {:?}", String::from_utf8_lossy(input)),
        (Err(_), Err(_)) => {}
        (left, right) => panic!("outcome mismatch: strict={left:?}, serde={right:?}"),
    }
}

#[test]
fn corpus_valid_payloads_match_serde() {
    let corpus = [
        br#"{"a":1,"b":"ok"}"#.as_slice(),
        br#"[1,2,3,{"x":true}]"#.as_slice(),
        br#"{"nested":{"arr":[{"k":"v"}]}}"#.as_slice(),
        r#"{"unicode":"☃","pair":"😀"}"#.as_bytes(),
        br#"  {"ws" :	[ 1 ,
            2 ] }  "#
            .as_slice(),
        br#"{"n":-0.5e-3,"m":18446744073709551616}"#.as_slice(),
    ];
    for case in corpus {
        assert_parity(case);
    }
}

#[test]
fn corpus_malformed_payloads_rejected_by_both() {
    let corpus = [
        br#"{"a":}"#.as_slice(),
        br#"{"a":1,}"#.as_slice(),
        br#"[1,2"#.as_slice(),
        br#""\q""#.as_slice(),
        br#"{"a":1} trailing"#.as_slice(),
        b"\xff\xfe{}".as_slice(),
        br#"[01]"#.as_slice(),
        br#"NaN"#.as_slice(),
    ];
    for case in corpus {
        assert!(parse_strict(case).is_err(), "{:?}", String::from_utf8_lossy(case));
        assert_parity(case);
    }
}

#[test]
fn duplicate_keys_match_serde() {
    assert_parity(br#"{"a":1,"a":2}"#);
    let value = from_slice(br#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(value.get("a"), Some(&JsonValue::from(2i64)));
}

#[test]
fn deep_nesting_limit_matches_serde() {
    let nest = |depth: usize| {
        let mut payload = "[".repeat(depth);
        payload.push('0');
        payload.push_str(&"]".repeat(depth));
        payload
    };
    assert_parity(nest(100).as_bytes());

    let deep = nest(256);
    assert_eq!(from_slice(deep.as_bytes()), Err(JsonError::DepthLimit(128)));
    assert!(parse_serde(deep.as_bytes()).is_err());
}

#[test]
fn large_integers_keep_their_text() {
    let input = br#"{"bomb":10000000000000000000000000000000000000}"#;
    let value = from_slice(input).unwrap();
    let bomb = value.get("bomb").and_then(JsonValue::as_number).unwrap();
    assert_eq!(bomb.as_str(), "10000000000000000000000000000000000000");
    assert_eq!(bomb.as_i64(), None);
    assert_eq!(value.to_vec(), input.to_vec());
}
