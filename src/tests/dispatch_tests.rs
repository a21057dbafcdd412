use std::collections::HashMap;

use crate::{MethodCall, MethodError, Value, handle};

use super::setup_logging;

fn call(method: &str, args: &[(&str, Value)]) -> Result<Value, MethodError> {
    setup_logging();
    let args = args
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();
    handle(&MethodCall::new(method, args))
}

fn str_arg(value: &str) -> Value {
    Value::Str(value.to_string())
}

fn expect_map(result: Result<Value, MethodError>) -> HashMap<String, Value> {
    match result {
        Ok(Value::Map(map)) => map,
        other => panic!("expected a map result, got {other:?}"),
    }
}

#[test]
fn parse_returns_every_rendering_and_the_type() {
    let map = expect_map(call("parse", &[("string", str_arg("+14155552671"))]));
    assert_eq!(map.get("type"), Some(&str_arg("fixedOrMobile")));
    assert_eq!(map.get("e164"), Some(&str_arg("+14155552671")));
    assert_eq!(
        map.get("international"),
        Some(&str_arg("+1 (415) 555-2671"))
    );
    assert_eq!(map.get("national"), Some(&str_arg("(415) 555-2671")));
    assert_eq!(map.get("country_code"), Some(&Value::Int(1)));
    assert_eq!(map.get("number_string"), Some(&str_arg("+14155552671")));
}

#[test]
fn parse_uses_the_region_for_national_input() {
    let map = expect_map(call(
        "parse",
        &[("string", str_arg("020 7946 0958")), ("region", str_arg("GB"))],
    ));
    assert_eq!(map.get("type"), Some(&str_arg("fixedLine")));
    assert_eq!(map.get("e164"), Some(&str_arg("+442079460958")));
    assert_eq!(map.get("national"), Some(&str_arg("020 7946 0958")));
    assert_eq!(map.get("number_string"), Some(&str_arg("020 7946 0958")));
}

#[test]
fn parse_requires_a_number_string() {
    let expected = Err(MethodError::InvalidArgument(
        "Number string can't be null".to_string(),
    ));
    assert_eq!(call("parse", &[]), expected);
    assert_eq!(call("parse", &[("string", str_arg(""))]), expected);
}

#[test]
fn parse_rejects_unparseable_input_as_invalid_number() {
    let expected = Err(MethodError::InvalidNumber(
        "Number not-a-number is invalid".to_string(),
    ));
    assert_eq!(call("parse", &[("string", str_arg("not-a-number"))]), expected);
    assert_eq!(
        call(
            "parse",
            &[("string", str_arg("not-a-number")), ("region", str_arg("US"))],
        ),
        expected
    );
}

#[test]
fn parse_scopes_validity_to_the_supplied_region() {
    // A perfectly good US number is not a GB number.
    assert_eq!(
        call(
            "parse",
            &[("string", str_arg("+14155552671")), ("region", str_arg("GB"))],
        ),
        Err(MethodError::InvalidNumber(
            "Number +14155552671 is invalid".to_string()
        ))
    );
}

#[test]
fn parse_rejects_valid_looking_but_unassigned_numbers() {
    assert_eq!(
        call("parse", &[("string", str_arg("+11234567890"))]),
        Err(MethodError::InvalidNumber(
            "Number +11234567890 is invalid".to_string()
        ))
    );
}

#[test]
fn parse_with_ignore_type_skips_classification() {
    let map = expect_map(call(
        "parse",
        &[
            ("string", str_arg("+14155552671")),
            ("ignoreType", Value::Bool(true)),
        ],
    ));
    assert_eq!(map.get("type"), Some(&str_arg("notParsed")));
    // The renderings are still produced.
    assert_eq!(map.get("e164"), Some(&str_arg("+14155552671")));
}

#[test]
fn parse_treats_a_blank_region_as_absent() {
    let map = expect_map(call(
        "parse",
        &[("string", str_arg("+14155552671")), ("region", str_arg("  "))],
    ));
    assert_eq!(map.get("country_code"), Some(&Value::Int(1)));
}

#[test]
fn format_renders_the_whole_string_as_typed() {
    assert_eq!(
        call(
            "format",
            &[("string", str_arg("14155552671")), ("region", str_arg("US"))],
        ),
        Ok(str_arg("1 (415) 555-2671"))
    );
    assert_eq!(
        call(
            "format",
            &[
                ("string", str_arg("+442079460958")),
                ("region", str_arg("US")),
            ],
        ),
        Ok(str_arg("+44 20 7946 0958"))
    );
}

#[test]
fn format_agrees_with_a_hand_fed_session() {
    setup_logging();
    let mut formatter = crate::PHONE_NUMBER_UTIL.get_as_you_type_formatter("US");
    let mut by_keystroke = String::new();
    for c in "14155552671".chars() {
        by_keystroke = formatter.input_char(c).to_string();
    }
    assert_eq!(
        call(
            "format",
            &[("string", str_arg("14155552671")), ("region", str_arg("US"))],
        ),
        Ok(Value::Str(by_keystroke))
    );
}

#[test]
fn format_requires_string_and_region() {
    let expected = Err(MethodError::InvalidArgument(
        "Number string and region can't be null".to_string(),
    ));
    assert_eq!(call("format", &[]), expected);
    assert_eq!(call("format", &[("string", str_arg("4155552671"))]), expected);
    assert_eq!(call("format", &[("region", str_arg("US"))]), expected);
}

#[test]
fn get_regions_lists_every_region_with_its_calling_code() {
    let map = expect_map(call("getRegions", &[]));
    assert_eq!(map.len(), 12);
    assert_eq!(map.get("US"), Some(&Value::Int(1)));
    assert_eq!(map.get("CA"), Some(&Value::Int(1)));
    assert_eq!(map.get("GB"), Some(&Value::Int(44)));
    assert_eq!(map.get("KZ"), Some(&Value::Int(7)));
    for (region, value) in &map {
        match value {
            Value::Int(code) => assert!(*code > 0, "bad calling code for {region}"),
            other => panic!("expected an integer for {region}, got {other:?}"),
        }
    }
}

#[test]
fn unknown_methods_are_reported_as_not_implemented() {
    assert_eq!(
        call("deleteAllNumbers", &[]),
        Err(MethodError::NotImplemented("deleteAllNumbers".to_string()))
    );
}
