use crate::{AsYouTypeState, PHONE_NUMBER_UTIL};

use super::{region_code::RegionCode, setup_logging};

fn feed(formatter: &mut crate::AsYouTypeFormatter<'_>, input: &str) -> String {
    let mut last = String::new();
    for c in input.chars() {
        last = formatter.input_char(c).to_string();
    }
    last
}

#[test]
fn digits_echo_until_a_template_is_found() {
    setup_logging();
    let mut formatter = PHONE_NUMBER_UTIL.get_as_you_type_formatter(RegionCode::us());
    assert_eq!(formatter.state(), AsYouTypeState::Empty);

    assert_eq!(formatter.input_char('4'), "4");
    assert_eq!(formatter.state(), AsYouTypeState::Accumulating);
    assert_eq!(formatter.input_char('1'), "41");
    assert_eq!(formatter.input_char('5'), "(415");
    assert_eq!(formatter.state(), AsYouTypeState::Templated);
}

#[test]
fn separators_appear_only_once_digits_reach_past_them() {
    setup_logging();
    let mut formatter = PHONE_NUMBER_UTIL.get_as_you_type_formatter(RegionCode::us());
    let renderings: Vec<String> = "4155552671"
        .chars()
        .map(|c| formatter.input_char(c).to_string())
        .collect();
    assert_eq!(
        renderings,
        vec![
            "4",
            "41",
            "(415",
            "(415) 5",
            "(415) 55",
            "(415) 555",
            "(415) 555-2",
            "(415) 555-26",
            "(415) 555-267",
            "(415) 555-2671",
        ]
    );
    assert_eq!(formatter.state(), AsYouTypeState::Templated);
}

#[test]
fn every_rendering_starts_from_the_previous_digits() {
    setup_logging();
    let mut formatter = PHONE_NUMBER_UTIL.get_as_you_type_formatter(RegionCode::gb());
    let mut previous_digits = String::new();
    for c in "02079460958".chars() {
        let rendered = formatter.input_char(c).to_string();
        let digits: String = rendered.chars().filter(char::is_ascii_digit).collect();
        assert!(digits.starts_with(&previous_digits));
        previous_digits = digits;
    }
    assert_eq!(previous_digits, "02079460958");
}

#[test]
fn trunk_prefix_renders_through_the_formatting_rule() {
    setup_logging();
    let mut formatter = PHONE_NUMBER_UTIL.get_as_you_type_formatter(RegionCode::gb());
    assert_eq!(feed(&mut formatter, "02079460958"), "020 7946 0958");
    assert_eq!(formatter.state(), AsYouTypeState::Templated);

    let mut formatter = PHONE_NUMBER_UTIL.get_as_you_type_formatter(RegionCode::ru());
    assert_eq!(feed(&mut formatter, "89123456789"), "8 (912) 345-67-89");
    assert_eq!(formatter.state(), AsYouTypeState::Templated);
}

#[test]
fn trunk_prefix_without_a_rule_is_set_off_by_a_space() {
    setup_logging();
    let mut formatter = PHONE_NUMBER_UTIL.get_as_you_type_formatter(RegionCode::us());
    assert_eq!(feed(&mut formatter, "14155552671"), "1 (415) 555-2671");
    assert_eq!(formatter.state(), AsYouTypeState::Templated);
}

#[test]
fn overflow_keeps_the_grouping_and_appends_raw() {
    setup_logging();
    let mut formatter = PHONE_NUMBER_UTIL.get_as_you_type_formatter(RegionCode::us());
    feed(&mut formatter, "4155552671");
    assert_eq!(formatter.input_char('8'), "(415) 555-26718");
    assert_eq!(formatter.state(), AsYouTypeState::Overflow);
    assert_eq!(formatter.input_char('9'), "(415) 555-267189");
    assert_eq!(formatter.state(), AsYouTypeState::Overflow);
}

#[test]
fn non_digit_characters_are_ignored() {
    setup_logging();
    let mut formatter = PHONE_NUMBER_UTIL.get_as_you_type_formatter(RegionCode::us());
    assert_eq!(feed(&mut formatter, "(415) 555-2671"), "(415) 555-2671");
    assert_eq!(formatter.state(), AsYouTypeState::Templated);
    // A plus after the first digit is just noise too.
    assert_eq!(formatter.input_char('+'), "(415) 555-2671");
}

#[test]
fn unicode_digits_are_accepted() {
    setup_logging();
    let mut formatter = PHONE_NUMBER_UTIL.get_as_you_type_formatter(RegionCode::us());
    assert_eq!(formatter.input_char('\u{FF14}'), "4");
    assert_eq!(formatter.input_char('\u{FF11}'), "41");
    assert_eq!(formatter.input_char('\u{FF15}'), "(415");
}

#[test]
fn leading_plus_switches_to_international_input() {
    setup_logging();
    let mut formatter = PHONE_NUMBER_UTIL.get_as_you_type_formatter(RegionCode::us());
    assert_eq!(formatter.input_char('+'), "+");
    assert_eq!(formatter.state(), AsYouTypeState::Empty);
    // "1" could still be extended, so the calling code is not committed yet.
    assert_eq!(formatter.input_char('1'), "+1");
    assert_eq!(formatter.input_char('4'), "+1 4");
    assert_eq!(feed(&mut formatter, "155552671"), "+1 (415) 555-2671");
    assert_eq!(formatter.state(), AsYouTypeState::Templated);
}

#[test]
fn international_input_overrides_the_session_region() {
    setup_logging();
    // A GB session fed a French number groups it the French way.
    let mut formatter = PHONE_NUMBER_UTIL.get_as_you_type_formatter(RegionCode::gb());
    assert_eq!(feed(&mut formatter, "+33612345678"), "+33 6 12 34 56 78");
    assert_eq!(formatter.state(), AsYouTypeState::Templated);
}

#[test]
fn calling_code_commits_as_soon_as_it_is_unambiguous() {
    setup_logging();
    let mut formatter = PHONE_NUMBER_UTIL.get_as_you_type_formatter(RegionCode::us());
    formatter.input_char('+');
    // Not a calling code on its own, although 44 and 49 both extend it.
    assert_eq!(formatter.input_char('4'), "+4");
    assert_eq!(formatter.input_char('4'), "+44");
    assert_eq!(formatter.input_char('2'), "+44 2");
    assert_eq!(feed(&mut formatter, "079460958"), "+44 20 7946 0958");
}

#[test]
fn reset_starts_a_fresh_number() {
    setup_logging();
    let mut formatter = PHONE_NUMBER_UTIL.get_as_you_type_formatter(RegionCode::us());
    feed(&mut formatter, "+4420794609581");
    formatter.reset();
    assert_eq!(formatter.state(), AsYouTypeState::Empty);
    assert_eq!(feed(&mut formatter, "4155552671"), "(415) 555-2671");
}

#[test]
fn unknown_region_degrades_to_raw_digits() {
    setup_logging();
    let mut formatter = PHONE_NUMBER_UTIL.get_as_you_type_formatter(RegionCode::zz());
    assert_eq!(feed(&mut formatter, "4155552671"), "4155552671");
    assert_eq!(formatter.state(), AsYouTypeState::Accumulating);
    // A plus still works: the calling code carries its own metadata.
    formatter.reset();
    assert_eq!(feed(&mut formatter, "+14155552671"), "+1 (415) 555-2671");
}
