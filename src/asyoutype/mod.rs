// Copyright (C) 2009 The Libphonenumber Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use log::warn;

use crate::{
    metadata::{NumberFormat, RegionMetadata},
    phonenumberutil::PhoneNumberUtil,
    regex_util::RegexConsume,
};

/// Fewer national digits than this and no template can be told apart yet;
/// the session just echoes the digits.
const MIN_DIGITS_FOR_TEMPLATE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsYouTypeState {
    /// No digits received yet.
    Empty,
    /// Digits received, no template selected; rendering is the raw digits.
    Accumulating,
    /// A format entry fits; every new digit re-renders through it.
    Templated,
    /// More digits than any entry can group; the grouped part is frozen and
    /// further digits are appended raw.
    Overflow,
}

/// Stateful incremental formatter: one session per input field, fed one
/// character at a time. Each fed character returns the full rendering of
/// everything typed so far. Owned by a single caller; `reset` is the only way
/// to start a new number in the same session.
///
/// A leading `+` (accepted only before any digit) switches the session to
/// international input: the country calling code is resolved greedily, the
/// way the batch parser resolves it, and the rest of the digits are grouped
/// with the main region's templates behind `+<code> `.
pub struct AsYouTypeFormatter<'a> {
    util: &'a PhoneNumberUtil,
    region: Option<&'static RegionMetadata>,
    state: AsYouTypeState,
    /// Every digit typed, including a trunk prefix or calling code.
    digits: String,
    plus_mode: bool,
    /// Calling code and the digit count it consumed, once unambiguous.
    resolved_code: Option<(u16, usize)>,
    current: String,
}

impl<'a> AsYouTypeFormatter<'a> {
    pub(crate) fn new(util: &'a PhoneNumberUtil, region_code: &str) -> Self {
        let region = util.metadata_store().region_metadata(region_code);
        if region.is_none() {
            warn!("Invalid or unknown region code provided: {}", region_code);
        }
        Self {
            util,
            region,
            state: AsYouTypeState::Empty,
            digits: String::new(),
            plus_mode: false,
            resolved_code: None,
            current: String::new(),
        }
    }

    pub fn state(&self) -> AsYouTypeState {
        self.state
    }

    /// Feeds one typed character and returns the rendering of the whole
    /// input so far. Non-digit characters are discarded, except a plus sign
    /// before the first digit.
    pub fn input_char(&mut self, c: char) -> &str {
        if let Some(digit) = as_decimal_digit(c) {
            self.digits.push(digit);
            if self.state == AsYouTypeState::Empty {
                self.state = AsYouTypeState::Accumulating;
            }
            self.render();
        } else if (c == '+' || c == '\u{FF0B}')
            && self.state == AsYouTypeState::Empty
            && !self.plus_mode
        {
            self.plus_mode = true;
            self.current.push('+');
        }
        &self.current
    }

    /// Clears the session back to `Empty` for a new number.
    pub fn reset(&mut self) {
        self.state = AsYouTypeState::Empty;
        self.digits.clear();
        self.plus_mode = false;
        self.resolved_code = None;
        self.current.clear();
    }

    fn render(&mut self) {
        let (rendered, state) = if self.plus_mode {
            self.render_international()
        } else {
            self.render_national()
        };
        self.current = rendered;
        self.state = state;
    }

    fn render_international(&mut self) -> (String, AsYouTypeState) {
        let store = self.util.metadata_store();
        if self.resolved_code.is_none() {
            if let Some((code, consumed)) = store.match_calling_code_prefix(&self.digits) {
                // Commit once a digit follows the code or no longer known
                // code could still absorb what was typed.
                if consumed < self.digits.len() || !store.is_calling_code_prefix(&self.digits) {
                    self.resolved_code = Some((code, consumed));
                }
            }
        }

        let Some((code, consumed)) = self.resolved_code else {
            return (
                fast_cat::concat_str!("+", &self.digits),
                AsYouTypeState::Accumulating,
            );
        };

        let mut buf = itoa::Buffer::new();
        let code_str = buf.format(code);
        let national = &self.digits[consumed..];
        if national.is_empty() {
            return (
                fast_cat::concat_str!("+", code_str),
                AsYouTypeState::Accumulating,
            );
        }

        let metadata = store
            .regions_for_calling_code(code)
            .first()
            .and_then(|region| store.region_metadata(region));
        let (rendered, state) = self.render_digits(metadata, national, "");
        (
            fast_cat::concat_str!("+", code_str, " ", &rendered),
            state,
        )
    }

    fn render_national(&mut self) -> (String, AsYouTypeState) {
        let Some(metadata) = self.region else {
            return (self.digits.clone(), AsYouTypeState::Accumulating);
        };
        let trunk = metadata.national_prefix;
        let (trunk_typed, national) = if !trunk.is_empty()
            && self.digits.starts_with(trunk)
            && self.digits.len() > trunk.len()
        {
            (trunk, &self.digits[trunk.len()..])
        } else {
            ("", self.digits.as_str())
        };
        self.render_digits(Some(metadata), national, trunk_typed)
    }

    /// Selects a format entry for the national digits seen so far and renders
    /// them through it. `trunk_typed` is the trunk prefix the user actually
    /// typed ("" when absent); it re-enters the output through the entry's
    /// national-prefix formatting rule, or set off by a space without one.
    fn render_digits(
        &self,
        metadata: Option<&'static RegionMetadata>,
        national: &str,
        trunk_typed: &str,
    ) -> (String, AsYouTypeState) {
        let Some(metadata) = metadata else {
            return (
                fast_cat::concat_str!(trunk_typed, national),
                AsYouTypeState::Accumulating,
            );
        };
        if national.len() < MIN_DIGITS_FOR_TEMPLATE {
            return (
                fast_cat::concat_str!(trunk_typed, national),
                AsYouTypeState::Accumulating,
            );
        }

        let mut overflow_entry = None;
        for entry in metadata.number_formats {
            if !self.leading_digits_allow(entry, national) {
                continue;
            }
            if template_capacity(entry) >= national.len() {
                let rendered = render_with_entry(entry, national, trunk_typed);
                return (rendered, AsYouTypeState::Templated);
            }
            // Keeps grouping stable while extra digits pile on the end.
            overflow_entry.get_or_insert(entry);
        }

        if let Some(entry) = overflow_entry {
            let rendered = render_with_entry(entry, national, trunk_typed);
            return (rendered, AsYouTypeState::Overflow);
        }
        (
            fast_cat::concat_str!(trunk_typed, national),
            AsYouTypeState::Accumulating,
        )
    }

    fn leading_digits_allow(&self, entry: &NumberFormat, national: &str) -> bool {
        if entry.leading_digits.is_empty() {
            return true;
        }
        match self.util.regexp_cache().get_regex(entry.leading_digits) {
            Ok(regex) => regex.matches_start(national),
            Err(_) => false,
        }
    }
}

/// Accepts any Unicode decimal digit, mapped to its ASCII form.
fn as_decimal_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    let mut buf = [0u8; 4];
    let normalized = dec_from_char::normalize_decimals(c.encode_utf8(&mut buf));
    let mut chars = normalized.chars();
    match (chars.next(), chars.next()) {
        (Some(digit), None) if digit.is_ascii_digit() => Some(digit),
        _ => None,
    }
}

enum Segment<'f> {
    Literal(&'f str),
    Group(usize),
}

/// Splits a format template ("($1) $2-$3") into literal separators and group
/// references.
fn parse_segments(format: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = format;
    while let Some(pos) = rest.find('$') {
        if pos > 0 {
            segments.push(Segment::Literal(&rest[..pos]));
        }
        let after = &rest[pos + 1..];
        let digit_len = after.chars().take_while(char::is_ascii_digit).count();
        if digit_len == 0 {
            segments.push(Segment::Literal(&rest[pos..pos + 1]));
            rest = after;
            continue;
        }
        let index: usize = after[..digit_len].parse().unwrap_or(0);
        segments.push(Segment::Group(index));
        rest = &after[digit_len..];
    }
    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    segments
}

/// (min, max) digit widths of each capture group of a format pattern such as
/// `(\d{3})(\d{3,8})`; `(\d)` counts as one.
fn group_widths(pattern: &str) -> Vec<(usize, usize)> {
    let bytes = pattern.as_bytes();
    let mut widths = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if pattern[i..].starts_with(r"(\d") {
            let mut j = i + 3;
            let (min_width, max_width) = if j < bytes.len() && bytes[j] == b'{' {
                j += 1;
                let start = j;
                while j < bytes.len() && bytes[j].is_ascii_digit() {
                    j += 1;
                }
                let min_width: usize = pattern[start..j].parse().unwrap_or(1);
                let max_width = if j < bytes.len() && bytes[j] == b',' {
                    j += 1;
                    let start = j;
                    while j < bytes.len() && bytes[j].is_ascii_digit() {
                        j += 1;
                    }
                    pattern[start..j].parse().unwrap_or(min_width)
                } else {
                    min_width
                };
                (min_width, max_width)
            } else {
                (1, 1)
            };
            while j < bytes.len() && bytes[j] != b')' {
                j += 1;
            }
            widths.push((min_width, max_width));
            i = j;
        }
        i += 1;
    }
    widths
}

/// Most digits an entry can group: the sum of its maximum group widths.
fn template_capacity(entry: &NumberFormat) -> usize {
    group_widths(entry.pattern)
        .iter()
        .map(|(_, max)| *max)
        .sum()
}

/// Renders whatever digits are available through an entry's template. Groups
/// fill left to right; a separator is only emitted once the digits reach past
/// it, and digits beyond the template's capacity are appended ungrouped.
fn render_with_entry(entry: &NumberFormat, national: &str, trunk_typed: &str) -> String {
    let widths = group_widths(entry.pattern);
    let group_count = widths.len();

    let effective_format = if !trunk_typed.is_empty()
        && !entry.national_prefix_formatting_rule.is_empty()
    {
        // "$1 $2" with rule "0$1" becomes "0$1 $2".
        Cow::Owned(
            entry
                .format
                .replacen("$1", entry.national_prefix_formatting_rule, 1),
        )
    } else {
        Cow::Borrowed(entry.format)
    };

    let mut out = String::with_capacity(national.len() * 2);
    let mut pending_literal = String::new();
    let mut cursor = 0usize;
    for segment in parse_segments(&effective_format) {
        match segment {
            Segment::Literal(literal) => pending_literal.push_str(literal),
            Segment::Group(index) => {
                if cursor == national.len() {
                    break;
                }
                let (min_width, max_width) = widths.get(index.wrapping_sub(1)).copied().unwrap_or((1, 1));
                let width = if index == group_count { max_width } else { min_width };
                let take = width.min(national.len() - cursor);
                out.push_str(&pending_literal);
                pending_literal.clear();
                out.push_str(&national[cursor..cursor + take]);
                cursor += take;
            }
        }
    }
    if cursor < national.len() {
        out.push_str(&national[cursor..]);
    }

    if !trunk_typed.is_empty() && entry.national_prefix_formatting_rule.is_empty() {
        return fast_cat::concat_str!(trunk_typed, " ", &out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{group_widths, parse_segments, render_with_entry, Segment};
    use crate::metadata::NumberFormat;

    #[test]
    fn widths_cover_fixed_and_ranged_groups() {
        assert_eq!(group_widths(r"(\d{3})(\d{3})(\d{4})"), vec![(3, 3), (3, 3), (4, 4)]);
        assert_eq!(group_widths(r"(\d{3})(\d{3,8})"), vec![(3, 3), (3, 8)]);
        assert_eq!(
            group_widths(r"(\d)(\d{2})(\d{2})(\d{2})(\d{2})"),
            vec![(1, 1), (2, 2), (2, 2), (2, 2), (2, 2)]
        );
    }

    #[test]
    fn segments_split_literals_and_groups() {
        let segments = parse_segments("($1) $2-$3");
        let rendered: Vec<String> = segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(literal) => format!("L:{literal}"),
                Segment::Group(index) => format!("G:{index}"),
            })
            .collect();
        assert_eq!(rendered, vec!["L:(", "G:1", "L:) ", "G:2", "L:-", "G:3"]);
    }

    #[test]
    fn partial_render_holds_back_separators() {
        let entry = NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{4})",
            format: "($1) $2-$3",
            leading_digits: "",
            national_prefix_formatting_rule: "",
        };
        assert_eq!(render_with_entry(&entry, "415", ""), "(415");
        assert_eq!(render_with_entry(&entry, "4155", ""), "(415) 5");
        assert_eq!(render_with_entry(&entry, "4155552671", ""), "(415) 555-2671");
    }

    #[test]
    fn overflow_digits_are_appended_raw() {
        let entry = NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{4})",
            format: "($1) $2-$3",
            leading_digits: "",
            national_prefix_formatting_rule: "",
        };
        assert_eq!(render_with_entry(&entry, "415555267189", ""), "(415) 555-267189");
    }

    #[test]
    fn trunk_prefix_rejoins_through_the_formatting_rule() {
        let entry = NumberFormat {
            pattern: r"(\d{2})(\d{4})(\d{4})",
            format: "$1 $2 $3",
            leading_digits: "2",
            national_prefix_formatting_rule: "0$1",
        };
        assert_eq!(render_with_entry(&entry, "2079460958", "0"), "020 7946 0958");
    }
}
