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

use log::{error, trace, warn};

use crate::{
    asyoutype::AsYouTypeFormatter,
    metadata::{MetadataStore, NumberFormat, NumberPattern, RegionMetadata},
    regex_util::{RegexConsume, RegexFullMatch},
    regexp_cache::RegexCache,
};

use super::{PhoneNumberFormat, PhoneNumberType, errors::ParseError, phone_number::PhoneNumber};

const PLUS_SIGN: &str = "+";
const FULLWIDTH_PLUS: char = '\u{FF0B}';

/// Pattern that picks the `$1` group reference out of a format template so
/// the national-prefix formatting rule can be spliced over it.
const FIRST_GROUP_PATTERN: &str = r"(\$1)";

/// The engine: parsing, validation, line-type classification and formatting
/// over the compiled-in metadata. Read-only after construction, safe to share
/// across threads; the usual entry point is the `PHONE_NUMBER_UTIL` singleton.
pub struct PhoneNumberUtil {
    store: MetadataStore,
    regexp_cache: RegexCache,
}

impl PhoneNumberUtil {
    pub fn new() -> Self {
        Self {
            store: MetadataStore::new(),
            regexp_cache: RegexCache::with_capacity(128),
        }
    }

    pub fn metadata_store(&self) -> &MetadataStore {
        &self.store
    }

    pub(crate) fn regexp_cache(&self) -> &RegexCache {
        &self.regexp_cache
    }

    /// Creates a fresh as-you-type session seeded with `region_code`. The
    /// session borrows the engine but owns all of its mutable state.
    pub fn get_as_you_type_formatter(&self, region_code: &str) -> AsYouTypeFormatter<'_> {
        AsYouTypeFormatter::new(self, region_code)
    }

    /// Turns a raw string into a `PhoneNumber`. The country calling code is
    /// taken from a leading `+` when present, otherwise from
    /// `default_region`. Success does not imply validity; see
    /// `is_valid_number`.
    pub fn parse(&self, raw: &str, default_region: Option<&str>) -> Result<PhoneNumber, ParseError> {
        let normalized = dec_from_char::normalize_decimals(raw);
        let (has_plus, digits) = extract_digits(&normalized);
        if digits.is_empty() {
            return Err(ParseError::NoDigits);
        }
        if has_plus {
            self.parse_with_explicit_country_code(&digits, raw)
        } else {
            self.parse_with_default_region(&digits, default_region, raw)
        }
    }

    fn parse_with_explicit_country_code(
        &self,
        digits: &str,
        raw: &str,
    ) -> Result<PhoneNumber, ParseError> {
        let Some((country_code, consumed)) = self.store.match_calling_code_prefix(digits) else {
            return Err(ParseError::InvalidCountryCode);
        };
        let candidate_regions = self.store.regions_for_calling_code(country_code);
        let keep_leading_zero = candidate_regions
            .iter()
            .filter_map(|region| self.store.region_metadata(region))
            .any(|metadata| metadata.keep_leading_zero);

        let mut national = &digits[consumed..];
        // The trunk prefix may have been dialled after the calling code
        // ("+7 8 912..."). Strip it against the candidate regions' rules,
        // main country first, when the remainder still has a plausible
        // national length.
        for region in candidate_regions {
            let Some(metadata) = self.store.region_metadata(region) else {
                continue;
            };
            let national_prefix = metadata.national_prefix;
            if !national_prefix.is_empty()
                && national.starts_with(national_prefix)
                && national.len() > national_prefix.len()
                && metadata.is_possible_length(national.len() - national_prefix.len())
            {
                national = &national[national_prefix.len()..];
                break;
            }
        }
        if !keep_leading_zero {
            national = national.trim_start_matches('0');
        }
        if national.is_empty() {
            return Err(ParseError::TooShortNsn);
        }

        let mut min_length = usize::MAX;
        let mut max_length = 0usize;
        for region in candidate_regions {
            if let Some(metadata) = self.store.region_metadata(region) {
                let (min, max) = metadata.length_bounds();
                min_length = min_length.min(min);
                max_length = max_length.max(max);
            }
        }
        if national.len() < min_length {
            return Err(ParseError::TooShortNsn);
        }
        if national.len() > max_length {
            return Err(ParseError::TooLongNsn);
        }

        Ok(PhoneNumber::new(
            country_code,
            national.to_string(),
            raw.to_string(),
        ))
    }

    fn parse_with_default_region(
        &self,
        digits: &str,
        default_region: Option<&str>,
        raw: &str,
    ) -> Result<PhoneNumber, ParseError> {
        let Some(region_code) = default_region else {
            return Err(ParseError::InvalidCountryCode);
        };
        let Some(metadata) = self.store.region_metadata(region_code) else {
            warn!("Invalid or unknown region code provided: {}", region_code);
            return Err(ParseError::InvalidCountryCode);
        };

        let mut national = digits;
        let national_prefix = metadata.national_prefix;
        if !national_prefix.is_empty()
            && national.starts_with(national_prefix)
            && national.len() > national_prefix.len()
        {
            // Strip the trunk prefix only when the remainder still has a
            // plausible national length.
            let stripped = &national[national_prefix.len()..];
            if metadata.is_possible_length(stripped.len()) {
                national = stripped;
            }
        }
        if !metadata.keep_leading_zero {
            national = national.trim_start_matches('0');
        }
        if national.is_empty() {
            return Err(ParseError::TooShortNsn);
        }

        let (min_length, max_length) = metadata.length_bounds();
        if national.len() < min_length {
            return Err(ParseError::TooShortNsn);
        }
        if national.len() > max_length {
            return Err(ParseError::TooLongNsn);
        }

        Ok(PhoneNumber::new(
            metadata.country_code,
            national.to_string(),
            raw.to_string(),
        ))
    }

    /// True if the national number matches some pattern registered for any
    /// region under the number's country calling code.
    pub fn is_valid_number(&self, number: &PhoneNumber) -> bool {
        self.region_for_number(number)
            .map(|metadata| {
                self.number_type_helper(number.national_number(), metadata)
                    != PhoneNumberType::Unknown
            })
            .unwrap_or(false)
    }

    /// True only if `region_code` administers the number's calling code and
    /// its own patterns match; a number valid elsewhere under the same
    /// calling code does not qualify.
    pub fn is_valid_number_for_region(&self, number: &PhoneNumber, region_code: &str) -> bool {
        let Some(metadata) = self.store.region_metadata(region_code) else {
            warn!("Invalid or unknown region code provided: {}", region_code);
            return false;
        };
        metadata.country_code == number.country_code()
            && self.number_type_helper(number.national_number(), metadata)
                != PhoneNumberType::Unknown
    }

    pub fn get_number_type(&self, number: &PhoneNumber) -> PhoneNumberType {
        let Some(metadata) = self.region_for_number(number) else {
            return PhoneNumberType::Unknown;
        };
        self.number_type_helper(number.national_number(), metadata)
    }

    /// The region a number belongs to. Regions sharing a calling code are
    /// tried in canonical order (main country first): a `leading_digits`
    /// discriminator decides where one exists, otherwise the first region
    /// whose patterns classify the number wins.
    pub fn get_region_code_for_number(&self, number: &PhoneNumber) -> Option<&'static str> {
        self.region_for_number(number).map(|metadata| metadata.id)
    }

    fn region_for_number(&self, number: &PhoneNumber) -> Option<&'static RegionMetadata> {
        let candidates = self.store.regions_for_calling_code(number.country_code());
        if candidates.is_empty() {
            trace!(
                "Missing/invalid country calling code ({})",
                number.country_code()
            );
            return None;
        }
        if candidates.len() == 1 {
            return self.store.region_metadata(candidates[0]);
        }
        let national = number.national_number();
        for region in candidates {
            let Some(metadata) = self.store.region_metadata(region) else {
                continue;
            };
            if !metadata.leading_digits.is_empty() {
                match self.regexp_cache.get_regex(metadata.leading_digits) {
                    Ok(regex) => {
                        if regex.matches_start(national) {
                            return Some(metadata);
                        }
                    }
                    Err(err) => error!("Invalid leading-digits pattern for {}: {}", region, err),
                }
            } else if self.number_type_helper(national, metadata) != PhoneNumberType::Unknown {
                return Some(metadata);
            }
        }
        None
    }

    /// Classification priority: the general gate first, then the specific
    /// service categories, then fixed line folding into fixed-or-mobile where
    /// the plan cannot tell them apart, then mobile.
    fn number_type_helper(
        &self,
        national: &str,
        metadata: &RegionMetadata,
    ) -> PhoneNumberType {
        if !self.is_number_matching_desc(national, &metadata.general) {
            trace!(
                "Number '{national}' type unknown - doesn't match general national number pattern"
            );
            return PhoneNumberType::Unknown;
        }
        if self.is_number_matching_desc(national, &metadata.premium_rate) {
            trace!("Number '{national}' is a premium number.");
            return PhoneNumberType::PremiumRate;
        }
        if self.is_number_matching_desc(national, &metadata.toll_free) {
            trace!("Number '{national}' is a toll-free number.");
            return PhoneNumberType::TollFree;
        }
        if self.is_number_matching_desc(national, &metadata.shared_cost) {
            trace!("Number '{national}' is a shared cost number.");
            return PhoneNumberType::SharedCost;
        }
        if self.is_number_matching_desc(national, &metadata.voip) {
            trace!("Number '{national}' is a VOIP (Voice over IP) number.");
            return PhoneNumberType::VoIP;
        }
        if self.is_number_matching_desc(national, &metadata.personal_number) {
            trace!("Number '{national}' is a personal number.");
            return PhoneNumberType::PersonalNumber;
        }
        if self.is_number_matching_desc(national, &metadata.pager) {
            trace!("Number '{national}' is a pager number.");
            return PhoneNumberType::Pager;
        }
        if self.is_number_matching_desc(national, &metadata.uan) {
            trace!("Number '{national}' is a UAN.");
            return PhoneNumberType::UAN;
        }
        if self.is_number_matching_desc(national, &metadata.voicemail) {
            trace!("Number '{national}' is a voicemail number.");
            return PhoneNumberType::VoiceMail;
        }

        if self.is_number_matching_desc(national, &metadata.fixed_line) {
            if metadata.same_mobile_and_fixed_line_pattern {
                trace!(
                    "Number '{national}': fixed-line and mobile patterns equal, \
                     number is fixed-line or mobile"
                );
                return PhoneNumberType::FixedLineOrMobile;
            }
            if self.is_number_matching_desc(national, &metadata.mobile) {
                trace!(
                    "Number '{national}': fixed-line and mobile patterns differ, but number \
                     is still fixed-line or mobile"
                );
                return PhoneNumberType::FixedLineOrMobile;
            }
            trace!("Number '{national}' is a fixed line number.");
            return PhoneNumberType::FixedLine;
        }
        if !metadata.same_mobile_and_fixed_line_pattern
            && self.is_number_matching_desc(national, &metadata.mobile)
        {
            trace!("Number '{national}' is a mobile number.");
            return PhoneNumberType::Mobile;
        }
        trace!("Number '{national}' type unknown - doesn't match any specific number type pattern.");
        PhoneNumberType::Unknown
    }

    fn is_number_matching_desc(&self, national: &str, desc: &NumberPattern) -> bool {
        if !desc.has_data() {
            return false;
        }
        // Check possible lengths first to avoid running the pattern when they
        // already rule the number out; absent lengths inherit the general
        // description, which has been checked before any specific type.
        if !desc.possible_lengths.is_empty()
            && !desc
                .possible_lengths
                .iter()
                .any(|&length| length as usize == national.len())
        {
            return false;
        }
        match self.regexp_cache.get_regex(desc.pattern) {
            Ok(regex) => regex.full_match(national),
            Err(err) => {
                error!("Invalid metadata pattern {}: {}", desc.pattern, err);
                false
            }
        }
    }

    /// Renders a number in the requested style. Pure string assembly over the
    /// parsed fields; the number is not re-validated, so even an invalid
    /// number formats to something rather than failing.
    pub fn format(&self, number: &PhoneNumber, number_format: PhoneNumberFormat) -> String {
        let country_code = number.country_code();
        let national = number.national_number();

        if matches!(number_format, PhoneNumberFormat::E164) {
            // No template work for E164, even when the calling code is
            // unknown to the metadata.
            return prefix_with_country_code(country_code, number_format, national.to_string());
        }

        // Formatting rules for a shared plan are carried by its main country
        // (US for all of NANPA, RU for 7).
        let metadata = self
            .store
            .regions_for_calling_code(country_code)
            .first()
            .and_then(|region| self.store.region_metadata(region));
        let Some(metadata) = metadata else {
            return national.to_string();
        };

        let formatted = self.format_nsn(national, metadata, number_format);
        prefix_with_country_code(country_code, number_format, formatted)
    }

    fn format_nsn(
        &self,
        national: &str,
        metadata: &RegionMetadata,
        number_format: PhoneNumberFormat,
    ) -> String {
        let Some(entry) = self.choose_formatting_pattern(metadata.number_formats, national) else {
            // No template fits (malformed input): keep the digits untouched
            // rather than dropping any.
            return national.to_string();
        };

        let mut format_rule = Cow::Borrowed(entry.format);
        if matches!(number_format, PhoneNumberFormat::National)
            && !entry.national_prefix_formatting_rule.is_empty()
        {
            if let Ok(first_group) = self.regexp_cache.get_regex(FIRST_GROUP_PATTERN) {
                // "$1 $2" with rule "0$1" becomes "0$1 $2"; the replacement's
                // own $1 refers to the captured group marker.
                format_rule = Cow::Owned(
                    first_group
                        .replace(&format_rule, entry.national_prefix_formatting_rule)
                        .into_owned(),
                );
            }
        }

        match self.regexp_cache.get_regex(entry.pattern) {
            Ok(pattern) => pattern.replace_all(national, format_rule.as_ref()).into_owned(),
            Err(err) => {
                error!("Invalid format pattern {}: {}", entry.pattern, err);
                national.to_string()
            }
        }
    }

    /// First entry whose leading digits and full pattern both match wins; the
    /// per-region list is ordered by specificity.
    pub(crate) fn choose_formatting_pattern(
        &self,
        available_formats: &'static [NumberFormat],
        national: &str,
    ) -> Option<&'static NumberFormat> {
        for entry in available_formats {
            if !entry.leading_digits.is_empty() {
                match self.regexp_cache.get_regex(entry.leading_digits) {
                    Ok(regex) => {
                        if !regex.matches_start(national) {
                            continue;
                        }
                    }
                    Err(err) => {
                        error!(
                            "Invalid leading-digits pattern {}: {}",
                            entry.leading_digits, err
                        );
                        continue;
                    }
                }
            }
            match self.regexp_cache.get_regex(entry.pattern) {
                Ok(regex) => {
                    if regex.full_match(national) {
                        return Some(entry);
                    }
                }
                Err(err) => error!("Invalid format pattern {}: {}", entry.pattern, err),
            }
        }
        None
    }
}

impl Default for PhoneNumberUtil {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits normalized input into its decimal digits, noting whether a plus
/// sign preceded the first digit. Everything else (punctuation, whitespace,
/// stray alpha characters) is formatting noise and dropped.
fn extract_digits(normalized: &str) -> (bool, String) {
    let mut has_plus = false;
    let mut digits = String::with_capacity(normalized.len());
    for c in normalized.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if digits.is_empty() && !has_plus && (c == '+' || c == FULLWIDTH_PLUS) {
            has_plus = true;
        }
    }
    (has_plus, digits)
}

fn prefix_with_country_code(
    country_code: u16,
    number_format: PhoneNumberFormat,
    formatted: String,
) -> String {
    let mut buf = itoa::Buffer::new();
    let code = buf.format(country_code);
    match number_format {
        PhoneNumberFormat::E164 => fast_cat::concat_str!(PLUS_SIGN, code, &formatted),
        PhoneNumberFormat::International => {
            fast_cat::concat_str!(PLUS_SIGN, code, " ", &formatted)
        }
        PhoneNumberFormat::National => formatted,
    }
}
