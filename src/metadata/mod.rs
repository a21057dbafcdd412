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

mod regions;

use std::collections::{HashMap, VecDeque};

/// A single number description within a numbering plan: an unanchored regex
/// that must match the full national significant number, plus the possible
/// lengths for this kind of number. An empty pattern means the plan has no
/// numbers of this kind; empty lengths inherit the general description.
#[derive(Debug)]
pub struct NumberPattern {
    pub pattern: &'static str,
    pub possible_lengths: &'static [u8],
}

impl NumberPattern {
    pub fn has_data(&self) -> bool {
        !self.pattern.is_empty()
    }
}

/// One (pattern, template) entry of a region's ordered format list.
///
/// `pattern` captures the digit groups (e.g. `(\d{3})(\d{3})(\d{4})`),
/// `format` places them between literal separators (e.g. `($1) $2-$3`).
/// `leading_digits` restricts the entry to numbers starting with matching
/// digits; empty means the entry applies to any number the pattern fits.
/// `national_prefix_formatting_rule` rewrites the first group for national
/// output (e.g. `0$1`); empty means the national prefix is not written back.
#[derive(Debug)]
pub struct NumberFormat {
    pub pattern: &'static str,
    pub format: &'static str,
    pub leading_digits: &'static str,
    pub national_prefix_formatting_rule: &'static str,
}

/// The numbering-plan rule set for one region.
#[derive(Debug)]
pub struct RegionMetadata {
    pub id: &'static str,
    pub country_code: u16,
    /// Marks the main country of a shared calling code (US for 1, RU for 7).
    /// The main country is listed first in the calling code's region list and
    /// owns the formatting rules shared by the whole plan.
    pub main_country_for_code: bool,
    /// Trunk prefix dialled before the national number domestically ("" when
    /// the plan has none).
    pub national_prefix: &'static str,
    /// True where leading zeros are nationally significant (e.g. Italy) and
    /// must survive normalization.
    pub keep_leading_zero: bool,
    /// Distinguishes this region inside a shared calling code by the start of
    /// the national number ("" when the region is alone on its code).
    pub leading_digits: &'static str,
    pub general: NumberPattern,
    pub fixed_line: NumberPattern,
    pub mobile: NumberPattern,
    pub toll_free: NumberPattern,
    pub premium_rate: NumberPattern,
    pub shared_cost: NumberPattern,
    pub voip: NumberPattern,
    pub personal_number: NumberPattern,
    pub pager: NumberPattern,
    pub uan: NumberPattern,
    pub voicemail: NumberPattern,
    /// True where the plan cannot tell fixed line and mobile apart (NANPA).
    pub same_mobile_and_fixed_line_pattern: bool,
    pub number_formats: &'static [NumberFormat],
}

impl RegionMetadata {
    /// Length bounds of the national significant number, from the general
    /// description.
    pub fn length_bounds(&self) -> (usize, usize) {
        let min = self
            .general
            .possible_lengths
            .iter()
            .min()
            .copied()
            .unwrap_or(0) as usize;
        let max = self
            .general
            .possible_lengths
            .iter()
            .max()
            .copied()
            .unwrap_or(0) as usize;
        (min, max)
    }

    pub fn is_possible_length(&self, len: usize) -> bool {
        self.general
            .possible_lengths
            .iter()
            .any(|&l| l as usize == len)
    }
}

/// Process-wide, read-only index over the static region tables. Built once,
/// never mutated, shared across threads without locking.
pub struct MetadataStore {
    region_to_metadata: HashMap<&'static str, &'static RegionMetadata>,
    /// Sorted by calling code for binary search; each region list keeps the
    /// main country first, which is the documented disambiguation order.
    calling_code_to_regions: Vec<(u16, Vec<&'static str>)>,
}

impl MetadataStore {
    pub fn new() -> Self {
        let mut region_to_metadata = HashMap::new();
        let mut grouped = HashMap::<u16, VecDeque<&'static str>>::new();

        for &metadata in regions::REGIONS {
            region_to_metadata.insert(metadata.id, metadata);
            let list = grouped.entry(metadata.country_code).or_default();
            if metadata.main_country_for_code {
                list.push_front(metadata.id);
            } else {
                list.push_back(metadata.id);
            }
        }

        let mut calling_code_to_regions: Vec<(u16, Vec<&'static str>)> = grouped
            .into_iter()
            .map(|(code, list)| (code, Vec::from(list)))
            .collect();
        calling_code_to_regions.sort_by_key(|(code, _)| *code);

        Self {
            region_to_metadata,
            calling_code_to_regions,
        }
    }

    /// Region lookup is case-insensitive by exact two-letter match.
    pub fn region_metadata(&self, region_code: &str) -> Option<&'static RegionMetadata> {
        let upper = region_code.to_ascii_uppercase();
        self.region_to_metadata.get(upper.as_str()).copied()
    }

    pub fn country_code_for_region(&self, region_code: &str) -> Option<u16> {
        self.region_metadata(region_code)
            .map(|metadata| metadata.country_code)
    }

    /// Regions sharing the calling code, main country first. Empty when the
    /// code is unknown.
    pub fn regions_for_calling_code(&self, country_code: u16) -> &[&'static str] {
        self.calling_code_to_regions
            .binary_search_by_key(&country_code, |(code, _)| *code)
            .map(|index| self.calling_code_to_regions[index].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_known_calling_code(&self, country_code: u16) -> bool {
        self.calling_code_to_regions
            .binary_search_by_key(&country_code, |(code, _)| *code)
            .is_ok()
    }

    /// Greedily matches the longest known calling code (1 to 3 digits) at the
    /// start of `digits`. Returns the code and how many digits it consumed.
    pub fn match_calling_code_prefix(&self, digits: &str) -> Option<(u16, usize)> {
        for len in (1..=3.min(digits.len())).rev() {
            if let Ok(code) = digits[..len].parse::<u16>() {
                if self.is_known_calling_code(code) {
                    return Some((code, len));
                }
            }
        }
        None
    }

    /// True when some known calling code is strictly longer than `digits` and
    /// starts with it. Used by the as-you-type formatter to decide whether a
    /// typed `+` prefix is still ambiguous.
    pub fn is_calling_code_prefix(&self, digits: &str) -> bool {
        let mut buf = itoa::Buffer::new();
        self.calling_code_to_regions.iter().any(|(code, _)| {
            let code_str = buf.format(*code);
            code_str.len() > digits.len() && code_str.starts_with(digits)
        })
    }

    /// Every supported region with its calling code, ordered by calling code
    /// with the main country first within a shared code.
    pub fn supported_regions(&self) -> impl Iterator<Item = (&'static str, u16)> + '_ {
        self.calling_code_to_regions
            .iter()
            .flat_map(|&(code, ref regions)| regions.iter().map(move |&region| (region, code)))
    }
}

#[cfg(test)]
mod tests {
    use super::MetadataStore;

    #[test]
    fn lookup_is_case_insensitive() {
        let store = MetadataStore::new();
        assert_eq!(store.country_code_for_region("us"), Some(1));
        assert_eq!(store.country_code_for_region("Us"), Some(1));
        assert_eq!(store.country_code_for_region("US"), Some(1));
        assert_eq!(store.country_code_for_region("XX"), None);
    }

    #[test]
    fn region_lists_keep_main_country_first() {
        let store = MetadataStore::new();
        assert_eq!(store.regions_for_calling_code(1).first(), Some(&"US"));
        assert_eq!(store.regions_for_calling_code(7).first(), Some(&"RU"));
        assert!(store.regions_for_calling_code(999).is_empty());
    }

    #[test]
    fn calling_code_prefix_match_is_greedy() {
        let store = MetadataStore::new();
        assert_eq!(store.match_calling_code_prefix("442079460958"), Some((44, 2)));
        assert_eq!(store.match_calling_code_prefix("14155552671"), Some((1, 1)));
        assert_eq!(store.match_calling_code_prefix("999"), None);
    }

    #[test]
    fn supported_regions_are_ordered_by_calling_code() {
        let store = MetadataStore::new();
        let regions: Vec<_> = store.supported_regions().collect();
        assert_eq!(regions.len(), 12);
        assert_eq!(
            &regions[..4],
            &[("US", 1), ("CA", 1), ("RU", 7), ("KZ", 7)]
        );
        let codes: Vec<u16> = regions.iter().map(|&(_, code)| code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn prefix_ambiguity_follows_known_codes() {
        let store = MetadataStore::new();
        // 4 could still become 44 or 49.
        assert!(store.is_calling_code_prefix("4"));
        // 44 is complete; no known longer code extends it.
        assert!(!store.is_calling_code_prefix("44"));
        assert!(!store.is_calling_code_prefix("1"));
    }
}
