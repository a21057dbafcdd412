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

use regex::{Match, Regex};

/// Metadata patterns are written unanchored; validation must match the whole
/// national significant number, never a prefix of it.
pub trait RegexFullMatch {
    fn full_match(&self, s: &str) -> bool;
}

/// Prefix matching, used for leading-digits discrimination where a pattern
/// only has to consume the start of the digits seen so far.
pub trait RegexConsume {
    fn matches_start(&self, s: &str) -> bool {
        self.find_start(s).is_some()
    }

    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>>;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        if let Some(matched) = self.find(s) {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }
}

impl RegexConsume for Regex {
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        let found = self.find(s)?;
        if found.start() != 0 {
            return None;
        }
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{RegexConsume, RegexFullMatch};

    #[test]
    fn full_match_rejects_prefix_and_suffix_matches() {
        let pattern = Regex::new(r"7[45789]\d{8}").unwrap();
        assert!(pattern.full_match("7400123456"));
        assert!(!pattern.full_match("74001234567"));
        assert!(!pattern.full_match("07400123456"));
    }

    #[test]
    fn find_start_only_matches_at_offset_zero() {
        let pattern = Regex::new("20").unwrap();
        assert!(pattern.matches_start("2079460958"));
        assert!(pattern.find_start("1202").is_none());
    }
}
