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

/// A parsed phone number. Owned entirely by the caller; validity is computed
/// on demand by `PhoneNumberUtil`, never stored here.
///
/// The national number is kept as a digit string rather than an integer so
/// that nationally significant leading zeros (Italian fixed lines) survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    country_code: u16,
    national_number: String,
    raw_input: String,
}

impl PhoneNumber {
    pub(crate) fn new(country_code: u16, national_number: String, raw_input: String) -> Self {
        Self {
            country_code,
            national_number,
            raw_input,
        }
    }

    pub fn country_code(&self) -> u16 {
        self.country_code
    }

    /// The national significant number: decimal digits only, no formatting
    /// characters, no trunk prefix.
    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    /// The string the number was parsed from, exactly as supplied.
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }
}
