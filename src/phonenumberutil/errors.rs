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

use thiserror::Error;

/// Why a raw string could not be turned into a `PhoneNumber`. All of these
/// are expected, recoverable outcomes of feeding user input to the parser;
/// the operation boundary folds them into its `InvalidNumber` failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("The string supplied did not seem to be a phone number")]
    NoDigits,
    #[error("Invalid country calling code")]
    InvalidCountryCode,
    #[error("The string supplied is too short to be a phone number")]
    TooShortNsn,
    #[error("The string supplied is too long to be a phone number")]
    TooLongNsn,
}
