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

use strum::{Display, EnumIter};

/// The textual renderings a parsed number can be asked for.
///
/// For example, the Google Switzerland office number would be:
/// - **E164**: `+41446681800` (no separators, always defined)
/// - **INTERNATIONAL**: `+41 44 668 1800`
/// - **NATIONAL**: `044 668 1800`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// `+` + country calling code + national significant number, nothing else.
    E164,
    /// Country calling code, one space, then the national number rendered
    /// through the region's best-matching format template.
    International,
    /// The national number rendered through the same template, without the
    /// calling code; the trunk prefix is written back where the plan mandates
    /// it for domestic dialling.
    National,
}

/// Line-type classification of a national significant number.
///
/// The `Display` rendering is the normalized name the operation boundary
/// hands to hosts (`fixedLine`, `fixedOrMobile`, `tollFree`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PhoneNumberType {
    /// Traditional landline numbers tied to a geographic area.
    #[strum(serialize = "fixedLine")]
    FixedLine,
    #[strum(serialize = "mobile")]
    Mobile,
    /// Used where the plan cannot tell fixed line and mobile apart by the
    /// number alone (e.g. the USA).
    #[strum(serialize = "fixedOrMobile")]
    FixedLineOrMobile,
    /// Free for the caller; the recipient pays.
    #[strum(serialize = "tollFree")]
    TollFree,
    /// Billed above normal call rates.
    #[strum(serialize = "premiumRate")]
    PremiumRate,
    /// Cost split between caller and recipient.
    #[strum(serialize = "sharedCost")]
    SharedCost,
    #[strum(serialize = "voip")]
    VoIP,
    /// Routed to a person rather than a location or device.
    #[strum(serialize = "personalNumber")]
    PersonalNumber,
    #[strum(serialize = "pager")]
    Pager,
    /// Universal access numbers, one company-wide routing number.
    #[strum(serialize = "uan")]
    UAN,
    #[strum(serialize = "voicemail")]
    VoiceMail,
    /// Classification was attempted but no plan pattern matched.
    #[strum(serialize = "unknown")]
    Unknown,
    /// Classification was skipped at the caller's request. The classifier
    /// never produces this itself.
    #[strum(serialize = "notParsed")]
    NotParsed,
}
