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

//! Compiled-in numbering-plan tables. This module is data, not logic: each
//! entry transcribes one region's rules (length bounds, type patterns and
//! format templates) into the shapes `MetadataStore` indexes. Patterns are
//! matched in full against the national significant number.

use super::{NumberFormat, NumberPattern, RegionMetadata};

const NONE: NumberPattern = NumberPattern {
    pattern: "",
    possible_lengths: &[],
};

static US: RegionMetadata = RegionMetadata {
    id: "US",
    country_code: 1,
    main_country_for_code: true,
    national_prefix: "1",
    keep_leading_zero: false,
    leading_digits: "",
    general: NumberPattern {
        pattern: r"[2-9]\d{9}",
        possible_lengths: &[10],
    },
    fixed_line: NumberPattern {
        pattern: r"[2-9]\d{2}[2-9]\d{6}",
        possible_lengths: &[],
    },
    mobile: NumberPattern {
        pattern: r"[2-9]\d{2}[2-9]\d{6}",
        possible_lengths: &[],
    },
    toll_free: NumberPattern {
        pattern: r"8(?:00|33|44|55|66|77|88)[2-9]\d{6}",
        possible_lengths: &[],
    },
    premium_rate: NumberPattern {
        pattern: r"900[2-9]\d{6}",
        possible_lengths: &[],
    },
    shared_cost: NONE,
    voip: NONE,
    personal_number: NumberPattern {
        pattern: r"5(?:00|22|33|44|66|77|88)[2-9]\d{6}",
        possible_lengths: &[],
    },
    pager: NONE,
    uan: NONE,
    voicemail: NONE,
    same_mobile_and_fixed_line_pattern: true,
    number_formats: &[NumberFormat {
        pattern: r"(\d{3})(\d{3})(\d{4})",
        format: "($1) $2-$3",
        leading_digits: "",
        national_prefix_formatting_rule: "",
    }],
};

static CA: RegionMetadata = RegionMetadata {
    id: "CA",
    country_code: 1,
    main_country_for_code: false,
    national_prefix: "1",
    keep_leading_zero: false,
    leading_digits: "",
    general: NumberPattern {
        pattern: r"[2-9]\d{9}",
        possible_lengths: &[10],
    },
    fixed_line: NumberPattern {
        pattern: r"[2-9]\d{2}[2-9]\d{6}",
        possible_lengths: &[],
    },
    mobile: NumberPattern {
        pattern: r"[2-9]\d{2}[2-9]\d{6}",
        possible_lengths: &[],
    },
    toll_free: NumberPattern {
        pattern: r"8(?:00|33|44|55|66|77|88)[2-9]\d{6}",
        possible_lengths: &[],
    },
    premium_rate: NumberPattern {
        pattern: r"900[2-9]\d{6}",
        possible_lengths: &[],
    },
    shared_cost: NONE,
    voip: NONE,
    personal_number: NumberPattern {
        pattern: r"5(?:00|22|33|44|66|77|88)[2-9]\d{6}",
        possible_lengths: &[],
    },
    pager: NONE,
    uan: NONE,
    voicemail: NONE,
    same_mobile_and_fixed_line_pattern: true,
    number_formats: &[NumberFormat {
        pattern: r"(\d{3})(\d{3})(\d{4})",
        format: "($1) $2-$3",
        leading_digits: "",
        national_prefix_formatting_rule: "",
    }],
};

static GB: RegionMetadata = RegionMetadata {
    id: "GB",
    country_code: 44,
    main_country_for_code: true,
    national_prefix: "0",
    keep_leading_zero: false,
    leading_digits: "",
    general: NumberPattern {
        pattern: r"[1-9]\d{8,9}",
        possible_lengths: &[9, 10],
    },
    fixed_line: NumberPattern {
        pattern: r"1\d{8,9}|[23]\d{9}",
        possible_lengths: &[],
    },
    mobile: NumberPattern {
        pattern: r"7[45789]\d{8}",
        possible_lengths: &[10],
    },
    toll_free: NumberPattern {
        pattern: r"80[08]\d{7}",
        possible_lengths: &[10],
    },
    premium_rate: NumberPattern {
        pattern: r"9[018]\d{8}",
        possible_lengths: &[10],
    },
    shared_cost: NumberPattern {
        pattern: r"84[2-5]\d{7}",
        possible_lengths: &[10],
    },
    voip: NumberPattern {
        pattern: r"56\d{8}",
        possible_lengths: &[10],
    },
    personal_number: NumberPattern {
        pattern: r"70\d{8}",
        possible_lengths: &[10],
    },
    pager: NumberPattern {
        pattern: r"76\d{8}",
        possible_lengths: &[10],
    },
    uan: NumberPattern {
        pattern: r"3[0347]\d{8}",
        possible_lengths: &[10],
    },
    voicemail: NONE,
    same_mobile_and_fixed_line_pattern: false,
    number_formats: &[
        NumberFormat {
            pattern: r"(\d{2})(\d{4})(\d{4})",
            format: "$1 $2 $3",
            leading_digits: "2",
            national_prefix_formatting_rule: "0$1",
        },
        NumberFormat {
            pattern: r"(\d{4})(\d{6})",
            format: "$1 $2",
            leading_digits: "7",
            national_prefix_formatting_rule: "0$1",
        },
        NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{4})",
            format: "$1 $2 $3",
            leading_digits: "[13589]",
            national_prefix_formatting_rule: "0$1",
        },
    ],
};

static DE: RegionMetadata = RegionMetadata {
    id: "DE",
    country_code: 49,
    main_country_for_code: true,
    national_prefix: "0",
    keep_leading_zero: false,
    leading_digits: "",
    general: NumberPattern {
        pattern: r"[1-9]\d{5,10}",
        possible_lengths: &[6, 7, 8, 9, 10, 11],
    },
    fixed_line: NumberPattern {
        pattern: r"[2-9]\d{5,10}",
        possible_lengths: &[],
    },
    mobile: NumberPattern {
        pattern: r"1(?:5\d{9}|[67]\d{8,9})",
        possible_lengths: &[10, 11],
    },
    toll_free: NumberPattern {
        pattern: r"800\d{7,9}",
        possible_lengths: &[10, 11, 12],
    },
    premium_rate: NumberPattern {
        pattern: r"900\d{7}",
        possible_lengths: &[10],
    },
    shared_cost: NumberPattern {
        pattern: r"180\d{5,8}",
        possible_lengths: &[8, 9, 10, 11],
    },
    voip: NONE,
    personal_number: NumberPattern {
        pattern: r"700\d{8}",
        possible_lengths: &[11],
    },
    pager: NONE,
    uan: NONE,
    voicemail: NONE,
    same_mobile_and_fixed_line_pattern: false,
    number_formats: &[
        NumberFormat {
            pattern: r"(\d{3})(\d{7,8})",
            format: "$1 $2",
            leading_digits: "1[5-7]",
            national_prefix_formatting_rule: "0$1",
        },
        NumberFormat {
            pattern: r"(\d{3})(\d{3,8})",
            format: "$1 $2",
            leading_digits: "[2-9]",
            national_prefix_formatting_rule: "0$1",
        },
    ],
};

static FR: RegionMetadata = RegionMetadata {
    id: "FR",
    country_code: 33,
    main_country_for_code: true,
    national_prefix: "0",
    keep_leading_zero: false,
    leading_digits: "",
    general: NumberPattern {
        pattern: r"[1-9]\d{8}",
        possible_lengths: &[9],
    },
    fixed_line: NumberPattern {
        pattern: r"[1-5]\d{8}",
        possible_lengths: &[],
    },
    mobile: NumberPattern {
        pattern: r"[67]\d{8}",
        possible_lengths: &[],
    },
    toll_free: NumberPattern {
        pattern: r"80[0-5]\d{6}",
        possible_lengths: &[],
    },
    premium_rate: NumberPattern {
        pattern: r"89[1-9]\d{6}",
        possible_lengths: &[],
    },
    shared_cost: NumberPattern {
        pattern: r"8(?:1[01]|2[0156]|84|90)\d{6}",
        possible_lengths: &[],
    },
    voip: NumberPattern {
        pattern: r"9\d{8}",
        possible_lengths: &[],
    },
    personal_number: NONE,
    pager: NONE,
    uan: NONE,
    voicemail: NONE,
    same_mobile_and_fixed_line_pattern: false,
    number_formats: &[NumberFormat {
        pattern: r"(\d)(\d{2})(\d{2})(\d{2})(\d{2})",
        format: "$1 $2 $3 $4 $5",
        leading_digits: "",
        national_prefix_formatting_rule: "0$1",
    }],
};

static IT: RegionMetadata = RegionMetadata {
    id: "IT",
    country_code: 39,
    main_country_for_code: true,
    national_prefix: "",
    // Italian leading zeros are nationally significant and part of the NSN.
    keep_leading_zero: true,
    leading_digits: "",
    general: NumberPattern {
        pattern: r"0\d{5,10}|3[1-9]\d{8}|8\d{8}",
        possible_lengths: &[6, 7, 8, 9, 10, 11],
    },
    fixed_line: NumberPattern {
        pattern: r"0\d{5,10}",
        possible_lengths: &[],
    },
    mobile: NumberPattern {
        pattern: r"3[1-9]\d{8}",
        possible_lengths: &[10],
    },
    toll_free: NumberPattern {
        pattern: r"80[013]\d{6}",
        possible_lengths: &[9],
    },
    premium_rate: NumberPattern {
        pattern: r"89[49]\d{6}",
        possible_lengths: &[9],
    },
    shared_cost: NumberPattern {
        pattern: r"84[78]\d{6}",
        possible_lengths: &[9],
    },
    voip: NONE,
    personal_number: NONE,
    pager: NONE,
    uan: NONE,
    voicemail: NONE,
    same_mobile_and_fixed_line_pattern: false,
    number_formats: &[
        NumberFormat {
            pattern: r"(\d{2})(\d{4})(\d{4})",
            format: "$1 $2 $3",
            leading_digits: "0",
            national_prefix_formatting_rule: "",
        },
        NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{4})",
            format: "$1 $2 $3",
            leading_digits: "3",
            national_prefix_formatting_rule: "",
        },
        NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{3})",
            format: "$1 $2 $3",
            leading_digits: "8",
            national_prefix_formatting_rule: "",
        },
    ],
};

static AU: RegionMetadata = RegionMetadata {
    id: "AU",
    country_code: 61,
    main_country_for_code: true,
    national_prefix: "0",
    keep_leading_zero: false,
    leading_digits: "",
    general: NumberPattern {
        pattern: r"[2-478]\d{8}|1[38]00\d{6}",
        possible_lengths: &[9, 10],
    },
    fixed_line: NumberPattern {
        pattern: r"[2378]\d{8}",
        possible_lengths: &[9],
    },
    mobile: NumberPattern {
        pattern: r"4\d{8}",
        possible_lengths: &[9],
    },
    toll_free: NumberPattern {
        pattern: r"1[38]00\d{6}",
        possible_lengths: &[10],
    },
    premium_rate: NONE,
    shared_cost: NONE,
    voip: NONE,
    personal_number: NONE,
    pager: NONE,
    uan: NONE,
    voicemail: NONE,
    same_mobile_and_fixed_line_pattern: false,
    number_formats: &[
        NumberFormat {
            pattern: r"(\d)(\d{4})(\d{4})",
            format: "$1 $2 $3",
            leading_digits: "[2378]",
            national_prefix_formatting_rule: "(0$1)",
        },
        NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{3})",
            format: "$1 $2 $3",
            leading_digits: "4",
            national_prefix_formatting_rule: "0$1",
        },
        NumberFormat {
            pattern: r"(\d{4})(\d{3})(\d{3})",
            format: "$1 $2 $3",
            leading_digits: "1[38]",
            national_prefix_formatting_rule: "",
        },
    ],
};

static BR: RegionMetadata = RegionMetadata {
    id: "BR",
    country_code: 55,
    main_country_for_code: true,
    national_prefix: "0",
    keep_leading_zero: false,
    leading_digits: "",
    general: NumberPattern {
        pattern: r"[1-9]{2}(?:[2-5]\d{7}|9\d{8})",
        possible_lengths: &[10, 11],
    },
    fixed_line: NumberPattern {
        pattern: r"[1-9]{2}[2-5]\d{7}",
        possible_lengths: &[10],
    },
    mobile: NumberPattern {
        pattern: r"[1-9]{2}9\d{8}",
        possible_lengths: &[11],
    },
    toll_free: NONE,
    premium_rate: NONE,
    shared_cost: NONE,
    voip: NONE,
    personal_number: NONE,
    pager: NONE,
    uan: NONE,
    voicemail: NONE,
    same_mobile_and_fixed_line_pattern: false,
    number_formats: &[
        NumberFormat {
            pattern: r"(\d{2})(\d{4})(\d{4})",
            format: "$1 $2-$3",
            leading_digits: r"[1-9][1-9][2-5]",
            national_prefix_formatting_rule: "($1)",
        },
        NumberFormat {
            pattern: r"(\d{2})(\d{5})(\d{4})",
            format: "$1 $2-$3",
            leading_digits: r"[1-9][1-9]9",
            national_prefix_formatting_rule: "($1)",
        },
    ],
};

static RU: RegionMetadata = RegionMetadata {
    id: "RU",
    country_code: 7,
    main_country_for_code: true,
    national_prefix: "8",
    keep_leading_zero: false,
    leading_digits: "[3489]",
    general: NumberPattern {
        pattern: r"[3489]\d{9}",
        possible_lengths: &[10],
    },
    fixed_line: NumberPattern {
        pattern: r"[34]\d{9}",
        possible_lengths: &[],
    },
    mobile: NumberPattern {
        pattern: r"9\d{9}",
        possible_lengths: &[],
    },
    toll_free: NumberPattern {
        pattern: r"800\d{7}",
        possible_lengths: &[],
    },
    premium_rate: NumberPattern {
        pattern: r"80[39]\d{7}",
        possible_lengths: &[],
    },
    shared_cost: NONE,
    voip: NONE,
    personal_number: NONE,
    pager: NONE,
    uan: NONE,
    voicemail: NONE,
    same_mobile_and_fixed_line_pattern: false,
    number_formats: &[NumberFormat {
        pattern: r"(\d{3})(\d{3})(\d{2})(\d{2})",
        format: "$1 $2-$3-$4",
        leading_digits: "",
        national_prefix_formatting_rule: "8 ($1)",
    }],
};

static KZ: RegionMetadata = RegionMetadata {
    id: "KZ",
    country_code: 7,
    main_country_for_code: false,
    national_prefix: "8",
    keep_leading_zero: false,
    leading_digits: "[67]",
    general: NumberPattern {
        pattern: r"[67]\d{9}",
        possible_lengths: &[10],
    },
    fixed_line: NumberPattern {
        pattern: r"6\d{9}|7[1-3]\d{8}",
        possible_lengths: &[],
    },
    mobile: NumberPattern {
        pattern: r"7[07]\d{8}",
        possible_lengths: &[],
    },
    toll_free: NONE,
    premium_rate: NONE,
    shared_cost: NONE,
    voip: NONE,
    personal_number: NONE,
    pager: NONE,
    uan: NONE,
    voicemail: NONE,
    same_mobile_and_fixed_line_pattern: false,
    number_formats: &[NumberFormat {
        pattern: r"(\d{3})(\d{3})(\d{2})(\d{2})",
        format: "$1 $2-$3-$4",
        leading_digits: "",
        national_prefix_formatting_rule: "8 ($1)",
    }],
};

static JP: RegionMetadata = RegionMetadata {
    id: "JP",
    country_code: 81,
    main_country_for_code: true,
    national_prefix: "0",
    keep_leading_zero: false,
    leading_digits: "",
    general: NumberPattern {
        pattern: r"[1-9]\d{8,9}",
        possible_lengths: &[9, 10],
    },
    fixed_line: NumberPattern {
        pattern: r"[1-9]\d{8}",
        possible_lengths: &[9],
    },
    mobile: NumberPattern {
        pattern: r"[789]0\d{8}",
        possible_lengths: &[10],
    },
    toll_free: NumberPattern {
        pattern: r"120\d{6}",
        possible_lengths: &[9],
    },
    premium_rate: NONE,
    shared_cost: NONE,
    voip: NumberPattern {
        pattern: r"50\d{8}",
        possible_lengths: &[10],
    },
    personal_number: NONE,
    pager: NONE,
    uan: NONE,
    voicemail: NONE,
    same_mobile_and_fixed_line_pattern: false,
    number_formats: &[
        NumberFormat {
            pattern: r"(\d{2})(\d{4})(\d{4})",
            format: "$1-$2-$3",
            leading_digits: "[5789]0",
            national_prefix_formatting_rule: "0$1",
        },
        NumberFormat {
            pattern: r"(\d)(\d{4})(\d{4})",
            format: "$1-$2-$3",
            leading_digits: "[1-9]",
            national_prefix_formatting_rule: "0$1",
        },
    ],
};

static MX: RegionMetadata = RegionMetadata {
    id: "MX",
    country_code: 52,
    main_country_for_code: true,
    national_prefix: "",
    keep_leading_zero: false,
    leading_digits: "",
    general: NumberPattern {
        pattern: r"[2-9]\d{9}",
        possible_lengths: &[10],
    },
    fixed_line: NumberPattern {
        pattern: r"[2-9]\d{9}",
        possible_lengths: &[],
    },
    mobile: NumberPattern {
        pattern: r"[2-9]\d{9}",
        possible_lengths: &[],
    },
    toll_free: NumberPattern {
        pattern: r"800\d{7}",
        possible_lengths: &[],
    },
    premium_rate: NumberPattern {
        pattern: r"900\d{7}",
        possible_lengths: &[],
    },
    shared_cost: NONE,
    voip: NONE,
    personal_number: NONE,
    pager: NONE,
    uan: NONE,
    voicemail: NONE,
    same_mobile_and_fixed_line_pattern: true,
    number_formats: &[
        NumberFormat {
            pattern: r"(\d{2})(\d{4})(\d{4})",
            format: "$1 $2 $3",
            leading_digits: "33|5[56]|81",
            national_prefix_formatting_rule: "",
        },
        NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{4})",
            format: "$1 $2 $3",
            leading_digits: "[2-9]",
            national_prefix_formatting_rule: "",
        },
    ],
};

pub(super) static REGIONS: &[&RegionMetadata] = &[
    &US, &CA, &GB, &DE, &FR, &IT, &AU, &BR, &RU, &KZ, &JP, &MX,
];
