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

//! Request/response boundary of the engine: operations take a mapping of
//! named arguments and return either a structured result or a typed failure,
//! the way a host method channel would surface them.

use std::collections::HashMap;

use thiserror::Error;

use crate::phonenumberutil::{PHONE_NUMBER_UTIL, PhoneNumberFormat, PhoneNumberType};

/// Argument and result values of the operation boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Bool(bool),
    Int(i64),
    Map(HashMap<String, Value>),
}

/// The only failure kinds a host sees. `InvalidArgument` is a contract
/// violation on the caller's side; `InvalidNumber` is the expected outcome of
/// feeding a string that does not resolve to a valid phone number; unknown
/// operation names get their own distinct signal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MethodError {
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),
    #[error("InvalidNumber: {0}")]
    InvalidNumber(String),
    #[error("Method '{0}' is not implemented")]
    NotImplemented(String),
}

/// One named-argument operation request.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub method: String,
    pub args: HashMap<String, Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, args: HashMap<String, Value>) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }

    fn arg_str(&self, key: &str) -> Option<&str> {
        match self.args.get(key) {
            Some(Value::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    fn arg_bool(&self, key: &str) -> Option<bool> {
        match self.args.get(key) {
            Some(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }
}

/// Routes one operation against the process-wide engine.
pub fn handle(call: &MethodCall) -> Result<Value, MethodError> {
    match call.method.as_str() {
        "parse" => parse(call),
        "format" => format(call),
        "getRegions" => Ok(get_regions()),
        other => Err(MethodError::NotImplemented(other.to_string())),
    }
}

fn invalid_number(string: &str) -> MethodError {
    MethodError::InvalidNumber(format!("Number {string} is invalid"))
}

/// Parses and validates `string`, returning every standard rendering plus the
/// line type. Validation is scoped to `region` when one is supplied;
/// `ignoreType` skips classification and reports `notParsed`.
fn parse(call: &MethodCall) -> Result<Value, MethodError> {
    let Some(string) = call.arg_str("string").filter(|s| !s.is_empty()) else {
        return Err(MethodError::InvalidArgument(
            "Number string can't be null".to_string(),
        ));
    };
    let region = call.arg_str("region").filter(|r| !r.trim().is_empty());
    let ignore_type = call.arg_bool("ignoreType").unwrap_or(false);

    let util = &*PHONE_NUMBER_UTIL;
    let number = util
        .parse(string, region)
        .map_err(|_| invalid_number(string))?;

    let is_valid = match region {
        Some(region) => util.is_valid_number_for_region(&number, region),
        None => util.is_valid_number(&number),
    };
    if !is_valid {
        return Err(invalid_number(string));
    }

    let number_type = if ignore_type {
        PhoneNumberType::NotParsed
    } else {
        util.get_number_type(&number)
    };

    let mut result = HashMap::new();
    result.insert("type".to_string(), Value::Str(number_type.to_string()));
    result.insert(
        "e164".to_string(),
        Value::Str(util.format(&number, PhoneNumberFormat::E164)),
    );
    result.insert(
        "international".to_string(),
        Value::Str(util.format(&number, PhoneNumberFormat::International)),
    );
    result.insert(
        "national".to_string(),
        Value::Str(util.format(&number, PhoneNumberFormat::National)),
    );
    result.insert(
        "country_code".to_string(),
        Value::Int(i64::from(number.country_code())),
    );
    result.insert(
        "number_string".to_string(),
        Value::Str(number.raw_input().to_string()),
    );
    Ok(Value::Map(result))
}

/// Feeds `string` through one as-you-type session seeded with `region` and
/// returns the final rendering; the stateless convenience for callers that
/// only want the end result of typing the whole string.
fn format(call: &MethodCall) -> Result<Value, MethodError> {
    let (Some(string), Some(region)) = (call.arg_str("string"), call.arg_str("region")) else {
        return Err(MethodError::InvalidArgument(
            "Number string and region can't be null".to_string(),
        ));
    };

    let mut formatter = PHONE_NUMBER_UTIL.get_as_you_type_formatter(region);
    let mut formatted = String::new();
    for c in string.chars() {
        formatted = formatter.input_char(c).to_string();
    }
    Ok(Value::Str(formatted))
}

fn get_regions() -> Value {
    let regions = PHONE_NUMBER_UTIL
        .metadata_store()
        .supported_regions()
        .map(|(region, code)| (region.to_string(), Value::Int(i64::from(code))))
        .collect();
    Value::Map(regions)
}
