mod asyoutype;
mod dispatch;
mod metadata;
mod phonenumberutil;
mod regexp_cache;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use asyoutype::{AsYouTypeFormatter, AsYouTypeState};
pub use dispatch::{MethodCall, MethodError, Value, handle};
pub use metadata::{MetadataStore, NumberFormat, NumberPattern, RegionMetadata};
pub use phonenumberutil::{
    PHONE_NUMBER_UTIL, PhoneNumber, PhoneNumberFormat, PhoneNumberType, PhoneNumberUtil,
    errors::ParseError,
};
