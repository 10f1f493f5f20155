//! Response types of the Synology Web API.
//!
//! Every endpoint wraps its payload in the same [`SynologyResponse`] envelope.
//! Payload structs mirror the vendor JSON field for field: unknown fields are
//! ignored and missing fields fall back to their default value.

mod share;
mod storage;
mod system;

pub use share::*;
pub use storage::*;
pub use system::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Code reported when a failed envelope carries no usable error code
pub const UNKNOWN_ERROR_CODE: i32 = 100;

/// Response from Synology API
///
/// `data` is only decoded into a payload type once `success` is known, so a
/// failed call never turns into a decoding error.
#[derive(Deserialize, Debug)]
pub struct SynologyResponse<D = Value> {
    pub success: bool,
    pub data: Option<D>,
    pub error: Option<ApiError>,
}

/// Decodes an explicit `null` as the default value of the field
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Epoch seconds, `null` decoding as the epoch itself
pub(crate) fn null_epoch<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    chrono::serde::ts_seconds_option::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Authentication response data
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct AuthData {
    #[serde(deserialize_with = "null_default")]
    pub account: String,
    #[serde(deserialize_with = "null_default")]
    pub device_id: String,
    #[serde(deserialize_with = "null_default")]
    pub is_portal_port: bool,
    /// Session ID used for authenticated requests
    #[serde(deserialize_with = "null_default")]
    pub sid: String,
    #[serde(deserialize_with = "null_default")]
    pub synotoken: String,
}

/// Error information from Synology API
#[derive(Deserialize, Clone, Debug)]
pub struct ApiError {
    #[serde(default = "unknown_error_code", deserialize_with = "code_or_unknown")]
    pub code: i32,
    #[serde(default)]
    pub errors: Option<Value>,
}

fn unknown_error_code() -> i32 {
    UNKNOWN_ERROR_CODE
}

fn code_or_unknown<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i32>::deserialize(deserializer).map(|code| code.unwrap_or(UNKNOWN_ERROR_CODE))
}
