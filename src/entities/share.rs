use super::null_default;
use serde::Deserialize;

/// Shared folders configured on the device, as listed by `SYNO.Core.Share`
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct SharedFolderSet {
    #[serde(deserialize_with = "null_default")]
    pub shares: Vec<SharedFolder>,
    #[serde(deserialize_with = "null_default")]
    pub total: i32,
}

/// A single shared folder
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct SharedFolder {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "desc", deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub is_usb_share: bool,
    /// Quota in megabytes, `0` when unlimited
    #[serde(rename = "quota_value", deserialize_with = "null_default")]
    pub quota: f64,
    /// Space used against the quota, in megabytes
    #[serde(rename = "share_quota_used", deserialize_with = "null_default")]
    pub used_quota: f64,
    #[serde(deserialize_with = "null_default")]
    pub uuid: String,
    /// Path of the volume hosting the folder, e.g. `/volume1`
    #[serde(rename = "vol_path", deserialize_with = "null_default")]
    pub volume_path: String,
}
