use super::{null_default, null_epoch};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Point-in-time utilization snapshot returned by `SYNO.Core.System.Utilization`
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct SystemUtilization {
    #[serde(deserialize_with = "null_default")]
    pub cpu: Cpu,
    #[serde(deserialize_with = "null_default")]
    pub disk: DiskUtilization,
    #[serde(deserialize_with = "null_default")]
    pub lun: Vec<LunUtilization>,
    #[serde(deserialize_with = "null_default")]
    pub memory: Memory,
    #[serde(deserialize_with = "null_default")]
    pub network: Vec<NetworkInterface>,
    #[serde(deserialize_with = "null_default")]
    pub space: SpaceUtilization,
    /// Moment the snapshot was captured on the device
    #[serde(deserialize_with = "null_epoch")]
    pub time: DateTime<Utc>,
}

/// CPU load, in percent
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct Cpu {
    #[serde(rename = "15min_load", deserialize_with = "null_default")]
    pub fifteen_min_load: i64,
    #[serde(rename = "1min_load", deserialize_with = "null_default")]
    pub one_min_load: i64,
    #[serde(rename = "5min_load", deserialize_with = "null_default")]
    pub five_min_load: i64,
    #[serde(deserialize_with = "null_default")]
    pub device: String,
    #[serde(deserialize_with = "null_default")]
    pub other_load: i64,
    #[serde(deserialize_with = "null_default")]
    pub system_load: i64,
    #[serde(deserialize_with = "null_default")]
    pub user_load: i64,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct DiskUtilization {
    #[serde(deserialize_with = "null_default")]
    pub disk: Vec<DiskIo>,
    #[serde(deserialize_with = "null_default")]
    pub total: IoTotal,
}

/// I/O counters of a single physical disk
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct DiskIo {
    #[serde(deserialize_with = "null_default")]
    pub device: String,
    #[serde(deserialize_with = "null_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_default")]
    pub read_access: i64,
    #[serde(deserialize_with = "null_default")]
    pub read_byte: i64,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub disk_type: String,
    #[serde(deserialize_with = "null_default")]
    pub utilization: i64,
    #[serde(deserialize_with = "null_default")]
    pub write_access: i64,
    #[serde(deserialize_with = "null_default")]
    pub write_byte: i64,
}

/// Aggregated I/O counters, shared by the disk and space sections
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct IoTotal {
    #[serde(deserialize_with = "null_default")]
    pub device: String,
    #[serde(deserialize_with = "null_default")]
    pub read_access: i64,
    #[serde(deserialize_with = "null_default")]
    pub read_byte: i64,
    #[serde(deserialize_with = "null_default")]
    pub utilization: i64,
    #[serde(deserialize_with = "null_default")]
    pub write_access: i64,
    #[serde(deserialize_with = "null_default")]
    pub write_byte: i64,
}

/// I/O statistics of an iSCSI LUN
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct LunUtilization {
    #[serde(deserialize_with = "null_default")]
    pub device: String,
    #[serde(deserialize_with = "null_default")]
    pub path: String,
    #[serde(deserialize_with = "null_default")]
    pub queue_exe: i64,
    #[serde(deserialize_with = "null_default")]
    pub queue_que: i64,
    #[serde(deserialize_with = "null_default")]
    pub queue_wbk: i64,
    #[serde(deserialize_with = "null_default")]
    pub read_avg_cmd_size: i64,
    #[serde(deserialize_with = "null_default")]
    pub read_avg_latency: i64,
    #[serde(deserialize_with = "null_default")]
    pub read_bytes: i64,
    #[serde(deserialize_with = "null_default")]
    pub read_cmd_count: i64,
    #[serde(deserialize_with = "null_default")]
    pub rx_avg_latency: i64,
    #[serde(deserialize_with = "null_default")]
    pub total_cmd_count: i64,
    #[serde(deserialize_with = "null_default")]
    pub total_io_latency: i64,
    #[serde(deserialize_with = "null_default")]
    pub total_iops: i64,
    #[serde(deserialize_with = "null_default")]
    pub total_throughput: i64,
    #[serde(deserialize_with = "null_default")]
    pub tx_avg_latency: i64,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub lun_type: String,
    #[serde(deserialize_with = "null_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_default")]
    pub write_avg_cmd_size: i64,
    #[serde(deserialize_with = "null_default")]
    pub write_avg_latency: i64,
    #[serde(deserialize_with = "null_default")]
    pub write_bytes: i64,
    #[serde(deserialize_with = "null_default")]
    pub write_cmd_count: i64,
}

/// Memory gauges, sizes in kilobytes as reported by DSM
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct Memory {
    #[serde(deserialize_with = "null_default")]
    pub avail_real: i64,
    #[serde(deserialize_with = "null_default")]
    pub avail_swap: i64,
    #[serde(deserialize_with = "null_default")]
    pub buffer: i64,
    #[serde(deserialize_with = "null_default")]
    pub cached: i64,
    #[serde(deserialize_with = "null_default")]
    pub device: String,
    #[serde(deserialize_with = "null_default")]
    pub memory_size: i64,
    #[serde(deserialize_with = "null_default")]
    pub real_usage: i64,
    #[serde(deserialize_with = "null_default")]
    pub si_disk: i64,
    #[serde(deserialize_with = "null_default")]
    pub so_disk: i64,
    #[serde(deserialize_with = "null_default")]
    pub swap_usage: i64,
    #[serde(deserialize_with = "null_default")]
    pub total_real: i64,
    #[serde(deserialize_with = "null_default")]
    pub total_swap: i64,
}

/// Throughput of a network interface, in bytes per second
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct NetworkInterface {
    #[serde(deserialize_with = "null_default")]
    pub device: String,
    #[serde(deserialize_with = "null_default")]
    pub rx: i64,
    #[serde(deserialize_with = "null_default")]
    pub tx: i64,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct SpaceUtilization {
    #[serde(deserialize_with = "null_default")]
    pub total: IoTotal,
    #[serde(deserialize_with = "null_default")]
    pub volume: Vec<VolumeIo>,
}

/// I/O counters of a single volume
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct VolumeIo {
    #[serde(deserialize_with = "null_default")]
    pub device: String,
    #[serde(deserialize_with = "null_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_default")]
    pub read_access: i64,
    #[serde(deserialize_with = "null_default")]
    pub read_byte: i64,
    #[serde(deserialize_with = "null_default")]
    pub utilization: i64,
    #[serde(deserialize_with = "null_default")]
    pub write_access: i64,
    #[serde(deserialize_with = "null_default")]
    pub write_byte: i64,
}
