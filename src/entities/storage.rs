use super::null_default;
use serde::Deserialize;
use serde_json::Value;

/// Storage inventory returned by `SYNO.Storage.CGI.Storage` `load_info`
///
/// Relations are expressed through ID strings: [`Volume::disks`] lists
/// [`Disk::id`] values and [`RaidDevice::id`] refers to the same disks.
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct StorageInventory {
    #[serde(deserialize_with = "null_default")]
    pub disks: Vec<Disk>,
    #[serde(deserialize_with = "null_default")]
    pub env: Environment,
    #[serde(rename = "hotSpareConf", deserialize_with = "null_default")]
    pub hot_spare_conf: HotSpareConf,
    #[serde(rename = "hotSpares", deserialize_with = "null_default")]
    pub hot_spares: Vec<Value>,
    #[serde(rename = "iscsiLuns", deserialize_with = "null_default")]
    pub iscsi_luns: Vec<IscsiLunEntry>,
    #[serde(rename = "iscsiTargets", deserialize_with = "null_default")]
    pub iscsi_targets: Vec<IscsiTarget>,
    #[serde(deserialize_with = "null_default")]
    pub ports: Vec<Value>,
    #[serde(rename = "ssdCaches", deserialize_with = "null_default")]
    pub ssd_caches: Vec<Value>,
    #[serde(rename = "storagePools", deserialize_with = "null_default")]
    pub storage_pools: Vec<Value>,
    #[serde(deserialize_with = "null_default")]
    pub volumes: Vec<Volume>,
}

/// Physical disk with health and SMART state
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct Disk {
    #[serde(deserialize_with = "null_default")]
    pub adv_progress: String,
    #[serde(deserialize_with = "null_default")]
    pub adv_status: String,
    #[serde(deserialize_with = "null_default")]
    pub below_remain_life_thr: bool,
    #[serde(deserialize_with = "null_default")]
    pub container: DiskContainer,
    #[serde(deserialize_with = "null_default")]
    pub device: String,
    #[serde(deserialize_with = "null_default")]
    pub disable_secera: bool,
    #[serde(rename = "diskType", deserialize_with = "null_default")]
    pub disk_type: String,
    #[serde(deserialize_with = "null_default")]
    pub disk_code: String,
    #[serde(deserialize_with = "null_default")]
    pub erase_time: i64,
    #[serde(deserialize_with = "null_default")]
    pub exceed_bad_sector_thr: bool,
    #[serde(deserialize_with = "null_default")]
    pub firm: String,
    #[serde(deserialize_with = "null_default")]
    pub has_system: bool,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(rename = "is4Kn", deserialize_with = "null_default")]
    pub is_4kn: bool,
    #[serde(rename = "isSsd", deserialize_with = "null_default")]
    pub is_ssd: bool,
    #[serde(rename = "isSynoPartition", deserialize_with = "null_default")]
    pub is_syno_partition: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_erasing: bool,
    #[serde(rename = "longName", deserialize_with = "null_default")]
    pub long_name: String,
    #[serde(deserialize_with = "null_default")]
    pub model: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub num_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub order: i64,
    #[serde(deserialize_with = "null_default")]
    pub overview_status: String,
    #[serde(rename = "pciSlot", deserialize_with = "null_default")]
    pub pci_slot: i64,
    #[serde(rename = "portType", deserialize_with = "null_default")]
    pub port_type: String,
    #[serde(deserialize_with = "null_default")]
    pub remain_life: i64,
    #[serde(deserialize_with = "null_default")]
    pub serial: String,
    /// Capacity in bytes, as a decimal string
    #[serde(deserialize_with = "null_default")]
    pub size_total: String,
    #[serde(deserialize_with = "null_default")]
    pub smart_progress: String,
    #[serde(deserialize_with = "null_default")]
    pub smart_status: String,
    #[serde(deserialize_with = "null_default")]
    pub smart_test_limit: i64,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub support: bool,
    /// Temperature in degrees Celsius
    #[serde(deserialize_with = "null_default")]
    pub temp: i64,
    #[serde(deserialize_with = "null_default")]
    pub tray_status: String,
    #[serde(deserialize_with = "null_default")]
    pub unc: i64,
    #[serde(deserialize_with = "null_default")]
    pub used_by: String,
    #[serde(deserialize_with = "null_default")]
    pub vendor: String,
}

/// Enclosure holding a disk
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct DiskContainer {
    #[serde(deserialize_with = "null_default")]
    pub order: i64,
    #[serde(deserialize_with = "null_default")]
    pub str: String,
    #[serde(rename = "supportPwrBtnDisable", deserialize_with = "null_default")]
    pub support_pwr_btn_disable: bool,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub container_type: String,
}

/// Device-level environment and support flags
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct Environment {
    #[serde(deserialize_with = "null_default")]
    pub batchtask: BatchTask,
    #[serde(deserialize_with = "null_default")]
    pub bay_number: String,
    #[serde(deserialize_with = "null_default")]
    pub ebox: Vec<Value>,
    #[serde(deserialize_with = "null_default")]
    pub fs_acting: bool,
    #[serde(rename = "isSyncSysPartition", deserialize_with = "null_default")]
    pub is_sync_sys_partition: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_space_actioning: bool,
    #[serde(deserialize_with = "null_default")]
    pub isns: Isns,
    #[serde(deserialize_with = "null_default")]
    pub isns_server: String,
    #[serde(deserialize_with = "null_default")]
    pub max_fs_bytes: String,
    #[serde(deserialize_with = "null_default")]
    pub max_fs_bytes_high_end: String,
    #[serde(deserialize_with = "null_default")]
    pub model_name: String,
    #[serde(deserialize_with = "null_default")]
    pub ram_enough_for_fs_high_end: bool,
    #[serde(deserialize_with = "null_default")]
    pub ram_size: i64,
    #[serde(deserialize_with = "null_default")]
    pub ram_size_required: i64,
    #[serde(deserialize_with = "null_default")]
    pub showpooltab: bool,
    #[serde(deserialize_with = "null_default")]
    pub status: EnvironmentStatus,
    #[serde(deserialize_with = "null_default")]
    pub support: EnvironmentSupport,
    #[serde(deserialize_with = "null_default")]
    pub support_fit_fs_limit: bool,
    #[serde(deserialize_with = "null_default")]
    pub unique_key: String,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct BatchTask {
    #[serde(deserialize_with = "null_default")]
    pub max_task: i64,
    #[serde(deserialize_with = "null_default")]
    pub remain_task: i64,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct Isns {
    #[serde(deserialize_with = "null_default")]
    pub address: String,
    #[serde(deserialize_with = "null_default")]
    pub enabled: bool,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct EnvironmentStatus {
    #[serde(deserialize_with = "null_default")]
    pub system_crashed: bool,
    #[serde(deserialize_with = "null_default")]
    pub system_need_repair: bool,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct EnvironmentSupport {
    #[serde(deserialize_with = "null_default")]
    pub ebox: bool,
    #[serde(deserialize_with = "null_default")]
    pub raid_cross: bool,
    #[serde(deserialize_with = "null_default")]
    pub sysdef: bool,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct HotSpareConf {
    #[serde(deserialize_with = "null_default")]
    pub cross_repair: bool,
    #[serde(deserialize_with = "null_default")]
    pub disable_repair: Vec<Value>,
}

/// Operations allowed on a volume or LUN
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct CanDo {
    #[serde(deserialize_with = "null_default")]
    pub convert_shr_to_pool: i64,
    #[serde(deserialize_with = "null_default")]
    pub delete: bool,
    #[serde(deserialize_with = "null_default")]
    pub expand_by_disk: i64,
    #[serde(deserialize_with = "null_default")]
    pub migrate: Migrate,
    #[serde(deserialize_with = "null_default")]
    pub raid_cross: bool,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct Migrate {
    #[serde(deserialize_with = "null_default")]
    pub to_shr2: i64,
}

/// Progress of a running storage action
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct Progress {
    #[serde(deserialize_with = "null_default")]
    pub percent: String,
    #[serde(deserialize_with = "null_default")]
    pub step: String,
}

/// Entry of the `iscsiLuns` list
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct IscsiLunEntry {
    #[serde(deserialize_with = "null_default")]
    pub can_do: CanDo,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub is_actioning: bool,
    #[serde(deserialize_with = "null_default")]
    pub iscsi_lun: IscsiLun,
    #[serde(deserialize_with = "null_default")]
    pub num_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub progress: Progress,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct IscsiLun {
    #[serde(rename = "blkNum", deserialize_with = "null_default")]
    pub blk_num: String,
    #[serde(deserialize_with = "null_default")]
    pub device_type: String,
    #[serde(deserialize_with = "null_default")]
    pub extent_based: bool,
    #[serde(deserialize_with = "null_default")]
    pub extent_size: String,
    #[serde(deserialize_with = "null_default")]
    pub lid: i64,
    #[serde(deserialize_with = "null_default")]
    pub location: String,
    /// Target ids ([`IscsiTarget::tid`]) the LUN is mapped to
    #[serde(deserialize_with = "null_default")]
    pub mapped_targets: Vec<i64>,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub parent: Value,
    #[serde(deserialize_with = "null_default")]
    pub restored_time: String,
    #[serde(deserialize_with = "null_default")]
    pub rootpath: String,
    #[serde(deserialize_with = "null_default")]
    pub scheduled_task: Vec<ScheduledTask>,
    #[serde(deserialize_with = "null_default")]
    pub size: String,
    #[serde(deserialize_with = "null_default")]
    pub snapshots: Vec<Value>,
    #[serde(deserialize_with = "null_default")]
    pub thin_provision: bool,
    #[serde(deserialize_with = "null_default")]
    pub used_by: String,
    #[serde(deserialize_with = "null_default")]
    pub uuid: String,
}

/// Scheduled snapshot task of a LUN
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct ScheduledTask {
    #[serde(deserialize_with = "null_default")]
    pub general: ScheduledTaskGeneral,
    #[serde(deserialize_with = "null_default")]
    pub schedule: Schedule,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct ScheduledTaskGeneral {
    #[serde(deserialize_with = "null_default")]
    pub lid: i64,
    #[serde(deserialize_with = "null_default")]
    pub snap_rotate: bool,
    #[serde(deserialize_with = "null_default")]
    pub snap_type: String,
    #[serde(deserialize_with = "null_default")]
    pub task_enabled: bool,
    #[serde(deserialize_with = "null_default")]
    pub task_name: String,
    #[serde(deserialize_with = "null_default")]
    pub tid: i64,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct Schedule {
    #[serde(deserialize_with = "null_default")]
    pub date: String,
    #[serde(deserialize_with = "null_default")]
    pub date_type: i64,
    #[serde(deserialize_with = "null_default")]
    pub hour: i64,
    #[serde(deserialize_with = "null_default")]
    pub last_work_hour: i64,
    #[serde(deserialize_with = "null_default")]
    pub min: i64,
    #[serde(deserialize_with = "null_default")]
    pub next_trigger_time: String,
    #[serde(deserialize_with = "null_default")]
    pub repeat: i64,
    #[serde(deserialize_with = "null_default")]
    pub repeat_hour: i64,
    #[serde(deserialize_with = "null_default")]
    pub repeat_hour_store_config: Value,
    #[serde(deserialize_with = "null_default")]
    pub repeat_min: i64,
    #[serde(deserialize_with = "null_default")]
    pub repeat_min_store_config: Value,
    #[serde(deserialize_with = "null_default")]
    pub week_name: String,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct IscsiTarget {
    #[serde(deserialize_with = "null_default")]
    pub auth: TargetAuth,
    #[serde(deserialize_with = "null_default")]
    pub data_chksum: bool,
    #[serde(deserialize_with = "null_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "null_default")]
    pub hdr_chksum: bool,
    #[serde(deserialize_with = "null_default")]
    pub iqn: String,
    #[serde(deserialize_with = "null_default")]
    pub mapped_logical_unit_number: Vec<Value>,
    #[serde(deserialize_with = "null_default")]
    pub mapped_luns: Vec<Value>,
    #[serde(deserialize_with = "null_default")]
    pub masking: Vec<Masking>,
    #[serde(deserialize_with = "null_default")]
    pub multi_sessions: bool,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub num_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub recv_seg_bytes: i64,
    #[serde(deserialize_with = "null_default")]
    pub remote: Vec<Value>,
    #[serde(deserialize_with = "null_default")]
    pub send_seg_bytes: i64,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub tid: i64,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct TargetAuth {
    #[serde(deserialize_with = "null_default")]
    pub mutual_username: String,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub auth_type: String,
    #[serde(deserialize_with = "null_default")]
    pub username: String,
}

/// Initiator permission on a target
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct Masking {
    #[serde(deserialize_with = "null_default")]
    pub iqn: String,
    #[serde(deserialize_with = "null_default")]
    pub permission: String,
}

/// Filesystem-bearing volume built on one or more disks
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct Volume {
    #[serde(deserialize_with = "null_default")]
    pub atime_checked: bool,
    #[serde(deserialize_with = "null_default")]
    pub atime_opt: String,
    #[serde(rename = "cacheStatus", deserialize_with = "null_default")]
    pub cache_status: String,
    #[serde(deserialize_with = "null_default")]
    pub can_do: CanDo,
    #[serde(deserialize_with = "null_default")]
    pub container: String,
    #[serde(deserialize_with = "null_default")]
    pub deploy_path: String,
    #[serde(deserialize_with = "null_default")]
    pub desc: String,
    #[serde(deserialize_with = "null_default")]
    pub device_type: String,
    #[serde(deserialize_with = "null_default")]
    pub disk_failure_number: i64,
    /// IDs of the member disks, see [`Disk::id`]
    #[serde(deserialize_with = "null_default")]
    pub disks: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub drive_type: i64,
    #[serde(deserialize_with = "null_default")]
    pub eppool_used: String,
    #[serde(deserialize_with = "null_default")]
    pub exist_alive_vdsm: bool,
    #[serde(deserialize_with = "null_default")]
    pub fs_type: String,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub is_acting: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_actioning: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_inode_full: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_writable: bool,
    #[serde(deserialize_with = "null_default")]
    pub limited_disk_number: i64,
    #[serde(deserialize_with = "null_default")]
    pub max_fs_size: String,
    #[serde(deserialize_with = "null_default")]
    pub maximal_disk_size: String,
    #[serde(deserialize_with = "null_default")]
    pub minimal_disk_size: String,
    #[serde(deserialize_with = "null_default")]
    pub num_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub pool_path: String,
    #[serde(deserialize_with = "null_default")]
    pub progress: Progress,
    #[serde(deserialize_with = "null_default")]
    pub raids: Vec<Raid>,
    #[serde(deserialize_with = "null_default")]
    pub size: VolumeSize,
    #[serde(deserialize_with = "null_default")]
    pub space_path: String,
    #[serde(deserialize_with = "null_default")]
    pub spares: Vec<Value>,
    #[serde(deserialize_with = "null_default")]
    pub ssd_trim: SsdTrim,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub suggestions: Vec<Value>,
    #[serde(deserialize_with = "null_default")]
    pub timebackup: bool,
    #[serde(deserialize_with = "null_default")]
    pub used_by_gluster: bool,
    #[serde(deserialize_with = "null_default")]
    pub vol_path: String,
    #[serde(deserialize_with = "null_default")]
    pub vspace_can_do: VspaceCanDo,
}

/// RAID group backing a volume
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct Raid {
    #[serde(rename = "designedDiskCount", deserialize_with = "null_default")]
    pub designed_disk_count: i64,
    #[serde(deserialize_with = "null_default")]
    pub devices: Vec<RaidDevice>,
    #[serde(rename = "minDevSize", deserialize_with = "null_default")]
    pub min_dev_size: String,
    #[serde(rename = "normalDevCount", deserialize_with = "null_default")]
    pub normal_dev_count: i64,
    #[serde(rename = "raidPath", deserialize_with = "null_default")]
    pub raid_path: String,
    #[serde(rename = "raidStatus", deserialize_with = "null_default")]
    pub raid_status: i64,
    #[serde(deserialize_with = "null_default")]
    pub spares: Vec<Value>,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct RaidDevice {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub slot: i64,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
}

/// Volume capacity, all values are decimal strings of bytes or inodes
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct VolumeSize {
    #[serde(deserialize_with = "null_default")]
    pub free_inode: String,
    #[serde(deserialize_with = "null_default")]
    pub total: String,
    #[serde(deserialize_with = "null_default")]
    pub total_device: String,
    #[serde(deserialize_with = "null_default")]
    pub total_inode: String,
    #[serde(deserialize_with = "null_default")]
    pub used: String,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct SsdTrim {
    #[serde(deserialize_with = "null_default")]
    pub support: String,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct VspaceCanDo {
    #[serde(deserialize_with = "null_default")]
    pub drbd: DrbdCanDo,
    #[serde(deserialize_with = "null_default")]
    pub flashcache: FlashcacheCanDo,
    #[serde(deserialize_with = "null_default")]
    pub snapshot: SnapshotCanDo,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct DrbdCanDo {
    #[serde(deserialize_with = "null_default")]
    pub resize: Capability,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct FlashcacheCanDo {
    #[serde(deserialize_with = "null_default")]
    pub apply: Capability,
    #[serde(deserialize_with = "null_default")]
    pub remove: Capability,
    #[serde(deserialize_with = "null_default")]
    pub resize: Capability,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct SnapshotCanDo {
    #[serde(deserialize_with = "null_default")]
    pub resize: Capability,
}

/// Whether an action is possible, and why not when it isn't
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct Capability {
    #[serde(deserialize_with = "null_default")]
    pub can_do: bool,
    #[serde(rename = "errCode", deserialize_with = "null_default")]
    pub err_code: i64,
    #[serde(rename = "stopService", deserialize_with = "null_default")]
    pub stop_service: bool,
}
