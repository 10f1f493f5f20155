use crate::entities::{Disk, SharedFolder, StorageInventory, Volume};
use byte_unit::{Byte, UnitType};

fn format_bytes(bytes: u64) -> String {
    format!(
        "{:#.2}",
        Byte::from(bytes).get_appropriate_unit(UnitType::Decimal)
    )
}

/// Formats a decimal string of bytes, empty when the value is not a number
fn format_byte_string(value: &str) -> String {
    value
        .parse::<u64>()
        .map(format_bytes)
        .unwrap_or_default()
}

impl Disk {
    /// Disk capacity in human-readable form, e.g. `4.00 TB`
    #[must_use]
    pub fn size_display(&self) -> String {
        format_byte_string(&self.size_total)
    }
}

impl Volume {
    /// Used share of the volume capacity in percent, rounded
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn usage_percent(&self) -> Option<f64> {
        let used = self.size.used.parse::<u64>().ok()?;
        let total = self.size.total.parse::<u64>().ok()?;

        if total == 0 {
            return None;
        }

        Some((used as f64 / total as f64 * 100.0).round())
    }

    #[must_use]
    pub fn size_display(&self) -> String {
        format!(
            "{} / {}",
            format_byte_string(&self.size.used),
            format_byte_string(&self.size.total)
        )
    }
}

impl SharedFolder {
    /// Used share of the folder quota in percent, `None` for unlimited folders
    #[must_use]
    pub fn quota_usage_percent(&self) -> Option<f64> {
        if self.quota <= 0.0 {
            return None;
        }

        Some((self.used_quota / self.quota * 100.0).round())
    }
}

impl StorageInventory {
    /// Disks whose id is listed as a member of `volume`
    pub fn volume_disks<'a>(&'a self, volume: &'a Volume) -> impl Iterator<Item = &'a Disk> {
        self.disks
            .iter()
            .filter(|disk| volume.disks.iter().any(|id| *id == disk.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::VolumeSize;

    fn create_test_volume() -> Volume {
        Volume {
            id: String::from("volume_1"),
            disks: vec![String::from("sda"), String::from("sdc")],
            size: VolumeSize {
                total: String::from("1000000000000"),
                used: String::from("250000000000"),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn create_test_disk(id: &str) -> Disk {
        Disk {
            id: String::from(id),
            size_total: String::from("1234567890"),
            ..Default::default()
        }
    }

    #[test]
    fn test_disk_size_display() {
        assert_eq!("1.23 GB", create_test_disk("sda").size_display());
        assert_eq!("", Disk::default().size_display());
    }

    #[test]
    fn test_volume_usage_percent() {
        let mut volume = create_test_volume();
        assert_eq!(Some(25.0), volume.usage_percent());

        volume.size.total = String::from("0");
        assert_eq!(None, volume.usage_percent());

        volume.size.total = String::from("n/a");
        assert_eq!(None, volume.usage_percent());
    }

    #[test]
    fn test_share_quota_usage_percent() {
        let mut share = SharedFolder {
            quota: 100.0,
            used_quota: 42.0,
            ..Default::default()
        };
        assert_eq!(Some(42.0), share.quota_usage_percent());

        share.quota = 0.0;
        assert_eq!(None, share.quota_usage_percent());
    }

    #[test]
    fn test_volume_disks() {
        let inventory = StorageInventory {
            disks: vec![
                create_test_disk("sda"),
                create_test_disk("sdb"),
                create_test_disk("sdc"),
            ],
            ..Default::default()
        };
        let volume = create_test_volume();

        let ids: Vec<&str> = inventory
            .volume_disks(&volume)
            .map(|disk| disk.id.as_str())
            .collect();
        assert_eq!(vec!["sda", "sdc"], ids);
    }
}
