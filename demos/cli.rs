use anyhow::Result;
use syno_nas_api::config::NasConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = NasConfig::from_env()?;
    let nas = config.client();

    let conn = nas.connect_with(&config).await?;

    let utilization = nas.fetch_system_utilization(&conn).await?;
    println!(
        "cpu: {}% user, {}% system, memory: {}% used, captured at {}",
        utilization.cpu.user_load,
        utilization.cpu.system_load,
        utilization.memory.real_usage,
        utilization.time
    );

    let shares = nas.fetch_shares(&conn).await?;
    for share in shares.shares {
        println!(
            "share: {}, volume: {}, quota used: {:?}",
            share.name,
            share.volume_path,
            share.quota_usage_percent()
        );
    }

    let storage = nas.fetch_storage_inventory(&conn).await?;
    for volume in &storage.volumes {
        println!(
            "volume: {}, fs: {}, status: {}, size: {}",
            volume.id,
            volume.fs_type,
            volume.status,
            volume.size_display()
        );
        for disk in storage.volume_disks(volume) {
            println!(
                "  disk: {}, model: {}, temp: {}C, smart: {}",
                disk.name, disk.model, disk.temp, disk.smart_status
            );
        }
    }

    Ok(())
}
