//!# Synology NAS Management API Client
//!
//! A Rust client library for reading system, shared folder and storage information from a
//! Synology DSM device through its Web API, with a strongly-typed interface.
//!
//! ## Features
//!
//! - Authentication with the Synology API, one owned [`client::Connection`] per device
//! - System utilization: CPU, memory, network, disk, LUN and volume I/O
//! - Shared folder listing with quota usage
//! - Storage inventory: disks, volumes, RAID groups, iSCSI LUNs and targets
//! - Typed errors for network, HTTP, decoding and API-reported failures
//! - Human-readable sizes and usage percentages
//!
//! ## Usage example
//!
//! ```rust,no_run
//! use anyhow::Result;
//! use syno_nas_api::config::NasConfig;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let config = NasConfig::from_env()?;
//!     let nas = config.client();
//!
//!     let conn = nas.connect_with(&config).await?;
//!
//!     let shares = nas.fetch_shares(&conn).await?;
//!     for share in shares.shares {
//!         println!("share: {}, volume: {}", share.name, share.volume_path);
//!     }
//!
//!     let storage = nas.fetch_storage_inventory(&conn).await?;
//!     for volume in &storage.volumes {
//!         println!("volume: {}, size: {}", volume.id, volume.size_display());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod entities;
pub mod utils;
