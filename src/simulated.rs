//! Simulated system statistics for the debug screen.
//!
//! Numbers are made up but behave plausibly: heap usage drifts and grows
//! until a collection, WiFi takes a moment to join after a connection
//! request, storage reports a 16MB flash.

use std::{
    env,
    path::PathBuf,
    time::{Duration, Instant},
};

use badge_launcher::{
    LauncherError,
    config::APPS_ROOT,
    sysinfo::{CurrentDir, MemoryStats, NetworkDetails, NetworkStatus, Ssid, StorageStats, SystemDetails, SystemInfo},
};
use core::{fmt::Write, net::Ipv4Addr};
use log::{debug, info, warn};

// =============================================================================
// Simulation Parameters
// =============================================================================

/// Heap size of the badge.
const HEAP_SIZE: u64 = 256 * 1024;

/// Heap in use right after boot.
const BASE_USED: u64 = 48 * 1024;

/// Peak-to-peak swing of live objects.
const LIVE_SWING: f32 = 32.0 * 1024.0;

/// Garbage produced per millisecond between collections.
const GARBAGE_PER_MS: u64 = 16;

/// Garbage ceiling before the fake allocator collects on its own.
const GARBAGE_CAP: u64 = 96 * 1024;

/// Time between a connection request and the network showing as joined.
const JOIN_DELAY: Duration = Duration::from_millis(1500);

/// RP2350 default system clock.
const CPU_FREQ_HZ: u32 = 150_000_000;

const UNIQUE_ID: [u8; 8] = [0xe6, 0x61, 0x38, 0x52, 0x83, 0x1a, 0x2c, 0x27];

const MAC: [u8; 6] = [0x28, 0xcd, 0xc1, 0x0e, 0x5a, 0x91];

const FLASH_BLOCK_SIZE: u64 = 4096;
const FLASH_BLOCKS: u64 = 4096;
const FLASH_FREE_BLOCKS: u64 = 2817;

pub struct SimulatedSystem {
    ssid: Option<Ssid>,
    join_requested: Option<Instant>,
    started: Instant,
    last_gc: Instant,
    /// Host directory standing in for the badge filesystem.
    root: PathBuf,
}

impl SimulatedSystem {
    pub fn new(
        ssid: Option<&str>,
        root: impl Into<PathBuf>,
    ) -> Self {
        let ssid = ssid.and_then(|name| {
            let parsed = Ssid::try_from(name).ok();
            if parsed.is_none() {
                warn!("SSID {name:?} is too long, WiFi left unconfigured");
            }
            parsed
        });
        let now = Instant::now();
        Self {
            ssid,
            join_requested: None,
            started: now,
            last_gc: now,
            root: root.into(),
        }
    }

    /// Read the WiFi network name from `BADGE_WIFI_SSID`.
    pub fn from_env(root: impl Into<PathBuf>) -> Self {
        let ssid = env::var("BADGE_WIFI_SSID").ok().filter(|s| !s.is_empty());
        Self::new(ssid.as_deref(), root)
    }
}

impl SystemInfo for SimulatedSystem {
    fn network(&self) -> NetworkStatus {
        let Some(ssid) = self.ssid.clone() else {
            return NetworkStatus::NotConfigured;
        };
        match self.join_requested {
            Some(at) if at.elapsed() >= JOIN_DELAY => NetworkStatus::Connected {
                ssid,
                details: NetworkDetails {
                    ip: Ipv4Addr::new(192, 168, 1, 73),
                    netmask: Ipv4Addr::new(255, 255, 255, 0),
                    gateway: Ipv4Addr::new(192, 168, 1, 1),
                    dns: Ipv4Addr::new(192, 168, 1, 1),
                    mac: MAC,
                    rssi: Some(fake_signal(self.started.elapsed().as_secs_f32(), -72.0, -48.0, 0.3) as i32),
                },
            },
            _ => NetworkStatus::Disconnected { ssid },
        }
    }

    fn request_connection(&mut self) {
        if self.join_requested.is_none() {
            info!("Joining simulated network");
            self.join_requested = Some(Instant::now());
        }
    }

    fn memory(&self) -> MemoryStats {
        let live = fake_signal(self.started.elapsed().as_secs_f32(), 0.0, LIVE_SWING, 0.2) as u64;
        let garbage = (self.last_gc.elapsed().as_millis() as u64 * GARBAGE_PER_MS).min(GARBAGE_CAP);
        let used = (BASE_USED + live + garbage).min(HEAP_SIZE);
        MemoryStats {
            free: HEAP_SIZE - used,
            used,
        }
    }

    fn collect_garbage(&mut self) {
        debug!("Simulated GC");
        self.last_gc = Instant::now();
    }

    fn system(&self) -> SystemDetails {
        let part = |v: &str| v.parse().unwrap_or(0);
        SystemDetails {
            platform: env::consts::OS,
            version: (
                part(env!("CARGO_PKG_VERSION_MAJOR")),
                part(env!("CARGO_PKG_VERSION_MINOR")),
                part(env!("CARGO_PKG_VERSION_PATCH")),
            ),
            cpu_freq_hz: CPU_FREQ_HZ,
            unique_id: UNIQUE_ID.iter().copied().collect(),
        }
    }

    fn storage(&self) -> badge_launcher::Result<StorageStats> {
        if !self.root.is_dir() {
            return Err(LauncherError::Query("filesystem stats"));
        }
        Ok(StorageStats {
            block_size: FLASH_BLOCK_SIZE,
            total_blocks: FLASH_BLOCKS,
            free_blocks: FLASH_FREE_BLOCKS,
        })
    }

    fn current_dir(&self) -> CurrentDir {
        // Apps run from their own directory.
        let mut dir = CurrentDir::new();
        let _ = write!(dir, "{APPS_ROOT}/debug");
        dir
    }
}

/// Sinusoid between `min` and `max`.
fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}
