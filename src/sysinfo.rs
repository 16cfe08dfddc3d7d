//! System statistics shown on the debug screen.
//!
//! The debug screen never talks to hardware itself. Everything it shows comes
//! from a [`SystemInfo`] implementation: the badge firmware queries the radio,
//! allocator and filesystem, the simulator makes plausible numbers up.
//!
//! The formatting helpers at the bottom turn raw numbers into the short
//! strings that fit a 160px wide screen.

use core::{fmt::Write, net::Ipv4Addr};

use embedded_graphics::pixelcolor::Rgb565;
use heapless::{String, Vec};

use crate::{
    colors::{GREEN, ORANGE, RED},
    config::PATH_LEN,
    error::Result,
};

/// WiFi network name.
pub type Ssid = String<32>;

/// Working directory reported on the storage page.
pub type CurrentDir = String<PATH_LEN>;

// =============================================================================
// Query Interface
// =============================================================================

/// Read access to network, memory, system and storage state.
pub trait SystemInfo {
    fn network(&self) -> NetworkStatus;

    /// Ask the radio to join the configured network. Returns immediately.
    fn request_connection(&mut self);

    fn memory(&self) -> MemoryStats;

    fn collect_garbage(&mut self);

    fn system(&self) -> SystemDetails;

    /// # Errors
    ///
    /// [`LauncherError::Query`](crate::LauncherError::Query) when the
    /// filesystem cannot report its size.
    fn storage(&self) -> Result<StorageStats>;

    fn current_dir(&self) -> CurrentDir;
}

// =============================================================================
// Network
// =============================================================================

/// Address configuration of a joined network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkDetails {
    pub ip: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub gateway: Ipv4Addr,
    pub dns: Ipv4Addr,
    pub mac: [u8; 6],
    /// Signal strength in dBm, when the radio reports one.
    pub rssi: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NetworkStatus {
    /// No credentials on the device.
    NotConfigured,
    Disconnected { ssid: Ssid },
    Connected { ssid: Ssid, details: NetworkDetails },
}

impl NetworkStatus {
    #[inline]
    pub const fn is_configured(&self) -> bool { !matches!(self, Self::NotConfigured) }
}

// =============================================================================
// Memory / System / Storage
// =============================================================================

/// Heap usage in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryStats {
    pub free: u64,
    pub used: u64,
}

impl MemoryStats {
    #[inline]
    pub const fn total(&self) -> u64 { self.free + self.used }

    pub fn usage_percent(&self) -> f32 { percent(self.used, self.total()) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemDetails {
    pub platform: &'static str,
    /// Runtime version `(major, minor, patch)`.
    pub version: (u16, u16, u16),
    pub cpu_freq_hz: u32,
    pub unique_id: Vec<u8, 16>,
}

/// Filesystem size in blocks, as reported by `statvfs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StorageStats {
    pub block_size: u64,
    pub total_blocks: u64,
    pub free_blocks: u64,
}

impl StorageStats {
    #[inline]
    pub const fn total_bytes(&self) -> u64 { self.total_blocks * self.block_size }

    #[inline]
    pub const fn free_bytes(&self) -> u64 { self.free_blocks * self.block_size }

    #[inline]
    pub const fn used_bytes(&self) -> u64 { self.total_bytes().saturating_sub(self.free_bytes()) }

    pub fn usage_percent(&self) -> f32 { percent(self.used_bytes(), self.total_bytes()) }
}

fn percent(
    part: u64,
    whole: u64,
) -> f32 {
    if whole == 0 {
        return 0.0;
    }
    part as f32 / whole as f32 * 100.0
}

// =============================================================================
// Formatting
// =============================================================================

/// `512B`, `1.5KB`, `2.0MB`.
pub fn format_bytes(bytes: u64) -> String<16> {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;

    let mut s = String::new();
    if bytes < KIB {
        let _ = write!(s, "{bytes}B");
    } else if bytes < MIB {
        let _ = write!(s, "{:.1}KB", bytes as f32 / KIB as f32);
    } else {
        let _ = write!(s, "{:.1}MB", bytes as f32 / MIB as f32);
    }
    s
}

/// `2h 5m`, `3m 12s` or `42s`, dropping the smallest unit once hours show.
pub fn format_uptime(ms: u64) -> String<16> {
    let seconds = ms / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    let mut s = String::new();
    if hours > 0 {
        let _ = write!(s, "{hours}h {}m", minutes % 60);
    } else if minutes > 0 {
        let _ = write!(s, "{minutes}m {}s", seconds % 60);
    } else {
        let _ = write!(s, "{seconds}s");
    }
    s
}

/// Colon-separated lowercase hex, `aa:bb:cc:dd:ee:ff`.
pub fn format_mac(mac: &[u8; 6]) -> String<17> {
    let mut s = String::new();
    for (i, b) in mac.iter().enumerate() {
        if i > 0 {
            let _ = s.push(':');
        }
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Lowercase hex with no separators.
pub fn format_hex(bytes: &[u8]) -> String<32> {
    let mut s = String::new();
    for b in bytes {
        if write!(s, "{b:02x}").is_err() {
            break;
        }
    }
    s
}

/// At most `max_chars` characters of `s`.
pub fn truncate(
    s: &str,
    max_chars: usize,
) -> &str {
    s.char_indices().nth(max_chars).map_or(s, |(idx, _)| &s[..idx])
}

/// Bar colour: red above `critical`, orange above `warning`, else green.
pub fn usage_color(
    percent: f32,
    warning: f32,
    critical: f32,
) -> Rgb565 {
    if percent > critical {
        RED
    } else if percent > warning {
        ORANGE
    } else {
        GREEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(0).as_str(), "0B");
        assert_eq!(format_bytes(1023).as_str(), "1023B");
        assert_eq!(format_bytes(1024).as_str(), "1.0KB");
        assert_eq!(format_bytes(1536).as_str(), "1.5KB");
        assert_eq!(format_bytes(1024 * 1024).as_str(), "1.0MB");
        assert_eq!(format_bytes(16 * 1024 * 1024).as_str(), "16.0MB");
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0).as_str(), "0s");
        assert_eq!(format_uptime(59_999).as_str(), "59s");
        assert_eq!(format_uptime(61_000).as_str(), "1m 1s");
        assert_eq!(format_uptime(3_600_000).as_str(), "1h 0m");
        assert_eq!(format_uptime(7_530_000).as_str(), "2h 5m");
    }

    #[test]
    fn test_format_mac() {
        let mac = [0x28, 0xcd, 0xc1, 0x0a, 0xff, 0x01];
        assert_eq!(format_mac(&mac).as_str(), "28:cd:c1:0a:ff:01");
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(&[0xde, 0xad, 0x01]).as_str(), "dead01");
        assert_eq!(format_hex(&[0xab; 16]).len(), 32);
        assert_eq!(format_hex(&[]).as_str(), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("a-very-long-network-name", 15), "a-very-long-net");
        assert_eq!(truncate("short", 15), "short");
        assert_eq!(truncate("héllo", 2), "hé");
    }

    #[test]
    fn test_usage_color_thresholds() {
        // Memory thresholds
        assert_eq!(usage_color(80.1, 60.0, 80.0), RED);
        assert_eq!(usage_color(80.0, 60.0, 80.0), ORANGE);
        assert_eq!(usage_color(60.5, 60.0, 80.0), ORANGE);
        assert_eq!(usage_color(60.0, 60.0, 80.0), GREEN);
        // Storage thresholds
        assert_eq!(usage_color(91.0, 75.0, 90.0), RED);
        assert_eq!(usage_color(76.0, 75.0, 90.0), ORANGE);
        assert_eq!(usage_color(10.0, 75.0, 90.0), GREEN);
    }

    #[test]
    fn test_memory_stats() {
        let mem = MemoryStats { free: 300, used: 100 };
        assert_eq!(mem.total(), 400);
        assert!((mem.usage_percent() - 25.0).abs() < 1e-4);
        assert!(MemoryStats { free: 0, used: 0 }.usage_percent().abs() < f32::EPSILON);
    }

    #[test]
    fn test_storage_stats() {
        let st = StorageStats {
            block_size: 4096,
            total_blocks: 100,
            free_blocks: 25,
        };
        assert_eq!(st.total_bytes(), 409_600);
        assert_eq!(st.free_bytes(), 102_400);
        assert_eq!(st.used_bytes(), 307_200);
        assert!((st.usage_percent() - 75.0).abs() < 1e-4);
    }

    #[test]
    fn test_network_configured() {
        assert!(!NetworkStatus::NotConfigured.is_configured());
        let ssid = Ssid::try_from("home").unwrap();
        assert!(NetworkStatus::Disconnected { ssid }.is_configured());
    }
}
