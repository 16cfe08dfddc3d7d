//! Debug info screen: network, memory, system and storage pages.
//!
//! C and A flip through the pages (wrapping), B on the memory page asks for a
//! garbage collection. Every frame redraws the whole page from fresh
//! [`SystemInfo`] queries.
//!
//! # Layout
//!
//! ```text
//! ┌────────────────────────────┐
//! │        Memory Info         │  large font, centred, y = 2
//! │ ────────────────────────── │  150x1 separator, y = 18
//! │ Free: 182.4KB              │  rows from y = 25, 12px apart
//! │ Used: 57.1KB               │
//! │ Total: 239.5KB             │
//! │ Usage: 23.8%               │
//! │ ████████░░░░░░░░░░░░░░░░░░ │  150x12 usage bar
//! │ Press B to run GC          │
//! │   Page 2/4  A/C: Nav       │  y = 110
//! └────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;
use log::{debug, info};

use crate::{
    colors::{BLACK, FADED_WHITE, GREEN, PHOSPHOR, RED, SOFT_WHITE},
    config::{CENTER_X, SCREEN_HEIGHT, SCREEN_WIDTH},
    framebuffer::Framebuffer,
    input::{Button, InputFrame},
    styles::{CENTERED, LEFT_ALIGNED, SMALL_FONT, TITLE_STYLE},
    sysinfo::{
        NetworkDetails,
        NetworkStatus,
        SystemInfo,
        format_bytes,
        format_hex,
        format_mac,
        format_uptime,
        truncate,
        usage_color,
    },
    widgets::{draw_label_value, draw_usage_bar},
};

// =============================================================================
// Layout Constants
// =============================================================================

const TITLE_POS: Point = Point::new(CENTER_X, 2);

const SEPARATOR: Rectangle = Rectangle::new(Point::new(5, 18), Size::new(150, 1));

const SEPARATOR_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PHOSPHOR);

/// Left edge of every row.
const ROW_X: i32 = 5;

/// Top of the first row.
const FIRST_ROW_Y: i32 = 25;

const LINE_HEIGHT: i32 = 12;

/// Indent of the unique id continuation line.
const CONTINUATION_X: i32 = 25;

const BAR_SIZE: Size = Size::new(150, 12);

/// Space above a usage bar.
const BAR_GAP_ABOVE: i32 = 5;

/// Space below a usage bar.
const BAR_GAP_BELOW: i32 = 10;

const INDICATOR_POS: Point = Point::new(CENTER_X, 110);

/// Characters of the SSID shown on the network page.
const SSID_CHARS: usize = 15;

/// Characters of the working directory shown on the storage page.
const CWD_CHARS: usize = 20;

/// Characters of a storage error message.
const ERROR_CHARS: usize = 30;

/// Hex digits of the unique id on the ID row; the rest wraps.
const ID_ROW_DIGITS: usize = 16;

// =============================================================================
// Usage Thresholds (percent)
// =============================================================================

const MEMORY_WARN: f32 = 60.0;
const MEMORY_CRIT: f32 = 80.0;
const STORAGE_WARN: f32 = 75.0;
const STORAGE_CRIT: f32 = 90.0;

// =============================================================================
// Pages
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DebugPage {
    #[default]
    Network,
    Memory,
    System,
    Storage,
}

impl DebugPage {
    pub const COUNT: usize = 4;

    pub const fn next(self) -> Self {
        match self {
            Self::Network => Self::Memory,
            Self::Memory => Self::System,
            Self::System => Self::Storage,
            Self::Storage => Self::Network,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Network => Self::Storage,
            Self::Memory => Self::Network,
            Self::System => Self::Memory,
            Self::Storage => Self::System,
        }
    }

    /// 1-based page number.
    pub const fn number(self) -> usize { self as usize + 1 }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Network => "Network Info",
            Self::Memory => "Memory Info",
            Self::System => "System Info",
            Self::Storage => "Storage Info",
        }
    }
}

/// Debug screen state.
#[derive(Clone, Copy, Debug, Default)]
pub struct DebugScreen {
    page: DebugPage,
    connection_requested: bool,
}

impl DebugScreen {
    pub const fn new() -> Self {
        Self {
            page: DebugPage::Network,
            connection_requested: false,
        }
    }

    #[inline]
    pub const fn page(&self) -> DebugPage { self.page }

    /// Handle input and redraw the current page.
    pub fn update<S: SystemInfo + ?Sized>(
        &mut self,
        fb: &mut Framebuffer,
        input: &InputFrame,
        system: &mut S,
    ) {
        if input.pressed(Button::C) {
            self.page = self.page.next();
            info!("Debug page: {}", self.page.title());
        }
        if input.pressed(Button::A) {
            self.page = self.page.prev();
            info!("Debug page: {}", self.page.title());
        }
        if self.page == DebugPage::Memory && input.pressed(Button::B) {
            debug!("Garbage collection requested");
            system.collect_garbage();
        }

        fb.clear(BLACK).ok();
        draw_title(fb, self.page.title());

        let mut rows = Rows::new(fb);
        match self.page {
            DebugPage::Network => self.draw_network(&mut rows, system),
            DebugPage::Memory => draw_memory(&mut rows, system),
            DebugPage::System => draw_system(&mut rows, system, input.ticks),
            DebugPage::Storage => draw_storage(&mut rows, system),
        }

        draw_indicator(fb, self.page);
    }

    fn draw_network<S: SystemInfo + ?Sized>(
        &mut self,
        rows: &mut Rows<'_>,
        system: &mut S,
    ) {
        let mut status = system.network();
        if status.is_configured() && !self.connection_requested {
            info!("Requesting WiFi connection");
            system.request_connection();
            self.connection_requested = true;
            status = system.network();
        }

        match &status {
            NetworkStatus::NotConfigured => {
                rows.text("WiFi not configured", FADED_WHITE);
                rows.gap(BAR_GAP_ABOVE);
                rows.text("Add WiFi credentials", FADED_WHITE);
                rows.text("to connect", FADED_WHITE);
            }
            NetworkStatus::Disconnected { ssid } => {
                rows.value("Status:", "Disconnected", RED);
                rows.value("SSID:", truncate(ssid, SSID_CHARS), SOFT_WHITE);
                rows.text("Not connected to WiFi", FADED_WHITE);
            }
            NetworkStatus::Connected { ssid, details } => {
                rows.value("Status:", "Connected", GREEN);
                rows.value("SSID:", truncate(ssid, SSID_CHARS), SOFT_WHITE);
                draw_addresses(rows, details);
            }
        }
    }
}

fn draw_addresses(
    rows: &mut Rows<'_>,
    details: &NetworkDetails,
) {
    for (label, addr) in [
        ("IP:", details.ip),
        ("Netmask:", details.netmask),
        ("Gateway:", details.gateway),
        ("DNS:", details.dns),
    ] {
        let mut s: String<16> = String::new();
        let _ = write!(s, "{addr}");
        rows.value(label, &s, SOFT_WHITE);
    }

    rows.value("MAC:", &format_mac(&details.mac), SOFT_WHITE);

    if let Some(rssi) = details.rssi {
        let mut s: String<16> = String::new();
        let _ = write!(s, "{rssi} dBm");
        rows.value("Signal:", &s, SOFT_WHITE);
    }
}

fn draw_memory<S: SystemInfo + ?Sized>(
    rows: &mut Rows<'_>,
    system: &mut S,
) {
    // Collect first so the numbers reflect live objects only.
    system.collect_garbage();
    let mem = system.memory();
    let usage = mem.usage_percent();

    rows.value("Free:", &format_bytes(mem.free), SOFT_WHITE);
    rows.value("Used:", &format_bytes(mem.used), SOFT_WHITE);
    rows.value("Total:", &format_bytes(mem.total()), SOFT_WHITE);
    rows.value("Usage:", &format_percent(usage), SOFT_WHITE);
    rows.bar(usage, usage_color(usage, MEMORY_WARN, MEMORY_CRIT));
    rows.text("Press B to run GC", PHOSPHOR);
}

fn draw_system<S: SystemInfo + ?Sized>(
    rows: &mut Rows<'_>,
    system: &S,
    ticks: u64,
) {
    let details = system.system();

    rows.value("Platform:", details.platform, SOFT_WHITE);

    let (major, minor, patch) = details.version;
    let mut version: String<24> = String::new();
    let _ = write!(version, "{major}.{minor}.{patch}");
    rows.value("Runtime:", &version, SOFT_WHITE);

    let mut freq: String<16> = String::new();
    let _ = write!(freq, "{} MHz", details.cpu_freq_hz / 1_000_000);
    rows.value("CPU Freq:", &freq, SOFT_WHITE);

    let mut screen: String<16> = String::new();
    let _ = write!(screen, "{SCREEN_WIDTH}x{SCREEN_HEIGHT}");
    rows.value("Screen:", &screen, SOFT_WHITE);

    rows.value("Uptime:", &format_uptime(ticks), SOFT_WHITE);

    let hex = format_hex(&details.unique_id);
    let id = hex.as_str();
    let split = id.len().min(ID_ROW_DIGITS);
    rows.value("ID:", &id[..split], SOFT_WHITE);
    if id.len() > ID_ROW_DIGITS {
        rows.text_at(CONTINUATION_X, &id[ID_ROW_DIGITS..], SOFT_WHITE);
    }
}

fn draw_storage<S: SystemInfo + ?Sized>(
    rows: &mut Rows<'_>,
    system: &S,
) {
    let stats = match system.storage() {
        Ok(stats) => stats,
        Err(e) => {
            let mut msg: String<64> = String::new();
            let _ = write!(msg, "{e}");
            let mut line: String<48> = String::new();
            let _ = write!(line, "Error: {}", truncate(&msg, ERROR_CHARS));
            rows.text(&line, RED);
            return;
        }
    };
    let usage = stats.usage_percent();

    rows.value("Total:", &format_bytes(stats.total_bytes()), SOFT_WHITE);
    rows.value("Used:", &format_bytes(stats.used_bytes()), SOFT_WHITE);
    rows.value("Free:", &format_bytes(stats.free_bytes()), SOFT_WHITE);
    rows.value("Usage:", &format_percent(usage), SOFT_WHITE);
    rows.bar(usage, usage_color(usage, STORAGE_WARN, STORAGE_CRIT));

    let cwd = system.current_dir();
    rows.value("CWD:", truncate(&cwd, CWD_CHARS), SOFT_WHITE);
}

fn format_percent(percent: f32) -> String<12> {
    let mut s = String::new();
    let _ = write!(s, "{percent:.1}%");
    s
}

fn draw_title(
    fb: &mut Framebuffer,
    title: &str,
) {
    Text::with_text_style(title, TITLE_POS, TITLE_STYLE, CENTERED)
        .draw(fb)
        .ok();
    SEPARATOR.into_styled(SEPARATOR_STYLE).draw(fb).ok();
}

fn draw_indicator(
    fb: &mut Framebuffer,
    page: DebugPage,
) {
    let mut s: String<24> = String::new();
    let _ = write!(s, "Page {}/{}  A/C: Nav", page.number(), DebugPage::COUNT);
    Text::with_text_style(&s, INDICATOR_POS, MonoTextStyle::new(SMALL_FONT, FADED_WHITE), CENTERED)
        .draw(fb)
        .ok();
}

/// Top-to-bottom row cursor for a page body.
struct Rows<'f> {
    fb: &'f mut Framebuffer,
    y: i32,
}

impl<'f> Rows<'f> {
    fn new(fb: &'f mut Framebuffer) -> Self { Self { fb, y: FIRST_ROW_Y } }

    fn value(
        &mut self,
        label: &str,
        value: &str,
        color: Rgb565,
    ) {
        draw_label_value(self.fb, Point::new(ROW_X, self.y), label, value, color);
        self.y += LINE_HEIGHT;
    }

    fn text(
        &mut self,
        text: &str,
        color: Rgb565,
    ) {
        self.text_at(ROW_X, text, color);
    }

    fn text_at(
        &mut self,
        x: i32,
        text: &str,
        color: Rgb565,
    ) {
        Text::with_text_style(
            text,
            Point::new(x, self.y),
            MonoTextStyle::new(SMALL_FONT, color),
            LEFT_ALIGNED,
        )
        .draw(self.fb)
        .ok();
        self.y += LINE_HEIGHT;
    }

    fn gap(
        &mut self,
        px: i32,
    ) {
        self.y += px;
    }

    fn bar(
        &mut self,
        percent: f32,
        color: Rgb565,
    ) {
        self.y += BAR_GAP_ABOVE;
        draw_usage_bar(self.fb, Point::new(ROW_X, self.y), BAR_SIZE, percent, color);
        self.y += BAR_SIZE.height as i32 + BAR_GAP_BELOW;
    }
}

#[cfg(test)]
mod tests {
    use core::net::Ipv4Addr;

    use super::*;
    use crate::{
        colors::{BAR_TRACK, ORANGE, blend},
        error::{LauncherError, Result},
        input::ButtonSet,
        sysinfo::{CurrentDir, MemoryStats, Ssid, StorageStats, SystemDetails},
    };

    struct FakeSystem {
        ssid: Option<&'static str>,
        connected: bool,
        connection_requests: u32,
        collections: u32,
        memory: MemoryStats,
        storage: Result<StorageStats>,
    }

    impl FakeSystem {
        fn new() -> Self {
            Self {
                ssid: Some("badge-net"),
                connected: false,
                connection_requests: 0,
                collections: 0,
                memory: MemoryStats { free: 3000, used: 1000 },
                storage: Ok(StorageStats {
                    block_size: 4096,
                    total_blocks: 100,
                    free_blocks: 50,
                }),
            }
        }
    }

    impl SystemInfo for FakeSystem {
        fn network(&self) -> NetworkStatus {
            let Some(name) = self.ssid else {
                return NetworkStatus::NotConfigured;
            };
            let ssid = Ssid::try_from(name).unwrap();
            if self.connected {
                NetworkStatus::Connected {
                    ssid,
                    details: NetworkDetails {
                        ip: Ipv4Addr::new(192, 168, 1, 42),
                        netmask: Ipv4Addr::new(255, 255, 255, 0),
                        gateway: Ipv4Addr::new(192, 168, 1, 1),
                        dns: Ipv4Addr::new(1, 1, 1, 1),
                        mac: [0x28, 0xcd, 0xc1, 0, 0, 1],
                        rssi: Some(-61),
                    },
                }
            } else {
                NetworkStatus::Disconnected { ssid }
            }
        }

        fn request_connection(&mut self) {
            self.connection_requests += 1;
            self.connected = true;
        }

        fn memory(&self) -> MemoryStats { self.memory }

        fn collect_garbage(&mut self) { self.collections += 1; }

        fn system(&self) -> SystemDetails {
            SystemDetails {
                platform: "rp2",
                version: (1, 25, 0),
                cpu_freq_hz: 150_000_000,
                unique_id: heapless::Vec::from_slice(&[0xab; 12]).unwrap(),
            }
        }

        fn storage(&self) -> Result<StorageStats> { self.storage.clone() }

        fn current_dir(&self) -> CurrentDir { CurrentDir::try_from("/system/apps/debug").unwrap() }
    }

    fn frame(
        buttons: &[Button],
        ticks: u64,
    ) -> InputFrame {
        InputFrame::new(buttons.iter().copied().collect::<ButtonSet>(), ticks)
    }

    fn count(
        fb: &Framebuffer,
        area: Rectangle,
        color: Rgb565,
    ) -> usize {
        area.points().filter(|&p| fb.pixel(p) == Some(color)).count()
    }

    #[test]
    fn test_page_cycle() {
        let mut page = DebugPage::Network;
        for _ in 0..DebugPage::COUNT {
            page = page.next();
        }
        assert_eq!(page, DebugPage::Network);
        assert_eq!(DebugPage::Network.prev(), DebugPage::Storage);
        assert_eq!(DebugPage::Storage.number(), 4);
        assert_eq!(DebugPage::System.title(), "System Info");
    }

    #[test]
    fn test_navigation_wraps() {
        let mut fb = Framebuffer::new();
        let mut sys = FakeSystem::new();
        let mut screen = DebugScreen::new();

        screen.update(&mut fb, &frame(&[Button::A], 0), &mut sys);
        assert_eq!(screen.page(), DebugPage::Storage);
        screen.update(&mut fb, &frame(&[Button::C], 20), &mut sys);
        assert_eq!(screen.page(), DebugPage::Network);
        screen.update(&mut fb, &frame(&[Button::C], 40), &mut sys);
        assert_eq!(screen.page(), DebugPage::Memory);
    }

    #[test]
    fn test_connection_requested_once() {
        let mut fb = Framebuffer::new();
        let mut sys = FakeSystem::new();
        let mut screen = DebugScreen::new();
        for t in 0..5 {
            screen.update(&mut fb, &frame(&[], t * 20), &mut sys);
        }
        assert_eq!(sys.connection_requests, 1);

        // Leaving and coming back does not ask again.
        screen.update(&mut fb, &frame(&[Button::C], 200), &mut sys);
        screen.update(&mut fb, &frame(&[Button::A], 220), &mut sys);
        assert_eq!(sys.connection_requests, 1);
    }

    #[test]
    fn test_no_request_without_credentials() {
        let mut fb = Framebuffer::new();
        let mut sys = FakeSystem::new();
        sys.ssid = None;
        let mut screen = DebugScreen::new();
        screen.update(&mut fb, &frame(&[], 0), &mut sys);
        assert_eq!(sys.connection_requests, 0);
    }

    #[test]
    fn test_no_request_off_network_page() {
        let mut fb = Framebuffer::new();
        let mut sys = FakeSystem::new();
        let mut screen = DebugScreen::new();
        // Navigate away on the very first frame.
        screen.update(&mut fb, &frame(&[Button::C], 0), &mut sys);
        assert_eq!(sys.connection_requests, 0);
    }

    #[test]
    fn test_connected_status_is_green() {
        let mut fb = Framebuffer::new();
        let mut sys = FakeSystem::new();
        let mut screen = DebugScreen::new();
        screen.update(&mut fb, &frame(&[], 0), &mut sys);
        let status_row = Rectangle::new(Point::new(0, FIRST_ROW_Y), Size::new(160, 10));
        assert!(count(&fb, status_row, GREEN) > 0);
        assert_eq!(count(&fb, status_row, RED), 0);
    }

    #[test]
    fn test_gc_on_b_only_on_memory_page() {
        let mut fb = Framebuffer::new();
        let mut sys = FakeSystem::new();
        let mut screen = DebugScreen::new();

        screen.update(&mut fb, &frame(&[Button::B], 0), &mut sys);
        assert_eq!(sys.collections, 0);

        // Memory page collects before reading.
        screen.update(&mut fb, &frame(&[Button::C], 20), &mut sys);
        assert_eq!(sys.collections, 1);

        screen.update(&mut fb, &frame(&[Button::B], 40), &mut sys);
        assert_eq!(sys.collections, 3);
    }

    #[test]
    fn test_memory_bar_colour() {
        let mut fb = Framebuffer::new();
        let mut sys = FakeSystem::new();
        sys.memory = MemoryStats { free: 300, used: 700 };
        let mut screen = DebugScreen::new();
        screen.update(&mut fb, &frame(&[Button::C], 0), &mut sys);
        // Rows at 25, 37, 49, 61, bar at 78.
        assert_eq!(fb.pixel(Point::new(ROW_X + 1, 80)), Some(ORANGE));
        assert_eq!(fb.pixel(Point::new(ROW_X + 149, 80)), Some(BAR_TRACK));
    }

    #[test]
    fn test_storage_bar_colour() {
        let mut fb = Framebuffer::new();
        let mut sys = FakeSystem::new();
        sys.storage = Ok(StorageStats {
            block_size: 512,
            total_blocks: 100,
            free_blocks: 5,
        });
        let mut screen = DebugScreen::new();
        screen.update(&mut fb, &frame(&[Button::A], 0), &mut sys);
        assert_eq!(screen.page(), DebugPage::Storage);
        assert_eq!(fb.pixel(Point::new(ROW_X + 1, 80)), Some(RED));
    }

    #[test]
    fn test_storage_error_drawn_in_red() {
        let mut fb = Framebuffer::new();
        let mut sys = FakeSystem::new();
        sys.storage = Err(LauncherError::Query("filesystem stats"));
        let mut screen = DebugScreen::new();
        screen.update(&mut fb, &frame(&[Button::A], 0), &mut sys);
        let first_row = Rectangle::new(Point::new(0, FIRST_ROW_Y), Size::new(160, 10));
        assert!(count(&fb, first_row, RED) > 0);
        // No bar track below.
        assert_eq!(fb.pixel(Point::new(ROW_X + 149, 80)), Some(BLACK));
    }

    #[test]
    fn test_header_and_indicator() {
        let mut fb = Framebuffer::new();
        let mut sys = FakeSystem::new();
        let mut screen = DebugScreen::new();
        screen.update(&mut fb, &frame(&[Button::C, Button::C], 0), &mut sys);

        assert_eq!(fb.pixel(Point::new(5, 18)), Some(PHOSPHOR));
        assert_eq!(fb.pixel(Point::new(154, 18)), Some(PHOSPHOR));
        assert_eq!(fb.pixel(Point::new(155, 18)), Some(BLACK));

        let title = Rectangle::new(Point::new(0, 2), Size::new(160, 15));
        assert!(count(&fb, title, SOFT_WHITE) > 0);

        let indicator = Rectangle::new(Point::new(0, 110), Size::new(160, 10));
        assert!(count(&fb, indicator, FADED_WHITE) > 0);
    }

    #[test]
    fn test_faded_white_is_dimmer() {
        assert!(FADED_WHITE.r() < SOFT_WHITE.r());
        assert_eq!(FADED_WHITE, blend(SOFT_WHITE, BLACK, 100));
    }
}
