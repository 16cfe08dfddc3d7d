//! Installed-app catalogue and discovery.
//!
//! The catalogue is a fixed, ordered list. An entry shows up in the launcher
//! only if its app directory exists and holds an icon; everything else is
//! skipped without complaint. Filesystem access goes through [`AppProbe`] so
//! the badge, the simulator and the tests can each supply their own.

use core::fmt::Write;

use heapless::{String, Vec};
use log::{debug, warn};

use crate::config::{APPS_ROOT, ICON_FILE, MAX_ICONS, PATH_LEN};

/// Absolute resource path such as `/system/apps/gallery`.
pub type AppPath = String<PATH_LEN>;

/// One launchable app: display name and resource id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppEntry {
    pub name: &'static str,
    pub id: &'static str,
}

impl AppEntry {
    pub const fn new(
        name: &'static str,
        id: &'static str,
    ) -> Self {
        Self { name, id }
    }

    /// `/system/apps/{id}`
    pub fn path(&self) -> AppPath {
        let mut path = AppPath::new();
        let _ = write!(path, "{APPS_ROOT}/{}", self.id);
        path
    }

    /// `/system/apps/{id}/icon.png`
    pub fn icon_path(&self) -> AppPath {
        let mut path = self.path();
        let _ = write!(path, "/{ICON_FILE}");
        path
    }
}

/// The apps that ship with the badge, in launcher order.
pub const APPS: [AppEntry; 7] = [
    AppEntry::new("mona's quest", "quest"),
    AppEntry::new("mona pet", "monapet"),
    AppEntry::new("monasketch", "sketch"),
    AppEntry::new("flappy mona", "flappy"),
    AppEntry::new("gallery", "gallery"),
    AppEntry::new("badge", "badge"),
    AppEntry::new("debug info", "debug"),
];

/// Read-only filesystem queries used during discovery.
pub trait AppProbe {
    fn is_dir(
        &self,
        path: &str,
    ) -> bool;

    fn file_exists(
        &self,
        path: &str,
    ) -> bool;
}

/// Entries of `catalogue` that are installed, in catalogue order.
///
/// At most [`MAX_ICONS`] entries are kept; the rest are dropped with a
/// warning.
pub fn discover_apps<'a, P: AppProbe + ?Sized>(
    catalogue: &'a [AppEntry],
    probe: &P,
) -> Vec<&'a AppEntry, MAX_ICONS> {
    let mut found = Vec::new();
    for app in catalogue {
        if !probe.is_dir(&app.path()) || !probe.file_exists(&app.icon_path()) {
            debug!("Skipping {}: not installed", app.id);
            continue;
        }
        if found.push(app).is_err() {
            warn!("Icon limit ({MAX_ICONS}) reached, dropping {}", app.id);
        }
    }
    found
}
