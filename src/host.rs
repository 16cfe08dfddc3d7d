//! Host filesystem access for the simulator.
//!
//! A directory on the host (`BADGE_ROOT`, default `assets`) stands in for the
//! badge's root filesystem, so `/system/apps/gallery/icon.png` resolves to
//! `assets/system/apps/gallery/icon.png`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use badge_launcher::{
    discovery::{AppEntry, AppProbe},
    sprite::Sprite,
};
use image::RgbaImage;
use log::{debug, warn};

/// Badge paths resolved under a host directory.
pub struct HostFs {
    root: PathBuf,
}

impl HostFs {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    pub fn root(&self) -> &Path { &self.root }

    /// Host path for an absolute badge path.
    pub fn resolve(
        &self,
        badge_path: &str,
    ) -> PathBuf {
        self.root.join(badge_path.trim_start_matches('/'))
    }
}

impl AppProbe for HostFs {
    fn is_dir(
        &self,
        path: &str,
    ) -> bool {
        self.resolve(path).is_dir()
    }

    fn file_exists(
        &self,
        path: &str,
    ) -> bool {
        self.resolve(path).is_file()
    }
}

/// An installed app with its decoded icon.
pub struct LoadedIcon {
    pub app: &'static AppEntry,
    image: RgbaImage,
}

impl LoadedIcon {
    /// Borrowed view of the icon pixels.
    pub fn sprite(&self) -> badge_launcher::Result<Sprite<'_>> {
        Sprite::new(self.image.width(), self.image.height(), self.image.as_raw())
    }
}

/// Decode one app icon as RGBA.
pub fn load_icon(
    fs: &HostFs,
    app: &AppEntry,
) -> anyhow::Result<RgbaImage> {
    let path = fs.resolve(&app.icon_path());
    let image = image::open(&path).with_context(|| format!("Failed to decode {}", path.display()))?;
    Ok(image.into_rgba8())
}

/// Decode the icons of every installed app.
///
/// Icons that exist but fail to decode are skipped with a warning, the same
/// as an app without an icon.
pub fn load_icons(
    fs: &HostFs,
    apps: &[&'static AppEntry],
) -> Vec<LoadedIcon> {
    apps.iter()
        .filter_map(|&app| match load_icon(fs, app) {
            Ok(image) => {
                debug!("Loaded {} icon ({}x{})", app.id, image.width(), image.height());
                Some(LoadedIcon { app, image })
            }
            Err(e) => {
                warn!("Skipping {}: {e:#}", app.id);
                None
            }
        })
        .collect()
}
