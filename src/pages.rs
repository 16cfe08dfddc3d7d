//! Which screen the simulator run loop is showing.
//!
//! # Pages
//!
//! - [`Page::Launcher`]: the icon grid (start-up page, and where HOME returns)
//! - [`Page::Debug`]: the debug info screen, reached by launching `debug`
//!
//! Other apps have no desktop counterpart; launching one is logged and the
//! launcher stays up.

use badge_launcher::LaunchPath;

/// Resource id of the app the simulator renders as [`Page::Debug`].
const DEBUG_APP_ID: &str = "debug";

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    #[default]
    Launcher,
    Debug,
}

impl Page {
    /// Page that renders the app at `path`, if the simulator has one.
    pub fn for_launch_path(path: &LaunchPath) -> Option<Self> {
        match path.rsplit('/').next() {
            Some(DEBUG_APP_ID) => Some(Self::Debug),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use badge_launcher::discovery::APPS;

    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Launcher);
    }

    #[test]
    fn test_debug_app_maps_to_debug_page() {
        let debug = APPS.iter().find(|a| a.id == "debug").map(|a| a.path());
        assert_eq!(debug.as_ref().and_then(Page::for_launch_path), Some(Page::Debug));
    }

    #[test]
    fn test_other_apps_have_no_page() {
        for app in APPS.iter().filter(|a| a.id != "debug") {
            assert_eq!(Page::for_launch_path(&app.path()), None, "{}", app.id);
        }
    }

    #[test]
    fn test_suffix_must_be_whole_segment() {
        let path = LaunchPath::try_from("/system/apps/notdebug").unwrap();
        assert_eq!(Page::for_launch_path(&path), None);
    }
}
