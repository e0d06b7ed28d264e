use std::{fs::File, path::Path};

use serde::Deserialize;

use crate::{errors::*, locale::Locale};

/// Offsets outside this window do not exist as real-world UTC offsets.
const USUAL_OFFSETS: std::ops::RangeInclusive<i32> = -12..=14;

/// Formatting settings: which label table to use and how many hours local
/// time is ahead of UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locale: Locale,
    pub timezone_offset: i32,
}

impl Settings {
    pub fn new(locale: Locale, timezone_offset: i32) -> Self {
        Settings {
            locale,
            timezone_offset,
        }
    }

    /// Load settings from a JSON file, e.g. `{"locale": "en", "timezone_offset": 8}`.
    /// Missing fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading settings from {}", path.display());

        let file = File::open(path).context("Unable to open settings file")?;
        let settings: Settings =
            serde_json::from_reader(file).context("Settings file was not well-formatted")?;

        settings.warn_if_unusual();
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.warn_if_unusual();
        Ok(settings)
    }

    fn warn_if_unusual(&self) {
        if !USUAL_OFFSETS.contains(&self.timezone_offset) {
            log::warn!(
                "Timezone offset {} is outside {:?} hours, using it anyway",
                self.timezone_offset,
                USUAL_OFFSETS
            );
        }
    }
}
