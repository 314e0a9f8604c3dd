// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use std::path::Path;

use config::{Config, File};
use serde::Deserialize;

use super::error::ConfigError;

/// Default name of the file soundboards are persisted to.
pub const DEFAULT_FILE_NAME: &str = "soundboards.yaml";

/// Default maximum number of concurrent sample voices.
pub const DEFAULT_MAX_VOICES: u32 = 32;

/// The configuration for a soundboard processor.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    /// The name of the soundboards file inside the support directory.
    #[serde(default = "default_file_name")]
    file_name: String,

    /// Whether each save is synced to disk before the file is replaced.
    #[serde(default = "default_sync_writes")]
    sync_writes: bool,

    /// Maximum number of samples the voice registry lets play at once.
    #[serde(default = "default_max_voices")]
    max_voices: u32,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_sync_writes() -> bool {
    true
}

fn default_max_voices() -> u32 {
    DEFAULT_MAX_VOICES
}

/// Rejects file names that are empty or that would resolve outside the support directory.
fn validate_file_name(file_name: &str) -> Result<(), ConfigError> {
    let path = Path::new(file_name);
    if file_name.is_empty() || path.file_name() != Some(path.as_os_str()) {
        return Err(ConfigError::InvalidFileName(file_name.to_string()));
    }
    Ok(())
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            file_name: default_file_name(),
            sync_writes: default_sync_writes(),
            max_voices: default_max_voices(),
        }
    }
}

impl Settings {
    /// Creates new settings. The file name must name a file directly inside the support
    /// directory.
    pub fn new(
        file_name: &str,
        sync_writes: bool,
        max_voices: u32,
    ) -> Result<Settings, ConfigError> {
        validate_file_name(file_name)?;
        Ok(Settings {
            file_name: file_name.to_string(),
            sync_writes,
            max_voices,
        })
    }

    /// Parse settings from a YAML file.
    pub fn deserialize(path: &Path) -> Result<Settings, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize::<Settings>()?;

        validate_file_name(&settings.file_name)?;
        Ok(settings)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn sync_writes(&self) -> bool {
        self.sync_writes
    }

    pub fn max_voices(&self) -> u32 {
        self.max_voices
    }
}
