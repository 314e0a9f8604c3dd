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
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::samples::PlaybackSettings;
use crate::soundboard::{SoundSample, Soundboard};

/// The value stored in `selected` when no soundboard is selected.
pub const NO_SELECTION: i64 = -1;

/// A YAML representation of the full soundboard state.
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SoundboardsFile {
    /// The selected soundboard index, or -1 for none.
    #[serde(default = "default_selected")]
    selected: i64,

    /// Whether hotkey-triggered playback is muted.
    #[serde(default)]
    hotkeys_muted: bool,

    /// The soundboards, in their sorted order.
    #[serde(default)]
    soundboards: Vec<SoundboardEntry>,
}

fn default_selected() -> i64 {
    NO_SELECTION
}

/// A YAML representation of a soundboard.
#[derive(Deserialize, Serialize, Debug)]
pub(crate) struct SoundboardEntry {
    name: String,

    #[serde(default)]
    samples: Vec<SampleEntry>,
}

/// A YAML representation of a sample.
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SampleEntry {
    name: String,

    file_path: PathBuf,

    #[serde(flatten)]
    settings: PlaybackSettings,
}

/// The in-memory state a soundboards file decodes into.
#[derive(Debug, Default)]
pub(crate) struct SoundboardsState {
    pub selected: Option<usize>,
    pub hotkeys_muted: bool,
    pub soundboards: Vec<Soundboard>,
}

impl SoundboardsFile {
    /// Captures the given state for serialization.
    pub fn from_state(
        selected: Option<usize>,
        hotkeys_muted: bool,
        soundboards: &[Soundboard],
    ) -> SoundboardsFile {
        SoundboardsFile {
            selected: selected.map_or(NO_SELECTION, |index| index as i64),
            hotkeys_muted,
            soundboards: soundboards.iter().map(SoundboardEntry::from).collect(),
        }
    }

    /// Converts the file into in-memory state. A stored selection that doesn't point at a
    /// soundboard is dropped rather than carried into memory.
    pub fn into_state(self) -> SoundboardsState {
        let soundboards: Vec<Soundboard> = self
            .soundboards
            .into_iter()
            .map(SoundboardEntry::into_soundboard)
            .collect();

        let selected = match self.selected {
            NO_SELECTION => None,
            index if index >= 0 && (index as u64) < soundboards.len() as u64 => {
                Some(index as usize)
            }
            index => {
                warn!(
                    selected = index,
                    soundboards = soundboards.len(),
                    "Stored selection is out of range, ignoring it"
                );
                None
            }
        };

        SoundboardsState {
            selected,
            hotkeys_muted: self.hotkeys_muted,
            soundboards,
        }
    }
}

impl From<&Soundboard> for SoundboardEntry {
    fn from(soundboard: &Soundboard) -> Self {
        SoundboardEntry {
            name: soundboard.name().to_string(),
            samples: soundboard.samples().iter().map(SampleEntry::from).collect(),
        }
    }
}

impl SoundboardEntry {
    fn into_soundboard(self) -> Soundboard {
        Soundboard::with_samples(
            self.name,
            self.samples
                .into_iter()
                .map(|sample| {
                    SoundSample::with_settings(sample.name, sample.file_path, sample.settings)
                })
                .collect(),
        )
    }
}

impl From<&SoundSample> for SampleEntry {
    fn from(sample: &SoundSample) -> Self {
        SampleEntry {
            name: sample.name().to_string(),
            file_path: sample.file_path().to_path_buf(),
            settings: sample.settings().clone(),
        }
    }
}
