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

//! Soundboards and the samples they trigger.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::samples::PlaybackSettings;

/// Global sample ID counter.
static NEXT_SAMPLE_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies a sample for as long as it lives in memory. The playback engine keys its
/// active playbacks by this ID, so it must never be derived from where the sample is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SampleId(u64);

impl SampleId {
    fn next() -> SampleId {
        SampleId(NEXT_SAMPLE_ID.fetch_add(1, Ordering::SeqCst))
    }

    /// Returns the raw ID value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sample#{}", self.0)
    }
}

/// A single sound clip plus the settings used to play it.
#[derive(Clone, Debug)]
pub struct SoundSample {
    /// The stable identity of this sample.
    id: SampleId,
    /// The name shown on the sample's button.
    name: String,
    /// The absolute path to the audio file.
    file_path: PathBuf,
    /// How the sample should be played.
    settings: PlaybackSettings,
}

impl SoundSample {
    /// Creates a new sample with default playback settings.
    pub fn new(name: impl Into<String>, file_path: impl Into<PathBuf>) -> SoundSample {
        SoundSample::with_settings(name, file_path, PlaybackSettings::default())
    }

    /// Creates a new sample with the given playback settings.
    pub fn with_settings(
        name: impl Into<String>,
        file_path: impl Into<PathBuf>,
        settings: PlaybackSettings,
    ) -> SoundSample {
        SoundSample {
            id: SampleId::next(),
            name: name.into(),
            file_path: file_path.into(),
            settings,
        }
    }

    pub fn id(&self) -> SampleId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn set_file_path(&mut self, file_path: impl Into<PathBuf>) {
        self.file_path = file_path.into();
    }

    pub fn settings(&self) -> &PlaybackSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut PlaybackSettings {
        &mut self.settings
    }
}

/// A named group of samples. Samples keep the order they were added in, which is the order
/// their triggers are laid out in.
#[derive(Clone, Debug)]
pub struct Soundboard {
    name: String,
    samples: Vec<SoundSample>,
}

impl fmt::Display for Soundboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (samples: {})", self.name, self.samples.len())
    }
}

impl Soundboard {
    /// Creates an empty soundboard.
    pub fn new(name: impl Into<String>) -> Soundboard {
        Soundboard::with_samples(name, Vec::new())
    }

    /// Creates a soundboard holding the given samples.
    pub fn with_samples(name: impl Into<String>, samples: Vec<SoundSample>) -> Soundboard {
        Soundboard {
            name: name.into(),
            samples,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Gets the samples in trigger order.
    pub fn samples(&self) -> &[SoundSample] {
        &self.samples
    }

    /// Gets the sample with the given ID.
    pub fn sample(&self, id: SampleId) -> Option<&SoundSample> {
        self.samples.iter().find(|sample| sample.id == id)
    }

    pub(crate) fn sample_mut(&mut self, id: SampleId) -> Option<&mut SoundSample> {
        self.samples.iter_mut().find(|sample| sample.id == id)
    }

    /// Appends a sample and returns a reference to it.
    pub(crate) fn push_sample(&mut self, sample: SoundSample) -> &SoundSample {
        self.samples.push(sample);
        &self.samples[self.samples.len() - 1]
    }

    /// Removes the sample with the given ID, keeping the order of the rest.
    pub(crate) fn remove_sample(&mut self, id: SampleId) -> Option<SoundSample> {
        let position = self.samples.iter().position(|sample| sample.id == id)?;
        Some(self.samples.remove(position))
    }
}
