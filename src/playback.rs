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

//! The playback engine seam.
//!
//! Soundboards don't play anything themselves. Whatever does keeps a mapping from the samples
//! it is currently playing to the managers playing them, and the soundboard processor consults
//! that mapping before it changes or destroys a sample.

use std::fmt;

use crate::soundboard::{SampleId, SoundSample};

mod voice;

pub use voice::VoiceRegistry;

/// Identifies one active playback of a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ManagerId(u64);

impl ManagerId {
    pub(crate) fn new(id: u64) -> ManagerId {
        ManagerId(id)
    }

    /// Returns the raw ID value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "manager#{}", self.0)
    }
}

pub trait PlaybackEngine: Send + Sync {
    /// Returns the manager currently playing the given sample, if it is playing.
    fn active_manager(&self, sample: SampleId) -> Option<ManagerId>;

    /// Stops and releases one active playback.
    fn unload(&self, manager: ManagerId);

    /// Stops every active playback.
    fn unload_all(&self);

    /// Re-reads the settings of a sample that is playing without stopping it.
    fn reload_playback_settings(&self, manager: ManagerId, sample: &SoundSample);

    /// Stops and releases whatever is playing the sample. Finding the manager and unloading it
    /// must happen as one step, so a retrigger can't slip in between. Returns the manager that
    /// was unloaded, if the sample was playing.
    fn unload_sample(&self, sample: SampleId) -> Option<ManagerId>;

    /// Hands the sample's current settings to whatever is playing it, as one step. Returns the
    /// manager that picked them up, if the sample was playing.
    fn reload_sample(&self, sample: &SoundSample) -> Option<ManagerId>;
}
