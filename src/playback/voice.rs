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

//! Voice bookkeeping for soundboard sample playback.
//!
//! Tracks which samples are playing, enforces the voice limit and hands out stop handles to
//! whatever renders the audio.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::{ManagerId, PlaybackEngine};
use crate::config::samples::{PlaybackBehaviour, PlaybackSettings};
use crate::config::Settings;
use crate::playsync::StopHandle;
use crate::soundboard::{SampleId, SoundSample};

/// Global manager ID counter.
static NEXT_MANAGER_ID: AtomicU64 = AtomicU64::new(1);

/// An active voice playing a sample.
struct Voice {
    manager: ManagerId,
    sample: SampleId,
    /// The sample name, for logging.
    sample_name: String,
    /// The settings the voice is currently playing with.
    settings: PlaybackSettings,
    /// When this voice started playing.
    start_time: Instant,
    stop_handle: StopHandle,
}

/// Tracks active sample voices. A sample has at most one voice: triggering a sample that is
/// already playing cuts the old voice.
pub struct VoiceRegistry {
    voices: RwLock<Vec<Voice>>,
    /// Global maximum voices limit. Zero means unlimited.
    max_voices: u32,
}

impl VoiceRegistry {
    /// Creates a new voice registry.
    pub fn new(max_voices: u32) -> VoiceRegistry {
        VoiceRegistry {
            voices: RwLock::new(Vec::new()),
            max_voices,
        }
    }

    /// Creates a voice registry with the voice limit from the settings.
    pub fn from_settings(settings: &Settings) -> VoiceRegistry {
        VoiceRegistry::new(settings.max_voices())
    }

    /// Starts a voice for the sample and returns the manager responsible for it.
    pub fn trigger(&self, sample: &SoundSample) -> ManagerId {
        let manager = ManagerId::new(NEXT_MANAGER_ID.fetch_add(1, Ordering::SeqCst));
        let mut to_stop = Vec::new();

        let mut voices = self.voices.write();
        if sample.settings().playback_behaviour == PlaybackBehaviour::StopOthers {
            to_stop.extend(voices.drain(..).map(|v| v.stop_handle));
        } else {
            let mut i = 0;
            while i < voices.len() {
                if voices[i].sample == sample.id() {
                    to_stop.push(voices.remove(i).stop_handle);
                } else {
                    i += 1;
                }
            }
        }

        if self.max_voices > 0 && voices.len() >= self.max_voices as usize {
            // Steal the oldest voice.
            if let Some(oldest) = voices
                .iter()
                .enumerate()
                .min_by_key(|(_, v)| v.start_time)
                .map(|(i, _)| i)
            {
                let stolen = voices.remove(oldest);
                warn!(
                    max_voices = self.max_voices,
                    sample = %stolen.sample_name,
                    "Voice limit reached, stealing oldest"
                );
                to_stop.push(stolen.stop_handle);
            }
        }

        voices.push(Voice {
            manager,
            sample: sample.id(),
            sample_name: sample.name().to_string(),
            settings: sample.settings().clone(),
            start_time: Instant::now(),
            stop_handle: StopHandle::new(),
        });
        drop(voices);

        for handle in to_stop {
            handle.stop();
        }

        debug!(sample = sample.name(), %manager, "Sample triggered");
        manager
    }

    /// Returns the settings the manager is playing with.
    pub fn settings(&self, manager: ManagerId) -> Option<PlaybackSettings> {
        self.voices
            .read()
            .iter()
            .find(|v| v.manager == manager)
            .map(|v| v.settings.clone())
    }

    /// Returns the stop handle of the manager's voice.
    pub fn stop_handle(&self, manager: ManagerId) -> Option<StopHandle> {
        self.voices
            .read()
            .iter()
            .find(|v| v.manager == manager)
            .map(|v| v.stop_handle.clone())
    }

    /// Returns the number of active voices.
    pub fn active_count(&self) -> usize {
        self.voices.read().len()
    }
}

impl PlaybackEngine for VoiceRegistry {
    fn active_manager(&self, sample: SampleId) -> Option<ManagerId> {
        self.voices
            .read()
            .iter()
            .find(|v| v.sample == sample)
            .map(|v| v.manager)
    }

    fn unload(&self, manager: ManagerId) {
        let mut voices = self.voices.write();
        let Some(position) = voices.iter().position(|v| v.manager == manager) else {
            return;
        };
        let voice = voices.remove(position);
        drop(voices);

        voice.stop_handle.stop();
        debug!(sample = %voice.sample_name, %manager, "Voice unloaded");
    }

    fn unload_all(&self) {
        let stopped: Vec<StopHandle> = self
            .voices
            .write()
            .drain(..)
            .map(|v| v.stop_handle)
            .collect();

        let stopped_count = stopped.len();
        for handle in stopped {
            handle.stop();
        }

        if stopped_count > 0 {
            info!(stopped = stopped_count, "All samples stopped");
        }
    }

    fn reload_playback_settings(&self, manager: ManagerId, sample: &SoundSample) {
        let mut voices = self.voices.write();
        if let Some(voice) = voices.iter_mut().find(|v| v.manager == manager) {
            voice.settings = sample.settings().clone();
            voice.sample_name = sample.name().to_string();
            debug!(sample = sample.name(), %manager, "Playback settings reloaded");
        }
    }

    fn unload_sample(&self, sample: SampleId) -> Option<ManagerId> {
        let mut voices = self.voices.write();
        let position = voices.iter().position(|v| v.sample == sample)?;
        let voice = voices.remove(position);
        drop(voices);

        voice.stop_handle.stop();
        debug!(sample = %voice.sample_name, manager = %voice.manager, "Voice unloaded");
        Some(voice.manager)
    }

    fn reload_sample(&self, sample: &SoundSample) -> Option<ManagerId> {
        let mut voices = self.voices.write();
        let voice = voices.iter_mut().find(|v| v.sample == sample.id())?;
        voice.settings = sample.settings().clone();
        voice.sample_name = sample.name().to_string();
        debug!(sample = sample.name(), manager = %voice.manager, "Playback settings reloaded");
        Some(voice.manager)
    }
}

impl std::fmt::Debug for VoiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceRegistry")
            .field("active_voices", &self.active_count())
            .field("max_voices", &self.max_voices)
            .finish()
    }
}
