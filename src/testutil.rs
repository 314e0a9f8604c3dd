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
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::config::samples::PlaybackSettings;
use crate::playback::{ManagerId, PlaybackEngine};
use crate::soundboard::{SampleId, SoundSample};

/// A call made to the recording engine.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineCall {
    Unload(ManagerId),
    UnloadAll,
    Reload(ManagerId, PlaybackSettings),
}

/// A playback engine that doesn't play anything. Tests mark samples as playing and inspect the
/// calls the processor made.
#[derive(Default)]
pub struct RecordingEngine {
    next_manager: AtomicU64,
    active: Mutex<HashMap<SampleId, ManagerId>>,
    calls: Mutex<Vec<EngineCall>>,
}

impl RecordingEngine {
    pub fn new() -> RecordingEngine {
        RecordingEngine::default()
    }

    /// Marks the sample as playing and returns its manager.
    pub fn play(&self, sample: SampleId) -> ManagerId {
        let manager = ManagerId::new(self.next_manager.fetch_add(1, Ordering::SeqCst) + 1);
        self.active.lock().insert(sample, manager);
        manager
    }

    pub fn is_playing(&self, sample: SampleId) -> bool {
        self.active.lock().contains_key(&sample)
    }

    /// Returns every call made so far.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().clone()
    }
}

impl PlaybackEngine for RecordingEngine {
    fn active_manager(&self, sample: SampleId) -> Option<ManagerId> {
        self.active.lock().get(&sample).copied()
    }

    fn unload(&self, manager: ManagerId) {
        self.active.lock().retain(|_, active| *active != manager);
        self.calls.lock().push(EngineCall::Unload(manager));
    }

    fn unload_all(&self) {
        self.active.lock().clear();
        self.calls.lock().push(EngineCall::UnloadAll);
    }

    fn reload_playback_settings(&self, manager: ManagerId, sample: &SoundSample) {
        self.calls
            .lock()
            .push(EngineCall::Reload(manager, sample.settings().clone()));
    }

    fn unload_sample(&self, sample: SampleId) -> Option<ManagerId> {
        let manager = self.active.lock().remove(&sample)?;
        self.calls.lock().push(EngineCall::Unload(manager));
        Some(manager)
    }

    fn reload_sample(&self, sample: &SoundSample) -> Option<ManagerId> {
        let manager = self.active.lock().get(&sample.id()).copied()?;
        self.reload_playback_settings(manager, sample);
        Some(manager)
    }
}
