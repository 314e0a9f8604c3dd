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

//! Persistent soundboard collections kept in step with a live sample playback engine.
//!
//! A [SoundboardProcessor] owns an ordered list of [Soundboard]s, each holding
//! [SoundSample]s with their [PlaybackSettings]. Every change is written to a YAML file in
//! a support directory, and any sample that is about to change or disappear is first
//! reconciled with the [PlaybackEngine] playing it.

pub mod config;
mod error;
pub mod playback;
mod playsync;
mod processor;
mod soundboard;
mod store;
#[cfg(test)]
mod testutil;

pub use crate::config::samples::{PlaybackBehaviour, PlaybackSettings, ReplayBehaviour};
pub use crate::config::{ConfigError, Settings};
pub use error::{PersistenceError, SoundboardError};
pub use playback::{ManagerId, PlaybackEngine, VoiceRegistry};
pub use playsync::StopHandle;
pub use processor::SoundboardProcessor;
pub use soundboard::{SampleId, SoundSample, Soundboard};
pub use store::LoadStatus;
