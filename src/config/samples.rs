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
use serde::{Deserialize, Serialize};

/// Default gain applied to a sample (unity).
pub const DEFAULT_GAIN: f32 = 1.0;

/// Default fade time in milliseconds.
pub const DEFAULT_FADE_TIME_MS: u32 = 50;

/// Default button colour (opaque mid grey, ARGB).
pub const DEFAULT_BUTTON_COLOUR: u32 = 0xFF5A5A5A;

/// Playback configuration for a sound sample. The soundboard core only stores these and hands
/// them to the playback engine, but every field must survive a save and load unchanged.
#[derive(Deserialize, Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSettings {
    /// Linear gain applied during playback.
    #[serde(default = "default_gain")]
    pub gain: f32,

    /// Whether the sample loops until stopped.
    #[serde(default, rename = "loop")]
    pub looping: bool,

    /// Whether playback fades in.
    #[serde(default)]
    pub fade_in: bool,

    /// Whether playback fades out when stopped.
    #[serde(default)]
    pub fade_out: bool,

    #[serde(default = "default_fade_time_ms")]
    pub fade_in_ms: u32,

    #[serde(default = "default_fade_time_ms")]
    pub fade_out_ms: u32,

    /// ARGB colour of the sample's button.
    #[serde(default = "default_button_colour")]
    pub button_colour: u32,

    /// Key code of the hotkey bound to this sample.
    #[serde(default)]
    pub hotkey: Option<i32>,

    /// How this sample interacts with other playing samples.
    #[serde(default)]
    pub playback_behaviour: PlaybackBehaviour,

    /// What happens when the sample is triggered again.
    #[serde(default)]
    pub replay_behaviour: ReplayBehaviour,

    /// Offset into the file at which playback starts.
    #[serde(default)]
    pub start_time_ms: u64,

    /// Offset into the file at which playback ends. Plays to the end of the file if unset.
    #[serde(default)]
    pub end_time_ms: Option<u64>,
}

fn default_gain() -> f32 {
    DEFAULT_GAIN
}

fn default_fade_time_ms() -> u32 {
    DEFAULT_FADE_TIME_MS
}

fn default_button_colour() -> u32 {
    DEFAULT_BUTTON_COLOUR
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        PlaybackSettings {
            gain: DEFAULT_GAIN,
            looping: false,
            fade_in: false,
            fade_out: false,
            fade_in_ms: DEFAULT_FADE_TIME_MS,
            fade_out_ms: DEFAULT_FADE_TIME_MS,
            button_colour: DEFAULT_BUTTON_COLOUR,
            hotkey: None,
            playback_behaviour: PlaybackBehaviour::default(),
            replay_behaviour: ReplayBehaviour::default(),
            start_time_ms: 0,
            end_time_ms: None,
        }
    }
}

/// How a triggered sample interacts with samples that are already playing.
#[derive(Deserialize, Clone, Copy, Serialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackBehaviour {
    /// Play alongside anything else that is playing.
    #[default]
    Simultaneous,
    /// Wait for the currently playing sample to finish.
    BackToBack,
    /// Stop every other sample before playing.
    StopOthers,
}

/// Behavior when a sample is triggered while it's already playing.
#[derive(Deserialize, Clone, Copy, Serialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReplayBehaviour {
    /// Restart the sample from its start time.
    #[default]
    ReplayFromStart,
    /// Resume from wherever the sample last stopped.
    ContinueFromLastPosition,
}
