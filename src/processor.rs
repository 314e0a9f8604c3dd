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

//! The soundboard processor owns every soundboard, tracks which one is selected and keeps
//! both the soundboards file and the playback engine in step with them.
//!
//! Every mutating operation follows the same pattern: check preconditions (failing without
//! touching anything), consult the playback engine for samples that are about to change or
//! disappear, mutate, re-sort, and write the whole state to disk before returning.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, span, Level, Span};

use crate::config::soundboards::SoundboardsFile;
use crate::config::Settings;
use crate::error::SoundboardError;
use crate::playback::PlaybackEngine;
use crate::soundboard::{SampleId, SoundSample, Soundboard};
use crate::store::{self, LoadStatus};


/// Owns the soundboards and keeps them sorted by name, persisted and consistent with playback.
pub struct SoundboardProcessor {
    /// The engine playing samples.
    engine: Arc<dyn PlaybackEngine>,
    /// The soundboards, sorted by name.
    soundboards: Vec<Soundboard>,
    /// The selected soundboard. Only `None` when there are no soundboards.
    selected: Option<usize>,
    /// Whether hotkey-triggered playback is muted.
    hotkeys_muted: bool,
    /// Where the soundboards are persisted.
    file_path: PathBuf,
    /// Whether writes are synced before the file is replaced.
    sync_writes: bool,
    /// The logging span.
    span: Span,
}

impl fmt::Debug for SoundboardProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoundboardProcessor")
            .field("soundboards", &self.soundboards.len())
            .field("selected", &self.selected)
            .field("hotkeys_muted", &self.hotkeys_muted)
            .field("file_path", &self.file_path)
            .finish()
    }
}

impl SoundboardProcessor {
    /// Creates a processor persisting to the default file in the support directory and loads
    /// whatever is already there.
    pub fn new(
        engine: Arc<dyn PlaybackEngine>,
        support_dir: &Path,
    ) -> Result<SoundboardProcessor, SoundboardError> {
        SoundboardProcessor::with_settings(engine, support_dir, &Settings::default())
    }

    /// Creates a processor with the given settings and loads whatever is already on disk.
    pub fn with_settings(
        engine: Arc<dyn PlaybackEngine>,
        support_dir: &Path,
        settings: &Settings,
    ) -> Result<SoundboardProcessor, SoundboardError> {
        let mut processor = SoundboardProcessor {
            engine,
            soundboards: Vec::new(),
            selected: None,
            hotkeys_muted: false,
            file_path: support_dir.join(settings.file_name()),
            sync_writes: settings.sync_writes(),
            span: span!(Level::INFO, "soundboards"),
        };
        processor.load_from_disk()?;
        Ok(processor)
    }

    /// Adds an empty soundboard, optionally selecting it. Returns the selected soundboard
    /// after the new one has been sorted into place.
    pub fn add_soundboard(
        &mut self,
        name: &str,
        select: bool,
    ) -> Result<&Soundboard, SoundboardError> {
        let span = self.span.clone();
        let _enter = span.enter();

        self.soundboards.push(Soundboard::new(name));
        if select {
            self.selected = Some(self.soundboards.len() - 1);
        }

        self.reorder_soundboards();
        info!(name, select, selected = ?self.selected, "Soundboard added.");
        self.save_to_disk()?;

        Ok(&self.soundboards[self.selected.unwrap_or(0)])
    }

    /// Renames the soundboard at the index and re-sorts.
    pub fn rename_soundboard(&mut self, index: usize, name: &str) -> Result<(), SoundboardError> {
        let span = self.span.clone();
        let _enter = span.enter();

        self.check_index(index)?;
        let previous = self.soundboards[index].name().to_string();
        self.soundboards[index].set_name(name);

        self.reorder_soundboards();
        info!(%previous, name, selected = ?self.selected, "Soundboard renamed.");
        self.save_to_disk()
    }

    /// Deletes the soundboard at the index, unloading any of its samples that are playing.
    ///
    /// The selection stays on the soundboard it was on, so deleting an earlier soundboard moves
    /// the selected index down by one instead of leaving the index where it was.
    pub fn delete_soundboard(&mut self, index: usize) -> Result<(), SoundboardError> {
        let span = self.span.clone();
        let _enter = span.enter();

        self.check_index(index)?;

        for sample in self.soundboards[index].samples() {
            if let Some(manager) = self.engine.unload_sample(sample.id()) {
                debug!(sample = sample.name(), %manager, "Unloaded playing sample.");
            }
        }

        let removed = self.soundboards.remove(index);

        // Keep the selection on the same soundboard if it survived. If it was the one deleted,
        // the next soundboard takes its place, or the new last one if it was last.
        self.selected = match self.selected {
            _ if self.soundboards.is_empty() => None,
            Some(selected) if selected > index => Some(selected - 1),
            Some(selected) => Some(selected.min(self.soundboards.len() - 1)),
            None => None,
        };

        self.reorder_soundboards();
        info!(name = removed.name(), selected = ?self.selected, "Soundboard deleted.");
        self.save_to_disk()
    }

    /// Selects the soundboard at the index. Indexes past the end select the last soundboard.
    pub fn select_soundboard(&mut self, index: usize) -> Result<(), SoundboardError> {
        let span = self.span.clone();
        let _enter = span.enter();

        self.selected = if self.soundboards.is_empty() {
            None
        } else {
            Some(index.min(self.soundboards.len() - 1))
        };

        debug!(requested = index, selected = ?self.selected, "Soundboard selected.");
        self.save_to_disk()
    }

    /// Sorts the soundboards by name, keeping the selection on the soundboard it was on
    /// rather than on its old position. Selects the first soundboard if none was selected.
    pub fn reorder_soundboards(&mut self) {
        if self.soundboards.is_empty() {
            self.selected = None;
            return;
        }

        // Work out the sorted order first so the selection can be mapped through it.
        let mut order: Vec<usize> = (0..self.soundboards.len()).collect();
        order.sort_by(|&a, &b| self.soundboards[a].name().cmp(self.soundboards[b].name()));

        self.selected = Some(
            self.selected
                .and_then(|selected| order.iter().position(|&i| i == selected))
                .unwrap_or(0),
        );

        let mut unsorted: Vec<Option<Soundboard>> =
            self.soundboards.drain(..).map(Some).collect();
        self.soundboards = order
            .into_iter()
            .filter_map(|i| unsorted[i].take())
            .collect();
    }

    /// Adds a sample to the given soundboard, or the selected one if none is given. The
    /// sample goes after every existing sample.
    pub fn add_sound_sample(
        &mut self,
        name: &str,
        file_path: &Path,
        soundboard: Option<usize>,
    ) -> Result<&SoundSample, SoundboardError> {
        let span = self.span.clone();
        let _enter = span.enter();

        let index = self.resolve_soundboard(soundboard)?;
        self.soundboards[index].push_sample(SoundSample::new(name, file_path));

        info!(
            soundboard = self.soundboards[index].name(),
            name,
            path = ?file_path,
            "Sample added."
        );
        self.save_to_disk()?;

        let samples = self.soundboards[index].samples();
        Ok(&samples[samples.len() - 1])
    }

    /// Applies the edit to the sample, persists it, and if the sample is playing, has the
    /// engine pick up the new settings without restarting it.
    pub fn edit_sound_sample<F>(&mut self, id: SampleId, edit: F) -> Result<(), SoundboardError>
    where
        F: FnOnce(&mut SoundSample),
    {
        let span = self.span.clone();
        let _enter = span.enter();

        let sample = self
            .soundboards
            .iter_mut()
            .find_map(|soundboard| soundboard.sample_mut(id))
            .ok_or(SoundboardError::SampleNotFound(id))?;
        edit(sample);

        let saved = self.save_to_disk();

        if let Some(sample) = self.sample(id) {
            if let Some(manager) = self.engine.reload_sample(sample) {
                debug!(sample = sample.name(), %manager, "Reloaded playback settings.");
            }
        }

        saved
    }

    /// Deletes the sample from the given soundboard, or the selected one if none is given,
    /// unloading it first if it is playing. Returns false if the soundboard has no such
    /// sample, in which case nothing is written.
    pub fn delete_sound_sample(
        &mut self,
        id: SampleId,
        soundboard: Option<usize>,
    ) -> Result<bool, SoundboardError> {
        let span = self.span.clone();
        let _enter = span.enter();

        let index = self.resolve_soundboard(soundboard)?;
        if self.soundboards[index].sample(id).is_none() {
            debug!(
                soundboard = self.soundboards[index].name(),
                %id,
                "Sample not found, nothing deleted."
            );
            return Ok(false);
        }

        if let Some(manager) = self.engine.unload_sample(id) {
            debug!(%id, %manager, "Unloaded playing sample.");
        }

        if let Some(removed) = self.soundboards[index].remove_sample(id) {
            info!(
                soundboard = self.soundboards[index].name(),
                name = removed.name(),
                "Sample deleted."
            );
        }
        self.save_to_disk()?;
        Ok(true)
    }

    /// Stops every sample that is playing.
    pub fn stop_all_playback(&self) {
        self.engine.unload_all();
    }

    /// Sets whether hotkey-triggered playback is muted.
    pub fn set_hotkeys_muted(&mut self, muted: bool) -> Result<(), SoundboardError> {
        self.hotkeys_muted = muted;
        info!(parent: &self.span, muted, "Hotkeys muted changed.");
        self.save_to_disk()
    }

    /// Writes the full state to the soundboards file.
    pub fn save_to_disk(&self) -> Result<(), SoundboardError> {
        store::write(
            &self.file_path,
            &SoundboardsFile::from_state(self.selected, self.hotkeys_muted, &self.soundboards),
            self.sync_writes,
        )?;
        Ok(())
    }

    /// Replaces the in-memory state with the contents of the soundboards file.
    pub fn load_from_disk(&mut self) -> Result<LoadStatus, SoundboardError> {
        let (status, state) = store::read(&self.file_path)?;

        self.soundboards = state.soundboards;
        self.selected = state.selected;
        self.hotkeys_muted = state.hotkeys_muted;
        self.reorder_soundboards();

        info!(
            parent: &self.span,
            path = ?self.file_path,
            ?status,
            soundboards = self.soundboards.len(),
            selected = ?self.selected,
            "Soundboards loaded."
        );
        Ok(status)
    }

    /// Gets the soundboards, sorted by name.
    pub fn soundboards(&self) -> &[Soundboard] {
        &self.soundboards
    }

    pub fn soundboard(&self, index: usize) -> Option<&Soundboard> {
        self.soundboards.get(index)
    }

    /// Returns the number of soundboards.
    pub fn len(&self) -> usize {
        self.soundboards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.soundboards.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_soundboard(&self) -> Option<&Soundboard> {
        self.selected.and_then(|index| self.soundboards.get(index))
    }

    /// Finds a sample on any soundboard.
    pub fn sample(&self, id: SampleId) -> Option<&SoundSample> {
        self.soundboards
            .iter()
            .find_map(|soundboard| soundboard.sample(id))
    }

    pub fn hotkeys_muted(&self) -> bool {
        self.hotkeys_muted
    }

    /// Gets the path of the soundboards file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn check_index(&self, index: usize) -> Result<(), SoundboardError> {
        if index < self.soundboards.len() {
            Ok(())
        } else {
            Err(SoundboardError::OutOfRange {
                index,
                len: self.soundboards.len(),
            })
        }
    }

    /// Resolves the soundboard a sample operation applies to.
    fn resolve_soundboard(&self, soundboard: Option<usize>) -> Result<usize, SoundboardError> {
        let index = soundboard
            .or(self.selected)
            .ok_or(SoundboardError::NoSelection)?;
        self.check_index(index)?;
        Ok(index)
    }
}
