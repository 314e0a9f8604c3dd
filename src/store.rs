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

//! Reading and writing the soundboards file.
//!
//! Writes go to a temporary file next to the target which is then renamed over it, so a crash
//! mid-write leaves either the old file or the new one, never a truncated one.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::config::soundboards::{SoundboardsFile, SoundboardsState};
use crate::error::PersistenceError;

/// The outcome of loading the soundboards file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    /// There was no file, so the state is empty.
    Missing,
    /// The file was read successfully.
    Loaded,
    /// The file could not be parsed and the state was reset to empty.
    Recovered,
}

/// Writes the given soundboards file to the path, replacing whatever is there.
pub(crate) fn write(
    path: &Path,
    file: &SoundboardsFile,
    sync: bool,
) -> Result<(), PersistenceError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|source| PersistenceError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })?;

    let serialized = serde_yml::to_string(file)?;

    let write_err = |source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut temp = NamedTempFile::new_in(parent).map_err(write_err)?;
    temp.write_all(serialized.as_bytes()).map_err(write_err)?;
    temp.flush().map_err(write_err)?;
    if sync {
        temp.as_file().sync_all().map_err(write_err)?;
    }

    temp.persist(path)
        .map_err(|e| PersistenceError::Replace {
            path: path.to_path_buf(),
            source: e.error,
        })?;
    if sync {
        sync_dir(parent).map_err(|source| PersistenceError::Replace {
            path: path.to_path_buf(),
            source,
        })?;
    }

    debug!(path = ?path, bytes = serialized.len(), "Soundboards written");
    Ok(())
}

/// Syncs the directory so the rename itself survives a power failure.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Reads the soundboards file at the path. A missing file yields empty state, and so does a
/// file that can't be parsed (with a warning), since losing the selection is preferable to
/// refusing to start.
pub(crate) fn read(path: &Path) -> Result<(LoadStatus, SoundboardsState), PersistenceError> {
    let contents = match fs::read(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = ?path, "No soundboards file found");
            return Ok((LoadStatus::Missing, SoundboardsState::default()));
        }
        Err(source) => {
            return Err(PersistenceError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    // Invalid UTF-8 is reported as a parse error, so a torn file recovers like any other.
    match serde_yml::from_slice::<SoundboardsFile>(&contents) {
        Ok(file) => Ok((LoadStatus::Loaded, file.into_state())),
        Err(e) => {
            warn!(path = ?path, err = %e, "Soundboards file is malformed, starting empty");
            Ok((LoadStatus::Recovered, SoundboardsState::default()))
        }
    }
}
