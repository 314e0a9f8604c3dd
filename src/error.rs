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

use crate::soundboard::SampleId;

/// Errors returned by soundboard operations.
#[derive(Debug, thiserror::Error)]
pub enum SoundboardError {
    #[error("Soundboard index {index} is out of range (soundboards: {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("No soundboard is selected")]
    NoSelection,

    #[error("No sample found with ID {0}")]
    SampleNotFound(SampleId),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Errors reading or writing the soundboards file.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Unable to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to replace {}: {source}", path.display())]
    Replace {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to serialize soundboards: {0}")]
    Serialize(#[from] serde_yml::Error),
}
