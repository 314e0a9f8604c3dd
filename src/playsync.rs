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
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Condvar, Mutex};

/// A stop handle is shared between the voice registry and whatever renders a voice. The
/// renderer is expected to check or wait on it and release the voice once it's stopped.
#[derive(Clone, Default)]
pub struct StopHandle {
    /// Set to true once the voice should stop.
    stopped: Arc<Mutex<bool>>,
    /// Wakes anyone waiting for the stop.
    condvar: Arc<Condvar>,
}

impl StopHandle {
    /// Creates a new stop handle.
    pub fn new() -> StopHandle {
        StopHandle::default()
    }

    /// Returns true if the voice has been stopped.
    pub fn is_stopped(&self) -> bool {
        *self.stopped.lock()
    }

    /// Stops the voice. Stopping twice is harmless.
    pub fn stop(&self) {
        let mut stopped = self.stopped.lock();
        if !*stopped {
            *stopped = true;
            self.condvar.notify_all();
        }
    }

    /// Waits up to the timeout for the voice to be stopped. Returns true if it was.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let mut stopped = self.stopped.lock();
        self.condvar
            .wait_while_for(&mut stopped, |stopped| !*stopped, timeout);
        *stopped
    }
}

impl std::fmt::Debug for StopHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopHandle")
            .field("stopped", &self.is_stopped())
            .finish()
    }
}
