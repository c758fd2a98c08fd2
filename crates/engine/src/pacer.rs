//! Tick pacing: the only place the loop suspends.

use std::time::Duration;

pub trait Pacer {
    /// Block for `delay` (or pretend to, in tests).
    fn wait(&mut self, delay: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Records requested delays without sleeping.
#[derive(Debug, Default, Clone)]
pub struct RecordingPacer {
    waits: Vec<Duration>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> &[Duration] {
        &self.waits
    }

    pub fn total(&self) -> Duration {
        self.waits.iter().sum()
    }
}

impl Pacer for RecordingPacer {
    fn wait(&mut self, delay: Duration) {
        self.waits.push(delay);
    }
}
