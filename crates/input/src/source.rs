//! Input sources: the live terminal and a scripted queue.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event;

use crate::map::decode_event;
use crate::types::{InputBatch, InputEvent, InputSource};

/// Drains pending crossterm events without blocking.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn poll(&mut self) -> Result<InputBatch> {
        let mut batch = InputBatch::new();
        // Stop at capacity; the rest stays queued for the next poll.
        while !batch.is_full() && event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            match decode_event(&ev) {
                Ok(input) => batch.push(input),
                Err(err) => tracing::trace!(%err, "ignoring terminal event"),
            }
        }
        Ok(batch)
    }
}

/// Replays pre-recorded batches, one per poll. Empty once exhausted.
#[derive(Debug, Clone, Default)]
pub struct QueuedInput {
    batches: VecDeque<Vec<InputEvent>>,
    polls: usize,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the events returned by one future poll.
    pub fn push_batch<I>(&mut self, events: I) -> &mut Self
    where
        I: IntoIterator<Item = InputEvent>,
    {
        self.batches.push_back(events.into_iter().collect());
        self
    }

    /// Queue a poll that returns nothing.
    pub fn push_idle(&mut self) -> &mut Self {
        self.batches.push_back(Vec::new());
        self
    }

    pub fn remaining(&self) -> usize {
        self.batches.len()
    }

    /// Number of polls served so far.
    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl InputSource for QueuedInput {
    fn poll(&mut self) -> Result<InputBatch> {
        self.polls += 1;
        let mut batch = InputBatch::new();
        if let Some(events) = self.batches.pop_front() {
            for ev in events {
                if batch.try_push(ev).is_err() {
                    break;
                }
            }
        }
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn queued_input_serves_batches_in_order() {
        let mut input = QueuedInput::new();
        input
            .push_batch([InputEvent::ConfirmStart])
            .push_idle()
            .push_batch([
                InputEvent::Direction(Direction::Left),
                InputEvent::Direction(Direction::Down),
            ]);

        let batch = input.poll().unwrap();
        assert_eq!(batch.as_slice(), &[InputEvent::ConfirmStart]);
        assert!(input.poll().unwrap().is_empty());
        assert_eq!(
            input.poll().unwrap().as_slice(),
            &[
                InputEvent::Direction(Direction::Left),
                InputEvent::Direction(Direction::Down)
            ]
        );
        assert!(input.poll().unwrap().is_empty());
        assert_eq!(input.polls(), 4);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn queued_input_truncates_oversized_batches() {
        let mut input = QueuedInput::new();
        input.push_batch(std::iter::repeat(InputEvent::ConfirmStart).take(100));
        assert_eq!(
            input.poll().unwrap().len(),
            crate::types::MAX_EVENTS_PER_POLL
        );
    }
}
