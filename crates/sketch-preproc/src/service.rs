//! Pass sequencing for callers that run passes concurrently.
//!
//! Each pass works on its own snapshot and may finish out of order. Only the
//! result of the most recently started pass is kept.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::config::SketchConfig;
use crate::error::PreprocessError;
use crate::imports::{imports_changed, ImportStatement};
use crate::pass::{preprocess, PreprocessedSketch};
use crate::tab::Sketch;

/// Identifies a started pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PassTicket(u64);

impl PassTicket {
    /// Sequence number of the pass, starting at 1.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct SequencerState<T> {
    issued: u64,
    latest: Option<(PassTicket, Arc<T>)>,
}

/// Last-writer-wins slot for pass results.
#[derive(Debug)]
pub struct PassSequencer<T> {
    state: Mutex<SequencerState<T>>,
}

impl<T> Default for PassSequencer<T> {
    fn default() -> Self {
        Self {
            state: Mutex::new(SequencerState {
                issued: 0,
                latest: None,
            }),
        }
    }
}

impl<T> PassSequencer<T> {
    /// Creates a sequencer with no pass started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a pass.
    pub fn begin(&self) -> PassTicket {
        let mut state = self.state.lock();
        state.issued += 1;
        PassTicket(state.issued)
    }

    /// Returns `true` if no pass was started after `ticket`.
    pub fn is_current(&self, ticket: PassTicket) -> bool {
        self.state.lock().issued == ticket.0
    }

    /// Stores the result of the pass behind `ticket` unless a newer pass was
    /// started in the meantime. Returns whether the result was kept.
    pub fn publish(&self, ticket: PassTicket, result: T) -> bool {
        let mut state = self.state.lock();
        if state.issued != ticket.0 {
            debug!(
                ticket = ticket.0,
                latest = state.issued,
                "dropping stale pass result"
            );
            return false;
        }
        state.latest = Some((ticket, Arc::new(result)));
        true
    }

    /// Returns the most recently published result.
    pub fn latest(&self) -> Option<Arc<T>> {
        self.state
            .lock()
            .latest
            .as_ref()
            .map(|(_, result)| Arc::clone(result))
    }

    /// Ticket of the most recently published result.
    pub fn latest_ticket(&self) -> Option<PassTicket> {
        self.state.lock().latest.as_ref().map(|(ticket, _)| *ticket)
    }
}

/// Runs preprocessing passes for one sketch and keeps the newest result.
#[derive(Debug)]
pub struct PreprocessService {
    config: SketchConfig,
    results: PassSequencer<PreprocessedSketch>,
}

impl PreprocessService {
    /// Creates a service running passes with `config`.
    pub fn new(config: SketchConfig) -> Self {
        Self {
            config,
            results: PassSequencer::new(),
        }
    }

    /// Configuration passes run with.
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Starts a pass; the returned ticket must be handed to [`Self::finish`].
    pub fn begin(&self) -> PassTicket {
        self.results.begin()
    }

    /// Runs the pass behind `ticket` over `snapshot`.
    ///
    /// Returns the published result, or `None` when a newer pass started
    /// while this one ran. The result's `imports_changed` compares it with
    /// the previously published pass; the first pass counts as changed when
    /// it has any import.
    pub fn finish(
        &self,
        ticket: PassTicket,
        snapshot: &Sketch,
    ) -> Result<Option<Arc<PreprocessedSketch>>, PreprocessError> {
        let mut result = preprocess(snapshot, &self.config)?;
        let previous = self.results.latest();
        let previous_imports: Vec<ImportStatement> = previous
            .as_ref()
            .map(|prev| prev.imports.iter().cloned().collect())
            .unwrap_or_default();
        let next_imports: Vec<ImportStatement> = result.imports.iter().cloned().collect();
        result.imports_changed = imports_changed(&previous_imports, &next_imports);
        if result.imports_changed {
            debug!(ticket = ticket.get(), "sketch imports changed");
        }
        if !self.results.publish(ticket, result) {
            return Ok(None);
        }
        Ok(self.results.latest())
    }

    /// Starts and runs a pass in one go.
    pub fn run(
        &self,
        snapshot: &Sketch,
    ) -> Result<Option<Arc<PreprocessedSketch>>, PreprocessError> {
        let ticket = self.begin();
        self.finish(ticket, snapshot)
    }

    /// Returns the newest published result.
    pub fn latest(&self) -> Option<Arc<PreprocessedSketch>> {
        self.results.latest()
    }
}
