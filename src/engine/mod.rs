//! Document ownership and undo/redo history.
//!
//! [`Engine`] is the only place a live [`Document`] is replaced. Each
//! undoable command snapshots the pre-edit state, clears the redo stack and
//! swaps in the reducer's result; cursor-only commands bypass the history
//! entirely so that switching tools or colors is never undoable.

mod history;
mod snapshot;

pub use history::{History, MAX_HISTORY_DEPTH};
pub use snapshot::Snapshot;

use crate::command::{self, Command};
use crate::config::Config;
use crate::draw::Document;
use log::debug;

/// Owns a document and its bounded undo/redo history.
#[derive(Debug, Clone)]
pub struct Engine {
    document: Document,
    history: History,
}

impl Engine {
    /// Wraps `document` with an empty history of [`MAX_HISTORY_DEPTH`] entries.
    pub fn new(document: Document) -> Self {
        Self::with_history_limit(document, MAX_HISTORY_DEPTH)
    }

    /// Wraps `document` with an empty history of at most `limit` entries per stack.
    pub fn with_history_limit(document: Document, limit: usize) -> Self {
        Self {
            document,
            history: History::new(limit),
        }
    }

    /// Builds a fresh document and history from configuration defaults.
    pub fn from_config(config: &Config) -> Self {
        Self::with_history_limit(config.document(), config.history.max_depth)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.undo_depth() > 0
    }

    pub fn can_redo(&self) -> bool {
        self.history.redo_depth() > 0
    }

    /// Applies a command. Returns `true` if the document changed.
    ///
    /// Commands that do not apply (bad references, off-canvas coordinates,
    /// values already set, empty history) leave both the document and the
    /// history untouched.
    pub fn dispatch(&mut self, command: &Command) -> bool {
        match command {
            Command::Undo => return self.undo(),
            Command::Redo => return self.redo(),
            _ => {}
        }

        let Some(next) = command::reduce(&self.document, command) else {
            debug!("{} had no effect", command.name());
            return false;
        };

        if command.is_undoable() {
            self.history.record(Snapshot::capture(&self.document));
            debug!(
                "{} applied (undo depth {})",
                command.name(),
                self.history.undo_depth()
            );
        } else {
            debug!("{} applied", command.name());
        }

        self.document = next;
        true
    }

    /// Restores the state before the most recent undoable command.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop_undo() else {
            debug!("Nothing to undo");
            return false;
        };
        self.history.push_redo(Snapshot::capture(&self.document));
        previous.restore(&mut self.document);
        debug!(
            "Undo (undo depth {}, redo depth {})",
            self.history.undo_depth(),
            self.history.redo_depth()
        );
        true
    }

    /// Re-applies the most recently undone state.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.pop_redo() else {
            debug!("Nothing to redo");
            return false;
        };
        self.history.push_undo(Snapshot::capture(&self.document));
        next.restore(&mut self.document);
        debug!(
            "Redo (undo depth {}, redo depth {})",
            self.history.undo_depth(),
            self.history.redo_depth()
        );
        true
    }

    /// Drops all undo and redo entries.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
