use super::snapshot::Snapshot;
use std::collections::VecDeque;

/// Maximum number of snapshots kept on each stack.
pub const MAX_HISTORY_DEPTH: usize = 50;

/// Bounded undo/redo snapshot stacks.
///
/// Both stacks hold at most `limit` entries; pushing onto a full stack drops
/// its oldest entry.
#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: VecDeque<Snapshot>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(MAX_HISTORY_DEPTH)
    }
}

impl History {
    /// Creates empty stacks holding up to `limit` entries, clamped to `1..=MAX_HISTORY_DEPTH`.
    pub fn new(limit: usize) -> Self {
        let limit = limit.clamp(1, MAX_HISTORY_DEPTH);
        Self {
            undo: VecDeque::with_capacity(limit),
            redo: VecDeque::with_capacity(limit),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Records the state before a new edit: pushes onto the undo stack and
    /// invalidates every redo entry.
    pub fn record(&mut self, before: Snapshot) {
        self.push_undo(before);
        self.redo.clear();
    }

    pub fn push_undo(&mut self, snapshot: Snapshot) {
        push_bounded(&mut self.undo, snapshot, self.limit);
    }

    pub fn push_redo(&mut self, snapshot: Snapshot) {
        push_bounded(&mut self.redo, snapshot, self.limit);
    }

    pub fn pop_undo(&mut self) -> Option<Snapshot> {
        self.undo.pop_back()
    }

    pub fn pop_redo(&mut self) -> Option<Snapshot> {
        self.redo.pop_back()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Most recent undo entry, if any.
    pub fn peek_undo(&self) -> Option<&Snapshot> {
        self.undo.back()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

fn push_bounded(stack: &mut VecDeque<Snapshot>, snapshot: Snapshot, limit: usize) {
    while stack.len() >= limit {
        stack.pop_front();
    }
    stack.push_back(snapshot);
}
