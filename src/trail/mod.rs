// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the mosaic generator.
//!
//! Every tile assignment made during search is recorded on the trail as the
//! tile index and the digit it held before. Rewinding to a checkpoint replays
//! those records in reverse, restoring the grid exactly.

/// A single entry in the trail, recording one tile assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailEntry {
    /// Index of the tile that was assigned.
    pub index: usize,
    /// The digit the tile held before the assignment.
    pub old_value: u8,
}

/// The trail of tile assignments since the search began.
///
/// A checkpoint is simply the trail length at some moment; the engine keeps
/// one per stack entry and rewinds to it on backtracking.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current position, for a later [`rewind_to`](Self::rewind_to).
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Record that tile `index` held `old_value` before being changed.
    pub fn record_change(&mut self, index: usize, old_value: u8) {
        self.entries.push(TrailEntry { index, old_value });
    }

    /// Undo every change made since `checkpoint`, most recent first.
    ///
    /// `restore` is called once per undone entry. A checkpoint at or beyond
    /// the current length is a no-op.
    pub fn rewind_to(&mut self, checkpoint: usize, mut restore: impl FnMut(TrailEntry)) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                restore(entry);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_new() {
        let trail = Trail::new();
        assert_eq!(trail.len(), 0);
        assert_eq!(trail.checkpoint(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_rewind_restores_in_reverse() {
        let mut tiles = [0u8; 4];
        let mut trail = Trail::new();

        trail.record_change(1, tiles[1]);
        tiles[1] = 2;
        let checkpoint = trail.checkpoint();
        assert_eq!(checkpoint, 1);

        trail.record_change(2, tiles[2]);
        tiles[2] = 1;
        trail.record_change(2, tiles[2]);
        tiles[2] = 5;
        assert_eq!(tiles, [0, 2, 5, 0]);

        trail.rewind_to(checkpoint, |entry| tiles[entry.index] = entry.old_value);
        assert_eq!(tiles, [0, 2, 0, 0]);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_nested_checkpoints() {
        let mut tiles = [0u8; 3];
        let mut trail = Trail::new();

        let outer = trail.checkpoint();
        trail.record_change(0, tiles[0]);
        tiles[0] = 2;
        let inner = trail.checkpoint();
        trail.record_change(1, tiles[1]);
        tiles[1] = 1;

        trail.rewind_to(inner, |e| tiles[e.index] = e.old_value);
        assert_eq!(tiles, [2, 0, 0]);
        trail.rewind_to(outer, |e| tiles[e.index] = e.old_value);
        assert_eq!(tiles, [0, 0, 0]);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_rewind_past_end_is_noop() {
        let mut trail = Trail::new();
        trail.record_change(0, 0);
        let mut calls = 0;
        trail.rewind_to(5, |_| calls += 1);
        assert_eq!(calls, 0);
        assert_eq!(trail.len(), 1);
    }
}
