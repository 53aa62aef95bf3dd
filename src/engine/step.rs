// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Step checkpoints: per-index highlight categories and the renderer seam.
//!
//! A checkpoint hands the renderer the current array snapshot plus one [`Highlight`] per index.
//! Assignments are transient; they are rebuilt for every checkpoint and never persisted.

use std::time::Duration;

/// Visual category assigned to one bar for one checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    /// Resting bar (the original's skyblue).
    #[default]
    Idle,
    /// Index touched by the current comparison/swap (the original's red).
    Active,
    /// Index inside the range a merge is writing back into (the original's purple).
    Merging,
    /// Uniform final pass after a completed run (the original's green).
    Sorted,
}

impl Highlight {
    /// A uniform assignment of `category` across `len` indices.
    pub fn uniform(len: usize, category: Highlight) -> Vec<Highlight> {
        vec![category; len]
    }

    /// Marks the given indices [`Highlight::Active`] on an otherwise idle assignment.
    ///
    /// Out-of-range indices are ignored; duplicates are harmless.
    pub fn active(len: usize, indices: impl IntoIterator<Item = usize>) -> Vec<Highlight> {
        let mut assignment = vec![Highlight::Idle; len];
        for index in indices {
            if let Some(slot) = assignment.get_mut(index) {
                *slot = Highlight::Active;
            }
        }
        assignment
    }

    /// Marks the inclusive range `[lo, hi]` as [`Highlight::Merging`].
    pub fn merging_span(len: usize, lo: usize, hi: usize) -> Vec<Highlight> {
        let mut assignment = vec![Highlight::Idle; len];
        for slot in assignment.iter_mut().take(len.min(hi + 1)).skip(lo) {
            *slot = Highlight::Merging;
        }
        assignment
    }
}

/// Sink for animation checkpoints, driven synchronously by the sorting worker.
///
/// `render` is called after every visualized comparison/swap/write with a fresh snapshot and
/// highlight assignment; implementations must overwrite prior drawing state rather than
/// accumulate it. `delay` blocks the worker for approximately the configured step duration and
/// is the run's only intentional suspension point.
pub trait StepRenderer {
    fn render(&mut self, snapshot: &[u32], highlights: &[Highlight]);

    fn delay(&mut self, duration: Duration);
}

/// Renderer that discards frames and skips delays. Useful for benches and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl StepRenderer for NullRenderer {
    fn render(&mut self, _snapshot: &[u32], _highlights: &[Highlight]) {}

    fn delay(&mut self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::Highlight;

    #[test]
    fn uniform_covers_every_index() {
        let assignment = Highlight::uniform(4, Highlight::Sorted);
        assert_eq!(assignment, vec![Highlight::Sorted; 4]);
    }

    #[test]
    fn active_marks_pairs_and_ignores_out_of_range() {
        let assignment = Highlight::active(4, [1, 3, 9]);
        assert_eq!(
            assignment,
            vec![Highlight::Idle, Highlight::Active, Highlight::Idle, Highlight::Active]
        );
    }

    #[test]
    fn merging_span_is_inclusive_and_clamped() {
        let assignment = Highlight::merging_span(5, 2, 7);
        assert_eq!(assignment[..2], [Highlight::Idle, Highlight::Idle]);
        assert_eq!(assignment[2..], [Highlight::Merging; 3]);
    }

    #[test]
    fn assignment_length_always_matches_array_length() {
        assert_eq!(Highlight::active(7, []).len(), 7);
        assert_eq!(Highlight::merging_span(7, 6, 6).len(), 7);
        assert_eq!(Highlight::uniform(0, Highlight::Sorted).len(), 0);
    }
}
