// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The six step-emitting sorting algorithms.
//!
//! Each algorithm mutates the shared array in place and emits a checkpoint (render + delay)
//! after every visualized comparison/swap/write, polling the cancellation token at least once
//! per element comparison or move. On cancellation an algorithm returns immediately with the
//! array in whatever partially-sorted state it reached — always still a permutation of the
//! input, never sorted-by-accident guarantees beyond that.
//!
//! The per-algorithm checkpoint/highlight policies are part of the visual trace contract and
//! are covered by the tests in this module's `tests` sibling.

use std::time::Duration;

use crate::engine::{CancelToken, Highlight, StepRenderer};
use crate::model::Algorithm;

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;


/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The algorithm ran to completion; the array is sorted.
    Completed,
    /// The cancellation token was observed; the array is partially sorted.
    Cancelled,
}

impl Outcome {
    pub fn is_cancelled(self) -> bool {
        matches!(self, Outcome::Cancelled)
    }
}

/// Per-run execution context handed down into the algorithms.
///
/// Owns nothing: the renderer and token are borrowed from the caller for the run's duration.
pub(crate) struct StepContext<'a> {
    renderer: &'a mut dyn StepRenderer,
    token: &'a CancelToken,
    step_delay: Duration,
}

impl StepContext<'_> {
    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// One checkpoint: hand the renderer the current snapshot, then pace the animation.
    fn checkpoint(&mut self, snapshot: &[u32], highlights: &[Highlight]) {
        self.renderer.render(snapshot, highlights);
        self.renderer.delay(self.step_delay);
    }
}

/// Runs `algorithm` over `data` to completion or until `token` is observed set.
///
/// The final sorted-state render is the caller's responsibility (the session controller emits
/// a uniform "sorted" pass after a normal completion).
pub fn run(
    algorithm: Algorithm,
    data: &mut [u32],
    renderer: &mut dyn StepRenderer,
    token: &CancelToken,
    step_delay: Duration,
) -> Outcome {
    let mut ctx = StepContext { renderer, token, step_delay };

    match algorithm {
        Algorithm::Bubble => bubble::sort(data, &mut ctx),
        Algorithm::Selection => selection::sort(data, &mut ctx),
        Algorithm::Insertion => insertion::sort(data, &mut ctx),
        Algorithm::Merge => merge::sort(data, &mut ctx),
        Algorithm::Quick => quick::sort(data, &mut ctx),
        Algorithm::Heap => heap::sort(data, &mut ctx),
    }
}
