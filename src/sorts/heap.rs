// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Outcome, StepContext};
use crate::engine::Highlight;

/// Heap sort. The bottom-up max-heap build is not visualized; each extraction (root swapped
/// with the last unsorted slot, then re-heapified) is one checkpoint highlighting the root and
/// the displaced-to index. Sift-down swaps inside `heapify` are not individually rendered.
pub(crate) fn sort(data: &mut [u32], ctx: &mut StepContext<'_>) -> Outcome {
    let n = data.len();

    for i in (0..n / 2).rev() {
        if heapify(data, n, i, ctx).is_cancelled() {
            return Outcome::Cancelled;
        }
    }

    for i in (1..n).rev() {
        if ctx.is_cancelled() {
            return Outcome::Cancelled;
        }
        data.swap(0, i);
        if heapify(data, i, 0, ctx).is_cancelled() {
            return Outcome::Cancelled;
        }
        ctx.checkpoint(data, &Highlight::active(n, [0, i]));
    }

    Outcome::Completed
}

fn heapify(data: &mut [u32], n: usize, i: usize, ctx: &mut StepContext<'_>) -> Outcome {
    if ctx.is_cancelled() {
        return Outcome::Cancelled;
    }

    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < n && data[left] > data[largest] {
        largest = left;
    }
    if right < n && data[right] > data[largest] {
        largest = right;
    }

    if largest != i {
        data.swap(i, largest);
        return heapify(data, n, largest, ctx);
    }

    Outcome::Completed
}
