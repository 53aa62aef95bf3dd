// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Outcome, StepContext};
use crate::engine::Highlight;

struct Cancelled;

/// Quick sort, Lomuto partition with the range's last element as pivot. Every scan iteration
/// checkpoints the scan index and the partition boundary; the final pivot swap is not
/// visualized (part of the trace contract).
pub(crate) fn sort(data: &mut [u32], ctx: &mut StepContext<'_>) -> Outcome {
    if data.is_empty() {
        return Outcome::Completed;
    }
    let high = data.len() - 1;
    sort_range(data, 0, high, ctx)
}

fn sort_range(data: &mut [u32], low: usize, high: usize, ctx: &mut StepContext<'_>) -> Outcome {
    if ctx.is_cancelled() {
        return Outcome::Cancelled;
    }
    if low >= high {
        return Outcome::Completed;
    }

    let pivot_idx = match partition(data, low, high, ctx) {
        Ok(pivot_idx) => pivot_idx,
        Err(Cancelled) => return Outcome::Cancelled,
    };

    if pivot_idx > low && sort_range(data, low, pivot_idx - 1, ctx).is_cancelled() {
        return Outcome::Cancelled;
    }
    if pivot_idx < high && sort_range(data, pivot_idx + 1, high, ctx).is_cancelled() {
        return Outcome::Cancelled;
    }

    Outcome::Completed
}

/// `boundary` is the slot the next element `<= pivot` swaps into; the highlighted boundary
/// index is the last placed slot (`boundary - 1`), matching the visual trace.
fn partition(
    data: &mut [u32],
    low: usize,
    high: usize,
    ctx: &mut StepContext<'_>,
) -> Result<usize, Cancelled> {
    let n = data.len();
    let pivot = data[high];
    let mut boundary = low;

    for j in low..high {
        if ctx.is_cancelled() {
            return Err(Cancelled);
        }
        if data[j] <= pivot {
            data.swap(boundary, j);
            boundary += 1;
        }
        ctx.checkpoint(data, &Highlight::active(n, boundary.checked_sub(1).into_iter().chain([j])));
    }

    data.swap(boundary, high);
    Ok(boundary)
}
