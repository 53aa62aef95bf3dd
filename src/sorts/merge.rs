// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Outcome, StepContext};
use crate::engine::Highlight;

/// Top-down merge sort. Every element written back into the shared range — during the compare
/// phase and both drain phases — is a checkpoint highlighting the whole `[left, right]` span.
pub(crate) fn sort(data: &mut [u32], ctx: &mut StepContext<'_>) -> Outcome {
    if data.is_empty() {
        return Outcome::Completed;
    }
    let right = data.len() - 1;
    sort_range(data, 0, right, ctx)
}

fn sort_range(data: &mut [u32], left: usize, right: usize, ctx: &mut StepContext<'_>) -> Outcome {
    if ctx.is_cancelled() {
        return Outcome::Cancelled;
    }
    if left >= right {
        return Outcome::Completed;
    }

    let mid = (left + right) / 2;
    if sort_range(data, left, mid, ctx).is_cancelled() {
        return Outcome::Cancelled;
    }
    if sort_range(data, mid + 1, right, ctx).is_cancelled() {
        return Outcome::Cancelled;
    }
    merge(data, left, mid, right, ctx)
}

fn merge(
    data: &mut [u32],
    left: usize,
    mid: usize,
    right: usize,
    ctx: &mut StepContext<'_>,
) -> Outcome {
    let n = data.len();
    let left_half = data[left..=mid].to_vec();
    let right_half = data[mid + 1..=right].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < left_half.len() && j < right_half.len() {
        if ctx.is_cancelled() {
            restore(data, k, &left_half[i..], &right_half[j..]);
            return Outcome::Cancelled;
        }
        if left_half[i] <= right_half[j] {
            data[k] = left_half[i];
            i += 1;
        } else {
            data[k] = right_half[j];
            j += 1;
        }
        k += 1;
        ctx.checkpoint(data, &Highlight::merging_span(n, left, right));
    }

    while i < left_half.len() {
        if ctx.is_cancelled() {
            restore(data, k, &left_half[i..], &[]);
            return Outcome::Cancelled;
        }
        data[k] = left_half[i];
        i += 1;
        k += 1;
        ctx.checkpoint(data, &Highlight::merging_span(n, left, right));
    }

    while j < right_half.len() {
        if ctx.is_cancelled() {
            restore(data, k, &[], &right_half[j..]);
            return Outcome::Cancelled;
        }
        data[k] = right_half[j];
        j += 1;
        k += 1;
        ctx.checkpoint(data, &Highlight::merging_span(n, left, right));
    }

    Outcome::Completed
}

/// Copies the unconsumed temp-half remainders back into the not-yet-written slots so a
/// cancelled merge still leaves a permutation of the input. Unrendered on purpose.
fn restore(data: &mut [u32], mut k: usize, left_rest: &[u32], right_rest: &[u32]) {
    for &value in left_rest.iter().chain(right_rest) {
        data[k] = value;
        k += 1;
    }
}
