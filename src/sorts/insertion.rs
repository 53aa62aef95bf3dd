// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Outcome, StepContext};
use crate::engine::Highlight;

/// Insertion sort. Every rightward shift checkpoints the shift cursor and the key's origin;
/// the key's final placement is not visualized (part of the trace contract).
///
/// While the key is held out of the array, the hole slot duplicates a neighbor. On
/// cancellation the key is written back into the hole first, so the array stays a permutation
/// of the input.
pub(crate) fn sort(data: &mut [u32], ctx: &mut StepContext<'_>) -> Outcome {
    let n = data.len();

    for i in 1..n {
        let key = data[i];
        let mut hole = i;
        while hole > 0 && data[hole - 1] > key {
            if ctx.is_cancelled() {
                data[hole] = key;
                return Outcome::Cancelled;
            }
            data[hole] = data[hole - 1];
            hole -= 1;
            ctx.checkpoint(data, &Highlight::active(n, hole.checked_sub(1).into_iter().chain([i])));
        }
        data[hole] = key;
    }

    Outcome::Completed
}
