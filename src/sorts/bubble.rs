// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Outcome, StepContext};
use crate::engine::Highlight;

/// Bubble sort. Every inner iteration is a checkpoint highlighting the compared pair,
/// whether or not it swapped.
pub(crate) fn sort(data: &mut [u32], ctx: &mut StepContext<'_>) -> Outcome {
    let n = data.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            if ctx.is_cancelled() {
                return Outcome::Cancelled;
            }
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
            ctx.checkpoint(data, &Highlight::active(n, [j, j + 1]));
        }
    }

    Outcome::Completed
}
