// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Outcome, StepContext};
use crate::engine::Highlight;

/// Selection sort. Every inner iteration checkpoints the scan index and the running minimum;
/// the pass-ending swap itself is not visualized (part of the trace contract).
pub(crate) fn sort(data: &mut [u32], ctx: &mut StepContext<'_>) -> Outcome {
    let n = data.len();

    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            if ctx.is_cancelled() {
                return Outcome::Cancelled;
            }
            if data[j] < data[min_idx] {
                min_idx = j;
            }
            ctx.checkpoint(data, &Highlight::active(n, [j, min_idx]));
        }
        data.swap(i, min_idx);
    }

    Outcome::Completed
}
