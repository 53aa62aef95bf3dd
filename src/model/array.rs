// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Random bar-array generation.
//!
//! Sizes are clamped to [`MIN_LEN`, `MAX_LEN`]; an absent (unparsable) request falls back to
//! [`DEFAULT_LEN`] and is reported so the shell can rewrite its size field. Values are drawn
//! uniformly from [`MIN_VALUE`, `MAX_VALUE`] and double as bar heights.

use rand::Rng;

pub const MIN_LEN: usize = 5;
pub const MAX_LEN: usize = 200;
pub const DEFAULT_LEN: usize = 50;
pub const MIN_VALUE: u32 = 10;
pub const MAX_VALUE: u32 = 400;

/// Generates a fresh bar array from a parsed size request.
///
/// `None` means the request was absent or non-numeric; the default length is used and the
/// returned flag is `true` so the caller can surface the substitution. Out-of-range numeric
/// requests are clamped silently — clamping is not a fallback.
pub fn generate_bars(requested: Option<usize>) -> (Vec<u32>, bool) {
    generate_bars_with(&mut rand::thread_rng(), requested)
}

/// Same as [`generate_bars`], with an explicit RNG for deterministic callers.
pub fn generate_bars_with(rng: &mut impl Rng, requested: Option<usize>) -> (Vec<u32>, bool) {
    let (len, used_fallback) = match requested {
        Some(len) => (len.clamp(MIN_LEN, MAX_LEN), false),
        None => (DEFAULT_LEN, true),
    };

    let bars = (0..len).map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE)).collect();
    (bars, used_fallback)
}
