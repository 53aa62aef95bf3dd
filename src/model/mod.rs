// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: bar arrays and per-run parameters.

mod array;
mod run;

pub use array::{
    generate_bars, generate_bars_with, DEFAULT_LEN, MAX_LEN, MAX_VALUE, MIN_LEN, MIN_VALUE,
};
pub use run::{Algorithm, RunParams, SpeedTier, UnknownAlgorithm, UnknownSpeedTier};
