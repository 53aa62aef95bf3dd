// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus — terminal sorting visualizer (colored bars + classic algorithms).
//!
//! The library holds the animation engine: array generation, the step renderer seam, cooperative
//! cancellation, the six algorithm implementations, and the session state machine. The `tui`
//! module is the ratatui shell; the binary is a thin CLI wrapper around it.

pub mod engine;
pub mod model;
pub mod session;
pub mod sorts;
pub mod tui;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
