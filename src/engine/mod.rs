// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Animation engine seams: the step renderer interface, per-index highlight categories, and the
//! cooperative cancellation token shared between the controller and the running algorithm.

mod cancel;
mod step;

pub use cancel::CancelToken;
pub use step::{Highlight, NullRenderer, StepRenderer};
