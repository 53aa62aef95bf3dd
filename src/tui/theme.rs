// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::style::{Color, Modifier, Style};

use crate::engine::Highlight;

// Bar palette, matching the reference trace colors: skyblue resting bars, red active
// comparisons, purple merge write-backs, green for the completed pass.
const BAR_IDLE_COLOR: Color = Color::Cyan;
const BAR_ACTIVE_COLOR: Color = Color::Red;
const BAR_MERGING_COLOR: Color = Color::Magenta;
const BAR_SORTED_COLOR: Color = Color::Green;

pub(crate) const FOOTER_LABEL_COLOR: Color = Color::Gray;
pub(crate) const FOOTER_KEY_COLOR: Color = Color::Cyan;
pub(crate) const FOOTER_BRAND_COLOR: Color = Color::White;

pub(crate) fn bar_style(highlight: Highlight) -> Style {
    let color = match highlight {
        Highlight::Idle => BAR_IDLE_COLOR,
        Highlight::Active => BAR_ACTIVE_COLOR,
        Highlight::Merging => BAR_MERGING_COLOR,
        Highlight::Sorted => BAR_SORTED_COLOR,
    };
    Style::default().fg(color)
}

pub(crate) fn value_label_style(highlight: Highlight) -> Style {
    bar_style(highlight).add_modifier(Modifier::REVERSED)
}

pub(crate) fn header_label_style() -> Style {
    Style::default().fg(FOOTER_LABEL_COLOR)
}

pub(crate) fn header_value_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub(crate) fn status_running_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}
