// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-run parameters: the algorithm selector and the animation speed tier.

use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// The six supported sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble",
            Algorithm::Selection => "Selection",
            Algorithm::Insertion => "Insertion",
            Algorithm::Merge => "Merge",
            Algorithm::Quick => "Quick",
            Algorithm::Heap => "Heap",
        }
    }

    /// The next algorithm in display order, wrapping around.
    pub fn next(self) -> Algorithm {
        let idx = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Bubble
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm: {}", self.0)
    }
}

impl Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}

/// Named animation speed tiers mapping to a fixed per-checkpoint delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedTier {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl SpeedTier {
    pub const ALL: [SpeedTier; 3] = [SpeedTier::Slow, SpeedTier::Medium, SpeedTier::Fast];

    pub fn label(self) -> &'static str {
        match self {
            SpeedTier::Slow => "Slow",
            SpeedTier::Medium => "Medium",
            SpeedTier::Fast => "Fast",
        }
    }

    /// The delay applied after every checkpoint at this tier.
    pub fn step_delay(self) -> Duration {
        match self {
            SpeedTier::Slow => Duration::from_millis(300),
            SpeedTier::Medium => Duration::from_millis(100),
            SpeedTier::Fast => Duration::from_millis(10),
        }
    }

    pub fn next(self) -> SpeedTier {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SpeedTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSpeedTier(String);

impl fmt::Display for UnknownSpeedTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown speed tier: {}", self.0)
    }
}

impl Error for UnknownSpeedTier {}

impl FromStr for SpeedTier {
    type Err = UnknownSpeedTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|tier| tier.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSpeedTier(s.to_owned()))
    }
}

/// Immutable parameters for one sort run, read once at run start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunParams {
    algorithm: Algorithm,
    speed: SpeedTier,
}

impl RunParams {
    pub fn new(algorithm: Algorithm, speed: SpeedTier) -> Self {
        Self { algorithm, speed }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn speed(&self) -> SpeedTier {
        self.speed
    }

    pub fn step_delay(&self) -> Duration {
        self.speed.step_delay()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_algorithm_labels_case_insensitively() {
        assert_eq!("bubble".parse::<Algorithm>(), Ok(Algorithm::Bubble));
        assert_eq!("QUICK".parse::<Algorithm>(), Ok(Algorithm::Quick));
        assert_eq!("Heap".parse::<Algorithm>(), Ok(Algorithm::Heap));
    }

    #[test]
    fn rejects_unknown_algorithm() {
        "shell".parse::<Algorithm>().unwrap_err();
    }

    #[test]
    fn algorithm_cycle_covers_all_variants() {
        let mut seen = Vec::new();
        let mut current = Algorithm::Bubble;
        for _ in 0..Algorithm::ALL.len() {
            seen.push(current);
            current = current.next();
        }
        assert_eq!(seen, Algorithm::ALL);
        assert_eq!(current, Algorithm::Bubble);
    }

    #[test]
    fn speed_tiers_map_to_fixed_delays() {
        assert_eq!(SpeedTier::Slow.step_delay(), Duration::from_millis(300));
        assert_eq!(SpeedTier::Medium.step_delay(), Duration::from_millis(100));
        assert_eq!(SpeedTier::Fast.step_delay(), Duration::from_millis(10));
    }

    #[test]
    fn medium_is_the_default_tier() {
        assert_eq!(SpeedTier::default(), SpeedTier::Medium);
        assert_eq!(RunParams::default().speed(), SpeedTier::Medium);
    }

    #[test]
    fn parses_speed_tier_labels() {
        assert_eq!("slow".parse::<SpeedTier>(), Ok(SpeedTier::Slow));
        assert_eq!("Fast".parse::<SpeedTier>(), Ok(SpeedTier::Fast));
        "warp".parse::<SpeedTier>().unwrap_err();
    }
}
