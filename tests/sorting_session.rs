// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end contract: generate an array, run every algorithm through the public surface,
//! and get back a sorted permutation.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use proteus::engine::{CancelToken, Highlight, NullRenderer, StepRenderer};
use proteus::model::{generate_bars, Algorithm, RunParams, SpeedTier, MAX_VALUE, MIN_VALUE};
use proteus::session::SortSession;
use proteus::sorts::{self, Outcome};

#[derive(Clone, Default)]
struct SharedFrameLog {
    frames: Arc<Mutex<Vec<(Vec<u32>, Vec<Highlight>)>>>,
}

impl StepRenderer for SharedFrameLog {
    fn render(&mut self, snapshot: &[u32], highlights: &[Highlight]) {
        if let Ok(mut frames) = self.frames.lock() {
            frames.push((snapshot.to_vec(), highlights.to_vec()));
        }
    }

    fn delay(&mut self, _duration: Duration) {}
}

#[test]
fn every_algorithm_sorts_a_generated_array() {
    for algorithm in Algorithm::ALL {
        let (mut bars, used_fallback) = generate_bars(Some(64));
        assert!(!used_fallback);
        assert_eq!(bars.len(), 64);
        assert!(bars.iter().all(|&v| (MIN_VALUE..=MAX_VALUE).contains(&v)));

        let mut expected = bars.clone();
        expected.sort_unstable();

        let token = CancelToken::new();
        let mut renderer = NullRenderer;
        let outcome = sorts::run(algorithm, &mut bars, &mut renderer, &token, Duration::ZERO);

        assert_eq!(outcome, Outcome::Completed, "{algorithm} did not complete");
        assert_eq!(bars, expected, "{algorithm} did not sort");
    }
}

#[test]
fn session_round_trip_ends_with_a_sorted_green_frame() {
    let (mut session, _) = SortSession::new(Some(24));
    let log = SharedFrameLog::default();

    let params = RunParams::new(Algorithm::Quick, SpeedTier::Fast);
    session.start(params, log.clone()).expect("start run");

    let outcome = loop {
        if let Some(outcome) = session.try_finish() {
            break outcome;
        }
        std::thread::sleep(Duration::from_millis(5));
    };

    assert_eq!(outcome, Outcome::Completed);
    assert!(session.bars().windows(2).all(|pair| pair[0] <= pair[1]));

    let frames = log.frames.lock().expect("frame log");
    let (final_bars, final_highlights) = frames.last().expect("at least one frame");
    assert_eq!(final_bars.as_slice(), session.bars());
    assert!(final_highlights.iter().all(|h| *h == Highlight::Sorted));
}
