// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Run orchestration: the session state machine and the background worker handoff.
//!
//! The session owns the one bar array. For a run's duration the array moves into the worker
//! thread (single writer); display reads happen only through the renderer the worker drives, so
//! no locking is needed. The cancellation token is the only state touched from both sides.

use std::error::Error;
use std::fmt;
use std::thread::JoinHandle;

use crate::engine::{CancelToken, Highlight, StepRenderer};
use crate::model::{generate_bars, RunParams};
use crate::sorts::{self, Outcome};

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No run in flight; the array is owned by the session and ready.
    #[default]
    Idle,
    /// The worker is sorting; only "stop" applies.
    Running,
    /// Stop was requested; the worker is unwinding and has not returned yet.
    StoppedByUser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A run is already in flight; starting another is refused, not queued.
    RunInFlight,
    /// There is no array to sort (taken by a worker that has not been reclaimed).
    ArrayUnavailable,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::RunInFlight => f.write_str("a sort run is already in flight"),
            SessionError::ArrayUnavailable => f.write_str("no array is available to sort"),
        }
    }
}

impl Error for SessionError {}

/// Owns the bar array and drives start/stop/generate transitions.
pub struct SortSession {
    bars: Vec<u32>,
    state: SessionState,
    token: CancelToken,
    params: RunParams,
    worker: Option<JoinHandle<(Vec<u32>, Outcome)>>,
}

impl SortSession {
    /// Creates a session with a freshly generated array of the requested size.
    ///
    /// Returns the session plus the generator's fallback flag.
    pub fn new(requested: Option<usize>) -> (Self, bool) {
        let (bars, used_fallback) = generate_bars(requested);
        let session = Self {
            bars,
            state: SessionState::Idle,
            token: CancelToken::new(),
            params: RunParams::default(),
            worker: None,
        };
        (session, used_fallback)
    }

    pub fn bars(&self) -> &[u32] {
        &self.bars
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn params(&self) -> RunParams {
        self.params
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Replaces the array with a freshly generated one, cancelling any in-flight run first.
    ///
    /// Returns the generator's fallback flag.
    pub fn generate(&mut self, requested: Option<usize>) -> bool {
        self.token.request_cancel();
        self.join_worker();

        let (bars, used_fallback) = generate_bars(requested);
        self.bars = bars;
        self.state = SessionState::Idle;
        used_fallback
    }

    /// Dispatches one run to a background worker.
    ///
    /// The array moves into the worker for the run's duration; reclaim it with
    /// [`SortSession::try_finish`] (or implicitly via [`SortSession::generate`]). A completed
    /// run emits one final uniform "sorted" render before the worker returns.
    pub fn start<R>(&mut self, params: RunParams, mut renderer: R) -> Result<(), SessionError>
    where
        R: StepRenderer + Send + 'static,
    {
        if self.worker.is_some() {
            return Err(SessionError::RunInFlight);
        }
        if self.bars.is_empty() {
            return Err(SessionError::ArrayUnavailable);
        }

        self.token = CancelToken::new();
        self.params = params;

        let token = self.token.clone();
        let mut bars = std::mem::take(&mut self.bars);
        let handle = std::thread::spawn(move || {
            let outcome = sorts::run(
                params.algorithm(),
                &mut bars,
                &mut renderer,
                &token,
                params.step_delay(),
            );
            if outcome == Outcome::Completed {
                renderer.render(&bars, &Highlight::uniform(bars.len(), Highlight::Sorted));
            }
            (bars, outcome)
        });

        self.worker = Some(handle);
        self.state = SessionState::Running;
        Ok(())
    }

    /// Requests a cooperative stop of the in-flight run. Inert when idle.
    pub fn request_stop(&mut self) {
        if self.worker.is_some() {
            self.token.request_cancel();
            self.state = SessionState::StoppedByUser;
        }
    }

    /// Reclaims the array if the worker has returned. Non-blocking.
    ///
    /// Returns the run's outcome once, at the transition back to idle.
    pub fn try_finish(&mut self) -> Option<Outcome> {
        if !self.worker.as_ref().is_some_and(JoinHandle::is_finished) {
            return None;
        }
        self.join_worker()
    }

    fn join_worker(&mut self) -> Option<Outcome> {
        let handle = self.worker.take()?;
        let (bars, outcome) = match handle.join() {
            Ok(result) => result,
            Err(_) => (Vec::new(), Outcome::Cancelled),
        };
        self.bars = bars;
        self.state = SessionState::Idle;
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::engine::{Highlight, NullRenderer, StepRenderer};
    use crate::model::{Algorithm, RunParams, SpeedTier, DEFAULT_LEN};
    use crate::sorts::Outcome;

    use super::{SessionError, SessionState, SortSession};

    /// Discards frames but honors delays, so cancellation tests get a real stop window.
    struct SleepingRenderer;

    impl StepRenderer for SleepingRenderer {
        fn render(&mut self, _snapshot: &[u32], _highlights: &[Highlight]) {}

        fn delay(&mut self, duration: Duration) {
            std::thread::sleep(duration);
        }
    }

    fn fast_params(algorithm: Algorithm) -> RunParams {
        RunParams::new(algorithm, SpeedTier::Fast)
    }

    fn finish(session: &mut SortSession) -> Outcome {
        loop {
            if let Some(outcome) = session.try_finish() {
                return outcome;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn new_session_starts_idle_with_generated_bars() {
        let (session, used_fallback) = SortSession::new(None);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.bars().len(), DEFAULT_LEN);
        assert!(used_fallback);
        assert!(!session.is_running());
    }

    #[test]
    fn start_refuses_a_second_run() {
        let (mut session, _) = SortSession::new(Some(60));
        session.start(fast_params(Algorithm::Bubble), NullRenderer).expect("first start");
        assert_eq!(session.state(), SessionState::Running);

        let refused = session.start(fast_params(Algorithm::Quick), NullRenderer);
        assert_eq!(refused, Err(SessionError::RunInFlight));

        session.request_stop();
        finish(&mut session);
    }

    #[test]
    fn completed_run_returns_a_sorted_array() {
        let (mut session, _) = SortSession::new(Some(20));
        session.start(fast_params(Algorithm::Merge), NullRenderer).expect("start");

        let outcome = finish(&mut session);
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.bars().windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(session.bars().len(), 20);
    }

    #[test]
    fn stop_transitions_through_stopped_by_user() {
        let (mut session, _) = SortSession::new(Some(200));
        let params = RunParams::new(Algorithm::Bubble, SpeedTier::Slow);
        session.start(params, SleepingRenderer).expect("start");

        session.request_stop();
        assert_eq!(session.state(), SessionState::StoppedByUser);

        let outcome = finish(&mut session);
        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.bars().len(), 200);
    }

    #[test]
    fn generate_cancels_an_in_flight_run_and_replaces_the_array() {
        let (mut session, _) = SortSession::new(Some(120));
        let params = RunParams::new(Algorithm::Selection, SpeedTier::Slow);
        session.start(params, SleepingRenderer).expect("start");

        let used_fallback = session.generate(Some(30));
        assert!(!used_fallback);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.is_running());
        assert_eq!(session.bars().len(), 30);
    }

    #[test]
    fn stop_when_idle_is_inert() {
        let (mut session, _) = SortSession::new(Some(10));
        session.request_stop();
        assert_eq!(session.state(), SessionState::Idle);
    }
}
