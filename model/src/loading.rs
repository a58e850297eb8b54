//! The one-shot gate holding back the page behind the loading splash.

use std::time::Duration;

use dioxus_logger::tracing;

use crate::config::LoaderTiming;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::EnumIs)]
pub enum LoadingPhase {
    #[default]
    Pending,
    Complete,
}

/// Where the splash overlay is in its enter/exit lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIs)]
pub enum LoaderPresence {
    /// Gate still pending; the splash is the only thing on screen.
    Visible,
    /// Gate has opened and the splash is fading out over the main content.
    Exiting,
    /// Fade finished; the splash is unmounted.
    Gone,
}

/// A timer-driven gate: `Pending` until the delay has elapsed, then
/// `Complete` forever.
///
/// Time is fed in through [`LoadingGate::advance`], so the gate can be driven
/// by a real timer in the UI and by a simulated clock in tests. The caller's
/// completion hook is whatever it does when `advance` returns `true`, which
/// happens exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadingGate {
    timing: LoaderTiming,
    phase: LoadingPhase,
    elapsed: Duration,
    since_complete: Duration,
}

impl LoadingGate {
    pub fn new(timing: LoaderTiming) -> Self {
        Self {
            timing,
            phase: LoadingPhase::Pending,
            elapsed: Duration::ZERO,
            since_complete: Duration::ZERO,
        }
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_pending()
    }

    /// Moves the clock forward. Returns `true` only on the call that opened
    /// the gate.
    pub fn advance(&mut self, dt: Duration) -> bool {
        match self.phase {
            LoadingPhase::Pending => {
                self.elapsed = self.elapsed.saturating_add(dt);
                if self.elapsed >= self.timing.delay() {
                    // whatever overshot the delay already counts toward the exit fade
                    let overshoot = self.elapsed - self.timing.delay();
                    let opened = self.complete_loading();
                    self.since_complete = overshoot;
                    opened
                } else {
                    false
                }
            }
            LoadingPhase::Complete => {
                self.since_complete = self.since_complete.saturating_add(dt);
                false
            }
        }
    }

    /// Opens the gate now. Returns `false` if it was already open.
    pub fn complete_loading(&mut self) -> bool {
        if self.phase.is_complete() {
            return false;
        }
        tracing::info!("loading complete after {:?}", self.elapsed);
        self.phase = LoadingPhase::Complete;
        self.since_complete = Duration::ZERO;
        true
    }

    pub fn presence(&self) -> LoaderPresence {
        match self.phase {
            LoadingPhase::Pending => LoaderPresence::Visible,
            LoadingPhase::Complete if self.since_complete < self.timing.exit_fade() => {
                LoaderPresence::Exiting
            }
            LoadingPhase::Complete => LoaderPresence::Gone,
        }
    }
}
