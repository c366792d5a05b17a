//! Boot sequence shown before the portfolio.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::info;

const PROGRESS_INTERVAL: Duration = Duration::from_millis(120);
const MESSAGE_INTERVAL: Duration = Duration::from_millis(450);
const HOLD_AFTER_FULL: Duration = Duration::from_millis(1_000);
/// Upper bound (exclusive) of one progress step, in percent
const MAX_STEP: f64 = 15.0;

pub const MESSAGES: [&str; 6] = [
    "Establishing Nexus Connection...",
    "Calibrating Neural Sync...",
    "Deploying Creative Modules...",
    "Synchronizing Persona...",
    "Rendering Digital Space...",
    "Nexus Active.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    Loading,
    /// Progress is full; waiting out the hold before completing
    Holding,
    Done,
}

pub struct Loader {
    rng: StdRng,
    progress: f64,
    message_index: usize,
    progress_clock: Duration,
    message_clock: Duration,
    hold_remaining: Duration,
    phase: LoaderPhase,
}

impl Loader {
    pub fn new(seed: u64) -> Self {
        Loader {
            rng: StdRng::seed_from_u64(seed),
            progress: 0.0,
            message_index: 0,
            progress_clock: Duration::ZERO,
            message_clock: Duration::ZERO,
            hold_remaining: HOLD_AFTER_FULL,
            phase: LoaderPhase::Loading,
        }
    }

    /// A loader that has already finished
    pub fn finished() -> Self {
        let mut loader = Loader::new(0);
        loader.progress = 100.0;
        loader.message_index = MESSAGES.len() - 1;
        loader.phase = LoaderPhase::Done;
        loader
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == LoaderPhase::Done
    }

    /// Progress in percent, 0 to 100
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn message(&self) -> &'static str {
        MESSAGES[self.message_index]
    }

    /// Jumps straight to the end of the sequence
    pub fn skip(&mut self) {
        if !self.is_done() {
            info!(progress = self.progress, "loader skipped");
            self.progress = 100.0;
            self.message_index = MESSAGES.len() - 1;
            self.phase = LoaderPhase::Done;
        }
    }

    /// Steps the sequence by `dt`; returns true on the step that completes it.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.is_done() {
            return false;
        }

        self.message_clock += dt;
        while self.message_clock >= MESSAGE_INTERVAL {
            self.message_clock -= MESSAGE_INTERVAL;
            self.message_index = (self.message_index + 1).min(MESSAGES.len() - 1);
        }

        if self.phase == LoaderPhase::Loading {
            self.progress_clock += dt;
            while self.progress_clock >= PROGRESS_INTERVAL && self.phase == LoaderPhase::Loading {
                self.progress_clock -= PROGRESS_INTERVAL;
                self.progress += self.rng.gen_range(0.0..MAX_STEP);
                if self.progress >= 100.0 {
                    self.progress = 100.0;
                    self.phase = LoaderPhase::Holding;
                    // Whatever is left of this step already counts toward the hold
                    self.hold_remaining = HOLD_AFTER_FULL.saturating_sub(self.progress_clock);
                }
            }
            return false;
        }

        self.hold_remaining = self.hold_remaining.saturating_sub(dt);
        if self.hold_remaining.is_zero() {
            self.phase = LoaderPhase::Done;
            info!("loader complete");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(40);

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let mut loader = Loader::new(7);
        let mut last = 0.0;
        for _ in 0..2_000 {
            loader.advance(TICK);
            assert!(loader.progress() >= last);
            assert!(loader.progress() <= 100.0);
            last = loader.progress();
        }
        assert!(loader.is_done());
        assert_eq!(loader.progress(), 100.0);
    }

    #[test]
    fn holds_before_completing() {
        let mut loader = Loader::new(1);
        while loader.phase() == LoaderPhase::Loading {
            loader.advance(TICK);
        }
        assert_eq!(loader.phase(), LoaderPhase::Holding);
        let mut held = Duration::ZERO;
        let mut completions = 0;
        while !loader.is_done() {
            if loader.advance(TICK) {
                completions += 1;
            }
            held += TICK;
        }
        assert_eq!(completions, 1);
        assert!(held >= Duration::from_millis(880) && held <= HOLD_AFTER_FULL);
        assert!(!loader.advance(TICK));
    }

    #[test]
    fn messages_advance_and_stop_at_the_last() {
        let mut loader = Loader::new(3);
        assert_eq!(loader.message(), MESSAGES[0]);
        loader.advance(Duration::from_millis(450));
        assert_eq!(loader.message(), MESSAGES[1]);
        loader.advance(Duration::from_secs(60));
        assert_eq!(loader.message(), "Nexus Active.");
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Loader::new(42);
        let mut b = Loader::new(42);
        for _ in 0..20 {
            a.advance(TICK);
            b.advance(TICK);
            assert_eq!(a.progress(), b.progress());
        }
    }

    #[test]
    fn skip_finishes_immediately() {
        let mut loader = Loader::new(0);
        loader.skip();
        assert!(loader.is_done());
        assert_eq!(loader.progress(), 100.0);
        assert!(Loader::finished().is_done());
    }
}
