//! Countdown timer implementation.
//!
//! The timer is a wall-clock-sampled accumulator. It does not use internal
//! threads - the caller is responsible for calling `tick()` periodically
//! while it runs.
//!
//! Elapsed time at any observation is
//! `accumulated_secs + (running ? now - run_start : 0)`, clamped to the
//! limit once one is set. Pausing folds the current run segment into the
//! accumulator, so no time is lost or double-counted across pause/resume
//! cycles.

use std::time::Instant;

/// Outcome of a single sampling tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Still running; carries the current elapsed reading.
    Progress { elapsed_secs: f64 },
    /// The limit was reached on this tick. The timer has stopped itself
    /// and clamped its elapsed time to the limit. Not re-emitted while
    /// stopped.
    LimitReached,
}

/// Tracks elapsed time against a configurable limit for a single interval.
///
/// A limit of `0.0` means "no limit": the timer counts up indefinitely and
/// never completes. Uses `Instant` rather than wall-clock time so elapsed
/// readings are monotonically non-decreasing while running.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    /// Target duration in seconds; `0.0` disables completion.
    limit_secs: f64,
    /// Time banked across completed run segments.
    accumulated_secs: f64,
    /// Set iff the timer is running.
    run_start: Option<Instant>,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self {
            limit_secs: 0.0,
            accumulated_secs: 0.0,
            run_start: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.run_start.is_some()
    }

    pub fn limit_secs(&self) -> f64 {
        self.limit_secs
    }

    /// Current elapsed time in seconds. Pure read; never exceeds the
    /// limit once one is set.
    pub fn elapsed(&self) -> f64 {
        let raw = self.accumulated_secs
            + self
                .run_start
                .map(|start| start.elapsed().as_secs_f64())
                .unwrap_or(0.0);
        if self.limit_secs > 0.0 {
            raw.min(self.limit_secs)
        } else {
            raw
        }
    }

    /// Seconds left until the limit, or `None` when counting up without
    /// a limit.
    pub fn remaining(&self) -> Option<f64> {
        if self.limit_secs > 0.0 {
            Some((self.limit_secs - self.elapsed()).max(0.0))
        } else {
            None
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Set the target duration. Allowed in any state; already-accumulated
    /// time is untouched and the new limit applies on the next sample.
    /// `secs` must be a finite value `>= 0`.
    pub fn set_limit(&mut self, secs: f64) {
        self.limit_secs = secs;
    }

    /// Begin a run segment. Idempotent: starting while already running
    /// keeps the original segment start.
    pub fn start(&mut self) {
        if self.run_start.is_none() {
            self.run_start = Some(Instant::now());
        }
    }

    /// End the current run segment, folding its elapsed time into the
    /// accumulator. No-op while stopped. No tick observes the timer
    /// mid-fold: the fold and the transition happen in one mutation.
    pub fn stop(&mut self) {
        if let Some(start) = self.run_start.take() {
            self.accumulated_secs += start.elapsed().as_secs_f64();
        }
    }

    /// Zero the accumulated progress. Does not stop the timer: if it is
    /// running, the current segment restarts from now.
    pub fn reset(&mut self) {
        self.accumulated_secs = 0.0;
        if self.run_start.is_some() {
            self.run_start = Some(Instant::now());
        }
    }

    /// Sample the clock. While running, recomputes elapsed time and
    /// checks the limit; on reaching it, clamps elapsed to the limit and
    /// stops atomically with the `LimitReached` outcome. Returns `None`
    /// while stopped, so completion is reported exactly once per run.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        let start = self.run_start?;
        let elapsed = self.accumulated_secs + start.elapsed().as_secs_f64();
        if self.limit_secs > 0.0 && elapsed >= self.limit_secs {
            self.accumulated_secs = self.limit_secs;
            self.run_start = None;
            tracing::debug!(limit_secs = self.limit_secs, "countdown limit reached");
            Some(TickOutcome::LimitReached)
        } else {
            Some(TickOutcome::Progress {
                elapsed_secs: elapsed,
            })
        }
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn starts_stopped_and_unbounded() {
        let timer = CountdownTimer::new();
        assert!(!timer.is_running());
        assert_eq!(timer.limit_secs(), 0.0);
        assert_eq!(timer.elapsed(), 0.0);
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn start_is_idempotent() {
        let mut timer = CountdownTimer::new();
        timer.start();
        let first = timer.run_start;
        sleep(Duration::from_millis(10));
        timer.start();
        assert_eq!(timer.run_start, first);
    }

    #[test]
    fn stop_freezes_elapsed() {
        let mut timer = CountdownTimer::new();
        timer.start();
        sleep(Duration::from_millis(20));
        timer.stop();
        let frozen = timer.elapsed();
        assert!(frozen > 0.0);
        sleep(Duration::from_millis(20));
        assert_eq!(timer.elapsed(), frozen);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut timer = CountdownTimer::new();
        timer.start();
        sleep(Duration::from_millis(10));
        timer.stop();
        let frozen = timer.elapsed();
        timer.stop();
        assert_eq!(timer.elapsed(), frozen);
    }

    #[test]
    fn restart_preserves_accumulated_progress() {
        let mut timer = CountdownTimer::new();
        timer.start();
        sleep(Duration::from_millis(20));
        timer.stop();
        let banked = timer.accumulated_secs;
        timer.start();
        // The restart itself banks nothing.
        assert_eq!(timer.accumulated_secs, banked);
        assert!(timer.elapsed() >= banked);
    }

    #[test]
    fn elapsed_is_monotone_while_running() {
        let mut timer = CountdownTimer::new();
        timer.start();
        let mut last = timer.elapsed();
        for _ in 0..50 {
            let next = timer.elapsed();
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn reset_while_running_keeps_running_from_zero() {
        let mut timer = CountdownTimer::new();
        timer.start();
        sleep(Duration::from_millis(20));
        timer.reset();
        assert!(timer.is_running());
        assert_eq!(timer.accumulated_secs, 0.0);
        assert!(timer.elapsed() < 0.02);
    }

    #[test]
    fn reset_while_stopped_zeroes_progress() {
        let mut timer = CountdownTimer::new();
        timer.start();
        sleep(Duration::from_millis(10));
        timer.stop();
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(), 0.0);
    }

    #[test]
    fn limit_clamps_and_completes_exactly_once() {
        let mut timer = CountdownTimer::new();
        timer.set_limit(0.02);
        timer.start();
        sleep(Duration::from_millis(40));
        assert_eq!(timer.tick(), Some(TickOutcome::LimitReached));
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(), 0.02);
        assert_eq!(timer.remaining(), Some(0.0));
        // Stopped: no further ticks affect state or re-report completion.
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.elapsed(), 0.02);
    }

    #[test]
    fn elapsed_never_exceeds_limit_between_ticks() {
        let mut timer = CountdownTimer::new();
        timer.set_limit(0.01);
        timer.start();
        sleep(Duration::from_millis(30));
        // No tick has fired yet; the read still clamps.
        assert_eq!(timer.elapsed(), 0.01);
    }

    #[test]
    fn zero_limit_counts_up_forever() {
        let mut timer = CountdownTimer::new();
        timer.start();
        sleep(Duration::from_millis(20));
        match timer.tick() {
            Some(TickOutcome::Progress { elapsed_secs }) => assert!(elapsed_secs > 0.0),
            other => panic!("expected progress, got {other:?}"),
        }
        assert!(timer.is_running());
    }

    #[test]
    fn tick_while_stopped_is_inert() {
        let mut timer = CountdownTimer::new();
        assert_eq!(timer.tick(), None);
        timer.set_limit(5.0);
        assert_eq!(timer.tick(), None);
    }

    #[test]
    fn limit_change_applies_to_next_sample() {
        let mut timer = CountdownTimer::new();
        timer.set_limit(60.0);
        timer.start();
        sleep(Duration::from_millis(20));
        timer.set_limit(0.01);
        assert_eq!(timer.tick(), Some(TickOutcome::LimitReached));
        assert_eq!(timer.elapsed(), 0.01);
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Start,
        Stop,
        Reset,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![Just(Op::Start), Just(Op::Stop), Just(Op::Reset)]
    }

    proptest! {
        /// With no limit set, elapsed() is monotone while running and
        /// frozen while stopped, for any sequence of control calls.
        #[test]
        fn elapsed_respects_run_state(ops in proptest::collection::vec(op_strategy(), 1..40)) {
            let mut timer = CountdownTimer::new();
            for op in ops {
                match op {
                    Op::Start => timer.start(),
                    Op::Stop => timer.stop(),
                    Op::Reset => timer.reset(),
                }
                let first = timer.elapsed();
                let second = timer.elapsed();
                if timer.is_running() {
                    prop_assert!(second >= first);
                } else {
                    prop_assert_eq!(second, first);
                }
            }
        }
    }
}
