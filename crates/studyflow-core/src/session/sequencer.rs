//! Session sequencer implementation.
//!
//! The sequencer is a state machine over `{Idle, Study, Break}` that owns
//! one [`CountdownTimer`] and drives it through a chain of alternating
//! study/break intervals. Like the timer, it has no internal thread: the
//! caller invokes `tick()` periodically and consumes the returned events.
//!
//! ## State transitions
//!
//! ```text
//! Idle --begin--> Study --limit--> Break --limit--> Study ... --> Idle
//! ```
//!
//! A full study+break pair counts as one session unit; the remaining count
//! decrements only when a break completes.

use chrono::Utc;

use crate::error::{CoreError, Result};
use crate::events::Event;
use crate::timer::{CountdownTimer, TickOutcome};

use super::{SessionConfig, SessionKind};

/// Owns the chain configuration, the current session kind, and the one
/// countdown timer that measures the current interval.
#[derive(Debug)]
pub struct SessionSequencer {
    config: SessionConfig,
    kind: SessionKind,
    sessions_remaining: u32,
    timer: CountdownTimer,
}

impl SessionSequencer {
    pub fn new() -> Self {
        Self {
            config: SessionConfig::default(),
            kind: SessionKind::Idle,
            sessions_remaining: 0,
            timer: CountdownTimer::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn sessions_remaining(&self) -> u32 {
        self.sessions_remaining
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn elapsed(&self) -> f64 {
        self.timer.elapsed()
    }

    pub fn remaining(&self) -> Option<f64> {
        self.timer.remaining()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            kind: self.kind,
            running: self.timer.is_running(),
            elapsed_secs: self.timer.elapsed(),
            limit_secs: self.timer.limit_secs(),
            remaining_secs: self.timer.remaining(),
            sessions_remaining: self.sessions_remaining,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start a new chain. Only valid from `Idle`; the configuration is
    /// validated before any state is touched, so a rejected begin leaves
    /// no side effect.
    pub fn begin(&mut self, config: SessionConfig) -> Result<Event> {
        if self.kind != SessionKind::Idle {
            return Err(CoreError::InvalidState {
                operation: "begin",
                state: self.kind,
            });
        }
        config.validate()?;

        tracing::debug!(
            study_secs = config.study_secs,
            break_secs = config.break_secs,
            total_sessions = config.total_sessions,
            "chain started"
        );
        self.sessions_remaining = config.total_sessions;
        self.config = config;
        Ok(self.enter(SessionKind::Study))
    }

    /// Abort the chain from any state. Partial progress is discarded and
    /// the sequencer returns to `Idle`. Total: never fails.
    pub fn halt_all(&mut self) -> Event {
        self.timer.stop();
        self.timer.set_limit(0.0);
        self.timer.reset();
        self.kind = SessionKind::Idle;
        self.sessions_remaining = 0;
        tracing::debug!("chain halted");
        Event::Halted { at: Utc::now() }
    }

    /// Suspend the current interval without losing accumulated progress.
    pub fn pause(&mut self) -> Result<Event> {
        self.guard_active("pause")?;
        self.timer.stop();
        Ok(Event::SessionPaused {
            kind: self.kind,
            elapsed_secs: self.timer.elapsed(),
            at: Utc::now(),
        })
    }

    /// Continue a paused interval from where it left off.
    pub fn resume(&mut self) -> Result<Event> {
        self.guard_active("resume")?;
        self.timer.start();
        Ok(Event::SessionResumed {
            kind: self.kind,
            elapsed_secs: self.timer.elapsed(),
            at: Utc::now(),
        })
    }

    /// Abandon the rest of the current interval and advance the chain as
    /// if it had completed naturally.
    pub fn skip(&mut self) -> Result<Vec<Event>> {
        self.guard_active("skip")?;
        self.timer.stop();
        let mut events = vec![Event::SessionSkipped {
            kind: self.kind,
            elapsed_secs: self.timer.elapsed(),
            at: Utc::now(),
        }];
        events.extend(self.advance());
        Ok(events)
    }

    /// Sample the owned timer. Returns the events produced by this tick:
    /// an elapsed update while running, or on completion the limit event
    /// followed by whatever the chain rule produces next.
    pub fn tick(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        match self.timer.tick() {
            Some(TickOutcome::Progress { elapsed_secs }) => {
                // Derive remaining from the same sample so the pair is
                // consistent for the consumer.
                let limit_secs = self.timer.limit_secs();
                let remaining_secs = if limit_secs > 0.0 {
                    Some((limit_secs - elapsed_secs).max(0.0))
                } else {
                    None
                };
                events.push(Event::ElapsedChanged {
                    elapsed_secs,
                    remaining_secs,
                    at: Utc::now(),
                });
            }
            Some(TickOutcome::LimitReached) => {
                events.push(Event::LimitReached {
                    kind: self.kind,
                    at: Utc::now(),
                });
                events.extend(self.advance());
            }
            None => {}
        }
        events
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn guard_active(&self, operation: &'static str) -> Result<()> {
        if self.kind == SessionKind::Idle {
            return Err(CoreError::InvalidState {
                operation,
                state: self.kind,
            });
        }
        Ok(())
    }

    /// Apply the chain rule after the current interval ends. A completed
    /// study leads into its break; a completed break closes one session
    /// unit and either starts the next study or ends the chain.
    fn advance(&mut self) -> Option<Event> {
        match self.kind {
            SessionKind::Study => Some(self.enter(SessionKind::Break)),
            SessionKind::Break => {
                self.sessions_remaining -= 1;
                if self.sessions_remaining > 0 {
                    Some(self.enter(SessionKind::Study))
                } else {
                    self.kind = SessionKind::Idle;
                    tracing::debug!("chain complete");
                    Some(Event::ChainComplete { at: Utc::now() })
                }
            }
            SessionKind::Idle => None,
        }
    }

    fn enter(&mut self, kind: SessionKind) -> Event {
        let limit_secs = match kind {
            SessionKind::Study => self.config.study_secs,
            SessionKind::Break => self.config.break_secs,
            SessionKind::Idle => unreachable!("enter is only called for active kinds"),
        };
        self.kind = kind;
        self.timer.set_limit(limit_secs);
        self.timer.reset();
        self.timer.start();
        tracing::debug!(
            kind = %kind,
            limit_secs,
            sessions_remaining = self.sessions_remaining,
            "session started"
        );
        Event::SessionStarted {
            kind,
            limit_secs,
            sessions_remaining: self.sessions_remaining,
            at: Utc::now(),
        }
    }
}

impl Default for SessionSequencer {
    fn default() -> Self {
        Self::new()
    }
}
