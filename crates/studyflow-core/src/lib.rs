//! # Studyflow Core Library
//!
//! This library provides the core business logic for the Studyflow session
//! timer: a pausable countdown timer and a sequencer that chains alternating
//! study and break intervals for a configured number of repetitions. The
//! CLI binary (and any other front end) is a thin presentation layer over
//! this crate.
//!
//! ## Architecture
//!
//! - **Countdown Timer**: a wall-clock-sampled accumulator that requires
//!   the caller to periodically invoke `tick()` for progress updates
//! - **Session Sequencer**: a state machine over `{Idle, Study, Break}`
//!   that owns one timer and reacts to its completion to advance the chain
//! - **Events**: every state change is reported as a typed [`Event`] value;
//!   there is no observer registration and no rendering coupling
//!
//! ## Key Components
//!
//! - [`CountdownTimer`]: elapsed-vs-limit tracking for a single interval
//! - [`SessionSequencer`]: chain configuration and session state machine
//! - [`SessionConfig`]: validated durations and repeat count
//! - [`input`]: free-form text parsing for configuration at the boundary

pub mod error;
pub mod events;
pub mod input;
pub mod session;
pub mod timer;

pub use error::{CoreError, Result};
pub use events::Event;
pub use session::{SessionConfig, SessionKind, SessionSequencer};
pub use timer::{CountdownTimer, TickOutcome};
