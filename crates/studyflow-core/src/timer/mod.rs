mod countdown;

pub use countdown::{CountdownTimer, TickOutcome};
