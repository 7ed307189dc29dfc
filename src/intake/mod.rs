//! Intake tracking: the sip state machine, its timer, and the controller
//! that owns both.

pub mod accumulator;
pub mod controller;
pub mod ticker;

pub use accumulator::{FillState, IntakeGoal, SipAccumulator, SipState, TickOutcome};
pub use controller::{IntakeEvent, SipController};
pub use ticker::{TickControl, TickHandle};
