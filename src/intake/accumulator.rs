//! Press-and-hold sip state machine
//!
//! Pure and single-threaded. The controller wraps it with a tick thread and a
//! mutex; tests drive `tick()` directly.

use serde::{Deserialize, Serialize};

/// Goal and sip size, in the same unit (milliliters)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntakeGoal {
    pub total_goal: u32,
    pub sip_amount: u32,
}

impl Default for IntakeGoal {
    fn default() -> Self {
        Self::new(2100, 5)
    }
}

impl IntakeGoal {
    pub fn new(total_goal: u32, sip_amount: u32) -> Self {
        Self {
            total_goal,
            sip_amount,
        }
    }

    /// Fraction added per sip
    pub fn fill_step(&self) -> f64 {
        if self.total_goal == 0 {
            return 0.0;
        }
        self.sip_amount as f64 / self.total_goal as f64
    }
}

/// Current progress toward the goal
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillState {
    /// Normalized progress in [0.0, 1.0]
    pub fraction: f64,
    /// Milliliters left before the goal is reached
    pub remaining: u32,
}

impl FillState {
    /// Empty state with the whole goal remaining
    pub fn empty(goal: &IntakeGoal) -> Self {
        Self {
            fraction: 0.0,
            remaining: goal.total_goal,
        }
    }

    /// Rebuild a state from a persisted fraction
    ///
    /// Only the fraction is stored, so the remaining amount is derived from it.
    pub fn from_fraction(goal: &IntakeGoal, fraction: f64) -> Self {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let remaining = ((1.0 - fraction) * goal.total_goal as f64).round();
        Self {
            fraction,
            remaining: (remaining.max(0.0) as u32).min(goal.total_goal),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Amount consumed so far, in liters
    pub fn consumed_liters(&self, goal: &IntakeGoal) -> f64 {
        (goal.total_goal.saturating_sub(self.remaining)) as f64 / 1000.0
    }
}

/// Whether the drink button is being held
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SipState {
    #[default]
    Idle,
    Accumulating,
}

impl SipState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SipState::Idle)
    }

    pub fn is_accumulating(&self) -> bool {
        matches!(self, SipState::Accumulating)
    }
}

impl std::fmt::Display for SipState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SipState::Idle => write!(f, "Idle"),
            SipState::Accumulating => write!(f, "Accumulating"),
        }
    }
}

/// What a single tick did
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// A sip was applied
    Sipped(FillState),
    /// Nothing left to drink; the accumulator went idle
    Exhausted,
    /// Tick arrived while idle
    Ignored,
}

/// Bounded counter advanced by ticks while the press is held
#[derive(Clone, Debug)]
pub struct SipAccumulator {
    goal: IntakeGoal,
    fill: FillState,
    state: SipState,
}

impl SipAccumulator {
    pub fn new(goal: IntakeGoal) -> Self {
        Self {
            goal,
            fill: FillState::empty(&goal),
            state: SipState::Idle,
        }
    }

    /// Restore from a persisted fill fraction
    pub fn from_fraction(goal: IntakeGoal, fraction: f64) -> Self {
        Self {
            goal,
            fill: FillState::from_fraction(&goal, fraction),
            state: SipState::Idle,
        }
    }

    pub fn goal(&self) -> IntakeGoal {
        self.goal
    }

    pub fn fill(&self) -> FillState {
        self.fill
    }

    pub fn state(&self) -> SipState {
        self.state
    }

    /// Begin accumulating. Returns false if already accumulating.
    pub fn press_start(&mut self) -> bool {
        if self.state.is_accumulating() {
            return false;
        }
        self.state = SipState::Accumulating;
        true
    }

    /// Stop accumulating. Returns false if already idle.
    pub fn press_end(&mut self) -> bool {
        if self.state.is_idle() {
            return false;
        }
        self.state = SipState::Idle;
        true
    }

    /// Apply one sip if accumulating
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.is_idle() {
            return TickOutcome::Ignored;
        }

        if self.fill.remaining == 0 {
            self.state = SipState::Idle;
            return TickOutcome::Exhausted;
        }

        self.fill.fraction = (self.fill.fraction + self.goal.fill_step()).min(1.0);
        self.fill.remaining = self.fill.remaining.saturating_sub(self.goal.sip_amount);
        TickOutcome::Sipped(self.fill)
    }

    /// Back to empty with the full goal remaining, from any state
    pub fn reset(&mut self) {
        self.fill = FillState::empty(&self.goal);
        self.state = SipState::Idle;
    }
}
