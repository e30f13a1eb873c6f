//! Daily step and water counters and the hydration reminder.

use chrono::{DateTime, Duration, Utc};

/// Default daily step goal.
pub const DEFAULT_STEP_GOAL: u32 = 10_000;
/// Default daily water goal, in glasses.
pub const DEFAULT_WATER_GOAL: u8 = 8;

/// Message shown by the hydration reminder.
pub const HYDRATION_MESSAGE: &str = "💧 Time to drink water! Stay hydrated.";

/// Steps walked and glasses of water drunk today.
#[derive(Debug, Clone, PartialEq)]
pub struct WellnessDay {
    steps: u32,
    water: u8,
    step_goal: u32,
    water_goal: u8,
}

impl Default for WellnessDay {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_GOAL, DEFAULT_WATER_GOAL)
    }
}

impl WellnessDay {
    pub fn new(step_goal: u32, water_goal: u8) -> Self {
        Self {
            steps: 0,
            water: 0,
            step_goal,
            water_goal,
        }
    }

    /// Start from existing counts; water is capped at the goal.
    pub fn with_counts(mut self, steps: u32, water: u8) -> Self {
        self.steps = steps;
        self.water = water.min(self.water_goal);
        self
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn water(&self) -> u8 {
        self.water
    }

    pub fn add_steps(&mut self, steps: u32) -> u32 {
        self.steps = self.steps.saturating_add(steps);
        self.steps
    }

    /// Log one glass. Refused once the daily goal is reached.
    pub fn add_water(&mut self) -> bool {
        if self.water_goal_reached() {
            return false;
        }
        self.water += 1;
        true
    }

    pub fn water_goal_reached(&self) -> bool {
        self.water >= self.water_goal
    }

    /// Step progress as a percentage; may exceed 100.
    pub fn step_progress(&self) -> f64 {
        percent(self.steps as f64, self.step_goal as f64)
    }

    pub fn water_progress(&self) -> f64 {
        percent(self.water as f64, self.water_goal as f64)
    }

    /// Reset the counters for a new day.
    pub fn reset(&mut self) {
        self.steps = 0;
        self.water = 0;
    }
}

fn percent(value: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    value / goal * 100.0
}

/// Fires a transient hydration message at a fixed interval.
///
/// Driven by the caller's clock; `poll` is expected on every UI tick.
#[derive(Debug, Clone)]
pub struct HydrationReminder {
    interval: Duration,
    visible_for: Duration,
    last_fired: DateTime<Utc>,
    visible_until: Option<DateTime<Utc>>,
}

impl HydrationReminder {
    /// Start the interval at `now`.
    pub fn new(interval: Duration, visible_for: Duration, now: DateTime<Utc>) -> Self {
        Self {
            interval,
            visible_for,
            last_fired: now,
            visible_until: None,
        }
    }

    /// Advance to `now`. Returns true when the reminder fires on this tick.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        if self.interval <= Duration::zero() || now - self.last_fired < self.interval {
            return false;
        }
        self.last_fired = now;
        let until = now.checked_add_signed(self.visible_for).unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.visible_until = Some(until);
        tracing::debug!("hydration reminder fired");
        true
    }

    /// The message if it is still on screen at `now`.
    pub fn message(&self, now: DateTime<Utc>) -> Option<&'static str> {
        match self.visible_until {
            Some(until) if now < until => Some(HYDRATION_MESSAGE),
            _ => None,
        }
    }
}
