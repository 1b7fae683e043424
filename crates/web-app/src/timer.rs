use std::fmt;

use chrono::Duration;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    #[default]
    Unset,
    Active,
    Paused,
}

/// Stopwatch of the exercise that is currently shown.
///
/// The timer does not read the clock itself. The host calls [`Timer::tick`] once per second, and
/// only ticks received while the timer is active are counted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    state: TimerState,
    seconds: u32,
}

impl Timer {
    pub fn start(&mut self) {
        self.state = TimerState::Active;
    }

    pub fn stop(&mut self) {
        if self.state == TimerState::Active {
            self.state = TimerState::Paused;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn tick(&mut self) {
        if self.is_active() {
            self.seconds = self.seconds.saturating_add(1);
        }
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == TimerState::Active
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::seconds(i64::from(self.seconds))
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}
