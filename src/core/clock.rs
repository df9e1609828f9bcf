use chrono::{Local, NaiveDateTime, Timelike};
use std::cell::Cell;

/// Source of timestamps for newly created reports, risks and comments
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time truncated to whole seconds
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// Clock that returns a fixed instant, advancing by `step_secs` on every call
#[derive(Debug, Clone)]
pub struct ManualClock {
    next: Cell<NaiveDateTime>,
    step_secs: i64,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            next: Cell::new(start),
            step_secs: 0,
        }
    }

    pub fn with_step(mut self, step_secs: i64) -> Self {
        self.step_secs = step_secs;
        self
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        let current = self.next.get();
        self.next
            .set(current + chrono::Duration::seconds(self.step_secs));
        current
    }
}
