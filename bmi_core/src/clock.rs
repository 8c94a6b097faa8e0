//! Wall-clock sources for history timestamps.

use crate::Timezone;
use chrono::{Local, NaiveDateTime, Utc};

/// Source of the current date and time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the configured timezone
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self.timezone {
            Timezone::Local => Local::now().naive_local(),
            Timezone::Utc => Utc::now().naive_utc(),
        }
    }
}

/// Always returns the same instant
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
