//! Source of "today" for expiration checks.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};

/// Calendar clock.
///
/// Expiration status is a projection relative to "today", so anything
/// time-dependent asks a `Clock` instead of reading the wall clock directly.
pub trait Clock {
    /// Current calendar date.
    fn today(&self) -> NaiveDate;

    /// Current instant (used to stamp kitchen events).
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time; "today" is the local calendar date.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one date (midnight UTC).
///
/// Prefer this in tests for determinism.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now(&self) -> DateTime<Utc> {
        self.today.and_time(NaiveTime::MIN).and_utc()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }

    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
