//! Clock and reference timezone handling.
//!
//! "Today" for reservation queries is the start of the current calendar day in the
//! configured reference timezone, expressed as a UTC instant.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Resolves the start of "today" in a reference timezone.
#[derive(Clone)]
pub struct ReferenceDay {
    clock: Arc<dyn Clock>,
    timezone: Tz,
}

impl ReferenceDay {
    pub fn new(clock: Arc<dyn Clock>, timezone: Tz) -> Self {
        Self { clock, timezone }
    }

    /// Midnight of the current local day in the reference timezone, as UTC.
    pub fn start_of_today(&self) -> DateTime<Utc> {
        start_of_day(self.clock.now(), self.timezone)
    }
}

/// Returns the first instant of the local calendar day containing `now` in `timezone`.
///
/// When midnight is ambiguous the earlier instant wins. When midnight falls into a DST
/// gap the naive midnight is interpreted as UTC.
pub fn start_of_day(now: DateTime<Utc>, timezone: Tz) -> DateTime<Utc> {
    let midnight = now
        .with_timezone(&timezone)
        .date_naive()
        .and_time(NaiveTime::MIN);

    timezone
        .from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| timezone.from_utc_datetime(&midnight))
        .with_timezone(&Utc)
}
