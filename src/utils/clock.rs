//! Time source and configured timezone.
//!
//! Everything that needs "now" or "today" goes through a [`Clock`], so the
//! daily reset and the time stamping can be driven from tests.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};
use std::cell::Cell;

/// Timezone used to decide the calendar day and to format timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    /// Accepts `local`, `utc` / `z`, or a fixed offset like `+02:00`, `-0530`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let t = s.trim();
        match t.to_ascii_lowercase().as_str() {
            "local" | "" => return Ok(Zone::Local),
            "utc" | "z" | "gmt" => return Ok(Zone::Fixed(utc_offset())),
            _ => {}
        }

        let invalid = || AppError::InvalidArgument(format!("Invalid timezone: {s}"));

        let (sign, rest) = match t.as_bytes().first() {
            Some(b'+') => (1, &t[1..]),
            Some(b'-') => (-1, &t[1..]),
            _ => return Err(invalid()),
        };
        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let hours: i32 = digits[..2].parse().map_err(|_| invalid())?;
        let minutes: i32 = digits[2..].parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Zone::Fixed)
            .ok_or_else(invalid)
    }

    pub fn convert(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Zone::Local => instant.with_timezone(&Local).fixed_offset(),
            Zone::Fixed(off) => instant.with_timezone(off),
        }
    }
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;

    fn zone(&self) -> Zone;

    /// Current wall time in the configured zone.
    fn now(&self) -> DateTime<FixedOffset> {
        self.zone().convert(self.now_utc())
    }

    /// Current calendar day in the configured zone.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_utc(&self) -> DateTime<Utc> {
        (**self).now_utc()
    }

    fn zone(&self) -> Zone {
        (**self).zone()
    }
}

/// Wall clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    zone: Zone,
}

impl SystemClock {
    pub fn new(zone: Zone) -> Self {
        Self { zone }
    }
}

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn zone(&self) -> Zone {
        self.zone
    }
}

/// Manually driven clock.
#[derive(Debug)]
pub struct FixedClock {
    instant: Cell<DateTime<Utc>>,
    zone: Zone,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>, zone: Zone) -> Self {
        Self {
            instant: Cell::new(instant),
            zone,
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        self.instant.set(instant);
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.instant.set(self.instant.get() + by);
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.instant.get()
    }

    fn zone(&self) -> Zone {
        self.zone
    }
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn now_utc(&self) -> DateTime<Utc> {
        (**self).now_utc()
    }

    fn zone(&self) -> Zone {
        (**self).zone()
    }
}

/// Wall clock, or a frozen one when `RHOUSEKEEPER_NOW` holds an RFC 3339
/// instant (used to replay a given day).
pub fn clock_from_env(zone: Zone) -> AppResult<Box<dyn Clock>> {
    match std::env::var("RHOUSEKEEPER_NOW") {
        Ok(raw) if !raw.trim().is_empty() => {
            let instant = DateTime::parse_from_rfc3339(raw.trim())
                .map_err(|e| AppError::InvalidArgument(format!("RHOUSEKEEPER_NOW: {e}")))?;
            Ok(Box::new(FixedClock::new(instant.with_timezone(&Utc), zone)))
        }
        _ => Ok(Box::new(SystemClock::new(zone))),
    }
}
