//! The injectable current-date provider.
//!
//! Every calculation takes its date from a [`Clock`] sampled by the caller,
//! so results are deterministic under test and can be viewed "as of" any
//! date.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// A source of the current date.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// The wall clock, read in the assessing jurisdiction's time zone.
///
/// A parcel page viewed at 11pm on June 30 in Boston must still show the
/// fiscal year ending that day, so the UTC instant is converted before the
/// date is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    /// Creates a system clock for the given time zone.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// The time zone dates are taken in.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Returns the local date of a UTC instant in this clock's time zone.
    pub fn date_at(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(chrono_tz::America::New_York)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        self.date_at(Utc::now())
    }
}

/// A clock pinned to one date.
///
/// # Example
///
/// ```
/// use assessing_core::clock::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(FixedClock::new(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Creates a clock that always reports `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_reports_its_date() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 15).unwrap();
        let clock = FixedClock::new(date);

        assert_eq!(clock.today(), date);
        assert_eq!(clock.today(), clock.today());
    }

    #[test]
    fn test_clock_reference_is_a_clock() {
        fn sample<C: Clock>(clock: C) -> NaiveDate {
            clock.today()
        }

        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let clock = FixedClock::new(date);
        assert_eq!(sample(&clock), date);
    }

    #[test]
    fn test_system_clock_defaults_to_boston_time() {
        assert_eq!(
            SystemClock::default().timezone(),
            chrono_tz::America::New_York
        );
    }

    #[test]
    fn test_system_clock_uses_local_date_near_midnight() {
        let clock = SystemClock::default();
        // 2024-07-01 02:30 UTC is 2024-06-30 22:30 in Boston (EDT)
        let instant = Utc.with_ymd_and_hms(2024, 7, 1, 2, 30, 0).unwrap();

        assert_eq!(
            clock.date_at(instant),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
        );
    }

    #[test]
    fn test_system_clock_in_utc_keeps_utc_date() {
        let clock = SystemClock::new(chrono_tz::UTC);
        let instant = Utc.with_ymd_and_hms(2024, 7, 1, 2, 30, 0).unwrap();

        assert_eq!(
            clock.date_at(instant),
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
        );
    }
}
