// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Calendar helpers over the `time` crate.
//!
//! Month-bound arithmetic saturates at [`Date::MIN`]/[`Date::MAX`] instead
//! of panicking. Weekday searches stay within the current month except
//! [`DateExt::next`].

use time::util::is_leap_year;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, Time, Weekday};
use tracing::debug;

use crate::error::{ExtError, Result};

fn shift_days(date: Date, days: i64) -> Date {
    date.saturating_add(Duration::days(days))
}

/// Extension methods for [`time::Date`].
///
/// ```
/// use echo_ext::calendar::DateExt;
/// use time::{Date, Month, Weekday};
///
/// let day = Date::from_calendar_date(2000, Month::January, 1).unwrap();
/// assert_eq!(day.last(Weekday::Saturday).day(), 29);
/// assert_eq!(day.next(Weekday::Saturday).day(), 8);
/// ```
pub trait DateExt: Sized {
    /// Whole calendar years elapsed from `self` (a birth date) to
    /// `reference`. The count increments on the anniversary itself.
    fn age_at(self, reference: Date) -> i32;

    /// [`DateExt::age_at`] against today's UTC date.
    fn age(self) -> i32;

    /// First day of the same month.
    fn first_day_of_month(self) -> Self;

    /// Last day of the same month.
    fn last_day_of_month(self) -> Self;

    /// First occurrence of `weekday` in the same month.
    fn first(self, weekday: Weekday) -> Self;

    /// Last occurrence of `weekday` in the same month.
    fn last(self, weekday: Weekday) -> Self;

    /// Next occurrence of `weekday` strictly after `self`.
    ///
    /// # Panics
    /// Panics when the result would pass [`Date::MAX`].
    fn next(self, weekday: Weekday) -> Self;

    /// `true` when the year is a Gregorian leap year.
    fn is_leap_year(self) -> bool;

    /// ISO 8601 week number (1..=53).
    fn iso_week_of_year(self) -> u8;
}

impl DateExt for Date {
    fn age_at(self, reference: Date) -> i32 {
        let mut years = reference.year() - self.year();
        let birthday = (u8::from(self.month()), self.day());
        let today = (u8::from(reference.month()), reference.day());
        if today < birthday {
            years -= 1;
        }
        years
    }

    fn age(self) -> i32 {
        self.age_at(OffsetDateTime::now_utc().date())
    }

    fn first_day_of_month(self) -> Self {
        shift_days(self, 1 - i64::from(self.day()))
    }

    fn last_day_of_month(self) -> Self {
        let length = self.month().length(self.year());
        shift_days(self, i64::from(length) - i64::from(self.day()))
    }

    fn first(self, weekday: Weekday) -> Self {
        let first = self.first_day_of_month();
        let offset = (i64::from(weekday.number_days_from_monday())
            - i64::from(first.weekday().number_days_from_monday()))
        .rem_euclid(7);
        shift_days(first, offset)
    }

    fn last(self, weekday: Weekday) -> Self {
        let last = self.last_day_of_month();
        let offset = (i64::from(last.weekday().number_days_from_monday())
            - i64::from(weekday.number_days_from_monday()))
        .rem_euclid(7);
        shift_days(last, -offset)
    }

    fn next(self, weekday: Weekday) -> Self {
        self.next_occurrence(weekday)
    }

    fn is_leap_year(self) -> bool {
        is_leap_year(self.year())
    }

    fn iso_week_of_year(self) -> u8 {
        self.iso_week()
    }
}

/// Date helpers lifted to date-time values, plus fixed times of day.
pub trait DateTimeExt: Sized {
    /// Same date at 00:00:00.
    fn midnight(self) -> Self;

    /// Same date at 12:00:00.
    fn noon(self) -> Self;

    /// First day of the same month, time of day preserved.
    fn first_day_of_month(self) -> Self;

    /// Last day of the same month, time of day preserved.
    fn last_day_of_month(self) -> Self;
}

fn noon() -> Time {
    Time::MIDNIGHT + Duration::hours(12)
}

impl DateTimeExt for PrimitiveDateTime {
    fn midnight(self) -> Self {
        self.replace_time(Time::MIDNIGHT)
    }

    fn noon(self) -> Self {
        self.replace_time(noon())
    }

    fn first_day_of_month(self) -> Self {
        self.replace_date(self.date().first_day_of_month())
    }

    fn last_day_of_month(self) -> Self {
        self.replace_date(self.date().last_day_of_month())
    }
}

impl DateTimeExt for OffsetDateTime {
    fn midnight(self) -> Self {
        self.replace_time(Time::MIDNIGHT)
    }

    fn noon(self) -> Self {
        self.replace_time(noon())
    }

    fn first_day_of_month(self) -> Self {
        self.replace_date(self.date().first_day_of_month())
    }

    fn last_day_of_month(self) -> Self {
        self.replace_date(self.date().last_day_of_month())
    }
}

/// Unix timestamps of an offset date-time.
pub trait ToUnixTime {
    /// Whole seconds since 1970-01-01T00:00:00Z.
    fn to_unix_seconds(self) -> i64;

    /// Whole milliseconds since 1970-01-01T00:00:00Z, rounded toward
    /// negative infinity.
    fn to_unix_millis(self) -> i64;
}

impl ToUnixTime for OffsetDateTime {
    fn to_unix_seconds(self) -> i64 {
        self.unix_timestamp()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn to_unix_millis(self) -> i64 {
        self.unix_timestamp_nanos().div_euclid(1_000_000) as i64
    }
}

/// Builds date-times from Unix timestamps.
///
/// ```
/// use echo_ext::calendar::UnixTimeExt;
///
/// let t = 946_684_800_i64.from_unix_seconds().unwrap();
/// assert_eq!(t.year(), 2000);
/// ```
#[allow(clippy::wrong_self_convention)]
pub trait UnixTimeExt {
    /// Interprets the value as seconds since the Unix epoch.
    fn from_unix_seconds(self) -> Result<OffsetDateTime>;

    /// Interprets the value as milliseconds since the Unix epoch.
    fn from_unix_millis(self) -> Result<OffsetDateTime>;
}

fn from_unix_nanos(nanos: i128) -> Result<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(nanos).map_err(|err| {
        debug!(%nanos, %err, "unix timestamp out of range");
        ExtError::from(err)
    })
}

impl UnixTimeExt for i64 {
    fn from_unix_seconds(self) -> Result<OffsetDateTime> {
        from_unix_nanos(i128::from(self) * 1_000_000_000)
    }

    fn from_unix_millis(self) -> Result<OffsetDateTime> {
        from_unix_nanos(i128::from(self) * 1_000_000)
    }
}

impl UnixTimeExt for u32 {
    fn from_unix_seconds(self) -> Result<OffsetDateTime> {
        i64::from(self).from_unix_seconds()
    }

    fn from_unix_millis(self) -> Result<OffsetDateTime> {
        i64::from(self).from_unix_millis()
    }
}

/// Leap-year test on a bare year number.
pub trait YearExt {
    /// Gregorian leap-year rule; year zero is rejected with
    /// [`ExtError::YearZero`].
    fn is_leap_year(self) -> Result<bool>;
}

impl YearExt for i32 {
    fn is_leap_year(self) -> Result<bool> {
        if self == 0 {
            return Err(ExtError::YearZero);
        }
        Ok(is_leap_year(self))
    }
}

impl YearExt for u32 {
    #[allow(clippy::cast_possible_wrap)]
    fn is_leap_year(self) -> Result<bool> {
        if self == 0 {
            return Err(ExtError::YearZero);
        }
        // The Gregorian cycle repeats every 400 years.
        Ok(is_leap_year((self % 400) as i32))
    }
}

/// Integer quantities as [`time::Duration`] values.
///
/// Unit multiplication saturates at the bounds of `i64` seconds.
///
/// ```
/// use echo_ext::calendar::DurationExt;
///
/// assert_eq!(2_i32.hours(), time::Duration::minutes(120));
/// assert_eq!(10_000_000_i64.ticks(), time::Duration::SECOND);
/// ```
pub trait DurationExt: Copy {
    /// 100-nanosecond intervals.
    fn ticks(self) -> Duration;
    /// Milliseconds.
    fn milliseconds(self) -> Duration;
    /// Seconds.
    fn seconds(self) -> Duration;
    /// Minutes.
    fn minutes(self) -> Duration;
    /// Hours.
    fn hours(self) -> Duration;
    /// Days.
    fn days(self) -> Duration;
    /// Weeks.
    fn weeks(self) -> Duration;
}

const TICKS_PER_SECOND: i64 = 10_000_000;

macro_rules! duration_ext_impl {
    ($($t:ty),* $(,)?) => {$(
        impl DurationExt for $t {
            #[allow(clippy::cast_possible_truncation)]
            fn ticks(self) -> Duration {
                let v = i64::from(self);
                let secs = v.div_euclid(TICKS_PER_SECOND);
                let nanos = (v.rem_euclid(TICKS_PER_SECOND) * 100) as i32;
                Duration::new(secs, nanos)
            }

            fn milliseconds(self) -> Duration {
                Duration::milliseconds(i64::from(self))
            }

            fn seconds(self) -> Duration {
                Duration::seconds(i64::from(self))
            }

            fn minutes(self) -> Duration {
                Duration::seconds(i64::from(self).saturating_mul(60))
            }

            fn hours(self) -> Duration {
                Duration::seconds(i64::from(self).saturating_mul(3_600))
            }

            fn days(self) -> Duration {
                Duration::seconds(i64::from(self).saturating_mul(86_400))
            }

            fn weeks(self) -> Duration {
                Duration::seconds(i64::from(self).saturating_mul(604_800))
            }
        }
    )*};
}

duration_ext_impl!(i8, i16, i32, i64, u8, u16, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_ticks_borrow_from_seconds() {
        assert_eq!((-1_i64).ticks(), Duration::nanoseconds(-100));
    }
}
