//! Utilities for dealing with time (UTC and Unix timestamps), unaware of timezone.
//!
//! This module provides utilities to get the current Unix time with nanosecond granularity
//! and proleptic Gregorian calendar utilities to convert to/from Unix time. Timestamps before the
//! Unix epoch are supported. Since the calendar functions do not rely on libc's mktime and gmtime
//! functions, they are completely thread safe and independent of the host's local timezone.
//!
//! # Examples
//!
//! ```
//! # use time::time::Tm;
//! let date = Tm::new(-86400).unwrap();
//! assert_eq!(date, Tm {
//! 	sec: 0,
//! 	min: 0,
//! 	hour: 0,
//! 	day: 31,
//! 	mon: 12,
//! 	year: 1969,
//! 	wday: 3,
//! 	yday: 365
//! });
//! ```

use core::ops::{Add, AddAssign};
#[cfg(feature = "now")]
use core::mem::MaybeUninit;
#[cfg(feature = "now")]
use libc::{timespec, clock_gettime, CLOCK_REALTIME};

/// Helper type to support math on [`TimeSpec`]s. Represents seconds.
///
/// # Examples
///
/// ```
/// # use time::time::{Seconds, TimeSpec};
/// let c = TimeSpec { sec: 1735732800, nsec: 123456789 };
/// assert_eq!(c + Seconds(10), TimeSpec { sec: c.sec + 10, nsec: c.nsec });
/// ```
#[repr(transparent)]
pub struct Seconds(pub i64);

/// Helper type to support math on [`TimeSpec`]s. Represents nanoseconds.
///
/// Adding nanoseconds to a [`TimeSpec`] will roll over seconds in either direction as needed.
///
/// # Examples
///
/// ```
/// # use time::time::{Nanoseconds, TimeSpec};
/// let mut c = TimeSpec { sec: 1735732800, nsec: 999999999 };
/// assert_eq!(c + Nanoseconds(10), TimeSpec { sec: c.sec + 1, nsec: 9 });
/// c.nsec = 0;
/// assert_eq!(c + Nanoseconds(-10), TimeSpec { sec: c.sec - 1, nsec: 999999990 });
/// ```
#[repr(transparent)]
pub struct Nanoseconds(pub i64);

/// Nanoseconds per second.
const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Unix time with nanosecond granularity.
///
/// `nsec` is always in [0, 999999999], also for times before the epoch: one nanosecond before
/// the epoch is `{ sec: -1, nsec: 999999999 }`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeSpec {
	/// Seconds since the Unix epoch
	pub sec: i64,
	/// Nanoseconds since the beginning of `sec`, ranging [0-999999999]
	pub nsec: i64
}

#[cfg_attr(docsrs, doc(cfg(feature = "now")))]
#[cfg(feature = "now")]
impl From<timespec> for TimeSpec {
	/// Convert from `libc::timespec` to [`TimeSpec`] for better math ergonomics
	fn from(value: timespec) -> Self {
		TimeSpec {
			sec: value.tv_sec as i64,
			nsec: value.tv_nsec as i64
		}
	}
}

impl TimeSpec {
	/// Convert floating point seconds since the epoch to a [`TimeSpec`], rounding to the nearest
	/// nanosecond.
	///
	/// Returns `None` for NaN, infinities and values outside the range of `i64` seconds.
	///
	/// # Examples
	///
	/// ```
	/// # use time::time::TimeSpec;
	/// assert_eq!(TimeSpec::from_secs_f64(1.5), Some(TimeSpec { sec: 1, nsec: 500000000 }));
	/// assert_eq!(TimeSpec::from_secs_f64(-1.25), Some(TimeSpec { sec: -2, nsec: 750000000 }));
	/// assert_eq!(TimeSpec::from_secs_f64(f64::NAN), None);
	/// ```
	pub fn from_secs_f64(secs: f64) -> Option<TimeSpec> {
		// i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
		if !secs.is_finite() || secs < i64::MIN as f64 || secs >= i64::MAX as f64 {
			return None;
		}
		// Floor without std: truncation rounds towards zero
		let mut sec = secs as i64;
		if sec as f64 > secs {
			sec -= 1;
		}
		let frac = secs - sec as f64;
		let nsec = (frac * NANOS_PER_SECOND as f64 + 0.5) as i64;
		Some(TimeSpec { sec, nsec: 0 } + Nanoseconds(nsec))
	}

	/// Convert to floating point seconds since the epoch.
	pub fn as_secs_f64(&self) -> f64 {
		self.sec as f64 + self.nsec as f64 / NANOS_PER_SECOND as f64
	}
}

impl Add<Seconds> for TimeSpec {
	type Output = Self;

	/// Add `rhs` seconds to `self`.
	fn add(mut self, rhs: Seconds) -> Self::Output {
		self.sec += rhs.0;
		self
	}
}

impl AddAssign<Seconds> for TimeSpec {
	/// Add `rhs` seconds to `self`.
	fn add_assign(&mut self, rhs: Seconds) {
		*self = *self + rhs;
	}
}

impl Add<Nanoseconds> for TimeSpec {
	type Output = Self;

	/// Add `rhs` nanoseconds to `self`, rolling over seconds as needed to ensure `nsec` stays in
	/// the range of [0-999999999].
	fn add(mut self, rhs: Nanoseconds) -> Self::Output {
		let nsec = self.nsec + rhs.0;
		self.sec += nsec.div_euclid(NANOS_PER_SECOND);
		self.nsec = nsec.rem_euclid(NANOS_PER_SECOND);
		self
	}
}

impl AddAssign<Nanoseconds> for TimeSpec {
	/// Add `rhs` nanoseconds to `self`, rolling over seconds as needed to ensure `nsec` stays in
	/// the range of [0-999999999].
	fn add_assign(&mut self, rhs: Nanoseconds) {
		*self = *self + rhs;
	}
}

impl Add for TimeSpec {
	type Output = Self;

	fn add(self, rhs: TimeSpec) -> Self::Output {
		self + Seconds(rhs.sec) + Nanoseconds(rhs.nsec)
	}
}

/// Get the current time as a Unix timestamp with nanosecond granularity.
///
/// This function will return `None` if `libc::clock_gettime` fails.
///
/// This function is thread safe.
///
/// # Examples
///
/// ```
/// # use time::time::now;
/// let c = now().expect("Failed to get current time");
/// assert!(c.sec > 0);
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "now")))]
#[cfg(feature = "now")]
pub fn now() -> Option<TimeSpec> {
	let mut time = MaybeUninit::<timespec>::uninit();
	// Safety:
	// - clock_gettime does not read time, only writes
	// - if clock_gettime returns zero, time is successfully initialized
	unsafe {
		match clock_gettime(CLOCK_REALTIME, time.as_mut_ptr()) {
			0 => Some(time.assume_init().into()),
			_ => None
		}
	}
}

/// Check whether a given `year` is a leap year.
///
/// Year must be the absolute (proleptic) Gregorian calendar year, i.e. 2024. Year 0 and negative
/// years follow astronomical year numbering, so year 0 is a leap year.
///
/// # Examples
///
/// ```
/// # use time::time::isleapyear;
/// assert_eq!(isleapyear(1900), false);
/// assert_eq!(isleapyear(2000), true);
/// assert_eq!(isleapyear(2023), false);
/// assert_eq!(isleapyear(2024), true);
/// assert_eq!(isleapyear(-4), true);
/// ```
#[inline(always)]
pub fn isleapyear(year: i32) -> bool {
	let l = if year % 100 != 0 { 3 } else { 15 };
	(year & l) == 0
}

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Seconds per hour.
pub const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * 60;
/// Seconds per day.
pub const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * 24;
/// Days per non-leap year.
const DAYS_PER_NON_LEAP_YEAR: i64 = 365;
/// Leap years occur every 4 years...
const YEARS_PER_LEAP_YEAR_1: i64 = 4;
/// ... except every 100, unless it's the end of the era.
const YEARS_PER_LEAP_YEAR_2: i64 = 100;
/// Number of years per era.
const YEARS_PER_ERA: i64 = 400;
/// Number of days every 4 years, excluding the leap day.
const DAYS_PER_LEAP_YEAR_1: i64 = YEARS_PER_LEAP_YEAR_1 * DAYS_PER_NON_LEAP_YEAR;
/// Number of days every 100 years, excluding the last leap day.
const DAYS_PER_LEAP_YEAR_2: i64 = YEARS_PER_LEAP_YEAR_2 * DAYS_PER_NON_LEAP_YEAR
                                + YEARS_PER_LEAP_YEAR_2 / YEARS_PER_LEAP_YEAR_1 - 1;
/// Number of days every era (400 years), excluding the last leap day.
const DAYS_PER_LEAP_YEAR_3: i64 = YEARS_PER_ERA * DAYS_PER_NON_LEAP_YEAR
                                + (YEARS_PER_ERA / YEARS_PER_LEAP_YEAR_2)
                                * (YEARS_PER_LEAP_YEAR_2 / YEARS_PER_LEAP_YEAR_1 - 1);
/// Number of days every era (400 years).
const DAYS_PER_ERA: i64 = DAYS_PER_LEAP_YEAR_3 + 1;
/// Days from January 1 to February 28, inclusive.
const DAYS_FROM_JAN_TO_FEB: i64 = 31 + 28;
/// Days per week.
const DAYS_PER_WEEK: i64 = 7;
/// Days from March 1, 0000 to January 1, 1970.
const DAYS_FROM_JAN_1970_TO_MARCH_0000: i64 = (1970 / YEARS_PER_ERA) * DAYS_PER_ERA
                                            + (1970 % YEARS_PER_ERA) * DAYS_PER_NON_LEAP_YEAR
                                            + (1970 % YEARS_PER_ERA) / YEARS_PER_LEAP_YEAR_1
                                            - (1970 % YEARS_PER_ERA) / YEARS_PER_LEAP_YEAR_2
                                            - DAYS_FROM_JAN_TO_FEB;

/// Gregorian calendar date, similar to [`libc::tm`] with some small incompatibilities.
///
/// Key differences:
/// - `mon` is [0, 11] in [`libc::tm`] but [1, 12] in [`Tm`].
/// - `yday` is [0, 365] in [`libc::tm`] but [1, 366] in [`Tm`].
/// - `year` is years since 1900 in [`libc::tm`] but the absolute year in [`Tm`].
///
/// # Examples
///
/// ```
/// # use time::time::Tm;
/// let date = Tm::new(1718617807).unwrap();
/// assert_eq!(date, Tm {
/// 	sec: 7,
/// 	min: 50,
/// 	hour: 9,
/// 	day: 17,
/// 	mon: 6,
/// 	year: 2024,
/// 	wday: 1,
/// 	yday: 169
/// });
/// assert_eq!(date.timestamp(), 1718617807);
/// ```
#[derive(Clone, Copy)]
#[derive(Debug, PartialEq)]
pub struct Tm {
	/// Seconds, ranged [0, 59]
	pub sec: u8,
	/// Minutes, ranged [0, 59]
	pub min: u8,
	/// Hours, ranged [0, 23]
	pub hour: u8,
	/// Day of the month, ranged [1, 31]
	pub day: u8,
	/// Month of the year, ranged [1, 12]
	pub mon: u8,
	/// Absolute (proleptic) Gregorian calendar year
	pub year: i32,
	/// Day of the week, ranged [0, 6] => [Sunday, Saturday]
	pub wday: u8,
	/// Day of the year, ranged [1, 366]
	pub yday: u16
}

impl Tm {
	/// Convert a Unix timestamp into a calendar date.
	///
	/// Negative timestamps are dates before the Unix epoch. Returns `None` only if the resulting
	/// year does not fit into an `i32`.
	pub fn new(unixtimestamp: i64) -> Option<Tm> {
		let days = unixtimestamp.div_euclid(SECONDS_PER_DAY);
		let rem = unixtimestamp.rem_euclid(SECONDS_PER_DAY);
		let (y, m, d) = civil_from_days(days);
		let year = i32::try_from(y).ok()?;
		let yday = days - days_from_civil(year, 1, 1) + 1;

		Some(Tm {
			sec: (rem % SECONDS_PER_MINUTE) as u8,
			min: (rem % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8,
			hour: (rem / SECONDS_PER_HOUR) as u8,
			day: d,
			mon: m,
			year,
			wday: wday_from_days(days),
			yday: yday as u16
		})
	}

	/// Build a calendar date from its fields, filling in `wday` and `yday`.
	///
	/// The fields are not validated; out of range values produce a meaningless `Tm`.
	pub fn from_fields(year: i32, mon: u8, day: u8, hour: u8, min: u8, sec: u8) -> Tm {
		let days = days_from_civil(year, mon, day);
		Tm {
			sec,
			min,
			hour,
			day,
			mon,
			year,
			wday: wday_from_days(days),
			yday: (days - days_from_civil(year, 1, 1) + 1) as u16
		}
	}

	/// Convert the calendar date back into seconds since the epoch, treating it as UTC.
	///
	/// For a date that came from a timezone (see [`crate::tz::Timezone::date`]) this is the
	/// "local seconds" value accepted by [`crate::tz::Timezone::local_to_utc`].
	pub fn timestamp(&self) -> i64 {
		days_from_civil(self.year, self.mon, self.day) * SECONDS_PER_DAY
			+ self.hour as i64 * SECONDS_PER_HOUR
			+ self.min as i64 * SECONDS_PER_MINUTE
			+ self.sec as i64
	}

	/// Check whether `self` is a leap year.
	#[inline(always)]
	pub fn isleapyear(&self) -> bool {
		isleapyear(self.year)
	}
}

/// Get the number of days since January 1, 1970 for a given year, month, and day.
///
/// This uses the proleptic Gregorian calendar and works for dates before 1970. The algorithm
/// rotates the year to Mar-Feb, which puts the leap day at the end of the rotated year, and takes
/// advantage of the 400 year cycle in the Gregorian calendar.
///
/// More details:
/// http://howardhinnant.github.io/date_algorithms.html#days_from_civil
///
/// # Examples
///
/// ```
/// # use time::time::days_from_civil;
/// assert_eq!(days_from_civil(1970, 1, 1), 0);
/// assert_eq!(days_from_civil(2000, 3, 1), 11017);
/// assert_eq!(days_from_civil(1969, 12, 31), -1);
/// ```
pub fn days_from_civil(y: i32, m: u8, d: u8) -> i64 {
	let y = if m < 3 { y as i64 - 1 } else { y as i64 };
	let era = y.div_euclid(YEARS_PER_ERA);
	let yoe = y.rem_euclid(YEARS_PER_ERA);
	let mp = if m > 2 { m as i64 - 3 } else { m as i64 + 9 };
	// Linear equation that calculates the day of the (rotated) year for the start of month mp
	let doy = (153 * mp + 2) / 5 + d as i64 - 1;
	let doe = yoe * DAYS_PER_NON_LEAP_YEAR
			+ yoe / YEARS_PER_LEAP_YEAR_1
			- yoe / YEARS_PER_LEAP_YEAR_2
			+ doy;
	era * DAYS_PER_ERA + doe - DAYS_FROM_JAN_1970_TO_MARCH_0000
}

/// Get the year, month, and day for a given number of days since January 1, 1970.
///
/// This is the inverse of [`days_from_civil`]. The year is returned as an `i64` since the
/// input range exceeds what fits in an `i32`.
///
/// More details:
/// http://howardhinnant.github.io/date_algorithms.html#civil_from_days
///
/// # Examples
///
/// ```
/// # use time::time::civil_from_days;
/// assert_eq!(civil_from_days(0), (1970, 1, 1));
/// assert_eq!(civil_from_days(11017), (2000, 3, 1));
/// assert_eq!(civil_from_days(-1), (1969, 12, 31));
/// ```
pub fn civil_from_days(days: i64) -> (i64, u8, u8) {
	let z = days + DAYS_FROM_JAN_1970_TO_MARCH_0000;
	let era = z.div_euclid(DAYS_PER_ERA);
	let doe = z.rem_euclid(DAYS_PER_ERA);
	let yoe = (doe
		       - doe / DAYS_PER_LEAP_YEAR_1
		       + doe / DAYS_PER_LEAP_YEAR_2
		       - doe / DAYS_PER_LEAP_YEAR_3
		      ) / DAYS_PER_NON_LEAP_YEAR;
	let y = yoe + era * YEARS_PER_ERA;
	let doy = doe - (DAYS_PER_NON_LEAP_YEAR * yoe
	                 + yoe / YEARS_PER_LEAP_YEAR_1
	                 - yoe / YEARS_PER_LEAP_YEAR_2);
	// Linear equation that calculates the month from a day of the (rotated) year
	let mp = (5 * doy + 2) / 153;
	let d = doy - (153 * mp + 2) / 5 + 1;
	// Convert from Mar-Feb year to Jan-Dec year
	if mp < 10 {
		(y, (mp + 3) as u8, d as u8)
	} else {
		(y + 1, (mp - 9) as u8, d as u8)
	}
}

/// Get the Unix timestamp for 00:00:00 UTC on a given year and day of year.
///
/// `y` must be the absolute Gregorian calendar year, and `doy` the zero-indexed day of year
/// starting at January 1. If `leap == true`, then `doy = 59` means February 29 in leap years,
/// otherwise it always means March 1.
///
/// # Examples
///
/// ```
/// # use time::time::timestamp_from_yd;
/// assert_eq!(timestamp_from_yd(2024, 58, true), 1709078400);  // Feb 28, 2024
/// assert_eq!(timestamp_from_yd(2024, 59, true), 1709164800);  // Feb 29, 2024
/// assert_eq!(timestamp_from_yd(2024, 60, true), 1709251200);  // Mar  1, 2024
/// assert_eq!(timestamp_from_yd(2024, 58, false), 1709078400); // Feb 28, 2024
/// assert_eq!(timestamp_from_yd(2024, 59, false), 1709251200); // Mar  1, 2024
/// ```
pub fn timestamp_from_yd(y: i32, doy: u16, leap: bool) -> i64 {
	let skip = !leap && isleapyear(y) && doy as i64 >= DAYS_FROM_JAN_TO_FEB;
	SECONDS_PER_DAY * (days_from_civil(y, 1, 1) + doy as i64 + skip as i64)
}

/// Get the Unix timestamp for 00:00:00 UTC on a given year, month, and day.
///
/// `y` must be the absolute Gregorian calendar year, `m` the 1-indexed month starting at January,
/// and `d` the day of the month.
///
/// # Examples
///
/// ```
/// # use time::time::timestamp_from_ymd;
/// assert_eq!(timestamp_from_ymd(2024, 2, 28), 1709078400);
/// assert_eq!(timestamp_from_ymd(2024, 2, 29), 1709164800);
/// assert_eq!(timestamp_from_ymd(1900, 1, 1), -2208988800);
/// ```
pub fn timestamp_from_ymd(y: i32, m: u8, d: u8) -> i64 {
	SECONDS_PER_DAY * days_from_civil(y, m, d)
}

/// Get the weekday (0-6 => Sunday-Saturday) for a number of days since January 1, 1970.
#[inline(always)]
pub fn wday_from_days(days: i64) -> u8 {
	// Jan 1, 1970 was a Thursday
	(days + 4).rem_euclid(DAYS_PER_WEEK) as u8
}

/// Get the weekday (0-6 => Sunday-Saturday) for a given year, month, and day.
///
/// # Examples
///
/// ```
/// # use time::time::wday_from_ymd;
/// assert_eq!(wday_from_ymd(2024, 1, 1), 1);   // Monday
/// assert_eq!(wday_from_ymd(2024, 2, 29), 4);  // Thursday
/// assert_eq!(wday_from_ymd(2024, 10, 27), 0); // Sunday
/// ```
pub fn wday_from_ymd(y: i32, m: u8, d: u8) -> u8 {
	wday_from_days(days_from_civil(y, m, d))
}

/// The number of days in a given month.
///
/// `y` must be the absolute Gregorian calendar year, and `m` the 1-indexed month starting at
/// January.
pub fn days_per_month(y: i32, m: u8) -> u8 {
	// Details: https://www.youtube.com/watch?v=J9KijLyP-yg&t=1470s
	if m == 2 {
		if isleapyear(y) { 29 } else { 28 }
	} else {
		30 | (m ^ (m >> 3))
	}
}

/// Get the absolute Gregorian calendar year from a given Unix timestamp.
///
/// Years outside the range of `i32` saturate.
pub fn y_from_timestamp(unixtimestamp: i64) -> i32 {
	let (y, _, _) = civil_from_days(unixtimestamp.div_euclid(SECONDS_PER_DAY));
	y.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
	use super::*;
	use core::mem::MaybeUninit;
	use libc::{time_t, tm};

	// Get the libc version of UTC calendar time
	fn utc_time(time: time_t) -> tm {
		unsafe {
			let mut utc = MaybeUninit::<tm>::uninit();
			libc::gmtime_r(&time, utc.as_mut_ptr());
			utc.assume_init()
		}
	}

	fn compare_dates(time: i64) {
		let d1 = utc_time(time as time_t);
		let d2 = Tm::new(time).unwrap();
		assert_eq!(d1.tm_sec, d2.sec as i32, "time: {}, sec: {} vs. {}", time, d1.tm_sec, d2.sec);
		assert_eq!(d1.tm_min, d2.min as i32, "time: {}, min: {} vs. {}", time, d1.tm_min, d2.min);
		assert_eq!(d1.tm_hour, d2.hour as i32, "time: {}, hour: {} vs. {}", time, d1.tm_hour, d2.hour);
		assert_eq!(d1.tm_mday, d2.day as i32, "time: {}, mday: {} vs. {}", time, d1.tm_mday, d2.day);
		assert_eq!(d1.tm_mon + 1, d2.mon as i32, "time: {}, mon: {} vs. {}", time, d1.tm_mon + 1, d2.mon);
		assert_eq!(d1.tm_year + 1900, d2.year, "time: {}, year: {} vs. {}", time, d1.tm_year + 1900, d2.year);
		assert_eq!(d1.tm_wday, d2.wday as i32, "time: {}, wday: {} vs. {}", time, d1.tm_wday, d2.wday);
		assert_eq!(d1.tm_yday + 1, d2.yday as i32, "time: {}, yday: {} vs. {}", time, d1.tm_yday + 1, d2.yday);
		assert_eq!(d2.timestamp(), time);
	}

	#[test]
	fn date_test() {
		compare_dates(0);
		compare_dates(5097600);
		compare_dates(31449600);
		compare_dates(951782400);
		compare_dates(1718617807);
		compare_dates(1844848207);
		compare_dates(-1);
		compare_dates(-86401);
		compare_dates(-94694400);
		compare_dates(-2208988800);
		compare_dates(-62135596800);
		compare_dates(253402300799);

		// Make sure extreme inputs cannot panic
		assert!(Tm::new(i64::MAX).is_none());
		assert!(Tm::new(i64::MIN).is_none());
	}

	#[test]
	fn from_fields_test() {
		let tm = Tm::from_fields(2011, 5, 31, 19, 0, 1);
		assert_eq!(tm, Tm::new(1306868401).unwrap());
		assert_eq!(tm.timestamp(), 1306868401);
		assert_eq!(Tm::from_fields(1, 1, 1, 0, 0, 0).timestamp(), -62135596800);
	}

	#[test]
	fn timespec_test() {
		let c = TimeSpec { sec: 10, nsec: 999999999 };
		assert_eq!(c + Nanoseconds(1), TimeSpec { sec: 11, nsec: 0 });
		assert_eq!(c + Nanoseconds(-1999999999), TimeSpec { sec: 9, nsec: 0 });
		assert_eq!(c + TimeSpec { sec: -20, nsec: 2 }, TimeSpec { sec: -9, nsec: 1 });

		assert_eq!(TimeSpec::from_secs_f64(0.0), Some(TimeSpec { sec: 0, nsec: 0 }));
		assert_eq!(TimeSpec::from_secs_f64(-0.5), Some(TimeSpec { sec: -1, nsec: 500000000 }));
		assert_eq!(TimeSpec::from_secs_f64(1306868401.0), Some(TimeSpec { sec: 1306868401, nsec: 0 }));
		assert_eq!(TimeSpec::from_secs_f64(f64::INFINITY), None);
		assert_eq!(TimeSpec::from_secs_f64(1e19), None);
		assert_eq!(TimeSpec { sec: -2, nsec: 750000000 }.as_secs_f64(), -1.25);
	}

	#[test]
	fn isleapyear_test() {
		assert_eq!(isleapyear(1900), false);
		assert_eq!(isleapyear(2000), true);
		assert_eq!(isleapyear(2020), true);
		assert_eq!(isleapyear(2023), false);
		assert_eq!(isleapyear(2024), true);
		assert_eq!(isleapyear(0), true);
		assert_eq!(isleapyear(-100), false);
		assert_eq!(isleapyear(-400), true);

		// Make sure extreme inputs cannot panic
		isleapyear(i32::MIN);
		isleapyear(i32::MAX);
	}

	#[test]
	fn civil_days_test() {
		for days in (-800000..800000).step_by(997) {
			let (y, m, d) = civil_from_days(days);
			assert_eq!(days_from_civil(y as i32, m, d), days, "days: {}", days);
		}
		assert_eq!(days_from_civil(1, 1, 1), -719162);
		assert_eq!(civil_from_days(-719162), (1, 1, 1));
		assert_eq!(civil_from_days(2932896), (9999, 12, 31));
	}

	#[test]
	fn timestamp_from_yd_test() {
		assert_eq!(timestamp_from_yd(2024, 0, true), 1704067200);
		assert_eq!(timestamp_from_yd(2024, 0, false), 1704067200);
		assert_eq!(timestamp_from_yd(2024, 58, true), 1709078400);
		assert_eq!(timestamp_from_yd(2024, 59, true), 1709164800);
		assert_eq!(timestamp_from_yd(2024, 60, true), 1709251200);
		assert_eq!(timestamp_from_yd(2024, 58, false), 1709078400);
		assert_eq!(timestamp_from_yd(2024, 59, false), 1709251200);
		assert_eq!(timestamp_from_yd(2024, 300, true), 1729987200);
		assert_eq!(timestamp_from_yd(2024, 300, false), 1730073600);
		assert_eq!(timestamp_from_yd(2023, 59, false), 1677628800);
		assert_eq!(timestamp_from_yd(2023, 59, true), 1677628800);

		// Make sure extreme inputs cannot panic
		timestamp_from_yd(i32::MIN, u16::MAX, false);
		timestamp_from_yd(i32::MAX, u16::MAX, true);
	}

	#[test]
	fn timestamp_from_ymd_test() {
		assert_eq!(timestamp_from_ymd(2024, 1, 1), 1704067200);
		assert_eq!(timestamp_from_ymd(2024, 2, 28), 1709078400);
		assert_eq!(timestamp_from_ymd(2024, 2, 29), 1709164800);
		assert_eq!(timestamp_from_ymd(2024, 3, 1), 1709251200);
		assert_eq!(timestamp_from_ymd(2024, 10, 27), 1729987200);
		assert_eq!(timestamp_from_ymd(1969, 12, 31), -86400);

		// Make sure extreme inputs cannot panic
		timestamp_from_ymd(0, 0, 0);
		timestamp_from_ymd(i32::MAX, u8::MAX, u8::MAX);
		timestamp_from_ymd(i32::MIN, u8::MAX, u8::MAX);
	}

	#[test]
	fn wday_from_ymd_test() {
		assert_eq!(wday_from_ymd(2024, 1, 1), 1);
		assert_eq!(wday_from_ymd(2024, 2, 28), 3);
		assert_eq!(wday_from_ymd(2024, 2, 29), 4);
		assert_eq!(wday_from_ymd(2024, 3, 1), 5);
		assert_eq!(wday_from_ymd(2024, 10, 27), 0);
		assert_eq!(wday_from_ymd(1969, 12, 31), 3);
		assert_eq!(wday_from_ymd(1, 1, 1), 1);
	}

	#[test]
	fn days_per_month_test() {
		assert_eq!(days_per_month(2024, 1), 31);
		assert_eq!(days_per_month(2024, 2), 29);
		assert_eq!(days_per_month(2023, 2), 28);
		assert_eq!(days_per_month(2024, 3), 31);
		assert_eq!(days_per_month(2024, 4), 30);
		assert_eq!(days_per_month(2024, 5), 31);
		assert_eq!(days_per_month(2024, 6), 30);
		assert_eq!(days_per_month(2024, 7), 31);
		assert_eq!(days_per_month(2024, 8), 31);
		assert_eq!(days_per_month(2024, 9), 30);
		assert_eq!(days_per_month(2024, 10), 31);
		assert_eq!(days_per_month(2024, 11), 30);
		assert_eq!(days_per_month(2024, 12), 31);
		assert_eq!(days_per_month(1900, 2), 28);
	}

	#[test]
	fn y_from_timestamp_test() {
		assert_eq!(y_from_timestamp(1704067199), 2023);
		assert_eq!(y_from_timestamp(1704067200), 2024);
		assert_eq!(y_from_timestamp(1709251199), 2024);
		assert_eq!(y_from_timestamp(-1), 1969);

		// Make sure extreme inputs cannot panic
		y_from_timestamp(i64::MIN);
		y_from_timestamp(i64::MAX);
	}
}
