//! A less error-prone date & time manipulation library.
//!
//! Timestamps are `f64` seconds since the Unix epoch ([`Timestamp`]). Timezones are named by
//! string (`"utc"`, `"local"`, or an IANA name such as `"America/New_York"`) or passed as a
//! resolved [`TimezoneHandle`]. Calendar values ([`CalendarValue`]) are either naive or tied to a
//! timezone.
//!
//! Names are looked up in the host's compiled timezone database (`$TZDIR`, default
//! `/usr/share/zoneinfo`) on every call, and `"local"` follows the `TZ` environment variable or
//! `/etc/localtime`. Use [`resolve_timezone_in`] with an explicit [`Zoneinfo`] to read another
//! database.
//!
//! # Examples
//!
//! ```
//! # use easytime::{format_timestamp, parse_timestamp, timestamp_from_fields, Duration, duration_seconds};
//! let ts = timestamp_from_fields(2011, 5, 31, 19, 0, 1, 0).unwrap();
//! assert_eq!(ts, 1306868401.0);
//!
//! assert_eq!(parse_timestamp("2011-05-31 19:00:01", "%Y-%m-%d %H:%M:%S", "utc").unwrap(), ts);
//! assert_eq!(format_timestamp(ts, "%Y-%m-%d %H:%M:%S %Z", "utc").unwrap(), "2011-05-31 19:00:01 UTC");
//!
//! let later = ts + duration_seconds(Duration { hours: 1.0, minutes: 30.0, ..Default::default() });
//! assert_eq!(format_timestamp(later, "%H:%M", "utc").unwrap(), "20:30");
//! ```

use std::time::{SystemTime, UNIX_EPOCH};
use time::{format::strptime, time::{Nanoseconds, TimeSpec}};

pub use time::tz::Zoneinfo;

mod calendar;
mod error;
mod zone;

pub use calendar::{CalendarValue, DateError};
pub use error::Error;
pub use zone::{TimezoneArg, TimezoneHandle};

/// Seconds since 1970-01-01T00:00:00 UTC, possibly fractional or negative.
pub type Timestamp = f64;

/// Resolve a timezone name using the host's timezone database.
///
/// - `"utc"`: fixed zero offset
/// - `"local"`: the host's local timezone, re-read on every call
/// - anything else: an IANA timezone name
///
/// # Errors
///
/// Returns [`Error::UnknownTimezone`] if the name is not a timezone in the database, or
/// [`Error::InvalidTimezone`] if its database entry is malformed.
///
/// # Examples
///
/// ```
/// # use easytime::{resolve_timezone, Error};
/// let utc = resolve_timezone("utc").unwrap();
/// assert_eq!(utc.timezone().info(1723433665).utoff, 0);
///
/// assert_eq!(
/// 	resolve_timezone("not-a-real-zone"),
/// 	Err(Error::UnknownTimezone("not-a-real-zone".to_string()))
/// );
/// ```
pub fn resolve_timezone(name: &str) -> Result<TimezoneHandle, Error> {
	resolve_timezone_in(&Zoneinfo::system(), name)
}

/// Resolve a timezone name using the timezone database `zoneinfo`.
///
/// # Errors
///
/// See [`resolve_timezone`].
pub fn resolve_timezone_in(zoneinfo: &Zoneinfo, name: &str) -> Result<TimezoneHandle, Error> {
	match name {
		"utc" => Ok(TimezoneHandle::utc()),
		"local" => Ok(TimezoneHandle::new(name, zoneinfo.local()?)),
		_ => Ok(TimezoneHandle::new(name, zoneinfo.lookup(name)?))
	}
}

/// Build a timestamp from calendar fields, interpreted as UTC.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if a field is out of range.
///
/// # Examples
///
/// ```
/// # use easytime::timestamp_from_fields;
/// assert_eq!(timestamp_from_fields(1970, 1, 1, 0, 0, 0, 0).unwrap(), 0.0);
/// assert_eq!(timestamp_from_fields(1969, 12, 31, 23, 59, 59, 500000).unwrap(), -0.5);
/// ```
pub fn timestamp_from_fields(
	year: i32,
	month: u8,
	day: u8,
	hour: u8,
	minute: u8,
	second: u8,
	microsecond: u32
) -> Result<Timestamp, Error> {
	let calendar = CalendarValue::new(year, month, day, hour, minute, second, microsecond)?;
	Ok(calendar.tm().timestamp() as f64 + microsecond as f64 / 1e6)
}

/// Build a timestamp for midnight UTC on a date.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if a field is out of range.
pub fn timestamp_from_date(year: i32, month: u8, day: u8) -> Result<Timestamp, Error> {
	timestamp_from_fields(year, month, day, 0, 0, 0, 0)
}

/// A span of time in mixed units.
///
/// Fields may be fractional or negative. Unset fields default to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Duration {
	pub days: f64,
	pub hours: f64,
	pub minutes: f64,
	pub seconds: f64,
	pub milliseconds: f64,
	pub microseconds: f64
}

impl Duration {
	/// The total length in seconds.
	///
	/// Units are folded from the largest down, so the result is reproducible bit for bit.
	pub fn total_seconds(&self) -> f64 {
		let hours = self.hours + self.days * 24.0;
		let minutes = self.minutes + hours * 60.0;
		let seconds = self.seconds + minutes * 60.0;
		let microseconds = self.microseconds + self.milliseconds * 1000.0;
		seconds + microseconds / 1e6
	}
}

/// The total length of `duration` in seconds.
///
/// # Examples
///
/// ```
/// # use easytime::{duration_seconds, Duration};
/// let d = Duration { days: 2.0, hours: 1.0, minutes: 30.0, seconds: 12.0, milliseconds: 32.0, microseconds: 123.0 };
/// assert_eq!(duration_seconds(d), 178212.032123);
/// assert_eq!(duration_seconds(Duration { minutes: 2.0, seconds: 66.0, ..Default::default() }), 186.0);
/// ```
pub fn duration_seconds(duration: Duration) -> f64 {
	duration.total_seconds()
}

/// Read the host clock.
fn now() -> TimeSpec {
	time::now().unwrap_or_else(|| {
		let (sec, nsec) = match SystemTime::now().duration_since(UNIX_EPOCH) {
			Ok(d) => (d.as_secs() as i64, d.subsec_nanos() as i64),
			Err(e) => {
				let d = e.duration();
				(-(d.as_secs() as i64), -(d.subsec_nanos() as i64))
			}
		};
		TimeSpec { sec, nsec: 0 } + Nanoseconds(nsec)
	})
}

/// The current time as a timestamp.
pub fn current_timestamp() -> Timestamp {
	now().as_secs_f64()
}

/// Parse `text` with a `strptime`-style `format` into a timestamp.
///
/// The parsed fields are civil time in `timezone`, unless `format` contains `%z`, in which case
/// the parsed UTC offset is used instead.
///
/// # Errors
///
/// Returns [`Error::Parse`] if `text` does not match `format`, [`Error::InvalidDate`] if the
/// parsed year is out of range, or a timezone resolution error (see [`resolve_timezone`]).
///
/// # Examples
///
/// ```
/// # use easytime::parse_timestamp;
/// let ts = parse_timestamp("2024-08-11 23:34:25 -0400", "%Y-%m-%d %H:%M:%S %z", "utc").unwrap();
/// assert_eq!(ts, 1723433665.0);
/// ```
pub fn parse_timestamp(text: &str, format: &str, timezone: impl Into<TimezoneArg>) -> Result<Timestamp, Error> {
	let parsed = strptime(text, format)?;
	let timezone = timezone.into().resolve()?;
	let calendar = CalendarValue::new(
		parsed.year,
		parsed.month,
		parsed.day,
		parsed.hour,
		parsed.minute,
		parsed.second,
		parsed.microsecond
	)?;
	let calendar = match parsed.utoff {
		Some(utoff) => calendar.with_timezone(TimezoneHandle::fixed(utoff)),
		None => calendar.with_timezone(timezone)
	};
	Ok(aware_to_timestamp(&calendar, calendar.timezone().ok_or(Error::AmbiguousTimezone)?))
}

/// Format `timestamp` as civil time in `timezone` with a `strftime`-style `format`.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the timestamp falls outside years 1-9999, or a timezone
/// resolution error (see [`resolve_timezone`]).
pub fn format_timestamp(timestamp: Timestamp, format: &str, timezone: impl Into<TimezoneArg>) -> Result<String, Error> {
	Ok(timestamp_to_calendar(timestamp, timezone)?.format(format))
}

/// Convert an aware calendar value, using its remembered UTC offset if it has one.
fn aware_to_timestamp(calendar: &CalendarValue, timezone: &TimezoneHandle) -> Timestamp {
	let local = calendar.tm().timestamp();
	let utc = match calendar.utoff() {
		Some(utoff) => local - utoff as i64,
		None => timezone.timezone().local_to_utc(local).compatible()
	};
	utc as f64 + calendar.microsecond() as f64 / 1e6
}

/// Convert a calendar value to a timestamp.
///
/// An aware `calendar` is converted with its own timezone and `timezone` is ignored. A naive
/// `calendar` is interpreted as civil time in `timezone`. A wall-clock time that occurs twice
/// (DST ending) maps to the earlier instant, and one skipped by DST starting is read with the
/// offset in effect before the transition.
///
/// # Errors
///
/// Returns [`Error::AmbiguousTimezone`] if `calendar` is naive and `timezone` is `None`, or a
/// timezone resolution error (see [`resolve_timezone`]).
///
/// # Examples
///
/// ```
/// # use easytime::{calendar_to_timestamp, CalendarValue, Error, TimezoneHandle};
/// let ny = TimezoneHandle::from_tzstring("EST5EDT,M3.2.0,M11.1.0").unwrap();
///
/// // 02:30 doesn't exist on Mar 10, 2024 in New York
/// let gap = CalendarValue::new(2024, 3, 10, 2, 30, 0, 0).unwrap();
/// assert_eq!(calendar_to_timestamp(&gap, Some(&ny)).unwrap(), 1710055800.0);
///
/// assert_eq!(calendar_to_timestamp(&gap, None::<&str>), Err(Error::AmbiguousTimezone));
/// ```
pub fn calendar_to_timestamp<T: Into<TimezoneArg>>(calendar: &CalendarValue, timezone: Option<T>) -> Result<Timestamp, Error> {
	if let Some(own) = calendar.timezone() {
		return Ok(aware_to_timestamp(calendar, own));
	}
	let timezone = timezone.ok_or(Error::AmbiguousTimezone)?.into().resolve()?;
	Ok(aware_to_timestamp(calendar, &timezone))
}

/// Split a timestamp into whole seconds and microseconds, rounding half to even.
fn split_timestamp(timestamp: Timestamp) -> Result<(i64, u32), DateError> {
	let out_of_range = DateError::TimestampOutOfRange(timestamp);
	// Comfortably beyond years 1-9999 while keeping i64 math exact
	if !timestamp.is_finite() || timestamp.abs() >= 1e15 {
		return Err(out_of_range);
	}
	let mut sec = timestamp.trunc() as i64;
	let mut us = ((timestamp - timestamp.trunc()) * 1e6).round_ties_even() as i64;
	if us >= 1_000_000 {
		sec += 1;
		us -= 1_000_000;
	} else if us < 0 {
		sec -= 1;
		us += 1_000_000;
	}
	Ok((sec, us as u32))
}

/// Build the aware calendar value for an instant in `timezone`.
fn instant_to_calendar(sec: i64, microsecond: u32, timezone: TimezoneHandle, timestamp: Timestamp) -> Result<CalendarValue, Error> {
	let date = timezone.timezone()
		.date(sec)
		.filter(|d| (1..=9999).contains(&d.tm.year))
		.ok_or(DateError::TimestampOutOfRange(timestamp))?;
	Ok(CalendarValue::from_instant(date.tm, microsecond, timezone, date.info))
}

/// Convert a timestamp to an aware calendar value in `timezone`.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the timestamp falls outside years 1-9999, or a timezone
/// resolution error (see [`resolve_timezone`]).
///
/// # Examples
///
/// ```
/// # use easytime::{timestamp_to_calendar, TimezoneHandle};
/// let ny = TimezoneHandle::from_tzstring("EST5EDT,M3.2.0,M11.1.0").unwrap();
/// let c = timestamp_to_calendar(1723433665.25, &ny).unwrap();
/// assert_eq!(c.to_string(), "2024-08-11 23:34:25.250000 -0400 EDT");
/// ```
pub fn timestamp_to_calendar(timestamp: Timestamp, timezone: impl Into<TimezoneArg>) -> Result<CalendarValue, Error> {
	let timezone = timezone.into().resolve()?;
	let (sec, microsecond) = split_timestamp(timestamp)?;
	instant_to_calendar(sec, microsecond, timezone, timestamp)
}

/// The current time as an aware calendar value in `timezone`.
///
/// # Errors
///
/// Returns a timezone resolution error (see [`resolve_timezone`]).
pub fn current_calendar(timezone: impl Into<TimezoneArg>) -> Result<CalendarValue, Error> {
	let timezone = timezone.into().resolve()?;
	let now = now();
	instant_to_calendar(now.sec, (now.nsec / 1000) as u32, timezone, now.as_secs_f64())
}

#[cfg(test)]
mod tests {
	use super::*;
	use time::tz::TzInfo;

	fn new_york() -> TimezoneHandle {
		TimezoneHandle::from_tzstring("EST5EDT,M3.2.0,M11.1.0").unwrap()
	}

	fn naive(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> CalendarValue {
		CalendarValue::new(year, month, day, hour, minute, second, 0).unwrap()
	}

	#[test]
	fn timestamp_from_fields_test() {
		assert_eq!(timestamp_from_date(1970, 1, 1), Ok(0.0));
		assert_eq!(timestamp_from_fields(2011, 5, 31, 19, 0, 1, 0), Ok(1306868401.0));
		assert_eq!(timestamp_from_fields(2011, 5, 31, 19, 0, 1, 250000), Ok(1306868401.25));
		assert_eq!(timestamp_from_date(1900, 1, 1), Ok(-2208988800.0));
		assert_eq!(timestamp_from_date(1, 1, 1), Ok(-62135596800.0));
		assert_eq!(
			timestamp_from_date(2023, 2, 29),
			Err(Error::InvalidDate(DateError::DayOutOfRange(29)))
		);
		assert_eq!(
			timestamp_from_fields(2024, 1, 1, 0, 0, 0, 1_000_000),
			Err(Error::InvalidDate(DateError::MicrosecondOutOfRange(1_000_000)))
		);
	}

	#[test]
	fn duration_seconds_test() {
		let d = Duration {
			days: 2.0,
			hours: 1.0,
			minutes: 30.0,
			seconds: 12.0,
			milliseconds: 32.0,
			microseconds: 123.0
		};
		assert_eq!(duration_seconds(d), 178212.032123);
		assert_eq!(duration_seconds(Duration { minutes: 2.0, seconds: 66.0, ..Default::default() }), 186.0);
		assert_eq!(duration_seconds(Duration::default()), 0.0);
		assert_eq!(duration_seconds(Duration { days: -1.0, hours: 0.5, ..Default::default() }), -84600.0);
		assert_eq!(duration_seconds(Duration { milliseconds: 1.5, ..Default::default() }), 0.0015);
	}

	#[test]
	fn current_timestamp_test() {
		let a = current_timestamp();
		let b = current_timestamp();
		assert!(a > 1.7e9);
		assert!(b >= a);

		let c = current_calendar("utc").unwrap();
		assert!(c.year() >= 2024);
		assert_eq!(c.utoff(), Some(0));
		assert!(c.microsecond() < 1_000_000);
	}

	#[test]
	fn resolve_timezone_test() {
		let utc = resolve_timezone("utc").unwrap();
		assert_eq!(utc.name(), "utc");
		assert_eq!(utc.timezone().info(0), TzInfo::new(0, false, "UTC"));
		assert_eq!(utc.timezone().info(1723433665).utoff, 0);

		assert_eq!(resolve_timezone("not-a-real-zone"), Err(Error::UnknownTimezone("not-a-real-zone".to_string())));
		assert_eq!(resolve_timezone("../../etc/passwd"), Err(Error::UnknownTimezone("../../etc/passwd".to_string())));
		assert_eq!(resolve_timezone(""), Err(Error::UnknownTimezone("".to_string())));

		// Local resolves to something as long as the host is configured sanely
		if std::env::var_os("TZ").is_none() {
			assert_eq!(resolve_timezone("local").map(|tz| tz.name().to_string()), Ok("local".to_string()));
		}

		let zoneinfo = Zoneinfo::system();
		if zoneinfo.dir().join("America/New_York").exists() {
			let ny = resolve_timezone_in(&zoneinfo, "America/New_York").unwrap();
			assert_eq!(ny.name(), "America/New_York");
			assert_eq!(ny.timezone().info(1723433665), TzInfo::new(-14400, true, "EDT"));
			// Directories are not timezones
			assert_eq!(resolve_timezone("America"), Err(Error::UnknownTimezone("America".to_string())));
		}
	}

	#[test]
	fn resolve_timezone_in_test() {
		let dir = std::env::temp_dir().join(format!("easytime-zoneinfo-{}", std::process::id()));
		let _ = std::fs::remove_dir_all(&dir);
		std::fs::create_dir_all(&dir).unwrap();
		std::fs::write(dir.join("Broken"), b"TZif2").unwrap();
		let zoneinfo = Zoneinfo::new(&dir);

		assert!(matches!(
			resolve_timezone_in(&zoneinfo, "Broken"),
			Err(Error::InvalidTimezone(name, _)) if name == "Broken"
		));
		assert_eq!(
			resolve_timezone_in(&zoneinfo, "Europe/Paris"),
			Err(Error::UnknownTimezone("Europe/Paris".to_string()))
		);
		assert_eq!(resolve_timezone_in(&zoneinfo, "utc"), Ok(TimezoneHandle::utc()));

		let _ = std::fs::remove_dir_all(&dir);
	}

	#[test]
	fn parse_timestamp_test() {
		let format = "%Y-%m-%d %H:%M:%S";
		assert_eq!(parse_timestamp("2011-05-31 19:00:01", format, "utc"), Ok(1306868401.0));
		assert_eq!(parse_timestamp("2011-05-31 19:00:01", format, TimezoneHandle::utc()), Ok(1306868401.0));
		assert_eq!(parse_timestamp("2024-08-11 23:34:25", format, &new_york()), Ok(1723433665.0));
		assert_eq!(parse_timestamp("2024-08-11 23:34:25.5", "%Y-%m-%d %H:%M:%S.%f", "utc"), Ok(1723419265.5));

		// An offset in the text wins over the timezone argument
		assert_eq!(parse_timestamp("2024-08-11 23:34:25 -0400", "%Y-%m-%d %H:%M:%S %z", "utc"), Ok(1723433665.0));
		assert_eq!(parse_timestamp("2024-08-12 03:34:25 Z", "%Y-%m-%d %H:%M:%S %z", &new_york()), Ok(1723433665.0));

		assert_eq!(
			parse_timestamp("2011-05-31", format, "utc"),
			Err(Error::Parse(time::format::ParseError::LiteralMismatch(10)))
		);
		assert_eq!(
			parse_timestamp("2011-05-31 19:00:01", format, "not-a-real-zone"),
			Err(Error::UnknownTimezone("not-a-real-zone".to_string()))
		);
		assert_eq!(
			parse_timestamp("0000-01-01", "%Y-%m-%d", "utc"),
			Err(Error::InvalidDate(DateError::YearOutOfRange(0)))
		);
	}

	#[test]
	fn format_timestamp_test() {
		assert_eq!(format_timestamp(0.0, "%Y-%m-%d %H:%M:%S", "utc"), Ok("1970-01-01 00:00:00".to_string()));
		assert_eq!(format_timestamp(1723433665.0, "%F %T %Z %z", &new_york()), Ok("2024-08-11 23:34:25 EDT -0400".to_string()));
		assert_eq!(format_timestamp(-0.5, "%F %T.%f", "utc"), Ok("1969-12-31 23:59:59.500000".to_string()));
		assert_eq!(format_timestamp(0.0, "%Q", "utc"), Ok("%Q".to_string()));
		assert_eq!(
			format_timestamp(1e300, "%F", "utc"),
			Err(Error::InvalidDate(DateError::TimestampOutOfRange(1e300)))
		);
		assert_eq!(
			format_timestamp(0.0, "%F", "not-a-real-zone"),
			Err(Error::UnknownTimezone("not-a-real-zone".to_string()))
		);
	}

	#[test]
	fn format_parse_round_trip() {
		let format = "%Y-%m-%d %H:%M:%S.%f";
		for ts in [0.0, 1306868401.0, 1723433665.123456, -2208988800.5, 253402300799.0] {
			let text = format_timestamp(ts, format, "utc").unwrap();
			let back = parse_timestamp(&text, format, "utc").unwrap();
			assert!((back - ts).abs() < 1e-6, "{} -> {} -> {}", ts, text, back);
		}
	}

	#[test]
	fn calendar_round_trip() {
		let ny = new_york();
		for ts in [0.0, 1306868401.0, 1710052200.0, 1710054000.0, 1730611800.0, 1730615400.0, 1723433665.999999] {
			for tz in [&ny, &TimezoneHandle::utc(), &TimezoneHandle::fixed(19800)] {
				let c = timestamp_to_calendar(ts, tz).unwrap();
				let back = calendar_to_timestamp(&c, None::<&str>).unwrap();
				assert!((back - ts).abs() < 1e-6, "{} in {} -> {} -> {}", ts, tz, c, back);
			}
		}
	}

	#[test]
	fn timestamp_to_calendar_test() {
		let c = timestamp_to_calendar(1723433665.0, &new_york()).unwrap();
		assert_eq!((c.year(), c.month(), c.day(), c.hour(), c.minute(), c.second()), (2024, 8, 11, 23, 34, 25));
		assert_eq!(c.utoff(), Some(-14400));
		assert_eq!(c.abbreviation(), Some("EDT"));
		assert_eq!(c.timezone(), Some(&new_york()));

		// Rounded to the nearest microsecond, with carry
		assert_eq!(timestamp_to_calendar(0.9999996, "utc").unwrap().second(), 1);
		assert_eq!(timestamp_to_calendar(0.9999996, "utc").unwrap().microsecond(), 0);
		let c = timestamp_to_calendar(-1.25, "utc").unwrap();
		assert_eq!((c.year(), c.second(), c.microsecond()), (1969, 58, 750000));

		// Years 1-9999 only
		assert!(timestamp_to_calendar(-62135596800.0, "utc").is_ok());
		assert!(timestamp_to_calendar(253402300799.0, "utc").is_ok());
		assert_eq!(
			timestamp_to_calendar(-62135596801.0, "utc"),
			Err(Error::InvalidDate(DateError::TimestampOutOfRange(-62135596801.0)))
		);
		assert_eq!(
			timestamp_to_calendar(253402300800.0, "utc"),
			Err(Error::InvalidDate(DateError::TimestampOutOfRange(253402300800.0)))
		);
		assert!(matches!(timestamp_to_calendar(f64::NAN, "utc"), Err(Error::InvalidDate(_))));
	}

	#[test]
	fn calendar_to_timestamp_test() {
		let ny = new_york();
		let c = naive(2024, 8, 11, 23, 34, 25);
		assert_eq!(calendar_to_timestamp(&c, Some(&ny)), Ok(1723433665.0));
		assert_eq!(calendar_to_timestamp(&c, Some("utc")), Ok(1723419265.0));
		assert_eq!(calendar_to_timestamp(&c, None::<&str>), Err(Error::AmbiguousTimezone));
		assert_eq!(
			calendar_to_timestamp(&c, Some("not-a-real-zone")),
			Err(Error::UnknownTimezone("not-a-real-zone".to_string()))
		);

		// Aware values ignore the timezone argument
		let aware = c.clone().with_timezone(ny.clone());
		assert_eq!(calendar_to_timestamp(&aware, Some("utc")), Ok(1723433665.0));
		assert_eq!(calendar_to_timestamp(&aware, None::<&str>), Ok(1723433665.0));

		// Skipped wall-clock time reads with the offset before the transition (EST)
		let gap = naive(2024, 3, 10, 2, 30, 0);
		assert_eq!(calendar_to_timestamp(&gap, Some(&ny)), Ok(1710055800.0));

		// Repeated wall-clock time maps to the earlier instant (EDT)
		let fold = naive(2024, 11, 3, 1, 30, 0);
		assert_eq!(calendar_to_timestamp(&fold, Some(&ny)), Ok(1730611800.0));

		// ... unless the value remembers the offset of the later one
		let later = timestamp_to_calendar(1730615400.0, &ny).unwrap();
		assert_eq!((later.hour(), later.minute(), later.utoff()), (1, 30, Some(-18000)));
		assert_eq!(calendar_to_timestamp(&later, None::<&str>), Ok(1730615400.0));
	}
}
