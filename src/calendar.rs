//! Calendar values: civil date and time fields, optionally tied to a timezone.

use std::{error, fmt};
use time::{format::{strftime, Fields}, time::{days_per_month, Tm}, tz::TzInfo};

use crate::TimezoneHandle;

/// The error type for out of range calendar fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DateError {
	/// Year outside [1, 9999]
	YearOutOfRange(i32),
	/// Month outside [1, 12]
	MonthOutOfRange(u8),
	/// Day outside the days of its month
	DayOutOfRange(u8),
	/// Hour outside [0, 23]
	HourOutOfRange(u8),
	/// Minute outside [0, 59]
	MinuteOutOfRange(u8),
	/// Second outside [0, 59]
	SecondOutOfRange(u8),
	/// Microsecond outside [0, 999999]
	MicrosecondOutOfRange(u32),
	/// The timestamp is not finite, or its date falls outside years 1-9999
	TimestampOutOfRange(f64)
}

impl fmt::Display for DateError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DateError::YearOutOfRange(v) => write!(f, "Year out of range: {}", v),
			DateError::MonthOutOfRange(v) => write!(f, "Month out of range: {}", v),
			DateError::DayOutOfRange(v) => write!(f, "Day out of range for month: {}", v),
			DateError::HourOutOfRange(v) => write!(f, "Hour out of range: {}", v),
			DateError::MinuteOutOfRange(v) => write!(f, "Minute out of range: {}", v),
			DateError::SecondOutOfRange(v) => write!(f, "Second out of range: {}", v),
			DateError::MicrosecondOutOfRange(v) => write!(f, "Microsecond out of range: {}", v),
			DateError::TimestampOutOfRange(v) => write!(f, "Timestamp out of range: {}", v)
		}
	}
}

impl error::Error for DateError {}

/// A civil date and time with microsecond precision.
///
/// A *naive* value has no timezone. An *aware* value carries a [`TimezoneHandle`], and when it
/// was produced from an instant (see [`crate::timestamp_to_calendar`]) also the UTC offset in
/// effect at that instant, so that a wall-clock time repeated by a DST transition converts back
/// to the same instant.
///
/// # Examples
///
/// ```
/// # use easytime::{CalendarValue, DateError, TimezoneHandle};
/// let naive = CalendarValue::new(2024, 2, 29, 12, 0, 0, 0).unwrap();
/// assert!(!naive.is_aware());
///
/// let aware = naive.with_timezone(TimezoneHandle::utc());
/// assert_eq!(aware.timezone().map(|tz| tz.name()), Some("utc"));
///
/// assert_eq!(CalendarValue::new(2023, 2, 29, 12, 0, 0, 0), Err(DateError::DayOutOfRange(29)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarValue {
	year: i32,
	month: u8,
	day: u8,
	hour: u8,
	minute: u8,
	second: u8,
	microsecond: u32,
	timezone: Option<TimezoneHandle>,
	info: Option<TzInfo>
}

impl CalendarValue {
	/// Create a naive calendar value.
	///
	/// # Errors
	///
	/// Returns a [`DateError`] for the first field outside its range.
	pub fn new(
		year: i32,
		month: u8,
		day: u8,
		hour: u8,
		minute: u8,
		second: u8,
		microsecond: u32
	) -> Result<CalendarValue, DateError> {
		if !(1..=9999).contains(&year) {
			return Err(DateError::YearOutOfRange(year));
		}
		if !(1..=12).contains(&month) {
			return Err(DateError::MonthOutOfRange(month));
		}
		if day == 0 || day > days_per_month(year, month) {
			return Err(DateError::DayOutOfRange(day));
		}
		if hour > 23 {
			return Err(DateError::HourOutOfRange(hour));
		}
		if minute > 59 {
			return Err(DateError::MinuteOutOfRange(minute));
		}
		if second > 59 {
			return Err(DateError::SecondOutOfRange(second));
		}
		if microsecond > 999_999 {
			return Err(DateError::MicrosecondOutOfRange(microsecond));
		}
		Ok(CalendarValue {
			year,
			month,
			day,
			hour,
			minute,
			second,
			microsecond,
			timezone: None,
			info: None
		})
	}

	/// Build an aware value for an instant, from its local date in `timezone`.
	pub(crate) fn from_instant(tm: Tm, microsecond: u32, timezone: TimezoneHandle, info: TzInfo) -> CalendarValue {
		CalendarValue {
			year: tm.year,
			month: tm.mon,
			day: tm.day,
			hour: tm.hour,
			minute: tm.min,
			second: tm.sec,
			microsecond,
			timezone: Some(timezone),
			info: Some(info)
		}
	}

	/// Attach `timezone`, replacing any previous timezone.
	///
	/// The fields are kept as they are, so the result denotes the same wall-clock time in the new
	/// timezone.
	pub fn with_timezone(self, timezone: TimezoneHandle) -> CalendarValue {
		CalendarValue { timezone: Some(timezone), info: None, ..self }
	}

	/// Drop the timezone, keeping the fields.
	pub fn naive(self) -> CalendarValue {
		CalendarValue { timezone: None, info: None, ..self }
	}

	pub fn year(&self) -> i32 { self.year }
	pub fn month(&self) -> u8 { self.month }
	pub fn day(&self) -> u8 { self.day }
	pub fn hour(&self) -> u8 { self.hour }
	pub fn minute(&self) -> u8 { self.minute }
	pub fn second(&self) -> u8 { self.second }
	pub fn microsecond(&self) -> u32 { self.microsecond }

	pub fn timezone(&self) -> Option<&TimezoneHandle> {
		self.timezone.as_ref()
	}

	pub fn is_aware(&self) -> bool {
		self.timezone.is_some()
	}

	/// The UTC offset remembered from the instant this value was created from, if any.
	pub fn utoff(&self) -> Option<i32> {
		self.info.map(|i| i.utoff)
	}

	/// The timezone abbreviation remembered from the instant this value was created from, if any.
	pub fn abbreviation(&self) -> Option<&str> {
		self.info.as_ref().map(|i| i.abbr.as_str())
	}

	/// The civil date and time, ignoring microseconds and timezone.
	pub fn tm(&self) -> Tm {
		Tm::from_fields(self.year, self.month, self.day, self.hour, self.minute, self.second)
	}

	/// Render with a `strftime`-style pattern, see [`time::format`].
	///
	/// `%z` and `%Z` render empty unless the value was created from an instant.
	pub fn format(&self, format: &str) -> String {
		strftime(&Fields::new(self.tm(), self.microsecond, self.info), format)
	}
}

impl fmt::Display for CalendarValue {
	/// Formats as `YYYY-MM-DD HH:MM:SS.ffffff`, followed by the UTC offset and abbreviation if
	/// known.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.info {
			Some(_) => f.write_str(&self.format("%Y-%m-%d %H:%M:%S.%f %z %Z")),
			None => f.write_str(&self.format("%Y-%m-%d %H:%M:%S.%f"))
		}
	}
}
