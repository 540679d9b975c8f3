//! Support for parsing TZ strings.
//!
//! This module supports parsing and generating [`TzInfo`] for [TZ strings], the POSIX rule
//! format found in the `TZ` environment variable and at the end of TZif files. Names may be
//! plain (`EST`, at least three letters) or quoted (`<+0530>`, `<-03>`), and are kept as
//! abbreviations.
//!
//! [TZ strings]: https://www.gnu.org/software/libc/manual/html_node/TZ-Variable.html
//!
//! # Examples
//!
//! ```
//! # use time::tz::{parse_tzstring, TzInfo};
//! let timezone = parse_tzstring(b"EST5EDT,M3.2.0,M11.1.0").unwrap();
//! assert_eq!(timezone.info(1723433665), TzInfo::new(-14400, true, "EDT"));
//!
//! let timezone = parse_tzstring(b"<+0530>-5:30").unwrap();
//! assert_eq!(timezone.info(1723433665), TzInfo::new(19800, false, "+0530"));
//! ```

use core::{error, fmt};
use crate::time::{
	days_per_month,
	isleapyear,
	timestamp_from_yd,
	timestamp_from_ymd,
	wday_from_ymd,
	y_from_timestamp,
	SECONDS_PER_HOUR
};
use super::{get_first_or_default, Abbr, Timezone, TzInfo};

/// The error type for parsing timezone data (TZ strings).
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TzStringError {
	/// Empty input.
	MissingTzString,
	/// Missing a required [`TzDateRule`].
	MissingTzDateRule,
	/// A date component of a [`TzDateRule`] was out of range.
	DateOutOfRange,
	/// A time component was out of range.
	TimeOutOfRange,
	/// The [`TzDateRule`] had an invalid specifier (only 'J', 'M', or '' are allowed).
	InvalidTzDateRuleSpecifier,
	/// Found unexpected bytes after a valid [`TzSpec`].
	UnexpectedInput,
	/// The TZ string is invalid or unsupported.
	InvalidOrUnsupportedTzString
}

impl fmt::Display for TzStringError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TzStringError::MissingTzString => f.write_str("Missing TZ string"),
			TzStringError::MissingTzDateRule => f.write_str("Missing TZ date rule"),
			TzStringError::DateOutOfRange => f.write_str("Date component out of range"),
			TzStringError::TimeOutOfRange => f.write_str("Time component out of range"),
			TzStringError::InvalidTzDateRuleSpecifier => f.write_str("Invalid date rule"),
			TzStringError::UnexpectedInput => f.write_str("Unexpected input at end of TZ string"),
			TzStringError::InvalidOrUnsupportedTzString => f.write_str("Invalid TZ string")
		}
	}
}

impl error::Error for TzStringError {}

/// Advance `bytes` past `n` bytes, which must be available.
#[inline(always)]
fn advance(bytes: &mut &[u8], n: usize) {
	*bytes = &bytes[n.min(bytes.len())..];
}

/// Consume `expected` from the front of `bytes`, or fail with `e`.
#[inline(always)]
fn expect(bytes: &mut &[u8], expected: u8, e: TzStringError) -> Result<(), TzStringError> {
	if get_first_or_default(bytes) == expected {
		advance(bytes, 1);
		Ok(())
	} else {
		Err(e)
	}
}

/// Parse an unsigned integer from the front of `bytes`.
///
/// Reads as many digits [0-9] as are available and returns the parsed integer, or `None` if
/// `bytes` does not start with a digit. Values too large for a `u32` saturate.
///
/// # Examples
///
/// ```ignore
/// let mut bytes = &b"15x"[..];
/// assert_eq!(parse_num(&mut bytes), Some(15));
/// assert_eq!(bytes, b"x");
/// ```
fn parse_num(bytes: &mut &[u8]) -> Option<u32> {
	let len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
	if len == 0 {
		return None;
	}
	let r = bytes[..len].iter().fold(0u32, |r, &b| {
		r.saturating_mul(10).saturating_add((b - b'0') as u32)
	});
	advance(bytes, len);
	Some(r)
}

/// A TZ string date rule.
///
/// There are three types of date rules supported in POSIX TZ strings: 0-indexed Julian day,
/// 1-indexed Julian day ignoring leap days, and month/week/day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TzDateRule {
	/// 'J`n`' where `n` is the Julian day between 1 and 365. Leap days are ignored, so day 60 is
	/// always March 1st.
	J(u16),
	/// '`n`' where `n` is the Julian day between 0 and 365. Leap day is counted in leap years, so
	/// day 60 is March 1st in leap years but March 2nd in non-leap years.
	N(u16),
	/// 'M`m`.`w`.`d`' where `m` is the month number (1-12), `d` is the day of week (0-6 =>
	/// Sunday-Saturday), and `w` (1-5) represents the `w`th instance of day `d` in the month.
	/// If `w` is 5 then this rule selects the last instance of day `d` in the month, which could
	/// be the 4th or 5th instance depending on the day and month.
	M(u8, u8, u8)
}

impl TzDateRule {
	/// Parse one of the three supported date rules from the front of `bytes`.
	///
	/// On success, `bytes` is advanced past the date rule. Anything after the rule is left alone.
	///
	/// # Errors
	///
	/// May return the following errors:
	/// - [`TzStringError::MissingTzDateRule`] if `bytes` is zero length
	/// - [`TzStringError::InvalidOrUnsupportedTzString`] if the input is not a valid TZ date string
	/// - [`TzStringError::DateOutOfRange`] if a date component is out of the allowable range
	/// - [`TzStringError::InvalidTzDateRuleSpecifier`] if the first character isn't `'J'`, `'M'`, or
	///   a number (`0-9`).
	///
	/// # Examples
	///
	/// ```
	/// # use time::tz::{TzStringError, TzDateRule};
	/// let mut bytes = &b"M3.2.0,M11.1.0"[..];
	/// assert_eq!(TzDateRule::parse(&mut bytes), Ok(TzDateRule::M(3, 2, 0)));
	/// assert_eq!(bytes, b",M11.1.0");
	///
	/// assert_eq!(TzDateRule::parse(&mut &b"J57"[..]), Ok(TzDateRule::J(57)));
	/// assert_eq!(TzDateRule::parse(&mut &b"J366"[..]), Err(TzStringError::DateOutOfRange));
	/// assert_eq!(TzDateRule::parse(&mut &b"M12.5.asd"[..]), Err(TzStringError::InvalidOrUnsupportedTzString));
	/// ```
	pub fn parse(bytes: &mut &[u8]) -> Result<TzDateRule, TzStringError> {
		let invalid = TzStringError::InvalidOrUnsupportedTzString;
		match bytes.first() {
			None => Err(TzStringError::MissingTzDateRule),
			Some(b'J') => {
				advance(bytes, 1);
				match parse_num(bytes).ok_or(invalid)? {
					n @ 1..=365 => Ok(TzDateRule::J(n as u16)),
					_ => Err(TzStringError::DateOutOfRange)
				}
			},
			Some(b'0'..=b'9') => {
				match parse_num(bytes).ok_or(invalid)? {
					n @ 0..=365 => Ok(TzDateRule::N(n as u16)),
					_ => Err(TzStringError::DateOutOfRange)
				}
			},
			Some(b'M') => {
				advance(bytes, 1);
				let m = parse_num(bytes).ok_or(invalid)?;
				expect(bytes, b'.', invalid)?;
				if !(1..=12).contains(&m) {
					return Err(TzStringError::DateOutOfRange);
				}
				let w = parse_num(bytes).ok_or(invalid)?;
				expect(bytes, b'.', invalid)?;
				if !(1..=5).contains(&w) {
					return Err(TzStringError::DateOutOfRange);
				}
				let d = parse_num(bytes).ok_or(invalid)?;
				if d > 6 {
					return Err(TzStringError::DateOutOfRange);
				}
				Ok(TzDateRule::M(m as u8, w as u8, d as u8))
			},
			Some(_) => Err(TzStringError::InvalidTzDateRuleSpecifier)
		}
	}

	/// Convert this date rule into a timestamp (00:00:00 UTC) for the given year.
	///
	/// # Panics
	///
	/// This function panics in debug mode if the [`TzDateRule`] is configured with ranges outside
	/// those stated in the documentation.
	///
	/// # Examples
	///
	/// ```
	/// # use time::tz::TzDateRule;
	/// assert_eq!(TzDateRule::J(59).as_timestamp(2024), 1709078400);
	/// assert_eq!(TzDateRule::J(60).as_timestamp(2024), 1709251200);
	/// assert_eq!(TzDateRule::N(59).as_timestamp(2024), 1709164800);
	/// assert_eq!(TzDateRule::M(2, 5, 4).as_timestamp(2024), 1709164800);
	/// ```
	pub fn as_timestamp(&self, year: i32) -> i64 {
		match *self {
			TzDateRule::J(n) => {
				debug_assert!((1..=365).contains(&n));
				timestamp_from_yd(year, n - 1, false)
			},
			TzDateRule::N(n) => {
				debug_assert!(n <= 365);
				timestamp_from_yd(year, n, isleapyear(year))
			},
			TzDateRule::M(m, w, d) => {
				debug_assert!((1..=12).contains(&m));
				debug_assert!((1..=5).contains(&w));
				debug_assert!(d <= 6);
				// Find the first day `d` of the month relative to the weekday the month starts on,
				// then step forward w-1 weeks. The 5th week means "last", so step back a week if
				// that overshoots the month.
				let wday = wday_from_ymd(year, m, 1);
				let first = (d + 7 - wday) % 7 + 1;
				let mut day = first + 7 * (w - 1);
				if day > days_per_month(year, m) {
					day -= 7;
				}
				timestamp_from_ymd(year, m, day)
			},
		}
	}
}

/// A TZ string rule set.
///
/// The set consists of four values in two pairs, representing transition times to:
/// * Daylight savings time: date (1) and time (2)
/// * Standard time: date (3) and time (4)
///
/// Times (2, 4) are optional and default to 2am local time if missing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TzRule {
	/// Transition from standard time to daylight savings time (date & local standard time)
	pub todst: (TzDateRule, i32),
	/// Transition from daylight savings time to standard time (date & local daylight time)
	pub fromdst: (TzDateRule, i32)
}

/// A TZ spec.
///
/// Specifies standard time and optional daylight savings time configuration. UTC offsets are
/// stored the way [`TzInfo`] expects them, i.e. added to UTC, which is the inverse of the sign
/// used in the TZ string itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TzSpec {
	/// Standard time
	pub std: TzInfo,
	/// Optional DST configuration (DST info and corresponding TZ rule set)
	pub dst: Option<(TzInfo, TzRule)>
}

impl TzSpec {
	/// Parse a TZ spec from a TZ string.
	///
	/// # Errors
	///
	/// This function may return [`TzStringError`] in the following cases:
	/// - `bytes.len() == 0`
	/// - `bytes` is not a POSIX-compliant TZ string
	/// - `bytes` defines DST without transition rules (e.g. `EST5EDT`)
	/// - `bytes` contains data *after* the TZ string
	///
	/// # Examples
	///
	/// ```
	/// # use time::tz::{TzSpec, TzDateRule, TzInfo, TzRule, TzStringError};
	/// assert_eq!(TzSpec::parse(b""), Err(TzStringError::MissingTzString));
	/// assert_eq!(TzSpec::parse(b"EST"), Err(TzStringError::InvalidOrUnsupportedTzString));
	/// assert_eq!(TzSpec::parse(b"EST5"), Ok(TzSpec {
	/// 	std: TzInfo::new(-18000, false, "EST"),
	/// 	dst: None
	/// }));
	/// assert_eq!(TzSpec::parse(b"XXX4YYY,J1/0,J365/25"), Ok(TzSpec {
	/// 	std: TzInfo::new(-14400, false, "XXX"),
	/// 	dst: Some((
	/// 		TzInfo::new(-10800, true, "YYY"),
	/// 		TzRule {
	/// 			todst: (TzDateRule::J(1), 0),
	/// 			fromdst: (TzDateRule::J(365), 90000)
	/// 		}
	/// 	))
	/// }));
	/// ```
	pub fn parse(mut bytes: &[u8]) -> Result<TzSpec, TzStringError> {
		if bytes.is_empty() {
			return Err(TzStringError::MissingTzString);
		}
		let bytes = &mut bytes;

		// Standard time name and offset are required
		let stdname = TzSpec::parse_name(bytes)?.ok_or(TzStringError::InvalidOrUnsupportedTzString)?;
		let stdoff = TzSpec::parse_time(bytes, false)?;

		let dst = match TzSpec::parse_name(bytes)? {
			None => None,
			Some(dstname) => {
				// Default DST to 1 hour advancement. Subtract because TZ string offsets are subtracted
				// from UTC, i.e. EST5EDT -> (EST: UTC-5), (EDT: UTC-4)
				let dstoff = match get_first_or_default(bytes) {
					b'0'..=b'9' | b'+' | b'-' => TzSpec::parse_time(bytes, false)?,
					_ => stdoff - SECONDS_PER_HOUR as i32
				};

				// There need to be rules for transitions if DST is defined
				expect(bytes, b',', TzStringError::MissingTzDateRule)?;
				let todst = TzSpec::parse_transition(bytes)?;
				expect(bytes, b',', TzStringError::MissingTzDateRule)?;
				let fromdst = TzSpec::parse_transition(bytes)?;

				Some((
					TzInfo { utoff: -dstoff, isdst: true, abbr: Abbr::new(dstname) },
					TzRule { todst, fromdst }
				))
			}
		};

		if !bytes.is_empty() {
			return Err(TzStringError::UnexpectedInput);
		}

		Ok(TzSpec {
			std: TzInfo { utoff: -stdoff, isdst: false, abbr: Abbr::new(stdname) },
			dst
		})
	}

	/// Parse an optional timezone name: either three or more letters, or any alphanumerics, `+`
	/// and `-` enclosed in `<...>`.
	///
	/// Returns `Ok(None)` if `bytes` does not start with a name.
	fn parse_name<'a>(bytes: &mut &'a [u8]) -> Result<Option<&'a [u8]>, TzStringError> {
		let invalid = TzStringError::InvalidOrUnsupportedTzString;
		let input: &'a [u8] = bytes;
		match get_first_or_default(input) {
			b'<' => {
				let end = input.iter().position(|&b| b == b'>').ok_or(invalid)?;
				let name = &input[1..end];
				let valid = |b: &u8| b.is_ascii_alphanumeric() || *b == b'+' || *b == b'-';
				if name.is_empty() || !name.iter().all(valid) {
					return Err(invalid);
				}
				*bytes = &input[end + 1..];
				Ok(Some(name))
			},
			b if b.is_ascii_alphabetic() => {
				let len = input.iter().take_while(|b| b.is_ascii_alphabetic()).count();
				if len < 3 {
					return Err(invalid);
				}
				*bytes = &input[len..];
				Ok(Some(&input[..len]))
			},
			_ => Ok(None)
		}
	}

	/// Parse a date rule with an optional `/time`, defaulting to 02:00.
	fn parse_transition(bytes: &mut &[u8]) -> Result<(TzDateRule, i32), TzStringError> {
		let date = TzDateRule::parse(bytes)?;
		let time = if get_first_or_default(bytes) == b'/' {
			advance(bytes, 1);
			TzSpec::parse_time(bytes, true)?
		} else {
			2 * SECONDS_PER_HOUR as i32
		};
		Ok((date, time))
	}

	/// Parse a signed time (hh[:mm[:ss]]) from a TZ string, converted to seconds.
	///
	/// # Errors
	///
	/// Returns [`TzStringError::InvalidOrUnsupportedTzString`] if `bytes` does not start with a
	/// time.
	///
	/// Returns [`TzStringError::TimeOutOfRange`] if the parsed time components are out of bounds
	/// - In `extended` mode (transition times), hours +-167, else +-24
	/// - Minutes and seconds 0-59
	fn parse_time(bytes: &mut &[u8], extended: bool) -> Result<i32, TzStringError> {
		let invalid = TzStringError::InvalidOrUnsupportedTzString;
		let sign = match get_first_or_default(bytes) {
			b'-' => { advance(bytes, 1); -1 },
			b'+' => { advance(bytes, 1); 1 },
			_ => 1
		};

		let hours = parse_num(bytes).ok_or(invalid)?;
		let limit = if extended { 167 } else { 24 };
		if hours > limit {
			return Err(TzStringError::TimeOutOfRange);
		}
		let mut result = hours * 3600;

		// Optional minutes, then optional seconds
		for unit in [60, 1] {
			if get_first_or_default(bytes) != b':' {
				break;
			}
			advance(bytes, 1);
			let v = parse_num(bytes).ok_or(invalid)?;
			if v > 59 {
				return Err(TzStringError::TimeOutOfRange);
			}
			result += v * unit;
		}

		Ok(sign * result as i32)
	}

	/// Get timezone info for a given moment in time.
	///
	/// # Panics
	///
	/// This function may panic in debug mode if the [`TzSpec`] is configured with values outside of
	/// their stated ranges. Note that using the return value of [`TzSpec::parse`] should never panic.
	///
	/// # Examples
	///
	/// ```
	/// # use time::tz::{TzSpec, TzInfo};
	/// let spec = TzSpec::parse(b"EST5EDT,M3.2.0,M11.1.0").unwrap();
	/// assert_eq!(spec.info(1710053999), TzInfo::new(-18000, false, "EST"));
	/// assert_eq!(spec.info(1710054000), TzInfo::new(-14400, true, "EDT"));
	/// ```
	pub fn info(&self, time: i64) -> TzInfo {
		let Some((dst, rule)) = self.dst else {
			return self.std;
		};

		// Find the transition times for the local year. Note that we subtract UTC offsets
		// because we're moving from local time to UTC time, rather than UTC to local.
		let y = y_from_timestamp(time.saturating_add(self.std.utoff as i64));
		let todst = rule.todst.0.as_timestamp(y) + rule.todst.1 as i64 - self.std.utoff as i64;
		let fromdst = rule.fromdst.0.as_timestamp(y) + rule.fromdst.1 as i64 - dst.utoff as i64;
		// Possibilities:
		// 1. time < todst < fromdst -> not dst
		// 2. todst <= time < fromdst -> dst
		// 3. todst < fromdst <= time -> not dst
		// 4. time < fromdst < todst -> dst
		// 5. fromdst <= time < todst -> not dst
		// 6. fromdst < todst <= time -> dst
		// 7. time < todst = fromdst -> dst      (equivalent to 4.)
		// 8. todst = fromdst <= time -> dst     (equivalent to 6.)
		let isdst = if todst < fromdst {
			todst <= time && time < fromdst
		} else {
			time < fromdst || todst <= time
		};
		if isdst { dst } else { self.std }
	}
}

/// Parse a byte slice containing a TZ string.
///
/// # Errors
///
/// Returns [`TzStringError`] if the TZ string is malformed.
///
/// # Examples
///
/// ```
/// # use time::tz::{parse_tzstring, TzInfo};
/// let timezone = parse_tzstring(b"PST8PDT,M3.2.0,M11.1.0").unwrap();
/// assert_eq!(timezone.info(1723433665), TzInfo::new(-25200, true, "PDT"));
/// ```
pub fn parse_tzstring(tzstring: &[u8]) -> Result<Timezone, TzStringError> {
	TzSpec::parse(tzstring).map(Timezone::from)
}
