//! Render and parse calendar values with `strftime`-style patterns.
//!
//! Both directions share one set of `%` directives, using English names only:
//!
//! | Directive | Meaning |
//! |-----------|---------|
//! | `%Y` | Year, four digits |
//! | `%y` | Year without century (`69`-`99` parse as 19xx, `00`-`68` as 20xx) |
//! | `%m`, `%d`, `%e` | Month, day of the month (`%e` is space padded) |
//! | `%H`, `%I`, `%p` | Hour (24-hour and 12-hour clock), `AM`/`PM` |
//! | `%M`, `%S`, `%f` | Minute, second, microsecond (six digits) |
//! | `%j` | Day of the year |
//! | `%a`, `%A`, `%b`, `%B`, `%h` | Abbreviated and full weekday and month names |
//! | `%z`, `%Z` | UTC offset (`+HHMM`) and timezone abbreviation |
//! | `%F`, `%T`, `%D`, `%R` | `%Y-%m-%d`, `%H:%M:%S`, `%m/%d/%y`, `%H:%M` |
//! | `%n`, `%t`, `%%` | Newline, tab, literal `%` |
//!
//! Formatting additionally supports `%u` and `%w` (weekday numbers), `%s` (Unix seconds) and the
//! C locale's `%c`, `%x` and `%X`. Unknown directives are copied to the output verbatim.
//!
//! # Examples
//!
//! ```
//! # use time::{format::{strftime, strptime, Fields}, time::Tm};
//! let fields = Fields::new(Tm::new(1306868401).unwrap(), 0, None);
//! assert_eq!(strftime(&fields, "%A, %B %e %Y at %I:%M %p"), "Tuesday, May 31 2011 at 07:00 PM");
//!
//! let parsed = strptime("Tuesday, May 31 2011 at 07:00 PM", "%A, %B %e %Y at %I:%M %p").unwrap();
//! assert_eq!((parsed.year, parsed.month, parsed.day, parsed.hour), (2011, 5, 31, 19));
//! ```

use core::{error, fmt::{self, Write}};
use alloc::string::{String, ToString};
use crate::time::{civil_from_days, days_from_civil, days_per_month, Tm};
use crate::tz::TzInfo;

const WEEKDAYS: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
const WEEKDAYS_ABBR: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
	"January", "February", "March", "April", "May", "June",
	"July", "August", "September", "October", "November", "December"
];
const MONTHS_ABBR: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Look up a name by index, tolerating out of range indices.
#[inline(always)]
fn name(names: &[&'static str], i: usize) -> &'static str {
	names.get(i).copied().unwrap_or("?")
}

/// Calendar fields to render with [`strftime`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fields {
	/// Civil date and time
	pub tm: Tm,
	/// Microseconds past `tm`, ranged [0, 999999]
	pub microsecond: u32,
	/// Offset and abbreviation, if the fields are timezone-aware
	pub info: Option<TzInfo>
}

impl Fields {
	pub fn new(tm: Tm, microsecond: u32, info: Option<TzInfo>) -> Fields {
		Fields { tm, microsecond, info }
	}
}

/// Lazily formatted [`Fields`], see [`strftime`].
pub struct Strftime<'a> {
	fields: &'a Fields,
	format: &'a str
}

impl<'a> Strftime<'a> {
	pub fn new(fields: &'a Fields, format: &'a str) -> Strftime<'a> {
		Strftime { fields, format }
	}

	fn nested(&self, f: &mut fmt::Formatter<'_>, format: &str) -> fmt::Result {
		fmt::Display::fmt(&Strftime { fields: self.fields, format }, f)
	}

	fn directive(&self, f: &mut fmt::Formatter<'_>, d: char) -> fmt::Result {
		let Fields { tm, microsecond, info } = self.fields;
		let utoff = info.map_or(0, |i| i.utoff);
		match d {
			'Y' => write!(f, "{:04}", tm.year),
			'y' => write!(f, "{:02}", tm.year.rem_euclid(100)),
			'm' => write!(f, "{:02}", tm.mon),
			'd' => write!(f, "{:02}", tm.day),
			'e' => write!(f, "{:2}", tm.day),
			'H' => write!(f, "{:02}", tm.hour),
			'I' => write!(f, "{:02}", (tm.hour + 11) % 12 + 1),
			'p' => f.write_str(if tm.hour < 12 { "AM" } else { "PM" }),
			'M' => write!(f, "{:02}", tm.min),
			'S' => write!(f, "{:02}", tm.sec),
			'f' => write!(f, "{:06}", microsecond),
			'j' => write!(f, "{:03}", tm.yday),
			'a' => f.write_str(name(&WEEKDAYS_ABBR, tm.wday as usize)),
			'A' => f.write_str(name(&WEEKDAYS, tm.wday as usize)),
			'b' | 'h' => f.write_str(name(&MONTHS_ABBR, tm.mon.wrapping_sub(1) as usize)),
			'B' => f.write_str(name(&MONTHS, tm.mon.wrapping_sub(1) as usize)),
			'u' => write!(f, "{}", if tm.wday == 0 { 7 } else { tm.wday }),
			'w' => write!(f, "{}", tm.wday),
			's' => write!(f, "{}", tm.timestamp() - utoff as i64),
			'z' => match info {
				Some(info) => {
					let sign = if info.utoff < 0 { '-' } else { '+' };
					let off = info.utoff.unsigned_abs();
					write!(f, "{}{:02}{:02}", sign, off / 3600, off / 60 % 60)?;
					match off % 60 {
						0 => Ok(()),
						s => write!(f, "{:02}", s)
					}
				},
				None => Ok(())
			},
			'Z' => match info {
				Some(info) => f.write_str(info.abbr.as_str()),
				None => Ok(())
			},
			'F' => self.nested(f, "%Y-%m-%d"),
			'T' | 'X' => self.nested(f, "%H:%M:%S"),
			'D' | 'x' => self.nested(f, "%m/%d/%y"),
			'R' => self.nested(f, "%H:%M"),
			'c' => self.nested(f, "%a %b %e %H:%M:%S %Y"),
			'n' => f.write_char('\n'),
			't' => f.write_char('\t'),
			'%' => f.write_char('%'),
			d => write!(f, "%{}", d)
		}
	}
}

impl fmt::Display for Strftime<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut chars = self.format.chars();
		while let Some(c) = chars.next() {
			if c != '%' {
				f.write_char(c)?;
				continue;
			}
			match chars.next() {
				Some(d) => self.directive(f, d)?,
				None => f.write_char('%')?
			}
		}
		Ok(())
	}
}

/// Render `fields` according to `format`.
///
/// # Examples
///
/// ```
/// # use time::{format::{strftime, Fields}, time::Tm, tz::TzInfo};
/// let fields = Fields::new(Tm::from_fields(2024, 8, 11, 23, 34, 25), 42, Some(TzInfo::new(-14400, true, "EDT")));
/// assert_eq!(strftime(&fields, "%F %T.%f %Z"), "2024-08-11 23:34:25.000042 EDT");
/// assert_eq!(strftime(&fields, "%s %z"), "1723433665 -0400");
/// ```
pub fn strftime(fields: &Fields, format: &str) -> String {
	Strftime::new(fields, format).to_string()
}

/// The error type for [`strptime`].
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
	/// The text did not match a literal in the format at this byte offset.
	LiteralMismatch(usize),
	/// The text had no value for this directive.
	MissingValue(char),
	/// The value for this directive was out of range.
	OutOfRange(char),
	/// The directive is not supported for parsing.
	UnsupportedDirective(char),
	/// The format ended with a lone `%`.
	StrayPercent,
	/// The day does not exist in the parsed month.
	DayOutOfRange,
	/// Text was left over after the format was fully matched.
	UnconvertedData(String)
}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ParseError::LiteralMismatch(pos) => write!(f, "Text does not match format at offset {}", pos),
			ParseError::MissingValue(d) => write!(f, "Missing value for %{}", d),
			ParseError::OutOfRange(d) => write!(f, "Value for %{} out of range", d),
			ParseError::UnsupportedDirective(d) => write!(f, "Unsupported directive %{}", d),
			ParseError::StrayPercent => f.write_str("Stray % at end of format"),
			ParseError::DayOutOfRange => f.write_str("Day is out of range for month"),
			ParseError::UnconvertedData(s) => write!(f, "Unconverted data remains: {}", s)
		}
	}
}

impl error::Error for ParseError {}

/// Calendar fields read by [`strptime`].
///
/// Fields missing from the format default to 1900-01-01 00:00:00.000000.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parsed {
	pub year: i32,
	pub month: u8,
	pub day: u8,
	pub hour: u8,
	pub minute: u8,
	pub second: u8,
	pub microsecond: u32,
	/// UTC offset in seconds, if the format contained `%z`
	pub utoff: Option<i32>
}

impl Parsed {
	/// The parsed civil date and time (without microseconds).
	pub fn tm(&self) -> Tm {
		Tm::from_fields(self.year, self.month, self.day, self.hour, self.minute, self.second)
	}
}

/// Intermediate state while matching a format.
struct State {
	parsed: Parsed,
	/// Hour from `%I`
	hour12: Option<u8>,
	/// `%p`, true for PM
	pm: Option<bool>,
	/// Day of year from `%j`
	yday: Option<u16>,
	/// Whether `%m`/`%b` or `%d` were seen
	month_or_day: bool
}

/// A cursor over the text being parsed.
struct Scanner<'a> {
	text: &'a str,
	pos: usize
}

impl<'a> Scanner<'a> {
	fn rest(&self) -> &'a str {
		&self.text[self.pos..]
	}

	/// Skip whitespace, returning the number of characters skipped.
	fn whitespace(&mut self) -> usize {
		let rest = self.rest();
		let len: usize = rest.chars().take_while(|c| c.is_whitespace()).map(char::len_utf8).sum();
		self.pos += len;
		rest[..len].chars().count()
	}

	/// Read between `min` and `max` ASCII digits for directive `d`.
	fn digits(&mut self, d: char, min: usize, max: usize) -> Result<(u32, usize), ParseError> {
		let rest = self.rest().as_bytes();
		let len = rest.iter().take(max).take_while(|b| b.is_ascii_digit()).count();
		if len < min {
			return Err(ParseError::MissingValue(d));
		}
		// At most six digits, so no overflow
		let v = rest[..len].iter().fold(0u32, |r, b| r * 10 + (b - b'0') as u32);
		self.pos += len;
		Ok((v, len))
	}

	/// Read a 1-2 digit number for directive `d` in `lo..=hi`.
	fn number(&mut self, d: char, lo: u32, hi: u32) -> Result<u8, ParseError> {
		let (v, _) = self.digits(d, 1, 2)?;
		if v < lo || v > hi {
			return Err(ParseError::OutOfRange(d));
		}
		Ok(v as u8)
	}

	/// Match one of `names` case-insensitively, returning its index.
	fn name(&mut self, d: char, names: &[&str]) -> Result<usize, ParseError> {
		let rest = self.rest();
		let (i, n) = names.iter()
			.enumerate()
			.find(|(_, n)| rest.get(..n.len()).is_some_and(|s| s.eq_ignore_ascii_case(n)))
			.ok_or(ParseError::MissingValue(d))?;
		self.pos += n.len();
		Ok(i)
	}

	/// Match a literal character case-insensitively.
	fn literal(&mut self, c: char) -> Result<(), ParseError> {
		match self.rest().chars().next() {
			Some(t) if t == c || t.to_lowercase().eq(c.to_lowercase()) => {
				self.pos += t.len_utf8();
				Ok(())
			},
			_ => Err(ParseError::LiteralMismatch(self.pos))
		}
	}

	/// Read a UTC offset: `Z`, or `+HHMM` with an optional seconds part and optional colons.
	fn utoff(&mut self) -> Result<i32, ParseError> {
		let sign = match self.rest().as_bytes().first() {
			Some(b'Z') => {
				self.pos += 1;
				return Ok(0);
			},
			Some(b'+') => 1,
			Some(b'-') => -1,
			_ => return Err(ParseError::MissingValue('z'))
		};
		self.pos += 1;

		let (hours, _) = self.digits('z', 2, 2)?;
		let colon = self.rest().starts_with(':');
		if colon {
			self.pos += 1;
		}
		let (minutes, _) = self.digits('z', 2, 2)?;
		let mut seconds = 0;
		let rest = self.rest().as_bytes();
		let more = if colon { rest.first() == Some(&b':') } else { rest.first().is_some_and(u8::is_ascii_digit) };
		if more {
			self.pos += colon as usize;
			seconds = self.digits('z', 2, 2)?.0;
		}
		if minutes > 59 || seconds > 59 {
			return Err(ParseError::OutOfRange('z'));
		}
		Ok(sign * (hours * 3600 + minutes * 60 + seconds) as i32)
	}

	/// Match `format` against the text, recording values into `state`.
	fn format(&mut self, format: &str, state: &mut State) -> Result<(), ParseError> {
		let mut chars = format.chars().peekable();
		while let Some(c) = chars.next() {
			if c == '%' {
				let d = chars.next().ok_or(ParseError::StrayPercent)?;
				self.directive(d, state)?;
			} else if c.is_whitespace() {
				// A run of whitespace matches one or more whitespace characters
				while chars.next_if(|c| c.is_whitespace()).is_some() {}
				if self.whitespace() == 0 {
					return Err(ParseError::LiteralMismatch(self.pos));
				}
			} else {
				self.literal(c)?;
			}
		}
		Ok(())
	}

	fn directive(&mut self, d: char, state: &mut State) -> Result<(), ParseError> {
		let p = &mut state.parsed;
		match d {
			'Y' => p.year = self.digits(d, 4, 4)?.0 as i32,
			'y' => {
				let (y, _) = self.digits(d, 2, 2)?;
				p.year = if y < 69 { 2000 + y as i32 } else { 1900 + y as i32 };
			},
			'm' => {
				p.month = self.number(d, 1, 12)?;
				state.month_or_day = true;
			},
			'd' | 'e' => {
				let rest = self.rest().as_bytes();
				if rest.first() == Some(&b' ') && rest.get(1).is_some_and(u8::is_ascii_digit) {
					self.pos += 1;
				}
				p.day = self.number(d, 1, 31)?;
				state.month_or_day = true;
			},
			'H' => p.hour = self.number(d, 0, 23)?,
			'I' => state.hour12 = Some(self.number(d, 1, 12)?),
			'p' => state.pm = Some(self.name(d, &["AM", "PM"])? == 1),
			'M' => p.minute = self.number(d, 0, 59)?,
			'S' => p.second = self.number(d, 0, 59)?,
			'f' => {
				let (v, len) = self.digits(d, 1, 6)?;
				p.microsecond = v * 10u32.pow(6 - len as u32);
			},
			'j' => {
				let (v, _) = self.digits(d, 1, 3)?;
				if !(1..=366).contains(&v) {
					return Err(ParseError::OutOfRange(d));
				}
				state.yday = Some(v as u16);
			},
			'a' => { self.name(d, &WEEKDAYS_ABBR)?; },
			'A' => { self.name(d, &WEEKDAYS)?; },
			'b' | 'h' => {
				p.month = self.name(d, &MONTHS_ABBR)? as u8 + 1;
				state.month_or_day = true;
			},
			'B' => {
				p.month = self.name(d, &MONTHS)? as u8 + 1;
				state.month_or_day = true;
			},
			'z' => p.utoff = Some(self.utoff()?),
			'Z' => {
				let len = self.rest().bytes().take_while(u8::is_ascii_alphabetic).count();
				if len == 0 {
					return Err(ParseError::MissingValue(d));
				}
				self.pos += len;
			},
			'F' => self.format("%Y-%m-%d", state)?,
			'T' => self.format("%H:%M:%S", state)?,
			'D' => self.format("%m/%d/%y", state)?,
			'R' => self.format("%H:%M", state)?,
			'n' | 't' => { self.whitespace(); },
			'%' => self.literal('%')?,
			d => return Err(ParseError::UnsupportedDirective(d))
		}
		Ok(())
	}
}

/// Parse `text` according to `format`.
///
/// Numbers may have fewer digits than their full width (`%m` matches `5` and `05`), except `%Y`
/// and `%y` which need exactly four and two digits. Names and literals match case-insensitively.
/// Whitespace in `format` matches one or more whitespace characters. `%f` reads 1-6 digits as a
/// fraction of a second. `%j` sets the month and day unless `%m`, `%b`/`%B` or `%d` are present.
///
/// # Errors
///
/// Returns [`ParseError`] if `text` doesn't match `format`, a value is out of range, the day does
/// not exist in the month, or text remains after the format is matched.
///
/// # Examples
///
/// ```
/// # use time::format::{strptime, Parsed, ParseError};
/// assert_eq!(strptime("2011-05-31 19:00:01", "%Y-%m-%d %H:%M:%S"), Ok(Parsed {
/// 	year: 2011,
/// 	month: 5,
/// 	day: 31,
/// 	hour: 19,
/// 	minute: 0,
/// 	second: 1,
/// 	microsecond: 0,
/// 	utoff: None
/// }));
/// assert_eq!(strptime("2011-05-31", "%Y-%m-%d %H"), Err(ParseError::LiteralMismatch(10)));
/// ```
pub fn strptime(text: &str, format: &str) -> Result<Parsed, ParseError> {
	let mut state = State {
		parsed: Parsed {
			year: 1900,
			month: 1,
			day: 1,
			hour: 0,
			minute: 0,
			second: 0,
			microsecond: 0,
			utoff: None
		},
		hour12: None,
		pm: None,
		yday: None,
		month_or_day: false
	};

	let mut scanner = Scanner { text, pos: 0 };
	scanner.format(format, &mut state)?;
	if !scanner.rest().is_empty() {
		return Err(ParseError::UnconvertedData(scanner.rest().to_string()));
	}

	let mut p = state.parsed;
	if let Some(h) = state.hour12 {
		p.hour = match state.pm {
			Some(true) => h % 12 + 12,
			_ => h % 12
		};
	}
	if let (Some(yday), false) = (state.yday, state.month_or_day) {
		let (y, m, d) = civil_from_days(days_from_civil(p.year, 1, 1) + yday as i64 - 1);
		p.year = y as i32;
		p.month = m;
		p.day = d;
	}
	if p.day > days_per_month(p.year, p.month) {
		return Err(ParseError::DayOutOfRange);
	}
	Ok(p)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn fields(time: i64, microsecond: u32, info: Option<TzInfo>) -> Fields {
		let local = time + info.map_or(0, |i| i.utoff as i64);
		Fields::new(Tm::new(local).unwrap(), microsecond, info)
	}

	fn parsed(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Parsed {
		Parsed { year, month, day, hour, minute, second, microsecond: 0, utoff: None }
	}

	#[test]
	fn strftime_directives() {
		let edt = Some(TzInfo::new(-14400, true, "EDT"));
		let f = fields(1723433665, 42, edt);
		assert_eq!(strftime(&f, "%Y-%m-%d %H:%M:%S"), "2024-08-11 23:34:25");
		assert_eq!(strftime(&f, "%a %A %b %B %h"), "Sun Sunday Aug August Aug");
		assert_eq!(strftime(&f, "%I %p %y %j %e"), "11 PM 24 224 11");
		assert_eq!(strftime(&f, "%u %w %s"), "7 0 1723433665");
		assert_eq!(strftime(&f, "%c"), "Sun Aug 11 23:34:25 2024");
		assert_eq!(strftime(&f, "%x %X"), "08/11/24 23:34:25");
		assert_eq!(strftime(&f, "%D|%R|%T|%F"), "08/11/24|23:34|23:34:25|2024-08-11");
		assert_eq!(strftime(&f, "%f %z %Z"), "000042 -0400 EDT");
		assert_eq!(strftime(&f, "100%% %n%t"), "100% \n\t");

		// Verbatim output for unknown directives and a trailing %
		assert_eq!(strftime(&f, "%q %Y%"), "%q 2024%");
		assert_eq!(strftime(&f, "plain"), "plain");
		assert_eq!(strftime(&f, ""), "");
	}

	#[test]
	fn strftime_edges() {
		let f = fields(0, 0, None);
		assert_eq!(strftime(&f, "%c %I %p %z%Z"), "Thu Jan  1 00:00:00 1970 12 AM ");
		assert_eq!(strftime(&fields(43200, 0, None), "%I %p"), "12 PM");
		assert_eq!(strftime(&f, "%s"), "0");

		let f = fields(0, 999999, Some(TzInfo::new(19800, false, "IST")));
		assert_eq!(strftime(&f, "%H:%M:%S.%f %z"), "05:30:00.999999 +0530");
		let f = fields(0, 0, Some(TzInfo::new(-12600, false, "-0330")));
		assert_eq!(strftime(&f, "%z %Z %s"), "-0330 -0330 0");
		let f = fields(0, 0, Some(TzInfo::new(3601, false, "LMT")));
		assert_eq!(strftime(&f, "%z"), "+010001");

		// Negative timestamps and small years
		assert_eq!(strftime(&fields(-1, 0, None), "%F %T"), "1969-12-31 23:59:59");
		assert_eq!(strftime(&fields(-62135596800, 0, None), "%F %y %j"), "0001-01-01 01 001");
	}

	#[test]
	fn strptime_basic() {
		assert_eq!(strptime("2011-05-31 19:00:01", "%Y-%m-%d %H:%M:%S"), Ok(parsed(2011, 5, 31, 19, 0, 1)));
		assert_eq!(strptime("12:30", "%H:%M"), Ok(parsed(1900, 1, 1, 12, 30, 0)));
		assert_eq!(strptime("", ""), Ok(parsed(1900, 1, 1, 0, 0, 0)));
		assert_eq!(strptime("2024-8-5 7:3:9", "%Y-%m-%d %H:%M:%S"), Ok(parsed(2024, 8, 5, 7, 3, 9)));
		assert_eq!(strptime("20240805", "%Y%m%d"), Ok(parsed(2024, 8, 5, 0, 0, 0)));
		assert_eq!(strptime("2024-08-11T23:34:25", "%FT%T"), Ok(parsed(2024, 8, 11, 23, 34, 25)));
		assert_eq!(strptime("08/11/24 23:34", "%D %R"), Ok(parsed(2024, 8, 11, 23, 34, 0)));
		assert_eq!(strptime("100%", "100%%"), Ok(parsed(1900, 1, 1, 0, 0, 0)));
	}

	#[test]
	fn strptime_two_digit_year() {
		assert_eq!(strptime("69", "%y").map(|p| p.year), Ok(1969));
		assert_eq!(strptime("99", "%y").map(|p| p.year), Ok(1999));
		assert_eq!(strptime("00", "%y").map(|p| p.year), Ok(2000));
		assert_eq!(strptime("68", "%y").map(|p| p.year), Ok(2068));
		assert_eq!(strptime("7", "%y"), Err(ParseError::MissingValue('y')));
	}

	#[test]
	fn strptime_whitespace_and_case() {
		assert_eq!(strptime("2024-01-05   10", "%Y-%m-%d %H"), Ok(parsed(2024, 1, 5, 10, 0, 0)));
		assert_eq!(strptime("2024-01-05\t\n10", "%Y-%m-%d  %H"), Ok(parsed(2024, 1, 5, 10, 0, 0)));
		assert_eq!(strptime("2024-01-0510", "%Y-%m-%d %H"), Err(ParseError::LiteralMismatch(10)));
		assert_eq!(strptime("aug 11 2024", "%b %d %Y"), Ok(parsed(2024, 8, 11, 0, 0, 0)));
		assert_eq!(strptime("SUNDAY, AUGUST 11", "%A, %B %d"), Ok(parsed(1900, 8, 11, 0, 0, 0)));
		assert_eq!(strptime("Aug  5", "%b %e"), Ok(parsed(1900, 8, 5, 0, 0, 0)));
		assert_eq!(strptime("2024T01", "%Yt%m"), Ok(parsed(2024, 1, 1, 0, 0, 0)));
		assert_eq!(strptime("Augx", "%B"), Err(ParseError::MissingValue('B')));
	}

	#[test]
	fn strptime_twelve_hour_clock() {
		let hour = |text: &str, format: &str| strptime(text, format).map(|p| p.hour);
		assert_eq!(hour("12:15 am", "%I:%M %p"), Ok(0));
		assert_eq!(hour("12:15 PM", "%I:%M %p"), Ok(12));
		assert_eq!(hour("01:00 pm", "%I:%M %p"), Ok(13));
		assert_eq!(hour("11 AM", "%I %p"), Ok(11));
		assert_eq!(hour("12", "%I"), Ok(0));
		assert_eq!(hour("13", "%I"), Err(ParseError::OutOfRange('I')));
		assert_eq!(hour("0", "%I"), Err(ParseError::OutOfRange('I')));
		// %p alone doesn't change a 24-hour clock value
		assert_eq!(hour("09 PM", "%H %p"), Ok(9));
	}

	#[test]
	fn strptime_fraction_and_yday() {
		let micro = |text: &str| strptime(text, "%S.%f").map(|p| p.microsecond);
		assert_eq!(micro("1.5"), Ok(500000));
		assert_eq!(micro("1.000042"), Ok(42));
		assert_eq!(micro("1.123456"), Ok(123456));
		assert_eq!(micro("1.1234567"), Err(ParseError::UnconvertedData("7".to_string())));
		assert_eq!(micro("1."), Err(ParseError::MissingValue('f')));

		assert_eq!(strptime("2024 060", "%Y %j"), Ok(parsed(2024, 2, 29, 0, 0, 0)));
		assert_eq!(strptime("2023 60", "%Y %j"), Ok(parsed(2023, 3, 1, 0, 0, 0)));
		assert_eq!(strptime("2023 366", "%Y %j"), Ok(parsed(2024, 1, 1, 0, 0, 0)));
		assert_eq!(strptime("2024 400", "%Y %j"), Err(ParseError::OutOfRange('j')));
		// Month and day win over %j
		assert_eq!(strptime("2024 060 03-15", "%Y %j %m-%d"), Ok(parsed(2024, 3, 15, 0, 0, 0)));
	}

	#[test]
	fn strptime_offsets() {
		let utoff = |text: &str| strptime(text, "%z").map(|p| p.utoff);
		assert_eq!(utoff("+0530"), Ok(Some(19800)));
		assert_eq!(utoff("-03:30"), Ok(Some(-12600)));
		assert_eq!(utoff("Z"), Ok(Some(0)));
		assert_eq!(utoff("+0000"), Ok(Some(0)));
		assert_eq!(utoff("+01:00:30"), Ok(Some(3630)));
		assert_eq!(utoff("-010030"), Ok(Some(-3630)));
		assert_eq!(utoff("+5"), Err(ParseError::MissingValue('z')));
		assert_eq!(utoff("0530"), Err(ParseError::MissingValue('z')));
		assert_eq!(utoff("+0575"), Err(ParseError::OutOfRange('z')));
		assert_eq!(utoff("+05:30:"), Err(ParseError::MissingValue('z')));

		assert_eq!(strptime("2024-08-11 23:34:25 EDT", "%Y-%m-%d %H:%M:%S %Z"), Ok(parsed(2024, 8, 11, 23, 34, 25)));
		assert_eq!(strptime("123", "%Z"), Err(ParseError::MissingValue('Z')));
	}

	#[test]
	fn strptime_errors() {
		assert_eq!(strptime("2024-13-01", "%Y-%m-%d"), Err(ParseError::OutOfRange('m')));
		assert_eq!(strptime("2024-00-01", "%Y-%m-%d"), Err(ParseError::OutOfRange('m')));
		assert_eq!(strptime("2024-01-32", "%Y-%m-%d"), Err(ParseError::OutOfRange('d')));
		assert_eq!(strptime("2023-02-29", "%Y-%m-%d"), Err(ParseError::DayOutOfRange));
		assert_eq!(strptime("02-29", "%m-%d"), Err(ParseError::DayOutOfRange));
		assert_eq!(strptime("24:00", "%H:%M"), Err(ParseError::OutOfRange('H')));
		assert_eq!(strptime("23:60", "%H:%M"), Err(ParseError::OutOfRange('M')));
		assert_eq!(strptime("2024-01-01x", "%Y-%m-%d"), Err(ParseError::UnconvertedData("x".to_string())));
		assert_eq!(strptime("abc", "%Y"), Err(ParseError::MissingValue('Y')));
		assert_eq!(strptime("24", "%Y"), Err(ParseError::MissingValue('Y')));
		assert_eq!(strptime("2024/01", "%Y-%m"), Err(ParseError::LiteralMismatch(4)));
		assert_eq!(strptime("2024", "%Y%"), Err(ParseError::StrayPercent));
		assert_eq!(strptime("2024", "%Q"), Err(ParseError::UnsupportedDirective('Q')));
		assert_eq!(strptime("7", "%u"), Err(ParseError::UnsupportedDirective('u')));
	}

	#[test]
	fn format_parse_round_trip() {
		let format = "%a %d %b %Y %H:%M:%S.%f %z";
		let info = Some(TzInfo::new(-25200, true, "PDT"));
		for time in [-2208988800, 0, 951782400, 1723433665, 4102444799] {
			let f = fields(time, 123, info);
			let p = strptime(&strftime(&f, format), format).unwrap();
			assert_eq!(p.tm(), f.tm, "time: {}", time);
			assert_eq!(p.microsecond, 123);
			assert_eq!(p.utoff, Some(-25200));
		}
	}
}
