//! Support for parsing and using compiled timezone files (TZif files) and TZ strings.
//!
//! This module supports a subset of Olson timezone database features: UTC offsets, daylight
//! savings time changes and timezone abbreviations, specified either directly in TZif binary data
//! or via a TZ string (which may be present in the compiled TZif file or supplied directly). This
//! module supports versions 1-4 of the TZif specification for this subset of features, and most
//! extended POSIX features for TZ strings, including quoted names such as `<+0530>`.
//!
//! Leap seconds are not supported. Unix timestamps most commonly do not include leap seconds,
//! instead either repeating or lengthening the prior second, and the leap second records in
//! TZif files are skipped.
//!
//! A [`Timezone`] answers two questions: which UTC offset is in effect at a given instant
//! ([`Timezone::info`]), and which instants correspond to a given local civil time
//! ([`Timezone::local_to_utc`]). The latter may have zero or two answers around DST transitions,
//! see [`LocalResult`].
//!
//! # Examples
//!
//! ```
//! # use time::{time::Tm, tz::{parse_tzstring, LocalResult, TzInfo}};
//! let timezone = parse_tzstring(b"EST5EDT,M3.2.0,M11.1.0").unwrap();
//!
//! // Getting info for a given unix timestamp
//! let info = timezone.info(1723433665);
//! assert_eq!(info, TzInfo::new(-14400, true, "EDT"));
//!
//! // Going back from local civil time to the unix timestamp
//! let local = Tm::from_fields(2024, 8, 11, 23, 34, 25).timestamp();
//! assert_eq!(timezone.local_to_utc(local), LocalResult::Single(1723433665));
//! ```

use alloc::{boxed::Box, format, vec::Vec};
use core::fmt;
use crate::time::{Tm, SECONDS_PER_DAY};

pub mod tzstring;
pub use tzstring::*;

pub mod tzfile;
pub use tzfile::*;

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub mod zoneinfo;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use zoneinfo::*;

/// Get the first byte, if any, or return [`Default::default()`].
#[inline(always)]
fn get_first_or_default(bytes: &[u8]) -> u8 {
	bytes.first().copied().unwrap_or_default()
}

/// Maximum number of bytes kept for a timezone abbreviation.
const ABBR_CAPACITY: usize = 8;

/// A timezone abbreviation such as `EST`, `CEST` or `+0530`.
///
/// Abbreviations are stored inline so that [`TzInfo`] stays `Copy`. Only printable ASCII is
/// kept, and anything beyond 8 bytes is truncated; real abbreviations are 3-6 bytes long.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Abbr {
	bytes: [u8; ABBR_CAPACITY],
	len: u8
}

impl Abbr {
	/// Create an abbreviation from raw bytes, stopping at the first byte that is not printable
	/// ASCII.
	pub fn new(name: &[u8]) -> Abbr {
		let mut abbr = Abbr::default();
		for &b in name.iter().take_while(|b| b.is_ascii_graphic()).take(ABBR_CAPACITY) {
			abbr.bytes[abbr.len as usize] = b;
			abbr.len += 1;
		}
		abbr
	}

	/// Abbreviation for a fixed UTC offset in the style used by the timezone database, i.e.
	/// `+05`, `-0330` or `+053015`.
	pub fn from_offset(utoff: i32) -> Abbr {
		let sign = if utoff < 0 { '-' } else { '+' };
		let v = utoff.unsigned_abs();
		let (h, m, s) = (v / 3600, v / 60 % 60, v % 60);
		let s = if s != 0 {
			format!("{}{:02}{:02}{:02}", sign, h, m, s)
		} else if m != 0 {
			format!("{}{:02}{:02}", sign, h, m)
		} else {
			format!("{}{:02}", sign, h)
		};
		Abbr::new(s.as_bytes())
	}

	/// The abbreviation as a string slice.
	pub fn as_str(&self) -> &str {
		core::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
	}
}

impl fmt::Display for Abbr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl fmt::Debug for Abbr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self.as_str(), f)
	}
}

/// Timezone information at a moment in time.
///
/// This type provides the UTC offset, whether standard time or daylight savings time is in
/// effect on the associated date (which is not itself stored in this type), and the abbreviation
/// in use. UTC offsets are added to UTC to determine the local time. For example, New York during
/// standard time has a UTC offset of `-5 hours` (or `-18000 seconds`), so `16:00 UTC` becomes
/// `11:00 EST`.
///
/// The default value for this type is `{ utoff: 0, isdst: false, abbr: "" }`.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct TzInfo {
	/// The UTC offset in seconds
	pub utoff: i32,
	/// Whether standard time (`false`) or daylight savings time (`true`) is in effect
	pub isdst: bool,
	/// The abbreviation in effect, e.g. `EST`
	pub abbr: Abbr
}

impl TzInfo {
	/// Create timezone info from its parts.
	pub fn new(utoff: i32, isdst: bool, abbr: &str) -> TzInfo {
		TzInfo { utoff, isdst, abbr: Abbr::new(abbr.as_bytes()) }
	}
}

/// Calendar time with associated timezone information.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TmWithTzInfo {
	/// The calendar time (in local timezone)
	pub tm: Tm,
	/// The timezone information for that time
	pub info: TzInfo
}

/// The result of mapping local civil time back to Unix time.
///
/// Local civil times are passed around as "local seconds": the Unix timestamp the civil time
/// would have if it were UTC (see [`Tm::timestamp`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LocalResult {
	/// The local time corresponds to exactly one instant.
	Single(i64),
	/// The local time occurs twice, typically when DST ends and clocks are set back. The payload
	/// is the earlier and the later instant.
	Ambiguous(i64, i64),
	/// The local time was skipped, typically when DST starts and clocks are set forward.
	///
	/// `before` is the instant computed with the UTC offset in effect before the transition,
	/// and `after` the one computed with the offset after it. When clocks move forward `before`
	/// is the later of the two, falling just after the transition.
	Gap {
		/// Instant computed with the offset before the transition
		before: i64,
		/// Instant computed with the offset after the transition
		after: i64
	}
}

impl LocalResult {
	/// Pick a single instant: the earlier one for repeated local times, and the one computed
	/// with the pre-transition offset for skipped local times.
	///
	/// This matches what most systems (and `mktime` with unknown DST) do, and means a skipped
	/// wall clock time such as 02:30 on a spring-forward night is read as 03:30.
	///
	/// # Examples
	///
	/// ```
	/// # use time::tz::LocalResult;
	/// assert_eq!(LocalResult::Single(5).compatible(), 5);
	/// assert_eq!(LocalResult::Ambiguous(5, 3605).compatible(), 5);
	/// assert_eq!(LocalResult::Gap { before: 3605, after: 5 }.compatible(), 3605);
	/// ```
	pub fn compatible(&self) -> i64 {
		match *self {
			LocalResult::Single(t) => t,
			LocalResult::Ambiguous(earlier, _) => earlier,
			LocalResult::Gap { before, .. } => before
		}
	}
}

/// Timezone configuration.
///
/// This type allows you to convert UTC timestamps to calendar dates in the local timezone and
/// back, accounting for optional daylight savings time rules. It supports both fixed transition
/// times (as defined in TZif files) and computing transition times using (optional) TZ strings.
///
/// # Examples
///
/// ```
/// # use time::{time::Tm, tz::{parse_tzstring, TzInfo, TmWithTzInfo}};
/// let timezone = parse_tzstring(b"PST8PDT,M3.2.0,M11.1.0").unwrap();
///
/// assert_eq!(timezone.info(1723433665), TzInfo::new(-25200, true, "PDT"));
/// assert_eq!(timezone.date(1723433665), Some(TmWithTzInfo {
/// 	tm: Tm { sec: 25, min: 34, hour: 20, day: 11, mon: 8, year: 2024, wday: 0, yday: 224 },
/// 	info: TzInfo::new(-25200, true, "PDT")
/// }));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Timezone {
	/// Precomputed transition times and corresponding timezone info, sorted by time
	times: Box<[(i64, TzInfo)]>,
	/// TZ spec for computing transition times after the last precomputed one
	spec: Option<TzSpec>
}

impl From<TzSpec> for Timezone {
	/// Create a timezone that follows `spec` at all times.
	fn from(spec: TzSpec) -> Self {
		Timezone {
			times: Box::default(),
			spec: Some(spec)
		}
	}
}

impl Timezone {
	/// Create a timezone from precomputed transitions and an optional TZ rule.
	///
	/// `times` must be sorted by transition time.
	pub fn new(times: Vec<(i64, TzInfo)>, spec: Option<TzSpec>) -> Timezone {
		debug_assert!(times.windows(2).all(|w| w[0].0 <= w[1].0));
		Timezone {
			times: times.into_boxed_slice(),
			spec
		}
	}

	/// The UTC timezone.
	pub fn utc() -> Timezone {
		Timezone::fixed(TzInfo::new(0, false, "UTC"))
	}

	/// A timezone with a single, fixed UTC offset.
	pub fn fixed(info: TzInfo) -> Timezone {
		Timezone::from(TzSpec { std: info, dst: None })
	}

	/// A timezone with a fixed UTC offset in seconds, abbreviated like `+0530`.
	///
	/// # Examples
	///
	/// ```
	/// # use time::tz::{Timezone, TzInfo};
	/// let timezone = Timezone::from_offset(19800);
	/// assert_eq!(timezone.info(0), TzInfo::new(19800, false, "+0530"));
	/// ```
	pub fn from_offset(utoff: i32) -> Timezone {
		Timezone::fixed(TzInfo { utoff, isdst: false, abbr: Abbr::from_offset(utoff) })
	}

	/// Get timezone info for a given moment in time.
	///
	/// Precomputed transition times are checked first. A TZ rule is only consulted if `time` is
	/// at or after the last precomputed transition (or there are none). Without a rule the last
	/// precomputed transition stays in effect. If `time` is before the first precomputed
	/// transition, the first transition's info applies.
	///
	/// Finally, if there are no precomputed transition times and no TZ rule, this function always
	/// returns the default [`TzInfo`]: `{ utoff: 0, isdst: false }`.
	pub fn info(&self, time: i64) -> TzInfo {
		// Index of the first transition strictly after `time`
		let next = self.times.partition_point(|&(t, _)| t <= time);
		if next < self.times.len() {
			return self.times[next.saturating_sub(1)].1;
		}
		match (self.spec, self.times.last()) {
			(Some(spec), _) => spec.info(time),
			(None, Some(&(_, info))) => info,
			(None, None) => TzInfo::default()
		}
	}

	/// Get calendar date info for a given `time` in this timezone.
	///
	/// Returns `None` if the local date does not fit into [`Tm`].
	pub fn date(&self, time: i64) -> Option<TmWithTzInfo> {
		let info = self.info(time);
		let tm = Tm::new(time.checked_add(info.utoff as i64)?)?;
		Some(TmWithTzInfo { tm, info })
	}

	/// Map local civil time (in "local seconds", see [`LocalResult`]) to Unix time.
	///
	/// The offsets in effect a day before and a day after `local` are tried as candidates, which
	/// finds every answer unless two transitions happen within two days of each other.
	///
	/// # Examples
	///
	/// ```
	/// # use time::{time::Tm, tz::{parse_tzstring, LocalResult}};
	/// let timezone = parse_tzstring(b"EST5EDT,M3.2.0,M11.1.0").unwrap();
	///
	/// // 01:30 on Nov 3, 2024 happened twice in New York
	/// let local = Tm::from_fields(2024, 11, 3, 1, 30, 0).timestamp();
	/// assert_eq!(timezone.local_to_utc(local), LocalResult::Ambiguous(1730611800, 1730615400));
	///
	/// // 02:30 on Mar 10, 2024 never happened
	/// let local = Tm::from_fields(2024, 3, 10, 2, 30, 0).timestamp();
	/// assert_eq!(
	/// 	timezone.local_to_utc(local),
	/// 	LocalResult::Gap { before: 1710055800, after: 1710052200 }
	/// );
	/// ```
	pub fn local_to_utc(&self, local: i64) -> LocalResult {
		let candidate = |time: i64| local.saturating_sub(self.info(time).utoff as i64);
		let valid = |utc: i64| utc.saturating_add(self.info(utc).utoff as i64) == local;

		let before = candidate(local.saturating_sub(SECONDS_PER_DAY));
		let after = candidate(local.saturating_add(SECONDS_PER_DAY));
		match (valid(before), valid(after)) {
			(true, true) if before != after => {
				LocalResult::Ambiguous(before.min(after), before.max(after))
			},
			(true, _) => LocalResult::Single(before),
			(_, true) => LocalResult::Single(after),
			(false, false) => {
				// Transitions closer together than the probes, try the offset at the first guess
				let retry = candidate(before);
				if valid(retry) {
					LocalResult::Single(retry)
				} else {
					LocalResult::Gap { before, after }
				}
			}
		}
	}

	/// Get the set of unique UTC offsets (in seconds) in this timezone.
	///
	/// While it may seem like there can only be two offsets (standard and daylight savings time),
	/// it's possible for precomputed transition times to span over changes in DST rules. This may
	/// be rare, but do not assume there are only two possible offset values.
	pub fn offsets(&self) -> Vec<i32> {
		let mut r: Vec<i32> = Vec::with_capacity(8);
		// Closure to append only unique values
		let mut append = |v| {
			if !r.contains(&v) {
				r.push(v);
			}
		};

		for v in self.times.iter() {
			append(v.1.utoff);
		}

		if let Some(spec) = self.spec {
			append(spec.std.utoff);
			if let Some((dst, _)) = spec.dst {
				append(dst.utoff);
			}
		}

		r
	}

	/// Get the [`TzSpec`] for this timezone, if specified.
	///
	/// Note that when set, this value is technically only valid for future dates/times, and may be
	/// invalid for prior dates if timezone or DST rules have changed in the past. For example, the US
	/// changed DST rules in 2007 from `M4.1.0,M10.5.0` to `M3.2.0,M11.1.0`. If using the currently
	/// valid `TzSpec`, any transition times computed before 2007 would be incorrect.
	pub fn spec(&self) -> Option<TzSpec> {
		self.spec
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloc::vec;

	fn est() -> TzInfo { TzInfo::new(-18000, false, "EST") }
	fn edt() -> TzInfo { TzInfo::new(-14400, true, "EDT") }

	#[test]
	fn abbr() {
		assert_eq!(Abbr::new(b"EST").as_str(), "EST");
		assert_eq!(Abbr::new(b"ABCDEFGHIJ").as_str(), "ABCDEFGH");
		assert_eq!(Abbr::new(b"AB\0CD").as_str(), "AB");
		assert_eq!(Abbr::new(b"").as_str(), "");
		assert_eq!(Abbr::from_offset(0).as_str(), "+00");
		assert_eq!(Abbr::from_offset(-12600).as_str(), "-0330");
		assert_eq!(Abbr::from_offset(3615).as_str(), "+010015");
		assert_eq!(alloc::format!("{:?}", Abbr::new(b"UTC")), "\"UTC\"");
	}

	#[test]
	fn timezone_info() {
		let mut tz = Timezone::new(vec![], None);
		assert_eq!(tz.info(1704672000), TzInfo::default());

		tz.spec = TzSpec::parse(b"EST5EDT,M3.2.0,M11.1.0").ok();
		assert_eq!(tz.info(1704672000), est());
		assert_eq!(tz.info(1710053999), est());
		assert_eq!(tz.info(1710054000), edt());
		assert_eq!(tz.info(1730613599), edt());
		assert_eq!(tz.info(1730613600), est());

		let a = TzInfo::new(-20000, false, "A");
		let b = TzInfo::new(-10000, true, "B");
		let c = TzInfo::new(-5000, false, "C");
		tz.times = Box::new([(1710054000, a), (1720054000, b), (1730054000, c)]);
		assert_eq!(tz.info(1704672000), a);
		assert_eq!(tz.info(1710053999), a);
		assert_eq!(tz.info(1710054000), a);
		assert_eq!(tz.info(1720053999), a);
		assert_eq!(tz.info(1720054001), b);
		assert_eq!(tz.info(1730613599), edt());
		assert_eq!(tz.info(1730613600), est());

		// Without a rule the last transition stays in effect
		tz.spec = None;
		assert_eq!(tz.info(1730054000), c);
		assert_eq!(tz.info(i64::MAX), c);
		assert_eq!(tz.info(i64::MIN), a);
	}

	#[test]
	fn timezone_date() {
		let tz = Timezone::from_offset(-3600);
		assert_eq!(tz.date(0), Some(TmWithTzInfo {
			tm: Tm { sec: 0, min: 0, hour: 23, day: 31, mon: 12, year: 1969, wday: 3, yday: 365 },
			info: TzInfo::new(-3600, false, "-01")
		}));
		assert_eq!(tz.date(i64::MIN), None);
		assert_eq!(Timezone::utc().date(1306868401).map(|d| d.tm), Tm::new(1306868401));
	}

	#[test]
	fn timezone_local_to_utc() {
		let tz = Timezone::from(TzSpec::parse(b"EST5EDT,M3.2.0,M11.1.0").unwrap());

		// Plain winter and summer times
		let local = Tm::from_fields(2024, 1, 15, 12, 0, 0).timestamp();
		assert_eq!(tz.local_to_utc(local), LocalResult::Single(local + 18000));
		let local = Tm::from_fields(2024, 7, 15, 12, 0, 0).timestamp();
		assert_eq!(tz.local_to_utc(local), LocalResult::Single(local + 14400));

		// Edges of the spring-forward gap (02:00-03:00 local on Mar 10)
		let local = Tm::from_fields(2024, 3, 10, 1, 59, 59).timestamp();
		assert_eq!(tz.local_to_utc(local), LocalResult::Single(1710053999));
		let local = Tm::from_fields(2024, 3, 10, 2, 0, 0).timestamp();
		assert_eq!(tz.local_to_utc(local), LocalResult::Gap { before: 1710054000, after: 1710050400 });
		let local = Tm::from_fields(2024, 3, 10, 3, 0, 0).timestamp();
		assert_eq!(tz.local_to_utc(local), LocalResult::Single(1710054000));

		// Edges of the fall-back fold (01:00-02:00 local on Nov 3)
		let local = Tm::from_fields(2024, 11, 3, 0, 59, 59).timestamp();
		assert_eq!(tz.local_to_utc(local), LocalResult::Single(1730609999));
		let local = Tm::from_fields(2024, 11, 3, 1, 0, 0).timestamp();
		assert_eq!(tz.local_to_utc(local), LocalResult::Ambiguous(1730610000, 1730613600));
		let local = Tm::from_fields(2024, 11, 3, 2, 0, 0).timestamp();
		assert_eq!(tz.local_to_utc(local), LocalResult::Single(1730617200));

		// Every instant maps back to itself through its local time
		for t in (1704067200..1735689600).step_by(3607) {
			let local = tz.date(t).unwrap().tm.timestamp();
			match tz.local_to_utc(local) {
				LocalResult::Single(u) => assert_eq!(u, t),
				LocalResult::Ambiguous(a, b) => assert!(a == t || b == t, "time: {}", t),
				LocalResult::Gap { .. } => panic!("time {} resolved into a gap", t)
			}
		}

		// Make sure extreme inputs cannot panic
		tz.local_to_utc(i64::MIN);
		tz.local_to_utc(i64::MAX);
	}

	#[test]
	fn timezone_offsets() {
		let mut tz = Timezone::new(vec![], None);
		assert_eq!(tz.offsets(), Vec::<i32>::new());

		tz.spec = TzSpec::parse(b"EST5EDT,M3.2.0,M11.1.0").ok();
		assert_eq!(tz.offsets(), vec![-18000, -14400]);

		let a = TzInfo::new(-20000, false, "A");
		let b = TzInfo::new(-10000, true, "B");
		tz.times = Box::new([(1710054000, a), (1720054000, b), (1730054000, a),
		                     (1740054000, b), (1750054000, TzInfo::new(-5000, false, "C"))]);
		assert_eq!(tz.offsets(), vec![-20000, -10000, -5000, -18000, -14400]);
	}
}
