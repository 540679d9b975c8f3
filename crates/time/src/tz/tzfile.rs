//! Support for parsing TZif files.
//!
//! TZif files ([RFC 8536]) are the compiled form of the Olson timezone database, found under
//! `/usr/share/zoneinfo` on most Unix systems. Versions 1-4 are supported. For version 2+ files
//! the 64-bit data block and the TZ string footer are used, and the legacy 32-bit block is
//! skipped.
//!
//! Timestamps before the first transition use the first local time type, as RFC 8536 specifies.
//! Timestamps after the last transition use the footer's TZ string if present, otherwise the
//! last transition stays in effect.
//!
//! The helper function [`parse_file`] requires the `std` feature.
//!
//! [RFC 8536]: https://datatracker.ietf.org/doc/html/rfc8536
//!
//! # Examples
//!
//! ```
//! # use time::{time::Tm, tz::{TzInfo, TmWithTzInfo}};
//! # #[cfg(feature = "std")] use time::tz::parse_file;
//! # #[cfg(feature = "std")] {
//! # if std::path::Path::new("/usr/share/zoneinfo/America/Los_Angeles").exists() {
//! // Parsing a file
//! let timezone = parse_file("/usr/share/zoneinfo/America/Los_Angeles").unwrap();
//!
//! // Getting info for a given unix timestamp
//! let info = timezone.info(1723433665);
//! assert_eq!(info, TzInfo::new(-25200, true, "PDT"));
//!
//! // Getting the date for a given unix timestamp
//! let date = timezone.date(1723433665);
//! assert_eq!(date, Some(TmWithTzInfo {
//! 	tm: Tm { sec: 25, min: 34, hour: 20, day: 11, mon: 8, year: 2024, wday: 0, yday: 224 },
//! 	info: TzInfo::new(-25200, true, "PDT")
//! }));
//! # }
//! # }
//! ```

use core::{error, fmt};
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{fs, io, path::Path, string::ToString};
use super::tzstring::{TzStringError, TzSpec};
use super::{Abbr, Timezone, TzInfo};

/// The error type for parsing timezone data (TZif files).
#[derive(Debug, PartialEq)]
pub enum TzFileError {
	/// Error reading the file. The reason is returned as a payload of this variant.
	FileReadError(String),
	/// The file being read is not a TZif file (missing "TZif" magic bytes).
	NotATzFile,
	/// The file is not one of the four supported versions. The found version is returned as a payload
	/// of this variant.
	UnsupportedVersion(u8),
	/// The file is not a valid TZif file.
	InvalidTzFile,
	/// The included TZ string is invalid or unsupported.
	InvalidOrUnsupportedTzString(TzStringError)
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl From<io::Error> for TzFileError {
	/// Wrap an [`io::Error`] in a [`TzFileError::FileReadError`].
	fn from(error: io::Error) -> Self {
		Self::FileReadError(error.to_string())
	}
}

impl From<TzStringError> for TzFileError {
	/// Wrap a [`TzStringError`] in a [`TzFileError::InvalidOrUnsupportedTzString`].
	fn from(error: TzStringError) -> Self {
		Self::InvalidOrUnsupportedTzString(error)
	}
}

impl fmt::Display for TzFileError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TzFileError::FileReadError(s) => write!(f, "{}", s),
			TzFileError::NotATzFile => write!(f, "Not a TZ file"),
			TzFileError::UnsupportedVersion(v) => write!(f, "Unsupported TZ version: {0} ({0:#04x})", v),
			TzFileError::InvalidTzFile => write!(f, "Invalid TZ file"),
			TzFileError::InvalidOrUnsupportedTzString(e) => write!(f, "{}", e)
		}
	}
}

impl error::Error for TzFileError {}

/// A bounds-checked, big endian cursor over TZif data.
struct Reader<'a> {
	bytes: &'a [u8]
}

impl<'a> Reader<'a> {
	/// Take the next `n` bytes, or fail with [`TzFileError::InvalidTzFile`] if there aren't enough.
	fn take(&mut self, n: usize) -> Result<&'a [u8], TzFileError> {
		if n > self.bytes.len() {
			return Err(TzFileError::InvalidTzFile);
		}
		let (head, tail) = self.bytes.split_at(n);
		self.bytes = tail;
		Ok(head)
	}

	fn array<const N: usize>(&mut self) -> Result<[u8; N], TzFileError> {
		self.take(N)?.try_into().map_err(|_| TzFileError::InvalidTzFile)
	}

	fn u8(&mut self) -> Result<u8, TzFileError> {
		Ok(self.array::<1>()?[0])
	}

	fn u32(&mut self) -> Result<u32, TzFileError> {
		Ok(u32::from_be_bytes(self.array()?))
	}

	fn i32(&mut self) -> Result<i32, TzFileError> {
		Ok(i32::from_be_bytes(self.array()?))
	}

	fn i64(&mut self) -> Result<i64, TzFileError> {
		Ok(i64::from_be_bytes(self.array()?))
	}
}

/// Header for a TZif data block.
///
/// This header excludes the magic number (`'TZif'`), version number and reserved bytes.
#[cfg_attr(test, derive(Debug, PartialEq))]
struct TzHeader {
	/// Count of UT/local indicators
	isutcnt: usize,
	/// Count of standard/wall indicators
	isstdcnt: usize,
	/// Count of leap second records
	leapcnt: usize,
	/// Count of transition times
	timecnt: usize,
	/// Count of local time type records
	typecnt: usize,
	/// Number of bytes used for time zone abbreviations
	charcnt: usize
}

impl TzHeader {
	/// Parse a full 44-byte TZif header, returning the version byte along with the counts.
	///
	/// # Errors
	///
	/// Returns [`TzFileError::NotATzFile`] if the magic bytes are missing, or
	/// [`TzFileError::InvalidTzFile`] if the header is truncated.
	fn parse(r: &mut Reader) -> Result<(u8, TzHeader), TzFileError> {
		if r.take(4).ok() != Some(b"TZif".as_slice()) {
			return Err(TzFileError::NotATzFile);
		}
		let version = r.u8()?;
		r.take(15)?;
		let mut count = || r.u32().map(|n| n as usize);
		let header = TzHeader {
			isutcnt: count()?,
			isstdcnt: count()?,
			leapcnt: count()?,
			timecnt: count()?,
			typecnt: count()?,
			charcnt: count()?
		};
		Ok((version, header))
	}

	/// Size in bytes of the data block following this header, with `timesize` bytes per
	/// transition time (4 for version 1 data, 8 otherwise).
	fn block_len(&self, timesize: usize) -> Option<usize> {
		let parts = [
			self.timecnt.checked_mul(timesize + 1)?,
			self.typecnt.checked_mul(6)?,
			self.charcnt,
			self.leapcnt.checked_mul(timesize + 4)?,
			self.isstdcnt,
			self.isutcnt
		];
		parts.iter().try_fold(0usize, |acc, &n| acc.checked_add(n))
	}
}

/// Parse one TZif data block into transitions, given its header.
///
/// The returned transitions start with a sentinel at [`i64::MIN`] carrying local time type 0.
fn parse_block(
	r: &mut Reader,
	h: &TzHeader,
	wide: bool
) -> Result<Vec<(i64, TzInfo)>, TzFileError> {
	if h.typecnt == 0 {
		return Err(TzFileError::InvalidTzFile);
	}
	if h.block_len(if wide { 8 } else { 4 }).is_none_or(|n| n > r.bytes.len()) {
		return Err(TzFileError::InvalidTzFile);
	}

	let times = (0..h.timecnt)
		.map(|_| if wide { r.i64() } else { r.i32().map(i64::from) })
		.collect::<Result<Vec<i64>, _>>()?;
	let indices = r.take(h.timecnt)?;

	// Local time types: (utoff, isdst, abbreviation index)
	let raw_types = (0..h.typecnt)
		.map(|_| -> Result<_, TzFileError> { Ok((r.i32()?, r.u8()? != 0, r.u8()? as usize)) })
		.collect::<Result<Vec<_>, TzFileError>>()?;
	let chars = r.take(h.charcnt)?;
	let types = raw_types.into_iter()
		.map(|(utoff, isdst, idx)| -> Result<_, TzFileError> {
			let abbr = chars.get(idx..).ok_or(TzFileError::InvalidTzFile)?;
			Ok(TzInfo { utoff, isdst, abbr: Abbr::new(abbr) })
		})
		.collect::<Result<Vec<_>, TzFileError>>()?;

	// Leap second records and the UT/standard indicators are not used
	let skip = h.leapcnt * (if wide { 12 } else { 8 }) + h.isstdcnt + h.isutcnt;
	r.take(skip)?;

	let mut transitions = Vec::with_capacity(h.timecnt + 1);
	transitions.push((i64::MIN, types[0]));
	for (&t, &i) in times.iter().zip(indices) {
		let info = *types.get(i as usize).ok_or(TzFileError::InvalidTzFile)?;
		if transitions.last().is_some_and(|&(prev, _)| prev > t) {
			return Err(TzFileError::InvalidTzFile);
		}
		transitions.push((t, info));
	}
	Ok(transitions)
}

/// Parse the newline-enclosed TZ string footer of a version 2+ file.
///
/// An empty footer means there is no rule for times after the last transition.
fn parse_footer(bytes: &[u8]) -> Result<Option<TzSpec>, TzFileError> {
	let inner = bytes.strip_prefix(b"\n").ok_or(TzFileError::InvalidTzFile)?;
	let end = inner.iter().position(|&b| b == b'\n').ok_or(TzFileError::InvalidTzFile)?;
	match &inner[..end] {
		[] => Ok(None),
		s => Ok(Some(TzSpec::parse(s)?))
	}
}

/// Parse a byte slice containing a TZif file.
///
/// # Errors
///
/// May return the following errors:
/// - [`TzFileError::NotATzFile`] if the file does not begin with the 'TZif' magic bytes
/// - [`TzFileError::UnsupportedVersion`] if the file version is not 1, 2, 3, or 4
/// - [`TzFileError::InvalidTzFile`] if the file is not properly formatted
/// - [`TzFileError::InvalidOrUnsupportedTzString`] if the optional TZ string is malformed
pub fn parse_bytes(bytes: &[u8]) -> Result<Timezone, TzFileError> {
	let mut r = Reader { bytes };
	let (version, h) = TzHeader::parse(&mut r)?;

	match version {
		// Version 1
		0 => {
			let times = parse_block(&mut r, &h, false)?;
			Ok(Timezone::new(times, None))
		},
		// Versions 2, 3, 4: skip the 32-bit block, then use the second header and block
		b'2'..=b'4' => {
			let len = h.block_len(4).ok_or(TzFileError::InvalidTzFile)?;
			r.take(len)?;
			let (_, h) = TzHeader::parse(&mut r).map_err(|_| TzFileError::InvalidTzFile)?;
			let times = parse_block(&mut r, &h, true)?;
			let spec = parse_footer(r.bytes)?;
			Ok(Timezone::new(times, spec))
		},
		// Any other version is not supported (none at the time of this writing)
		v => Err(TzFileError::UnsupportedVersion(v))
	}
}

/// Parse a TZif file.
///
/// # Errors
///
/// May return the following errors:
/// - [`TzFileError::FileReadError`] if the file could not be read
/// - [`TzFileError::NotATzFile`] if the file does not begin with the 'TZif' magic bytes
/// - [`TzFileError::UnsupportedVersion`] if the file version is not 1, 2, 3, or 4
/// - [`TzFileError::InvalidTzFile`] if the file is not properly formatted
/// - [`TzFileError::InvalidOrUnsupportedTzString`] if the optional TZ string is malformed
///
/// # Examples
///
/// ```no_run
/// # use time::tz::parse_file;
/// let timezone = parse_file("/usr/share/zoneinfo/America/Los_Angeles").unwrap();
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub fn parse_file<P>(file: P) -> Result<Timezone, TzFileError>
where
	P: AsRef<Path>
{
	let bytes = fs::read(file)?;
	parse_bytes(bytes.as_slice())
}
