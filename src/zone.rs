//! Timezone handles and timezone arguments.
//!
//! A [`TimezoneHandle`] is a resolved, cheaply clonable timezone. Operations that need a timezone
//! accept anything convertible into a [`TimezoneArg`]: a name (`&str` or [`String`]) which is
//! resolved on every call, or an already resolved handle.

use std::{fmt, sync::Arc};
use time::tz::{parse_bytes, parse_tzstring, Abbr, Timezone, TzFileError, Zoneinfo};

use crate::Error;

/// A resolved timezone, together with the name it was resolved from.
///
/// Clones share the underlying timezone data.
#[derive(Clone, PartialEq)]
pub struct TimezoneHandle {
	name: Arc<str>,
	tz: Arc<Timezone>
}

impl TimezoneHandle {
	/// Wrap a [`Timezone`] under a display name.
	pub fn new(name: &str, tz: Timezone) -> TimezoneHandle {
		TimezoneHandle {
			name: Arc::from(name),
			tz: Arc::new(tz)
		}
	}

	/// The fixed zero offset timezone, named `utc`.
	pub fn utc() -> TimezoneHandle {
		TimezoneHandle::new("utc", Timezone::utc())
	}

	/// A fixed offset timezone, `utoff` seconds east of UTC, named like `+0530`.
	///
	/// # Examples
	///
	/// ```
	/// # use easytime::TimezoneHandle;
	/// let ist = TimezoneHandle::fixed(19800);
	/// assert_eq!(ist.name(), "+0530");
	/// assert_eq!(ist.timezone().info(0).utoff, 19800);
	/// ```
	pub fn fixed(utoff: i32) -> TimezoneHandle {
		TimezoneHandle::new(Abbr::from_offset(utoff).as_str(), Timezone::from_offset(utoff))
	}

	/// A timezone following a POSIX TZ string such as `CET-1CEST,M3.5.0,M10.5.0/3`.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidTimezone`] if the TZ string is malformed.
	pub fn from_tzstring(tzstring: &str) -> Result<TimezoneHandle, Error> {
		parse_tzstring(tzstring.as_bytes())
			.map(|tz| TimezoneHandle::new(tzstring, tz))
			.map_err(|e| Error::InvalidTimezone(tzstring.to_string(), TzFileError::from(e)))
	}

	/// A timezone read from TZif data.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidTimezone`] if `bytes` is not valid TZif data.
	pub fn from_tzif(name: &str, bytes: &[u8]) -> Result<TimezoneHandle, Error> {
		parse_bytes(bytes)
			.map(|tz| TimezoneHandle::new(name, tz))
			.map_err(|e| Error::InvalidTimezone(name.to_string(), e))
	}

	/// The name this handle was resolved from.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The timezone rules.
	pub fn timezone(&self) -> &Timezone {
		&self.tz
	}
}

impl fmt::Display for TimezoneHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}

impl fmt::Debug for TimezoneHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("TimezoneHandle").field(&self.name).finish()
	}
}

/// A timezone name or an already resolved [`TimezoneHandle`].
#[derive(Clone, Debug, PartialEq)]
pub enum TimezoneArg {
	Name(String),
	Handle(TimezoneHandle)
}

impl TimezoneArg {
	/// Resolve to a handle using the host's timezone database.
	///
	/// # Errors
	///
	/// See [`crate::resolve_timezone`].
	pub fn resolve(self) -> Result<TimezoneHandle, Error> {
		self.resolve_in(&Zoneinfo::system())
	}

	/// Resolve to a handle using `zoneinfo` for names.
	///
	/// # Errors
	///
	/// See [`crate::resolve_timezone`].
	pub fn resolve_in(self, zoneinfo: &Zoneinfo) -> Result<TimezoneHandle, Error> {
		match self {
			TimezoneArg::Name(name) => crate::resolve_timezone_in(zoneinfo, &name),
			TimezoneArg::Handle(handle) => Ok(handle)
		}
	}
}

impl From<&str> for TimezoneArg {
	fn from(name: &str) -> Self {
		TimezoneArg::Name(name.to_string())
	}
}

impl From<String> for TimezoneArg {
	fn from(name: String) -> Self {
		TimezoneArg::Name(name)
	}
}

impl From<&String> for TimezoneArg {
	fn from(name: &String) -> Self {
		TimezoneArg::Name(name.clone())
	}
}

impl From<TimezoneHandle> for TimezoneArg {
	fn from(handle: TimezoneHandle) -> Self {
		TimezoneArg::Handle(handle)
	}
}

impl From<&TimezoneHandle> for TimezoneArg {
	fn from(handle: &TimezoneHandle) -> Self {
		TimezoneArg::Handle(handle.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use time::tz::{TzInfo, TzStringError};

	#[test]
	fn timezone_handle() {
		let utc = TimezoneHandle::utc();
		assert_eq!(utc.name(), "utc");
		assert_eq!(utc.timezone().info(1723433665), TzInfo::new(0, false, "UTC"));
		assert_eq!(utc.to_string(), "utc");
		assert_eq!(format!("{:?}", utc), "TimezoneHandle(\"utc\")");

		let clone = utc.clone();
		assert!(Arc::ptr_eq(&utc.tz, &clone.tz));
		assert_eq!(utc, clone);

		let fixed = TimezoneHandle::fixed(-12600);
		assert_eq!(fixed.name(), "-0330");
		assert_eq!(fixed.timezone().info(0), TzInfo::new(-12600, false, "-0330"));
		assert_ne!(fixed, utc);
	}

	#[test]
	fn timezone_handle_from_tzstring() {
		let cet = TimezoneHandle::from_tzstring("CET-1CEST,M3.5.0,M10.5.0/3").unwrap();
		assert_eq!(cet.name(), "CET-1CEST,M3.5.0,M10.5.0/3");
		assert_eq!(cet.timezone().info(1723433665), TzInfo::new(7200, true, "CEST"));

		assert_eq!(
			TimezoneHandle::from_tzstring("CET-1CEST"),
			Err(Error::InvalidTimezone(
				"CET-1CEST".to_string(),
				TzFileError::InvalidOrUnsupportedTzString(TzStringError::MissingTzDateRule)
			))
		);
		assert_eq!(
			TimezoneHandle::from_tzif("junk", b"junk"),
			Err(Error::InvalidTimezone("junk".to_string(), TzFileError::NotATzFile))
		);
	}

	#[test]
	fn timezone_arg() {
		let handle = TimezoneHandle::fixed(3600);
		assert_eq!(TimezoneArg::from("utc"), TimezoneArg::Name("utc".to_string()));
		assert_eq!(TimezoneArg::from(String::from("local")), TimezoneArg::Name("local".to_string()));
		assert_eq!(TimezoneArg::from(&handle), TimezoneArg::Handle(handle.clone()));

		assert_eq!(TimezoneArg::from(&handle).resolve(), Ok(handle.clone()));
		assert_eq!(TimezoneArg::from("utc").resolve(), Ok(TimezoneHandle::utc()));
		assert_eq!(
			TimezoneArg::from("not-a-real-zone").resolve(),
			Err(Error::UnknownTimezone("not-a-real-zone".to_string()))
		);
	}
}
