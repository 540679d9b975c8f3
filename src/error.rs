//! Error types used across modules.
//!
//! Every fallible operation in this crate returns [`Error`]. The payloads carry the underlying
//! error from the [`time`] crate where there is one.

use std::{error, fmt};
use time::{format::ParseError, tz::{LookupError, TzFileError}};

use crate::DateError;

/// The error type for timezone conversions.
#[derive(PartialEq)]
pub enum Error {
	/// The timezone name does not match any timezone. The name is provided in the payload.
	UnknownTimezone(String),
	/// The timezone exists, but its data is malformed. The name and underlying error are provided
	/// in the payload.
	InvalidTimezone(String, TzFileError),
	/// A calendar field or timestamp is out of range.
	InvalidDate(DateError),
	/// The text does not match the format.
	Parse(ParseError),
	/// A naive calendar value was converted without a timezone.
	AmbiguousTimezone
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::UnknownTimezone(name) => write!(f, "Unknown timezone: {}", name),
			Error::InvalidTimezone(name, e) => write!(f, "Invalid timezone {}: {}", name, e),
			Error::InvalidDate(e) => write!(f, "Invalid date: {}", e),
			Error::Parse(e) => write!(f, "Parse error: {}", e),
			Error::AmbiguousTimezone => write!(f, "Naive calendar value requires a timezone")
		}
	}
}

impl fmt::Debug for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

impl error::Error for Error {
	fn source(&self) -> Option<&(dyn error::Error + 'static)> {
		match self {
			Error::InvalidTimezone(_, e) => Some(e),
			Error::InvalidDate(e) => Some(e),
			Error::Parse(e) => Some(e),
			_ => None
		}
	}
}

impl From<LookupError> for Error {
	fn from(error: LookupError) -> Self {
		match error {
			LookupError::UnknownZone(name) => Error::UnknownTimezone(name),
			LookupError::InvalidZone(name, e) => Error::InvalidTimezone(name, e)
		}
	}
}

impl From<DateError> for Error {
	fn from(error: DateError) -> Self {
		Error::InvalidDate(error)
	}
}

impl From<ParseError> for Error {
	fn from(error: ParseError) -> Self {
		Error::Parse(error)
	}
}
