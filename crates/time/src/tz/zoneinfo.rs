//! Timezone database lookup.
//!
//! [`Zoneinfo`] resolves IANA timezone names (`America/New_York`) to [`Timezone`]s by reading
//! compiled TZif files from a database directory, and resolves the host's local timezone from the
//! `TZ` environment variable or `/etc/localtime`.
//!
//! # Examples
//!
//! ```
//! # use time::tz::{Zoneinfo, TzInfo};
//! let zoneinfo = Zoneinfo::system();
//! # if zoneinfo.dir().join("Europe/Paris").exists() {
//! let paris = zoneinfo.lookup("Europe/Paris").unwrap();
//! assert_eq!(paris.info(1723433665), TzInfo::new(7200, true, "CEST"));
//! # }
//! ```

use core::{error, fmt};
use std::{
	env,
	ffi::OsStr,
	path::{Component, Path, PathBuf},
	string::{String, ToString}
};
use super::{parse_file, parse_tzstring, Timezone, TzFileError};

/// Default location of the compiled timezone database.
pub const DEFAULT_TZDIR: &str = "/usr/share/zoneinfo";

/// Default location of the host's local timezone file.
pub const LOCALTIME: &str = "/etc/localtime";

/// The error type for timezone lookups.
#[derive(Debug, PartialEq)]
pub enum LookupError {
	/// No timezone with this name exists.
	UnknownZone(String),
	/// The timezone exists, but its data could not be read or parsed.
	InvalidZone(String, TzFileError)
}

impl fmt::Display for LookupError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LookupError::UnknownZone(name) => write!(f, "Unknown timezone: {}", name),
			LookupError::InvalidZone(name, e) => write!(f, "Invalid timezone {}: {}", name, e)
		}
	}
}

impl error::Error for LookupError {
	fn source(&self) -> Option<&(dyn error::Error + 'static)> {
		match self {
			LookupError::UnknownZone(_) => None,
			LookupError::InvalidZone(_, e) => Some(e)
		}
	}
}

/// A compiled timezone database on disk.
#[derive(Clone, Debug, PartialEq)]
pub struct Zoneinfo {
	dir: PathBuf,
	localtime: PathBuf
}

impl Zoneinfo {
	/// Use the database in `dir`, with `/etc/localtime` as the local timezone file.
	pub fn new<P: Into<PathBuf>>(dir: P) -> Zoneinfo {
		Zoneinfo {
			dir: dir.into(),
			localtime: PathBuf::from(LOCALTIME)
		}
	}

	/// Use the host's database: `$TZDIR` if set and non-empty, else [`DEFAULT_TZDIR`].
	pub fn system() -> Zoneinfo {
		match env::var_os("TZDIR") {
			Some(dir) if !dir.is_empty() => Zoneinfo::new(dir),
			_ => Zoneinfo::new(DEFAULT_TZDIR)
		}
	}

	/// Replace the file consulted by [`Zoneinfo::local`] when `TZ` is unset.
	pub fn with_localtime<P: Into<PathBuf>>(self, localtime: P) -> Zoneinfo {
		Zoneinfo { localtime: localtime.into(), ..self }
	}

	/// The database directory.
	pub fn dir(&self) -> &Path {
		&self.dir
	}

	/// Map a timezone name to a path inside the database.
	///
	/// Returns `None` for names that could escape the database directory (absolute paths, `..`)
	/// or are otherwise not plain relative names.
	fn path_of(&self, name: &str) -> Option<PathBuf> {
		let path = Path::new(name);
		if name.is_empty() || name.contains('\0') {
			return None;
		}
		if !path.components().all(|c| matches!(c, Component::Normal(_))) {
			return None;
		}
		Some(self.dir.join(path))
	}

	/// Look up a timezone by IANA name.
	///
	/// # Errors
	///
	/// Returns [`LookupError::UnknownZone`] if `name` is not a database entry: missing, a
	/// directory, not a TZif file, or not a valid relative name. Returns
	/// [`LookupError::InvalidZone`] if the entry exists but could not be read or is malformed.
	pub fn lookup(&self, name: &str) -> Result<Timezone, LookupError> {
		let unknown = || LookupError::UnknownZone(name.to_string());
		let path = self.path_of(name).ok_or_else(unknown)?;
		if !path.is_file() {
			return Err(unknown());
		}
		parse_file(&path).map_err(|e| match e {
			TzFileError::NotATzFile => unknown(),
			e => LookupError::InvalidZone(name.to_string(), e)
		})
	}

	/// Resolve the host's local timezone from the `TZ` environment variable.
	///
	/// See [`Zoneinfo::local_from`] for the rules.
	pub fn local(&self) -> Result<Timezone, LookupError> {
		self.local_from(env::var_os("TZ").as_deref())
	}

	/// Resolve a local timezone from a `TZ` value.
	///
	/// - `None` (unset): the local timezone file (`/etc/localtime`), or UTC if it doesn't exist
	/// - empty: UTC
	/// - `:file`, `/file`: that file, or a database entry for a relative name
	/// - otherwise: a database entry, or failing that a POSIX TZ string
	///
	/// # Errors
	///
	/// Returns [`LookupError::UnknownZone`] if the value names no timezone, or
	/// [`LookupError::InvalidZone`] if the named file is malformed.
	///
	/// # Examples
	///
	/// ```
	/// # use std::ffi::OsStr;
	/// # use time::tz::{Timezone, Zoneinfo, TzInfo};
	/// let zoneinfo = Zoneinfo::new("/nonexistent");
	/// assert_eq!(zoneinfo.local_from(Some(OsStr::new(""))), Ok(Timezone::utc()));
	///
	/// let tz = zoneinfo.local_from(Some(OsStr::new("EST5EDT,M3.2.0,M11.1.0"))).unwrap();
	/// assert_eq!(tz.info(1723433665), TzInfo::new(-14400, true, "EDT"));
	/// ```
	pub fn local_from(&self, tz: Option<&OsStr>) -> Result<Timezone, LookupError> {
		let Some(tz) = tz else {
			return match parse_file(&self.localtime) {
				Err(TzFileError::FileReadError(_)) if !self.localtime.exists() => Ok(Timezone::utc()),
				r => r.map_err(|e| LookupError::InvalidZone(self.localtime.display().to_string(), e))
			};
		};
		if tz.is_empty() {
			return Ok(Timezone::utc());
		}

		let value = tz.to_string_lossy();
		let name = value.strip_prefix(':').unwrap_or(&value);
		if name.starts_with('/') {
			if !Path::new(name).is_file() {
				return Err(LookupError::UnknownZone(name.to_string()));
			}
			return parse_file(name).map_err(|e| LookupError::InvalidZone(name.to_string(), e));
		}

		match self.lookup(name) {
			Err(LookupError::UnknownZone(_)) if name.len() == value.len() => {
				parse_tzstring(name.as_bytes()).map_err(|_| LookupError::UnknownZone(name.to_string()))
			},
			r => r
		}
	}
}

impl Default for Zoneinfo {
	fn default() -> Self {
		Zoneinfo::system()
	}
}
