//! Calendar, timezone and pattern utilities backing `easytime`.
//!
//! This crate is divided into three parts: [`time`] deals with converting between Unix timestamps
//! and proleptic Gregorian calendar time, with no understanding of timezones; [`tz`] deals with
//! parsing and using timezones (TZ strings and TZif data), adding conversions in both directions
//! between Unix timestamps and any timezone's civil time; [`format`] renders and parses calendar
//! values against `strftime`-style patterns.
//!
//! The crate is `no_std` but requires [`alloc`]. If [`std`] is available and the `std` feature is
//! enabled, the [`tz`] module can read TZif files ([`tz::parse_file`]) and look up zones in the
//! host's timezone database ([`tz::Zoneinfo`]).
//!
//! If the `now` feature is enabled, the [`time`] module enables a helper function to get the
//! current time ([`time::now`]).
//!
//! # Examples
//!
//! Basic conversion from Unix time to UTC calendar time.
//! ```
//! # use time::time::Tm;
//! let date = Tm::new(1718617807).unwrap();
//! assert_eq!(date, Tm {
//! 	sec: 7,
//! 	min: 50,
//! 	hour: 9,
//! 	day: 17,
//! 	mon: 6,
//! 	year: 2024,
//! 	wday: 1,
//! 	yday: 169
//! });
//! ```
//!
//! Conversion from Unix time to US Eastern calendar time, then formatting it.
//! ```
//! # use time::{format::{strftime, Fields}, tz::parse_tzstring};
//! let timezone = parse_tzstring(b"EST5EDT,M3.2.0,M11.1.0").unwrap();
//! let date = timezone.date(1723433665).unwrap();
//! let fields = Fields::new(date.tm, 0, Some(date.info));
//! assert_eq!(strftime(&fields, "%Y-%m-%d %H:%M:%S %Z (%z)"), "2024-08-11 23:34:25 EDT (-0400)");
//! ```

#![no_std]
// only enables the `doc_cfg` feature when
// the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod time;
pub mod tz;
pub mod format;

pub use time::*;
