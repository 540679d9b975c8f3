//! Support for command line argument parsing.
//!
//! See [crate] documentation for details on command line arguments and examples.

use std::error::Error;
use std::ffi::OsString;
use std::fmt::{Display, Debug};
use std::path::PathBuf;
use std::str::FromStr;

/// The default timezone, when `-z` is not given.
pub const DEFAULT_TIMEZONE: &str = "local";

/// The default format for `now` and `format`, when `-f` is not given.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The operation to run.
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum Command {
	/// Print the current time.
	Now,
	/// Print a timestamp as formatted civil time.
	Format(f64),
	/// Parse civil time text and print its timestamp.
	Parse(String),
	/// Print a timestamp as a calendar value with its UTC offset.
	Convert(f64)
}

/// The error type for parsing command line arguments.
#[cfg_attr(test, derive(PartialEq))]
pub enum ArgumentsError {
	/// The option was unrecognized. The option is returned as the payload of this variant.
	UnrecognizedOption(String),
	/// Error converting an argument to UTF-8. The argument index and original [`OsString`] are
	/// returned as the payload of this variant.
	InvalidUTF8(usize, OsString),
	/// No command was given.
	MissingCommand,
	/// The command is not one of `now`, `format`, `parse` or `convert`.
	InvalidCommand(String),
	/// The value for `format` or `convert` is not a number.
	InvalidTimestamp(String),
	/// More positional arguments than the command takes.
	UnexpectedArgument(String),
	/// The parameter for an option or command was not supplied. The option or command is returned
	/// as the payload for this variant.
	MissingParameter(String),
	/// Help option (-h) was included, so print help details and exit.
	Help
}

impl Display for ArgumentsError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ArgumentsError::UnrecognizedOption(s) => write!(f, "Unrecognized option: {}", s),
			ArgumentsError::InvalidUTF8(i, v) => write!(f, "Invalid UTF-8 in argument {}: {:?}", i, v),
			ArgumentsError::MissingCommand => write!(f, "Missing command"),
			ArgumentsError::InvalidCommand(s) => write!(f, "Invalid command: {}", s),
			ArgumentsError::InvalidTimestamp(s) => write!(f, "Invalid timestamp: {}", s),
			ArgumentsError::UnexpectedArgument(s) => write!(f, "Unexpected argument: {}", s),
			ArgumentsError::MissingParameter(s) => write!(f, "Missing parameter for {}", s),
			ArgumentsError::Help => write!(f, "Help requested")
		}
	}
}

impl Debug for ArgumentsError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		Display::fmt(self, f)
	}
}

impl Error for ArgumentsError {}

/// Convert an argument to [`&str`].
///
/// The function takes the argument index `i`, optional argument name `a`, and the argument `s`.
///
/// # Errors
///
/// Returns [`ArgumentsError::InvalidUTF8`] if the argument could not be converted to UTF-8 or
/// [`ArgumentsError::MissingParameter`] if the argument is `None`.
fn arg_to_str<'a, 'b>(i: usize, a: Option<&'a str>, s: Option<&'b OsString>)
	-> Result<&'b str, ArgumentsError>
{
	match s {
		Some(v) => v.to_str().ok_or_else(|| ArgumentsError::InvalidUTF8(i, v.clone())),
		None => Err(ArgumentsError::MissingParameter(a.map(String::from).unwrap_or_default()))
	}
}

/// Parse a timestamp argument, which may be negative or fractional.
fn parse_timestamp_arg(s: &str) -> Result<f64, ArgumentsError> {
	f64::from_str(s)
		.ok()
		.filter(|v| v.is_finite())
		.ok_or_else(|| ArgumentsError::InvalidTimestamp(s.to_string()))
}

/// Build a [`Command`] from its name and optional value.
fn make_command(name: &str, value: Option<String>) -> Result<Command, ArgumentsError> {
	let required = || value.clone().ok_or_else(|| ArgumentsError::MissingParameter(name.to_string()));
	match name {
		"now" => Ok(Command::Now),
		"format" => Ok(Command::Format(parse_timestamp_arg(&required()?)?)),
		"parse" => Ok(Command::Parse(required()?)),
		"convert" => Ok(Command::Convert(parse_timestamp_arg(&required()?)?)),
		_ => Err(ArgumentsError::InvalidCommand(name.to_string()))
	}
}

/// Parsed command line arguments.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Arguments {
	/// The operation to run.
	pub command: Command,
	/// The timezone name.
	pub timezone: String,
	/// The `strftime`/`strptime` format.
	pub format: String,
	/// The timezone database directory (if provided).
	pub zoneinfo: Option<PathBuf>
}

impl Arguments {
	/// Parse command line arguments.
	///
	/// The input can be any type that implements [`Iterator`] that yields [`OsString`], though
	/// typically this would be [`std::env::args_os`]. This function assumes that the application
	/// name is **not** supplied as the first item yielded by `args`.
	///
	/// Positional arguments are the command followed by its value. A value starting with `-` is
	/// read as a positional argument if it is a number, so negative timestamps work without
	/// quoting tricks.
	///
	/// # Errors
	///
	/// This function can return any of the variants in [`ArgumentsError`]. See that documentation
	/// for more details.
	pub fn parse(mut args: impl Iterator<Item = OsString>) -> Result<Arguments, ArgumentsError>
	{
		let mut positional: Vec<String> = Vec::new();
		let mut timezone = String::from(DEFAULT_TIMEZONE);
		let mut format = String::from(DEFAULT_FORMAT);
		let mut zoneinfo: Option<PathBuf> = None;
		let mut arg = args.next();
		let mut i = 0;
		loop {
			if arg.is_none() { break; }
			match arg_to_str(i, None, arg.as_ref())? {
				z @ ("-z" | "--timezone") => {
					timezone = String::from(arg_to_str(i+1, Some(z), args.next().as_ref())?);
					// Increment because we called args.next()
					i += 1;
				},
				f @ ("-f" | "--format") => {
					format = String::from(arg_to_str(i+1, Some(f), args.next().as_ref())?);
					// Increment because we called args.next()
					i += 1;
				},
				"--zoneinfo" => {
					// Paths need not be UTF-8
					match args.next() {
						Some(a) => zoneinfo = Some(PathBuf::from(a)),
						None => return Err(ArgumentsError::MissingParameter(String::from("--zoneinfo")))
					}
					// Increment because we called args.next()
					i += 1;
				},
				"-h" | "--help" => return Err(ArgumentsError::Help),
				v => {
					if v.starts_with('-') && v.len() > 1 && f64::from_str(v).is_err() {
						return Err(ArgumentsError::UnrecognizedOption(v.to_string()));
					}
					if positional.len() == 2 {
						return Err(ArgumentsError::UnexpectedArgument(v.to_string()));
					}
					positional.push(v.to_string());
				}
			}
			arg = args.next();
			i += 1;
		}

		let mut positional = positional.into_iter();
		let name = positional.next().ok_or(ArgumentsError::MissingCommand)?;
		let value = positional.next();
		let command = make_command(&name, value.clone())?;
		if let (Command::Now, Some(v)) = (&command, value) {
			return Err(ArgumentsError::UnexpectedArgument(v));
		}

		Ok(Arguments {
			command,
			timezone,
			format,
			zoneinfo
		})
	}
}
