//! Convert between timestamps and civil time from the command line.
//!
//! # Command Line Arguments
//!
//! General form: `easytime [options...] command [value]`
//!
//! | Short form | Long form    | Argument        | Default             | Description                      |
//! | ---------- | ------------ | --------------- | ------------------- | -------------------------------- |
//! | `-z`       | `--timezone` | Timezone name   | `local`             | The timezone to use              |
//! | `-f`       | `--format`   | Format pattern  | `%Y-%m-%d %H:%M:%S` | The `strftime`/`strptime` format |
//! |            | `--zoneinfo` | Directory       | `$TZDIR` or system  | The timezone database to use     |
//!
//! Timezone names are `utc`, `local`, or an IANA name such as `America/New_York`.
//!
//! Commands:
//! - `now`: print the current time with `--format`
//! - `format <TIMESTAMP>`: print a Unix timestamp with `--format`
//! - `parse <TEXT>`: parse text with `--format` and print the Unix timestamp
//! - `convert <TIMESTAMP>`: print a Unix timestamp as a calendar value with its UTC offset
//!
//! # Examples
//!
//! ```sh
//! easytime -z America/New_York now
//! easytime -z utc format 1306868401
//! easytime -z utc -f "%d/%m/%Y %H:%M" parse "31/05/2011 19:00"
//! easytime -z Asia/Kolkata convert -86400
//! ```

use std::process::ExitCode;

use easytime::{
	current_calendar, format_timestamp, parse_timestamp, resolve_timezone_in, timestamp_to_calendar,
	Error, Zoneinfo
};

use args::{Arguments, ArgumentsError, Command};

mod args;

/// Run the command in `args`, printing its result to stdout.
///
/// # Errors
///
/// Returns any library [`Error`], i.e. an unknown timezone or text not matching the format.
fn run(args: Arguments) -> Result<(), Error> {
	let zoneinfo = match args.zoneinfo {
		Some(dir) => Zoneinfo::new(dir),
		None => Zoneinfo::system()
	};
	let timezone = resolve_timezone_in(&zoneinfo, &args.timezone)?;

	match args.command {
		Command::Now => println!("{}", current_calendar(&timezone)?.format(&args.format)),
		Command::Format(ts) => println!("{}", format_timestamp(ts, &args.format, &timezone)?),
		Command::Parse(text) => println!("{}", parse_timestamp(&text, &args.format, &timezone)?),
		Command::Convert(ts) => println!("{}", timestamp_to_calendar(ts, &timezone)?)
	}
	Ok(())
}

/// Main program entry point.
///
/// Parses input arguments and runs the command. See [`crate`] documentation for details.
fn main() -> ExitCode {
	let args = match Arguments::parse(std::env::args_os().skip(1)) {
		Ok(a) => a,
		Err(e) => {
			return if let ArgumentsError::Help = e {
				println!("\
Convert between Unix timestamps and civil time.

Usage: easytime [OPTIONS] <COMMAND> [VALUE]

Options:
  -z, --timezone <NAME>     the timezone to use, default local
  -f, --format <FORMAT>     the strftime/strptime format, default \"%Y-%m-%d %H:%M:%S\"
  --zoneinfo <DIR>          the timezone database, default $TZDIR or /usr/share/zoneinfo
  -h, --help                print this help

Commands:
  now                       print the current time
  format <TIMESTAMP>        print a timestamp as civil time
  parse <TEXT>              print the timestamp of civil time text
  convert <TIMESTAMP>       print a timestamp with its UTC offset and abbreviation

Examples:
  easytime -z America/New_York now
  easytime -z utc format 1306868401
  easytime -z utc -f \"%d/%m/%Y %H:%M\" parse \"31/05/2011 19:00\"
  easytime -z Asia/Kolkata convert -86400\n");
				ExitCode::SUCCESS
			} else {
				eprintln!("{}", e);
				ExitCode::FAILURE
			}
		}
	};

	run(args)
		.inspect_err(|e| eprintln!("{}", e))
		.map(|_| ExitCode::SUCCESS)
		.unwrap_or(ExitCode::FAILURE)
}
