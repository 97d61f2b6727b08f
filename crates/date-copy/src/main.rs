use std::process::ExitCode;

use argh::FromArgs;
use date_copy::{
    copy_date, format, select, Clock, InvalidOffset, Offset, Preferences, Spacing,
    SystemClipboard, SystemClock,
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error, PartialEq, Eq)]
enum DayError {
    #[error("pass either a day name or --offset, not both")]
    Conflicting,
    #[error(transparent)]
    Offset(#[from] InvalidOffset),
}

#[derive(FromArgs)]
/// Print yesterday's, today's or tomorrow's date as "23 Dec 2016".
struct Args {
    /// which day to print: yesterday, today (default) or tomorrow
    #[argh(positional)]
    day: Option<Offset>,

    /// day offset from today: -1, 0 or 1
    #[argh(option, short = 'o')]
    offset: Option<i64>,

    /// prepend a space
    #[argh(switch, short = 'l')]
    leading: bool,

    /// append a space
    #[argh(switch, short = 't')]
    trailing: bool,

    /// also copy the date to the clipboard
    #[argh(switch, short = 'c')]
    copy: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();

    let offset = match resolve_offset(args.day, args.offset) {
        Ok(offset) => offset,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut preferences = Preferences::default();
    preferences.set_spacing(Spacing::Leading, args.leading);
    preferences.set_spacing(Spacing::Trailing, args.trailing);

    let output = if args.copy {
        let mut clipboard = SystemClipboard::new();
        match copy_date(offset, &SystemClock, &preferences, &mut clipboard) {
            Ok(output) => output,
            Err(err) => {
                eprintln!("Error: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        format(select(offset, SystemClock.today()), preferences.spacing())
    };

    println!("{output}");
    ExitCode::SUCCESS
}

/// Today unless a day name or a numeric offset says otherwise.
fn resolve_offset(day: Option<Offset>, offset: Option<i64>) -> Result<Offset, DayError> {
    match (day, offset) {
        (Some(_), Some(_)) => Err(DayError::Conflicting),
        (Some(day), None) => Ok(day),
        (None, Some(days)) => Ok(Offset::from_days(days)?),
        (None, None) => Ok(Offset::Today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(args: &[&str]) -> Result<Offset, DayError> {
        let args = Args::from_args(&["date-copy"], args).expect("valid arguments");
        resolve_offset(args.day, args.offset)
    }

    #[test]
    fn defaults_to_today() {
        assert_eq!(resolve(&[]), Ok(Offset::Today));
    }

    #[test]
    fn accepts_a_day_name_or_an_offset() {
        assert_eq!(resolve(&["tomorrow"]), Ok(Offset::Tomorrow));
        assert_eq!(resolve(&["--offset", "-1"]), Ok(Offset::Yesterday));
        assert_eq!(resolve(&["-o", "1"]), Ok(Offset::Tomorrow));
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        assert_eq!(
            resolve(&["--offset", "2"]),
            Err(DayError::Offset(InvalidOffset::Days(2)))
        );
    }

    #[test]
    fn name_and_offset_together_are_rejected() {
        assert_eq!(resolve(&["today", "--offset", "1"]), Err(DayError::Conflicting));
    }

    #[test]
    fn unknown_day_name_fails_to_parse() {
        assert!(Args::from_args(&["date-copy"], &["someday"]).is_err());
    }
}
