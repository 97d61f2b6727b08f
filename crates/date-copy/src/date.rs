use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use thiserror::Error;

/// A Gregorian calendar date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Returns `None` when the triple does not name a real date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Which day, relative to today, gets copied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Offset {
    Yesterday,
    Today,
    Tomorrow,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidOffset {
    #[error("day offset {0} is not one of -1, 0 or 1")]
    Days(i64),
    #[error("hotkey {0} is not one of 1, 2 or 3")]
    Hotkey(u8),
    #[error("`{0}` is not one of yesterday, today or tomorrow")]
    Name(String),
}

impl Offset {
    pub const ALL: [Offset; 3] = [Offset::Yesterday, Offset::Today, Offset::Tomorrow];

    pub fn days(self) -> i64 {
        match self {
            Offset::Yesterday => -1,
            Offset::Today => 0,
            Offset::Tomorrow => 1,
        }
    }

    /// The number key bound to this offset.
    pub fn hotkey(self) -> u8 {
        match self {
            Offset::Yesterday => 1,
            Offset::Today => 2,
            Offset::Tomorrow => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Offset::Yesterday => "Yesterday",
            Offset::Today => "Today",
            Offset::Tomorrow => "Tomorrow",
        }
    }

    pub fn from_days(days: i64) -> Result<Self, InvalidOffset> {
        match days {
            -1 => Ok(Offset::Yesterday),
            0 => Ok(Offset::Today),
            1 => Ok(Offset::Tomorrow),
            other => Err(InvalidOffset::Days(other)),
        }
    }

    pub fn from_hotkey(key: u8) -> Result<Self, InvalidOffset> {
        match key {
            1 => Ok(Offset::Yesterday),
            2 => Ok(Offset::Today),
            3 => Ok(Offset::Tomorrow),
            other => Err(InvalidOffset::Hotkey(other)),
        }
    }
}

impl TryFrom<i64> for Offset {
    type Error = InvalidOffset;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        Offset::from_days(days)
    }
}

impl FromStr for Offset {
    type Err = InvalidOffset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yesterday" => Ok(Offset::Yesterday),
            "today" => Ok(Offset::Today),
            "tomorrow" => Ok(Offset::Tomorrow),
            _ => Err(InvalidOffset::Name(s.to_owned())),
        }
    }
}

/// Moves `today` by `offset` whole days.
///
/// # Panics
///
/// Panics if the result falls outside chrono's representable range, which
/// only happens one day away from `NaiveDate::MIN`/`NaiveDate::MAX`.
pub fn select(offset: Offset, today: CalendarDate) -> CalendarDate {
    let date = today.0;
    let moved = match offset {
        Offset::Yesterday => date.checked_sub_days(Days::new(1)),
        Offset::Today => Some(date),
        Offset::Tomorrow => date.checked_add_days(Days::new(1)),
    };
    CalendarDate(moved.expect("selected date is outside the supported calendar range"))
}
