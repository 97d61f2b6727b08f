use crate::date::CalendarDate;

/// strftime pattern for copied dates, e.g. `23 Dec 2016` or `1 Jan 2017`.
pub const DATE_FORMAT: &str = "%-d %b %Y";

/// Optional padding around the copied date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SpacingFlags {
    pub leading: bool,
    pub trailing: bool,
}

impl SpacingFlags {
    pub fn new(leading: bool, trailing: bool) -> Self {
        Self { leading, trailing }
    }
}

pub fn format(date: CalendarDate, flags: SpacingFlags) -> String {
    let mut output = String::with_capacity(13);
    if flags.leading {
        output.push(' ');
    }
    output.push_str(&date.as_naive().format(DATE_FORMAT).to_string());
    if flags.trailing {
        output.push(' ');
    }
    output
}
