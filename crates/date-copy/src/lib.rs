//! Date selection, formatting and clipboard plumbing for the date copy tool.
//!
//! Everything in this crate is independent of a windowing toolkit. Frontends
//! (the eframe app and the `date-copy` command line tool) build on
//! [`copy_date`], which ties a [`Clock`], the current [`Preferences`] and a
//! [`ClipboardWriter`] together.

pub mod clipboard;
pub mod clock;
pub mod date;
pub mod format;
pub mod prefs;

pub use clipboard::{ClipboardError, ClipboardOp, ClipboardWriter, MemoryClipboard, SystemClipboard};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{select, CalendarDate, InvalidOffset, Offset};
pub use format::{format, SpacingFlags, DATE_FORMAT};
pub use prefs::{
    InvalidSizeRange, Preferences, SizePreset, SizeRange, Spacing, DEFAULT_SIZE, MAX_SIZE,
    MIN_SIZE,
};

/// Copies the date selected by `offset` to `clipboard`.
///
/// The clipboard is cleared first and then written exactly once with the
/// formatted date. Returns the text that was copied.
pub fn copy_date(
    offset: Offset,
    clock: &impl Clock,
    preferences: &Preferences,
    clipboard: &mut impl ClipboardWriter,
) -> Result<String, ClipboardError> {
    let date = select(offset, clock.today());
    let output = format(date, preferences.spacing());

    clipboard.clear()?;
    clipboard.set_text(&output)?;

    tracing::info!(offset = ?offset, text = %output, "copied date to clipboard");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(year: i32, month: u32, day: u32) -> FixedClock {
        FixedClock::new(CalendarDate::from_ymd(year, month, day).expect("valid date"))
    }

    #[test]
    fn copy_clears_then_writes_once() {
        let clock = fixed(2016, 12, 23);
        let preferences = Preferences::default();
        let mut clipboard = MemoryClipboard::default();

        let copied = copy_date(Offset::Today, &clock, &preferences, &mut clipboard)
            .expect("memory clipboard never fails");

        assert_eq!(copied, "23 Dec 2016");
        assert_eq!(
            clipboard.operations(),
            &[ClipboardOp::Clear, ClipboardOp::SetText("23 Dec 2016".to_string())]
        );
    }

    #[test]
    fn copy_replaces_previous_contents() {
        let clock = fixed(2017, 1, 1);
        let preferences = Preferences::default();
        let mut clipboard = MemoryClipboard::default();

        copy_date(Offset::Tomorrow, &clock, &preferences, &mut clipboard).unwrap();
        copy_date(Offset::Yesterday, &clock, &preferences, &mut clipboard).unwrap();

        assert_eq!(clipboard.contents(), Some("31 Dec 2016"));
    }

    #[test]
    fn copy_applies_spacing_preferences() {
        let clock = fixed(2017, 1, 16);
        let mut preferences = Preferences::default();
        preferences.set_spacing(Spacing::Leading, true);
        preferences.set_spacing(Spacing::Trailing, true);
        let mut clipboard = MemoryClipboard::default();

        let copied = copy_date(Offset::Today, &clock, &preferences, &mut clipboard).unwrap();

        assert_eq!(copied, " 16 Jan 2017 ");
        assert_eq!(clipboard.contents(), Some(" 16 Jan 2017 "));
    }

    #[test]
    fn failed_clear_skips_the_write() {
        let clock = fixed(2017, 1, 16);
        let preferences = Preferences::default();
        let mut clipboard = MemoryClipboard::failing();

        let result = copy_date(Offset::Today, &clock, &preferences, &mut clipboard);

        assert!(result.is_err());
        assert!(clipboard.operations().is_empty());
        assert_eq!(clipboard.contents(), None);
    }
}
