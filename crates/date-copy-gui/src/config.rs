//! Launch-time settings. Nothing is read from or written to disk; every
//! launch starts from these flags and the built-in defaults.

use argh::FromArgs;
use date_copy::{InvalidSizeRange, Preferences, SizeRange, Spacing, MAX_SIZE, MIN_SIZE};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    SizeRange(#[from] InvalidSizeRange),
}

#[derive(FromArgs, Debug, Default, PartialEq, Eq)]
/// Copy yesterday's, today's or tomorrow's date to the clipboard.
pub struct LaunchOptions {
    /// initial button size, clamped to the size range (default 65)
    #[argh(option)]
    pub size: Option<u32>,

    /// smallest selectable button size (default 20)
    #[argh(option)]
    pub min_size: Option<u32>,

    /// largest selectable button size (default 150)
    #[argh(option)]
    pub max_size: Option<u32>,

    /// start with a leading space enabled
    #[argh(switch)]
    pub leading: bool,

    /// start with a trailing space enabled
    #[argh(switch)]
    pub trailing: bool,
}

impl LaunchOptions {
    pub fn preferences(&self) -> Result<Preferences, ConfigError> {
        let range = SizeRange::new(
            self.min_size.unwrap_or(MIN_SIZE),
            self.max_size.unwrap_or(MAX_SIZE),
        )?;

        let mut preferences = Preferences::with_range(range);
        if let Some(size) = self.size {
            preferences.set_size(i64::from(size));
        }
        preferences.set_spacing(Spacing::Leading, self.leading);
        preferences.set_spacing(Spacing::Trailing, self.trailing);
        Ok(preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> LaunchOptions {
        LaunchOptions::from_args(&["date-copy-gui"], args).expect("valid arguments")
    }

    #[test]
    fn no_flags_gives_default_preferences() {
        let preferences = parse(&[]).preferences().unwrap();
        assert_eq!(preferences, Preferences::default());
    }

    #[test]
    fn flags_seed_the_preferences() {
        let preferences = parse(&["--size", "90", "--leading"]).preferences().unwrap();
        assert_eq!(preferences.size(), 90);
        assert!(preferences.spacing().leading);
        assert!(!preferences.spacing().trailing);
    }

    #[test]
    fn initial_size_is_clamped_to_custom_range() {
        let options = parse(&["--min-size", "30", "--max-size", "60", "--size", "200"]);
        assert_eq!(options.preferences().unwrap().size(), 60);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let options = parse(&["--min-size", "100", "--max-size", "50"]);
        assert_eq!(
            options.preferences(),
            Err(ConfigError::SizeRange(InvalidSizeRange { min: 100, max: 50 }))
        );
    }
}
