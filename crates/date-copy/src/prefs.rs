//! Process-lifetime user preferences: spacing around the copied date and the
//! padding of the date buttons. Nothing here is written to disk.

use thiserror::Error;

use crate::format::SpacingFlags;

pub const MIN_SIZE: u32 = 20;
pub const MAX_SIZE: u32 = 150;
pub const DEFAULT_SIZE: u32 = SizePreset::Medium.padding();

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Spacing {
    Leading,
    Trailing,
}

impl Spacing {
    pub fn label(self) -> &'static str {
        match self {
            Spacing::Leading => "Leading Space",
            Spacing::Trailing => "Trailing Space",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizePreset {
    Small,
    Medium,
    Large,
}

impl SizePreset {
    pub const ALL: [SizePreset; 3] = [SizePreset::Small, SizePreset::Medium, SizePreset::Large];

    pub const fn padding(self) -> u32 {
        match self {
            SizePreset::Small => 50,
            SizePreset::Medium => 65,
            SizePreset::Large => 80,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizePreset::Small => "Small",
            SizePreset::Medium => "Medium",
            SizePreset::Large => "Large",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("button size range {min}..={max} is empty")]
pub struct InvalidSizeRange {
    pub min: u32,
    pub max: u32,
}

/// Inclusive bounds for the button size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeRange {
    min: u32,
    max: u32,
}

impl Default for SizeRange {
    fn default() -> Self {
        Self {
            min: MIN_SIZE,
            max: MAX_SIZE,
        }
    }
}

impl SizeRange {
    pub fn new(min: u32, max: u32) -> Result<Self, InvalidSizeRange> {
        if min > max {
            return Err(InvalidSizeRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn clamp(&self, value: i64) -> u32 {
        value.clamp(i64::from(self.min), i64::from(self.max)) as u32
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    spacing: SpacingFlags,
    size: u32,
    size_range: SizeRange,
}

impl Default for Preferences {
    fn default() -> Self {
        Self::with_range(SizeRange::default())
    }
}

impl Preferences {
    /// Default preferences with a custom size range. The default size is
    /// pulled into the range if it falls outside.
    pub fn with_range(size_range: SizeRange) -> Self {
        Self {
            spacing: SpacingFlags::default(),
            size: size_range.clamp(i64::from(DEFAULT_SIZE)),
            size_range,
        }
    }

    pub fn spacing(&self) -> SpacingFlags {
        self.spacing
    }

    pub fn set_spacing(&mut self, which: Spacing, value: bool) {
        match which {
            Spacing::Leading => self.spacing.leading = value,
            Spacing::Trailing => self.spacing.trailing = value,
        }
        tracing::debug!(?which, value, "spacing changed");
    }

    pub fn toggle_spacing(&mut self, which: Spacing) {
        let current = match which {
            Spacing::Leading => self.spacing.leading,
            Spacing::Trailing => self.spacing.trailing,
        };
        self.set_spacing(which, !current);
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Out-of-range values are clamped, never rejected.
    pub fn set_size(&mut self, value: i64) {
        let clamped = self.size_range.clamp(value);
        if i64::from(clamped) != value {
            tracing::debug!(requested = value, clamped, "button size clamped");
        }
        self.size = clamped;
    }

    pub fn apply_preset(&mut self, preset: SizePreset) {
        self.set_size(i64::from(preset.padding()));
    }

    /// The preset whose padding equals the current size, if any.
    pub fn preset(&self) -> Option<SizePreset> {
        SizePreset::ALL
            .into_iter()
            .find(|preset| preset.padding() == self.size)
    }

    pub fn size_range(&self) -> SizeRange {
        self.size_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_preferences_use_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.spacing(), SpacingFlags::new(false, false));
        assert_eq!(prefs.size(), 65);
        assert_eq!(prefs.preset(), Some(SizePreset::Medium));
        assert_eq!(prefs.size_range(), SizeRange::new(20, 150).unwrap());
    }

    #[test]
    fn size_is_clamped_to_range() {
        let mut prefs = Preferences::default();
        prefs.set_size(5);
        assert_eq!(prefs.size(), 20);
        prefs.set_size(999);
        assert_eq!(prefs.size(), 150);
        prefs.set_size(-40);
        assert_eq!(prefs.size(), 20);
        prefs.set_size(100);
        assert_eq!(prefs.size(), 100);
        assert_eq!(prefs.preset(), None);
    }

    #[test]
    fn spacing_flags_are_set_independently() {
        let mut prefs = Preferences::default();
        prefs.set_spacing(Spacing::Trailing, true);
        assert_eq!(prefs.spacing(), SpacingFlags::new(false, true));
        prefs.set_spacing(Spacing::Leading, true);
        assert_eq!(prefs.spacing(), SpacingFlags::new(true, true));
        prefs.toggle_spacing(Spacing::Trailing);
        assert_eq!(prefs.spacing(), SpacingFlags::new(true, false));
    }

    #[test]
    fn presets_map_to_their_padding() {
        let mut prefs = Preferences::default();
        prefs.apply_preset(SizePreset::Small);
        assert_eq!(prefs.size(), 50);
        assert_eq!(prefs.preset(), Some(SizePreset::Small));
        prefs.apply_preset(SizePreset::Large);
        assert_eq!(prefs.size(), 80);
    }

    #[test]
    fn empty_range_is_rejected() {
        assert_eq!(
            SizeRange::new(100, 50),
            Err(InvalidSizeRange { min: 100, max: 50 })
        );
        assert!(SizeRange::new(40, 40).is_ok());
    }

    #[test]
    fn custom_range_clamps_default_size() {
        let prefs = Preferences::with_range(SizeRange::new(70, 120).unwrap());
        assert_eq!(prefs.size(), 70);

        let mut prefs = Preferences::with_range(SizeRange::new(10, 40).unwrap());
        assert_eq!(prefs.size(), 40);
        prefs.apply_preset(SizePreset::Small);
        assert_eq!(prefs.size(), 40);
    }
}
