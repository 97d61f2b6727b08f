use date_copy::{
    copy_date, Clock, ClipboardWriter, Offset, Preferences, SystemClipboard, SystemClock,
};
use gui_core::actions::{Action, ActionDispatcher};

use crate::ui::theme::Palette;

pub const APP_TITLE: &str = "Date Copy Tool";
pub const ABOUT_TEXT: &str = "Date Copy Tool\n\n\
    Copies yesterday's, today's or tomorrow's date to the clipboard,\n\
    formatted like \"23 Dec 2016\", ready to paste.";

/// Outcome of the most recent copy, shown under the buttons.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Copied(String),
    Failed(String),
}

pub struct DateCopyApp<C = SystemClock, W = SystemClipboard> {
    pub(crate) preferences: Preferences,
    clock: C,
    clipboard: W,
    pub(crate) last_copied: Option<Offset>,
    pub(crate) status: Status,
    pub(crate) show_about: bool,
    pub(crate) show_instructions: bool,
    pub(crate) quit_requested: bool,
    pub(crate) theme: Palette,
}

impl DateCopyApp {
    pub fn new(preferences: Preferences) -> Self {
        Self::with_collaborators(preferences, SystemClock, SystemClipboard::new())
    }
}

impl<C: Clock, W: ClipboardWriter> DateCopyApp<C, W> {
    pub fn with_collaborators(preferences: Preferences, clock: C, clipboard: W) -> Self {
        Self {
            preferences,
            clock,
            clipboard,
            last_copied: None,
            status: Status::Idle,
            show_about: false,
            show_instructions: false,
            quit_requested: false,
            theme: Palette::default(),
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn clipboard(&self) -> &W {
        &self.clipboard
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn last_copied(&self) -> Option<Offset> {
        self.last_copied
    }

    pub fn is_about_open(&self) -> bool {
        self.show_about
    }

    pub fn is_instructions_open(&self) -> bool {
        self.show_instructions
    }

    pub fn theme(&self) -> &Palette {
        &self.theme
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    fn copy(&mut self, offset: Offset) {
        self.status = match copy_date(offset, &self.clock, &self.preferences, &mut self.clipboard)
        {
            Ok(text) => {
                self.last_copied = Some(offset);
                Status::Copied(text)
            }
            Err(err) => {
                tracing::warn!(error = %err, "copy failed");
                Status::Failed(err.to_string())
            }
        };
    }
}

impl<C: Clock, W: ClipboardWriter> ActionDispatcher for DateCopyApp<C, W> {
    fn is_action_enabled(&self, action: Action) -> bool {
        match action {
            Action::SelectSize(preset) => self.preferences.preset() != Some(preset),
            _ => true,
        }
    }

    fn trigger_action(&mut self, action: Action) {
        tracing::debug!(?action, "action triggered");
        match action {
            Action::CopyDate(offset) => self.copy(offset),
            Action::SelectSize(preset) => self.preferences.apply_preset(preset),
            Action::SetSize(size) => self.preferences.set_size(i64::from(size)),
            Action::ToggleSpacing(which) => self.preferences.toggle_spacing(which),
            Action::ShowAbout => self.show_about = true,
            Action::ShowInstructions => self.show_instructions = true,
            Action::Quit => {
                tracing::info!("quit requested");
                self.quit_requested = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use date_copy::{CalendarDate, FixedClock, MemoryClipboard, SizePreset, Spacing};

    fn app_on(year: i32, month: u32, day: u32) -> DateCopyApp<FixedClock, MemoryClipboard> {
        let today = CalendarDate::from_ymd(year, month, day).expect("valid date");
        DateCopyApp::with_collaborators(
            Preferences::default(),
            FixedClock::new(today),
            MemoryClipboard::default(),
        )
    }

    #[test]
    fn copy_action_updates_status_and_highlight() {
        let mut app = app_on(2016, 12, 23);
        assert_eq!(app.status(), &Status::Idle);

        app.trigger_action(Action::CopyDate(Offset::Yesterday));

        assert_eq!(app.status(), &Status::Copied("22 Dec 2016".to_string()));
        assert_eq!(app.last_copied(), Some(Offset::Yesterday));
        assert_eq!(app.clipboard().contents(), Some("22 Dec 2016"));
    }

    #[test]
    fn clipboard_failure_is_reported_and_not_highlighted() {
        let today = CalendarDate::from_ymd(2016, 12, 23).unwrap();
        let mut app = DateCopyApp::with_collaborators(
            Preferences::default(),
            FixedClock::new(today),
            MemoryClipboard::failing(),
        );

        app.trigger_action(Action::CopyDate(Offset::Today));

        assert!(matches!(app.status(), Status::Failed(message) if message.contains("clear")));
        assert_eq!(app.last_copied(), None, "failed copy leaves no button highlighted");
    }

    #[test]
    fn current_size_preset_is_disabled_in_menu() {
        let mut app = app_on(2016, 12, 23);
        assert!(!app.is_action_enabled(Action::SelectSize(SizePreset::Medium)));
        assert!(app.is_action_enabled(Action::SelectSize(SizePreset::Small)));

        app.trigger_action(Action::SelectSize(SizePreset::Small));
        assert_eq!(app.preferences().size(), 50);
        assert!(app.is_action_enabled(Action::SelectSize(SizePreset::Medium)));
    }

    #[test]
    fn slider_values_are_clamped() {
        let mut app = app_on(2016, 12, 23);
        app.trigger_action(Action::SetSize(400));
        assert_eq!(app.preferences().size(), 150);
        app.trigger_action(Action::SetSize(0));
        assert_eq!(app.preferences().size(), 20);
    }

    #[test]
    fn dialogs_and_quit_only_flip_flags() {
        let mut app = app_on(2016, 12, 23);
        app.trigger_action(Action::ShowAbout);
        app.trigger_action(Action::ShowInstructions);
        app.trigger_action(Action::Quit);

        assert!(app.is_about_open());
        assert!(app.is_instructions_open());
        assert!(app.quit_requested());
        assert!(app.clipboard().operations().is_empty());
        assert_eq!(app.preferences(), &Preferences::default());
    }

    #[test]
    fn spacing_toggle_round_trips() {
        let mut app = app_on(2016, 12, 23);
        app.trigger_action(Action::ToggleSpacing(Spacing::Leading));
        assert!(app.preferences().spacing().leading);
        app.trigger_action(Action::ToggleSpacing(Spacing::Leading));
        assert!(!app.preferences().spacing().leading);
    }
}
