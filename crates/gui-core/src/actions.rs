use date_copy::{Offset, SizePreset, Spacing};
use egui::{Button, Context, Key, KeyboardShortcut, Modifiers, Ui, WidgetText};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    CopyDate(Offset),
    SelectSize(SizePreset),
    SetSize(u32),
    ToggleSpacing(Spacing),
    ShowAbout,
    ShowInstructions,
    Quit,
}

pub trait ActionDispatcher {
    fn is_action_enabled(&self, action: Action) -> bool;
    fn trigger_action(&mut self, action: Action);
    fn supports_action(&self, _action: Action) -> bool {
        true
    }
}

#[derive(Clone)]
pub struct ActionDescriptor {
    pub action: Action,
    pub label: WidgetText,
    pub shortcut: Option<KeyboardShortcut>,
}

impl ActionDescriptor {
    pub fn new(action: Action, label: impl Into<WidgetText>) -> Self {
        Self {
            action,
            label: label.into(),
            shortcut: None,
        }
    }

    pub fn with_shortcut(mut self, shortcut: KeyboardShortcut) -> Self {
        self.shortcut = Some(shortcut);
        self
    }
}

/// The bare number key that copies `offset`.
pub fn copy_date_shortcut(offset: Offset) -> KeyboardShortcut {
    let key = match offset {
        Offset::Yesterday => Key::Num1,
        Offset::Today => Key::Num2,
        Offset::Tomorrow => Key::Num3,
    };
    KeyboardShortcut::new(Modifiers::NONE, key)
}

/// "Yesterday (1)", "Today (2)", "Tomorrow (3)".
pub fn copy_date_descriptor(offset: Offset) -> ActionDescriptor {
    let label = format!("{} ({})", offset.label(), offset.hotkey());
    ActionDescriptor::new(Action::CopyDate(offset), label)
        .with_shortcut(copy_date_shortcut(offset))
}

pub fn copy_date_descriptors() -> [ActionDescriptor; 3] {
    Offset::ALL.map(copy_date_descriptor)
}

pub fn action_button(
    ui: &mut Ui,
    dispatcher: &mut impl ActionDispatcher,
    descriptor: &ActionDescriptor,
) -> egui::Response {
    let action = descriptor.action;
    debug_assert!(dispatcher.supports_action(action));

    let mut button = Button::new(descriptor.label.clone());
    if let Some(shortcut) = descriptor.shortcut {
        button = button.shortcut_text(ui.ctx().format_shortcut(&shortcut));
    }

    let enabled = dispatcher.is_action_enabled(action);
    let response = ui.add_enabled(enabled, button);
    if response.clicked() {
        dispatcher.trigger_action(action);
        ui.close_menu();
    }
    response
}

pub fn handle_shortcut(
    ctx: &Context,
    dispatcher: &mut impl ActionDispatcher,
    descriptor: &ActionDescriptor,
) -> bool {
    let action = descriptor.action;
    if !dispatcher.supports_action(action) {
        return false;
    }
    if let Some(shortcut) = descriptor.shortcut {
        if ctx.input_mut(|input| input.consume_shortcut(&shortcut))
            && dispatcher.is_action_enabled(action)
        {
            dispatcher.trigger_action(action);
            return true;
        }
    }
    false
}

/// Fires at most one shortcut per frame. Nothing fires while a text field
/// has keyboard focus, since the date hotkeys are bare number keys.
pub fn handle_shortcuts(
    ctx: &Context,
    dispatcher: &mut impl ActionDispatcher,
    descriptors: &[ActionDescriptor],
) {
    if ctx.wants_keyboard_input() {
        return;
    }
    for descriptor in descriptors {
        if handle_shortcut(ctx, dispatcher, descriptor) {
            break;
        }
    }
}
