use date_copy::{ClipboardWriter, Clock};
use eframe::egui::{self, Ui};
use gui_core::actions::{self, Action, ActionDispatcher};

use crate::state::{DateCopyApp, Status};

/// Vertical padding as a share of the size preference; horizontal padding
/// uses the full value.
const VERTICAL_PADDING_RATIO: f32 = 0.3;

pub fn button_padding(size: u32) -> egui::Vec2 {
    let size = size as f32;
    egui::vec2(size, size * VERTICAL_PADDING_RATIO)
}

/// The three copy buttons, stacked. The last one used stays highlighted.
pub fn date_buttons<C: Clock, W: ClipboardWriter>(ui: &mut Ui, app: &mut DateCopyApp<C, W>) {
    let padding = button_padding(app.preferences().size());
    let highlighted = app.last_copied().map(Action::CopyDate);

    ui.vertical_centered_justified(|ui| {
        ui.spacing_mut().button_padding = padding;
        for descriptor in actions::copy_date_descriptors() {
            let button = egui::Button::new(descriptor.label.clone())
                .selected(highlighted == Some(descriptor.action));
            let response = ui.add_enabled(app.is_action_enabled(descriptor.action), button);
            if response.clicked() {
                app.trigger_action(descriptor.action);
            }
        }
    });
}

pub fn status_line<C: Clock, W: ClipboardWriter>(ui: &mut Ui, app: &DateCopyApp<C, W>) {
    let text = match app.status() {
        Status::Idle => egui::RichText::new("Press 1, 2 or 3 to copy a date.")
            .color(app.theme.text_muted),
        Status::Copied(text) => {
            egui::RichText::new(format!("Copied \"{text}\"")).color(app.theme.accent)
        }
        Status::Failed(message) => egui::RichText::new(message).color(app.theme.error),
    };
    ui.vertical_centered(|ui| {
        ui.label(text.small());
    });
}
