use date_copy::{ClipboardWriter, Clock, SizePreset, Spacing};
use eframe::egui::{self, menu, Ui};
use gui_core::actions::{self, Action, ActionDescriptor, ActionDispatcher};

use crate::state::DateCopyApp;

pub fn menu_bar<C: Clock, W: ClipboardWriter>(ui: &mut Ui, app: &mut DateCopyApp<C, W>) {
    menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            actions::action_button(ui, app, &about_action_descriptor());
            ui.separator();
            actions::action_button(ui, app, &quit_action_descriptor());
        });
        ui.menu_button("Options", |ui| {
            ui.menu_button("Size", |ui| size_menu(ui, app));
            ui.menu_button("Spacing", |ui| spacing_menu(ui, app));
        });
        ui.menu_button("Help", |ui| {
            actions::action_button(ui, app, &instructions_action_descriptor());
        });
    });
}

fn size_menu<C: Clock, W: ClipboardWriter>(ui: &mut Ui, app: &mut DateCopyApp<C, W>) {
    let current = app.preferences().preset();
    for preset in SizePreset::ALL {
        if ui
            .radio(current == Some(preset), preset.label())
            .clicked()
        {
            app.trigger_action(Action::SelectSize(preset));
            ui.close_menu();
        }
    }

    ui.separator();

    let range = app.preferences().size_range();
    let mut size = app.preferences().size();
    let slider = egui::Slider::new(&mut size, range.min()..=range.max()).text("Custom");
    if ui.add(slider).changed() {
        app.trigger_action(Action::SetSize(size));
    }
}

fn spacing_menu<C: Clock, W: ClipboardWriter>(ui: &mut Ui, app: &mut DateCopyApp<C, W>) {
    let flags = app.preferences().spacing();
    for (which, mut checked) in [
        (Spacing::Leading, flags.leading),
        (Spacing::Trailing, flags.trailing),
    ] {
        if ui.checkbox(&mut checked, which.label()).changed() {
            app.trigger_action(Action::ToggleSpacing(which));
        }
    }
}

fn about_action_descriptor() -> ActionDescriptor {
    ActionDescriptor::new(Action::ShowAbout, "About")
}

fn quit_action_descriptor() -> ActionDescriptor {
    ActionDescriptor::new(Action::Quit, "Quit")
}

fn instructions_action_descriptor() -> ActionDescriptor {
    ActionDescriptor::new(Action::ShowInstructions, "Instructions")
}
