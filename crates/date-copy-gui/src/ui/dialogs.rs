use date_copy::{ClipboardWriter, Clock, Offset, SizeRange};
use eframe::egui;

use crate::state::{DateCopyApp, ABOUT_TEXT};

const DIALOG_OFFSET: f32 = 30.0;

pub fn about_window<C: Clock, W: ClipboardWriter>(ctx: &egui::Context, app: &mut DateCopyApp<C, W>) {
    if !app.show_about {
        return;
    }

    egui::Window::new("About Date Copy Tool")
        .open(&mut app.show_about)
        .collapsible(false)
        .resizable(false)
        .default_pos(dialog_position(ctx))
        .show(ctx, |ui| {
            ui.label(ABOUT_TEXT);
        });
}

pub fn instructions_window<C: Clock, W: ClipboardWriter>(
    ctx: &egui::Context,
    app: &mut DateCopyApp<C, W>,
) {
    if !app.show_instructions {
        return;
    }

    let lines = instruction_lines(app.preferences().size_range());
    egui::Window::new("Instructions")
        .open(&mut app.show_instructions)
        .collapsible(false)
        .resizable(false)
        .default_pos(dialog_position(ctx))
        .show(ctx, |ui| {
            for line in &lines {
                ui.label(line.as_str());
            }
        });
}

pub fn instruction_lines(size_range: SizeRange) -> Vec<String> {
    let mut lines: Vec<String> = Offset::ALL
        .iter()
        .map(|offset| {
            format!(
                "Press {} or click \"{}\" to copy {}'s date.",
                offset.hotkey(),
                offset.label(),
                offset.label().to_lowercase()
            )
        })
        .collect();
    lines.push(format!(
        "Options > Size changes the button padding ({} to {}).",
        size_range.min(),
        size_range.max()
    ));
    lines.push("Options > Spacing adds a space before and/or after the copied date.".to_owned());
    lines
}

/// Places dialogs just below and to the right of the main window's corner.
fn dialog_position(ctx: &egui::Context) -> egui::Pos2 {
    let origin = ctx.screen_rect().min;
    origin + egui::vec2(DIALOG_OFFSET, DIALOG_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_mention_every_hotkey() {
        let lines = instruction_lines(SizeRange::default());
        assert!(lines[0].starts_with("Press 1"));
        assert!(lines[1].contains("today's date"));
        assert!(lines[2].contains("\"Tomorrow\""));
        assert!(lines[3].contains("(20 to 150)"));
    }
}
