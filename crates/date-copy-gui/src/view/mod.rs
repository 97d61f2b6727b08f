use date_copy::{ClipboardWriter, Clock};
use eframe::egui;
use gui_core::actions;

use crate::{
    state::DateCopyApp,
    ui::{self, theme},
};

pub trait View<TState> {
    fn show(&mut self, ui: &mut egui::Ui, state: &mut TState);
}

#[derive(Default)]
pub struct DateButtonsPanel;

impl<C: Clock, W: ClipboardWriter> View<DateCopyApp<C, W>> for DateButtonsPanel {
    fn show(&mut self, ui: &mut egui::Ui, state: &mut DateCopyApp<C, W>) {
        ui::date_buttons::date_buttons(ui, state);
        ui.add_space(6.0);
        ui::date_buttons::status_line(ui, state);
    }
}

impl<C: Clock, W: ClipboardWriter> eframe::App for DateCopyApp<C, W> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::handle_shortcuts(ctx, self, &actions::copy_date_descriptors());

        egui::TopBottomPanel::top("top_panel")
            .frame(egui::Frame::new().fill(self.theme.panel))
            .show(ctx, |ui| {
                ui::menu_bar::menu_bar(ui, self);
                let rect = ui.max_rect();
                let separator_rect =
                    egui::Rect::from_min_max(egui::pos2(rect.min.x, rect.max.y - 1.0), rect.max);
                theme::draw_separator(ui.painter(), separator_rect, self.theme.separator);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(self.theme.background)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                DateButtonsPanel.show(ui, self);
            });

        ui::dialogs::about_window(ctx, self);
        ui::dialogs::instructions_window(ctx, self);

        if self.quit_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
