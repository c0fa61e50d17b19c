use egui::Ui;
use split_core::TipRate;

use crate::app::{Screen, SplitApp};

pub struct TipPercentageScreen;

impl TipPercentageScreen {
    pub fn show(app: &mut SplitApp, ui: &mut Ui) {
        ui.heading("Tip Percentage");
        ui.separator();

        ui.label("How much tip do you want to leave?");
        ui.add_space(10.0);

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label("Tip percentage:");
                egui::ComboBox::from_id_salt("tip_rate")
                    .width(100.0)
                    .selected_text(app.form.tip.label())
                    .show_ui(ui, |ui| {
                        for rate in TipRate::all() {
                            ui.selectable_value(&mut app.form.tip, rate, rate.label());
                        }
                    });
            });

            ui.add_space(5.0);
            ui.label("The main screen updates as soon as you pick a rate.");
        });

        ui.add_space(10.0);

        if ui.button("← Back to Check").clicked() {
            app.current_screen = Screen::Bill;
        }
    }
}
