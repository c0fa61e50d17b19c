use egui::Ui;
use split_core::PartySize;

use crate::app::{Screen, SplitApp};
use crate::widgets::currency_edit;

pub struct BillScreen;

impl BillScreen {
    /// Consistent group width matching the tip screen.
    const GROUP_WIDTH: f32 = 380.0;

    pub fn show(app: &mut SplitApp, ui: &mut Ui) {
        ui.heading("Split the Check");
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            let group_width = ui.available_width().min(Self::GROUP_WIDTH);

            // Check Section
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);
                    ui.heading("Check");
                    ui.add_space(5.0);

                    let previous = app.form.amount.clone();
                    let response = currency_edit(ui, "Amount:", &app.currency, &mut app.form.amount);
                    if response.changed() {
                        app.form.revert_invalid_amount(previous);
                    }

                    ui.add_space(5.0);

                    ui.horizontal(|ui| {
                        ui.label("Number of people:");
                        egui::ComboBox::from_id_salt("party_size")
                            .width(120.0)
                            .selected_text(app.form.party_size.label())
                            .show_ui(ui, |ui| {
                                for size in PartySize::all() {
                                    ui.selectable_value(
                                        &mut app.form.party_size,
                                        size,
                                        size.label(),
                                    );
                                }
                            });
                    });
                });
            });

            ui.add_space(10.0);

            // Tip Section
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);
                    ui.heading("Tip");
                    ui.add_space(5.0);

                    ui.horizontal(|ui| {
                        ui.label("Tip percentage:");
                        if ui
                            .button(format!("{} →", app.form.tip))
                            .on_hover_text("Change the tip percentage")
                            .clicked()
                        {
                            app.current_screen = Screen::TipPercentage;
                        }
                    });
                });
            });

            ui.add_space(10.0);

            // Totals Section — recomputed every frame from the form.
            let breakdown = app.form.breakdown();

            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);
                    ui.heading("Totals");
                    ui.add_space(5.0);

                    egui::Grid::new("totals_grid")
                        .num_columns(2)
                        .spacing([40.0, 8.0])
                        .show(ui, |ui| {
                            ui.label(format!("Tip ({}):", app.form.tip));
                            ui.label(app.currency.format(breakdown.tip_amount));
                            ui.end_row();

                            ui.label("Total amount:");
                            ui.strong(app.currency.format(breakdown.grand_total));
                            ui.end_row();

                            ui.label("Amount per person:");
                            ui.heading(app.currency.format(breakdown.per_person));
                            ui.end_row();
                        });
                });
            });

            ui.add_space(20.0);
        });
    }
}
