use egui::{Response, Ui};

use crate::utils::Currency;

/// A currency input row: label, currency prefix, fixed-width edit field.
///
/// Returns the edit response so the caller can apply the amount rejection
/// rule when the text changed.
pub fn currency_edit(
    ui: &mut Ui,
    label: &str,
    currency: &Currency,
    value: &mut String,
) -> Response {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add_space(10.0);
        ui.label(currency.prefix());
        ui.add(
            egui::TextEdit::singleline(value)
                .desired_width(120.0)
                .hint_text("0.00"),
        )
    })
    .inner
}
