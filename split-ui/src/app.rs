use rust_decimal::Decimal;
use split_core::{BillSplit, PartySize, SplitBreakdown, TipRate};

use crate::screens::{BillScreen, TipPercentageScreen};
use crate::utils::{self, Currency};

/// Which screen is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Bill,
    TipPercentage,
}

/// Form state for the bill being split.
///
/// The amount is kept as the raw edit-field text; screens reject any edit
/// that stops parsing (see [`BillForm::revert_invalid_amount`]), so the text
/// always parses. Party size and tip come from pickers and are valid by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillForm {
    pub amount: String,
    pub party_size: PartySize,
    pub tip: TipRate,
}

impl BillForm {
    pub fn new(
        party_size: PartySize,
        tip: TipRate,
    ) -> Self {
        Self {
            amount: String::new(),
            party_size,
            tip,
        }
    }

    /// Restores `previous` if the current amount text no longer parses.
    /// Returns whether the edit was kept. This is the widget-level
    /// constraint: a keystroke that breaks the number is undone.
    pub fn revert_invalid_amount(
        &mut self,
        previous: String,
    ) -> bool {
        if utils::parse_amount(&self.amount).is_err() {
            self.amount = previous;
            false
        } else {
            true
        }
    }

    /// The amount text as a decimal; empty input reads as zero.
    pub fn check_amount(&self) -> Decimal {
        utils::parse_amount(&self.amount).unwrap_or_default()
    }

    /// The record behind the form.
    pub fn bill(&self) -> BillSplit {
        BillSplit::new(self.check_amount(), self.party_size, self.tip)
    }

    /// The split for the current inputs, recomputed on every call.
    pub fn breakdown(&self) -> SplitBreakdown {
        self.bill().breakdown()
    }
}

impl Default for BillForm {
    fn default() -> Self {
        Self::new(PartySize::default(), TipRate::default())
    }
}

/// Main application state.
pub struct SplitApp {
    pub current_screen: Screen,
    pub form: BillForm,
    pub currency: Currency,
}

impl SplitApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        currency: Currency,
        party_size: PartySize,
        tip: TipRate,
    ) -> Self {
        Self {
            current_screen: Screen::Bill,
            form: BillForm::new(party_size, tip),
            currency,
        }
    }

    /// Discards the current split and returns to the main screen.
    pub fn reset(&mut self) {
        self.form = BillForm::default();
        self.current_screen = Screen::Bill;
    }
}

impl eframe::App for SplitApp {
    fn update(
        &mut self,
        ctx: &egui::Context,
        _frame: &mut eframe::Frame,
    ) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Split").clicked() {
                        self.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.current_screen {
            Screen::Bill => BillScreen::show(self, ui),
            Screen::TipPercentage => TipPercentageScreen::show(self, ui),
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_form_reads_as_a_zero_check() {
        let form = BillForm::default();

        assert_eq!(form.check_amount(), Decimal::ZERO);
        assert_eq!(form.breakdown().grand_total, Decimal::ZERO);
    }

    #[test]
    fn valid_edits_are_kept() {
        let mut form = BillForm::default();
        let previous = form.amount.clone();

        form.amount = "100.00".to_string();
        let kept = form.revert_invalid_amount(previous);

        assert!(kept);
        assert_eq!(form.check_amount(), dec!(100.00));
    }

    #[test]
    fn invalid_edits_are_undone() {
        let mut form = BillForm::default();
        form.amount = "100".to_string();

        form.amount = "100x".to_string();
        let kept = form.revert_invalid_amount("100".to_string());

        assert!(!kept);
        assert_eq!(form.amount, "100");
    }

    #[test]
    fn in_progress_edits_survive() {
        let mut form = BillForm::default();
        form.amount = "12".to_string();

        form.amount = "12.".to_string();
        let kept = form.revert_invalid_amount("12".to_string());

        assert!(kept);
        assert_eq!(form.amount, "12.");
    }

    #[test]
    fn form_defaults_match_the_record_defaults() {
        let form = BillForm::default();

        assert_eq!(form.bill(), split_core::BillSplit::default());
    }

    #[test]
    fn breakdown_recomputes_from_the_current_form() {
        let mut form = BillForm::default();
        form.amount = "100.00".to_string();
        form.party_size = PartySize::from_index(2).unwrap();

        let breakdown = form.breakdown();

        assert_eq!(breakdown.grand_total, dec!(120.00));
        assert_eq!(breakdown.per_person, dec!(30.00));
    }
}
