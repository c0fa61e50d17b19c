use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;

use split_core::{BillSplit, PartySize, TipRate};
use split_ui::{
    app::SplitApp,
    logging,
    utils::{Currency, render_breakdown},
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Bill-splitting calculator.
///
/// Computes the grand total with gratuity and the per-person share. With no
/// arguments this opens the desktop window; pass `--amount` to compute one
/// split on the command line instead.
#[derive(Debug, Parser)]
struct Cli {
    /// Check amount to split. When given, the result is printed and no
    /// window opens.
    #[arg(long)]
    amount: Option<Decimal>,

    /// Number of people splitting the check.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=99))]
    people: u8,

    /// Tip percentage to apply.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u8).range(0..=100))]
    tip: u8,

    /// ISO currency code used for display (e.g. USD, EUR, GBP).
    #[arg(long, default_value = "USD")]
    currency: String,

    /// Print the result as pretty JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let currency = Currency::from_code(&cli.currency);
    let party_size = PartySize::new(cli.people)?;
    let tip = TipRate::new(cli.tip)?;

    if let Some(amount) = cli.amount {
        let bill = BillSplit::new(amount, party_size, tip);
        let breakdown = bill.breakdown();
        debug!(
            amount = %breakdown.check_amount,
            people = breakdown.party_size,
            tip = breakdown.tip_percent,
            "computed split"
        );
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        } else {
            println!("{}", render_breakdown(&breakdown, &currency));
        }
        return Ok(());
    }

    debug!("opening window");
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 540.0])
            .with_min_inner_size([360.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Bill Splitter",
        options,
        Box::new(move |cc| Ok(Box::new(SplitApp::new(cc, currency, party_size, tip)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the window: {e}"))?;

    Ok(())
}
