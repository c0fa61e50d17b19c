use rust_decimal::Decimal;
use split_core::{SplitBreakdown, round_half_up};
use thiserror::Error;

/// Error returned when a string cannot be parsed as a currency amount.
#[derive(Debug, Error)]
#[error("'{input}' is not a valid amount: {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes amount input: trims whitespace, removes commas (thousands
/// separator), and drops one trailing decimal point so an edit in progress
/// like `"12."` stays acceptable.
fn normalize_amount_input(s: &str) -> String {
    let normalized = s.trim().replace(',', "");
    normalized
        .strip_suffix('.')
        .map(str::to_string)
        .unwrap_or(normalized)
}

/// Parses amount-field text into a [`Decimal`].
///
/// Tolerates commas as thousands separators and a trailing decimal point.
/// Empty and sign-only input read as zero — the state of the field before
/// the user has typed a number.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() || normalized == "-" || normalized == "+" {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "rejecting amount input: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Display currency selected by ISO code.
///
/// Known codes render with their symbol (`$120.00`); anything else falls
/// back to the code itself (`SEK 120.00`). Codes are matched
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    code: String,
    symbol: Option<&'static str>,
}

impl Currency {
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_ascii_uppercase();
        let symbol = match code.as_str() {
            "USD" | "CAD" | "AUD" | "NZD" | "HKD" | "SGD" | "MXN" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            "JPY" | "CNY" => Some("¥"),
            "KRW" => Some("₩"),
            "INR" => Some("₹"),
            _ => None,
        };
        Self { code, symbol }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// The short prefix shown beside input fields: the symbol when there is
    /// one, the code otherwise.
    pub fn prefix(&self) -> &str {
        self.symbol.unwrap_or(&self.code)
    }

    /// Formats an amount for display, rounded half-up to cents.
    pub fn format(
        &self,
        amount: Decimal,
    ) -> String {
        let rounded = round_half_up(amount);
        match self.symbol {
            Some(symbol) => format!("{symbol}{rounded:.2}"),
            None => format!("{} {rounded:.2}", self.code),
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::from_code("USD")
    }
}

/// Renders a breakdown as the multi-line text the headless mode prints.
pub fn render_breakdown(
    breakdown: &SplitBreakdown,
    currency: &Currency,
) -> String {
    format!(
        "Check amount:  {check}\n\
         Tip ({tip}%):      {tip_amount}\n\
         Grand total:   {total}\n\
         Per person:    {share}  ({people} people)",
        check = currency.format(breakdown.check_amount),
        tip = breakdown.tip_percent,
        tip_amount = currency.format(breakdown.tip_amount),
        total = currency.format(breakdown.grand_total),
        share = currency.format(breakdown.per_person),
        people = breakdown.party_size,
    )
}
