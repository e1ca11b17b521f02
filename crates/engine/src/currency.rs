//! The selectable currency catalog.
//!
//! Groups store the bare display symbol; the catalog maps codes to display
//! names and symbols for pickers.

/// One selectable currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

/// Currencies offered when creating a group, default first.
pub const CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo { code: "INR", name: "Indian Rupee", symbol: "₹" },
    CurrencyInfo { code: "USD", name: "US Dollar", symbol: "$" },
    CurrencyInfo { code: "EUR", name: "Euro", symbol: "€" },
    CurrencyInfo { code: "GBP", name: "British Pound", symbol: "£" },
    CurrencyInfo { code: "JPY", name: "Japanese Yen", symbol: "¥" },
    CurrencyInfo { code: "CAD", name: "Canadian Dollar", symbol: "C$" },
    CurrencyInfo { code: "AUD", name: "Australian Dollar", symbol: "A$" },
    CurrencyInfo { code: "CHF", name: "Swiss Franc", symbol: "CHF" },
    CurrencyInfo { code: "CNY", name: "Chinese Yuan", symbol: "¥" },
    CurrencyInfo { code: "KRW", name: "South Korean Won", symbol: "₩" },
    CurrencyInfo { code: "SGD", name: "Singapore Dollar", symbol: "S$" },
    CurrencyInfo { code: "HKD", name: "Hong Kong Dollar", symbol: "HK$" },
];

/// Symbol preselected in the create-group form.
#[must_use]
pub const fn default_symbol() -> &'static str {
    "₹"
}

/// Looks a currency up by its code, ignoring case.
pub fn by_code(code: &str) -> Option<&'static CurrencyInfo> {
    let code = code.trim();
    CURRENCIES
        .iter()
        .find(|currency| currency.code.eq_ignore_ascii_case(code))
}

/// `₹156.80` for totals.
pub fn format_money(symbol: &str, amount: f64) -> String {
    format!("{symbol}{amount:.2}")
}

/// Explicitly signed form used for balances: `+₹45.25`, `-₹123.75`.
pub fn format_balance(symbol: &str, amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "+" };
    format!("{}{}{:.2}", sign, symbol, amount.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_code_ignores_case() {
        assert_eq!(by_code("usd").map(|c| c.symbol), Some("$"));
        assert_eq!(by_code(" EUR ").map(|c| c.symbol), Some("€"));
        assert!(by_code("XXX").is_none());
    }

    #[test]
    fn formats_amounts() {
        assert_eq!(format_money("$", 156.8), "$156.80");
        assert_eq!(format_balance("$", 45.25), "+$45.25");
        assert_eq!(format_balance("₹", -123.75), "-₹123.75");
        assert_eq!(format_balance("$", 0.0), "+$0.00");
    }
}
