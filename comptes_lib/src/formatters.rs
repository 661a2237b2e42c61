use crate::currencies::{CurrencyId, CurrencyProfile, CurrencyTable};
use crate::spelling::{AmountSpeller, NumberToText};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::fmt;

/// Horizontal offset, in pixels, between two levels of the chart of
/// accounts.
pub const INDENTATION_STEP: Decimal = dec!(40);

const DANGER_CLASS: &str = "text-danger";

const MAX_PERCENT_PRECISION: u32 = 100;

/// A fragment of HTML that templates can embed without escaping it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// A `<span>` whose text content is escaped
    fn span(classes: &[&str], text: &str) -> Self {
        Markup(format!(
            "<span class=\"{}\">{}</span>",
            escape(&classes.join(" ")),
            escape(text)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            c => result.push(c),
        }
    }
    result
}

/// Formatting of financial values in documents.
///
/// All functions are pure: the currency profiles and the speller are set
/// when the formatter is created and never modified afterwards, so a single
/// formatter can be shared between threads.
pub struct Formatter {
    currencies: CurrencyTable,
    speller: Box<dyn AmountSpeller + Send + Sync>,
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::new(CurrencyTable::default(), NumberToText)
    }
}

impl Formatter {
    pub fn new(
        currencies: CurrencyTable,
        speller: impl AmountSpeller + Send + Sync + 'static,
    ) -> Self {
        Self {
            currencies,
            speller: Box::new(speller),
        }
    }

    /// Display the absolute value of an already rounded value
    fn push_abs_num(
        &self,
        into: &mut String,
        rounded: Decimal,
        profile: &CurrencyProfile,
    ) {
        let val = rounded.abs().to_string();
        let (integer, fraction) =
            val.split_once('.').unwrap_or((val.as_str(), ""));

        let len = integer.chars().count();
        for (idx, p) in integer.chars().enumerate() {
            if idx > 0 && (len - idx) % 3 == 0 {
                into.push_str(&profile.thousand);
            }
            into.push(p);
        }

        if profile.precision > 0 {
            into.push_str(&profile.decimal);
            into.push_str(fraction);
            for _ in fraction.len()..profile.precision as usize {
                into.push('0');
            }
        }
    }

    /// Display a value in the given currency, or the default currency.
    /// For instance 1234.5 is displayed as "1.234,50 FC" for Congolese
    /// francs, and "1,234.50" by default.
    #[must_use]
    pub fn format_currency(
        &self,
        value: Decimal,
        currency: Option<CurrencyId>,
    ) -> String {
        let profile = self.currencies.get(currency);
        let rounded = value.round_dp_with_strategy(
            profile.precision as u32,
            RoundingStrategy::MidpointAwayFromZero,
        );

        let mut number = String::new();
        self.push_abs_num(&mut number, rounded, profile);

        // A value that rounds to zero is displayed without sign
        profile.arrange(
            &number,
            rounded.is_sign_negative() && !rounded.is_zero(),
        )
    }

    /// Ledger-style display: negative values are shown in parenthesis and
    /// flagged, rather than with a minus sign.
    #[must_use]
    pub fn format_debit_credit(
        &self,
        value: Decimal,
        currency: Option<CurrencyId>,
    ) -> Markup {
        if value < Decimal::ZERO {
            Markup::span(
                &["text-right", DANGER_CLASS],
                &format!("({})", self.format_currency(value.abs(), currency)),
            )
        } else {
            Markup::span(
                &["text-right"],
                &self.format_currency(value, currency),
            )
        }
    }

    /// Display a ratio as a percentage, e.g. 0.1234 as "12.34%".
    /// Missing values and zero are both displayed as an empty string.
    /// The precision is capped to 100 digits.
    #[must_use]
    pub fn format_percentage(
        &self,
        value: Option<Decimal>,
        precision: u32,
    ) -> String {
        let Some(value) = value.filter(|v| !v.is_zero()) else {
            return String::new();
        };
        let Some(mut percent) = value.checked_mul(Decimal::ONE_HUNDRED) else {
            return String::new();
        };
        let precision = precision.min(MAX_PERCENT_PRECISION);
        percent = percent.round_dp_with_strategy(
            precision,
            RoundingStrategy::MidpointAwayFromZero,
        );
        percent.rescale(precision);

        // Decimals hold at most 28 fractional digits, pad beyond that
        let mut text = percent.to_string();
        let scale = percent.scale();
        if precision > scale {
            if scale == 0 {
                text.push('.');
            }
            let missing = (precision - scale) as usize;
            text.extend(std::iter::repeat('0').take(missing));
        }
        text.push('%');
        text
    }

    /// Indentation for an account at the given depth in the chart of
    /// accounts.  Negative depths are not rejected.
    #[must_use]
    pub fn indent_account(&self, depth: Decimal) -> Decimal {
        if depth.is_zero() {
            Decimal::ZERO
        } else {
            depth.saturating_mul(INDENTATION_STEP).normalize()
        }
    }

    #[must_use]
    pub fn amount_to_words(
        &self,
        value: Decimal,
        language: &str,
        currency_name: &str,
    ) -> String {
        self.speller.spell(value, language, currency_name)
    }
}

#[cfg(test)]
mod test {
    use crate::currencies::{
        CurrencyId, CurrencyProfile, CurrencyTable, FRANC_ID,
    };
    use crate::formatters::Formatter;
    use crate::spelling::AmountSpeller;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency() {
        let f = Formatter::default();
        assert_eq!(f.format_currency(dec!(0), None), "0.00");
        assert_eq!(f.format_currency(dec!(234567), None), "234,567.00");
        assert_eq!(
            f.format_currency(dec!(1234567.238), None),
            "1,234,567.24"
        );
        assert_eq!(f.format_currency(dec!(-1234.5), None), "-1,234.50");
        assert_eq!(f.format_currency(dec!(1), None), "1.00");
        assert_eq!(f.format_currency(dec!(100), None), "100.00");
        assert_eq!(f.format_currency(dec!(999.999), None), "1,000.00");

        // Unknown currencies use the default profile
        assert_eq!(
            f.format_currency(dec!(12), Some(CurrencyId(2))),
            "12.00"
        );

        assert_eq!(
            f.format_currency(dec!(1234.5), Some(FRANC_ID)),
            "1.234,50 FC"
        );
        assert_eq!(f.format_currency(dec!(0), Some(FRANC_ID)), "0,00 FC");
        assert_eq!(
            f.format_currency(dec!(-1234567.238), Some(FRANC_ID)),
            "-1.234.567,24 FC"
        );
    }

    #[test]
    fn test_rounding() {
        let f = Formatter::default();
        assert_eq!(f.format_currency(dec!(0.234), None), "0.23");
        assert_eq!(f.format_currency(dec!(0.235), None), "0.24");
        assert_eq!(f.format_currency(dec!(0.245), None), "0.25");
        assert_eq!(f.format_currency(dec!(-0.245), None), "-0.25");

        // no "-0.00"
        assert_eq!(f.format_currency(dec!(-0.001), None), "0.00");
    }

    #[test]
    fn test_custom_profiles() {
        let table = CurrencyTable::new(CurrencyProfile {
            symbol: "$".to_string(),
            ..CurrencyProfile::default()
        })
        .with_currency(
            CurrencyId(3),
            CurrencyProfile {
                symbol: "EUR".to_string(),
                precision: 0,
                thousand: " ".to_string(),
                format: "%v %s".to_string(),
                ..CurrencyProfile::default()
            },
        );
        let f = Formatter::new(table, crate::spelling::NumberToText);
        assert_eq!(f.format_currency(dec!(-1234.5), None), "$-1,234.50");
        assert_eq!(
            f.format_currency(dec!(1234567.5), Some(CurrencyId(3))),
            "1 234 568 EUR"
        );
        assert_eq!(f.format_currency(dec!(5), Some(FRANC_ID)), "$5.00");
    }

    #[test]
    fn test_debit_credit() {
        let f = Formatter::default();
        let neg = f.format_debit_credit(dec!(-50), None);
        assert_eq!(
            neg.as_str(),
            "<span class=\"text-right text-danger\">(50.00)</span>"
        );
        let pos = f.format_debit_credit(dec!(50), None);
        assert_eq!(pos.as_str(), "<span class=\"text-right\">50.00</span>");
        assert!(!pos.as_str().contains("text-danger"));

        assert_eq!(
            f.format_debit_credit(dec!(-1234.5), Some(FRANC_ID)).to_string(),
            "<span class=\"text-right text-danger\">(1.234,50 FC)</span>"
        );
        assert_eq!(
            f.format_debit_credit(Decimal::ZERO, None).into_string(),
            "<span class=\"text-right\">0.00</span>"
        );
    }

    #[test]
    fn test_markup_is_escaped() {
        let table = CurrencyTable::new(CurrencyProfile {
            symbol: "<b>".to_string(),
            ..CurrencyProfile::default()
        });
        let f = Formatter::new(table, crate::spelling::NumberToText);
        assert_eq!(
            f.format_debit_credit(dec!(1), None).as_str(),
            "<span class=\"text-right\">&lt;b&gt;1.00</span>"
        );
    }

    #[test]
    fn test_percentage() {
        let f = Formatter::default();
        assert_eq!(f.format_percentage(Some(dec!(0.1234)), 2), "12.34%");
        assert_eq!(f.format_percentage(Some(dec!(0.5)), 2), "50.00%");
        assert_eq!(f.format_percentage(Some(dec!(0.123456)), 0), "12%");
        assert_eq!(f.format_percentage(Some(dec!(0.12345)), 3), "12.345%");
        assert_eq!(f.format_percentage(Some(dec!(-0.05)), 1), "-5.0%");
        assert_eq!(f.format_percentage(Some(dec!(0.00005)), 2), "0.01%");

        assert_eq!(
            f.format_percentage(Some(dec!(0.5)), 30),
            format!("50.{}%", "0".repeat(30))
        );
        assert_eq!(
            f.format_percentage(Some(dec!(0.5)), 500),
            format!("50.{}%", "0".repeat(100))
        );

        // zero and missing values are displayed the same
        assert_eq!(f.format_percentage(Some(dec!(0)), 2), "");
        assert_eq!(f.format_percentage(None, 2), "");
    }

    #[test]
    fn test_indent() {
        let f = Formatter::default();
        assert_eq!(f.indent_account(dec!(0)), dec!(0));
        assert_eq!(f.indent_account(dec!(3)), dec!(120));
        assert_eq!(f.indent_account(dec!(3)).to_string(), "120");
        assert_eq!(f.indent_account(dec!(1.5)).to_string(), "60");
        assert_eq!(f.indent_account(dec!(-2)), dec!(-80));
    }

    struct Echo;
    impl AmountSpeller for Echo {
        fn spell(
            &self,
            value: Decimal,
            language: &str,
            currency_name: &str,
        ) -> String {
            format!("{}|{}|{}", value, language, currency_name)
        }
    }

    #[test]
    fn test_amount_to_words() {
        let f = Formatter::new(CurrencyTable::default(), Echo);
        assert_eq!(f.amount_to_words(dec!(12.5), "fr", "FC"), "12.5|fr|FC");

        let f = Formatter::default();
        assert_eq!(
            f.amount_to_words(dec!(21), "en", "dollars"),
            "Twenty-one dollars"
        );
    }

    #[test]
    fn test_idempotent() {
        let f = Formatter::default();
        for v in [dec!(-12.345), dec!(0), dec!(98765.4321)] {
            assert_eq!(
                f.format_currency(v, Some(FRANC_ID)),
                f.format_currency(v, Some(FRANC_ID))
            );
            assert_eq!(
                f.format_debit_credit(v, None),
                f.format_debit_credit(v, None)
            );
            assert_eq!(
                f.format_percentage(Some(v), 2),
                f.format_percentage(Some(v), 2)
            );
        }
    }
}
