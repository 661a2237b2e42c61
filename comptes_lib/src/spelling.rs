use itertools::Itertools;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Spells out an amount in words, as printed on receipts and cheques.
pub trait AmountSpeller {
    fn spell(
        &self,
        value: Decimal,
        language: &str,
        currency_name: &str,
    ) -> String;
}

/// Spells amounts in English ("en") or French ("fr").  Other languages fall
/// back to English.
///
/// ```text
/// 1234.5, "en", "dollars"
///    => "One thousand two hundred thirty-four dollars and fifty cents"
/// ```
#[derive(Default, Clone, Copy)]
pub struct NumberToText;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Language {
    English,
    French,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let code = code.trim().to_lowercase();
        if code == "fr" || code.starts_with("fr-") || code.starts_with("fr_")
        {
            Language::French
        } else {
            Language::English
        }
    }

    fn minus(self) -> &'static str {
        match self {
            Language::English => "minus",
            Language::French => "moins",
        }
    }

    fn and(self) -> &'static str {
        match self {
            Language::English => "and",
            Language::French => "et",
        }
    }

    fn cents(self) -> &'static str {
        match self {
            Language::English => "cents",
            Language::French => "centimes",
        }
    }

    fn integer(self, value: u64) -> String {
        match self {
            Language::English => english(value),
            Language::French => french(value),
        }
    }
}

impl AmountSpeller for NumberToText {
    fn spell(
        &self,
        value: Decimal,
        language: &str,
        currency_name: &str,
    ) -> String {
        let lang = Language::from_code(language);
        let rounded = value
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let units = rounded.trunc();
        let cents = ((rounded - units) * Decimal::ONE_HUNDRED)
            .to_u64()
            .unwrap_or(0);

        let mut words = Vec::new();
        if value < Decimal::ZERO && !rounded.is_zero() {
            words.push(lang.minus().to_string());
        }
        words.push(match units.to_u64() {
            Some(u) => lang.integer(u),
            None => units.to_string(),
        });
        if !currency_name.trim().is_empty() {
            words.push(currency_name.trim().to_string());
        }
        if cents > 0 {
            words.push(lang.and().to_string());
            words.push(lang.integer(cents));
            words.push(lang.cents().to_string());
        }
        capitalize(&words.iter().join(" "))
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

const EN_UNITS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight",
    "nine", "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen",
    "sixteen", "seventeen", "eighteen", "nineteen",
];
const EN_TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy",
    "eighty", "ninety",
];
const EN_SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

fn lookup(table: &[&'static str], idx: u64) -> &'static str {
    table.get(idx as usize).copied().unwrap_or_default()
}

/// Split into groups of three digits, least significant first
fn groups(mut value: u64) -> Vec<u64> {
    let mut result = Vec::new();
    while value > 0 {
        result.push(value % 1000);
        value /= 1000;
    }
    result
}

fn english_below_thousand(value: u64) -> String {
    let mut words = Vec::new();
    let hundreds = value / 100;
    let rest = value % 100;
    if hundreds > 0 {
        words.push(format!("{} hundred", lookup(&EN_UNITS, hundreds)));
    }
    if rest >= 20 {
        let tens = lookup(&EN_TENS, rest / 10);
        if rest % 10 == 0 {
            words.push(tens.to_string());
        } else {
            words.push(format!("{}-{}", tens, lookup(&EN_UNITS, rest % 10)));
        }
    } else if rest > 0 {
        words.push(lookup(&EN_UNITS, rest).to_string());
    }
    words.join(" ")
}

fn english(value: u64) -> String {
    if value == 0 {
        return lookup(&EN_UNITS, 0).to_string();
    }
    groups(value)
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, g)| **g > 0)
        .map(|(scale, g)| {
            let scale_name = lookup(&EN_SCALES, scale as u64);
            if scale_name.is_empty() {
                english_below_thousand(*g)
            } else {
                format!("{} {}", english_below_thousand(*g), scale_name)
            }
        })
        .join(" ")
}

const FR_UNITS: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit",
    "neuf", "dix", "onze", "douze", "treize", "quatorze", "quinze", "seize",
];
const FR_TENS: [&str; 7] =
    ["", "dix", "vingt", "trente", "quarante", "cinquante", "soixante"];

// (singular, plural).  "mille" is invariable.
const FR_SCALES: [(&str, &str); 7] = [
    ("", ""),
    ("mille", "mille"),
    ("million", "millions"),
    ("milliard", "milliards"),
    ("billion", "billions"),
    ("billiard", "billiards"),
    ("trillion", "trillions"),
];

fn french_below_hundred(value: u64, plural_eighty: bool) -> String {
    match value {
        0..=16 => lookup(&FR_UNITS, value).to_string(),
        17..=19 => format!("dix-{}", lookup(&FR_UNITS, value - 10)),
        20..=69 => {
            let tens = lookup(&FR_TENS, value / 10);
            match value % 10 {
                0 => tens.to_string(),
                1 => format!("{} et un", tens),
                u => format!("{}-{}", tens, lookup(&FR_UNITS, u)),
            }
        }
        70..=79 => {
            if value == 71 {
                "soixante et onze".to_string()
            } else {
                let rest = french_below_hundred(value - 60, false);
                format!("soixante-{}", rest)
            }
        }
        80 => {
            if plural_eighty {
                "quatre-vingts".to_string()
            } else {
                "quatre-vingt".to_string()
            }
        }
        _ => {
            let rest = french_below_hundred(value - 80, false);
            format!("quatre-vingt-{}", rest)
        }
    }
}

/// `plural` is false when the group is followed by "mille", in which case
/// "cents" and "quatre-vingts" lose their final "s".
fn french_below_thousand(value: u64, plural: bool) -> String {
    let hundreds = value / 100;
    let rest = value % 100;
    let mut words = Vec::new();
    match hundreds {
        0 => {}
        1 => words.push("cent".to_string()),
        h => {
            if rest == 0 && plural {
                words.push(format!("{} cents", lookup(&FR_UNITS, h)));
            } else {
                words.push(format!("{} cent", lookup(&FR_UNITS, h)));
            }
        }
    }
    if rest > 0 {
        words.push(french_below_hundred(rest, plural));
    }
    words.join(" ")
}

fn french(value: u64) -> String {
    if value == 0 {
        return lookup(&FR_UNITS, 0).to_string();
    }
    groups(value)
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, g)| **g > 0)
        .map(|(scale, g)| {
            let (singular, plural) =
                FR_SCALES.get(scale).copied().unwrap_or_default();
            match (scale, *g) {
                (0, g) => french_below_thousand(g, true),
                (1, 1) => singular.to_string(),
                (1, g) => {
                    format!("{} {}", french_below_thousand(g, false), singular)
                }
                (_, 1) => format!("un {}", singular),
                (_, g) => {
                    format!("{} {}", french_below_thousand(g, true), plural)
                }
            }
        })
        .join(" ")
}

#[cfg(test)]
mod test {
    use crate::spelling::{english, french, AmountSpeller, NumberToText};
    use rust_decimal_macros::dec;

    #[test]
    fn test_english() {
        assert_eq!(english(0), "zero");
        assert_eq!(english(7), "seven");
        assert_eq!(english(40), "forty");
        assert_eq!(english(42), "forty-two");
        assert_eq!(english(100), "one hundred");
        assert_eq!(english(1005), "one thousand five");
        assert_eq!(
            english(1_234_567),
            "one million two hundred thirty-four thousand five hundred \
             sixty-seven"
        );
        assert_eq!(english(2_000_000_000), "two billion");
    }

    #[test]
    fn test_french() {
        assert_eq!(french(0), "zéro");
        assert_eq!(french(17), "dix-sept");
        assert_eq!(french(21), "vingt et un");
        assert_eq!(french(71), "soixante et onze");
        assert_eq!(french(77), "soixante-dix-sept");
        assert_eq!(french(80), "quatre-vingts");
        assert_eq!(french(81), "quatre-vingt-un");
        assert_eq!(french(91), "quatre-vingt-onze");
        assert_eq!(french(200), "deux cents");
        assert_eq!(french(201), "deux cent un");
        assert_eq!(french(1000), "mille");
        assert_eq!(french(80_000), "quatre-vingt mille");
        assert_eq!(french(200_000), "deux cent mille");
        assert_eq!(french(1_000_000), "un million");
        assert_eq!(french(3_000_200), "trois millions deux cents");
    }

    #[test]
    fn test_spell() {
        let s = NumberToText;
        assert_eq!(
            s.spell(dec!(1234.5), "en", "dollars"),
            "One thousand two hundred thirty-four dollars and fifty cents"
        );
        assert_eq!(
            s.spell(dec!(1234.5), "fr", "francs congolais"),
            "Mille deux cent trente-quatre francs congolais et cinquante \
             centimes"
        );
        assert_eq!(s.spell(dec!(-3), "en", "dollars"), "Minus three dollars");
        assert_eq!(s.spell(dec!(0), "fr", "francs"), "Zéro francs");
        assert_eq!(s.spell(dec!(0.999), "en", ""), "One");

        // unknown languages are spelled in English
        assert_eq!(s.spell(dec!(12), "sw", "dollars"), "Twelve dollars");
    }
}
