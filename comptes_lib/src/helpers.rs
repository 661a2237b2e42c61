//! Template helpers.
//!
//! Templates pass loosely typed arguments (numbers, numeric strings, null,
//! missing values...).  The helpers below convert them to numbers, never
//! fail on invalid input, and forward to the `Formatter`.

use crate::currencies::CurrencyId;
use crate::errors::{Error, Result};
use crate::formatters::{Formatter, Markup};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub const HELPER_NAMES: [&str; 5] =
    ["currency", "debcred", "percentage", "indentAccount", "numberToText"];

const DEFAULT_PERCENT_PRECISION: u32 = 2;

/// Numeric value of a template argument.  Missing values, null and false
/// are 0, `None` is returned for anything that is not a number.
pub fn to_number(value: Option<&Value>) -> Option<Decimal> {
    match value {
        None | Some(Value::Null) => Some(Decimal::ZERO),
        Some(Value::Bool(true)) => Some(Decimal::ONE),
        Some(Value::Bool(false)) => Some(Decimal::ZERO),
        Some(Value::Number(n)) => {
            let v = parse_decimal(&n.to_string());
            if v.is_none() {
                log::warn!("Number {} is out of range, treated as NaN", n);
            }
            v
        }
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Some(Decimal::ZERO)
            } else {
                parse_decimal(s)
            }
        }
        Some(Value::Array(a)) => match a.as_slice() {
            [] => Some(Decimal::ZERO),
            [single] => to_number(Some(single)),
            _ => None,
        },
        Some(Value::Object(_)) => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// The currency selected by a template argument, if any
pub fn to_currency(value: Option<&Value>) -> Option<CurrencyId> {
    to_number(value)
        .filter(|v| v.fract().is_zero())
        .and_then(|v| v.to_u32())
        .map(CurrencyId)
}

fn to_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
    }
}

/// What a helper produces
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Text(String),
    Markup(Markup),
    Number(Decimal),
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Text(t) => f.write_str(t),
            Rendered::Markup(m) => write!(f, "{}", m),
            Rendered::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Default)]
pub struct Helpers {
    formatter: Formatter,
}

impl Helpers {
    pub fn new(formatter: Formatter) -> Self {
        Helpers { formatter }
    }

    pub fn currency(
        &self,
        value: Option<&Value>,
        currency: Option<&Value>,
    ) -> String {
        self.formatter.format_currency(
            to_number(value).unwrap_or_default(),
            to_currency(currency),
        )
    }

    pub fn debcred(
        &self,
        value: Option<&Value>,
        currency: Option<&Value>,
    ) -> Markup {
        self.formatter.format_debit_credit(
            to_number(value).unwrap_or_default(),
            to_currency(currency),
        )
    }

    pub fn percentage(
        &self,
        value: Option<&Value>,
        precision: Option<&Value>,
    ) -> String {
        // Only actual numbers are shown, numeric strings are not
        let value = match value {
            None => Some(Decimal::ZERO),
            Some(v @ Value::Number(_)) => to_number(Some(v)),
            Some(_) => None,
        };

        // An explicit precision that is not a number (null included) is 0
        let precision = match precision {
            None => DEFAULT_PERCENT_PRECISION,
            p => to_number(p)
                .and_then(|p| p.trunc().to_u32())
                .unwrap_or(0),
        };
        self.formatter.format_percentage(value, precision)
    }

    pub fn indent_account(&self, depth: Option<&Value>) -> Decimal {
        self.formatter
            .indent_account(to_number(depth).unwrap_or_default())
    }

    pub fn number_to_text(
        &self,
        value: Option<&Value>,
        language: Option<&Value>,
        currency_name: Option<&Value>,
    ) -> String {
        self.formatter.amount_to_words(
            to_number(value).unwrap_or_default(),
            &to_text(language),
            &to_text(currency_name),
        )
    }

    /// Run a helper by the name templates know it under
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Rendered> {
        let arg = |idx: usize| args.get(idx);
        match name {
            "currency" => Ok(Rendered::Text(self.currency(arg(0), arg(1)))),
            "debcred" => Ok(Rendered::Markup(self.debcred(arg(0), arg(1)))),
            "percentage" => {
                Ok(Rendered::Text(self.percentage(arg(0), arg(1))))
            }
            "indentAccount" => {
                Ok(Rendered::Number(self.indent_account(arg(0))))
            }
            "numberToText" => Ok(Rendered::Text(
                self.number_to_text(arg(0), arg(1), arg(2)),
            )),
            _ => Err(Error::UnknownHelper(name.to_string())),
        }
    }
}
