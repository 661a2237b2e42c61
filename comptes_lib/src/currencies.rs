use crate::errors::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Identifies a currency, as passed by templates when formatting amounts.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Deserialize)]
#[serde(transparent)]
pub struct CurrencyId(pub u32);

/// The Congolese franc, the only currency with its own profile by default.
pub const FRANC_ID: CurrencyId = CurrencyId(1);

/// How to display amounts given in one currency.
///
/// The format is a pattern where "%v" is replaced with the number and "%s"
/// with the symbol, for instance "%s%v" for "$12.00" or "%v %s" for
/// "12,00 FC".  Negative values insert a minus sign right before the number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CurrencyProfile {
    pub symbol: String,

    /// Number of digits in the fractional part
    pub precision: u8,

    /// Inserted every three digits of the integer part (may be empty)
    pub thousand: String,

    pub decimal: String,
    pub format: String,
}

impl Default for CurrencyProfile {
    fn default() -> Self {
        Self {
            symbol: String::new(),
            precision: 2,
            thousand: ",".to_string(),
            decimal: ".".to_string(),
            format: "%s%v".to_string(),
        }
    }
}

impl CurrencyProfile {
    pub fn franc() -> Self {
        Self {
            symbol: "FC".to_string(),
            thousand: ".".to_string(),
            decimal: ",".to_string(),
            format: "%v %s".to_string(),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.format.contains("%v") {
            return Err(Error::Config(format!(
                "currency format '{}' has no %v placeholder",
                self.format
            )));
        }
        Ok(())
    }

    /// Substitute the number and the symbol in the display pattern.
    pub(crate) fn arrange(&self, number: &str, negative: bool) -> String {
        let value = if negative {
            format!("-{}", number)
        } else {
            number.to_string()
        };
        self.format.replace("%s", &self.symbol).replace("%v", &value)
    }
}

/// The set of known currency profiles.  Any currency that has no profile
/// of its own is displayed with the default one.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyTable {
    #[serde(default)]
    default: CurrencyProfile,

    #[serde(default)]
    currencies: HashMap<CurrencyId, CurrencyProfile>,
}

impl Default for CurrencyTable {
    fn default() -> Self {
        CurrencyTable::new(CurrencyProfile::default())
            .with_currency(FRANC_ID, CurrencyProfile::franc())
    }
}

impl CurrencyTable {
    pub fn new(default: CurrencyProfile) -> Self {
        CurrencyTable {
            default,
            currencies: HashMap::new(),
        }
    }

    pub fn with_currency(
        mut self,
        id: CurrencyId,
        profile: CurrencyProfile,
    ) -> Self {
        self.currencies.insert(id, profile);
        self
    }

    /// Parse a table such as
    /// ```text
    /// {"default": {"precision": 2},
    ///  "currencies": {"1": {"symbol": "FC", "format": "%v %s"}}}
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        let table: CurrencyTable = serde_json::from_str(text)?;
        table.default.validate()?;
        for profile in table.currencies.values() {
            profile.validate()?;
        }
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Loading currency profiles from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let table = Self::from_json(&text)?;
        log::debug!("Loaded {} currency profiles", table.currencies.len());
        Ok(table)
    }

    /// The profile to use for the given currency
    pub fn get(&self, currency: Option<CurrencyId>) -> &CurrencyProfile {
        currency
            .and_then(|id| self.currencies.get(&id))
            .unwrap_or(&self.default)
    }

    pub fn contains(&self, id: CurrencyId) -> bool {
        self.currencies.contains_key(&id)
    }
}

#[cfg(test)]
mod test {
    use crate::currencies::{
        CurrencyId, CurrencyProfile, CurrencyTable, FRANC_ID,
    };
    use crate::errors::Error;

    #[test]
    fn test_selection() {
        let table = CurrencyTable::default();
        assert_eq!(table.get(None), &CurrencyProfile::default());
        assert_eq!(table.get(Some(FRANC_ID)), &CurrencyProfile::franc());
        assert_eq!(table.get(Some(CurrencyId(2))), &CurrencyProfile::default());
        assert!(table.contains(FRANC_ID));
        assert!(!table.contains(CurrencyId(0)));
    }

    #[test]
    fn test_arrange() {
        assert_eq!(CurrencyProfile::default().arrange("1.00", false), "1.00");
        assert_eq!(CurrencyProfile::default().arrange("1.00", true), "-1.00");
        assert_eq!(CurrencyProfile::franc().arrange("1,00", true), "-1,00 FC");
    }

    #[test]
    fn test_from_json() -> Result<(), Error> {
        let table = CurrencyTable::from_json(
            r#"{"default": {"symbol": "$"},
                "currencies": {
                   "1": {"symbol": "FC", "thousand": ".", "decimal": ",",
                         "format": "%v %s"},
                   "3": {"symbol": "EUR", "precision": 3, "format": "%v %s"}
                }}"#,
        )?;
        assert_eq!(table.get(None).symbol, "$");
        assert_eq!(table.get(None).precision, 2);
        assert_eq!(table.get(Some(FRANC_ID)), &CurrencyProfile::franc());
        assert_eq!(table.get(Some(CurrencyId(3))).precision, 3);
        assert_eq!(table.get(Some(CurrencyId(3))).thousand, ",");

        // Everything is optional
        let table = CurrencyTable::from_json("{}")?;
        assert_eq!(table.get(Some(FRANC_ID)), &CurrencyProfile::default());
        Ok(())
    }

    #[test]
    fn test_invalid_format() {
        let table = CurrencyTable::from_json(
            r#"{"currencies": {"1": {"format": "%s"}}}"#,
        );
        assert!(matches!(table, Err(Error::Config(_))));

        let table = CurrencyTable::from_json(r#"{"default": 3}"#);
        assert!(matches!(table, Err(Error::Json(_))));
    }
}
