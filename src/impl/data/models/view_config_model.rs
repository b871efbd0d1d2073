use std::str::FromStr;

use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    entities::ViewConfig,
    errors::{InvalidConfigRon, InvalidIsoCurrencyCode},
};

/// RON document, e.g. `(currency: "EUR", locale: Some("de-DE"))`.
#[derive(Debug, Default, serde_derive::Deserialize)]
pub(crate) struct ViewConfigModel {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

impl FromStr for ViewConfig {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let model: ViewConfigModel =
            ron::from_str(s).map_err(|e| InvalidConfigRon::with_debug(&e))?;
        let currency = match model.currency {
            Some(code) => Currency::from_code(code.trim())
                .ok_or_else(|| InvalidIsoCurrencyCode::new(&code))?,
            None => Currency::USD,
        };
        Ok(ViewConfig {
            currency,
            locale_override: model.locale.filter(|l| !l.trim().is_empty()),
        })
    }
}

impl ViewConfig {
    pub fn from_ron(s: &str) -> Result<Self, ServerError> {
        Self::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() -> Result<(), ServerError> {
        let config = ViewConfig::from_ron(r#"(currency: Some("EUR"), locale: Some("de-DE"))"#)?;
        assert_eq!(config.currency, Currency::EUR);
        assert_eq!(config.locale_override.as_deref(), Some("de-DE"));
        Ok(())
    }

    #[test]
    fn empty_config_defaults_to_usd() -> Result<(), ServerError> {
        let config = ViewConfig::from_ron("()")?;
        assert_eq!(config, ViewConfig::default());
        Ok(())
    }

    #[test]
    fn rejects_unknown_currency() {
        assert!(ViewConfig::from_ron(r#"(currency: Some("XYZW"))"#).is_err());
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(ViewConfig::from_ron("(currency: ").is_err());
    }
}
