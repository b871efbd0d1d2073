use iso_currency::Currency;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub currency: Currency,
    /// When set, replaces the locale reported by the runtime environment.
    pub locale_override: Option<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            locale_override: None,
        }
    }
}
