use std::env;

use super::formatter::FALLBACK_LOCALE;

/// Supplies the locale used for formatting. Queried on every mapping pass,
/// never cached.
pub trait LocaleProvider {
    fn current_locale(&self) -> String;
}

/// Reads the process locale from the environment (`LC_ALL`, `LC_MONETARY`,
/// `LANG`, first non-empty wins).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocaleProvider;

#[derive(Debug, Clone)]
pub struct FixedLocaleProvider(pub String);

impl LocaleProvider for SystemLocaleProvider {
    fn current_locale(&self) -> String {
        let raw = ["LC_ALL", "LC_MONETARY", "LANG"]
            .iter()
            .filter_map(|key| env::var(key).ok())
            .find(|value| !value.trim().is_empty());
        normalize_posix_locale(raw.as_deref())
    }
}

impl LocaleProvider for FixedLocaleProvider {
    fn current_locale(&self) -> String {
        self.0.clone()
    }
}

impl<L: LocaleProvider + ?Sized> LocaleProvider for &L {
    fn current_locale(&self) -> String {
        (**self).current_locale()
    }
}

/// `en_US.UTF-8` -> `en-US`. `C`, `POSIX` and missing values map to the
/// fallback locale.
pub(crate) fn normalize_posix_locale(raw: Option<&str>) -> String {
    let raw = match raw.map(str::trim) {
        None | Some("") | Some("C") | Some("POSIX") => return FALLBACK_LOCALE.to_string(),
        Some(raw) => raw,
    };
    let base = raw.split(['.', '@']).next().unwrap_or_default();
    if base.is_empty() || base == "C" {
        return FALLBACK_LOCALE.to_string();
    }
    base.replace('_', "-")
}
