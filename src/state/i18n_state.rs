//! I18nState - Internationalization State

use locale_config::Locale as SystemLocale;

use crate::i18n::Locale;

/// State for internationalization
#[derive(Debug, Clone)]
pub struct I18nState {
    /// Current locale
    pub locale: Locale,
}

impl Default for I18nState {
    fn default() -> Self {
        Self {
            locale: detect_locale(),
        }
    }
}

impl I18nState {
    /// Toggle between English and Hindi
    pub fn toggle_locale(&mut self) {
        self.locale = match self.locale {
            Locale::EnUS => Locale::HiIN,
            Locale::HiIN => Locale::EnUS,
        };
    }
}

/// Pick the startup locale from the system locale
fn detect_locale() -> Locale {
    let current = SystemLocale::current().to_string();
    if current.starts_with("hi") {
        Locale::HiIN
    } else {
        Locale::EnUS
    }
}
