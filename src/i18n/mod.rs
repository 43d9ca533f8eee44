//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Hindi (India)
    HiIN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::HiIN => "हिन्दी",
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, hi))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Sensor Station Monitoring Dashboard", "सेंसर स्टेशन निगरानी डैशबोर्ड"));

    // Filters
    map.insert("filter-all", ("All", "सभी"));
    map.insert("filter-working", ("Working", "कार्यरत"));
    map.insert("filter-non-working", ("Non-Working", "खराब"));
    map.insert("filter-date", ("Date", "तिथि"));
    map.insert("filter-prev-day", ("Prev", "पिछला"));
    map.insert("filter-next-day", ("Next", "अगला"));

    // Summary panel
    map.insert("summary-title", ("Station Status", "स्टेशन स्थिति"));
    map.insert("summary-working", ("Working", "कार्यरत"));
    map.insert("summary-not-working", ("Not Working", "खराब"));

    // Map panel
    map.insert("map-title", ("Station Map", "स्टेशन मानचित्र"));
    map.insert("map-no-stations", ("No stations to plot", "दिखाने के लिए कोई स्टेशन नहीं"));

    // Vendor table
    map.insert("vendor-title", ("Vendor Summary", "विक्रेता सारांश"));
    map.insert("col-vendor", ("Vendor", "विक्रेता"));
    map.insert("col-total", ("Total", "कुल"));
    map.insert("col-working", ("Working", "कार्यरत"));
    map.insert("col-not-working", ("Not Working", "खराब"));

    // District table
    map.insert("district-title", ("District Breakdown", "जिला विवरण"));
    map.insert("col-district", ("District", "जिला"));
    map.insert("col-installed", ("Installed", "स्थापित"));
    map.insert("col-agency", ("Agency", "एजेंसी"));

    // Block fault table
    map.insert("block-title", ("Block Fault Detail", "प्रखंड दोष विवरण"));
    map.insert("col-block", ("Block", "प्रखंड"));
    map.insert("col-station-id", ("Station ID", "स्टेशन आईडी"));
    map.insert("col-temp-rh", ("Temp/RH", "तापमान/आर्द्रता"));
    map.insert("col-rainfall", ("Rainfall", "वर्षा"));
    map.insert("col-wind-speed", ("Wind Speed", "पवन गति"));
    map.insert("col-air-pressure", ("Air Pressure", "वायु दाब"));
    map.insert("col-soil-moisture", ("Soil Moisture", "मृदा नमी"));
    map.insert("col-solar-radiation", ("Solar Radiation", "सौर विकिरण"));
    map.insert("col-data-packet", ("Data Packet", "डेटा पैकेट"));

    // Actions
    map.insert("action-refresh", ("Refresh", "रीफ्रेश"));
    map.insert("action-export", ("Export Report", "रिपोर्ट निर्यात"));

    // Log panel
    map.insert("log-title", ("Logs", "लॉग"));
    map.insert("log-clear", ("Clear", "साफ़ करें"));

    // Table
    map.insert("table-no-data", ("No data", "कोई डेटा नहीं"));
    map.insert("table-loading", ("Loading...", "लोड हो रहा है..."));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, hi)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::HiIN => SharedString::from(hi),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_lookup() {
        assert_eq!(t(Locale::EnUS, "col-rainfall"), "Rainfall");
        assert_eq!(t(Locale::HiIN, "col-rainfall"), "वर्षा");
    }

    #[test]
    fn test_missing_key_falls_back() {
        assert_eq!(t(Locale::EnUS, "no-such-key"), "no-such-key");
    }
}
