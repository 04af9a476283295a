use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical browser family.
///
/// Every raw parser name maps onto exactly one of these; names outside the
/// table collapse to [`BrowserName::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrowserName {
    Chrome,
    Firefox,
    Safari,
    Electron,
    ReactNative,
    Edge,
    Opera,
    #[serde(rename = "NW.js")]
    NwJs,
    Unknown,
}

impl BrowserName {
    /// Browser-name normalization table: raw parser name → canonical name.
    pub fn from_parser_name(raw: &str) -> Self {
        match raw {
            "Chrome" | "Chrome Headless" | "Chrome WebView" | "Chromium" | "Mobile Chrome"
            | "Chrome iOS" => Self::Chrome,
            "Firefox" | "Mobile Firefox" | "Firefox iOS" => Self::Firefox,
            "Safari" | "Mobile Safari" => Self::Safari,
            "Electron" => Self::Electron,
            "ReactNative" => Self::ReactNative,
            "Edge" => Self::Edge,
            "Opera" => Self::Opera,
            "NW.js" => Self::NwJs,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chrome => "Chrome",
            Self::Firefox => "Firefox",
            Self::Safari => "Safari",
            Self::Electron => "Electron",
            Self::ReactNative => "ReactNative",
            Self::Edge => "Edge",
            Self::Opera => "Opera",
            Self::NwJs => "NW.js",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BrowserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_variants_collapse() {
        assert_eq!(BrowserName::from_parser_name("Chrome WebView"), BrowserName::Chrome);
        assert_eq!(BrowserName::from_parser_name("Mobile Firefox"), BrowserName::Firefox);
        assert_eq!(BrowserName::from_parser_name("Mobile Safari"), BrowserName::Safari);
        assert_eq!(BrowserName::from_parser_name("NW.js"), BrowserName::NwJs);
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(BrowserName::from_parser_name("chrome"), BrowserName::Unknown);
        assert_eq!(BrowserName::from_parser_name("IE"), BrowserName::Unknown);
        assert_eq!(BrowserName::from_parser_name(""), BrowserName::Unknown);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(BrowserName::Chrome.to_string(), "Chrome");
        assert_eq!(BrowserName::Unknown.to_string(), "Unknown");
    }
}
