use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::HostEnvironment;

/// Platform product reported by a React Native host.
pub(crate) const REACT_NATIVE_PRODUCT: &str = "ReactNative";

/// Version reported when a React Native host doesn't expose one.
pub const UNKNOWN_VERSION: &str = "unknown";

static REACT_NATIVE_UA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(react[ \t_-]*native)(?:/(\S+))?").expect("static React Native pattern")
});

/// Detect a React Native host from its user-agent marker or product hint.
///
/// Returns the runtime version: the one carried by the marker when present,
/// [`UNKNOWN_VERSION`] otherwise. `None` means not React Native.
pub(crate) fn detect_react_native(host: &HostEnvironment) -> Option<String> {
    let captures = REACT_NATIVE_UA.captures(&host.user_agent);

    // Remote-debugged apps run inside Chrome, so the product hint alone counts.
    if captures.is_none() && host.product.as_deref() != Some(REACT_NATIVE_PRODUCT) {
        return None;
    }

    let version = captures
        .and_then(|c| c.get(2))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_VERSION.to_string());
    Some(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_with_version() {
        let host = HostEnvironment::new("MyApp/1.0 react-native/0.72.4");
        assert_eq!(detect_react_native(&host).as_deref(), Some("0.72.4"));
    }

    #[test]
    fn marker_spellings() {
        for ua in ["ReactNative", "React Native", "react_native", "REACT-NATIVE", "react\tnative"] {
            let host = HostEnvironment::new(ua);
            assert_eq!(detect_react_native(&host).as_deref(), Some(UNKNOWN_VERSION), "{ua}");
        }
    }

    #[test]
    fn product_hint_without_marker() {
        let host = HostEnvironment::new("Mozilla/5.0 Chrome/115.0").with_product("ReactNative");
        assert_eq!(detect_react_native(&host).as_deref(), Some(UNKNOWN_VERSION));
    }

    #[test]
    fn marker_must_start_at_word_boundary() {
        let host = HostEnvironment::new("Mozilla/5.0 notreactnative/1.0");
        assert_eq!(detect_react_native(&host), None);
    }

    #[test]
    fn regular_browser() {
        let host = HostEnvironment::new("Mozilla/5.0 Firefox/115.0").with_product("Gecko");
        assert_eq!(detect_react_native(&host), None);
    }
}
