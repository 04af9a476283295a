use indexmap::IndexMap;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Operating Systems  (regexes/oss.yml)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct OsEntry {
    pub regex: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

// ---------------------------------------------------------------------------
// Browsers  (regexes/browsers.yml)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct BrowserEntry {
    pub regex: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub engine: Option<EngineRef>,
}

/// Engine declaration on a browser entry.
///
/// `versions` maps a browser version threshold to the engine used from that
/// version on. Insertion order is kept so the last reached threshold wins.
#[derive(Debug, Deserialize)]
pub(crate) struct EngineRef {
    pub default: Option<String>,
    #[serde(default)]
    pub versions: Option<IndexMap<String, String>>,
}

// ---------------------------------------------------------------------------
// Browser Engines  (regexes/browser_engine.yml)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct EngineEntry {
    pub regex: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Bundled database
// ---------------------------------------------------------------------------

pub(crate) const BUNDLED_BROWSERS: &str = include_str!("../regexes/browsers.yml");
pub(crate) const BUNDLED_ENGINES: &str = include_str!("../regexes/browser_engine.yml");
pub(crate) const BUNDLED_OSS: &str = include_str!("../regexes/oss.yml");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_files_deserialize() {
        let browsers: Vec<BrowserEntry> = serde_yaml::from_str(BUNDLED_BROWSERS).unwrap();
        let engines: Vec<EngineEntry> = serde_yaml::from_str(BUNDLED_ENGINES).unwrap();
        let oss: Vec<OsEntry> = serde_yaml::from_str(BUNDLED_OSS).unwrap();
        assert!(!browsers.is_empty());
        assert!(!engines.is_empty());
        assert!(!oss.is_empty());
    }

    #[test]
    fn engine_thresholds_keep_order() {
        let browsers: Vec<BrowserEntry> = serde_yaml::from_str(BUNDLED_BROWSERS).unwrap();
        let chrome = browsers.iter().find(|b| b.name == "Chrome").unwrap();
        let engine = chrome.engine.as_ref().unwrap();
        assert_eq!(engine.default.as_deref(), Some("WebKit"));
        let versions = engine.versions.as_ref().unwrap();
        assert_eq!(versions.get("28").map(String::as_str), Some("Blink"));
    }
}
