use serde::Serialize;

use super::{BrowserName, EngineName};

/// Canonical identity of the runtime environment.
///
/// `version` is only set for recognized browsers and `engine_version` only
/// when `engine` is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedEnvironment {
    pub name: BrowserName,
    pub version: Option<String>,
    pub engine: Option<EngineName>,
    pub engine_version: Option<String>,
}

impl NormalizedEnvironment {
    /// Normalize raw browser and engine descriptors through the name tables,
    /// dropping versions that belong to unrecognized names.
    pub fn from_raw(
        browser_name: Option<&str>,
        browser_version: Option<&str>,
        engine_name: Option<&str>,
        engine_version: Option<&str>,
    ) -> Self {
        let name = browser_name
            .map(BrowserName::from_parser_name)
            .unwrap_or(BrowserName::Unknown);
        let engine = engine_name.and_then(EngineName::from_parser_name);

        Self {
            name,
            version: if name == BrowserName::Unknown {
                None
            } else {
                browser_version.map(str::to_owned)
            },
            engine,
            engine_version: engine.and(engine_version.map(str::to_owned)),
        }
    }
}
