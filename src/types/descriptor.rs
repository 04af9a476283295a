use serde::{Deserialize, Serialize};

/// Raw `{name, version}` pair as reported by a user-agent parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl RawDescriptor {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            version: Some(version.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// Pre-resolved browser description supplied instead of live detection.
///
/// ```yaml
/// name: Chrome
/// version: "115.0"
/// engine:
///   name: Blink
///   version: "115.0"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserInfo {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub engine: RawDescriptor,
}

impl BrowserInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
            engine: RawDescriptor::default(),
        }
    }

    pub fn with_engine(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.engine = RawDescriptor::new(name, version);
        self
    }
}
