use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical rendering engine. Engines outside the table are not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineName {
    Blink,
    WebKit,
    Gecko,
}

impl EngineName {
    /// Engine-name normalization table. A miss means "not tracked" (`None`),
    /// never an explicit unknown engine.
    pub fn from_parser_name(raw: &str) -> Option<Self> {
        match raw {
            "Blink" => Some(Self::Blink),
            "WebKit" => Some(Self::WebKit),
            "Gecko" => Some(Self::Gecko),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blink => "Blink",
            Self::WebKit => "WebKit",
            Self::Gecko => "Gecko",
        }
    }
}

impl fmt::Display for EngineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
