use super::RawDescriptor;

/// Raw parser output for one user agent: browser, engine and OS descriptors,
/// none of them normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUserAgent {
    pub browser: RawDescriptor,
    pub engine: RawDescriptor,
    pub os: RawDescriptor,
}

impl ParsedUserAgent {
    pub fn browser(&self) -> &RawDescriptor {
        &self.browser
    }
    pub fn engine(&self) -> &RawDescriptor {
        &self.engine
    }
    pub fn os(&self) -> &RawDescriptor {
        &self.os
    }
}
