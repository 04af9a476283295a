use indexmap::IndexMap;

// ---------------------------------------------------------------------------
// Internal data structs carried inside CompiledParser<T>
// ---------------------------------------------------------------------------

pub(crate) struct OsData {
    pub name: String,
    pub version_template: Option<String>,
}

pub(crate) struct BrowserData {
    pub name: String,
    pub version_template: Option<String>,
    pub engine_default: Option<String>,
    pub engine_versions: Option<IndexMap<String, String>>,
}

pub(crate) struct EngineData {
    pub name: String,
}
