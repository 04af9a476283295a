use super::db;
use super::error::Result;
use super::helpers::*;
use super::parser::CompiledParser;
use super::parser_data::*;
use super::substitution::substitute;
use super::types::*;
use std::borrow::Cow;
use std::path::Path;

/// A user-agent parsing engine: turns a raw user-agent string into raw,
/// unnormalized browser/engine/OS descriptors.
///
/// Implementations must tolerate any input and report what they don't
/// recognize as absent fields.
pub trait UserAgentParser {
    fn parse(&self, user_agent: &str) -> ParsedUserAgent;
}

/// Regex-database user-agent parser.
///
/// Built once, then shared read-only; parsing does no I/O.
pub struct UaParser {
    os_parser: CompiledParser<OsData>,
    browser_parser: CompiledParser<BrowserData>,
    engine_parser: CompiledParser<EngineData>,
}

impl UaParser {
    /// Build the parser from the regex database compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_sources(db::BUNDLED_BROWSERS, db::BUNDLED_ENGINES, db::BUNDLED_OSS)
    }

    /// Load the YAML regex files from `dir` and build the parser.
    ///
    /// `dir` must contain `browsers.yml`, `browser_engine.yml` and `oss.yml`
    /// in the same format as the bundled `regexes/` directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let browsers = std::fs::read_to_string(dir.join("browsers.yml"))?;
        let engines = std::fs::read_to_string(dir.join("browser_engine.yml"))?;
        let oss = std::fs::read_to_string(dir.join("oss.yml"))?;
        Self::from_sources(&browsers, &engines, &oss)
    }

    fn from_sources(browsers: &str, engines: &str, oss: &str) -> Result<Self> {
        let browsers: Vec<db::BrowserEntry> = serde_yaml::from_str(browsers)?;
        let engines: Vec<db::EngineEntry> = serde_yaml::from_str(engines)?;
        let oss: Vec<db::OsEntry> = serde_yaml::from_str(oss)?;

        let (browser_parser, (engine_parser, os_parser)) = rayon::join(
            || build_browser_parser(browsers),
            || {
                rayon::join(
                    || {
                        CompiledParser::build(
                            engines
                                .into_iter()
                                .map(|e| (e.regex, EngineData { name: e.name })),
                        )
                    },
                    || {
                        CompiledParser::build(oss.into_iter().map(|o| {
                            (
                                o.regex,
                                OsData {
                                    name: o.name,
                                    version_template: o.version,
                                },
                            )
                        }))
                    },
                )
            },
        );

        let parser = Self {
            browser_parser: browser_parser?,
            engine_parser: engine_parser?,
            os_parser: os_parser?,
        };

        tracing::debug!(
            browsers = parser.browser_parser.len(),
            engines = parser.engine_parser.len(),
            oss = parser.os_parser.len(),
            "user-agent parser ready"
        );

        Ok(parser)
    }

    fn detect_os(&self, ua: &str) -> RawDescriptor {
        let Some(m) = self.os_parser.match_first(ua) else {
            return RawDescriptor::default();
        };

        let version = match &m.data.version_template {
            Some(tpl) => substitute(tpl, &m.captures),
            None => capture_or_empty(&m.captures, 1),
        };
        let version = if version.contains('_') {
            Cow::Owned(version.replace('_', "."))
        } else {
            version
        };

        RawDescriptor {
            name: non_empty(substitute(&m.data.name, &m.captures)),
            version: non_empty(version),
        }
    }

    /// Browser and engine descriptors, in that order.
    fn detect_browser(&self, ua: &str) -> (RawDescriptor, RawDescriptor) {
        let Some(m) = self.browser_parser.match_first(ua) else {
            // No browser entry → the engine parser alone decides.
            return (RawDescriptor::default(), self.detect_engine(ua));
        };

        let version = match &m.data.version_template {
            Some(tpl) => substitute(tpl, &m.captures),
            None => capture_or_empty(&m.captures, 1),
        };
        let (engine, engine_version) = self.resolve_engine(ua, m.data, &version);

        (
            RawDescriptor {
                name: non_empty(substitute(&m.data.name, &m.captures)),
                version: non_empty(version),
            },
            RawDescriptor {
                name: non_empty(engine),
                version: non_empty(engine_version),
            },
        )
    }

    fn detect_engine(&self, ua: &str) -> RawDescriptor {
        match self.engine_parser.match_first(ua) {
            Some(m) => RawDescriptor {
                name: Some(m.data.name.clone()),
                version: non_empty(capture_or_empty(&m.captures, 1)),
            },
            None => RawDescriptor::default(),
        }
    }

    fn resolve_engine<'a>(
        &'a self,
        ua: &'a str,
        browser_data: &'a BrowserData,
        browser_version: &str,
    ) -> (Cow<'a, str>, Cow<'a, str>) {
        if let Some(default_engine) = &browser_data.engine_default {
            // Start with the default, then apply version-threshold overrides
            // (last threshold where browser_version >= threshold wins).
            let mut engine_name: &str = default_engine;
            if !browser_version.is_empty() {
                if let Some(ref versions) = browser_data.engine_versions {
                    for (threshold, name) in versions {
                        if version_ge(browser_version, threshold) {
                            engine_name = name;
                        }
                    }
                }
            }

            if !engine_name.is_empty() {
                // Engine version only comes from an engine entry of the same name.
                if let Some(m) = self.engine_parser.match_first(ua) {
                    if m.data.name.eq_ignore_ascii_case(engine_name) {
                        return (
                            Cow::Borrowed(m.data.name.as_str()),
                            capture_or_empty(&m.captures, 1),
                        );
                    }
                }
                return (Cow::Borrowed(engine_name), Cow::Borrowed(""));
            }
        }

        // No default engine → try engine parser directly
        if let Some(m) = self.engine_parser.match_first(ua) {
            return (
                Cow::Borrowed(m.data.name.as_str()),
                capture_or_empty(&m.captures, 1),
            );
        }

        (Cow::Borrowed(""), Cow::Borrowed(""))
    }
}

impl UserAgentParser for UaParser {
    fn parse(&self, user_agent: &str) -> ParsedUserAgent {
        let (browser, engine) = self.detect_browser(user_agent);
        let parsed = ParsedUserAgent {
            browser,
            engine,
            os: self.detect_os(user_agent),
        };
        tracing::trace!(?parsed, "parsed user agent");
        parsed
    }
}

fn build_browser_parser(entries: Vec<db::BrowserEntry>) -> Result<CompiledParser<BrowserData>> {
    CompiledParser::build(entries.into_iter().map(|e| {
        let (engine_default, engine_versions) = match e.engine {
            Some(eng) => (eng.default, eng.versions),
            None => (None, None),
        };
        (
            e.regex,
            BrowserData {
                name: e.name,
                version_template: e.version,
                engine_default,
                engine_versions,
            },
        )
    }))
}
