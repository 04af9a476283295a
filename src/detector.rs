use crate::embedded::detect_react_native;
use crate::types::*;
use crate::ua_parser::UserAgentParser;
use crate::version::{VersionComparator, VersionLike};

/// Canonical identity of the current runtime environment.
///
/// Computed once at construction and read-only afterwards, so a detector can
/// be shared across threads freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentDetector {
    env: NormalizedEnvironment,
    os: RawDescriptor,
}

impl EnvironmentDetector {
    /// Detect the environment from the host's user agent.
    ///
    /// A React Native host (user-agent marker or product hint) is reported as
    /// such before any parser output is considered.
    pub fn detect(parser: &impl UserAgentParser, host: &HostEnvironment) -> Self {
        let parsed = parser.parse(&host.user_agent);

        let env = match detect_react_native(host) {
            Some(version) => NormalizedEnvironment {
                name: BrowserName::ReactNative,
                version: Some(version),
                engine: None,
                engine_version: None,
            },
            None => NormalizedEnvironment::from_raw(
                parsed.browser().name(),
                parsed.browser().version(),
                parsed.engine().name(),
                parsed.engine().version(),
            ),
        };

        tracing::debug!(
            name = %env.name,
            version = ?env.version,
            engine = ?env.engine,
            "detected environment"
        );

        Self { env, os: parsed.os }
    }

    /// Use an explicit browser description instead of live detection.
    ///
    /// The description goes through the same name tables; the OS still comes
    /// from the host's user agent.
    pub fn with_browser_info(
        parser: &impl UserAgentParser,
        host: &HostEnvironment,
        info: &BrowserInfo,
    ) -> Self {
        let env = NormalizedEnvironment::from_raw(
            Some(info.name.as_str()),
            info.version.as_deref(),
            info.engine.name(),
            info.engine.version(),
        );
        if env.name == BrowserName::Unknown {
            tracing::debug!(raw = %info.name, "unrecognized browser in explicit browser info");
        }

        Self {
            env,
            os: parser.parse(&host.user_agent).os,
        }
    }

    pub fn environment(&self) -> &NormalizedEnvironment {
        &self.env
    }

    pub fn name(&self) -> BrowserName {
        self.env.name
    }

    pub fn version(&self) -> Option<&str> {
        self.env.version.as_deref()
    }

    pub fn engine(&self) -> Option<EngineName> {
        self.env.engine
    }

    pub fn engine_version(&self) -> Option<&str> {
        self.env.engine_version.as_deref()
    }

    /// OS name as reported by the parser, not normalized.
    pub fn os(&self) -> Option<&str> {
        self.os.name()
    }

    pub fn os_version(&self) -> Option<&str> {
        self.os.version()
    }

    pub fn is_chrome(&self) -> bool {
        self.env.name == BrowserName::Chrome
    }

    pub fn is_firefox(&self) -> bool {
        self.env.name == BrowserName::Firefox
    }

    pub fn is_safari(&self) -> bool {
        self.env.name == BrowserName::Safari
    }

    pub fn is_electron(&self) -> bool {
        self.env.name == BrowserName::Electron
    }

    pub fn is_react_native(&self) -> bool {
        self.env.name == BrowserName::ReactNative
    }

    pub fn is_edge(&self) -> bool {
        self.env.name == BrowserName::Edge
    }

    pub fn is_opera(&self) -> bool {
        self.env.name == BrowserName::Opera
    }

    pub fn is_nwjs(&self) -> bool {
        self.env.name == BrowserName::NwJs
    }

    pub fn is_chromium_based(&self) -> bool {
        self.env.engine == Some(EngineName::Blink)
    }

    pub fn is_webkit_based(&self) -> bool {
        self.env.engine == Some(EngineName::WebKit)
    }

    pub fn is_gecko_based(&self) -> bool {
        self.env.engine == Some(EngineName::Gecko)
    }

    /// `None` when the browser version is unknown.
    pub fn is_version_greater_than(&self, version: impl VersionLike) -> Option<bool> {
        self.version_comparator().greater_than(version)
    }

    /// `None` when the browser version is unknown.
    pub fn is_version_less_than(&self, version: impl VersionLike) -> Option<bool> {
        self.version_comparator().less_than(version)
    }

    /// Major-version equality; `None` when the browser version is unknown.
    pub fn is_version_equal_to(&self, version: impl VersionLike) -> Option<bool> {
        self.version_comparator().equal_to(version)
    }

    pub fn is_engine_version_greater_than(&self, version: impl VersionLike) -> Option<bool> {
        self.engine_version_comparator().greater_than(version)
    }

    pub fn is_engine_version_less_than(&self, version: impl VersionLike) -> Option<bool> {
        self.engine_version_comparator().less_than(version)
    }

    pub fn is_engine_version_equal_to(&self, version: impl VersionLike) -> Option<bool> {
        self.engine_version_comparator().equal_to(version)
    }

    fn version_comparator(&self) -> VersionComparator<'_> {
        VersionComparator::new(self.version())
    }

    fn engine_version_comparator(&self) -> VersionComparator<'_> {
        VersionComparator::new(self.engine_version())
    }
}
