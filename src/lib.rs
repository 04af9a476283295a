mod db;
mod detector;
mod embedded;
mod error;
mod helpers;
mod literal;
mod parser;
mod parser_data;
mod substitution;
mod types;
mod ua_parser;

pub mod avatar;
pub mod version;

pub use detector::EnvironmentDetector;
pub use embedded::UNKNOWN_VERSION;
pub use error::{Error, Result};
pub use types::*;
pub use ua_parser::{UaParser, UserAgentParser};
pub use version::{VersionComparator, VersionLike};
