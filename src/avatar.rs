//! Avatar URLs for meeting participants.

use md5::{Digest, Md5};
use serde::Deserialize;

pub const DEFAULT_GRAVATAR_BASE_URL: &str = "https://seccdn.libravatar.org/avatar/";
pub const DEFAULT_AVATAR_URL_PREFIX: &str = "https://abotars.jitsi.net/meeple/";

const GRAVATAR_URL_SUFFIX: &str = "?d=404&size=200";

/// Identity fields an avatar can be derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub avatar_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// Avatar service generating images from a hashed key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AvatarService {
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
    #[serde(default)]
    pub url_suffix: String,
}

fn default_url_prefix() -> String {
    DEFAULT_AVATAR_URL_PREFIX.to_string()
}

impl Default for AvatarService {
    fn default() -> Self {
        Self {
            url_prefix: default_url_prefix(),
            url_suffix: String::new(),
        }
    }
}

/// Avatar URL for a participant: the Gravatar of their e-mail when they have
/// one, otherwise a generated avatar keyed by avatar id or participant id.
pub fn avatar_url(participant: &Participant, service: &AvatarService) -> Option<String> {
    if let Some(email) = participant.email.as_deref() {
        return Some(gravatar_url(email, None));
    }

    let key = participant
        .avatar_id
        .as_deref()
        .filter(|k| !k.is_empty())
        .or(participant.id.as_deref().filter(|k| !k.is_empty()))?;
    Some(format!(
        "{}{}{}",
        service.url_prefix,
        md5_hex(key),
        service.url_suffix
    ))
}

/// Gravatar URL for `key`. E-mail addresses are hashed; anything else is
/// assumed to be a hash already and used verbatim.
pub fn gravatar_url(key: &str, base_url: Option<&str>) -> String {
    let base_url = base_url.unwrap_or(DEFAULT_GRAVATAR_BASE_URL);
    if is_email(key) {
        format!("{}{}{}", base_url, md5_hex(key), GRAVATAR_URL_SUFFIX)
    } else {
        format!("{}{}{}", base_url, key, GRAVATAR_URL_SUFFIX)
    }
}

fn is_email(key: &str) -> bool {
    key.find('@').is_some_and(|idx| idx > 0)
}

/// Lowercase hex MD5 of the trimmed, lowercased key.
fn md5_hex(key: &str) -> String {
    hex::encode(Md5::digest(key.trim().to_lowercase().as_bytes()))
}
