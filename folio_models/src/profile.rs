use serde::{Deserialize, Serialize};
use url::Url;

/// Static content of the profile card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub subtitle: String,
    pub about: String,
    /// Path or URL of the profile picture.
    pub picture: Option<String>,
    pub links: Vec<ProfileLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub title: String,
    pub url: Url,
}

impl ProfileLink {
    /// Whether the link leaves the page (opened in a new tab) as opposed to
    /// e.g. a `mailto:` link.
    pub fn is_external(&self) -> bool {
        matches!(self.url.scheme(), "http" | "https")
    }
}
