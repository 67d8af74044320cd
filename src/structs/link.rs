use serde::{Deserialize, Serialize};

/// Title and url of a link that is about to be saved.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDescriptor {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

impl LinkDescriptor {
    pub fn new(title: &str, url: &str) -> LinkDescriptor {
        LinkDescriptor {
            title: title.to_string(),
            url: url.to_string(),
        }
    }

    /// Lower-cased `"{title} {url}"`, the text keywords are matched against.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.url).to_lowercase()
    }
}
