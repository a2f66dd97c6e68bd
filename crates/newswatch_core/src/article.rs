/// The newest news entry found on the watched page.
///
/// `url` is always absolute; relative page links are resolved before an
/// `Article` is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub url: String,
}

impl Article {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Two articles are the same story iff their URLs match.
    /// The title is informational; an edited title at the same URL is not
    /// a new story.
    pub fn same_story(&self, other: &Article) -> bool {
        self.url == other.url
    }
}
