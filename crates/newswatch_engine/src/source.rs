use newswatch_core::Article;
use thiserror::Error;
use url::Url;

use crate::{ExtractError, FailureKind, FetchError, Fetcher};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("page structure mismatch: {0}")]
    Extract(#[from] ExtractError),
}

/// Something that can produce the newest article on the watched page.
#[async_trait::async_trait]
pub trait ArticleSource: Send + Sync {
    async fn latest_article(&self) -> Result<Article, SourceError>;
}

/// Production source: fetch the target page over HTTP and extract the
/// first news-item title and its link.
pub struct PageArticleSource {
    fetcher: Box<dyn Fetcher>,
    target_url: String,
    title_selector: String,
}

impl PageArticleSource {
    pub fn new(
        fetcher: Box<dyn Fetcher>,
        target_url: impl Into<String>,
        title_selector: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            target_url: target_url.into(),
            title_selector: title_selector.into(),
        }
    }
}

#[async_trait::async_trait]
impl ArticleSource for PageArticleSource {
    async fn latest_article(&self) -> Result<Article, SourceError> {
        let output = self.fetcher.fetch(&self.target_url).await?;

        // Relative links resolve against where the page actually came
        // from, which may differ from the target after redirects.
        let base = Url::parse(&output.metadata.final_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let article = crate::latest_article(&output.html, &base, &self.title_selector)?;
        log::debug!(
            "Extracted latest article {:?} from {} ({} bytes, {})",
            article.title,
            output.metadata.final_url,
            output.metadata.byte_len,
            output.metadata.encoding,
        );
        Ok(article)
    }
}
