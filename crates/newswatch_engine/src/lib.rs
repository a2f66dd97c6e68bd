//! Newswatch engine: HTTP fetch, article extraction, state persistence and
//! webhook delivery.
mod extract;
mod fetch;
mod notify;
mod source;
mod store;
mod types;

pub use extract::{latest_article, ExtractError};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use notify::{Notifier, NotifyError, WebhookNotifier};
pub use source::{ArticleSource, PageArticleSource, SourceError};
pub use store::{ArticleStore, StoreError};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
