use std::sync::Mutex;

use newswatch_app::run::run;
use newswatch_core::Article;
use newswatch_engine::{
    ArticleSource, ArticleStore, ExtractError, Notifier, NotifyError, SourceError,
};
use tempfile::TempDir;

/// Always serves the same article, as a page that never changes would.
struct FixedSource {
    article: Article,
}

#[async_trait::async_trait]
impl ArticleSource for FixedSource {
    async fn latest_article(&self) -> Result<Article, SourceError> {
        Ok(self.article.clone())
    }
}

/// Simulates a page whose structure no longer matches the selector.
struct FailingSource;

#[async_trait::async_trait]
impl ArticleSource for FailingSource {
    async fn latest_article(&self) -> Result<Article, SourceError> {
        Err(SourceError::Extract(ExtractError::TitleMarkerMissing(
            "h3.p-news-list-item__title".to_string(),
        )))
    }
}

#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingNotifier {
    fn failing() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        self.messages.lock().unwrap().push(message.to_string());
        if self.fail {
            Err(NotifyError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

fn store_in(temp: &TempDir) -> ArticleStore {
    ArticleStore::new(temp.path().join("latest_article.json"))
}

#[tokio::test]
async fn first_run_initializes_then_reports_no_update() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    let source = FixedSource {
        article: Article::new("A1", "http://x/1"),
    };
    let notifier = RecordingNotifier::default();

    run(&source, &store, &notifier).await;

    let messages = notifier.messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("Initialization complete"));
    assert!(messages[0].contains("A1"));
    assert!(messages[0].contains("http://x/1"));
    assert!(messages[1].contains("no new article"));

    assert_eq!(store.load().unwrap(), Some(Article::new("A1", "http://x/1")));
}

#[tokio::test]
async fn changed_article_notifies_and_overwrites_baseline() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.save(&Article::new("A1", "http://x/1")).unwrap();

    let source = FixedSource {
        article: Article::new("A2", "http://x/2"),
    };
    let notifier = RecordingNotifier::default();

    run(&source, &store, &notifier).await;

    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("A2"));
    assert!(messages[0].contains("http://x/2"));

    assert_eq!(store.load().unwrap(), Some(Article::new("A2", "http://x/2")));
}

#[tokio::test]
async fn unchanged_check_notifies_without_rewriting() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.save(&Article::new("A1", "http://x/1")).unwrap();
    let before = std::fs::read_to_string(store.path()).unwrap();

    let source = FixedSource {
        article: Article::new("A1", "http://x/1"),
    };

    // Two consecutive runs with no page change: "no new article" both
    // times, state file byte-identical throughout.
    for _ in 0..2 {
        let notifier = RecordingNotifier::default();
        run(&source, &store, &notifier).await;

        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("no new article"));
    }

    let after = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn webhook_failure_still_updates_baseline() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.save(&Article::new("A1", "http://x/1")).unwrap();

    let source = FixedSource {
        article: Article::new("A2", "http://x/2"),
    };
    let notifier = RecordingNotifier::failing();

    run(&source, &store, &notifier).await;

    // Delivery was attempted, failed, and the run carried on to persist.
    assert_eq!(notifier.messages().len(), 1);
    assert_eq!(store.load().unwrap(), Some(Article::new("A2", "http://x/2")));
}

#[tokio::test]
async fn fetch_failure_is_contained() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    let notifier = RecordingNotifier::default();

    run(&FailingSource, &store, &notifier).await;

    assert!(notifier.messages().is_empty());
    assert_eq!(store.load().unwrap(), None);
}
