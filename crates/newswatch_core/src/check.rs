use crate::Article;

/// Side effects planned by the pure layer, executed by the app in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Overwrite the persisted last-known article.
    Record { article: Article },
    /// Deliver a message through the webhook.
    Notify { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    NewArticle,
    Unchanged,
}

/// First-run plan: persist the current article, then announce that the
/// baseline has been recorded.
pub fn plan_initialize(current: &Article) -> Vec<Effect> {
    vec![
        Effect::Record {
            article: current.clone(),
        },
        Effect::Notify {
            message: initialization_message(current),
        },
    ]
}

/// Compare the freshly fetched article against the last-known one and plan
/// what to do about it.
///
/// A missing baseline counts as a new article. An unchanged check notifies
/// but never rewrites the store.
pub fn plan_check(last: Option<&Article>, current: &Article) -> (CheckOutcome, Vec<Effect>) {
    let is_new = match last {
        Some(last) => !last.same_story(current),
        None => true,
    };

    if is_new {
        let effects = vec![
            Effect::Notify {
                message: new_article_message(current),
            },
            Effect::Record {
                article: current.clone(),
            },
        ];
        (CheckOutcome::NewArticle, effects)
    } else {
        let effects = vec![Effect::Notify {
            message: no_update_message(),
        }];
        (CheckOutcome::Unchanged, effects)
    }
}

fn initialization_message(article: &Article) -> String {
    format!(
        "Initialization complete: recorded the latest article.\n{}\n{}",
        article.title, article.url
    )
}

fn new_article_message(article: &Article) -> String {
    format!(
        "New article published!\n{}\n{}",
        article.title, article.url
    )
}

fn no_update_message() -> String {
    "Update check: no new article found.".to_string()
}
