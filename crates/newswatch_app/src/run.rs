//! One-shot orchestrator: initialize the baseline if absent, then check
//! for a new article. Every failure is logged and contained here; the
//! process always completes both phases and exits cleanly.

use newswatch_core::{plan_check, plan_initialize, Article, CheckOutcome, Effect};
use newswatch_engine::{ArticleSource, ArticleStore, Notifier};

pub async fn run(source: &dyn ArticleSource, store: &ArticleStore, notifier: &dyn Notifier) {
    initialize(source, store, notifier).await;
    check_for_new(source, store, notifier).await;
    log::info!("Run complete.");
}

/// First-run setup: when no article has been recorded yet, capture the
/// current one as the baseline and announce it. A failed fetch here is
/// non-fatal; the check phase attempts its own fetch regardless.
async fn initialize(source: &dyn ArticleSource, store: &ArticleStore, notifier: &dyn Notifier) {
    if load_last(store).is_some() {
        log::debug!("Baseline already recorded; skipping initialization.");
        return;
    }

    log::info!("No recorded article; capturing the current latest.");
    match source.latest_article().await {
        Ok(current) => {
            log::info!("Initializing baseline with {:?}.", current.title);
            apply_effects(plan_initialize(&current), store, notifier).await;
        }
        Err(err) => log::error!("Initialization fetch failed: {err}"),
    }
}

/// The check-and-compare cycle: fetch, load the baseline, plan, execute.
async fn check_for_new(source: &dyn ArticleSource, store: &ArticleStore, notifier: &dyn Notifier) {
    log::info!("Checking for a new article...");
    let current = match source.latest_article().await {
        Ok(article) => article,
        Err(err) => {
            log::error!("Check failed: {err}");
            return;
        }
    };

    let last = load_last(store);
    let (outcome, effects) = plan_check(last.as_ref(), &current);
    match outcome {
        CheckOutcome::NewArticle => log::info!("New article found: {}", current.title),
        CheckOutcome::Unchanged => log::info!("No new article."),
    }
    apply_effects(effects, store, notifier).await;
}

/// A load failure means we cannot tell what was seen before; treat it as
/// no baseline and let the run continue.
fn load_last(store: &ArticleStore) -> Option<Article> {
    store.load().unwrap_or_else(|err| {
        log::warn!("Failed to read recorded article from {:?}: {err}", store.path());
        None
    })
}

/// Execute planned effects in order. A failed effect is logged and never
/// stops the remaining ones.
async fn apply_effects(effects: Vec<Effect>, store: &ArticleStore, notifier: &dyn Notifier) {
    for effect in effects {
        match effect {
            Effect::Record { article } => match store.save(&article) {
                Ok(()) => log::info!("Recorded latest article: {}", article.title),
                Err(err) => {
                    log::error!("Failed to record article to {:?}: {err}", store.path())
                }
            },
            Effect::Notify { message } => match notifier.notify(&message).await {
                Ok(()) => log::info!("Notification delivered: {message}"),
                Err(err) => log::error!("Notification failed: {err}"),
            },
        }
    }
}
