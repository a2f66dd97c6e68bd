use newswatch_app::config::AppConfig;
use newswatch_app::{logging, run};
use newswatch_engine::{
    ArticleStore, FetchSettings, PageArticleSource, ReqwestFetcher, WebhookNotifier,
};

fn main() {
    let config = AppConfig::from_env();
    logging::initialize(config.log_destination);

    if config.webhook_url.is_none() {
        log::warn!("NEWSWATCH_WEBHOOK_URL is not set; notifications will not be delivered.");
    }
    log::info!("Watching {} (state file {:?})", config.target_url, config.state_file);

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let source = PageArticleSource::new(
        Box::new(fetcher),
        config.target_url.clone(),
        config.title_selector.clone(),
    );
    let store = ArticleStore::new(config.state_file.clone());
    let notifier = WebhookNotifier::new(config.webhook_url.clone());

    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    runtime.block_on(run::run(&source, &store, &notifier));
}
