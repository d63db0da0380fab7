use std::sync::Arc;
use pn_core::NewsSource;
use pn_inference::SentimentAnalyzer;

pub struct AppState {
    pub analyzer: SentimentAnalyzer,
    /// `None` when no news API key was configured; `/api/news` then answers 503.
    pub news: Option<Arc<dyn NewsSource>>,
}

impl AppState {
    pub fn new(analyzer: SentimentAnalyzer) -> Self {
        Self { analyzer, news: None }
    }

    pub fn with_news(mut self, news: Arc<dyn NewsSource>) -> Self {
        self.news = Some(news);
        self
    }
}
