use axum::{
    extract::{Path, Query, State},
    Json,
};
use pn_core::{Article, BatchAnalysis, BatchStatistics, Error, NewsQuery, SentimentResult};
use pn_inference::{explain_score, human_readable_summary, insights, ScoreKind, SentimentAnalyzer};
use pn_news::{find_party, search_parties, Party, PARTIES, STATES};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;
use crate::error::ApiResult;
use crate::AppState;

/// Largest batch one `/api/analyze` request may carry.
pub const MAX_ARTICLES: usize = 100;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub target_party: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewsRequest {
    pub party: String,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub articles: Option<Vec<Article>>,
    pub results: Vec<SentimentResult>,
    pub statistics: BatchStatistics,
    pub insights: Vec<String>,
    pub summary: String,
}

impl AnalyzeResponse {
    fn from_batch(batch: BatchAnalysis) -> Self {
        Self {
            articles: None,
            insights: insights(&batch.statistics),
            summary: human_readable_summary(&batch),
            results: batch.results,
            statistics: batch.statistics,
        }
    }
}

/// Runs the batch on the blocking pool; the model is CPU-bound.
async fn score_batch(
    analyzer: SentimentAnalyzer,
    articles: Vec<Article>,
    target_party: Option<String>,
) -> pn_core::Result<(BatchAnalysis, Vec<Article>)> {
    tokio::task::spawn_blocking(move || {
        let batch = analyzer.analyze_batch(&articles, target_party.as_deref())?;
        Ok::<_, Error>((batch, articles))
    })
    .await
    .map_err(|e| Error::Model(format!("scoring task failed: {}", e)))?
}

#[derive(Debug, Deserialize)]
pub struct PartySearch {
    pub q: Option<String>,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.analyzer.model_name(),
        "news": state.news.as_ref().map(|n| n.name()),
    }))
}

pub async fn list_parties(Query(search): Query<PartySearch>) -> Json<Vec<&'static Party>> {
    match search.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        Some(term) => Json(search_parties(term)),
        None => Json(PARTIES.iter().collect()),
    }
}

pub async fn list_states() -> Json<&'static [&'static str]> {
    Json(STATES)
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    if request.articles.len() > MAX_ARTICLES {
        return Err(Error::InvalidInput(format!(
            "at most {} articles per request, got {}",
            MAX_ARTICLES,
            request.articles.len()
        ))
        .into());
    }
    let (batch, _) =
        score_batch(state.analyzer.clone(), request.articles, request.target_party).await?;
    Ok(Json(AnalyzeResponse::from_batch(batch)))
}

pub async fn fetch_news(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewsRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let news = state
        .news
        .as_ref()
        .ok_or_else(|| Error::Config("news search is not configured; set NEWS_API_KEY".to_string()))?;

    let party = request.party.trim();
    if party.is_empty() {
        return Err(Error::InvalidInput("party must not be empty".to_string()).into());
    }
    let target = find_party(party).map(|p| p.target_name()).unwrap_or(party);

    let query = NewsQuery::new(target, request.state.clone());
    let articles = news.fetch_articles(&query).await?;
    info!("📰 {} articles for {} from {}", articles.len(), target, news.name());

    let (batch, articles) =
        score_batch(state.analyzer.clone(), articles, Some(target.to_string())).await?;
    let mut response = AnalyzeResponse::from_batch(batch);
    response.articles = Some(articles);
    Ok(Json(response))
}

pub async fn explain(Path((kind, value)): Path<(String, String)>) -> ApiResult<Json<Value>> {
    let kind: ScoreKind = kind.parse()?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("'{}' is not a number", value)))?;
    let explanation = explain_score(kind, value)?;
    Ok(Json(json!({
        "kind": kind,
        "value": value,
        "explanation": explanation,
    })))
}
