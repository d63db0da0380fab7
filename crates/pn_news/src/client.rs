use async_trait::async_trait;
use pn_core::{Article, Error, NewsQuery, NewsSource, Result};
use scraper::Html;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;
use crate::config::NewsConfig;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    status: String,
    #[serde(default)]
    total_results: Option<u64>,
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the NewsAPI `everything` endpoint.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    config: NewsConfig,
}

impl NewsClient {
    pub fn new(config: NewsConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &NewsConfig {
        &self.config
    }

    /// Full request URL for `query`, key included.
    pub fn search_url(&self, query: &NewsQuery) -> Result<Url> {
        let base = format!("{}/everything", self.config.base_url.trim_end_matches('/'));
        let page_size = self.config.page_size.to_string();
        Url::parse_with_params(
            &base,
            &[
                ("q", query.search_text().as_str()),
                ("language", self.config.language.as_str()),
                ("sortBy", self.config.sort_by.api_value()),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.config.api_key.as_str()),
            ],
        )
        .map_err(|e| Error::Config(format!("invalid news base url '{}': {}", self.config.base_url, e)))
    }
}

#[async_trait]
impl NewsSource for NewsClient {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn fetch_articles(&self, query: &NewsQuery) -> Result<Vec<Article>> {
        let url = self.search_url(query)?;
        info!("🔍 Searching news for \"{}\"", query.search_text());

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("news search returned HTTP {} ({} bytes)", status, body.len());

        let articles = parse_response(&body).map_err(|e| match e {
            Error::Serialization(_) if !status.is_success() => {
                Error::NewsApi(format!("news search failed with HTTP {}", status))
            }
            other => other,
        })?;
        info!("📰 Fetched {} articles", articles.len());
        Ok(articles)
    }
}

/// Parses a search response body, cleaning up article text.
pub fn parse_response(body: &str) -> Result<Vec<Article>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    if response.status != "ok" {
        let message = response
            .message
            .or(response.code)
            .unwrap_or_else(|| format!("status '{}'", response.status));
        return Err(Error::NewsApi(message));
    }
    if let Some(total) = response.total_results {
        debug!("{} total results upstream", total);
    }

    Ok(response
        .articles
        .into_iter()
        .map(|mut article| {
            article.title = strip_html(&article.title);
            article.description = article
                .description
                .as_deref()
                .map(strip_html)
                .filter(|d| !d.is_empty());
            article
        })
        .collect())
}

/// Drops markup some feeds leave in titles and descriptions and collapses
/// whitespace.
pub fn strip_html(text: &str) -> String {
    if !text.contains('<') && !text.contains('&') {
        return text.split_whitespace().collect::<Vec<_>>().join(" ");
    }
    let fragment = Html::parse_fragment(text);
    let plain = fragment.root_element().text().collect::<String>();
    plain.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pn_core::SortBy;

    fn client() -> NewsClient {
        NewsClient::new(NewsConfig::new("test-key").with_sort(SortBy::Popularity)).unwrap()
    }

    #[test]
    fn test_client_requires_key() {
        assert!(matches!(NewsClient::new(NewsConfig::default()), Err(Error::Config(_))));
    }

    #[test]
    fn test_search_url() {
        let query = NewsQuery::new("BJP", Some("Uttar Pradesh".to_string()));
        let url = client().search_url(&query).unwrap();
        assert_eq!(url.path(), "/v2/everything");

        let params: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(params.contains(&("q".into(), "BJP Uttar Pradesh India politics".into())));
        assert!(params.contains(&("language".into(), "en".into())));
        assert!(params.contains(&("sortBy".into(), "popularity".into())));
        assert!(params.contains(&("pageSize".into(), "10".into())));
        assert!(params.contains(&("apiKey".into(), "test-key".into())));
    }

    #[test]
    fn test_bad_base_url() {
        let client = NewsClient::new(NewsConfig::new("k").with_base_url("not a url")).unwrap();
        let query = NewsQuery::new("AAP", None);
        assert!(matches!(client.search_url(&query), Err(Error::Config(_))));
    }

    #[test]
    fn test_parse_ok_response() {
        let body = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {"source": {"id": null, "name": "NDTV"}, "title": "TMC <b>wins</b> bypoll",
                 "description": "<p>Results   declared &amp; counted</p>", "url": "https://example.com/1",
                 "publishedAt": "2024-05-01T08:00:00Z"},
                {"source": {"name": "Mint"}, "title": "DMK rally", "description": null, "url": null}
            ]
        }"#;
        let articles = parse_response(body).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "TMC wins bypoll");
        assert_eq!(articles[0].description(), "Results declared & counted");
        assert_eq!(articles[0].source_name(), "NDTV");
        assert_eq!(articles[1].description, None);
    }

    #[test]
    fn test_parse_error_response() {
        let body = r#"{"status": "error", "code": "apiKeyInvalid", "message": "Your API key is invalid."}"#;
        match parse_response(body) {
            Err(Error::NewsApi(message)) => assert_eq!(message, "Your API key is invalid."),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(parse_response("<html>"), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_strip_html_plain_text() {
        assert_eq!(strip_html("  plain   text "), "plain text");
        assert_eq!(strip_html("<i>a</i> <b>b</b>"), "a b");
    }

    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
        });
        format!("http://{}/v2", addr)
    }

    #[tokio::test]
    async fn test_fetch_articles_from_local_server() {
        let base = serve_once(
            "200 OK",
            r#"{"status":"ok","totalResults":1,"articles":[{"title":"SP gains ground","description":"x","url":"u"}]}"#,
        )
        .await;
        let client = NewsClient::new(NewsConfig::new("k").with_base_url(base)).unwrap();
        let articles = client.fetch_articles(&NewsQuery::new("SP", None)).await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "SP gains ground");
    }

    #[tokio::test]
    async fn test_fetch_reports_api_error() {
        let base = serve_once(
            "401 Unauthorized",
            r#"{"status":"error","code":"apiKeyInvalid","message":"bad key"}"#,
        )
        .await;
        let client = NewsClient::new(NewsConfig::new("k").with_base_url(base)).unwrap();
        let result = client.fetch_articles(&NewsQuery::new("SP", None)).await;
        assert!(matches!(result, Err(Error::NewsApi(m)) if m == "bad key"));
    }
}
