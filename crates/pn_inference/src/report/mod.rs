use chrono::{DateTime, Datelike, Utc};
use pn_core::{Article, BatchAnalysis, BatchStatistics, Classification, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use crate::insights::{format_percent, human_readable_summary, insights};

pub const REPORT_TITLE: &str = "Political News Sentiment Analysis Report";
pub const MAX_ARTICLES: usize = 10;
const TITLE_CHARS: usize = 100;
const DESCRIPTION_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub party: String,
    pub state: Option<String>,
    pub requested_by: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl ReportMeta {
    pub fn new(party: impl Into<String>, state: Option<String>) -> Self {
        Self {
            party: party.into(),
            state,
            requested_by: None,
            generated_at: Utc::now(),
        }
    }

    pub fn requested_by(mut self, name: impl Into<String>) -> Self {
        self.requested_by = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRow {
    pub title: String,
    pub source: String,
    pub published: String,
    pub description: String,
    pub sentiment: Classification,
    pub score: f64,
}

/// Exportable snapshot of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub statistics: BatchStatistics,
    pub insights: Vec<String>,
    pub summary: String,
    pub articles: Vec<ArticleRow>,
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

impl Report {
    /// Pairs `articles` with `batch.results` by position; extra entries on
    /// either side are ignored. At most [`MAX_ARTICLES`] rows are kept.
    pub fn new(meta: ReportMeta, batch: &BatchAnalysis, articles: &[Article]) -> Self {
        let rows = articles
            .iter()
            .zip(&batch.results)
            .take(MAX_ARTICLES)
            .map(|(article, result)| ArticleRow {
                title: truncate(&article.title, TITLE_CHARS),
                source: article.source_name().to_string(),
                published: article.published_date(),
                description: truncate(article.description(), DESCRIPTION_CHARS),
                sentiment: result.classification,
                score: result.compound_score,
            })
            .collect();

        Self {
            meta,
            statistics: batch.statistics.clone(),
            insights: insights(&batch.statistics),
            summary: human_readable_summary(batch),
            articles: rows,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let stats = &self.statistics;

        let _ = writeln!(out, "# {}\n", REPORT_TITLE);

        let _ = writeln!(out, "| | |\n|---|---|");
        let _ = writeln!(
            out,
            "| Report Generated | {} |",
            self.meta.generated_at.format("%B %d, %Y at %I:%M %p")
        );
        let _ = writeln!(
            out,
            "| Analyzed By | {} |",
            self.meta.requested_by.as_deref().unwrap_or("N/A")
        );
        let _ = writeln!(out, "| Political Party | {} |", self.meta.party);
        let _ = writeln!(
            out,
            "| State/UT | {} |",
            self.meta.state.as_deref().unwrap_or("N/A")
        );
        let _ = writeln!(out, "| Articles Analyzed | {} |\n", stats.total_articles);

        let _ = writeln!(out, "## 📈 Overall Sentiment Summary\n");
        let _ = writeln!(out, "| Sentiment | Articles | Percentage |\n|---|---|---|");
        for class in Classification::ALL {
            let _ = writeln!(
                out,
                "| {} {} | {} | {}% |",
                class.emoji(),
                class,
                stats.count(class),
                format_percent(stats.percentage(class))
            );
        }
        let _ = writeln!(
            out,
            "\nOverall: **{}** (average score {:.4}, confidence {}%)\n",
            stats.overall_sentiment,
            stats.average_compound_score,
            format_percent(stats.average_confidence)
        );
        let _ = writeln!(out, "{}\n", self.summary);

        let _ = writeln!(out, "## 💡 Key Insights\n");
        for insight in &self.insights {
            let _ = writeln!(out, "- {}", insight);
        }
        out.push('\n');

        let _ = writeln!(out, "## 📰 Individual Article Sentiments\n");
        if self.articles.is_empty() {
            let _ = writeln!(out, "_No articles._\n");
        }
        for (idx, row) in self.articles.iter().enumerate() {
            let _ = writeln!(out, "### {}. {}\n", idx + 1, row.title);
            let _ = writeln!(out, "- **Source:** {}", row.source);
            let _ = writeln!(out, "- **Published:** {}", row.published);
            let _ = writeln!(out, "- **Sentiment:** {} (Score: {})\n", row.sentiment, row.score);
            if !row.description.is_empty() {
                let _ = writeln!(out, "_{}_\n", row.description);
            }
        }

        let _ = writeln!(out, "---\n");
        let _ = writeln!(
            out,
            "Report generated by Political News Sentiment Analysis System. © {} - For analytical purposes only",
            self.meta.generated_at.year()
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::models::ScriptedModel;
    use crate::sentiment::SentimentAnalyzer;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::new(Arc::new(
            ScriptedModel::new().with("rally", 0.6, 0.4).with("scandal", -0.7, -0.5),
        ))
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("ééééé", 2), "éé...");
    }

    #[test]
    fn test_report_rows_are_capped() {
        let articles: Vec<Article> = (0..12)
            .map(|i| Article::new(format!("BJP rally {}", i), "crowds gather"))
            .collect();
        let batch = analyzer().analyze_batch(&articles, None).unwrap();
        let report = Report::new(ReportMeta::new("BJP", None), &batch, &articles);

        assert_eq!(report.articles.len(), MAX_ARTICLES);
        assert_eq!(report.statistics.total_articles, 12);
        assert_eq!(report.articles[0].sentiment, Classification::Positive);
        assert_eq!(report.insights, insights(&batch.statistics));
    }

    #[test]
    fn test_long_title_is_truncated() {
        let title = "x".repeat(150);
        let articles = vec![Article::new(title, "y".repeat(300))];
        let batch = analyzer().analyze_batch(&articles, None).unwrap();
        let report = Report::new(ReportMeta::new("INC", None), &batch, &articles);

        assert_eq!(report.articles[0].title.chars().count(), 103);
        assert_eq!(report.articles[0].description.chars().count(), 203);
    }

    #[test]
    fn test_markdown_sections() {
        let articles = vec![
            Article::new("AAP rally draws crowds", "Delhi"),
            Article::new("Minister caught in scandal", ""),
        ];
        let batch = analyzer().analyze_batch(&articles, Some("AAP")).unwrap();
        let meta = ReportMeta::new("AAP", Some("Delhi".to_string())).requested_by("analyst");
        let markdown = Report::new(meta, &batch, &articles).to_markdown();

        assert!(markdown.starts_with("# Political News Sentiment Analysis Report"));
        assert!(markdown.contains("| Analyzed By | analyst |"));
        assert!(markdown.contains("| State/UT | Delhi |"));
        assert!(markdown.contains("## 📈 Overall Sentiment Summary"));
        assert!(markdown.contains("## 💡 Key Insights"));
        assert!(markdown.contains("### 1. AAP rally draws crowds"));
        assert!(markdown.contains("### 2. Minister caught in scandal"));
        assert!(markdown.contains("| 😊 Positive | 1 | 50.0% |"));
        assert!(markdown.contains("For analytical purposes only"));
    }

    #[test]
    fn test_json_export() {
        let report = Report::new(ReportMeta::new("BJP", None), &BatchAnalysis::default(), &[]);
        let json = report.to_json().unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
        assert!(report.to_markdown().contains("_No articles._"));
    }
}
