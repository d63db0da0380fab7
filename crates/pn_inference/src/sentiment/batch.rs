use pn_core::{
    round_to, Article, BatchAnalysis, BatchStatistics, Classification, Result, SentimentResult,
};
use tracing::{debug, info};
use super::SentimentAnalyzer;

impl SentimentAnalyzer {
    /// Scores every article in order and aggregates the results.
    ///
    /// An empty list gives empty results with zeroed statistics. The first
    /// model failure aborts the batch.
    pub fn analyze_batch(&self, articles: &[Article], target_party: Option<&str>) -> Result<BatchAnalysis> {
        if articles.is_empty() {
            return Ok(BatchAnalysis::default());
        }

        let mut results = Vec::with_capacity(articles.len());
        for (i, article) in articles.iter().enumerate() {
            let result = self.score_article(article, target_party)?;
            debug!(
                "📰 {}/{} {} {} ({:+.4})",
                i + 1,
                articles.len(),
                result.classification.emoji(),
                article.title,
                result.compound_score
            );
            results.push(result);
        }

        let statistics = summarize(&results);
        info!(
            "✨ Analyzed {} articles{}: {} overall ({:.2}% positive, {:.2}% neutral, {:.2}% negative)",
            statistics.total_articles,
            target_party.map(|p| format!(" for {}", p.trim())).unwrap_or_default(),
            statistics.overall_sentiment,
            statistics.positive_percentage,
            statistics.neutral_percentage,
            statistics.negative_percentage,
        );

        Ok(BatchAnalysis { results, statistics })
    }
}

/// Aggregate statistics over per-article results.
///
/// The overall label comes from the average compound score, so it can
/// disagree with the majority of per-article labels.
pub fn summarize(results: &[SentimentResult]) -> BatchStatistics {
    if results.is_empty() {
        return BatchStatistics::default();
    }

    let mut stats = BatchStatistics {
        total_articles: results.len(),
        ..Default::default()
    };
    let mut total_compound = 0.0;
    let mut total_confidence = 0.0;

    for result in results {
        match result.classification {
            Classification::Positive => stats.positive_count += 1,
            Classification::Neutral => stats.neutral_count += 1,
            Classification::Negative => stats.negative_count += 1,
        }
        total_compound += result.compound_score;
        total_confidence += result.confidence;
    }

    let total = results.len() as f64;
    let percentage = |count: usize| round_to(count as f64 / total * 100.0, 2);
    stats.positive_percentage = percentage(stats.positive_count);
    stats.neutral_percentage = percentage(stats.neutral_count);
    stats.negative_percentage = percentage(stats.negative_count);

    let average_compound = total_compound / total;
    stats.average_compound_score = round_to(average_compound, 4);
    stats.average_confidence = round_to(total_confidence / total, 2);
    stats.overall_sentiment = Classification::from_compound(average_compound);
    stats
}
