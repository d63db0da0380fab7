//! Display text derived from batch statistics.

use std::fmt;
use std::str::FromStr;
use pn_core::{BatchAnalysis, BatchStatistics, Classification, Error, Result};
use serde::{Deserialize, Serialize};

/// Kinds of score [`explain_score`] knows how to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreKind {
    Compound,
    Confidence,
    Subjectivity,
}

impl FromStr for ScoreKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "compound" => Ok(ScoreKind::Compound),
            "confidence" => Ok(ScoreKind::Confidence),
            "subjectivity" => Ok(ScoreKind::Subjectivity),
            other => Err(Error::InvalidInput(format!(
                "unknown score kind '{}', expected compound, confidence or subjectivity",
                other
            ))),
        }
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScoreKind::Compound => "compound",
            ScoreKind::Confidence => "confidence",
            ScoreKind::Subjectivity => "subjectivity",
        };
        f.write_str(name)
    }
}

/// Band tables: the first entry whose lower bound the value reaches wins.
/// The last entry of each table is the catch-all.
const COMPOUND_BANDS: &[(f64, &str)] = &[
    (0.5, "Strongly positive tone: the coverage is clearly favorable."),
    (0.1, "Mildly positive tone: the coverage leans favorable."),
    (-0.1, "Neutral tone: the coverage is largely factual or balanced."),
    (-0.5, "Mildly negative tone: the coverage leans unfavorable."),
    (f64::NEG_INFINITY, "Strongly negative tone: the coverage is clearly unfavorable."),
];

const CONFIDENCE_BANDS: &[(f64, &str)] = &[
    (80.0, "The analysis is very certain about this classification."),
    (60.0, "The analysis is fairly confident; both models mostly agree."),
    (40.0, "The analysis is moderately confident; the signals are somewhat mixed."),
    (f64::NEG_INFINITY, "The sentiment is ambiguous or unclear; treat this classification with caution."),
];

const SUBJECTIVITY_BANDS: &[(f64, &str)] = &[
    (0.7, "Highly opinionated text with strong personal views."),
    (0.4, "A mix of facts and opinions."),
    (0.2, "Mostly factual reporting with a little opinion."),
    (f64::NEG_INFINITY, "Objective, fact-based reporting."),
];

fn band(table: &'static [(f64, &'static str)], value: f64) -> &'static str {
    table
        .iter()
        .find(|(lower, _)| value >= *lower)
        .or_else(|| table.last())
        .map(|(_, text)| *text)
        .unwrap_or_default()
}

/// One fixed sentence describing `value` as a score of `kind`.
///
/// NaN and infinities are rejected with [`Error::InvalidInput`].
pub fn explain_score(kind: ScoreKind, value: f64) -> Result<&'static str> {
    if !value.is_finite() {
        return Err(Error::InvalidInput(format!(
            "{} score must be a finite number, got {}",
            kind, value
        )));
    }

    Ok(match kind {
        // positive bands are exclusive at their lower bound
        ScoreKind::Compound => {
            if value > 0.5 {
                COMPOUND_BANDS[0].1
            } else if value > 0.1 {
                COMPOUND_BANDS[1].1
            } else {
                band(&COMPOUND_BANDS[2..], value)
            }
        }
        ScoreKind::Confidence => band(CONFIDENCE_BANDS, value),
        ScoreKind::Subjectivity => band(SUBJECTIVITY_BANDS, value),
    })
}

/// Percentages as the dashboard prints them: `60.0`, `33.33`.
pub fn format_percent(value: f64) -> String {
    format!("{:?}", value)
}

/// Bullet points summarizing a batch.
pub fn insights(stats: &BatchStatistics) -> Vec<String> {
    let mut insights = Vec::with_capacity(4);

    insights.push(format!(
        "Overall sentiment is **{}** across all articles",
        stats.overall_sentiment
    ));

    let majority = [
        (Classification::Positive, "positive"),
        (Classification::Negative, "negative"),
        (Classification::Neutral, "neutral"),
    ]
    .into_iter()
    .find(|(class, _)| stats.percentage(*class) > 50.0);
    match majority {
        Some((class, label)) => insights.push(format!(
            "Majority of coverage is **{}** ({}%)",
            label,
            format_percent(stats.percentage(class))
        )),
        None => insights.push("Coverage is **mixed** with no dominant sentiment".to_string()),
    }

    let confidence = stats.average_confidence;
    let tier = if confidence >= 80.0 {
        "very high"
    } else if confidence >= 60.0 {
        "high"
    } else if confidence >= 40.0 {
        "moderate"
    } else {
        "low"
    };
    insights.push(format!(
        "Analysis confidence is **{}** ({}%)",
        tier,
        format_percent(confidence)
    ));

    if (stats.positive_percentage - stats.negative_percentage).abs() < 10.0 {
        insights.push("Coverage is **balanced** between positive and negative sentiments".to_string());
    }

    insights
}

fn dominance_sentence(stats: &BatchStatistics) -> String {
    let (class, pct) = stats.dominant();
    let label = class.as_str().to_lowercase();
    if pct > 60.0 {
        format!("Coverage is strongly {} ({}% of articles).", label, format_percent(pct))
    } else if pct > 40.0 {
        format!("Coverage leans {} ({}% of articles).", label, format_percent(pct))
    } else {
        "Sentiment is evenly distributed, with no clear direction.".to_string()
    }
}

fn reliability_sentence(confidence: f64) -> String {
    let tier = if confidence >= 75.0 {
        "very reliable"
    } else if confidence >= 60.0 {
        "reliable"
    } else if confidence >= 45.0 {
        "moderately reliable"
    } else {
        "somewhat uncertain"
    };
    format!(
        "With an average confidence of {}%, these results are {}.",
        format_percent(confidence),
        tier
    )
}

fn tone_sentence(compound: f64) -> String {
    let tone = if compound > 0.5 {
        "strongly positive"
    } else if compound > 0.1 {
        "mildly positive"
    } else if compound >= -0.1 {
        "neutral"
    } else if compound >= -0.5 {
        "mildly negative"
    } else {
        "strongly negative"
    };
    format!("The average tone score of {:.4} reads as {}.", compound, tone)
}

/// Short narrative for a whole batch.
pub fn human_readable_summary(batch: &BatchAnalysis) -> String {
    let stats = &batch.statistics;
    if stats.total_articles == 0 {
        return "No articles were analyzed, so there is no sentiment to summarize.".to_string();
    }

    let noun = if stats.total_articles == 1 { "article" } else { "articles" };
    [
        format!(
            "We analyzed {} {} and the overall sentiment is {}.",
            stats.total_articles,
            noun,
            stats.overall_sentiment.as_str().to_lowercase()
        ),
        dominance_sentence(stats),
        reliability_sentence(stats.average_confidence),
        tone_sentence(stats.average_compound_score),
    ]
    .join(" ")
}
