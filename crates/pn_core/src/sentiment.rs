use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::{Error, Result};

/// Half-width of the neutral dead zone around zero.
pub const NEUTRAL_BAND: f64 = 0.05;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Classification {
    pub const ALL: [Classification; 3] = [
        Classification::Positive,
        Classification::Neutral,
        Classification::Negative,
    ];

    /// Threshold rule shared by every compound-like score.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= NEUTRAL_BAND {
            Classification::Positive
        } else if compound <= -NEUTRAL_BAND {
            Classification::Negative
        } else {
            Classification::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Positive => "Positive",
            Classification::Neutral => "Neutral",
            Classification::Negative => "Negative",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Classification::Positive => "😊",
            Classification::Neutral => "😐",
            Classification::Negative => "😢",
        }
    }

    /// Badge color used next to individual results.
    pub fn color(&self) -> &'static str {
        match self {
            Classification::Positive => "#28a745",
            Classification::Neutral => "#ffc107",
            Classification::Negative => "#dc3545",
        }
    }

    /// Dashboard palette color for charts.
    pub fn chart_color(&self) -> &'static str {
        match self {
            Classification::Positive => "#2ECC71",
            Classification::Neutral => "#F1C40F",
            Classification::Negative => "#E74C3C",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Classification::Positive),
            "neutral" => Ok(Classification::Neutral),
            "negative" => Ok(Classification::Negative),
            other => Err(Error::InvalidInput(format!("unknown classification: {}", other))),
        }
    }
}

/// Rounds half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Party-specific fields, present when an analysis targeted a party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyContext {
    pub target_party: String,
    pub context_adjustment: f64,
    pub original_compound: f64,
    pub context_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub classification: Classification,
    pub compound_score: f64,
    pub confidence: f64,
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub subjectivity: f64,
    pub vader_compound: f64,
    pub textblob_polarity: f64,
    pub party_specific: bool,
    #[serde(flatten)]
    pub party_context: Option<PartyContext>,
}

impl SentimentResult {
    /// Result for text that carries no signal at all.
    pub fn neutral() -> Self {
        Self {
            classification: Classification::Neutral,
            compound_score: 0.0,
            confidence: 30.0,
            positive: 0.0,
            neutral: 1.0,
            negative: 0.0,
            subjectivity: 0.0,
            vader_compound: 0.0,
            textblob_polarity: 0.0,
            party_specific: false,
            party_context: None,
        }
    }

    /// Stores a new compound score and derives the classification from it.
    ///
    /// The score is clamped to [-1, 1] and rounded before classifying, so
    /// `classification == Classification::from_compound(compound_score)`
    /// holds on the stored value.
    pub fn set_compound(&mut self, compound: f64) {
        self.compound_score = round_to(compound.clamp(-1.0, 1.0), 4);
        self.classification = Classification::from_compound(self.compound_score);
    }

    pub fn context_note(&self) -> Option<&str> {
        self.party_context.as_ref().map(|c| c.context_note.as_str())
    }

    pub fn context_adjustment(&self) -> f64 {
        self.party_context
            .as_ref()
            .map(|c| c.context_adjustment)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStatistics {
    pub positive_percentage: f64,
    pub neutral_percentage: f64,
    pub negative_percentage: f64,
    pub positive_count: usize,
    pub neutral_count: usize,
    pub negative_count: usize,
    pub total_articles: usize,
    pub average_compound_score: f64,
    pub average_confidence: f64,
    pub overall_sentiment: Classification,
}

impl BatchStatistics {
    pub fn count(&self, classification: Classification) -> usize {
        match classification {
            Classification::Positive => self.positive_count,
            Classification::Neutral => self.neutral_count,
            Classification::Negative => self.negative_count,
        }
    }

    pub fn percentage(&self, classification: Classification) -> f64 {
        match classification {
            Classification::Positive => self.positive_percentage,
            Classification::Neutral => self.neutral_percentage,
            Classification::Negative => self.negative_percentage,
        }
    }

    /// Class with the highest share; ties resolve in `Classification::ALL` order.
    pub fn dominant(&self) -> (Classification, f64) {
        Classification::ALL
            .iter()
            .map(|c| (*c, self.percentage(*c)))
            .fold((Classification::Neutral, f64::MIN), |best, current| {
                if current.1 > best.1 {
                    current
                } else {
                    best
                }
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchAnalysis {
    pub results: Vec<SentimentResult>,
    pub statistics: BatchStatistics,
}
