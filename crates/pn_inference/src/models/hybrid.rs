use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use pn_core::{Error, GeneralScores, LexiconScores, PolarityModel, Result};
use vader_sentiment::SentimentIntensityAnalyzer;
use super::pattern::PatternLexicon;

/// VADER for the lexicon signal, pattern-style adjective lexicon for
/// polarity and subjectivity.
pub struct HybridModel {
    vader: SentimentIntensityAnalyzer<'static>,
    pattern: PatternLexicon,
}

impl HybridModel {
    pub fn new() -> Self {
        Self {
            vader: SentimentIntensityAnalyzer::new(),
            pattern: PatternLexicon::new(),
        }
    }
}

impl Default for HybridModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HybridModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HybridModel")
            .field("vader", &"<SentimentIntensityAnalyzer>")
            .field("pattern", &self.pattern)
            .finish()
    }
}

fn vader_value(scores: &HashMap<&str, f64>, key: &str) -> Result<f64> {
    scores
        .get(key)
        .copied()
        .ok_or_else(|| Error::Model(format!("VADER output is missing '{}'", key)))
}

impl PolarityModel for HybridModel {
    fn name(&self) -> &str {
        "VADER+Pattern"
    }

    fn lexicon_scores(&self, text: &str) -> Result<LexiconScores> {
        let scores = panic::catch_unwind(AssertUnwindSafe(|| self.vader.polarity_scores(text)))
            .map_err(|_| Error::Model("VADER panicked while scoring text".to_string()))?;

        LexiconScores {
            positive: vader_value(&scores, "pos")?,
            neutral: vader_value(&scores, "neu")?,
            negative: vader_value(&scores, "neg")?,
            compound: vader_value(&scores, "compound")?,
        }
        .validate()
    }

    fn general_scores(&self, text: &str) -> Result<GeneralScores> {
        self.pattern.analyze(text).validate()
    }
}
