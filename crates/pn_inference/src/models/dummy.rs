use std::fmt;
use pn_core::{GeneralScores, LexiconScores, PolarityModel, Result};

const POSITIVE_WORDS: &[&str] = &["good", "great", "win", "wins", "victory", "success", "support", "growth"];
const NEGATIVE_WORDS: &[&str] = &["bad", "loss", "defeat", "scandal", "crisis", "criticized", "fail", "protest"];

/// Offline word-count model with no lexicon data. Handy for demos and smoke
/// runs where the real lexicons are not wanted.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }

    fn counts(text: &str) -> (usize, usize, usize) {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let positive = words.iter().filter(|w| POSITIVE_WORDS.contains(w)).count();
        let negative = words.iter().filter(|w| NEGATIVE_WORDS.contains(w)).count();
        (positive, negative, words.len())
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    fn lexicon_scores(&self, text: &str) -> Result<LexiconScores> {
        let (positive, negative, total) = Self::counts(text);
        if total == 0 {
            return Ok(LexiconScores { positive: 0.0, neutral: 1.0, negative: 0.0, compound: 0.0 });
        }
        let total = total as f64;
        let pos = positive as f64 / total;
        let neg = negative as f64 / total;
        let signal = (positive + negative) as f64;
        Ok(LexiconScores {
            positive: pos,
            neutral: (1.0 - pos - neg).max(0.0),
            negative: neg,
            compound: (positive as f64 - negative as f64) / (signal + 1.0),
        })
    }

    fn general_scores(&self, text: &str) -> Result<GeneralScores> {
        let (positive, negative, total) = Self::counts(text);
        let signal = positive + negative;
        if signal == 0 {
            return Ok(GeneralScores { polarity: 0.0, subjectivity: 0.0 });
        }
        Ok(GeneralScores {
            polarity: (positive as f64 - negative as f64) / signal as f64,
            subjectivity: (signal as f64 / total as f64).min(1.0),
        })
    }
}
