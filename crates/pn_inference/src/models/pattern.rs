//! General-purpose polarity/subjectivity scorer.
//!
//! Scores follow the pattern approach: sentiment-bearing words (mostly
//! adjectives) carry a polarity in [-1, 1] and a subjectivity in [0, 1].
//! A preceding intensifier scales both, a preceding negation flips and
//! halves the polarity, and the text score is the mean over every matched
//! word.

use std::collections::HashMap;
use pn_core::GeneralScores;

/// (word, polarity, subjectivity)
const ENTRIES: &[(&str, f64, f64)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("positive", 0.227, 0.545),
    ("strong", 0.433, 0.733),
    ("successful", 0.75, 0.95),
    ("happy", 0.8, 1.0),
    ("popular", 0.6, 0.8),
    ("impressive", 1.0, 1.0),
    ("remarkable", 0.75, 0.75),
    ("historic", 0.2, 0.4),
    ("massive", 0.2, 0.9),
    ("huge", 0.4, 0.9),
    ("major", 0.063, 0.5),
    ("record", 0.1, 0.2),
    ("decisive", 0.3, 0.6),
    ("stable", 0.2, 0.4),
    ("clear", 0.1, 0.383),
    ("peaceful", 0.5, 0.6),
    ("fair", 0.7, 0.9),
    ("honest", 0.6, 0.9),
    ("proud", 0.8, 1.0),
    ("hopeful", 0.5, 0.8),
    ("welcome", 0.8, 0.9),
    ("landmark", 0.3, 0.5),
    ("new", 0.136, 0.454),
    ("key", 0.0, 1.0),
    ("important", 0.4, 1.0),
    ("bad", -0.7, 0.667),
    ("poor", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("weak", -0.375, 0.625),
    ("negative", -0.3, 0.4),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("corrupt", -0.5, 0.5),
    ("controversial", -0.25, 0.75),
    ("violent", -0.8, 0.9),
    ("angry", -0.5, 1.0),
    ("unfair", -0.5, 0.9),
    ("dangerous", -0.6, 0.9),
    ("humiliating", -0.7, 0.8),
    ("disappointing", -0.6, 0.7),
    ("wrong", -0.5, 0.9),
    ("sad", -0.5, 1.0),
    ("false", -0.4, 0.6),
    ("illegal", -0.5, 0.5),
    ("chaotic", -0.6, 0.8),
    ("tense", -0.3, 0.6),
    ("uncertain", -0.2, 0.7),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("highly", 1.4),
    ("incredibly", 1.5),
    ("so", 1.2),
    ("too", 1.1),
    ("slightly", 0.5),
    ("somewhat", 0.7),
];

const NEGATIONS: &[&str] = &["not", "never", "no", "n't", "nor", "hardly"];

/// Tokens a negation stays active for before it lapses.
const NEGATION_WINDOW: usize = 3;

#[derive(Debug, Clone)]
pub struct PatternLexicon {
    words: HashMap<&'static str, (f64, f64)>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for PatternLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternLexicon {
    pub fn new() -> Self {
        Self {
            words: ENTRIES.iter().map(|(w, p, s)| (*w, (*p, *s))).collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    pub fn entry(&self, word: &str) -> Option<(f64, f64)> {
        self.words.get(word).copied()
    }

    fn is_negation(token: &str) -> bool {
        NEGATIONS.contains(&token) || token.ends_with("n't")
    }

    pub fn analyze(&self, text: &str) -> GeneralScores {
        let lowered = text.to_lowercase();
        let tokens = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '-'))
            .filter(|t| !t.is_empty());

        let mut assessments: Vec<(f64, f64)> = Vec::new();
        let mut negation_left = 0usize;
        let mut intensity = 1.0;

        for token in tokens {
            if Self::is_negation(token) {
                negation_left = NEGATION_WINDOW;
                continue;
            }
            if let Some(mult) = self.intensifiers.get(token) {
                intensity *= mult;
                continue;
            }

            match self.entry(token) {
                Some((polarity, subjectivity)) => {
                    let mut polarity = polarity * intensity;
                    if negation_left > 0 {
                        polarity *= -0.5;
                    }
                    assessments.push((
                        polarity.clamp(-1.0, 1.0),
                        (subjectivity * intensity).clamp(0.0, 1.0),
                    ));
                    negation_left = 0;
                    intensity = 1.0;
                }
                None => {
                    negation_left = negation_left.saturating_sub(1);
                    intensity = 1.0;
                }
            }
        }

        if assessments.is_empty() {
            return GeneralScores { polarity: 0.0, subjectivity: 0.0 };
        }

        let n = assessments.len() as f64;
        GeneralScores {
            polarity: (assessments.iter().map(|a| a.0).sum::<f64>() / n).clamp(-1.0, 1.0),
            subjectivity: (assessments.iter().map(|a| a.1).sum::<f64>() / n).clamp(0.0, 1.0),
        }
    }
}
