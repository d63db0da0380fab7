use std::fmt;
use pn_core::{Error, GeneralScores, LexiconScores, PolarityModel, Result};

/// Deterministic model that answers from a fixed script.
///
/// The first rule whose key is a substring of the text wins; unmatched text
/// gets zero signal. Meant for tests that need exact scores.
#[derive(Default)]
pub struct ScriptedModel {
    rules: Vec<(String, LexiconScores, GeneralScores)>,
    fail_on: Option<String>,
}

impl fmt::Debug for ScriptedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedModel")
            .field("rules", &self.rules.len())
            .field("fail_on", &self.fail_on)
            .finish()
    }
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule giving `compound` to the lexicon model and `polarity` to
    /// the general one.
    pub fn with(self, key: impl Into<String>, compound: f64, polarity: f64) -> Self {
        let positive = compound.max(0.0);
        let negative = (-compound).max(0.0);
        let lexicon = LexiconScores {
            positive,
            neutral: (1.0 - positive - negative).max(0.0),
            negative,
            compound,
        };
        let general = GeneralScores { polarity, subjectivity: 0.5 };
        self.with_scores(key, lexicon, general)
    }

    pub fn with_scores(mut self, key: impl Into<String>, lexicon: LexiconScores, general: GeneralScores) -> Self {
        self.rules.push((key.into(), lexicon, general));
        self
    }

    /// Makes the model fail on any text containing `key`.
    pub fn failing_on(mut self, key: impl Into<String>) -> Self {
        self.fail_on = Some(key.into());
        self
    }

    fn check(&self, text: &str) -> Result<()> {
        match &self.fail_on {
            Some(key) if text.contains(key.as_str()) => {
                Err(Error::Model(format!("scripted failure on '{}'", key)))
            }
            _ => Ok(()),
        }
    }

    fn rule(&self, text: &str) -> Option<&(String, LexiconScores, GeneralScores)> {
        self.rules.iter().find(|(key, _, _)| text.contains(key.as_str()))
    }
}

impl PolarityModel for ScriptedModel {
    fn name(&self) -> &str {
        "Scripted"
    }

    fn lexicon_scores(&self, text: &str) -> Result<LexiconScores> {
        self.check(text)?;
        Ok(self.rule(text).map(|r| r.1).unwrap_or(LexiconScores {
            positive: 0.0,
            neutral: 1.0,
            negative: 0.0,
            compound: 0.0,
        }))
    }

    fn general_scores(&self, text: &str) -> Result<GeneralScores> {
        self.check(text)?;
        Ok(self
            .rule(text)
            .map(|r| r.2)
            .unwrap_or(GeneralScores { polarity: 0.0, subjectivity: 0.0 }))
    }
}
