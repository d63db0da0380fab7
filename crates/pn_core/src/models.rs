use std::fmt;
use crate::Result;

/// Output of the lexicon model: proportions of the text that read positive,
/// neutral and negative, plus a normalized compound score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconScores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub compound: f64,
}

/// Output of the general polarity model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralScores {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl LexiconScores {
    /// Rejects non-finite values and values outside the documented ranges.
    pub fn validate(self) -> Result<Self> {
        let proportions = [self.positive, self.neutral, self.negative];
        if proportions.iter().any(|v| !v.is_finite() || !(0.0..=1.0).contains(v)) {
            return Err(crate::Error::Model(format!(
                "lexicon proportions out of range: {:?}",
                self
            )));
        }
        if !self.compound.is_finite() || !(-1.0..=1.0).contains(&self.compound) {
            return Err(crate::Error::Model(format!(
                "lexicon compound out of range: {}",
                self.compound
            )));
        }
        Ok(self)
    }
}

impl GeneralScores {
    pub fn validate(self) -> Result<Self> {
        if !self.polarity.is_finite() || !(-1.0..=1.0).contains(&self.polarity) {
            return Err(crate::Error::Model(format!(
                "polarity out of range: {}",
                self.polarity
            )));
        }
        if !self.subjectivity.is_finite() || !(0.0..=1.0).contains(&self.subjectivity) {
            return Err(crate::Error::Model(format!(
                "subjectivity out of range: {}",
                self.subjectivity
            )));
        }
        Ok(self)
    }
}

/// The two polarity signals the sentiment ensemble is built from.
///
/// Implementations are shared read-only across threads.
pub trait PolarityModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Lexicon/heuristic score tuned for short informal text.
    fn lexicon_scores(&self, text: &str) -> Result<LexiconScores>;

    /// General-purpose polarity and subjectivity.
    fn general_scores(&self, text: &str) -> Result<GeneralScores>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_lexicon_scores() {
        let ok = LexiconScores { positive: 0.4, neutral: 0.6, negative: 0.0, compound: 0.7 };
        assert!(ok.validate().is_ok());

        let nan = LexiconScores { compound: f64::NAN, ..ok };
        assert!(matches!(nan.validate(), Err(crate::Error::Model(_))));

        let too_big = LexiconScores { positive: 1.5, ..ok };
        assert!(too_big.validate().is_err());
    }

    #[test]
    fn test_validate_general_scores() {
        assert!(GeneralScores { polarity: -1.0, subjectivity: 1.0 }.validate().is_ok());
        assert!(GeneralScores { polarity: 1.2, subjectivity: 0.5 }.validate().is_err());
        assert!(GeneralScores { polarity: 0.0, subjectivity: f64::INFINITY }.validate().is_err());
    }
}
