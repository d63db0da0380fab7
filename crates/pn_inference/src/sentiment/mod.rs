use std::fmt;
use std::sync::Arc;
use pn_core::{round_to, Article, Classification, PolarityModel, Result, SentimentResult};

pub mod batch;
pub mod party;

pub use batch::summarize;
pub use party::adjust_for_party;

/// Weight of the lexicon model in the ensemble compound score.
pub const LEXICON_WEIGHT: f64 = 0.7;
/// Weight of the general polarity model.
pub const GENERAL_WEIGHT: f64 = 0.3;
/// Added to confidence when both models land in the same class.
pub const AGREEMENT_BONUS: f64 = 20.0;
pub const CONFIDENCE_FLOOR: f64 = 30.0;
pub const CONFIDENCE_CEILING: f64 = 100.0;

/// Ensemble sentiment scorer over an injected polarity model.
#[derive(Clone)]
pub struct SentimentAnalyzer {
    model: Arc<dyn PolarityModel>,
}

impl fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentAnalyzer")
            .field("model", &self.model.name())
            .finish()
    }
}

impl SentimentAnalyzer {
    pub fn new(model: Arc<dyn PolarityModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Scores a single text.
    ///
    /// Missing, empty or whitespace-only text yields
    /// [`SentimentResult::neutral`]. Model failures are returned as errors.
    pub fn score(&self, text: Option<&str>) -> Result<SentimentResult> {
        let text = match text.map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => return Ok(SentimentResult::neutral()),
        };

        let lexicon = self.model.lexicon_scores(text)?.validate()?;
        let general = self.model.general_scores(text)?.validate()?;

        let compound = LEXICON_WEIGHT * lexicon.compound + GENERAL_WEIGHT * general.polarity;

        let mut result = SentimentResult {
            confidence: confidence(compound, lexicon.compound, general.polarity),
            positive: round_to(lexicon.positive, 4),
            neutral: round_to(lexicon.neutral, 4),
            negative: round_to(lexicon.negative, 4),
            subjectivity: round_to(general.subjectivity, 4),
            vader_compound: round_to(lexicon.compound, 4),
            textblob_polarity: round_to(general.polarity, 4),
            ..SentimentResult::neutral()
        };
        result.set_compound(compound);
        Ok(result)
    }

    /// Scores an article, giving the headline double weight.
    pub fn score_article(&self, article: &Article, target_party: Option<&str>) -> Result<SentimentResult> {
        let text = article_text(article);
        let base = self.score(Some(&text))?;

        Ok(match target_party {
            Some(party) => adjust_for_party(base, &text, party),
            None => base,
        })
    }
}

/// `title. title. description`
pub fn article_text(article: &Article) -> String {
    format!("{title}. {title}. {}", article.description(), title = article.title)
}

/// `|compound| * 100`, plus the agreement bonus, kept within [30, 100].
pub fn confidence(compound: f64, lexicon_compound: f64, general_polarity: f64) -> f64 {
    let base = compound.abs() * 100.0;
    let agree = Classification::from_compound(lexicon_compound)
        == Classification::from_compound(general_polarity);
    let bonus = if agree { AGREEMENT_BONUS } else { 0.0 };
    round_to((base + bonus).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING), 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HybridModel, ScriptedModel};
    use pn_core::Error;

    fn scripted(model: ScriptedModel) -> SentimentAnalyzer {
        SentimentAnalyzer::new(Arc::new(model))
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let analyzer = scripted(ScriptedModel::new().failing_on(""));
        assert_eq!(analyzer.score(Some("")).unwrap(), SentimentResult::neutral());
        assert_eq!(analyzer.score(None).unwrap(), SentimentResult::neutral());
        assert_eq!(analyzer.score(Some("   \n")).unwrap(), SentimentResult::neutral());

        let neutral = SentimentResult::neutral();
        assert_eq!(neutral.classification, Classification::Neutral);
        assert_eq!(neutral.confidence, 30.0);
        assert_eq!(neutral.neutral, 1.0);
    }

    #[test]
    fn test_ensemble_weighting() {
        let analyzer = scripted(ScriptedModel::new().with("rally", 0.5, 0.2));
        let result = analyzer.score(Some("huge rally")).unwrap();

        assert_eq!(result.compound_score, 0.41);
        assert_eq!(result.classification, Classification::Positive);
        assert_eq!(result.vader_compound, 0.5);
        assert_eq!(result.textblob_polarity, 0.2);
        assert_eq!(result.positive, 0.5);
        assert_eq!(result.subjectivity, 0.5);
        // both models positive: 41 + 20
        assert_eq!(result.confidence, 61.0);
        assert!(!result.party_specific);
    }

    #[test]
    fn test_disagreement_drops_bonus_and_floor_applies() {
        let analyzer = scripted(ScriptedModel::new().with("mixed", 0.1, -0.2));
        let result = analyzer.score(Some("mixed signals")).unwrap();

        // 0.07 - 0.06 = 0.01
        assert_eq!(result.compound_score, 0.01);
        assert_eq!(result.classification, Classification::Neutral);
        assert_eq!(result.confidence, 30.0);
    }

    #[test]
    fn test_confidence_bounds() {
        assert_eq!(confidence(1.0, 1.0, 1.0), 100.0);
        assert_eq!(confidence(-1.0, -1.0, -1.0), 100.0);
        assert_eq!(confidence(0.0, 0.0, 0.0), 30.0);
        assert_eq!(confidence(0.0, 0.5, -0.5), 30.0);
        assert_eq!(confidence(0.25, 0.3, 0.1), 45.0);
    }

    #[test]
    fn test_classification_is_derived_from_compound() {
        let analyzer = SentimentAnalyzer::new(Arc::new(HybridModel::new()));
        let texts = [
            "BJP wins massive victory",
            "Opposition suffers humiliating defeat amid corruption scandal",
            "The assembly session was adjourned until Monday",
            "Not a good day for the ruling alliance",
            "Great, excellent, wonderful, amazing, best ever!!!",
            "Horrible, terrible, disgusting, awful, worst ever!!!",
        ];
        for text in texts {
            let result = analyzer.score(Some(text)).unwrap();
            assert_eq!(
                result.classification,
                Classification::from_compound(result.compound_score),
                "{}",
                text
            );
            assert!((30.0..=100.0).contains(&result.confidence), "{}", text);
            assert!((-1.0..=1.0).contains(&result.compound_score), "{}", text);
        }
    }

    #[test]
    fn test_score_is_idempotent() {
        let analyzer = SentimentAnalyzer::new(Arc::new(HybridModel::new()));
        let text = "Congress criticized over delayed relief, but supporters remain hopeful";
        assert_eq!(analyzer.score(Some(text)).unwrap(), analyzer.score(Some(text)).unwrap());
    }

    #[test]
    fn test_model_failure_is_not_neutral() {
        let analyzer = scripted(ScriptedModel::new().failing_on("boom"));
        assert!(matches!(analyzer.score(Some("boom")), Err(Error::Model(_))));
    }

    #[test]
    fn test_out_of_range_model_output_is_an_error() {
        let analyzer = scripted(ScriptedModel::new().with("odd", 1.7, 0.0));
        assert!(matches!(analyzer.score(Some("odd")), Err(Error::Model(_))));
    }

    #[test]
    fn test_article_text_duplicates_title() {
        let article = Article::new("BJP wins", "record turnout");
        assert_eq!(article_text(&article), "BJP wins. BJP wins. record turnout");

        let untitled = Article { description: None, ..Article::new("", "") };
        assert_eq!(article_text(&untitled), ". . ");
    }

    #[test]
    fn test_score_article_without_party() {
        let analyzer = scripted(ScriptedModel::new().with("wins", 0.6, 0.4));
        let result = analyzer.score_article(&Article::new("BJP wins", ""), None).unwrap();
        assert!(!result.party_specific);
        assert!(result.party_context.is_none());
        assert_eq!(result.compound_score, 0.54);
    }
}
