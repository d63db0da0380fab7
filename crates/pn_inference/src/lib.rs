use pn_core::{Error, Result};

pub mod insights;
pub mod models;
pub mod report;
pub mod sentiment;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Polarity model to use: `hybrid` (default) or `dummy`.
    pub model_name: Option<String>,
}

impl Config {
    pub fn with_model(model_name: impl Into<String>) -> Self {
        Self { model_name: Some(model_name.into()) }
    }

    pub fn model_name(&self) -> &str {
        self.model_name.as_deref().unwrap_or(models::DEFAULT_MODEL)
    }

    pub fn validate(&self) -> Result<()> {
        if models::AVAILABLE_MODELS.contains(&self.model_name().to_lowercase().as_str()) {
            Ok(())
        } else {
            Err(Error::Config(format!(
                "unknown model '{}', available: {}",
                self.model_name(),
                models::AVAILABLE_MODELS.join(", ")
            )))
        }
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::insights::{explain_score, human_readable_summary, insights, ScoreKind};
    pub use super::models::{create_model, shared_model};
    pub use super::report::{Report, ReportMeta};
    pub use super::sentiment::SentimentAnalyzer;
    pub use pn_core::{
        Article, BatchAnalysis, BatchStatistics, Classification, Error, PolarityModel, Result,
        SentimentResult,
    };
}

pub use insights::{explain_score, format_percent, human_readable_summary, insights, ScoreKind};
pub use models::create_model;
pub use report::{Report, ReportMeta};
pub use sentiment::SentimentAnalyzer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(Config::default().validate().is_ok());
        assert_eq!(Config::default().model_name(), "hybrid");
        assert!(Config::with_model("Dummy").validate().is_ok());
        assert!(matches!(
            Config::with_model("deepseek").validate(),
            Err(Error::Config(_))
        ));
    }
}
