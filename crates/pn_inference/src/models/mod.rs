use std::sync::Arc;
use lazy_static::lazy_static;
use pn_core::{Error, PolarityModel, Result};
use tracing::debug;
use crate::Config;

pub mod dummy;
pub mod hybrid;
pub mod pattern;
#[cfg(any(test, feature = "test-util"))]
pub mod scripted;

pub use dummy::DummyModel;
pub use hybrid::HybridModel;
pub use pattern::PatternLexicon;
#[cfg(any(test, feature = "test-util"))]
pub use scripted::ScriptedModel;

pub const DEFAULT_MODEL: &str = "hybrid";
pub const AVAILABLE_MODELS: &[&str] = &["hybrid", "dummy"];

lazy_static! {
    // VADER lexicon load happens here, once per process.
    static ref SHARED_MODEL: Arc<HybridModel> = Arc::new(HybridModel::new());
}

/// Process-wide hybrid adapter.
pub fn shared_model() -> Arc<dyn PolarityModel> {
    SHARED_MODEL.clone()
}

pub fn create_model(config: Option<Config>) -> Result<Arc<dyn PolarityModel>> {
    let config = config.unwrap_or_default();
    config.validate()?;

    let model: Arc<dyn PolarityModel> = match config.model_name().to_lowercase().as_str() {
        "hybrid" => shared_model(),
        "dummy" => Arc::new(DummyModel::new()),
        other => return Err(Error::Config(format!("unknown model '{}'", other))),
    };
    debug!("polarity model ready: {}", model.name());
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model() {
        let model = create_model(None).unwrap();
        assert_eq!(model.name(), "VADER+Pattern");

        let model = create_model(Some(Config::with_model("dummy"))).unwrap();
        assert_eq!(model.name(), "Dummy");

        assert!(create_model(Some(Config::with_model("bert"))).is_err());
    }

    #[test]
    fn test_shared_model_is_reused() {
        let a = shared_model();
        let b = shared_model();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
