pub mod error;
pub mod models;
pub mod news;
pub mod sentiment;
pub mod types;

pub use error::{Error, Result};
pub use models::{GeneralScores, LexiconScores, PolarityModel};
pub use news::{NewsQuery, NewsSource, SortBy};
pub use sentiment::{
    round_to, BatchAnalysis, BatchStatistics, Classification, PartyContext, SentimentResult,
};
pub use types::{Article, ArticleSource};
