pub mod catalog;
pub mod client;
pub mod config;
pub mod logging;

pub use catalog::{find_party, find_state, search_parties, Party, ALL_STATES, PARTIES, STATES};
pub use client::NewsClient;
pub use config::NewsConfig;
pub use logging::init_logging;

pub mod prelude {
    pub use super::catalog::{find_party, find_state, search_parties, Party};
    pub use super::client::NewsClient;
    pub use super::config::NewsConfig;
    pub use pn_core::{Article, Error, NewsQuery, NewsSource, Result, SortBy};
}
