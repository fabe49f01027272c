//! YouTube Data API client, category resolver and trending-video aggregator.

pub mod aggregate;
pub mod categories;
pub mod client;
pub mod error;
pub mod types;

pub use aggregate::aggregate_category;
pub use categories::resolve_categories;
pub use client::YoutubeClient;
pub use error::YoutubeError;
pub use types::{PopularVideo, TopComment};
