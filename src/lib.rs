pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::{HttpPageSource, ScraperDocument};
pub use config::AppConfig;
pub use core::{Aggregator, RegionLookup, ScrapeSettings};
pub use domain::model::{EconomicRegionRecord, RequestPayload, ResponsePayload};
pub use utils::error::{EiError, Result};
