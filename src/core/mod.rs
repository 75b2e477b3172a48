pub mod aggregator;
pub mod export;
pub mod links;
pub mod schema;
pub mod table;

pub use crate::domain::model::{EconomicRegionRecord, ResponsePayload};
pub use crate::domain::ports::PageSource;
pub use crate::utils::error::Result;
pub use aggregator::{Aggregator, RegionLookup, ScrapeSettings};
