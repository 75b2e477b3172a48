// Adapters layer: concrete implementations of the domain ports.

pub mod html;
pub mod http;

pub use html::ScraperDocument;
pub use http::HttpPageSource;
