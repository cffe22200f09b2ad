//! External service integrations and process plumbing

pub mod fetcher;
pub mod logging;
pub mod space_apis;

pub use fetcher::{FetchError, HttpFetcher, JsonFetcher};
pub use logging::init_tracing;
pub use space_apis::{Query, SpaceApis};
