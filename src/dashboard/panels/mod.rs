//! The four dashboard panels
//!
//! APOD, rover and news are [FetchPanel]s driven by
//! [run_fetch_panel](super::controller::run_fetch_panel); the map panel never
//! talks to an upstream and only formats the last click.

mod apod;
mod map;
mod news;
mod rover;

pub use apod::ApodPanel;
pub use map::{MAP_CENTER, MAP_ZOOM, run_map_panel};
pub use news::NewsPanel;
pub use rover::RoverPanel;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use serde_json::Value as JsonValue;

    use crate::config::{Config, LogFormat};
    use crate::dashboard::RenderContext;
    use crate::services::fetcher::{FetchError, JsonFetcher};
    use crate::services::space_apis::SpaceApis;

    /// Canned fetcher that records every URL it is asked for
    pub struct StubFetcher {
        response: Mutex<Option<Result<JsonValue, FetchError>>>,
        pub calls: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        pub fn ok(payload: JsonValue) -> Arc<Self> {
            Arc::new(Self {
                response: Mutex::new(Some(Ok(payload))),
                calls: Mutex::new(Vec::new()),
            })
        }

        pub fn err(error: FetchError) -> Arc<Self> {
            Arc::new(Self {
                response: Mutex::new(Some(Err(error))),
                calls: Mutex::new(Vec::new()),
            })
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl JsonFetcher for StubFetcher {
        async fn fetch(
            &self,
            url: &str,
            _params: &[(&str, String)],
        ) -> Result<JsonValue, FetchError> {
            self.calls.lock().unwrap().push(url.to_string());
            self.response
                .lock()
                .unwrap()
                .take()
                .expect("stub fetcher called more than once")
        }
    }

    pub fn apis(fetcher: Arc<StubFetcher>) -> SpaceApis {
        let config = Config {
            host: None,
            port: 8501,
            nasa_api_key: "test-key".to_string(),
            nasa_api_url: "https://nasa.test".to_string(),
            space_news_api_url: "https://news.test/v4".to_string(),
            log_format: LogFormat::Json,
        };
        SpaceApis::new(fetcher, &config)
    }

    pub fn context() -> RenderContext {
        let today = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        RenderContext::initial(today, today)
    }
}
