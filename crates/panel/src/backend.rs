//! Rendering backend port.
//!
//! The backend turns a parameter mapping into a regenerated plot
//! document and hands back the document's path.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::params::PlotParams;

/// Path of the plot-generation endpoint
pub const GENERATE_ENDPOINT: &str = "/generate-lissajous";

/// Success body returned by the backend
#[derive(Clone, Debug, Deserialize)]
pub struct PlotResponse {
    /// Path of the regenerated plot document
    pub html_path: String,
}

/// Failure modes of a generation request
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend answered with a non-2xx status
    #[error("plot generation failed with HTTP {0}")]
    Status(u16),
    /// The request never produced a response
    #[error("plot generation request failed: {0}")]
    Transport(String),
    /// The response body did not match the expected shape
    #[error("malformed plot generation response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Plot generation port
///
/// `?Send` because the browser implementation's futures hold `JsValue`s;
/// all dispatch happens on the single UI thread.
#[async_trait(?Send)]
pub trait PlotBackend {
    /// Request a regenerated plot for the given parameters
    async fn generate(&self, params: &PlotParams) -> Result<PlotResponse>;
}

/// Append a cache-defeating query parameter so the browser refetches the
/// regenerated document instead of reusing a cached copy.
pub fn cache_busted(path: &str, now_ms: u64) -> String {
    format!("{path}?t={now_ms}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_parses() {
        let resp: PlotResponse = serde_json::from_str(r#"{"html_path":"/plots/x.html"}"#).unwrap();
        assert_eq!(resp.html_path, "/plots/x.html");
    }

    #[test]
    fn missing_path_field_is_malformed() {
        let err = serde_json::from_str::<PlotResponse>("{}").unwrap_err();
        let err = BackendError::from(err);
        assert!(err.to_string().starts_with("malformed"));
    }

    #[test]
    fn non_string_path_is_malformed() {
        assert!(serde_json::from_str::<PlotResponse>(r#"{"html_path":3}"#).is_err());
    }

    #[test]
    fn cache_busted_appends_the_timestamp() {
        assert_eq!(
            cache_busted("/plots/x.html", 1_712_000_000_000),
            "/plots/x.html?t=1712000000000"
        );
    }
}
