//! Plot generation over the browser fetch API.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use lissajous_web_panel::{
    BackendError, PlotBackend, PlotParams, PlotResponse, GENERATE_ENDPOINT,
};

/// `PlotBackend` POSTing the parameter mapping to the rendering
/// service and parsing the returned document path.
pub struct HttpPlotBackend;

impl HttpPlotBackend {
    fn request(params: &PlotParams) -> Result<Request> {
        let body = serde_json::to_string(params).map_err(BackendError::Malformed)?;

        let headers = Headers::new().map_err(transport)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(transport)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_headers(headers.as_ref());
        opts.set_body(&JsValue::from_str(&body));

        Request::new_with_str_and_init(GENERATE_ENDPOINT, &opts).map_err(transport)
    }
}

#[async_trait(?Send)]
impl PlotBackend for HttpPlotBackend {
    async fn generate(&self, params: &PlotParams) -> Result<PlotResponse> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
        let request = Self::request(params)?;

        let resp_val = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport)?;
        let resp: Response = resp_val.dyn_into().map_err(transport)?;

        if !resp.ok() {
            return Err(BackendError::Status(resp.status()).into());
        }

        let text = JsFuture::from(resp.text().map_err(transport)?)
            .await
            .map_err(transport)?
            .as_string()
            .ok_or_else(|| anyhow!("response body is not text"))?;
        let response = serde_json::from_str(&text).map_err(BackendError::Malformed)?;
        Ok(response)
    }
}

/// Wrap an opaque JS error into the transport failure bucket
fn transport(err: JsValue) -> anyhow::Error {
    BackendError::Transport(format!("{err:?}")).into()
}
