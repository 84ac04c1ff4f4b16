use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::payload::Route;

/// Blocking JSON client for the quiz API.
pub struct ApiClient {
    client: Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Result<Self> {
        // No request timeout: a stuck call blocks until the transport gives up.
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self {
            client,
            base: base.into(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// POST `payload` to `route` and decode the JSON reply.
    pub fn post(&self, route: Route, payload: &[Value]) -> Result<Value> {
        let body = serde_json::to_vec(payload).map_err(Error::Encode)?;
        self.post_bytes(&route.url(&self.base), body)
    }

    pub fn post_bytes(&self, url: &str, body: Vec<u8>) -> Result<Value> {
        info!("POST {} ({} bytes)", url, body.len());

        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        let status = resp.status();
        let text = resp.text()?;
        debug!("{} -> {}", url, status);

        if !status.is_success() {
            return Err(Error::Status {
                code: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|_| Error::NonJsonResponse { body: text })
    }
}
