// src/core/net.rs

// Cookie-keeping HTTP session for the portal (ASP.NET ties the postback
// chain to its session cookie).

use std::time::Duration;

use log::debug;
use reqwest::{Client, Response};

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

/// What the scraper needs from an HTTP client. `Session` is the real one;
/// tests drive the scraper with canned pages.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<String>;
    async fn post_form(&self, url: &str, fields: &[(String, String)]) -> Result<String>;
}

pub struct Session {
    client: Client,
}

impl Session {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for Session {
    async fn get(&self, url: &str) -> Result<String> {
        debug!("GET {url}");
        let resp = self.client.get(url).send().await?;
        body_if_ok(resp, url).await
    }

    /// Form-encoded POST, fields sent in the given order.
    async fn post_form(&self, url: &str, fields: &[(String, String)]) -> Result<String> {
        debug!("POST {url} ({} fields)", fields.len());
        let resp = self.client.post(url).form(fields).send().await?;
        body_if_ok(resp, url).await
    }
}

async fn body_if_ok(resp: Response, url: &str) -> Result<String> {
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { status: status.as_u16(), url: url.to_string() });
    }
    Ok(resp.text().await?)
}
