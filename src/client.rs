use anyhow::{Context, Result};
use reqwest::Url;
use serde_json::Value;

use crate::types::Credential;

/// Thin wrapper around the HTTP client that injects the API key into every request.
pub struct MapsClient {
    http: reqwest::Client,
    base_url: Url,
    credential: Credential,
    verbose: bool,
}

impl MapsClient {
    pub fn new(base_url: &str, credential: Credential, verbose: bool) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("gmaps-smoke/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            http,
            base_url,
            credential,
            verbose,
        })
    }

    /// Build the full request URL for `path` with `params` and the given key.
    pub fn request_url(&self, path: &str, params: &[(&str, String)], key: &str) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path)
            .with_context(|| format!("Invalid endpoint path: {path}"))?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
            .append_pair("key", key);
        Ok(url)
    }

    /// GET `path` and parse the body as JSON. Any error here is a transport error.
    pub async fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        if self.verbose {
            let shown = self.request_url(path, params, "<redacted>")?;
            eprintln!("  GET {shown}");
        }

        let url = self.request_url(path, params, self.credential.expose())?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("request to {path} failed"))?;

        let status = response.status();
        if self.verbose {
            eprintln!("  HTTP {status}");
        }

        response
            .json::<Value>()
            .await
            .with_context(|| format!("response from {path} is not valid JSON (HTTP {status})"))
    }
}

/// Parse the service root, making sure it ends with a slash so relative joins keep its path.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Url::parse(&normalized).with_context(|| format!("Invalid base URL: {raw}"))
}
