//! Dgraph HTTP sink
//!
//! Talks to the `/alter` and `/mutate` endpoints of a Dgraph alpha. The
//! alpha answers HTTP 200 even for rejected requests, so every response
//! body is checked for an `errors` member.

use crate::error::{Result, SinkError};
use crate::sink::GraphSink;
use bytes::{BufMut, Bytes, BytesMut};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_DGRAPH_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DgraphConfig {
    /// Base URL of the alpha HTTP endpoint.
    pub url: String,
    /// Deadline applied to each request.
    pub timeout: Option<Duration>,
}

impl Default for DgraphConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DGRAPH_URL.to_string(),
            timeout: None,
        }
    }
}

/// Which call a response belongs to; selects the error variant.
#[derive(Debug, Clone, Copy)]
enum Call {
    Alter,
    Mutate,
}

#[derive(Debug, Deserialize)]
struct DgraphResponse {
    #[serde(default)]
    errors: Option<Vec<DgraphError>>,
}

#[derive(Debug, Deserialize)]
struct DgraphError {
    #[serde(default)]
    message: String,
}

pub struct DgraphSink {
    client: reqwest::Client,
    base: String,
}

impl DgraphSink {
    pub fn new(config: &DgraphConfig) -> Result<Self> {
        let base = config.url.trim_end_matches('/').to_string();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(SinkError::InvalidConfig(format!(
                "Dgraph URL must start with http:// or https://, got {:?}",
                config.url
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base,
        })
    }

    pub fn alter_url(&self) -> String {
        format!("{}/alter", self.base)
    }

    pub fn mutate_url(&self, commit_now: bool) -> String {
        if commit_now {
            format!("{}/mutate?commitNow=true", self.base)
        } else {
            format!("{}/mutate", self.base)
        }
    }

    async fn check(response: reqwest::Response, call: Call) -> Result<()> {
        let status = response.status();
        let body = response.bytes().await?;

        let reject = |message: String| match call {
            Call::Alter => SinkError::Schema(message),
            Call::Mutate => SinkError::Mutation(message),
        };

        if !status.is_success() {
            return Err(reject(format!(
                "HTTP {}: {}",
                status,
                String::from_utf8_lossy(&body)
            )));
        }

        let parsed: DgraphResponse = serde_json::from_slice(&body).map_err(|e| {
            reject(format!("unreadable response ({}): {}", e, String::from_utf8_lossy(&body)))
        })?;
        if let Some(errors) = parsed.errors.filter(|e| !e.is_empty()) {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            return Err(reject(messages.join("; ")));
        }

        debug!("{:?} accepted: {}", call, String::from_utf8_lossy(&body));
        Ok(())
    }
}

/// Wrap a JSON array payload as a Dgraph set-mutation body.
pub fn mutation_body(payload: &[u8]) -> Bytes {
    let mut body = BytesMut::with_capacity(payload.len() + 8);
    body.put_slice(br#"{"set":"#);
    body.put_slice(payload);
    body.put_u8(b'}');
    body.freeze()
}

impl GraphSink for DgraphSink {
    async fn alter(&self, schema: &str) -> Result<()> {
        info!("Applying schema at {}", self.alter_url());
        let response = self
            .client
            .post(self.alter_url())
            .body(schema.to_string())
            .send()
            .await?;
        Self::check(response, Call::Alter).await
    }

    async fn mutate(&self, payload: Bytes, commit_now: bool) -> Result<()> {
        info!("Sending {} byte mutation to {}", payload.len(), self.mutate_url(commit_now));
        let response = self
            .client
            .post(self.mutate_url(commit_now))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(mutation_body(&payload))
            .send()
            .await?;
        Self::check(response, Call::Mutate).await
    }
}
