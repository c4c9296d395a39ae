//! Upstream rewrite and detection services, hidden behind sync traits so the
//! service layer never sees transport details. HTTP implementations drive an
//! async `reqwest` client through a dedicated runtime; deployments without
//! configured endpoints get the offline implementations, which always force
//! the local pipeline.

use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;

use crate::config::ServiceEndpoint;

use super::domain::Tone;

/// Error raised by an upstream text service.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("service not configured")]
    Unconfigured,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("service rejected request: {0}")]
    Rejected(String),
    #[error("unusable service payload: {0}")]
    Payload(String),
}

/// Successful upstream rewrite. The originality level is optional because the
/// rewrite service does not always score its own output.
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteOutcome {
    pub humanized_text: String,
    pub originality_level: Option<u8>,
}

/// Raw detector verdict: continuous score plus flagged sentence sections.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionReport {
    pub original_score: f64,
    pub sections: Vec<DetectedSection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectedSection {
    pub text: String,
    pub score: f64,
    pub start_index: usize,
    pub end_index: usize,
}

/// Primary rewrite service.
pub trait RewriteGateway: Send + Sync {
    fn rewrite(&self, text: &str, tone: Option<Tone>) -> Result<RewriteOutcome, GatewayError>;
}

/// Detailed originality/plagiarism service.
pub trait DetectionGateway: Send + Sync {
    fn detect(&self, text: &str) -> Result<DetectionReport, GatewayError>;
}

/// Stand-in used when no rewrite endpoint is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineRewriteGateway;

impl RewriteGateway for OfflineRewriteGateway {
    fn rewrite(&self, _text: &str, _tone: Option<Tone>) -> Result<RewriteOutcome, GatewayError> {
        Err(GatewayError::Unconfigured)
    }
}

/// Stand-in used when no detection endpoint is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineDetectionGateway;

impl DetectionGateway for OfflineDetectionGateway {
    fn detect(&self, _text: &str) -> Result<DetectionReport, GatewayError> {
        Err(GatewayError::Unconfigured)
    }
}

#[derive(Debug, Serialize)]
struct RewriteRequestBody<'a> {
    text: &'a str,
    tone: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RewriteResponseBody {
    humanized_text: String,
    #[serde(default)]
    plagiarism_level: Option<u8>,
}

#[derive(Debug, Serialize)]
struct DetectionRequestBody<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetectionResponseBody {
    #[serde(default)]
    original_score: f64,
    #[serde(default)]
    plagiarized_sections: Vec<DetectionSectionBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetectionSectionBody {
    text: String,
    score: f64,
    #[serde(default)]
    start_index: usize,
    #[serde(default)]
    end_index: usize,
}

/// Result of recovering a rewrite payload from a model's free-text reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedRewrite {
    Parsed(RewriteOutcome),
    Unparsed(String),
}

/// Best-effort extraction of `{humanizedText, plagiarismLevel}` from loose
/// model output: locate the outermost braces and try a strict parse of the
/// slice. Never errors; callers decide what an `Unparsed` reply is worth.
pub fn parse_rewrite_payload(raw: &str) -> ParsedRewrite {
    let candidate = match (raw.find('{'), raw.rfind('}')) {
        (Some(open), Some(close)) if open < close => &raw[open..=close],
        _ => return ParsedRewrite::Unparsed(raw.to_string()),
    };

    match serde_json::from_str::<RewriteResponseBody>(candidate) {
        Ok(body) if !body.humanized_text.trim().is_empty() => {
            ParsedRewrite::Parsed(RewriteOutcome {
                humanized_text: body.humanized_text,
                originality_level: body.plagiarism_level,
            })
        }
        _ => ParsedRewrite::Unparsed(raw.to_string()),
    }
}

/// Rewrite client wrapping the async HTTP stack so synchronous workflows can
/// call it directly, the same shape as the other upstream clients here.
pub struct HttpRewriteClient {
    client: reqwest::Client,
    runtime: Runtime,
    endpoint: ServiceEndpoint,
}

impl HttpRewriteClient {
    pub fn new(endpoint: ServiceEndpoint) -> Result<Self, GatewayError> {
        let runtime = Runtime::new().map_err(|err| GatewayError::Transport(err.to_string()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            runtime,
            endpoint,
        })
    }
}

impl std::fmt::Debug for HttpRewriteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRewriteClient")
            .field("base_url", &self.endpoint.base_url)
            .finish_non_exhaustive()
    }
}

impl RewriteGateway for HttpRewriteClient {
    fn rewrite(&self, text: &str, tone: Option<Tone>) -> Result<RewriteOutcome, GatewayError> {
        let body = RewriteRequestBody {
            text,
            tone: tone.map(Tone::label).unwrap_or_default(),
        };

        let raw = self.runtime.block_on(async {
            let mut request = self.client.post(&self.endpoint.base_url).json(&body);
            if let Some(key) = &self.endpoint.api_key {
                request = request.bearer_auth(key);
            }

            let response = request
                .send()
                .await
                .map_err(|err| GatewayError::Transport(err.to_string()))?;
            let status = response.status();
            let raw = response
                .text()
                .await
                .map_err(|err| GatewayError::Transport(err.to_string()))?;
            if !status.is_success() {
                return Err(GatewayError::Rejected(format!("{status}: {raw}")));
            }
            Ok(raw)
        })?;

        match parse_rewrite_payload(&raw) {
            ParsedRewrite::Parsed(outcome) => Ok(outcome),
            ParsedRewrite::Unparsed(reply) => Err(GatewayError::Payload(format!(
                "no rewrite found in reply of {} bytes",
                reply.len()
            ))),
        }
    }
}

/// Detection client mirroring the rewrite client's runtime wrapping.
pub struct HttpDetectionClient {
    client: reqwest::Client,
    runtime: Runtime,
    endpoint: ServiceEndpoint,
}

impl HttpDetectionClient {
    pub fn new(endpoint: ServiceEndpoint) -> Result<Self, GatewayError> {
        let runtime = Runtime::new().map_err(|err| GatewayError::Transport(err.to_string()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            runtime,
            endpoint,
        })
    }
}

impl std::fmt::Debug for HttpDetectionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDetectionClient")
            .field("base_url", &self.endpoint.base_url)
            .finish_non_exhaustive()
    }
}

impl DetectionGateway for HttpDetectionClient {
    fn detect(&self, text: &str) -> Result<DetectionReport, GatewayError> {
        let body = DetectionRequestBody { text };

        let parsed: DetectionResponseBody = self.runtime.block_on(async {
            let mut request = self.client.post(&self.endpoint.base_url).json(&body);
            if let Some(key) = &self.endpoint.api_key {
                request = request.header("X-API-Key", key);
            }

            let response = request
                .send()
                .await
                .map_err(|err| GatewayError::Transport(err.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                return Err(GatewayError::Rejected(status.to_string()));
            }
            response
                .json::<DetectionResponseBody>()
                .await
                .map_err(|err| GatewayError::Payload(err.to_string()))
        })?;

        Ok(DetectionReport {
            original_score: parsed.original_score,
            sections: parsed
                .plagiarized_sections
                .into_iter()
                .map(|section| DetectedSection {
                    text: section.text,
                    score: section.score,
                    start_index: section.start_index,
                    end_index: section.end_index,
                })
                .collect(),
        })
    }
}
