// Infrastructure: HTTP client for the remote solver service.
//
// The service is opaque: it receives one JSON problem document and answers
// with one JSON result document. No streaming, no authentication, and no
// retry policy here; a retry is a fresh user-initiated submission.

use crate::application::mappers::{result_from_response, SolveRequest, SolveResponse};
use crate::domain::SolveResult;

/// Endpoint the original deployment of the service listens on.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/optimize";

/// Why a solve attempt failed after validation passed.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    /// The service could not be reached at all.
    #[error("could not reach the solver service: {0}")]
    TransportFailure(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("solver service rejected the request (HTTP {status}): {detail}")]
    ServiceRejected { status: u16, detail: String },

    /// The service answered 2xx but the body is not a result document.
    #[error("solver service returned an unreadable response: {0}")]
    MalformedResponse(#[source] reqwest::Error),
}

/// Client for the solver service's optimize endpoint.
#[derive(Debug, Clone)]
pub struct SolverClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SolverClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Use a preconfigured `reqwest` client (timeouts, proxies, and so on).
    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one solve request and await the result.
    ///
    /// Exactly one attempt: failures map into [`SolveError`] and are never
    /// retried here. The call only suspends; it holds no locks and touches
    /// no shared state, so the caller stays free to keep editing.
    pub async fn solve(&self, request: &SolveRequest) -> Result<SolveResult, SolveError> {
        tracing::debug!(endpoint = %self.endpoint, "submitting solve request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(SolveError::TransportFailure)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "solver service rejected the request");
            return Err(SolveError::ServiceRejected {
                status: status.as_u16(),
                detail,
            });
        }

        let body: SolveResponse = response.json().await.map_err(|err| {
            if err.is_decode() {
                SolveError::MalformedResponse(err)
            } else {
                SolveError::TransportFailure(err)
            }
        })?;

        let result = result_from_response(body);
        tracing::debug!(status = %result.status, "solve completed");
        Ok(result)
    }
}
