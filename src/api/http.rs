//! Blocking HTTP implementation of the collection API.
//!
//! Runs only on fetch threads, never on the UI thread, so blocking calls
//! are fine. Non-2xx responses are decoded into the structured error body
//! the server emits; anything that prevents a decoded answer (connection
//! failures, timeouts, malformed bodies) becomes a transport error.

use crate::api::{IncidentApi, IncidentPayload, ListPage, ListParams};
use crate::model::{ApiError, ErrorBody, Incident};
use reqwest::blocking::{Client, Response};
use std::time::Duration;
use tracing::warn;

/// Default request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Collection API client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Create a client for the API rooted at `base_url`
    /// (e.g. `http://127.0.0.1:5000/api`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ApiError::Transport {
                reason: err.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn incidents_url(&self) -> String {
        format!("{}/incidents", self.base_url)
    }

    fn incident_url(&self, id: &str) -> String {
        format!("{}/incidents/{}", self.base_url, id)
    }

    /// Decode a response into `T`, converting non-2xx answers into the
    /// structured error taxonomy.
    fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return response.json::<T>().map_err(|err| ApiError::Transport {
                reason: format!("invalid response body: {err}"),
            });
        }
        match response.json::<ErrorBody>() {
            Ok(body) => Err(body.into_api_error()),
            Err(err) => {
                warn!(%status, %err, "undecodable error body");
                Err(ApiError::Request {
                    message: format!("HTTP {status}"),
                })
            }
        }
    }

    fn transport(err: reqwest::Error) -> ApiError {
        ApiError::Transport {
            reason: err.to_string(),
        }
    }
}

impl IncidentApi for HttpApi {
    fn list_incidents(&self, params: &ListParams) -> Result<ListPage, ApiError> {
        let response = self
            .client
            .get(self.incidents_url())
            .query(&params.to_query())
            .send()
            .map_err(Self::transport)?;
        Self::decode(response)
    }

    fn get_incident(&self, id: &str) -> Result<Incident, ApiError> {
        let response = self
            .client
            .get(self.incident_url(id))
            .send()
            .map_err(Self::transport)?;
        Self::decode(response)
    }

    fn create_incident(&self, payload: &IncidentPayload) -> Result<Incident, ApiError> {
        let response = self
            .client
            .post(self.incidents_url())
            .json(payload)
            .send()
            .map_err(Self::transport)?;
        Self::decode(response)
    }

    fn update_incident(
        &self,
        id: &str,
        payload: &IncidentPayload,
    ) -> Result<Incident, ApiError> {
        let response = self
            .client
            .patch(self.incident_url(id))
            .json(payload)
            .send()
            .map_err(Self::transport)?;
        Self::decode(response)
    }
}
