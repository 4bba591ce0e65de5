// Aggregator client - calls the dictionary service and adapts its answers
//
// Two decode paths with different contracts:
// - exact lookup is null-tolerant: a not-found answer becomes Ok(None)
// - pattern lists are null-intolerant: a missing body is a ContractViolation
// Transport failures are propagated by both and never turned into None.

use crate::aggregator::transport::{DictionaryTransport, RemoteResponse};
use crate::dictionary::endpoints;
use crate::dictionary::Entry;
use crate::server::ErrorBody;
use reqwest::Url;
use std::sync::Arc;

/// Default location of the dictionary service
pub const DEFAULT_DICTIONARY_URL: &str = "http://localhost:9091";

/// Error types for aggregator client calls
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("Transport failure: {0}")]
    Transport(String),
    /// The dictionary service answered with a status this call does not accept
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },
    /// A list endpoint answered successfully without a body
    #[error("Missing response body from {url}: expected a list of entries")]
    ContractViolation { url: String },
    /// The body was present but is not the expected JSON shape
    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
    /// The configured base URL cannot have request paths appended
    #[error("Invalid dictionary service URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}

impl ClientError {
    /// True for failures of the network call itself
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Transport(_) | ClientError::UnexpectedStatus { .. }
        )
    }
}

/// Client for the dictionary service's lookup endpoints
#[derive(Clone)]
pub struct AggregatorClient {
    transport: Arc<dyn DictionaryTransport>,
    base_url: Url,
}

impl AggregatorClient {
    /// Create a client for the dictionary service at `base_url`
    pub fn new(transport: Arc<dyn DictionaryTransport>, base_url: &str) -> Result<Self, ClientError> {
        let invalid = |message: String| ClientError::InvalidUrl {
            url: base_url.to_string(),
            message,
        };

        let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }

        Ok(Self {
            transport,
            base_url: url,
        })
    }

    /// Create a client for the default dictionary service location
    pub fn with_default_url(transport: Arc<dyn DictionaryTransport>) -> Result<Self, ClientError> {
        Self::new(transport, DEFAULT_DICTIONARY_URL)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Look up a word's definition.
    ///
    /// # Returns
    /// `Ok(Some(entry))` when the word exists, `Ok(None)` when the dictionary
    /// service reports it as not found, `Err` when the call itself failed.
    pub async fn get_definition_for(&self, word: &str) -> Result<Option<Entry>, ClientError> {
        let url = if is_dot_segment(word) {
            self.query_endpoint(endpoints::ENTRY_BY_WORD, endpoints::WORD_PARAM, word)
        } else {
            self.path_endpoint(&[endpoints::GET_WORD, word])
        };
        crate::debug!("Fetching definition for '{}' from {}", word, url);

        let response = self.transport.get(&url).await?;
        decode_optional_entry(&url, response)
    }

    pub async fn get_words_starting_with(&self, prefix: &str) -> Result<Vec<Entry>, ClientError> {
        self.fetch_pattern(endpoints::STARTING_WITH, endpoints::PREFIX_PARAM, prefix)
            .await
    }

    pub async fn get_words_that_contain(&self, fragment: &str) -> Result<Vec<Entry>, ClientError> {
        self.fetch_pattern(endpoints::THAT_CONTAIN, endpoints::SUBSTRING_PARAM, fragment)
            .await
    }

    pub async fn get_words_ending_with(&self, suffix: &str) -> Result<Vec<Entry>, ClientError> {
        self.fetch_pattern(endpoints::ENDING_WITH, endpoints::SUFFIX_PARAM, suffix)
            .await
    }

    pub async fn get_words_that_contain_consecutive_letters(&self) -> Result<Vec<Entry>, ClientError> {
        let url = self.path_endpoint(&[endpoints::CONSECUTIVE_LETTERS]);
        self.fetch_list(url).await
    }

    async fn fetch_pattern(
        &self,
        endpoint: &str,
        param: &str,
        pattern: &str,
    ) -> Result<Vec<Entry>, ClientError> {
        let url = if is_dot_segment(pattern) {
            self.query_endpoint(endpoint, param, pattern)
        } else {
            self.path_endpoint(&[endpoint, pattern])
        };
        self.fetch_list(url).await
    }

    async fn fetch_list(&self, url: String) -> Result<Vec<Entry>, ClientError> {
        crate::debug!("Fetching entry list from {}", url);

        let response = self.transport.get(&url).await?;
        decode_entry_list(&url, response)
    }

    /// Append percent-encoded path segments to the base URL.
    /// An empty final segment leaves a trailing slash.
    fn path_endpoint(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        // Infallible: cannot-be-a-base URLs are rejected in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.to_string()
    }

    /// `<base>/<endpoint>?<param>=<value>`
    fn query_endpoint(&self, endpoint: &str, param: &str, value: &str) -> String {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push(endpoint);
        }
        url.query_pairs_mut().append_pair(param, value);
        url.to_string()
    }
}

/// URL parsing collapses "." and ".." path segments (also in their `%2E`
/// forms), so these values travel in the query string instead.
fn is_dot_segment(value: &str) -> bool {
    value == "." || value == ".."
}

/// Decode an exact-lookup response.
///
/// A 404 carrying the dictionary service's error body, an empty body and a
/// JSON `null` all mean "unknown word". A bare 404 means the route itself is
/// missing and, like any other non-2xx status, is a transport failure.
fn decode_optional_entry(url: &str, response: RemoteResponse) -> Result<Option<Entry>, ClientError> {
    if response.status == 404 && serde_json::from_str::<ErrorBody>(&response.body).is_ok() {
        crate::debug!("Dictionary service has no entry at {}", url);
        return Ok(None);
    }
    if !response.is_success() {
        return Err(ClientError::UnexpectedStatus {
            url: url.to_string(),
            status: response.status,
        });
    }
    if !response.has_body() {
        return Ok(None);
    }

    serde_json::from_str::<Entry>(&response.body)
        .map(Some)
        .map_err(|e| ClientError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
}

/// Decode a pattern-query response. The body must be a JSON array;
/// an absent body fails instead of defaulting to an empty list.
fn decode_entry_list(url: &str, response: RemoteResponse) -> Result<Vec<Entry>, ClientError> {
    if !response.is_success() {
        return Err(ClientError::UnexpectedStatus {
            url: url.to_string(),
            status: response.status,
        });
    }
    if !response.has_body() {
        crate::warn!("Dictionary service returned no body for list endpoint {}", url);
        return Err(ClientError::ContractViolation {
            url: url.to_string(),
        });
    }

    serde_json::from_str::<Vec<Entry>>(&response.body).map_err(|e| ClientError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
