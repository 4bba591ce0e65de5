// Aggregator service - pass-through over AggregatorClient
// Results are forwarded unchanged and client errors propagate as-is.

use crate::aggregator::client::{AggregatorClient, ClientError};
use crate::dictionary::Entry;

#[derive(Clone)]
pub struct AggregatorService {
    client: AggregatorClient,
}

impl AggregatorService {
    pub fn new(client: AggregatorClient) -> Self {
        Self { client }
    }

    /// Base URL of the dictionary service this aggregator forwards to
    pub fn upstream(&self) -> &str {
        self.client.base_url()
    }

    /// `None` means the word is unknown, which is not an error here
    pub async fn get_definition_for(&self, word: &str) -> Result<Option<Entry>, ClientError> {
        self.client.get_definition_for(word).await
    }

    pub async fn get_words_starting_with(&self, prefix: &str) -> Result<Vec<Entry>, ClientError> {
        self.client.get_words_starting_with(prefix).await
    }

    pub async fn get_words_that_contain(&self, fragment: &str) -> Result<Vec<Entry>, ClientError> {
        self.client.get_words_that_contain(fragment).await
    }

    pub async fn get_words_ending_with(&self, suffix: &str) -> Result<Vec<Entry>, ClientError> {
        self.client.get_words_ending_with(suffix).await
    }

    pub async fn get_words_that_contain_consecutive_letters(&self) -> Result<Vec<Entry>, ClientError> {
        self.client.get_words_that_contain_consecutive_letters().await
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;
