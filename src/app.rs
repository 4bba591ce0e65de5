// Service wiring - turns validated settings into running HTTP services

use crate::aggregator::{self, AggregatorClient, AggregatorService, ReqwestTransport};
use crate::config::{AggregatorSettings, ConfigError, DictionarySettings, Settings};
use crate::dictionary::{self, DictionaryService, StoreError, WordStore};
use crate::logging::LoggingError;
use crate::server::{self, ServerError};
use crate::shutdown::ShutdownSignal;
use axum::Router;
use std::sync::Arc;

/// Everything that can stop a service from starting or serving
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Client(#[from] aggregator::ClientError),
    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Load the configured word file, or the embedded seed dictionary
pub fn load_word_store(settings: &DictionarySettings) -> Result<WordStore, StoreError> {
    match &settings.words_path {
        Some(path) => WordStore::load(path),
        None => WordStore::seed(),
    }
}

/// Build the dictionary router over the configured word source
pub fn dictionary_router(settings: &DictionarySettings) -> Result<Router, AppError> {
    let store = Arc::new(load_word_store(settings)?);
    let service = Arc::new(DictionaryService::new(store));
    Ok(dictionary::router(service))
}

/// Build the aggregator router, pointing its client at the configured dictionary service
pub fn aggregator_router(settings: &AggregatorSettings) -> Result<Router, AppError> {
    let transport = Arc::new(ReqwestTransport::new(settings.request_timeout())?);
    let client = AggregatorClient::new(transport, &settings.dictionary_url)?;
    crate::info!("Forwarding lookups to {}", client.base_url());
    let service = Arc::new(AggregatorService::new(client));
    Ok(aggregator::router(service))
}

/// Run the dictionary service until `shutdown` fires
pub async fn run_dictionary_service(
    settings: &Settings,
    shutdown: ShutdownSignal,
) -> Result<(), AppError> {
    let addr = settings.dictionary.socket_addr()?;
    let router = dictionary_router(&settings.dictionary)?;
    let listener = server::bind(addr).await?;
    server::serve(listener, router, shutdown.wait()).await?;
    Ok(())
}

/// Run the aggregator service until `shutdown` fires
pub async fn run_aggregator_service(
    settings: &Settings,
    shutdown: ShutdownSignal,
) -> Result<(), AppError> {
    let addr = settings.aggregator.socket_addr()?;
    let router = aggregator_router(&settings.aggregator)?;
    let listener = server::bind(addr).await?;
    server::serve(listener, router, shutdown.wait()).await?;
    Ok(())
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
