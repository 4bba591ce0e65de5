// Aggregator HTTP routes
// An unknown word answers 200 with a JSON null; every client failure is a 502.
// Same route shapes as the dictionary service: a trailing-slash form for the
// empty parameter and a query form for values a path cannot carry.

use crate::aggregator::client::ClientError;
use crate::aggregator::service::AggregatorService;
use crate::dictionary::routes::{PrefixParams, SubstringParams, SuffixParams, WordParams};
use crate::dictionary::{endpoints, Entry};
use crate::server::{health_response, ErrorBody, HealthBody};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

/// Shared handler state
pub type AggregatorState = Arc<AggregatorService>;

/// Aggregator-only endpoint name
pub const GET_DEFINITION_FOR: &str = "getDefinitionFor";

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        crate::warn!("Dictionary service call failed: {}", self);
        (StatusCode::BAD_GATEWAY, Json(ErrorBody::new(&self))).into_response()
    }
}

/// Build the aggregator router
pub fn router(service: AggregatorState) -> Router {
    use endpoints::{CONSECUTIVE_LETTERS, ENDING_WITH, HEALTH, STARTING_WITH, THAT_CONTAIN};

    Router::new()
        .route(&format!("/{}/{{word}}", GET_DEFINITION_FOR), get(definition_for))
        .route(&format!("/{}/", GET_DEFINITION_FOR), get(definition_for_empty))
        .route(&format!("/{}", GET_DEFINITION_FOR), get(definition_for_query))
        .route(&format!("/{}/{{prefix}}", STARTING_WITH), get(starting_with))
        .route(&format!("/{}/", STARTING_WITH), get(starting_with_empty))
        .route(&format!("/{}", STARTING_WITH), get(starting_with_query))
        .route(&format!("/{}/{{fragment}}", THAT_CONTAIN), get(containing))
        .route(&format!("/{}/", THAT_CONTAIN), get(containing_empty))
        .route(&format!("/{}", THAT_CONTAIN), get(containing_query))
        .route(&format!("/{}/{{suffix}}", ENDING_WITH), get(ending_with))
        .route(&format!("/{}/", ENDING_WITH), get(ending_with_empty))
        .route(&format!("/{}", ENDING_WITH), get(ending_with_query))
        .route(&format!("/{}", CONSECUTIVE_LETTERS), get(consecutive_letters))
        .route(&format!("/{}", HEALTH), get(health))
        .with_state(service)
}

type DefinitionResult = Result<Json<Option<Entry>>, ClientError>;
type EntriesResult = Result<Json<Vec<Entry>>, ClientError>;

async fn definition_for(
    State(service): State<AggregatorState>,
    Path(word): Path<String>,
) -> DefinitionResult {
    service.get_definition_for(&word).await.map(Json)
}

async fn definition_for_empty(State(service): State<AggregatorState>) -> DefinitionResult {
    service.get_definition_for("").await.map(Json)
}

async fn definition_for_query(
    State(service): State<AggregatorState>,
    Query(params): Query<WordParams>,
) -> DefinitionResult {
    service.get_definition_for(&params.word).await.map(Json)
}

async fn starting_with(
    State(service): State<AggregatorState>,
    Path(prefix): Path<String>,
) -> EntriesResult {
    service.get_words_starting_with(&prefix).await.map(Json)
}

async fn starting_with_empty(State(service): State<AggregatorState>) -> EntriesResult {
    service.get_words_starting_with("").await.map(Json)
}

async fn starting_with_query(
    State(service): State<AggregatorState>,
    Query(params): Query<PrefixParams>,
) -> EntriesResult {
    service.get_words_starting_with(&params.prefix).await.map(Json)
}

async fn containing(
    State(service): State<AggregatorState>,
    Path(fragment): Path<String>,
) -> EntriesResult {
    service.get_words_that_contain(&fragment).await.map(Json)
}

async fn containing_empty(State(service): State<AggregatorState>) -> EntriesResult {
    service.get_words_that_contain("").await.map(Json)
}

async fn containing_query(
    State(service): State<AggregatorState>,
    Query(params): Query<SubstringParams>,
) -> EntriesResult {
    service.get_words_that_contain(&params.substring).await.map(Json)
}

async fn ending_with(
    State(service): State<AggregatorState>,
    Path(suffix): Path<String>,
) -> EntriesResult {
    service.get_words_ending_with(&suffix).await.map(Json)
}

async fn ending_with_empty(State(service): State<AggregatorState>) -> EntriesResult {
    service.get_words_ending_with("").await.map(Json)
}

async fn ending_with_query(
    State(service): State<AggregatorState>,
    Query(params): Query<SuffixParams>,
) -> EntriesResult {
    service.get_words_ending_with(&params.suffix).await.map(Json)
}

async fn consecutive_letters(State(service): State<AggregatorState>) -> EntriesResult {
    service
        .get_words_that_contain_consecutive_letters()
        .await
        .map(Json)
}

async fn health() -> (StatusCode, Json<HealthBody>) {
    health_response(None)
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
