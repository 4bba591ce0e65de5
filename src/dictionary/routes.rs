// Dictionary HTTP routes
// Maps DictionaryService onto its GET endpoints. WordNotFound becomes a 404
// with an error body; pattern routes always answer 200 with a JSON array.
//
// Path parameters cannot be empty, so every parameterised route also has a
// trailing-slash form that runs the same operation with the empty string.
// Values a URL path cannot carry ("." and "..") use the query forms:
// /entryByWord?word=, /getWordsStartingWith?prefix=, and so on.

use crate::dictionary::service::{DictionaryError, DictionaryService};
use crate::dictionary::store::Entry;
use crate::server::{health_response, ErrorBody, HealthBody};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

/// Shared handler state
pub type DictionaryState = Arc<DictionaryService>;

/// Endpoint names as constants, shared with the aggregator client
pub mod endpoints {
    pub const GET_WORD: &str = "getWord";
    pub const ENTRY_BY_WORD: &str = "entryByWord";
    pub const STARTING_WITH: &str = "getWordsStartingWith";
    pub const THAT_CONTAIN: &str = "getWordsThatContain";
    pub const ENDING_WITH: &str = "getWordsEndingWith";
    pub const CONSECUTIVE_LETTERS: &str = "getWordsThatContainConsecutiveLetters";
    pub const HEALTH: &str = "health";

    /// Query-string parameter names of the query forms
    pub const WORD_PARAM: &str = "word";
    pub const PREFIX_PARAM: &str = "prefix";
    pub const SUBSTRING_PARAM: &str = "substring";
    pub const SUFFIX_PARAM: &str = "suffix";
}

impl IntoResponse for DictionaryError {
    fn into_response(self) -> Response {
        let status = match &self {
            DictionaryError::WordNotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(ErrorBody::new(&self))).into_response()
    }
}

/// Query string of `/entryByWord`
#[derive(Debug, Deserialize)]
pub(crate) struct WordParams {
    pub(crate) word: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PrefixParams {
    pub(crate) prefix: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubstringParams {
    pub(crate) substring: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SuffixParams {
    pub(crate) suffix: String,
}

/// Build the dictionary service router
pub fn router(service: DictionaryState) -> Router {
    use endpoints::*;

    Router::new()
        .route(&format!("/{}/{{word}}", GET_WORD), get(get_word))
        .route(&format!("/{}/", GET_WORD), get(get_empty_word))
        .route(&format!("/{}", ENTRY_BY_WORD), get(entry_by_word))
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

async fn get_word(
    State(service): State<DictionaryState>,
    Path(word): Path<String>,
) -> Result<Json<Entry>, DictionaryError> {
    service.get_word(&word).map(Json)
}

async fn get_empty_word(State(service): State<DictionaryState>) -> Result<Json<Entry>, DictionaryError> {
    service.get_word("").map(Json)
}

async fn entry_by_word(
    State(service): State<DictionaryState>,
    Query(params): Query<WordParams>,
) -> Result<Json<Entry>, DictionaryError> {
    service.entry_by_word(&params.word).map(Json)
}

async fn starting_with(
    State(service): State<DictionaryState>,
    Path(prefix): Path<String>,
) -> Json<Vec<Entry>> {
    Json(service.get_words_starting_with(&prefix))
}

async fn starting_with_empty(State(service): State<DictionaryState>) -> Json<Vec<Entry>> {
    Json(service.get_words_starting_with(""))
}

async fn starting_with_query(
    State(service): State<DictionaryState>,
    Query(params): Query<PrefixParams>,
) -> Json<Vec<Entry>> {
    Json(service.get_words_starting_with(&params.prefix))
}

async fn containing(
    State(service): State<DictionaryState>,
    Path(fragment): Path<String>,
) -> Json<Vec<Entry>> {
    Json(service.get_words_containing(&fragment))
}

async fn containing_empty(State(service): State<DictionaryState>) -> Json<Vec<Entry>> {
    Json(service.get_words_containing(""))
}

async fn containing_query(
    State(service): State<DictionaryState>,
    Query(params): Query<SubstringParams>,
) -> Json<Vec<Entry>> {
    Json(service.get_words_containing(&params.substring))
}

async fn ending_with(
    State(service): State<DictionaryState>,
    Path(suffix): Path<String>,
) -> Json<Vec<Entry>> {
    Json(service.get_words_ending_with(&suffix))
}

async fn ending_with_empty(State(service): State<DictionaryState>) -> Json<Vec<Entry>> {
    Json(service.get_words_ending_with(""))
}

async fn ending_with_query(
    State(service): State<DictionaryState>,
    Query(params): Query<SuffixParams>,
) -> Json<Vec<Entry>> {
    Json(service.get_words_ending_with(&params.suffix))
}

async fn consecutive_letters(State(service): State<DictionaryState>) -> Json<Vec<Entry>> {
    Json(service.get_words_with_consecutive_double_letters())
}

async fn health(State(service): State<DictionaryState>) -> (StatusCode, Json<HealthBody>) {
    health_response(Some(service.word_count()))
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
