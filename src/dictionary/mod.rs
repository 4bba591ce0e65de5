// Dictionary service - word store, matcher and the HTTP boundary over them

pub mod matcher;
pub mod routes;
pub mod service;
pub mod store;

pub use matcher::{has_consecutive_double_letter, MatchEngine, Query, QueryOutcome};
pub use routes::{endpoints, router, DictionaryState};
pub use service::{DictionaryError, DictionaryService};
pub use store::{Entry, StoreError, WordStore};
