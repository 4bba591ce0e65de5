// Aggregator service - forwards lookups to the dictionary service over HTTP

pub mod client;
pub mod routes;
pub mod service;
pub mod transport;

pub use client::{AggregatorClient, ClientError, DEFAULT_DICTIONARY_URL};
pub use routes::{router, AggregatorState, GET_DEFINITION_FOR};
pub use service::AggregatorService;
pub use transport::{DictionaryTransport, RemoteResponse, ReqwestTransport};
