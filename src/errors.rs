use thiserror::Error;

/// Errors raised by this crate.
///
/// There are exactly two failure modes: a region definition that fails its
/// numeric invariants at construction time, and a JSON payload that fails
/// decoding. Neither is retryable.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid offline region definition: {0}")]
    InvalidDefinition(String),
    #[error("malformed offline region definition json: {0}")]
    MalformedRegionJson(String),
}

pub type Result<T> = std::result::Result<T, Error>;
