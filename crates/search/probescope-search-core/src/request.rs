//! Parse SearchRequest-style JSON (the payload the web client posts)
//! into typed core inputs.
//!
//! Notes:
//! - The algorithm arrives as the UI's string tag ("linear" | "binary" |
//!   "jump") and defaults to binary when omitted.
//! - Tag-to-enum mapping happens here, once, at the boundary; everything
//!   past this point dispatches on the Algorithm enum.

use serde::Deserialize;
use thiserror::Error;

use crate::search::Algorithm;

/// A fully typed search request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchRequest {
    pub values: Vec<i32>,
    pub target: i32,
    pub algorithm: Algorithm,
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("request parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown algorithm '{0}' (expected linear, binary, or jump)")]
    UnknownAlgorithm(String),
}

/// Raw wire shape; `algorithm` is optional and loosely typed.
#[derive(Deserialize)]
struct RawRequest {
    values: Vec<i32>,
    target: i32,
    #[serde(default)]
    algorithm: Option<String>,
}

pub fn parse_search_request_json(s: &str) -> Result<SearchRequest, RequestError> {
    let raw: RawRequest = serde_json::from_str(s)?;
    let algorithm = match raw.algorithm.as_deref() {
        None => Algorithm::Binary,
        Some("linear") => Algorithm::Linear,
        Some("binary") => Algorithm::Binary,
        Some("jump") => Algorithm::Jump,
        Some(other) => return Err(RequestError::UnknownAlgorithm(other.to_string())),
    };
    Ok(SearchRequest {
        values: raw.values,
        target: raw.target,
        algorithm,
    })
}
