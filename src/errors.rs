//! Error types for apilab

use thiserror::Error;

use crate::models::ResponseResult;

/// Main error type for apilab
///
/// Every variant is terminal for the current invocation. None of them is retried.
#[derive(Error, Debug)]
pub enum ApilabError {
    /// `api-lab.env.json` exists but could not be read or parsed.
    /// Recovered by the caller with an empty environment.
    #[error("Invalid api-lab.env.json format: {0}")]
    ConfigParse(String),

    /// The first line lacks a method or a URL. Nothing is sent.
    #[error("Invalid HTTP request format: {0}")]
    MalformedRequest(String),

    /// The exchange completed with a status outside 2xx.
    #[error("HTTP {}: {}", .0.status_code, .0.body.compact())]
    Server(Box<ResponseResult>),

    /// The request went out but no complete response came back.
    #[error("Request was sent but no response received")]
    NoResponse(#[source] reqwest::Error),

    /// The request could not be built or sent at all.
    #[error("{0}")]
    DispatchConstruction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ApilabError {
    /// The response attached to a `Server` error, if any
    pub fn response(&self) -> Option<&ResponseResult> {
        match self {
            ApilabError::Server(response) => Some(response),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApilabError>;
