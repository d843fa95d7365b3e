//! Data model shared by the pipeline stages

pub mod types;

pub use types::{Body, EnvironmentMap, HeadersDict, ParsedRequest, ResponseResult};
