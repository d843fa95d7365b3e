//! apilab library interface
//!
//! Runs a plain-text HTTP request: `{{name}}` placeholders are filled from
//! `api-lab.env.json`, the text is parsed, sent once, and the response rendered.
//!
//! # Module Organization
//!
//! - [`variables`] - Environment file loading and placeholder resolution
//! - [`request`] - Request text parser
//! - [`client`] - HTTP dispatch ([`client::Transport`], [`client::HttpTransport`])
//! - [`output`] - Response and request rendering
//! - [`pipeline`] - `run_request`, the whole flow with the transport injected
//! - [`core`] - CLI execution logic
//!
//! ```no_run
//! # async fn demo() -> apilab::errors::Result<()> {
//! use apilab::client::HttpTransport;
//! use apilab::output::{render_response, PresenterOptions};
//! use apilab::pipeline::run_request;
//! use apilab::variables::load_environment;
//!
//! let env = load_environment(&["."]);
//! let transport = HttpTransport::new()?;
//! let response = run_request("GET {{baseUrl}}/users", &env.vars, &transport).await?;
//! print!("{}", render_response(&response, &PresenterOptions::default()));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod request;
pub mod status;
pub mod variables;
