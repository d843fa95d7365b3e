//! Output handling (formatting and terminal styling)

pub mod formatters;
pub mod presenter;
pub mod terminal;

pub use presenter::{render_request, render_response, PresenterOptions};
