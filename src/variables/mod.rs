//! Variables: the project environment file and `{{name}}` substitution

pub mod env_file;
pub mod template;

pub use env_file::{load_environment, parse_env_json, LoadedEnvironment, ENV_FILE_NAME};
pub use template::{resolve_placeholders, unresolved_placeholders};
