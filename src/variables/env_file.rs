//! Project environment file loading
//!
//! Looks for `api-lab.env.json` in an ordered list of candidate roots and reads
//! the first one found into an [`EnvironmentMap`]. Roots are never merged.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::errors::ApilabError;
use crate::models::EnvironmentMap;

/// Fixed file name looked up inside every candidate root
pub const ENV_FILE_NAME: &str = "api-lab.env.json";

/// Result of an environment lookup
///
/// A file that exists but is broken does not abort the run: the map comes back
/// empty and the error is handed to the caller to show as a warning.
#[derive(Debug, Default)]
pub struct LoadedEnvironment {
    /// Variables to substitute
    pub vars: EnvironmentMap,
    /// The file the variables came from, if one was found
    pub source: Option<PathBuf>,
    /// Set when the file was found but could not be used
    pub warning: Option<ApilabError>,
}

impl LoadedEnvironment {
    /// Layer process environment variables underneath the file variables.
    /// File entries win on conflicts.
    pub fn merge_with_system(&mut self) {
        self.merge_under(std::env::vars());
    }

    fn merge_under<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            self.vars.entry(key).or_insert(value);
        }
    }
}

/// Load the environment from the first root that contains [`ENV_FILE_NAME`]
pub fn load_environment<P: AsRef<Path>>(roots: &[P]) -> LoadedEnvironment {
    for root in roots {
        let path = root.as_ref().join(ENV_FILE_NAME);
        if !path.is_file() {
            continue;
        }

        debug!(path = %path.display(), "Environment file found");

        return match read_env_file(&path) {
            Ok(vars) => LoadedEnvironment {
                vars,
                source: Some(path),
                warning: None,
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring environment file");
                LoadedEnvironment {
                    vars: EnvironmentMap::new(),
                    source: Some(path),
                    warning: Some(e),
                }
            }
        };
    }

    debug!(roots = roots.len(), "No environment file found");
    LoadedEnvironment::default()
}

fn read_env_file(path: &Path) -> Result<EnvironmentMap, ApilabError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ApilabError::ConfigParse(format!("{}: {}", path.display(), e)))?;

    parse_env_json(&content)
}

/// Parse the body of an environment file
///
/// The document must be a JSON object. Strings are used as-is, numbers and
/// booleans by their JSON text. `null` entries are skipped, so their
/// placeholders stay unresolved. Arrays and objects are rejected.
pub fn parse_env_json(content: &str) -> Result<EnvironmentMap, ApilabError> {
    let document: JsonValue = serde_json::from_str(content)
        .map_err(|e| ApilabError::ConfigParse(e.to_string()))?;

    let object = match document {
        JsonValue::Object(object) => object,
        other => {
            return Err(ApilabError::ConfigParse(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            )))
        }
    };

    let mut vars = EnvironmentMap::with_capacity(object.len());
    for (key, value) in object {
        let value = match value {
            JsonValue::String(s) => s,
            JsonValue::Number(n) => n.to_string(),
            JsonValue::Bool(b) => b.to_string(),
            JsonValue::Null => continue,
            other => {
                return Err(ApilabError::ConfigParse(format!(
                    "value of '{}' must be a string, number or boolean, found {}",
                    key,
                    json_kind(&other)
                )))
            }
        };
        vars.insert(key, value);
    }

    Ok(vars)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
