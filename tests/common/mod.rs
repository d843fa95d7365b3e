//! Common test utilities for apilab integration tests
//!
//! - A throwaway project directory (request files, api-lab.env.json)
//! - CLI invocation helpers running the compiled binary
//! - Output helpers

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Environment file name looked up in project roots
pub const ENV_FILE: &str = "api-lab.env.json";

/// Exit status codes matching the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            _ => ExitStatus::Error,
        }
    }
}

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    pub stdout: String,
    pub stderr: String,
    pub exit_status: ExitStatus,
    pub exit_code: i32,
}

impl CliResponse {
    /// Check if stdout contains a substring
    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }

    /// The text after the "Body" title of a rendered response
    pub fn body(&self) -> Option<&str> {
        self.stdout.find("\nBody\n").map(|pos| &self.stdout[pos + "\nBody\n".len()..])
    }

    /// Parse the rendered body as JSON
    pub fn json(&self) -> Option<serde_json::Value> {
        self.body().and_then(|b| serde_json::from_str(b.trim()).ok())
    }
}

/// A temporary project: working directory, config directory and stdin for one run
pub struct Project {
    /// Working directory of the process; also the default env file root
    pub dir: TempDir,
    /// Isolated user config directory
    pub config_dir: TempDir,
    /// Environment variables to set
    pub env_vars: HashMap<String, String>,
    /// Standard input content
    pub stdin: Option<Vec<u8>>,
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create project dir"),
            config_dir: TempDir::new().expect("Failed to create config dir"),
            env_vars: HashMap::new(),
            stdin: None,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project directory
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write api-lab.env.json into the project directory
    pub fn write_env(&self, content: &str) -> PathBuf {
        self.write(ENV_FILE, content)
    }

    /// Write config.toml into the user config directory
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_dir.path().join("config.toml"), content)
            .expect("Failed to write config");
    }

    pub fn set_env(&mut self, key: &str, value: &str) -> &mut Self {
        self.env_vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_stdin(&mut self, content: &str) -> &mut Self {
        self.stdin = Some(content.as_bytes().to_vec());
        self
    }

    /// Run the binary inside this project
    pub fn run(&self, args: &[&str]) -> CliResponse {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_apilab"));
        cmd.args(args);
        cmd.current_dir(self.dir.path());

        cmd.env("APILAB_CONFIG_DIR", self.config_dir.path());
        cmd.env_remove("APILAB_ROOTS");
        cmd.env_remove("RUST_LOG");
        cmd.env("NO_COLOR", "1");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        if let Some(ref stdin_data) = self.stdin {
            cmd.stdin(Stdio::piped());
            let mut child = cmd.spawn().expect("Failed to spawn command");
            {
                let stdin = child.stdin.as_mut().expect("Failed to open stdin");
                stdin.write_all(stdin_data).expect("Failed to write to stdin");
            }
            let output = child.wait_with_output().expect("Failed to wait for command");
            parse_output(output)
        } else {
            cmd.stdin(Stdio::null());
            let output = cmd.output().expect("Failed to execute command");
            parse_output(output)
        }
    }

    /// Write `content` as a request file and run it
    pub fn run_request(&self, content: &str, extra_args: &[&str]) -> CliResponse {
        let file = self.write("request.http", content);
        let file = file.to_str().expect("utf-8 path").to_string();
        let mut args: Vec<&str> = extra_args.to_vec();
        args.push(&file);
        self.run(&args)
    }
}

fn parse_output(output: Output) -> CliResponse {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(1);

    CliResponse {
        stdout,
        stderr,
        exit_status: ExitStatus::from(exit_code),
        exit_code,
    }
}

/// A localhost URL nothing listens on
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Strip ANSI color codes from a string
pub fn strip_colors(s: &str) -> String {
    let re = regex::Regex::new(r"\x1b\[[\d;]*m").unwrap();
    re.replace_all(s, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_colors() {
        let colored = "\x1b[1;38;5;71mStatus: 200 OK\x1b[0m";
        assert_eq!(strip_colors(colored), "Status: 200 OK");
    }

    #[test]
    fn test_exit_status_from_i32() {
        assert_eq!(ExitStatus::from(0), ExitStatus::Success);
        assert_eq!(ExitStatus::from(1), ExitStatus::Error);
    }
}
