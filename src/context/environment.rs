//! Terminal facts about the running process

/// Execution environment
#[derive(Debug, Clone)]
pub struct Environment {
    pub stdin_isatty: bool,
    /// Whether stdout may be colored
    pub colors: bool,
    /// Whether warnings and errors on stderr may be colored
    pub stderr_colors: bool,
    pub program_name: String,
}

impl Environment {
    pub fn init() -> Self {
        Self::default()
    }

    /// An environment with no terminal attached
    pub fn piped() -> Self {
        Self {
            stdin_isatty: false,
            colors: false,
            stderr_colors: false,
            program_name: "apilab".to_string(),
        }
    }

    /// Turn colors off on both output streams (`--no-color`)
    pub fn disable_colors(&mut self) {
        self.colors = false;
        self.stderr_colors = false;
    }
}

impl Default for Environment {
    fn default() -> Self {
        let allowed = color_allowed(std::env::var_os("NO_COLOR"), std::env::var("TERM").ok());
        Self {
            stdin_isatty: atty::is(atty::Stream::Stdin),
            colors: allowed && atty::is(atty::Stream::Stdout),
            stderr_colors: allowed && atty::is(atty::Stream::Stderr),
            program_name: "apilab".to_string(),
        }
    }
}

/// `NO_COLOR` (any value) and `TERM=dumb` turn colors off
fn color_allowed(no_color: Option<std::ffi::OsString>, term: Option<String>) -> bool {
    if no_color.is_some() {
        return false;
    }
    !matches!(term.as_deref(), Some("dumb"))
}
