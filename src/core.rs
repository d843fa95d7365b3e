use clap::Parser;

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::client::HttpTransport;
use crate::config::Config;
use crate::context::Environment;
use crate::errors::ApilabError;
use crate::logging::init_tracing;
use crate::output::terminal;
use crate::output::{render_request, render_response, PresenterOptions};
use crate::pipeline::{prepare_request, run_request};
use crate::status::ExitStatus;
use crate::variables::load_environment;

/// Main entry point for the CLI.
///
/// Loads the user config, parses arguments, sets up logging and runs one request
/// on a single-threaded runtime.
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    if let Some(name) = args.first() {
        if let Some(basename) = Path::new(name).file_stem() {
            env.program_name = basename.to_string_lossy().to_string();
        }
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            print_warning(&format!("Failed to load config: {}", e), &env);
            Config::default()
        }
    };

    let merged_args = merge_default_options(args, &config, &env);

    let parsed = match Args::try_parse_from(&merged_args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    if parsed.no_color {
        env.disable_colors();
    }

    init_tracing(parsed.verbose, parsed.debug, parsed.log_format);
    let traceback = parsed.traceback || parsed.debug;

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => return handle_error(ApilabError::Io(e), traceback, &env),
    };

    match runtime.block_on(program(parsed, &env)) {
        Ok(status) => status,
        Err(e) => handle_error(e, traceback, &env),
    }
}

pub async fn program(args: Args, env: &Environment) -> Result<ExitStatus, ApilabError> {
    if args.debug {
        eprintln!("Debug: {:?}", args);
    }

    if args.file.is_none() && env.stdin_isatty {
        eprintln!("usage: {} [FILE]", env.program_name);
        eprintln!("\nReads the request from stdin when FILE is omitted or '-'.");
        eprintln!("For more information, run: {} --help", env.program_name);
        return Ok(ExitStatus::Error);
    }

    let raw_text = read_input(args.input_file().map(PathBuf::as_path))?;

    let roots = candidate_roots(&args);
    let mut loaded = load_environment(&roots);
    if let Some(warning) = loaded.warning.take() {
        print_warning(&warning.to_string(), env);
    }
    if args.system_env {
        loaded.merge_with_system();
    }

    if args.offline {
        let request = prepare_request(&raw_text, &loaded.vars)?;
        print!("{}", render_request(&request));
        return Ok(ExitStatus::Success);
    }

    let options = PresenterOptions { colors: env.colors };
    let transport = HttpTransport::new()?;

    match run_request(&raw_text, &loaded.vars, &transport).await {
        Ok(response) => {
            print!("{}", render_response(&response, &options));
            Ok(ExitStatus::from_http_status(response.status_code))
        }
        Err(ApilabError::Server(response)) => {
            // the response still goes to stdout; the error line goes to stderr
            print!("{}", render_response(&response, &options));
            Err(ApilabError::Server(response))
        }
        Err(e) => Err(e),
    }
}

/// Read the request text from a file, or stdin when no file is given.
/// A leading byte order mark is dropped.
fn read_input(file: Option<&Path>) -> Result<String, ApilabError> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            ApilabError::Io(std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(strip_bom(text))
}

fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Roots searched for the environment file, in order.
///
/// Explicit `--root` values replace the defaults: the request file's directory,
/// then the current directory.
pub fn candidate_roots(args: &Args) -> Vec<PathBuf> {
    if !args.roots.is_empty() {
        return args.roots.clone();
    }

    let mut roots: Vec<PathBuf> = Vec::new();
    if let Some(parent) = args.input_file().and_then(|f| f.parent()) {
        if parent.as_os_str().is_empty() {
            roots.push(PathBuf::from("."));
        } else {
            roots.push(parent.to_path_buf());
        }
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    if !roots.iter().any(|r| same_dir(r, &cwd)) {
        roots.push(cwd);
    }

    roots
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn merge_default_options(args: Vec<String>, config: &Config, env: &Environment) -> Vec<String> {
    if config.default_options.is_empty() {
        return args;
    }

    let (flags, positional): (Vec<_>, Vec<_>) = config.default_options.iter()
        .partition(|opt| opt.starts_with('-'));

    if !positional.is_empty() {
        print_warning(
            &format!("Positional arguments in default options are ignored: {:?}", positional),
            env,
        );
    }

    if flags.is_empty() {
        return args;
    }

    let mut merged = Vec::with_capacity(args.len() + flags.len());

    if let Some(program) = args.first() {
        merged.push(program.clone());
    }

    merged.extend(flags.into_iter().cloned());
    merged.extend(args.into_iter().skip(1));

    merged
}

fn print_warning(message: &str, env: &Environment) {
    eprintln!("{}", stderr_line(format!("Warning: {}", message), env, terminal::warning));
}

fn handle_error(error: ApilabError, traceback: bool, env: &Environment) -> ExitStatus {
    eprintln!("{}", stderr_line(format!("Error: {}", error), env, terminal::error));

    if traceback {
        eprintln!("{:?}", error);
    }

    // All errors return the same exit code (1) following Unix conventions
    ExitStatus::Error
}

fn stderr_line(line: String, env: &Environment, paint: fn(&str) -> String) -> String {
    if env.stderr_colors {
        paint(&line)
    } else {
        line
    }
}
