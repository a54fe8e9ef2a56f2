// namr-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use tracing_subscriber::EnvFilter;

use namr_en::Namer;
use namr_lexicon::{Lexicon, LexiconError, STOPWORDS_FILE};

/// Environment variable naming a data directory.
pub const DATA_PATH_ENV: &str = "NAMR_DATA_PATH";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "NAMR_LOG";

/// Data directory name under the user's home directory.
const HOME_DATA_DIR: &str = ".namr";

/// Error type for CLI setup and input handling.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error("{} does not contain {}", .0.display(), STOPWORDS_FILE)]
    NoDataFile(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} has no {field} field", .path.display())]
    MissingField { path: PathBuf, field: String },
}

/// Options shared by every namr tool.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory containing stopwords.txt (and optionally parts_of_speech.tsv)
    #[arg(short = 'd', long, env = DATA_PATH_ENV)]
    pub data_path: Option<PathBuf>,

    /// Enable debug logging (overrides NAMR_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Install the stderr log subscriber.
///
/// The filter comes from `NAMR_LOG` (default `warn`); `verbose` forces
/// `debug`.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Create a [`Namer`] from the first available word list source.
///
/// Search order:
/// 1. `data_path` (from `--data-path` or `NAMR_DATA_PATH`), which must
///    contain `stopwords.txt`
/// 2. `~/.namr`, if it contains `stopwords.txt`
/// 3. the embedded English lexicon
pub fn load_namer(data_path: Option<&Path>) -> Result<Namer, CliError> {
    if let Some(dir) = data_path {
        if !dir.join(STOPWORDS_FILE).is_file() {
            return Err(CliError::NoDataFile(dir.to_path_buf()));
        }
        return Ok(Namer::from_dir(dir)?);
    }

    if let Some(dir) = home_dir().map(|home| home.join(HOME_DATA_DIR)) {
        if dir.join(STOPWORDS_FILE).is_file() {
            return Ok(Namer::from_dir(&dir)?);
        }
    }

    tracing::debug!("using embedded English lexicon");
    Ok(Namer::new(Lexicon::english()))
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a Debian-control-style file (`Field: value`, continuation lines
/// indented) into `(field, value)` pairs in file order.
///
/// Continuation lines are joined to the previous value with one space.
/// Lines before the first field and lines without a colon are ignored.
pub fn parse_control_fields(text: &str) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = Vec::new();
    for line in text.lines() {
        if line.starts_with([' ', '\t']) {
            let continuation = line.trim();
            if let Some((_, value)) = fields.last_mut() {
                if !continuation.is_empty() {
                    if !value.is_empty() {
                        value.push(' ');
                    }
                    value.push_str(continuation);
                }
            }
        } else if let Some((field, value)) = line.split_once(':') {
            fields.push((field.trim().to_string(), value.trim().to_string()));
        }
    }
    fields
}

/// Read one field from a package DESCRIPTION file. Field names match
/// case-insensitively.
pub fn read_description_field(path: &Path, field: &str) -> Result<String, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_control_fields(&text)
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(field))
        .map(|(_, value)| value)
        .ok_or_else(|| CliError::MissingField {
            path: path.to_path_buf(),
            field: field.to_string(),
        })
}

/// The titles to process: the positional arguments, or each non-empty
/// stdin line when there are none.
pub fn titles_or_stdin(titles: Vec<String>) -> Vec<String> {
    if !titles.is_empty() {
        return titles;
    }
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        match line {
            Ok(l) if !l.trim().is_empty() => lines.push(l),
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        }
    }
    lines
}

/// The stderr line reported when naming `title` fails.
pub fn failure_line(title: &str, err: &dyn std::fmt::Display) -> String {
    format!("error: {title}: {err}")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
