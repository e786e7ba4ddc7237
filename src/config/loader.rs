//! `.env` discovery and the non-overriding merge into an environment.

use std::borrow::Cow;
use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Serialize;

use crate::constants;
use super::env::{EnvStore, ProcessEnv};
use super::types::Config;

/// What a single load pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// The file that was read, if one was found and opened.
    pub source: Option<PathBuf>,
    /// Keys set from the file, in file order.
    pub loaded: Vec<String>,
    /// Keys left untouched because the environment already had them.
    pub skipped: Vec<String>,
    /// Lines the parser rejected.
    pub malformed_lines: usize,
    /// Set when reading stopped early on an I/O or encoding error.
    pub read_error: Option<String>,
}

impl LoadReport {
    pub fn found_file(&self) -> bool {
        self.source.is_some()
    }
}

/// Loads an environment-definition file without overriding existing variables.
///
/// # Example
/// ```no_run
/// use llmkeys::{Credential, EnvLoader};
///
/// let (config, report) = EnvLoader::new().load();
/// if let Some(path) = &report.source {
///     println!("loaded {}", path.display());
/// }
/// println!("openai key set: {}", config.is_set(Credential::OpenAI));
/// ```
#[derive(Debug, Clone)]
pub struct EnvLoader {
    filename: String,
    path: Option<PathBuf>,
    search_from: Option<PathBuf>,
    search_parents: bool,
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvLoader {
    /// `.env`, searched from the working directory upwards.
    pub fn new() -> Self {
        EnvLoader {
            filename: constants::DEFAULT_ENV_FILENAME.to_string(),
            path: None,
            search_from: None,
            search_parents: true,
        }
    }

    /// Looks for `name` instead of `.env`.
    pub fn filename(mut self, name: impl Into<String>) -> Self {
        self.filename = name.into();
        self
    }

    /// Reads exactly this file and skips discovery.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Starts discovery at `dir` rather than the working directory.
    pub fn search_from(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_from = Some(dir.into());
        self
    }

    /// Whether discovery walks up through parent directories.
    pub fn search_parents(mut self, enabled: bool) -> Self {
        self.search_parents = enabled;
        self
    }

    /// Merges the file into the process environment and snapshots the credentials.
    pub fn load(&self) -> (Config, LoadReport) {
        let mut env = ProcessEnv;
        let report = self.load_into(&mut env);
        (Config::from_store(&env), report)
    }

    /// Merges the file into `store`. Never fails; problems end up in the report and the log.
    pub fn load_into<S: EnvStore + ?Sized>(&self, store: &mut S) -> LoadReport {
        let mut report = LoadReport::default();

        let Some(path) = self.find_file() else {
            debug!("No {} file found, environment left as is", self.filename);
            return report;
        };

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Could not open {}: {}", path.display(), e);
                report.read_error = Some(e.to_string());
                return report;
            }
        };

        info!("Loading environment from {}", path.display());
        let entries = collect_entries(BufReader::new(file), &path, &mut report);
        merge_entries(entries, store, &mut report);
        report.source = Some(path);
        report
    }

    /// Resolves the file to read, if any.
    pub fn find_file(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.path {
            return path.is_file().then(|| path.clone());
        }

        let start = match self.search_from {
            Some(ref dir) => dir.clone(),
            None => match env::current_dir() {
                Ok(dir) => dir,
                Err(e) => {
                    warn!("Cannot determine working directory, skipping {}: {}", self.filename, e);
                    return None;
                }
            },
        };

        if self.search_parents {
            start.ancestors().find_map(|dir| candidate(dir, &self.filename))
        } else {
            candidate(&start, &self.filename)
        }
    }
}

fn candidate(dir: &Path, filename: &str) -> Option<PathBuf> {
    let path = dir.join(filename);
    path.is_file().then_some(path)
}

/// Parses the file one physical line at a time, keeping the last value of a
/// repeated key at the position where the key first appeared.
///
/// A rejected line only costs itself. Quoted values cannot span lines.
fn collect_entries<R: BufRead>(
    reader: R,
    origin: &Path,
    report: &mut LoadReport,
) -> Vec<(String, String)> {
    let mut entries: Vec<(String, String)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Stopped reading {}: {}", origin.display(), e);
                report.read_error = Some(e.to_string());
                break;
            }
        };

        match parse_line(&line) {
            Ok(Some((key, value))) => match positions.get(&key) {
                Some(&idx) => entries[idx].1 = value,
                None => {
                    positions.insert(key.clone(), entries.len());
                    entries.push((key, value));
                }
            },
            Ok(None) => {}
            Err(_) => {
                // Line content may hold a secret; do not log it.
                warn!("Skipping malformed line in {}", origin.display());
                report.malformed_lines += 1;
            }
        }
    }

    entries
}

/// `None` for blank and comment lines.
fn parse_line(line: &str) -> Result<Option<(String, String)>, dotenvy::Error> {
    let literal = escape_dollars(line);
    dotenvy::from_read_iter(literal.as_bytes()).next().transpose()
}

/// Escapes every `$` in the value part outside single quotes, so dotenvy
/// keeps it literally instead of substituting a variable.
fn escape_dollars(line: &str) -> Cow<'_, str> {
    let Some(eq) = line.find('=') else {
        return Cow::Borrowed(line);
    };
    let (key, value) = line.split_at(eq + 1);
    if !value.contains('$') {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len() + 4);
    out.push_str(key);

    let mut strong_quote = false;
    let mut weak_quote = false;
    let mut escaped = false;
    for c in value.chars() {
        if escaped {
            escaped = false;
        } else if strong_quote {
            strong_quote = c != '\'';
        } else {
            match c {
                '\\' => escaped = true,
                '$' => out.push('\\'),
                '"' => weak_quote = !weak_quote,
                '\'' if !weak_quote => strong_quote = true,
                _ => {}
            }
        }
        out.push(c);
    }

    Cow::Owned(out)
}

fn merge_entries<S: EnvStore + ?Sized>(
    entries: Vec<(String, String)>,
    store: &mut S,
    report: &mut LoadReport,
) {
    for (key, value) in entries {
        if store.contains(&key) {
            debug!("{} already set, keeping existing value", key);
            report.skipped.push(key);
        } else {
            debug!("{} set from file", key);
            store.set(&key, &value);
            report.loaded.push(key);
        }
    }
}
