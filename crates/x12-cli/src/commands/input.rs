//! Reading documents, event streams and loop tables; reporting failures.

use std::fmt::Display;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use x12_lib::handler::Event;
use x12_lib::{Delimiters, EdiReader, LoopTable};

use crate::diagnostics::ErrorPrinter;

/// Where a document comes from and how to parse it.
pub struct SourceArgs {
    pub path: PathBuf,
    pub delimiters: Delimiters,
    pub wrap_errors: bool,
    pub require_interchange: bool,
    pub ignore_line_breaks: bool,
    pub loop_table: Option<PathBuf>,
    pub color: bool,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid loop table {path}: {source}")]
    LoopTable {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid event stream {path}: {source}")]
    Events {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceArgs {
    pub fn read(&self) -> Result<String, InputError> {
        read_text(&self.path)
    }

    pub fn reader(&self) -> Result<EdiReader, InputError> {
        let table = load_loop_table(self.loop_table.as_deref())?;
        Ok(EdiReader::new()
            .delimiters(self.delimiters)
            .wrap_errors(self.wrap_errors)
            .require_interchange(self.require_interchange)
            .ignore_line_breaks(self.ignore_line_breaks)
            .loop_table(table))
    }

    /// Renders a parse failure against `text` and exits.
    pub fn exit_with_parse_error(&self, err: &x12_lib::Error, text: &str) -> ! {
        let path = display_path(&self.path);
        let rendered = ErrorPrinter::new(err)
            .source(text)
            .path(&path)
            .colored(self.color)
            .render();
        eprintln!("{}", rendered);
        std::process::exit(1);
    }
}

pub fn exit_with(message: impl Display) -> ! {
    eprintln!("error: {}", message);
    std::process::exit(1);
}

pub fn display_path(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_owned()
    } else {
        path.display().to_string()
    }
}

pub fn read_text(path: &Path) -> Result<String, InputError> {
    let result = if is_stdin(path) {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };

    result.map_err(|source| InputError::Read {
        path: display_path(path),
        source,
    })
}

/// The table at `path`, or the built-in eligibility table.
pub fn load_loop_table(path: Option<&Path>) -> Result<Arc<LoopTable>, InputError> {
    let Some(path) = path else {
        return Ok(LoopTable::eligibility());
    };

    let json = read_text(path)?;
    let table = serde_json::from_str(&json).map_err(|source| InputError::LoopTable {
        path: display_path(path),
        source,
    })?;
    Ok(Arc::new(table))
}

pub fn load_events(path: &Path) -> Result<Vec<Event>, InputError> {
    let json = read_text(path)?;
    serde_json::from_str(&json).map_err(|source| InputError::Events {
        path: display_path(path),
        source,
    })
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}
