use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepairError {
    /// A broken call site was detected but no double-closing-brace terminator
    /// was found before end of input. `line` is the 1-based line number of the
    /// trigger line; `context` is the attributed enclosing context, if any.
    #[error("unterminated repair region at line {line}{}", fmt_context(.context))]
    UnterminatedRegion { line: usize, context: Option<String> },

    /// Write failure on a caller-supplied sink.
    #[error("write error: {0}")]
    Write(#[source] io::Error),

    /// Storage boundary failure: the source could not be read or the
    /// destination could not be written.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RepairError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn fmt_context(context: &Option<String>) -> String {
    match context {
        Some(name) => format!(" (in {name})"),
        None => String::new(),
    }
}
