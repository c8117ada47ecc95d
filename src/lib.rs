mod classify;
pub mod cli;
mod context;
mod detect;
mod emit;
mod engine;
pub mod error;
pub mod options;

pub use engine::{RepairLogEntry, RepairSummary};
pub use error::RepairError;
pub use options::{Options, UnterminatedPolicy};

use crate::emit::{StringSink, WriterSink};
use std::io::Write;
use std::path::Path;

/// Repair one pass over line-delimited source text, rewriting truncated
/// error-handler call sites and folding the duplicated closing brace each one
/// leaves behind. Returns the corrected text.
pub fn repair_to_string(input: &str, opts: &Options) -> Result<String, RepairError> {
    let mut sink = StringSink::new();
    engine::run(input, opts, &mut sink)?;
    Ok(sink.into_string())
}

/// Repair and return both the corrected text and the repair log.
/// Log entries are only collected when `opts.logging` is set.
pub fn repair_to_string_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<RepairLogEntry>), RepairError> {
    let mut sink = StringSink::new();
    let summary = engine::run(input, opts, &mut sink)?;
    Ok((sink.into_string(), summary.log))
}

/// Repair and write the corrected text into an `io::Write`, avoiding an extra
/// copy of the final string when the caller intends to stream to a sink.
pub fn repair_to_writer<W: Write>(
    input: &str,
    opts: &Options,
    writer: &mut W,
) -> Result<RepairSummary, RepairError> {
    let mut sink = WriterSink::new(writer);
    let summary = engine::run(input, opts, &mut sink)?;
    sink.finish()?;
    Ok(summary)
}

/// Read a file, repair it, and overwrite it in place. The write is a single
/// whole-buffer commit: on any failure before it, the original file is left
/// untouched.
pub fn repair_file(path: &Path, opts: &Options) -> Result<RepairSummary, RepairError> {
    let content = std::fs::read_to_string(path).map_err(|e| RepairError::io(path, e))?;
    let mut sink = StringSink::new();
    let summary = engine::run(&content, opts, &mut sink)?;
    std::fs::write(path, sink.into_string()).map_err(|e| RepairError::io(path, e))?;
    Ok(summary)
}

#[cfg(test)]
mod tests;
