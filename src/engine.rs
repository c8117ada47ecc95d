use crate::classify::{is_lone_close, leading_ws};
use crate::context::ContextTracker;
use crate::detect::BrokenCallDetector;
use crate::emit::LineSink;
use crate::error::RepairError;
use crate::options::{Options, UnterminatedPolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RepairLogEntry {
    /// 1-based line number in the input.
    pub line: usize,
    pub message: &'static str,
    pub detail: String,
}

/// Outcome of one repair pass.
#[derive(Debug, Default)]
pub struct RepairSummary {
    /// Call sites rewritten (each with its duplicate brace folded).
    pub repaired: usize,
    /// Regions left untouched under `UnterminatedPolicy::Keep`.
    pub skipped: usize,
    pub log: Vec<RepairLogEntry>,
}

struct Logger {
    enable: bool,
    entries: Vec<RepairLogEntry>,
}

impl Logger {
    fn log(&mut self, line: usize, message: &'static str, detail: String) {
        if self.enable {
            self.entries.push(RepairLogEntry {
                line,
                message,
                detail,
            });
        }
    }
}

fn build_label(tracker: &ContextTracker, opts: &Options) -> String {
    match tracker.active() {
        Some(name) => format!("{}.{}", opts.label_prefix, name),
        None => opts.label_prefix.clone(),
    }
}

fn build_replacement(trigger: &str, label: &str, opts: &Options) -> String {
    format!(
        "{}{}(error, res, '{}');",
        leading_ws(trigger),
        opts.callee,
        label
    )
}

/// One left-to-right pass over `input`. Plain lines are copied through; each
/// detected broken call site is replaced by a canonical labeled call, and the
/// corrupted lines after it are consumed up to the duplicated closing-brace
/// pair, of which exactly one is kept.
///
/// The context tracker observes the lines actually emitted rather than the raw
/// input, so brace depth stays consistent with the corrected text across
/// repaired regions.
pub(crate) fn run<S: LineSink>(
    input: &str,
    opts: &Options,
    sink: &mut S,
) -> Result<RepairSummary, RepairError> {
    let lines: Vec<&str> = input.split('\n').collect();
    let detector = BrokenCallDetector::new(&opts.callee);
    let mut tracker = ContextTracker::new();
    let mut logger = Logger {
        enable: opts.logging,
        entries: Vec::new(),
    };
    let mut repaired = 0usize;
    let mut skipped = 0usize;

    let mut i = 0usize;
    while i < lines.len() {
        let line = lines[i];
        if !detector.matches(line) {
            if let Some(name) = tracker.observe(line) {
                logger.log(i + 1, "entered context", name);
            }
            sink.emit_line(line)?;
            i += 1;
            continue;
        }

        // Repairing: scan forward for the duplicated closing-brace pair that
        // terminates the corrupted region. Everything in between is discarded.
        let mut close = None;
        let mut j = i + 1;
        while j + 1 < lines.len() {
            if is_lone_close(lines[j]) && is_lone_close(lines[j + 1]) {
                close = Some(j);
                break;
            }
            j += 1;
        }

        match close {
            Some(j) => {
                let label = build_label(&tracker, opts);
                let replacement = build_replacement(line, &label, opts);
                logger.log(i + 1, "repaired call site", label);
                tracker.observe(&replacement);
                sink.emit_line(&replacement)?;
                // Keep the first of the two closing markers, drop the second.
                tracker.observe(lines[j]);
                sink.emit_line(lines[j])?;
                logger.log(j + 2, "folded duplicate closing brace", String::new());
                repaired += 1;
                i = j + 2;
            }
            None => match opts.unterminated {
                UnterminatedPolicy::Error => {
                    return Err(RepairError::UnterminatedRegion {
                        line: i + 1,
                        context: tracker.active().map(str::to_string),
                    });
                }
                UnterminatedPolicy::Truncate => {
                    let label = build_label(&tracker, opts);
                    let replacement = build_replacement(line, &label, opts);
                    logger.log(i + 1, "repaired call site", label);
                    logger.log(i + 1, "unterminated region, output truncated", String::new());
                    sink.emit_line(&replacement)?;
                    repaired += 1;
                    i = lines.len();
                }
                UnterminatedPolicy::Keep => {
                    logger.log(i + 1, "left unterminated region untouched", String::new());
                    tracker.observe(line);
                    sink.emit_line(line)?;
                    skipped += 1;
                    i += 1;
                }
            },
        }
    }

    Ok(RepairSummary {
        repaired,
        skipped,
        log: logger.entries,
    })
}
