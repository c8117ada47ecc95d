use crate::classify::brace_delta;
use regex::Regex;
use std::sync::LazyLock;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*export\s+async\s+function\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*\(")
        .expect("context header pattern is valid")
});

struct Frame {
    name: String,
    /// Brace depth just before the header line.
    open_depth: i32,
    /// Set once depth has risen above `open_depth`, i.e. the body has opened.
    /// Keeps multi-line headers from popping their own frame.
    armed: bool,
}

/// Tracks which named context (exported async function) encloses the current
/// line. Frames are pushed when a header is recognized and popped when brace
/// depth falls back to the level the header was seen at, so attribution stays
/// correct across sibling and nested contexts.
pub struct ContextTracker {
    frames: Vec<Frame>,
    depth: i32,
}

impl ContextTracker {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            depth: 0,
        }
    }

    /// Feed one line of the (corrected) output. Returns the name of a context
    /// entered on this line, if any.
    pub fn observe(&mut self, line: &str) -> Option<String> {
        let header = HEADER_RE
            .captures(line)
            .map(|caps| caps[1].to_string());
        let open_depth = self.depth;
        self.depth += brace_delta(line);

        for frame in &mut self.frames {
            if self.depth > frame.open_depth {
                frame.armed = true;
            }
        }
        while matches!(self.frames.last(), Some(f) if f.armed && self.depth <= f.open_depth) {
            self.frames.pop();
        }

        if let Some(name) = &header {
            self.frames.push(Frame {
                name: name.clone(),
                open_depth,
                armed: self.depth > open_depth,
            });
        }
        header
    }

    /// Name of the innermost open context, if any.
    pub fn active(&self) -> Option<&str> {
        self.frames.last().map(|f| f.name.as_str())
    }
}
