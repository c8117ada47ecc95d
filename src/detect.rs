use memchr::memmem;

/// Recognizes the one malformed call-site shape this tool repairs: the callee
/// invoked with the standard `(error, res,` argument head, where the label
/// argument was truncated down to a bare opening quote and a stray comma.
///
/// This is a structural signature test over a single line, not a grammar
/// parse. Differently shaped corruption will not match.
pub struct BrokenCallDetector {
    callee: String,
}

impl BrokenCallDetector {
    pub fn new(callee: &str) -> Self {
        Self {
            callee: callee.to_string(),
        }
    }

    pub fn matches(&self, line: &str) -> bool {
        let Some(pos) = memmem::find(line.as_bytes(), self.callee.as_bytes()) else {
            return false;
        };
        let rest = &line[pos + self.callee.len()..];
        match strip_args_head(rest) {
            Some(rest) => is_truncated_label(rest),
            None => false,
        }
    }
}

/// Consume `(error, res,` with tolerant interior whitespace.
fn strip_args_head(s: &str) -> Option<&str> {
    let s = s.strip_prefix('(')?;
    let s = strip_token(s, "error")?;
    let s = strip_comma(s)?;
    let s = strip_token(s, "res")?;
    strip_comma(s)
}

fn strip_token<'a>(s: &'a str, token: &str) -> Option<&'a str> {
    s.trim_start().strip_prefix(token)
}

fn strip_comma(s: &str) -> Option<&str> {
    s.trim_start().strip_prefix(',')
}

/// The truncated label: an opening single quote immediately followed by the
/// stray comma the codemod left behind, then nothing but whitespace.
fn is_truncated_label(s: &str) -> bool {
    match s.trim_start().strip_prefix('\'') {
        Some(rest) => matches!(rest.strip_prefix(','), Some(tail) if tail.trim().is_empty()),
        None => false,
    }
}
