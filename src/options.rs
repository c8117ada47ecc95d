#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum UnterminatedPolicy {
    /// Fail the whole pass with `RepairError::UnterminatedRegion`. Nothing is
    /// written, so the original text stays intact.
    Error,
    /// Legacy behavior of the original script: output ends at the replacement
    /// line and every later line is dropped.
    Truncate,
    /// Leave the offending region untouched: the trigger line is copied
    /// verbatim and scanning resumes on the next line.
    Keep,
}

#[derive(Clone, Debug)]
pub struct Options {
    /// Function name of the broken call site, e.g. `handleControllerError`.
    pub callee: String,
    /// Fixed prefix for the synthesized label: the replacement embeds
    /// `'<label_prefix>.<contextName>'` (or the prefix alone when no context
    /// header has been seen yet).
    pub label_prefix: String,
    /// What to do when a detected region has no double-closing-brace
    /// terminator before end of input.
    pub unterminated: UnterminatedPolicy,
    /// Enable repair logging. Use `repair_to_string_with_log` to retrieve logs.
    pub logging: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            callee: "handleControllerError".to_string(),
            label_prefix: "Controller".to_string(),
            unterminated: UnterminatedPolicy::Error,
            logging: false,
        }
    }
}
