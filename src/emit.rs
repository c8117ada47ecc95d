use crate::error::RepairError;
use std::io::Write;

/// Order-preserving accumulator for corrected lines. Lines are rejoined with a
/// single `\n` between them; no reordering, deduplication, or filtering.
pub trait LineSink {
    fn emit_line(&mut self, line: &str) -> Result<(), RepairError>;
}

pub struct StringSink {
    out: String,
    first: bool,
}

impl StringSink {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            first: true,
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl LineSink for StringSink {
    fn emit_line(&mut self, line: &str) -> Result<(), RepairError> {
        if !self.first {
            self.out.push('\n');
        }
        self.first = false;
        self.out.push_str(line);
        Ok(())
    }
}

pub struct WriterSink<'a, W: Write> {
    w: &'a mut W,
    buf: Vec<u8>,
    first: bool,
}

impl<'a, W: Write> WriterSink<'a, W> {
    pub fn new(w: &'a mut W) -> Self {
        Self {
            w,
            buf: Vec::with_capacity(8192),
            first: true,
        }
    }

    pub fn finish(&mut self) -> Result<(), RepairError> {
        if !self.buf.is_empty() {
            self.w.write_all(&self.buf).map_err(RepairError::Write)?;
            self.buf.clear();
        }
        Ok(())
    }
}

impl<'a, W: Write> LineSink for WriterSink<'a, W> {
    fn emit_line(&mut self, line: &str) -> Result<(), RepairError> {
        if !self.first {
            self.buf.push(b'\n');
        }
        self.first = false;
        self.buf.extend_from_slice(line.as_bytes());
        if self.buf.len() >= 8192 {
            self.w.write_all(&self.buf).map_err(RepairError::Write)?;
            self.buf.clear();
        }
        Ok(())
    }
}
