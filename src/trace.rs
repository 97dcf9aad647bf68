//! Reading branch traces.
//!
//! A trace is plain text with one resolved conditional branch per line:
//! a hexadecimal program counter (optionally prefixed with `0x`) followed by
//! `0` for not-taken or `1` for taken.
//!
//! ```text
//! 0x40d7f4 1
//! 40d800 0
//! ```

pub mod synth;
pub use synth::*;

use std::fs::File;
use std::io::{ self, BufRead, BufReader };
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::branch::*;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to read trace: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: malformed branch record '{text}'")]
    Malformed { line: usize, text: String },
}

/// Parse a single line of a trace. Returns `Ok(None)` for blank lines.
pub fn parse_line(line: usize, text: &str) -> Result<Option<BranchRecord>, TraceError> {
    let malformed = || TraceError::Malformed { line, text: text.to_string() };

    let mut fields = text.split_whitespace();
    let Some(pc_str) = fields.next() else {
        return Ok(None);
    };
    let outcome_str = fields.next().ok_or_else(malformed)?;
    if fields.next().is_some() {
        return Err(malformed());
    }

    let digits = pc_str.strip_prefix("0x")
        .or_else(|| pc_str.strip_prefix("0X"))
        .unwrap_or(pc_str);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    let pc = u32::from_str_radix(digits, 16).map_err(|_| malformed())?;
    let outcome = match outcome_str {
        "0" => Outcome::N,
        "1" => Outcome::T,
        _ => return Err(malformed()),
    };
    Ok(Some(BranchRecord::new(pc, outcome)))
}

/// A list of branch records.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    pub name: String,
    pub data: Vec<BranchRecord>,
}
impl Trace {
    pub fn new(name: impl ToString, data: Vec<BranchRecord>) -> Self {
        Self { name: name.to_string(), data }
    }

    /// Read a trace from some buffered reader.
    pub fn from_reader(name: impl ToString, reader: impl BufRead)
        -> Result<Self, TraceError>
    {
        let mut data = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            if let Some(record) = parse_line(idx + 1, &line?)? {
                data.push(record);
            }
        }
        let res = Self::new(name, data);
        debug!(name = %res.name, records = res.num_entries(), "loaded trace");
        Ok(res)
    }

    /// Read a trace from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let name = path.file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let f = File::open(path)?;
        Self::from_reader(name, BufReader::new(f))
    }

    /// Read a trace from standard input.
    pub fn from_stdin() -> Result<Self, TraceError> {
        Self::from_reader("<stdin>", io::stdin().lock())
    }

    /// Return the number of records
    pub fn num_entries(&self) -> usize { self.data.len() }

    pub fn name(&self) -> &str { &self.name }

    /// Return a slice of records.
    pub fn as_slice(&self) -> &[BranchRecord] { &self.data }

    /// Return a truncated slice of records
    pub fn as_slice_trunc(&self, limit: usize) -> &[BranchRecord] {
        &self.data[..limit.min(self.data.len())]
    }
}
