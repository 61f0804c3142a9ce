use crate::models::SongId;
use std::io::{self, Write};
use thiserror::Error;

// Reasons a single input line is rejected; none of them stop the run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstructionError {
    #[error("line matches no instruction")]
    Unrecognized,
    #[error("roster bound {0:?} is not a number")]
    MalformedBound(String),
    #[error("roster bound {requested} is below the current bound {current}")]
    BoundDecreased { current: SongId, requested: SongId },
    #[error("roster bound {requested} is outside 1..={max}")]
    BoundOutOfRange { requested: SongId, max: SongId },
    #[error("song id {0:?} is not a number")]
    MalformedSongId(String),
    #[error("song {0} is named more than once")]
    DuplicateVote(SongId),
    #[error("song {0} is not eligible for voting")]
    IneligibleSong(SongId),
}

// A rejected line, kept as the bytes that were read
#[derive(Debug, Error)]
#[error("Error in line {line_number}: {}", String::from_utf8_lossy(.line))]
pub struct LineError {
    pub line_number: u64,
    pub line: Vec<u8>,
    #[source]
    pub source: InstructionError,
}

impl LineError {
    /// Writes the diagnostic line, echoing the input bytes unchanged.
    pub fn write_diagnostic<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "Error in line {}: ", self.line_number)?;
        out.write_all(&self.line)?;
        writeln!(out)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be an integer in 1..={max}, got {value:?}")]
    InvalidNumber { key: &'static str, value: String, max: SongId },
    #[error("{key} must be \"text\" or \"json\", got {value:?}")]
    InvalidOutputFormat { key: &'static str, value: String },
}
