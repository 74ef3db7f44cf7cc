// SPDX-License-Identifier: MIT

use std::{fmt, io};

#[derive(Debug)]
pub enum StretchTrimError {
    Io(io::Error),
}

// Allows conversion to StretchTrimError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for StretchTrimError {
    fn from(e: io::Error) -> Self {
        StretchTrimError::Io(e)
    }
}

impl fmt::Display for StretchTrimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StretchTrimError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}
