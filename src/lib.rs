// SPDX-License-Identifier: MIT

mod runner;
pub mod errors;
pub mod seq;
pub mod trim;

pub use crate::runner::process_file;

use crate::errors::StretchTrimError;

pub fn run() -> Result<(), StretchTrimError> {
    runner::run()
}
