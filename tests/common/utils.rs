// SPDX-License-Identifier: MIT

use std::fs;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test input");
    path
}

// Mirrors how the runner derives the log path: ".log" pushed onto the full
// output name, so the two can never disagree, non-UTF-8 paths included.
#[allow(dead_code)]
pub fn log_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".log");
    PathBuf::from(name)
}
