//! Interactive save folder prompt

use anyhow::{Context, Result};
use ark_core::WatchConfig;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

/// Asks the operator for the save folder until an existing directory is given
pub struct PathResolver<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PathResolver<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt repeatedly; end of input is an error
    pub fn resolve(&mut self) -> Result<WatchConfig> {
        loop {
            writeln!(self.output, "Please insert the folder path to your Ark save files.")?;
            write!(self.output, "-> ")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read save folder path")?;
            if read == 0 {
                anyhow::bail!("No save folder path given (end of input)");
            }

            let path = normalize_input(&line);
            match WatchConfig::new(&path) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    debug!("Rejected save folder input: {}", e);
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }
}

/// Strip the line ending and convert `/` to the native separator
pub fn normalize_input(line: &str) -> PathBuf {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    from_slash(trimmed)
}

#[cfg(windows)]
fn from_slash(path: &str) -> PathBuf {
    PathBuf::from(path.replace('/', "\\"))
}

#[cfg(not(windows))]
fn from_slash(path: &str) -> PathBuf {
    PathBuf::from(path)
}
