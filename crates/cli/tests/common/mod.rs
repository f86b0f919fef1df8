//! Common utilities for integration tests

pub mod cli;

use std::fs;
use std::path::Path;

/// Write the three watched save files with distinct contents
#[allow(dead_code)]
pub fn write_saves(dir: &Path) -> std::io::Result<()> {
    fs::write(dir.join("TheIsland.ark"), b"island world data")?;
    fs::write(dir.join("LocalPlayer.arkprofile"), b"player profile")?;
    fs::write(dir.join("PlayerLocalData.arkprofile"), b"local data")?;
    Ok(())
}
