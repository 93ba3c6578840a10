use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::db::DEFAULT_SLOT;
use crate::error::PickerResult;

/// Random team picker with round-robin scheduling.
#[derive(Debug, Clone, Parser)]
#[command(name = "team-picker", version)]
pub struct Config {
    /// Database file holding the saved result (default: .data/team-picker.db)
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Members per team
    #[arg(long, default_value_t = 2)]
    pub size: usize,

    /// Pause before results are shown, in milliseconds
    #[arg(long = "delay-ms", default_value_t = 2000)]
    pub delay_ms: u64,

    /// Seed for reproducible draws
    #[arg(long)]
    pub seed: Option<u64>,

    /// Name of the slot the result is saved under
    #[arg(long, default_value = DEFAULT_SLOT)]
    pub slot: String,

    /// Log debug detail to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Resolves the database path, creating `.data/` for the default location.
    pub fn db_path(&self) -> PickerResult<PathBuf> {
        if let Some(path) = &self.file {
            return Ok(path.clone());
        }
        let dir = PathBuf::from(".data");
        if !dir.exists() {
            std::fs::create_dir_all(&dir)?;
        }
        Ok(dir.join("team-picker.db"))
    }
}
