use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SnakeError;
use crate::grid::Grid;
use crate::snake::INITIAL_LENGTH;

pub const CONFIG_FILE: &str = "snake.json";
pub const CONFIG_ENV: &str = "SNAKE_CONFIG";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub cell_size: u32,
    pub ticks_per_second: u32,
    /// Resource directory handed to ggez.
    pub resource_dir: PathBuf,
    /// Sound folder, relative to the resource root. Expected files are
    /// `fart.wav` (eat), `crash.wav`, `game_over.wav` and `explosion.wav`.
    pub sound_dir: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_width: 800,
            window_height: 600,
            cell_size: 20,
            ticks_per_second: 10,
            resource_dir: PathBuf::from("./resources"),
            sound_dir: "/sounds".to_owned(),
        }
    }
}

impl GameConfig {
    /// Reads the config named by `SNAKE_CONFIG`, falling back to
    /// `snake.json` in the working directory. A missing file yields the
    /// defaults.
    pub fn load() -> Result<Self, SnakeError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, SnakeError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, path),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "no config file, using defaults");
                Ok(GameConfig::default())
            }
            Err(source) => Err(SnakeError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_json(contents: &str) -> Result<Self, SnakeError> {
        Self::parse(contents, Path::new("<inline>"))
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, SnakeError> {
        let config: GameConfig =
            serde_json::from_str(contents).map_err(|source| SnakeError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SnakeError> {
        if self.cell_size == 0 {
            return Err(SnakeError::InvalidConfig("cell_size must be positive"));
        }
        if self.ticks_per_second == 0 {
            return Err(SnakeError::InvalidConfig("ticks_per_second must be positive"));
        }
        if self.window_width < self.cell_size || self.window_height < self.cell_size {
            return Err(SnakeError::InvalidConfig(
                "window must be at least one cell in each dimension",
            ));
        }
        if self.window_width / self.cell_size > i16::MAX as u32
            || self.window_height / self.cell_size > i16::MAX as u32
            || self.cell_size > i16::MAX as u32
        {
            return Err(SnakeError::InvalidConfig("grid is too large"));
        }
        // The snake starts at a quarter of the width with its tail trailing
        // left, so that many columns must fit before the head.
        if self.window_width / self.cell_size / 4 < INITIAL_LENGTH as u32 - 1 {
            return Err(SnakeError::InvalidConfig(
                "grid is too narrow for the starting snake",
            ));
        }
        Ok(())
    }

    /// The grid implied by window and cell size. Leftover pixels are dropped.
    pub fn grid(&self) -> Grid {
        Grid::new(
            (self.window_width / self.cell_size) as i16,
            (self.window_height / self.cell_size) as i16,
            self.cell_size as i16,
        )
    }
}
