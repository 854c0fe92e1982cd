//! Grid-based arcade snake.
//!
//! The game rules live in [`snake`], [`food`] and [`game`] and know nothing
//! about windows or speakers. [`render`] and [`audio`] are the ggez-backed
//! collaborators handed to the loop in `main`.

pub mod audio;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod snake;

pub use audio::{Cue, CuePlayer, Silent, SoundBank, Speaker};
pub use config::GameConfig;
pub use error::SnakeError;
pub use game::{Frame, Game, GameState, Tick};
pub use grid::{Cell, Direction, Grid, Tile};
pub use input::Command;
pub use snake::{Collision, Snake};
