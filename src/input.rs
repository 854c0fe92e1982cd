use ggez::input::keyboard::KeyCode;

use crate::grid::Direction;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Command {
    Steer(Direction),
    Restart,
    Quit,
}

impl Command {
    pub fn from_keycode(key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Up => Some(Command::Steer(Direction::Up)),
            KeyCode::Down => Some(Command::Steer(Direction::Down)),
            KeyCode::Left => Some(Command::Steer(Direction::Left)),
            KeyCode::Right => Some(Command::Steer(Direction::Right)),
            KeyCode::Space => Some(Command::Restart),
            KeyCode::Escape => Some(Command::Quit),
            _ => None,
        }
    }
}
