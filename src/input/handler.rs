use crate::game::Direction;

/// What a line of player input asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Start,
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map one input line to a command. Unknown input maps to [`Command::None`].
    pub fn handle_line(&self, line: &str) -> Command {
        match line.trim().to_ascii_lowercase().as_str() {
            // Movement - words
            "up" | "u" => Command::Turn(Direction::Up),
            "down" => Command::Turn(Direction::Down),
            "left" | "l" => Command::Turn(Direction::Left),
            "right" | "r" => Command::Turn(Direction::Right),

            // Movement - WASD
            "w" => Command::Turn(Direction::Up),
            "s" => Command::Turn(Direction::Down),
            "a" => Command::Turn(Direction::Left),
            "d" => Command::Turn(Direction::Right),

            // Controls
            "" | "start" | "space" => Command::Start,
            "restart" | "n" => Command::Restart,
            "quit" | "q" | "exit" => Command::Quit,

            _ => Command::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
