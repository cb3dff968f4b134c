/// Mode of a game session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Ready,
    Playing,
    Won,
    GameOver,
}

impl GameState {
    pub fn is_playing(&self) -> bool {
        matches!(self, GameState::Playing)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, GameState::Ready)
    }

    /// Won and GameOver only leave through reconstruction
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Won | GameState::GameOver)
    }

    /// Ready -> Playing; any other state is kept
    pub fn started(self) -> GameState {
        match self {
            GameState::Ready => GameState::Playing,
            other => other,
        }
    }

    /// Playing -> `outcome` when `outcome` is a state a tick may produce
    pub fn after_tick(self, outcome: GameState) -> GameState {
        match (self, outcome) {
            (GameState::Playing, GameState::Playing | GameState::Won | GameState::GameOver) => {
                outcome
            }
            (current, _) => current,
        }
    }

    /// Numeric code handed to presentation layers
    pub fn as_code(&self) -> u8 {
        match self {
            GameState::Playing => 0,
            GameState::Won => 1,
            GameState::GameOver => 2,
            GameState::Ready => 3,
        }
    }
}
