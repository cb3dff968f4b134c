use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument, trace};

use super::{
    action::Direction,
    config::GameConfig,
    error::ConfigError,
    food::Food,
    grid::{Cell, Grid, Topology},
    snake::Snake,
    state::GameState,
};

/// Points awarded per food eaten
pub const SCORE_PER_FOOD: u32 = 1;

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left a walled board
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// What a call to [`World::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The world was not playing; nothing changed
    Idle,
    /// The snake moved onto a free cell
    Moved,
    /// The snake ate and grew, and new food was placed
    Ate,
    /// The snake grew into the last free cell
    Won,
    /// The move was blocked and the game is over
    Collided(CollisionType),
}

impl StepOutcome {
    pub fn ate_food(&self) -> bool {
        matches!(self, StepOutcome::Ate | StepOutcome::Won)
    }
}

/// A single snake game session.
///
/// The world is mutated in place while playing. Restarting means constructing a
/// new one.
#[derive(Debug, Clone)]
pub struct World {
    grid: Grid,
    topology: Topology,
    snake: Snake,
    food: Option<Food>,
    state: GameState,
    score: u32,
    rng: StdRng,
}

impl World {
    /// Create a wrap-around world with an entropy-seeded RNG
    pub fn new(size: usize, initial_head: Cell) -> Result<Self, ConfigError> {
        Self::from_config(&GameConfig::new(size, initial_head))
    }

    /// Create a wrap-around world whose food placement is reproducible
    pub fn with_seed(size: usize, initial_head: Cell, seed: u64) -> Result<Self, ConfigError> {
        Self::from_config(&GameConfig::new(size, initial_head).with_seed(seed))
    }

    #[instrument(level = "debug", skip_all, fields(size = config.size, head = config.initial_head))]
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut world = Self {
            grid,
            topology: config.topology,
            snake: Snake::new(config.initial_head),
            food: None,
            state: GameState::Ready,
            score: 0,
            rng,
        };
        world.replace_food();

        debug!(food = ?world.food_index(), "world created");
        Ok(world)
    }

    /// Buffer a direction change for the next step.
    ///
    /// Reversals of the current heading are dropped.
    pub fn change_direction(&mut self, direction: Direction) {
        if !self.snake.set_pending_direction(direction) {
            trace!(?direction, current = ?self.snake.direction(), "reversal ignored");
        }
    }

    /// Leave Ready for Playing. Returns false, changing nothing, in any other state.
    pub fn game_start(&mut self) -> bool {
        if !self.state.is_ready() {
            return false;
        }
        self.state = self.state.started();
        debug!("game started");
        true
    }

    /// Advance the simulation by one tick.
    ///
    /// Outside Playing this is a no-op returning [`StepOutcome::Idle`]. The
    /// outcome is fully decided before anything is mutated.
    pub fn step(&mut self) -> StepOutcome {
        if !self.state.is_playing() {
            return StepOutcome::Idle;
        }

        let Some(candidate) = self.snake.next_head(&self.grid, self.topology) else {
            return self.end(GameState::GameOver, StepOutcome::Collided(CollisionType::Wall));
        };

        let grew = self.food.is_some_and(|food| food.cell() == candidate);
        if self.snake.collides_with_self(candidate, grew) {
            return self.end(
                GameState::GameOver,
                StepOutcome::Collided(CollisionType::SelfCollision),
            );
        }

        let moved = self.snake.apply_step(&self.grid, self.topology, grew);
        debug_assert_eq!(moved, Some(candidate));

        if !grew {
            return StepOutcome::Moved;
        }

        self.score += SCORE_PER_FOOD;
        if self.snake.len() == self.grid.cell_count() {
            self.food = None;
            return self.end(GameState::Won, StepOutcome::Won);
        }

        self.replace_food();
        debug!(score = self.score, length = self.snake.len(), "food eaten");
        StepOutcome::Ate
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn snake_head_index(&self) -> Cell {
        self.snake.head()
    }

    pub fn snake_length(&self) -> usize {
        self.snake.len()
    }

    /// Occupied cells, head first
    pub fn snake_cells(&self) -> Vec<Cell> {
        self.snake.cells().collect()
    }

    /// Current food cell; `None` only once the board is full
    pub fn food_index(&self) -> Option<Cell> {
        self.food.map(|food| food.cell())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    pub fn current_direction(&self) -> Direction {
        self.snake.direction()
    }

    /// Cells holding neither snake nor food
    pub fn free_cells(&self) -> usize {
        self.grid.cell_count() - self.snake.len() - usize::from(self.food.is_some())
    }

    fn end(&mut self, state: GameState, outcome: StepOutcome) -> StepOutcome {
        self.state = self.state.after_tick(state);
        debug!(
            state = ?self.state,
            ?outcome,
            score = self.score,
            length = self.snake.len(),
            "game ended"
        );
        outcome
    }

    fn replace_food(&mut self) {
        let mut occupied = vec![false; self.grid.cell_count()];
        for cell in self.snake.cells() {
            occupied[cell] = true;
        }
        self.food = Food::place(&self.grid, |cell| occupied[cell], &mut self.rng);
    }
}

#[cfg(test)]
impl World {
    /// Replace snake and food to set up a scenario
    fn arrange(&mut self, snake: Snake, food: Option<Cell>) {
        self.snake = snake;
        self.food = food.map(Food::at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(config: &GameConfig) -> World {
        let mut world = World::from_config(config).unwrap();
        assert!(world.game_start());
        world
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            World::new(3, 0).unwrap_err(),
            ConfigError::SizeTooSmall { size: 3, min: 4 }
        );
        assert_eq!(
            World::new(4, 16).unwrap_err(),
            ConfigError::HeadOutOfBounds { head: 16, cells: 16 }
        );
        assert!(matches!(
            World::new(1usize << 33, 0),
            Err(ConfigError::SizeTooLarge { .. })
        ));
    }

    #[test]
    fn test_new_world() {
        let world = World::with_seed(4, 5, 1).unwrap();

        assert_eq!(world.game_state(), GameState::Ready);
        assert_eq!(world.width(), 4);
        assert_eq!(world.snake_head_index(), 5);
        assert_eq!(world.snake_length(), 1);
        assert_eq!(world.score(), 0);
        assert_eq!(world.current_direction(), Direction::Right);
        assert_eq!(world.free_cells(), 14);

        let food = world.food_index().unwrap();
        assert_ne!(food, 5);
        assert!(food < 16);
    }

    #[test]
    fn test_step_in_ready_is_noop() {
        let mut world = World::with_seed(4, 5, 3).unwrap();
        let food = world.food_index();

        assert_eq!(world.step(), StepOutcome::Idle);

        assert_eq!(world.game_state(), GameState::Ready);
        assert_eq!(world.snake_cells(), vec![5]);
        assert_eq!(world.food_index(), food);
    }

    #[test]
    fn test_game_start_only_from_ready() {
        let mut world = World::with_seed(4, 5, 3).unwrap();
        assert!(world.game_start());
        assert_eq!(world.game_state(), GameState::Playing);
        assert!(!world.game_start());
        assert_eq!(world.game_state(), GameState::Playing);
    }

    #[test]
    fn test_basic_movement() {
        let mut world = playing(&GameConfig::small().with_seed(11));
        world.arrange(Snake::new(5), Some(0));

        assert_eq!(world.step(), StepOutcome::Moved);

        assert_eq!(world.snake_head_index(), 6);
        assert_eq!(world.snake_length(), 1);
        assert_eq!(world.score(), 0);
        assert_eq!(world.game_state(), GameState::Playing);
    }

    #[test]
    fn test_food_consumption() {
        let mut world = playing(&GameConfig::small().with_seed(11));
        world.arrange(Snake::new(5), Some(6));

        let outcome = world.step();
        assert_eq!(outcome, StepOutcome::Ate);
        assert!(outcome.ate_food());

        assert_eq!(world.snake_cells(), vec![6, 5]);
        assert_eq!(world.score(), 1);
        let food = world.food_index().unwrap();
        assert!(!world.snake_cells().contains(&food));
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let mut world = playing(&GameConfig::small().with_seed(2));
        world.arrange(Snake::new(5), Some(0));

        world.change_direction(Direction::Left);
        world.step();

        assert_eq!(world.snake_head_index(), 6);
        assert_eq!(world.current_direction(), Direction::Right);
    }

    #[test]
    fn test_last_accepted_direction_wins() {
        let mut world = playing(&GameConfig::small().with_seed(2));
        world.arrange(Snake::new(5), Some(0));

        world.change_direction(Direction::Up);
        world.change_direction(Direction::Left);
        world.change_direction(Direction::Down);
        world.step();

        assert_eq!(world.snake_head_index(), 9);
        assert_eq!(world.current_direction(), Direction::Down);
    }

    #[test]
    fn test_direction_buffered_before_start() {
        let mut world = World::with_seed(4, 5, 2).unwrap();
        world.arrange(Snake::new(5), Some(0));
        world.change_direction(Direction::Down);

        assert_eq!(world.current_direction(), Direction::Right);
        world.game_start();
        world.step();
        assert_eq!(world.snake_head_index(), 9);
    }

    #[test]
    fn test_wraps_around_edges() {
        let mut world = playing(&GameConfig::new(4, 7).with_seed(5));
        world.arrange(Snake::new(7), Some(0));

        assert_eq!(world.step(), StepOutcome::Moved);
        assert_eq!(world.snake_head_index(), 4);
    }

    #[test]
    fn test_wall_collision() {
        let config = GameConfig::new(4, 7)
            .with_topology(Topology::Walled)
            .with_seed(5);
        let mut world = playing(&config);
        world.arrange(Snake::new(7), Some(0));

        assert_eq!(world.step(), StepOutcome::Collided(CollisionType::Wall));
        assert_eq!(world.game_state(), GameState::GameOver);
        assert_eq!(world.snake_cells(), vec![7]);
    }

    #[test]
    fn test_self_collision() {
        let mut world = playing(&GameConfig::small().with_seed(8));
        world.arrange(
            Snake::from_cells([5, 6, 10, 9, 8], Direction::Left),
            Some(15),
        );

        world.change_direction(Direction::Down);
        let result = world.step();

        assert_eq!(result, StepOutcome::Collided(CollisionType::SelfCollision));
        assert_eq!(world.game_state(), GameState::GameOver);
        // Frozen where it was
        assert_eq!(world.snake_cells(), vec![5, 6, 10, 9, 8]);
        assert_eq!(world.step(), StepOutcome::Idle);
    }

    #[test]
    fn test_head_may_follow_tail() {
        let mut world = playing(&GameConfig::small().with_seed(8));
        world.arrange(Snake::from_cells([5, 6, 10, 9], Direction::Left), Some(15));

        world.change_direction(Direction::Down);

        assert_eq!(world.step(), StepOutcome::Moved);
        assert_eq!(world.snake_cells(), vec![9, 5, 6, 10]);
    }

    #[test]
    fn test_collision_is_deterministic() {
        let moves = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

        let ticks: Vec<Option<usize>> = (0..5)
            .map(|seed| {
                let mut world = playing(&GameConfig::small().with_seed(seed));
                world.arrange(
                    Snake::from_cells([6, 5, 4, 0, 1], Direction::Right),
                    Some(15),
                );
                moves.iter().position(|&direction| {
                    world.change_direction(direction);
                    world.step();
                    world.game_state() == GameState::GameOver
                })
            })
            .collect();

        assert!(ticks.iter().all(|&tick| tick == Some(3)));
    }

    #[test]
    fn test_win_when_board_fills() {
        let mut world = playing(&GameConfig::small().with_seed(4));
        world.arrange(
            Snake::from_cells(
                [14, 13, 12, 8, 9, 10, 11, 7, 6, 5, 4, 0, 1, 2, 3],
                Direction::Right,
            ),
            Some(15),
        );

        assert_eq!(world.step(), StepOutcome::Won);

        assert_eq!(world.game_state(), GameState::Won);
        assert_eq!(world.snake_length(), 16);
        assert_eq!(world.score(), 1);
        assert_eq!(world.food_index(), None);
        assert_eq!(world.free_cells(), 0);

        let cells = world.snake_cells();
        assert_eq!(world.step(), StepOutcome::Idle);
        assert_eq!(world.snake_cells(), cells);
    }
}
