use anyhow::{Context, Result};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, instrument, warn};

use crate::game::{GameState, StepOutcome, World};
use crate::input::{Command, InputHandler};
use crate::metrics::GameMetrics;

use super::config::SessionConfig;

/// Headless driver: ticks a [`World`] on a timer and feeds it commands read from stdin
pub struct SessionMode {
    config: SessionConfig,
    world: World,
    metrics: GameMetrics,
    input_handler: InputHandler,
    round: u64,
    tick: u64,
    input_closed: bool,
    should_quit: bool,
}

impl SessionMode {
    pub fn new(config: SessionConfig) -> Result<Self> {
        let game_config = config.game_config(0, &mut rand::thread_rng());
        let world = World::from_config(&game_config).context("Invalid game configuration")?;

        Ok(Self {
            config,
            world,
            metrics: GameMetrics::new(),
            input_handler: InputHandler::new(),
            round: 0,
            tick: 0,
            input_closed: false,
            should_quit: false,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    #[instrument(skip(self), fields(size = self.config.size, tick_ms = self.config.tick_ms))]
    pub async fn run(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        let mut tick_timer = interval(Duration::from_millis(self.config.tick_ms.max(1)));
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!("Session ready - type 'start' (or press enter), steer with w/a/s/d, 'quit' to leave");

        loop {
            tokio::select! {
                // Player input
                line = lines.next_line(), if !self.input_closed => {
                    match line.context("Failed to read input")? {
                        Some(line) => {
                            let command = self.input_handler.handle_line(&line);
                            self.handle_command(command)?;
                        }
                        None => {
                            debug!("input closed");
                            self.input_closed = true;
                        }
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.on_tick();
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.finished() {
                break;
            }
        }

        self.metrics.update();
        info!(
            games_played = self.metrics.games_played,
            games_won = self.metrics.games_won,
            high_score = self.metrics.high_score,
            "Session finished"
        );
        Ok(())
    }

    /// The session ends on quit or once input is gone, even mid-game
    fn finished(&self) -> bool {
        self.should_quit || self.input_closed
    }

    fn handle_command(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Turn(direction) => {
                self.world.change_direction(direction);
            }
            Command::Start => {
                if self.world.game_start() {
                    self.metrics.on_game_start();
                    info!(
                        round = self.round,
                        head = self.world.snake_head_index(),
                        "Game started"
                    );
                }
            }
            Command::Restart => {
                if self.world.game_state().is_terminal() {
                    self.restart()?;
                } else {
                    warn!(state = ?self.world.game_state(), "Restart only follows a finished game");
                }
            }
            Command::Quit => {
                self.should_quit = true;
            }
            Command::None => {}
        }

        Ok(())
    }

    fn on_tick(&mut self) -> StepOutcome {
        let outcome = self.world.step();
        if outcome == StepOutcome::Idle {
            return outcome;
        }

        self.tick += 1;
        self.metrics.update();
        info!(
            tick = self.tick,
            head = self.world.snake_head_index(),
            length = self.world.snake_length(),
            food = ?self.world.food_index(),
            score = self.world.score(),
            direction = ?self.world.current_direction(),
            "{:?}",
            outcome
        );

        let state = self.world.game_state();
        if state.is_terminal() {
            self.metrics.on_game_end(state, self.world.score());
            let score = self.world.score();
            let time = self.metrics.format_time();
            match state {
                GameState::Won => info!(score, %time, "You won"),
                _ => info!(score, %time, "Game over"),
            }
            info!("Type 'restart' for a new game");
        }

        outcome
    }

    fn restart(&mut self) -> Result<()> {
        self.round += 1;
        let game_config = self.config.game_config(self.round, &mut rand::thread_rng());
        self.world = World::from_config(&game_config).context("Invalid game configuration")?;
        self.tick = 0;
        info!(round = self.round, head = self.world.snake_head_index(), "New game ready");
        Ok(())
    }
}
