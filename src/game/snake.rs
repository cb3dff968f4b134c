use std::collections::VecDeque;

use super::action::Direction;
use super::grid::{Cell, Grid, Topology};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at the front
    body: VecDeque<Cell>,
    /// Direction used by the last committed step
    direction: Direction,
    /// Direction the next step will take
    pending_direction: Direction,
}

impl Snake {
    /// Create a one-cell snake heading right
    pub fn new(head: Cell) -> Self {
        Self {
            body: VecDeque::from([head]),
            direction: Direction::Right,
            pending_direction: Direction::Right,
        }
    }

    /// Build a snake from explicit cells, head first
    #[cfg(test)]
    pub(crate) fn from_cells(cells: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!body.is_empty(), "snake needs at least one cell");
        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a constructed snake
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Body cells, head first
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Buffer a heading for the next step.
    ///
    /// The exact reverse of the committed direction is ignored. Returns whether
    /// the request was accepted.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Where the head goes on the next step, or `None` if it would leave a walled board
    pub fn next_head(&self, grid: &Grid, topology: Topology) -> Option<Cell> {
        grid.neighbour(self.head(), self.pending_direction, topology)
    }

    /// Check whether `candidate` hits a segment that is still there after the step.
    ///
    /// Without growth the tail moves away this tick, so the head may follow it.
    pub fn collides_with_self(&self, candidate: Cell, grew: bool) -> bool {
        let remaining = if grew {
            self.body.len()
        } else {
            self.body.len() - 1
        };
        self.body.iter().take(remaining).any(|&cell| cell == candidate)
    }

    /// Commit the pending direction and move one cell, keeping the tail if `grew`.
    ///
    /// Returns the new head, or `None` without touching the snake when the move
    /// would leave a walled board.
    pub fn apply_step(&mut self, grid: &Grid, topology: Topology, grew: bool) -> Option<Cell> {
        let new_head = self.next_head(grid, topology)?;
        self.direction = self.pending_direction;
        self.body.push_front(new_head);

        if !grew {
            self.body.pop_back();
        }

        Some(new_head)
    }
}
