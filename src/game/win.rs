//! Local win detection around the most recently placed piece.
//!
//! Only the cells reachable from the pivot along the four axes are inspected,
//! so a check costs O(run_to_win) regardless of board size.

use super::board::{Board, Position};
use super::player::Player;

/// One of the four lines through a cell. Each axis is walked in both
/// directions from the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right
    Horizontal,
    /// Bottom to top
    Vertical,
    /// Bottom-left to top-right (/)
    DiagonalRising,
    /// Top-left to bottom-right (\)
    DiagonalFalling,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalRising,
        Axis::DiagonalFalling,
    ];

    /// `(d_row, d_col)` of the forward direction; backward is the negation.
    /// Rows grow upward.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalRising => (1, 1),
            Axis::DiagonalFalling => (-1, 1),
        }
    }
}

/// Count consecutive `owner` cells starting one step away from `pivot`,
/// stopping at the first foreign or empty cell, the board edge, or `limit`.
fn count_direction(
    board: &Board,
    pivot: Position,
    owner: Player,
    (d_row, d_col): (isize, isize),
    limit: usize,
) -> usize {
    let target = owner.to_cell();
    let mut count = 0;
    for step in 1..=limit {
        match pivot
            .offset(d_row, d_col, step)
            .and_then(|pos| board.cell_at(pos))
        {
            Some(cell) if cell == target => count += 1,
            _ => break,
        }
    }
    count
}

/// Length of the `owner` run through `pivot` along `axis`, counting the pivot
/// itself and looking at most `run_to_win - 1` cells each way.
pub fn run_length(
    board: &Board,
    pivot: Position,
    owner: Player,
    axis: Axis,
    run_to_win: usize,
) -> usize {
    let limit = run_to_win.saturating_sub(1);
    let (d_row, d_col) = axis.delta();

    1 + count_direction(board, pivot, owner, (d_row, d_col), limit)
        + count_direction(board, pivot, owner, (-d_row, -d_col), limit)
}

/// First axis on which the piece at `pivot` completes a run of `run_to_win`.
pub fn winning_axis(
    board: &Board,
    pivot: Position,
    owner: Player,
    run_to_win: usize,
) -> Option<Axis> {
    Axis::ALL
        .into_iter()
        .find(|&axis| run_length(board, pivot, owner, axis, run_to_win) >= run_to_win)
}

/// Check if the piece `owner` just placed at `pivot` wins the game
pub fn check_win(board: &Board, pivot: Position, owner: Player, run_to_win: usize) -> bool {
    winning_axis(board, pivot, owner, run_to_win).is_some()
}
