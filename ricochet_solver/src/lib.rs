mod breadth_first;
mod robot_move;
mod util;

use ricochet_board::{Board, Goal, Point};

pub use breadth_first::BreadthFirst;
pub use robot_move::RobotMove;

/// A pluggable multi-robot search strategy. `BreadthFirst` is the only
/// implementation carried forward; heuristic/A* search over a simplified
/// rook-move board is explicitly out of scope.
pub trait Solver {
    fn solve(
        &mut self,
        board: &mut Board,
        goal: Goal,
        robots: Vec<Point>,
        early_out: Option<u32>,
    ) -> Vec<RobotMove>;
}

/// Convenience entry point equivalent to `BreadthFirst::new().solve(..)`.
pub fn solve(board: &mut Board, goal: Goal, robots: Vec<Point>, early_out: Option<u32>) -> Vec<RobotMove> {
    BreadthFirst::new().solve(board, goal, robots, early_out)
}
