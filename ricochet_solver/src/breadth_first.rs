use log::{debug, trace};

use ricochet_board::{Board, Color, Direction, Goal, Point, RobotState};

use crate::robot_move::{BackPointer, RobotMove};
use crate::util::VisitedStates;
use crate::Solver;

/// Breadth-first solver over `RobotState`s. Frontier is swapped wholesale
/// between depths since every edge has unit cost, so a plain FIFO suffices.
pub struct BreadthFirst {
    visited: VisitedStates,
}

impl BreadthFirst {
    pub fn new() -> Self {
        BreadthFirst {
            visited: VisitedStates::with_capacity(1 << 16),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        BreadthFirst {
            visited: VisitedStates::with_capacity(capacity),
        }
    }
}

impl Default for BreadthFirst {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for BreadthFirst {
    fn solve(
        &mut self,
        board: &mut Board,
        goal: Goal,
        robots: Vec<Point>,
        early_out: Option<u32>,
    ) -> Vec<RobotMove> {
        debug!(
            "solve: goal color={:?} symbol={:?} robots={}",
            goal.color,
            goal.symbol,
            robots.len()
        );
        let warp = goal.symbol == ricochet_board::Symbol::Warp;
        let goal_cell = board.find_goal(goal);
        let start = RobotState::new(robots.clone(), warp, 0);

        if start.check_goal(goal_cell, goal) {
            // A one-move "stay" result is returned for any earlyOut-disabled
            // caller so a satisfied goal is never silently indistinguishable
            // from an unsolved board.
            return if early_out.is_some() {
                Vec::new()
            } else {
                let stay_color = robots
                    .iter()
                    .position(|&p| p == goal_cell)
                    .and_then(Color::from_index)
                    .unwrap_or(Color::Yellow);
                vec![RobotMove {
                    color: stay_color,
                    direction: Direction::None,
                }]
            };
        }

        self.visited = VisitedStates::with_capacity(1 << 16);
        self.visited.insert_start(start.fingerprint());

        let mut frontier = vec![start];
        let mut expanded: usize = 0;

        while !frontier.is_empty() {
            let mut next_frontier = Vec::new();
            for state in frontier {
                expanded += 1;
                for (r, &robot_pos) in state.robots.iter().enumerate() {
                    for &dir in &Direction::CARDINAL {
                        let new_pos = board.do_move(&state.robots, r, dir, false);
                        if new_pos == robot_pos {
                            continue;
                        }

                        let successor = state.with_moved_robot(r, new_pos);
                        let fingerprint = successor.fingerprint();
                        if self.visited.contains(fingerprint) {
                            continue;
                        }

                        let color = Color::from_index(r).expect("robot index within Color range");
                        self.visited.insert(
                            fingerprint,
                            BackPointer::new(state.fingerprint(), robot_pos, dir, color),
                        );

                        let accepted = (warp || r == goal.color as usize)
                            && new_pos == goal_cell
                            && early_out.map_or(true, |eo| successor.depth > eo);
                        if accepted {
                            let hops = self.visited.reconstruct(fingerprint);
                            return restamp_colors(&hops, board, robots);
                        }

                        next_frontier.push(successor);
                    }
                }
            }
            if next_frontier.len().is_power_of_two() {
                trace!("frontier size {}", next_frontier.len());
            }
            frontier = next_frontier;
        }

        debug!(
            "search exhausted after expanding {} states, {} visited",
            expanded,
            self.visited.len()
        );
        Vec::new()
    }
}

/// Second reconstruction pass: replay from the original robot positions,
/// matching each hop's recorded pre-move position to the robot currently
/// there and stamping that robot's index as the move's color.
fn restamp_colors(hops: &[BackPointer], board: &mut Board, mut robots: Vec<Point>) -> Vec<RobotMove> {
    let mut moves = Vec::with_capacity(hops.len());
    for hop in hops {
        let idx = robots
            .iter()
            .position(|&p| p == hop.position())
            .expect("replay: no robot at recorded pre-move position");
        let color = Color::from_index(idx).expect("robot index within Color range");
        let direction = hop.direction();
        robots[idx] = board.do_move(&robots, idx, direction, false);
        moves.push(RobotMove { color, direction });
    }
    moves
}
