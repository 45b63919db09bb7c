use crate::board::MAX_ROBOTS;
use crate::cell::{Goal, Symbol};
use crate::point::Point;

/// A 32-bit packing of up to `MAX_ROBOTS` board positions, 4 bits x and 4
/// bits y per robot starting at bit `8 * index`. Requires every coordinate
/// to fit in 0..16, matching the fixed 16x16 board the fingerprint scheme
/// was designed around.
pub type Fingerprint = u32;

/// A BFS search node: the robots' positions plus bookkeeping the search
/// needs but that never participates in deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotState {
    pub robots: Vec<Point>,
    pub warp: bool,
    pub depth: u32,
}

impl RobotState {
    pub fn new(robots: Vec<Point>, warp: bool, depth: u32) -> Self {
        RobotState {
            robots,
            warp,
            depth,
        }
    }

    /// Packs robot positions only; `depth` and `warp` are not part of
    /// identity for the purposes of visited-state dedup.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut result: Fingerprint = 0;
        for (i, p) in self.robots.iter().enumerate().take(MAX_ROBOTS) {
            result |= ((p.x as u32) & 0x0F) << (i * 8);
            result |= ((p.y as u32) & 0x0F) << (i * 8 + 4);
        }
        result
    }

    pub fn with_moved_robot(&self, robot_idx: usize, new_pos: Point) -> RobotState {
        let mut robots = self.robots.clone();
        robots[robot_idx] = new_pos;
        RobotState::new(robots, self.warp, self.depth + 1)
    }

    /// True iff some robot occupies `goal_cell` and is either the goal's
    /// color or the goal is a wildcard `Warp`.
    pub fn check_goal(&self, goal_cell: Point, goal: Goal) -> bool {
        self.robots.iter().enumerate().any(|(i, &p)| {
            p == goal_cell && (goal.symbol == Symbol::Warp || goal.color as usize == i)
        })
    }
}
