use thiserror::Error;

use crate::cell::{Cell, CellParseError, Goal};
use crate::point::{Direction, Point};

/// Upper bound on robots tracked per board; also the width of the move
/// cache's robot axis. The fingerprint packing in `robot_state` depends on
/// this same limit.
pub const MAX_ROBOTS: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected {expected} characters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("cell count {actual} does not match width*height {expected}")]
    CellCountMismatch { expected: usize, actual: usize },
    #[error(transparent)]
    Cell(#[from] CellParseError),
}

type MoveCache = Vec<[[Option<Point>; 4]; MAX_ROBOTS]>;

/// Owns its cells and its move cache. The cache is populated lazily by
/// `do_move` and is only ever invalidated by constructing a fresh `Board`
/// (there is no in-place reload; the boundary crate swaps the whole
/// instance on `loadBoard`).
#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    cache: MoveCache,
}

impl Board {
    pub fn new(width: i32, height: i32, cells: Vec<Cell>) -> Result<Board, BoardParseError> {
        let expected = (width * height) as usize;
        if cells.len() != expected {
            return Err(BoardParseError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        let cache = vec![[[None; 4]; MAX_ROBOTS]; expected];
        Ok(Board {
            width,
            height,
            cells,
            cache,
        })
    }

    /// Parses the row-major, two-characters-per-cell codec described for
    /// `loadBoard`.
    pub fn from_text(width: i32, height: i32, text: &str) -> Result<Board, BoardParseError> {
        let chars: Vec<char> = text.chars().collect();
        let expected = (width * height * 2) as usize;
        if chars.len() != expected {
            return Err(BoardParseError::LengthMismatch {
                expected,
                actual: chars.len(),
            });
        }
        let mut cells = Vec::with_capacity((width * height) as usize);
        for pair in chars.chunks(2) {
            cells.push(Cell::decode(pair[0], pair[1])?);
        }
        Board::new(width, height, cells)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for cell in &self.cells {
            let (a1, a2) = cell.encode();
            out.push(a1);
            out.push(a2);
        }
        out
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Inverse of `index`. Deliberately `i % width, i / width`; dividing by
    /// `height` instead only agrees with this formula on square boards and
    /// silently misplaces goals on any board with `width != height`.
    fn deindexify(&self, i: usize) -> Point {
        let i = i as i32;
        Point::new(i % self.width, i / self.width)
    }

    pub fn cell_at(&self, p: Point) -> &Cell {
        &self.cells[self.index(p)]
    }

    fn bumper_at(&self, p: Point) -> Option<crate::cell::Bumper> {
        if self.contains(p) {
            self.cell_at(p).bumper
        } else {
            None
        }
    }

    /// Row-major search for a cell whose goal matches `goal`'s symbol (and,
    /// unless the symbol is `Warp`, its color too). Returns `(-1, -1)` when
    /// no such cell exists.
    pub fn find_goal(&self, goal: Goal) -> Point {
        for (i, cell) in self.cells.iter().enumerate() {
            if let Some(g) = cell.goal {
                if g.symbol == goal.symbol && (g.symbol == crate::cell::Symbol::Warp || g.color == goal.color) {
                    return self.deindexify(i);
                }
            }
        }
        Point::new(-1, -1)
    }

    fn fence_between(&self, p0: Point, p1: Point) -> bool {
        if !self.contains(p0) || !self.contains(p1) {
            return true;
        }
        let forward = p1.sub(p0).direction();
        if forward != Direction::None && self.cell_at(p0).fences[forward.ordinal()] {
            return true;
        }
        let backward = p0.sub(p1).direction();
        if backward != Direction::None && self.cell_at(p1).fences[backward.ordinal()] {
            return true;
        }
        false
    }

    /// Simulates one robot sliding from its current position until it is
    /// stopped by the board edge, a fence, another robot, or settles after
    /// zero or more bumper deflections. Mutates the move cache as a side
    /// effect; never mutates `robots`.
    pub fn do_move(
        &mut self,
        robots: &[Point],
        robot_idx: usize,
        move_dir: Direction,
        allow_invalid_endpoint: bool,
    ) -> Point {
        let start = robots[robot_idx];
        if move_dir == Direction::None {
            return start;
        }

        if self.contains(start) {
            let start_idx = self.index(start);
            if let Some(cached) = self.cache[start_idx][robot_idx][move_dir.ordinal()] {
                let collision = robots.iter().enumerate().any(|(i, &p)| {
                    i != robot_idx && p.direct_path_to(start) == move_dir
                });
                if !collision {
                    return cached;
                }
            }
        }

        let mut pos = start;
        let mut dir = move_dir;
        let mut cacheable = true;

        loop {
            let next = pos.add(dir.delta());
            if self.fence_between(pos, next) {
                if self.bumper_at(pos).is_some() && !allow_invalid_endpoint {
                    return start;
                }
                break;
            }
            if robots
                .iter()
                .enumerate()
                .any(|(i, &p)| i != robot_idx && p == next)
            {
                cacheable = false;
                if self.bumper_at(pos).is_some() && !allow_invalid_endpoint {
                    return start;
                }
                break;
            }
            pos = next;
            if let Some(bumper) = self.bumper_at(pos) {
                if bumper.color as usize != robot_idx {
                    dir = deflect(dir, bumper.slant);
                    cacheable = false;
                    continue;
                }
            }
        }

        if cacheable {
            let start_idx = self.index(start);
            let slot = &mut self.cache[start_idx][robot_idx][move_dir.ordinal()];
            if slot.is_none() {
                *slot = Some(pos);
            }
        }

        pos
    }
}

fn deflect(incoming: Direction, slant: bool) -> Direction {
    match (incoming, slant) {
        (Direction::Up, true) => Direction::Right,
        (Direction::Up, false) => Direction::Left,
        (Direction::Right, true) => Direction::Up,
        (Direction::Right, false) => Direction::Down,
        (Direction::Down, true) => Direction::Left,
        (Direction::Down, false) => Direction::Right,
        (Direction::Left, true) => Direction::Down,
        (Direction::Left, false) => Direction::Up,
        (other, _) => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Bumper, Color, Symbol};

    fn empty_board(width: i32, height: i32) -> Board {
        Board::new(width, height, vec![Cell::blank(); (width * height) as usize]).unwrap()
    }

    #[test]
    fn text_roundtrip() {
        let text = "W_".repeat(4) + &"__".repeat(12);
        let board = Board::from_text(4, 4, &text).unwrap();
        assert_eq!(board.to_text(), text);
    }

    #[test]
    fn length_mismatch_errors() {
        let err = Board::from_text(4, 4, "too short").unwrap_err();
        assert!(matches!(err, BoardParseError::LengthMismatch { .. }));
    }

    #[test]
    fn deindexify_uses_width_not_height() {
        // 3-wide, 5-tall: index 4 is row 1, col 1 (4 % 3 == 1, 4 / 3 == 1).
        // Dividing by height (5) here would wrongly report row 0.
        let board = empty_board(3, 5);
        assert_eq!(board.deindexify(4), Point::new(1, 1));
    }

    #[test]
    fn slide_to_wall() {
        let mut board = empty_board(8, 8);
        let robots = vec![Point::new(0, 0)];
        let end = board.do_move(&robots, 0, Direction::Right, false);
        assert_eq!(end, Point::new(7, 0));
    }

    #[test]
    fn fence_stops_slide() {
        let mut cells = vec![Cell::blank(); 64];
        // Fence on the right side of (3,0) blocks further eastward travel.
        cells[3].fences[Direction::Right.ordinal()] = true;
        let mut board = Board::new(8, 8, cells).unwrap();
        let robots = vec![Point::new(0, 0)];
        let end = board.do_move(&robots, 0, Direction::Right, false);
        assert_eq!(end, Point::new(3, 0));
    }

    #[test]
    fn collision_stops_before_other_robot() {
        let mut board = empty_board(8, 8);
        let robots = vec![Point::new(0, 0), Point::new(5, 0)];
        let end = board.do_move(&robots, 0, Direction::Right, false);
        assert_eq!(end, Point::new(4, 0));
    }

    #[test]
    fn bumper_deflects_and_continues() {
        let mut cells = vec![Cell::blank(); 64];
        cells[5].bumper = Some(Bumper {
            color: Color::Red,
            slant: true,
        });
        let mut board = Board::new(8, 8, cells).unwrap();
        let robots = vec![Point::new(0, 5)];
        let end = board.do_move(&robots, 0, Direction::Right, false);
        assert_eq!(end, Point::new(5, 0));
    }

    #[test]
    fn same_color_bumper_is_transparent() {
        let mut cells = vec![Cell::blank(); 64];
        cells[5].bumper = Some(Bumper {
            color: Color::Yellow,
            slant: true,
        });
        let mut board = Board::new(8, 8, cells).unwrap();
        let robots = vec![Point::new(0, 0)]; // robot_idx 0 == Color::Yellow
        let end = board.do_move(&robots, 0, Direction::Right, false);
        assert_eq!(end, Point::new(7, 0));
    }

    #[test]
    fn stop_on_bumper_without_allow_invalid_endpoint_reverts() {
        let mut cells = vec![Cell::blank(); 64];
        cells[7].bumper = Some(Bumper {
            color: Color::Red,
            slant: true,
        });
        cells[7].fences[Direction::Right.ordinal()] = true;
        let mut board = Board::new(8, 8, cells).unwrap();
        let robots = vec![Point::new(0, 0)];
        let end = board.do_move(&robots, 0, Direction::Right, false);
        assert_eq!(end, Point::new(0, 0));
    }

    #[test]
    fn find_goal_warp_ignores_color() {
        let mut cells = vec![Cell::blank(); 16];
        cells[9].goal = Some(Goal {
            color: Color::Green,
            symbol: Symbol::Warp,
        });
        let board = Board::new(4, 4, cells).unwrap();
        let found = board.find_goal(Goal {
            color: Color::Blue,
            symbol: Symbol::Warp,
        });
        assert_eq!(found, board.deindexify(9));
    }

    #[test]
    fn find_goal_absent_returns_sentinel() {
        let board = empty_board(4, 4);
        let found = board.find_goal(Goal {
            color: Color::Red,
            symbol: Symbol::Star,
        });
        assert_eq!(found, Point::new(-1, -1));
    }
}
