mod error;
mod records;

use std::convert::TryFrom;

use log::debug;

use ricochet_board::{Board, Direction, Point};

pub use error::EngineError;
pub use records::{BoardRecord, BumperRecord, CellRecord, GoalRecord, MoveRecord, PointRecord};

/// Dimensions `loadBoard` always constructs at, matching the 16-bit-safe
/// fingerprint packing `ricochet_solver` relies on.
pub const LOADED_BOARD_WIDTH: i32 = 16;
pub const LOADED_BOARD_HEIGHT: i32 = 16;

/// Holds the single piece of state the boundary is allowed to carry: the
/// board `loadBoard` most recently installed. `solve` is deliberately not a
/// method here — it takes its own `BoardRecord` and never touches this
/// state, keeping the move-simulation engine and the search engine as two
/// independent pieces.
#[derive(Debug, Default)]
pub struct Engine {
    board: Option<Board>,
}

impl Engine {
    pub fn new() -> Self {
        Engine { board: None }
    }

    /// Parses `text` as the row-major two-character-per-cell codec and
    /// installs it as the currently loaded board, discarding any previous
    /// board and its move cache.
    pub fn load_board(&mut self, text: &str) -> Result<(), EngineError> {
        let board = Board::from_text(LOADED_BOARD_WIDTH, LOADED_BOARD_HEIGHT, text)?;
        debug!(
            "load_board: {}x{}",
            LOADED_BOARD_WIDTH, LOADED_BOARD_HEIGHT
        );
        self.board = Some(board);
        Ok(())
    }

    /// Simulates one robot's slide on the currently loaded board.
    /// `out_list` is accepted and ignored, as the wire contract requires.
    pub fn do_move(
        &mut self,
        robots: &[PointRecord],
        robot_idx: usize,
        direction: u8,
        _out_list: Option<()>,
        allow_invalid_endpoint: bool,
    ) -> Result<PointRecord, EngineError> {
        let board = self.board.as_mut().ok_or(EngineError::NoBoardLoaded)?;
        if robot_idx >= robots.len() {
            return Err(EngineError::NoRobotAtIndex {
                index: robot_idx,
                len: robots.len(),
            });
        }
        let direction = records::direction_from_ordinal(direction)?;
        let points: Vec<Point> = robots.iter().map(|&r| Point::from(r)).collect();
        let resting = board.do_move(&points, robot_idx, direction, allow_invalid_endpoint);
        Ok(PointRecord::from(resting))
    }
}

/// Runs a full search on a board supplied by value, independent of any
/// board `load_board` may have installed.
pub fn solve(
    board: BoardRecord,
    goal: GoalRecord,
    robots: Vec<PointRecord>,
    early_out: Option<i32>,
) -> Result<Vec<MoveRecord>, EngineError> {
    let mut board = board.into_board()?;
    let goal = ricochet_board::Goal::try_from(goal)?;
    let robots: Vec<Point> = robots.into_iter().map(Point::from).collect();
    let early_out = early_out.and_then(|eo| if eo < 0 { None } else { Some(eo as u32) });

    debug!("solve: robots={} early_out={:?}", robots.len(), early_out);
    let moves = ricochet_solver::solve(&mut board, goal, robots, early_out);
    Ok(moves.into_iter().map(MoveRecord::from).collect())
}

// Re-export so hosts that only need move simulation don't have to depend on
// ricochet_board directly for the Direction ordinal table.
pub use ricochet_board::Direction as DirectionOrdinal;

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_text(width: i32, height: i32) -> String {
        "__".repeat((width * height) as usize)
    }

    #[test]
    fn load_board_rejects_wrong_length() {
        let mut engine = Engine::new();
        let err = engine.load_board("too short").unwrap_err();
        assert!(matches!(err, EngineError::BoardText(_)));
    }

    #[test]
    fn load_then_move_slides_to_wall() {
        let mut engine = Engine::new();
        let text = blank_text(16, 16);
        engine.load_board(&text).unwrap();

        let robots = vec![PointRecord { x: 0, y: 0 }];
        let end = engine
            .do_move(&robots, 0, Direction::Right.ordinal() as u8, None, false)
            .unwrap();
        assert_eq!(end, PointRecord { x: 15, y: 0 });
    }

    #[test]
    fn do_move_without_loaded_board_errors() {
        let mut engine = Engine::new();
        let robots = vec![PointRecord { x: 0, y: 0 }];
        let err = engine
            .do_move(&robots, 0, Direction::Right.ordinal() as u8, None, false)
            .unwrap_err();
        assert!(matches!(err, EngineError::NoBoardLoaded));
    }

    #[test]
    fn do_move_rejects_out_of_range_robot_index() {
        let mut engine = Engine::new();
        engine.load_board(&blank_text(16, 16)).unwrap();
        let robots = vec![PointRecord { x: 0, y: 0 }];
        let err = engine.do_move(&robots, 5, 0, None, false).unwrap_err();
        assert!(matches!(err, EngineError::NoRobotAtIndex { .. }));
    }

    #[test]
    fn solve_trivial_single_cell_board() {
        let width = 4;
        let height = 4;
        let mut points = vec![
            CellRecord {
                fences: vec![false; 4],
                goal: None,
                bumper: None,
            };
            (width * height) as usize
        ];
        points[7].goal = Some(GoalRecord { color: 0, symbol: 0 });

        let board = BoardRecord {
            width,
            height,
            points,
        };
        let goal = GoalRecord { color: 0, symbol: 0 };
        let robots = vec![PointRecord { x: 0, y: 0 }];

        let moves = solve(board, goal, robots, None).unwrap();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].direction, Direction::Right.ordinal() as u8);
    }
}
