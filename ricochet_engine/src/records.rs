use std::convert::TryFrom;

use ricochet_board::{Bumper, Cell, Color, Direction, Goal, Point, Symbol};

use crate::error::EngineError;

/// Host-facing point record, `{x, y}` per the wire schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointRecord {
    pub x: i32,
    pub y: i32,
}

impl From<Point> for PointRecord {
    fn from(p: Point) -> Self {
        PointRecord { x: p.x, y: p.y }
    }
}

impl From<PointRecord> for Point {
    fn from(p: PointRecord) -> Self {
        Point::new(p.x, p.y)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GoalRecord {
    pub color: u8,
    pub symbol: u8,
}

impl TryFrom<GoalRecord> for Goal {
    type Error = EngineError;

    fn try_from(g: GoalRecord) -> Result<Self, EngineError> {
        Ok(Goal {
            color: color_from_ordinal(g.color)?,
            symbol: symbol_from_ordinal(g.symbol)?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BumperRecord {
    pub color: u8,
    pub slant: bool,
}

impl TryFrom<BumperRecord> for Bumper {
    type Error = EngineError;

    fn try_from(b: BumperRecord) -> Result<Self, EngineError> {
        Ok(Bumper {
            color: color_from_ordinal(b.color)?,
            slant: b.slant,
        })
    }
}

/// One `CellRecord` as carried by a `BoardRecord`: direct struct fields
/// rather than the two-character text codec `loadBoard` uses.
#[derive(Debug, Clone)]
pub struct CellRecord {
    pub fences: Vec<bool>,
    pub goal: Option<GoalRecord>,
    pub bumper: Option<BumperRecord>,
}

impl CellRecord {
    fn into_cell(self, index: usize) -> Result<Cell, EngineError> {
        if self.fences.len() != 4 {
            return Err(EngineError::FenceRecordLength {
                index,
                actual: self.fences.len(),
            });
        }
        let mut fences = [false; 4];
        fences.copy_from_slice(&self.fences);
        Ok(Cell {
            bumper: self.bumper.map(Bumper::try_from).transpose()?,
            goal: self.goal.map(Goal::try_from).transpose()?,
            fences,
        })
    }
}

/// A board carried directly as struct data, as `solve` receives it, rather
/// than as `loadBoard`'s flat text codec.
#[derive(Debug, Clone)]
pub struct BoardRecord {
    pub width: i32,
    pub height: i32,
    pub points: Vec<CellRecord>,
}

impl BoardRecord {
    pub(crate) fn into_board(self) -> Result<ricochet_board::Board, EngineError> {
        let expected = (self.width * self.height) as usize;
        if self.points.len() != expected {
            return Err(EngineError::CellRecordCountMismatch {
                expected,
                actual: self.points.len(),
            });
        }
        let cells = self
            .points
            .into_iter()
            .enumerate()
            .map(|(i, record)| record.into_cell(i))
            .collect::<Result<Vec<_>, _>>()?;
        ricochet_board::Board::new(self.width, self.height, cells).map_err(EngineError::from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub color: u8,
    pub direction: u8,
}

impl From<ricochet_solver::RobotMove> for MoveRecord {
    fn from(m: ricochet_solver::RobotMove) -> Self {
        MoveRecord {
            color: m.color as u8,
            direction: m.direction.ordinal() as u8,
        }
    }
}

pub(crate) fn color_from_ordinal(ordinal: u8) -> Result<Color, EngineError> {
    Color::from_index(ordinal as usize).ok_or(EngineError::ColorOutOfRange(ordinal))
}

pub(crate) fn symbol_from_ordinal(ordinal: u8) -> Result<Symbol, EngineError> {
    match ordinal {
        0 => Ok(Symbol::Star),
        1 => Ok(Symbol::Moon),
        2 => Ok(Symbol::Gear),
        3 => Ok(Symbol::Saturn),
        4 => Ok(Symbol::Warp),
        other => Err(EngineError::SymbolOutOfRange(other)),
    }
}

pub(crate) fn direction_from_ordinal(ordinal: u8) -> Result<Direction, EngineError> {
    Direction::try_from(ordinal).map_err(EngineError::DirectionOutOfRange)
}
