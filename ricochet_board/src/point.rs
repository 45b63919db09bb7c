use std::convert::TryFrom;

/// One of the four cardinal directions a robot can slide in, plus `None` for
/// "no motion requested" (used by the boundary crate to report a resting
/// robot without implying a slide happened).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Up = 1,
    Right = 2,
    Down = 3,
    None = 4,
}

impl Direction {
    pub const CARDINAL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// The unit displacement a robot takes when sliding one cell in this
    /// direction. `None` maps to the zero vector.
    pub fn delta(self) -> Point {
        match self {
            Direction::Left => Point::new(-1, 0),
            Direction::Up => Point::new(0, -1),
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
            Direction::None => Point::new(0, 0),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(Direction::Left),
            1 => Ok(Direction::Up),
            2 => Ok(Direction::Right),
            3 => Ok(Direction::Down),
            4 => Ok(Direction::None),
            other => Err(other),
        }
    }
}

/// An integer board coordinate. Not bounds-checked against any particular
/// board; callers that need bounds checking call `Board::contains`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn add(self, delta: Point) -> Point {
        Point::new(self.x + delta.x, self.y + delta.y)
    }

    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Classifies this point as a cardinal direction, taken as a vector from
    /// the origin. Exactly one axis must be nonzero; any other shape (the
    /// zero vector, or a diagonal) has no direction.
    pub fn direction(self) -> Direction {
        if self.x == 0 && self.y > 0 {
            Direction::Down
        } else if self.x == 0 && self.y < 0 {
            Direction::Up
        } else if self.y == 0 && self.x > 0 {
            Direction::Right
        } else if self.y == 0 && self.x < 0 {
            Direction::Left
        } else {
            Direction::None
        }
    }

    /// The direction one would travel from `other` to reach `self`, when
    /// the two share a row or column. Used by the move cache's collision
    /// fast path to check whether a robot lies along a given ray.
    pub fn direct_path_to(self, other: Point) -> Direction {
        self.sub(other).direction()
    }
}
