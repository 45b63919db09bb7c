use getset::CopyGetters;
use ricochet_board::{Color, Direction, Fingerprint, Point};

/// One step of a returned solution: which robot moved and which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotMove {
    pub color: Color,
    pub direction: Direction,
}

/// A visited-state's back-pointer: the moving robot's position just before
/// this move, the direction it took, the robot's index at insertion time,
/// and the predecessor state's fingerprint. `color` is re-stamped during
/// reconstruction's second pass; it is recorded here too so the first pass
/// already has something sane to report.
#[derive(Debug, Clone, Copy, CopyGetters)]
pub struct BackPointer {
    #[getset(get_copy = "pub")]
    previous: Fingerprint,
    #[getset(get_copy = "pub")]
    position: Point,
    #[getset(get_copy = "pub")]
    direction: Direction,
    #[getset(get_copy = "pub")]
    color: Color,
}

impl BackPointer {
    pub fn new(previous: Fingerprint, position: Point, direction: Direction, color: Color) -> Self {
        BackPointer {
            previous,
            position,
            direction,
            color,
        }
    }
}
