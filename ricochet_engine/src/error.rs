use thiserror::Error;

use ricochet_board::BoardParseError;

/// Boundary-level failures. The pure `ricochet_board`/`ricochet_solver`
/// crates stay infallible (or panic on a programmer error such as an
/// out-of-range robot index) at their own API; validating host-supplied
/// wire data is this crate's job.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("board text malformed: {0}")]
    BoardText(#[from] BoardParseError),

    #[error("direction ordinal {0} out of range (expected 0..=4)")]
    DirectionOutOfRange(u8),

    #[error("color ordinal {0} out of range (expected 0..=3)")]
    ColorOutOfRange(u8),

    #[error("symbol ordinal {0} out of range (expected 0..=4)")]
    SymbolOutOfRange(u8),

    #[error("cell record {index} has {actual} fence entries, expected 4")]
    FenceRecordLength { index: usize, actual: usize },

    #[error("board record declares {expected} cells (width*height) but carries {actual}")]
    CellRecordCountMismatch { expected: usize, actual: usize },

    #[error("no robot at index {index} (robots list has length {len})")]
    NoRobotAtIndex { index: usize, len: usize },

    #[error("no board is loaded; call load_board before do_move")]
    NoBoardLoaded,
}
