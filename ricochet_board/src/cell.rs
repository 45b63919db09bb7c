use thiserror::Error;

/// Robot color. The ordinal doubles as the robot's index within a
/// `RobotState`'s position list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Yellow = 0,
    Green = 1,
    Red = 2,
    Blue = 3,
}

impl Color {
    pub fn from_index(i: usize) -> Option<Color> {
        match i {
            0 => Some(Color::Yellow),
            1 => Some(Color::Green),
            2 => Some(Color::Red),
            3 => Some(Color::Blue),
            _ => None,
        }
    }
}

/// Goal symbol. `Warp` is a wildcard matched by any robot's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Symbol {
    Star = 0,
    Moon = 1,
    Gear = 2,
    Saturn = 3,
    Warp = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bumper {
    pub color: Color,
    pub slant: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Goal {
    pub color: Color,
    pub symbol: Symbol,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CellParseError {
    #[error("invalid fence digit {0:?}")]
    InvalidFenceDigit(char),
}

/// A single board square: at most one of a bumper or a goal, plus a fence
/// mask indexed by `Direction::ordinal()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub bumper: Option<Bumper>,
    pub goal: Option<Goal>,
    pub fences: [bool; 4],
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            bumper: None,
            goal: None,
            fences: [false; 4],
        }
    }
}

impl Cell {
    pub fn blank() -> Self {
        Cell::default()
    }

    /// Decodes a cell from its two-character codec. `a1` encodes bumper or
    /// goal, `a2` the fence mask. `a1` decoding is lenient: any character
    /// that matches neither a goal nor a bumper form decodes to a blank
    /// cell face, mirroring how the original host tolerates stray input.
    /// `a2` is validated strictly: it has a single closed form (a lowercase
    /// hex digit or the blank sigil) with no stated fallback for anything
    /// else.
    pub fn decode(a1: char, a2: char) -> Result<Cell, CellParseError> {
        let (bumper, goal) = decode_face(a1);
        let fences = decode_fences(a2)?;
        Ok(Cell {
            bumper,
            goal,
            fences,
        })
    }

    pub fn encode(self) -> (char, char) {
        (encode_face(self.bumper, self.goal), encode_fences(self.fences))
    }
}

fn decode_face(a1: char) -> (Option<Bumper>, Option<Goal>) {
    if a1 == ' ' || a1 == '_' {
        return (None, None);
    }
    if a1 == 'W' {
        return (
            None,
            Some(Goal {
                color: Color::Yellow,
                symbol: Symbol::Warp,
            }),
        );
    }
    if a1.is_ascii_digit() || a1.is_ascii_uppercase() {
        if let Some(hex) = a1.to_digit(16) {
            let color = Color::from_index((hex % 4) as usize).expect("hex % 4 < 4");
            let symbol = match hex / 4 {
                0 => Symbol::Star,
                1 => Symbol::Moon,
                2 => Symbol::Gear,
                _ => Symbol::Saturn,
            };
            return (None, Some(Goal { color, symbol }));
        }
    }
    if let Some(color) = bumper_color(a1) {
        return (
            Some(Bumper {
                color,
                slant: a1.is_ascii_uppercase(),
            }),
            None,
        );
    }
    (None, None)
}

fn bumper_color(a1: char) -> Option<Color> {
    match a1.to_ascii_lowercase() {
        'y' => Some(Color::Yellow),
        'g' => Some(Color::Green),
        'r' => Some(Color::Red),
        'u' => Some(Color::Blue),
        _ => None,
    }
}

fn encode_face(bumper: Option<Bumper>, goal: Option<Goal>) -> char {
    if let Some(b) = bumper {
        let base = match b.color {
            Color::Yellow => 'y',
            Color::Green => 'g',
            Color::Red => 'r',
            Color::Blue => 'u',
        };
        return if b.slant {
            base.to_ascii_uppercase()
        } else {
            base
        };
    }
    if let Some(g) = goal {
        if g.symbol == Symbol::Warp {
            return 'W';
        }
        let hex = (g.symbol as u32) * 4 + (g.color as u32);
        return std::char::from_digit(hex, 16)
            .unwrap_or('0')
            .to_ascii_uppercase();
    }
    '_'
}

fn decode_fences(a2: char) -> Result<[bool; 4], CellParseError> {
    if a2 == ' ' || a2 == '_' {
        return Ok([false; 4]);
    }
    let mask = a2
        .to_digit(16)
        .ok_or(CellParseError::InvalidFenceDigit(a2))?;
    let mut fences = [false; 4];
    for (i, fence) in fences.iter_mut().enumerate() {
        *fence = mask & (1 << i) != 0;
    }
    Ok(fences)
}

fn encode_fences(fences: [bool; 4]) -> char {
    let mut mask = 0u32;
    for (i, &set) in fences.iter().enumerate() {
        if set {
            mask |= 1 << i;
        }
    }
    if mask == 0 {
        '_'
    } else {
        std::char::from_digit(mask, 16).unwrap_or('_')
    }
}
