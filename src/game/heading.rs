use std::fmt;

/// Direction the snake travels in.
///
/// `repr(u8)` so the arbiter can keep the current heading in an atomic cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Heading {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Heading) -> bool {
        matches!(
            (self, other),
            (Heading::Up, Heading::Down)
                | (Heading::Down, Heading::Up)
                | (Heading::Left, Heading::Right)
                | (Heading::Right, Heading::Left)
        )
    }

    /// Returns the (row, col) delta for moving one cell in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
            Heading::Right => (0, 1),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Heading::Left | Heading::Right)
    }

    /// The token used for this heading in the snapshot file.
    pub fn token(&self) -> &'static str {
        match self {
            Heading::Up => "Up",
            Heading::Down => "Down",
            Heading::Left => "Left",
            Heading::Right => "Right",
        }
    }

    /// Inverse of [`Heading::token`]; `None` for anything else.
    pub fn from_token(token: &str) -> Option<Heading> {
        match token {
            "Up" => Some(Heading::Up),
            "Down" => Some(Heading::Down),
            "Left" => Some(Heading::Left),
            "Right" => Some(Heading::Right),
            _ => None,
        }
    }

    // Only values previously produced by `heading as u8` are ever stored, so
    // the fallback arm is unreachable in practice.
    pub(crate) fn from_repr(value: u8) -> Heading {
        match value {
            0 => Heading::Up,
            1 => Heading::Down,
            2 => Heading::Left,
            _ => Heading::Right,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
