//! Logical input keys and their record spelling.

use core::fmt;

/// Logical key delivered by the input adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKey {
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Confirm,
    Cancel,
}

impl InputKey {
    /// Parses a display key (`"a"`, `"LEFT"`, `"ENTER"`, ...).
    pub fn parse(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Self::Char(c));
        }
        match label {
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "UP" => Some(Self::Up),
            "DOWN" => Some(Self::Down),
            "ENTER" => Some(Self::Confirm),
            "ESC" => Some(Self::Cancel),
            _ => None,
        }
    }
}

impl fmt::Display for InputKey {
    /// Renders the key the way action records spell it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Left => f.write_str("LEFT"),
            Self::Right => f.write_str("RIGHT"),
            Self::Up => f.write_str("UP"),
            Self::Down => f.write_str("DOWN"),
            Self::Confirm => f.write_str("ENTER"),
            Self::Cancel => f.write_str("ESC"),
        }
    }
}
