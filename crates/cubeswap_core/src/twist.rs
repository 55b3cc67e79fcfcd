//! Face turn notation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

use crate::FaceColor;

/// Face that a twist turns, in standard cube notation.
#[derive(Serialize, Deserialize, Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TurnFace {
    /// Up (white).
    U,
    /// Down (yellow).
    D,
    /// Left (orange).
    L,
    /// Right (red).
    R,
    /// Front (blue).
    F,
    /// Back (green).
    B,
}
impl TurnFace {
    /// All turn faces, in the order scrambles draw them from.
    pub const ALL: [TurnFace; 6] = [
        TurnFace::U,
        TurnFace::R,
        TurnFace::L,
        TurnFace::D,
        TurnFace::F,
        TurnFace::B,
    ];

    /// Returns the uppercase letter for this face.
    pub const fn letter(self) -> char {
        match self {
            TurnFace::U => 'U',
            TurnFace::D => 'D',
            TurnFace::L => 'L',
            TurnFace::R => 'R',
            TurnFace::F => 'F',
            TurnFace::B => 'B',
        }
    }
    /// Returns the turn face for a letter, ignoring case.
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(TurnFace::U),
            'D' => Some(TurnFace::D),
            'L' => Some(TurnFace::L),
            'R' => Some(TurnFace::R),
            'F' => Some(TurnFace::F),
            'B' => Some(TurnFace::B),
            _ => None,
        }
    }
    /// Returns the physical face that spins when this face is turned.
    pub const fn face_color(self) -> FaceColor {
        match self {
            TurnFace::U => FaceColor::White,
            TurnFace::D => FaceColor::Yellow,
            TurnFace::L => FaceColor::Orange,
            TurnFace::R => FaceColor::Red,
            TurnFace::F => FaceColor::Blue,
            TurnFace::B => FaceColor::Green,
        }
    }
}

/// Rotation direction of a twist.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TwistDirection {
    /// Clockwise quarter turn.
    #[default]
    Cw,
    /// Counterclockwise quarter turn.
    Ccw,
    /// Half turn.
    Double,
}
impl TwistDirection {
    /// Returns the number of clockwise quarter turns equivalent to this
    /// direction.
    pub const fn quarter_turns(self) -> usize {
        match self {
            TwistDirection::Cw => 1,
            TwistDirection::Double => 2,
            TwistDirection::Ccw => 3,
        }
    }
    /// Returns the reverse direction.
    #[must_use]
    pub const fn rev(self) -> Self {
        match self {
            TwistDirection::Cw => TwistDirection::Ccw,
            TwistDirection::Ccw => TwistDirection::Cw,
            TwistDirection::Double => TwistDirection::Double,
        }
    }
    fn suffix(self) -> &'static str {
        match self {
            TwistDirection::Cw => "",
            TwistDirection::Ccw => "'",
            TwistDirection::Double => "2",
        }
    }
}

/// Twist of a single face.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    /// Face to turn.
    pub face: TurnFace,
    /// Direction to turn it.
    pub direction: TwistDirection,
}
impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.direction.suffix())
    }
}
impl FromStr for Twist {
    type Err = ParseTwistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(ParseTwistError::Empty)?;
        let face = match letter {
            'U' | 'D' | 'L' | 'R' | 'F' | 'B' => TurnFace::from_letter(letter),
            _ => None,
        }
        .ok_or(ParseTwistError::UnknownFace(letter))?;
        let direction = match chars.as_str() {
            "" => TwistDirection::Cw,
            "'" => TwistDirection::Ccw,
            "2" => TwistDirection::Double,
            other => return Err(ParseTwistError::UnknownSuffix(other.to_owned())),
        };
        Ok(Twist { face, direction })
    }
}
impl From<TurnFace> for Twist {
    fn from(face: TurnFace) -> Self {
        Twist::cw(face)
    }
}
impl Twist {
    /// Returns a clockwise quarter turn of `face`.
    pub const fn cw(face: TurnFace) -> Self {
        Self {
            face,
            direction: TwistDirection::Cw,
        }
    }
    /// Returns a counterclockwise quarter turn of `face`.
    pub const fn ccw(face: TurnFace) -> Self {
        Self {
            face,
            direction: TwistDirection::Ccw,
        }
    }
    /// Returns the twist that undoes this one.
    #[must_use]
    pub const fn rev(self) -> Self {
        Self {
            face: self.face,
            direction: self.direction.rev(),
        }
    }
}

/// Twists that scrambles are drawn from: each face clockwise, then each face
/// counterclockwise.
pub const SCRAMBLE_TWISTS: [Twist; 12] = {
    let mut ret = [Twist::cw(TurnFace::U); 12];
    let mut i = 0;
    while i < 6 {
        ret[i] = Twist::cw(TurnFace::ALL[i]);
        ret[i + 6] = Twist::ccw(TurnFace::ALL[i]);
        i += 1;
    }
    ret
};

/// Error produced when parsing twist notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTwistError {
    /// Empty string
    #[error("empty twist notation")]
    Empty,
    /// Character that does not name a face
    #[error("unknown face {0:?}")]
    UnknownFace(char),
    /// Anything after the face letter other than `'` or `2`
    #[error("unknown twist suffix {0:?}")]
    UnknownSuffix(String),
}

/// Parses a whitespace-separated sequence of twists.
pub fn parse_twists(s: &str) -> Result<Vec<Twist>, ParseTwistError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Formats a sequence of twists, separated by spaces.
pub fn format_twists(twists: &[Twist]) -> String {
    itertools::join(twists, " ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_twist() {
        assert_eq!("U".parse::<Twist>(), Ok(Twist::cw(TurnFace::U)));
        assert_eq!("R'".parse::<Twist>(), Ok(Twist::ccw(TurnFace::R)));
        assert_eq!(
            "F2".parse::<Twist>(),
            Ok(Twist {
                face: TurnFace::F,
                direction: TwistDirection::Double,
            }),
        );
        assert_eq!("".parse::<Twist>(), Err(ParseTwistError::Empty));
        assert_eq!("u".parse::<Twist>(), Err(ParseTwistError::UnknownFace('u')));
        assert_eq!("X".parse::<Twist>(), Err(ParseTwistError::UnknownFace('X')));
        assert_eq!(
            "U''".parse::<Twist>(),
            Err(ParseTwistError::UnknownSuffix("''".to_owned())),
        );
    }

    #[test]
    fn test_twist_sequence() {
        let twists = parse_twists("  R U R'  U' F2 ").unwrap();
        assert_eq!(format_twists(&twists), "R U R' U' F2");
        parse_twists("R U Q").expect_err("Q is not a face");
    }

    #[test]
    fn test_scramble_twists() {
        let names: Vec<String> = SCRAMBLE_TWISTS.iter().map(Twist::to_string).collect();
        assert_eq!(
            names,
            ["U", "R", "L", "D", "F", "B", "U'", "R'", "L'", "D'", "F'", "B'"],
        );
    }

    #[test]
    fn test_rev() {
        for twist in SCRAMBLE_TWISTS {
            assert_eq!(twist.rev().rev(), twist);
            assert_eq!(
                (twist.direction.quarter_turns() + twist.rev().direction.quarter_turns()) % 4,
                0,
            );
        }
    }
}
