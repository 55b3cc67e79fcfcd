//! Face colors and the palette used to display them.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::Rgb;

/// One of the six symbolic colors of the cube.
///
/// Each physical face is identified by one of these, and every facelet
/// carries one as its logical label. The discriminant is the face's slot in
/// the cube's face array.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Display,
    EnumString,
    EnumIter,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FaceColor {
    /// White, on top.
    White = 0,
    /// Red, on the right.
    Red = 1,
    /// Green, at the back.
    Green = 2,
    /// Orange, on the left.
    Orange = 3,
    /// Blue, at the front.
    Blue = 4,
    /// Yellow, on the bottom.
    Yellow = 5,
}
impl FaceColor {
    /// All colors, in face array order.
    pub const ALL: [FaceColor; 6] = [
        FaceColor::White,
        FaceColor::Red,
        FaceColor::Green,
        FaceColor::Orange,
        FaceColor::Blue,
        FaceColor::Yellow,
    ];

    /// Returns the index of the face with this color.
    pub const fn index(self) -> usize {
        self as usize
    }
    /// Returns the uppercase initial of the color name.
    pub const fn initial(self) -> char {
        match self {
            FaceColor::White => 'W',
            FaceColor::Red => 'R',
            FaceColor::Green => 'G',
            FaceColor::Orange => 'O',
            FaceColor::Blue => 'B',
            FaceColor::Yellow => 'Y',
        }
    }
    /// Returns whether this is one of the four faces around the vertical
    /// axis.
    pub const fn is_lateral(self) -> bool {
        !matches!(self, FaceColor::White | FaceColor::Yellow)
    }
}

/// Display color for each logical label.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(default)]
#[allow(missing_docs)]
pub struct ColorPalette {
    pub white: Rgb,
    pub red: Rgb,
    pub green: Rgb,
    pub orange: Rgb,
    pub blue: Rgb,
    pub yellow: Rgb,
}
impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            white: Rgb::WHITE,
            red: Rgb::from_u32(0xe33e3a),
            green: Rgb::from_u32(0x008c38),
            orange: Rgb::from_u32(0xf77400),
            blue: Rgb::from_u32(0x1c5cbe),
            yellow: Rgb::from_u32(0xfef044),
        }
    }
}
impl ColorPalette {
    /// Returns the display color for a label.
    pub fn get(&self, color: FaceColor) -> Rgb {
        match color {
            FaceColor::White => self.white,
            FaceColor::Red => self.red,
            FaceColor::Green => self.green,
            FaceColor::Orange => self.orange,
            FaceColor::Blue => self.blue,
            FaceColor::Yellow => self.yellow,
        }
    }
    /// Returns a mutable reference to the display color for a label.
    pub fn get_mut(&mut self, color: FaceColor) -> &mut Rgb {
        match color {
            FaceColor::White => &mut self.white,
            FaceColor::Red => &mut self.red,
            FaceColor::Green => &mut self.green,
            FaceColor::Orange => &mut self.orange,
            FaceColor::Blue => &mut self.blue,
            FaceColor::Yellow => &mut self.yellow,
        }
    }
}
