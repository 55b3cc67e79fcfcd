//! 3x3x3 twisty cube simulator backend.
//!
//! A [`Cube`] owns six [`Face`]s of nine [`Facelet`]s each. Facelets never
//! move; twists copy labels and display colors between them. The backend knows
//! nothing about rendering, but every facelet exposes a fixed [`Placement`]
//! that a renderer can use.

mod color;
mod cube;
mod face;
mod facelet;
mod rgb;
mod scramble;
mod sign;
pub mod solver;
mod twist;

pub use color::{ColorPalette, FaceColor};
pub use cube::Cube;
pub use face::{Face, Strip};
pub use facelet::{FACE_DISTANCE, Facelet, Placement, Sticker};
pub use rgb::Rgb;
pub use scramble::{SCRAMBLE_LENGTH, random_twists};
pub use sign::Sign;
pub use solver::{SolveReport, SolveStage, StageOutcome};
pub use twist::{
    ParseTwistError, SCRAMBLE_TWISTS, TurnFace, Twist, TwistDirection, format_twists,
    parse_twists,
};

/// Re-export of `cgmath`.
pub use cgmath;
