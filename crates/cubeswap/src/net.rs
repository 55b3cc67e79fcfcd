//! Unfolded net rendering.
//!
//! ```text
//!     U
//!   L F R B
//!     D
//! ```

use cubeswap_core::cgmath::{InnerSpace, Vector3};
use cubeswap_core::{Cube, Face, FaceColor, Sticker};
use owo_colors::OwoColorize;

/// Position of each face in the net, in units of faces, as `(row, col)`.
const LAYOUT: [(FaceColor, usize, usize); 6] = [
    (FaceColor::White, 0, 1),
    (FaceColor::Orange, 1, 0),
    (FaceColor::Blue, 1, 1),
    (FaceColor::Red, 1, 2),
    (FaceColor::Green, 1, 3),
    (FaceColor::Yellow, 2, 1),
];

/// Returns the world-space directions of screen right and screen down when
/// looking at a face from outside the cube, with white up and blue in front.
fn screen_axes(face: FaceColor) -> (Vector3<f32>, Vector3<f32>) {
    let (x, y, z) = (Vector3::unit_x(), Vector3::unit_y(), Vector3::unit_z());
    match face {
        FaceColor::White => (x, z),
        FaceColor::Yellow => (x, -z),
        FaceColor::Blue => (x, -y),
        FaceColor::Green => (-x, -y),
        FaceColor::Red => (-z, -y),
        FaceColor::Orange => (z, -y),
    }
}

/// Returns the stickers of a face as they appear on screen.
fn screen_grid(face: &Face) -> [[Option<Sticker>; 3]; 3] {
    let (right, down) = screen_axes(face.color());
    let mut grid = [[None; 3]; 3];
    for facelet in face.facelets() {
        let p = facelet.placement().in_plane();
        let row = (p.dot(down).round() + 1.0) as usize;
        let col = (p.dot(right).round() + 1.0) as usize;
        grid[row][col] = Some(facelet.sticker());
    }
    grid
}

fn cell(sticker: Option<Sticker>, color: bool) -> String {
    match sticker {
        None => "   ".to_string(),
        Some(Sticker { label, color: rgb }) => {
            let text = format!(" {} ", label.initial());
            match color {
                true => {
                    let [r, g, b] = rgb.rgb;
                    text.black().on_truecolor(r, g, b).to_string()
                }
                false => text,
            }
        }
    }
}

/// Renders the cube as an unfolded net, nine lines tall. If `color` is
/// false, only facelet initials are shown.
pub(crate) fn render(cube: &Cube, color: bool) -> String {
    let mut rows = vec![vec![None; 12]; 9];
    for (face, net_row, net_col) in LAYOUT {
        let grid = screen_grid(cube.face(face));
        for (r, grid_row) in grid.into_iter().enumerate() {
            for (c, sticker) in grid_row.into_iter().enumerate() {
                rows[net_row * 3 + r][net_col * 3 + c] = sticker;
            }
        }
    }

    let mut out = String::new();
    for row in rows {
        let line: String = row.into_iter().map(|s| cell(s, color)).collect();
        out += line.trim_end();
        out.push('\n');
    }
    out
}
