//! A single 3x3 face of the cube.

use cgmath::Vector3;
use itertools::Itertools;
use smallvec::SmallVec;
use strum::Display;

use crate::{ColorPalette, FaceColor, Facelet, Sign, Sticker};

/// Row of three facelets along one edge of a face, named by the direction
/// (in world space) that the edge faces.
///
/// Every face has exactly four non-empty strips. The two directions parallel
/// to the face's normal have no facelets.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Strip {
    /// Facelets with positive Y.
    Top = 0,
    /// Facelets with negative Y.
    Bottom = 1,
    /// Facelets with positive X.
    Right = 2,
    /// Facelets with negative X.
    Left = 3,
    /// Facelets with positive Z.
    Front = 4,
    /// Facelets with negative Z.
    Back = 5,
}
impl Strip {
    /// All strips, in index order.
    pub const ALL: [Strip; 6] = [
        Strip::Top,
        Strip::Bottom,
        Strip::Right,
        Strip::Left,
        Strip::Front,
        Strip::Back,
    ];

    fn contains(self, in_plane: Vector3<f32>) -> bool {
        match self {
            Strip::Top => in_plane.y > 0.0,
            Strip::Bottom => in_plane.y < 0.0,
            Strip::Right => in_plane.x > 0.0,
            Strip::Left => in_plane.x < 0.0,
            Strip::Front => in_plane.z > 0.0,
            Strip::Back => in_plane.z < 0.0,
        }
    }
}

/// Snapshot of the stickers along a strip.
pub(crate) type StripStickers = SmallVec<[Sticker; 3]>;

/// 3x3 grid of facelets on one physical face of the cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    color: FaceColor,
    /// Facelets in row-major order.
    facelets: [Facelet; 9],
    /// Indices into `facelets` for each strip, in row-major order.
    strips: [SmallVec<[u8; 3]>; 6],
    /// Indices into `facelets` of the four edge facelets, in row-major order.
    edges: [u8; 4],
}
impl Face {
    /// Constructs a solved face.
    pub fn new(color: FaceColor, palette: &ColorPalette) -> Self {
        let facelets: [Facelet; 9] = std::array::from_fn(|i| {
            let row = Sign::from_index(i / 3);
            let col = Sign::from_index(i % 3);
            Facelet::new(color, row, col, palette.get(color))
        });

        let strips = Strip::ALL.map(|strip| {
            facelets
                .iter()
                .positions(|f| strip.contains(f.placement().in_plane()))
                .map(|i| i as u8)
                .collect()
        });

        let mut edges = [0; 4];
        for (slot, i) in edges.iter_mut().zip(facelets.iter().positions(Facelet::is_edge)) {
            *slot = i as u8;
        }

        Self {
            color,
            facelets,
            strips,
            edges,
        }
    }

    /// Returns the color that identifies this face. This never changes.
    pub fn color(&self) -> FaceColor {
        self.color
    }
    /// Returns all facelets in row-major order.
    pub fn facelets(&self) -> &[Facelet; 9] {
        &self.facelets
    }
    /// Returns the facelet at grid position `(row, col)`.
    pub fn facelet(&self, row: Sign, col: Sign) -> &Facelet {
        &self.facelets[row.index() * 3 + col.index()]
    }
    /// Returns the center facelet.
    pub fn center(&self) -> &Facelet {
        self.facelet(Sign::Zero, Sign::Zero)
    }
    /// Returns the facelets along a strip, in row-major order. The result has
    /// either 3 facelets or none.
    pub fn strip(&self, strip: Strip) -> impl Iterator<Item = &Facelet> {
        self.strips[strip as usize]
            .iter()
            .map(|&i| &self.facelets[i as usize])
    }
    /// Returns the four edge facelets, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = &Facelet> {
        self.edges.iter().map(|&i| &self.facelets[i as usize])
    }
    /// Returns the edge facelet at `index` (0 to 3) in row-major order.
    pub(crate) fn edge(&self, index: usize) -> &Facelet {
        &self.facelets[self.edges[index] as usize]
    }
    /// Returns whether every facelet on this face is labeled with the face's
    /// own color.
    pub fn is_uniform(&self) -> bool {
        self.facelets.iter().all(|f| f.label() == self.color)
    }

    /// Returns a snapshot of the stickers along a strip.
    pub(crate) fn snapshot(&self, strip: Strip) -> StripStickers {
        self.strip(strip).map(Facelet::sticker).collect()
    }
    /// Overwrites the stickers along a strip, positionally.
    pub(crate) fn apply_strip(&mut self, strip: Strip, incoming: &[Sticker]) {
        let indices = &self.strips[strip as usize];
        debug_assert_eq!(indices.len(), incoming.len(), "{strip} strip length mismatch");
        for (&i, &sticker) in indices.iter().zip(incoming) {
            self.facelets[i as usize].set_sticker(sticker);
        }
    }
    /// Spins the face by `quarter_turns` quarter turns. Each edge facelet
    /// moves to the next edge position and each corner to the next corner
    /// position; the center stays put.
    pub(crate) fn rotate_in_place(&mut self, quarter_turns: usize) {
        for _ in 0..quarter_turns % 4 {
            let old = self.facelets.each_ref().map(Facelet::sticker);
            for (i, sticker) in old.into_iter().enumerate() {
                let (row, col) = (i / 3, i % 3);
                self.facelets[(2 - col) * 3 + row].set_sticker(sticker);
            }
        }
    }
    /// Recolors every facelet from its label.
    pub(crate) fn apply_palette(&mut self, palette: &ColorPalette) {
        for facelet in &mut self.facelets {
            facelet.set_color(palette.get(facelet.label()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    fn strip_grid(face: &Face, strip: Strip) -> Vec<(usize, usize)> {
        face.strip(strip)
            .map(|f| (f.grid().0.index(), f.grid().1.index()))
            .collect()
    }

    #[test]
    fn test_strip_sizes() {
        for color in FaceColor::ALL {
            let face = Face::new(color, &ColorPalette::default());
            let sizes: Vec<usize> = Strip::ALL.iter().map(|s| face.strip(*s).count()).collect();
            assert_eq!(sizes.iter().filter(|&&n| n == 3).count(), 4, "{color}");
            assert_eq!(sizes.iter().filter(|&&n| n == 0).count(), 2, "{color}");
            assert_eq!(face.edges().count(), 4);
        }
    }

    #[test]
    fn test_strip_membership() {
        let palette = ColorPalette::default();

        let white = Face::new(FaceColor::White, &palette);
        assert_eq!(strip_grid(&white, Strip::Top), vec![]);
        assert_eq!(strip_grid(&white, Strip::Right), vec![(2, 0), (2, 1), (2, 2)]);
        assert_eq!(strip_grid(&white, Strip::Front), vec![(0, 2), (1, 2), (2, 2)]);

        let blue = Face::new(FaceColor::Blue, &palette);
        assert_eq!(strip_grid(&blue, Strip::Top), vec![(0, 2), (1, 2), (2, 2)]);
        assert_eq!(strip_grid(&blue, Strip::Left), vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(strip_grid(&blue, Strip::Back), vec![]);

        let red = Face::new(FaceColor::Red, &palette);
        assert_eq!(strip_grid(&red, Strip::Bottom), vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(strip_grid(&red, Strip::Back), vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(strip_grid(&red, Strip::Right), vec![]);
    }

    #[test]
    fn test_edges_order() {
        let face = Face::new(FaceColor::Green, &ColorPalette::default());
        let grid: Vec<(usize, usize)> = face
            .edges()
            .map(|f| (f.grid().0.index(), f.grid().1.index()))
            .collect();
        assert_eq!(grid, vec![(0, 1), (1, 0), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_facelet_lookup() {
        let face = Face::new(FaceColor::Red, &ColorPalette::default());
        for row in Sign::iter() {
            for col in Sign::iter() {
                assert_eq!(face.facelet(row, col).grid(), (row, col));
            }
        }
        assert_eq!(face.center().grid(), (Sign::Zero, Sign::Zero));
        assert_eq!(face.edge(1).grid(), (Sign::Zero, Sign::Neg));
    }

    #[test]
    fn test_rotate_in_place() {
        let mut face = Face::new(FaceColor::Orange, &ColorPalette::default());
        // Tag each facelet with a distinct color so that we can track it.
        for (i, facelet) in face.facelets.iter_mut().enumerate() {
            facelet.set_color(Rgb { rgb: [i as u8; 3] });
        }
        let tag = |face: &Face, row: usize, col: usize| {
            face.facelet(Sign::from_index(row), Sign::from_index(col)).color().rgb[0]
        };

        face.rotate_in_place(1);
        assert_eq!(tag(&face, 1, 0), 1);
        assert_eq!(tag(&face, 2, 1), 3);
        assert_eq!(tag(&face, 0, 1), 5);
        assert_eq!(tag(&face, 1, 2), 7);
        assert_eq!(tag(&face, 2, 0), 0);
        assert_eq!(tag(&face, 0, 0), 2);
        assert_eq!(tag(&face, 2, 2), 6);
        assert_eq!(tag(&face, 0, 2), 8);
        assert_eq!(tag(&face, 1, 1), 4);

        face.rotate_in_place(3);
        for i in 0..9 {
            assert_eq!(tag(&face, i / 3, i % 3), i as u8);
        }
    }
}
