//! Cube state and turn engine.
//!
//! The cube never moves facelets. A turn instead copies the labels and
//! colors of the facelets it affects into their destinations: the strip of
//! each face in the turn's ring shifts one place around the ring, and the
//! turned face spins in place.

use rand::Rng;

use crate::face::StripStickers;
use crate::{
    ColorPalette, Face, FaceColor, Facelet, SCRAMBLE_LENGTH, SolveReport, Strip, TurnFace, Twist,
};

/// Four faces around an axis, in the order that turns shift strips between
/// them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Ring {
    /// Around the vertical axis.
    Y,
    /// Around the left-right axis.
    X,
    /// Around the front-back axis.
    Z,
}
impl Ring {
    pub(crate) const fn faces(self) -> [FaceColor; 4] {
        use FaceColor::*;

        match self {
            Ring::Y => [Red, Green, Orange, Blue],
            Ring::X => [White, Blue, Yellow, Green],
            Ring::Z => [White, Red, Yellow, Orange],
        }
    }
}

/// Which ring neighbor each face receives its new strip from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Source {
    /// Face `i` receives from face `i + 1`.
    Next,
    /// Face `i` receives from face `i - 1`.
    Prev,
}

/// Clockwise quarter turn of one face, as a ring shift plus a face spin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Primitive {
    ring: Ring,
    strip: Strip,
    source: Source,
    spin: FaceColor,
    spin_quarter_turns: usize,
}
impl Primitive {
    const fn of(face: TurnFace) -> Self {
        let (ring, strip, source, spin_quarter_turns) = match face {
            TurnFace::U => (Ring::Y, Strip::Top, Source::Next, 1),
            TurnFace::D => (Ring::Y, Strip::Bottom, Source::Prev, 3),
            TurnFace::R => (Ring::X, Strip::Right, Source::Next, 1),
            TurnFace::L => (Ring::X, Strip::Left, Source::Prev, 3),
            TurnFace::F => (Ring::Z, Strip::Front, Source::Prev, 3),
            TurnFace::B => (Ring::Z, Strip::Back, Source::Next, 1),
        };
        Self {
            ring,
            strip,
            source,
            spin: face.face_color(),
            spin_quarter_turns,
        }
    }
}

/// Faces whose strip is traversed in the opposite direction from the other
/// two faces in the ring. A strip written into one of these faces is
/// reversed first.
const fn reversed_faces(strip: Strip) -> [FaceColor; 2] {
    use FaceColor::*;

    match strip {
        Strip::Top | Strip::Left => [Blue, Green],
        Strip::Bottom | Strip::Front => [Red, Orange],
        Strip::Right | Strip::Back => [White, Yellow],
    }
}

/// Returns whether a strip must be reversed before being written into
/// `destination`.
fn is_reversed(strip: Strip, destination: FaceColor) -> bool {
    reversed_faces(strip).contains(&destination)
}

/// State of a 3x3x3 cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    /// Faces, indexed by [`FaceColor::index()`].
    faces: [Face; 6],
}
impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}
impl Cube {
    /// Constructs a solved cube with the default palette.
    pub fn new() -> Self {
        Self::with_palette(&ColorPalette::default())
    }
    /// Constructs a solved cube with the given palette.
    pub fn with_palette(palette: &ColorPalette) -> Self {
        Self {
            faces: FaceColor::ALL.map(|color| Face::new(color, palette)),
        }
    }

    /// Returns the face with the given color.
    pub fn face(&self, color: FaceColor) -> &Face {
        &self.faces[color.index()]
    }
    /// Returns all six faces, in [`FaceColor::ALL`] order.
    pub fn faces(&self) -> &[Face; 6] {
        &self.faces
    }
    /// Returns every facelet along with the color of the face it sits on.
    pub fn facelets(&self) -> impl Iterator<Item = (FaceColor, &Facelet)> {
        self.faces
            .iter()
            .flat_map(|face| face.facelets().iter().map(|f| (face.color(), f)))
    }
    /// Returns the labels of every facelet, indexed by face and then
    /// row-major position.
    pub fn labels(&self) -> [[FaceColor; 9]; 6] {
        self.faces
            .each_ref()
            .map(|face| face.facelets().each_ref().map(Facelet::label))
    }
    /// Returns the number of facelets with each label, indexed by
    /// [`FaceColor::index()`].
    pub fn label_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for (_, facelet) in self.facelets() {
            counts[facelet.label().index()] += 1;
        }
        counts
    }
    /// Returns whether every face shows only its own color.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(Face::is_uniform)
    }

    /// Recolors every facelet from its label using `palette`.
    pub fn apply_palette(&mut self, palette: &ColorPalette) {
        for face in &mut self.faces {
            face.apply_palette(palette);
        }
    }

    /// Applies a twist given in notation such as `U`, `R'`, or `F2`. Returns
    /// the twist that was applied, or `None` if the notation was not
    /// recognized, in which case the cube is unchanged.
    pub fn rotate(&mut self, notation: &str) -> Option<Twist> {
        match notation.parse::<Twist>() {
            Ok(twist) => {
                self.twist(twist);
                Some(twist)
            }
            Err(e) => {
                log::debug!("ignoring twist {notation:?}: {e}");
                None
            }
        }
    }
    /// Applies a twist.
    pub fn twist(&mut self, twist: Twist) {
        log::trace!("twist {twist}");
        let primitive = Primitive::of(twist.face);
        for _ in 0..twist.direction.quarter_turns() {
            self.turn(primitive);
        }
    }
    /// Applies a sequence of twists in order.
    pub fn twist_all(&mut self, twists: impl IntoIterator<Item = Twist>) {
        for twist in twists {
            self.twist(twist);
        }
    }

    /// Applies [`SCRAMBLE_LENGTH`] random twists and returns them.
    pub fn scramble(&mut self) -> Vec<Twist> {
        self.scramble_with_rng(&mut rand::rng(), SCRAMBLE_LENGTH)
    }
    /// Applies `len` random twists drawn from `rng` and returns them.
    pub fn scramble_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R, len: usize) -> Vec<Twist> {
        let twists = crate::random_twists(rng, len);
        log::info!("scrambling with {}", crate::format_twists(&twists));
        self.twist_all(twists.iter().copied());
        log::info!("scrambled with {} twists", twists.len());
        twists
    }

    /// Runs the partial solver. See [`crate::solver`] for what it does and
    /// does not do.
    pub fn solve(&mut self) -> SolveReport {
        crate::solver::solve(self)
    }

    /// Applies a single clockwise quarter turn.
    fn turn(&mut self, primitive: Primitive) {
        let Primitive {
            ring,
            strip,
            source,
            spin,
            spin_quarter_turns,
        } = primitive;

        let ring = ring.faces();
        // Read every strip before writing any of them.
        let snapshots: [StripStickers; 4] = ring.map(|color| self.face(color).snapshot(strip));
        for (i, &destination) in ring.iter().enumerate() {
            let from = match source {
                Source::Next => (i + 1) % 4,
                Source::Prev => (i + 3) % 4,
            };
            let mut incoming = snapshots[from].clone();
            if is_reversed(strip, destination) {
                incoming.reverse();
            }
            self.faces[destination.index()].apply_strip(strip, &incoming);
        }

        self.faces[spin.index()].rotate_in_place(spin_quarter_turns);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn strip_labels(cube: &Cube, color: FaceColor, strip: Strip) -> Vec<FaceColor> {
        cube.face(color).strip(strip).map(Facelet::label).collect()
    }

    #[test]
    fn test_every_ring_strip_is_full() {
        for face in TurnFace::ALL {
            let p = Primitive::of(face);
            let cube = Cube::new();
            for color in p.ring.faces() {
                assert_eq!(cube.face(color).strip(p.strip).count(), 3, "{face} on {color}");
            }
            assert!(!p.ring.faces().contains(&p.spin), "{face} spins a ring face");
        }
    }

    #[test]
    fn test_reversal_table() {
        // Each ring has exactly two faces that reverse incoming strips, and
        // they are opposite each other.
        for face in TurnFace::ALL {
            let p = Primitive::of(face);
            let ring = p.ring.faces();
            let reversed: Vec<usize> = (0..4).filter(|&i| is_reversed(p.strip, ring[i])).collect();
            assert_eq!(reversed.len(), 2, "{face}");
            assert_eq!(reversed[1] - reversed[0], 2, "{face}");
        }
    }

    #[test]
    fn test_u_shifts_top_strips() {
        use FaceColor::*;

        let mut cube = Cube::new();
        assert_eq!(cube.rotate("U"), Some(Twist::cw(TurnFace::U)));
        assert_eq!(strip_labels(&cube, Red, Strip::Top), vec![Green; 3]);
        assert_eq!(strip_labels(&cube, Green, Strip::Top), vec![Orange; 3]);
        assert_eq!(strip_labels(&cube, Orange, Strip::Top), vec![Blue; 3]);
        assert_eq!(strip_labels(&cube, Blue, Strip::Top), vec![Red; 3]);
        assert!(cube.face(White).is_uniform());
        assert!(cube.face(Yellow).is_uniform());

        let moved = cube.facelets().filter(|(c, f)| f.label() != *c).count();
        assert_eq!(moved, 12);
    }

    #[test]
    fn test_colors_follow_labels() {
        let palette = ColorPalette::default();
        let mut cube = Cube::new();
        for notation in ["R", "U", "F'", "B2", "L", "D'"] {
            cube.rotate(notation);
        }
        for (_, facelet) in cube.facelets() {
            assert_eq!(facelet.color(), palette.get(facelet.label()));
        }
    }

    #[test]
    fn test_unknown_notation_is_ignored() {
        let mut cube = Cube::new();
        cube.rotate("R");
        let before = cube.clone();
        for notation in ["", "X", "r", "R3", "U'2", " U"] {
            assert_eq!(cube.rotate(notation), None, "{notation:?}");
        }
        assert_eq!(cube, before);
    }

    #[test]
    fn test_apply_palette() {
        let mut palette = ColorPalette::default();
        *palette.get_mut(FaceColor::Green) = crate::Rgb::BLACK;
        let mut cube = Cube::new();
        cube.rotate("U");
        cube.apply_palette(&palette);
        assert!(
            cube.face(FaceColor::Red)
                .strip(Strip::Top)
                .all(|f| f.color() == crate::Rgb::BLACK)
        );
        assert_eq!(cube.face(FaceColor::Green).center().color(), crate::Rgb::BLACK);
    }
}
