//! Facelets: the colored squares that make up each face.

use std::f32::consts::FRAC_PI_2;

use cgmath::{EuclideanSpace, Matrix4, Point3, Rad, Vector3};

use crate::{FaceColor, Rgb, Sign};

/// Distance from the center of the cube to the center of each face.
pub const FACE_DISTANCE: f32 = 1.5;

/// Label and display color carried by a facelet. Turns move these between
/// facelets; nothing else about a facelet ever changes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sticker {
    /// Color that the facelet currently represents.
    pub label: FaceColor,
    /// Color that the facelet is drawn with.
    pub color: Rgb,
}

/// Fixed 3D placement of a facelet, computed once at construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    center: Point3<f32>,
    normal: Vector3<f32>,
    euler: [Rad<f32>; 3],
}
impl Placement {
    /// Returns the placement of the facelet at grid position `(row, col)` on
    /// the face with color `face`.
    pub(crate) fn new(face: FaceColor, row: Sign, col: Sign) -> Self {
        let (i, j) = (row.float(), col.float());
        let d = FACE_DISTANCE;
        let zero = Rad(0.0);
        let quarter = Rad(FRAC_PI_2);

        let (center, normal, euler) = match face {
            FaceColor::White => ([i, d, j], [0.0, 1.0, 0.0], [quarter, zero, zero]),
            FaceColor::Yellow => ([i, -d, j], [0.0, -1.0, 0.0], [quarter, zero, zero]),
            FaceColor::Blue => ([i, j, d], [0.0, 0.0, 1.0], [zero; 3]),
            FaceColor::Green => ([i, j, -d], [0.0, 0.0, -1.0], [zero; 3]),
            FaceColor::Red => ([d, j, i], [1.0, 0.0, 0.0], [zero, quarter, zero]),
            FaceColor::Orange => ([-d, j, i], [-1.0, 0.0, 0.0], [zero, quarter, zero]),
        };

        Self {
            center: center.into(),
            normal: normal.into(),
            euler,
        }
    }

    /// Returns the center of the facelet in world space.
    pub fn center(&self) -> Point3<f32> {
        self.center
    }
    /// Returns the outward unit normal of the face the facelet sits on.
    pub fn normal(&self) -> Vector3<f32> {
        self.normal
    }
    /// Returns the rotation of the facelet's unit square as Euler angles
    /// about X, Y, and Z (applied in that order).
    pub fn euler_angles(&self) -> [Rad<f32>; 3] {
        self.euler
    }
    /// Returns the position of the facelet within the plane of its face,
    /// i.e., its center with the component along the normal removed.
    pub fn in_plane(&self) -> Vector3<f32> {
        self.center.to_vec() - self.normal * FACE_DISTANCE
    }
    /// Returns the transform from a unit square in the XY plane, centered on
    /// the origin, to this facelet.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        let [x, y, z] = self.euler;
        Matrix4::from_translation(self.center.to_vec())
            * Matrix4::from_angle_x(x)
            * Matrix4::from_angle_y(y)
            * Matrix4::from_angle_z(z)
    }
}

/// One colored square of a face.
#[derive(Debug, Clone, PartialEq)]
pub struct Facelet {
    sticker: Sticker,
    row: Sign,
    col: Sign,
    placement: Placement,
}
impl Facelet {
    pub(crate) fn new(face: FaceColor, row: Sign, col: Sign, color: Rgb) -> Self {
        Self {
            sticker: Sticker { label: face, color },
            row,
            col,
            placement: Placement::new(face, row, col),
        }
    }

    /// Returns the color that the facelet currently represents.
    pub fn label(&self) -> FaceColor {
        self.sticker.label
    }
    /// Returns the color that the facelet is drawn with.
    pub fn color(&self) -> Rgb {
        self.sticker.color
    }
    /// Sets the color that the facelet is drawn with. The label is
    /// unaffected.
    pub fn set_color(&mut self, color: Rgb) {
        self.sticker.color = color;
    }
    /// Returns the label and color together.
    pub fn sticker(&self) -> Sticker {
        self.sticker
    }
    pub(crate) fn set_sticker(&mut self, sticker: Sticker) {
        self.sticker = sticker;
    }

    /// Returns the grid position of the facelet on its face as `(row, col)`.
    pub fn grid(&self) -> (Sign, Sign) {
        (self.row, self.col)
    }
    /// Returns whether the facelet is on a corner of its face.
    pub fn is_corner(&self) -> bool {
        self.row.is_nonzero() && self.col.is_nonzero()
    }
    /// Returns whether the facelet is in the middle of an edge of its face.
    pub fn is_edge(&self) -> bool {
        self.row.is_zero() != self.col.is_zero()
    }
    /// Returns the fixed 3D placement of the facelet.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }
}
