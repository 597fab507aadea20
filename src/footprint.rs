//! Footprint geometry for wall-block units.
//!
//! Resolves a unit's shape category and thickness into a `Footprint`
//! and derives its bounding rectangle and four snap faces for each
//! quarter-turn rotation. Rotation follows a right-handed Y-up frame:
//! a 90 degree turn takes local (x, z) to (z, -x).
//!
//! Everything is computed relative to the unit's center first, then
//! translated, so placed-unit faces and prospective-unit face offsets
//! always come from the same formulas.

use crate::types::{
    BlockDimensions, BoundingRect, FaceOrientation, PlacedUnit, Rotation, ShapeCategory,
    SnapFace,
};

/// Half extents of the footprint used for unrecognized shapes.
const FALLBACK_HALF_WIDTH: f64 = 24.0;
const FALLBACK_HALF_DEPTH: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Footprint {
    /// Straight block; the long side runs along X at 0 degrees.
    Rectangular { length: f64, width: f64 },
    /// L-shaped corner. At 0 degrees the long leg runs along Z on the
    /// -X side and the short leg runs toward +X from its +Z end.
    Corner90 { long_leg: f64, short_leg: f64, width: f64 },
    /// Equal-leg angled corner, approximated by its square box.
    Corner45 { leg: f64 },
    Unrecognized,
}

impl Footprint {
    pub fn resolve(category: ShapeCategory, thickness: f64, dims: &BlockDimensions) -> Self {
        let width = dims.width_for(thickness);
        match category {
            ShapeCategory::Rectangular => Footprint::Rectangular {
                length: dims.length,
                width,
            },
            ShapeCategory::Corner90 => Footprint::Corner90 {
                long_leg: dims.long_leg,
                short_leg: dims.short_leg,
                width,
            },
            ShapeCategory::Corner45 => Footprint::Corner45 {
                leg: dims.corner45_leg,
            },
            ShapeCategory::Unrecognized => Footprint::Unrecognized,
        }
    }

    /// Bounding rectangle relative to the unit's center.
    pub fn local_bounds(&self, rotation: Rotation) -> BoundingRect {
        let (min_x, max_x, min_z, max_z) = match *self {
            Footprint::Rectangular { length, width } => {
                let hl = length / 2.0;
                let hw = width / 2.0;
                match rotation {
                    Rotation::Deg0 | Rotation::Deg180 => (-hl, hl, -hw, hw),
                    Rotation::Deg90 | Rotation::Deg270 => (-hw, hw, -hl, hl),
                }
            }
            Footprint::Corner90 {
                long_leg: l,
                short_leg: s,
                width: w,
            } => match rotation {
                Rotation::Deg0 => (-w / 2.0, s - w / 2.0, -l / 2.0, l / 2.0),
                Rotation::Deg90 => (-l / 2.0, l / 2.0, w / 2.0 - s, w / 2.0),
                Rotation::Deg180 => (w / 2.0 - s, w / 2.0, -l / 2.0, l / 2.0),
                Rotation::Deg270 => (-l / 2.0, l / 2.0, -w / 2.0, s - w / 2.0),
            },
            Footprint::Corner45 { leg } => match rotation {
                Rotation::Deg0 => (0.0, leg, 0.0, leg),
                Rotation::Deg90 => (0.0, leg, -leg, 0.0),
                Rotation::Deg180 => (-leg, 0.0, -leg, 0.0),
                Rotation::Deg270 => (-leg, 0.0, 0.0, leg),
            },
            Footprint::Unrecognized => (
                -FALLBACK_HALF_WIDTH,
                FALLBACK_HALF_WIDTH,
                -FALLBACK_HALF_DEPTH,
                FALLBACK_HALF_DEPTH,
            ),
        };
        BoundingRect {
            min_x,
            max_x,
            min_z,
            max_z,
            rotation,
        }
    }

    /// The four snap faces relative to the unit's center, ordered
    /// -X, +X, -Z, +Z.
    pub fn face_offsets(&self, rotation: Rotation) -> [SnapFace; 4] {
        match *self {
            Footprint::Corner90 {
                long_leg,
                short_leg,
                width,
            } => corner90_faces(long_leg, short_leg, width, rotation),
            _ => rect_faces(&self.local_bounds(rotation)),
        }
    }
}

fn face(orientation: FaceOrientation, plane: f64, center_x: f64, center_z: f64) -> SnapFace {
    SnapFace {
        orientation,
        plane,
        center_x,
        center_z,
    }
}

fn rect_faces(b: &BoundingRect) -> [SnapFace; 4] {
    let mid_x = (b.min_x + b.max_x) / 2.0;
    let mid_z = (b.min_z + b.max_z) / 2.0;
    [
        face(FaceOrientation::NegX, b.min_x, b.min_x, mid_z),
        face(FaceOrientation::PosX, b.max_x, b.max_x, mid_z),
        face(FaceOrientation::NegZ, b.min_z, mid_x, b.min_z),
        face(FaceOrientation::PosZ, b.max_z, mid_x, b.max_z),
    ]
}

// Each face is a physical wall of the L, not a side of its bounding
// box: the outer side of the long leg, the free end of the short leg,
// the free end of the long leg, and the outer side across both legs.
fn corner90_faces(l: f64, s: f64, w: f64, rotation: Rotation) -> [SnapFace; 4] {
    use FaceOrientation::{NegX, NegZ, PosX, PosZ};
    let hl = l / 2.0;
    let hw = w / 2.0;
    match rotation {
        Rotation::Deg0 => [
            face(NegX, -hw, -hw, 0.0),
            face(PosX, s - hw, s - hw, hl - hw),
            face(NegZ, -hl, 0.0, -hl),
            face(PosZ, hl, s / 2.0 - hw, hl),
        ],
        Rotation::Deg90 => [
            face(NegX, -hl, -hl, 0.0),
            face(PosX, hl, hl, hw - s / 2.0),
            face(NegZ, hw - s, hl - hw, hw - s),
            face(PosZ, hw, 0.0, hw),
        ],
        Rotation::Deg180 => [
            face(NegX, hw - s, hw - s, hw - hl),
            face(PosX, hw, hw, 0.0),
            face(NegZ, -hl, hw - s / 2.0, -hl),
            face(PosZ, hl, 0.0, hl),
        ],
        Rotation::Deg270 => [
            face(NegX, -hl, -hl, s / 2.0 - hw),
            face(PosX, hl, hl, 0.0),
            face(NegZ, -hw, 0.0, -hw),
            face(PosZ, s - hw, hw - hl, s - hw),
        ],
    }
}

/// World-space bounding rectangle of a placed unit.
pub fn compute_bounds(unit: &PlacedUnit, dims: &BlockDimensions) -> BoundingRect {
    Footprint::resolve(unit.category, unit.thickness, dims)
        .local_bounds(unit.rotation)
        .translated(unit.position.x, unit.position.z)
}

/// World-space snap faces of a placed unit.
pub fn snap_faces(unit: &PlacedUnit, dims: &BlockDimensions) -> [SnapFace; 4] {
    face_offsets(unit.category, unit.thickness, unit.rotation, dims)
        .map(|f| f.translated(unit.position.x, unit.position.z))
}

/// Snap faces of a unit that has not been positioned yet, relative
/// to its own center.
pub fn face_offsets(
    category: ShapeCategory,
    thickness: f64,
    rotation: Rotation,
    dims: &BlockDimensions,
) -> [SnapFace; 4] {
    Footprint::resolve(category, thickness, dims).face_offsets(rotation)
}

// -- Tests ---------------------------------------------------------
