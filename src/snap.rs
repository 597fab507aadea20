//! Placement snapping: edge-to-edge alignment against placed units,
//! with a coarse grid as the fallback.

use crate::footprint::{face_offsets, snap_faces};
use crate::types::{
    PlacedUnit, Rotation, ShapeCategory, SnapConfig, SnapFace, SnapResult, Vec3, VERTICAL_MODULE,
};

/// Round `value` to the nearest multiple of `module`, ties to even.
/// A module that is not a positive finite number leaves the value
/// untouched.
pub fn round_to_module(value: f64, module: f64) -> f64 {
    if !(module.is_finite() && module > 0.0) {
        return value;
    }
    (value / module).round_ties_even() * module
}

/// Round X/Z to `grid_size` and Y to the fixed vertical module.
pub fn snap_to_grid(position: Vec3, grid_size: f64) -> Vec3 {
    snap_to_grid_with(position, grid_size, VERTICAL_MODULE)
}

pub fn snap_to_grid_with(position: Vec3, grid_size: f64, vertical_module: f64) -> Vec3 {
    Vec3 {
        x: round_to_module(position.x, grid_size),
        y: round_to_module(position.y, vertical_module),
        z: round_to_module(position.z, grid_size),
    }
}

/// Center that makes the candidate face (given as an offset from the
/// candidate's center) touch `existing`. Returns None unless the two
/// faces point at each other along the same axis.
///
/// The face planes coincide and the face midpoints line up along the
/// other axis.
pub fn aligned_center(existing: &SnapFace, offset: &SnapFace) -> Option<(f64, f64)> {
    if offset.orientation != existing.orientation.opposite() {
        return None;
    }
    if existing.orientation.is_x_axis() {
        Some((
            existing.plane - offset.plane,
            existing.center_z - offset.center_z,
        ))
    } else {
        Some((
            existing.center_x - offset.center_x,
            existing.plane - offset.plane,
        ))
    }
}

struct Candidate<'a> {
    x: f64,
    z: f64,
    target: &'a PlacedUnit,
    existing: SnapFace,
    offset: SnapFace,
}

/// Resolve where a new unit should go for a raw cursor position.
///
/// Every opposing face pair between the new unit and each placed
/// unit proposes an aligned center. The proposal closest to `raw` in
/// the ground plane wins if it is strictly closer than the snap
/// threshold; exact ties keep the first one found, in `existing`
/// order. Otherwise the raw position is rounded to the grid.
pub fn snap_placement(
    raw: Vec3,
    category: ShapeCategory,
    thickness: f64,
    rotation: Rotation,
    existing: &[PlacedUnit],
    config: &SnapConfig,
) -> SnapResult {
    let dims = &config.dimensions;
    let offsets = face_offsets(category, thickness, rotation, dims);

    let mut best: Option<Candidate> = None;
    let mut best_dist = config.snap_threshold;

    for unit in existing {
        for ef in snap_faces(unit, dims) {
            for cf in &offsets {
                let Some((x, z)) = aligned_center(&ef, cf) else {
                    continue;
                };
                let dist = raw.ground_distance(x, z);
                if dist < best_dist {
                    log::trace!(
                        "candidate {:?} face on {} {:?}: ({x}, {z}) at {dist}",
                        cf.orientation,
                        unit.id,
                        ef.orientation,
                    );
                    best_dist = dist;
                    best = Some(Candidate {
                        x,
                        z,
                        target: unit,
                        existing: ef,
                        offset: *cf,
                    });
                }
            }
        }
    }

    match best {
        Some(c) => {
            log::debug!(
                "snapped to {} {:?} edge at ({}, {}), distance {best_dist}",
                c.target.id,
                c.existing.orientation.edge(),
                c.x,
                c.z,
            );
            SnapResult {
                position: Vec3::new(c.x, raw.y, c.z),
                snapped: true,
                target_id: Some(c.target.id.clone()),
                candidate_face: Some(c.offset.orientation),
                edge: Some(c.existing.orientation.edge()),
            }
        }
        None => {
            let position = snap_to_grid_with(raw, config.grid_size, config.vertical_module);
            log::debug!(
                "no face within {} of ({}, {}), grid fallback to ({}, {}, {})",
                config.snap_threshold,
                raw.x,
                raw.z,
                position.x,
                position.y,
                position.z,
            );
            SnapResult {
                position,
                snapped: false,
                target_id: None,
                candidate_face: None,
                edge: None,
            }
        }
    }
}

// -----------------------------------------------------------------
// Tests
// -----------------------------------------------------------------
