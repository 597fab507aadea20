//! Footprint overlap checks on the ground plane.
//!
//! Corner units are tested by their bounding rectangle, so an
//! overlap report for them is conservative.

use crate::footprint::{compute_bounds, Footprint};
use crate::types::{BlockDimensions, BoundingRect, PlacedUnit, Rotation, ShapeCategory, Vec3};

/// True if the interiors of two rectangles overlap.
/// Touching (shared edge or corner) is NOT counted as overlap.
pub fn bounds_overlap(a: &BoundingRect, b: &BoundingRect) -> bool {
    if a.max_x <= b.min_x || b.max_x <= a.min_x {
        return false;
    }
    if a.max_z <= b.min_z || b.max_z <= a.min_z {
        return false;
    }
    true
}

/// World-space bounds of a unit about to be placed at `position`.
pub fn placement_bounds(
    position: Vec3,
    category: ShapeCategory,
    thickness: f64,
    rotation: Rotation,
    dims: &BlockDimensions,
) -> BoundingRect {
    Footprint::resolve(category, thickness, dims)
        .local_bounds(rotation)
        .translated(position.x, position.z)
}

/// Ids of placed units whose footprint overlaps `bounds`, in input
/// order.
pub fn find_overlaps<'a>(
    bounds: &BoundingRect,
    existing: &'a [PlacedUnit],
    dims: &BlockDimensions,
) -> Vec<&'a str> {
    existing
        .iter()
        .filter(|unit| bounds_overlap(bounds, &compute_bounds(unit, dims)))
        .map(|unit| unit.id.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(min_x: f64, max_x: f64, min_z: f64, max_z: f64) -> BoundingRect {
        BoundingRect {
            min_x,
            max_x,
            min_z,
            max_z,
            rotation: Rotation::Deg0,
        }
    }

    fn straight(id: &str, x: f64, z: f64, rotation: Rotation) -> PlacedUnit {
        PlacedUnit {
            id: id.into(),
            category: ShapeCategory::Rectangular,
            thickness: 12.0,
            position: Vec3::new(x, 0.0, z),
            rotation,
        }
    }

    #[test]
    fn separated_no_overlap() {
        let a = rect(0.0, 5.0, 0.0, 2.5);
        let b = rect(10.0, 15.0, 0.0, 2.5);
        assert!(!bounds_overlap(&a, &b));
    }

    #[test]
    fn overlapping() {
        let a = rect(0.0, 5.0, 0.0, 2.5);
        let b = rect(3.0, 8.0, 1.0, 3.5);
        assert!(bounds_overlap(&a, &b));
        assert!(bounds_overlap(&b, &a));
    }

    #[test]
    fn touching_no_overlap() {
        let a = rect(0.0, 5.0, 0.0, 2.5);
        let b = rect(5.0, 10.0, 0.0, 2.5);
        assert!(!bounds_overlap(&a, &b));
    }

    #[test]
    fn touching_corner_no_overlap() {
        let a = rect(0.0, 5.0, 0.0, 2.5);
        let b = rect(5.0, 10.0, 2.5, 5.0);
        assert!(!bounds_overlap(&a, &b));
    }

    #[test]
    fn snapped_neighbours_do_not_overlap() {
        let dims = BlockDimensions::default();
        let existing = vec![straight("a", 0.0, 0.0, Rotation::Deg0)];
        let b = placement_bounds(
            Vec3::new(48.0, 0.0, 0.0),
            ShapeCategory::Rectangular,
            12.0,
            Rotation::Deg0,
            &dims,
        );
        assert!(find_overlaps(&b, &existing, &dims).is_empty());
    }

    #[test]
    fn reports_overlapping_ids_in_order() {
        let dims = BlockDimensions::default();
        let existing = vec![
            straight("a", 0.0, 0.0, Rotation::Deg0),
            straight("b", 200.0, 0.0, Rotation::Deg0),
            straight("c", 30.0, 0.0, Rotation::Deg90),
        ];
        let b = placement_bounds(
            Vec3::new(20.0, 0.0, 0.0),
            ShapeCategory::Rectangular,
            12.0,
            Rotation::Deg0,
            &dims,
        );
        assert_eq!(find_overlaps(&b, &existing, &dims), vec!["a", "c"]);
    }
}
