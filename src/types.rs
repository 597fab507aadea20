//! Data types for the wall-block snapping engine.
//!
//! Every struct here derives Serialize + Deserialize so it can
//! round-trip through the JSON interchange format.

use serde::{Deserialize, Serialize};

// -- Geometry ------------------------------------------------------

/// World-space position. `y` is vertical and plays no part in
/// footprint math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    /// Distance in the ground plane only.
    pub fn ground_distance(&self, x: f64, z: f64) -> f64 {
        let dx = self.x - x;
        let dz = self.z - z;
        (dx * dx + dz * dz).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeCategory {
    #[serde(rename = "rectangular")]
    Rectangular,
    #[serde(rename = "corner-90")]
    Corner90,
    #[serde(rename = "corner-45")]
    Corner45,
    #[serde(other, rename = "unrecognized")]
    Unrecognized,
}

/// Quarter-turn rotation about the vertical axis.
///
/// Serialized as degrees. Degree values are normalized modulo 360;
/// anything that is not a multiple of 90 resolves to `Deg0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "f64", into = "f64")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    pub fn from_degrees(deg: f64) -> Self {
        if !deg.is_finite() {
            log::warn!("non-finite rotation {deg}, using 0 degrees");
            return Rotation::Deg0;
        }
        let norm = deg.rem_euclid(360.0);
        let quarter = (norm / 90.0).round();
        if (norm - quarter * 90.0).abs() > 1e-9 {
            log::warn!("rotation {deg} is not a quarter turn, using 0 degrees");
            return Rotation::Deg0;
        }
        match quarter as u32 % 4 {
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            3 => Rotation::Deg270,
            _ => Rotation::Deg0,
        }
    }

    pub fn degrees(self) -> f64 {
        match self {
            Rotation::Deg0 => 0.0,
            Rotation::Deg90 => 90.0,
            Rotation::Deg180 => 180.0,
            Rotation::Deg270 => 270.0,
        }
    }
}

impl From<f64> for Rotation {
    fn from(deg: f64) -> Self {
        Rotation::from_degrees(deg)
    }
}

impl From<Rotation> for f64 {
    fn from(rot: Rotation) -> Self {
        rot.degrees()
    }
}

// -- Units ---------------------------------------------------------

/// A unit already in the layout. Owned by the caller; the engine
/// only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedUnit {
    pub id: String,
    pub category: ShapeCategory,
    pub thickness: f64,
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Rotation,
}

/// Size constants of the block catalog, in inches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockDimensions {
    #[serde(default = "default_length")]
    pub length: f64,
    #[serde(default = "default_long_leg")]
    pub long_leg: f64,
    #[serde(default = "default_short_leg")]
    pub short_leg: f64,
    #[serde(default = "default_corner45_leg")]
    pub corner45_leg: f64,
    #[serde(default = "default_width_allowance")]
    pub width_allowance: f64,
}

fn default_length() -> f64 {
    48.0
}
fn default_long_leg() -> f64 {
    48.0
}
fn default_short_leg() -> f64 {
    24.0
}
fn default_corner45_leg() -> f64 {
    24.0
}
fn default_width_allowance() -> f64 {
    1.5
}

impl Default for BlockDimensions {
    fn default() -> Self {
        Self {
            length: 48.0,
            long_leg: 48.0,
            short_leg: 24.0,
            corner45_leg: 24.0,
            width_allowance: 1.5,
        }
    }
}

impl BlockDimensions {
    /// Footprint width of a unit with the given wall thickness.
    pub fn width_for(&self, thickness: f64) -> f64 {
        thickness + self.width_allowance
    }
}

// -- Footprint geometry --------------------------------------------

/// Axis-aligned rectangle enclosing a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
    pub rotation: Rotation,
}

impl BoundingRect {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    pub fn translated(&self, dx: f64, dz: f64) -> Self {
        BoundingRect {
            min_x: self.min_x + dx,
            max_x: self.max_x + dx,
            min_z: self.min_z + dz,
            max_z: self.max_z + dz,
            rotation: self.rotation,
        }
    }
}

/// Outward direction of a snap face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceOrientation {
    #[serde(rename = "-x")]
    NegX,
    #[serde(rename = "+x")]
    PosX,
    #[serde(rename = "-z")]
    NegZ,
    #[serde(rename = "+z")]
    PosZ,
}

impl FaceOrientation {
    pub fn opposite(self) -> Self {
        match self {
            FaceOrientation::NegX => FaceOrientation::PosX,
            FaceOrientation::PosX => FaceOrientation::NegX,
            FaceOrientation::NegZ => FaceOrientation::PosZ,
            FaceOrientation::PosZ => FaceOrientation::NegZ,
        }
    }

    pub fn is_x_axis(self) -> bool {
        matches!(self, FaceOrientation::NegX | FaceOrientation::PosX)
    }

    pub fn edge(self) -> Edge {
        match self {
            FaceOrientation::NegX => Edge::Left,
            FaceOrientation::PosX => Edge::Right,
            FaceOrientation::NegZ => Edge::Back,
            FaceOrientation::PosZ => Edge::Front,
        }
    }
}

/// One oriented edge of a footprint.
///
/// `plane` is the constant coordinate of the face (x for ±X faces, z
/// for ±Z faces); `center_x`/`center_z` is its midpoint. Values are
/// either absolute or relative to the unit's center, depending on
/// where the face came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapFace {
    pub orientation: FaceOrientation,
    pub plane: f64,
    pub center_x: f64,
    pub center_z: f64,
}

impl SnapFace {
    pub fn translated(&self, cx: f64, cz: f64) -> Self {
        let shift = if self.orientation.is_x_axis() { cx } else { cz };
        SnapFace {
            orientation: self.orientation,
            plane: self.plane + shift,
            center_x: self.center_x + cx,
            center_z: self.center_z + cz,
        }
    }
}

// -- Snapping ------------------------------------------------------

/// Semantic side label of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Right,
    Front,
    Back,
}

fn is_false(v: &bool) -> bool {
    !v
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapResult {
    pub position: Vec3,
    #[serde(default, skip_serializing_if = "is_false")]
    pub snapped: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_face: Option<FaceOrientation>,
    /// Side of the target unit the new unit attaches to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge: Option<Edge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapConfig {
    #[serde(default = "default_grid_size")]
    pub grid_size: f64,
    #[serde(default = "default_vertical_module")]
    pub vertical_module: f64,
    #[serde(default = "default_snap_threshold")]
    pub snap_threshold: f64,
    #[serde(default)]
    pub dimensions: BlockDimensions,
}

pub const DEFAULT_GRID_SIZE: f64 = 8.0;
pub const VERTICAL_MODULE: f64 = 16.0;
pub const SNAP_THRESHOLD: f64 = 150.0;

fn default_grid_size() -> f64 {
    DEFAULT_GRID_SIZE
}
fn default_vertical_module() -> f64 {
    VERTICAL_MODULE
}
fn default_snap_threshold() -> f64 {
    SNAP_THRESHOLD
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            vertical_module: VERTICAL_MODULE,
            snap_threshold: SNAP_THRESHOLD,
            dimensions: BlockDimensions::default(),
        }
    }
}

// -- Engine I/O ----------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapRequest {
    pub position: Vec3,
    pub category: ShapeCategory,
    pub thickness: f64,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default)]
    pub existing_units: Vec<PlacedUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<SnapConfig>,
}

impl SnapRequest {
    pub fn config(&self) -> SnapConfig {
        self.config.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundsRequest {
    pub unit: PlacedUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<BlockDimensions>,
}

// -- Tests ---------------------------------------------------------
