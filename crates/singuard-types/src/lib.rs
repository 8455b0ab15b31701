use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discrete proximity-to-singularity classification for one control cycle.
///
/// `Clear` means no joint sits inside any threshold band; `Band3` means at
/// least one joint is inside its tightest (most severe) band. The derived
/// `Ord` follows severity, so folding per-joint results is a plain `max`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[repr(u8)]
pub enum SeverityLevel {
    /// No joint is inside any singularity band.
    #[default]
    Clear = 0,
    /// Worst joint is inside its outermost (mildest) band.
    Band1 = 1,
    /// Worst joint is inside its middle band.
    Band2 = 2,
    /// At least one joint is inside its tightest band; dominates all others.
    Band3 = 3,
}

impl SeverityLevel {
    /// The numeric level, 0–3.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Motion-scaling value published downstream once per cycle.
///
/// Defined as `severity level + 1`, so the range is 1 (safe) to 4 (deepest
/// band). Downstream consumers interpret it as a scaling divisor for
/// commanded motion. `Default` is 1, the value held before the first
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScalingSignal(u8);

impl ScalingSignal {
    /// Build the signal emitted for `level`.
    pub fn from_level(level: SeverityLevel) -> Self {
        Self(level.as_u8() + 1)
    }

    /// The raw wire value, 1–4.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for ScalingSignal {
    fn default() -> Self {
        Self::from_level(SeverityLevel::Clear)
    }
}

/// Lower/upper position thresholds for one severity band, one entry per joint.
///
/// A joint is "inside" the band when its position lies strictly between
/// `lower[i]` and `upper[i]` (both bounds exclusive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitBand {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl LimitBand {
    /// Convenience constructor taking per-joint bound vectors.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        Self { lower, upper }
    }
}

/// Full threshold configuration for a singularity detector.
///
/// Supplied once by the embedding environment (parameter store or similar)
/// before operation begins and immutable afterwards. Band 3 is intended to
/// be the tightest interval around each singular position and band 1 the
/// widest, but the nesting is a calibration responsibility and is not
/// verified at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointLimitProfile {
    /// Number of robot joints; every band vector must have this length.
    pub joint_count: usize,
    /// Outermost (mildest) band.
    pub band1: LimitBand,
    /// Middle band.
    pub band2: LimitBand,
    /// Tightest (most severe) band.
    pub band3: LimitBand,
}

impl JointLimitProfile {
    /// Bands in severity order 1, 2, 3, paired with their 1-based index.
    pub fn bands(&self) -> [(u8, &LimitBand); 3] {
        [(1, &self.band1), (2, &self.band2), (3, &self.band3)]
    }
}

/// Which bound of a band a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundSide {
    Lower,
    Upper,
}

impl std::fmt::Display for BoundSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundSide::Lower => write!(f, "lower"),
            BoundSide::Upper => write!(f, "upper"),
        }
    }
}

/// Global error type spanning configuration rejection and per-cycle
/// precondition faults.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SinguardError {
    #[error("joint count must be positive, got {0}")]
    InvalidJointCount(usize),

    #[error("band {band} {side} limit has wrong length: {actual}, should be: {expected}")]
    LimitLengthMismatch {
        band: u8,
        side: BoundSide,
        expected: usize,
        actual: usize,
    },

    #[error("joint position sample has wrong length: {actual}, expected: {expected}")]
    SampleLengthMismatch { expected: usize, actual: usize },
}
