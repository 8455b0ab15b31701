//! [`SingularityDetector`] – the two-phase configure/step lifecycle.
//!
//! Construction is gated: [`SingularityDetector::configure`] validates the
//! threshold profile and only hands out a detector when validation passes,
//! so a running detector always satisfies the classifier's preconditions.
//!
//! Each control cycle the embedding runtime calls
//! [`SingularityDetector::step`] with the fresh joint-position sample, or
//! `None` when no new data arrived this cycle. The detector holds the last
//! computed [`ScalingSignal`] and keeps returning it across sample-less
//! cycles; it never resets to a default between samples.
//!
//! # Example
//!
//! ```
//! use singuard_detector::SingularityDetector;
//! use singuard_types::{JointLimitProfile, LimitBand};
//!
//! let profile = JointLimitProfile {
//!     joint_count: 2,
//!     band1: LimitBand::new(vec![-0.5, -0.5], vec![0.5, 0.5]),
//!     band2: LimitBand::new(vec![-0.3, -0.3], vec![0.3, 0.3]),
//!     band3: LimitBand::new(vec![-0.1, -0.1], vec![0.1, 0.1]),
//! };
//! let mut detector = SingularityDetector::configure(profile).unwrap();
//!
//! // Joint 0 inside band 3 → level 3 → signal 4.
//! assert_eq!(detector.step(Some(&[0.05, 0.0])).unwrap().get(), 4);
//! // No fresh sample: the signal is held.
//! assert_eq!(detector.step(None).unwrap().get(), 4);
//! ```

use singuard_types::{JointLimitProfile, ScalingSignal, SinguardError};
use tracing::error;

use crate::classifier;
use crate::validator;

/// Classifies joint-position samples against a validated threshold profile
/// and holds the last emitted scaling signal.
#[derive(Debug, Clone)]
pub struct SingularityDetector {
    profile: JointLimitProfile,
    scaling: ScalingSignal,
}

impl SingularityDetector {
    /// Validate `profile` and enter the ready state.
    ///
    /// The held scaling signal starts at 1 (level 0), the value emitted
    /// until the first classification.
    ///
    /// # Errors
    ///
    /// Any [`validator::check_limit_lengths`] failure; the profile is
    /// rejected as a whole and no detector is produced.
    pub fn configure(profile: JointLimitProfile) -> Result<Self, SinguardError> {
        validator::check_limit_lengths(&profile)?;
        Ok(Self {
            profile,
            scaling: ScalingSignal::default(),
        })
    }

    /// Advance one control cycle.
    ///
    /// With `Some(positions)` the sample is classified and the held signal
    /// updated to `level + 1`; with `None` the held signal is left as-is.
    /// Either way the current signal is returned, so the caller can publish
    /// it unconditionally every cycle.
    ///
    /// # Errors
    ///
    /// [`SinguardError::SampleLengthMismatch`] when `positions` does not
    /// have `joint_count` entries. The sample is not classified and the
    /// held signal is untouched; a truncated or padded read near a
    /// singularity must surface as a fault, not a guess.
    pub fn step(&mut self, sample: Option<&[f64]>) -> Result<ScalingSignal, SinguardError> {
        if let Some(positions) = sample {
            if positions.len() != self.profile.joint_count {
                error!(
                    expected = self.profile.joint_count,
                    actual = positions.len(),
                    "joint position sample has wrong length"
                );
                return Err(SinguardError::SampleLengthMismatch {
                    expected: self.profile.joint_count,
                    actual: positions.len(),
                });
            }
            let level = classifier::classify(positions, &self.profile);
            self.scaling = ScalingSignal::from_level(level);
        }
        Ok(self.scaling)
    }

    /// The signal that would be re-emitted this cycle.
    pub fn scaling(&self) -> ScalingSignal {
        self.scaling
    }

    /// The validated threshold profile.
    pub fn profile(&self) -> &JointLimitProfile {
        &self.profile
    }
}
