//! Limit-set validation – the configure-time gate.
//!
//! [`check_limit_lengths`] verifies that a [`JointLimitProfile`] is
//! internally consistent: a positive joint count and six threshold sequences
//! (lower and upper bounds for bands 1–3) whose lengths all equal it. It
//! runs exactly once, from [`SingularityDetector::configure`][crate::detector::SingularityDetector::configure],
//! before any classification; a failure must keep the system out of the
//! running state.

use singuard_types::{BoundSide, JointLimitProfile, SinguardError};
use tracing::error;

/// Check that every threshold sequence in `profile` has exactly
/// `joint_count` entries.
///
/// The lower-bound sequences are checked for bands 1, 2, 3 in order, then
/// the upper-bound sequences for bands 1, 2, 3; the first mismatch wins.
/// Every failure path emits a diagnostic naming the offending sequence and
/// the expected/observed lengths.
///
/// # Errors
///
/// - [`SinguardError::InvalidJointCount`] – `joint_count` is zero.
/// - [`SinguardError::LimitLengthMismatch`] – a sequence length differs
///   from `joint_count`.
///
/// # Example
///
/// ```
/// use singuard_detector::validator::check_limit_lengths;
/// use singuard_types::{JointLimitProfile, LimitBand};
///
/// let profile = JointLimitProfile {
///     joint_count: 2,
///     band1: LimitBand::new(vec![-0.5, -0.5], vec![0.5, 0.5]),
///     band2: LimitBand::new(vec![-0.3, -0.3], vec![0.3, 0.3]),
///     band3: LimitBand::new(vec![-0.1, -0.1], vec![0.1, 0.1]),
/// };
/// assert!(check_limit_lengths(&profile).is_ok());
/// ```
pub fn check_limit_lengths(profile: &JointLimitProfile) -> Result<(), SinguardError> {
    if profile.joint_count == 0 {
        error!("joint count must be positive");
        return Err(SinguardError::InvalidJointCount(profile.joint_count));
    }

    for (band, limits) in profile.bands() {
        if limits.lower.len() != profile.joint_count {
            return Err(length_mismatch(
                band,
                BoundSide::Lower,
                profile.joint_count,
                limits.lower.len(),
            ));
        }
    }
    for (band, limits) in profile.bands() {
        if limits.upper.len() != profile.joint_count {
            return Err(length_mismatch(
                band,
                BoundSide::Upper,
                profile.joint_count,
                limits.upper.len(),
            ));
        }
    }
    Ok(())
}

/// Build the mismatch error and emit its diagnostic.
fn length_mismatch(band: u8, side: BoundSide, expected: usize, actual: usize) -> SinguardError {
    error!(band, %side, expected, actual, "singularity limit has wrong size");
    SinguardError::LimitLengthMismatch {
        band,
        side,
        expected,
        actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use singuard_types::LimitBand;

    fn profile_with(
        joint_count: usize,
        lengths: [usize; 6], // [l1, u1, l2, u2, l3, u3]
    ) -> JointLimitProfile {
        JointLimitProfile {
            joint_count,
            band1: LimitBand::new(vec![0.0; lengths[0]], vec![0.0; lengths[1]]),
            band2: LimitBand::new(vec![0.0; lengths[2]], vec![0.0; lengths[3]]),
            band3: LimitBand::new(vec![0.0; lengths[4]], vec![0.0; lengths[5]]),
        }
    }

    #[test]
    fn consistent_profile_passes() {
        let profile = profile_with(3, [3; 6]);
        assert!(check_limit_lengths(&profile).is_ok());
    }

    #[test]
    fn zero_joint_count_rejected_regardless_of_sequences() {
        let profile = profile_with(0, [0; 6]);
        assert_eq!(
            check_limit_lengths(&profile),
            Err(SinguardError::InvalidJointCount(0))
        );
        // Even with non-empty sequences the count alone fails setup.
        let profile = profile_with(0, [3; 6]);
        assert!(matches!(
            check_limit_lengths(&profile),
            Err(SinguardError::InvalidJointCount(0))
        ));
    }

    #[test]
    fn band2_lower_mismatch_reported() {
        // joint_count = 3, band-2 lower has only 2 entries.
        let profile = profile_with(3, [3, 3, 2, 3, 3, 3]);
        assert_eq!(
            check_limit_lengths(&profile),
            Err(SinguardError::LimitLengthMismatch {
                band: 2,
                side: BoundSide::Lower,
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn each_sequence_is_checked() {
        for (i, (band, side)) in [
            (1, BoundSide::Lower),
            (2, BoundSide::Lower),
            (3, BoundSide::Lower),
            (1, BoundSide::Upper),
            (2, BoundSide::Upper),
            (3, BoundSide::Upper),
        ]
        .into_iter()
        .enumerate()
        {
            // Lengths indexed as [l1, u1, l2, u2, l3, u3]; map the check
            // order (lowers 1,2,3 then uppers 1,2,3) onto that layout.
            let slot = match (band, side) {
                (1, BoundSide::Lower) => 0,
                (2, BoundSide::Lower) => 2,
                (3, BoundSide::Lower) => 4,
                (1, BoundSide::Upper) => 1,
                (2, BoundSide::Upper) => 3,
                _ => 5,
            };
            let mut lengths = [4; 6];
            lengths[slot] = 7;
            let profile = profile_with(4, lengths);
            assert_eq!(
                check_limit_lengths(&profile),
                Err(SinguardError::LimitLengthMismatch {
                    band,
                    side,
                    expected: 4,
                    actual: 7,
                }),
                "check {i} did not flag the expected sequence"
            );
        }
    }

    #[test]
    fn lower_mismatches_win_over_upper_mismatches() {
        // Both band-3 lower and band-1 upper are wrong; lowers are checked
        // first, so band 3 lower is reported.
        let profile = profile_with(2, [2, 5, 2, 2, 1, 2]);
        assert_eq!(
            check_limit_lengths(&profile),
            Err(SinguardError::LimitLengthMismatch {
                band: 3,
                side: BoundSide::Lower,
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn empty_sequences_with_positive_count_rejected() {
        let profile = profile_with(1, [0; 6]);
        assert!(check_limit_lengths(&profile).is_err());
    }
}
