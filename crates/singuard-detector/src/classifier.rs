//! Worst-joint severity classification.
//!
//! [`classify`] compares every joint position against the three threshold
//! bands of a validated [`JointLimitProfile`] and returns the highest
//! severity reached by any joint. Band membership uses strict open
//! intervals: a position exactly equal to a bound is *outside* the band.
//!
//! The scan is O(joint count) with no allocation, so it fits a fixed
//! real-time cycle budget.

use singuard_types::{JointLimitProfile, LimitBand, SeverityLevel};

/// Classify one joint-position sample against `profile`.
///
/// For each joint the bands are tested tightest-first: band 3, then band 2,
/// then band 1. A band-3 hit returns immediately since no other joint can
/// raise the result further; otherwise the per-joint levels are folded with
/// a running max.
///
/// # Preconditions
///
/// `positions.len()` and every band sequence must equal
/// `profile.joint_count`. The caller guarantees this via
/// [`check_limit_lengths`][crate::validator::check_limit_lengths] and the
/// sample-width check in
/// [`SingularityDetector::step`][crate::detector::SingularityDetector::step];
/// a violation here panics on out-of-bounds indexing rather than silently
/// misclassifying.
///
/// # Example
///
/// ```
/// use singuard_detector::classify;
/// use singuard_types::{JointLimitProfile, LimitBand, SeverityLevel};
///
/// let profile = JointLimitProfile {
///     joint_count: 2,
///     band1: LimitBand::new(vec![-0.5, -0.5], vec![0.5, 0.5]),
///     band2: LimitBand::new(vec![-0.3, -0.3], vec![0.3, 0.3]),
///     band3: LimitBand::new(vec![-0.1, -0.1], vec![0.1, 0.1]),
/// };
/// assert_eq!(classify(&[0.05, 0.0], &profile), SeverityLevel::Band3);
/// assert_eq!(classify(&[0.6, 0.6], &profile), SeverityLevel::Clear);
/// ```
pub fn classify(positions: &[f64], profile: &JointLimitProfile) -> SeverityLevel {
    let mut worst = SeverityLevel::Clear;
    for joint in 0..profile.joint_count {
        let position = positions[joint];
        let level = if inside(position, &profile.band3, joint) {
            // Band 3 is the maximum; no later joint can exceed it.
            return SeverityLevel::Band3;
        } else if inside(position, &profile.band2, joint) {
            SeverityLevel::Band2
        } else if inside(position, &profile.band1, joint) {
            SeverityLevel::Band1
        } else {
            SeverityLevel::Clear
        };
        worst = worst.max(level);
    }
    worst
}

/// Strict open-interval membership test for one joint.
fn inside(position: f64, band: &LimitBand, joint: usize) -> bool {
    band.lower[joint] < position && position < band.upper[joint]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two joints, symmetric nested bands: band1 ±0.5, band2 ±0.3, band3 ±0.1.
    fn nested_profile() -> JointLimitProfile {
        JointLimitProfile {
            joint_count: 2,
            band1: LimitBand::new(vec![-0.5, -0.5], vec![0.5, 0.5]),
            band2: LimitBand::new(vec![-0.3, -0.3], vec![0.3, 0.3]),
            band3: LimitBand::new(vec![-0.1, -0.1], vec![0.1, 0.1]),
        }
    }

    #[test]
    fn position_outside_all_bands_is_clear() {
        let profile = nested_profile();
        assert_eq!(classify(&[0.6, 0.6], &profile), SeverityLevel::Clear);
    }

    #[test]
    fn joint_inside_band3_dominates() {
        let profile = nested_profile();
        assert_eq!(classify(&[0.05, 0.0], &profile), SeverityLevel::Band3);
    }

    #[test]
    fn joint_inside_band1_only() {
        let profile = nested_profile();
        assert_eq!(classify(&[0.4, 0.6], &profile), SeverityLevel::Band1);
    }

    #[test]
    fn worst_joint_wins_across_joints() {
        let profile = nested_profile();
        // Joint 0 in band 1, joint 1 in band 2: band 2 dominates.
        assert_eq!(classify(&[0.4, 0.25], &profile), SeverityLevel::Band2);
    }

    #[test]
    fn severity_is_monotone_as_position_approaches_singularity() {
        let profile = nested_profile();
        let mut last = SeverityLevel::Clear;
        // Walk joint 0 inward while joint 1 stays clear.
        for position in [0.7, 0.45, 0.25, 0.05] {
            let level = classify(&[position, 0.7], &profile);
            assert!(level >= last, "severity regressed at position {position}");
            last = level;
        }
        assert_eq!(last, SeverityLevel::Band3);
    }

    #[test]
    fn exact_bounds_are_outside_the_band() {
        let profile = nested_profile();
        // Exactly on a band-3 bound: band 3 excluded, but still inside
        // bands 2 and 1.
        assert_eq!(classify(&[0.1, 0.7], &profile), SeverityLevel::Band2);
        assert_eq!(classify(&[-0.1, 0.7], &profile), SeverityLevel::Band2);
        // Exactly on the outermost bound: outside every band.
        assert_eq!(classify(&[0.5, 0.7], &profile), SeverityLevel::Clear);
        assert_eq!(classify(&[-0.5, 0.7], &profile), SeverityLevel::Clear);
    }

    #[test]
    fn classification_is_idempotent() {
        let profile = nested_profile();
        let sample = [0.4, 0.25];
        let first = classify(&sample, &profile);
        for _ in 0..10 {
            assert_eq!(classify(&sample, &profile), first);
        }
    }

    #[test]
    fn bands_are_evaluated_independently_per_joint() {
        // Deliberately non-nested bands: band 3 sits in a different region
        // than band 2. The classifier must not assume numeric nesting.
        let profile = JointLimitProfile {
            joint_count: 1,
            band1: LimitBand::new(vec![-1.0], vec![1.0]),
            band2: LimitBand::new(vec![2.0], vec![3.0]),
            band3: LimitBand::new(vec![5.0], vec![6.0]),
        };
        assert_eq!(classify(&[2.5], &profile), SeverityLevel::Band2);
        assert_eq!(classify(&[5.5], &profile), SeverityLevel::Band3);
        assert_eq!(classify(&[0.0], &profile), SeverityLevel::Band1);
        assert_eq!(classify(&[4.0], &profile), SeverityLevel::Clear);
    }

    #[test]
    fn six_joint_profile_flags_any_single_joint() {
        let n = 6;
        let profile = JointLimitProfile {
            joint_count: n,
            band1: LimitBand::new(vec![-0.5; 6], vec![0.5; 6]),
            band2: LimitBand::new(vec![-0.3; 6], vec![0.3; 6]),
            band3: LimitBand::new(vec![-0.1; 6], vec![0.1; 6]),
        };
        for hot in 0..n {
            let mut sample = vec![1.0; n];
            sample[hot] = 0.0;
            assert_eq!(classify(&sample, &profile), SeverityLevel::Band3);
        }
    }
}
