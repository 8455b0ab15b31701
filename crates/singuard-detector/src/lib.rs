//! `singuard-detector` – Singularity proximity detection
//!
//! The domain core of singuard. It holds no scheduling or I/O; the embedding
//! runtime drives it once per control cycle.
//!
//! # Modules
//!
//! - [`validator`] – [`check_limit_lengths`][validator::check_limit_lengths]:
//!   verifies once, at configure time, that every threshold sequence in a
//!   [`JointLimitProfile`][singuard_types::JointLimitProfile] matches the
//!   declared joint count. A failure keeps the detector out of the running
//!   state permanently.
//! - [`classifier`] – [`classify`][classifier::classify]: folds per-joint
//!   nested band membership into the single worst-case
//!   [`SeverityLevel`][singuard_types::SeverityLevel] for one sample.
//! - [`detector`] – [`SingularityDetector`][detector::SingularityDetector]:
//!   the two-phase configure/step lifecycle that owns the validated profile
//!   and holds the last emitted scaling signal across cycles.

pub mod classifier;
pub mod detector;
pub mod validator;

pub use classifier::classify;
pub use detector::SingularityDetector;
pub use validator::check_limit_lengths;
