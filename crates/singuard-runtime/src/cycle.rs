//! [`CycleDriver`] – one classification per control cycle.
//!
//! The driver owns the configured detector and both of its ports, modelled
//! as [`tokio::sync::watch`] channels:
//!
//! | Port | Channel | Semantics |
//! |---|---|---|
//! | Joint positions (in) | `watch::Receiver<Vec<f64>>` | Single slot, last value wins; `has_changed` marks a fresh sample |
//! | Scaling signal (out) | `watch::Sender<u8>` | Written every cycle, fresh sample or not |
//!
//! There is no queuing and no backpressure: a producer that writes twice
//! between ticks simply overwrites the slot, and a cycle without a fresh
//! write re-emits the held signal. This mirrors the last-value port
//! semantics of the real-time frameworks this component embeds into.
//!
//! # Example
//!
//! ```
//! use singuard_detector::SingularityDetector;
//! use singuard_runtime::CycleDriver;
//! use singuard_types::{JointLimitProfile, LimitBand};
//!
//! let profile = JointLimitProfile {
//!     joint_count: 2,
//!     band1: LimitBand::new(vec![-0.5, -0.5], vec![0.5, 0.5]),
//!     band2: LimitBand::new(vec![-0.3, -0.3], vec![0.3, 0.3]),
//!     band3: LimitBand::new(vec![-0.1, -0.1], vec![0.1, 0.1]),
//! };
//! let detector = SingularityDetector::configure(profile).unwrap();
//! let (mut driver, sample_tx, scaling_rx) = CycleDriver::with_ports(detector);
//!
//! sample_tx.send(vec![0.4, 0.25]).unwrap();
//! driver.run_once().unwrap();
//! assert_eq!(*scaling_rx.borrow(), 3); // level 2 → signal 3
//! ```

use std::time::Duration;

use singuard_detector::SingularityDetector;
use singuard_types::{ScalingSignal, SinguardError};
use tokio::sync::watch;
use tracing::{debug, error};

/// Drives a [`SingularityDetector`] once per cycle between its two
/// single-slot ports.
pub struct CycleDriver {
    detector: SingularityDetector,
    sample_rx: watch::Receiver<Vec<f64>>,
    scaling_tx: watch::Sender<u8>,
}

impl CycleDriver {
    /// Build a driver around existing ports.
    ///
    /// The receiver's current value is treated as already seen; only writes
    /// made after construction count as fresh samples.
    pub fn new(
        detector: SingularityDetector,
        mut sample_rx: watch::Receiver<Vec<f64>>,
        scaling_tx: watch::Sender<u8>,
    ) -> Self {
        sample_rx.mark_unchanged();
        Self {
            detector,
            sample_rx,
            scaling_tx,
        }
    }

    /// Build a driver together with its ports.
    ///
    /// Returns the driver, the producer end of the joint-position port
    /// (initial slot value: all joints at 0.0, marked stale), and the
    /// consumer end of the scaling-signal port (initial value: the
    /// detector's held signal, 1 before any classification).
    pub fn with_ports(
        detector: SingularityDetector,
    ) -> (Self, watch::Sender<Vec<f64>>, watch::Receiver<u8>) {
        let joint_count = detector.profile().joint_count;
        let (sample_tx, sample_rx) = watch::channel(vec![0.0; joint_count]);
        let (scaling_tx, scaling_rx) = watch::channel(detector.scaling().get());
        (
            Self::new(detector, sample_rx, scaling_tx),
            sample_tx,
            scaling_rx,
        )
    }

    /// Execute one control cycle.
    ///
    /// Classifies the slot value if it is fresh, then publishes the held
    /// signal to the output port. A dropped producer is treated as "no new
    /// data this cycle", not an error, so the last signal keeps flowing.
    ///
    /// # Errors
    ///
    /// [`SinguardError::SampleLengthMismatch`] from the detector's sample
    /// width check. The fault is logged, the output port is *not* rewritten
    /// for this cycle, and the error is propagated so supervision can stop
    /// the driver.
    pub fn run_once(&mut self) -> Result<ScalingSignal, SinguardError> {
        let fresh = self.sample_rx.has_changed().unwrap_or(false);
        let result = if fresh {
            let sample = self.sample_rx.borrow_and_update();
            self.detector.step(Some(sample.as_slice()))
        } else {
            self.detector.step(None)
        };
        match result {
            Ok(signal) => {
                debug!(scaling = signal.get(), fresh, "cycle complete");
                self.scaling_tx.send_replace(signal.get());
                Ok(signal)
            }
            Err(e) => {
                error!(error = %e, "control cycle aborted");
                Err(e)
            }
        }
    }

    /// Tick [`run_once`][Self::run_once] at a fixed `period` until a cycle
    /// faults.
    ///
    /// No retry is attempted: the first fault stops the loop and is
    /// returned, leaving restart policy to external supervision.
    pub async fn run(mut self, period: Duration) -> Result<(), SinguardError> {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            self.run_once()?;
        }
    }

    /// Read access to the owned detector.
    pub fn detector(&self) -> &SingularityDetector {
        &self.detector
    }
}
