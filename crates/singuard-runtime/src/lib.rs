//! `singuard-runtime` – cyclic execution and observability
//!
//! Wires a [`SingularityDetector`][singuard_detector::SingularityDetector]
//! to its environment: a single-slot joint-position input port, a
//! single-slot scaling-signal output port, and the periodic cycle that
//! drives one classification per tick.
//!
//! # Modules
//!
//! - [`cycle`] – [`CycleDriver`][cycle::CycleDriver]: owns the detector and
//!   its two `tokio::sync::watch` ports; `run_once` executes one control
//!   cycle, `run` ticks it at a fixed period.
//! - [`telemetry`] – [`init_tracing`][telemetry::init_tracing]: process-wide
//!   `tracing` subscriber setup (env-filtered, compact or JSON output).

pub mod cycle;
pub mod telemetry;

pub use cycle::CycleDriver;
