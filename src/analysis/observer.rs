//! Hooks invoked at the phase boundaries of PDG construction.
//!
//! Building a PDG runs four phases in sequence. An observer is told when each phase
//! starts and how long it took, which is enough for profiling or progress reporting
//! without the library ever writing to the console itself.

use std::time::{Duration, Instant};

use strum::{Display, EnumIter};

use crate::Result;

/// A phase of PDG construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Computing the postdominator tree
    Postdominators,
    /// Deriving control dependents of every node
    ControlDependence,
    /// Deriving data dependents of every node
    DataDependence,
    /// Inserting the dependence edges into the graph
    Assembly,
}

/// Receives phase boundary notifications during PDG construction.
///
/// Both methods default to doing nothing. Observers must be `Sync` so the same
/// instance can watch several pipelines built in parallel.
pub trait PhaseObserver: Sync {
    /// Called right before `phase` starts.
    fn phase_started(&self, phase: Phase) {
        let _ = phase;
    }

    /// Called right after `phase` completed successfully.
    fn phase_finished(&self, phase: Phase, elapsed: Duration) {
        let _ = (phase, elapsed);
    }
}

/// Observer that ignores every notification. Used when none is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PhaseObserver for NoopObserver {}

/// Observer that reports phase timings through the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl PhaseObserver for LogObserver {
    fn phase_started(&self, phase: Phase) {
        log::debug!("{phase}: started");
    }

    fn phase_finished(&self, phase: Phase, elapsed: Duration) {
        log::debug!("{phase}: finished in {elapsed:?}");
    }
}

/// Runs `work` as `phase`, notifying `observer` around it.
///
/// `phase_finished` is only sent when `work` succeeds.
pub(crate) fn observe<T>(
    observer: &dyn PhaseObserver,
    phase: Phase,
    work: impl FnOnce() -> Result<T>,
) -> Result<T> {
    observer.phase_started(phase);
    let started = Instant::now();
    let output = work()?;
    observer.phase_finished(phase, started.elapsed());
    Ok(output)
}
