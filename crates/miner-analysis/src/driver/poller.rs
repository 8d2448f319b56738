//! Dedicated polling thread driven by a crossbeam tick channel.
//!
//! Every tick runs one scan to completion and hands the snapshot to a sink.
//! The first scan runs immediately. Scans never overlap; a tick that arrives
//! while a scan is still running is coalesced by the tick channel.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick, Receiver, Sender};
use miner_core::errors::HostError;
use miner_core::HostRegistries;

use crate::snapshot::{FullSnapshot, SnapshotReporter};

/// Receives every snapshot the poller produces.
pub trait SnapshotSink: Send {
    fn on_snapshot(&mut self, snapshot: FullSnapshot);
}

impl<F> SnapshotSink for F
where
    F: FnMut(FullSnapshot) + Send,
{
    fn on_snapshot(&mut self, snapshot: FullSnapshot) {
        self(snapshot)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("host unavailable: {0}")]
    Host(#[from] HostError),

    #[error("failed to spawn poller thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("poller thread panicked")]
    Panicked,
}

/// Counters returned when the poller shuts down.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PollStats {
    /// Scans that produced a snapshot.
    pub scans: u64,
    /// Scans whose source yielded nothing.
    pub skipped: u64,
}

/// A running poller. Dropping it stops the thread without waiting.
pub struct Poller {
    control: Sender<()>,
    handle: Option<JoinHandle<PollStats>>,
}

impl Poller {
    /// Poll an arbitrary scan function. `scan` returning `None` counts as a
    /// skipped cycle; the next tick tries again.
    pub fn spawn<F, S>(interval: Duration, scan: F, sink: S) -> Result<Self, DriverError>
    where
        F: FnMut() -> Option<FullSnapshot> + Send + 'static,
        S: SnapshotSink + 'static,
    {
        let (control, stop) = bounded(1);
        let handle = thread::Builder::new()
            .name("miner-poller".to_string())
            .spawn(move || poll_loop(interval, stop, scan, sink))
            .map_err(DriverError::Spawn)?;
        Ok(Self {
            control,
            handle: Some(handle),
        })
    }

    /// Poll a host directly. The host is probed once up front; a missing host
    /// means no thread is started at all.
    pub fn attach<H, S>(
        host: H,
        reporter: SnapshotReporter,
        interval: Duration,
        sink: S,
    ) -> Result<Self, DriverError>
    where
        H: HostRegistries + Send + 'static,
        S: SnapshotSink + 'static,
    {
        host.probe()?;
        Self::spawn(interval, move || Some(reporter.take_snapshot(&host)), sink)
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop polling and wait for the in-flight scan, if any, to finish.
    pub fn stop(mut self) -> Result<PollStats, DriverError> {
        let _ = self.control.try_send(());
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| DriverError::Panicked),
            None => Ok(PollStats::default()),
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        let _ = self.control.try_send(());
    }
}

fn poll_loop<F, S>(interval: Duration, stop: Receiver<()>, mut scan: F, mut sink: S) -> PollStats
where
    F: FnMut() -> Option<FullSnapshot>,
    S: SnapshotSink,
{
    let mut stats = PollStats::default();
    let ticker = tick(interval);
    run_once(&mut scan, &mut sink, &mut stats);
    loop {
        select! {
            recv(stop) -> _ => break,
            recv(ticker) -> _ => run_once(&mut scan, &mut sink, &mut stats),
        }
    }
    tracing::debug!(scans = stats.scans, skipped = stats.skipped, "poller stopped");
    stats
}

fn run_once<F, S>(scan: &mut F, sink: &mut S, stats: &mut PollStats)
where
    F: FnMut() -> Option<FullSnapshot>,
    S: SnapshotSink,
{
    match scan() {
        Some(snapshot) => {
            stats.scans += 1;
            sink.on_snapshot(snapshot);
        }
        None => stats.skipped += 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn first_scan_runs_immediately() {
        let (tx, rx) = unbounded();
        let poller = Poller::spawn(
            Duration::from_secs(3600),
            || Some(FullSnapshot::default()),
            move |s: FullSnapshot| {
                let _ = tx.send(s);
            },
        )
        .unwrap();
        assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
        let stats = poller.stop().unwrap();
        assert_eq!(stats.scans, 1);
    }

    #[test]
    fn ticks_repeat_until_stopped() {
        let (tx, rx) = unbounded();
        let poller = Poller::spawn(
            Duration::from_millis(5),
            || Some(FullSnapshot::default()),
            move |s: FullSnapshot| {
                let _ = tx.send(s);
            },
        )
        .unwrap();
        for _ in 0..3 {
            rx.recv_timeout(Duration::from_secs(5)).unwrap();
        }
        let stats = poller.stop().unwrap();
        assert!(stats.scans >= 3);
    }

    #[test]
    fn empty_scans_are_counted_as_skipped() {
        let (tx, rx) = unbounded();
        let poller = Poller::spawn(
            Duration::from_millis(5),
            move || {
                let _ = tx.send(());
                None
            },
            |_s: FullSnapshot| panic!("no snapshot expected"),
        )
        .unwrap();
        rx.recv_timeout(Duration::from_secs(5)).unwrap();
        rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let stats = poller.stop().unwrap();
        assert_eq!(stats.scans, 0);
        assert!(stats.skipped >= 2);
    }
}
