//! Watch-list refreshes and the background task that schedules them.
//!
//! `refresh_all` regenerates one quote per watch-list symbol, in order. A
//! `Snapshot` bundles such a batch with its capture time; consumers replace the
//! whole snapshot at once and never see a partial batch.
//!
//! `RefreshTask` runs refreshes on a dedicated thread that owns its own
//! generator:
//!
//! - one refresh right after start,
//! - one per tick of the tick source (`crossbeam_channel::tick` in production,
//!   any `Receiver<Instant>` in tests),
//! - one per accepted `RefreshHandle::request`.
//!
//! A shared `BusyFlag` marks a refresh in flight. Manual requests and ticks
//! arriving while it is set are dropped, not queued.
//!
//! Shutdown: `RefreshHandle::cancel` (or dropping the handle) stops the thread
//! and joins it. The thread also exits when the snapshot receiver is dropped or
//! the tick source disconnects.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use crossbeam_channel::{Receiver, Sender, bounded, never, select, tick, unbounded};
use log::{debug, info, warn};
use market_common::{ChatError, Quote, RandomSource, Result, Symbol};
use serde::Serialize;

use crate::model::quote_generator::QuoteGenerator;

/// Generates one quote per symbol, preserving watch-list order.
pub fn refresh_all<R: RandomSource>(
    generator: &mut QuoteGenerator<R>,
    watch_list: &[Symbol],
) -> Vec<Quote> {
    watch_list
        .iter()
        .map(|symbol| generator.generate_quote(symbol.code()))
        .collect()
}

/// Full set of current quotes for the watch list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// One quote per watch-list symbol, in watch-list order.
    pub quotes: Vec<Quote>,
    /// When the batch was generated.
    pub updated_at: DateTime<Utc>,
}

impl Snapshot {
    /// Refreshes the whole watch list and stamps the result.
    pub fn capture<R: RandomSource>(
        generator: &mut QuoteGenerator<R>,
        watch_list: &[Symbol],
    ) -> Self {
        Snapshot {
            quotes: refresh_all(generator, watch_list),
            updated_at: Utc::now(),
        }
    }

    /// Pretty-printed JSON form.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Advisory "refresh in flight" flag shared by the task and its handle.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    /// Marks a refresh as started. Returns `false` if one is already running.
    pub fn try_begin(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Marks the running refresh as finished.
    pub fn finish(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Whether a refresh is running.
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Background refresh scheduler.
pub struct RefreshTask;

impl RefreshTask {
    /// Starts the task with a periodic timer, or without one if `interval` is `None`.
    ///
    /// Returns the control handle and the channel on which snapshots arrive.
    pub fn start<R>(
        generator: QuoteGenerator<R>,
        watch_list: Vec<Symbol>,
        interval: Option<Duration>,
    ) -> (RefreshHandle, Receiver<Snapshot>)
    where
        R: RandomSource + Send + 'static,
    {
        let ticks = match interval {
            Some(every) => tick(every),
            None => never(),
        };
        Self::start_with_ticks(generator, watch_list, ticks)
    }

    /// Starts the task driven by an arbitrary tick source.
    pub fn start_with_ticks<R>(
        generator: QuoteGenerator<R>,
        watch_list: Vec<Symbol>,
        ticks: Receiver<Instant>,
    ) -> (RefreshHandle, Receiver<Snapshot>)
    where
        R: RandomSource + Send + 'static,
    {
        let (snapshot_tx, snapshot_rx) = unbounded::<Snapshot>();
        let (request_tx, request_rx) = unbounded::<()>();
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let busy = BusyFlag::default();

        // The startup refresh counts as in flight until its snapshot is out.
        busy.try_begin();
        let worker_busy = busy.clone();
        let worker = thread::spawn(move || {
            run_refresh_loop(
                generator,
                watch_list,
                ticks,
                request_rx,
                stop_rx,
                snapshot_tx,
                worker_busy,
            );
        });

        let handle = RefreshHandle {
            request_tx,
            stop_tx,
            busy,
            worker: Some(worker),
        };
        (handle, snapshot_rx)
    }
}

fn run_refresh_loop<R: RandomSource>(
    mut generator: QuoteGenerator<R>,
    watch_list: Vec<Symbol>,
    ticks: Receiver<Instant>,
    request_rx: Receiver<()>,
    stop_rx: Receiver<()>,
    snapshot_tx: Sender<Snapshot>,
    busy: BusyFlag,
) {
    info!("Refresh task started for {} symbols", watch_list.len());

    if publish(&mut generator, &watch_list, &snapshot_tx, &busy) {
        loop {
            select! {
                recv(stop_rx) -> _ => break,
                recv(request_rx) -> msg => {
                    if msg.is_err() || !publish(&mut generator, &watch_list, &snapshot_tx, &busy) {
                        break;
                    }
                },
                recv(ticks) -> msg => {
                    if msg.is_err() {
                        warn!("Tick source disconnected");
                        break;
                    }
                    if !busy.try_begin() {
                        debug!("Timer refresh skipped: refresh already in flight");
                        continue;
                    }
                    if !publish(&mut generator, &watch_list, &snapshot_tx, &busy) {
                        break;
                    }
                },
            }
        }
    }
    info!("Refresh task stopped");
}

/// Captures and sends one snapshot. Returns `false` once nobody is listening.
///
/// The busy flag must already be set; it is cleared before the snapshot is sent.
fn publish<R: RandomSource>(
    generator: &mut QuoteGenerator<R>,
    watch_list: &[Symbol],
    snapshot_tx: &Sender<Snapshot>,
    busy: &BusyFlag,
) -> bool {
    let snapshot = Snapshot::capture(generator, watch_list);
    busy.finish();
    debug!("Snapshot captured at {}", snapshot.updated_at);
    snapshot_tx.send(snapshot).is_ok()
}

/// Control handle of a running `RefreshTask`.
pub struct RefreshHandle {
    request_tx: Sender<()>,
    stop_tx: Sender<()>,
    busy: BusyFlag,
    worker: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Asks for an immediate refresh.
    ///
    /// Returns `false` without doing anything while a refresh is in flight, or
    /// when the task is no longer running.
    pub fn request(&self) -> bool {
        if !self.busy.try_begin() {
            debug!("Manual refresh ignored: refresh already in flight");
            return false;
        }
        if self.request_tx.send(()).is_err() {
            self.busy.finish();
            return false;
        }
        true
    }

    /// Whether a refresh is running.
    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Stops the timer and waits for the task to exit.
    ///
    /// A task that already stopped on its own (snapshot receiver dropped, tick
    /// source gone) cancels cleanly.
    pub fn cancel(mut self) -> Result<()> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<()> {
        let Some(worker) = self.worker.take() else {
            return Ok(());
        };
        if self.stop_tx.send(()).is_err() {
            debug!("Refresh task already stopped");
        }
        worker
            .join()
            .map_err(|_| ChatError::TaskPanicked("refresh task".to_string()))
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            warn!("Refresh task shutdown: {}", e);
        }
    }
}
