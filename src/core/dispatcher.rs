//! Dispatch engine: filters records by their logger's level, renders them
//! per sink and delivers either on the caller's thread or through one
//! drain worker

use super::{
    config::{SharedConfig, WriteMode},
    error::{LoggerError, Result},
    overflow_policy::OverflowPolicy,
    record::Record,
    sink::Sink,
};
use crossbeam_channel::{bounded, SendTimeoutError, Sender, TrySendError};
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown timeout used when the last handle is dropped without
/// an explicit close
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

const DRAIN_WORKER: &str = "hierlog-drain";

/// One engine per logger hierarchy.
///
/// In blocking mode there is no worker and `submit` writes before it
/// returns. In non-blocking mode a single worker owns all sink I/O and
/// drains a bounded queue in FIFO order.
pub struct Dispatcher {
    config: Arc<SharedConfig>,
    mode: WriteMode,
    sender: RwLock<Option<Sender<Record>>>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
    stopped: AtomicBool,
}

impl Dispatcher {
    pub fn new(config: SharedConfig) -> Self {
        let config = Arc::new(config);

        if config.mode == WriteMode::Blocking {
            return Self::blocking(config);
        }

        // capacity 0 would make the channel a rendezvous
        let (sender, receiver) = bounded::<Record>(config.queue_capacity.max(1));
        let worker_config = Arc::clone(&config);
        let spawned = thread::Builder::new()
            .name(DRAIN_WORKER.to_string())
            .spawn(move || {
                let mut dirty: Vec<Arc<Sink>> = Vec::new();
                // ends once every sender is gone and the queue is empty
                for record in receiver.iter() {
                    deliver(&worker_config, &record);
                    for sink in record.local_sinks.iter() {
                        if !dirty.iter().any(|seen| Arc::ptr_eq(seen, sink)) {
                            dirty.push(Arc::clone(sink));
                        }
                    }
                    // flush once the backlog is gone, not per line
                    if receiver.is_empty() {
                        flush_sinks(worker_config.sinks.iter().chain(dirty.iter()));
                        dirty.clear();
                    }
                }
            });

        match spawned {
            Ok(handle) => Self {
                config,
                mode: WriteMode::NonBlocking,
                sender: RwLock::new(Some(sender)),
                worker: Mutex::new(Some(handle)),
                stopped: AtomicBool::new(false),
            },
            Err(e) => {
                eprintln!(
                    "[LOGGER ERROR] Failed to spawn drain worker: {}. \
                     Falling back to blocking delivery.",
                    e
                );
                Self::blocking(config)
            }
        }
    }

    fn blocking(config: Arc<SharedConfig>) -> Self {
        Self {
            config,
            mode: WriteMode::Blocking,
            sender: RwLock::new(None),
            worker: Mutex::new(None),
            stopped: AtomicBool::new(false),
        }
    }

    /// Delivery mode actually in effect
    #[inline]
    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Hand a record to the engine.
    ///
    /// Records below the producing logger's level, or with empty text, are
    /// dropped without effect. A full queue under [`OverflowPolicy::Drop`]
    /// is not an error either: the record is discarded and `Ok(())` is
    /// returned. The only error is [`LoggerError::LoggerStopped`], after
    /// shutdown.
    pub fn submit(&self, record: Record) -> Result<()> {
        if !record.passes_filter() {
            return Ok(());
        }
        if self.is_stopped() {
            return Err(LoggerError::LoggerStopped);
        }

        if self.mode == WriteMode::Blocking {
            deliver(&self.config, &record);
            flush_sinks(self.config.sinks.iter().chain(record.local_sinks.iter()));
            return Ok(());
        }

        let guard = self.sender.read();
        let Some(sender) = guard.as_ref() else {
            return Err(LoggerError::LoggerStopped);
        };

        match self.config.overflow_policy {
            OverflowPolicy::Drop => match sender.try_send(record) {
                Ok(()) | Err(TrySendError::Full(_)) => Ok(()),
                Err(TrySendError::Disconnected(_)) => Err(LoggerError::LoggerStopped),
            },
            OverflowPolicy::Block => sender
                .send(record)
                .map_err(|_| LoggerError::LoggerStopped),
            OverflowPolicy::BlockWithTimeout(timeout) => {
                match sender.send_timeout(record, timeout) {
                    Ok(()) | Err(SendTimeoutError::Timeout(_)) => Ok(()),
                    Err(SendTimeoutError::Disconnected(_)) => Err(LoggerError::LoggerStopped),
                }
            }
        }
    }

    /// Close the queue and wait until the worker has delivered everything
    /// already accepted. Later calls are no-ops.
    pub fn shutdown(&self) {
        self.close_queue();

        let worker = self.worker.lock().take();
        if let Some(handle) = worker {
            if handle.thread().id() == thread::current().id() {
                return;
            }
            if let Err(e) = handle.join() {
                eprintln!(
                    "[LOGGER ERROR] Drain worker panicked during shutdown: {}",
                    panic_message(&*e)
                );
            }
        }

        self.flush_shared();
    }

    /// Like [`shutdown`](Self::shutdown), but gives up waiting after `timeout`.
    ///
    /// Returns `true` if the worker finished draining in time.
    pub fn shutdown_timeout(&self, timeout: Duration) -> bool {
        self.close_queue();

        let worker = self.worker.lock().take();
        if let Some(handle) = worker {
            let start = Instant::now();

            loop {
                if handle.is_finished() {
                    if let Err(e) = handle.join() {
                        eprintln!(
                            "[LOGGER ERROR] Drain worker panicked during shutdown: {}",
                            panic_message(&*e)
                        );
                        return false;
                    }
                    break;
                }

                if start.elapsed() >= timeout {
                    eprintln!(
                        "[LOGGER WARNING] Drain worker did not finish within {:?}. \
                         Some logs may be lost.",
                        timeout
                    );
                    // a later `shutdown` must still be able to wait for it
                    *self.worker.lock() = Some(handle);
                    return false;
                }

                thread::sleep(Duration::from_millis(10));
            }
        }

        self.flush_shared();
        true
    }

    fn close_queue(&self) {
        self.stopped.store(true, Ordering::Release);
        // waits for producers currently inside `submit`
        drop(self.sender.write().take());
    }

    fn flush_shared(&self) {
        flush_sinks(self.config.sinks.iter());
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.shutdown_timeout(DEFAULT_SHUTDOWN_TIMEOUT);
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("mode", &self.mode)
            .field("stopped", &self.is_stopped())
            .field("shared_sinks", &self.config.sinks.len())
            .finish()
    }
}

/// Render and write one record to every applicable sink: shared sinks
/// first, then the producing logger's own sinks, each in configuration
/// order. A failing or panicking sink is reported and skipped.
pub(crate) fn deliver(config: &SharedConfig, record: &Record) {
    let sinks = config.sinks.iter().chain(record.local_sinks.iter());

    for (idx, sink) in sinks.enumerate() {
        let result = catch_unwind(AssertUnwindSafe(|| {
            deliver_to(sink, record, &config.date_format)
        }));

        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Sink #{} skipped: {}", idx, e);
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] Sink #{} panicked: {}. \
                     Other sinks continue to function.",
                    idx,
                    panic_message(&*panic_info)
                );
            }
        }
    }
}

/// Flush every sink, reporting failures the same way delivery does
fn flush_sinks<'a>(sinks: impl Iterator<Item = &'a Arc<Sink>>) {
    for (idx, sink) in sinks.enumerate() {
        match catch_unwind(AssertUnwindSafe(|| sink.flush())) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => eprintln!("[LOGGER ERROR] Sink #{} flush failed: {}", idx, e),
            Err(panic_info) => eprintln!(
                "[LOGGER CRITICAL] Sink #{} panicked while flushing: {}",
                idx,
                panic_message(&*panic_info)
            ),
        }
    }
}

fn deliver_to(sink: &Sink, record: &Record, date_format: &str) -> Result<()> {
    let line = sink.format().render(record, date_format)?;
    sink.write_line(&line)
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
