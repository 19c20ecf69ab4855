//! Background countdown that re-evaluates the next prayer on a fixed cadence.
//!
//! A [`PrayerWatch`] owns its ticker thread. Dropping it (or calling
//! [`PrayerWatch::stop`]) signals the thread and joins it, so the timer never
//! outlives the view that started it.

use crate::tracker::{NextPrayerState, NextPrayerTracker};
use crate::PrayerTimeSet;
use chrono::{Local, NaiveDateTime};
use log::{debug, warn};
use std::io;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Default re-evaluation period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Source of the current local wall-clock time.
pub trait Clock: Send + 'static {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// The system's local time zone clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> NaiveDateTime + Send + 'static,
{
    fn now(&self) -> NaiveDateTime {
        self()
    }
}

#[derive(Debug)]
struct Shared {
    tracker: NextPrayerTracker,
    times: PrayerTimeSet,
    latest: Option<NextPrayerState>,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to a running countdown ticker.
#[derive(Debug)]
pub struct PrayerWatch {
    shared: Arc<Mutex<Shared>>,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl PrayerWatch {
    /// Starts ticking once per second.
    ///
    /// `on_tick` runs on the ticker thread, immediately and then after every period.
    ///
    /// # Errors
    /// Returns the OS error if the ticker thread cannot be spawned.
    pub fn start<C, F>(
        tracker: NextPrayerTracker,
        times: PrayerTimeSet,
        clock: C,
        on_tick: F,
    ) -> io::Result<Self>
    where
        C: Clock,
        F: FnMut(NextPrayerState) + Send + 'static,
    {
        Self::start_with_period(tracker, times, clock, TICK_PERIOD, on_tick)
    }

    /// Starts ticking with a custom period.
    ///
    /// # Errors
    /// Returns the OS error if the ticker thread cannot be spawned.
    pub fn start_with_period<C, F>(
        tracker: NextPrayerTracker,
        times: PrayerTimeSet,
        clock: C,
        period: Duration,
        mut on_tick: F,
    ) -> io::Result<Self>
    where
        C: Clock,
        F: FnMut(NextPrayerState) + Send + 'static,
    {
        let shared = Arc::new(Mutex::new(Shared {
            tracker,
            times,
            latest: None,
        }));
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let worker_shared = Arc::clone(&shared);
        let handle = thread::Builder::new()
            .name("prayer-watch".into())
            .spawn(move || {
                loop {
                    let state = {
                        let mut guard = lock(&worker_shared);
                        let state = guard.tracker.compute_next(&guard.times, clock.now());
                        guard.latest = Some(state);
                        state
                    };
                    on_tick(state);

                    match stop_rx.recv_timeout(period) {
                        Err(RecvTimeoutError::Timeout) => {}
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                debug!("prayer watch stopped");
            })?;

        Ok(Self {
            shared,
            stop: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Replaces the timetable, e.g. after the city or method changed.
    ///
    /// Takes effect on the next tick.
    pub fn update(&self, tracker: NextPrayerTracker, times: PrayerTimeSet) {
        let mut guard = lock(&self.shared);
        guard.tracker = tracker;
        guard.times = times;
    }

    /// Most recent state produced by the ticker.
    #[must_use]
    pub fn latest(&self) -> Option<NextPrayerState> {
        lock(&self.shared).latest
    }

    /// Stops the ticker and waits for its thread to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(stop) = self.stop.take() {
            // The ticker may already have exited; a closed channel is fine.
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("prayer watch thread panicked");
            }
        }
    }
}

impl Drop for PrayerWatch {
    fn drop(&mut self) {
        self.shutdown();
    }
}
