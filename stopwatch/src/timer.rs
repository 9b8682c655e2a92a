use crate::Measurement;
use chrono::{DateTime, Utc};
use derive_more::Display;
use once_cell::sync::OnceCell;
use std::{
    fmt,
    time::{Duration, Instant},
};

/// Whether a `Stopwatch` is still counting.
///
/// `Running` is the initial state.
/// The first call to `Stopwatch::stop` moves it to `Stopped`,
/// which it never leaves.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    #[display(fmt = "running")]
    Running,
    #[display(fmt = "stopped")]
    Stopped,
}

/// Measures wall-clock time from its creation until the first call to `stop`,
/// or until now if it hasn't been stopped yet.
///
/// The end mark is written at most once.
/// A `Stopwatch` can be shared between threads (`&self` is all `stop` needs);
/// concurrent readers see either no end time or the final one, never anything in between.
///
/// Elapsed time is read from the monotonic clock.
/// The end timestamp is the start timestamp plus that elapsed time,
/// so `end_time - start_time` is always exactly `duration`,
/// even if the wall clock is adjusted while the `Stopwatch` is running.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    start_time: DateTime<Utc>,
    start:      Instant,
    end:        OnceCell<Instant>,
}

impl Stopwatch {
    /// Create a new `Stopwatch`, starting it immediately.
    pub fn create_and_start() -> Self {
        Self {
            start_time: Utc::now(),
            start:      Instant::now(),
            end:        OnceCell::new(),
        }
    }

    /// Alias of `create_and_start`.
    #[inline]
    pub fn new() -> Self {
        Self::create_and_start()
    }

    /// Run `f`, returning its result along with how long it took.
    pub fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
        let stopwatch = Self::create_and_start();
        let result = f();
        (result, stopwatch.stop_and_get_duration())
    }

    /// When the `Stopwatch` was created.
    #[inline]
    pub const fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// When the `Stopwatch` was stopped, if it has been.
    #[inline]
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end.get().map(|&end| self.time_at(end))
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.end.get().is_some()
    }

    pub fn state(&self) -> State {
        if self.is_stopped() {
            State::Stopped
        } else {
            State::Running
        }
    }

    /// Stop the `Stopwatch` at the current instant.
    ///
    /// Only the first call has any effect.
    /// If several threads race to stop it,
    /// exactly one of them records the end time;
    /// the others wait for that value to be published and then return.
    pub fn stop(&self) {
        self.end.get_or_init(|| {
            let end = Instant::now();
            log::trace!("stopwatch stopped after {:?}", self.elapsed_until(Some(&end)));
            end
        });
    }

    /// The time elapsed between the start and the end,
    /// or between the start and now if the `Stopwatch` is still running.
    ///
    /// Never stops the `Stopwatch`.
    pub fn duration(&self) -> Duration {
        self.elapsed_until(self.end.get())
    }

    fn elapsed_until(&self, end: Option<&Instant>) -> Duration {
        match end {
            Some(end) => end.saturating_duration_since(self.start),
            None => self.start.elapsed(),
        }
    }

    /// The wall-clock time of `instant`, counted from the start timestamp.
    ///
    /// Saturates at the latest representable timestamp.
    fn time_at(&self, instant: Instant) -> DateTime<Utc> {
        chrono::Duration::from_std(instant.saturating_duration_since(self.start))
            .ok()
            .and_then(|elapsed| self.start_time.checked_add_signed(elapsed))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// `duration`, in whole milliseconds.
    #[inline]
    pub fn millis(&self) -> u128 {
        self.duration().as_millis()
    }

    /// Stop the `Stopwatch` (if it isn't already) and return the final duration.
    pub fn stop_and_get_duration(&self) -> Duration {
        self.stop();
        self.duration()
    }

    /// `stop_and_get_duration`, in whole milliseconds.
    #[inline]
    pub fn stop_and_get_millis(&self) -> u128 {
        self.stop_and_get_duration().as_millis()
    }

    /// Take a consistent snapshot of the `Stopwatch`.
    ///
    /// The end time and duration are read from the same end mark,
    /// even if another thread stops the `Stopwatch` concurrently.
    pub fn measurement(&self) -> Measurement {
        let end = self.end.get();
        let end_time = end.map(|&end| self.time_at(end));

        if let Some(end_time) = end_time {
            debug_assert!(end_time >= self.start_time);
        }

        Measurement {
            start_time: self.start_time,
            end_time,
            duration: self.elapsed_until(end),
        }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::create_and_start()
    }
}

impl fmt::Display for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.measurement(), f)
    }
}
