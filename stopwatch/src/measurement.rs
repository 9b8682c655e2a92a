use crate::State;
use chrono::{DateTime, SecondsFormat, Utc};
use std::{fmt, time::Duration};

/// A snapshot of a `Stopwatch`, suitable for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Measurement {
    pub start_time: DateTime<Utc>,
    pub end_time:   Option<DateTime<Utc>>,
    pub duration:   Duration,
}

impl Measurement {
    /// The duration in whole milliseconds.
    #[inline]
    pub const fn millis(&self) -> u128 {
        self.duration.as_millis()
    }

    pub const fn state(&self) -> State {
        match self.end_time {
            Some(_) => State::Stopped,
            None => State::Running,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}ms (started {}, {}",
            self.millis(),
            self.start_time.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.state(),
        )?;

        if let Some(end_time) = self.end_time {
            write!(f, " {}", end_time.to_rfc3339_opts(SecondsFormat::Millis, true))?;
        }

        write!(f, ")")
    }
}
