#![deny(rust_2018_idioms, clippy::all, unsafe_code)]
#![warn(clippy::nursery)]

//! A single-use stopwatch.
//!
//! A [`Stopwatch`] starts the moment it is created and may be stopped exactly once.
//! The first call to [`Stopwatch::stop`] wins;
//! every later call (from any thread) is a no-op.
//!
//! ```rust
//! use stopwatch::Stopwatch;
//!
//! let stopwatch = Stopwatch::create_and_start();
//! // ... do some work ...
//! let elapsed = stopwatch.stop_and_get_millis();
//! assert_eq!(stopwatch.millis(), elapsed);
//! ```

mod measurement;
mod timer;

pub use measurement::Measurement;
pub use timer::{State, Stopwatch};
