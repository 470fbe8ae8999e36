//! The Krill controller: a single-consumer event loop that owns an
//! automaton and serializes every mutation onto one thread of control.
//!
//! Three signal sources feed the loop — a timer thread ("time to
//! advance"), the input source, and an internal quit latch — and a
//! `crossbeam_channel::select!` reacts to whichever arrives first.
//! Cancellation is cooperative: quit breaks the loop between
//! iterations, never mid-generation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;

pub use config::RunConfig;
pub use controller::{Controller, SharedDelay, MIN_DELAY_MS};
