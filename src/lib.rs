//! Arabic-to-Kurdish transliteration engine for host applications.
//!
//! The conversion logic lives in `kurd_core`; this crate exposes it through
//! UniFFI and owns tracing setup.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use kurd_core::{converter, export, history, rules, settings, stats};
