// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt in logging for binaries and tests that use this crate. The library itself only
//! emits [`tracing`] events (render cache misses at `TRACE`, and
//! [`crate::enable_ansi_rendering`] at `DEBUG`). Nothing is printed unless a subscriber
//! is installed, eg: using [`try_initialize_logging_global`].

// Attach sources.
pub mod public_api;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use public_api::*;
pub use tracing_config::*;
pub use tracing_init::*;
