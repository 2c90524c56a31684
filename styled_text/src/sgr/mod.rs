// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) command generation.
//!
//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>

// Attach sources.
pub mod compose;
pub mod sgr_constants;

// Re-export.
pub use compose::*;
pub use sgr_constants::*;
