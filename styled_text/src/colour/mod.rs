// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color type definitions: the 16 color [`Palette4`], 24-bit [`RgbValue`], and the
//! [`ColourValue`] sum type that ties a color of any kind to a foreground or background
//! [`Layer`].
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
//! - <https://www.ditig.com/256-colors-cheat-sheet>

// Attach sources.
pub mod colour_value;
pub mod hex_color_parser;
pub mod palette4;
pub mod rgb_value;

// Re-export.
pub use colour_value::*;
pub use palette4::*;
pub use rgb_value::*;
