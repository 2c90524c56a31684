// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_styled_text
//!
//! Generate ANSI SGR (Select Graphic Rendition) escape sequences for styled terminal
//! output. You describe *what* the text should look like, and this crate produces the
//! shortest well ordered command string that a terminal emulator understands.
//!
//! There are three kinds of colors, and they can be used for the foreground or the
//! background:
//!
//! | Kind       | Type                     | Foreground fragment | Background fragment |
//! | :--------- | :----------------------- | :------------------ | :------------------ |
//! | 4-bit      | [`Palette4`]             | `30..37`, `90..97`  | `40..47`, `100..107` |
//! | 8-bit      | `u8`                     | `38;5;N`            | `48;5;N`            |
//! | 24-bit     | [`RgbValue`]             | `38;2;R;G;B`        | `48;2;R;G;B`        |
//!
//! And there are eight text attributes in an [`AttributeSet`]: bold, dim, italic,
//! underline, slow blink, fast blink, invert, and strike.
//!
//! ## Architecture
//!
//! ```text
//! StyledText (owns text + fg + bg + attribs, memoizes the rendered string)
//!      │ render()
//!      ▼
//! compose(fg, bg, attribs)  ──▶  "\x1b[" + fragments.join(";") + "m"
//!      │
//!      ├──▶ ColourValue::write_fragment()   (fg first, then bg)
//!      └──▶ AttributeSet::active_fragments() (ascending bit order)
//! ```
//!
//! ## Example
//!
//! ```
//! use r3bl_styled_text::{Palette4, styled_text};
//!
//! let it = styled_text("Hello").fg_color(Palette4::Black);
//! assert_eq!(it.render(), "\x1b[30mHello\x1b[0m");
//!
//! let it = styled_text("Hello").bold(true).strike(true).bold(false).italic(true);
//! assert_eq!(it.render(), "\x1b[3;9mHello\x1b[0m");
//!
//! // No styling, no escape sequences.
//! assert_eq!(styled_text("Hello").render(), "Hello");
//! ```
//!
//! ## Windows consoles
//!
//! Some Windows consoles only interpret these sequences after virtual terminal
//! processing has been switched on. Call [`enable_ansi_rendering`] once at startup in
//! your binary. Nothing in this crate calls it for you, and the generated strings are
//! the same whether or not it has been called.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod ansi_rendering;
pub mod attribs;
pub mod cli;
pub mod colour;
pub mod common;
pub mod log;
pub mod sgr;
pub mod styled_text;

// Re-export flat public API.
pub use ansi_rendering::*;
pub use attribs::*;
pub use colour::*;
pub use common::*;
pub use sgr::*;
pub use styled_text::*;
