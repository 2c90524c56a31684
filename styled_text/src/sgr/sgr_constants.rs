// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR sequence constants. These numbers are the wire format that terminals read, so
//! they must never change.

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

use const_format::concatcp;

/// Control Sequence Introducer: `ESC [`.
pub const CSI: &str = "\x1b[";

/// Final byte of an SGR command.
pub const SGR: &str = "m";

/// Separator between the parameters (fragments) of one command.
pub const SGR_SEPARATOR: char = ';';

/// Parameter that resets all attributes and colors to the terminal defaults.
pub const SGR_RESET_PARAM: u8 = 0;

/// The reset command `ESC [ 0 m`, appended after every styled string.
pub const RESET: &str = concatcp!(CSI, SGR_RESET_PARAM, SGR);

/// Same as [`RESET`], for callers that write bytes.
pub const SGR_RESET_BYTES: &[u8] = RESET.as_bytes();

// Text attributes. 8 (hidden / conceal) is deliberately not supported.
pub const SGR_BOLD:          u8 = 1;
pub const SGR_DIM:           u8 = 2;
pub const SGR_ITALIC:        u8 = 3;
pub const SGR_UNDERLINE:     u8 = 4;
pub const SGR_SLOW_BLINK:    u8 = 5;
pub const SGR_RAPID_BLINK:   u8 = 6;
pub const SGR_REVERSE:       u8 = 7;
pub const SGR_STRIKETHROUGH: u8 = 9;

// Extended (8-bit and 24-bit) colors: `38;5;N`, `48;5;N`, `38;2;R;G;B`, `48;2;R;G;B`.
pub const SGR_FG_EXTENDED:      u8 = 38;
pub const SGR_BG_EXTENDED:      u8 = 48;
pub const SGR_EXTENDED_ANSI256: u8 = 5;
pub const SGR_EXTENDED_RGB:     u8 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset() {
        assert_eq!(RESET, "\x1b[0m");
        assert_eq!(SGR_RESET_BYTES, b"\x1b[0m");
    }
}
