// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// The 16 color palette that every ANSI terminal understands. The discriminant of each
/// variant is its foreground SGR code. The background code is always 10 more.
///
/// The actual RGB values these map to are up to the terminal's theme.
///
/// ```
/// use r3bl_styled_text::Palette4;
/// use std::str::FromStr;
///
/// assert_eq!(Palette4::Red.code(), 31);
/// assert_eq!(Palette4::Red.background_code(), 41);
/// assert_eq!(Palette4::from_str("bright-red"), Ok(Palette4::BrightRed));
/// ```
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,
         Display, EnumCount, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Palette4 {
    Black         = 30,
    Red           = 31,
    Green         = 32,
    Yellow        = 33,
    Blue          = 34,
    Magenta       = 35,
    Cyan          = 36,
    White         = 37,
    BrightBlack   = 90,
    BrightRed     = 91,
    BrightGreen   = 92,
    BrightYellow  = 93,
    BrightBlue    = 94,
    BrightMagenta = 95,
    BrightCyan    = 96,
    BrightWhite   = 97,
}

/// Added to a foreground code to get the matching background code.
pub const BACKGROUND_CODE_OFFSET: u8 = 10;

impl Palette4 {
    /// Foreground SGR code, one of `30..=37` or `90..=97`.
    #[must_use]
    pub const fn code(self) -> u8 { self as u8 }

    /// Background SGR code, one of `40..=47` or `100..=107`.
    #[must_use]
    pub const fn background_code(self) -> u8 { self.code() + BACKGROUND_CODE_OFFSET }

    #[must_use]
    pub const fn is_bright(self) -> bool { self.code() >= Palette4::BrightBlack.code() }
}
