// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.
//!
//! This is the most precise color representation supported by modern terminals, and the
//! least portable.

use nom::{Parser, combinator::all_consuming};

use super::hex_color_parser::parse_hex_color;
use crate::StyledTextError;

/// Represents a color in RGB (24-bit truecolor) format. Each channel is a [`u8`], so out
/// of range values can't be constructed.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

/// Takes the lower 24 bits as `0xRRGGBB`.
impl From<u32> for RgbValue {
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Parse a `#RRGGBB` string. The whole input has to match, trailing characters are
    /// not allowed.
    ///
    /// # Errors
    ///
    /// Returns [`StyledTextError::InvalidHexColor`] if the input string is not a valid
    /// hex color.
    pub fn try_from_hex_color(input: &str) -> Result<RgbValue, StyledTextError> {
        match all_consuming(parse_hex_color).parse(input) {
            Ok((_, color)) => Ok(color),
            Err(_) => Err(StyledTextError::InvalidHexColor {
                input: input.to_string(),
            }),
        }
    }
}
