// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The hex color string must be in the following format: `#RRGGBB`, eg:
//! `#FF0000` for red. Hex digits can be upper or lower case.

use nom::{IResult,
          Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{map, map_res},
          sequence::preceded};

use crate::RgbValue;

/// Parse function that generates a [`RgbValue`] struct from a valid hex color string.
/// Any input after the 6th hex digit is returned as the remainder.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    map(
        preceded(
            tag("#"),
            (
                helper_fns::parse_hex_seg,
                helper_fns::parse_hex_seg,
                helper_fns::parse_hex_seg,
            ),
        ),
        |(red, green, blue)| RgbValue { red, green, blue },
    )
    .parse(input)
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::*;

    /// This function is used by [`map_res`] and it returns a [`Result`], not
    /// [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns `true`
    /// items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }
}
