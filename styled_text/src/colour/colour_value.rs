// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Write as _, str::FromStr};

use super::{Palette4, RgbValue};
use crate::{InlineString, SGR_BG_EXTENDED, SGR_EXTENDED_ANSI256, SGR_EXTENDED_RGB,
            SGR_FG_EXTENDED, StyledTextError};

/// Whether a color paints the text itself or the cell behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layer {
    #[default]
    Foreground,
    Background,
}

impl Layer {
    /// Leading parameter of the 8-bit and 24-bit color fragments: `38` or `48`.
    #[must_use]
    pub const fn extended_colour_code(self) -> u8 {
        match self {
            Layer::Foreground => SGR_FG_EXTENDED,
            Layer::Background => SGR_BG_EXTENDED,
        }
    }
}

/// A color in one of three mutually exclusive encodings, or no color at all. Each
/// variant carries exactly the payload that its encoding needs, so there is no way to
/// read an 8-bit index out of an RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Colour {
    #[default]
    None,
    FourBit(Palette4),
    EightBit(u8),
    Rgb(RgbValue),
}

/// The discriminant of [`Colour`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColourKind {
    None,
    FourBit,
    EightBit,
    Rgb,
}

impl Colour {
    #[rustfmt::skip]
    #[must_use]
    pub const fn kind(&self) -> ColourKind {
        match self {
            Colour::None        => ColourKind::None,
            Colour::FourBit(_)  => ColourKind::FourBit,
            Colour::EightBit(_) => ColourKind::EightBit,
            Colour::Rgb(_)      => ColourKind::Rgb,
        }
    }
}

mod convert_into_colour {
    use super::*;

    impl From<Palette4> for Colour {
        fn from(code: Palette4) -> Self { Colour::FourBit(code) }
    }

    impl From<u8> for Colour {
        fn from(index: u8) -> Self { Colour::EightBit(index) }
    }

    impl From<RgbValue> for Colour {
        fn from(rgb: RgbValue) -> Self { Colour::Rgb(rgb) }
    }

    impl From<(u8, u8, u8)> for Colour {
        fn from(rgb: (u8, u8, u8)) -> Self { Colour::Rgb(rgb.into()) }
    }

    /// Parse a user supplied color:
    /// - `none` → [`Colour::None`].
    /// - A [`Palette4`] name, eg: `red`, `bright-cyan` → [`Colour::FourBit`].
    /// - A decimal number from `0` to `255` → [`Colour::EightBit`].
    /// - A `#RRGGBB` hex string → [`Colour::Rgb`].
    impl FromStr for Colour {
        type Err = StyledTextError;

        fn from_str(input: &str) -> Result<Self, Self::Err> {
            let trimmed = input.trim();

            if trimmed.eq_ignore_ascii_case("none") {
                return Ok(Colour::None);
            }

            if trimmed.starts_with('#') {
                return RgbValue::try_from_hex_color(trimmed).map(Colour::Rgb);
            }

            if let Ok(code) = Palette4::from_str(trimmed) {
                return Ok(Colour::FourBit(code));
            }

            if let Ok(index) = trimmed.parse::<u8>() {
                return Ok(Colour::EightBit(index));
            }

            Err(StyledTextError::InvalidColourSpec {
                input: input.to_string(),
            })
        }
    }
}

/// A [`Colour`] tagged with the [`Layer`] it applies to. This is an immutable value
/// type. Two values are equal only if their kind, payload, and layer are all equal, so a
/// 4-bit red and the 8-bit index `1` are never equal, even though most terminals show
/// them the same way.
///
/// ```
/// use r3bl_styled_text::{ColourValue, Layer, Palette4};
///
/// let fg = ColourValue::from_palette4(Palette4::Black, Layer::Foreground);
/// assert_eq!(fg.serialize().unwrap().as_str(), "30");
///
/// let bg = ColourValue::bg(200);
/// assert_eq!(bg.serialize().unwrap().as_str(), "48;5;200");
///
/// let fg = ColourValue::fg((10, 20, 30));
/// assert_eq!(fg.serialize().unwrap().as_str(), "38;2;10;20;30");
///
/// assert_eq!(ColourValue::default().serialize(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColourValue {
    colour: Colour,
    layer: Layer,
}

impl ColourValue {
    #[must_use]
    pub const fn new(colour: Colour, layer: Layer) -> Self { Self { colour, layer } }

    #[must_use]
    pub const fn none(layer: Layer) -> Self { Self::new(Colour::None, layer) }

    #[must_use]
    pub const fn from_palette4(code: Palette4, layer: Layer) -> Self {
        Self::new(Colour::FourBit(code), layer)
    }

    #[must_use]
    pub const fn from_palette8(index: u8, layer: Layer) -> Self {
        Self::new(Colour::EightBit(index), layer)
    }

    /// Always produces a [`ColourKind::Rgb`] value.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8, layer: Layer) -> Self {
        Self::new(Colour::Rgb(RgbValue::from_u8(red, green, blue)), layer)
    }

    /// Foreground color of any kind.
    #[must_use]
    pub fn fg(arg_colour: impl Into<Colour>) -> Self {
        Self::new(arg_colour.into(), Layer::Foreground)
    }

    /// Background color of any kind.
    #[must_use]
    pub fn bg(arg_colour: impl Into<Colour>) -> Self {
        Self::new(arg_colour.into(), Layer::Background)
    }

    #[must_use]
    pub const fn colour(&self) -> Colour { self.colour }

    #[must_use]
    pub const fn layer(&self) -> Layer { self.layer }

    #[must_use]
    pub const fn kind(&self) -> ColourKind { self.colour.kind() }

    #[must_use]
    pub const fn is_none(&self) -> bool { matches!(self.colour, Colour::None) }

    #[must_use]
    pub const fn is_background(&self) -> bool { matches!(self.layer, Layer::Background) }

    /// Same color, moved to another layer.
    #[must_use]
    pub const fn with_layer(self, layer: Layer) -> Self { Self::new(self.colour, layer) }

    /// # Panics
    ///
    /// Panics if this is not a [`ColourKind::FourBit`] value. Reading the payload of
    /// another kind is a bug in the caller.
    #[track_caller]
    #[must_use]
    pub fn as_palette4(&self) -> Palette4 {
        match self.colour {
            Colour::FourBit(code) => code,
            _ => panic_kind_mismatch(ColourKind::FourBit, self.kind()),
        }
    }

    /// # Panics
    ///
    /// Panics if this is not a [`ColourKind::EightBit`] value.
    #[track_caller]
    #[must_use]
    pub fn as_palette8(&self) -> u8 {
        match self.colour {
            Colour::EightBit(index) => index,
            _ => panic_kind_mismatch(ColourKind::EightBit, self.kind()),
        }
    }

    /// # Panics
    ///
    /// Panics if this is not a [`ColourKind::Rgb`] value.
    #[track_caller]
    #[must_use]
    pub fn as_rgb(&self) -> RgbValue {
        match self.colour {
            Colour::Rgb(rgb) => rgb,
            _ => panic_kind_mismatch(ColourKind::Rgb, self.kind()),
        }
    }

    /// The SGR parameter fragment for this color, without the leading `ESC [` or the
    /// trailing `m`. Returns [`None`] for [`Colour::None`].
    #[must_use]
    pub fn serialize(&self) -> Option<InlineString> {
        let mut acc = InlineString::new();
        self.write_fragment(&mut acc).then_some(acc)
    }

    /// Append the fragment to `acc`. Returns `false` and leaves `acc` untouched for
    /// [`Colour::None`].
    pub fn write_fragment(&self, acc: &mut InlineString) -> bool {
        let ext = self.layer.extended_colour_code();
        // Writing into an in-memory buffer can't fail.
        _ = match self.colour {
            Colour::None => return false,
            Colour::FourBit(code) => match self.layer {
                Layer::Foreground => write!(acc, "{}", code.code()),
                Layer::Background => write!(acc, "{}", code.background_code()),
            },
            Colour::EightBit(index) => {
                write!(acc, "{ext};{SGR_EXTENDED_ANSI256};{index}")
            }
            Colour::Rgb(RgbValue { red, green, blue }) => {
                write!(acc, "{ext};{SGR_EXTENDED_RGB};{red};{green};{blue}")
            }
        };
        true
    }
}

#[track_caller]
fn panic_kind_mismatch(requested: ColourKind, actual: ColourKind) -> ! {
    panic!("Can't read a {requested:?} payload from a {actual:?} ColourValue")
}
