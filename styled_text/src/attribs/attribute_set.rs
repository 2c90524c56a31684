// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{ops::{Add, AddAssign},
          str::FromStr};

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

use crate::{InlineString, InlineVec, SGR_BOLD, SGR_DIM, SGR_ITALIC, SGR_RAPID_BLINK,
            SGR_REVERSE, SGR_SLOW_BLINK, SGR_STRIKETHROUGH, SGR_UNDERLINE,
            StyledTextError, inline_string};

/// One text attribute. The discriminant is the bit position in an [`AttributeSet`], and
/// the declaration order is the order in which attributes are emitted. Both are part of
/// the output format, so don't reorder these.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,
         Display, EnumCount, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Attribute {
    Bold      = 0,
    Dim       = 1,
    Italic    = 2,
    Underline = 3,
    SlowBlink = 4,
    FastBlink = 5,
    Invert    = 6,
    Strike    = 7,
}

impl Attribute {
    /// Single bit mask for this attribute.
    #[must_use]
    pub const fn bit(self) -> u8 { 1 << self as u8 }

    /// SGR code emitted for this attribute.
    #[rustfmt::skip]
    #[must_use]
    pub const fn sgr_code(self) -> u8 {
        match self {
            Attribute::Bold      => SGR_BOLD,
            Attribute::Dim       => SGR_DIM,
            Attribute::Italic    => SGR_ITALIC,
            Attribute::Underline => SGR_UNDERLINE,
            Attribute::SlowBlink => SGR_SLOW_BLINK,
            Attribute::FastBlink => SGR_RAPID_BLINK,
            Attribute::Invert    => SGR_REVERSE,
            Attribute::Strike    => SGR_STRIKETHROUGH,
        }
    }

    /// Like [`FromStr`], but reports errors as [`StyledTextError`].
    ///
    /// # Errors
    ///
    /// Returns [`StyledTextError::UnknownAttribute`] if `input` isn't a kebab-case
    /// attribute name, eg: `bold`, `slow-blink`.
    pub fn try_from_name(input: &str) -> Result<Attribute, StyledTextError> {
        Attribute::from_str(input.trim()).map_err(|_| StyledTextError::UnknownAttribute {
            input: input.to_string(),
        })
    }
}

/// Bit masks for [`AttributeSet::with_flags`].
pub mod attribute_mask {
    use super::Attribute;

    pub const BOLD: u8 = Attribute::Bold.bit();
    pub const DIM: u8 = Attribute::Dim.bit();
    pub const ITALIC: u8 = Attribute::Italic.bit();
    pub const UNDERLINE: u8 = Attribute::Underline.bit();
    pub const SLOW_BLINK: u8 = Attribute::SlowBlink.bit();
    pub const FAST_BLINK: u8 = Attribute::FastBlink.bit();
    pub const INVERT: u8 = Attribute::Invert.bit();
    pub const STRIKE: u8 = Attribute::Strike.bit();
}

/// A set of text attributes, stored as an 8 bit mask. Every bit pattern is valid, so
/// none of the operations can fail.
///
/// ## Combining attributes with + operator
///
/// ```
/// use r3bl_styled_text::{Attribute, AttributeSet};
///
/// let bold_italic: AttributeSet = Attribute::Bold + Attribute::Italic;
/// assert!(bold_italic.is_set(Attribute::Italic));
///
/// let mut attribs = AttributeSet::default();
/// attribs += Attribute::Strike;
/// attribs += Attribute::Italic;
/// let fragments = attribs.active_fragments();
/// let fragments: Vec<&str> = fragments.iter().map(|it| it.as_str()).collect();
/// assert_eq!(fragments, ["3", "9"]);
/// ```
///
/// ## Bulk replacement using a mask
///
/// ```
/// use r3bl_styled_text::{AttributeSet, attribute_mask};
///
/// let attribs = AttributeSet::with_flags(attribute_mask::BOLD | attribute_mask::STRIKE);
/// assert_eq!(attribs.len(), 2);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct AttributeSet {
    bits: u8,
}

impl AttributeSet {
    /// Empty set.
    #[must_use]
    pub const fn new() -> Self { Self { bits: 0 } }

    #[must_use]
    pub const fn with_flags(mask: u8) -> Self { Self { bits: mask } }

    #[must_use]
    pub const fn bits(&self) -> u8 { self.bits }

    #[must_use]
    pub const fn is_set(&self, attrib: Attribute) -> bool {
        self.bits & attrib.bit() != 0
    }

    pub fn set(&mut self, attrib: Attribute, value: bool) {
        if value {
            self.bits |= attrib.bit();
        } else {
            self.bits &= !attrib.bit();
        }
    }

    /// Consuming version of [`Self::set`].
    #[must_use]
    pub fn with(mut self, attrib: Attribute, value: bool) -> Self {
        self.set(attrib, value);
        self
    }

    /// Returns `true` if no attribute is set.
    #[must_use]
    pub const fn is_none(&self) -> bool { self.bits == 0 }

    /// Number of attributes that are set.
    #[must_use]
    pub const fn len(&self) -> usize { self.bits.count_ones() as usize }

    #[must_use]
    pub const fn is_empty(&self) -> bool { self.is_none() }

    pub fn reset(&mut self) { self.bits = 0; }

    /// The attributes that are set, in ascending bit order.
    pub fn iter(&self) -> impl Iterator<Item = Attribute> + use<> {
        let it = *self;
        Attribute::iter().filter(move |attrib| it.is_set(*attrib))
    }

    /// The SGR code of each attribute that is set, as decimal text, in ascending bit
    /// order. Unset attributes are skipped, so the length always equals [`Self::len`].
    #[must_use]
    pub fn active_fragments(&self) -> InlineVec<InlineString> {
        self.iter()
            .map(|attrib| inline_string!("{}", attrib.sgr_code()))
            .collect()
    }
}

impl From<Attribute> for AttributeSet {
    fn from(attrib: Attribute) -> Self { Self::with_flags(attrib.bit()) }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |acc, attrib| acc + attrib)
    }
}

mod ops_impl {
    use super::*;

    impl Add for AttributeSet {
        type Output = Self;
        fn add(self, rhs: Self) -> Self::Output { Self::with_flags(self.bits | rhs.bits) }
    }

    impl Add<Attribute> for AttributeSet {
        type Output = Self;
        fn add(self, rhs: Attribute) -> Self::Output { self + AttributeSet::from(rhs) }
    }

    impl Add for Attribute {
        type Output = AttributeSet;
        fn add(self, rhs: Self) -> Self::Output {
            AttributeSet::from(self) + AttributeSet::from(rhs)
        }
    }

    impl AddAssign<Attribute> for AttributeSet {
        fn add_assign(&mut self, rhs: Attribute) { *self = *self + rhs; }
    }

    impl AddAssign for AttributeSet {
        fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
    }
}

#[cfg(test)]
mod tests {
    use strum::EnumCount;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn fragments(it: AttributeSet) -> Vec<String> {
        it.active_fragments().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn fixed_bit_to_code_mapping() {
        let codes: Vec<(u8, u8)> = Attribute::iter()
            .map(|it| (it.bit(), it.sgr_code()))
            .collect();
        assert_eq2!(
            codes,
            vec![
                (0b0000_0001, 1),
                (0b0000_0010, 2),
                (0b0000_0100, 3),
                (0b0000_1000, 4),
                (0b0001_0000, 5),
                (0b0010_0000, 6),
                (0b0100_0000, 7),
                (0b1000_0000, 9),
            ]
        );
        assert_eq2!(Attribute::COUNT, 8);
    }

    #[test]
    fn conceal_is_never_emitted() {
        let all = AttributeSet::with_flags(u8::MAX);
        assert!(!fragments(all).contains(&"8".to_string()));
    }

    #[test]
    fn empty_set() {
        let it = AttributeSet::new();
        assert!(it.is_none());
        assert!(it.is_empty());
        assert_eq2!(it.len(), 0);
        assert!(it.active_fragments().is_empty());
        assert_eq2!(it, AttributeSet::default());
    }

    #[test]
    fn set_and_clear() {
        let mut it = AttributeSet::new();
        it.set(Attribute::Bold, true);
        it.set(Attribute::Strike, true);
        assert!(it.is_set(Attribute::Bold));
        assert!(it.is_set(Attribute::Strike));
        assert!(!it.is_set(Attribute::Dim));

        it.set(Attribute::Bold, false);
        assert!(!it.is_set(Attribute::Bold));
        assert_eq2!(it.bits(), attribute_mask::STRIKE);

        // Clearing an unset bit is a no-op.
        it.set(Attribute::Dim, false);
        assert_eq2!(it.bits(), attribute_mask::STRIKE);

        it.reset();
        assert!(it.is_none());
    }

    #[test]
    fn with_is_consuming_set() {
        let it = AttributeSet::new()
            .with(Attribute::Italic, true)
            .with(Attribute::Invert, true)
            .with(Attribute::Italic, false);
        assert_eq2!(it, AttributeSet::from(Attribute::Invert));
    }

    #[test_case(0b0000_0000, &[])]
    #[test_case(0b0000_0101, &["1", "3"])]
    #[test_case(0b1000_0100, &["3", "9"])]
    #[test_case(0b0111_0000, &["5", "6", "7"])]
    #[test_case(0b1111_1111, &["1", "2", "3", "4", "5", "6", "7", "9"])]
    fn fragments_in_ascending_bit_order(mask: u8, expected: &[&str]) {
        let it = AttributeSet::with_flags(mask);
        assert_eq2!(fragments(it), expected);
        assert_eq2!(it.len(), mask.count_ones() as usize);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let a = Attribute::Strike + Attribute::Bold;
        let b = Attribute::Bold + Attribute::Strike;
        assert_eq2!(a, b);
        assert_eq2!(fragments(a), vec!["1", "9"]);
    }

    #[test]
    fn add_assign_and_collect() {
        let mut it = AttributeSet::default();
        it += Attribute::Underline;
        it += Attribute::Dim + Attribute::Underline;
        assert_eq2!(
            it.iter().collect::<Vec<_>>(),
            vec![Attribute::Dim, Attribute::Underline]
        );

        let collected: AttributeSet = [Attribute::FastBlink, Attribute::Bold]
            .into_iter()
            .collect();
        assert_eq2!(collected.bits(), attribute_mask::BOLD | attribute_mask::FAST_BLINK);
    }

    #[test_case("bold", Attribute::Bold)]
    #[test_case("slow-blink", Attribute::SlowBlink)]
    #[test_case(" Fast-Blink ", Attribute::FastBlink)]
    #[test_case("strike", Attribute::Strike)]
    fn parse_name(input: &str, expected: Attribute) {
        assert_eq2!(Attribute::try_from_name(input), Ok(expected));
    }

    #[test]
    fn parse_unknown_name() {
        assert_eq2!(
            Attribute::try_from_name("hidden"),
            Err(StyledTextError::UnknownAttribute {
                input: "hidden".into()
            })
        );
    }
}
