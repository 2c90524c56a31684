// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turn a foreground color, a background color, and a set of attributes into one SGR
//! command. The fragments always come out in the same order:
//!
//! 1. Foreground color (if any).
//! 2. Background color (if any).
//! 3. Attributes, in ascending bit order of [`AttributeSet`].
//!
//! They are joined with `;` and wrapped in a single `ESC [ ... m`, so the output never
//! has empty fragments or doubled separators. For example bold red text on 8-bit color
//! 236 is `ESC[31;48;5;236;1m`, rather than three separate commands.

use crate::{AttributeSet, CSI, ColourValue, InlineString, InlineVec, SGR,
            SGR_SEPARATOR};

/// Collect the active fragments in output order. Absent colors and unset attributes
/// contribute nothing.
#[must_use]
pub fn collect_fragments(
    fg: &ColourValue,
    bg: &ColourValue,
    attribs: &AttributeSet,
) -> InlineVec<InlineString> {
    let mut acc = InlineVec::new();
    acc.extend(fg.serialize());
    acc.extend(bg.serialize());
    acc.extend(attribs.active_fragments());
    acc
}

/// Build the complete SGR command for the given styling.
///
/// If nothing is active the result is `ESC [ m`. That is a well formed command with no
/// parameters, which terminals treat the same as a reset. [`crate::StyledText`] never
/// calls this for unstyled text, it returns the raw text instead.
///
/// ```
/// use r3bl_styled_text::{Attribute, AttributeSet, ColourValue, Palette4, compose};
///
/// let fg = ColourValue::fg(Palette4::Red);
/// let bg = ColourValue::bg(236);
/// let attribs = AttributeSet::from(Attribute::Bold);
/// assert_eq!(compose(&fg, &bg, &attribs), "\x1b[31;48;5;236;1m");
/// ```
#[must_use]
pub fn compose(fg: &ColourValue, bg: &ColourValue, attribs: &AttributeSet) -> String {
    let fragments = collect_fragments(fg, bg, attribs);

    // Every fragment is at most 16 bytes.
    let mut acc = String::with_capacity(CSI.len() + SGR.len() + fragments.len() * 17);
    acc.push_str(CSI);
    for (index, fragment) in fragments.iter().enumerate() {
        if index > 0 {
            acc.push(SGR_SEPARATOR);
        }
        acc.push_str(fragment);
    }
    acc.push_str(SGR);
    acc
}
