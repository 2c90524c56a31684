// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap [`pretty_assertions::assert_eq!`] so that failing tests show a colored diff.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Format into an [`InlineString`](crate::InlineString) instead of a heap allocated
/// [`String`].
///
/// ```
/// use r3bl_styled_text::inline_string;
///
/// let it = inline_string!("38;5;{}", 200);
/// assert_eq!(it.as_str(), "38;5;200");
/// ```
#[macro_export]
macro_rules! inline_string {
    ($($format:tt)*) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        // Writing into an in-memory buffer can't fail.
        _ = write!(acc, $($format)*);
        acc
    }};
}

/// Shorthand for `Ok(())`.
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}
