// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! Composing escape sequences can't fail, since every input is range checked by its
//! type. The errors here come from turning user supplied strings (CLI args, config
//! values) into colors and attributes.

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`] in
/// application level code, like the `styled` binary and logging setup.
pub type CommonResult<T> = miette::Result<T>;

/// Errors produced when parsing user supplied color and attribute names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum StyledTextError {
    #[error("Invalid hex color format: {input:?}")]
    #[diagnostic(
        code(r3bl_styled_text::invalid_hex_color),
        help("Use `#` followed by exactly 6 hex digits, eg: `#ff8000`")
    )]
    InvalidHexColor { input: String },

    #[error("Can't convert {input:?} into a color")]
    #[diagnostic(
        code(r3bl_styled_text::invalid_colour_spec),
        help(
            "Use a palette name (eg: `red`, `bright-cyan`), an ANSI 256 index \
             (`0` to `255`), or a hex color (eg: `#ff8000`)"
        )
    )]
    InvalidColourSpec { input: String },

    #[error("Unknown text attribute {input:?}")]
    #[diagnostic(
        code(r3bl_styled_text::unknown_attribute),
        help(
            "Use one of: bold, dim, italic, underline, slow-blink, fast-blink, invert, \
             strike"
        )
    )]
    UnknownAttribute { input: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn error_messages() {
        let it = StyledTextError::InvalidHexColor {
            input: "#zz0000".into(),
        };
        assert_eq2!(it.to_string(), r##"Invalid hex color format: "#zz0000""##);

        let it = StyledTextError::InvalidColourSpec {
            input: "mauve".into(),
        };
        assert_eq2!(it.to_string(), r#"Can't convert "mauve" into a color"#);
    }

    #[test]
    fn converts_into_report() {
        let res: CommonResult<()> = Err(StyledTextError::UnknownAttribute {
            input: "sparkle".into(),
        }
        .into());
        let report = res.unwrap_err();
        assert_eq2!(
            report.to_string(),
            r#"Unknown text attribute "sparkle""#.to_string()
        );
    }
}
