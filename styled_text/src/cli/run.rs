// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use super::CLIArg;
use crate::{Attribute, AttributeSet, Colour, CommonResult, StyledText, ok, styled_text};

/// Build the [`StyledText`] that the arguments describe.
///
/// # Errors
///
/// Returns a [`crate::StyledTextError`] diagnostic for a color or attribute name that
/// can't be parsed.
pub fn try_build_styled_text(cli_arg: &CLIArg) -> CommonResult<StyledText> {
    let mut acc = styled_text(cli_arg.text.as_str());

    if let Some(fg) = &cli_arg.fg {
        acc.set_fg_color(Colour::from_str(fg)?);
    }

    if let Some(bg) = &cli_arg.bg {
        acc.set_bg_color(Colour::from_str(bg)?);
    }

    let attribs = cli_arg
        .attribs
        .iter()
        .map(|it| Attribute::try_from_name(it))
        .collect::<Result<AttributeSet, _>>()?;
    acc.set_attribs(attribs);

    ok!(acc)
}

/// Returns the line that the `styled` binary prints. With `--raw` this is the [`Debug`]
/// form of the rendered string, so the escape sequences are visible.
///
/// # Errors
///
/// See [`try_build_styled_text`].
pub fn run(cli_arg: &CLIArg) -> CommonResult<String> {
    let styled = try_build_styled_text(cli_arg)?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "run",
        fg = ?styled.foreground(),
        bg = ?styled.background(),
        attribs = ?styled.attributes(),
    );

    if cli_arg.raw {
        ok!(format!("{:?}", styled.render()))
    } else {
        ok!(styled.into_rendered())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use test_case::test_case;

    use super::*;
    use crate::{Palette4, StyledTextError, assert_eq2};

    fn parse(args: &[&str]) -> CLIArg {
        CLIArg::try_parse_from(std::iter::once("styled").chain(args.iter().copied()))
            .unwrap()
    }

    #[test_case(&["Hello"], "Hello")]
    #[test_case(&["Hello", "--fg", "black"], "\x1b[30mHello\x1b[0m")]
    #[test_case(&["Hello", "--bg", "200"], "\x1b[48;5;200mHello\x1b[0m")]
    #[test_case(&["Hello", "--fg", "#0a141e"], "\x1b[38;2;10;20;30mHello\x1b[0m")]
    #[test_case(&["Hello", "-a", "strike", "-a", "italic"], "\x1b[3;9mHello\x1b[0m")]
    #[test_case(&["Hello", "--fg", "none", "--bg", "none"], "Hello")]
    fn run_renders(args: &[&str], expected: &str) {
        assert_eq2!(run(&parse(args)).unwrap(), expected);
    }

    #[test]
    fn raw_output_is_escaped() {
        let it = run(&parse(&["Hello", "--fg", "black", "--raw"])).unwrap();
        assert_eq2!(it, r#""\u{1b}[30mHello\u{1b}[0m""#);
    }

    #[test]
    fn builds_styled_text() {
        let it = try_build_styled_text(&parse(&[
            "Hi",
            "--fg",
            "bright-green",
            "-a",
            "bold",
            "-a",
            "bold",
        ]))
        .unwrap();
        assert_eq2!(
            it,
            styled_text("Hi").fg_color(Palette4::BrightGreen).bold(true)
        );
    }

    #[test]
    fn unknown_attribute_is_an_error() {
        let report = run(&parse(&["Hello", "-a", "sparkle"])).unwrap_err();
        assert_eq2!(
            report.downcast_ref::<StyledTextError>(),
            Some(&StyledTextError::UnknownAttribute {
                input: "sparkle".into()
            })
        );
    }

    #[test]
    fn bad_colours_are_errors() {
        let report = run(&parse(&["Hello", "--fg", "mauve"])).unwrap_err();
        assert_eq2!(
            report.downcast_ref::<StyledTextError>(),
            Some(&StyledTextError::InvalidColourSpec {
                input: "mauve".into()
            })
        );

        let report = run(&parse(&["Hello", "--bg", "#12345"])).unwrap_err();
        assert_eq2!(
            report.downcast_ref::<StyledTextError>(),
            Some(&StyledTextError::InvalidHexColor {
                input: "#12345".into()
            })
        );
    }
}
