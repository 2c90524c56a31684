// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use r3bl_styled_text::{Attribute, AttributeSet, Colour, ColourKind, ColourValue, Layer,
                       Palette4, RESET, RgbValue, StyledText, assert_eq2, compose,
                       styled_text};
use test_case::test_case;

#[test]
fn test_plain_text_has_no_escapes() {
    assert_eq2!(styled_text("Hello").render(), "Hello");
    assert_eq2!(StyledText::from("").render(), "");
}

#[test_case(styled_text("Hello").fg_color(Palette4::Black), "\x1b[30mHello\x1b[0m")]
#[test_case(
    styled_text("Hello").bold(true).strike(true).bold(false).italic(true),
    "\x1b[3;9mHello\x1b[0m"
)]
#[test_case(styled_text("Hello").bg_color(200), "\x1b[48;5;200mHello\x1b[0m")]
#[test_case(styled_text("Hello").fg_color((10, 20, 30)), "\x1b[38;2;10;20;30mHello\x1b[0m")]
fn test_end_to_end(it: StyledText, expected: &str) {
    assert_eq2!(it.render(), expected);
    assert_eq2!(it.to_string(), expected);
}

#[test]
fn test_render_equals_compose_plus_text_plus_reset() {
    let fg = ColourValue::fg(Palette4::BrightMagenta);
    let bg = ColourValue::bg(RgbValue::from_u8(0, 0, 0));
    let attribs = Attribute::Underline + Attribute::Dim;

    let it = styled_text("text")
        .fg_color(fg.colour())
        .bg_color(bg.colour())
        .attribs(attribs);

    let expected = format!("{}text{RESET}", compose(&fg, &bg, &attribs));
    assert_eq2!(it.render(), expected);
    assert_eq2!(it.render(), "\x1b[95;48;2;0;0;0;2;4mtext\x1b[0m");
}

#[test]
fn test_memoized_until_next_setter() {
    let mut it = styled_text("Hello").fg_color(Palette4::Yellow);

    let first: *const str = it.render();
    let second: *const str = it.render();
    assert!(std::ptr::eq(first, second));

    it.set_attrib(Attribute::Bold, true);
    assert!(!it.is_render_cached());
    assert_eq2!(it.render(), "\x1b[33;1mHello\x1b[0m");
    assert!(it.is_render_cached());
}

#[test]
fn test_mut_setters_chain() {
    let mut it = styled_text("Hello");
    it.set_fg_color(Palette4::Cyan)
        .set_bg_color(17)
        .set_attribs(AttributeSet::from(Attribute::Invert))
        .set_attrib(Attribute::SlowBlink, true);
    assert_eq2!(it.render(), "\x1b[36;48;5;17;5;7mHello\x1b[0m");
}

#[test]
fn test_colours_from_user_input() {
    let fg = Colour::from_str("#ff8000").unwrap();
    assert_eq2!(fg.kind(), ColourKind::Rgb);

    let it = styled_text("Hello")
        .fg_color(fg)
        .bg_color(Colour::from_str("blue").unwrap());
    assert_eq2!(it.foreground().layer(), Layer::Foreground);
    assert_eq2!(it.background().layer(), Layer::Background);
    assert_eq2!(it.render(), "\x1b[38;2;255;128;0;44mHello\x1b[0m");
}

#[test]
fn test_styled_text_moves_across_threads() {
    let it = styled_text("Hello").italic(true);
    _ = it.render();
    let handle = std::thread::spawn(move || it.into_rendered());
    assert_eq2!(handle.join().unwrap(), "\x1b[3mHello\x1b[0m");
}
