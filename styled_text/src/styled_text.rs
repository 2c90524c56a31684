// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::OnceCell,
          fmt::{Display, Formatter, Result}};

use crate::{Attribute, AttributeSet, Colour, ColourValue, Layer, Palette4, RESET,
            compose};

/// Text plus the styling to apply to it. This is the main type in this crate.
///
/// - It is created using [`styled_text()`] (or one of the other constructor functions
///   like [`bold()`]), and then styled using the consuming builder methods, eg:
///   [`Self::fg_color()`], [`Self::italic()`].
/// - If you have a `&mut` to one already, use the `set_*` methods, eg:
///   [`Self::set_bg_color()`], [`Self::set_attrib()`]. These return `&mut Self` so
///   they can be chained too.
/// - [`Self::render()`] produces the escape sequence wrapped text. The result is
///   memoized until the next setter call, so rendering the same value in a loop
///   doesn't compose the command each time.
///
/// # Example usage:
///
/// ```
/// use r3bl_styled_text::{Palette4, styled_text};
///
/// let mut it = styled_text("Hello").bg_color(200);
/// assert_eq!(it.render(), "\x1b[48;5;200mHello\x1b[0m");
///
/// it.set_fg_color((10, 20, 30)).set_bg_color(Palette4::Black);
/// assert_eq!(it.render(), "\x1b[38;2;10;20;30;40mHello\x1b[0m");
///
/// println!("{it}");
/// ```
///
/// # Rendering
///
/// 1. Plain text (no colors and no attributes) renders as the raw text, with no escape
///    sequences and no reset suffix.
/// 2. Otherwise the result is `compose(fg, bg, attribs) + text + RESET`, see
///    [`compose()`] and [`RESET`].
///
/// A [`StyledText`] is not [`Sync`], since rendering through a shared reference fills
/// in the cache. Share it across threads behind a lock, or send a clone.
#[derive(Debug, Clone)]
pub struct StyledText {
    text: String,
    fg: ColourValue,
    bg: ColourValue,
    attribs: AttributeSet,
    cache: OnceCell<String>,
}

/// Start building a [`StyledText`] with no colors and no attributes.
pub fn styled_text(text: impl Into<String>) -> StyledText { StyledText::new(text) }

pub fn fg_palette(text: impl Into<String>, code: Palette4) -> StyledText {
    styled_text(text).fg_color(code)
}

pub fn bold(text: impl Into<String>) -> StyledText { styled_text(text).bold(true) }

pub fn dim(text: impl Into<String>) -> StyledText { styled_text(text).dim(true) }

pub fn italic(text: impl Into<String>) -> StyledText { styled_text(text).italic(true) }

pub fn underline(text: impl Into<String>) -> StyledText {
    styled_text(text).underline(true)
}

pub fn strike(text: impl Into<String>) -> StyledText { styled_text(text).strike(true) }

mod constructor_impl {
    use super::*;

    impl StyledText {
        pub fn new(text: impl Into<String>) -> Self {
            Self {
                text: text.into(),
                fg: ColourValue::none(Layer::Foreground),
                bg: ColourValue::none(Layer::Background),
                attribs: AttributeSet::new(),
                cache: OnceCell::new(),
            }
        }
    }

    impl Default for StyledText {
        fn default() -> Self { Self::new(String::new()) }
    }

    impl From<&str> for StyledText {
        fn from(text: &str) -> Self { Self::new(text) }
    }

    impl From<String> for StyledText {
        fn from(text: String) -> Self { Self::new(text) }
    }
}

/// Consuming builder methods. Each one drops any memoized render.
mod builder_impl {
    use super::*;

    impl StyledText {
        #[must_use]
        pub fn fg_color(mut self, arg_colour: impl Into<Colour>) -> Self {
            self.set_fg_color(arg_colour);
            self
        }

        #[must_use]
        pub fn bg_color(mut self, arg_colour: impl Into<Colour>) -> Self {
            self.set_bg_color(arg_colour);
            self
        }

        /// Turn one attribute on or off.
        #[must_use]
        pub fn attrib(mut self, attrib: Attribute, value: bool) -> Self {
            self.set_attrib(attrib, value);
            self
        }

        /// Replace all the attributes at once.
        #[must_use]
        pub fn attribs(mut self, attribs: impl Into<AttributeSet>) -> Self {
            self.set_attribs(attribs);
            self
        }

        #[must_use]
        pub fn bold(self, value: bool) -> Self { self.attrib(Attribute::Bold, value) }

        #[must_use]
        pub fn dim(self, value: bool) -> Self { self.attrib(Attribute::Dim, value) }

        #[must_use]
        pub fn italic(self, value: bool) -> Self { self.attrib(Attribute::Italic, value) }

        #[must_use]
        pub fn underline(self, value: bool) -> Self {
            self.attrib(Attribute::Underline, value)
        }

        #[must_use]
        pub fn slow_blink(self, value: bool) -> Self {
            self.attrib(Attribute::SlowBlink, value)
        }

        #[must_use]
        pub fn fast_blink(self, value: bool) -> Self {
            self.attrib(Attribute::FastBlink, value)
        }

        #[must_use]
        pub fn invert(self, value: bool) -> Self { self.attrib(Attribute::Invert, value) }

        #[must_use]
        pub fn strike(self, value: bool) -> Self { self.attrib(Attribute::Strike, value) }
    }
}

mod mutator_impl {
    use super::*;

    impl StyledText {
        pub fn set_fg_color(&mut self, arg_colour: impl Into<Colour>) -> &mut Self {
            self.fg = ColourValue::new(arg_colour.into(), Layer::Foreground);
            self.invalidate()
        }

        pub fn set_bg_color(&mut self, arg_colour: impl Into<Colour>) -> &mut Self {
            self.bg = ColourValue::new(arg_colour.into(), Layer::Background);
            self.invalidate()
        }

        pub fn set_attrib(&mut self, attrib: Attribute, value: bool) -> &mut Self {
            self.attribs.set(attrib, value);
            self.invalidate()
        }

        pub fn set_attribs(&mut self, attribs: impl Into<AttributeSet>) -> &mut Self {
            self.attribs = attribs.into();
            self.invalidate()
        }

        fn invalidate(&mut self) -> &mut Self {
            _ = self.cache.take();
            self
        }
    }
}

mod render_impl {
    use super::*;

    impl StyledText {
        /// Returns the raw text if there is no styling. Otherwise returns the memoized
        /// render, composing it first if a setter has been called since the last
        /// render. Calling this repeatedly returns the same buffer.
        pub fn render(&self) -> &str {
            if self.is_plain() {
                return &self.text;
            }
            self.cache.get_or_init(|| self.compose_rendered())
        }

        /// Returns `true` if the next call to [`Self::render()`] will not compose.
        /// Plain text never populates the cache.
        #[must_use]
        pub fn is_render_cached(&self) -> bool { self.cache.get().is_some() }

        /// Consume this and return the rendered [`String`], reusing the memoized render
        /// if there is one.
        #[must_use]
        pub fn into_rendered(mut self) -> String {
            if self.is_plain() {
                return self.text;
            }
            match self.cache.take() {
                Some(rendered) => rendered,
                None => self.compose_rendered(),
            }
        }

        pub fn print(&self) { print!("{}", self.render()); }

        pub fn println(&self) { println!("{}", self.render()); }

        fn compose_rendered(&self) -> String {
            tracing::trace!(
                message = "StyledText render cache miss",
                fg = ?self.fg.colour(),
                bg = ?self.bg.colour(),
                attribs = self.attribs.bits(),
            );
            let mut acc = compose(&self.fg, &self.bg, &self.attribs);
            acc.reserve(self.text.len() + RESET.len());
            acc.push_str(&self.text);
            acc.push_str(RESET);
            acc
        }
    }

    impl Display for StyledText {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(self.render()) }
    }
}

mod accessor_impl {
    use super::*;

    impl StyledText {
        #[must_use]
        pub fn raw_text(&self) -> &str { &self.text }

        #[must_use]
        pub fn foreground(&self) -> ColourValue { self.fg }

        #[must_use]
        pub fn background(&self) -> ColourValue { self.bg }

        #[must_use]
        pub fn attributes(&self) -> AttributeSet { self.attribs }

        /// No colors and no attributes.
        #[must_use]
        pub fn is_plain(&self) -> bool {
            self.fg.is_none() && self.bg.is_none() && self.attribs.is_none()
        }
    }
}

/// The memoized render is derived from the other fields, so it doesn't take part in
/// equality.
mod eq_impl {
    use super::*;

    impl PartialEq for StyledText {
        fn eq(&self, other: &Self) -> bool {
            self.text == other.text
                && self.fg == other.fg
                && self.bg == other.bg
                && self.attribs == other.attribs
        }
    }

    impl Eq for StyledText {}
}
