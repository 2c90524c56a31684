// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Some terminals (older Windows consoles) print SGR sequences as literal text until
//! virtual terminal processing is switched on for the process. [`enable_ansi_rendering`]
//! does that once. It is never called by the rest of this crate, and it has no effect on
//! the strings that [`crate::StyledText`] produces. Call it at the top of `main()`.

use std::sync::OnceLock;

/// Outcome of [`enable_ansi_rendering`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiRendering {
    /// The terminal interprets SGR sequences.
    Enabled,
    /// The console could not be switched into virtual terminal mode. Styled text will
    /// show up with its escape sequences printed literally.
    Unavailable,
}

impl AnsiRendering {
    #[must_use]
    pub const fn is_enabled(self) -> bool { matches!(self, AnsiRendering::Enabled) }
}

static ANSI_RENDERING: OnceLock<AnsiRendering> = OnceLock::new();

/// Switch the terminal into a mode where it interprets SGR sequences. Only the first
/// call does any work; subsequent calls (from any thread) return the same result.
///
/// On non Windows platforms this has no side effects and always returns
/// [`AnsiRendering::Enabled`].
pub fn enable_ansi_rendering() -> AnsiRendering {
    *ANSI_RENDERING.get_or_init(|| {
        let it = platform::enable();
        tracing::debug!(message = "enable_ansi_rendering", result = ?it);
        it
    })
}

#[cfg(windows)]
mod platform {
    use super::AnsiRendering;

    /// Crossterm sets `ENABLE_VIRTUAL_TERMINAL_PROCESSING` on the console output handle
    /// as part of this check.
    pub fn enable() -> AnsiRendering {
        if crossterm::ansi_support::supports_ansi() {
            AnsiRendering::Enabled
        } else {
            AnsiRendering::Unavailable
        }
    }
}

#[cfg(not(windows))]
mod platform {
    use super::AnsiRendering;

    pub fn enable() -> AnsiRendering { AnsiRendering::Enabled }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Palette4, assert_eq2, styled_text};

    #[test]
    fn is_idempotent() {
        let first = enable_ansi_rendering();
        let second = enable_ansi_rendering();
        assert_eq2!(first, second);
        assert_eq2!(ANSI_RENDERING.get().copied(), Some(first));
    }

    #[cfg(not(windows))]
    #[test]
    fn always_enabled_off_windows() {
        assert!(enable_ansi_rendering().is_enabled());
    }

    #[test]
    fn does_not_change_output() {
        let before = styled_text("Hello").fg_color(Palette4::Black).into_rendered();
        _ = enable_ansi_rendering();
        let after = styled_text("Hello").fg_color(Palette4::Black).into_rendered();
        assert_eq2!(before, after);
    }
}
