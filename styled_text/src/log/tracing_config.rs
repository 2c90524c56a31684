// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;

/// Configure the tracing logging to suit your needs. You can display the logs to
/// `stdout` or `stderr`, and set the log level.
///
/// Fields:
/// - `level_filter`: [`LevelFilter`] - The log level to use for tracing.
///   [`LevelFilter::OFF`] disables logging.
/// - `display`: [`DisplayPreference`] to choose where to write the logs.
///
/// Use the [`mod@tracing_config_options`] conversions to build one from a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub display: DisplayPreference,
}

/// Where log output goes. The `styled` binary writes its result to `stdout`, so logs
/// default to `stderr` to keep the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPreference {
    Stdout,
    #[default]
    Stderr,
}

impl TracingConfig {
    pub const DEFAULT_LEVEL_FILTER: LevelFilter = LevelFilter::DEBUG;

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_display(&self) -> DisplayPreference { self.display }

    #[must_use]
    pub fn is_disabled(&self) -> bool { self.level_filter == LevelFilter::OFF }
}

/// Logging is disabled by default.
impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::OFF,
            display: DisplayPreference::default(),
        }
    }
}

/// Any of these can be passed where an `impl Into<TracingConfig>` is expected:
///
/// ```
/// use r3bl_styled_text::log::{DisplayPreference, TracingConfig};
/// use tracing_core::LevelFilter;
///
/// let config_1: TracingConfig = tracing::Level::TRACE.into();
/// let config_2: TracingConfig = LevelFilter::INFO.into();
/// let config_3: TracingConfig = DisplayPreference::Stdout.into();
///
/// // Merge: the more verbose level wins, and the rhs display wins.
/// let it = config_2 + config_3;
/// assert_eq!(it.level_filter, LevelFilter::DEBUG);
/// assert_eq!(it.display, DisplayPreference::Stdout);
/// assert_eq!((config_1 + it).level_filter, LevelFilter::TRACE);
/// ```
pub mod tracing_config_options {
    use super::*;

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
    }

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                display: DisplayPreference::default(),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(display: DisplayPreference) -> Self {
            Self {
                level_filter: TracingConfig::DEFAULT_LEVEL_FILTER,
                display,
            }
        }
    }

    /// Merge two [`TracingConfig`] instances together. The more verbose level filter is
    /// kept, and the `rhs` display preference has higher specificity.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                display: rhs.display,
            }
        }
    }
}
