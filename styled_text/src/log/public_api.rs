// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;

use super::TracingConfig;
use crate::ok;

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Docs for [Global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
/// - Configure this using the [`mod@super::tracing_config_options`] module (which
///   converts any number of arguments into [`Into<TracingConfig>`]).
///
/// Logging is **DISABLED** by **default**.
///
/// If you don't call this function w/ a value other than
/// [`tracing_core::LevelFilter::OFF`], then logging won't be enabled. It won't matter if
/// you use the [`tracing::info!`], [`tracing::debug!`], etc. macros.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.is_disabled() {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads.
/// - This is great for tests.
/// - Docs for [Thread local tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
///
/// Logging is **DISABLED** by **default**, and `Ok(None)` is returned for
/// [`tracing_core::LevelFilter::OFF`]. Otherwise, hold on to the returned guard for as
/// long as logging should stay on for this thread.
///
/// # Errors
///
/// This never fails today. The [`miette::Result`] keeps the signature the same as
/// [`try_initialize_logging_global`].
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.is_disabled() {
        return ok!(None);
    }

    ok!(Some(it.install_thread_local()))
}
