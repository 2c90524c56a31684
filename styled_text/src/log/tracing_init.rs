// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_target(false)
    };
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    display: DisplayPreference,
) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    // Shared configuration regardless of where logs are output to.
    let fmt_layer = create_fmt!();

    match display {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    }
}

mod install_impl {
    use super::*;

    impl TracingConfig {
        /// Set the global default subscriber. This can only succeed once per process.
        ///
        /// # Errors
        ///
        /// Returns an error if a global subscriber has already been set.
        pub fn install_global(self) -> miette::Result<()> {
            tracing_subscriber::registry()
                .with(create_display_layer(self.level_filter, self.display))
                .try_init()
                .into_diagnostic()
        }

        /// Set the subscriber for the current thread, until the returned guard is
        /// dropped.
        #[must_use]
        pub fn install_thread_local(self) -> dispatcher::DefaultGuard {
            tracing_subscriber::registry()
                .with(create_display_layer(self.level_filter, self.display))
                .set_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_thread_local_and_log() {
        let config: TracingConfig = LevelFilter::TRACE.into();
        let guard = config.install_thread_local();
        assert!(tracing::enabled!(tracing::Level::TRACE));
        tracing::trace!(message = "install_thread_local_and_log");
        drop(guard);
    }

    #[test]
    fn level_filter_is_applied() {
        let config: TracingConfig = LevelFilter::WARN.into();
        let _guard = config.install_thread_local();
        assert!(tracing::enabled!(tracing::Level::WARN));
        assert!(!tracing::enabled!(tracing::Level::DEBUG));
    }
}
