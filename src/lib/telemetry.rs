//! Telemetry initialization and launch span helpers.

use std::{io::IsTerminal, time::Instant};

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset; keeps the child's inherited stderr clean.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span recording the lifetime of one launched child.
pub struct LaunchSpan {
    span: Span,
    started_at: Instant,
}

impl LaunchSpan {
    pub fn start(program: &str, arg_count: usize) -> Self {
        let span = info_span!(
            target: "jvm_wrapper::launch",
            "launch",
            program,
            arg_count
        );
        Self {
            span,
            started_at: Instant::now(),
        }
    }

    /// Close the span while recording how the child ended.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "jvm_wrapper::launch",
            status,
            exit_code,
            elapsed_ms,
            "Child process finished"
        );
    }
}
