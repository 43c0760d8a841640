//! Tracing subscriber setup for the CLI.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=lisc_eval=trace`. With `LISC_LOG_TREE=1` spans are rendered as
/// an indented tree instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        let result = if tree_output_requested() {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .try_init()
        };

        if let Err(err) = result {
            eprintln!("warning: could not install tracing subscriber: {err}");
        }
    });
}

fn tree_output_requested() -> bool {
    std::env::var("LISC_LOG_TREE").is_ok_and(|value| value == "1")
}
