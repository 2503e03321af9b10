//! Tracing subscriber for the CLI.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output on stderr.
///
/// Does nothing unless `RUST_LOG` or `SNIFF_LOG_TREE` is set. `RUST_LOG`
/// selects what is shown (`RUST_LOG=sniffc=debug,sniff_fixer=trace`);
/// `SNIFF_LOG_TREE` switches to indented per-file and per-pass spans.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = std::env::var("RUST_LOG").ok();
        let tree = std::env::var_os("SNIFF_LOG_TREE").is_some();
        if filter.is_none() && !tree {
            return;
        }
        let filter = match filter {
            Some(_) => EnvFilter::from_default_env(),
            None => EnvFilter::new("debug"),
        };

        if tree {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
