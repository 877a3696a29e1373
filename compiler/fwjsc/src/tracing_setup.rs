//! Tracing subscriber setup.
//!
//! Off unless `FWJS_LOG` is set; its value is an `EnvFilter` directive such as
//! `fwjs_eval=trace`. `FWJS_LOG_TREE=1` renders spans as an indented tree.
//! Logs go to stderr, leaving stdout to `print`.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(directives) = std::env::var("FWJS_LOG") else {
            return;
        };
        let filter = EnvFilter::new(directives);

        if std::env::var("FWJS_LOG_TREE").is_ok_and(|v| v == "1") {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
