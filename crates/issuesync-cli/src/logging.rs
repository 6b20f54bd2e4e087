// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the issuesync CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only
//! issuesync issue list
//!
//! # Request timings and classification details
//! RUST_LOG=issuesync=debug issuesync issue list
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects between the quiet
/// and debug default filters.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = if verbose {
        "issuesync=debug,issuesync_core=debug,reqwest=warn"
    } else {
        "issuesync=warn,issuesync_core=warn,reqwest=error"
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
