#![forbid(unsafe_code)]

//! boxtree demo
//!
//! Prints a small expression tree using the environment configuration.
//!
//! # Running
//!
//! ```sh
//! cargo run -p boxtree-harness --bin boxtree-demo
//! BOXTREE_BORDER=1 BOXTREE_COLOR=light_blue cargo run -p boxtree-harness
//! BOXTREE_LOG=boxtree=debug,boxtree_render=trace cargo run -p boxtree-harness
//! ```
//!
//! # Environment
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `BOXTREE_BORDER` | Frame every node |
//! | `BOXTREE_COLOR` | Box background (`none`, `red`, ..., `gray`) |
//! | `BOXTREE_ESCAPE_NEWLINE` | Show newlines as `\n` |
//! | `BOXTREE_MAX_DEPTH` | Depth cutoff (negative = unlimited) |
//! | `BOXTREE_TRIM` | Value truncation (negative = unlimited) |
//! | `NO_COLOR` | Disable color |
//! | `BOXTREE_LOG` | Log filter, written to stderr |

use std::process::ExitCode;

use boxtree::prelude::*;
use boxtree_harness::sample::{ExprSource, sample};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BOXTREE_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> boxtree::Result<()> {
    let config = RenderConfig::from_env()?;
    info!(
        border = config.border(),
        color = %config.color(),
        max_depth = %config.max_depth(),
        trim = %config.trim(),
        "demo configuration"
    );

    let expr = sample();
    PrettyTree::from_source(ExprSource)
        .with_config(config)
        .print(&&expr)
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "demo failed");
            eprintln!("boxtree-demo: {err}");
            ExitCode::FAILURE
        }
    }
}
