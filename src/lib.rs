//! trisum - paste any text, get three citation-scored summaries.
//!
//! The crate is two units behind one seam:
//! 1. A Summarization Client that builds a prompt, makes a single Gemini
//!    `generateContent` call, and decodes the fence-wrapped JSON reply
//!    into exactly three validated summary records
//! 2. A Presentation Shell that owns the display state machine
//!    (idle/loading/error/results) and drives the injected client
//!
//! # Example
//!
//! ```no_run
//! use trisum::ai::GeminiClient;
//! use trisum::core::{AppConfig, Language};
//! use trisum::shell::Shell;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     trisum::setup_logging();
//!
//!     let config = AppConfig::from_env();
//!     let client = GeminiClient::from_config(&config)?;
//!     let mut shell = Shell::new(client, Language::English);
//!
//!     if let Some(pending) = shell.submit("Schwannomatosis is a rare genetic disorder.") {
//!         let outcome = shell.run(&pending).await;
//!         shell.settle(pending, outcome);
//!     }
//!     println!("{}", trisum::views::render_state(shell.state()));
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod shell;
pub mod views;

/// Configure logging to stderr, filtered by `RUST_LOG`.
///
/// Rendered output goes to stdout, so the subscriber writes to stderr to
/// keep the two apart. Defaults to `warn` when `RUST_LOG` is unset. Call
/// once at startup.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
