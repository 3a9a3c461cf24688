pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod ingest;
pub mod state;

use tracing_subscriber::{fmt, EnvFilter};

pub use error::ClientError;
pub use events::{GalleryView, Intent};
pub use ingest::FileCandidate;
pub use state::Gallery;

/// Install the global tracing subscriber. `RUST_LOG` wins over `fallback`.
pub fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
