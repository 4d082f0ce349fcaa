use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::QuizError;

const DEFAULT_FILTER: &str = "quiz_review=info";

/// Sends `tracing` output to `path`. The filter comes from `RUST_LOG` when set.
///
/// The terminal belongs to the UI while the quiz runs, so nothing is logged
/// unless a file is given.
pub fn init(path: Option<&Path>) -> Result<(), QuizError> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| QuizError::Logging(err.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}
