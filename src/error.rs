use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the packaging steps.
///
/// Only fatal conditions appear here: a missing copy source and an absent
/// outdir at empty-time are silently skipped, never reported. Every variant
/// aborts the step it occurred in and bubbles unchanged to the caller.
#[derive(Debug, Error)]
pub enum PackError {
    /// The source manifest is missing or unreadable.
    #[error("failed to read manifest {}", path.display())]
    ManifestRead { path: PathBuf, source: io::Error },

    /// The decoded manifest content is not a valid JSON object.
    #[error("failed to parse manifest {}", path.display())]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The compiled manifest (or its outdir) could not be written.
    #[error("failed to write manifest {}", path.display())]
    ManifestWrite { path: PathBuf, source: io::Error },

    /// A configured copy entry could not be copied into the outdir.
    #[error("failed to copy {} to {}", src.display(), dest.display())]
    Copy {
        src: PathBuf,
        dest: PathBuf,
        source: io::Error,
    },

    /// An outdir entry could not be removed while emptying.
    #[error("failed to remove {}", path.display())]
    Remove { path: PathBuf, source: io::Error },

    /// The working directory is needed to default `root` but cannot be read.
    #[error("failed to resolve the current working directory")]
    WorkingDir { source: io::Error },
}
