//! Stylekit Error Handling
//!
//! One error enum for both tools. Every variant carries a `miette` code and,
//! where useful, help text; the CLI renders them through `miette::Report`.

use std::{io, path::PathBuf};

use miette::{Diagnostic, Report};
use thiserror::Error;

/// Result alias used across the crate.
pub type StyleKitResult<T> = Result<T, StyleKitError>;

/// Every failure mode of the normalizer and the bundler.
#[derive(Debug, Error, Diagnostic)]
pub enum StyleKitError {
    /// The stylesheet to normalize does not exist. Raised before any write.
    #[error("{} not found in current directory.", .path.display())]
    #[diagnostic(
        code(stylekit::input_not_found),
        help("run from the directory containing the stylesheet, or pass --input <path>")
    )]
    InputNotFound { path: PathBuf },

    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(stylekit::io::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    #[diagnostic(code(stylekit::io::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk {}: {message}", .root.display())]
    #[diagnostic(code(stylekit::walk))]
    Walk { root: PathBuf, message: String },

    #[error("no clipboard command available (tried {tried})")]
    #[diagnostic(
        code(stylekit::clipboard),
        help("install one of the listed tools, or use --publish stdout")
    )]
    ClipboardUnavailable { tried: String },

    #[error("failed to publish to {target}")]
    #[diagnostic(code(stylekit::publish))]
    Publish {
        target: String,
        #[source]
        source: io::Error,
    },
}

impl StyleKitError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StyleKitError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StyleKitError::Write {
            path: path.into(),
            source,
        }
    }
}

/// Renders an error with its diagnostic decoration on stderr.
pub fn print_error(error: StyleKitError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}
