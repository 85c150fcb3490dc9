//! Stylesheet normalization: comment removal, whitespace collapsing and
//! one-rule-block-per-line output.
//!
//! The transform is best-effort text rewriting. Malformed stylesheets are not
//! detected or rejected; see [`stages`] for the known blind spots.

use std::{fs, io, path::PathBuf};

use log::{debug, info, trace};

use crate::config::{NormalizeConfig, Nesting};
use crate::errors::{StyleKitError, StyleKitResult};

pub mod blocks;
pub mod stages;

pub use blocks::split_into_blocks;
pub use stages::{
    collapse_blank_lines, collapse_punctuation_whitespace, strip_comments, trim_line_edges,
};

/// Outcome of [`normalize_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeReport {
    pub output_path: PathBuf,
    pub blocks: usize,
}

/// Normalizes `css` with the default flat brace model.
pub fn normalize(css: &str) -> String {
    normalize_with(css, Nesting::Flat)
}

/// Runs the full pipeline and renders each block followed by `\n`.
pub fn normalize_with(css: &str, nesting: Nesting) -> String {
    normalize_to_blocks(css, nesting)
        .into_iter()
        .map(|block| block + "\n")
        .collect()
}

/// Runs the full pipeline and returns the blocks without line terminators.
pub fn normalize_to_blocks(css: &str, nesting: Nesting) -> Vec<String> {
    trace!("normalize: input {} bytes", css.len());
    let text = strip_comments(css);
    trace!("strip_comments: {} bytes", text.len());
    let text = collapse_punctuation_whitespace(&text);
    trace!("collapse_punctuation_whitespace: {} bytes", text.len());
    let text = collapse_blank_lines(&text);
    let text = trim_line_edges(&text);
    let blocks = split_into_blocks(text.trim(), nesting);
    debug!("normalize: {} bytes -> {} blocks ({:?})", css.len(), blocks.len(), nesting);
    blocks
}

/// Reads the configured stylesheet, normalizes it and writes the result.
///
/// A missing input fails with [`StyleKitError::InputNotFound`] before the
/// output is touched.
pub fn normalize_file(config: &NormalizeConfig) -> StyleKitResult<NormalizeReport> {
    let input = &config.input_path;
    let css = fs::read_to_string(input).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StyleKitError::InputNotFound {
            path: input.clone(),
        },
        _ => StyleKitError::read(input, e),
    })?;
    info!("read {} ({} bytes)", input.display(), css.len());

    let blocks = normalize_to_blocks(&css, config.nesting);
    let rendered: String = blocks.iter().map(|block| format!("{block}\n")).collect();

    fs::write(&config.output_path, rendered)
        .map_err(|e| StyleKitError::write(&config.output_path, e))?;
    info!(
        "wrote {} blocks to {}",
        blocks.len(),
        config.output_path.display()
    );

    Ok(NormalizeReport {
        output_path: config.output_path.clone(),
        blocks: blocks.len(),
    })
}
