//! Explicit configuration for both tools.
//!
//! The defaults reproduce the historical fixed-filename behaviour; the CLI
//! overrides individual fields from its arguments.

use std::path::PathBuf;

/// How closing braces of nested blocks are treated when splitting into lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Nesting {
    /// Every `}` ends a line, including those of nested blocks.
    #[default]
    Flat,
    /// Only a `}` that returns brace depth to zero ends a line.
    Preserve,
}

/// Where the bundle text is published besides the bundle file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PublishTarget {
    #[default]
    Clipboard,
    Stdout,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub nesting: Nesting,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("App.css"),
            output_path: PathBuf::from("App_single_line.css"),
            nesting: Nesting::Flat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectConfig {
    /// Base directory; bundle headers are relative to it.
    pub root: PathBuf,
    /// Extensions without the leading dot.
    pub extensions: Vec<String>,
    /// Subdirectories of `root` that are walked recursively.
    pub recursive_dirs: Vec<PathBuf>,
    pub output_path: PathBuf,
    pub publish: PublishTarget,
}

impl CollectConfig {
    pub const DEFAULT_OUTPUT: &'static str = "jsx_contents.txt";

    /// Default settings rooted at `root`.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            output_path: root.join(Self::DEFAULT_OUTPUT),
            root,
            extensions: vec!["jsx".to_string(), "css".to_string()],
            recursive_dirs: vec![PathBuf::from("components")],
            publish: PublishTarget::Clipboard,
        }
    }

    /// True when `file_name` ends in `.<ext>` for one of the configured extensions.
    pub fn matches_extension(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| {
            let ext = ext.trim_start_matches('.');
            file_name.len() > ext.len()
                && file_name.ends_with(ext)
                && file_name[..file_name.len() - ext.len()].ends_with('.')
        })
    }
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self::rooted_at(".")
    }
}
