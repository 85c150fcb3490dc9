//! Command-line arguments for the two binaries.
//!
//! Every option has a default, so both tools run with no arguments at all.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{CollectConfig, Nesting, NormalizeConfig, PublishTarget};

/// Arguments for `css-single-line`.
#[derive(Debug, Parser)]
#[command(
    name = "css-single-line",
    version,
    about = "Strip comments and whitespace from a stylesheet and write one rule block per line."
)]
pub struct CssArgs {
    /// Stylesheet to read.
    #[arg(short, long, default_value = "App.css")]
    pub input: PathBuf,

    /// File to write the normalized stylesheet to.
    #[arg(short, long, default_value = "App_single_line.css")]
    pub output: PathBuf,

    /// How closing braces of nested blocks (media queries, keyframes) split lines.
    #[arg(long, value_enum, default_value_t = Nesting::Flat)]
    pub nesting: Nesting,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CssArgs {
    pub fn to_config(&self) -> NormalizeConfig {
        NormalizeConfig {
            input_path: self.input.clone(),
            output_path: self.output.clone(),
            nesting: self.nesting,
        }
    }
}

/// Arguments for `collect-sources`.
#[derive(Debug, Parser)]
#[command(
    name = "collect-sources",
    version,
    about = "Bundle component and stylesheet sources into one text file and copy it to the clipboard."
)]
pub struct CollectArgs {
    /// Directory to collect from; bundle headers are relative to it.
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// File extension to include (repeatable).
    #[arg(short = 'e', long = "ext", value_name = "EXT", default_values = ["jsx", "css"])]
    pub extensions: Vec<String>,

    /// Subdirectory of the root to walk recursively (repeatable).
    #[arg(short = 'd', long = "dir", value_name = "DIR", default_values = ["components"])]
    pub dirs: Vec<PathBuf>,

    /// Bundle file. Defaults to jsx_contents.txt inside the root.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Where to publish the bundle text besides the bundle file.
    #[arg(short, long, value_enum, default_value_t = PublishTarget::Clipboard)]
    pub publish: PublishTarget,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CollectArgs {
    pub fn to_config(&self) -> CollectConfig {
        let mut config = CollectConfig::rooted_at(&self.root);
        config.extensions = self.extensions.clone();
        config.recursive_dirs = self.dirs.clone();
        config.publish = self.publish;
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_defaults_match_library_defaults() {
        let args = CssArgs::parse_from(["css-single-line"]);
        assert_eq!(args.to_config(), NormalizeConfig::default());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn css_overrides() {
        let args = CssArgs::parse_from([
            "css-single-line",
            "--input",
            "theme.css",
            "-o",
            "theme.min.css",
            "--nesting",
            "preserve",
            "-vv",
        ]);
        let config = args.to_config();
        assert_eq!(config.input_path, PathBuf::from("theme.css"));
        assert_eq!(config.output_path, PathBuf::from("theme.min.css"));
        assert_eq!(config.nesting, Nesting::Preserve);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn collect_defaults_match_library_defaults() {
        let args = CollectArgs::parse_from(["collect-sources"]);
        assert_eq!(args.to_config(), CollectConfig::default());
    }

    #[test]
    fn collect_repeatable_options_replace_defaults() {
        let args = CollectArgs::parse_from([
            "collect-sources",
            "--root",
            "web",
            "--ext",
            "tsx",
            "--ext",
            "scss",
            "--dir",
            "pages",
            "--publish",
            "stdout",
        ]);
        let config = args.to_config();
        assert_eq!(config.extensions, vec!["tsx", "scss"]);
        assert_eq!(config.recursive_dirs, vec![PathBuf::from("pages")]);
        assert_eq!(config.output_path, PathBuf::from("web/jsx_contents.txt"));
        assert_eq!(config.publish, PublishTarget::Stdout);
    }

    #[test]
    fn command_definitions_are_valid() {
        use clap::CommandFactory;
        CssArgs::command().debug_assert();
        CollectArgs::command().debug_assert();
    }
}
