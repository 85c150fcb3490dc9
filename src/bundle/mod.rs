//! Source bundling: gathers component and stylesheet files into one text
//! blob with a header per file, for pasting into another tool.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use log::info;

use crate::config::CollectConfig;
use crate::errors::{StyleKitError, StyleKitResult};
use crate::publish::Publisher;

pub mod discover;

pub use discover::discover_files;

/// Line separating a file header from its contents, and closing each file.
pub const DELIMITER: &str = "///";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    /// Relative paths of the bundled files, `/`-separated, in bundle order.
    pub files: Vec<String>,
    pub text: String,
}

impl Bundle {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Reads `files` and renders them in order, each as
/// `<relative-path>:`, a delimiter line, the contents, and a closing delimiter.
pub fn render_bundle(root: &Path, files: &[PathBuf]) -> StyleKitResult<Bundle> {
    let mut text = String::new();
    let mut names = Vec::with_capacity(files.len());

    for path in files {
        let contents = fs::read_to_string(path).map_err(|e| StyleKitError::read(path, e))?;
        let name = relative_name(root, path);

        text.push_str(&format!("{name}:\n{DELIMITER}\n"));
        text.push_str(&contents);
        text.push_str(&format!("\n{DELIMITER}\n\n"));
        names.push(name);
    }

    Ok(Bundle { files: names, text })
}

/// Discovers, renders and writes the bundle, then hands its text to `publisher`.
pub fn collect_bundle(
    config: &CollectConfig,
    publisher: &mut dyn Publisher,
) -> StyleKitResult<Bundle> {
    let files = discover_files(config)?;
    let bundle = render_bundle(&config.root, &files)?;

    fs::write(&config.output_path, &bundle.text)
        .map_err(|e| StyleKitError::write(&config.output_path, e))?;
    info!(
        "wrote {} files ({} bytes) to {}",
        bundle.len(),
        bundle.text.len(),
        config.output_path.display()
    );

    publisher.publish(&bundle.text)?;
    info!("published bundle to {}", publisher.describe());
    Ok(bundle)
}

/// `path` relative to `root`, joined with `/` on every platform.
fn relative_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
