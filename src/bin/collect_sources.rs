// Bundles .jsx/.css sources into jsx_contents.txt and copies the text to the clipboard.
// Usage: collect-sources [--root <dir>] [--ext <ext>]... [--dir <dir>]... [--publish clipboard|stdout|none]

fn main() {
    stylekit::cli::run_collect_sources();
}
