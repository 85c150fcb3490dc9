// Flattens App.css into App_single_line.css, one rule block per line.
// Usage: css-single-line [--input <path>] [--output <path>] [--nesting flat|preserve]

fn main() {
    stylekit::cli::run_css_single_line();
}
