//! Properties every normalized stylesheet must satisfy, checked over a small
//! corpus of realistic and awkward inputs.

use stylekit::config::{Nesting, NormalizeConfig};
use stylekit::stylesheet::{normalize, normalize_file, normalize_with};
use stylekit::StyleKitError;

const CORPUS: &[&str] = &[
    "",
    "   \n\n\t ",
    "/* only a comment */",
    ".a { color : red ; }",
    ".a{color:red;}\n\n\n.b{color:blue;}",
    "/* multi\n   line { comment } ; : , */\n.nav ,\n.nav-item {\n  margin : 0 auto ;\n  font-family : \"Inter\" , sans-serif ;\n}\n",
    "@media (max-width: 768px) {\n  .sidebar { display: none; }\n  .main { padding: 0 1rem; }\n}\n",
    "@keyframes spin {\n  from { transform: rotate(0deg); }\n  to { transform: rotate(360deg); }\n}\n",
    ".btn:hover , .btn:focus-visible {outline:2px solid #3b82f6}\n\n\n\n.x{}",
    ".toast { /* inline */ opacity : 0.9 ; } /* trailing */",
    "}} stray { closing }",
    "\r\n.a {\r\n  color: red;\r\n}\r\n",
    ".a{color:red;}//**/*x*/",
    ".b{x:y;} //**/**/ .c{z:w;}",
];

fn has_space_next_to_punctuation(text: &str) -> bool {
    ['{', '}', ';', ':', ','].iter().any(|p| {
        text.contains(&format!(" {p}")) || text.contains(&format!("{p} "))
    })
}

#[test]
fn no_comment_markers_survive() {
    for css in CORPUS {
        let out = normalize(css);
        assert!(!out.contains("/*") && !out.contains("*/"), "{css:?} -> {out:?}");
        for hidden in ["multi", "inline", "trailing", "only a comment"] {
            assert!(!out.contains(hidden), "{css:?} -> {out:?}");
        }
    }
}

#[test]
fn no_spaces_around_structural_punctuation() {
    for css in CORPUS {
        for nesting in [Nesting::Flat, Nesting::Preserve] {
            let out = normalize_with(css, nesting);
            assert!(!has_space_next_to_punctuation(&out), "{css:?} -> {out:?}");
        }
    }
}

#[test]
fn normalizing_twice_changes_nothing() {
    for css in CORPUS {
        for nesting in [Nesting::Flat, Nesting::Preserve] {
            let once = normalize_with(css, nesting);
            let twice = normalize_with(&once, nesting);
            assert_eq!(once, twice, "input {css:?}");
        }
    }
}

#[test]
fn every_line_is_a_block() {
    for css in CORPUS {
        let out = normalize(css);
        assert!(out.is_empty() || out.ends_with("}\n"), "{css:?} -> {out:?}");
        for line in out.lines() {
            assert!(!line.is_empty());
            assert!(line.ends_with('}'), "{line:?}");
            assert_eq!(line.trim(), line);
        }
    }
}

#[test]
fn flat_lines_hold_exactly_one_closing_brace() {
    for css in CORPUS {
        for line in normalize(css).lines() {
            assert_eq!(line.matches('}').count(), 1, "{line:?}");
        }
    }
}

#[test]
fn documented_examples() {
    assert_eq!(normalize(".a { color : red ; }"), ".a{color:red;}\n");
    assert_eq!(
        normalize(".a{color:red;}\n\n\n.b{color:blue;}"),
        ".a{color:red;}\n.b{color:blue;}\n"
    );
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("/* x */"), "");
    assert_eq!(normalize(".a{color:red;}//**/*x*/"), ".a{color:red;}\n/}\n");
}

#[test]
fn brace_inside_string_ends_block_early() {
    // Text rewriting, not parsing: quoted braces still split.
    assert_eq!(
        normalize(".a::after { content: \"}\"; }"),
        ".a::after{content:\"}\n\";}\n"
    );
}

#[test]
fn file_round_trip_and_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let config = NormalizeConfig {
        input_path: dir.path().join("App.css"),
        output_path: dir.path().join("App_single_line.css"),
        nesting: Nesting::Flat,
    };

    match normalize_file(&config) {
        Err(StyleKitError::InputNotFound { path }) => assert_eq!(path, config.input_path),
        other => panic!("expected InputNotFound, got {other:?}"),
    }
    assert!(!config.output_path.exists());

    std::fs::write(&config.input_path, ".a { x : y }\n.b{}").unwrap();
    let report = normalize_file(&config).unwrap();
    assert_eq!(report.blocks, 2);
    assert_eq!(report.output_path, config.output_path);
    assert_eq!(
        std::fs::read_to_string(&config.output_path).unwrap(),
        ".a{x:y}\n.b{}\n"
    );
}
