//! Splitting normalized text into one rule block per line.

use crate::config::Nesting;

/// Splits `css` into rule blocks, each ending in `}`.
///
/// Segments are trimmed and empty ones dropped, so a bare `}` never becomes a
/// block of its own. Trailing text without a closing brace still gets one.
pub fn split_into_blocks(css: &str, nesting: Nesting) -> Vec<String> {
    match nesting {
        Nesting::Flat => split_flat(css),
        Nesting::Preserve => split_top_level(css),
    }
}

fn split_flat(css: &str) -> Vec<String> {
    css.split('}')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| format!("{segment}}}"))
        .collect()
}

/// Splits only where brace depth drops back to zero. A `}` with no matching
/// `{` is treated as closing at depth zero.
fn split_top_level(css: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in css.chars() {
        match ch {
            '{' => {
                depth += 1;
                current.push(ch);
            }
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    push_block(&mut blocks, &current);
                    current.clear();
                } else {
                    current.push(ch);
                }
            }
            _ => current.push(ch),
        }
    }
    push_block(&mut blocks, &current);
    blocks
}

fn push_block(blocks: &mut Vec<String>, body: &str) {
    let body = body.trim();
    if !body.is_empty() {
        blocks.push(format!("{body}}}"));
    }
}
