//! Documents nested as deeply as the 60 000 byte input domain allows.
//!
//! `<b></b>` costs 7 bytes per level, so 8571 levels is the deepest valid
//! document that still fits the strict limit. Assertions compare strings and
//! counts only; comparing or debug-printing the forest itself would walk it
//! recursively.

use luna_core::{parse_with, render_outline, render_pretty, render_target, Forest, ParseOptions};

const DEPTH: usize = 60_000 / 7;

/// Levels of `<div>` that fit alongside one `<img />`.
const DIV_LEVELS: usize = (60_000 - 7) / 11;

/// `<b>` nested `levels` deep.
fn deep_b(levels: usize) -> String {
    format!("{}{}", "<b>".repeat(levels), "</b>".repeat(levels))
}

/// `<div>` nested `levels` deep with a single image at the bottom.
fn deep_div_with_img(levels: usize) -> String {
    format!("{}<img />{}", "<div>".repeat(levels), "</div>".repeat(levels))
}

fn parse_strict(html: &str) -> Forest {
    parse_with(html, &ParseOptions::strict()).unwrap()
}

// ============================================================================
// Parsing and statistics
// ============================================================================

#[test]
fn deepest_document_fits_strict_limit() {
    let html = deep_b(DEPTH);
    assert_eq!(html.len(), 59_997);

    let forest = parse_strict(&html);
    assert_eq!(forest.len(), 1);
    assert_eq!(forest.max_depth(), DEPTH);
    assert_eq!(forest.node_count(), DEPTH);
    assert_eq!(forest.leaf_count(), 0);
    assert_eq!(forest.container_count(), DEPTH);
}

#[test]
fn deep_subtree_depth_and_walk() {
    let forest = parse_strict(&deep_b(DEPTH));
    let root = &forest.roots()[0];
    assert_eq!(root.depth(), DEPTH);
    assert_eq!(root.node_count(), DEPTH);
    assert_eq!(root.walk().last().map(|(_, depth)| depth), Some(DEPTH - 1));
}

#[test]
fn deep_leaf_is_counted() {
    let levels = DIV_LEVELS;
    let forest = parse_strict(&deep_div_with_img(levels));
    assert_eq!(forest.max_depth(), levels + 1);
    assert_eq!(forest.leaf_count(), 1);
    assert_eq!(forest.container_count(), levels);
}

// ============================================================================
// Renderers
// ============================================================================

#[test]
fn deep_target_notation() {
    let forest = parse_strict(&deep_b(DEPTH));
    let expected = format!("{}{}", "B([".repeat(DEPTH), "])".repeat(DEPTH));
    assert_eq!(render_target(&forest), expected);
}

#[test]
fn deep_target_notation_with_leaf() {
    let levels = DIV_LEVELS;
    let forest = parse_strict(&deep_div_with_img(levels));
    let expected = format!("{}IMG({{}}){}", "DIV([".repeat(levels), "])".repeat(levels));
    assert_eq!(render_target(&forest), expected);
}

#[test]
fn deep_outline_compressed_reproduces_input() {
    let html = deep_b(DEPTH);
    let forest = parse_strict(&html);
    assert_eq!(render_outline(&forest, true), html);
}

#[test]
fn deep_outline_indented() {
    let forest = parse_strict(&deep_b(DEPTH));
    let outline = render_outline(&forest, false);

    let lines: Vec<&str> = outline.lines().collect();
    assert_eq!(lines.len(), 2 * DEPTH);
    assert_eq!(lines[0], "<b>");
    let innermost = format!("{}<b>", "   ".repeat(DEPTH - 1));
    assert_eq!(lines[DEPTH - 1], innermost);
    assert_eq!(lines[2 * DEPTH - 1], "</b>");
}

#[test]
fn deep_pretty() {
    let forest = parse_strict(&deep_b(DEPTH));
    let pretty = render_pretty(&forest);

    let lines: Vec<&str> = pretty.lines().collect();
    assert_eq!(lines.len(), DEPTH);
    assert_eq!(lines[0], "b");
    let innermost = format!("{}└── b", "  ".repeat(DEPTH - 1));
    assert_eq!(lines[DEPTH - 1], innermost);
}
