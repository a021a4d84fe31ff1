/// Property-Based Tests for the markup parser and renderers
///
/// Uses `proptest` to generate random forests and verify that:
/// - rendering a forest as markup (compressed or indented) and parsing it back
///   reproduces the same forest
/// - incidental whitespace between tags never changes the parse
/// - Luna notation agrees with an independently written reference renderer
/// - truncating a non-empty document always fails instead of producing a tree
use luna_core::{parse, render_outline, render_pretty, render_target, ContainerTag, Forest, Node};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_container_tag() -> impl Strategy<Value = ContainerTag> {
    prop_oneof![
        Just(ContainerTag::Div),
        Just(ContainerTag::P),
        Just(ContainerTag::B),
    ]
}

/// Generate a node up to 5 levels deep with at most 4 children per container.
fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        Just(Node::Leaf),
        arb_container_tag().prop_map(|tag| Node::container(tag, vec![])),
    ];
    leaf.prop_recursive(5, 64, 4, |inner| {
        (arb_container_tag(), prop::collection::vec(inner, 0..4))
            .prop_map(|(tag, children)| Node::container(tag, children))
    })
}

fn arb_forest() -> impl Strategy<Value = Forest> {
    prop::collection::vec(arb_node(), 0..4).prop_map(Forest::from)
}

/// Whitespace that may legally appear between tags.
fn arb_gap() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just("\t  \n".to_string()),
    ]
}

// ============================================================================
// Reference renderer
// ============================================================================

/// Luna notation built with `format!`/`join` rather than a shared buffer.
fn reference_luna(node: &Node) -> String {
    match node {
        Node::Container { tag, children } => {
            let args: Vec<String> = children.iter().map(reference_luna).collect();
            format!("{}([{}])", tag.to_string().to_uppercase(), args.join(", "))
        }
        Node::Leaf => "IMG({})".to_string(),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn compressed_outline_reparses(forest in arb_forest()) {
        let html = render_outline(&forest, true);
        prop_assert_eq!(parse(&html).unwrap(), forest);
    }

    #[test]
    fn indented_outline_reparses(forest in arb_forest()) {
        let html = render_outline(&forest, false);
        prop_assert_eq!(parse(&html).unwrap(), forest);
    }

    #[test]
    fn whitespace_between_tags_is_ignored(forest in arb_forest(), gap in arb_gap()) {
        let compact = render_outline(&forest, true);
        let spaced = compact.replace('>', &format!(">{gap}"));
        prop_assert_eq!(parse(&spaced).unwrap(), forest);
    }

    #[test]
    fn target_matches_reference(forest in arb_forest()) {
        let expected: String = forest.iter().map(reference_luna).collect();
        prop_assert_eq!(render_target(&forest), expected);
    }

    #[test]
    fn rendering_is_deterministic(forest in arb_forest()) {
        prop_assert_eq!(render_target(&forest), render_target(&forest));
        prop_assert_eq!(render_outline(&forest, false), render_outline(&forest, false));
        prop_assert_eq!(render_pretty(&forest), render_pretty(&forest));
    }

    #[test]
    fn pretty_has_one_line_per_node(forest in arb_forest()) {
        let pretty = render_pretty(&forest);
        let lines = if pretty.is_empty() { 0 } else { pretty.lines().count() };
        prop_assert_eq!(lines, forest.node_count());
    }

    #[test]
    fn dropping_last_closing_tag_never_parses(forest in arb_forest()) {
        let html = render_outline(&forest, true);
        prop_assume!(html.ends_with("</div>") || html.ends_with("</p>") || html.ends_with("</b>"));
        let cut = html.rfind("</").unwrap();
        prop_assert!(parse(&html[..cut]).is_err());
    }
}
