//! Rich-text description rendering into HTML fragments.

use crate::model::{NodeKind, RichText};

const LINE_BREAK: &str = "<br>";

/// Render the first block of a description tree as an HTML fragment.
///
/// Only text and link nodes produce output. Newlines become `<br>`.
pub fn render_description(tree: Option<&RichText>) -> String {
    let Some(block) = tree.and_then(|tree| tree.children.first()) else {
        return String::new();
    };

    block.children.iter().map(render_inline).collect()
}

fn render_inline(node: &RichText) -> String {
    let fragment = match node.kind {
        NodeKind::Text => node.value.clone().unwrap_or_default(),
        NodeKind::Link | NodeKind::LinkReference => {
            let label = node
                .children
                .first()
                .and_then(|child| child.value.as_deref())
                .unwrap_or_default();
            format!(r#"<a href="{}">{}</a>"#, link_target(node), label)
        }
        NodeKind::Root | NodeKind::Paragraph | NodeKind::Other => String::new(),
    };

    fragment.replace('\n', LINE_BREAK)
}

// Unresolved references point at the in-page anchor of their identifier.
fn link_target(node: &RichText) -> String {
    match (&node.url, &node.identifier) {
        (Some(url), _) => url.clone(),
        (None, Some(identifier)) => format!("#{identifier}"),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_tree_renders_empty() {
        assert_eq!(render_description(None), "");
        assert_eq!(render_description(Some(&RichText::root(vec![]))), "");
    }

    #[test]
    fn newlines_become_line_breaks() {
        assert_eq!(render_description(Some(&RichText::plain("a\nb"))), "a<br>b");
    }

    #[test]
    fn links_render_as_anchors() {
        let tree = RichText::root(vec![RichText::paragraph(vec![RichText::link("/x", "here")])]);
        assert_eq!(render_description(Some(&tree)), r#"<a href="/x">here</a>"#);
    }

    #[test]
    fn mixed_inline_nodes_concatenate_in_order() {
        let emphasis = RichText {
            kind: NodeKind::Other,
            children: vec![RichText::text("ignored")],
            ..RichText::default()
        };
        let tree = RichText::root(vec![
            RichText::paragraph(vec![
                RichText::text("Use "),
                RichText::link("#foo", "foo"),
                emphasis,
                RichText::text(" now."),
            ]),
            RichText::paragraph(vec![RichText::text("second block is skipped")]),
        ]);
        assert_eq!(
            render_description(Some(&tree)),
            r##"Use <a href="#foo">foo</a> now."##
        );
    }

    #[test]
    fn link_reference_falls_back_to_identifier() {
        let reference = RichText {
            kind: NodeKind::LinkReference,
            identifier: Some("vector".to_string()),
            children: vec![RichText::text("Vector")],
            ..RichText::default()
        };
        let tree = RichText::root(vec![RichText::paragraph(vec![reference])]);
        assert_eq!(
            render_description(Some(&tree)),
            r##"<a href="#vector">Vector</a>"##
        );
    }

    #[test]
    fn link_without_children_has_empty_label() {
        let link = RichText {
            kind: NodeKind::Link,
            url: Some("/y".to_string()),
            ..RichText::default()
        };
        let tree = RichText::root(vec![RichText::paragraph(vec![link])]);
        assert_eq!(render_description(Some(&tree)), r#"<a href="/y"></a>"#);
    }
}
