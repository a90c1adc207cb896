use serde::Deserialize;

use super::null_default;

/// Markdown syntax tree node used for descriptions, captions and tag texts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RichText {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: NodeKind,
    pub value: Option<String>,
    pub url: Option<String>,
    pub identifier: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub children: Vec<RichText>,
}

/// Node types the renderer distinguishes. Everything else is [`NodeKind::Other`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Root,
    Paragraph,
    Text,
    Link,
    LinkReference,
    #[default]
    #[serde(other)]
    Other,
}

impl RichText {
    fn node(kind: NodeKind, children: Vec<RichText>) -> Self {
        Self {
            kind,
            children,
            ..Self::default()
        }
    }

    pub fn root(children: Vec<RichText>) -> Self {
        Self::node(NodeKind::Root, children)
    }

    pub fn paragraph(children: Vec<RichText>) -> Self {
        Self::node(NodeKind::Paragraph, children)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn link(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Link,
            url: Some(url.into()),
            children: vec![Self::text(label)],
            ..Self::default()
        }
    }

    /// Single-paragraph document holding one text node.
    pub fn plain(value: impl Into<String>) -> Self {
        Self::root(vec![Self::paragraph(vec![Self::text(value)])])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_markdown_tree() {
        let tree: RichText = serde_json::from_value(json!({
            "type": "root",
            "children": [{
                "type": "paragraph",
                "children": [
                    { "type": "text", "value": "see " },
                    { "type": "linkReference", "identifier": "foo", "children": [
                        { "type": "text", "value": "Foo" }
                    ]},
                    { "type": "emphasis", "children": [] }
                ]
            }]
        }))
        .unwrap();

        let inline = &tree.children[0].children;
        assert_eq!(inline[0].kind, NodeKind::Text);
        assert_eq!(inline[1].kind, NodeKind::LinkReference);
        assert_eq!(inline[1].identifier.as_deref(), Some("foo"));
        assert_eq!(inline[2].kind, NodeKind::Other);
    }

    #[test]
    fn plain_builds_single_paragraph() {
        let tree = RichText::plain("hi");
        assert_eq!(tree.kind, NodeKind::Root);
        assert_eq!(tree.children[0].children[0].value.as_deref(), Some("hi"));
    }
}
