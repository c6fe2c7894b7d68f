//! Declarative node tree

use rustc_hash::FxHashMap;

/// Kind of a declarative node.
///
/// `Other` carries kinds this version does not know; the renderer decides
/// whether a registered component exists for them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Body,
    Card,
    Button,
    Navbar,
    Grid,
    Text,
    Other(String),
}

impl NodeKind {
    /// Stable kind name used for component registry lookups
    pub fn name(&self) -> &str {
        match self {
            NodeKind::Body => "body",
            NodeKind::Card => "card",
            NodeKind::Button => "button",
            NodeKind::Navbar => "navbar",
            NodeKind::Grid => "grid",
            NodeKind::Text => "text",
            NodeKind::Other(name) => name,
        }
    }
}

/// One node in a declarative UI tree
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub props: FxHashMap<String, String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            props: FxHashMap::default(),
            children: Vec::new(),
        }
    }

    /// Set a string prop
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Append a child node
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn get_prop(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }
}

/// Root container node
pub fn body() -> Node {
    Node::new(NodeKind::Body)
}

/// Elevated surface container
pub fn card() -> Node {
    Node::new(NodeKind::Card)
}

/// Labeled action button
pub fn button(label: impl Into<String>) -> Node {
    Node::new(NodeKind::Button).prop("label", label)
}

/// Top navigation bar
pub fn navbar() -> Node {
    Node::new(NodeKind::Navbar)
}

/// Column grid container
pub fn grid(cols: u8) -> Node {
    Node::new(NodeKind::Grid).prop("cols", cols.to_string())
}

/// Plain text content
pub fn text(content: impl Into<String>) -> Node {
    Node::new(NodeKind::Text).prop("content", content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chained_builder_produces_expected_tree() {
        let tree = body()
            .child(navbar().prop("title", "Lucent"))
            .child(grid(2).children([card().child(text("a")), card().child(text("b"))]));

        assert_eq!(tree.kind, NodeKind::Body);
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[1].get_prop("cols"), Some("2"));
        assert_eq!(tree.children[1].children.len(), 2);
    }

    #[test]
    fn test_button_carries_its_label() {
        let node = button("Save");
        assert_eq!(node.get_prop("label"), Some("Save"));
    }

    #[test]
    fn test_other_kind_keeps_its_name() {
        let node = Node::new(NodeKind::Other("carousel".to_string()));
        assert_eq!(node.kind.name(), "carousel");
    }
}
