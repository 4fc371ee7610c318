//! XML element wrapper

/// Thin wrapper over a roxmltree element node.
pub struct XmlEntity<'a, 'input> {
    node: roxmltree::Node<'a, 'input>,
}

impl<'a, 'input> XmlEntity<'a, 'input> {
    pub fn new(node: roxmltree::Node<'a, 'input>) -> Self {
        Self { node }
    }

    /// Element tag name (e.g. "node", "arg")
    pub fn tag(&self) -> &'a str {
        self.node.tag_name().name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    /// Attribute value, or the empty string when absent.
    /// Missing attributes are tolerated everywhere, never an error.
    pub fn attr_or_empty(&self, name: &str) -> String {
        self.node.attribute(name).unwrap_or_default().to_string()
    }

    /// Attribute value only when present with non-empty text.
    pub fn non_empty_attr(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name).filter(|v| !v.is_empty())
    }

    pub fn text(&self) -> Option<&'a str> {
        self.node.text()
    }

    /// Iterator over child elements, skipping text and comment nodes
    pub fn children(&self) -> impl Iterator<Item = XmlEntity<'a, 'input>> {
        self.node
            .children()
            .filter(|n| n.is_element())
            .map(XmlEntity::new)
    }
}
