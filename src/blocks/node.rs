//! Node (process) block

use crate::{
    blocks::condition_header,
    condition::Condition,
    error::Result,
    substitution::normalize,
    xml::XmlEntity,
};
use serde::Serialize;

/// A `<node>` element: a process launched from a package.
///
/// A node is also a namespace scope: its children are walked under
/// `name + "/" + ns` (name-first, see the walker).
#[derive(Debug, Clone, Serialize)]
pub struct NodeBlock {
    pub ns: String,
    /// Empty for anonymous nodes
    pub name: String,
    pub pkg: String,
    pub node_type: String,
    pub conditions: Vec<Condition>,
}

impl NodeBlock {
    pub fn from_entity(entity: &XmlEntity, conditions: Vec<Condition>, ns: &str) -> Self {
        let mut ns = ns.to_string();
        if let Some(own) = entity.non_empty_attr("ns") {
            ns.push_str(own);
            ns.push('/');
        }

        Self {
            ns,
            name: entity.attr_or_empty("name"),
            pkg: entity.attr_or_empty("pkg"),
            node_type: entity.attr_or_empty("type"),
            conditions,
        }
    }

    /// Namespace for this node's child elements: `name + "/" + ns`.
    ///
    /// An anonymous node yields `"/" + ns`, a malformed-looking prefix that is
    /// preserved deliberately (see DESIGN.md).
    pub fn child_namespace(&self) -> String {
        format!("{}/{}", self.name, self.ns)
    }

    pub fn render(&self, show_conditions: bool) -> Result<String> {
        let (mut rep, tab) = condition_header(&self.conditions, show_conditions)?;
        rep.push_str(&format!(
            "{tab}{}{}: {}/{}",
            normalize(&self.ns)?,
            normalize(&self.name)?,
            normalize(&self.pkg)?,
            normalize(&self.node_type)?
        ));
        Ok(rep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(xml: &str, ns: &str) -> NodeBlock {
        let doc = roxmltree::Document::parse(xml).unwrap();
        NodeBlock::from_entity(&XmlEntity::new(doc.root_element()), Vec::new(), ns)
    }

    #[test]
    fn test_named_node() {
        let node = build(r#"<node name="talker" pkg="demo" type="talker_node" />"#, "");
        assert_eq!(node.render(true).unwrap(), "talker: demo/talker_node");
        assert_eq!(node.child_namespace(), "talker/");
    }

    #[test]
    fn test_own_namespace_attribute() {
        let node = build(r#"<node name="talker" pkg="demo" type="t" ns="left" />"#, "arm/");
        assert_eq!(node.ns, "arm/left/");
        assert_eq!(node.child_namespace(), "talker/arm/left/");
    }

    #[test]
    fn test_anonymous_node() {
        let node = build(r#"<node pkg="demo" type="t" />"#, "arm/");
        assert_eq!(node.name, "");
        assert_eq!(node.render(true).unwrap(), "arm/: demo/t");
        // Preserved edge case: empty name still contributes its joining slash
        assert_eq!(node.child_namespace(), "/arm/");
    }

    #[test]
    fn test_missing_pkg_is_empty() {
        let node = build(r#"<node name="n" type="t" />"#, "");
        assert_eq!(node.pkg, "");
        assert_eq!(node.render(true).unwrap(), "n: /t");
    }
}
