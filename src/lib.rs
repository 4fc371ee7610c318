//! launch_mapper library
//!
//! Parses ROS launch XML files into per-file [`LaunchSummary`] models and
//! renders them as indented text reports or a Graphviz include graph. The
//! walk preserves conditional structure (`if`/`unless` chains) and namespace
//! scoping (`group` and `node` scopes) and tolerates malformed input: missing
//! attributes become empty fields, unreadable files become empty summaries at
//! the crawl layer.

pub mod blocks;
pub mod condition;
pub mod crawl;
pub mod error;
pub mod render;
pub mod resolve;
pub mod substitution;
pub mod summary;
pub mod xml;

use blocks::{ArgBlock, IncludeBlock, NodeBlock, ParamBlock};
use condition::{accumulate, Condition};
use error::{ParseError, Result};
use xml::XmlEntity;

pub use crawl::{crawl, summarize_file};
pub use resolve::{PackageResolver, ResolveContext};
pub use summary::LaunchSummary;

/// Build a summary from a parsed XML tree. The root element must be
/// `<launch>`; this is the only shape of tree the core rejects.
pub fn parse_document(doc: &roxmltree::Document, title: impl Into<String>) -> Result<LaunchSummary> {
    let root = doc.root_element();
    if root.tag_name().name() != "launch" {
        return Err(ParseError::MalformedRoot {
            found: root.tag_name().name().to_string(),
        });
    }

    let mut walker = LaunchWalker {
        summary: LaunchSummary::new(title),
    };
    for child in XmlEntity::new(root).children() {
        walker.walk(&child, &[], "");
    }
    Ok(walker.summary)
}

/// Convenience wrapper: XML-parse a string, then build its summary.
pub fn parse_launch_str(content: &str, title: &str) -> Result<LaunchSummary> {
    let doc = roxmltree::Document::parse(content)?;
    parse_document(&doc, title)
}

/// Recursive-descent classifier threading condition and namespace state.
struct LaunchWalker {
    summary: LaunchSummary,
}

impl LaunchWalker {
    /// Classify one element and recurse through scoping constructs. Each call
    /// receives freshly accumulated condition and namespace values; nothing
    /// is shared between sibling walks.
    fn walk(&mut self, entity: &XmlEntity, conditions: &[Condition], ns: &str) {
        let conds = accumulate(conditions, entity);
        match entity.tag() {
            "arg" => self.summary.args.push(ArgBlock::from_entity(entity, conds)),
            "param" => self
                .summary
                .params
                .push(ParamBlock::from_entity(entity, conds, ns)),
            "rosparam" => self
                .summary
                .params
                .push(ParamBlock::from_rosparam(entity, conds, ns)),
            "node" => {
                let node = NodeBlock::from_entity(entity, conds, ns);
                let child_ns = node.child_namespace();
                // Children inherit the ancestor chain, not the node's own
                // if/unless; their blocks land before the node's own.
                for child in entity.children() {
                    self.walk(&child, conditions, &child_ns);
                }
                self.summary.nodes.push(node);
            }
            "include" => self
                .summary
                .includes
                .push(IncludeBlock::from_entity(entity, conds, ns)),
            "group" => {
                let ns = match entity.non_empty_attr("ns") {
                    Some(own) => format!("{ns}{own}/"),
                    None => ns.to_string(),
                };
                for child in entity.children() {
                    self.walk(&child, &conds, &ns);
                }
            }
            other => {
                // Unrecognized wrappers drop their structured descendants
                log::debug!("ignoring element <{other}>");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::ArgValue;

    #[test]
    fn test_malformed_root_is_rejected() {
        let err = parse_launch_str("<robot name=\"r2\" />", "bad.xml").unwrap_err();
        assert!(matches!(err, ParseError::MalformedRoot { found } if found == "robot"));
    }

    #[test]
    fn test_basic_classification() {
        let xml = r#"<launch>
            <arg name="rate" default="10" />
            <param name="use_sim_time" value="true" />
            <node name="talker" pkg="demo" type="talker_node" />
            <include file="other.launch" />
        </launch>"#;
        let summary = parse_launch_str(xml, "t.launch").unwrap();

        assert_eq!(summary.args.len(), 1);
        assert_eq!(summary.params.len(), 1);
        assert_eq!(summary.nodes.len(), 1);
        assert_eq!(summary.includes.len(), 1);
        assert_eq!(summary.args[0].value, ArgValue::Default("10".to_string()));
    }

    #[test]
    fn test_group_namespace_and_node_scope() {
        let xml = r#"<launch>
            <group ns="foo">
                <node name="bar" pkg="p" type="t">
                    <param name="rate" value="1" />
                </node>
            </group>
        </launch>"#;
        let summary = parse_launch_str(xml, "t.launch").unwrap();

        // Node namespace is the group scope; its child sees name-first scope
        assert_eq!(summary.nodes[0].ns, "foo/");
        assert_eq!(summary.params[0].ns, "bar/foo/");
    }

    #[test]
    fn test_anonymous_node_child_namespace() {
        let xml = r#"<launch>
            <group ns="foo">
                <node pkg="p" type="t">
                    <param name="rate" value="1" />
                </node>
            </group>
        </launch>"#;
        let summary = parse_launch_str(xml, "t.launch").unwrap();
        assert_eq!(summary.params[0].ns, "/foo/");
    }

    #[test]
    fn test_group_conditions_accumulate_downward() {
        let xml = r#"<launch>
            <group if="$(arg a)">
                <group unless="$(arg b)">
                    <arg name="x" value="1" if="$(arg c)" />
                </group>
            </group>
        </launch>"#;
        let summary = parse_launch_str(xml, "t.launch").unwrap();

        let conds = &summary.args[0].conditions;
        assert_eq!(conds.len(), 3);
        assert_eq!(conds[0], Condition::enabled_if("$(arg a)"));
        assert_eq!(conds[1], Condition::unless("$(arg b)"));
        assert_eq!(conds[2], Condition::enabled_if("$(arg c)"));
    }

    #[test]
    fn test_node_children_skip_the_nodes_own_conditions() {
        let xml = r#"<launch>
            <group if="$(arg outer)">
                <node name="n" pkg="p" type="t" if="$(arg gated)">
                    <param name="rate" value="1" />
                </node>
            </group>
        </launch>"#;
        let summary = parse_launch_str(xml, "t.launch").unwrap();

        assert_eq!(
            summary.nodes[0].conditions,
            vec![
                Condition::enabled_if("$(arg outer)"),
                Condition::enabled_if("$(arg gated)"),
            ]
        );
        assert_eq!(
            summary.params[0].conditions,
            vec![Condition::enabled_if("$(arg outer)")]
        );
    }

    #[test]
    fn test_node_children_appear_before_the_node() {
        let xml = r#"<launch>
            <node name="outer" pkg="p" type="t">
                <node name="inner" pkg="p" type="t" />
            </node>
        </launch>"#;
        let summary = parse_launch_str(xml, "t.launch").unwrap();

        let names: Vec<_> = summary.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["inner", "outer"]);
    }

    #[test]
    fn test_unrecognized_wrappers_drop_descendants() {
        let xml = r#"<launch>
            <machine name="remote">
                <node name="n" pkg="p" type="t" />
            </machine>
            <arg name="kept" value="1" />
        </launch>"#;
        let summary = parse_launch_str(xml, "t.launch").unwrap();

        assert!(summary.nodes.is_empty());
        assert_eq!(summary.args.len(), 1);
    }

    #[test]
    fn test_missing_required_attributes_become_empty_fields() {
        let xml = r#"<launch><node name="n" type="t" /></launch>"#;
        let summary = parse_launch_str(xml, "t.launch").unwrap();
        assert_eq!(summary.nodes[0].pkg, "");
    }
}
