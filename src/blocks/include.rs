//! Include block

use crate::{
    blocks::{condition_header, ArgBlock},
    condition::Condition,
    error::Result,
    substitution::normalize,
    xml::XmlEntity,
};
use serde::Serialize;

/// An `<include>` of another launch file.
///
/// The file reference is kept raw; substitution markers survive until render
/// time (display) or until the crawl driver resolves them (worklist).
#[derive(Debug, Clone, Serialize)]
pub struct IncludeBlock {
    pub ns: String,
    pub file: String,
    /// Arguments passed down to the included file, in document order
    pub args: Vec<ArgBlock>,
    pub conditions: Vec<Condition>,
}

impl IncludeBlock {
    pub fn from_entity(entity: &XmlEntity, conditions: Vec<Condition>, ns: &str) -> Self {
        let mut ns = ns.to_string();
        if let Some(own) = entity.non_empty_attr("ns") {
            ns.push_str(own);
            ns.push('/');
        }

        // Child args are independent of the enclosing condition chain
        let args = entity
            .children()
            .filter(|child| child.tag() == "arg")
            .map(|child| ArgBlock::from_entity(&child, Vec::new()))
            .collect();

        Self {
            ns,
            file: entity.attr_or_empty("file"),
            args,
            conditions,
        }
    }

    pub fn render(&self, show_conditions: bool) -> Result<String> {
        let (mut rep, tab) = condition_header(&self.conditions, show_conditions)?;
        rep.push_str(&format!("{tab}{}", normalize(&self.file)?));
        for arg in &self.args {
            rep.push_str(&format!("\n{tab}  {}", arg.render(true)?));
        }
        Ok(rep)
    }
}
