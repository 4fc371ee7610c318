//! Parameter block

use crate::{
    blocks::condition_header,
    condition::Condition,
    error::Result,
    substitution::normalize,
    xml::XmlEntity,
};
use serde::Serialize;

/// A `<param>` or bulk `<rosparam>` entry.
///
/// Bulk file loads carry a synthetic name marker, `(load)` or `(<command>)`,
/// instead of a parameter name.
#[derive(Debug, Clone, Serialize)]
pub struct ParamBlock {
    pub ns: String,
    pub name: String,
    pub value: String,
    pub conditions: Vec<Condition>,
}

impl ParamBlock {
    /// Build from a `<param>` element. The value is the first non-empty of
    /// `value`, `textfile`, `binfile`, `command`, in that priority order.
    pub fn from_entity(entity: &XmlEntity, conditions: Vec<Condition>, ns: &str) -> Self {
        let value = ["value", "textfile", "binfile", "command"]
            .into_iter()
            .find_map(|attr| entity.non_empty_attr(attr))
            .unwrap_or_default()
            .to_string();

        Self {
            ns: ns.to_string(),
            name: entity.attr_or_empty("name"),
            value,
            conditions,
        }
    }

    /// Build from a `<rosparam>` element.
    ///
    /// A `file` attribute means a bulk load: the file path becomes the value
    /// and the name records the rosparam command. A `param` attribute means a
    /// single inline parameter whose value is the element text.
    pub fn from_rosparam(entity: &XmlEntity, conditions: Vec<Condition>, ns: &str) -> Self {
        let mut ns = ns.to_string();
        if let Some(own) = entity.non_empty_attr("ns") {
            ns.push_str(own);
            ns.push('/');
        }

        let (name, value) = if let Some(file) = entity.non_empty_attr("file") {
            let name = match entity.non_empty_attr("command") {
                Some(command) => format!("({command})"),
                None => "(load)".to_string(),
            };
            (name, file.to_string())
        } else if let Some(param) = entity.non_empty_attr("param") {
            (
                param.to_string(),
                entity.text().unwrap_or_default().to_string(),
            )
        } else {
            (String::new(), String::new())
        };

        Self {
            ns,
            name,
            value,
            conditions,
        }
    }

    pub fn render(&self, show_conditions: bool) -> Result<String> {
        let (mut rep, tab) = condition_header(&self.conditions, show_conditions)?;
        rep.push_str(&format!(
            "{tab}{}{} = {}",
            normalize(&self.ns)?,
            normalize(&self.name)?,
            normalize(&self.value)?
        ));
        Ok(rep)
    }
}
