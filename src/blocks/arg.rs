//! Argument block

use crate::{
    blocks::condition_header,
    condition::Condition,
    error::Result,
    substitution::normalize,
    xml::XmlEntity,
};
use serde::Serialize;

/// An argument's value: exactly one of no value, a literal `value`
/// attribute, or a `default` attribute holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgValue {
    Empty,
    Literal(String),
    Default(String),
}

/// An `<arg>` declaration, either top-level or passed to an include.
#[derive(Debug, Clone, Serialize)]
pub struct ArgBlock {
    pub name: String,
    pub value: ArgValue,
    pub conditions: Vec<Condition>,
}

impl ArgBlock {
    /// A literal `value` wins over `default` when both are present.
    /// Empty attribute values fall through like absent ones.
    pub fn from_entity(entity: &XmlEntity, conditions: Vec<Condition>) -> Self {
        let value = if let Some(v) = entity.non_empty_attr("value") {
            ArgValue::Literal(v.to_string())
        } else if let Some(v) = entity.non_empty_attr("default") {
            ArgValue::Default(v.to_string())
        } else {
            ArgValue::Empty
        };

        Self {
            name: entity.attr_or_empty("name"),
            value,
            conditions,
        }
    }

    pub fn render(&self, show_conditions: bool) -> Result<String> {
        let (mut rep, tab) = condition_header(&self.conditions, show_conditions)?;
        let name = normalize(&self.name)?;
        match &self.value {
            ArgValue::Literal(v) => rep.push_str(&format!("{tab}{name} = {}", normalize(v)?)),
            ArgValue::Default(v) => rep.push_str(&format!("{tab}{name} (= {})", normalize(v)?)),
            ArgValue::Empty => rep.push_str(&format!("{tab}{name}")),
        }
        Ok(rep)
    }
}
