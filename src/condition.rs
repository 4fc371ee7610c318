//! Condition accumulation for if/unless attributes

use crate::{error::Result, substitution::normalize, xml::XmlEntity};
use serde::Serialize;

/// One enabling (`if`) or disabling (`unless`) condition, kept as raw
/// attribute text until render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub expr: String,
    pub negated: bool,
}

impl Condition {
    pub fn enabled_if(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            negated: false,
        }
    }

    pub fn unless(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            negated: true,
        }
    }

    fn render(&self) -> Result<String> {
        let expr = normalize(&self.expr)?;
        if self.negated {
            Ok(format!("!{expr}"))
        } else {
            Ok(expr)
        }
    }
}

/// Extend `ancestors` with the element's own `if`/`unless` attributes.
///
/// Returns a fresh sequence; the ancestor slice is never mutated, so sibling
/// walks cannot observe each other's conditions. Empty attribute values are
/// skipped like absent ones.
pub fn accumulate(ancestors: &[Condition], entity: &XmlEntity) -> Vec<Condition> {
    let mut conditions = ancestors.to_vec();
    if let Some(expr) = entity.non_empty_attr("if") {
        conditions.push(Condition::enabled_if(expr));
    }
    if let Some(expr) = entity.non_empty_attr("unless") {
        conditions.push(Condition::unless(expr));
    }
    conditions
}

/// Join a condition sequence into its display expression, e.g. `{a} & !{b}`.
pub fn condition_expr(conditions: &[Condition]) -> Result<String> {
    let rendered: Vec<String> = conditions
        .iter()
        .map(Condition::render)
        .collect::<Result<_>>()?;
    Ok(rendered.join(" & "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity_conditions(xml: &str, ancestors: &[Condition]) -> Vec<Condition> {
        let doc = roxmltree::Document::parse(xml).unwrap();
        accumulate(ancestors, &XmlEntity::new(doc.root_element()))
    }

    #[test]
    fn test_accumulate_if_and_unless() {
        let conds = entity_conditions(r#"<group if="$(arg a)" unless="$(arg b)" />"#, &[]);
        assert_eq!(
            conds,
            vec![
                Condition::enabled_if("$(arg a)"),
                Condition::unless("$(arg b)"),
            ]
        );
    }

    #[test]
    fn test_accumulate_extends_ancestors() {
        let ancestors = vec![Condition::enabled_if("$(arg outer)")];
        let conds = entity_conditions(r#"<group if="$(arg inner)" />"#, &ancestors);

        // Ordered extension of the ancestor sequence
        assert_eq!(conds.len(), 2);
        assert_eq!(conds[..1], ancestors[..]);
        assert_eq!(ancestors.len(), 1);
    }

    #[test]
    fn test_empty_attributes_are_skipped() {
        let conds = entity_conditions(r#"<group if="" unless="" />"#, &[]);
        assert!(conds.is_empty());
    }

    #[test]
    fn test_condition_expr_joins_and_negates() {
        let conds = vec![
            Condition::enabled_if("$(arg use_sim)"),
            Condition::unless("$(arg headless)"),
        ];
        assert_eq!(condition_expr(&conds).unwrap(), "{use_sim} & !{headless}");
    }

    #[test]
    fn test_condition_expr_empty() {
        assert_eq!(condition_expr(&[]).unwrap(), "");
    }
}
