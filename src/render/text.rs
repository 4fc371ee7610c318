//! Indented text report

use crate::{condition::condition_expr, error::Result, summary::LaunchSummary};
use indexmap::IndexMap;

/// Render the sectioned report: title, then args (grouped by condition
/// expression), params, nodes, and includes.
pub fn render(summary: &LaunchSummary) -> Result<String> {
    let mut out = String::new();
    out.push_str(&summary.title);
    out.push('\n');

    out.push_str("\nargs:\n\n");
    // Group args under a shared condition header, first-seen order
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for arg in &summary.args {
        let expr = condition_expr(&arg.conditions)?;
        groups.entry(expr).or_default().push(arg.render(false)?);
    }
    for (expr, entries) in &groups {
        if expr.is_empty() {
            for entry in entries {
                out.push_str(entry);
                out.push('\n');
            }
        } else {
            out.push_str("if ");
            out.push_str(expr);
            out.push('\n');
            for entry in entries {
                out.push_str("  ");
                out.push_str(entry);
                out.push('\n');
            }
        }
    }

    out.push_str("\nparams:\n\n");
    for param in &summary.params {
        out.push_str(&param.render(true)?);
        out.push('\n');
    }

    out.push_str("\nnodes:\n\n");
    for node in &summary.nodes {
        out.push_str(&node.render(true)?);
        out.push('\n');
    }

    out.push_str("\nincludes:\n\n");
    for include in &summary.includes {
        out.push_str(&include.render(true)?);
        out.push('\n');
    }

    Ok(out)
}
