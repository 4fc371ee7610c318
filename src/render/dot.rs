//! Graphviz record-node rendering
//!
//! Each summary becomes one `shape=record` node: a title cell plus one cell
//! per non-empty section, followed by a directed edge per include. Cell lines
//! are wrapped at a fixed column width, blank-padded so every line in a cell
//! aligns, and escaped for embedding in a dot string literal.

use crate::{error::Result, substitution::normalize, summary::LaunchSummary};

/// Column width cells are wrapped and padded to
const CELL_WIDTH: usize = 90;

pub fn render_graph_node(summary: &LaunchSummary) -> Result<String> {
    let mut cells = vec![build_cell(vec![summary.title.clone()])];

    let mut args = Vec::new();
    for arg in &summary.args {
        args.push(arg.render(true)?);
    }
    let mut params = Vec::new();
    for param in &summary.params {
        params.push(param.render(true)?);
    }
    let mut nodes = Vec::new();
    for node in &summary.nodes {
        nodes.push(node.render(true)?);
    }
    let mut includes = Vec::new();
    for include in &summary.includes {
        includes.push(include.render(true)?);
    }

    let sections = [
        ("args:", args),
        ("params:", params),
        ("nodes:", nodes),
        ("includes:", includes),
    ];
    for (label, rendered) in sections {
        if rendered.is_empty() {
            continue;
        }
        let mut lines = vec![label.to_string()];
        for entry in rendered {
            lines.extend(entry.lines().map(String::from));
        }
        cells.push(build_cell(lines));
    }

    let id = escape_id(&summary.title);
    let mut out = format!(
        "\"{id}\" [shape=record, label=\"{{{}}}\"];\n",
        cells.join("|")
    );
    for include in &summary.includes {
        out.push_str(&format!(
            "\"{id}\" -> \"{}\";\n",
            escape_id(&normalize(&include.file)?)
        ));
    }
    Ok(out)
}

/// Wrap, pad, and escape a cell's lines, joined with left-justified breaks.
fn build_cell(lines: Vec<String>) -> String {
    let mut cell = String::new();
    for line in &lines {
        for wrapped in wrap_line(line, CELL_WIDTH) {
            cell.push_str(&escape_label(&pad_line(&wrapped, CELL_WIDTH)));
            cell.push_str("\\l");
        }
    }
    cell
}

/// Break a long line into continuation lines prefixed with the original
/// line's leading whitespace.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() <= width {
        return vec![line.to_string()];
    }

    let indent_len = chars
        .iter()
        .take_while(|c| **c == ' ')
        .count()
        .min(width - 1);
    let indent: String = " ".repeat(indent_len);
    let chunk = width - indent_len;

    let mut lines: Vec<String> = vec![chars[..width].iter().collect()];
    let mut pos = width;
    while pos < chars.len() {
        let end = (pos + chunk).min(chars.len());
        let mut continuation = indent.clone();
        continuation.extend(chars[pos..end].iter());
        lines.push(continuation);
        pos = end;
    }
    lines
}

/// Blank-pad to the cell width so all lines in a cell align
fn pad_line(line: &str, width: usize) -> String {
    let len = line.chars().count();
    let mut padded = line.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    padded
}

/// Escape the record-label metacharacters
fn escape_label(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '"' => out.push_str("\\\""),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a quoted node identifier
fn escape_id(id: &str) -> String {
    id.replace('"', "\\\"")
}
