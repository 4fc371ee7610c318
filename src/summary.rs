//! Per-file launch summary

use crate::{
    blocks::{ArgBlock, IncludeBlock, NodeBlock, ParamBlock},
    error::Result,
    render,
};
use serde::Serialize;

/// Everything extracted from one launch file, in document order per kind.
///
/// Flat per-file container: cross-file structure is represented only by the
/// include blocks plus the crawl driver's worklist. Blocks are appended during
/// the walk and read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchSummary {
    pub title: String,
    pub args: Vec<ArgBlock>,
    pub params: Vec<ParamBlock>,
    pub nodes: Vec<NodeBlock>,
    pub includes: Vec<IncludeBlock>,
}

impl LaunchSummary {
    /// An empty summary. Also serves as the placeholder the crawl driver
    /// substitutes for files it could not read or parse.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            args: Vec::new(),
            params: Vec::new(),
            nodes: Vec::new(),
            includes: Vec::new(),
        }
    }

    /// Indented sectioned text report
    pub fn render_text(&self) -> Result<String> {
        render::text::render(self)
    }

    /// Graphviz record node plus one edge per include
    pub fn render_graph_node(&self) -> Result<String> {
        render::dot::render_graph_node(self)
    }

    /// Raw include file references, in document order, for the worklist
    pub fn include_files(&self) -> impl Iterator<Item = &str> {
        self.includes.iter().map(|include| include.file.as_str())
    }
}
