//! Worklist-driven crawl over a launch file tree
//!
//! The driver owns the worklist and the processed set; the core parses one
//! file at a time to completion. A file that cannot be read or parsed gets
//! one diagnostic line and an empty placeholder summary, and the crawl
//! continues with the remaining worklist.

use crate::{
    error::Result,
    parse_document,
    resolve::ResolveContext,
    substitution::normalize,
    summary::LaunchSummary,
};
use std::{
    collections::{HashSet, VecDeque},
    path::{Path, PathBuf},
};

/// Parse `root` and, when `follow_includes` is set, every launch file
/// reachable through resolvable include references. Each file is processed
/// once; summaries are returned in discovery order.
///
/// Included files are titled by their normalized reference (not the resolved
/// filesystem path) so graph edges land on the included file's node.
pub fn crawl(root: &Path, ctx: &ResolveContext, follow_includes: bool) -> Vec<LaunchSummary> {
    let mut worklist: VecDeque<(String, PathBuf)> = VecDeque::new();
    worklist.push_back((root.display().to_string(), root.to_path_buf()));
    let mut processed: HashSet<PathBuf> = HashSet::new();
    let mut summaries = Vec::new();

    while let Some((title, path)) = worklist.pop_front() {
        if !processed.insert(path.clone()) {
            continue;
        }

        log::info!("processing {}", path.display());
        let summary = match summarize_file(&path, &title) {
            Ok(summary) => summary,
            Err(err) => {
                log::warn!("could not process {}: {err}", path.display());
                LaunchSummary::new(title)
            }
        };

        if follow_includes {
            for raw in summary.include_files() {
                let next_title = match normalize(raw) {
                    Ok(title) => title,
                    Err(err) => {
                        log::warn!("skipping include '{raw}': {err}");
                        continue;
                    }
                };
                match ctx.resolve_file_ref(raw) {
                    Ok(next_path) => worklist.push_back((next_title, next_path)),
                    Err(err) => log::warn!("cannot resolve include '{raw}': {err}"),
                }
            }
        }
        summaries.push(summary);
    }

    summaries
}

/// Read, XML-parse, and summarize a single launch file.
pub fn summarize_file(path: &Path, title: &str) -> Result<LaunchSummary> {
    let content = std::fs::read_to_string(path)?;
    let doc = roxmltree::Document::parse(&content)?;
    parse_document(&doc, title)
}
