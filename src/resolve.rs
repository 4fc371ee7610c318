//! Include-reference resolution for the crawl driver
//!
//! Raw include references may embed `$(arg name)` and `$(find pkg)` markers.
//! Before a reference can be enqueued as a new file to parse, the driver
//! substitutes them against an explicit [`ResolveContext`]: a variable mapping
//! plus a package-path resolver. This is distinct from display normalization
//! (`substitution::normalize`), which never affects resolution.

use crate::{error::ResolveError, substitution::split_marker_body};
use std::{collections::HashMap, path::PathBuf};

/// Capability to map a package name to its root directory.
pub trait PackageResolver {
    fn package_path(&self, name: &str) -> Option<PathBuf>;
}

impl PackageResolver for HashMap<String, PathBuf> {
    fn package_path(&self, name: &str) -> Option<PathBuf> {
        self.get(name).cloned()
    }
}

/// Resolution state threaded explicitly through the driver — never global.
pub struct ResolveContext<'a> {
    vars: &'a HashMap<String, String>,
    packages: &'a dyn PackageResolver,
}

impl<'a> ResolveContext<'a> {
    pub fn new(vars: &'a HashMap<String, String>, packages: &'a dyn PackageResolver) -> Self {
        Self { vars, packages }
    }

    /// Substitute all markers in a raw include reference, yielding a real path.
    pub fn resolve_file_ref(&self, raw: &str) -> Result<PathBuf, ResolveError> {
        let mut out = String::with_capacity(raw.len());
        let mut rest = raw;
        while let Some(open) = rest.find("$(") {
            out.push_str(&rest[..open]);
            let body_start = open + 2;
            let close = rest[body_start..]
                .find(')')
                .ok_or_else(|| ResolveError::Unterminated(raw.to_string()))?;
            let body = &rest[body_start..body_start + close];
            let (keyword, subject) = split_marker_body(body);
            match keyword {
                "find" => {
                    let path = self
                        .packages
                        .package_path(subject)
                        .ok_or_else(|| ResolveError::PackageNotFound(subject.to_string()))?;
                    out.push_str(&path.to_string_lossy());
                }
                "arg" => {
                    let value = self
                        .vars
                        .get(subject)
                        .ok_or_else(|| ResolveError::UndefinedVariable(subject.to_string()))?;
                    out.push_str(value);
                }
                other => return Err(ResolveError::UnsupportedKeyword(other.to_string())),
            }
            rest = &rest[body_start + close + 1..];
        }
        out.push_str(rest);
        Ok(PathBuf::from(out))
    }
}
